//! Access to the remote scoring service.
//!
//! - [`RemoteService`] is the seam: one authenticated request in, a payload or a
//!   [`RemoteFailure`] out.
//! - [`HttpRemote`] implements it over reqwest.
//! - [`ScoringClient`] turns it into typed operations.
//! - [`mock::MockRemote`] scripts it for tests.

pub mod error;
pub mod http;
pub mod mock;
pub mod remote;
pub mod scoring;

pub use error::*;
pub use http::*;
pub use remote::*;
pub use scoring::*;
