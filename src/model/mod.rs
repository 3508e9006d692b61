//! Wire-level data structures exchanged with the scoring service.
//!
//! Every record keeps the fields this crate does not interpret in a flattened
//! `extra` map, so a profile fetched from the server can be written back whole.

pub mod contender;
pub mod contest;
pub mod tick;

pub use contender::*;
pub use contest::*;
pub use tick::*;

/// Server-assigned identifier of a contender profile.
pub type ContenderId = i64;

/// Server-assigned identifier of a problem.
pub type ProblemId = i64;

/// Server-assigned identifier of a tick record.
pub type TickId = i64;

/// Server-assigned identifier of a competition class.
pub type CompClassId = i64;

/// Server-assigned identifier of a contest.
pub type ContestId = i64;

/// Opaque registration credential identifying one simulated contender.
pub type RegistrationCode = String;
