//! Runtime orchestration: starting and stopping the contender fleet, and
//! logging setup.

pub mod fleet;
pub mod tracing;

pub use self::fleet::*;
pub use self::tracing::*;
