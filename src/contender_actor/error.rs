//! Error types for the contender driver.

use thiserror::Error;

use crate::clients::RemoteFailure;

/// Failures that end a contender's run before its action loop starts.
///
/// Failures inside the loop never surface here: they abort a single action
/// and the contender carries on with the next one.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContenderError {
    /// Fetching the profile, classes, ticks or problems failed.
    #[error("Failed to load contender data: {0}")]
    Load(#[source] RemoteFailure),

    /// Entering the contest (profile write or contest fetch) failed.
    #[error("Failed to join contest: {0}")]
    Join(#[source] RemoteFailure),

    /// The service offers no competition class to enter.
    #[error("No competition classes available")]
    NoCompClasses,
}
