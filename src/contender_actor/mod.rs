//! Contender-specific simulation logic: local state, actions, and the driver loop.

pub mod actions;
pub mod driver;
pub mod error;
pub mod names;
pub mod state;

pub use actions::*;
pub use driver::*;
pub use error::*;
pub use state::*;

use crate::clients::RemoteService;
use crate::config::{ConfigError, SimulatorConfig};

/// Creates the driver for the `index`-th contender of a run.
pub fn new<R: RemoteService>(
    registration_code: &str,
    remote: R,
    config: &SimulatorConfig,
    index: usize,
) -> Result<ContenderDriver<R>, ConfigError> {
    Ok(ContenderDriver::new(
        registration_code,
        remote,
        config.pacing(),
        config.sampler()?,
        config.seed_for(index),
    ))
}
