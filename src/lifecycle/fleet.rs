use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::clients::{HttpRemote, RemoteService};
use crate::config::{ConfigError, SimulatorConfig};
use crate::contender_actor::{self, ContenderError, DriverExit};
use crate::model::RegistrationCode;

type DriverHandle = JoinHandle<Result<DriverExit, ContenderError>>;

/// Outcome counts of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetReport {
    /// Contenders that ran their loop until stopped.
    pub stopped: usize,
    /// Contenders that never reached their loop, or whose task panicked.
    pub failed: usize,
}

impl FleetReport {
    pub fn all_failed(&self) -> bool {
        self.stopped == 0 && self.failed > 0
    }
}

/// Runs one driver task per contender and stops them together.
///
/// `Fleet` is responsible for:
/// - **Lifecycle Management**: spawning every driver at once and joining them all
/// - **Dependency Wiring**: giving each driver its own authenticated transport
/// - **Shutdown**: owning the cancellation token every driver polls
///
/// # Example
///
/// ```ignore
/// let fleet = Fleet::http(&codes, &SimulatorConfig::default())?;
///
/// let stop = fleet.stop_handle();
/// tokio::spawn(async move {
///     let _ = tokio::signal::ctrl_c().await;
///     stop.cancel();
/// });
///
/// let report = fleet.wait().await;
/// ```
pub struct Fleet {
    stop: CancellationToken,
    handles: Vec<(RegistrationCode, DriverHandle)>,
}

impl Fleet {
    /// Starts one driver per registration code, using `remote_for` to build
    /// each contender's transport.
    ///
    /// Fails without spawning anything if `config` is invalid.
    pub fn start<R, F>(
        codes: &[RegistrationCode],
        config: &SimulatorConfig,
        mut remote_for: F,
    ) -> Result<Self, ConfigError>
    where
        R: RemoteService + 'static,
        F: FnMut(&str) -> R,
    {
        config.validate()?;

        let mut drivers = Vec::with_capacity(codes.len());
        for (index, code) in codes.iter().enumerate() {
            drivers.push(contender_actor::new(code, remote_for(code), config, index)?);
        }

        info!(contenders = drivers.len(), pacing = config.pacing, "Starting fleet");
        let stop = CancellationToken::new();
        let handles = drivers
            .into_iter()
            .map(|driver| {
                let code = driver.registration_code().to_string();
                let handle = tokio::spawn(driver.run(stop.clone()));
                (code, handle)
            })
            .collect();

        Ok(Self { stop, handles })
    }

    /// Starts a fleet talking HTTP to `config.base_url`.
    pub fn http(codes: &[RegistrationCode], config: &SimulatorConfig) -> Result<Self, ConfigError> {
        let base_url = config.base_url.clone();
        Self::start(codes, config, |code| HttpRemote::new(&base_url, code))
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// A clone of the token that stops every driver when cancelled.
    pub fn stop_handle(&self) -> CancellationToken {
        self.stop.clone()
    }

    /// Waits for every driver to finish. Without a stop request this only
    /// returns once every contender has failed.
    pub async fn wait(self) -> FleetReport {
        let mut report = FleetReport::default();

        for (code, handle) in self.handles {
            match handle.await {
                Ok(Ok(exit)) => {
                    debug!(contender = %code, actions = exit.actions, "Contender stopped");
                    report.stopped += 1;
                }
                // The driver already logged why it gave up.
                Ok(Err(_)) => report.failed += 1,
                Err(e) => {
                    error!(contender = %code, error = %e, "Contender task failed");
                    report.failed += 1;
                }
            }
        }

        info!(stopped = report.stopped, failed = report.failed, "Fleet shutdown complete");
        report
    }

    /// Requests a stop and waits for every driver.
    pub async fn shutdown(self) -> FleetReport {
        info!("Shutting down fleet...");
        self.stop.cancel();
        self.wait().await
    }
}
