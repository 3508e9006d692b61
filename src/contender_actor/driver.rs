//! The per-contender state machine: load, join, then act until stopped.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use super::actions::{self, ActionSampler};
use super::error::ContenderError;
use super::names::random_name;
use super::state::ContenderState;
use crate::clients::{RemoteService, ScoringClient};
use crate::model::RegistrationCode;

/// Where a driver is in its lifecycle. Phases only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    Uninitialized,
    Loaded,
    Joined,
    Running,
    Stopped,
}

/// How long a contender waits between actions.
///
/// Each pause lasts `multiplier * U` units with `U` uniform in `[0, 1)`,
/// slept one unit at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    pub multiplier: f64,
    pub unit: Duration,
}

impl Pacing {
    pub fn new(multiplier: f64, unit: Duration) -> Self {
        Self { multiplier, unit }
    }

    /// Number of whole units to sleep before the next action.
    pub fn draw_steps<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let delay = self.multiplier * rng.random::<f64>();
        delay.max(0.0).ceil() as u64
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(100.0, Duration::from_secs(1))
    }
}

/// What a driver hands back once it has stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverExit {
    pub state: ContenderState,
    /// Actions that changed something on the server.
    pub actions: usize,
}

/// Drives one simulated contender against the scoring service.
pub struct ContenderDriver<R> {
    registration_code: RegistrationCode,
    scoring: ScoringClient<R>,
    pacing: Pacing,
    sampler: ActionSampler,
    rng: StdRng,
    phase: DriverPhase,
}

impl<R: RemoteService> ContenderDriver<R> {
    /// Creates a driver; nothing is sent until [`run`](Self::run).
    ///
    /// # Arguments
    /// * `registration_code` - The contender's credential
    /// * `remote` - Transport already authenticated for this contender
    /// * `pacing` - Delay between actions
    /// * `sampler` - Weighted choice of the next action
    /// * `seed` - Fixes every random choice of this driver when set
    pub fn new(
        registration_code: impl Into<RegistrationCode>,
        remote: R,
        pacing: Pacing,
        sampler: ActionSampler,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            registration_code: registration_code.into(),
            scoring: ScoringClient::new(remote),
            pacing,
            sampler,
            rng,
            phase: DriverPhase::Uninitialized,
        }
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn registration_code(&self) -> &str {
        &self.registration_code
    }

    /// Runs the contender until `stop` is cancelled.
    ///
    /// Returns early with an error if loading or joining fails; in that case
    /// the action loop never starts.
    #[instrument(skip_all, fields(contender = %self.registration_code))]
    pub async fn run(mut self, stop: CancellationToken) -> Result<DriverExit, ContenderError> {
        let mut state = match self.load().await {
            Ok(state) => state,
            Err(e) => return Err(self.fail(e)),
        };
        if let Err(e) = self.join(&mut state).await {
            return Err(self.fail(e));
        }

        let actions = self.run_loop(&mut state, &stop).await;
        Ok(DriverExit { state, actions })
    }

    /// Fetches profile, classes, ticks and problems, in that order.
    pub async fn load(&mut self) -> Result<ContenderState, ContenderError> {
        let contender = self
            .scoring
            .find_contender(&self.registration_code)
            .await
            .map_err(ContenderError::Load)?;
        let comp_classes = self
            .scoring
            .comp_classes()
            .await
            .map_err(ContenderError::Load)?;
        let ticks = self.scoring.ticks().await.map_err(ContenderError::Load)?;
        let problems = self.scoring.problems().await.map_err(ContenderError::Load)?;

        let state = ContenderState::from_load(
            self.registration_code.clone(),
            contender,
            comp_classes,
            ticks,
            problems,
        );
        self.advance(DriverPhase::Loaded);
        debug!(
            todo = state.problems_todo().len(),
            ticked = state.problems_ticked().len(),
            "Loaded"
        );
        Ok(state)
    }

    /// Picks a name and class, writes the profile, then fetches the contest.
    pub async fn join(&mut self, state: &mut ContenderState) -> Result<(), ContenderError> {
        let name = random_name(&mut self.rng);
        self.log(format_args!("Picked name {name}"));

        let class = state
            .comp_classes
            .choose(&mut self.rng)
            .cloned()
            .ok_or(ContenderError::NoCompClasses)?;
        let candidate = state.contender.with_entry(Some(name), class.id);
        let echoed = self
            .scoring
            .update_contender(&candidate)
            .await
            .map_err(ContenderError::Join)?;
        state.contender = echoed.unwrap_or(candidate);

        let contest = self
            .scoring
            .contest(state.contender.contest_id)
            .await
            .map_err(ContenderError::Join)?;
        self.log(format_args!("Joining contest {} as {}", contest.name, class.name));
        state.contest = Some(contest);

        self.advance(DriverPhase::Joined);
        Ok(())
    }

    /// Pauses and acts until `stop` is cancelled. Returns the number of
    /// actions that had an effect.
    pub async fn run_loop(&mut self, state: &mut ContenderState, stop: &CancellationToken) -> usize {
        self.advance(DriverPhase::Running);
        let mut performed = 0;

        while self.pause(stop).await {
            let action = self.sampler.sample(&mut self.rng);
            match actions::perform(action, state, &self.scoring, &mut self.rng).await {
                Ok(Some(effect)) => {
                    performed += 1;
                    self.log(format_args!("{effect}"));
                }
                Ok(None) => debug!(?action, "Nothing to do"),
                Err(e) => debug!(?action, error = %e, "Action failed"),
            }
        }

        self.advance(DriverPhase::Stopped);
        performed
    }

    /// Sleeps one pacing interval in unit steps. Returns `false` as soon as
    /// `stop` is observed.
    async fn pause(&mut self, stop: &CancellationToken) -> bool {
        let steps = self.pacing.draw_steps(&mut self.rng);
        for _ in 0..steps {
            if stop.is_cancelled() {
                return false;
            }
            tokio::select! {
                _ = stop.cancelled() => return false,
                _ = tokio::time::sleep(self.pacing.unit) => {}
            }
        }
        !stop.is_cancelled()
    }

    fn advance(&mut self, phase: DriverPhase) {
        debug!(from = ?self.phase, to = ?phase, "Phase");
        self.phase = phase;
    }

    fn fail(&mut self, e: ContenderError) -> ContenderError {
        error!(phase = ?self.phase, error = %e, "[{}] Giving up", self.registration_code);
        self.advance(DriverPhase::Stopped);
        e
    }

    fn log(&self, message: std::fmt::Arguments<'_>) {
        info!("[{}] {}", self.registration_code, message);
    }
}
