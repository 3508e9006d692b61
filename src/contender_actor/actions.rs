//! The three state-changing actions a contender performs.
//!
//! Every action follows the same rule: pick, write to the server, and only
//! then touch [`ContenderState`]. A failed write returns the
//! [`RemoteFailure`] and leaves the state exactly as it was. An action whose
//! precondition cannot be met returns `Ok(None)` without any remote call.

use std::fmt;

use rand::distr::weighted::{Error as WeightError, WeightedIndex};
use rand::distr::Distribution;
use rand::seq::{IndexedRandom, IteratorRandom};
use rand::Rng;
use tracing::debug;

use super::state::ContenderState;
use crate::clients::{RemoteFailure, RemoteService, ScoringClient};
use crate::model::{CompClass, NewTick, ProblemId};

/// Actions a contender can take in its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContenderAction {
    /// Tick a random problem that is still to-do.
    AddTick,
    /// Withdraw a random existing tick.
    RemoveTick,
    /// Re-enter in a random competition class.
    SwitchClass,
}

impl ContenderAction {
    /// Adding and removing are equally likely; switching class is a hundred
    /// times rarer than either.
    pub const DEFAULT_WEIGHTS: [(ContenderAction, u32); 3] = [
        (ContenderAction::AddTick, 50),
        (ContenderAction::RemoveTick, 50),
        (ContenderAction::SwitchClass, 1),
    ];
}

/// Results of actions - variants match 1:1 with [`ContenderAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum ActionEffect {
    TickAdded(ProblemId),
    TickRemoved(ProblemId),
    ClassSwitched(CompClass),
}

impl fmt::Display for ActionEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionEffect::TickAdded(problem_id) => write!(f, "Added tick of problem {problem_id}"),
            ActionEffect::TickRemoved(problem_id) => {
                write!(f, "Removed tick for problem {problem_id}")
            }
            ActionEffect::ClassSwitched(class) => write!(f, "Changed class to {}", class.name),
        }
    }
}

/// Weighted random choice over [`ContenderAction`]s.
#[derive(Debug, Clone)]
pub struct ActionSampler {
    actions: Vec<ContenderAction>,
    index: WeightedIndex<u32>,
}

impl ActionSampler {
    /// Builds a sampler from `(action, weight)` pairs.
    ///
    /// Fails when the list is empty or every weight is zero.
    pub fn new(weights: &[(ContenderAction, u32)]) -> Result<Self, WeightError> {
        let index = WeightedIndex::new(weights.iter().map(|(_, weight)| *weight))?;
        Ok(Self {
            actions: weights.iter().map(|(action, _)| *action).collect(),
            index,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ContenderAction {
        self.actions[self.index.sample(rng)]
    }
}

/// Runs `action` against `state`, drawing every random choice from `rng`.
pub async fn perform<R, G>(
    action: ContenderAction,
    state: &mut ContenderState,
    scoring: &ScoringClient<R>,
    rng: &mut G,
) -> Result<Option<ActionEffect>, RemoteFailure>
where
    R: RemoteService,
    G: Rng + ?Sized,
{
    match action {
        ContenderAction::AddTick => Ok(add_tick(state, scoring, rng)
            .await?
            .map(ActionEffect::TickAdded)),
        ContenderAction::RemoveTick => Ok(remove_tick(state, scoring, rng)
            .await?
            .map(ActionEffect::TickRemoved)),
        ContenderAction::SwitchClass => Ok(switch_class(state, scoring, rng)
            .await?
            .map(ActionEffect::ClassSwitched)),
    }
}

/// Ticks a uniformly chosen to-do problem, flashed with probability one half.
pub async fn add_tick<R, G>(
    state: &mut ContenderState,
    scoring: &ScoringClient<R>,
    rng: &mut G,
) -> Result<Option<ProblemId>, RemoteFailure>
where
    R: RemoteService,
    G: Rng + ?Sized,
{
    let Some(problem_id) = state.problems_todo().iter().copied().choose(rng) else {
        return Ok(None);
    };
    let is_flash = rng.random_bool(0.5);
    add_tick_for(state, scoring, problem_id, is_flash).await
}

/// Ticks `problem_id`. Returns `None` if it is not a to-do problem.
pub async fn add_tick_for<R: RemoteService>(
    state: &mut ContenderState,
    scoring: &ScoringClient<R>,
    problem_id: ProblemId,
    is_flash: bool,
) -> Result<Option<ProblemId>, RemoteFailure> {
    if !state.problems_todo().contains(&problem_id) {
        return Ok(None);
    }

    let request = NewTick {
        contender_id: state.contender.id,
        problem_id,
        is_flash,
    };
    let tick = scoring.create_tick(&request).await?;
    debug!(problem_id, tick_id = tick.id, is_flash, "Tick created");

    state.record_tick(problem_id, tick);
    Ok(Some(problem_id))
}

/// Withdraws the tick of a uniformly chosen ticked problem.
pub async fn remove_tick<R, G>(
    state: &mut ContenderState,
    scoring: &ScoringClient<R>,
    rng: &mut G,
) -> Result<Option<ProblemId>, RemoteFailure>
where
    R: RemoteService,
    G: Rng + ?Sized,
{
    let Some(problem_id) = state.problems_ticked().iter().copied().choose(rng) else {
        return Ok(None);
    };
    remove_tick_for(state, scoring, problem_id).await
}

/// Withdraws the tick of `problem_id`. Returns `None` if it is not ticked.
pub async fn remove_tick_for<R: RemoteService>(
    state: &mut ContenderState,
    scoring: &ScoringClient<R>,
    problem_id: ProblemId,
) -> Result<Option<ProblemId>, RemoteFailure> {
    let Some(tick_id) = state.tick(problem_id).map(|tick| tick.id) else {
        return Ok(None);
    };

    scoring.delete_tick(tick_id).await?;
    debug!(problem_id, tick_id, "Tick deleted");

    state.release_tick(problem_id);
    Ok(Some(problem_id))
}

/// Re-enters the contender in a uniformly chosen class, possibly the current one.
pub async fn switch_class<R, G>(
    state: &mut ContenderState,
    scoring: &ScoringClient<R>,
    rng: &mut G,
) -> Result<Option<CompClass>, RemoteFailure>
where
    R: RemoteService,
    G: Rng + ?Sized,
{
    let Some(class) = state.comp_classes.choose(rng).cloned() else {
        return Ok(None);
    };
    switch_class_to(state, scoring, class).await.map(Some)
}

/// Writes the full profile with `class` and commits it once acknowledged.
///
/// The write is always issued, even when `class` is already the current one.
pub async fn switch_class_to<R: RemoteService>(
    state: &mut ContenderState,
    scoring: &ScoringClient<R>,
    class: CompClass,
) -> Result<CompClass, RemoteFailure> {
    let candidate = state.contender.with_entry(None, class.id);
    let echoed = scoring.update_contender(&candidate).await?;
    debug!(class_id = class.id, "Class switched");

    state.contender = echoed.unwrap_or(candidate);
    Ok(class)
}
