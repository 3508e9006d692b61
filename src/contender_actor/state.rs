//! The local view one contender keeps of its remote resources.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{CompClass, Contender, Contest, Problem, ProblemId, RegistrationCode, Tick};

/// Everything a contender knows about itself, exclusively owned by its driver.
///
/// The problem partition is private so it can only change through
/// [`record_tick`](Self::record_tick) and [`release_tick`](Self::release_tick),
/// which keep `problems_todo` and `problems_ticked` disjoint, keep their union
/// fixed, and keep the keys of `ticks` equal to `problems_ticked`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContenderState {
    pub registration_code: RegistrationCode,
    pub contender: Contender,
    pub contest: Option<Contest>,
    pub comp_classes: Vec<CompClass>,
    problems_todo: BTreeSet<ProblemId>,
    problems_ticked: BTreeSet<ProblemId>,
    ticks: BTreeMap<ProblemId, Tick>,
}

impl ContenderState {
    /// Builds the initial state from the data fetched while loading.
    ///
    /// Problems with an existing tick start out ticked, all others start out
    /// to-do. Ticks referring to problems outside `problems` are dropped.
    pub fn from_load(
        registration_code: impl Into<RegistrationCode>,
        contender: Contender,
        comp_classes: Vec<CompClass>,
        ticks: Vec<Tick>,
        problems: Vec<Problem>,
    ) -> Self {
        let mut by_problem: BTreeMap<ProblemId, Tick> = ticks
            .into_iter()
            .map(|tick| (tick.problem_id, tick))
            .collect();

        let mut state = Self {
            registration_code: registration_code.into(),
            contender,
            contest: None,
            comp_classes,
            problems_todo: BTreeSet::new(),
            problems_ticked: BTreeSet::new(),
            ticks: BTreeMap::new(),
        };

        for problem in problems {
            match by_problem.remove(&problem.id) {
                Some(tick) => {
                    state.problems_ticked.insert(problem.id);
                    state.ticks.insert(problem.id, tick);
                }
                None => {
                    state.problems_todo.insert(problem.id);
                }
            }
        }

        state
    }

    pub fn problems_todo(&self) -> &BTreeSet<ProblemId> {
        &self.problems_todo
    }

    pub fn problems_ticked(&self) -> &BTreeSet<ProblemId> {
        &self.problems_ticked
    }

    pub fn ticks(&self) -> &BTreeMap<ProblemId, Tick> {
        &self.ticks
    }

    pub fn tick(&self, problem_id: ProblemId) -> Option<&Tick> {
        self.ticks.get(&problem_id)
    }

    /// Every problem known to this contender, ticked or not.
    pub fn all_problems(&self) -> BTreeSet<ProblemId> {
        self.problems_todo
            .union(&self.problems_ticked)
            .copied()
            .collect()
    }

    /// Moves `problem_id` from to-do to ticked under the server's `tick`.
    ///
    /// Returns `false` and changes nothing when the problem is not to-do.
    pub fn record_tick(&mut self, problem_id: ProblemId, tick: Tick) -> bool {
        if !self.problems_todo.remove(&problem_id) {
            return false;
        }
        self.problems_ticked.insert(problem_id);
        self.ticks.insert(problem_id, tick);
        true
    }

    /// Moves `problem_id` from ticked back to to-do, returning its tick.
    pub fn release_tick(&mut self, problem_id: ProblemId) -> Option<Tick> {
        let tick = self.ticks.remove(&problem_id)?;
        self.problems_ticked.remove(&problem_id);
        self.problems_todo.insert(problem_id);
        Some(tick)
    }

    /// True when the partition and tick map agree with each other.
    pub fn is_consistent(&self) -> bool {
        self.problems_todo.is_disjoint(&self.problems_ticked)
            && self.ticks.keys().eq(self.problems_ticked.iter())
    }
}
