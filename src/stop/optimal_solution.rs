use super::{SearchObservation, StopCondition};

/// Stop once every goal has an optimal archive entry. Reports no budget
/// progress: coverage does not advance the focused phase.
#[derive(Clone, Debug, Default)]
pub struct OptimalSolution;

impl OptimalSolution {
    pub fn new() -> Self {
        Self
    }
}

impl StopCondition for OptimalSolution {
    fn is_finished(&self, observation: &SearchObservation) -> bool {
        observation.total_goals > 0 && observation.covered_goals >= observation.total_goals
    }

    fn report(&self) -> String {
        "stop: optimal".to_string()
    }
}
