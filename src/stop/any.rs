use super::{SearchObservation, StopCondition};

/// Stop as soon as any child condition stops; progress is the maximum over
/// the children.
#[derive(Debug)]
pub struct Any {
    conditions: Vec<Box<dyn StopCondition>>,
}

impl Any {
    pub fn new(conditions: Vec<Box<dyn StopCondition>>) -> Self {
        assert!(!conditions.is_empty());
        Self { conditions }
    }
}

impl StopCondition for Any {
    fn is_finished(&self, observation: &SearchObservation) -> bool {
        self.conditions
            .iter()
            .any(|condition| condition.is_finished(observation))
    }

    fn progress(&self, observation: &SearchObservation) -> f64 {
        self.conditions
            .iter()
            .map(|condition| condition.progress(observation))
            .fold(0.0, f64::max)
    }

    fn report(&self) -> String {
        let children: Vec<String> = self
            .conditions
            .iter()
            .map(|condition| condition.report())
            .collect();
        format!("stop: one-of [{}]", children.join(", "))
    }
}
