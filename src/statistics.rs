//! The statistics collector, observed by the search algorithms.
//!
//! Counters are monotone and never consulted for control flow; stopping
//! decisions read the algorithm's own observables instead.
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum SearchAction {
    Generate,
    Evaluate,
    Sort,
    Archive,
    Other,
}

#[derive(Clone, Debug)]
pub struct Statistics {
    pub iterations: usize,
    pub evaluations: usize,
    pub covered_goals: usize,
    started_at: Option<Instant>,
    durations: HashMap<SearchAction, Duration>,
}

impl Statistics {
    pub fn new() -> Self {
        Self {
            iterations: 0,
            evaluations: 0,
            covered_goals: 0,
            started_at: None,
            durations: HashMap::new(),
        }
    }

    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    pub fn increment_iterations(&mut self) {
        self.iterations += 1;
    }

    pub fn increment_evaluations(&mut self) {
        self.evaluations += 1;
    }

    /// High-water mark, counters never move backwards.
    pub fn record_covered_goals(&mut self, covered_goals: usize) {
        if covered_goals > self.covered_goals {
            self.covered_goals = covered_goals;
            log::debug!(
                "statistics: {} goals covered after {} evaluations",
                covered_goals,
                self.evaluations
            );
        }
    }

    pub fn add_duration(&mut self, action: SearchAction, duration: Duration) {
        *self.durations.entry(action).or_default() += duration;
    }

    pub fn duration(&self, action: SearchAction) -> Duration {
        self.durations.get(&action).copied().unwrap_or_default()
    }

    pub fn total_duration(&self) -> Duration {
        self.started_at.map(|t| t.elapsed()).unwrap_or_default()
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}
