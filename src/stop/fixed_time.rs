use super::{SearchObservation, StopCondition};
use std::time::Duration;

/// Stop once the wall-clock time since the search started exceeds the
/// budget. Polled at iteration boundaries only, so a long-running iteration
/// overshoots rather than being interrupted.
#[derive(Clone, Debug)]
pub struct FixedTime {
    pub duration: Duration,
}

impl FixedTime {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl StopCondition for FixedTime {
    fn is_finished(&self, observation: &SearchObservation) -> bool {
        observation.started_at.elapsed() >= self.duration
    }

    fn progress(&self, observation: &SearchObservation) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            (observation.started_at.elapsed().as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        }
    }

    fn report(&self) -> String {
        format!("stop: fixed-time ({:?})", self.duration)
    }
}
