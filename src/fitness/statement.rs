use super::{FitnessFunction, FitnessValue};
use crate::chromosome::{Allele, Chromosome};
use crate::errors::Error;
use crate::execution::{ExecutionTrace, StatementId};
use std::marker::PhantomData;

/// Coverage of one statement of the program under test.
///
/// The measure is the classic approach level plus normalised branch distance
/// to the statement, derived from the execution trace. Distance is a
/// minimizing measure, so it is negated to fit the crate-wide maximization
/// convention: an executed statement scores `0.0` (the optimum), everything
/// else scores below it.
#[derive(Clone, Debug)]
pub struct StatementFitness<A: Allele> {
    pub statement: StatementId,
    _phantom: PhantomData<A>,
}

impl<A: Allele> StatementFitness<A> {
    pub fn new(statement: StatementId) -> Self {
        Self {
            statement,
            _phantom: PhantomData,
        }
    }
}

impl<A: Allele> FitnessFunction<A> for StatementFitness<A> {
    fn calculate(
        &self,
        _chromosome: &Chromosome<A>,
        trace: &ExecutionTrace,
    ) -> Result<FitnessValue, Error> {
        if trace.was_executed(self.statement) {
            return Ok(0.0);
        }
        match trace.distance_to(self.statement) {
            Some(distance) => {
                // branch distance normalised into [0, 1) so the approach
                // level always dominates
                let normalised = distance.branch_distance / (distance.branch_distance + 1.0);
                Ok(-(distance.approach_level as FitnessValue + normalised))
            }
            None => Err(Error::NotYetImplemented(
                "statement fitness requires branch distance instrumentation in the execution host",
            )),
        }
    }

    fn is_optimal(&self, fitness: FitnessValue) -> bool {
        fitness >= 0.0
    }
}
