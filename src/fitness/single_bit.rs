use super::{FitnessFunction, FitnessValue};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::execution::ExecutionTrace;

/// Optimal iff one particular bit is set. A family of these makes a cheap
/// many-objective workload: one goal per gene position.
#[derive(Clone, Debug)]
pub struct SingleBit {
    pub bit: usize,
}

impl SingleBit {
    pub fn new(bit: usize) -> Self {
        Self { bit }
    }
}

impl FitnessFunction<bool> for SingleBit {
    fn calculate(
        &self,
        chromosome: &Chromosome<bool>,
        _trace: &ExecutionTrace,
    ) -> Result<FitnessValue, Error> {
        match chromosome.genes.get(self.bit) {
            Some(true) => Ok(1.0),
            _ => Ok(0.0),
        }
    }

    fn is_optimal(&self, fitness: FitnessValue) -> bool {
        fitness >= 1.0
    }

    fn worst(&self) -> FitnessValue {
        0.0
    }
}
