use super::{FitnessFunction, FitnessValue};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::execution::ExecutionTrace;

/// Count the number of `true` genes in a bit string; optimal when every gene
/// is set.
#[derive(Clone, Debug)]
pub struct OneMax {
    pub genes_size: usize,
}

impl OneMax {
    pub fn new(genes_size: usize) -> Self {
        Self { genes_size }
    }
}

impl FitnessFunction<bool> for OneMax {
    fn calculate(
        &self,
        chromosome: &Chromosome<bool>,
        _trace: &ExecutionTrace,
    ) -> Result<FitnessValue, Error> {
        Ok(chromosome.genes.iter().filter(|&gene| *gene).count() as FitnessValue)
    }

    fn is_optimal(&self, fitness: FitnessValue) -> bool {
        fitness >= self.genes_size as FitnessValue
    }

    fn worst(&self) -> FitnessValue {
        0.0
    }
}
