pub use super::single_point::SinglePoint as CrossoverSinglePoint;
pub use super::single_point_relative::SinglePointRelative as CrossoverSinglePointRelative;
pub use super::Crossover;

use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::rng::SeededRng;

#[derive(Clone, Debug)]
pub enum Wrapper {
    SinglePoint(CrossoverSinglePoint),
    SinglePointRelative(CrossoverSinglePointRelative),
}

impl Crossover for Wrapper {
    fn call<G: Genotype>(
        &self,
        genotype: &G,
        father: &Chromosome<G::Allele>,
        mother: &Chromosome<G::Allele>,
        rng: &mut SeededRng,
    ) -> (Chromosome<G::Allele>, Chromosome<G::Allele>) {
        match self {
            Wrapper::SinglePoint(crossover) => crossover.call(genotype, father, mother, rng),
            Wrapper::SinglePointRelative(crossover) => {
                crossover.call(genotype, father, mother, rng)
            }
        }
    }

    fn report(&self) -> String {
        match self {
            Wrapper::SinglePoint(crossover) => crossover.report(),
            Wrapper::SinglePointRelative(crossover) => crossover.report(),
        }
    }
}

impl From<CrossoverSinglePoint> for Wrapper {
    fn from(crossover: CrossoverSinglePoint) -> Self {
        Wrapper::SinglePoint(crossover)
    }
}
impl From<CrossoverSinglePointRelative> for Wrapper {
    fn from(crossover: CrossoverSinglePointRelative) -> Self {
        Wrapper::SinglePointRelative(crossover)
    }
}
