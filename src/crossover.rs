//! The crossover operators. Crossover takes two parents and returns two
//! fresh offspring; parents are never touched.
mod single_point;
mod single_point_relative;
mod wrapper;

pub use self::single_point::SinglePoint as CrossoverSinglePoint;
pub use self::single_point_relative::SinglePointRelative as CrossoverSinglePointRelative;
pub use self::wrapper::Wrapper as CrossoverWrapper;

use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::rng::SeededRng;
use std::fmt;

pub trait Crossover: Clone + Send + Sync + fmt::Debug {
    fn call<G: Genotype>(
        &self,
        genotype: &G,
        father: &Chromosome<G::Allele>,
        mother: &Chromosome<G::Allele>,
        rng: &mut SeededRng,
    ) -> (Chromosome<G::Allele>, Chromosome<G::Allele>);

    fn report(&self) -> String;
}
