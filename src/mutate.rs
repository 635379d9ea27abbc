//! The mutation operators. Mutation returns a fresh chromosome with empty
//! fitness scores; the parent is never touched.
mod bit_flip;
mod random_reset;
mod variable_length;
mod wrapper;

pub use self::bit_flip::BitFlip as MutateBitFlip;
pub use self::random_reset::RandomReset as MutateRandomReset;
pub use self::variable_length::VariableLength as MutateVariableLength;
pub use self::wrapper::Wrapper as MutateWrapper;

use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::rng::SeededRng;
use std::fmt;

pub trait Mutate: Clone + Send + Sync + fmt::Debug {
    fn call<G: Genotype>(
        &self,
        genotype: &G,
        chromosome: &Chromosome<G::Allele>,
        rng: &mut SeededRng,
    ) -> Chromosome<G::Allele>;

    fn report(&self) -> String;
}
