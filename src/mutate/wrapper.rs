pub use super::bit_flip::BitFlip as MutateBitFlip;
pub use super::random_reset::RandomReset as MutateRandomReset;
pub use super::variable_length::VariableLength as MutateVariableLength;
pub use super::Mutate;

use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::rng::SeededRng;

#[derive(Clone, Debug)]
pub enum Wrapper {
    BitFlip(MutateBitFlip),
    RandomReset(MutateRandomReset),
    VariableLength(MutateVariableLength),
}

impl Mutate for Wrapper {
    fn call<G: Genotype>(
        &self,
        genotype: &G,
        chromosome: &Chromosome<G::Allele>,
        rng: &mut SeededRng,
    ) -> Chromosome<G::Allele> {
        match self {
            Wrapper::BitFlip(mutate) => mutate.call(genotype, chromosome, rng),
            Wrapper::RandomReset(mutate) => mutate.call(genotype, chromosome, rng),
            Wrapper::VariableLength(mutate) => mutate.call(genotype, chromosome, rng),
        }
    }

    fn report(&self) -> String {
        match self {
            Wrapper::BitFlip(mutate) => mutate.report(),
            Wrapper::RandomReset(mutate) => mutate.report(),
            Wrapper::VariableLength(mutate) => mutate.report(),
        }
    }
}

impl From<MutateBitFlip> for Wrapper {
    fn from(mutate: MutateBitFlip) -> Self {
        Wrapper::BitFlip(mutate)
    }
}
impl From<MutateRandomReset> for Wrapper {
    fn from(mutate: MutateRandomReset) -> Self {
        Wrapper::RandomReset(mutate)
    }
}
impl From<MutateVariableLength> for Wrapper {
    fn from(mutate: MutateVariableLength) -> Self {
        Wrapper::VariableLength(mutate)
    }
}
