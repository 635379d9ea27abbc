//! The search space for the algorithm.
//!
//! Each implemented genotype handles its own random chromosome
//! initialization and gene-level mutation. The genotype doubles as the
//! chromosome generator: [Genotype::chromosome_factory] produces the random
//! initial chromosomes the search algorithms seed their populations with.
mod bit_string;
mod builder;
mod event_sequence;
mod integer_list;

pub use self::bit_string::BitString as BitStringGenotype;
pub use self::builder::{
    Builder as GenotypeBuilder, TryFromBuilderError as TryFromGenotypeBuilderError,
};
pub use self::event_sequence::EventSequence as EventSequenceGenotype;
pub use self::integer_list::IntegerList as IntegerListGenotype;

pub use crate::chromosome::Allele;
use crate::chromosome::Chromosome;
use crate::rng::SeededRng;
use std::fmt;

pub trait Genotype:
    Clone + Send + Sync + fmt::Debug + fmt::Display + TryFrom<GenotypeBuilder<Self>>
{
    type Allele: Allele;

    /// Number of genes of a freshly generated chromosome.
    fn genes_size(&self) -> usize;

    /// Produce a random chromosome, the generator of the search.
    fn chromosome_factory(&self, rng: &mut SeededRng) -> Chromosome<Self::Allele> {
        let genes = (0..self.genes_size())
            .map(|_| self.random_gene(rng))
            .collect();
        Chromosome::new(genes)
    }

    /// Uniform draw from the gene value domain.
    fn random_gene(&self, rng: &mut SeededRng) -> Self::Allele;

    /// Gene-level mutation relative to the current value (bit strings flip,
    /// value domains redraw).
    fn mutate_gene(&self, gene: &Self::Allele, rng: &mut SeededRng) -> Self::Allele;

    /// Whether chromosomes of this genotype may grow and shrink.
    fn is_variable_length(&self) -> bool {
        false
    }

    /// Upper length bound for variable-length variation.
    fn max_genes_size(&self) -> usize {
        self.genes_size()
    }

    fn builder() -> GenotypeBuilder<Self> {
        GenotypeBuilder::new()
    }
}
