use super::builder::{Builder, TryFromBuilderError};
use super::Genotype;
use crate::rng::SeededRng;
use std::fmt;

/// Genes are booleans. The classic genotype for sanity-checking an algorithm
/// against OneMax and SingleBit goals.
///
/// # Example:
/// ```
/// use blocktest::genotype::{BitStringGenotype, Genotype};
///
/// let genotype = BitStringGenotype::builder()
///     .with_genes_size(10)
///     .build()
///     .unwrap();
/// assert_eq!(genotype.genes_size(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct BitString {
    pub genes_size: usize,
}

impl Genotype for BitString {
    type Allele = bool;

    fn genes_size(&self) -> usize {
        self.genes_size
    }

    fn random_gene(&self, rng: &mut SeededRng) -> bool {
        rng.next_bool()
    }

    fn mutate_gene(&self, gene: &bool, _rng: &mut SeededRng) -> bool {
        !gene
    }
}

impl TryFrom<Builder<Self>> for BitString {
    type Error = TryFromBuilderError;

    fn try_from(builder: Builder<Self>) -> Result<Self, Self::Error> {
        match builder.genes_size {
            None => Err(TryFromBuilderError("BitStringGenotype requires a genes_size")),
            Some(0) => Err(TryFromBuilderError(
                "BitStringGenotype requires a genes_size > 0",
            )),
            Some(genes_size) => Ok(Self { genes_size }),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "genotype: bitstring")?;
        writeln!(f, "  genes_size: {}", self.genes_size)
    }
}
