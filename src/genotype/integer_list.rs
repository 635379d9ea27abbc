use super::builder::{Builder, TryFromBuilderError};
use super::Genotype;
use crate::rng::SeededRng;
use std::fmt;

/// Genes are integers drawn from a closed range `[allele_min, allele_max]`.
#[derive(Clone, Debug)]
pub struct IntegerList {
    pub genes_size: usize,
    pub allele_min: i64,
    pub allele_max: i64,
}

impl Genotype for IntegerList {
    type Allele = i64;

    fn genes_size(&self) -> usize {
        self.genes_size
    }

    fn random_gene(&self, rng: &mut SeededRng) -> i64 {
        // next_int is half-open, the range is closed
        rng.next_int(self.allele_min, self.allele_max + 1)
    }

    fn mutate_gene(&self, _gene: &i64, rng: &mut SeededRng) -> i64 {
        self.random_gene(rng)
    }
}

impl TryFrom<Builder<Self>> for IntegerList {
    type Error = TryFromBuilderError;

    fn try_from(builder: Builder<Self>) -> Result<Self, Self::Error> {
        if builder.genes_size.is_none() || builder.genes_size == Some(0) {
            Err(TryFromBuilderError(
                "IntegerListGenotype requires a genes_size > 0",
            ))
        } else if builder.allele_range.is_none() {
            Err(TryFromBuilderError(
                "IntegerListGenotype requires an allele_range",
            ))
        } else if builder.allele_range.map(|(min, max)| min > max).unwrap() {
            Err(TryFromBuilderError(
                "IntegerListGenotype requires allele_range min <= max",
            ))
        } else {
            let (allele_min, allele_max) = builder.allele_range.unwrap();
            Ok(Self {
                genes_size: builder.genes_size.unwrap(),
                allele_min,
                allele_max,
            })
        }
    }
}

impl fmt::Display for IntegerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "genotype: integerlist")?;
        writeln!(f, "  genes_size: {}", self.genes_size)?;
        writeln!(f, "  allele_range: [{}, {}]", self.allele_min, self.allele_max)
    }
}
