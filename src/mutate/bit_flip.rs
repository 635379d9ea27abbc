use super::Mutate;
use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::rng::SeededRng;

/// Flip each gene with probability `1/n` where `n` is the chromosome length.
/// Flipping is the genotype's gene-level mutation, so on bit strings this is
/// the classic bitflip.
#[derive(Clone, Debug, Default)]
pub struct BitFlip;

impl BitFlip {
    pub fn new() -> Self {
        Self
    }
}

impl Mutate for BitFlip {
    fn call<G: Genotype>(
        &self,
        genotype: &G,
        chromosome: &Chromosome<G::Allele>,
        rng: &mut SeededRng,
    ) -> Chromosome<G::Allele> {
        let gene_probability = 1.0 / chromosome.length().max(1) as f64;
        let genes = chromosome
            .genes
            .iter()
            .map(|gene| {
                if rng.chance(gene_probability) {
                    genotype.mutate_gene(gene, rng)
                } else {
                    *gene
                }
            })
            .collect();
        Chromosome::new(genes)
    }

    fn report(&self) -> String {
        "mutate: bitflip".to_string()
    }
}
