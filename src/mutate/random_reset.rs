use super::Mutate;
use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::rng::SeededRng;

/// Replace each gene with a uniform draw from the gene value domain with
/// probability `1/n`. The standard operator for integer lists.
#[derive(Clone, Debug, Default)]
pub struct RandomReset;

impl RandomReset {
    pub fn new() -> Self {
        Self
    }
}

impl Mutate for RandomReset {
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
                    genotype.random_gene(rng)
                } else {
                    *gene
                }
            })
            .collect();
        Chromosome::new(genes)
    }

    fn report(&self) -> String {
        "mutate: integerlist".to_string()
    }
}
