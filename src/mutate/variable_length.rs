use super::Mutate;
use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::rng::SeededRng;

/// Mutation for variable-length chromosomes: per-gene replacement and
/// deletion with probability `1/n` each, plus geometric insertion attempts
/// with success probability `alpha`, bounded by the genotype's maximum
/// length. Larger `alpha` drifts chromosomes longer.
#[derive(Clone, Debug)]
pub struct VariableLength {
    pub alpha: f64,
}

impl VariableLength {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl Mutate for VariableLength {
    fn call<G: Genotype>(
        &self,
        genotype: &G,
        chromosome: &Chromosome<G::Allele>,
        rng: &mut SeededRng,
    ) -> Chromosome<G::Allele> {
        let gene_probability = 1.0 / chromosome.length().max(1) as f64;

        // replace, then delete, keeping at least one gene
        let mut genes: Vec<G::Allele> = chromosome
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
        let mut index = 0;
        while index < genes.len() {
            if genes.len() > 1 && rng.chance(gene_probability) {
                genes.remove(index);
            } else {
                index += 1;
            }
        }

        // geometric insertion run, bounded by the genotype's length cap
        while genes.len() < genotype.max_genes_size() && rng.chance(self.alpha) {
            let position = rng.next_index(genes.len() + 1);
            genes.insert(position, genotype.random_gene(rng));
        }

        Chromosome::new(genes)
    }

    fn report(&self) -> String {
        format!("mutate: variablelength (alpha {})", self.alpha)
    }
}
