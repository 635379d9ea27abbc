use super::Crossover;
use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::rng::SeededRng;

/// Crossover at a relative cut point `r ∈ (0, 1)`: each parent is cut at
/// `floor(r * length)` and the tails are swapped. For parents of unequal
/// length this conserves the total gene count (`|o1| + |o2| = |p1| + |p2|`),
/// bounds each offspring by the longer parent, and preserves the multiset of
/// genes, which makes it the operator of choice for variable-length tests.
#[derive(Clone, Debug, Default)]
pub struct SinglePointRelative;

impl SinglePointRelative {
    pub fn new() -> Self {
        Self
    }
}

impl Crossover for SinglePointRelative {
    fn call<G: Genotype>(
        &self,
        _genotype: &G,
        father: &Chromosome<G::Allele>,
        mother: &Chromosome<G::Allele>,
        rng: &mut SeededRng,
    ) -> (Chromosome<G::Allele>, Chromosome<G::Allele>) {
        let relative_point = rng.next_double();
        let father_index = (relative_point * father.length() as f64).floor() as usize;
        let mother_index = (relative_point * mother.length() as f64).floor() as usize;

        let mut child_father_genes = father.genes.clone();
        let mut child_mother_genes = mother.genes.clone();
        let mut child_father_genes_split = child_father_genes.split_off(father_index);
        let mut child_mother_genes_split = child_mother_genes.split_off(mother_index);
        child_father_genes.append(&mut child_mother_genes_split);
        child_mother_genes.append(&mut child_father_genes_split);

        (
            Chromosome::new(child_father_genes),
            Chromosome::new(child_mother_genes),
        )
    }

    fn report(&self) -> String {
        "crossover: singlepointrelative".to_string()
    }
}
