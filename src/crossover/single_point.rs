use super::Crossover;
use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::rng::SeededRng;

/// Crossover with a single gene position from which on the rest of the genes
/// are taken from the other parent. The cut point is chosen with uniform
/// probability within the shorter parent, so both tails exist.
#[derive(Clone, Debug, Default)]
pub struct SinglePoint;

impl SinglePoint {
    pub fn new() -> Self {
        Self
    }
}

impl Crossover for SinglePoint {
    fn call<G: Genotype>(
        &self,
        _genotype: &G,
        father: &Chromosome<G::Allele>,
        mother: &Chromosome<G::Allele>,
        rng: &mut SeededRng,
    ) -> (Chromosome<G::Allele>, Chromosome<G::Allele>) {
        let shorter = father.length().min(mother.length());
        if shorter < 2 {
            return (
                Chromosome::new(father.genes.clone()),
                Chromosome::new(mother.genes.clone()),
            );
        }
        let index = rng.next_index(shorter - 1) + 1;

        let mut child_father_genes = father.genes.clone();
        let mut child_mother_genes = mother.genes.clone();
        let mut child_father_genes_split = child_father_genes.split_off(index);
        let mut child_mother_genes_split = child_mother_genes.split_off(index);
        child_father_genes.append(&mut child_mother_genes_split);
        child_mother_genes.append(&mut child_father_genes_split);

        (
            Chromosome::new(child_father_genes),
            Chromosome::new(child_mother_genes),
        )
    }

    fn report(&self) -> String {
        "crossover: singlepoint".to_string()
    }
}
