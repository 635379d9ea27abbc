use blocktest::chromosome::{Allele, Chromosome};
use blocktest::population::Population;

#[allow(dead_code)]
pub fn population<A: Allele>(population: &Population<A>) -> Vec<Vec<A>> {
    population
        .chromosomes
        .iter()
        .map(|chromosome| chromosome.genes.clone())
        .collect()
}

#[allow(dead_code)]
pub fn chromosomes<A: Allele>(chromosomes: &[Chromosome<A>]) -> Vec<Vec<A>> {
    chromosomes
        .iter()
        .map(|chromosome| chromosome.genes.clone())
        .collect()
}
