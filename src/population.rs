//! The population is a container for [Chromosomes](Chromosome).
//!
//! Ordering is meaningful: rank selection reads the population as sorted
//! ascending by quality (worst first), and the many-objective survivor
//! selection fills it front by front. Set identity ignores the order.
use crate::chromosome::{Allele, Chromosome};
use crate::rng::SeededRng;

#[derive(Clone, Debug, Default)]
pub struct Population<A: Allele> {
    pub chromosomes: Vec<Chromosome<A>>,
}

impl<A: Allele> Population<A> {
    pub fn new(chromosomes: Vec<Chromosome<A>>) -> Self {
        Self { chromosomes }
    }

    pub fn new_empty() -> Self {
        Self { chromosomes: vec![] }
    }

    pub fn size(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn push(&mut self, chromosome: Chromosome<A>) {
        self.chromosomes.push(chromosome);
    }

    pub fn shuffle(&mut self, rng: &mut SeededRng) {
        rng.shuffle(&mut self.chromosomes);
    }

    pub fn reverse(&mut self) {
        self.chromosomes.reverse();
    }

    pub fn summed_fitness_mean(&self) -> f64 {
        stats::mean(self.chromosomes.iter().map(|c| c.summed_fitness()))
    }

    pub fn summed_fitness_stddev(&self) -> f64 {
        stats::stddev(self.chromosomes.iter().map(|c| c.summed_fitness()))
    }

    pub fn length_mean(&self) -> f64 {
        stats::mean(self.chromosomes.iter().map(|c| c.length()))
    }
}

impl<A: Allele> From<Vec<Chromosome<A>>> for Population<A> {
    fn from(chromosomes: Vec<Chromosome<A>>) -> Self {
        Self::new(chromosomes)
    }
}
