use super::Select;
use crate::chromosome::Allele;
use crate::population::Population;
use crate::rng::SeededRng;

/// Rank-proportional selection over an ordered population.
///
/// The population must be sorted ascending by quality (worst first): rank
/// `k` (0-based) is drawn with probability proportional to `k + 1`, so
/// better chromosomes are more likely. Algorithms that supply a population
/// must sort accordingly before calling.
#[derive(Clone, Debug, Default)]
pub struct Rank;

impl Rank {
    pub fn new() -> Self {
        Self
    }
}

impl Select for Rank {
    fn call<A: Allele>(&self, population: &Population<A>, rng: &mut SeededRng) -> usize {
        let size = population.size();
        let total = size * (size + 1) / 2;
        let mut draw = rng.next_index(total);
        for rank in 0..size {
            let weight = rank + 1;
            if draw < weight {
                return rank;
            }
            draw -= weight;
        }
        size - 1
    }

    fn report(&self) -> String {
        "selection: rank".to_string()
    }
}
