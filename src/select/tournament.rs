use super::Select;
use crate::chromosome::Allele;
use crate::fitness::FitnessValue;
use crate::population::Population;
use crate::rng::SeededRng;

/// Run a tournament with randomly chosen chromosomes and pick the single
/// winner by summed fitness over all goals.
#[derive(Clone, Debug)]
pub struct Tournament {
    pub tournament_size: usize,
}

impl Tournament {
    pub fn new(tournament_size: usize) -> Self {
        Self { tournament_size }
    }
}

impl Select for Tournament {
    fn call<A: Allele>(&self, population: &Population<A>, rng: &mut SeededRng) -> usize {
        let population_size = population.size();
        let tournament_size = self.tournament_size.min(population_size);

        let mut winning_index = 0;
        let mut winning_fitness_value = FitnessValue::NEG_INFINITY;
        for _ in 0..tournament_size {
            let sample_index = rng.next_index(population_size);
            let sample_fitness_value = population.chromosomes[sample_index].summed_fitness();
            if sample_fitness_value >= winning_fitness_value {
                winning_index = sample_index;
                winning_fitness_value = sample_fitness_value;
            }
        }
        winning_index
    }

    fn report(&self) -> String {
        format!("selection: tournament (size {})", self.tournament_size)
    }
}
