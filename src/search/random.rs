//! Random search: a baseline that evaluates fresh random chromosomes and
//! keeps each one that covers a still-uncovered goal.
use super::{evaluate_chromosome, SearchAlgorithm, SearchState};
use crate::chromosome::Chromosome;
use crate::execution::ExecutionHost;
use crate::errors::Error;
use crate::fitness::GoalSet;
use crate::genotype::Genotype;
use crate::population::Population;
use crate::statistics::Statistics;
use crate::stop::StopCondition;
use std::time::Instant;

pub struct RandomSearch<G: Genotype, H: ExecutionHost<Allele = G::Allele>> {
    pub(super) genotype: G,
    pub(super) goals: GoalSet<G::Allele>,
    pub(super) host: H,
    pub(super) stop_condition: Box<dyn StopCondition>,
    pub(super) state: SearchState<G::Allele>,
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> SearchAlgorithm for RandomSearch<G, H> {
    type Allele = G::Allele;

    fn find_solution(&mut self) -> Result<Vec<Chromosome<G::Allele>>, Error> {
        self.state.reset();

        while !self
            .stop_condition
            .is_finished(&self.state.observation(self.goals.len()))
        {
            let mut chromosome = self.genotype.chromosome_factory(&mut self.state.rng);
            evaluate_chromosome(
                &mut self.host,
                &self.goals,
                &mut self.state.statistics,
                &mut chromosome,
            )?;

            // one suite entry per chromosome, no matter how many goals it
            // newly covers
            let mut newly_covered = false;
            for (position, (goal, fitness_function)) in self.goals.iter().enumerate() {
                if self.state.archive.is_covered(goal) {
                    continue;
                }
                if fitness_function.is_optimal(chromosome.fitness_score(position)) {
                    self.state.archive.consider(&self.goals, goal, &chromosome);
                    newly_covered = true;
                }
            }
            if newly_covered {
                self.state.current.push(chromosome);
            }
            self.state.close_iteration();
        }
        Ok(self.state.current.chromosomes.clone())
    }

    fn iterations(&self) -> usize {
        self.state.iterations
    }
    fn started_at(&self) -> Instant {
        self.state.started_at
    }
    fn current_solution(&self) -> &Population<G::Allele> {
        &self.state.current
    }
    fn goals(&self) -> &GoalSet<G::Allele> {
        &self.goals
    }
    fn statistics(&self) -> &Statistics {
        &self.state.statistics
    }
}
