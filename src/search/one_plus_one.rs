//! The (1+1) evolutionary algorithm: a single parent, a single mutant per
//! iteration, accept on equal-or-better summed fitness. Accepting sideways
//! moves keeps the walk from stalling on plateaus.
use super::{evaluate_chromosome, SearchAlgorithm, SearchState};
use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::execution::ExecutionHost;
use crate::fitness::GoalSet;
use crate::genotype::Genotype;
use crate::mutate::{Mutate, MutateWrapper};
use crate::population::Population;
use crate::statistics::Statistics;
use crate::stop::StopCondition;
use std::time::Instant;

pub struct OnePlusOne<G: Genotype, H: ExecutionHost<Allele = G::Allele>> {
    pub(super) genotype: G,
    pub(super) goals: GoalSet<G::Allele>,
    pub(super) host: H,
    pub(super) stop_condition: Box<dyn StopCondition>,
    pub(super) mutate: MutateWrapper,
    pub(super) state: SearchState<G::Allele>,
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> SearchAlgorithm for OnePlusOne<G, H> {
    type Allele = G::Allele;

    fn find_solution(&mut self) -> Result<Vec<Chromosome<G::Allele>>, Error> {
        self.state.reset();

        let mut parent = self.genotype.chromosome_factory(&mut self.state.rng);
        evaluate_chromosome(
            &mut self.host,
            &self.goals,
            &mut self.state.statistics,
            &mut parent,
        )?;
        self.state.archive.update(&self.goals, &parent);

        while !self
            .stop_condition
            .is_finished(&self.state.observation(self.goals.len()))
        {
            let mut child = self
                .mutate
                .call(&self.genotype, &parent, &mut self.state.rng);
            evaluate_chromosome(
                &mut self.host,
                &self.goals,
                &mut self.state.statistics,
                &mut child,
            )?;
            self.state.archive.update(&self.goals, &child);

            if child.summed_fitness() >= parent.summed_fitness() {
                parent = child;
            }
            self.state.current = Population::new(vec![parent.clone()]);
            self.state.close_iteration();
        }
        Ok(self.state.archive.best_individuals(&self.goals))
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
