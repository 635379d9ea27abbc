//! A classic generational genetic algorithm over the summed-fitness
//! scalarisation, with elitism of one. The single-objective workhorse for
//! programs where many-objective sorting is overkill.
use super::{evaluate_chromosome, SearchAlgorithm, SearchState};
use crate::chromosome::Chromosome;
use crate::crossover::{Crossover, CrossoverWrapper};
use crate::errors::Error;
use crate::execution::ExecutionHost;
use crate::fitness::GoalSet;
use crate::genotype::Genotype;
use crate::mutate::{Mutate, MutateWrapper};
use crate::population::Population;
use crate::select::{Select, SelectWrapper};
use crate::statistics::Statistics;
use crate::stop::StopCondition;
use ordered_float::OrderedFloat;
use std::time::Instant;

pub struct SimpleGa<G: Genotype, H: ExecutionHost<Allele = G::Allele>> {
    pub(super) genotype: G,
    pub(super) goals: GoalSet<G::Allele>,
    pub(super) host: H,
    pub(super) stop_condition: Box<dyn StopCondition>,
    pub(super) mutate: MutateWrapper,
    pub(super) crossover: CrossoverWrapper,
    pub(super) select: SelectWrapper,
    pub(super) population_size: usize,
    pub(super) crossover_probability: f64,
    pub(super) mutation_probability: f64,
    pub(super) state: SearchState<G::Allele>,
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> SimpleGa<G, H> {
    fn random_population(&mut self) -> Result<Population<G::Allele>, Error> {
        let mut population = Population::new_empty();
        for _ in 0..self.population_size {
            let mut chromosome = self.genotype.chromosome_factory(&mut self.state.rng);
            evaluate_chromosome(
                &mut self.host,
                &self.goals,
                &mut self.state.statistics,
                &mut chromosome,
            )?;
            population.push(chromosome);
        }
        Ok(population)
    }
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> SearchAlgorithm for SimpleGa<G, H> {
    type Allele = G::Allele;

    fn find_solution(&mut self) -> Result<Vec<Chromosome<G::Allele>>, Error> {
        self.state.reset();

        let mut population = self.random_population()?;
        self.state
            .archive
            .update_with_population(&self.goals, &population);

        while !self
            .stop_condition
            .is_finished(&self.state.observation(self.goals.len()))
        {
            // worst first, the ordering rank selection expects
            population
                .chromosomes
                .sort_by_key(|chromosome| OrderedFloat(chromosome.summed_fitness()));

            let mut offspring = Population::new_empty();
            if let Some(best) = population.chromosomes.last() {
                offspring.push(best.clone());
            }
            while offspring.size() < self.population_size {
                let father = &population.chromosomes[self.select.call(&population, &mut self.state.rng)];
                let mother = &population.chromosomes[self.select.call(&population, &mut self.state.rng)];

                let (mut first, mut second) = if self.state.rng.chance(self.crossover_probability)
                {
                    self.crossover
                        .call(&self.genotype, father, mother, &mut self.state.rng)
                } else {
                    (
                        Chromosome::new(father.genes.clone()),
                        Chromosome::new(mother.genes.clone()),
                    )
                };
                if self.state.rng.chance(self.mutation_probability) {
                    first = self.mutate.call(&self.genotype, &first, &mut self.state.rng);
                }
                if self.state.rng.chance(self.mutation_probability) {
                    second = self
                        .mutate
                        .call(&self.genotype, &second, &mut self.state.rng);
                }

                evaluate_chromosome(
                    &mut self.host,
                    &self.goals,
                    &mut self.state.statistics,
                    &mut first,
                )?;
                offspring.push(first);
                if offspring.size() < self.population_size {
                    evaluate_chromosome(
                        &mut self.host,
                        &self.goals,
                        &mut self.state.statistics,
                        &mut second,
                    )?;
                    offspring.push(second);
                }
            }

            self.state
                .archive
                .update_with_population(&self.goals, &offspring);
            population = offspring;
            self.state.current = population.clone();

            log::trace!(
                "generation {}: fitness mean {:.2}, length mean {:.1}",
                self.state.iterations,
                population.summed_fitness_mean(),
                population.length_mean()
            );
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
