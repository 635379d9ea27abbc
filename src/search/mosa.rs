//! MOSA, the many-objective sorting algorithm.
//!
//! Every generation builds an offspring population, pools it with the
//! parents, and survives the pool front by front: first the preferred front
//! (the single best chromosome per still-uncovered goal), then the fronts of
//! fast non-dominated sorting restricted to the uncovered goals. An
//! overflowing front is ordered by sub-vector dominance, lowest score first,
//! after a shuffle that pins tie-breaking to the run's seed.
pub mod sorting;

use super::{evaluate_chromosome, SearchAlgorithm, SearchState};
use crate::chromosome::Chromosome;
use crate::crossover::{Crossover, CrossoverWrapper};
use crate::errors::Error;
use crate::execution::ExecutionHost;
use crate::fitness::GoalSet;
use crate::genotype::Genotype;
use crate::mutate::{Mutate, MutateWrapper};
use crate::population::Population;
use crate::select::{Select, SelectRank};
use crate::statistics::{SearchAction, Statistics};
use crate::stop::StopCondition;
use std::time::Instant;

pub struct Mosa<G: Genotype, H: ExecutionHost<Allele = G::Allele>> {
    pub(super) genotype: G,
    pub(super) goals: GoalSet<G::Allele>,
    pub(super) host: H,
    pub(super) stop_condition: Box<dyn StopCondition>,
    pub(super) mutate: MutateWrapper,
    pub(super) crossover: CrossoverWrapper,
    pub(super) population_size: usize,
    pub(super) crossover_probability: f64,
    pub(super) mutation_probability: f64,
    pub(super) state: SearchState<G::Allele>,
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> Mosa<G, H> {
    /// Positional indices of the goals without an archive entry, the view
    /// all sorting is restricted to.
    fn uncovered_positions(&self) -> Vec<usize> {
        self.goals
            .iter()
            .enumerate()
            .filter(|(_, (goal, _))| !self.state.archive.is_covered(*goal))
            .map(|(position, _)| position)
            .collect()
    }

    fn offspring_population(
        &mut self,
        population: &Population<G::Allele>,
        generation: usize,
    ) -> Result<Population<G::Allele>, Error> {
        let rank = SelectRank::new();
        let mut offspring = Population::new_empty();
        while offspring.size() < self.population_size {
            // the initial population is unsorted, so the first generation
            // picks parents uniformly; afterwards it is kept worst-first for
            // rank selection
            let (father_index, mother_index) = if generation == 0 {
                (
                    self.state.rng.next_index(population.size()),
                    self.state.rng.next_index(population.size()),
                )
            } else {
                (
                    rank.call(population, &mut self.state.rng),
                    rank.call(population, &mut self.state.rng),
                )
            };
            let father = &population.chromosomes[father_index];
            let mother = &population.chromosomes[mother_index];

            let (mut first, mut second) = if self.state.rng.chance(self.crossover_probability) {
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
        Ok(offspring)
    }

    /// Fill the next population front by front; an overflowing front
    /// contributes its sub-vector-dominance prefix.
    fn survive(
        &mut self,
        pool: Vec<Chromosome<G::Allele>>,
        uncovered: &[usize],
    ) -> Population<G::Allele> {
        let now = Instant::now();
        let fronts =
            sorting::preference_sort(pool, &self.goals, uncovered, self.population_size);

        let mut next = Vec::with_capacity(self.population_size);
        for mut front in fronts {
            if next.len() == self.population_size {
                break;
            }
            if next.len() + front.len() <= self.population_size {
                next.append(&mut front);
            } else {
                self.state.rng.shuffle(&mut front);
                let scores =
                    sorting::sub_vector_dominance_scores(&front, &self.goals, uncovered);
                let mut scored: Vec<(usize, Chromosome<G::Allele>)> =
                    scores.into_iter().zip(front).collect();
                // stable sort keeps the shuffled order on score ties
                scored.sort_by_key(|(score, _)| *score);
                next.extend(
                    scored
                        .into_iter()
                        .take(self.population_size - next.len())
                        .map(|(_, chromosome)| chromosome),
                );
            }
        }
        self.state
            .statistics
            .add_duration(SearchAction::Sort, now.elapsed());
        Population::new(next)
    }
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> SearchAlgorithm for Mosa<G, H> {
    type Allele = G::Allele;

    fn find_solution(&mut self) -> Result<Vec<Chromosome<G::Allele>>, Error> {
        self.state.reset();

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
        self.state
            .archive
            .update_with_population(&self.goals, &population);
        self.state.current = population.clone();

        let mut generation = 0;
        while !self
            .stop_condition
            .is_finished(&self.state.observation(self.goals.len()))
        {
            let offspring = self.offspring_population(&population, generation)?;
            self.state
                .archive
                .update_with_population(&self.goals, &offspring);

            let mut pool = population.chromosomes;
            pool.extend(offspring.chromosomes);
            let uncovered = self.uncovered_positions();
            let mut next = self.survive(pool, &uncovered);

            self.state
                .archive
                .update_with_population(&self.goals, &next);
            // worst first, the ordering rank selection expects
            next.reverse();
            population = next;
            self.state.current = population.clone();

            log::trace!(
                "generation {}: fitness mean {:.2} (stddev {:.2}), length mean {:.1}",
                generation,
                population.summed_fitness_mean(),
                population.summed_fitness_stddev(),
                population.length_mean()
            );
            generation += 1;
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
