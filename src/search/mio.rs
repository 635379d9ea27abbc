//! MIO, the many-objective interactive optimizer.
//!
//! Every goal owns a capped bucket of candidates ranked by a heuristic
//! priority. Iterations either sample a fresh chromosome or pick one from a
//! random non-empty bucket and mutate it a bounded number of times, feeding
//! every evaluated candidate back into all buckets. As the consumed budget
//! passes the start of the focused phase, the sampling probability, bucket
//! caps and mutation counts interpolate linearly from their start values to
//! their focused values, which shrinks the buckets and forces convergence.
use super::{evaluate_chromosome, SearchAlgorithm, SearchState};
use crate::chromosome::{Allele, Chromosome};
use crate::errors::Error;
use crate::execution::ExecutionHost;
use crate::fitness::{FitnessValue, GoalId, GoalSet};
use crate::genotype::Genotype;
use crate::mutate::{Mutate, MutateWrapper};
use crate::population::Population;
use crate::statistics::Statistics;
use crate::stop::StopCondition;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::time::Instant;

/// Maps a raw fitness to a normalised priority in `[0, 1]` for bucket
/// ranking. Goals without a heuristic rank by raw fitness.
pub type HeuristicFunction = fn(FitnessValue) -> f64;

#[derive(Clone, Debug)]
pub struct MioOptions {
    pub start_of_focused_phase: f64,
    pub random_selection_probability_start: f64,
    pub random_selection_probability_focused_phase: f64,
    pub max_archive_size_start: usize,
    pub max_archive_size_focused_phase: usize,
    pub max_mutation_count_start: usize,
    pub max_mutation_count_focused_phase: usize,
}

impl Default for MioOptions {
    fn default() -> Self {
        Self {
            start_of_focused_phase: 0.5,
            random_selection_probability_start: 0.5,
            random_selection_probability_focused_phase: 0.0,
            max_archive_size_start: 10,
            max_archive_size_focused_phase: 1,
            max_mutation_count_start: 1,
            max_mutation_count_focused_phase: 10,
        }
    }
}

impl MioOptions {
    fn interpolate(&self, start: f64, focused: f64, progress: f64) -> f64 {
        let fraction = if self.start_of_focused_phase <= 0.0 {
            1.0
        } else {
            (progress / self.start_of_focused_phase).min(1.0)
        };
        start + (focused - start) * fraction
    }

    pub fn random_selection_probability(&self, progress: f64) -> f64 {
        self.interpolate(
            self.random_selection_probability_start,
            self.random_selection_probability_focused_phase,
            progress,
        )
    }

    pub fn max_archive_size(&self, progress: f64) -> usize {
        (self
            .interpolate(
                self.max_archive_size_start as f64,
                self.max_archive_size_focused_phase as f64,
                progress,
            )
            .round() as usize)
            .max(1)
    }

    pub fn max_mutation_count(&self, progress: f64) -> usize {
        (self
            .interpolate(
                self.max_mutation_count_start as f64,
                self.max_mutation_count_focused_phase as f64,
                progress,
            )
            .round() as usize)
            .max(1)
    }
}

#[derive(Clone, Debug)]
struct BucketEntry<A: Allele> {
    chromosome: Chromosome<A>,
    priority: f64,
}

pub struct Mio<G: Genotype, H: ExecutionHost<Allele = G::Allele>> {
    pub(super) genotype: G,
    pub(super) goals: GoalSet<G::Allele>,
    pub(super) host: H,
    pub(super) stop_condition: Box<dyn StopCondition>,
    pub(super) mutate: MutateWrapper,
    pub(super) options: MioOptions,
    pub(super) heuristics: FxHashMap<GoalId, HeuristicFunction>,
    pub(super) state: SearchState<G::Allele>,
    buckets: Vec<Vec<BucketEntry<G::Allele>>>,
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> Mio<G, H> {
    pub(super) fn new(
        genotype: G,
        goals: GoalSet<G::Allele>,
        host: H,
        stop_condition: Box<dyn StopCondition>,
        mutate: MutateWrapper,
        options: MioOptions,
        heuristics: FxHashMap<GoalId, HeuristicFunction>,
        state: SearchState<G::Allele>,
    ) -> Self {
        Self {
            genotype,
            goals,
            host,
            stop_condition,
            mutate,
            options,
            heuristics,
            state,
            buckets: vec![],
        }
    }

    /// Feed one evaluated candidate into the archive and every goal bucket,
    /// honouring the current cap: a full bucket evicts the lowest priority,
    /// priority ties keep the shorter chromosome.
    fn process_candidate(&mut self, chromosome: &Chromosome<G::Allele>, max_archive_size: usize) {
        self.state.archive.update(&self.goals, chromosome);
        for position in 0..self.goals.len() {
            let goal = self.goals.goal_at(position);
            let score = chromosome.fitness_score(position);
            let priority = match self.heuristics.get(&goal) {
                Some(heuristic) => heuristic(score),
                None => score,
            };
            let bucket = &mut self.buckets[position];
            bucket.push(BucketEntry {
                chromosome: chromosome.clone(),
                priority,
            });
            bucket.sort_by(|a, b| {
                OrderedFloat(b.priority)
                    .cmp(&OrderedFloat(a.priority))
                    .then(a.chromosome.length().cmp(&b.chromosome.length()))
            });
            bucket.truncate(max_archive_size);
        }
    }

    /// The per-goal tops: the archive entry when the goal is covered, the
    /// best bucket candidate otherwise.
    fn per_goal_tops(&self) -> Vec<Chromosome<G::Allele>> {
        self.goals
            .iter()
            .enumerate()
            .filter_map(|(position, (goal, _))| {
                self.state
                    .archive
                    .get(goal)
                    .or_else(|| self.buckets[position].first().map(|entry| &entry.chromosome))
                    .cloned()
            })
            .collect()
    }
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> SearchAlgorithm for Mio<G, H> {
    type Allele = G::Allele;

    fn find_solution(&mut self) -> Result<Vec<Chromosome<G::Allele>>, Error> {
        self.state.reset();
        self.buckets = vec![vec![]; self.goals.len()];

        loop {
            let observation = self.state.observation(self.goals.len());
            if self.stop_condition.is_finished(&observation) {
                break;
            }
            let progress = self.stop_condition.progress(&observation);
            let random_selection_probability =
                self.options.random_selection_probability(progress);
            let max_archive_size = self.options.max_archive_size(progress);
            let max_mutation_count = self.options.max_mutation_count(progress);

            let non_empty: Vec<usize> = (0..self.buckets.len())
                .filter(|&position| !self.buckets[position].is_empty())
                .collect();

            if non_empty.is_empty() || self.state.rng.next_double() < random_selection_probability
            {
                let mut chromosome = self.genotype.chromosome_factory(&mut self.state.rng);
                evaluate_chromosome(
                    &mut self.host,
                    &self.goals,
                    &mut self.state.statistics,
                    &mut chromosome,
                )?;
                self.process_candidate(&chromosome, max_archive_size);
            } else {
                let position = *self.state.rng.pick(&non_empty);
                let entry_index = self.state.rng.next_index(self.buckets[position].len());
                let mut best = self.buckets[position][entry_index].chromosome.clone();

                for _ in 0..max_mutation_count {
                    let mut mutant = self
                        .mutate
                        .call(&self.genotype, &best, &mut self.state.rng);
                    evaluate_chromosome(
                        &mut self.host,
                        &self.goals,
                        &mut self.state.statistics,
                        &mut mutant,
                    )?;
                    self.process_candidate(&mutant, max_archive_size);

                    let fitness_function = self.goals.fitness_function_at(position);
                    if fitness_function.compare(
                        mutant.fitness_score(position),
                        best.fitness_score(position),
                    ) == Ordering::Greater
                    {
                        best = mutant;
                    }
                }
            }

            // tighten existing buckets as the cap interpolates down
            for bucket in &mut self.buckets {
                bucket.truncate(max_archive_size);
            }

            self.state.current = Population::new(self.per_goal_tops());
            self.state.close_iteration();
        }
        Ok(self.per_goal_tops())
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
