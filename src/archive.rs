//! The archive of best-known solutions, one optimal chromosome per goal.
//!
//! Invariant: every stored chromosome is optimal for its goal. Candidates
//! that are not optimal never touch the archive, no matter how close they
//! come — otherwise the suite would regress toward long tests. Among optimal
//! candidates the shortest wins, ties keep the earliest discovery.
use crate::chromosome::{Allele, Chromosome};
use crate::fitness::{GoalId, GoalSet};
use crate::population::Population;
use itertools::Itertools;
use rustc_hash::FxHashMap;

#[derive(Clone, Debug, Default)]
pub struct Archive<A: Allele> {
    entries: FxHashMap<GoalId, Chromosome<A>>,
}

impl<A: Allele> Archive<A> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Consider one evaluated chromosome for one goal.
    pub fn consider(&mut self, goals: &GoalSet<A>, goal: GoalId, candidate: &Chromosome<A>) {
        let position = match goals.position_of(goal) {
            Some(position) => position,
            None => return,
        };
        let fitness_function = goals.fitness_function_at(position);
        if !fitness_function.is_optimal(candidate.fitness_score(position)) {
            return;
        }
        match self.entries.get(&goal) {
            Some(current) if current.length() <= candidate.length() => {}
            _ => {
                log::debug!(
                    "archive: goal {} covered by chromosome of length {}",
                    goal,
                    candidate.length()
                );
                self.entries.insert(goal, candidate.clone());
            }
        }
    }

    /// Consider one evaluated chromosome for every goal.
    pub fn update(&mut self, goals: &GoalSet<A>, candidate: &Chromosome<A>) {
        for (goal, _) in goals.iter() {
            self.consider(goals, goal, candidate);
        }
    }

    /// Consider a whole population for every goal.
    pub fn update_with_population(&mut self, goals: &GoalSet<A>, population: &Population<A>) {
        for chromosome in &population.chromosomes {
            self.update(goals, chromosome);
        }
    }

    pub fn get(&self, goal: GoalId) -> Option<&Chromosome<A>> {
        self.entries.get(&goal)
    }

    pub fn is_covered(&self, goal: GoalId) -> bool {
        self.entries.contains_key(&goal)
    }

    pub fn covered_goals(&self) -> usize {
        self.entries.len()
    }

    /// Present entries in goal insertion order.
    pub fn values<'a>(&'a self, goals: &'a GoalSet<A>) -> impl Iterator<Item = &'a Chromosome<A>> {
        goals.iter().filter_map(|(goal, _)| self.entries.get(&goal))
    }

    /// Distinct archived chromosomes in goal insertion order.
    pub fn best_individuals(&self, goals: &GoalSet<A>) -> Vec<Chromosome<A>> {
        self.values(goals)
            .unique_by(|chromosome| chromosome.genes.clone())
            .cloned()
            .collect()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
