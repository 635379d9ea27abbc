//! The search goals: one fitness function per coverage goal.
//!
//! The crate-wide convention is **maximization**: `compare(a, b) ==
//! Ordering::Greater` means `a` is the better fitness, and `is_optimal` is
//! monotone under improvement. Measures that are naturally minimizing (such
//! as the distance to an unreached statement) negate before returning.
//!
//! # Example:
//! ```
//! use blocktest::chromosome::Chromosome;
//! use blocktest::execution::ExecutionTrace;
//! use blocktest::fitness::{FitnessFunction, OneMax};
//!
//! let one_max = OneMax::new(4);
//! let chromosome = Chromosome::new(vec![true, false, true, true]);
//! let fitness = one_max
//!     .calculate(&chromosome, &ExecutionTrace::new())
//!     .unwrap();
//! assert_eq!(fitness, 3.0);
//! assert!(!one_max.is_optimal(fitness));
//! ```
mod one_max;
mod single_bit;
mod statement;

pub use self::one_max::OneMax;
pub use self::single_bit::SingleBit;
pub use self::statement::StatementFitness;

use crate::chromosome::{Allele, Chromosome};
use crate::errors::Error;
use crate::execution::ExecutionTrace;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// Fitness scores are floats so distance-based measures keep their gradient;
/// total ordering is provided by [FitnessFunction::compare].
pub type FitnessValue = f64;

pub type GoalId = usize;

pub trait FitnessFunction<A: Allele>: Send + Sync + fmt::Debug {
    /// Deterministic modulo the execution host: the same chromosome and
    /// trace always yield the same fitness.
    fn calculate(
        &self,
        chromosome: &Chromosome<A>,
        trace: &ExecutionTrace,
    ) -> Result<FitnessValue, Error>;

    /// Whether this fitness means the goal is covered. Monotone: an optimal
    /// fitness stays optimal under any improvement.
    fn is_optimal(&self, fitness: FitnessValue) -> bool;

    /// The fitness assigned when the execution host fails on a chromosome.
    fn worst(&self) -> FitnessValue {
        FitnessValue::NEG_INFINITY
    }

    /// Total order on fitness values, `Greater` meaning the first is better.
    fn compare(&self, a: FitnessValue, b: FitnessValue) -> Ordering {
        OrderedFloat(a).cmp(&OrderedFloat(b))
    }
}

/// The coverage goals of a run: an insertion-ordered `GoalId →
/// FitnessFunction` mapping. Iteration order is the insertion order and is
/// stable for the whole run; chromosome fitness-score vectors are aligned
/// with it positionally.
#[derive(Debug, Default)]
pub struct GoalSet<A: Allele> {
    goals: Vec<(GoalId, Box<dyn FitnessFunction<A>>)>,
    index: FxHashMap<GoalId, usize>,
}

impl<A: Allele> GoalSet<A> {
    pub fn new() -> Self {
        Self {
            goals: vec![],
            index: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, goal: GoalId, fitness_function: Box<dyn FitnessFunction<A>>) {
        debug_assert!(!self.index.contains_key(&goal));
        self.index.insert(goal, self.goals.len());
        self.goals.push((goal, fitness_function));
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Goals in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (GoalId, &dyn FitnessFunction<A>)> {
        self.goals.iter().map(|(goal, ff)| (*goal, ff.as_ref()))
    }

    pub fn get(&self, goal: GoalId) -> Option<&dyn FitnessFunction<A>> {
        self.index
            .get(&goal)
            .map(|position| self.goals[*position].1.as_ref())
    }

    /// Positional index of a goal in insertion order.
    pub fn position_of(&self, goal: GoalId) -> Option<usize> {
        self.index.get(&goal).copied()
    }

    pub fn goal_at(&self, position: usize) -> GoalId {
        self.goals[position].0
    }

    pub fn fitness_function_at(&self, position: usize) -> &dyn FitnessFunction<A> {
        self.goals[position].1.as_ref()
    }

    /// The worst-case score vector, assigned on execution failure.
    pub fn worst_scores(&self) -> Vec<FitnessValue> {
        self.goals.iter().map(|(_, ff)| ff.worst()).collect()
    }

    /// Consume the set, yielding the goals in insertion order. Used by the
    /// iterative test generator to run one search per goal.
    pub fn into_goals(self) -> Vec<(GoalId, Box<dyn FitnessFunction<A>>)> {
        self.goals
    }
}
