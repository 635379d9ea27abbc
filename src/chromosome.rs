//! The candidate solution, a sequence of genes plus its per-goal fitness.
use crate::fitness::FitnessValue;
use std::fmt;
use std::hash::Hash;

/// Marker trait for gene values. Implemented for the gene types the concrete
/// genotypes produce: booleans for bit strings, integers for integer lists
/// and event sequences.
pub trait Allele: Copy + Clone + Send + Sync + fmt::Debug + PartialEq + Eq + Hash {}
impl Allele for bool {}
impl Allele for i64 {}
impl Allele for usize {}

/// A chromosome owns its genes and, once evaluated, one fitness score per
/// coverage goal (aligned with the goal set's insertion order).
///
/// Genes are immutable after construction. Variation operators return fresh
/// chromosomes with empty scores, so an unevaluated chromosome is always
/// recognisable by `is_evaluated() == false`.
#[derive(Clone, Debug, PartialEq)]
pub struct Chromosome<A: Allele> {
    pub genes: Vec<A>,
    pub fitness_scores: Vec<FitnessValue>,
}

impl<A: Allele> Chromosome<A> {
    pub fn new(genes: Vec<A>) -> Self {
        Self {
            genes,
            fitness_scores: vec![],
        }
    }

    pub fn length(&self) -> usize {
        self.genes.len()
    }

    pub fn is_evaluated(&self) -> bool {
        !self.fitness_scores.is_empty()
    }

    /// Score for the goal at the given goal-set position.
    pub fn fitness_score(&self, goal_index: usize) -> FitnessValue {
        self.fitness_scores[goal_index]
    }

    /// Summed fitness over all goals, the scalarisation used by the
    /// single-objective algorithms and tournament selection.
    pub fn summed_fitness(&self) -> FitnessValue {
        self.fitness_scores.iter().sum()
    }
}

impl<A: Allele> fmt::Display for Chromosome<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chromosome ({} genes): {:?}", self.genes.len(), self.genes)
    }
}
