//! The boundary to the external interpreter.
//!
//! The core never executes a program itself; it hands a chromosome to an
//! [ExecutionHost] and receives an [ExecutionTrace] back. Traces are consumed
//! by the fitness functions and never mutated. The host also extracts the
//! coverage goals of the program under test, which fixes the goal set (and
//! its iteration order) for the whole run.
use crate::chromosome::{Allele, Chromosome};
use crate::errors::Error;
use crate::fitness::GoalSet;
use rustc_hash::{FxHashMap, FxHashSet};

pub type StatementId = usize;

/// Distance of an execution to a statement it did not reach: how many control
/// dependencies away the execution diverged, and how close the decisive
/// branch predicate was to flipping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BranchDistance {
    pub approach_level: u32,
    pub branch_distance: f64,
}

/// The set of program statements observed during one execution, plus the
/// distance data the interpreter collected for unreached statements.
#[derive(Clone, Debug, Default)]
pub struct ExecutionTrace {
    executed: FxHashSet<StatementId>,
    distances: FxHashMap<StatementId, BranchDistance>,
}

impl ExecutionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_execution(&mut self, statement: StatementId) {
        self.executed.insert(statement);
    }

    pub fn record_distance(&mut self, statement: StatementId, distance: BranchDistance) {
        self.distances.insert(statement, distance);
    }

    pub fn was_executed(&self, statement: StatementId) -> bool {
        self.executed.contains(&statement)
    }

    pub fn distance_to(&self, statement: StatementId) -> Option<BranchDistance> {
        self.distances.get(&statement).copied()
    }

    pub fn executed_count(&self) -> usize {
        self.executed.len()
    }
}

/// Executes candidate tests against the program under test.
///
/// `evaluate` receives a read-only view of the chromosome and must not retain
/// it past the call. A failed run is reported as [Error::ExecutionFailure];
/// the search recovers by assigning worst-case fitness for every goal.
pub trait ExecutionHost: Send {
    type Allele: Allele;

    fn evaluate(&mut self, chromosome: &Chromosome<Self::Allele>) -> Result<ExecutionTrace, Error>;

    /// The coverage goals of the program under test, keyed by goal id in a
    /// stable insertion order.
    fn coverage_goals(&mut self) -> Result<GoalSet<Self::Allele>, Error>;
}

/// Host for goal kinds that read the genotype directly (OneMax, SingleBit):
/// every evaluation yields an empty trace and the goal set is supplied
/// upfront by the caller.
#[derive(Debug)]
pub struct NullExecutionHost<A: Allele> {
    goals: Option<GoalSet<A>>,
}

impl<A: Allele> NullExecutionHost<A> {
    pub fn new(goals: GoalSet<A>) -> Self {
        Self { goals: Some(goals) }
    }
}

impl<A: Allele> ExecutionHost for NullExecutionHost<A> {
    type Allele = A;

    fn evaluate(&mut self, _chromosome: &Chromosome<A>) -> Result<ExecutionTrace, Error> {
        Ok(ExecutionTrace::new())
    }

    fn coverage_goals(&mut self) -> Result<GoalSet<A>, Error> {
        self.goals.take().ok_or(Error::UnsupportedOperation(
            "NullExecutionHost hands out its goal set only once",
        ))
    }
}
