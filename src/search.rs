//! The search algorithms for covering the goals.
//!
//! There are 5 algorithms behind the one [SearchAlgorithm] contract:
//! * [RandomSearch](self::random::RandomSearch) — evaluate fresh random
//!   chromosomes, keep each one that covers a new goal
//! * [OnePlusOne](self::one_plus_one::OnePlusOne) — single parent, accept a
//!   mutant when its summed fitness is no worse
//! * [SimpleGa](self::simple_ga::SimpleGa) — classic generational GA over
//!   the summed-fitness scalarisation
//! * [Mosa](self::mosa::Mosa) — many-objective sorting with preference
//!   fronts restricted to uncovered goals
//! * [Mio](self::mio::Mio) — many-objective interactive optimizer with
//!   capped per-goal archives and a focused phase
//!
//! All wiring happens once through the superset [Builder]: every knob is
//! captured up front and `build(variant)` rejects knobs the chosen algorithm
//! does not honour, so there are no late setter failures inside a run.
//!
//! # Example:
//! ```
//! use blocktest::execution::NullExecutionHost;
//! use blocktest::fitness::{GoalSet, OneMax};
//! use blocktest::genotype::{BitStringGenotype, Genotype};
//! use blocktest::mutate::MutateBitFlip;
//! use blocktest::rng::SeededRng;
//! use blocktest::search::{Builder, SearchAlgorithm, SearchVariant};
//! use blocktest::stop::StopFixedIterations;
//!
//! let genotype = BitStringGenotype::builder()
//!     .with_genes_size(10)
//!     .build()
//!     .unwrap();
//! let mut goals = GoalSet::new();
//! goals.insert(0, Box::new(OneMax::new(10)));
//!
//! let mut algorithm = Builder::new()
//!     .with_genotype(genotype)
//!     .with_host(NullExecutionHost::new(goals))
//!     .with_stop_condition(Box::new(StopFixedIterations::new(1000)))
//!     .with_mutate(MutateBitFlip::new().into())
//!     .with_rng(SeededRng::from_seed(0))
//!     .build(SearchVariant::OnePlusOne)
//!     .unwrap();
//! let best_individuals = algorithm.find_solution().unwrap();
//! assert_eq!(best_individuals[0].genes, vec![true; 10]);
//! ```
mod builder;
pub mod mio;
pub mod mosa;
pub mod one_plus_one;
pub mod random;
pub mod simple_ga;
mod wrapper;

pub use self::builder::Builder;
pub use self::mio::{Mio, MioOptions};
pub use self::mosa::Mosa;
pub use self::one_plus_one::OnePlusOne;
pub use self::random::RandomSearch;
pub use self::simple_ga::SimpleGa;
pub use self::wrapper::Wrapper;

use crate::archive::Archive;
use crate::chromosome::{Allele, Chromosome};
use crate::errors::Error;
use crate::execution::ExecutionHost;
use crate::fitness::GoalSet;
use crate::population::Population;
use crate::rng::SeededRng;
use crate::statistics::{SearchAction, Statistics};
use crate::stop::SearchObservation;
use std::fmt;
use std::time::Instant;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SearchVariant {
    Random,
    OnePlusOne,
    SimpleGa,
    Mosa,
    Mio,
}

impl fmt::Display for SearchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchVariant::Random => write!(f, "random"),
            SearchVariant::OnePlusOne => write!(f, "one-plus-one"),
            SearchVariant::SimpleGa => write!(f, "simplega"),
            SearchVariant::Mosa => write!(f, "mosa"),
            SearchVariant::Mio => write!(f, "mio"),
        }
    }
}

/// The shared algorithm contract: one call to
/// [find_solution](SearchAlgorithm::find_solution) runs the search to its
/// stopping condition and returns the final best individuals; the
/// observables are what the stopping conditions and the statistics
/// reporting see.
pub trait SearchAlgorithm {
    type Allele: Allele;

    fn find_solution(&mut self) -> Result<Vec<Chromosome<Self::Allele>>, Error>;
    fn iterations(&self) -> usize;
    fn started_at(&self) -> Instant;
    fn current_solution(&self) -> &Population<Self::Allele>;
    fn goals(&self) -> &GoalSet<Self::Allele>;
    fn statistics(&self) -> &Statistics;
}

/// Run-scoped state shared by all algorithms: the seeded randomness source,
/// the archive, the statistics collector and the observables.
#[derive(Debug)]
pub struct SearchState<A: Allele> {
    pub rng: SeededRng,
    pub archive: Archive<A>,
    pub statistics: Statistics,
    pub iterations: usize,
    pub started_at: Instant,
    pub current: Population<A>,
}

impl<A: Allele> SearchState<A> {
    pub fn new(rng: SeededRng) -> Self {
        Self {
            rng,
            archive: Archive::new(),
            statistics: Statistics::new(),
            iterations: 0,
            started_at: Instant::now(),
            current: Population::new_empty(),
        }
    }

    /// Explicit reset at the start of every `find_solution` call; the only
    /// point in a run where the archive is cleared.
    pub fn reset(&mut self) {
        self.archive.reset();
        self.statistics = Statistics::new();
        self.statistics.start();
        self.iterations = 0;
        self.started_at = Instant::now();
        self.current = Population::new_empty();
    }

    pub fn observation(&self, total_goals: usize) -> SearchObservation {
        SearchObservation {
            iterations: self.iterations,
            started_at: self.started_at,
            covered_goals: self.archive.covered_goals(),
            total_goals,
        }
    }

    pub fn close_iteration(&mut self) {
        self.iterations += 1;
        self.statistics.increment_iterations();
        self.statistics
            .record_covered_goals(self.archive.covered_goals());
    }
}

/// Execute one chromosome against the host and fill in its per-goal fitness
/// scores. An [Error::ExecutionFailure] is recovered locally by assigning
/// the worst-case score for every goal; any other error terminates the run.
pub(crate) fn evaluate_chromosome<H: ExecutionHost>(
    host: &mut H,
    goals: &GoalSet<H::Allele>,
    statistics: &mut Statistics,
    chromosome: &mut Chromosome<H::Allele>,
) -> Result<(), Error> {
    let now = Instant::now();
    statistics.increment_evaluations();
    match host.evaluate(chromosome) {
        Ok(trace) => {
            log::trace!(
                "evaluated chromosome of length {}, trace covers {} statements",
                chromosome.length(),
                trace.executed_count()
            );
            let mut scores = Vec::with_capacity(goals.len());
            for (_, fitness_function) in goals.iter() {
                scores.push(fitness_function.calculate(chromosome, &trace)?);
            }
            chromosome.fitness_scores = scores;
        }
        Err(Error::ExecutionFailure(message)) => {
            log::debug!(
                "execution failure, assigning worst-case fitness: {}",
                message
            );
            chromosome.fitness_scores = goals.worst_scores();
        }
        Err(error) => return Err(error),
    }
    statistics.add_duration(SearchAction::Evaluate, now.elapsed());
    Ok(())
}
