//! Search-based test generation for block-based programs.
//!
//! Given a program under test (behind an
//! [ExecutionHost](crate::execution::ExecutionHost)) and a set of coverage
//! goals, the crate
//! evolves a population of candidate test cases to cover as many goals as
//! possible within a bounded budget, and returns a minimized test suite.
//!
//! There are four main elements:
//! * The [Genotype](crate::genotype) (the search space: bit strings, integer
//!   lists, or event sequences encoding input events)
//! * The [FitnessFunction](crate::fitness::FitnessFunction)s (the coverage
//!   goals, one function per goal)
//! * The [SearchAlgorithm](crate::search::SearchAlgorithm)s (random search,
//!   (1+1) EA, a generational GA, MOSA and MIO)
//! * The [TestGenerator](crate::generator::TestGenerator) façade (wires a
//!   parsed [Configuration](crate::config::Configuration) into an algorithm
//!   and exports the suite)
//!
//! ## Quick Usage
//!
//! ```rust
//! use blocktest::execution::NullExecutionHost;
//! use blocktest::fitness::{GoalSet, SingleBit};
//! use blocktest::genotype::{BitStringGenotype, Genotype};
//! use blocktest::mutate::MutateBitFlip;
//! use blocktest::rng::SeededRng;
//! use blocktest::search::{Builder, SearchAlgorithm, SearchVariant};
//! use blocktest::stop::StopFixedIterations;
//!
//! // the search space
//! let genotype = BitStringGenotype::builder()
//!     .with_genes_size(10)
//!     .build()
//!     .unwrap();
//!
//! // the coverage goals, one per bit
//! let mut goals = GoalSet::new();
//! for bit in 0..10 {
//!     goals.insert(bit, Box::new(SingleBit::new(bit)));
//! }
//!
//! // the search algorithm
//! let mut algorithm = Builder::new()
//!     .with_genotype(genotype)
//!     .with_host(NullExecutionHost::new(goals))
//!     .with_stop_condition(Box::new(StopFixedIterations::new(1000)))
//!     .with_mutate(MutateBitFlip::new().into())
//!     .with_rng(SeededRng::from_seed(0))
//!     .build(SearchVariant::Mio)
//!     .unwrap();
//!
//! // one best individual per goal
//! let best_individuals = algorithm.find_solution().unwrap();
//! assert_eq!(best_individuals.len(), 10);
//! ```
pub mod archive;
pub mod chromosome;
pub mod config;
pub mod crossover;
pub mod errors;
pub mod execution;
pub mod fitness;
pub mod generator;
pub mod genotype;
pub mod mutate;
pub mod population;
pub mod rng;
pub mod search;
pub mod select;
pub mod statistics;
pub mod stop;
