//! The test-generator façade: translate a [Configuration] into a wired
//! search algorithm, run it, and export the minimized test suite.
//!
//! There are three façades behind the `test-generator` key:
//! * `random` — random search over the full goal set
//! * `iterative` — one single-objective search per goal, splitting the
//!   remaining iteration budget evenly across the remaining goals
//! * `many-objective` — MOSA or MIO over the full goal set
use crate::chromosome::{Allele, Chromosome};
use crate::config::{AlgorithmKind, Configuration, StoppingConditionKind, TestGeneratorKind};
use crate::errors::Error;
use crate::execution::ExecutionHost;
use crate::fitness::{FitnessValue, GoalId, GoalSet};
use crate::genotype::Genotype;
use crate::rng::SeededRng;
use crate::search::{Builder, SearchAlgorithm, SearchVariant};
use crate::stop::{StopAny, StopCondition, StopFixedIterations, StopOptimalSolution};
use rustc_hash::FxHashSet;

/// One exported test: the chromosome plus the metadata the reporters
/// downstream need. The export format itself is opaque to the core.
#[derive(Clone, Debug)]
pub struct SuiteTest<A: Allele> {
    pub chromosome: Chromosome<A>,
    pub covered_goals: Vec<GoalId>,
    pub length: usize,
    pub fitness_snapshot: Vec<(GoalId, FitnessValue)>,
}

#[derive(Clone, Debug, Default)]
pub struct TestSuite<A: Allele> {
    pub tests: Vec<SuiteTest<A>>,
    pub covered_goal_count: usize,
    pub total_goal_count: usize,
}

pub struct TestGenerator {
    configuration: Configuration,
}

impl TestGenerator {
    pub fn new(configuration: Configuration) -> Result<Self, Error> {
        configuration.validate()?;
        Ok(Self { configuration })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn generate<G, H>(&self, genotype: G, host: H) -> Result<TestSuite<G::Allele>, Error>
    where
        G: Genotype,
        H: ExecutionHost<Allele = G::Allele>,
    {
        match self.configuration.test_generator {
            TestGeneratorKind::Random => self.generate_random(genotype, host),
            TestGeneratorKind::Iterative => self.generate_iterative(genotype, host),
            TestGeneratorKind::ManyObjective => self.generate_many_objective(genotype, host),
        }
    }

    fn rng(&self, offset: u64) -> SeededRng {
        match self.configuration.seed {
            Some(seed) => SeededRng::from_seed(seed.wrapping_add(offset)),
            None => SeededRng::from_entropy(),
        }
    }

    fn generate_random<G, H>(&self, genotype: G, host: H) -> Result<TestSuite<G::Allele>, Error>
    where
        G: Genotype,
        H: ExecutionHost<Allele = G::Allele>,
    {
        let mut algorithm = Builder::new()
            .with_genotype(genotype)
            .with_host(host)
            .with_stop_condition(self.configuration.build_stop_condition())
            .with_rng(self.rng(0))
            .build(SearchVariant::Random)?;
        let best_individuals = algorithm.find_solution()?;
        log::info!(
            "random test generation finished after {} iterations",
            algorithm.iterations()
        );
        let mut covered = FxHashSet::default();
        let tests = suite_tests(algorithm.goals(), best_individuals, &mut covered);
        Ok(TestSuite {
            total_goal_count: algorithm.goals().len(),
            covered_goal_count: covered.len(),
            tests,
        })
    }

    fn generate_many_objective<G, H>(
        &self,
        genotype: G,
        host: H,
    ) -> Result<TestSuite<G::Allele>, Error>
    where
        G: Genotype,
        H: ExecutionHost<Allele = G::Allele>,
    {
        let variant = match self.configuration.algorithm {
            AlgorithmKind::Mosa => SearchVariant::Mosa,
            AlgorithmKind::Mio => SearchVariant::Mio,
            _ => {
                return Err(Error::UnsupportedOperation(
                    "the many-objective test generator requires mosa or mio",
                ))
            }
        };

        let mut builder = Builder::new()
            .with_genotype(genotype)
            .with_host(host)
            .with_stop_condition(self.configuration.build_stop_condition())
            .with_rng(self.rng(0))
            .with_mutate(self.configuration.build_mutate());
        builder = match variant {
            SearchVariant::Mosa => builder
                .with_crossover(self.configuration.build_crossover())
                .with_population_size(self.configuration.population_size)
                .with_crossover_probability(self.configuration.crossover_probability)
                .with_mutation_probability(self.configuration.mutation_probability),
            _ => builder.with_mio_options(self.configuration.build_mio_options()),
        };
        // an explicitly configured selection operator is passed through so
        // the builder can report it as unsupported
        if let Some(select) = self.configuration.build_select() {
            builder = builder.with_select(select);
        }

        let mut algorithm = builder.build(variant)?;
        let best_individuals = algorithm.find_solution()?;
        log::info!(
            "{} test generation finished after {} iterations, {} of {} goals covered",
            variant,
            algorithm.iterations(),
            algorithm.statistics().covered_goals,
            algorithm.goals().len()
        );
        let mut covered = FxHashSet::default();
        let tests = suite_tests(algorithm.goals(), best_individuals, &mut covered);
        Ok(TestSuite {
            total_goal_count: algorithm.goals().len(),
            covered_goal_count: covered.len(),
            tests,
        })
    }

    fn generate_iterative<G, H>(
        &self,
        genotype: G,
        mut host: H,
    ) -> Result<TestSuite<G::Allele>, Error>
    where
        G: Genotype,
        H: ExecutionHost<Allele = G::Allele>,
    {
        let variant = match self.configuration.algorithm {
            AlgorithmKind::OnePlusOne => SearchVariant::OnePlusOne,
            AlgorithmKind::SimpleGa => SearchVariant::SimpleGa,
            _ => {
                return Err(Error::UnsupportedOperation(
                    "the iterative test generator requires a single-objective algorithm",
                ))
            }
        };

        let goal_list = host.coverage_goals()?.into_goals();
        let total_goal_count = goal_list.len();
        let total_budget = match self.configuration.stopping_condition {
            StoppingConditionKind::FixedIterations { iterations } => Some(iterations),
            _ => None,
        };

        let mut used_iterations = 0;
        let mut covered = FxHashSet::default();
        let mut tests = vec![];
        for (run, (goal, fitness_function)) in goal_list.into_iter().enumerate() {
            let mut goals = GoalSet::new();
            goals.insert(goal, fitness_function);

            // each goal gets an even share of what is left of the budget,
            // and every run short-circuits once its goal is covered
            let configured: Box<dyn StopCondition> = match total_budget {
                Some(total) => {
                    let remaining_goals = total_goal_count - run;
                    let share = (total.saturating_sub(used_iterations)) / remaining_goals;
                    Box::new(StopFixedIterations::new(share.max(1)))
                }
                None => self.configuration.build_stop_condition(),
            };
            let stop_condition: Box<dyn StopCondition> = Box::new(StopAny::new(vec![
                configured,
                Box::new(StopOptimalSolution::new()),
            ]));

            let mut builder = Builder::new()
                .with_genotype(genotype.clone())
                .with_host(host)
                .with_goals(goals)
                .with_stop_condition(stop_condition)
                .with_rng(self.rng(run as u64))
                .with_mutate(self.configuration.build_mutate());
            if variant == SearchVariant::SimpleGa {
                builder = builder
                    .with_crossover(self.configuration.build_crossover())
                    .with_select(self.configuration.build_select().ok_or_else(|| {
                        Error::InvalidConfiguration(
                            "simplega requires a selection.operator".to_string(),
                        )
                    })?)
                    .with_population_size(self.configuration.population_size)
                    .with_crossover_probability(self.configuration.crossover_probability)
                    .with_mutation_probability(self.configuration.mutation_probability);
            }

            let mut algorithm = builder.build(variant)?;
            let best_individuals = algorithm.find_solution()?;
            used_iterations += algorithm.iterations();
            tests.extend(suite_tests(algorithm.goals(), best_individuals, &mut covered));
            host = algorithm.into_host();
        }
        log::info!(
            "iterative test generation covered {} of {} goals in {} iterations",
            covered.len(),
            total_goal_count,
            used_iterations
        );
        Ok(TestSuite {
            tests,
            covered_goal_count: covered.len(),
            total_goal_count,
        })
    }
}

/// Greedy suite minimization: keep a chromosome only when it covers at least
/// one goal no earlier test covers.
fn suite_tests<A: Allele>(
    goals: &GoalSet<A>,
    best_individuals: Vec<Chromosome<A>>,
    covered: &mut FxHashSet<GoalId>,
) -> Vec<SuiteTest<A>> {
    let mut tests = vec![];
    for chromosome in best_individuals {
        let mut covered_goals = vec![];
        let mut fitness_snapshot = vec![];
        for (position, (goal, fitness_function)) in goals.iter().enumerate() {
            let score = chromosome.fitness_score(position);
            fitness_snapshot.push((goal, score));
            if fitness_function.is_optimal(score) {
                covered_goals.push(goal);
            }
        }
        if covered_goals.iter().any(|goal| !covered.contains(goal)) {
            covered.extend(covered_goals.iter().copied());
            tests.push(SuiteTest {
                length: chromosome.length(),
                chromosome,
                covered_goals,
                fitness_snapshot,
            });
        }
    }
    tests
}
