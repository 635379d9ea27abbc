//! The already-parsed configuration value the core consumes.
//!
//! Parsing the configuration file and the command line happens outside the
//! core; this module only defines the recognised options, validates them
//! before any search starts, and translates them into the crate's component
//! values (genotypes, operators, stopping conditions, goal sets).
use crate::chromosome::Allele;
use crate::crossover::{CrossoverSinglePoint, CrossoverSinglePointRelative, CrossoverWrapper};
use crate::errors::Error;
use crate::fitness::{GoalSet, OneMax, SingleBit, StatementFitness};
use crate::genotype::{BitStringGenotype, EventSequenceGenotype, Genotype, IntegerListGenotype};
use crate::mutate::{MutateBitFlip, MutateRandomReset, MutateVariableLength, MutateWrapper};
use crate::search::{MioOptions, SearchVariant};
use crate::select::{SelectRank, SelectTournament, SelectWrapper};
use crate::stop::{
    StopAny, StopCondition, StopFixedIterations, StopFixedTime, StopOptimalSolution,
};
use std::time::Duration;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AlgorithmKind {
    Random,
    OnePlusOne,
    SimpleGa,
    Mosa,
    Mio,
}

impl AlgorithmKind {
    pub fn variant(&self) -> SearchVariant {
        match self {
            AlgorithmKind::Random => SearchVariant::Random,
            AlgorithmKind::OnePlusOne => SearchVariant::OnePlusOne,
            AlgorithmKind::SimpleGa => SearchVariant::SimpleGa,
            AlgorithmKind::Mosa => SearchVariant::Mosa,
            AlgorithmKind::Mio => SearchVariant::Mio,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TestGeneratorKind {
    Random,
    Iterative,
    ManyObjective,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChromosomeKind {
    BitString,
    IntegerList,
    Test,
    VariableLengthTest,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CrossoverKind {
    SinglePoint,
    SinglePointRelative,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MutationKind {
    BitFlip,
    IntegerList,
    VariableLength,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SelectionKind {
    Rank,
    Tournament,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoppingConditionKind {
    FixedIterations { iterations: usize },
    FixedTime { duration: Duration },
    Optimal,
    OneOf { conditions: Vec<StoppingConditionKind> },
}

impl StoppingConditionKind {
    pub fn to_condition(&self) -> Box<dyn StopCondition> {
        match self {
            StoppingConditionKind::FixedIterations { iterations } => {
                Box::new(StopFixedIterations::new(*iterations))
            }
            StoppingConditionKind::FixedTime { duration } => {
                Box::new(StopFixedTime::new(*duration))
            }
            StoppingConditionKind::Optimal => Box::new(StopOptimalSolution::new()),
            StoppingConditionKind::OneOf { conditions } => Box::new(StopAny::new(
                conditions.iter().map(|kind| kind.to_condition()).collect(),
            )),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        if let StoppingConditionKind::OneOf { conditions } = self {
            if conditions.is_empty() {
                return Err(Error::InvalidConfiguration(
                    "stopping-condition.conditions must not be empty for one-of".to_string(),
                ));
            }
            for condition in conditions {
                condition.validate()?;
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FitnessFunctionKind {
    Statement,
    OneMax,
    SingleBit,
}

#[derive(Clone, Debug)]
pub struct Configuration {
    pub algorithm: AlgorithmKind,
    pub test_generator: TestGeneratorKind,
    pub chromosome: ChromosomeKind,
    pub population_size: usize,
    pub chromosome_length: usize,
    pub crossover_operator: CrossoverKind,
    pub crossover_probability: f64,
    pub mutation_operator: MutationKind,
    pub mutation_probability: f64,
    pub mutation_alpha: f64,
    pub max_mutation_count_start: usize,
    pub max_mutation_count_focused_phase: usize,
    pub selection_operator: Option<SelectionKind>,
    pub tournament_size: usize,
    pub random_selection_probability_start: f64,
    pub random_selection_probability_focused_phase: f64,
    pub max_archive_size_start: usize,
    pub max_archive_size_focused_phase: usize,
    pub start_of_focused_phase: f64,
    pub integer_range: (i64, i64),
    pub stopping_condition: StoppingConditionKind,
    pub fitness_function: FitnessFunctionKind,
    pub fitness_function_targets: Vec<usize>,
    pub init_var_length: usize,
    pub seed: Option<u64>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmKind::Mio,
            test_generator: TestGeneratorKind::ManyObjective,
            chromosome: ChromosomeKind::VariableLengthTest,
            population_size: 30,
            chromosome_length: 30,
            crossover_operator: CrossoverKind::SinglePointRelative,
            crossover_probability: 0.8,
            mutation_operator: MutationKind::VariableLength,
            mutation_probability: 0.3,
            mutation_alpha: 0.5,
            max_mutation_count_start: 1,
            max_mutation_count_focused_phase: 10,
            selection_operator: None,
            tournament_size: 2,
            random_selection_probability_start: 0.5,
            random_selection_probability_focused_phase: 0.0,
            max_archive_size_start: 10,
            max_archive_size_focused_phase: 1,
            start_of_focused_phase: 0.5,
            integer_range: (0, 100),
            stopping_condition: StoppingConditionKind::FixedIterations { iterations: 1000 },
            fitness_function: FitnessFunctionKind::Statement,
            fitness_function_targets: vec![],
            init_var_length: 10,
            seed: None,
        }
    }
}

impl Configuration {
    /// Raised before search begins; the search algorithms can assume a
    /// validated configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.population_size < 1 {
            return Err(Error::InvalidConfiguration(
                "population-size must be >= 1".to_string(),
            ));
        }
        if self.chromosome_length < 1 {
            return Err(Error::InvalidConfiguration(
                "chromosome-length must be >= 1".to_string(),
            ));
        }
        for (name, probability) in [
            ("crossover.probability", self.crossover_probability),
            ("mutation.probability", self.mutation_probability),
            (
                "selection.randomSelectionProbabilityStart",
                self.random_selection_probability_start,
            ),
            (
                "selection.randomSelectionProbabilityFocusedPhase",
                self.random_selection_probability_focused_phase,
            ),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                return Err(Error::InvalidConfiguration(format!(
                    "{} must be within [0, 1], got {}",
                    name, probability
                )));
            }
        }
        if self.tournament_size < 2 {
            return Err(Error::InvalidConfiguration(
                "selection.tournamentSize must be >= 2".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.start_of_focused_phase) || self.start_of_focused_phase == 0.0
        {
            return Err(Error::InvalidConfiguration(format!(
                "startOfFocusedPhase must be within (0, 1], got {}",
                self.start_of_focused_phase
            )));
        }
        if self.integer_range.0 > self.integer_range.1 {
            return Err(Error::InvalidConfiguration(
                "integerRange.min must be <= integerRange.max".to_string(),
            ));
        }
        if self.init_var_length < 1 {
            return Err(Error::InvalidConfiguration(
                "init-var-length must be >= 1".to_string(),
            ));
        }
        self.stopping_condition.validate()
    }

    pub fn build_stop_condition(&self) -> Box<dyn StopCondition> {
        self.stopping_condition.to_condition()
    }

    pub fn build_mutate(&self) -> MutateWrapper {
        match self.mutation_operator {
            MutationKind::BitFlip => MutateBitFlip::new().into(),
            MutationKind::IntegerList => MutateRandomReset::new().into(),
            MutationKind::VariableLength => {
                MutateVariableLength::new(self.mutation_alpha).into()
            }
        }
    }

    pub fn build_crossover(&self) -> CrossoverWrapper {
        match self.crossover_operator {
            CrossoverKind::SinglePoint => CrossoverSinglePoint::new().into(),
            CrossoverKind::SinglePointRelative => CrossoverSinglePointRelative::new().into(),
        }
    }

    pub fn build_select(&self) -> Option<SelectWrapper> {
        self.selection_operator.map(|kind| match kind {
            SelectionKind::Rank => SelectRank::new().into(),
            SelectionKind::Tournament => SelectTournament::new(self.tournament_size).into(),
        })
    }

    pub fn build_mio_options(&self) -> MioOptions {
        MioOptions {
            start_of_focused_phase: self.start_of_focused_phase,
            random_selection_probability_start: self.random_selection_probability_start,
            random_selection_probability_focused_phase: self
                .random_selection_probability_focused_phase,
            max_archive_size_start: self.max_archive_size_start,
            max_archive_size_focused_phase: self.max_archive_size_focused_phase,
            max_mutation_count_start: self.max_mutation_count_start,
            max_mutation_count_focused_phase: self.max_mutation_count_focused_phase,
        }
    }

    pub fn build_bit_string_genotype(&self) -> Result<BitStringGenotype, Error> {
        BitStringGenotype::builder()
            .with_genes_size(self.chromosome_length)
            .build()
            .map_err(|error| Error::InvalidConfiguration(error.0.to_string()))
    }

    pub fn build_integer_list_genotype(&self) -> Result<IntegerListGenotype, Error> {
        IntegerListGenotype::builder()
            .with_genes_size(self.chromosome_length)
            .with_allele_range(self.integer_range.0, self.integer_range.1)
            .build()
            .map_err(|error| Error::InvalidConfiguration(error.0.to_string()))
    }

    pub fn build_event_sequence_genotype(
        &self,
        event_count: usize,
    ) -> Result<EventSequenceGenotype, Error> {
        EventSequenceGenotype::builder()
            .with_event_count(event_count)
            .with_genes_size(self.chromosome_length)
            .with_initial_genes_size(self.init_var_length)
            .with_variable_length(self.chromosome == ChromosomeKind::VariableLengthTest)
            .build()
            .map_err(|error| Error::InvalidConfiguration(error.0.to_string()))
    }

    /// Goal set for the genotype-level fitness kinds on bit strings; the
    /// statement kind is served by
    /// [build_statement_goals](Configuration::build_statement_goals) instead.
    pub fn build_bit_string_goals(&self) -> Result<GoalSet<bool>, Error> {
        let mut goals = GoalSet::new();
        match self.fitness_function {
            FitnessFunctionKind::OneMax => {
                goals.insert(0, Box::new(OneMax::new(self.chromosome_length)));
            }
            FitnessFunctionKind::SingleBit => {
                if self.fitness_function_targets.is_empty() {
                    for bit in 0..self.chromosome_length {
                        goals.insert(bit, Box::new(SingleBit::new(bit)));
                    }
                } else {
                    for &bit in &self.fitness_function_targets {
                        goals.insert(bit, Box::new(SingleBit::new(bit)));
                    }
                }
            }
            FitnessFunctionKind::Statement => {
                return Err(Error::InvalidConfiguration(
                    "statement fitness requires an execution host, not a bitstring goal set"
                        .to_string(),
                ));
            }
        }
        Ok(goals)
    }

    /// One statement-coverage goal per configured target.
    pub fn build_statement_goals<A: Allele + 'static>(&self) -> Result<GoalSet<A>, Error> {
        if self.fitness_function != FitnessFunctionKind::Statement {
            return Err(Error::InvalidConfiguration(
                "fitness-function.type is not statement".to_string(),
            ));
        }
        if self.fitness_function_targets.is_empty() {
            return Err(Error::InvalidConfiguration(
                "statement fitness requires fitness-function.targets".to_string(),
            ));
        }
        let mut goals = GoalSet::new();
        for &statement in &self.fitness_function_targets {
            goals.insert(statement, Box::new(StatementFitness::new(statement)));
        }
        Ok(goals)
    }
}
