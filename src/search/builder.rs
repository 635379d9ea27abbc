use super::mio::{HeuristicFunction, Mio, MioOptions};
use super::mosa::Mosa;
use super::one_plus_one::OnePlusOne;
use super::random::RandomSearch;
use super::simple_ga::SimpleGa;
use super::wrapper::Wrapper;
use super::{SearchState, SearchVariant};
use crate::crossover::{Crossover, CrossoverWrapper};
use crate::errors::Error;
use crate::execution::ExecutionHost;
use crate::fitness::{GoalId, GoalSet};
use crate::genotype::Genotype;
use crate::mutate::{Mutate, MutateWrapper};
use crate::rng::SeededRng;
use crate::select::{Select, SelectWrapper};
use crate::stop::StopCondition;
use rustc_hash::FxHashMap;

pub const DEFAULT_POPULATION_SIZE: usize = 30;
pub const DEFAULT_CROSSOVER_PROBABILITY: f64 = 0.8;
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.3;

/// The superset builder for all search algorithms.
///
/// Every knob is captured once; `build(variant)` hands the honoured ones to
/// the chosen algorithm, reports missing required ones as
/// [Error::InvalidConfiguration] and explicitly provided but unhonoured ones
/// as [Error::UnsupportedOperation].
pub struct Builder<G: Genotype, H: ExecutionHost<Allele = G::Allele>> {
    pub genotype: Option<G>,
    pub host: Option<H>,
    pub goals: Option<GoalSet<G::Allele>>,
    pub stop_condition: Option<Box<dyn StopCondition>>,
    pub rng: Option<SeededRng>,
    pub mutate: Option<MutateWrapper>,
    pub crossover: Option<CrossoverWrapper>,
    pub select: Option<SelectWrapper>,
    pub population_size: Option<usize>,
    pub crossover_probability: Option<f64>,
    pub mutation_probability: Option<f64>,
    pub mio_options: Option<MioOptions>,
    pub heuristics: FxHashMap<GoalId, HeuristicFunction>,
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> Builder<G, H> {
    pub fn new() -> Self {
        Self {
            genotype: None,
            host: None,
            goals: None,
            stop_condition: None,
            rng: None,
            mutate: None,
            crossover: None,
            select: None,
            population_size: None,
            crossover_probability: None,
            mutation_probability: None,
            mio_options: None,
            heuristics: FxHashMap::default(),
        }
    }

    pub fn with_genotype(mut self, genotype: G) -> Self {
        self.genotype = Some(genotype);
        self
    }
    pub fn with_host(mut self, host: H) -> Self {
        self.host = Some(host);
        self
    }
    /// Override the goal set; without it the goals are extracted from the
    /// host's program under test.
    pub fn with_goals(mut self, goals: GoalSet<G::Allele>) -> Self {
        self.goals = Some(goals);
        self
    }
    pub fn with_stop_condition(mut self, stop_condition: Box<dyn StopCondition>) -> Self {
        self.stop_condition = Some(stop_condition);
        self
    }
    pub fn with_rng(mut self, rng: SeededRng) -> Self {
        self.rng = Some(rng);
        self
    }
    pub fn with_mutate(mut self, mutate: MutateWrapper) -> Self {
        self.mutate = Some(mutate);
        self
    }
    pub fn with_crossover(mut self, crossover: CrossoverWrapper) -> Self {
        self.crossover = Some(crossover);
        self
    }
    pub fn with_select(mut self, select: SelectWrapper) -> Self {
        self.select = Some(select);
        self
    }
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = Some(population_size);
        self
    }
    pub fn with_crossover_probability(mut self, crossover_probability: f64) -> Self {
        self.crossover_probability = Some(crossover_probability);
        self
    }
    pub fn with_mutation_probability(mut self, mutation_probability: f64) -> Self {
        self.mutation_probability = Some(mutation_probability);
        self
    }
    pub fn with_mio_options(mut self, mio_options: MioOptions) -> Self {
        self.mio_options = Some(mio_options);
        self
    }
    pub fn with_heuristic(mut self, goal: GoalId, heuristic: HeuristicFunction) -> Self {
        self.heuristics.insert(goal, heuristic);
        self
    }

    pub fn build(self, variant: SearchVariant) -> Result<Wrapper<G, H>, Error> {
        self.reject_unhonoured(variant)?;

        let genotype = self.genotype.ok_or_else(|| {
            Error::InvalidConfiguration("search algorithm requires a genotype".to_string())
        })?;
        let mut host = self.host.ok_or_else(|| {
            Error::InvalidConfiguration("search algorithm requires an execution host".to_string())
        })?;
        let stop_condition = self.stop_condition.ok_or_else(|| {
            Error::InvalidConfiguration("search algorithm requires a stopping condition".to_string())
        })?;
        let goals = match self.goals {
            Some(goals) => goals,
            None => host.coverage_goals()?,
        };
        if goals.is_empty() {
            return Err(Error::InvalidConfiguration(
                "the goal set is empty".to_string(),
            ));
        }
        log::debug!(
            "wiring {} over {} goals, {}, rng seed {}",
            variant,
            goals.len(),
            stop_condition.report(),
            self.rng.as_ref().map(|rng| rng.seed()).unwrap_or_default()
        );
        if let Some(mutate) = &self.mutate {
            log::debug!("  {}", mutate.report());
        }
        if let Some(crossover) = &self.crossover {
            log::debug!("  {}", crossover.report());
        }
        if let Some(select) = &self.select {
            log::debug!("  {}", select.report());
        }

        let state = SearchState::new(self.rng.unwrap_or_else(SeededRng::from_entropy));

        let population_size = self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE);
        if population_size < 1 {
            return Err(Error::InvalidConfiguration(
                "population-size must be >= 1".to_string(),
            ));
        }
        let crossover_probability = self
            .crossover_probability
            .unwrap_or(DEFAULT_CROSSOVER_PROBABILITY);
        let mutation_probability = self
            .mutation_probability
            .unwrap_or(DEFAULT_MUTATION_PROBABILITY);
        for (name, probability) in [
            ("crossover.probability", crossover_probability),
            ("mutation.probability", mutation_probability),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                return Err(Error::InvalidConfiguration(format!(
                    "{} must be within [0, 1], got {}",
                    name, probability
                )));
            }
        }

        let mutate = |mutate: Option<MutateWrapper>| {
            mutate.ok_or_else(|| {
                Error::InvalidConfiguration(format!(
                    "{} requires a mutation operator",
                    variant
                ))
            })
        };
        let crossover = |crossover: Option<CrossoverWrapper>| {
            crossover.ok_or_else(|| {
                Error::InvalidConfiguration(format!(
                    "{} requires a crossover operator",
                    variant
                ))
            })
        };

        match variant {
            SearchVariant::Random => Ok(Wrapper::Random(RandomSearch {
                genotype,
                goals,
                host,
                stop_condition,
                state,
            })),
            SearchVariant::OnePlusOne => Ok(Wrapper::OnePlusOne(OnePlusOne {
                genotype,
                goals,
                host,
                stop_condition,
                mutate: mutate(self.mutate)?,
                state,
            })),
            SearchVariant::SimpleGa => Ok(Wrapper::SimpleGa(SimpleGa {
                genotype,
                goals,
                host,
                stop_condition,
                mutate: mutate(self.mutate)?,
                crossover: crossover(self.crossover)?,
                select: self.select.ok_or_else(|| {
                    Error::InvalidConfiguration(
                        "simplega requires a selection operator".to_string(),
                    )
                })?,
                population_size,
                crossover_probability,
                mutation_probability,
                state,
            })),
            SearchVariant::Mosa => Ok(Wrapper::Mosa(Mosa {
                genotype,
                goals,
                host,
                stop_condition,
                mutate: mutate(self.mutate)?,
                crossover: crossover(self.crossover)?,
                population_size,
                crossover_probability,
                mutation_probability,
                state,
            })),
            SearchVariant::Mio => {
                let options = self.mio_options.unwrap_or_default();
                if !(0.0..=1.0).contains(&options.start_of_focused_phase)
                    || options.start_of_focused_phase == 0.0
                {
                    return Err(Error::InvalidConfiguration(format!(
                        "startOfFocusedPhase must be within (0, 1], got {}",
                        options.start_of_focused_phase
                    )));
                }
                Ok(Wrapper::Mio(Mio::new(
                    genotype,
                    goals,
                    host,
                    stop_condition,
                    mutate(self.mutate)?,
                    options,
                    self.heuristics,
                    state,
                )))
            }
        }
    }

    /// Explicitly provided components the chosen algorithm would silently
    /// ignore are a wiring error.
    fn reject_unhonoured(&self, variant: SearchVariant) -> Result<(), Error> {
        match variant {
            SearchVariant::Random => {
                if self.mutate.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "random search does not honour a mutation operator",
                    ));
                }
                if self.crossover.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "random search does not honour a crossover operator",
                    ));
                }
                if self.select.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "random search does not honour a selection operator",
                    ));
                }
                if self.population_size.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "random search does not honour a population size",
                    ));
                }
                if self.mio_options.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "random search does not honour MIO options",
                    ));
                }
            }
            SearchVariant::OnePlusOne => {
                if self.crossover.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "one-plus-one does not honour a crossover operator",
                    ));
                }
                if self.select.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "one-plus-one does not honour a selection operator",
                    ));
                }
                if self.population_size.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "one-plus-one does not honour a population size",
                    ));
                }
                if self.mio_options.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "one-plus-one does not honour MIO options",
                    ));
                }
            }
            SearchVariant::SimpleGa => {
                if self.mio_options.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "simplega does not honour MIO options",
                    ));
                }
            }
            SearchVariant::Mosa => {
                if self.select.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "mosa performs rank selection internally and does not honour a selection operator",
                    ));
                }
                if self.mio_options.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "mosa does not honour MIO options",
                    ));
                }
            }
            SearchVariant::Mio => {
                if self.crossover.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "mio does not honour a crossover operator",
                    ));
                }
                if self.select.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "mio does not honour a selection operator",
                    ));
                }
                if self.population_size.is_some() {
                    return Err(Error::UnsupportedOperation(
                        "mio does not honour a population size",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> Default for Builder<G, H> {
    fn default() -> Self {
        Self::new()
    }
}
