pub use super::mio::Mio;
pub use super::mosa::Mosa;
pub use super::one_plus_one::OnePlusOne;
pub use super::random::RandomSearch;
pub use super::simple_ga::SimpleGa;
pub use super::SearchAlgorithm;

use crate::chromosome::Chromosome;
use crate::errors::Error;
use crate::execution::ExecutionHost;
use crate::fitness::GoalSet;
use crate::genotype::Genotype;
use crate::population::Population;
use crate::statistics::Statistics;
use std::time::Instant;

pub enum Wrapper<G: Genotype, H: ExecutionHost<Allele = G::Allele>> {
    Random(RandomSearch<G, H>),
    OnePlusOne(OnePlusOne<G, H>),
    SimpleGa(SimpleGa<G, H>),
    Mosa(Mosa<G, H>),
    Mio(Mio<G, H>),
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> Wrapper<G, H> {
    /// Recover the execution host after a run, so a caller can wire it into
    /// the next algorithm instance.
    pub fn into_host(self) -> H {
        match self {
            Wrapper::Random(algorithm) => algorithm.host,
            Wrapper::OnePlusOne(algorithm) => algorithm.host,
            Wrapper::SimpleGa(algorithm) => algorithm.host,
            Wrapper::Mosa(algorithm) => algorithm.host,
            Wrapper::Mio(algorithm) => algorithm.host,
        }
    }
}

impl<G: Genotype, H: ExecutionHost<Allele = G::Allele>> SearchAlgorithm for Wrapper<G, H> {
    type Allele = G::Allele;

    fn find_solution(&mut self) -> Result<Vec<Chromosome<G::Allele>>, Error> {
        match self {
            Wrapper::Random(algorithm) => algorithm.find_solution(),
            Wrapper::OnePlusOne(algorithm) => algorithm.find_solution(),
            Wrapper::SimpleGa(algorithm) => algorithm.find_solution(),
            Wrapper::Mosa(algorithm) => algorithm.find_solution(),
            Wrapper::Mio(algorithm) => algorithm.find_solution(),
        }
    }

    fn iterations(&self) -> usize {
        match self {
            Wrapper::Random(algorithm) => algorithm.iterations(),
            Wrapper::OnePlusOne(algorithm) => algorithm.iterations(),
            Wrapper::SimpleGa(algorithm) => algorithm.iterations(),
            Wrapper::Mosa(algorithm) => algorithm.iterations(),
            Wrapper::Mio(algorithm) => algorithm.iterations(),
        }
    }

    fn started_at(&self) -> Instant {
        match self {
            Wrapper::Random(algorithm) => algorithm.started_at(),
            Wrapper::OnePlusOne(algorithm) => algorithm.started_at(),
            Wrapper::SimpleGa(algorithm) => algorithm.started_at(),
            Wrapper::Mosa(algorithm) => algorithm.started_at(),
            Wrapper::Mio(algorithm) => algorithm.started_at(),
        }
    }

    fn current_solution(&self) -> &Population<G::Allele> {
        match self {
            Wrapper::Random(algorithm) => algorithm.current_solution(),
            Wrapper::OnePlusOne(algorithm) => algorithm.current_solution(),
            Wrapper::SimpleGa(algorithm) => algorithm.current_solution(),
            Wrapper::Mosa(algorithm) => algorithm.current_solution(),
            Wrapper::Mio(algorithm) => algorithm.current_solution(),
        }
    }

    fn goals(&self) -> &GoalSet<G::Allele> {
        match self {
            Wrapper::Random(algorithm) => algorithm.goals(),
            Wrapper::OnePlusOne(algorithm) => algorithm.goals(),
            Wrapper::SimpleGa(algorithm) => algorithm.goals(),
            Wrapper::Mosa(algorithm) => algorithm.goals(),
            Wrapper::Mio(algorithm) => algorithm.goals(),
        }
    }

    fn statistics(&self) -> &Statistics {
        match self {
            Wrapper::Random(algorithm) => algorithm.statistics(),
            Wrapper::OnePlusOne(algorithm) => algorithm.statistics(),
            Wrapper::SimpleGa(algorithm) => algorithm.statistics(),
            Wrapper::Mosa(algorithm) => algorithm.statistics(),
            Wrapper::Mio(algorithm) => algorithm.statistics(),
        }
    }
}
