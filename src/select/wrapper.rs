pub use super::rank::Rank as SelectRank;
pub use super::tournament::Tournament as SelectTournament;
pub use super::Select;

use crate::chromosome::Allele;
use crate::population::Population;
use crate::rng::SeededRng;

#[derive(Clone, Debug)]
pub enum Wrapper {
    Rank(SelectRank),
    Tournament(SelectTournament),
}

impl Select for Wrapper {
    fn call<A: Allele>(&self, population: &Population<A>, rng: &mut SeededRng) -> usize {
        match self {
            Wrapper::Rank(select) => select.call(population, rng),
            Wrapper::Tournament(select) => select.call(population, rng),
        }
    }

    fn report(&self) -> String {
        match self {
            Wrapper::Rank(select) => select.report(),
            Wrapper::Tournament(select) => select.report(),
        }
    }
}

impl From<SelectRank> for Wrapper {
    fn from(select: SelectRank) -> Self {
        Wrapper::Rank(select)
    }
}
impl From<SelectTournament> for Wrapper {
    fn from(select: SelectTournament) -> Self {
        Wrapper::Tournament(select)
    }
}
