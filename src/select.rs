//! The parent selection operators. A selection returns an index into the
//! population so callers can keep ownership of the chromosomes.
mod rank;
mod tournament;
mod wrapper;

pub use self::rank::Rank as SelectRank;
pub use self::tournament::Tournament as SelectTournament;
pub use self::wrapper::Wrapper as SelectWrapper;

use crate::chromosome::Allele;
use crate::population::Population;
use crate::rng::SeededRng;
use std::fmt;

pub trait Select: Clone + Send + Sync + fmt::Debug {
    fn call<A: Allele>(&self, population: &Population<A>, rng: &mut SeededRng) -> usize;

    fn report(&self) -> String;
}
