use super::builder::{Builder, TryFromBuilderError};
use super::Genotype;
use crate::rng::SeededRng;
use std::fmt;

/// The test-chromosome genotype: each gene indexes one of the input events
/// detected on the program under test, so a chromosome encodes a sequence of
/// events to send. Evaluating such a chromosome requires an execution host.
///
/// With `variable_length` the sequence starts at `initial_genes_size` and may
/// grow up to `max_genes_size` under variable-length mutation; without it the
/// length stays fixed at `initial_genes_size`.
#[derive(Clone, Debug)]
pub struct EventSequence {
    pub event_count: usize,
    pub initial_genes_size: usize,
    pub max_genes_size: usize,
    pub variable_length: bool,
}

impl Genotype for EventSequence {
    type Allele = usize;

    fn genes_size(&self) -> usize {
        self.initial_genes_size
    }

    fn random_gene(&self, rng: &mut SeededRng) -> usize {
        rng.next_index(self.event_count)
    }

    fn mutate_gene(&self, _gene: &usize, rng: &mut SeededRng) -> usize {
        self.random_gene(rng)
    }

    fn is_variable_length(&self) -> bool {
        self.variable_length
    }

    fn max_genes_size(&self) -> usize {
        self.max_genes_size
    }
}

impl TryFrom<Builder<Self>> for EventSequence {
    type Error = TryFromBuilderError;

    fn try_from(builder: Builder<Self>) -> Result<Self, Self::Error> {
        let max_genes_size = builder.genes_size.unwrap_or(0);
        let initial_genes_size = builder.initial_genes_size.unwrap_or(max_genes_size);
        match builder.event_count {
            None | Some(0) => Err(TryFromBuilderError(
                "EventSequenceGenotype requires an event_count > 0",
            )),
            Some(_) if max_genes_size == 0 => Err(TryFromBuilderError(
                "EventSequenceGenotype requires a genes_size > 0",
            )),
            Some(_) if initial_genes_size == 0 => Err(TryFromBuilderError(
                "EventSequenceGenotype requires an initial_genes_size > 0",
            )),
            Some(_) if initial_genes_size > max_genes_size => Err(TryFromBuilderError(
                "EventSequenceGenotype requires initial_genes_size <= genes_size",
            )),
            Some(event_count) => Ok(Self {
                event_count,
                initial_genes_size,
                max_genes_size,
                variable_length: builder.variable_length,
            }),
        }
    }
}

impl fmt::Display for EventSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "genotype: event sequence")?;
        writeln!(f, "  event_count: {}", self.event_count)?;
        writeln!(f, "  initial_genes_size: {}", self.initial_genes_size)?;
        writeln!(f, "  max_genes_size: {}", self.max_genes_size)?;
        writeln!(f, "  variable_length: {}", self.variable_length)
    }
}
