use super::Genotype;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TryFromBuilderError(pub &'static str);

/// Shared builder for all genotypes. Each genotype picks the fields it needs
/// in its `TryFrom` implementation and rejects the builder when required
/// fields are missing or out of range.
#[derive(Clone, Debug)]
pub struct Builder<G: Genotype> {
    pub genes_size: Option<usize>,
    pub allele_range: Option<(i64, i64)>,
    pub event_count: Option<usize>,
    pub initial_genes_size: Option<usize>,
    pub variable_length: bool,
    _phantom: std::marker::PhantomData<G>,
}

impl<G: Genotype> Builder<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genes_size(mut self, genes_size: usize) -> Self {
        self.genes_size = Some(genes_size);
        self
    }

    /// Closed range `[min, max]` for integer alleles.
    pub fn with_allele_range(mut self, min: i64, max: i64) -> Self {
        self.allele_range = Some((min, max));
        self
    }

    /// Number of input events detected on the program under test.
    pub fn with_event_count(mut self, event_count: usize) -> Self {
        self.event_count = Some(event_count);
        self
    }

    pub fn with_initial_genes_size(mut self, initial_genes_size: usize) -> Self {
        self.initial_genes_size = Some(initial_genes_size);
        self
    }

    pub fn with_variable_length(mut self, variable_length: bool) -> Self {
        self.variable_length = variable_length;
        self
    }

    pub fn build(self) -> Result<G, <G as TryFrom<Builder<G>>>::Error> {
        self.try_into()
    }
}

impl<G: Genotype> Default for Builder<G> {
    fn default() -> Self {
        Self {
            genes_size: None,
            allele_range: None,
            event_count: None,
            initial_genes_size: None,
            variable_length: false,
            _phantom: std::marker::PhantomData,
        }
    }
}
