use crate::support::*;
use blocktest::crossover::CrossoverSinglePoint;
use blocktest::errors::Error;
use blocktest::execution::NullExecutionHost;
use blocktest::genotype::{BitStringGenotype, Genotype};
use blocktest::mutate::MutateBitFlip;
use blocktest::search::{Builder, SearchVariant};
use blocktest::select::SelectTournament;
use blocktest::stop::StopFixedIterations;

fn genotype() -> BitStringGenotype {
    BitStringGenotype::builder()
        .with_genes_size(4)
        .build()
        .unwrap()
}

fn base_builder() -> Builder<BitStringGenotype, NullExecutionHost<bool>> {
    Builder::new()
        .with_genotype(genotype())
        .with_host(NullExecutionHost::new(single_bit_goals(4)))
        .with_stop_condition(Box::new(StopFixedIterations::new(10)))
        .with_rng(SeededRng::from_seed(0))
}

#[test]
fn missing_required_components_are_invalid_configuration() {
    let result = Builder::<BitStringGenotype, NullExecutionHost<bool>>::new()
        .with_genotype(genotype())
        .build(SearchVariant::Random);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));

    // one-plus-one needs a mutation operator
    let result = base_builder().build(SearchVariant::OnePlusOne);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));

    // mosa needs a crossover operator on top of mutation
    let result = base_builder()
        .with_mutate(MutateBitFlip::new().into())
        .build(SearchVariant::Mosa);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn unhonoured_components_are_unsupported_operations() {
    // random search honours no variation operators at all
    let result = base_builder()
        .with_mutate(MutateBitFlip::new().into())
        .build(SearchVariant::Random);
    assert!(matches!(result, Err(Error::UnsupportedOperation(_))));

    // one-plus-one rejects crossover
    let result = base_builder()
        .with_mutate(MutateBitFlip::new().into())
        .with_crossover(CrossoverSinglePoint::new().into())
        .build(SearchVariant::OnePlusOne);
    assert!(matches!(result, Err(Error::UnsupportedOperation(_))));

    // mosa performs rank selection internally
    let result = base_builder()
        .with_mutate(MutateBitFlip::new().into())
        .with_crossover(CrossoverSinglePoint::new().into())
        .with_select(SelectTournament::new(2).into())
        .build(SearchVariant::Mosa);
    assert!(matches!(result, Err(Error::UnsupportedOperation(_))));

    // mio rejects a population size
    let result = base_builder()
        .with_mutate(MutateBitFlip::new().into())
        .with_population_size(20)
        .build(SearchVariant::Mio);
    assert!(matches!(result, Err(Error::UnsupportedOperation(_))));
}

#[test]
fn out_of_range_probabilities_are_invalid() {
    let result = base_builder()
        .with_mutate(MutateBitFlip::new().into())
        .with_crossover(CrossoverSinglePoint::new().into())
        .with_crossover_probability(1.5)
        .build(SearchVariant::Mosa);
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn successful_build_for_every_variant() {
    assert!(base_builder().build(SearchVariant::Random).is_ok());
    assert!(base_builder()
        .with_mutate(MutateBitFlip::new().into())
        .build(SearchVariant::OnePlusOne)
        .is_ok());
    assert!(base_builder()
        .with_mutate(MutateBitFlip::new().into())
        .with_crossover(CrossoverSinglePoint::new().into())
        .with_select(SelectTournament::new(2).into())
        .with_population_size(10)
        .build(SearchVariant::SimpleGa)
        .is_ok());
    assert!(base_builder()
        .with_mutate(MutateBitFlip::new().into())
        .with_crossover(CrossoverSinglePoint::new().into())
        .with_population_size(10)
        .build(SearchVariant::Mosa)
        .is_ok());
    assert!(base_builder()
        .with_mutate(MutateBitFlip::new().into())
        .build(SearchVariant::Mio)
        .is_ok());
}
