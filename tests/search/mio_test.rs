use crate::support::*;
use blocktest::execution::NullExecutionHost;
use blocktest::fitness::FitnessFunction;
use blocktest::fitness::SingleBit;
use blocktest::genotype::{BitStringGenotype, Genotype};
use blocktest::mutate::MutateBitFlip;
use blocktest::search::{Builder, MioOptions, SearchAlgorithm, SearchVariant};
use blocktest::stop::StopFixedIterations;

fn mio_algorithm(
    genes_size: usize,
    iterations: usize,
    seed: u64,
) -> impl SearchAlgorithm<Allele = bool> {
    let genotype = BitStringGenotype::builder()
        .with_genes_size(genes_size)
        .build()
        .unwrap();
    Builder::new()
        .with_genotype(genotype)
        .with_host(NullExecutionHost::new(single_bit_goals(genes_size)))
        .with_stop_condition(Box::new(StopFixedIterations::new(iterations)))
        .with_mutate(MutateBitFlip::new().into())
        .with_rng(SeededRng::from_seed(seed))
        .build(SearchVariant::Mio)
        .unwrap()
}

#[test]
fn covers_every_single_bit_goal_with_one_individual_each() {
    let mut algorithm = mio_algorithm(10, 1000, 0);
    let best_individuals = algorithm.find_solution().unwrap();

    assert_eq!(best_individuals.len(), 10);
    for (bit, chromosome) in best_individuals.iter().enumerate() {
        assert!(SingleBit::new(bit).is_optimal(chromosome.fitness_score(bit)));
    }
}

#[test]
fn fixed_seed_runs_are_identical() {
    let mut first = mio_algorithm(8, 300, 5);
    let mut second = mio_algorithm(8, 300, 5);

    assert_eq!(
        inspect::chromosomes(&first.find_solution().unwrap()),
        inspect::chromosomes(&second.find_solution().unwrap())
    );
    assert_eq!(first.iterations(), second.iterations());
}

#[test]
fn options_interpolate_toward_the_focused_phase() {
    let options = MioOptions {
        start_of_focused_phase: 0.5,
        random_selection_probability_start: 0.5,
        random_selection_probability_focused_phase: 0.0,
        max_archive_size_start: 10,
        max_archive_size_focused_phase: 1,
        max_mutation_count_start: 1,
        max_mutation_count_focused_phase: 10,
    };

    assert_eq!(options.random_selection_probability(0.0), 0.5);
    assert_eq!(options.random_selection_probability(0.25), 0.25);
    // past the boundary everything is pinned to the focused values
    assert_eq!(options.random_selection_probability(0.5), 0.0);
    assert_eq!(options.random_selection_probability(0.9), 0.0);

    assert_eq!(options.max_archive_size(0.0), 10);
    assert_eq!(options.max_archive_size(0.75), 1);
    assert_eq!(options.max_mutation_count(0.0), 1);
    assert_eq!(options.max_mutation_count(1.0), 10);
}

#[test]
fn heuristic_functions_rank_bucket_candidates() {
    let genotype = BitStringGenotype::builder()
        .with_genes_size(4)
        .build()
        .unwrap();
    let mut algorithm = Builder::new()
        .with_genotype(genotype)
        .with_host(NullExecutionHost::new(single_bit_goals(4)))
        .with_stop_condition(Box::new(StopFixedIterations::new(200)))
        .with_mutate(MutateBitFlip::new().into())
        .with_rng(SeededRng::from_seed(0))
        .with_heuristic(0, |fitness| fitness / (fitness + 1.0))
        .build(SearchVariant::Mio)
        .unwrap();

    let best_individuals = algorithm.find_solution().unwrap();
    assert_eq!(best_individuals.len(), 4);
}
