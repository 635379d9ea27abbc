use crate::support::*;
use blocktest::execution::NullExecutionHost;
use blocktest::fitness::FitnessFunction;
use blocktest::fitness::SingleBit;
use blocktest::genotype::{BitStringGenotype, Genotype};
use blocktest::search::{Builder, SearchAlgorithm, SearchVariant};
use blocktest::stop::StopFixedIterations;

#[test]
fn returns_at_most_one_test_per_goal_each_covering_something_new() {
    let genotype = BitStringGenotype::builder()
        .with_genes_size(10)
        .build()
        .unwrap();
    let mut algorithm = Builder::new()
        .with_genotype(genotype)
        .with_host(NullExecutionHost::new(single_bit_goals(10)))
        .with_stop_condition(Box::new(StopFixedIterations::new(1000)))
        .with_rng(SeededRng::from_seed(0))
        .build(SearchVariant::Random)
        .unwrap();

    let tests = algorithm.find_solution().unwrap();
    assert!(tests.len() <= 10);
    assert!(algorithm.iterations() <= 1000);

    // replay the suite: every test covers a goal none of the earlier tests
    // covered
    let mut covered = vec![false; 10];
    for chromosome in &tests {
        let newly_covered: Vec<usize> = (0..10)
            .filter(|&bit| {
                !covered[bit] && SingleBit::new(bit).is_optimal(chromosome.fitness_score(bit))
            })
            .collect();
        assert!(!newly_covered.is_empty());
        for bit in newly_covered {
            covered[bit] = true;
        }
    }
}

#[test]
fn execution_failures_are_recovered_with_worst_case_fitness() {
    let genotype = BitStringGenotype::builder()
        .with_genes_size(4)
        .build()
        .unwrap();
    let mut algorithm = Builder::new()
        .with_genotype(genotype)
        .with_host(FailingExecutionHost)
        .with_goals(single_bit_goals(4))
        .with_stop_condition(Box::new(StopFixedIterations::new(50)))
        .with_rng(SeededRng::from_seed(0))
        .build(SearchVariant::Random)
        .unwrap();

    // every run fails, so the search completes without covering anything
    let tests = algorithm.find_solution().unwrap();
    assert!(tests.is_empty());
    assert_eq!(algorithm.iterations(), 50);
}
