use crate::support::*;
use blocktest::crossover::CrossoverSinglePoint;
use blocktest::execution::NullExecutionHost;
use blocktest::genotype::{BitStringGenotype, Genotype};
use blocktest::mutate::MutateBitFlip;
use blocktest::search::{Builder, SearchAlgorithm, SearchVariant};
use blocktest::stop::StopFixedIterations;

fn mosa_algorithm(
    genes_size: usize,
    population_size: usize,
    iterations: usize,
    goals: blocktest::fitness::GoalSet<bool>,
    seed: u64,
) -> impl SearchAlgorithm<Allele = bool> {
    let genotype = BitStringGenotype::builder()
        .with_genes_size(genes_size)
        .build()
        .unwrap();
    Builder::new()
        .with_genotype(genotype)
        .with_host(NullExecutionHost::new(goals))
        .with_stop_condition(Box::new(StopFixedIterations::new(iterations)))
        .with_mutate(MutateBitFlip::new().into())
        .with_crossover(CrossoverSinglePoint::new().into())
        .with_population_size(population_size)
        .with_crossover_probability(0.8)
        .with_mutation_probability(0.3)
        .with_rng(SeededRng::from_seed(seed))
        .build(SearchVariant::Mosa)
        .unwrap()
}

#[test]
fn one_max_converges_to_a_single_best_individual() {
    let mut algorithm = mosa_algorithm(5, 20, 50, one_max_goals(5), 0);
    let best_individuals = algorithm.find_solution().unwrap();

    assert_eq!(best_individuals.len(), 1);
    assert_eq!(best_individuals[0].genes, vec![true; 5]);
}

#[test]
fn population_size_is_constant_across_generations() {
    let mut algorithm = mosa_algorithm(8, 20, 25, single_bit_goals(8), 0);
    algorithm.find_solution().unwrap();
    assert_eq!(algorithm.current_solution().size(), 20);
}

#[test]
fn covers_every_single_bit_goal() {
    let mut algorithm = mosa_algorithm(10, 20, 100, single_bit_goals(10), 0);
    let best_individuals = algorithm.find_solution().unwrap();

    // ten easy goals, plenty of budget: all archived, possibly by shared
    // chromosomes
    assert!(!best_individuals.is_empty());
    let mut covered = vec![false; 10];
    for chromosome in &best_individuals {
        for (bit, covered_flag) in covered.iter_mut().enumerate() {
            if chromosome.genes[bit] {
                *covered_flag = true;
            }
        }
    }
    assert!(covered.iter().all(|&flag| flag));
}

#[test]
fn fixed_seed_runs_are_identical() {
    let mut first = mosa_algorithm(6, 10, 30, single_bit_goals(6), 11);
    let mut second = mosa_algorithm(6, 10, 30, single_bit_goals(6), 11);

    assert_eq!(
        inspect::chromosomes(&first.find_solution().unwrap()),
        inspect::chromosomes(&second.find_solution().unwrap())
    );
    assert_eq!(first.iterations(), second.iterations());
}
