use crate::support::*;
use blocktest::crossover::{Crossover, CrossoverSinglePointRelative};
use blocktest::genotype::{EventSequenceGenotype, Genotype};

fn genotype() -> EventSequenceGenotype {
    EventSequenceGenotype::builder()
        .with_event_count(10)
        .with_genes_size(10)
        .with_initial_genes_size(4)
        .with_variable_length(true)
        .build()
        .unwrap()
}

#[test]
fn conserves_total_length_and_gene_multiset() {
    let genotype = genotype();
    let mut rng = SeededRng::from_seed(0);
    let crossover = CrossoverSinglePointRelative::new();
    let father = build::chromosome(vec![1usize, 1]);
    let mother = build::chromosome(vec![0usize, 0, 0, 0]);

    for _ in 0..200 {
        let (first, second) = crossover.call(&genotype, &father, &mother, &mut rng);

        assert_eq!(first.length() + second.length(), 6);
        assert!(first.length() <= 4);
        assert!(second.length() <= 4);

        let ones = first.genes.iter().filter(|&&gene| gene == 1).count()
            + second.genes.iter().filter(|&&gene| gene == 1).count();
        let zeros = first.genes.iter().filter(|&&gene| gene == 0).count()
            + second.genes.iter().filter(|&&gene| gene == 0).count();
        assert_eq!(ones, 2);
        assert_eq!(zeros, 4);
    }
}

#[test]
fn equal_length_parents_keep_their_length() {
    let genotype = genotype();
    let mut rng = SeededRng::from_seed(7);
    let crossover = CrossoverSinglePointRelative::new();
    let father = build::chromosome(vec![1usize, 2, 3]);
    let mother = build::chromosome(vec![4usize, 5, 6]);

    for _ in 0..50 {
        let (first, second) = crossover.call(&genotype, &father, &mother, &mut rng);
        assert_eq!(first.length(), 3);
        assert_eq!(second.length(), 3);
    }
}
