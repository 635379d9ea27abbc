use crate::support::*;
use blocktest::genotype::{EventSequenceGenotype, Genotype};

#[test]
fn chromosome_factory_uses_initial_size() {
    let genotype = EventSequenceGenotype::builder()
        .with_event_count(5)
        .with_genes_size(30)
        .with_initial_genes_size(10)
        .with_variable_length(true)
        .build()
        .unwrap();
    let mut rng = SeededRng::from_seed(0);

    let chromosome = genotype.chromosome_factory(&mut rng);
    assert_eq!(chromosome.length(), 10);
    assert!(chromosome.genes.iter().all(|&gene| gene < 5));
    assert!(genotype.is_variable_length());
    assert_eq!(genotype.max_genes_size(), 30);
}

#[test]
fn fixed_length_without_flag() {
    let genotype = EventSequenceGenotype::builder()
        .with_event_count(3)
        .with_genes_size(8)
        .build()
        .unwrap();

    assert!(!genotype.is_variable_length());
    assert_eq!(genotype.genes_size(), 8);
    assert_eq!(genotype.max_genes_size(), 8);
}

#[test]
fn builder_rejects_missing_events_and_oversized_initial_length() {
    assert!(EventSequenceGenotype::builder()
        .with_genes_size(8)
        .build()
        .is_err());
    assert!(EventSequenceGenotype::builder()
        .with_event_count(3)
        .with_genes_size(8)
        .with_initial_genes_size(9)
        .build()
        .is_err());
}
