use crate::support::*;
use blocktest::genotype::{Genotype, IntegerListGenotype};

#[test]
fn chromosome_factory_respects_allele_range() {
    let genotype = IntegerListGenotype::builder()
        .with_genes_size(50)
        .with_allele_range(-3, 7)
        .build()
        .unwrap();
    let mut rng = SeededRng::from_seed(0);

    let chromosome = genotype.chromosome_factory(&mut rng);
    assert_eq!(chromosome.length(), 50);
    assert!(chromosome.genes.iter().all(|&gene| (-3..=7).contains(&gene)));
}

#[test]
fn allele_range_is_closed() {
    let genotype = IntegerListGenotype::builder()
        .with_genes_size(1)
        .with_allele_range(5, 5)
        .build()
        .unwrap();
    let mut rng = SeededRng::from_seed(0);

    // a degenerate range can only ever produce its single value
    for _ in 0..10 {
        assert_eq!(genotype.random_gene(&mut rng), 5);
    }
}

#[test]
fn builder_rejects_inverted_range() {
    assert!(IntegerListGenotype::builder()
        .with_genes_size(4)
        .with_allele_range(2, 1)
        .build()
        .is_err());
}

#[test]
fn builder_requires_allele_range() {
    assert!(IntegerListGenotype::builder()
        .with_genes_size(4)
        .build()
        .is_err());
}
