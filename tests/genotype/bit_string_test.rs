use crate::support::*;
use blocktest::genotype::{BitStringGenotype, Genotype};

#[test]
fn chromosome_factory() {
    let genotype = BitStringGenotype::builder()
        .with_genes_size(10)
        .build()
        .unwrap();
    let mut rng = SeededRng::from_seed(0);

    let chromosome = genotype.chromosome_factory(&mut rng);
    assert_eq!(chromosome.length(), 10);
    assert!(!chromosome.is_evaluated());
}

#[test]
fn chromosome_factory_is_seed_deterministic() {
    let genotype = BitStringGenotype::builder()
        .with_genes_size(16)
        .build()
        .unwrap();

    let mut first_rng = SeededRng::from_seed(42);
    let mut second_rng = SeededRng::from_seed(42);
    assert_eq!(
        genotype.chromosome_factory(&mut first_rng).genes,
        genotype.chromosome_factory(&mut second_rng).genes
    );
}

#[test]
fn mutate_gene_flips() {
    let genotype = BitStringGenotype::builder()
        .with_genes_size(4)
        .build()
        .unwrap();
    let mut rng = SeededRng::from_seed(0);

    assert!(!genotype.mutate_gene(&true, &mut rng));
    assert!(genotype.mutate_gene(&false, &mut rng));
}

#[test]
fn builder_requires_genes_size() {
    assert!(BitStringGenotype::builder().build().is_err());
    assert!(BitStringGenotype::builder()
        .with_genes_size(0)
        .build()
        .is_err());
}
