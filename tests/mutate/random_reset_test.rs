use crate::support::*;
use blocktest::genotype::{Genotype, IntegerListGenotype};
use blocktest::mutate::{Mutate, MutateRandomReset};

#[test]
fn replaced_genes_stay_in_range() {
    let genotype = IntegerListGenotype::builder()
        .with_genes_size(10)
        .with_allele_range(0, 4)
        .build()
        .unwrap();
    let mut rng = SeededRng::from_seed(0);
    let mutate = MutateRandomReset::new();
    let parent = build::chromosome(vec![2i64; 10]);

    for _ in 0..100 {
        let child = mutate.call(&genotype, &parent, &mut rng);
        assert_eq!(child.length(), 10);
        assert!(child.genes.iter().all(|&gene| (0..=4).contains(&gene)));
    }
}
