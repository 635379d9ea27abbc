use crate::support::*;
use blocktest::genotype::{BitStringGenotype, Genotype};
use blocktest::mutate::{Mutate, MutateBitFlip};

#[test]
fn keeps_length_and_parent_untouched() {
    let genotype = BitStringGenotype::builder()
        .with_genes_size(10)
        .build()
        .unwrap();
    let mut rng = SeededRng::from_seed(0);
    let parent = build::chromosome(vec![true; 10]);

    let child = MutateBitFlip::new().call(&genotype, &parent, &mut rng);
    assert_eq!(child.length(), 10);
    assert!(!child.is_evaluated());
    assert_eq!(parent.genes, vec![true; 10]);
}

#[test]
fn eventually_flips_every_position() {
    let genotype = BitStringGenotype::builder()
        .with_genes_size(8)
        .build()
        .unwrap();
    let mut rng = SeededRng::from_seed(0);
    let mutate = MutateBitFlip::new();
    let parent = build::chromosome(vec![false; 8]);

    let mut seen_flips = vec![false; 8];
    for _ in 0..1000 {
        let child = mutate.call(&genotype, &parent, &mut rng);
        for (position, &gene) in child.genes.iter().enumerate() {
            if gene {
                seen_flips[position] = true;
            }
        }
    }
    assert!(seen_flips.iter().all(|&flipped| flipped));
}
