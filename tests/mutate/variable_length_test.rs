use crate::support::*;
use blocktest::genotype::{EventSequenceGenotype, Genotype};
use blocktest::mutate::{Mutate, MutateVariableLength};

fn genotype() -> EventSequenceGenotype {
    EventSequenceGenotype::builder()
        .with_event_count(4)
        .with_genes_size(20)
        .with_initial_genes_size(10)
        .with_variable_length(true)
        .build()
        .unwrap()
}

#[test]
fn length_stays_within_bounds() {
    let genotype = genotype();
    let mut rng = SeededRng::from_seed(0);
    let mutate = MutateVariableLength::new(0.5);
    let mut chromosome = build::chromosome(vec![0usize; 10]);

    for _ in 0..500 {
        chromosome = mutate.call(&genotype, &chromosome, &mut rng);
        assert!(chromosome.length() >= 1);
        assert!(chromosome.length() <= 20);
        assert!(chromosome.genes.iter().all(|&gene| gene < 4));
    }
}

#[test]
fn zero_alpha_never_grows() {
    let genotype = genotype();
    let mut rng = SeededRng::from_seed(0);
    let mutate = MutateVariableLength::new(0.0);
    let parent = build::chromosome(vec![0usize; 10]);

    for _ in 0..100 {
        let child = mutate.call(&genotype, &parent, &mut rng);
        assert!(child.length() <= 10);
    }
}

#[test]
fn high_alpha_drifts_longer() {
    let genotype = genotype();
    let mut rng = SeededRng::from_seed(0);
    let mutate = MutateVariableLength::new(0.9);
    let parent = build::chromosome(vec![0usize; 2]);

    // with alpha 0.9 the insertion run overwhelms the rare deletions
    let grew = (0..100)
        .map(|_| mutate.call(&genotype, &parent, &mut rng).length())
        .filter(|&length| length > 2)
        .count();
    assert!(grew > 50);
}
