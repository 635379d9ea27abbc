use crate::support::*;
use blocktest::execution::ExecutionTrace;
use blocktest::fitness::{FitnessFunction, SingleBit};

#[test]
fn optimal_iff_bit_is_set() {
    let single_bit = SingleBit::new(2);
    let trace = ExecutionTrace::new();

    let set = single_bit
        .calculate(&build::chromosome(vec![false, false, true]), &trace)
        .unwrap();
    assert!(single_bit.is_optimal(set));

    let unset = single_bit
        .calculate(&build::chromosome(vec![true, true, false]), &trace)
        .unwrap();
    assert!(!single_bit.is_optimal(unset));
}

#[test]
fn out_of_range_bit_scores_worst() {
    let single_bit = SingleBit::new(9);
    let trace = ExecutionTrace::new();
    let fitness = single_bit
        .calculate(&build::chromosome(vec![true, true]), &trace)
        .unwrap();
    assert_eq!(fitness, 0.0);
    assert!(!single_bit.is_optimal(fitness));
}
