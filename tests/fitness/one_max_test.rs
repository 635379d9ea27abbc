use crate::support::*;
use blocktest::execution::ExecutionTrace;
use blocktest::fitness::{FitnessFunction, OneMax};
use std::cmp::Ordering;

#[test]
fn counts_true_genes() {
    let one_max = OneMax::new(4);
    let trace = ExecutionTrace::new();

    let fitness = one_max
        .calculate(&build::chromosome(vec![true, false, true, false]), &trace)
        .unwrap();
    assert_eq!(fitness, 2.0);
    assert!(!one_max.is_optimal(fitness));

    let fitness = one_max
        .calculate(&build::chromosome(vec![true; 4]), &trace)
        .unwrap();
    assert_eq!(fitness, 4.0);
    assert!(one_max.is_optimal(fitness));
}

#[test]
fn compare_is_a_total_order_with_greater_better() {
    let one_max = OneMax::new(4);
    assert_eq!(one_max.compare(3.0, 1.0), Ordering::Greater);
    assert_eq!(one_max.compare(1.0, 3.0), Ordering::Less);
    assert_eq!(one_max.compare(2.0, 2.0), Ordering::Equal);
    assert_eq!(
        one_max.compare(0.0, f64::NEG_INFINITY),
        Ordering::Greater
    );
}

#[test]
fn worst_is_not_optimal() {
    let one_max = OneMax::new(4);
    assert!(!one_max.is_optimal(one_max.worst()));
}
