use crate::support::*;
use approx::relative_eq;
use blocktest::errors::Error;
use blocktest::execution::{BranchDistance, ExecutionTrace};
use blocktest::fitness::{FitnessFunction, StatementFitness};

#[test]
fn executed_statement_is_optimal() {
    let fitness_function: StatementFitness<usize> = StatementFitness::new(7);
    let mut trace = ExecutionTrace::new();
    trace.record_execution(7);

    let fitness = fitness_function
        .calculate(&build::chromosome(vec![0usize]), &trace)
        .unwrap();
    assert_eq!(fitness, 0.0);
    assert!(fitness_function.is_optimal(fitness));
}

#[test]
fn unreached_statement_scores_negated_distance() {
    let fitness_function: StatementFitness<usize> = StatementFitness::new(7);
    let mut trace = ExecutionTrace::new();
    trace.record_distance(
        7,
        BranchDistance {
            approach_level: 2,
            branch_distance: 3.0,
        },
    );

    let fitness = fitness_function
        .calculate(&build::chromosome(vec![0usize]), &trace)
        .unwrap();
    assert!(relative_eq!(fitness, -(2.0 + 3.0 / 4.0)));
    assert!(!fitness_function.is_optimal(fitness));

    // closer execution, better fitness
    let mut closer_trace = ExecutionTrace::new();
    closer_trace.record_distance(
        7,
        BranchDistance {
            approach_level: 1,
            branch_distance: 0.5,
        },
    );
    let closer_fitness = fitness_function
        .calculate(&build::chromosome(vec![0usize]), &closer_trace)
        .unwrap();
    assert!(closer_fitness > fitness);
}

#[test]
fn missing_distance_data_is_not_yet_implemented() {
    let fitness_function: StatementFitness<usize> = StatementFitness::new(7);
    let trace = ExecutionTrace::new();

    let result = fitness_function.calculate(&build::chromosome(vec![0usize]), &trace);
    assert!(matches!(result, Err(Error::NotYetImplemented(_))));
}
