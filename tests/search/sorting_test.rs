use crate::support::*;
use blocktest::fitness::GoalSet;
use blocktest::search::mosa::sorting;

fn evaluated(goals: &GoalSet<bool>, genes: Vec<bool>) -> Chromosome<bool> {
    let mut chromosome = build::chromosome(genes);
    build::evaluate_against(goals, &mut chromosome);
    chromosome
}

#[test]
fn dominance_is_a_strict_partial_order() {
    let goals = single_bit_goals(3);
    let uncovered: Vec<usize> = vec![0, 1, 2];

    let better = evaluated(&goals, vec![true, true, false]);
    let middle = evaluated(&goals, vec![true, false, false]);
    let worse = evaluated(&goals, vec![false, false, false]);

    // irreflexive and asymmetric
    assert!(!sorting::dominates(&better, &better, &goals, &uncovered));
    assert!(sorting::dominates(&better, &middle, &goals, &uncovered));
    assert!(!sorting::dominates(&middle, &better, &goals, &uncovered));

    // transitive
    assert!(sorting::dominates(&middle, &worse, &goals, &uncovered));
    assert!(sorting::dominates(&better, &worse, &goals, &uncovered));
}

#[test]
fn incomparable_chromosomes_do_not_dominate() {
    let goals = single_bit_goals(2);
    let uncovered: Vec<usize> = vec![0, 1];
    let population = build::evaluated_population(
        &goals,
        vec![vec![true, false], vec![false, true]],
    );

    let first = &population.chromosomes[0];
    let second = &population.chromosomes[1];
    assert!(!sorting::dominates(first, second, &goals, &uncovered));
    assert!(!sorting::dominates(second, first, &goals, &uncovered));
}

#[test]
fn covered_goals_are_excluded_from_dominance() {
    let goals = single_bit_goals(2);
    // goal 0 already archived: only goal 1 decides
    let uncovered: Vec<usize> = vec![1];
    let population = build::evaluated_population(
        &goals,
        vec![vec![true, false], vec![false, true]],
    );

    assert!(sorting::dominates(
        &population.chromosomes[1],
        &population.chromosomes[0],
        &goals,
        &uncovered
    ));
}

#[test]
fn fast_non_dominated_sort_builds_ordered_fronts() {
    let goals = single_bit_goals(2);
    let uncovered: Vec<usize> = vec![0, 1];
    let population = build::evaluated_population(
        &goals,
        vec![
            vec![true, true],
            vec![true, false],
            vec![false, true],
            vec![false, false],
        ],
    );

    let fronts =
        sorting::fast_non_dominated_sort(population.chromosomes, &goals, &uncovered);
    assert_eq!(fronts.len(), 3);
    assert_eq!(inspect::chromosomes(&fronts[0]), vec![vec![true, true]]);
    assert_eq!(
        inspect::chromosomes(&fronts[1]),
        vec![vec![true, false], vec![false, true]]
    );
    assert_eq!(inspect::chromosomes(&fronts[2]), vec![vec![false, false]]);
}

#[test]
fn sub_vector_dominance_counts_beating_goals() {
    let goals = single_bit_goals(3);
    let uncovered: Vec<usize> = vec![0, 1, 2];
    let population = build::evaluated_population(
        &goals,
        vec![
            vec![true, true, false],
            vec![false, false, true],
            vec![true, false, false],
        ],
    );

    let scores =
        sorting::sub_vector_dominance_scores(&population.chromosomes, &goals, &uncovered);
    // worst peer beats the first on one goal, the second on two, the third
    // on one
    assert_eq!(scores, vec![1, 2, 1]);
}

#[test]
fn preference_sort_lifts_the_best_per_goal_once() {
    let goals = single_bit_goals(2);
    let uncovered: Vec<usize> = vec![0, 1];
    let population = build::evaluated_population(
        &goals,
        vec![
            vec![false, false],
            vec![true, true],
            vec![true, false],
        ],
    );

    let fronts = sorting::preference_sort(population.chromosomes, &goals, &uncovered, 10);
    // [true, true] is best for both goals, so it appears once
    assert_eq!(inspect::chromosomes(&fronts[0]), vec![vec![true, true]]);
    let remaining: usize = fronts[1..].iter().map(|front| front.len()).sum();
    assert_eq!(remaining, 2);
}

#[test]
fn preference_sort_ties_prefer_shorter_chromosomes() {
    let goals = one_max_goals(2);
    let uncovered: Vec<usize> = vec![0];

    // same fitness, different lengths (variable-length genotype view)
    let mut long = build::chromosome(vec![true, false, false]);
    long.fitness_scores = vec![1.0];
    let mut short = build::chromosome(vec![true]);
    short.fitness_scores = vec![1.0];

    let fronts = sorting::preference_sort(vec![long, short], &goals, &uncovered, 10);
    assert_eq!(inspect::chromosomes(&fronts[0]), vec![vec![true]]);
}

#[test]
fn oversized_preferred_front_keeps_the_rest_unsorted() {
    let goals = single_bit_goals(3);
    let uncovered: Vec<usize> = vec![0, 1, 2];
    let population = build::evaluated_population(
        &goals,
        vec![
            vec![true, false, false],
            vec![false, true, false],
            vec![false, false, true],
            vec![true, true, false],
            vec![false, false, false],
        ],
    );

    // population size 2 < 3 preferred chromosomes: the remainder must come
    // back as one single front
    let fronts = sorting::preference_sort(population.chromosomes, &goals, &uncovered, 2);
    assert_eq!(fronts.len(), 2);
    assert_eq!(fronts[0].len(), 3);
    assert_eq!(fronts[1].len(), 2);
}

#[test]
fn empty_uncovered_view_produces_a_single_front() {
    let goals = single_bit_goals(2);
    let uncovered: Vec<usize> = vec![];
    let population = build::evaluated_population(
        &goals,
        vec![vec![true, true], vec![false, false]],
    );

    let fronts = sorting::preference_sort(population.chromosomes, &goals, &uncovered, 10);
    assert_eq!(fronts.len(), 1);
    assert_eq!(fronts[0].len(), 2);
}
