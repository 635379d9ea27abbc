//! The many-objective sorting kernels: preference sorting, fast
//! non-dominated sorting and sub-vector-dominance scoring, all restricted to
//! the goals that still lack an archive entry.
use crate::chromosome::{Allele, Chromosome};
use crate::fitness::GoalSet;
use std::cmp::Ordering;

/// Preference-restricted dominance: `a` dominates `b` iff `a` is no worse on
/// every uncovered goal and strictly better on at least one. Covered goals
/// are excluded entirely.
pub fn dominates<A: Allele>(
    a: &Chromosome<A>,
    b: &Chromosome<A>,
    goals: &GoalSet<A>,
    uncovered: &[usize],
) -> bool {
    let mut strictly_better = false;
    for &position in uncovered {
        let fitness_function = goals.fitness_function_at(position);
        match fitness_function.compare(a.fitness_score(position), b.fitness_score(position)) {
            Ordering::Less => return false,
            Ordering::Greater => strictly_better = true,
            Ordering::Equal => {}
        }
    }
    strictly_better
}

/// Standard fast non-dominated sorting, producing fronts in order of
/// non-domination rank.
pub fn fast_non_dominated_sort<A: Allele>(
    chromosomes: Vec<Chromosome<A>>,
    goals: &GoalSet<A>,
    uncovered: &[usize],
) -> Vec<Vec<Chromosome<A>>> {
    let size = chromosomes.len();
    if size == 0 {
        return vec![];
    }

    let mut dominated_by: Vec<Vec<usize>> = vec![vec![]; size];
    let mut domination_count = vec![0usize; size];
    for i in 0..size {
        for j in (i + 1)..size {
            if dominates(&chromosomes[i], &chromosomes[j], goals, uncovered) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if dominates(&chromosomes[j], &chromosomes[i], goals, uncovered) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut index_fronts: Vec<Vec<usize>> = vec![(0..size)
        .filter(|&i| domination_count[i] == 0)
        .collect()];
    while let Some(front) = index_fronts.last() {
        let mut next_front = vec![];
        for &i in front {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next_front.push(j);
                }
            }
        }
        if next_front.is_empty() {
            break;
        }
        index_fronts.push(next_front);
    }

    let mut slots: Vec<Option<Chromosome<A>>> = chromosomes.into_iter().map(Some).collect();
    index_fronts
        .into_iter()
        .map(|front| {
            front
                .into_iter()
                .map(|i| slots[i].take().unwrap())
                .collect()
        })
        .collect()
}

/// Sub-vector-dominance score of every chromosome against its front peers:
/// per peer, the number of uncovered goals on which the peer is strictly
/// better; the score is the maximum over all peers. Lower is better.
pub fn sub_vector_dominance_scores<A: Allele>(
    front: &[Chromosome<A>],
    goals: &GoalSet<A>,
    uncovered: &[usize],
) -> Vec<usize> {
    front
        .iter()
        .enumerate()
        .map(|(own_index, chromosome)| {
            front
                .iter()
                .enumerate()
                .filter(|(peer_index, _)| *peer_index != own_index)
                .map(|(_, peer)| {
                    uncovered
                        .iter()
                        .filter(|&&position| {
                            goals.fitness_function_at(position).compare(
                                peer.fitness_score(position),
                                chromosome.fitness_score(position),
                            ) == Ordering::Greater
                        })
                        .count()
                })
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Preference sorting: for each uncovered goal the single best chromosome
/// (ties broken by shorter length) is lifted into the preferred front, each
/// chromosome at most once; the rest undergo fast non-dominated sorting.
///
/// When the preferred front alone already exceeds the population size, the
/// remainder is appended unsorted as a single front instead of being sorted.
pub fn preference_sort<A: Allele>(
    chromosomes: Vec<Chromosome<A>>,
    goals: &GoalSet<A>,
    uncovered: &[usize],
    population_size: usize,
) -> Vec<Vec<Chromosome<A>>> {
    let mut preferred_indices: Vec<usize> = vec![];
    for &position in uncovered {
        let fitness_function = goals.fitness_function_at(position);
        let mut best: Option<usize> = None;
        for (candidate, chromosome) in chromosomes.iter().enumerate() {
            best = match best {
                None => Some(candidate),
                Some(current) => {
                    let ordering = fitness_function.compare(
                        chromosome.fitness_score(position),
                        chromosomes[current].fitness_score(position),
                    );
                    if ordering == Ordering::Greater
                        || (ordering == Ordering::Equal
                            && chromosome.length() < chromosomes[current].length())
                    {
                        Some(candidate)
                    } else {
                        Some(current)
                    }
                }
            };
        }
        if let Some(best) = best {
            if !preferred_indices.contains(&best) {
                preferred_indices.push(best);
            }
        }
    }

    let mut slots: Vec<Option<Chromosome<A>>> = chromosomes.into_iter().map(Some).collect();
    let preferred: Vec<Chromosome<A>> = preferred_indices
        .iter()
        .map(|&i| slots[i].take().unwrap())
        .collect();
    let remaining: Vec<Chromosome<A>> = slots.into_iter().flatten().collect();

    let mut fronts = vec![];
    let preferred_overflows = preferred.len() > population_size;
    if !preferred.is_empty() {
        fronts.push(preferred);
    }
    if !remaining.is_empty() {
        if preferred_overflows {
            fronts.push(remaining);
        } else {
            fronts.extend(fast_non_dominated_sort(remaining, goals, uncovered));
        }
    }
    fronts
}
