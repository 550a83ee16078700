use crate::engines::generation::chromosome::{Chromosome, Population};
use crate::engines::generation::fitness::FitnessEvaluator;
use crate::error::{MazegenError, Result};
use crate::types::{Gene, Move};
use rand::Rng;

/// Truncation selection: keep the fitter half (`len / 2`, rounded down).
///
/// The sort is stable, so chromosomes with equal fitness keep their input order.
pub fn truncation_selection(
    population: &[Chromosome],
    evaluator: &dyn FitnessEvaluator,
) -> Population {
    let mut scored: Vec<(&Chromosome, u64)> = population
        .iter()
        .map(|chromosome| (chromosome, evaluator.score(chromosome)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(population.len() / 2)
        .map(|(chromosome, _)| chromosome.clone())
        .collect()
}

/// Single-point crossover producing `population.len()` offspring.
///
/// The first parent is drawn from the survivors, the second from the whole
/// pre-selection population. The cut point lies in `1..chromosome_length`;
/// a one-gene chromosome is copied from the first parent.
pub fn crossover<R: Rng>(
    selected: &[Chromosome],
    population: &[Chromosome],
    chromosome_length: usize,
    rng: &mut R,
) -> Result<Population> {
    if selected.is_empty() {
        return Err(MazegenError::InsufficientPopulation {
            population_size: population.len(),
            survivors: 0,
        });
    }
    check_lengths(selected, chromosome_length)?;
    check_lengths(population, chromosome_length)?;

    let mut offspring = Vec::with_capacity(population.len());

    for _ in 0..population.len() {
        let parent1 = &selected[rng.gen_range(0..selected.len())];
        let parent2 = &population[rng.gen_range(0..population.len())];

        let point = if chromosome_length > 1 {
            rng.gen_range(1..chromosome_length)
        } else {
            chromosome_length
        };

        let mut child = Vec::with_capacity(chromosome_length);
        child.extend_from_slice(&parent1[..point]);
        child.extend_from_slice(&parent2[point..chromosome_length]);
        offspring.push(child);
    }

    Ok(offspring)
}

/// Every chromosome must have exactly `expected` genes
pub fn check_lengths(population: &[Chromosome], expected: usize) -> Result<()> {
    match population.iter().position(|c| c.len() != expected) {
        Some(index) => Err(MazegenError::ChromosomeLength {
            index,
            expected,
            actual: population[index].len(),
        }),
        None => Ok(()),
    }
}

/// Mutation: each gene is independently replaced by a random move with probability `mutation_rate`.
/// Never produces `Blocked`.
pub fn mutate<R: Rng>(chromosome: &mut [Gene], mutation_rate: f64, rng: &mut R) {
    for gene in chromosome.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            *gene = Gene::Move(random_move(rng));
        }
    }
}

pub fn mutate_population<R: Rng>(
    mut population: Population,
    mutation_rate: f64,
    rng: &mut R,
) -> Population {
    for chromosome in population.iter_mut() {
        mutate(chromosome, mutation_rate, rng);
    }
    population
}

pub fn random_move<R: Rng>(rng: &mut R) -> Move {
    Move::ALL[rng.gen_range(0..Move::ALL.len())]
}
