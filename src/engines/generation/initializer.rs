use crate::engines::generation::chromosome::{Chromosome, Population};
use crate::maze::Maze;
use crate::types::{Gene, Move, Position};
use rand::Rng;

/// Random walk from `start` that never immediately reverses its last accepted move.
///
/// A move landing on a walkable cell is accepted: the agent advances and the
/// move is recorded. Otherwise the gene is `Blocked` and neither the position
/// nor the last accepted move changes, so a reversal is still allowed on the
/// next step.
pub fn random_walk_chromosome<R: Rng>(
    maze: &Maze,
    start: Position,
    path_length: usize,
    rng: &mut R,
) -> Chromosome {
    let mut chromosome = Vec::with_capacity(path_length);
    let mut position = start;
    let mut last_move: Option<Move> = None;

    for _ in 0..path_length {
        let candidates: Vec<Move> = Move::ALL
            .iter()
            .copied()
            .filter(|m| last_move.map_or(true, |last| *m != last.opposite()))
            .collect();

        let direction = candidates[rng.gen_range(0..candidates.len())];
        let next = position.step(direction);

        if maze.is_walkable_at(next) {
            position = next;
            chromosome.push(Gene::Move(direction));
            last_move = Some(direction);
        } else {
            chromosome.push(Gene::Blocked);
        }
    }

    chromosome
}

/// Generation 0: `population_size` independent random walks
pub fn generate_population<R: Rng>(
    maze: &Maze,
    start: Position,
    population_size: usize,
    path_length: usize,
    rng: &mut R,
) -> Population {
    (0..population_size)
        .map(|_| random_walk_chromosome(maze, start, path_length, rng))
        .collect()
}
