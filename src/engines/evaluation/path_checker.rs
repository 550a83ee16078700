use crate::engines::generation::chromosome::Chromosome;
use crate::maze::Maze;
use crate::types::{Gene, Position};

/// Replay one chromosome from `start` and report whether it enters an End cell.
///
/// A `Blocked` gene aborts the replay. A move onto a non-walkable cell leaves
/// the agent in place and replay continues with the next gene.
pub fn reaches_end(chromosome: &[Gene], maze: &Maze, start: Position) -> bool {
    let mut position = start;

    for gene in chromosome {
        let direction = match gene {
            Gene::Blocked => return false,
            Gene::Move(m) => *m,
        };

        let next = position.step(direction);
        if maze.is_walkable_at(next) {
            position = next;
            if maze.is_end(position) {
                return true;
            }
        }
    }

    false
}

/// Index of the first chromosome whose replay reaches an End cell
pub fn first_successful_index(
    population: &[Chromosome],
    maze: &Maze,
    start: Position,
) -> Option<usize> {
    population
        .iter()
        .position(|chromosome| reaches_end(chromosome, maze, start))
}

pub fn any_path_reaches_end(population: &[Chromosome], maze: &Maze, start: Position) -> bool {
    first_successful_index(population, maze, start).is_some()
}
