use crate::maze::Maze;
use crate::types::{Gene, Position};

/// Cells an agent visits when the chromosome is animated.
///
/// Unlike the outcome check this skips `Blocked` genes instead of stopping,
/// and keeps walking after an End cell. Illegal moves leave the agent in
/// place and add nothing to the trajectory. The start cell is not included.
pub fn trace_agent_path(chromosome: &[Gene], maze: &Maze, start: Position) -> Vec<Position> {
    let mut position = start;
    let mut visited = Vec::new();

    for gene in chromosome {
        let Gene::Move(direction) = gene else {
            continue;
        };

        let next = position.step(*direction);
        if maze.is_walkable_at(next) {
            position = next;
            visited.push(position);
        }
    }

    visited
}
