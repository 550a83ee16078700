use crate::config::FitnessKind;
use crate::engines::evaluation::replay::trace_agent_path;
use crate::engines::generation::chromosome::accepted_moves;
use crate::maze::Maze;
use crate::types::Gene;

/// Points awarded per accepted (non-Blocked) gene
pub const POINTS_PER_MOVE: u64 = 10;

/// Scores a chromosome; higher is better
pub trait FitnessEvaluator {
    fn score(&self, chromosome: &[Gene]) -> u64;
}

/// `10 * accepted genes`. Only move legality counts; the End cell plays no part.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveFitness;

impl FitnessEvaluator for LegalMoveFitness {
    fn score(&self, chromosome: &[Gene]) -> u64 {
        POINTS_PER_MOVE * accepted_moves(chromosome) as u64
    }
}

/// Rewards the closest approach to an End cell along the animated trajectory.
///
/// Score is `POINTS_PER_MOVE * (width + height - best_distance)`, with the
/// same bonus again when an End cell is actually entered.
#[derive(Debug, Clone)]
pub struct ProximityFitness {
    maze: Maze,
}

impl ProximityFitness {
    pub fn new(maze: Maze) -> Self {
        Self { maze }
    }
}

impl FitnessEvaluator for ProximityFitness {
    fn score(&self, chromosome: &[Gene]) -> u64 {
        let start = self.maze.start();
        let path = trace_agent_path(chromosome, &self.maze, start);

        let best = std::iter::once(start)
            .chain(path.iter().copied())
            .map(|p| self.maze.distance_to_nearest_end(p))
            .min()
            .unwrap_or(0);

        let span = self.maze.width() + self.maze.height();
        let mut score = POINTS_PER_MOVE * span.saturating_sub(best) as u64;
        if best == 0 {
            score += POINTS_PER_MOVE * span as u64;
        }
        score
    }
}

pub fn evaluator_for(kind: FitnessKind, maze: &Maze) -> Box<dyn FitnessEvaluator> {
    match kind {
        FitnessKind::LegalMoves => Box::new(LegalMoveFitness),
        FitnessKind::Proximity => Box::new(ProximityFitness::new(maze.clone())),
    }
}
