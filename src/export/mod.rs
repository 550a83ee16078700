use crate::engines::evaluation::trace_agent_path;
use crate::engines::generation::chromosome::chromosome_to_string;
use crate::engines::generation::{EvolutionOutcome, GenerationStats};
use crate::error::Result;
use crate::maze::Maze;
use crate::types::Position;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a display layer needs to draw the maze and animate the final generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub maze: Vec<String>,
    pub start: Position,
    pub ends: Vec<Position>,
    pub chromosomes: Vec<String>,
    pub trajectories: Vec<Vec<Position>>,
    pub path_found: bool,
    pub successful_index: Option<usize>,
    pub history: Vec<GenerationStats>,
    pub final_stats: GenerationStats,
}

impl RunReport {
    pub fn new(maze: &Maze, outcome: &EvolutionOutcome) -> Self {
        let start = maze.start();
        Self {
            maze: maze.to_rows(),
            start,
            ends: maze.ends().to_vec(),
            chromosomes: outcome
                .population
                .iter()
                .map(|c| chromosome_to_string(c))
                .collect(),
            trajectories: outcome
                .population
                .iter()
                .map(|c| trace_agent_path(c, maze, start))
                .collect(),
            path_found: outcome.path_found,
            successful_index: outcome.successful_index,
            history: outcome.history.clone(),
            final_stats: outcome.final_stats.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
