use super::traits::ConfigSection;
use crate::error::MazegenError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub path_length: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub seed: Option<u64>,
    pub fitness: FitnessKind,
}

/// Which fitness strategy scores chromosomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessKind {
    /// 10 points per accepted (non-Blocked) gene
    LegalMoves,
    /// Rewards getting close to the nearest End cell
    Proximity,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            path_length: 250,
            generations: 100,
            mutation_rate: 0.1,
            seed: None,
            fitness: FitnessKind::LegalMoves,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), MazegenError> {
        if self.population_size == 0 {
            return Err(MazegenError::Configuration(
                "Population size must be positive".to_string()
            ));
        }
        if self.path_length == 0 {
            return Err(MazegenError::Configuration(
                "Path length must be positive".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(MazegenError::Configuration(format!(
                "Mutation rate must be between 0 and 1, got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
