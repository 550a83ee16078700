use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazegenError {
    #[error("Malformed maze: {0}")]
    MalformedMaze(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Insufficient population: {survivors} survivors selected from a population of {population_size}")]
    InsufficientPopulation {
        population_size: usize,
        survivors: usize,
    },

    #[error("Chromosome {index} has {actual} genes, expected {expected}")]
    ChromosomeLength {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, MazegenError>;
