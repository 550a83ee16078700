pub mod chromosome;
pub mod initializer;
pub mod fitness;
pub mod operators;
pub mod evolution_engine;
pub mod progress;

pub use chromosome::{Chromosome, Population};
pub use fitness::{FitnessEvaluator, LegalMoveFitness, ProximityFitness};
pub use evolution_engine::{
    EvolutionEngine, EvolutionOutcome, EvolutionState, GenerationStats, ProgressCallback,
};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
