use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evaluation::path_checker::first_successful_index;
use crate::engines::generation::{
    chromosome::Population,
    fitness::{evaluator_for, FitnessEvaluator},
    initializer::generate_population,
    operators::{check_lengths, crossover, mutate_population, truncation_selection},
};
use crate::error::MazegenError;
use crate::maze::Maze;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Where the generational loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionState {
    Running { generation: usize },
    Done,
}

/// Fitness summary of one population.
///
/// History entries describe the population generation `generation` started
/// from; the population the last generation produced is summarised in
/// `EvolutionOutcome::final_stats`, numbered `generations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: u64,
    pub worst_fitness: u64,
    pub mean_fitness: f64,
}

#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub population: Population,
    pub path_found: bool,
    pub successful_index: Option<usize>,
    pub history: Vec<GenerationStats>,
    pub final_stats: GenerationStats,
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, stats: &GenerationStats);
}

pub struct EvolutionEngine {
    config: EvolutionConfig,
    maze: Maze,
    fitness: Box<dyn FitnessEvaluator>,
    state: EvolutionState,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig, maze: Maze) -> Result<Self, MazegenError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let fitness = evaluator_for(config.fitness, &maze);

        Ok(Self {
            config,
            maze,
            fitness,
            state: EvolutionState::Running { generation: 0 },
            rng,
        })
    }

    /// Swap in a different fitness strategy
    pub fn with_fitness(mut self, fitness: Box<dyn FitnessEvaluator>) -> Self {
        self.fitness = fitness;
        self
    }

    /// Generate the initial population and evolve it for the configured generation count
    pub fn run<C: ProgressCallback>(
        &mut self,
        callback: C,
    ) -> Result<EvolutionOutcome, MazegenError> {
        let population = self.initialize_population();
        self.evolve(population, callback)
    }

    /// Evolve an existing population. Always runs every generation; success does not stop the loop.
    pub fn evolve<C: ProgressCallback>(
        &mut self,
        mut population: Population,
        mut callback: C,
    ) -> Result<EvolutionOutcome, MazegenError> {
        check_lengths(&population, self.config.path_length)?;
        let mut history = Vec::with_capacity(self.config.generations);

        for generation in 0..self.config.generations {
            self.state = EvolutionState::Running { generation };
            callback.on_generation_start(generation);

            let stats = self.generation_stats(generation, &population);
            population = self.next_generation(&population)?;

            callback.on_generation_complete(&stats);
            history.push(stats);
        }
        self.state = EvolutionState::Done;
        let final_stats = self.generation_stats(self.config.generations, &population);

        let start = self.maze.start();
        let successful_index = first_successful_index(&population, &self.maze, start);

        match successful_index {
            Some(index) => log::info!(
                "Evolution finished after {} generations; chromosome {} reaches the end",
                self.config.generations,
                index
            ),
            None => log::info!(
                "Evolution finished after {} generations; no chromosome reaches the end",
                self.config.generations
            ),
        }

        Ok(EvolutionOutcome {
            population,
            path_found: successful_index.is_some(),
            successful_index,
            history,
            final_stats,
        })
    }

    pub fn initialize_population(&mut self) -> Population {
        generate_population(
            &self.maze,
            self.maze.start(),
            self.config.population_size,
            self.config.path_length,
            &mut self.rng,
        )
    }

    /// One transition: selection, then crossover, then mutation
    pub fn next_generation(&mut self, population: &Population) -> Result<Population, MazegenError> {
        let selected = truncation_selection(population, self.fitness.as_ref());
        let offspring = crossover(&selected, population, self.config.path_length, &mut self.rng)?;
        Ok(mutate_population(offspring, self.config.mutation_rate, &mut self.rng))
    }

    fn generation_stats(&self, generation: usize, population: &Population) -> GenerationStats {
        let scores: Vec<u64> = population.iter().map(|c| self.fitness.score(c)).collect();
        let total: u64 = scores.iter().sum();

        GenerationStats {
            generation,
            best_fitness: scores.iter().copied().max().unwrap_or(0),
            worst_fitness: scores.iter().copied().min().unwrap_or(0),
            mean_fitness: if scores.is_empty() {
                0.0
            } else {
                total as f64 / scores.len() as f64
            },
        }
    }

    pub fn state(&self) -> EvolutionState {
        self.state
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }
}
