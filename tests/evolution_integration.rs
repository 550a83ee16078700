use mazegen::config::{EvolutionConfig, FitnessKind};
use mazegen::engines::evaluation::any_path_reaches_end;
use mazegen::engines::generation::initializer::generate_population;
use mazegen::engines::generation::{
    ChannelProgressCallback, EvolutionEngine, EvolutionState, FitnessEvaluator, GenerationStats,
    LegalMoveFitness, ProgressCallback, ProgressMessage,
};
use mazegen::export::RunReport;
use mazegen::maze::{default_layout, Maze};
use mazegen::types::Gene;
use mazegen::MazegenError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Records what the engine reports
#[derive(Default)]
struct RecordingCallback {
    started: Vec<usize>,
    completed: Vec<GenerationStats>,
}

impl ProgressCallback for &mut RecordingCallback {
    fn on_generation_start(&mut self, generation: usize) {
        self.started.push(generation);
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        self.completed.push(stats.clone());
    }
}

struct Silent;

impl ProgressCallback for Silent {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _stats: &GenerationStats) {}
}

fn test_config(generations: usize, seed: u64) -> EvolutionConfig {
    EvolutionConfig {
        population_size: 40,
        path_length: 60,
        generations,
        mutation_rate: 0.1,
        seed: Some(seed),
        fitness: FitnessKind::LegalMoves,
    }
}

fn default_maze() -> Maze {
    Maze::from_rows(&default_layout()).unwrap()
}

#[test]
fn test_zero_generations_returns_initial_population() {
    let maze = default_maze();
    let config = test_config(0, 42);

    let mut engine = EvolutionEngine::new(config.clone(), maze.clone()).unwrap();
    let outcome = engine.run(Silent).unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let expected = generate_population(
        &maze,
        maze.start(),
        config.population_size,
        config.path_length,
        &mut rng,
    );

    assert_eq!(outcome.population, expected);
    assert!(outcome.history.is_empty());
    assert_eq!(engine.state(), EvolutionState::Done);
}

#[test]
fn test_runs_every_generation() {
    let mut recorder = RecordingCallback::default();
    let mut engine = EvolutionEngine::new(test_config(7, 1), default_maze()).unwrap();

    let outcome = engine.run(&mut recorder).unwrap();

    assert_eq!(recorder.started, (0..7).collect::<Vec<_>>());
    assert_eq!(recorder.completed.len(), 7);
    assert_eq!(outcome.history, recorder.completed);
    assert_eq!(outcome.population.len(), 40);
    assert!(outcome.population.iter().all(|c| c.len() == 60));
    assert_eq!(engine.state(), EvolutionState::Done);

    for stats in &outcome.history {
        assert!(stats.worst_fitness as f64 <= stats.mean_fitness);
        assert!(stats.mean_fitness <= stats.best_fitness as f64);
    }
}

#[test]
fn test_same_seed_same_outcome() {
    let mut a = EvolutionEngine::new(test_config(5, 99), default_maze()).unwrap();
    let mut b = EvolutionEngine::new(test_config(5, 99), default_maze()).unwrap();

    let first = a.run(Silent).unwrap();
    let second = b.run(Silent).unwrap();

    assert_eq!(first.population, second.population);
    assert_eq!(first.path_found, second.path_found);
    assert_eq!(first.history, second.history);
}

#[test]
fn test_outcome_matches_path_checker() {
    let maze = default_maze();
    let mut engine = EvolutionEngine::new(test_config(10, 3), maze.clone()).unwrap();
    let outcome = engine.run(Silent).unwrap();

    assert_eq!(
        outcome.path_found,
        any_path_reaches_end(&outcome.population, &maze, maze.start())
    );
    assert_eq!(outcome.path_found, outcome.successful_index.is_some());
}

#[test]
fn test_corridor_is_solved() {
    let maze = Maze::from_rows(&["1111", "1S0E", "1111"]).unwrap();
    let config = EvolutionConfig {
        population_size: 50,
        path_length: 4,
        generations: 3,
        mutation_rate: 0.0,
        seed: Some(8),
        fitness: FitnessKind::LegalMoves,
    };

    let mut engine = EvolutionEngine::new(config, maze).unwrap();
    let outcome = engine.run(Silent).unwrap();
    assert!(outcome.path_found);
}

#[test]
fn test_single_chromosome_population_fails_to_breed() {
    let config = EvolutionConfig {
        population_size: 1,
        ..test_config(1, 5)
    };
    let mut engine = EvolutionEngine::new(config, default_maze()).unwrap();

    let result = engine.run(Silent);
    assert!(matches!(
        result,
        Err(MazegenError::InsufficientPopulation { population_size: 1, survivors: 0 })
    ));
}

#[test]
fn test_evolve_rejects_population_of_wrong_length() {
    let mut engine = EvolutionEngine::new(test_config(2, 5), default_maze()).unwrap();
    let population = vec![vec![Gene::Blocked; 3]; 4];

    let result = engine.evolve(population, Silent);
    assert!(matches!(
        result,
        Err(MazegenError::ChromosomeLength { index: 0, expected: 60, actual: 3 })
    ));
}

#[test]
fn test_final_population_stats_recorded() {
    let maze = default_maze();
    let mut engine = EvolutionEngine::new(test_config(4, 13), maze.clone()).unwrap();
    let outcome = engine.run(Silent).unwrap();

    let scores: Vec<u64> = outcome
        .population
        .iter()
        .map(|c| LegalMoveFitness.score(c))
        .collect();

    assert_eq!(outcome.history.len(), 4);
    assert_eq!(outcome.final_stats.generation, 4);
    assert_eq!(outcome.final_stats.best_fitness, *scores.iter().max().unwrap());
    assert_eq!(outcome.final_stats.worst_fitness, *scores.iter().min().unwrap());

    let report = RunReport::new(&maze, &outcome);
    assert_eq!(report.final_stats, outcome.final_stats);
}

#[test]
fn test_zero_generations_final_stats_describe_initial_population() {
    let mut engine = EvolutionEngine::new(test_config(0, 42), default_maze()).unwrap();
    let outcome = engine.run(Silent).unwrap();

    let best = outcome
        .population
        .iter()
        .map(|c| LegalMoveFitness.score(c))
        .max()
        .unwrap();
    assert_eq!(outcome.final_stats.generation, 0);
    assert_eq!(outcome.final_stats.best_fitness, best);
}

#[test]
fn test_invalid_config_rejected() {
    let config = EvolutionConfig {
        mutation_rate: 1.5,
        ..test_config(1, 5)
    };
    assert!(matches!(
        EvolutionEngine::new(config, default_maze()),
        Err(MazegenError::Configuration(_))
    ));
}

#[test]
fn test_custom_fitness_strategy() {
    /// Prefers chromosomes with many Blocked genes
    struct BlockedLover;

    impl FitnessEvaluator for BlockedLover {
        fn score(&self, chromosome: &[Gene]) -> u64 {
            chromosome.iter().filter(|g| g.is_blocked()).count() as u64
        }
    }

    let maze = default_maze();
    let mut engine = EvolutionEngine::new(test_config(3, 12), maze.clone())
        .unwrap()
        .with_fitness(Box::new(BlockedLover));
    let outcome = engine.run(Silent).unwrap();

    let mut rng = StdRng::seed_from_u64(12);
    let initial = generate_population(&maze, maze.start(), 40, 60, &mut rng);
    let most_blocked = initial
        .iter()
        .map(|c| BlockedLover.score(c))
        .max()
        .unwrap();

    assert_eq!(outcome.history.len(), 3);
    assert_eq!(outcome.history[0].best_fitness, most_blocked);
}

#[test]
fn test_proximity_fitness_runs() {
    let config = EvolutionConfig {
        fitness: FitnessKind::Proximity,
        ..test_config(4, 21)
    };
    let mut engine = EvolutionEngine::new(config, default_maze()).unwrap();
    let outcome = engine.run(Silent).unwrap();

    assert_eq!(outcome.population.len(), 40);
    assert!(outcome.history.iter().all(|s| s.best_fitness > 0));
}

#[test]
fn test_channel_callback_forwards_progress() {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut engine = EvolutionEngine::new(test_config(2, 6), default_maze()).unwrap();
    engine.run(ChannelProgressCallback::new(tx)).unwrap();

    let messages: Vec<ProgressMessage> = rx.try_iter().collect();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0], ProgressMessage::GenerationStart(0));
    assert!(matches!(messages[1], ProgressMessage::GenerationComplete(ref s) if s.generation == 0));
    assert_eq!(messages[2], ProgressMessage::GenerationStart(1));
}

#[test]
fn test_run_report_serializes() {
    let maze = default_maze();
    let mut engine = EvolutionEngine::new(test_config(2, 30), maze.clone()).unwrap();
    let outcome = engine.run(Silent).unwrap();

    let report = RunReport::new(&maze, &outcome);
    assert_eq!(report.chromosomes.len(), 40);
    assert!(report.chromosomes.iter().all(|c| c.len() == 60));
    assert_eq!(report.trajectories.len(), 40);
    assert_eq!(report.maze, default_layout());

    let json = report.to_json().unwrap();
    let parsed: RunReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
