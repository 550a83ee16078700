use anyhow::Context;
use mazegen::config::ConfigManager;
use mazegen::engines::generation::{ConsoleProgressCallback, EvolutionEngine};
use mazegen::export::RunReport;
use std::env;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // mazegen [CONFIG.toml] [REPORT.json]
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(Path::new);
    let report_path = args.get(2).map(Path::new);

    let manager = ConfigManager::load_layered(config_path).context("loading configuration")?;
    let config = manager.get();

    let maze = config.maze.build()?;
    log::info!(
        "Maze {}x{}, population {}, path length {}, {} generations, mutation rate {}",
        maze.width(),
        maze.height(),
        config.evolution.population_size,
        config.evolution.path_length,
        config.evolution.generations,
        config.evolution.mutation_rate
    );

    let mut engine = EvolutionEngine::new(config.evolution.clone(), maze.clone())?;
    let outcome = engine.run(ConsoleProgressCallback)?;

    if outcome.path_found {
        println!("A path was found!");
    } else {
        println!("No path found.");
    }

    if let Some(path) = report_path {
        RunReport::new(&maze, &outcome)
            .write_json(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        log::info!("Report written to {}", path.display());
    }

    Ok(())
}
