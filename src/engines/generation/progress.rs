use super::evolution_engine::{GenerationStats, ProgressCallback};

/// Reports progress through the `log` facade
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        log::info!(
            "Generation {} complete. Best fitness: {}, mean: {:.1}, worst: {}",
            stats.generation + 1,
            stats.best_fitness,
            stats.mean_fitness,
            stats.worst_fitness
        );
    }
}

/// Forwards progress to another thread, e.g. a display loop
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete(GenerationStats),
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete(stats.clone()));
    }
}
