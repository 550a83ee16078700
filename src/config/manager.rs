use super::{evolution::EvolutionConfig, maze::MazeConfig, traits::ConfigSection};
use crate::error::MazegenError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `MAZEGEN__EVOLUTION__SEED=7`
pub const ENV_PREFIX: &str = "MAZEGEN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub maze: MazeConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), MazegenError> {
        self.evolution.validate()?;
        self.maze.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Defaults, then the optional file, then `MAZEGEN__*` environment variables.
    /// The file is always read as TOML, whatever its extension.
    pub fn load_layered(path: Option<&Path>) -> Result<Self, MazegenError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(true),
            );
        }
        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        log::debug!(
            "Loaded configuration ({} section, {} section)",
            EvolutionConfig::section_name(),
            MazeConfig::section_name()
        );
        Ok(Self { config })
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MazegenError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MazegenError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| MazegenError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MazegenError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| MazegenError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| MazegenError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Apply `f` to a copy and keep it only if it still validates
    pub fn update<F>(&mut self, f: F) -> Result<(), MazegenError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
