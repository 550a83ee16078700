use super::traits::ConfigSection;
use crate::error::MazegenError;
use crate::maze::{default_layout, Maze};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub layout: Vec<String>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
        }
    }
}

impl MazeConfig {
    pub fn build(&self) -> Result<Maze, MazegenError> {
        Maze::from_rows(&self.layout)
    }
}

impl ConfigSection for MazeConfig {
    fn section_name() -> &'static str {
        "maze"
    }

    fn validate(&self) -> Result<(), MazegenError> {
        self.build().map(|_| ())
    }
}
