pub mod config;
pub mod engines;
pub mod error;
pub mod export;
pub mod maze;
pub mod types;

pub use error::{MazegenError, Result};
