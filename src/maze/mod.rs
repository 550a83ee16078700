pub mod grid;
pub mod layout;

pub use grid::Maze;
pub use layout::default_layout;
