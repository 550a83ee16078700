use crate::error::{MazegenError, Result};
use crate::types::{Cell, Position};

/// Immutable rectangular maze grid
///
/// Built once from a row description (`'1'` wall, `'0'` open, `'S'` start,
/// `'E'` end). Construction guarantees equal row lengths, exactly one Start
/// cell and at least one End cell, so every later query is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
    start: Position,
    ends: Vec<Position>,
}

impl Maze {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.is_empty() {
            return Err(MazegenError::MalformedMaze("maze has no rows".to_string()));
        }

        let width = rows[0].as_ref().chars().count();
        let mut cells = Vec::with_capacity(rows.len());
        let mut starts = Vec::new();
        let mut ends = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let row_len = row.chars().count();
            if row_len != width {
                return Err(MazegenError::MalformedMaze(format!(
                    "row {} has length {}, expected {}",
                    y, row_len, width
                )));
            }

            let mut parsed = Vec::with_capacity(width);
            for (x, c) in row.chars().enumerate() {
                let cell = Cell::from_char(c).ok_or_else(|| {
                    MazegenError::MalformedMaze(format!(
                        "unknown cell character '{}' at ({}, {})",
                        c, x, y
                    ))
                })?;
                let pos = Position::new(x as isize, y as isize);
                match cell {
                    Cell::Start => starts.push(pos),
                    Cell::End => ends.push(pos),
                    _ => {}
                }
                parsed.push(cell);
            }
            cells.push(parsed);
        }

        let start = match starts.as_slice() {
            [single] => *single,
            [] => {
                return Err(MazegenError::MalformedMaze(
                    "maze has no Start cell".to_string(),
                ))
            }
            many => {
                return Err(MazegenError::MalformedMaze(format!(
                    "maze has {} Start cells, expected exactly one",
                    many.len()
                )))
            }
        };

        if ends.is_empty() {
            return Err(MazegenError::MalformedMaze(
                "maze has no End cell".to_string(),
            ));
        }

        log::debug!(
            "Parsed {}x{} maze, start {}, {} end cell(s)",
            width,
            rows.len(),
            start,
            ends.len()
        );

        Ok(Self {
            cells,
            width,
            height: rows.len(),
            start,
            ends,
        })
    }

    /// Cell kind at (x, y), `None` when off-grid
    pub fn cell_at(&self, x: isize, y: isize) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    pub fn is_walkable(&self, x: isize, y: isize) -> bool {
        self.cell_at(x, y).is_some_and(Cell::is_walkable)
    }

    pub fn is_walkable_at(&self, pos: Position) -> bool {
        self.is_walkable(pos.x, pos.y)
    }

    pub fn is_end(&self, pos: Position) -> bool {
        self.cell_at(pos.x, pos.y) == Some(Cell::End)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn ends(&self) -> &[Position] {
        &self.ends
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Manhattan distance from `pos` to the closest End cell
    pub fn distance_to_nearest_end(&self, pos: Position) -> usize {
        self.ends
            .iter()
            .map(|end| pos.manhattan(*end))
            .min()
            .unwrap_or(0)
    }

    /// Rows rendered back to the `1/0/S/E` character form
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect()
    }
}
