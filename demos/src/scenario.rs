//! Demo scenarios: a maze plus start and goal cells.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use ucsgrid_core::{Cell, Grid, GridError};

/// The classic demo maze: 3x3, wall in the middle.
pub const DEFAULT_MAZE: &str = "\
...
.#.
...";

/// A grid together with the endpoints to search between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

/// On-disk form: `{ "grid": [[0, 1, ...], ...], "start": [r, c], "goal": [r, c] }`.
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    grid: Vec<Vec<u8>>,
    start: (i32, i32),
    goal: (i32, i32),
}

impl Scenario {
    /// The built-in demo: [`DEFAULT_MAZE`] from the top-left to the
    /// bottom-right corner.
    pub fn builtin() -> Result<Self, ScenarioError> {
        let grid: Grid = DEFAULT_MAZE.parse().map_err(ScenarioError::Grid)?;
        let goal = Cell::new(grid.rows() - 1, grid.cols() - 1);
        Ok(Self {
            grid,
            start: Cell::ZERO,
            goal,
        })
    }

    /// Parse a scenario from its JSON form.
    pub fn from_json(s: &str) -> Result<Self, ScenarioError> {
        let file: ScenarioFile = serde_json::from_str(s).map_err(ScenarioError::Parse)?;
        let grid = Grid::from_rows(&file.grid).map_err(ScenarioError::Grid)?;
        Ok(Self {
            grid,
            start: file.start.into(),
            goal: file.goal.into(),
        })
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(ScenarioError::Io)?;
        Self::from_json(&text)
    }

    /// Draw the grid with `path` overlaid: `S` start, `G` goal, `*` path,
    /// `#` wall, `.` free.
    pub fn render(&self, path: Option<&[Cell]>) -> String {
        let on_path = |c: Cell| path.is_some_and(|p| p.contains(&c));
        let mut out = String::new();
        for row in 0..self.grid.rows() {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.grid.cols() {
                let c = Cell::new(row, col);
                let ch = if c == self.start {
                    'S'
                } else if c == self.goal {
                    'G'
                } else if on_path(c) {
                    '*'
                } else if self.grid.is_free(c) {
                    '.'
                } else {
                    '#'
                };
                out.push(ch);
            }
        }
        out
    }
}

/// Errors from loading a scenario file.
#[derive(Debug)]
pub enum ScenarioError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Grid(GridError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "scenario: {e}"),
            Self::Parse(e) => write!(f, "scenario: malformed JSON: {e}"),
            Self::Grid(e) => write!(f, "scenario: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_maze() {
        let s = Scenario::builtin().unwrap();
        assert_eq!(s.grid, Grid::from_rows(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap());
        assert_eq!(s.start, Cell::new(0, 0));
        assert_eq!(s.goal, Cell::new(2, 2));
    }

    #[test]
    fn from_json() {
        let s = Scenario::from_json(
            r#"{ "grid": [[0, 1], [0, 0]], "start": [0, 0], "goal": [1, 1] }"#,
        )
        .unwrap();
        assert_eq!(s.grid.to_string(), ".#\n..");
        assert_eq!(s.goal, Cell::new(1, 1));
    }

    #[test]
    fn from_json_rejects_bad_grid() {
        let err = Scenario::from_json(r#"{ "grid": [], "start": [0, 0], "goal": [0, 0] }"#)
            .unwrap_err();
        assert!(matches!(err, ScenarioError::Grid(GridError::Empty)));

        let err = Scenario::from_json(r#"{ "grid": [[0]] }"#).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn render_overlays_path() {
        let s = Scenario::builtin().unwrap();
        let path = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
            Cell::new(2, 2),
        ];
        assert_eq!(s.render(Some(&path[..])), "S**\n.#*\n..G");
        assert_eq!(s.render(None), "S..\n.#.\n..G");
    }
}
