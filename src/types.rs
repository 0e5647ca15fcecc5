use serde::Serialize;

/// Whether the board still has lit cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    InProgress,
    Won,
}

impl GameStatus {
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}

/// A board coordinate, zero-based from the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell key in `"y-x"` form, as used for rendered cell ids.
    pub fn key(&self) -> String {
        format!("{}-{}", self.row, self.col)
    }

    /// Parses a `"y-x"` cell key. Returns `None` for anything else.
    pub fn parse_key(key: &str) -> Option<Self> {
        let (row, col) = key.split_once('-')?;
        Some(Self {
            row: row.trim().parse().ok()?,
            col: col.trim().parse().ok()?,
        })
    }
}

/// Snapshot handed to the presentation layer on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub rows: usize,
    pub cols: usize,
    /// Contract: `cells.len() == rows` and every row has `cols` entries.
    pub cells: Vec<Vec<bool>>,
    pub status: GameStatus,
}
