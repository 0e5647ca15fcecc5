use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::config::BoardConfig;
use crate::error::ConfigError;

/// The target cell followed by its four orthogonal neighbours.
const FLIP_OFFSETS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

const LIT: char = 'O';
const UNLIT: char = '.';

/// Lights Out grid, stored row-major. `true` means lit.
///
/// Dimensions are fixed at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates a board with every cell unlit.
    pub fn unlit(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        BoardConfig::new(rows, cols, 0.0).validate()?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Seeds each cell independently: lit with probability
    /// `config.chance_light_starts_on`, unlit otherwise.
    pub fn random(config: &BoardConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::seeded(config, rng))
    }

    /// Caller contract: `config` has already passed `validate()`.
    pub(crate) fn seeded(config: &BoardConfig, rng: &mut impl Rng) -> Self {
        let p = config.chance_light_starts_on;
        let cells = (0..config.rows * config.cols)
            .map(|_| rng.gen_bool(p))
            .collect();
        Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        }
    }

    /// Builds a board from explicit rows. Rows must be non-empty and equally long.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ConfigError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(ConfigError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns whether the cell is lit, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// True when no cell is lit.
    pub fn all_off(&self) -> bool {
        !self.cells.iter().any(|&lit| lit)
    }

    /// Copies the grid out as a sequence of rows.
    pub fn rows_vec(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }

    /// Returns a new board with `(row, col)` and its orthogonal neighbours
    /// flipped. `self` is left untouched.
    ///
    /// Coordinates are signed so callers may pass anything the UI hands
    /// them; any flip target outside the grid is skipped, including the
    /// centre cell itself.
    pub fn toggled_around(&self, row: isize, col: isize) -> Board {
        let mut next = self.clone();
        next.flip_around(row, col);
        next
    }

    /// Flips in place and returns how many cells changed.
    fn flip_around(&mut self, row: isize, col: isize) -> usize {
        let mut flipped = 0;
        for (dr, dc) in FLIP_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) else {
                continue;
            };
            if let Some(idx) = self.index_of(r, c) {
                self.cells[idx] = !self.cells[idx];
                flipped += 1;
            }
        }
        flipped
    }

    fn index_of(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

/// One line per row; `O` is lit, `.` is unlit, cells separated by spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.cols).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, &lit) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if lit { LIT } else { UNLIT })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(y, line)| {
                line.split_whitespace()
                    .map(|token| match token {
                        "O" | "o" => Ok(true),
                        "." => Ok(false),
                        other => Err(ConfigError::Parse(format!(
                            "unexpected token {other:?} on row {y}"
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}
