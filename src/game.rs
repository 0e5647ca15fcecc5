use rand::Rng;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::types::{GameStatus, GameView, Position};

/// Creates a freshly seeded board. May already be all-off.
pub fn initialize(config: &BoardConfig, rng: &mut impl Rng) -> Result<Board, ConfigError> {
    Board::random(config, rng).inspect_err(|err| log::warn!("rejected board config: {err}"))
}

/// Discards the previous board and seeds a new one with the same rule.
pub fn reset(config: &BoardConfig, rng: &mut impl Rng) -> Result<Board, ConfigError> {
    initialize(config, rng)
}

/// `Won` iff no cell is lit.
pub fn compute_status(board: &Board) -> GameStatus {
    if board.all_off() {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    }
}

/// Flips `(row, col)` and its in-bounds neighbours, then rescans for a win.
///
/// A `Won` status makes this a no-op that hands back copies of its inputs.
pub fn toggle_around(
    board: &Board,
    status: GameStatus,
    row: isize,
    col: isize,
) -> (Board, GameStatus) {
    if status.is_won() {
        return (board.clone(), status);
    }
    let next = board.toggled_around(row, col);
    let next_status = compute_status(&next);
    (next, next_status)
}

/// Owns one game session: its fixed config, the current board, the cached
/// status and the random source used for seeding.
#[derive(Debug)]
pub struct Game<R: Rng> {
    config: BoardConfig,
    board: Board,
    status: GameStatus,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: BoardConfig, mut rng: R) -> Result<Self, ConfigError> {
        let board = initialize(&config, &mut rng)?;
        let status = compute_status(&board);
        log::debug!(
            "new {}x{} game, {} lit, status {:?}",
            config.rows,
            config.cols,
            board.lit_count(),
            status
        );
        Ok(Self {
            config,
            board,
            status,
            rng,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Handles a click on `(row, col)`. Returns `false` when ignored because
    /// the game is already won.
    pub fn on_cell_activated(&mut self, row: isize, col: isize) -> bool {
        if self.status.is_won() {
            log::debug!("ignoring toggle at ({row}, {col}): game already won");
            return false;
        }

        let (board, status) = toggle_around(&self.board, self.status, row, col);
        self.board = board;
        self.status = status;

        log::debug!("toggled ({row}, {col}), {} lit", self.board.lit_count());
        if self.status.is_won() {
            log::info!("board cleared");
        }
        true
    }

    /// Handles a click on the cell identified by a `"y-x"` key. Malformed
    /// keys are ignored and return `false`.
    pub fn on_cell_key_activated(&mut self, key: &str) -> bool {
        match Position::parse_key(key) {
            Some(pos) => match (isize::try_from(pos.row), isize::try_from(pos.col)) {
                (Ok(row), Ok(col)) => self.on_cell_activated(row, col),
                _ => false,
            },
            None => {
                log::debug!("ignoring malformed cell key {key:?}");
                false
            }
        }
    }

    /// Starts over with a new board from the same config. Always honoured.
    pub fn on_reset_requested(&mut self) {
        // The config was validated in `new` and cannot change since.
        self.board = Board::seeded(&self.config, &mut self.rng);
        self.status = compute_status(&self.board);
        log::debug!(
            "reset, {} lit, status {:?}",
            self.board.lit_count(),
            self.status
        );
    }

    pub fn view(&self) -> GameView {
        GameView {
            rows: self.board.rows(),
            cols: self.board.cols(),
            cells: self.board.rows_vec(),
            status: self.status,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        self.status = compute_status(&board);
        self.board = board;
    }
}
