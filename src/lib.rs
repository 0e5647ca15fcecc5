use wasm_bindgen::prelude::*;

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;

pub use api::LightsOut;
pub use board::Board;
pub use config::BoardConfig;
pub use error::ConfigError;
pub use game::{Game, compute_status, initialize, reset, toggle_around};
pub use types::{GameStatus, GameView, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
