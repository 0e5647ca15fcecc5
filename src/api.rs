//! JS-facing handle. The page constructs one `LightsOut` per session,
//! forwards clicks and reset requests, and re-renders from `state()`.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::config::BoardConfig;
use crate::game::Game;

#[wasm_bindgen]
pub struct LightsOut {
    game: Game<StdRng>,
}

#[wasm_bindgen]
impl LightsOut {
    /// `config` may be `undefined`, `null` or a partial
    /// `{ rows, cols, chance_light_starts_on }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<LightsOut, JsError> {
        Self::with_seed(config, clock_seed())
    }

    /// Same as the constructor but with a fixed seed, for replayable boards.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(config: JsValue, seed: u64) -> Result<LightsOut, JsError> {
        let config = parse_config(config)?;
        let game = Game::new(config, StdRng::seed_from_u64(seed))?;
        Ok(LightsOut { game })
    }

    /// Returns `false` when the click was ignored because the game is won.
    #[wasm_bindgen(js_name = onCellActivated)]
    pub fn on_cell_activated(&mut self, row: i32, col: i32) -> bool {
        self.game.on_cell_activated(row as isize, col as isize)
    }

    /// Click forwarded by rendered cell key (`"y-x"`). Malformed keys are
    /// ignored.
    #[wasm_bindgen(js_name = onCellKeyActivated)]
    pub fn on_cell_key_activated(&mut self, key: &str) -> bool {
        self.game.on_cell_key_activated(key)
    }

    #[wasm_bindgen(js_name = onResetRequested)]
    pub fn on_reset_requested(&mut self) {
        self.game.on_reset_requested();
    }

    /// `{ rows, cols, cells: boolean[][], status: "InProgress" | "Won" }`
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.view())?)
    }

    #[wasm_bindgen(js_name = isWon)]
    pub fn is_won(&self) -> bool {
        self.game.status().is_won()
    }

    /// The board in `O`/`.` text form.
    #[wasm_bindgen(js_name = toText)]
    pub fn to_text(&self) -> String {
        self.game.board().to_string()
    }
}

fn parse_config(value: JsValue) -> Result<BoardConfig, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(BoardConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
