#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use lights_out::LightsOut;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn config(rows: u32, cols: u32, chance: f64) -> JsValue {
    let obj = Object::new();
    Reflect::set(&obj, &"rows".into(), &rows.into()).unwrap();
    Reflect::set(&obj, &"cols".into(), &cols.into()).unwrap();
    Reflect::set(&obj, &"chance_light_starts_on".into(), &chance.into()).unwrap();
    obj.into()
}

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &key.into()).unwrap()
}

#[wasm_bindgen_test]
fn undefined_config_uses_defaults() {
    let game = LightsOut::with_seed(JsValue::UNDEFINED, 1).unwrap();
    let state = game.state().unwrap();

    assert_eq!(get(&state, "rows").as_f64(), Some(5.0));
    assert_eq!(get(&state, "cols").as_f64(), Some(5.0));
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    assert!(LightsOut::with_seed(config(0, 5, 0.25), 1).is_err());
    assert!(LightsOut::with_seed(config(5, 5, 1.5), 1).is_err());
}

#[wasm_bindgen_test]
fn won_single_cell_board_ignores_toggle_until_reset() {
    let mut game = LightsOut::with_seed(config(1, 1, 0.0), 1).unwrap();
    assert!(game.is_won());
    assert!(!game.on_cell_activated(0, 0));

    game.on_reset_requested();
    assert!(game.is_won());
    assert_eq!(game.to_text(), ".");
}

#[wasm_bindgen_test]
fn cell_key_activation_toggles_and_bad_keys_are_ignored() {
    let mut game = LightsOut::with_seed(config(1, 1, 1.0), 3).unwrap();

    assert!(!game.on_cell_key_activated("zero-zero"));
    assert!(!game.is_won());

    assert!(game.on_cell_key_activated("0-0"));
    assert!(game.is_won());
}

#[wasm_bindgen_test]
fn state_exposes_cells_and_status() {
    let mut game = LightsOut::with_seed(config(3, 3, 1.0), 7).unwrap();
    assert!(game.on_cell_activated(1, 1));

    let state = game.state().unwrap();
    assert_eq!(get(&state, "status").as_string().as_deref(), Some("InProgress"));

    let cells = js_sys::Array::from(&get(&state, "cells"));
    assert_eq!(cells.length(), 3);
    let middle = js_sys::Array::from(&cells.get(1));
    assert_eq!(middle.get(1).as_bool(), Some(false));
    assert_eq!(middle.get(0).as_bool(), Some(false));
    let top = js_sys::Array::from(&cells.get(0));
    assert_eq!(top.get(0).as_bool(), Some(true));
}
