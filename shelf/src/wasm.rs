#![cfg(target_arch = "wasm32")]

use log::{Level, info, warn};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use stockcut::io::ext_repr::ExtInstance;
use wasm_bindgen::prelude::*;

use crate::config::ShelfConfig;
use crate::io::output::ShelfOutput;
use crate::io::store::LocalStorageStore;
use crate::run::{load_saved, run_and_save};

#[derive(Serialize)]
struct ShelfWasmResult {
    output: ShelfOutput,
    svgs: Vec<(String, String)>,
    report: Vec<String>,
    solve_time_ms: f64,
}

#[wasm_bindgen]
pub fn init_logger_wasm() {
    console_error_panic_hook::set_once();
    match console_log::init_with_level(Level::Debug) {
        Ok(()) => info!("Logger initialized for WASM"),
        Err(e) => warn!("Logger already initialized: {e}"),
    }
}

/// Places the given instance and stores it in local storage.
/// Returns the output, one SVG per sheet and the report lines.
#[wasm_bindgen]
pub fn run_shelf_wasm(instance_json: JsValue, config_json: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let ext_instance: ExtInstance = from_value(instance_json)
        .map_err(|e| JsValue::from_str(&format!("Instance decode error: {e}")))?;

    let config = config_from_js(config_json);

    let result = run_and_save(ext_instance, &config, |key| LocalStorageStore::new(key))
        .map_err(|e| JsValue::from_str(&format!("Invalid input: {e}")))?;

    let svgs = result
        .svgs()
        .iter()
        .enumerate()
        .map(|(i, svg)| (format!("sol_{}_{i}.svg", config.store_key), svg.to_string()))
        .collect();

    let wasm_result = ShelfWasmResult {
        output: result.output,
        svgs,
        report: result.report,
        solve_time_ms: result.solve_time_ms,
    };

    to_value(&wasm_result).map_err(|e| JsValue::from_str(&format!("Result encode error: {e}")))
}

/// The instance stored by the last successful run with the same config, or `null`
#[wasm_bindgen]
pub fn load_saved_wasm(config_json: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config_json);
    let stored = load_saved(&config, |key| LocalStorageStore::new(key))
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    match stored {
        Some(record) => to_value(&record).map_err(|e| JsValue::from_str(&format!("{e}"))),
        None => Ok(JsValue::NULL),
    }
}

fn config_from_js(config_json: JsValue) -> ShelfConfig {
    match config_json.is_null() || config_json.is_undefined() {
        true => ShelfConfig::default(),
        false => from_value(config_json).unwrap_or_else(|e| {
            warn!("Invalid config, using default. Reason: {e}");
            ShelfConfig::default()
        }),
    }
}
