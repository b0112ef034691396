//! WebAssembly FFI bindings for the Crux Core
//!
//! The web shell serializes events with bincode, hands them to `process_event`,
//! executes the returned effects (`Render`, `Http`, `Deadline`) and reports
//! their outputs back through `handle_response`.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Set up logging to the browser console when the module is loaded
#[wasm_bindgen(start)]
pub fn init_wasm() {
    // fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Process a bincode-serialized Event and return bincode-serialized Effects.
///
/// The shell sends `Event::Initialize` first, carrying the page location as a
/// `PortalConfig` (see `PortalConfig::from_location`).
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        log::error!("failed to process event: {e}");
    }
    effects
}

/// Get the current bincode-serialized ViewModel
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        log::error!("failed to get view model: {e}");
    }
    view
}

/// Resolve the effect `id` with bincode-serialized output data.
///
/// Returns the bincode-serialized Effects that follow from it.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    ) {
        log::error!("failed to handle response of effect {id}: {e}");
    }
    effects
}
