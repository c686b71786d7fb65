// DOM bindings. Everything under this module only compiles for wasm32 and is
// the sole place the crate touches web-sys; the simulation and chrome logic
// stay host-free so they test natively.

pub mod app;
pub mod canvas;
pub mod events;
pub mod frame_loop;

use wasm_bindgen::JsValue;

pub(crate) fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub(crate) fn document() -> Result<web_sys::Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}
