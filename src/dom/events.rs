// Small helpers for wiring listeners and timers. The closures are leaked on
// purpose: every hook here lives for the lifetime of the page, same as the
// render loop.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

/// Attach a listener that receives the event object.
pub fn listen<E, F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach a listener that ignores the event object.
pub fn listen0<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::<dyn FnMut()>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// One-shot timer, `setTimeout` with a `FnOnce`.
pub fn after<F>(ms: i32, callback: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(callback);
    super::window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )?;
    closure.forget();
    Ok(())
}
