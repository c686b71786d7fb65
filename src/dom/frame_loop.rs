// Cancellable requestAnimationFrame loop. The callback reschedules itself
// every frame until the handle is stopped or dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    // Kept alive for as long as a scheduled frame may still fire.
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start<F>(mut frame: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let raf_id = Rc::new(Cell::new(None));
        let tick = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));

        let raf_id2 = raf_id.clone();
        let tick2 = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if raf_id2.get().is_none() {
                // Stopped between scheduling and firing.
                return;
            }
            frame();
            let next = tick2
                .borrow()
                .as_ref()
                .and_then(|cb| request_frame(cb).ok());
            raf_id2.set(next);
        }) as Box<dyn FnMut()>));

        let first = {
            let borrowed = tick.borrow();
            request_frame(borrowed.as_ref().expect("just set"))?
        };
        raf_id.set(Some(first));

        Ok(Self {
            raf_id,
            _tick: tick,
        })
    }

    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    super::window()?.request_animation_frame(cb.as_ref().unchecked_ref())
}
