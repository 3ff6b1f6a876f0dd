use std::cell::RefCell;
use std::rc::Rc;

use fusion_core::driver::FrameScheduler;
use fusion_core::error::{FusionError, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Slot holding the JS frame callback. Emptied on teardown so the closure
/// is released once no frame can reference it.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-based scheduler.
pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Result<i32> {
        let slot = self.callback.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| FusionError::Scheduler("frame callback released".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| FusionError::Scheduler(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle, e);
        }
    }
}
