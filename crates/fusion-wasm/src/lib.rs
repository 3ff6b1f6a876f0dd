use std::cell::RefCell;
use std::rc::Rc;

use fusion_core::driver::{AnimationDriver, FrameOutcome};
use fusion_core::render::instance::{write_instances, ParticleInstance};
use fusion_core::stats::FrameTimer;
use fusion_core::{AnswerSet, FusionConfig, FusionError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

mod canvas;
mod logger;
mod scheduler;

use canvas::CanvasSurface;
use scheduler::{FrameCallback, RafScheduler};

fn to_js(err: FusionError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// State touched by every frame callback.
struct FrameLoop {
    driver: AnimationDriver<RafScheduler>,
    surface: CanvasSurface,
    instances: Vec<ParticleInstance>,
    timer: FrameTimer,
}

impl FrameLoop {
    fn frame(&mut self) {
        let start = js_sys::Date::now();
        let outcome = self.driver.on_frame(&mut self.surface);
        if let Some(simulation) = self.driver.simulation() {
            write_instances(simulation.particles(), &mut self.instances);
        }
        self.timer.record((js_sys::Date::now() - start) as f32);

        if let FrameOutcome::Finished(stats) = outcome {
            log::debug!(
                "frame cost avg {:.2}ms over {} frames ({} particles)",
                self.timer.average_ms(),
                stats.frame,
                stats.particle_count
            );
        }
    }
}

/// The liquid-fill canvas embedded by the quiz results view.
#[wasm_bindgen]
pub struct FusionCanvas {
    frame_loop: Rc<RefCell<FrameLoop>>,
    callback: FrameCallback,
}

#[wasm_bindgen]
impl FusionCanvas {
    /// Attach to `canvas`.
    ///
    /// Throws a JS `Error` ("drawing surface unavailable: ...") when there is
    /// no window or the canvas has no 2D context. Nothing is drawn or
    /// scheduled in that case; the host catches the error and renders its
    /// view without the visualization.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<FusionCanvas, JsValue> {
        logger::init(log::LevelFilter::Info);

        let config = FusionConfig::default();
        let window = web_sys::window()
            .ok_or_else(|| to_js(FusionError::SurfaceUnavailable("no window".into())))?;
        let surface = CanvasSurface::attach(&canvas, config.width as u32, config.height as u32)
            .map_err(to_js)?;

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler::new(window, callback.clone());
        let frame_loop = Rc::new(RefCell::new(FrameLoop {
            driver: AnimationDriver::new(scheduler, config),
            surface,
            instances: Vec::new(),
            timer: FrameTimer::default(),
        }));

        let weak = Rc::downgrade(&frame_loop);
        *callback.borrow_mut() = Some(Closure::new(move || {
            if let Some(frame_loop) = weak.upgrade() {
                frame_loop.borrow_mut().frame();
            }
        }));

        log::info!("FusionCanvas attached");
        Ok(FusionCanvas {
            frame_loop,
            callback,
        })
    }

    /// Start a new pour for the given answers; `undefined` skips a
    /// dimension. Unknown names throw.
    #[wasm_bindgen]
    pub fn set_answers(
        &mut self,
        motivation: Option<String>,
        rhythm: Option<String>,
        friction: Option<String>,
    ) -> Result<(), JsValue> {
        let answers = AnswerSet::parse(
            motivation.as_deref(),
            rhythm.as_deref(),
            friction.as_deref(),
        )
        .map_err(to_js)?;
        self.frame_loop.borrow_mut().driver.restart(answers);
        Ok(())
    }

    /// Stop animating and release the frame callback. Call on unmount.
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.frame_loop.borrow_mut().driver.teardown();
        self.callback.borrow_mut().take();
    }

    #[wasm_bindgen]
    pub fn is_animating(&self) -> bool {
        self.frame_loop.borrow().driver.is_animating()
    }

    #[wasm_bindgen]
    pub fn fill_level(&self) -> f32 {
        self.frame_loop
            .borrow()
            .driver
            .simulation()
            .map_or(0.0, |s| s.fill_level())
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.frame_loop
            .borrow()
            .driver
            .simulation()
            .map_or(0, |s| s.particles().count)
    }

    #[wasm_bindgen]
    pub fn last_frame_ms(&self) -> f32 {
        self.frame_loop.borrow().timer.last_ms()
    }

    #[wasm_bindgen]
    pub fn average_frame_ms(&self) -> f32 {
        self.frame_loop.borrow().timer.average_ms()
    }

    /// Pointer to the per-particle instance buffer refreshed every frame.
    #[wasm_bindgen]
    pub fn particle_buffer_ptr(&self) -> *const f32 {
        self.frame_loop.borrow().instances.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn particle_buffer_byte_length(&self) -> usize {
        bytemuck::cast_slice::<ParticleInstance, u8>(&self.frame_loop.borrow().instances).len()
    }
}

impl Drop for FusionCanvas {
    fn drop(&mut self) {
        self.destroy();
    }
}
