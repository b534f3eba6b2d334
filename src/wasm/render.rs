use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::config::HeroConfig;
use crate::driver::Animator;
use crate::geometry::Viewport;

pub const CANVAS_ID: &str = "hero-canvas";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Keeps the resize listener and frame loop of a running animation alive.
pub struct HeroHandle {
    window: Window,
    animator: Rc<RefCell<Animator>>,
    pending: Rc<Cell<Option<i32>>>,
    frame: FrameCallback,
    on_resize: Closure<dyn FnMut()>,
}

impl HeroHandle {
    /// Tears the animation down. Returns whether the frame loop was still
    /// running; it may already have ended if scheduling a frame failed.
    pub fn stop(self) -> bool {
        let was_running = self.animator.borrow().is_running();
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancel_animation_frame failed: {:?}", err);
            }
        }
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::warn!("could not remove resize listener: {:?}", err);
        }
        self.animator.borrow_mut().stop();
        // the frame closure holds a clone of `frame`; dropping it breaks the cycle
        self.frame.borrow_mut().take();
        was_running
    }
}

/// Start the hero animation on `canvas`.
///
/// Returns `Ok(None)` without touching the page when the browser has no 2D
/// context for the canvas.
pub fn start(
    window: Window,
    canvas: HtmlCanvasElement,
    config: HeroConfig,
    seed: u64,
) -> Result<Option<HeroHandle>, JsValue> {
    let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into()?,
        Ok(None) | Err(_) => {
            log::warn!("2D canvas context unavailable; hero animation disabled");
            return Ok(None);
        }
    };

    let mut animator = Animator::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
    animator.init(fit_canvas(&window, &canvas));
    let animator = Rc::new(RefCell::new(animator));

    // Resize canvas to fit window and rebuild the mesh; the loop keeps going
    let on_resize = {
        let window = window.clone();
        let animator = animator.clone();
        Closure::wrap(Box::new(move || {
            let viewport = fit_canvas(&window, &canvas);
            animator.borrow_mut().resize(viewport);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    // Animation loop
    // `frame` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    {
        let next = frame.clone();
        let window = window.clone();
        let animator = animator.clone();
        let pending = pending.clone();
        let mut ctx = ctx;
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
            pending.set(None);
            if !animator.borrow_mut().frame(time, &mut ctx) {
                return;
            }
            match request_frame(&window, &next) {
                Ok(id) => pending.set(Some(id)),
                Err(err) => {
                    log::error!("could not schedule next frame: {:?}", err);
                    animator.borrow_mut().stop();
                }
            }
        }) as Box<dyn FnMut(f64)>));
    }
    pending.set(Some(request_frame(&window, &frame)?));

    Ok(Some(HeroHandle {
        window,
        animator,
        pending,
        frame,
        on_resize,
    }))
}

fn request_frame(window: &Window, frame: &FrameCallback) -> Result<i32, JsValue> {
    let slot = frame.borrow();
    let callback = slot.as_ref().ok_or("frame loop already torn down")?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Size the canvas backing store to the window and report the new viewport.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Viewport {
    let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let viewport = Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()));
    canvas.set_width(viewport.width() as u32);
    canvas.set_height(viewport.height() as u32);
    viewport
}
