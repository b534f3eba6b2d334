//! Generative low-poly background for the hero section.
//!
//! The mesh, its motion and the draw pass are plain Rust and run anywhere;
//! the browser binding (canvas, resize listener, animation-frame loop) is
//! only compiled for wasm32.

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod surface;
pub mod triangle;
pub mod vertex;

pub use color::Rgba;
pub use config::{HeroConfig, Sway};
pub use driver::{Animator, State};
pub use error::{ColorParseError, ConfigError};
pub use geometry::{Point, Viewport};
pub use mesh::{build_mesh, Mesh};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use triangle::Triangle;
pub use vertex::Vertex;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    mod canvas;
    mod options;
    mod render;

    thread_local! {
        static HERO: RefCell<Option<render::HeroHandle>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        // Pages without the hero section simply don't get the animation
        let Some(element) = document.get_element_by_id(render::CANVAS_ID) else {
            log::debug!("no #{} element on this page", render::CANVAS_ID);
            return Ok(());
        };
        let canvas = element.dyn_into::<HtmlCanvasElement>()?;

        start_hero(canvas)?;
        Ok(())
    }

    /// Starts the animation on `canvas`, replacing any running one.
    /// Returns whether the animation is now running.
    #[wasm_bindgen]
    pub fn start_hero(canvas: HtmlCanvasElement) -> Result<bool, JsValue> {
        stop_hero();
        let window = web_sys::window().ok_or("no window")?;
        let config = options::from_dataset(&canvas);
        let seed = options::seed(&config);
        let handle = render::start(window, canvas, config, seed)?;
        let running = handle.is_some();
        HERO.with(|slot| *slot.borrow_mut() = handle);
        Ok(running)
    }

    /// Cancels the pending frame and the resize listener. Returns whether an
    /// animation was still running.
    #[wasm_bindgen]
    pub fn stop_hero() -> bool {
        HERO.with(|slot| slot.borrow_mut().take())
            .map_or(false, render::HeroHandle::stop)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{main, start_hero, stop_hero};
