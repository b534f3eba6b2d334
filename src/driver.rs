//! Frame-by-frame driver of the hero animation.
//!
//! [`Animator`] knows nothing about how frames are scheduled: the host calls
//! [`Animator::frame`] with the timestamp of each display refresh and uses
//! the return value to decide whether to ask for another one.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::HeroConfig;
use crate::error::ConfigError;
use crate::geometry::Viewport;
use crate::mesh::{build_mesh, Mesh};
use crate::surface::Surface;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Constructed, no mesh yet
    Idle,
    /// Mesh built, frames are drawn
    Running,
    /// Stopped for good; frames and resizes are ignored
    Stopped,
}

pub struct Animator {
    config: HeroConfig,
    rng: StdRng,
    viewport: Viewport,
    mesh: Mesh,
    state: State,
    last_time: Option<f64>,
}

impl Animator {
    /// Validates `config` and seeds the mesh generator with `seed`.
    pub fn new(config: HeroConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            viewport: Viewport::default(),
            mesh: Mesh::default(),
            state: State::Idle,
            last_time: None,
        })
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Timestamp of the last frame drawn.
    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }

    /// Builds the first mesh and starts running. On a running animator this
    /// behaves like [`Animator::resize`].
    pub fn init(&mut self, viewport: Viewport) {
        if self.state == State::Stopped {
            return;
        }
        self.state = State::Running;
        self.rebuild(viewport);
        log::info!(
            "hero animation running at {}x{}",
            viewport.width(),
            viewport.height()
        );
    }

    /// Throws the mesh away and builds a new one for `viewport`. The clock
    /// and the frame loop are left alone.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.state != State::Running {
            return;
        }
        self.rebuild(viewport);
    }

    pub fn stop(&mut self) {
        if self.state != State::Stopped {
            log::info!("hero animation stopped");
        }
        self.state = State::Stopped;
    }

    /// Draws the mesh as of `time` (milliseconds from the frame clock).
    ///
    /// Returns `true` while the host should keep scheduling frames.
    pub fn frame<S: Surface + ?Sized>(&mut self, time: f64, surface: &mut S) -> bool {
        if self.state != State::Running {
            return false;
        }
        self.last_time = Some(time);
        if self.viewport.is_empty() {
            return true;
        }

        let (width, height) = (self.viewport.width(), self.viewport.height());
        surface.clear_rect(0.0, 0.0, width, height);
        surface.set_fill_color(&self.config.background);
        surface.fill_rect(0.0, 0.0, width, height);

        self.mesh.update(time, self.config.sway());
        self.mesh.render(surface, &self.config.outline);
        true
    }

    fn rebuild(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.mesh = build_mesh(viewport, &self.config, &mut self.rng);
        log::debug!(
            "mesh rebuilt for {}x{}: {} vertices, {} triangles",
            viewport.width(),
            viewport.height(),
            self.mesh.vertices().len(),
            self.mesh.triangles().len()
        );
    }
}
