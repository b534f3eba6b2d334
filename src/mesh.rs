//! Low-poly mesh construction.
//!
//! The viewport is covered by a staggered grid of jittered vertices, one cell
//! of overscan on every side, and each quad of neighbouring vertices is split
//! into two triangles along a randomly chosen diagonal. Vertices live in a
//! single arena; triangles refer to them by index, so moving a vertex moves
//! every triangle that shares it.

use std::f64::consts::TAU;

use rand::Rng;

use crate::color::Rgba;
use crate::config::{HeroConfig, Sway};
use crate::geometry::{Point, Viewport};
use crate::surface::Surface;
use crate::triangle::Triangle;
use crate::vertex::Vertex;

/// Largest vertex grid [`build_mesh`] will allocate.
pub const MAX_VERTICES: usize = 1 << 20;

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
    rows: usize,
    columns: usize,
}

impl Mesh {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Vertex rows in the grid, overscan included.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Vertex columns in the grid, overscan included.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Arena index of the vertex at `row`, `column` (0-based, overscan row/column first).
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    pub fn vertex(&self, row: usize, column: usize) -> Option<&Vertex> {
        if row < self.rows && column < self.columns {
            self.vertices.get(self.index(row, column))
        } else {
            None
        }
    }

    /// Min and max corner of the vertex origins, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = self.vertices.first()?.origin();
        Some(self.vertices.iter().map(Vertex::origin).fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }

    /// Moves every vertex to its displaced position at `time`.
    ///
    /// Each shared vertex is visited once; recomputing it per adjoining
    /// triangle would give the same result.
    pub fn update(&mut self, time: f64, sway: Sway) {
        for vertex in &mut self.vertices {
            vertex.update(time, sway);
        }
    }

    /// Draws the triangles in construction order.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, outline: &Rgba) {
        for triangle in &self.triangles {
            triangle.render(surface, &self.vertices, outline);
        }
    }
}

/// Builds a fresh mesh covering `viewport`.
///
/// All randomness (jitter, phases, diagonals, colors) is drawn from `rng`, so
/// a seeded generator always yields the same mesh. An empty viewport, a
/// config that would not pass validation, or a grid larger than
/// [`MAX_VERTICES`] yields an empty mesh.
pub fn build_mesh<R: Rng + ?Sized>(viewport: Viewport, config: &HeroConfig, rng: &mut R) -> Mesh {
    let cell = config.cell_size;
    let valid_cell = cell.is_finite() && cell >= HeroConfig::MIN_CELL_SIZE;
    if viewport.is_empty() || !valid_cell || config.palette.is_empty() {
        return Mesh::default();
    }

    // +2 overscan: one extra cell past the far edge plus room for the row
    // stagger; together with the -1 start this leaves no gaps at any edge.
    let cols = (viewport.width() / cell).ceil() + 2.0;
    let rows = (viewport.height() / cell).ceil() + 2.0;
    // sized in f64 first so absurd viewports can't overflow the integer math
    if (cols + 1.0) * (rows + 1.0) > MAX_VERTICES as f64 {
        log::warn!(
            "{}x{} viewport at cell size {} needs more than {} vertices; skipping mesh",
            viewport.width(),
            viewport.height(),
            cell,
            MAX_VERTICES
        );
        return Mesh::default();
    }
    let (cols, rows) = (cols as i64, rows as i64);
    let jitter = cell * config.jitter_fraction;

    let mut vertices = Vec::with_capacity(((rows + 1) * (cols + 1)) as usize);
    for y in -1..rows {
        for x in -1..cols {
            let mut px = x as f64 * cell + (rng.gen::<f64>() - 0.5) * jitter;
            let py = y as f64 * cell + (rng.gen::<f64>() - 0.5) * jitter;
            if y.rem_euclid(2) == 1 {
                px += cell / 2.0;
            }
            let phase = rng.gen::<f64>() * TAU;
            vertices.push(Vertex::new(Point::new(px, py), phase));
        }
    }

    let grid_rows = (rows + 1) as usize;
    let grid_columns = (cols + 1) as usize;
    let mut triangles = Vec::with_capacity(2 * (grid_rows - 1) * (grid_columns - 1));
    for row in 0..grid_rows - 1 {
        for column in 0..grid_columns - 1 {
            let v1 = row * grid_columns + column;
            let v2 = v1 + 1;
            let v3 = v1 + grid_columns;
            let v4 = v3 + 1;

            let split = if rng.gen::<f64>() > 0.5 {
                [[v1, v2, v3], [v2, v4, v3]]
            } else {
                [[v1, v2, v4], [v1, v4, v3]]
            };
            for corners in split {
                let fill = config.palette[rng.gen_range(0..config.palette.len())];
                triangles.push(Triangle::new(corners, fill));
            }
        }
    }

    Mesh {
        vertices,
        triangles,
        rows: grid_rows,
        columns: grid_columns,
    }
}
