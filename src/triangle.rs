use crate::color::Rgba;
use crate::geometry::Point;
use crate::surface::Surface;
use crate::vertex::Vertex;

/// Three corners of one half of a grid quad, stored as indices into the
/// mesh's vertex arena, plus the fill picked when the mesh was built.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    corners: [usize; 3],
    fill: Rgba,
}

impl Triangle {
    pub fn new(corners: [usize; 3], fill: Rgba) -> Self {
        Self { corners, fill }
    }

    pub fn corners(&self) -> [usize; 3] {
        self.corners
    }

    pub fn fill(&self) -> Rgba {
        self.fill
    }

    /// Current positions of the corners.
    ///
    /// Panics if `vertices` is not the arena this triangle was built against.
    pub fn points(&self, vertices: &[Vertex]) -> [Point; 3] {
        self.corners.map(|i| vertices[i].current())
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, vertices: &[Vertex], outline: &Rgba) {
        render(surface, self.points(vertices), &self.fill, outline);
    }
}

/// Fills the closed path through `points` and strokes it with `outline`.
/// Zero-area triangles go through the same calls and simply paint nothing.
pub fn render<S: Surface + ?Sized>(surface: &mut S, points: [Point; 3], fill: &Rgba, outline: &Rgba) {
    let [a, b, c] = points;
    surface.begin_path();
    surface.move_to(a.x, a.y);
    surface.line_to(b.x, b.y);
    surface.line_to(c.x, c.y);
    surface.close_path();

    surface.set_fill_color(fill);
    surface.set_global_alpha(1.0);
    surface.fill();

    surface.set_stroke_color(outline);
    surface.stroke();
    surface.set_global_alpha(1.0);
}
