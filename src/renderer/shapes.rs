//! Shape generation for 2D primitives
//!
//! Everything is built in playfield pixels (top-left origin); the render
//! state maps to clip space at upload time.

use glam::Vec2;

use super::font;
use super::vertex::{Color, Vertex};
use crate::sim::Rect;

/// Generate the two triangles covering a rectangle
pub fn rect(rect: &Rect, color: Color) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Vertices queued for the current frame, in draw order
#[derive(Debug, Default)]
pub struct DrawList {
    vertices: Vec<Vertex>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn push_rect(&mut self, r: &Rect, color: Color) {
        self.vertices.extend_from_slice(&rect(r, color));
    }

    /// Queue bitmap text with its top-left corner at `pos`
    pub fn push_text(&mut self, text: &str, pos: Vec2, scale: f32, color: Color) {
        for r in font::layout(text, pos, scale) {
            self.push_rect(&r, color);
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_rect_corners() {
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), colors::PLAYER);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|x| *x == 10.0 || *x == 40.0));
        assert!(ys.iter().all(|y| *y == 20.0 || *y == 60.0));
        assert!(verts.iter().all(|v| v.color == colors::PLAYER));
    }

    #[test]
    fn test_draw_list_accumulates_and_clears() {
        let mut list = DrawList::new();
        assert!(list.vertices().is_empty());

        list.push_rect(&Rect::new(0.0, 0.0, 1.0, 1.0), colors::OBSTACLE);
        list.push_text("I", Vec2::ZERO, 1.0, colors::TEXT);
        // 'I' has one run per row
        assert_eq!(list.vertices().len(), 6 + 7 * 6);

        list.clear();
        assert!(list.vertices().is_empty());
    }
}
