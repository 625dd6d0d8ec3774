//! Vertex helpers for hosts that batch raw triangles
//!
//! `BlockField::draw` already hands out plain rectangles. These helpers
//! flatten a whole field into a colored triangle list, ready to copy
//! into a GPU vertex buffer in one upload.

use bytemuck::{Pod, Zeroable};

use crate::field::BlockField;
use crate::rect::Rect;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Two triangles covering `rect`, sharing the lb-rt diagonal.
pub fn quad(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let lt = Vertex::new(rect.left(), rect.top(), color);
    let rt = Vertex::new(rect.right(), rect.top(), color);
    let lb = Vertex::new(rect.left(), rect.bottom(), color);
    let rb = Vertex::new(rect.right(), rect.bottom(), color);
    [lt, lb, rt, rt, lb, rb]
}

/// Flatten the whole field into one triangle list, background layer first
/// so painting the list in order keeps the foreground on top.
pub fn tessellate(field: &BlockField) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(field.blocks_per_layer() * 2 * 6);
    field.draw(|rect, color| vertices.extend_from_slice(&quad(rect, color)));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;

    #[test]
    fn test_quad_covers_all_corners() {
        let color = [0.2, 0.4, 0.6, 0.8];
        let vertices = quad(Rect::new(10.0, 20.0, 30.0, 40.0), color);
        for v in &vertices {
            assert_eq!(v.color, color);
        }
        for corner in [[10.0, 20.0], [10.0, 60.0], [40.0, 20.0], [40.0, 60.0]] {
            assert!(vertices.iter().any(|v| v.position == corner));
        }
        // the shared diagonal shows up once per triangle
        let diagonal_hits = vertices
            .iter()
            .filter(|v| v.position == [10.0, 60.0] || v.position == [40.0, 20.0])
            .count();
        assert_eq!(diagonal_hits, 4);
    }

    #[test]
    fn test_tessellate_covers_both_layers() {
        let config = FieldConfig {
            blocks_per_layer: 4,
            ..FieldConfig::default()
        };
        let field = BlockField::new(config, 17).unwrap();
        let vertices = tessellate(&field);
        assert_eq!(vertices.len(), 4 * 2 * 6);
        let bg = field.config().background_color;
        let fg = field.config().foreground_color;
        assert!(vertices[..24].iter().all(|v| v.color == bg));
        assert!(vertices[24..].iter().all(|v| v.color == fg));
    }
}
