//! Vertex formats and the hard-coded geometry drawn by the lessons.

use std::mem::offset_of;

use glam::{Vec2, Vec3};

use crate::abs::{Attribute, Vertex};

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct PositionVertex {
    pub position: Vec3,
}

impl Vertex for PositionVertex {
    const ATTRIBUTES: &'static [Attribute] = &[Attribute::new(0, 3, 0)];
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex for ColorVertex {
    const ATTRIBUTES: &'static [Attribute] = &[
        Attribute::new(0, 3, offset_of!(ColorVertex, position) as i32),
        Attribute::new(1, 3, offset_of!(ColorVertex, color) as i32),
    ];
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct TexturedVertex {
    pub position: Vec3,
    pub color: Vec3,
    pub uv: Vec2,
}

impl Vertex for TexturedVertex {
    const ATTRIBUTES: &'static [Attribute] = &[
        Attribute::new(0, 3, offset_of!(TexturedVertex, position) as i32),
        Attribute::new(1, 3, offset_of!(TexturedVertex, color) as i32),
        Attribute::new(2, 2, offset_of!(TexturedVertex, uv) as i32),
    ];
}

const TOP_RIGHT: Vec3 = Vec3::new(0.5, 0.5, 0.0);
const BOTTOM_RIGHT: Vec3 = Vec3::new(0.5, -0.5, 0.0);
const BOTTOM_LEFT: Vec3 = Vec3::new(-0.5, -0.5, 0.0);
const TOP_LEFT: Vec3 = Vec3::new(-0.5, 0.5, 0.0);

/// Two triangles sharing the diagonal from bottom right to top left.
pub const RECTANGLE_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

pub const RECTANGLE: [PositionVertex; 4] = [
    PositionVertex { position: TOP_RIGHT },
    PositionVertex { position: BOTTOM_RIGHT },
    PositionVertex { position: BOTTOM_LEFT },
    PositionVertex { position: TOP_LEFT },
];

pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

pub const COLORED_TRIANGLE: [ColorVertex; 3] = [
    ColorVertex {
        position: Vec3::new(0.5, -0.5, 0.0),
        color: Vec3::new(1.0, 0.0, 0.0),
    },
    ColorVertex {
        position: Vec3::new(-0.5, -0.5, 0.0),
        color: Vec3::new(0.0, 1.0, 0.0),
    },
    ColorVertex {
        position: Vec3::new(0.0, 0.5, 0.0),
        color: Vec3::new(0.0, 0.0, 1.0),
    },
];

pub const TEXTURED_RECTANGLE: [TexturedVertex; 4] = [
    TexturedVertex {
        position: TOP_RIGHT,
        color: Vec3::new(1.0, 0.0, 0.0),
        uv: Vec2::new(1.0, 1.0),
    },
    TexturedVertex {
        position: BOTTOM_RIGHT,
        color: Vec3::new(0.0, 1.0, 0.0),
        uv: Vec2::new(1.0, 0.0),
    },
    TexturedVertex {
        position: BOTTOM_LEFT,
        color: Vec3::new(0.0, 0.0, 1.0),
        uv: Vec2::new(0.0, 0.0),
    },
    TexturedVertex {
        position: TOP_LEFT,
        color: Vec3::new(1.0, 1.0, 0.0),
        uv: Vec2::new(0.0, 1.0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn check_layout<V: Vertex>(expected_stride: i32) {
        assert_eq!(V::stride(), expected_stride);
        let mut end = 0;
        for (i, attribute) in V::ATTRIBUTES.iter().enumerate() {
            assert_eq!(attribute.location, i as u32);
            assert!((1..=4).contains(&attribute.components));
            assert_eq!(attribute.offset, end, "attributes must be tightly packed");
            end = attribute.offset + attribute.components * std::mem::size_of::<f32>() as i32;
        }
        assert_eq!(end, expected_stride);
    }

    #[test]
    fn test_vertex_layouts() {
        check_layout::<PositionVertex>(12);
        check_layout::<ColorVertex>(24);
        check_layout::<TexturedVertex>(32);
    }

    fn check_indices(indices: &[u32], vertex_count: usize) {
        assert_eq!(indices.len() % 3, 0);
        assert!(indices.iter().all(|&i| (i as usize) < vertex_count));
    }

    #[test]
    fn test_indices_in_range() {
        check_indices(&RECTANGLE_INDICES, RECTANGLE.len());
        check_indices(&RECTANGLE_INDICES, TEXTURED_RECTANGLE.len());
        check_indices(&TRIANGLE_INDICES, COLORED_TRIANGLE.len());
    }

    #[test]
    fn test_rectangle_corners() {
        assert_eq!(RECTANGLE[0].position, Vec3::new(0.5, 0.5, 0.0));
        assert_eq!(RECTANGLE[2].position, Vec3::new(-0.5, -0.5, 0.0));
        for (plain, textured) in RECTANGLE.iter().zip(TEXTURED_RECTANGLE.iter()) {
            assert_eq!(plain.position, textured.position);
        }
    }

    #[test]
    fn test_uvs_follow_positions() {
        // uv = position + 0.5 on the unit rectangle
        for vertex in TEXTURED_RECTANGLE {
            assert_eq!(vertex.uv, vertex.position.truncate() + Vec2::splat(0.5));
        }
    }
}
