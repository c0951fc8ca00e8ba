//! Canned geometry for tests and demos.
//!
//! All shapes are unit-sized and centered at the origin, with texture
//! coordinates covering [0, 1].

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::vertex::{VertexAttribute, VertexFormat};

/// One vertex of a canned shape
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    /// Object-space position
    pub position: Vec3,
    /// Texture coordinate
    pub texture_coordinate: Vec2,
}

impl ShapeVertex {
    /// Size in bytes of one vertex record
    pub const SIZE_BYTES: u32 = std::mem::size_of::<ShapeVertex>() as u32;

    /// Attribute declarations matching this vertex's memory layout
    ///
    /// Names follow the convention of the bundled shaders: `a_position`,
    /// `a_texture_coordinate`.
    pub fn attributes() -> Vec<VertexAttribute> {
        vec![
            VertexAttribute::new("a_position", VertexFormat::Float3),
            VertexAttribute::new("a_texture_coordinate", VertexFormat::Float2),
        ]
    }
}

/// Vertex and index data for one shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBindings {
    /// Vertices, tightly packed
    pub vertices: Vec<ShapeVertex>,
    /// Triangle list indices
    pub indices: Vec<u32>,
}

impl ShapeBindings {
    /// Vertex data as bytes, ready for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes, ready for buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// A unit triangle
pub fn triangle() -> ShapeBindings {
    ShapeBindings {
        vertices: vec![
            ShapeVertex {
                position: Vec3::new(-0.5, -0.5, 0.0),
                texture_coordinate: Vec2::new(0.0, 0.0),
            },
            ShapeVertex {
                position: Vec3::new(0.5, -0.5, 0.0),
                texture_coordinate: Vec2::new(1.0, 0.0),
            },
            ShapeVertex {
                position: Vec3::new(0.0, 0.5, 0.0),
                texture_coordinate: Vec2::new(0.5, 1.0),
            },
        ],
        indices: vec![0, 1, 2],
    }
}

/// A unit quad
pub fn quad() -> ShapeBindings {
    ShapeBindings {
        vertices: vec![
            ShapeVertex {
                position: Vec3::new(-0.5, -0.5, 0.0),
                texture_coordinate: Vec2::new(0.0, 0.0),
            },
            ShapeVertex {
                position: Vec3::new(0.5, -0.5, 0.0),
                texture_coordinate: Vec2::new(1.0, 0.0),
            },
            ShapeVertex {
                position: Vec3::new(0.5, 0.5, 0.0),
                texture_coordinate: Vec2::new(1.0, 1.0),
            },
            ShapeVertex {
                position: Vec3::new(-0.5, 0.5, 0.0),
                texture_coordinate: Vec2::new(0.0, 1.0),
            },
        ],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

/// A unit grid of `rows` x `columns` cells, from -0.5 to 0.5
pub fn grid(rows: u32, columns: u32) -> ShapeBindings {
    // Add 1 since we calculate as if each line is a row or column
    let rows = rows + 1;
    let columns = columns + 1;

    let mut vertices = Vec::with_capacity((rows * columns) as usize);

    // Create vertices
    for i in 0..rows {
        for j in 0..columns {
            let x = (j as f32 / (columns as f32 - 1.0)) - 0.5;
            let y = (i as f32 / (rows as f32 - 1.0)) - 0.5;
            vertices.push(ShapeVertex {
                position: Vec3::new(x, y, 0.0),
                texture_coordinate: Vec2::new(x + 0.5, y + 0.5),
            });
        }
    }

    let mut indices = Vec::with_capacity(((rows - 1) * (columns - 1) * 6) as usize);

    // Create indices
    for i in 0..rows - 1 {
        for j in 0..columns - 1 {
            let a = (i * columns) + j;
            let b = a + 1;
            let c = a + columns;
            let d = c + 1;

            indices.push(a);
            indices.push(b);
            indices.push(c);
            indices.push(c);
            indices.push(b);
            indices.push(d);
        }
    }

    ShapeBindings { vertices, indices }
}

#[cfg(test)]
#[path = "shapes_tests.rs"]
mod tests;
