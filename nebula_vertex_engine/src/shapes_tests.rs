//! Unit tests for the shape library

use glam::{Vec2, Vec3};

use crate::shapes::{grid, quad, triangle, ShapeVertex};
use crate::vertex::VertexFormat;

#[test]
fn test_shape_vertex_is_tightly_packed() {
    // Vec3 position + Vec2 texture coordinate, no padding
    assert_eq!(ShapeVertex::SIZE_BYTES, 20);
}

#[test]
fn test_shape_vertex_attributes_match_memory_layout() {
    let attributes = ShapeVertex::attributes();
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes[0].name, "a_position");
    assert_eq!(attributes[0].format, VertexFormat::Float3);
    assert_eq!(attributes[1].name, "a_texture_coordinate");
    assert_eq!(attributes[1].format, VertexFormat::Float2);

    let total: u32 = attributes.iter().map(|a| a.format.size_bytes()).sum();
    assert_eq!(total, ShapeVertex::SIZE_BYTES);
}

#[test]
fn test_triangle_geometry() {
    let shape = triangle();
    assert_eq!(shape.vertices.len(), 3);
    assert_eq!(shape.indices, vec![0, 1, 2]);

    assert_eq!(shape.vertices[0].position, Vec3::new(-0.5, -0.5, 0.0));
    assert_eq!(shape.vertices[2].texture_coordinate, Vec2::new(0.5, 1.0));
}

#[test]
fn test_quad_geometry() {
    let shape = quad();
    assert_eq!(shape.vertices.len(), 4);
    assert_eq!(shape.indices, vec![0, 1, 2, 2, 3, 0]);
    assert_eq!(shape.vertices[3].position, Vec3::new(-0.5, 0.5, 0.0));
}

#[test]
fn test_grid_counts() {
    // 2x2 cells: 3x3 vertices, 4 quads of 6 indices
    let shape = grid(2, 2);
    assert_eq!(shape.vertices.len(), 9);
    assert_eq!(shape.indices.len(), 24);
}

#[test]
fn test_grid_spans_unit_square() {
    let shape = grid(4, 4);
    let first = shape.vertices.first().unwrap();
    let last = shape.vertices.last().unwrap();
    assert_eq!(first.position, Vec3::new(-0.5, -0.5, 0.0));
    assert_eq!(last.position, Vec3::new(0.5, 0.5, 0.0));
    assert_eq!(first.texture_coordinate, Vec2::new(0.0, 0.0));
    assert_eq!(last.texture_coordinate, Vec2::new(1.0, 1.0));
}

#[test]
fn test_shape_byte_views() {
    let shape = triangle();
    assert_eq!(
        shape.vertex_bytes().len(),
        3 * ShapeVertex::SIZE_BYTES as usize
    );
    assert_eq!(shape.index_bytes().len(), 3 * 4);
}
