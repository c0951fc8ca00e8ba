//! Unit tests for vertex attribute declarations and buffer layout policies

use crate::vertex::{BufferLayout, VertexAttribute, VertexFormat, VertexStep};

#[test]
fn test_attribute_defaults_to_buffer_zero() {
    let attribute = VertexAttribute::new("a_position", VertexFormat::Float3);
    assert_eq!(attribute.name, "a_position");
    assert_eq!(attribute.format, VertexFormat::Float3);
    assert_eq!(attribute.buffer_index, 0);
}

#[test]
fn test_attribute_with_explicit_buffer() {
    let attribute = VertexAttribute::with_buffer("i_model", VertexFormat::Mat4, 1);
    assert_eq!(attribute.buffer_index, 1);
}

#[test]
fn test_buffer_layout_default() {
    let layout = BufferLayout::default();
    assert_eq!(layout.stride, None);
    assert_eq!(layout.step, VertexStep::PerVertex);
    assert_eq!(layout.step_rate, 1);
}

#[test]
fn test_buffer_layout_with_stride() {
    let layout = BufferLayout::with_stride(48);
    assert_eq!(layout.stride, Some(48));
    assert_eq!(layout.step, VertexStep::PerVertex);
}

#[test]
fn test_per_vertex_divisor_is_zero() {
    // The step rate is ignored while the buffer steps per vertex
    let layout = BufferLayout {
        stride: None,
        step: VertexStep::PerVertex,
        step_rate: 5,
    };
    assert_eq!(layout.divisor(), 0);
}

#[test]
fn test_per_instance_divisor_is_step_rate() {
    assert_eq!(BufferLayout::per_instance(1).divisor(), 1);
    assert_eq!(BufferLayout::per_instance(3).divisor(), 3);
}
