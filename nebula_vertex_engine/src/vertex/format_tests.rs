//! Unit tests for vertex formats
//!
//! Tests the derivable facts of every format: byte size, per-slot component
//! count, scalar type and slot count.

use crate::vertex::{ScalarType, VertexFormat};

// ============================================================================
// BYTE SIZES
// ============================================================================

#[test]
fn test_format_size_bytes_float_formats() {
    assert_eq!(VertexFormat::Float1.size_bytes(), 4);
    assert_eq!(VertexFormat::Float2.size_bytes(), 8);
    assert_eq!(VertexFormat::Float3.size_bytes(), 12);
    assert_eq!(VertexFormat::Float4.size_bytes(), 16);
}

#[test]
fn test_format_size_bytes_byte_formats() {
    assert_eq!(VertexFormat::Byte1.size_bytes(), 1);
    assert_eq!(VertexFormat::Byte2.size_bytes(), 2);
    assert_eq!(VertexFormat::Byte3.size_bytes(), 3);
    assert_eq!(VertexFormat::Byte4.size_bytes(), 4);
}

#[test]
fn test_format_size_bytes_short_formats() {
    assert_eq!(VertexFormat::Short1.size_bytes(), 2);
    assert_eq!(VertexFormat::Short2.size_bytes(), 4);
    assert_eq!(VertexFormat::Short3.size_bytes(), 6);
    assert_eq!(VertexFormat::Short4.size_bytes(), 8);
}

#[test]
fn test_format_size_bytes_int_formats() {
    assert_eq!(VertexFormat::Int1.size_bytes(), 4);
    assert_eq!(VertexFormat::Int2.size_bytes(), 8);
    assert_eq!(VertexFormat::Int3.size_bytes(), 12);
    assert_eq!(VertexFormat::Int4.size_bytes(), 16);
}

#[test]
fn test_format_size_bytes_mat4() {
    // 16 floats
    assert_eq!(VertexFormat::Mat4.size_bytes(), 64);
}

// ============================================================================
// COMPONENT COUNTS
// ============================================================================

#[test]
fn test_format_components_follow_width() {
    let expected = [
        (VertexFormat::Float1, 1),
        (VertexFormat::Float2, 2),
        (VertexFormat::Float3, 3),
        (VertexFormat::Float4, 4),
        (VertexFormat::Byte1, 1),
        (VertexFormat::Byte2, 2),
        (VertexFormat::Byte3, 3),
        (VertexFormat::Byte4, 4),
        (VertexFormat::Short1, 1),
        (VertexFormat::Short2, 2),
        (VertexFormat::Short3, 3),
        (VertexFormat::Short4, 4),
        (VertexFormat::Int1, 1),
        (VertexFormat::Int2, 2),
        (VertexFormat::Int3, 3),
        (VertexFormat::Int4, 4),
    ];
    for (format, components) in expected {
        assert_eq!(format.components(), components, "component mismatch for {:?}", format);
    }
}

#[test]
fn test_mat4_slots_are_vec4_columns() {
    // Each of the 4 slots carries one 4-float column, not the whole matrix
    assert_eq!(VertexFormat::Mat4.components(), 4);
    assert_eq!(VertexFormat::Mat4.slot_count(), 4);
    assert_eq!(VertexFormat::Mat4.slot_size_bytes(), 16);
}

// ============================================================================
// SCALAR TYPES
// ============================================================================

#[test]
fn test_format_scalar_families() {
    assert_eq!(VertexFormat::Float3.scalar(), ScalarType::Float);
    assert_eq!(VertexFormat::Mat4.scalar(), ScalarType::Float);
    assert_eq!(VertexFormat::Byte2.scalar(), ScalarType::UnsignedByte);
    assert_eq!(VertexFormat::Short4.scalar(), ScalarType::UnsignedShort);
    assert_eq!(VertexFormat::Int1.scalar(), ScalarType::UnsignedInt);
}

#[test]
fn test_scalar_integer_classification() {
    assert!(!ScalarType::Float.is_integer());
    assert!(ScalarType::UnsignedByte.is_integer());
    assert!(ScalarType::UnsignedShort.is_integer());
    assert!(ScalarType::UnsignedInt.is_integer());
}

// ============================================================================
// SLOT COUNTS
// ============================================================================

#[test]
fn test_single_slot_formats() {
    let single_slot = [
        VertexFormat::Float1,
        VertexFormat::Float4,
        VertexFormat::Byte3,
        VertexFormat::Short2,
        VertexFormat::Int4,
    ];
    for format in single_slot {
        assert_eq!(format.slot_count(), 1, "slot count mismatch for {:?}", format);
        assert_eq!(format.slot_size_bytes(), format.size_bytes());
    }
}
