//! Unit tests for buffer descriptors

use crate::device::{BufferAccess, BufferDesc, BufferUsage};

#[test]
fn test_buffer_desc_new_is_static() {
    let desc = BufferDesc::new(256, BufferUsage::Vertex);
    assert_eq!(desc.size, 256);
    assert_eq!(desc.usage, BufferUsage::Vertex);
    assert_eq!(desc.access, BufferAccess::Static);
}

#[test]
fn test_buffer_usage_equality() {
    assert_eq!(BufferUsage::Index, BufferUsage::Index);
    assert_ne!(BufferUsage::Vertex, BufferUsage::Index);
}

#[test]
fn test_buffer_desc_access_override() {
    let desc = BufferDesc {
        access: BufferAccess::Stream,
        ..BufferDesc::new(64, BufferUsage::Uniform)
    };
    assert_eq!(desc.access, BufferAccess::Stream);
}
