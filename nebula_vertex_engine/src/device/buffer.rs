/// Buffer trait and buffer descriptor

use crate::error::Result;

/// Buffer usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Vertex buffer
    Vertex,
    /// Index buffer
    Index,
    /// Uniform/constant buffer
    Uniform,
    /// Storage buffer
    Storage,
}

/// Expected update frequency of a buffer's contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferAccess {
    /// Written once, drawn many times
    Static,
    /// Rewritten occasionally
    Dynamic,
    /// Rewritten every frame
    Stream,
}

/// Descriptor for creating a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferDesc {
    /// Size in bytes
    pub size: u64,
    /// Buffer usage
    pub usage: BufferUsage,
    /// Update frequency hint
    pub access: BufferAccess,
}

impl BufferDesc {
    /// Static buffer of the given size and usage
    pub fn new(size: u64, usage: BufferUsage) -> Self {
        Self {
            size,
            usage,
            access: BufferAccess::Static,
        }
    }
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types. The buffer is destroyed
/// when dropped.
pub trait Buffer: Send + Sync {
    /// Update buffer data
    ///
    /// # Arguments
    ///
    /// * `offset` - Offset into the buffer in bytes
    /// * `data` - Data to write
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` if the write would run past the end of the
    /// buffer.
    fn update(&self, offset: u64, data: &[u8]) -> Result<()>;

    /// Size in bytes
    fn size(&self) -> u64;

    /// Usage the buffer was created with
    fn usage(&self) -> BufferUsage;
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
