/// Vertex attribute declarations and per-buffer layout policies

use crate::vertex::VertexFormat;

/// A named vertex attribute to bind
///
/// The name is resolved against the shader program's vertex inputs at
/// pipeline construction time; the buffer index selects which source buffer
/// the attribute is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Semantic name, as declared in the vertex shader (e.g. "a_position")
    pub name: String,
    /// Data format of the attribute
    pub format: VertexFormat,
    /// Index of the source buffer the attribute is read from
    pub buffer_index: u32,
}

impl VertexAttribute {
    /// Declare an attribute read from buffer 0
    pub fn new(name: impl Into<String>, format: VertexFormat) -> Self {
        Self {
            name: name.into(),
            format,
            buffer_index: 0,
        }
    }

    /// Declare an attribute read from a specific source buffer
    pub fn with_buffer(name: impl Into<String>, format: VertexFormat, buffer_index: u32) -> Self {
        Self {
            name: name.into(),
            format,
            buffer_index,
        }
    }
}

/// Vertex step policy for one source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexStep {
    /// Data advances every vertex (divisor 0)
    PerVertex,
    /// Data advances every N instances (divisor = step rate)
    PerInstance,
}

/// Layout policy for one source buffer
///
/// When `stride` is absent, the stride is the sum of the byte sizes of all
/// attributes declared against this buffer, accumulated in declaration order
/// (tight packing, no padding). With an explicit stride, attributes must
/// still fit before the next record begins; overflow is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLayout {
    /// Explicit bytes per vertex record, or None to auto-compute
    pub stride: Option<u32>,
    /// Step policy
    pub step: VertexStep,
    /// Instance step rate, used when `step` is `PerInstance`
    pub step_rate: u32,
}

impl Default for BufferLayout {
    fn default() -> Self {
        Self {
            stride: None,
            step: VertexStep::PerVertex,
            step_rate: 1,
        }
    }
}

impl BufferLayout {
    /// Auto-strided, per-instance layout with the given step rate
    pub fn per_instance(step_rate: u32) -> Self {
        Self {
            stride: None,
            step: VertexStep::PerInstance,
            step_rate,
        }
    }

    /// Per-vertex layout with an explicit stride
    pub fn with_stride(stride: u32) -> Self {
        Self {
            stride: Some(stride),
            ..Self::default()
        }
    }

    /// Vertex-step divisor for this buffer
    ///
    /// 0 for per-vertex buffers; the step rate for per-instance buffers.
    pub fn divisor(&self) -> u32 {
        match self.step {
            VertexStep::PerVertex => 0,
            VertexStep::PerInstance => self.step_rate,
        }
    }
}

#[cfg(test)]
#[path = "attribute_tests.rs"]
mod tests;
