/// Pipeline trait and pipeline descriptor

use std::sync::Arc;

use crate::device::Shader;
use crate::pipeline::PipelineState;
use crate::vertex::{BufferLayout, VertexAttribute, VertexLayoutPlan};

/// Descriptor for creating a graphics pipeline
///
/// Attribute declaration order matters: it is packing order for every buffer
/// whose stride is auto-computed. When no buffer layouts are given, a single
/// implicit buffer with auto stride and per-vertex stepping is assumed.
#[derive(Clone)]
pub struct PipelineDesc {
    /// Debug label
    pub label: String,
    /// Shader program the pipeline draws with; the pipeline takes sole
    /// ownership of this reference for its lifetime
    pub shader: Arc<dyn Shader>,
    /// Vertex attributes to bind, in declaration order
    pub attributes: Vec<VertexAttribute>,
    /// Layout policy per source buffer, indexed by buffer index
    pub buffer_layouts: Vec<BufferLayout>,
    /// Fixed-function state
    pub state: PipelineState,
}

impl PipelineDesc {
    /// Pipeline over a single implicit buffer with default state
    pub fn new(
        label: impl Into<String>,
        shader: Arc<dyn Shader>,
        attributes: Vec<VertexAttribute>,
    ) -> Self {
        Self {
            label: label.into(),
            shader,
            attributes,
            buffer_layouts: vec![BufferLayout::default()],
            state: PipelineState::default(),
        }
    }

    /// Replace the buffer layout policies
    pub fn with_buffer_layouts(mut self, buffer_layouts: Vec<BufferLayout>) -> Self {
        self.buffer_layouts = buffer_layouts;
        self
    }

    /// Replace the fixed-function state
    pub fn with_state(mut self, state: PipelineState) -> Self {
        self.state = state;
        self
    }
}

/// Pipeline resource trait
///
/// Implemented by backend-specific pipeline types. A pipeline owns its
/// native objects (vertex array, program reference) exclusively and releases
/// them together when dropped. Its vertex layout is computed once at
/// construction and never recomputed.
pub trait Pipeline: Send + Sync {
    /// Debug label the pipeline was created with
    fn label(&self) -> &str;

    /// The computed vertex layout plan
    fn layout(&self) -> &VertexLayoutPlan;

    /// Fixed-function state the pipeline was created with
    fn state(&self) -> &PipelineState;
}
