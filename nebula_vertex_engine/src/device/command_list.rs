/// CommandList trait - binding and draw command recording

use std::sync::Arc;

use crate::device::{Buffer, Pipeline};
use crate::error::Result;
use crate::pipeline::IndexType;

/// Command recording interface
///
/// Records pipeline/buffer bindings and draws. The vertex buffer stride is
/// looked up from the bound pipeline's layout plan, never supplied by the
/// caller.
pub trait CommandList {
    /// Begin recording
    fn begin(&mut self) -> Result<()>;

    /// End recording
    fn end(&mut self) -> Result<()>;

    /// Bind a pipeline and apply its fixed-function state
    fn bind_pipeline(&mut self, pipeline: &Arc<dyn Pipeline>) -> Result<()>;

    /// Bind a vertex buffer to a binding slot of the bound pipeline
    ///
    /// # Arguments
    ///
    /// * `binding` - Buffer index from the pipeline's layout
    /// * `buffer` - Vertex buffer to read from
    /// * `offset` - Byte offset of the first vertex record
    fn bind_vertex_buffer(
        &mut self,
        binding: u32,
        buffer: &Arc<dyn Buffer>,
        offset: u64,
    ) -> Result<()>;

    /// Bind an index buffer
    fn bind_index_buffer(&mut self, buffer: &Arc<dyn Buffer>, index_type: IndexType) -> Result<()>;

    /// Draw indexed primitives with the bound pipeline and buffers
    ///
    /// # Arguments
    ///
    /// * `index_count` - Number of indices to draw
    /// * `first_index` - Offset into the index buffer, in elements
    fn draw_indexed(&mut self, index_count: u32, first_index: u32) -> Result<()>;
}
