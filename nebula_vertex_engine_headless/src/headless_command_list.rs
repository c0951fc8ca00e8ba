/// CommandList - headless implementation of the CommandList trait

use std::sync::Arc;

use nebula_vertex_engine::engine_bail;
use nebula_vertex_engine::nebula::device::{Buffer, BufferUsage, CommandList, Pipeline};
use nebula_vertex_engine::nebula::pipeline::{IndexType, PrimitiveTopology};
use nebula_vertex_engine::nebula::{Error, Result};

/// One recorded binding or draw command
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCommand {
    Begin,
    End,
    BindPipeline {
        label: String,
    },
    /// The stride comes from the bound pipeline's layout plan
    BindVertexBuffer {
        binding: u32,
        offset: u64,
        stride: u32,
    },
    BindIndexBuffer {
        index_type: IndexType,
    },
    DrawIndexed {
        topology: PrimitiveTopology,
        index_count: u32,
        first_index: u32,
    },
}

/// Headless command list
///
/// Records commands for inspection and enforces the structural rules a real
/// backend would: recording must be open, a pipeline must be bound before
/// buffers, and draws need both a pipeline and an index buffer.
pub struct HeadlessCommandList {
    validate: bool,
    recording: bool,
    commands: Vec<RecordedCommand>,
    pipeline: Option<Arc<dyn Pipeline>>,
    index_type: Option<IndexType>,
}

impl HeadlessCommandList {
    pub(crate) fn new(validate: bool) -> Self {
        Self {
            validate,
            recording: false,
            commands: Vec::new(),
            pipeline: None,
            index_type: None,
        }
    }

    /// Commands recorded so far
    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    fn require_recording(&self) -> Result<()> {
        if !self.recording {
            return Err(Error::InvalidResource(
                "command list is not recording".to_string(),
            ));
        }
        Ok(())
    }
}

impl CommandList for HeadlessCommandList {
    fn begin(&mut self) -> Result<()> {
        if self.recording {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource("command list is already recording".to_string())
            );
        }
        self.recording = true;
        self.commands.push(RecordedCommand::Begin);
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.require_recording()?;
        self.recording = false;
        self.commands.push(RecordedCommand::End);
        Ok(())
    }

    fn bind_pipeline(&mut self, pipeline: &Arc<dyn Pipeline>) -> Result<()> {
        self.require_recording()?;
        self.commands.push(RecordedCommand::BindPipeline {
            label: pipeline.label().to_string(),
        });
        self.pipeline = Some(pipeline.clone());
        Ok(())
    }

    fn bind_vertex_buffer(
        &mut self,
        binding: u32,
        buffer: &Arc<dyn Buffer>,
        offset: u64,
    ) -> Result<()> {
        self.require_recording()?;

        let Some(pipeline) = &self.pipeline else {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource("vertex buffer bound with no pipeline".to_string())
            );
        };

        if self.validate && buffer.usage() != BufferUsage::Vertex {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource(format!(
                    "buffer bound as vertex input has usage {:?}",
                    buffer.usage()
                ))
            );
        }

        let Some(stride) = pipeline.layout().buffer_stride(binding) else {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource(format!(
                    "pipeline '{}' has no buffer binding {}",
                    pipeline.label(),
                    binding
                ))
            );
        };

        self.commands.push(RecordedCommand::BindVertexBuffer {
            binding,
            offset,
            stride,
        });
        Ok(())
    }

    fn bind_index_buffer(&mut self, buffer: &Arc<dyn Buffer>, index_type: IndexType) -> Result<()> {
        self.require_recording()?;

        if self.validate && buffer.usage() != BufferUsage::Index {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource(format!(
                    "buffer bound as index input has usage {:?}",
                    buffer.usage()
                ))
            );
        }

        self.index_type = Some(index_type);
        self.commands
            .push(RecordedCommand::BindIndexBuffer { index_type });
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: u32, first_index: u32) -> Result<()> {
        self.require_recording()?;

        let Some(pipeline) = &self.pipeline else {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource("draw with no pipeline bound".to_string())
            );
        };
        if self.index_type.is_none() {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource("draw with no index buffer bound".to_string())
            );
        }

        self.commands.push(RecordedCommand::DrawIndexed {
            topology: pipeline.state().topology,
            index_count,
            first_index,
        });
        Ok(())
    }
}
