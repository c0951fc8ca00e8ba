/// HeadlessDevice - software implementation of the GraphicsDevice trait

use std::sync::Arc;

use nebula_vertex_engine::nebula::device::{
    AttributeBindingMode, Buffer, BufferDesc, CommandList, DeviceConfig, GraphicsDevice, Pipeline,
    PipelineDesc, Shader, ShaderDesc,
};
use nebula_vertex_engine::nebula::vertex::{ScalarType, VertexLayoutPlan};
use nebula_vertex_engine::nebula::{Error, Result};
use nebula_vertex_engine::{engine_bail, engine_debug, engine_error};

use crate::headless_buffer::HeadlessBuffer;
use crate::headless_command_list::HeadlessCommandList;
use crate::headless_pipeline::HeadlessPipeline;
use crate::headless_shader::HeadlessShader;

/// One native-equivalent call issued while configuring per-slot binding state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingCall {
    /// Describe one attribute slot
    DescribeAttribute {
        location: u32,
        components: u32,
        scalar: ScalarType,
        mode: AttributeBindingMode,
        offset: u32,
        stride: u32,
        buffer_index: u32,
    },
    /// Set the step divisor of one buffer binding
    SetBindingDivisor { buffer_index: u32, divisor: u32 },
}

/// Software graphics device
///
/// Creates host-memory resources and records the binding calls pipeline
/// construction produces, in issue order.
pub struct HeadlessDevice {
    config: DeviceConfig,
    binding_calls: Vec<BindingCall>,
}

impl HeadlessDevice {
    pub fn new(config: DeviceConfig) -> Self {
        engine_debug!(
            "nebula::headless",
            "headless device created for '{}'",
            config.app_name
        );
        Self {
            config,
            binding_calls: Vec::new(),
        }
    }

    /// Binding calls recorded by pipeline creation, in issue order
    pub fn binding_calls(&self) -> &[BindingCall] {
        &self.binding_calls
    }

    /// Forget recorded binding calls
    pub fn clear_binding_calls(&mut self) {
        self.binding_calls.clear();
    }

    /// Concrete command list, for inspecting recorded commands
    pub fn create_recording_command_list(&self) -> HeadlessCommandList {
        HeadlessCommandList::new(self.config.enable_validation)
    }
}

impl Default for HeadlessDevice {
    fn default() -> Self {
        Self::new(DeviceConfig::default())
    }
}

impl GraphicsDevice for HeadlessDevice {
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        if desc.size == 0 {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource("buffer created with zero size".to_string())
            );
        }
        Ok(Arc::new(HeadlessBuffer::new(desc)))
    }

    fn create_shader(&mut self, desc: ShaderDesc) -> Result<Arc<dyn Shader>> {
        let shader = HeadlessShader::new(&desc)?;
        engine_debug!(
            "nebula::headless",
            "shader '{}' declares {} vertex input(s)",
            desc.label,
            shader.attribute_count()
        );
        Ok(Arc::new(shader))
    }

    fn create_pipeline(&mut self, desc: PipelineDesc) -> Result<Arc<dyn Pipeline>> {
        // Planning is pure; nothing is recorded unless it succeeds.
        let plan = VertexLayoutPlan::compute(
            &desc.attributes,
            &desc.buffer_layouts,
            desc.shader.as_ref(),
        )
        .map_err(|error| {
            engine_error!(
                "nebula::headless",
                "pipeline '{}' creation failed: {}",
                desc.label,
                error
            );
            error
        })?;

        for row in plan.attributes() {
            self.binding_calls.push(BindingCall::DescribeAttribute {
                location: row.location,
                components: row.components,
                scalar: row.scalar,
                mode: AttributeBindingMode::for_scalar(row.scalar),
                offset: row.offset,
                stride: row.stride,
                buffer_index: row.buffer_index,
            });
        }

        // One divisor call per buffer at least one slot reads from
        for (index, buffer) in plan.buffers().iter().enumerate() {
            let referenced = plan
                .attributes()
                .iter()
                .any(|row| row.buffer_index == index as u32);
            if referenced {
                self.binding_calls.push(BindingCall::SetBindingDivisor {
                    buffer_index: index as u32,
                    divisor: buffer.divisor,
                });
            }
        }

        engine_debug!(
            "nebula::headless",
            "pipeline '{}' bound {} attribute slot(s)",
            desc.label,
            plan.slot_count()
        );

        Ok(Arc::new(HeadlessPipeline::new(
            desc.label,
            desc.shader,
            plan,
            desc.state,
        )))
    }

    fn create_command_list(&mut self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(HeadlessCommandList::new(
            self.config.enable_validation,
        )))
    }
}
