/// Pipeline - headless implementation of the Pipeline trait

use std::sync::Arc;

use nebula_vertex_engine::nebula::device::{Pipeline, Shader};
use nebula_vertex_engine::nebula::pipeline::PipelineState;
use nebula_vertex_engine::nebula::vertex::VertexLayoutPlan;

/// Headless pipeline
///
/// Owns its shader reference and computed layout plan for its whole
/// lifetime; the plan is never recomputed.
pub struct HeadlessPipeline {
    label: String,
    shader: Arc<dyn Shader>,
    plan: VertexLayoutPlan,
    state: PipelineState,
}

impl HeadlessPipeline {
    pub(crate) fn new(
        label: String,
        shader: Arc<dyn Shader>,
        plan: VertexLayoutPlan,
        state: PipelineState,
    ) -> Self {
        Self {
            label,
            shader,
            plan,
            state,
        }
    }

    /// Shader program the pipeline draws with
    pub fn shader(&self) -> &Arc<dyn Shader> {
        &self.shader
    }
}

impl Pipeline for HeadlessPipeline {
    fn label(&self) -> &str {
        &self.label
    }

    fn layout(&self) -> &VertexLayoutPlan {
        &self.plan
    }

    fn state(&self) -> &PipelineState {
        &self.state
    }
}
