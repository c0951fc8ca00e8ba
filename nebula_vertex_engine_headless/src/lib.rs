/*!
# Nebula Vertex Engine - Headless Device Backend

Software implementation of the nebula_vertex_engine device traits, with no
GPU and no window.

The headless device records every native-equivalent call a real backend would
issue - per-slot attribute descriptions, binding divisors, buffer and
pipeline bindings, draws - and validates resource usage along the way. Core
integration tests and tools use it to observe exactly what a pipeline's
computed vertex layout does at the binding boundary.
*/

// Headless implementation modules
mod headless_device;
mod headless_buffer;
mod headless_shader;
mod headless_pipeline;
mod headless_command_list;

pub use headless_device::{BindingCall, HeadlessDevice};
pub use headless_buffer::HeadlessBuffer;
pub use headless_shader::HeadlessShader;
pub use headless_pipeline::HeadlessPipeline;
pub use headless_command_list::{HeadlessCommandList, RecordedCommand};
