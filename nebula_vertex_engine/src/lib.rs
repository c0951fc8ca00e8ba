/*!
# Nebula Vertex Engine

Core traits and types for the Nebula vertex layout engine.

This crate turns declarative, named vertex attribute lists into byte-level
binding plans - per-slot locations, component counts, offsets, strides and
step divisors - and defines the platform-agnostic device traits those plans
are applied through. Backend implementations (e.g. the headless device)
provide concrete types that implement these traits.

## Architecture

- **VertexLayoutPlan**: pure, single-shot layout computation
- **GraphicsDevice**: factory trait for creating GPU resources
- **Buffer / Shader / Pipeline**: resource traits with RAII lifetimes
- **CommandList**: binding and draw recording trait

Every shader resource doubles as an `AttributeResolver`: the planner borrows
it to resolve attribute names to binding slots, and never owns the program.
*/

// Internal modules
mod error;
pub mod log;
pub mod vertex;
pub mod pipeline;
pub mod device;
pub mod shapes;

// Main nebula namespace module
pub mod nebula {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Log, Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Vertex sub-module: formats, attributes and layout planning
    pub mod vertex {
        pub use crate::vertex::*;
    }

    // Pipeline sub-module: fixed-function state
    pub mod pipeline {
        pub use crate::pipeline::*;
    }

    // Device sub-module: device and resource traits
    pub mod device {
        pub use crate::device::*;
    }

    // Shape sub-module: canned geometry
    pub mod shapes {
        pub use crate::shapes::*;
    }
}

// Re-export math library at crate root
pub use glam;
