/// Vertex module - vertex formats, attribute declarations and layout planning

// Module declarations
pub mod format;
pub mod attribute;
pub mod layout;

// Re-export from other modules
pub use format::*;
pub use attribute::*;
pub use layout::*;
