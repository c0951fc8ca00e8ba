/// Fixed-function pipeline state descriptors
///
/// The full state block a pipeline carries besides its vertex layout:
/// rasterization, depth/stencil and blend state, applied by the backend when
/// the pipeline is bound.

use bitflags::bitflags;

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Triangle list
    TriangleList,
    /// Line list
    LineList,
    /// Point list
    PointList,
}

/// Index buffer element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    /// 16-bit indices (max 65535 vertices)
    U16,
    /// 32-bit indices (max ~4 billion vertices)
    U32,
}

impl IndexType {
    /// Size in bytes of one index element
    pub fn size_bytes(&self) -> u32 {
        match self {
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    /// No culling
    None,
    /// Cull front faces
    Front,
    /// Cull back faces
    Back,
}

/// Front face winding order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontFace {
    /// Counter-clockwise vertices define front face
    CounterClockwise,
    /// Clockwise vertices define front face
    Clockwise,
}

/// Comparison operator for depth and stencil tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Never pass
    Never,
    /// Pass if value < reference
    Less,
    /// Pass if value == reference
    Equal,
    /// Pass if value <= reference
    LessOrEqual,
    /// Pass if value > reference
    Greater,
    /// Pass if value != reference
    NotEqual,
    /// Pass if value >= reference
    GreaterOrEqual,
    /// Always pass
    Always,
}

/// Blend factor for color blending equations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
}

/// Blend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendOp {
    /// result = src * srcFactor + dst * dstFactor
    Add,
    /// result = src * srcFactor - dst * dstFactor
    Subtract,
    /// result = dst * dstFactor - src * srcFactor
    ReverseSubtract,
}

/// One blend equation: operation plus source/destination factors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendState {
    /// Blend operation
    pub op: BlendOp,
    /// Source factor
    pub src_factor: BlendFactor,
    /// Destination factor
    pub dst_factor: BlendFactor,
}

/// Stencil operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StencilOp {
    /// Keep current value
    Keep,
    /// Set to zero
    Zero,
    /// Replace with reference value
    Replace,
    /// Increment and clamp to max
    IncrementAndClamp,
    /// Decrement and clamp to zero
    DecrementAndClamp,
    /// Bitwise invert
    Invert,
    /// Increment and wrap around
    IncrementAndWrap,
    /// Decrement and wrap around
    DecrementAndWrap,
}

/// Stencil operation state (per-face)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StencilFaceState {
    /// Action on stencil test fail
    pub fail_op: StencilOp,
    /// Action on stencil pass + depth fail
    pub depth_fail_op: StencilOp,
    /// Action on stencil pass + depth pass
    pub pass_op: StencilOp,
    /// Comparison operator
    pub compare_op: CompareOp,
    /// Reference value for compare/replace
    pub reference: i32,
    /// Bits of stencil buffer read for compare
    pub compare_mask: u32,
    /// Bits of stencil buffer written
    pub write_mask: u32,
}

impl Default for StencilFaceState {
    fn default() -> Self {
        Self {
            fail_op: StencilOp::Keep,
            depth_fail_op: StencilOp::Keep,
            pass_op: StencilOp::Keep,
            compare_op: CompareOp::Always,
            reference: 0,
            compare_mask: 0xFF,
            write_mask: 0xFF,
        }
    }
}

/// Stencil testing state for both faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StencilState {
    /// Stencil operations for front faces
    pub front: StencilFaceState,
    /// Stencil operations for back faces
    pub back: StencilFaceState,
}

bitflags! {
    /// Color channel write mask
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ColorWriteMask: u8 {
        /// Red channel
        const R = 1 << 0;
        /// Green channel
        const G = 1 << 1;
        /// Blue channel
        const B = 1 << 2;
        /// Alpha channel
        const A = 1 << 3;
    }
}

impl Default for ColorWriteMask {
    fn default() -> Self {
        Self::all()
    }
}

/// Complete fixed-function state of a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineState {
    /// Face culling mode
    pub cull_mode: CullMode,
    /// Front face winding order
    pub front_face: FrontFace,
    /// Depth comparison operator, applied when depth writes are enabled
    pub depth_compare: CompareOp,
    /// Enable depth testing and writes
    pub depth_write: bool,
    /// Color blend equation (None = blending disabled)
    pub color_blend: Option<BlendState>,
    /// Separate alpha blend equation (None = reuse the color equation)
    pub alpha_blend: Option<BlendState>,
    /// Stencil testing state (None = stencil test disabled)
    pub stencil: Option<StencilState>,
    /// Color channel write mask
    pub color_write_mask: ColorWriteMask,
    /// Primitive topology
    pub topology: PrimitiveTopology,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            cull_mode: CullMode::None,
            front_face: FrontFace::CounterClockwise,
            depth_compare: CompareOp::Always,
            depth_write: false,
            color_blend: None,
            alpha_blend: None,
            stencil: None,
            color_write_mask: ColorWriteMask::all(),
            topology: PrimitiveTopology::TriangleList,
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
