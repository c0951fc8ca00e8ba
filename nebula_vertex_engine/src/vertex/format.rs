/// Vertex format enumeration and its derivable facts

/// Scalar data type backing a vertex format
///
/// Backends pick the integer attribute description path for the unsigned
/// integer families and the float path for `Float`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// 32-bit float
    Float,
    /// 8-bit unsigned integer
    UnsignedByte,
    /// 16-bit unsigned integer
    UnsignedShort,
    /// 32-bit unsigned integer
    UnsignedInt,
}

impl ScalarType {
    /// True for the unsigned byte/short/int families
    pub fn is_integer(&self) -> bool {
        !matches!(self, ScalarType::Float)
    }
}

/// Semantic format of one vertex attribute
///
/// Each format has three derivable facts: byte size, per-slot component count
/// and underlying scalar type. `Mat4` is the one multi-slot format: it
/// occupies 4 consecutive binding slots, one `vec4` column per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFormat {
    /// 1-component 32-bit float
    Float1,
    /// 2-component 32-bit float
    Float2,
    /// 3-component 32-bit float
    Float3,
    /// 4-component 32-bit float
    Float4,
    /// 1-component unsigned byte
    Byte1,
    /// 2-component unsigned byte
    Byte2,
    /// 3-component unsigned byte
    Byte3,
    /// 4-component unsigned byte
    Byte4,
    /// 1-component unsigned short
    Short1,
    /// 2-component unsigned short
    Short2,
    /// 3-component unsigned short
    Short3,
    /// 4-component unsigned short
    Short4,
    /// 1-component unsigned int
    Int1,
    /// 2-component unsigned int
    Int2,
    /// 3-component unsigned int
    Int3,
    /// 4-component unsigned int
    Int4,
    /// 4x4 float matrix, bound as 4 consecutive `vec4` column slots
    Mat4,
}

impl VertexFormat {
    /// Total size in bytes of one attribute of this format
    pub fn size_bytes(&self) -> u32 {
        use VertexFormat::*;

        match self {
            Float1 => 4,
            Float2 => 8,
            Float3 => 12,
            Float4 => 16,
            Byte1 => 1,
            Byte2 => 2,
            Byte3 => 3,
            Byte4 => 4,
            Short1 => 2,
            Short2 => 4,
            Short3 => 6,
            Short4 => 8,
            Int1 => 4,
            Int2 => 8,
            Int3 => 12,
            Int4 => 16,
            Mat4 => 64,
        }
    }

    /// Component count of one binding slot of this format
    ///
    /// For `Mat4` this is 4: each of its 4 slots carries one 4-float column,
    /// not the whole matrix.
    pub fn components(&self) -> u32 {
        use VertexFormat::*;

        match self {
            Float1 | Byte1 | Short1 | Int1 => 1,
            Float2 | Byte2 | Short2 | Int2 => 2,
            Float3 | Byte3 | Short3 | Int3 => 3,
            Float4 | Byte4 | Short4 | Int4 | Mat4 => 4,
        }
    }

    /// Underlying scalar type
    pub fn scalar(&self) -> ScalarType {
        use VertexFormat::*;

        match self {
            Float1 | Float2 | Float3 | Float4 | Mat4 => ScalarType::Float,
            Byte1 | Byte2 | Byte3 | Byte4 => ScalarType::UnsignedByte,
            Short1 | Short2 | Short3 | Short4 => ScalarType::UnsignedShort,
            Int1 | Int2 | Int3 | Int4 => ScalarType::UnsignedInt,
        }
    }

    /// Number of consecutive binding slots this format occupies
    pub fn slot_count(&self) -> u32 {
        if *self == VertexFormat::Mat4 {
            4
        } else {
            1
        }
    }

    /// Size in bytes of one binding slot of this format
    ///
    /// Equals `size_bytes()` for single-slot formats; 16 (one `vec4` column)
    /// for `Mat4`.
    pub fn slot_size_bytes(&self) -> u32 {
        self.size_bytes() / self.slot_count()
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
