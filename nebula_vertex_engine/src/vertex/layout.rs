/// Vertex layout planning
///
/// Translates a declarative list of named, buffer-indexed vertex attributes
/// into a byte-level binding plan: one stride/divisor entry per source buffer
/// and a flat table of per-slot binding descriptors, ready to hand to a
/// backend's native attribute description calls.
///
/// Planning is a pure, single-shot computation performed once per pipeline at
/// construction time. It touches no native state; a failed plan leaves
/// nothing behind.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::vertex::{BufferLayout, ScalarType, VertexAttribute};

/// Resolves attribute names to binding slots on the active shader program
///
/// This is the single query the planner needs from the shader; every
/// [`Shader`](crate::device::Shader) resource is a resolver for its own
/// vertex inputs. The planner borrows the resolver for the duration of the
/// computation only and never owns the program.
pub trait AttributeResolver {
    /// Slot index of the named vertex input, or None if the program does not
    /// declare it
    fn attribute_slot(&self, name: &str) -> Option<u32>;
}

/// One computed binding row: the plan for a single attribute slot
///
/// A multi-slot format (`Mat4`) produces 4 of these from one attribute
/// request, one per matrix column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedVertexAttribute {
    /// Binding slot index on the shader program
    pub location: u32,
    /// Component count of this slot (1..4)
    pub components: u32,
    /// Scalar type of this slot
    pub scalar: ScalarType,
    /// Byte offset of this slot's data within its buffer's vertex record
    pub offset: u32,
    /// Bytes per vertex record of the source buffer
    pub stride: u32,
    /// Index of the source buffer
    pub buffer_index: u32,
    /// Vertex-step divisor of the source buffer
    pub divisor: u32,
}

/// Resolved stride and divisor for one source buffer
///
/// Consumed at buffer-bind time: the stride passed to the native vertex
/// buffer binding call comes from here, never from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedBuffer {
    /// Bytes per vertex record (explicit, or the sum of the attribute sizes)
    pub stride: u32,
    /// Vertex-step divisor (0 = per vertex)
    pub divisor: u32,
}

/// Running stride/offset accumulator for one source buffer during planning
#[derive(Debug, Clone, Copy, Default)]
struct BufferPacking {
    stride: u32,
    offset: u32,
}

/// Immutable byte-level binding plan for one pipeline
///
/// Computed once by [`VertexLayoutPlan::compute`], then applied to native
/// per-slot binding state by the backend. The row count always equals the
/// sum of the slot counts of the requested attribute formats.
#[derive(Debug, Clone)]
pub struct VertexLayoutPlan {
    attributes: Vec<ResolvedVertexAttribute>,
    buffers: Vec<PlannedBuffer>,
    base_slots: FxHashMap<String, u32>,
}

impl VertexLayoutPlan {
    /// Compute the binding plan for an ordered attribute list
    ///
    /// Declaration order is binding order: it determines packing offsets for
    /// every buffer whose stride is auto-computed. Attributes declared
    /// against different buffers accumulate independently.
    ///
    /// # Arguments
    ///
    /// * `attributes` - Attribute requests, in declaration order
    /// * `buffer_layouts` - One layout policy per source buffer, indexed by
    ///   buffer index. Must cover the highest buffer index any attribute
    ///   references.
    /// * `resolver` - Attribute name resolver of the active shader program,
    ///   borrowed for this call only
    ///
    /// # Errors
    ///
    /// * `AttributeBufferIndexOutOfRange` - an attribute references a buffer
    ///   index with no layout policy
    /// * `AttributeNameNotFound` - the shader declares no such vertex input
    /// * `SlotIndexOutOfRange` - a resolved slot falls outside the reserved
    ///   binding table
    ///
    /// All three are fatal configuration errors; no partial plan is returned.
    pub fn compute<R>(
        attributes: &[VertexAttribute],
        buffer_layouts: &[BufferLayout],
        resolver: &R,
    ) -> Result<Self>
    where
        R: AttributeResolver + ?Sized,
    {
        // Stride pass: establish each buffer's total per-vertex stride before
        // any offset is assigned, so every row sees the final stride.
        let mut packing = vec![BufferPacking::default(); buffer_layouts.len()];

        for attribute in attributes {
            let index = attribute.buffer_index as usize;
            let Some(layout) = buffer_layouts.get(index) else {
                return Err(Error::AttributeBufferIndexOutOfRange {
                    attribute: attribute.name.clone(),
                    buffer_index: attribute.buffer_index,
                    buffer_count: buffer_layouts.len(),
                });
            };

            match layout.stride {
                // Idempotent: repeated attributes on an explicit-stride
                // buffer never change it.
                Some(stride) => packing[index].stride = stride,
                None => packing[index].stride += attribute.format.size_bytes(),
            }
        }

        // Slot-count pass: reserve the binding table at its exact final size.
        let slot_count: u32 = attributes
            .iter()
            .map(|attribute| attribute.format.slot_count())
            .sum();
        let mut table: Vec<Option<ResolvedVertexAttribute>> =
            (0..slot_count).map(|_| None).collect();

        // Binding-resolution pass.
        let mut base_slots = FxHashMap::default();

        for attribute in attributes {
            let index = attribute.buffer_index as usize;
            let layout = &buffer_layouts[index];

            let base_slot = resolver
                .attribute_slot(&attribute.name)
                .ok_or_else(|| Error::AttributeNameNotFound(attribute.name.clone()))?;
            base_slots.insert(attribute.name.clone(), base_slot);

            let divisor = layout.divisor();
            let format = attribute.format;

            for i in 0..format.slot_count() {
                let slot = base_slot + i;
                if slot as usize >= table.len() {
                    return Err(Error::SlotIndexOutOfRange {
                        attribute: attribute.name.clone(),
                        slot,
                        slot_count: table.len(),
                    });
                }

                // Rows of a multi-slot format sit one column apart within the
                // record: row i of a Mat4 starts at base offset + i * 16.
                table[slot as usize] = Some(ResolvedVertexAttribute {
                    location: slot,
                    components: format.components(),
                    scalar: format.scalar(),
                    offset: packing[index].offset + i * format.slot_size_bytes(),
                    stride: packing[index].stride,
                    buffer_index: attribute.buffer_index,
                    divisor,
                });
            }

            // The buffer's running offset advances by the full format size,
            // exactly once per attribute: the next attribute on this buffer
            // starts after the whole matrix, not after one column.
            packing[index].offset += format.size_bytes();
        }

        let buffers = buffer_layouts
            .iter()
            .zip(&packing)
            .map(|(layout, packing)| PlannedBuffer {
                stride: packing.stride,
                divisor: layout.divisor(),
            })
            .collect();

        Ok(Self {
            attributes: table.into_iter().flatten().collect(),
            buffers,
            base_slots,
        })
    }

    /// Computed binding rows, one per occupied attribute slot
    pub fn attributes(&self) -> &[ResolvedVertexAttribute] {
        &self.attributes
    }

    /// Resolved stride and divisor per source buffer, indexed by buffer index
    pub fn buffers(&self) -> &[PlannedBuffer] {
        &self.buffers
    }

    /// Number of occupied binding slots
    pub fn slot_count(&self) -> usize {
        self.attributes.len()
    }

    /// Stride of a source buffer, or None for an unknown buffer index
    pub fn buffer_stride(&self, buffer_index: u32) -> Option<u32> {
        self.buffers
            .get(buffer_index as usize)
            .map(|buffer| buffer.stride)
    }

    /// Base binding slot an attribute name resolved to
    pub fn base_slot(&self, name: &str) -> Option<u32> {
        self.base_slots.get(name).copied()
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
