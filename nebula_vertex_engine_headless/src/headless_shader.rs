/// Shader - headless implementation of the Shader trait
///
/// There is no compiler here: the headless program resolves its vertex
/// inputs by reading explicit `layout(location = N) in ...;` declarations
/// from the vertex stage source, which is how the bundled shaders declare
/// every input.

use rustc_hash::FxHashMap;

use nebula_vertex_engine::engine_bail;
use nebula_vertex_engine::nebula::device::{Shader, ShaderDesc, ShaderStage};
use nebula_vertex_engine::nebula::vertex::AttributeResolver;
use nebula_vertex_engine::nebula::{Error, Result};

/// Headless shader program
pub struct HeadlessShader {
    label: String,
    attribute_slots: FxHashMap<String, u32>,
}

impl HeadlessShader {
    pub(crate) fn new(desc: &ShaderDesc) -> Result<Self> {
        if desc.vertex_source.trim().is_empty() {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource(format!(
                    "shader '{}' has an empty {:?} stage",
                    desc.label,
                    ShaderStage::Vertex
                ))
            );
        }
        if desc.fragment_source.trim().is_empty() {
            engine_bail!(
                "nebula::headless",
                Error::InvalidResource(format!(
                    "shader '{}' has an empty {:?} stage",
                    desc.label,
                    ShaderStage::Fragment
                ))
            );
        }

        Ok(Self {
            label: desc.label.clone(),
            attribute_slots: parse_attribute_locations(&desc.vertex_source),
        })
    }

    /// Number of vertex inputs the program declares
    pub fn attribute_count(&self) -> usize {
        self.attribute_slots.len()
    }
}

impl AttributeResolver for HeadlessShader {
    fn attribute_slot(&self, name: &str) -> Option<u32> {
        self.attribute_slots.get(name).copied()
    }
}

impl Shader for HeadlessShader {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Extract `layout(location = N) in <type> <name>;` declarations
///
/// Uniform declarations and comment lines are ignored; declarations without
/// an explicit location qualifier do not resolve.
pub(crate) fn parse_attribute_locations(source: &str) -> FxHashMap<String, u32> {
    let mut slots = FxHashMap::default();

    for line in source.lines() {
        let line = line.trim();
        if line.starts_with("//") {
            continue;
        }
        let Some(rest) = line.strip_prefix("layout") else {
            continue;
        };

        let Some(open) = rest.find('(') else { continue };
        let Some(close) = rest.find(')') else { continue };
        if close < open {
            continue;
        }

        let qualifier = &rest[open + 1..close];
        let Some(eq) = qualifier.find('=') else { continue };
        if qualifier[..eq].trim() != "location" {
            continue;
        }
        let Ok(location) = qualifier[eq + 1..].trim().parse::<u32>() else {
            continue;
        };

        // Only vertex inputs; `uniform` and `out` declarations fall through
        let Some(declaration) = rest[close + 1..].trim().strip_prefix("in ") else {
            continue;
        };

        let mut tokens = declaration.split_whitespace();
        let _ty = tokens.next();
        let Some(name) = tokens.next() else { continue };
        slots.insert(name.trim_end_matches(';').to_string(), location);
    }

    slots
}

#[cfg(test)]
#[path = "headless_shader_tests.rs"]
mod tests;
