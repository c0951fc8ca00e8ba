//! Unit tests for headless shader input parsing

use crate::headless_shader::parse_attribute_locations;

#[test]
fn test_parses_plain_declarations() {
    let slots = parse_attribute_locations(
        "#version 430 core\n\
         layout(location = 0) in vec3 a_position;\n\
         layout(location = 1) in vec2 a_uv;\n",
    );
    assert_eq!(slots.get("a_position"), Some(&0));
    assert_eq!(slots.get("a_uv"), Some(&1));
    assert_eq!(slots.len(), 2);
}

#[test]
fn test_parses_spacing_variants() {
    let slots = parse_attribute_locations(
        "layout (location=2) in vec4 a_color;\n\
         layout( location = 3 ) in mat4 i_model;\n",
    );
    assert_eq!(slots.get("a_color"), Some(&2));
    assert_eq!(slots.get("i_model"), Some(&3));
}

#[test]
fn test_ignores_uniforms_outputs_and_comments() {
    let slots = parse_attribute_locations(
        "layout(location=0) uniform mat4 u_view;\n\
         layout(location = 0) out vec4 v_color;\n\
         //layout(location = 5) in vec2 a_disabled;\n\
         layout(binding = 0) in vec2 a_unqualified;\n",
    );
    assert!(slots.is_empty());
}

#[test]
fn test_ignores_malformed_declarations() {
    let slots = parse_attribute_locations(
        "layout(location = x) in vec2 a_bad;\n\
         layout location = 1 in vec2 a_noparens;\n\
         layout(location = 2) in ;\n",
    );
    assert!(slots.is_empty());
}
