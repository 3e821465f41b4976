//! Integration tests for the Shadertoy → GLES conversion pipeline.

use par_shaderconv::converter::{ConvertError, ConvertOptions, convert};

fn convert_default(source: &str) -> String {
    convert(source, &ConvertOptions::default()).expect("conversion should succeed")
}

#[test]
fn test_end_to_end_channel_sampling_shader() {
    let source = "void mainImage(out vec4 c, in vec2 p){ c = texture(iChannel0, p/iResolution.xy);}";
    let out = convert_default(source);

    // Declarations for the host bindings and the remap helper
    assert!(out.contains("uniform vec2 imageSize;"));
    assert!(out.contains("uniform sampler2D sampler0;"));
    assert!(out.contains("uniform vec2 texSize;"));
    assert!(out.contains("vec2 img2tex(vec2 coord)"));

    // Rewritten sampling line
    assert!(out.contains("texture2D(sampler0, img2tex(p/imageSize.xy))"));

    // Synthesized entry point calling the per-pixel function positionally
    assert!(out.contains("mainImage(gl_FragColor, gl_FragCoord.xy);"));
    assert_eq!(out.matches("void main(").count(), 1);
}

#[test]
fn test_end_to_end_time_delta_fallback_is_emitted_once() {
    let source = "void mainImage(out vec4 c, in vec2 p){ c = vec4(iTimeDelta); }";
    let out = convert_default(source);

    assert_eq!(out.matches("const float timeDelta = 1.0 / 60.0;").count(), 1);
    assert!(out.contains("vec4(timeDelta)"));
}

#[test]
fn test_noop_entry_synthesized_exactly_once() {
    let out = convert_default("float helper() { return 0.5; }\n");

    assert_eq!(out.matches("void main(").count(), 1);
    assert!(out.contains("gl_FragColor = vec4(0.0);"));
}

#[test]
fn test_positional_call_ignores_declared_parameter_names() {
    let out = convert_default("void mainImage(out vec4 o, in vec2 uv) { o = vec4(uv, 0.0, 1.0); }\n");

    assert!(out.contains("mainImage(gl_FragColor, gl_FragCoord.xy);"));
    assert_eq!(out.matches("void main(").count(), 1);
}

#[test]
fn test_existing_entry_point_gets_advisory_only() {
    let source = "void mainImage(out vec4 c, in vec2 p) { c = vec4(1.0); }\nvoid main() { mainImage(gl_FragColor, gl_FragCoord.xy); }\n";
    let out = convert_default(source);

    assert_eq!(out.matches("// NOTE: existing main()").count(), 1);
    assert_eq!(out.matches("void main(").count(), 1);
}

#[test]
fn test_entry_only_shader_is_not_restructured() {
    let out = convert_default("void main() { gl_FragColor = vec4(iTime); }\n");

    assert_eq!(out.matches("void main(").count(), 1);
    assert!(out.contains("gl_FragColor = vec4(time);"));
    assert!(!out.contains("// NOTE: existing main()"));
}

#[test]
fn test_whole_word_rewriting_spares_longer_identifiers() {
    let source = "void mainImage(out vec4 c, in vec2 p) { float timeline = iTime; c = vec4(timeline); }\n";
    let out = convert_default(source);

    assert!(out.contains("float timeline = time;"));
    assert!(out.contains("vec4(timeline)"));
}

#[test]
fn test_channel_samplers_remap_but_passthrough_does_not() {
    let source = "void mainImage(out vec4 c, in vec2 p) { c = texture(iChannel2, p) + texture(randomTexture, p); }\n";
    let out = convert_default(source);

    assert!(out.contains("texture2D(sampler2, img2tex(p))"));
    assert!(out.contains("texture2D(randomTexture, p)"));
    assert!(!out.contains("texture2D(randomTexture, img2tex"));
}

#[test]
fn test_preamble_inserted_once_after_version_directive() {
    let source = "#version 300 es\nvoid mainImage(out vec4 c, in vec2 p) { c = vec4(0.0); }\n";
    let out = convert_default(source);

    assert_eq!(out.matches("precision mediump float;").count(), 1);
    assert_eq!(out.matches("#version").count(), 1);
    let version_pos = out.find("#version 300 es").unwrap();
    let precision_pos = out.find("precision mediump float;").unwrap();
    assert!(version_pos < precision_pos);
}

#[test]
fn test_fallback_constants_gated_on_original_text() {
    let with_date = convert_default("void mainImage(out vec4 c, in vec2 p) { c = iDate; }\n");
    assert!(with_date.contains("const vec4 shaderDate"));
    assert!(with_date.contains("c = shaderDate;"));

    let without_date = convert_default("void mainImage(out vec4 c, in vec2 p) { c = vec4(0.0); }\n");
    assert!(!without_date.contains("const vec4 shaderDate"));
    assert!(!without_date.contains("const float timeDelta"));
}

#[test]
fn test_channel_array_references_produce_advisory() {
    let source = "void mainImage(out vec4 c, in vec2 p) { c = vec4(iChannelResolution[0], 1.0); }\n";
    let out = convert_default(source);

    assert!(out.starts_with("// NOTE: iChannelResolution/iChannelTime"));
    assert!(out.contains("iChannelResolution[0]"));
}

#[test]
fn test_non_default_version_token_emits_directive() {
    let options = ConvertOptions {
        glsl_version: "300 es".to_string(),
    };
    let out = convert("void main() { gl_FragColor = vec4(0.0); }\n", &options)
        .expect("conversion should succeed");

    assert!(out.starts_with("#version 300 es\n"));
    assert_eq!(out.matches("#version").count(), 1);
}

#[test]
fn test_legacy_global_time_alias_is_rewritten() {
    let out = convert_default("void main() { gl_FragColor = vec4(iGlobalTime); }\n");
    assert!(out.contains("vec4(time)"));
}

#[test]
fn test_sample_rate_becomes_numeric_literal() {
    let out = convert_default("void main() { float sr = iSampleRate; }\n");
    assert!(out.contains("float sr = 44100.0;"));
}

#[test]
fn test_mouse_state_is_declared_and_kept() {
    let out = convert_default("void main() { gl_FragColor = iMouse; }\n");
    assert_eq!(out.matches("uniform vec4 iMouse;").count(), 1);
    assert!(out.contains("gl_FragColor = iMouse;"));
}

#[test]
fn test_bare_resolution_builds_vec3_from_viewport() {
    let out = convert_default("void main() { vec3 r = iResolution; }\n");
    assert!(out.contains("vec3 r = vec3(imageSize, 1.0);"));
}

#[test]
fn test_unsupported_main_image_arity_fails_fast() {
    let source = "void mainImage(out vec4 c, in vec2 p, in float t) { c = vec4(t); }\n";
    let result = convert(source, &ConvertOptions::default());
    assert!(matches!(result, Err(ConvertError::UnsupportedSignature)));
}

#[test]
fn test_unterminated_sampling_call_degrades_without_remap() {
    let source = "void main() { vec4 c = texture(iChannel0, vec2(1.0";
    let out = convert_default(source);

    assert!(!out.contains("img2tex(vec2(1.0"));
    assert!(out.contains("sampler0, vec2(1.0"));
}

#[test]
fn test_blank_line_runs_are_collapsed() {
    let out = convert_default("void main() { gl_FragColor = vec4(0.0); }\n\n\n\n// trailing\n");
    assert!(!out.contains("\n\n\n"));
}

#[test]
fn test_bom_is_stripped_from_file_sources() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shader.glsl");
    std::fs::write(
        &path,
        "\u{feff}void mainImage(out vec4 c, in vec2 p) { c = vec4(iTime); }\n",
    )
    .expect("write shader");

    let source = std::fs::read_to_string(&path).expect("read shader");
    let out = convert_default(&source);

    assert!(!out.contains('\u{feff}'));
    assert!(out.contains("vec4(time)"));
    assert!(out.contains("mainImage(gl_FragColor, gl_FragCoord.xy);"));
}
