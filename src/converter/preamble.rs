//! Declarations preamble assembly and insertion.
//!
//! The preamble declares every external binding the host runtime
//! supplies, the fallback constants the original buffer needs, and the
//! `img2tex` coordinate-remap helper. It is spliced in immediately after
//! an existing `#version` line, or at the very start when there is none.

use super::DEFAULT_GLSL_VERSION;
use super::scan::FallbackRequirements;

/// External bindings supplied by the host runtime.
const DECLARATIONS: &str = "\
precision mediump float;

uniform vec2 imageSize;
uniform float time;
uniform int frame;
uniform vec4 iMouse;
uniform sampler2D sampler0;
uniform sampler2D sampler1;
uniform sampler2D sampler2;
uniform sampler2D sampler3;
uniform sampler2D randomTexture;
uniform vec2 texSize;
";

/// Converts a normalized Shadertoy coordinate into host texture space.
/// Both sizes are floored at (1,1) so an unbound texture cannot divide
/// by zero.
const REMAP_HELPER: &str = "\
vec2 img2tex(vec2 coord) {
    return coord / max(texSize, vec2(1.0)) * max(imageSize, vec2(1.0));
}
";

const CHANNEL_ARRAY_ADVISORY: &str =
    "// NOTE: iChannelResolution/iChannelTime have no equivalent binding here; references were left untranslated.\n";

/// Build the preamble and splice it into the buffer.
pub(crate) fn insert(
    source: String,
    requirements: &FallbackRequirements,
    glsl_version: &str,
) -> String {
    let directive_end = version_directive_end(&source);
    let block = assemble(requirements, glsl_version, directive_end.is_some());

    match directive_end {
        Some(end) => {
            let mut out = String::with_capacity(source.len() + block.len() + 2);
            out.push_str(&source[..end]);
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
            out.push_str(&block);
            out.push('\n');
            out.push_str(&source[end..]);
            out
        }
        None => format!("{block}\n{source}"),
    }
}

fn assemble(
    requirements: &FallbackRequirements,
    glsl_version: &str,
    has_directive: bool,
) -> String {
    let mut block = String::new();

    // Untranslatable constructs come first so they cannot be missed.
    if requirements.channel_arrays {
        block.push_str(CHANNEL_ARRAY_ADVISORY);
    }
    if glsl_version != DEFAULT_GLSL_VERSION && !has_directive {
        block.push_str(&format!("#version {glsl_version}\n"));
    }
    block.push_str(DECLARATIONS);

    if requirements.time_delta {
        block.push_str("const float timeDelta = 1.0 / 60.0;\n");
    }
    if requirements.date {
        block.push_str("const vec4 shaderDate = vec4(2024.0, 1.0, 1.0, 0.0);\n");
    }
    if requirements.frame_rate {
        block.push_str("const float frameRate = 60.0;\n");
    }

    block.push('\n');
    block.push_str(REMAP_HELPER);
    block
}

/// Byte offset just past the first `#version` directive line (including
/// its newline when present), or `None` when the buffer has no directive.
fn version_directive_end(source: &str) -> Option<usize> {
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        if line.trim_start().starts_with("#version") {
            return Some(offset + line.len());
        }
        offset += line.len();
    }
    None
}
