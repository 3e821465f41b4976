//! Shadertoy GLSL → GLES-style GLSL conversion pipeline.
//!
//! The pipeline is a fixed sequence of textual rewrite stages over one
//! owned buffer; no stage re-examines the output of a later stage:
//!
//! 1. normalize (BOM strip) and detect the `mainImage` per-pixel signature
//! 2. record which fallback constants the *original* text needs
//! 3. rewrite Shadertoy global identifiers to host-dialect names
//! 4. rewrite sampling calls on the known samplers (with `img2tex` remap)
//! 5. normalize any remaining `texture(` calls to `texture2D(`
//! 6. splice in the declarations preamble
//! 7. synthesize (or advise on) the `void main()` entry point
//! 8. collapse blank-line runs
//!
//! There is no parsing into a syntax tree; every rule is a whole-word
//! textual match. Input that defeats the call-boundary heuristic (for
//! example an unterminated sampling call) degrades to a logged warning
//! rather than a hard failure.

mod entry;
mod preamble;
mod rewrite;
mod scan;

pub use scan::{FallbackRequirements, SignatureRecord};

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Version token assumed when the caller does not ask for a directive.
pub const DEFAULT_GLSL_VERSION: &str = "100";

/// The four indexed channel samplers of the host dialect, in channel order.
pub const CHANNEL_SAMPLERS: [&str; 4] = ["sampler0", "sampler1", "sampler2", "sampler3"];

/// Sampler already expressed in host texture space; never remapped.
pub const PASSTHROUGH_SAMPLER: &str = "randomTexture";

/// Errors produced by [`convert`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// `mainImage` exists but its parameter list is not the
    /// `(out vec4, in vec2)` shape the synthesized entry point calls.
    #[error(
        "unsupported mainImage signature: expected `void mainImage(out vec4 <color>, in vec2 <coord>)`"
    )]
    UnsupportedSignature,
}

/// Conversion options; one record per invocation.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Target GLSL version token. A non-default token triggers emission of
    /// an explicit `#version` directive when the shader has none.
    pub glsl_version: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            glsl_version: DEFAULT_GLSL_VERSION.to_string(),
        }
    }
}

/// Convert one buffer of Shadertoy-dialect GLSL into the host dialect.
///
/// The returned buffer declares every external binding the host supplies,
/// has all Shadertoy identifiers and sampling calls rewritten, and ends
/// with a valid `void main()` (synthesized when the shader did not bring
/// its own). Syntactic validity of the result is a goal, not a guarantee;
/// unsupported constructs degrade to advisory comments in the output.
///
/// # Errors
/// [`ConvertError::UnsupportedSignature`] when a `mainImage` declaration
/// is present but does not take `(out vec4, in vec2)` parameters.
pub fn convert(source: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let mut buffer = scan::strip_bom(source).to_string();

    // Presence flags must come from the unmodified text; the rewrites
    // below remove the identifiers that trigger them.
    let signature = scan::detect_signature(&buffer)?;
    let requirements = scan::scan_fallback_requirements(&buffer);

    buffer = rewrite::rewrite_identifiers(buffer);
    buffer = rewrite::rewrite_known_sampler_calls(&buffer);
    buffer = rewrite::normalize_generic_sampling(&buffer);
    buffer = preamble::insert(buffer, &requirements, &options.glsl_version);
    buffer = entry::synthesize(buffer, signature.as_ref());

    Ok(collapse_blank_lines(&buffer))
}

/// Runs of three or more newlines, left over from splicing and rewriting.
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("blank-line regex is a compile-time constant and must be valid")
});

fn collapse_blank_lines(source: &str) -> String {
    BLANK_RUNS.replace_all(source, "\n\n").into_owned()
}
