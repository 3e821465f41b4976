//! Pre-rewrite scanning: BOM normalization, per-pixel signature
//! detection, and the fallback requirement flags.
//!
//! Everything here reads the *original* buffer. The identifier rewrites
//! that run later remove the very tokens these scans look for, so the
//! records produced here are computed once and threaded read-only into
//! the downstream stages.

use super::ConvertError;
use regex::Regex;
use std::sync::LazyLock;

const UTF8_BOM: char = '\u{feff}';

/// Parameter names declared by the shader's `mainImage` function.
///
/// The synthesized entry point calls `mainImage` positionally, so these
/// names only surface in an explanatory comment next to the call.
#[derive(Debug, Clone)]
pub struct SignatureRecord {
    /// Declared name of the `out vec4` color parameter.
    pub color_param: String,
    /// Declared name of the `in vec2` coordinate parameter.
    pub coord_param: String,
}

/// Which fallback constants the original buffer needs, plus whether it
/// references the per-channel arrays that have no host equivalent.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackRequirements {
    pub time_delta: bool,
    pub date: bool,
    pub frame_rate: bool,
    pub channel_arrays: bool,
}

/// `void mainImage(out vec4 <color>, in vec2 <coord>)` with both
/// qualifiers optional.
static PER_PIXEL_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bvoid\s+mainImage\s*\(\s*(?:out\s+)?vec4\s+(\w+)\s*,\s*(?:in\s+)?vec2\s+(\w+)\s*\)")
        .expect("per-pixel signature regex is a compile-time constant and must be valid")
});

/// Any definition-shaped `mainImage`, regardless of parameter list.
static PER_PIXEL_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bvoid\s+mainImage\s*\(")
        .expect("per-pixel head regex is a compile-time constant and must be valid")
});

static TIME_DELTA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\biTimeDelta\b")
        .expect("iTimeDelta scan regex is a compile-time constant and must be valid")
});

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\biDate\b").expect("iDate scan regex is a compile-time constant and must be valid")
});

static FRAME_RATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\biFrameRate\b")
        .expect("iFrameRate scan regex is a compile-time constant and must be valid")
});

static CHANNEL_ARRAYS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\biChannel(?:Resolution|Time)\b")
        .expect("channel-array scan regex is a compile-time constant and must be valid")
});

/// Remove a single leading byte-order mark, if present.
pub(crate) fn strip_bom(source: &str) -> &str {
    source.strip_prefix(UTF8_BOM).unwrap_or(source)
}

/// Detect the Shadertoy per-pixel function and record its parameter names.
///
/// Absence is a valid state (plain fragment-stage code). A `mainImage`
/// definition whose parameter list does not match the `(out vec4, in vec2)`
/// shape is an error: the synthesized entry point would call it with two
/// positional arguments and the result could never compile.
pub(crate) fn detect_signature(source: &str) -> Result<Option<SignatureRecord>, ConvertError> {
    if let Some(caps) = PER_PIXEL_SIGNATURE.captures(source) {
        return Ok(Some(SignatureRecord {
            color_param: caps[1].to_string(),
            coord_param: caps[2].to_string(),
        }));
    }
    if PER_PIXEL_HEAD.is_match(source) {
        return Err(ConvertError::UnsupportedSignature);
    }
    Ok(None)
}

/// Compute the fallback requirement flags from the unmodified buffer.
pub(crate) fn scan_fallback_requirements(source: &str) -> FallbackRequirements {
    let requirements = FallbackRequirements {
        time_delta: TIME_DELTA.is_match(source),
        date: DATE.is_match(source),
        frame_rate: FRAME_RATE.is_match(source),
        channel_arrays: CHANNEL_ARRAYS.is_match(source),
    };
    log::debug!("fallback requirements: {requirements:?}");
    requirements
}
