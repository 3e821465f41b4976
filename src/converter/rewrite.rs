//! Identifier and sampling-call rewriting.
//!
//! All substitutions are whole-word textual matches; everything the rules
//! do not touch passes through byte-for-byte. The sampling-call rewriter
//! captures the coordinate argument with a forward parenthesis-balancing
//! scan, which keeps nested calls inside the argument intact.

use super::{CHANNEL_SAMPLERS, PASSTHROUGH_SAMPLER};
use regex::Regex;
use std::sync::LazyLock;

/// Ordered whole-word substitution table for Shadertoy globals.
///
/// Component accesses of `iResolution` rewrite before the bare identifier
/// so that what remains for the bare rule really is bare. Fallback
/// constant names (`timeDelta`, `shaderDate`, `frameRate`) are disjoint
/// from every source-dialect name, so no later rule can re-match an
/// earlier rule's output.
const IDENTIFIER_RULES: &[(&str, &str)] = &[
    (r"\biTimeDelta\b", "timeDelta"),
    (r"\biGlobalTime\b", "time"),
    (r"\biTime\b", "time"),
    (r"\biResolution\.", "imageSize."),
    (r"\biResolution\b", "vec3(imageSize, 1.0)"),
    (r"\biFrameRate\b", "frameRate"),
    (r"\biFrame\b", "frame"),
    (r"\biDate\b", "shaderDate"),
    (r"\biSampleRate\b", "44100.0"),
    (r"\biChannel([0-3])\b", "sampler${1}"),
];

static COMPILED_IDENTIFIER_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    IDENTIFIER_RULES
        .iter()
        .map(|(pattern, replacement)| {
            let regex = Regex::new(pattern)
                .expect("identifier rewrite regex is a compile-time constant and must be valid");
            (regex, *replacement)
        })
        .collect()
});

/// Head of a sampling call bound to one of the known samplers, up to and
/// including the comma after the sampler name.
static KNOWN_SAMPLER_CALL: LazyLock<Regex> = LazyLock::new(|| {
    let channels = CHANNEL_SAMPLERS.join("|");
    Regex::new(&format!(
        r"\btexture\s*\(\s*({channels}|{PASSTHROUGH_SAMPLER})\s*,\s*"
    ))
    .expect("known-sampler call regex is a compile-time constant and must be valid")
});

/// Any remaining dialect-neutral sampling call name.
static GENERIC_SAMPLING_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\btexture\s*\(")
        .expect("generic sampling-call regex is a compile-time constant and must be valid")
});

/// Apply the ordered identifier substitution table to the whole buffer.
pub(crate) fn rewrite_identifiers(mut buffer: String) -> String {
    for (pattern, replacement) in COMPILED_IDENTIFIER_RULES.iter() {
        buffer = pattern.replace_all(&buffer, *replacement).into_owned();
    }
    buffer
}

/// Rewrite sampling calls bound to the known samplers.
///
/// Channel samplers gain the `img2tex` coordinate remap; the pass-through
/// sampler already lives in host texture space and keeps its argument
/// bare. The captured argument is trimmed and recursively processed so a
/// known-sampler call nested inside a coordinate expression is rewritten
/// too. A call with no closing parenthesis before end of buffer is left
/// for later stages and logged.
pub(crate) fn rewrite_known_sampler_calls(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(caps) = KNOWN_SAMPLER_CALL.captures(rest) {
        let head = caps.get(0).expect("regex match always has group 0");
        let sampler = &caps[1];

        let Some(close) = find_balanced_close(rest, head.end()) else {
            log::warn!("sampling call on `{sampler}` has no closing parenthesis; remap skipped");
            out.push_str(&rest[..head.end()]);
            rest = &rest[head.end()..];
            continue;
        };

        let argument = rewrite_known_sampler_calls(rest[head.end()..close].trim());
        out.push_str(&rest[..head.start()]);
        if sampler == PASSTHROUGH_SAMPLER {
            out.push_str(&format!("texture2D({sampler}, {argument})"));
        } else {
            out.push_str(&format!("texture2D({sampler}, img2tex({argument}))"));
        }
        rest = &rest[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Rewrite every remaining `texture(` call to `texture2D(`, arguments
/// untouched. Bindings here are unknown, so no coordinate remap applies.
pub(crate) fn normalize_generic_sampling(source: &str) -> String {
    GENERIC_SAMPLING_CALL.replace_all(source, "texture2D(").into_owned()
}

/// Byte offset of the parenthesis that closes an already-open call, given
/// the offset just past the opening parenthesis. `None` when the buffer
/// ends first.
fn find_balanced_close(text: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, ch) in text[from..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(from + offset);
                }
            }
            _ => {}
        }
    }
    None
}
