//! Entry-point synthesis.
//!
//! Four states: the shader brings only `mainImage`, both `mainImage` and
//! `main`, only `main`, or neither. Only the first and last append a new
//! entry point; a shader that already has both gets a single advisory
//! comment and no structural change.

use super::scan::SignatureRecord;
use regex::Regex;
use std::sync::LazyLock;

/// A host-dialect entry point definition. `main` followed by a word
/// character (as in `mainImage`) does not match.
static ENTRY_POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bvoid\s+main\s*\(")
        .expect("entry-point regex is a compile-time constant and must be valid")
});

const CONFLICT_ADVISORY: &str =
    "\n// NOTE: existing main() left in place; verify it invokes mainImage().\n";

const NOOP_ENTRY: &str = "\nvoid main() {\n    gl_FragColor = vec4(0.0);\n}\n";

/// Append, advise, or leave the entry point alone depending on what the
/// buffer already defines.
pub(crate) fn synthesize(mut buffer: String, signature: Option<&SignatureRecord>) -> String {
    let has_entry = ENTRY_POINT.is_match(&buffer);

    match (signature, has_entry) {
        (Some(signature), false) => {
            log::debug!(
                "synthesizing entry point around mainImage({}, {})",
                signature.color_param,
                signature.coord_param
            );
            buffer.push_str(&format!(
                "\nvoid main() {{\n    // Positional call; mainImage declared its parameters as ({}, {}).\n    mainImage(gl_FragColor, gl_FragCoord.xy);\n}}\n",
                signature.color_param, signature.coord_param
            ));
        }
        (Some(_), true) => {
            log::warn!("shader defines both mainImage() and main(); leaving main() untouched");
            buffer.push_str(CONFLICT_ADVISORY);
        }
        (None, true) => {}
        (None, false) => {
            log::warn!("shader defines neither mainImage() nor main(); appending a no-op entry");
            buffer.push_str(NOOP_ENTRY);
        }
    }

    buffer
}
