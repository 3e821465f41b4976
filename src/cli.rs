//! Command-line interface for par-shaderconv.

use crate::converter::DEFAULT_GLSL_VERSION;
use clap::Parser;
use std::path::PathBuf;

/// par-shaderconv - Convert Shadertoy-dialect GLSL to GLES-style GLSL
#[derive(Parser)]
#[command(name = "par-shaderconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input shader file in the Shadertoy dialect
    #[arg(value_name = "SHADER")]
    pub input: PathBuf,

    /// GLSL version token for an explicit `#version` directive; only a
    /// non-default token is emitted, and only when the shader has none
    #[arg(long, value_name = "VERSION", default_value = DEFAULT_GLSL_VERSION)]
    pub glsl_version: String,

    /// Diagnostic log level on stderr (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
