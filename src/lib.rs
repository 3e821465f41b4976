//! Shadertoy-dialect GLSL to GLES-style GLSL conversion.
//!
//! The core lives in [`converter`]: a single-pass pipeline of textual
//! rewrite rules over one owned buffer, followed by assembly of a
//! declarations preamble and synthesis of a `void main()` entry point.
//! The CLI in [`cli`] is a thin wrapper that reads a file, converts it,
//! and writes the result to stdout.

pub mod cli;
pub mod converter;
pub mod debug;

pub use converter::{ConvertError, ConvertOptions, convert};
