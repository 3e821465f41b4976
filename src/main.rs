use anyhow::{Context, Result};
use clap::Parser;
use par_shaderconv::cli::Cli;
use par_shaderconv::converter::{ConvertOptions, convert};

fn main() -> Result<()> {
    // Parse CLI arguments first (before logging init for cleaner output)
    let cli = Cli::parse();

    // Route diagnostics to stderr so the converted shader owns stdout.
    par_shaderconv::debug::init_log_bridge(cli.log_level.as_deref());

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read shader '{}'", cli.input.display()))?;

    let options = ConvertOptions {
        glsl_version: cli.glsl_version,
    };
    let converted = convert(&source, &options)
        .with_context(|| format!("failed to convert shader '{}'", cli.input.display()))?;

    print!("{converted}");
    Ok(())
}
