use std::path::Path;

use anyhow::{Context, Result};
use strapi_postman_core::{build_collection, generate, output, GeneratorConfig};
use tracing::debug;

use crate::cli::Options;

/// Resolve configuration from all layers, CLI flags last.
///
/// # Errors
/// Returns an error if the working directory is unavailable or the
/// configuration is invalid
pub fn resolve_config(options: &Options) -> Result<GeneratorConfig> {
    let root = match &options.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let mut config = GeneratorConfig::load(root)?;
    if let Some(output) = &options.output {
        config.set_output(output.clone());
    }
    if let Some(base_url) = &options.base_url {
        config.base_url.clone_from(base_url);
    }
    config.validate()?;

    debug!(?config, "configuration resolved");
    Ok(config)
}

/// Execute one generation run
///
/// Returns the text to print on stdout: the collection itself for
/// `--dry-run`, otherwise the path it was saved to.
///
/// # Errors
/// Returns an error if any step of the run fails; nothing is written then
pub fn run(options: &Options) -> Result<String> {
    let config = resolve_config(options)?;

    if options.dry_run {
        let (collection, _) = build_collection(&config)?;
        return Ok(output::to_json(&collection)?);
    }

    let report = generate(&config)?;
    Ok(saved_message(&report.output))
}

fn saved_message(path: &Path) -> String {
    format!("Postman collection saved to {}", path.display())
}

/// Exit code for a failed run
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<strapi_postman_core::Error>()
        .map_or(1, strapi_postman_core::Error::exit_code)
}
