//! # strapi-postman-core
//!
//! Builds a Postman v2.1 collection from the schemas of a Strapi project.
//!
//! This crate provides:
//! - Schema model and discovery ([`schema`], [`repository`])
//! - Example payload synthesis ([`synth`])
//! - Per-content-type request building ([`operations`])
//! - Collection assembly and output ([`collection`], [`postman`], [`output`])
//! - Layered configuration ([`config`])
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, Error>`. Every error is fatal for
//! a run; the output file is only replaced after the collection is complete.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod collection;
pub mod config;
mod error;
pub mod operations;
pub mod output;
pub mod postman;
pub mod repository;
pub mod schema;
pub mod synth;

use std::path::PathBuf;

use tracing::info;

pub use collection::{assemble, CollectionSettings};
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use operations::{build_operations, OperationDescriptor, OperationGroup};
pub use postman::Collection;
pub use repository::SchemaRepository;
pub use schema::{
    Attribute, AttributeKind, ComponentCatalog, ComponentSchema, ContentType, ContentTypeKind,
    ContentTypeSchema,
};
pub use synth::synthesize;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub content_types: usize,
    pub components: usize,
}

/// Load the project's schemas and assemble the collection in memory.
///
/// # Errors
///
/// Returns error if:
/// - `src/api` is missing
/// - A schema file is malformed
/// - No content types were found
pub fn build_collection(config: &GeneratorConfig) -> Result<(Collection, SchemaRepository)> {
    let repository = SchemaRepository::load(&config.root)?;
    if repository.content_types.is_empty() {
        return Err(Error::NoContentTypesFound {
            path: config.root.join(repository::API_DIR),
        });
    }

    let collection = assemble(&repository, &CollectionSettings::from(config))?;
    Ok((collection, repository))
}

/// Generate the collection and write it to `config.output`.
///
/// Nothing is written unless every previous step succeeded.
///
/// # Errors
///
/// Returns error if schema loading, assembly or writing fails.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    let (collection, repository) = build_collection(config)?;
    output::write_collection(&collection, &config.output)?;

    info!(path = %config.output.display(), "collection saved");
    Ok(GenerationReport {
        output: config.output.clone(),
        content_types: repository.content_types.len(),
        components: repository.components.len(),
    })
}
