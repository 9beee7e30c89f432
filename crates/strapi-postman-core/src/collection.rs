//! Collection assembly
//!
//! Groups per-content-type requests into the "Collection Types" and
//! "Single Types" folders and wraps them with collection metadata.

use itertools::Itertools;
use tracing::info;
use uuid::Uuid;

use crate::{
    config::GeneratorConfig,
    operations::{build_operations, OperationGroup},
    postman::{Collection, CollectionInfo, Folder, Variable, SCHEMA_URL},
    repository::SchemaRepository,
    schema::ContentTypeKind,
    Error, Result,
};

pub const COLLECTION_TYPES_FOLDER: &str = "Collection Types";
pub const SINGLE_TYPES_FOLDER: &str = "Single Types";

/// Name of the collection variable every request URL starts with.
pub const BASE_URL_VARIABLE: &str = "baseUrl";

/// Collection-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSettings {
    pub name: String,
    pub description: String,
    pub base_url: String,
}

impl From<&GeneratorConfig> for CollectionSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            name: config.collection_name.clone(),
            description: config.collection_description.clone(),
            base_url: config.base_url.clone(),
        }
    }
}

/// Build the full collection for a repository.
///
/// Content types are expected in display order (as loaded by
/// [`SchemaRepository`]); folder contents keep that order.
///
/// # Errors
///
/// Returns error if:
/// - The repository has no content types
/// - An example body cannot be serialized
pub fn assemble(repository: &SchemaRepository, settings: &CollectionSettings) -> Result<Collection> {
    if repository.content_types.is_empty() {
        return Err(Error::NoContentTypesFound {
            path: crate::repository::API_DIR.into(),
        });
    }

    let groups = repository
        .content_types
        .iter()
        .map(|content_type| build_operations(content_type, &repository.components))
        .collect::<Result<Vec<_>>>()?;

    let (collection_types, single_types): (Vec<OperationGroup>, Vec<OperationGroup>) = groups
        .into_iter()
        .partition(|group| group.kind == ContentTypeKind::CollectionType);

    info!(
        collection_types = collection_types.len(),
        single_types = single_types.len(),
        "collection assembled"
    );

    let item = [
        (COLLECTION_TYPES_FOLDER, collection_types),
        (SINGLE_TYPES_FOLDER, single_types),
    ]
    .into_iter()
    .filter(|(_, groups)| !groups.is_empty())
    .map(|(name, groups)| Folder {
        name: name.to_string(),
        item: groups
            .into_iter()
            .map(OperationGroup::into_item_group)
            .collect_vec(),
    })
    .collect_vec();

    Ok(Collection {
        info: CollectionInfo {
            postman_id: Uuid::new_v4().to_string(),
            name: settings.name.clone(),
            description: settings.description.clone(),
            schema: SCHEMA_URL.to_string(),
        },
        item,
        variable: vec![Variable::string(BASE_URL_VARIABLE, settings.base_url.clone())],
    })
}
