//! Schema discovery
//!
//! Reads a Strapi project tree:
//!
//! ```text
//! src/api/<api>/content-types/<name>/schema.json
//! src/components/<namespace>/<component>.json
//! ```
//!
//! Directory listings are sorted by file name so the result never depends on
//! the filesystem's ordering.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    schema::{ComponentCatalog, ComponentSchema, ContentType, ContentTypeSchema},
    Error, Result,
};

pub const API_DIR: &str = "src/api";
pub const COMPONENTS_DIR: &str = "src/components";
const CONTENT_TYPES_DIR: &str = "content-types";
const SCHEMA_FILE: &str = "schema.json";

/// Everything the generator needs from a project: its content types (sorted
/// by display name) and the component catalog.
#[derive(Debug, Clone, Default)]
pub struct SchemaRepository {
    pub content_types: Vec<ContentType>,
    pub components: ComponentCatalog,
}

impl SchemaRepository {
    /// Load all schemas below a project root.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `src/api` does not exist
    /// - A schema file cannot be read or parsed
    pub fn load(root: &Path) -> Result<Self> {
        let content_types = load_content_types(&root.join(API_DIR))?;
        let components = load_components(&root.join(COMPONENTS_DIR))?;

        info!(
            content_types = content_types.len(),
            components = components.len(),
            "schemas loaded"
        );

        Ok(Self {
            content_types,
            components,
        })
    }

    /// Assemble a repository from schemas built in memory.
    #[must_use]
    pub fn from_parts(mut content_types: Vec<ContentType>, components: ComponentCatalog) -> Self {
        sort_content_types(&mut content_types);
        Self {
            content_types,
            components,
        }
    }
}

/// Order content types case-insensitively by [`ContentType::sort_key`].
pub fn sort_content_types(content_types: &mut [ContentType]) {
    content_types.sort_by_cached_key(ContentType::sort_key);
}

/// Discover every `schema.json` under the api directory.
///
/// # Errors
///
/// Returns [`Error::MissingSchemaDirectory`] when `api_dir` does not exist.
pub fn load_content_types(api_dir: &Path) -> Result<Vec<ContentType>> {
    if !api_dir.is_dir() {
        return Err(Error::MissingSchemaDirectory {
            path: api_dir.to_path_buf(),
        });
    }

    let mut content_types = Vec::new();

    for api in sorted_subdirectories(api_dir)? {
        let api_name = file_name(&api);
        let content_types_dir = api.join(CONTENT_TYPES_DIR);
        if !content_types_dir.is_dir() {
            debug!(api = %api_name, "no content-types directory, skipping");
            continue;
        }

        for ct_dir in sorted_subdirectories(&content_types_dir)? {
            let schema_path = ct_dir.join(SCHEMA_FILE);
            if !schema_path.is_file() {
                debug!(path = %ct_dir.display(), "no schema.json, skipping");
                continue;
            }

            let schema: ContentTypeSchema = read_schema(&schema_path)?;
            let name = file_name(&ct_dir);
            debug!(api = %api_name, content_type = %name, kind = %schema.kind, "found content type");
            content_types.push(ContentType::new(api_name.clone(), name, schema));
        }
    }

    sort_content_types(&mut content_types);
    Ok(content_types)
}

/// Walk the components directory; nested directories become dotted namespaces.
///
/// A missing directory yields an empty catalog.
///
/// # Errors
///
/// Returns error if the directory cannot be walked or a component file is malformed.
pub fn load_components(components_dir: &Path) -> Result<ComponentCatalog> {
    let mut catalog = ComponentCatalog::new();
    if !components_dir.is_dir() {
        debug!(path = %components_dir.display(), "no components directory");
        return Ok(catalog);
    }

    for entry in WalkDir::new(components_dir)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(components_dir, e))?;

        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let Some(uid) = component_uid(components_dir, path) else {
            continue;
        };
        let schema: ComponentSchema = read_schema(path)?;
        debug!(component = %uid, "found component");
        catalog.insert(uid, schema);
    }

    Ok(catalog)
}

/// `shared/media/image.json` -> `shared.media.image`
fn component_uid(components_dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(components_dir).ok()?.with_extension("");
    let segments: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(segments.join("."))
}

fn read_schema<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| Error::MalformedSchemaFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Immediate subdirectories of `dir`, sorted by name.
fn sorted_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(walk_error(dir, e))),
        })
        .collect()
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    Error::io(path, std::io::Error::from(err))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
