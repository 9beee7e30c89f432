//! Operation descriptors
//!
//! Maps a content type onto the REST routes Strapi exposes for it:
//! five routes for collection types, two for single types.

use serde_json::{Map, Value};

use crate::{
    postman::{Body, Header, Item, ItemGroup, Method, Request, Url, ID_PLACEHOLDER},
    schema::{non_empty, ComponentCatalog, ContentType, ContentTypeKind},
    synth::{synthesize, titleize},
    Result,
};

/// One API call against a content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub name: String,
    pub method: Method,
    /// Segments below `/api`
    pub path: Vec<String>,
    pub description: String,
    /// Pretty-printed JSON example body
    pub body: Option<String>,
}

impl OperationDescriptor {
    fn new(name: String, method: Method, path: Vec<String>, description: String) -> Self {
        Self {
            name,
            method,
            path,
            description,
            body: None,
        }
    }

    fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Full URL template, e.g. `{{baseUrl}}/api/articles/{{id}}`
    #[must_use]
    pub fn url(&self) -> Url {
        Url::api(&self.path)
    }

    /// Convert into a Postman request item.
    ///
    /// Requests with a body advertise a JSON content type.
    #[must_use]
    pub fn into_item(self) -> Item {
        let url = self.url();
        let (header, body) = match self.body {
            Some(raw) => (vec![Header::json_content_type()], Some(Body::raw_json(raw))),
            None => (Vec::new(), None),
        };
        Item {
            name: self.name,
            request: Request {
                method: self.method,
                header,
                url,
                description: self.description,
                body,
            },
        }
    }
}

/// The operations of one content type, named after its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationGroup {
    pub name: String,
    pub kind: ContentTypeKind,
    pub operations: Vec<OperationDescriptor>,
}

impl OperationGroup {
    #[must_use]
    pub fn into_item_group(self) -> ItemGroup {
        ItemGroup {
            name: self.name,
            item: self
                .operations
                .into_iter()
                .map(OperationDescriptor::into_item)
                .collect(),
        }
    }
}

/// Display name: explicit display name, else titleized singular name, else
/// titleized identifier.
#[must_use]
pub fn display_name(content_type: &ContentType) -> String {
    let info = &content_type.schema.info;
    non_empty(info.display_name.as_deref()).map_or_else(
        || {
            titleize(
                non_empty(info.singular_name.as_deref()).unwrap_or(&content_type.name),
            )
        },
        str::to_string,
    )
}

/// Route slug: plural name (or `<singular>s`) for collections, singular name
/// for single types.
#[must_use]
pub fn slug(content_type: &ContentType) -> String {
    let info = &content_type.schema.info;
    let singular = non_empty(info.singular_name.as_deref()).unwrap_or(&content_type.name);
    match content_type.kind() {
        ContentTypeKind::SingleType => singular.to_string(),
        ContentTypeKind::CollectionType => non_empty(info.plural_name.as_deref())
            .map_or_else(|| format!("{singular}s"), str::to_string),
    }
}

/// Pretty-printed `{"data": <example>}` for a content type.
///
/// # Errors
///
/// Returns error if the example cannot be serialized.
pub fn example_body(content_type: &ContentType, catalog: &ComponentCatalog) -> Result<String> {
    let mut envelope = Map::new();
    envelope.insert(
        "data".to_string(),
        Value::Object(synthesize(&content_type.schema.attributes, catalog, 0)),
    );
    Ok(serde_json::to_string_pretty(&Value::Object(envelope))?)
}

/// Build the operation group for a content type.
///
/// # Errors
///
/// Returns error if the example body cannot be serialized.
pub fn build_operations(
    content_type: &ContentType,
    catalog: &ComponentCatalog,
) -> Result<OperationGroup> {
    let name = display_name(content_type);
    let slug = slug(content_type);
    let body = example_body(content_type, catalog)?;

    let operations = match content_type.kind() {
        ContentTypeKind::CollectionType => collection_operations(&name, &slug, &body),
        ContentTypeKind::SingleType => single_operations(&name, &slug, &body),
    };

    Ok(OperationGroup {
        name,
        kind: content_type.kind(),
        operations,
    })
}

fn collection_operations(name: &str, slug: &str, body: &str) -> Vec<OperationDescriptor> {
    let list_path = vec![slug.to_string()];
    let entry_path = vec![slug.to_string(), ID_PLACEHOLDER.to_string()];

    vec![
        OperationDescriptor::new(
            format!("List {name}"),
            Method::Get,
            list_path.clone(),
            format!("Retrieve a paginated list of {name}."),
        ),
        OperationDescriptor::new(
            format!("Get {name} by ID"),
            Method::Get,
            entry_path.clone(),
            format!("Retrieve a single {name} entry by ID."),
        ),
        OperationDescriptor::new(
            format!("Create {name}"),
            Method::Post,
            list_path,
            format!("Create a new {name} entry."),
        )
        .with_body(body),
        OperationDescriptor::new(
            format!("Update {name}"),
            Method::Put,
            entry_path.clone(),
            format!("Update an existing {name} entry."),
        )
        .with_body(body),
        OperationDescriptor::new(
            format!("Delete {name}"),
            Method::Delete,
            entry_path,
            format!("Delete an existing {name} entry."),
        ),
    ]
}

fn single_operations(name: &str, slug: &str, body: &str) -> Vec<OperationDescriptor> {
    let path = vec![slug.to_string()];

    vec![
        OperationDescriptor::new(
            format!("Get {name}"),
            Method::Get,
            path.clone(),
            format!("Retrieve the {name} single type."),
        ),
        OperationDescriptor::new(
            format!("Update {name}"),
            Method::Put,
            path,
            format!("Update the {name} single type."),
        )
        .with_body(body),
    ]
}
