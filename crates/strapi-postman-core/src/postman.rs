//! Postman collection v2.1 document types
//!
//! Only the subset of the format the generator emits. Every type round-trips
//! through serde so written collections can be read back in tests and tools.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Schema URL identifying the v2.1 collection format.
pub const SCHEMA_URL: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Host placeholder resolved from the `baseUrl` collection variable.
pub const BASE_URL_HOST: &str = "{{baseUrl}}";

/// Path placeholder for a record id.
pub const ID_PLACEHOLDER: &str = "{{id}}";

/// Prefix of every Strapi content API route.
pub const API_PREFIX: &str = "api";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub info: CollectionInfo,
    pub item: Vec<Folder>,
    #[serde(default)]
    pub variable: Vec<Variable>,
}

impl Collection {
    /// Look up a top-level folder by name.
    #[must_use]
    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.item.iter().find(|folder| folder.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
    pub name: String,
    pub description: String,
    pub schema: String,
}

/// Top-level folder ("Collection Types" / "Single Types").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub item: Vec<ItemGroup>,
}

/// The requests of one content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub name: String,
    pub item: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub request: Request,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: Method,
    pub header: Vec<Header>,
    pub url: Url,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    #[must_use]
    pub fn json_content_type() -> Self {
        Self {
            key: "Content-Type".to_string(),
            value: "application/json".to_string(),
        }
    }
}

/// `{{baseUrl}}/api/<segments...>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}

impl Url {
    /// Build an API url from path segments below `/api`.
    #[must_use]
    pub fn api<S: AsRef<str>>(segments: &[S]) -> Self {
        let path: Vec<String> = std::iter::once(API_PREFIX.to_string())
            .chain(segments.iter().map(|s| s.as_ref().to_string()))
            .collect();
        Self {
            raw: format!("{BASE_URL_HOST}/{}", path.join("/")),
            host: vec![BASE_URL_HOST.to_string()],
            path,
        }
    }
}

/// Raw JSON request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
    pub options: BodyOptions,
}

impl Body {
    #[must_use]
    pub fn raw_json(raw: impl Into<String>) -> Self {
        Self {
            mode: "raw".to_string(),
            raw: raw.into(),
            options: BodyOptions {
                raw: RawOptions {
                    language: "json".to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyOptions {
    pub raw: RawOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOptions {
    pub language: String,
}

/// Collection-scoped variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Variable {
    #[must_use]
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind: "string".to_string(),
        }
    }
}
