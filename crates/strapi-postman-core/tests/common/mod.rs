//! Fixture projects for integration tests
//!
//! Each [`Project`] lives in its own temporary directory that is removed on drop.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{json, Value};
use tempfile::TempDir;

pub struct Project {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Project {
    /// Empty project with an `src/api` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        fs::create_dir_all(root.join("src/api")).expect("create src/api");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn write_json(&self, relative: &str, value: &Value) -> &Self {
        self.write_raw(relative, &serde_json::to_string_pretty(value).expect("serialize"))
    }

    pub fn write_raw(&self, relative: &str, content: &str) -> &Self {
        let path = self.root.join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        fs::write(path, content).expect("write fixture");
        self
    }

    pub fn content_type(&self, api: &str, name: &str, schema: &Value) -> &Self {
        self.write_json(
            &format!("src/api/{api}/content-types/{name}/schema.json"),
            schema,
        )
    }

    pub fn component(&self, namespace: &str, name: &str, schema: &Value) -> &Self {
        self.write_json(&format!("src/components/{namespace}/{name}.json"), schema)
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// `article` collection type from the README example.
pub fn article_schema() -> Value {
    json!({
        "kind": "collectionType",
        "collectionName": "articles",
        "info": {
            "singularName": "article",
            "pluralName": "articles",
            "displayName": "Article"
        },
        "attributes": {
            "title": { "type": "string" },
            "views": { "type": "integer" }
        }
    })
}

pub fn global_schema() -> Value {
    json!({
        "kind": "singleType",
        "info": {
            "singularName": "global",
            "pluralName": "globals",
            "displayName": "Global"
        },
        "attributes": {
            "siteName": { "type": "string", "default": "My site" },
            "seo": { "type": "component", "component": "shared.seo" }
        }
    })
}

pub fn seo_component() -> Value {
    json!({
        "collectionName": "components_shared_seos",
        "info": { "displayName": "Seo" },
        "attributes": {
            "metaTitle": { "type": "string" },
            "metaImage": { "type": "media", "multiple": false }
        }
    })
}

/// Project with one collection type, one single type and one component.
pub fn blog_project() -> Project {
    let project = Project::new();
    project
        .content_type("article", "article", &article_schema())
        .content_type("global", "global", &global_schema())
        .component("shared", "seo", &seo_component());
    project
}
