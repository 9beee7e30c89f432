//! Strapi schema model
//!
//! Content-type and component schemas as they appear on disk, plus the typed
//! [`Attribute`] variant the synthesizer dispatches on.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use strum::{Display, EnumString};

/// Ordered attribute mapping; declaration order drives output order.
pub type Attributes = IndexMap<String, Attribute>;

/// Component identifier (`namespace.name`) to component schema.
pub type ComponentCatalog = IndexMap<String, ComponentSchema>;

/// The `type` discriminator of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AttributeKind {
    String,
    Text,
    RichText,
    Email,
    Password,
    Uid,
    Integer,
    BigInteger,
    Float,
    Decimal,
    Boolean,
    Json,
    Enumeration,
    Date,
    DateTime,
    Timestamp,
    Time,
    Media,
    Relation,
    Component,
    DynamicZone,
    /// Any type name the generator has no dedicated rule for
    #[strum(default)]
    Other(String),
}

/// Relation cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationKind {
    /// Whether the relation points at a list of records
    #[must_use]
    pub const fn is_to_many(self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

/// A single schema attribute with its kind-specific settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawAttribute")]
pub enum Attribute {
    /// `string`, `text` and `richtext`
    Text {
        default: Option<Value>,
    },
    Email,
    Password,
    Uid {
        target_field: Option<String>,
    },
    /// `integer` and `biginteger`
    Integer,
    /// `float` and `decimal`
    Float,
    Boolean,
    Json,
    Enumeration {
        values: Vec<String>,
    },
    Date,
    /// `datetime` and `timestamp`
    DateTime,
    Time,
    Media {
        multiple: bool,
    },
    Relation {
        /// `None` for polymorphic or unrecognized relation types
        relation: Option<RelationKind>,
    },
    Component {
        component: String,
        repeatable: bool,
    },
    DynamicZone {
        components: Vec<String>,
    },
    Other {
        type_name: String,
        default: Option<Value>,
    },
}

/// Attribute object exactly as written in a schema file.
///
/// Strapi keeps every setting on one flat object; [`Attribute`] only keeps the
/// fields relevant to its kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAttribute {
    #[serde(rename = "type", default)]
    type_name: String,
    #[serde(default)]
    default: Option<Value>,
    #[serde(rename = "enum", default)]
    enum_values: Vec<String>,
    #[serde(default)]
    target_field: Option<String>,
    #[serde(default)]
    multiple: bool,
    #[serde(default)]
    relation: Option<String>,
    #[serde(default)]
    component: Option<String>,
    #[serde(default)]
    repeatable: bool,
    #[serde(default)]
    components: Vec<String>,
}

impl From<RawAttribute> for Attribute {
    fn from(raw: RawAttribute) -> Self {
        // strum's default arm makes this parse infallible
        let kind = raw
            .type_name
            .parse::<AttributeKind>()
            .unwrap_or_else(|_| AttributeKind::Other(raw.type_name.clone()));

        match kind {
            AttributeKind::String | AttributeKind::Text | AttributeKind::RichText => Self::Text {
                default: raw.default,
            },
            AttributeKind::Email => Self::Email,
            AttributeKind::Password => Self::Password,
            AttributeKind::Uid => Self::Uid {
                target_field: raw.target_field.filter(|field| !field.is_empty()),
            },
            AttributeKind::Integer | AttributeKind::BigInteger => Self::Integer,
            AttributeKind::Float | AttributeKind::Decimal => Self::Float,
            AttributeKind::Boolean => Self::Boolean,
            AttributeKind::Json => Self::Json,
            AttributeKind::Enumeration => Self::Enumeration {
                values: raw.enum_values,
            },
            AttributeKind::Date => Self::Date,
            AttributeKind::DateTime | AttributeKind::Timestamp => Self::DateTime,
            AttributeKind::Time => Self::Time,
            AttributeKind::Media => Self::Media {
                multiple: raw.multiple,
            },
            AttributeKind::Relation => Self::Relation {
                relation: raw.relation.and_then(|r| r.parse().ok()),
            },
            AttributeKind::Component => Self::Component {
                component: raw.component.unwrap_or_default(),
                repeatable: raw.repeatable,
            },
            AttributeKind::DynamicZone => Self::DynamicZone {
                components: raw.components,
            },
            AttributeKind::Other(type_name) => Self::Other {
                type_name,
                default: raw.default,
            },
        }
    }
}

/// Whether a content type holds many records or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ContentTypeKind {
    #[default]
    CollectionType,
    SingleType,
}

/// Anything other than `singleType`, including `null`, is a collection.
impl<'de> Deserialize<'de> for ContentTypeKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.and_then(|s| s.parse().ok()).unwrap_or_default())
    }
}

/// The `info` block of a content-type schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeInfo {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub singular_name: Option<String>,
    #[serde(default)]
    pub plural_name: Option<String>,
}

/// `schema.json` of a content type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentTypeSchema {
    #[serde(default)]
    pub kind: ContentTypeKind,
    #[serde(default)]
    pub info: ContentTypeInfo,
    #[serde(default)]
    pub attributes: Attributes,
}

impl ContentTypeSchema {
    /// Build a schema in code rather than from a file.
    #[must_use]
    pub const fn new(kind: ContentTypeKind, info: ContentTypeInfo, attributes: Attributes) -> Self {
        Self {
            kind,
            info,
            attributes,
        }
    }
}

/// A component definition file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComponentSchema {
    #[serde(default)]
    pub attributes: Attributes,
}

/// A content type discovered under `src/api/<api>/content-types/<name>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentType {
    /// API directory the content type lives in
    pub api: String,
    /// Raw identifier: the content-type directory name
    pub name: String,
    pub schema: ContentTypeSchema,
}

impl ContentType {
    #[must_use]
    pub fn new(api: impl Into<String>, name: impl Into<String>, schema: ContentTypeSchema) -> Self {
        Self {
            api: api.into(),
            name: name.into(),
            schema,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ContentTypeKind {
        self.schema.kind
    }

    /// Key used to order content types: display name, else singular name,
    /// else identifier, lower-cased.
    #[must_use]
    pub fn sort_key(&self) -> String {
        let info = &self.schema.info;
        non_empty(info.display_name.as_deref())
            .or_else(|| non_empty(info.singular_name.as_deref()))
            .unwrap_or(&self.name)
            .to_lowercase()
    }
}

/// Treat empty strings in schema metadata as absent.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attr(value: Value) -> Attribute {
        match serde_json::from_value(value) {
            Ok(attribute) => attribute,
            Err(e) => panic!("attribute should parse: {e}"),
        }
    }

    #[test]
    fn test_kind_parses_every_known_type() {
        let names = [
            "string",
            "text",
            "richtext",
            "email",
            "password",
            "uid",
            "integer",
            "biginteger",
            "float",
            "decimal",
            "boolean",
            "json",
            "enumeration",
            "date",
            "datetime",
            "timestamp",
            "time",
            "media",
            "relation",
            "component",
            "dynamiczone",
        ];
        for name in names {
            let kind: AttributeKind = name.parse().unwrap_or(AttributeKind::Other(String::new()));
            assert!(!matches!(kind, AttributeKind::Other(_)), "{name}");
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_other() {
        let parsed = attr(json!({ "type": "customField", "default": "x" }));
        assert_eq!(
            parsed,
            Attribute::Other {
                type_name: "customField".to_string(),
                default: Some(json!("x")),
            }
        );
    }

    #[test]
    fn test_relation_subtypes() {
        let to_one = attr(json!({ "type": "relation", "relation": "manyToOne" }));
        assert_eq!(
            to_one,
            Attribute::Relation {
                relation: Some(RelationKind::ManyToOne)
            }
        );

        let morph = attr(json!({ "type": "relation", "relation": "morphToMany" }));
        assert_eq!(morph, Attribute::Relation { relation: None });
        assert!(RelationKind::ManyToMany.is_to_many());
        assert!(!RelationKind::OneToOne.is_to_many());
    }

    #[test]
    fn test_component_fields() {
        let parsed = attr(json!({
            "type": "component",
            "component": "shared.seo",
            "repeatable": true
        }));
        assert_eq!(
            parsed,
            Attribute::Component {
                component: "shared.seo".to_string(),
                repeatable: true,
            }
        );
    }

    #[test]
    fn test_content_type_schema_preserves_attribute_order() {
        let schema: ContentTypeSchema = match serde_json::from_value(json!({
            "kind": "collectionType",
            "info": { "singularName": "article", "pluralName": "articles" },
            "attributes": {
                "zeta": { "type": "string" },
                "alpha": { "type": "integer" },
                "mid": { "type": "boolean" }
            }
        })) {
            Ok(schema) => schema,
            Err(e) => panic!("schema should parse: {e}"),
        };

        let names: Vec<&str> = schema.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
        assert_eq!(schema.kind, ContentTypeKind::CollectionType);
    }

    #[test]
    fn test_unknown_or_missing_kind_is_collection() {
        for value in [
            json!({}),
            json!({ "kind": null }),
            json!({ "kind": "somethingElse" }),
        ] {
            let schema: ContentTypeSchema = match serde_json::from_value(value) {
                Ok(schema) => schema,
                Err(e) => panic!("schema should parse: {e}"),
            };
            assert_eq!(schema.kind, ContentTypeKind::CollectionType);
        }
    }

    #[test]
    fn test_sort_key_prefers_display_name() {
        let info = ContentTypeInfo {
            display_name: Some("Blog Post".to_string()),
            singular_name: Some("post".to_string()),
            ..ContentTypeInfo::default()
        };
        let ct = ContentType::new(
            "post",
            "post",
            ContentTypeSchema::new(ContentTypeKind::CollectionType, info, Attributes::new()),
        );
        assert_eq!(ct.sort_key(), "blog post");

        let bare = ContentType::new(
            "faq",
            "Faq",
            ContentTypeSchema::new(
                ContentTypeKind::SingleType,
                ContentTypeInfo::default(),
                Attributes::new(),
            ),
        );
        assert_eq!(bare.sort_key(), "faq");
    }
}
