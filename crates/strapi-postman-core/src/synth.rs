//! Example value synthesis
//!
//! Turns schema attributes into a representative JSON payload. Output is
//! deterministic: the same schemas always produce the same example.
//!
//! Components may reference each other (or themselves). Recursion is bounded by
//! [`MAX_DEPTH`]: anything deeper is emitted as `null`.

use serde_json::{json, Map, Value};
use tracing::{trace, warn};

use crate::schema::{Attribute, Attributes, ComponentCatalog};

/// Deepest nesting level that is still synthesized (root is level 0).
pub const MAX_DEPTH: usize = 4;

/// Discriminator key Strapi uses for dynamic-zone entries.
pub const COMPONENT_KEY: &str = "__component";

const EMAIL_EXAMPLE: &str = "user@example.com";
const PASSWORD_EXAMPLE: &str = "P@ssw0rd123";
const DATE_EXAMPLE: &str = "2024-01-01";
const DATETIME_EXAMPLE: &str = "2024-01-01T00:00:00.000Z";
const TIME_EXAMPLE: &str = "12:00:00.000";

/// Upper-case the first letter of each `-`, `_` or whitespace separated word
/// and join the words with single spaces.
///
/// ```
/// use strapi_postman_core::synth::titleize;
///
/// assert_eq!(titleize("hero_banner"), "Hero Banner");
/// assert_eq!(titleize("blog-post"), "Blog Post");
/// ```
#[must_use]
pub fn titleize(value: &str) -> String {
    value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Synthesize an example object for a set of attributes.
///
/// Keys appear in declaration order.
#[must_use]
pub fn synthesize(attributes: &Attributes, catalog: &ComponentCatalog, depth: usize) -> Map<String, Value> {
    attributes
        .iter()
        .map(|(name, attribute)| {
            (
                name.clone(),
                synthesize_attribute(name, attribute, catalog, depth),
            )
        })
        .collect()
}

/// Synthesize the example value of one attribute at the given depth.
#[must_use]
pub fn synthesize_attribute(
    name: &str,
    attribute: &Attribute,
    catalog: &ComponentCatalog,
    depth: usize,
) -> Value {
    if depth > MAX_DEPTH {
        trace!(attribute = name, depth, "depth limit reached");
        return Value::Null;
    }

    match attribute {
        Attribute::Text { default, .. } | Attribute::Other { default, .. } => default
            .clone()
            .unwrap_or_else(|| Value::String(format!("{} value", label(name)))),
        Attribute::Email => json!(EMAIL_EXAMPLE),
        Attribute::Password => json!(PASSWORD_EXAMPLE),
        Attribute::Uid { target_field } => {
            let prefix = target_field
                .as_deref()
                .map_or_else(String::new, |field| format!("{field}-"));
            Value::String(format!("{prefix}sample-{name}"))
        }
        Attribute::Integer => json!(0),
        Attribute::Float => json!(0.0),
        Attribute::Boolean => json!(false),
        Attribute::Json => json!({}),
        Attribute::Enumeration { values } => values.first().map_or_else(
            || Value::String(format!("{} option", label(name))),
            |first| Value::String(first.clone()),
        ),
        Attribute::Date => json!(DATE_EXAMPLE),
        Attribute::DateTime => json!(DATETIME_EXAMPLE),
        Attribute::Time => json!(TIME_EXAMPLE),
        Attribute::Media { multiple } => one_or_list(*multiple),
        Attribute::Relation { relation } => {
            relation.map_or(Value::Null, |kind| one_or_list(kind.is_to_many()))
        }
        Attribute::Component {
            component,
            repeatable,
        } => component_example(component, *repeatable, catalog, depth + 1),
        Attribute::DynamicZone { components } => {
            dynamic_zone_example(components, catalog, depth + 1)
        }
    }
}

fn label(name: &str) -> String {
    if name.is_empty() {
        titleize("field")
    } else {
        titleize(name)
    }
}

/// Reference id `1`, or `[1]` for list-valued attributes.
fn one_or_list(many: bool) -> Value {
    if many {
        json!([1])
    } else {
        json!(1)
    }
}

fn component_example(
    component: &str,
    repeatable: bool,
    catalog: &ComponentCatalog,
    depth: usize,
) -> Value {
    let Some(schema) = catalog.get(component) else {
        warn!(component, "component not found in catalog");
        return if repeatable { json!([]) } else { json!({}) };
    };

    trace!(component, depth, "descending into component");
    let value = Value::Object(synthesize(&schema.attributes, catalog, depth));
    if repeatable {
        Value::Array(vec![value])
    } else {
        value
    }
}

/// Only the first candidate component is sampled.
fn dynamic_zone_example(components: &[String], catalog: &ComponentCatalog, depth: usize) -> Value {
    let Some(first) = components.first() else {
        return json!([]);
    };

    let mut entry = Map::new();
    entry.insert(COMPONENT_KEY.to_string(), Value::String(first.clone()));

    match catalog.get(first) {
        Some(schema) => {
            trace!(component = %first, depth, "descending into dynamic zone");
            entry.extend(synthesize(&schema.attributes, catalog, depth));
        }
        None => warn!(component = %first, "dynamic zone component not found in catalog"),
    }

    Value::Array(vec![Value::Object(entry)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ComponentSchema;

    fn attributes(pairs: Vec<(&str, Attribute)>) -> Attributes {
        pairs
            .into_iter()
            .map(|(name, attribute)| (name.to_string(), attribute))
            .collect()
    }

    fn text() -> Attribute {
        Attribute::Text { default: None }
    }

    fn component(id: &str, repeatable: bool) -> Attribute {
        Attribute::Component {
            component: id.to_string(),
            repeatable,
        }
    }

    #[test]
    fn test_titleize() {
        assert_eq!(titleize("subtitle"), "Subtitle");
        assert_eq!(titleize("hero_banner-image"), "Hero Banner Image");
        assert_eq!(titleize("  spaced  out "), "Spaced Out");
        assert_eq!(titleize("alreadyCamel"), "AlreadyCamel");
        assert_eq!(titleize(""), "");
    }

    #[test]
    fn test_literal_per_kind() {
        let catalog = ComponentCatalog::new();
        let cases = [
            ("subtitle", json!({ "type": "string" }), json!("Subtitle value")),
            ("summary", json!({ "type": "text" }), json!("Summary value")),
            ("body", json!({ "type": "richtext", "default": "Hello" }), json!("Hello")),
            ("body", json!({ "type": "richtext" }), json!("Body value")),
            ("contact", json!({ "type": "email" }), json!("user@example.com")),
            ("secret", json!({ "type": "password" }), json!("P@ssw0rd123")),
            (
                "slug",
                json!({ "type": "uid", "targetField": "title" }),
                json!("title-sample-slug"),
            ),
            ("slug", json!({ "type": "uid" }), json!("sample-slug")),
            ("count", json!({ "type": "integer" }), json!(0)),
            ("total", json!({ "type": "biginteger" }), json!(0)),
            ("ratio", json!({ "type": "float" }), json!(0.0)),
            ("price", json!({ "type": "decimal" }), json!(0.0)),
            ("active", json!({ "type": "boolean" }), json!(false)),
            ("meta", json!({ "type": "json" }), json!({})),
            (
                "status",
                json!({ "type": "enumeration", "enum": ["draft", "published"] }),
                json!("draft"),
            ),
            ("tone", json!({ "type": "enumeration", "enum": [] }), json!("Tone option")),
            ("day", json!({ "type": "date" }), json!("2024-01-01")),
            (
                "published_at",
                json!({ "type": "datetime" }),
                json!("2024-01-01T00:00:00.000Z"),
            ),
            (
                "archived_at",
                json!({ "type": "timestamp" }),
                json!("2024-01-01T00:00:00.000Z"),
            ),
            ("opens", json!({ "type": "time" }), json!("12:00:00.000")),
            ("cover", json!({ "type": "media" }), json!(1)),
            ("gallery", json!({ "type": "media", "multiple": true }), json!([1])),
            ("author", json!({ "type": "relation", "relation": "oneToOne" }), json!(1)),
            ("category", json!({ "type": "relation", "relation": "manyToOne" }), json!(1)),
            ("comments", json!({ "type": "relation", "relation": "oneToMany" }), json!([1])),
            ("tags", json!({ "type": "relation", "relation": "manyToMany" }), json!([1])),
            ("target", json!({ "type": "relation", "relation": "morphToOne" }), Value::Null),
            (
                "seo",
                json!({ "type": "component", "component": "shared.missing" }),
                json!({}),
            ),
            (
                "links",
                json!({ "type": "component", "component": "shared.missing", "repeatable": true }),
                json!([]),
            ),
            ("blocks", json!({ "type": "dynamiczone", "components": [] }), json!([])),
            (
                "blocks",
                json!({ "type": "dynamiczone", "components": ["shared.gone"] }),
                json!([{ "__component": "shared.gone" }]),
            ),
            ("color", json!({ "type": "customField" }), json!("Color value")),
            ("color", json!({ "type": "customField", "default": "#fff" }), json!("#fff")),
        ];

        for (name, descriptor, expected) in cases {
            let attribute: Attribute = match serde_json::from_value(descriptor.clone()) {
                Ok(attribute) => attribute,
                Err(e) => panic!("{descriptor} should parse: {e}"),
            };
            assert_eq!(
                synthesize_attribute(name, &attribute, &catalog, 0),
                expected,
                "{name}: {descriptor}"
            );
        }
    }

    #[test]
    fn test_component_and_dynamic_zone_expand() {
        let mut catalog = ComponentCatalog::new();
        catalog.insert(
            "shared.seo".to_string(),
            ComponentSchema {
                attributes: attributes(vec![("metaTitle", text())]),
            },
        );

        let attrs = attributes(vec![
            ("seo", component("shared.seo", false)),
            ("seos", component("shared.seo", true)),
            (
                "blocks",
                Attribute::DynamicZone {
                    components: vec!["shared.seo".to_string(), "shared.other".to_string()],
                },
            ),
            (
                "unknown_zone",
                Attribute::DynamicZone {
                    components: vec!["shared.gone".to_string()],
                },
            ),
        ]);

        let value = Value::Object(synthesize(&attrs, &catalog, 0));
        assert_eq!(
            value,
            json!({
                "seo": { "metaTitle": "MetaTitle value" },
                "seos": [{ "metaTitle": "MetaTitle value" }],
                "blocks": [{ "__component": "shared.seo", "metaTitle": "MetaTitle value" }],
                "unknown_zone": [{ "__component": "shared.gone" }]
            })
        );
    }

    #[test]
    fn test_self_referencing_component_is_cut_at_depth_limit() {
        let mut catalog = ComponentCatalog::new();
        catalog.insert(
            "tree.node".to_string(),
            ComponentSchema {
                attributes: attributes(vec![
                    ("label", text()),
                    ("child", component("tree.node", false)),
                ]),
            },
        );

        let attrs = attributes(vec![("root", component("tree.node", false))]);
        let value = Value::Object(synthesize(&attrs, &catalog, 0));

        // Levels 1..=4 are expanded; the attributes of level 5 are null.
        let mut cursor = &value["root"];
        for _ in 1..MAX_DEPTH {
            assert_eq!(cursor["label"], json!("Label value"));
            cursor = &cursor["child"];
        }
        assert_eq!(cursor["label"], json!("Label value"));
        assert_eq!(cursor["child"], json!({ "label": null, "child": null }));
    }

    #[test]
    fn test_attributes_past_limit_are_null() {
        let catalog = ComponentCatalog::new();
        assert_eq!(
            synthesize_attribute("title", &text(), &catalog, MAX_DEPTH + 1),
            Value::Null
        );
        assert_eq!(
            synthesize_attribute("title", &text(), &catalog, MAX_DEPTH),
            json!("Title value")
        );
    }

    #[test]
    fn test_output_keeps_declaration_order() {
        let catalog = ComponentCatalog::new();
        let attrs = attributes(vec![
            ("zeta", text()),
            ("alpha", Attribute::Boolean),
            ("mid", Attribute::Json),
        ]);
        let keys: Vec<String> = synthesize(&attrs, &catalog, 0).keys().cloned().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }
}
