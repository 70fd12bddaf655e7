//! Output-side data model: the consolidated reference document consumed by
//! the documentation website. Field declaration order matches the emission
//! order of the published format.

use serde::Serialize;

use crate::category;

/// One resolved parameter of a callable symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
    #[serde(rename = "isOptional")]
    pub is_optional: bool,
}

/// One extracted property of a type-like symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub property_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A synthesized usage example attached to a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodExample {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// Return type descriptor for a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnType {
    pub id: String,
    pub name: String,
}

impl ReturnType {
    /// The default return type when nothing more specific is known.
    pub fn void() -> Self {
        Self::named("Void")
    }

    /// A return type whose id and name are the same token.
    pub fn named(name: &str) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
        }
    }
}

/// One callable member of a class.
#[derive(Debug, Clone, Serialize)]
pub struct Method {
    pub category: String,
    pub description: String,
    pub id: String,
    #[serde(rename = "showDocs")]
    pub show_docs: bool,
    pub title: String,
    #[serde(rename = "releaseTag")]
    pub release_tag: String,
    pub params: Vec<Parameter>,
    #[serde(rename = "returnType")]
    pub return_type: ReturnType,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throws: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<MethodExample>>,
}

/// An enum, struct, or the configuration object, listed under `types`.
#[derive(Debug, Clone, Serialize)]
pub struct TypeEntry {
    pub id: String,
    pub name: String,
    pub properties: Vec<Property>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// A public class and its callable members.
#[derive(Debug, Clone, Serialize)]
pub struct ClassEntry {
    pub description: String,
    pub id: String,
    pub title: String,
    pub functions: Vec<Method>,
}

/// Fixed descriptive header of the output document.
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub version: String,
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "slugPrefix")]
    pub slug_prefix: String,
    #[serde(rename = "specUrl")]
    pub spec_url: String,
}

/// The consolidated reference document.
#[derive(Debug, Clone, Serialize)]
pub struct OutputDocument {
    pub id: String,
    #[serde(rename = "hogRef")]
    pub hog_ref: String,
    pub info: Info,
    pub classes: Vec<ClassEntry>,
    pub types: Vec<TypeEntry>,
    pub categories: Vec<String>,
}

impl OutputDocument {
    /// The constant envelope with empty registries; `version` is the only
    /// caller-supplied field.
    pub fn new(version: &str) -> Self {
        Self {
            id: "posthog-ios".to_string(),
            hog_ref: "0.3".to_string(),
            info: Info {
                version: version.to_string(),
                id: "posthog-ios".to_string(),
                title: "PostHog iOS SDK".to_string(),
                description: "PostHog iOS SDK allows you to automatically capture usage and send \
                              events to PostHog from iOS applications."
                    .to_string(),
                slug_prefix: "posthog-ios".to_string(),
                spec_url: "https://github.com/PostHog/posthog-ios".to_string(),
            },
            classes: Vec::new(),
            types: Vec::new(),
            categories: category::CATEGORIES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}
