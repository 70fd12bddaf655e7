//! Member classification for type-like symbols: property lists for structs
//! and case lists for enumerations.

use tracing::debug;

use crate::docc::{Reference, SourceDocument};
use crate::output::Property;
use crate::resolver::{self, DocStore};
use crate::text;
use crate::typemap;

/// Descriptor kinds that disqualify a member from property extraction.
const NON_PROPERTY_KINDS: &[&str] = &["method", "initializer", "func", "enum.case", "subscript"];

/// Exact title of the topic section holding enumeration cases.
const ENUM_CASES_SECTION: &str = "Enumeration Cases";

/// A single case of an enumeration symbol. Feeds declaration-example
/// synthesis; never serialized directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    pub name: String,
    pub description: Option<String>,
}

/// Extract the property list of a type-like symbol.
///
/// Walks every titled topic section, dropping members whose kind marks a
/// callable and members without a binding keyword or colon-bearing
/// fragment. Shallow descriptions are upgraded from the property's own
/// sibling document when it carries long-form content.
pub fn properties(doc: &SourceDocument, store: &DocStore) -> Vec<Property> {
    let mut properties = Vec::new();

    for section in &doc.topic_sections {
        if section.title.as_deref().unwrap_or("").is_empty() || section.identifiers.is_empty() {
            continue;
        }
        for identifier in &section.identifiers {
            let Some(reference) = resolver::lookup(&doc.references, identifier) else {
                continue;
            };
            if !is_property(reference) {
                continue;
            }

            debug!(property = %reference.title, "extracting property");

            let property_type = typemap::property_type(&reference.fragments);
            let mut description = text::plain(reference.abstract_.as_ref());
            if let Some(deep) = store
                .load(identifier)
                .and_then(|sibling| text::content_text(&sibling.primary_content_sections))
            {
                description = deep;
            }

            properties.push(Property {
                property_type,
                name: reference.title.clone(),
                description: (!description.is_empty()).then_some(description),
            });
        }
    }

    properties
}

fn is_property(reference: &Reference) -> bool {
    if NON_PROPERTY_KINDS
        .iter()
        .any(|kind| reference.kind.contains(kind))
    {
        return false;
    }
    let has_binding = reference.fragments.iter().any(|fragment| {
        fragment.text == "var" || fragment.text == "let" || fragment.text.contains(':')
    });
    has_binding || reference.kind.to_lowercase().contains("property")
}

/// Extract the case list of an enumeration symbol, restricted to the
/// "Enumeration Cases" topic section.
pub fn enum_cases(doc: &SourceDocument, store: &DocStore) -> Vec<EnumCase> {
    let mut cases = Vec::new();

    for section in &doc.topic_sections {
        if section.title.as_deref() != Some(ENUM_CASES_SECTION) || section.identifiers.is_empty() {
            continue;
        }
        debug!(
            count = section.identifiers.len(),
            "found enumeration cases section"
        );
        for identifier in &section.identifiers {
            let Some(reference) = resolver::lookup(&doc.references, identifier) else {
                continue;
            };
            let Some(name) = case_name(reference) else {
                continue;
            };

            let mut description = text::plain(reference.abstract_.as_ref());
            if let Some(deep) = store
                .load(identifier)
                .and_then(|sibling| text::content_text(&sibling.primary_content_sections))
            {
                description = deep;
            }

            cases.push(EnumCase {
                name,
                description: (!description.is_empty()).then_some(description),
            });
        }
    }

    cases
}

/// The case name is the identifier fragment following the `case` keyword;
/// failing that, the last dot-separated segment of the case's title.
fn case_name(reference: &Reference) -> Option<String> {
    let mut saw_case_keyword = false;
    for fragment in &reference.fragments {
        if fragment.kind == "keyword" && fragment.text == "case" {
            saw_case_keyword = true;
        } else if saw_case_keyword && fragment.kind == "identifier" {
            return Some(fragment.text.clone());
        }
    }

    if reference.title.is_empty() {
        return None;
    }
    let name = reference
        .title
        .rsplit('.')
        .next()
        .unwrap_or(&reference.title);
    Some(name.to_string())
}
