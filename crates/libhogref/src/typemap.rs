//! Derivation of human-readable type names from declaration fragments,
//! including the source-to-canonical scalar mapping and shape detection.

use crate::docc::Fragment;

/// Sentinel returned when no type can be derived.
pub const ANY_TYPE: &str = "Any";

/// Source scalar types and their canonical names in the output format.
const SCALAR_MAP: &[(&str, &str)] = &[
    ("String", "string"),
    ("Int", "number"),
    ("Double", "number"),
    ("Float", "number"),
    ("Bool", "boolean"),
];

/// Punctuation admitted into a collected type string.
const TYPE_PUNCTUATION: &[&str] = &["?", "!", "[", "]", "|", "<", ">", ",", "(", ")", " "];

/// Tokens never part of the type position.
const NON_TYPE_TOKENS: &[&str] = &["=", "var", "let", ":"];

/// Lower-case identifiers accepted as type names despite the casing rule.
const SCALAR_NAMES: &[&str] = &["string", "number", "boolean", "null", "undefined"];

fn map_scalar(name: &str) -> &str {
    SCALAR_MAP
        .iter()
        .find(|(source, _)| *source == name)
        .map_or(name, |(_, canonical)| *canonical)
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

/// Derive a property's type from its declaration fragments.
///
/// Fragments follow a name-then-colon-then-type layout: everything up to
/// and including the first `:` token is skipped, then type-syntax tokens
/// are accumulated and the shape rules applied. With nothing collected,
/// falls back to the first capitalized identifier, then to [`ANY_TYPE`].
pub fn property_type(fragments: &[Fragment]) -> String {
    if fragments.is_empty() {
        return ANY_TYPE.to_string();
    }

    let mut parts: Vec<&str> = Vec::new();
    let mut past_colon = false;
    for fragment in fragments {
        let text = fragment.text.as_str();
        if !past_colon {
            if text == ":" {
                past_colon = true;
            }
            continue;
        }

        if fragment.kind == "typeIdentifier" {
            parts.push(text);
        } else if fragment.kind == "identifier"
            && !text.is_empty()
            && (starts_uppercase(text) || SCALAR_NAMES.contains(&text))
        {
            parts.push(text);
        } else if TYPE_PUNCTUATION.contains(&text) {
            parts.push(text);
        } else if !text.trim().is_empty() && !NON_TYPE_TOKENS.contains(&text) {
            // other relevant text, deduplicating immediate repeats
            if parts.last() != Some(&text) {
                parts.push(text);
            }
        }
    }

    if parts.is_empty() {
        return fallback_capitalized(fragments);
    }
    apply_shape(parts.concat().trim())
}

/// Apply the three shape rules, in priority order: trailing optional
/// marker, bracket-array form, plain scalar.
fn apply_shape(raw: &str) -> String {
    if let Some(base) = raw.strip_suffix('?') {
        return format!("{} | null", map_scalar(base.trim()));
    }
    if raw.starts_with('[') && raw.contains(']') {
        let inner = raw[1..].split(']').next().unwrap_or("");
        return format!("{}[]", map_scalar(inner.trim()));
    }
    map_scalar(raw).to_string()
}

fn fallback_capitalized(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .find(|fragment| {
            (fragment.kind == "identifier" || fragment.kind == "typeIdentifier")
                && starts_uppercase(&fragment.text)
        })
        .map_or_else(|| ANY_TYPE.to_string(), |fragment| fragment.text.clone())
}

/// Look up a specific parameter's type in a callable's fragments: the next
/// type-identifier token after the parameter's external-name token.
pub fn parameter_type(fragments: &[Fragment], name: &str) -> String {
    let mut found = false;
    for fragment in fragments {
        if fragment.kind == "externalParam" && fragment.text == name {
            found = true;
        } else if found && fragment.kind == "typeIdentifier" {
            return fragment.text.clone();
        }
    }
    ANY_TYPE.to_string()
}
