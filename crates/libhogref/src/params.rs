//! Parameter extraction for callable symbols: a tiered fallback over an
//! explicit parameters section, declaration fragments, and name synthesis.

use crate::docc::{ContentSection, Fragment, SourceDocument};
use crate::output::Parameter;
use crate::text;
use crate::typemap;

/// Derive the ordered parameter list for a callable.
///
/// Tiers, first success wins: the deep-loaded document's explicit
/// parameters section; reconstruction from declaration fragments; an empty
/// list. Explicit entries are authoritative; fragments only supply the
/// type their own declaration lacks.
pub fn extract(
    method_doc: Option<&SourceDocument>,
    fragments: &[Fragment],
    method_title: &str,
) -> Vec<Parameter> {
    if let Some(doc) = method_doc {
        if let Some(params) = from_parameter_section(doc, fragments) {
            return params;
        }
    }
    if !fragments.is_empty() {
        return from_fragments(fragments, method_title);
    }
    Vec::new()
}

fn from_parameter_section(
    doc: &SourceDocument,
    fragments: &[Fragment],
) -> Option<Vec<Parameter>> {
    let entries = doc
        .primary_content_sections
        .iter()
        .find_map(|section| match section {
            ContentSection::Parameters { parameters } => Some(parameters),
            _ => None,
        })?;
    if entries.is_empty() {
        return None;
    }

    let params = entries
        .iter()
        .map(|entry| {
            let description = text::items_text(&entry.content);
            let param_type = if fragments.is_empty() {
                typemap::ANY_TYPE.to_string()
            } else {
                typemap::parameter_type(fragments, &entry.name)
            };
            let is_optional = param_type.contains('?');
            Parameter {
                name: entry.name.clone(),
                param_type,
                description,
                is_optional,
            }
        })
        .collect();
    Some(params)
}

/// Reconstruct parameters by scanning the parenthesized region of the
/// declaration: an external-name token opens a pending parameter, the next
/// type-identifier token closes one out, named or not.
fn from_fragments(fragments: &[Fragment], method_title: &str) -> Vec<Parameter> {
    let mut params = Vec::new();
    let mut in_parens = false;
    let mut pending_name: Option<String> = None;
    let mut index = 0usize;

    for fragment in fragments {
        let text = fragment.text.as_str();
        if !in_parens {
            if text == "(" {
                in_parens = true;
            }
            continue;
        }
        if text == ")" {
            break;
        }

        if fragment.kind == "externalParam" {
            pending_name = Some(text.to_string());
        } else if fragment.kind == "typeIdentifier" {
            let name = pending_name
                .take()
                .unwrap_or_else(|| infer_name(method_title, index));
            let description = format!("The {name} parameter");
            params.push(Parameter {
                name,
                param_type: text.to_string(),
                description,
                is_optional: text.contains('?'),
            });
            index += 1;
        }
    }

    params
}

/// Synthesize a name for an unnamed positional parameter from the
/// callable's base name and the parameter's index.
pub fn infer_name(method_title: &str, index: usize) -> String {
    if method_title.is_empty() {
        return format!("param{index}");
    }
    let base = method_title
        .split('(')
        .next()
        .unwrap_or(method_title)
        .to_lowercase();

    if base.contains("alias") {
        "alias".to_string()
    } else if base.contains("identify") {
        "distinctId".to_string()
    } else if base.contains("capture") {
        if index == 0 { "event" } else { "properties" }.to_string()
    } else if base.contains("screen") {
        if index == 0 { "name" } else { "properties" }.to_string()
    } else if base.contains("group") {
        if index == 0 { "type" } else { "key" }.to_string()
    } else {
        format!("param{index}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frag(kind: &str, text: &str) -> Fragment {
        Fragment {
            text: text.to_string(),
            kind: kind.to_string(),
        }
    }

    fn capture_fragments() -> Vec<Fragment> {
        vec![
            frag("keyword", "func"),
            frag("identifier", "capture"),
            frag("text", "("),
            frag("externalParam", "event"),
            frag("text", ": "),
            frag("typeIdentifier", "String"),
            frag("text", ", "),
            frag("externalParam", "properties"),
            frag("text", ": "),
            frag("typeIdentifier", "[String: Any]?"),
            frag("text", ")"),
        ]
    }

    #[test]
    fn named_fragment_pairs_become_parameters() {
        let params = extract(None, &capture_fragments(), "capture(event:properties:)");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "event");
        assert_eq!(params[0].param_type, "String");
        assert_eq!(params[0].description, "The event parameter");
        assert!(!params[0].is_optional);
        assert_eq!(params[1].name, "properties");
        assert_eq!(params[1].param_type, "[String: Any]?");
        assert!(params[1].is_optional);
    }

    #[test]
    fn unnamed_positional_parameters_get_synthesized_names() {
        let fragments = vec![
            frag("identifier", "capture"),
            frag("text", "("),
            frag("typeIdentifier", "String"),
            frag("text", ", "),
            frag("typeIdentifier", "[String: Any]"),
            frag("text", ")"),
        ];
        let params = extract(None, &fragments, "capture(_:_:)");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "event");
        assert_eq!(params[1].name, "properties");
    }

    #[test]
    fn tokens_outside_the_parenthesized_region_are_ignored() {
        let fragments = vec![
            frag("typeIdentifier", "PostHogSDK"),
            frag("text", "("),
            frag("externalParam", "config"),
            frag("typeIdentifier", "PostHogConfig"),
            frag("text", ")"),
            frag("text", " -> "),
            frag("typeIdentifier", "Void"),
        ];
        let params = extract(None, &fragments, "setup(_:)");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "config");
        assert_eq!(params[0].param_type, "PostHogConfig");
    }

    #[test]
    fn explicit_parameter_section_wins_over_fragments() {
        let doc: SourceDocument = serde_json::from_str(
            r#"{
                "primaryContentSections": [{
                    "kind": "parameters",
                    "parameters": [{
                        "name": "event",
                        "content": [{"type": "paragraph", "inlineContent": [
                            {"type": "text", "text": "The event name to capture."}
                        ]}]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let params = extract(Some(&doc), &capture_fragments(), "capture(event:properties:)");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "event");
        assert_eq!(params[0].description, "The event name to capture.");
        // only the type is filled in from the declaration fragments
        assert_eq!(params[0].param_type, "String");
    }

    #[test]
    fn explicit_section_without_fragments_falls_back_to_any_type() {
        let doc: SourceDocument = serde_json::from_str(
            r#"{
                "primaryContentSections": [{
                    "kind": "parameters",
                    "parameters": [{"name": "event", "content": []}]
                }]
            }"#,
        )
        .unwrap();

        let params = extract(Some(&doc), &[], "capture(event:)");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].param_type, "Any");
        assert_eq!(params[0].description, "");
    }

    #[test]
    fn empty_parameter_section_defers_to_fragments() {
        let doc: SourceDocument = serde_json::from_str(
            r#"{"primaryContentSections": [{"kind": "parameters", "parameters": []}]}"#,
        )
        .unwrap();
        let params = extract(Some(&doc), &capture_fragments(), "capture(event:properties:)");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn nothing_available_yields_an_empty_list() {
        assert!(extract(None, &[], "capture()").is_empty());
    }

    #[test]
    fn name_synthesis_rules() {
        assert_eq!(infer_name("alias(_:)", 0), "alias");
        assert_eq!(infer_name("identify(_:)", 0), "distinctId");
        assert_eq!(infer_name("capture(_:_:)", 0), "event");
        assert_eq!(infer_name("capture(_:_:)", 1), "properties");
        assert_eq!(infer_name("screen(_:_:)", 0), "name");
        assert_eq!(infer_name("screen(_:_:)", 1), "properties");
        assert_eq!(infer_name("group(_:_:)", 0), "type");
        assert_eq!(infer_name("group(_:_:)", 1), "key");
        assert_eq!(infer_name("flush()", 0), "param0");
        assert_eq!(infer_name("", 2), "param2");
    }
}
