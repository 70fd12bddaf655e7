//! Synthesis of illustrative usage examples: a single invocation per
//! method, a declaration snippet per enum, and the multi-line
//! initialization example for the configuration object.

use crate::docc::{ContentSection, SourceDocument};
use crate::members::EnumCase;
use crate::output::{MethodExample, Parameter};
use crate::resolver::{self, DocStore};
use crate::text;
use crate::typemap;

/// Suffix identifying singleton entry-point types addressed via `.shared`.
const SINGLETON_SUFFIX: &str = "SDK";

const CONFIG_INIT_LINE: &str =
    "let config = PostHogConfig(apiKey: <ph_project_api_key>, host: <ph_app_host>)";
const CONFIG_ACTIVATE_LINE: &str = "PostHogSDK.shared.setup(config)";

/// Title of the topic sections contributing configuration assignments.
const INSTANCE_PROPERTIES_SECTION: &str = "Instance Properties";

/// The instance expression examples invoke methods on.
pub fn instance_expr(type_name: &str) -> String {
    if type_name.is_empty() {
        return "instance".to_string();
    }
    if type_name.ends_with(SINGLETON_SUFFIX) {
        return format!("{type_name}.shared");
    }
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) if chars.as_str().is_empty() => first.to_lowercase().to_string(),
        Some(first) => format!("{}{}", first.to_lowercase(), chars.as_str()),
        None => "instance".to_string(),
    }
}

/// Synthesize the single invocation example for a method.
pub fn method_example(
    method_name: &str,
    params: &[Parameter],
    type_name: &str,
) -> MethodExample {
    let instance = instance_expr(type_name);
    let code = if params.is_empty() {
        format!("{instance}.{method_name}()")
    } else {
        let rendered: Vec<String> = params
            .iter()
            .map(|param| format!("{}: {}", param.name, placeholder(param)))
            .collect();
        format!("{instance}.{method_name}({})", rendered.join(", "))
    };

    MethodExample {
        id: format!("basic_{method_name}"),
        name: format!("Basic {method_name}"),
        code,
    }
}

/// Placeholder literal for a parameter, by type-name pattern, checked in
/// priority order. The collection check runs before the scalar checks:
/// dictionary- and array-typed parameters always get an empty-collection
/// literal.
fn placeholder(param: &Parameter) -> String {
    let ty = param.param_type.as_str();
    if ty.contains('[') {
        "[]".to_string()
    } else if ty.contains("String") {
        format!("\"{}_value\"", param.name)
    } else if ty.contains("Int") || ty.contains("Double") || ty.contains("Float") {
        "0".to_string()
    } else if ty.contains("Bool") {
        "true".to_string()
    } else {
        format!("\"{}_value\"", param.name)
    }
}

/// Declaration-style example for an enumeration.
pub fn enum_example(title: &str, cases: &[EnumCase]) -> String {
    if cases.is_empty() {
        return format!("enum {title} {{\n    // cases\n}}");
    }
    let body = cases
        .iter()
        .map(|case| format!("case {}", case.name))
        .collect::<Vec<_>>()
        .join("\n    ");
    format!("enum {title} {{\n    {body}\n}}")
}

/// Example for a property-less struct: a code-voice snippet scavenged from
/// the document's content, else a bare constructor call.
pub fn struct_example(title: &str, doc: &SourceDocument) -> String {
    text::first_code_voice(&doc.primary_content_sections)
        .unwrap_or_else(|| format!("{title}()"))
}

/// Multi-line initialization-and-assignment example for the configuration
/// object: the fixed constructor line, one assignment per mutable instance
/// property in declaration order, and the fixed activation call.
pub fn config_example(doc: &SourceDocument, store: &DocStore) -> String {
    let mut lines = vec![CONFIG_INIT_LINE.to_string()];

    for section in &doc.topic_sections {
        if section.title.as_deref() != Some(INSTANCE_PROPERTIES_SECTION) {
            continue;
        }
        for identifier in &section.identifiers {
            let Some(reference) = resolver::lookup(&doc.references, identifier) else {
                continue;
            };
            let mutable = reference
                .fragments
                .iter()
                .any(|fragment| fragment.kind == "keyword" && fragment.text == "var");
            if !mutable {
                continue;
            }

            let declared = store
                .load(identifier)
                .and_then(|sibling| declared_type(&sibling))
                .unwrap_or_else(|| typemap::ANY_TYPE.to_string());
            lines.push(format!("config.{} = <{declared}>", reference.title));
        }
    }

    lines.push(CONFIG_ACTIVATE_LINE.to_string());
    lines.join("\n")
}

/// The declared type of a property: tokens of its first declaration list
/// after the first colon-bearing token, up to a comma.
fn declared_type(doc: &SourceDocument) -> Option<String> {
    for section in &doc.primary_content_sections {
        let ContentSection::Declarations { declarations } = section else {
            continue;
        };
        let Some(declaration) = declarations.first() else {
            continue;
        };

        let mut past_colon = false;
        let mut parts: Vec<&str> = Vec::new();
        for token in &declaration.tokens {
            if !past_colon {
                if token.text.contains(':') {
                    past_colon = true;
                }
                continue;
            }
            if token.text.trim() == "," {
                break;
            }
            if token.kind == "typeIdentifier" || token.kind == "text" {
                parts.push(&token.text);
            }
        }

        let joined = parts.concat().trim().to_string();
        if !joined.is_empty() {
            return Some(joined);
        }
    }
    None
}
