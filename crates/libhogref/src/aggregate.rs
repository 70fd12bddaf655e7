//! Directory walk and aggregation: enumerate candidate documents, classify
//! each into a symbol record, and fold the records into the consolidated
//! output document.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::category;
use crate::docc::{DocumentKind, ProseSection, Reference, SourceDocument};
use crate::error::{HogRefError, Result};
use crate::example;
use crate::members;
use crate::output::{ClassEntry, Method, OutputDocument, ReturnType, TypeEntry};
use crate::params;
use crate::resolver::{self, DocStore};
use crate::text;

/// Namespace token a candidate filename must contain.
const NAMESPACE_TOKEN: &str = "posthog";

/// Fixed subdirectory of the archive holding the per-symbol documents.
const DATA_SUBDIR: &str = "posthog";

/// Marker required in a class title for the class to be published.
const CLASS_MARKER: &str = "PostHog";

/// The distinguished configuration-object type, routed into `types`.
const CONFIG_TYPE: &str = "PostHogConfig";

/// Internal implementation types excluded from the output entirely.
const INTERNAL_TYPES: &[&str] = &["PostHogStorageManager"];

/// A classified symbol produced by the walk. The fold step owns
/// deduplication and ordering; the walk stays a pure producer.
#[derive(Debug, Clone)]
enum SymbolRecord {
    Class(ClassEntry),
    Type(TypeEntry),
}

impl SymbolRecord {
    fn title(&self) -> &str {
        match self {
            Self::Class(entry) => &entry.title,
            Self::Type(entry) => &entry.name,
        }
    }
}

/// Transform the DocC archive rooted at `data_dir` into the consolidated
/// reference document, stamping `version` into its info header.
///
/// Per-file and per-field failures are logged and skipped; only a missing
/// input directory or an enumeration failure aborts the run.
pub fn transform(data_dir: &Path, version: &str) -> Result<OutputDocument> {
    if !data_dir.is_dir() {
        return Err(HogRefError::InvalidDataDir(data_dir.to_path_buf()));
    }
    let records = walk(data_dir)?;
    Ok(fold(records, version))
}

/// Enumerate candidate documents in sorted order and classify each one.
fn walk(data_dir: &Path) -> Result<Vec<SymbolRecord>> {
    let symbol_dir = data_dir.join(DATA_SUBDIR);
    if !symbol_dir.is_dir() {
        warn!(dir = %symbol_dir.display(), "symbol directory not found in archive");
        return Ok(Vec::new());
    }

    let store = DocStore::new(data_dir);
    let pattern = symbol_dir.join("**").join("*.json");
    let mut paths: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                None
            }
        })
        .collect();
    paths.sort();

    info!(dir = %symbol_dir.display(), candidates = paths.len(), "processing archive");

    let mut records = Vec::new();
    for path in paths {
        let stem = file_stem(&path);
        if !stem.to_lowercase().contains(NAMESPACE_TOKEN) {
            continue;
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable document");
                continue;
            }
        };
        let document: SourceDocument = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unparseable document");
                continue;
            }
        };

        if let Some(record) = classify(&stem, &document, &store) {
            records.push(record);
        }
    }

    Ok(records)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Dispatch a parsed document on its `(kind, symbolKind, title)` triple.
fn classify(stem: &str, document: &SourceDocument, store: &DocStore) -> Option<SymbolRecord> {
    let title = document
        .metadata
        .as_ref()
        .and_then(|metadata| metadata.title.clone())
        .unwrap_or_else(|| stem.to_string());
    let kind = document
        .kind
        .as_ref()
        .map(DocumentKind::identifier)
        .unwrap_or("");
    let symbol_kind = document
        .metadata
        .as_ref()
        .and_then(|metadata| metadata.symbol_kind.as_deref())
        .unwrap_or("");

    debug!(%title, kind, symbol_kind, "classifying document");

    if kind != "symbol" {
        return None;
    }

    match symbol_kind {
        "class" if title.contains(CLASS_MARKER) => {
            if INTERNAL_TYPES.contains(&title.as_str()) {
                info!(%title, "skipping internal class");
                return None;
            }
            if title == CONFIG_TYPE {
                info!(%title, "routing configuration type");
                return Some(SymbolRecord::Type(build_config_type(&title, document, store)));
            }
            Some(SymbolRecord::Class(build_class(&title, document, store)))
        }
        "enum" => Some(SymbolRecord::Type(build_enum_type(&title, document, store))),
        "struct" => Some(SymbolRecord::Type(build_struct_type(&title, document, store))),
        _ => None,
    }
}

/// Fold the walk's ordered records into the output registries.
/// First occurrence of a title wins; emission follows insertion order.
fn fold(records: Vec<SymbolRecord>, version: &str) -> OutputDocument {
    let mut seen_classes: HashSet<String> = HashSet::new();
    let mut seen_types: HashSet<String> = HashSet::new();
    let mut document = OutputDocument::new(version);

    for record in records {
        let title = record.title().to_string();
        match record {
            SymbolRecord::Class(entry) => {
                if seen_classes.insert(title) {
                    document.classes.push(entry);
                }
            }
            SymbolRecord::Type(entry) => {
                if seen_types.insert(title) {
                    document.types.push(entry);
                }
            }
        }
    }

    info!(
        classes = document.classes.len(),
        types = document.types.len(),
        "assembled output document"
    );
    document
}

fn swift_path(title: &str) -> String {
    format!("PostHog/{title}.swift")
}

fn build_class(title: &str, document: &SourceDocument, store: &DocStore) -> ClassEntry {
    let description = text::plain(document.abstract_.as_ref());
    let mut functions = Vec::new();

    for section in &document.topic_sections {
        if section.title.as_deref().unwrap_or("").is_empty() || section.identifiers.is_empty() {
            continue;
        }
        debug!(
            section = section.title.as_deref().unwrap_or(""),
            members = section.identifiers.len(),
            "processing topic section"
        );
        for identifier in &section.identifiers {
            let Some(reference) = resolver::lookup(&document.references, identifier) else {
                continue;
            };
            functions.push(build_method(title, identifier, reference, store));
        }
    }

    ClassEntry {
        description: if description.is_empty() {
            format!("The {title} class")
        } else {
            description
        },
        id: title.to_string(),
        title: title.to_string(),
        functions,
    }
}

fn build_method(
    class_title: &str,
    identifier: &str,
    reference: &Reference,
    store: &DocStore,
) -> Method {
    let method_title = reference.title.as_str();
    let base_name = method_title.split('(').next().unwrap_or(method_title);

    debug!(method = method_title, "processing method");

    let method_doc = store.load(identifier);
    let params = params::extract(method_doc.as_ref(), &reference.fragments, method_title);

    let description = text::plain(reference.abstract_.as_ref());
    let details = method_doc
        .as_ref()
        .and_then(|sibling| text::content_text(&sibling.primary_content_sections))
        .unwrap_or_else(|| description.clone());

    let example = example::method_example(base_name, &params, class_title);

    Method {
        category: category::categorize(base_name).to_string(),
        description: if description.is_empty() {
            format!("{base_name} method")
        } else {
            description
        },
        id: base_name.to_string(),
        show_docs: true,
        title: base_name.to_string(),
        release_tag: "public".to_string(),
        params,
        return_type: infer_return_type(reference),
        path: swift_path(class_title),
        details: (!details.is_empty()).then_some(details),
        throws: prose_text(reference.throws.as_ref()),
        examples: Some(vec![example]),
    }
}

/// Heuristic return type from the reference's returns prose; defaults to
/// Void when the prose names no recognizable type.
fn infer_return_type(reference: &Reference) -> ReturnType {
    let Some(returns) = reference.returns.as_ref() else {
        return ReturnType::void();
    };
    let prose = text::join_runs(&returns.content);
    if prose.contains("Bool") {
        ReturnType::named("Bool")
    } else if prose.contains("String") {
        ReturnType::named("String")
    } else {
        ReturnType::void()
    }
}

fn prose_text(section: Option<&ProseSection>) -> Option<String> {
    let prose = text::join_runs(&section?.content);
    (!prose.is_empty()).then_some(prose)
}

fn build_config_type(title: &str, document: &SourceDocument, store: &DocStore) -> TypeEntry {
    TypeEntry {
        id: title.to_string(),
        name: title.to_string(),
        properties: Vec::new(),
        path: swift_path(title),
        example: Some(example::config_example(document, store)),
    }
}

fn build_enum_type(title: &str, document: &SourceDocument, store: &DocStore) -> TypeEntry {
    let cases = members::enum_cases(document, store);
    debug!(%title, cases = cases.len(), "building enum type");
    TypeEntry {
        id: title.to_string(),
        name: title.to_string(),
        // enumerations publish their cases through the example, never as properties
        properties: Vec::new(),
        path: swift_path(title),
        example: Some(example::enum_example(title, &cases)),
    }
}

fn build_struct_type(title: &str, document: &SourceDocument, store: &DocStore) -> TypeEntry {
    let properties = members::properties(document, store);
    let example = if properties.is_empty() {
        Some(example::struct_example(title, document))
    } else {
        None
    };
    TypeEntry {
        id: title.to_string(),
        name: title.to_string(),
        properties,
        path: swift_path(title),
        example,
    }
}
