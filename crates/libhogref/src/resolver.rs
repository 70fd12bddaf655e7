//! Resolution of symbol identifiers: shallow lookups in a document's local
//! reference table, and deep-loads of sibling per-symbol documents.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::docc::{Reference, SourceDocument};

/// Scheme-and-root prefix shared by every symbol locator in the archive.
const DOC_PREFIX: &str = "doc://PostHog/documentation/";

/// Look up a symbol identifier in a document's local reference table.
/// A missing key is an empty result, never an error.
pub fn lookup<'a>(
    references: &'a HashMap<String, Reference>,
    identifier: &str,
) -> Option<&'a Reference> {
    references.get(identifier)
}

/// Loads sibling symbol documents on demand by converting hierarchical
/// locators into archive file paths. Loads are lazy and uncached; a
/// document referenced from several parents may be read more than once.
#[derive(Debug, Clone)]
pub struct DocStore {
    data_dir: PathBuf,
}

impl DocStore {
    /// A store rooted at the archive's data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Derive the on-disk candidate path for a locator: strip the scheme
    /// prefix, lower-case each remaining segment, join under the data
    /// directory, append the JSON extension. Case locators nested one level
    /// deeper under the namespace segment resolve through the same rule.
    pub fn locator_path(&self, identifier: &str) -> Option<PathBuf> {
        let rest = identifier.strip_prefix(DOC_PREFIX)?;
        let mut segments: Vec<String> = rest
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_lowercase)
            .collect();
        let last = segments.pop()?;

        let mut path = self.data_dir.clone();
        for segment in segments {
            path.push(segment);
        }
        path.push(format!("{last}.json"));
        Some(path)
    }

    /// Parse the sibling document a locator points at, if it exists.
    ///
    /// Read and parse failures are reported as warnings and collapse to
    /// "no additional detail available" rather than aborting the caller.
    pub fn load(&self, identifier: &str) -> Option<SourceDocument> {
        let path = self.locator_path(identifier)?;
        if !path.exists() {
            return None;
        }
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read sibling document");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(document) => {
                debug!(path = %path.display(), "loaded sibling document");
                Some(document)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to parse sibling document");
                None
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn locator_path_lowercases_segments() {
        let store = DocStore::new("/data");
        let path = store
            .locator_path("doc://PostHog/documentation/PostHog/PostHogConfig/captureScreenViews")
            .unwrap();
        assert_eq!(
            path,
            PathBuf::from("/data/posthog/posthogconfig/capturescreenviews.json")
        );
    }

    #[test]
    fn locator_path_handles_case_locators_one_level_deeper() {
        let store = DocStore::new("/data");
        let path = store
            .locator_path("doc://PostHog/documentation/PostHog/PostHogSurveyResponseType/link")
            .unwrap();
        assert_eq!(
            path,
            PathBuf::from("/data/posthog/posthogsurveyresponsetype/link.json")
        );
    }

    #[test]
    fn non_locator_identifiers_resolve_to_nothing() {
        let store = DocStore::new("/data");
        assert_eq!(store.locator_path("PostHogSDK"), None);
        assert_eq!(store.locator_path("https://posthog.com"), None);
    }

    #[test]
    fn load_returns_none_for_missing_or_broken_files() {
        let dir = TempDir::new().unwrap();
        let store = DocStore::new(dir.path());
        assert!(
            store
                .load("doc://PostHog/documentation/PostHog/PostHogSDK/capture()")
                .is_none()
        );

        let nested = dir.path().join("posthog").join("posthogsdk");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("capture().json"), "{not json").unwrap();
        assert!(
            store
                .load("doc://PostHog/documentation/PostHog/PostHogSDK/capture()")
                .is_none()
        );
    }

    #[test]
    fn load_parses_an_existing_sibling() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("posthog").join("posthogsdk");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            nested.join("capture().json"),
            r#"{"kind": "symbol", "metadata": {"title": "capture()"}}"#,
        )
        .unwrap();

        let store = DocStore::new(dir.path());
        let doc = store
            .load("doc://PostHog/documentation/PostHog/PostHogSDK/capture()")
            .unwrap();
        assert_eq!(doc.metadata.unwrap().title.as_deref(), Some("capture()"));
    }

    #[test]
    fn lookup_is_total_over_missing_keys() {
        let references = HashMap::new();
        assert!(lookup(&references, "doc://PostHog/documentation/PostHog/Missing").is_none());
    }
}
