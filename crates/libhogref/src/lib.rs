//! hogref transforms a DocC documentation archive into the consolidated
//! reference JSON consumed by the PostHog documentation website.
//!
//! The pipeline walks the per-symbol JSON documents under the archive's
//! data directory, resolves cross-references between sibling documents,
//! classifies symbols into classes and types, infers parameter and
//! property types from declaration fragments, and synthesizes usage
//! examples where the source carries none. Extraction is best-effort
//! throughout: a malformed document or a missing sibling never aborts
//! the run.

mod aggregate;
mod category;
mod docc;
mod error;
mod example;
mod members;
mod output;
mod params;
mod resolver;
mod text;
mod typemap;

pub use crate::aggregate::transform;
pub use crate::category::CATEGORIES;
pub use crate::error::{HogRefError, Result};
pub use crate::output::{
    ClassEntry, Info, Method, MethodExample, OutputDocument, Parameter, Property, ReturnType,
    TypeEntry,
};

/// Render the document in the published on-disk form: pretty-printed JSON
/// with 2-space indentation.
pub fn to_pretty_json(document: &OutputDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(HogRefError::Json)
}
