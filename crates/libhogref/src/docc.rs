//! Input-side data model for per-symbol DocC documents.
//!
//! Every field is optional or defaulted: the archive is irregular and a
//! partially populated document must still deserialize. Unknown fields are
//! ignored.

use std::collections::HashMap;

use serde::Deserialize;

/// One per-symbol JSON document from the archive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceDocument {
    #[serde(default)]
    pub kind: Option<DocumentKind>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(rename = "abstract", default)]
    pub abstract_: Option<RichText>,
    #[serde(rename = "topicSections", default)]
    pub topic_sections: Vec<TopicSection>,
    #[serde(default)]
    pub references: HashMap<String, Reference>,
    #[serde(rename = "primaryContentSections", default)]
    pub primary_content_sections: Vec<ContentSection>,
}

/// Top-level document category. Older archives carry a bare string, newer
/// ones an object with an `identifier` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DocumentKind {
    Structured {
        #[serde(default)]
        identifier: String,
    },
    Plain(String),
}

impl DocumentKind {
    /// The category identifier regardless of representation.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Structured { identifier } => identifier,
            Self::Plain(value) => value,
        }
    }
}

/// Symbol metadata block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "symbolKind", default)]
    pub symbol_kind: Option<String>,
}

/// Rich-text value: either a list of text runs or a plain string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    Runs(Vec<TextRun>),
    Plain(String),
}

/// A single run within a rich-text list. Runs without a `text` field
/// (images, symbol links) deserialize with `text: None` and are skipped
/// during extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub text: Option<String>,
}

/// A named, ordered grouping of member identifiers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub identifiers: Vec<String>,
}

/// Shallow descriptor for a symbol, available inline in the owning
/// document's reference table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub fragments: Vec<Fragment>,
    #[serde(rename = "abstract", default)]
    pub abstract_: Option<RichText>,
    #[serde(default)]
    pub returns: Option<ProseSection>,
    #[serde(default)]
    pub throws: Option<ProseSection>,
}

/// An atomic lexical unit of a declaration: a text value plus a syntactic
/// role tag (`keyword`, `identifier`, `typeIdentifier`, `externalParam`,
/// `text`, ...). Tokens are meaningful only in sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fragment {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub kind: String,
}

/// Prose attached to a reference (`returns`, `throws`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProseSection {
    #[serde(default)]
    pub content: Vec<TextRun>,
}

/// Detailed per-symbol content, discriminated on `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum ContentSection {
    #[serde(rename = "parameters")]
    Parameters {
        #[serde(default)]
        parameters: Vec<ParameterEntry>,
    },
    #[serde(rename = "content")]
    Content {
        #[serde(default)]
        content: Vec<ContentItem>,
    },
    #[serde(rename = "declarations")]
    Declarations {
        #[serde(default)]
        declarations: Vec<Declaration>,
    },
    #[serde(other)]
    Other,
}

/// One declared parameter inside a `parameters` content section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: Vec<ContentItem>,
}

/// A block-level content item. Kept as an open struct rather than a closed
/// enum: extraction needs the paragraph/inline shape, the direct-text
/// fallback, and inline scavenging across item types.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(rename = "inlineContent", default)]
    pub inline_content: Vec<InlineItem>,
    #[serde(default)]
    pub text: Option<String>,
}

/// An inline run within a block-level item.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum InlineItem {
    #[serde(rename = "text")]
    Text {
        #[serde(default)]
        text: String,
    },
    #[serde(rename = "codeVoice")]
    CodeVoice {
        #[serde(default)]
        text: String,
    },
    #[serde(other)]
    Other,
}

/// A declaration token list inside a `declarations` content section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Declaration {
    #[serde(default)]
    pub tokens: Vec<Fragment>,
}
