//! Flattening of nested rich-text structures into plain description strings.

use crate::docc::{ContentItem, ContentSection, InlineItem, RichText, TextRun};

/// Flatten a shallow rich-text value into a single plain string.
///
/// List form joins each run's direct `text` with single spaces, skipping
/// runs without one; string form is returned as-is; absent yields empty.
pub fn plain(rich: Option<&RichText>) -> String {
    match rich {
        None => String::new(),
        Some(RichText::Plain(value)) => value.clone(),
        Some(RichText::Runs(runs)) => join_runs(runs),
    }
}

/// Space-join the direct text of a run list, skipping runs without text.
pub fn join_runs(runs: &[TextRun]) -> String {
    runs.iter()
        .filter_map(|run| run.text.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the deeper paragraph form: the first `content` section whose
/// paragraphs carry text-type inline runs, flattened and space-joined.
///
/// Consulted for method discussion text and long-form case/property
/// descriptions when the shallow abstract is unavailable or too terse.
pub fn content_text(sections: &[ContentSection]) -> Option<String> {
    for section in sections {
        let ContentSection::Content { content } = section else {
            continue;
        };
        let mut parts: Vec<&str> = Vec::new();
        for item in content {
            if item.item_type != "paragraph" {
                continue;
            }
            for inline in &item.inline_content {
                if let InlineItem::Text { text } = inline {
                    parts.push(text);
                }
            }
        }
        if !parts.is_empty() {
            return Some(parts.join(" "));
        }
    }
    None
}

/// Flatten a parameter entry's content items, preferring inline runs and
/// falling back to an item's direct text.
pub fn items_text(items: &[ContentItem]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for item in items {
        if !item.inline_content.is_empty() {
            for inline in &item.inline_content {
                if let InlineItem::Text { text } = inline {
                    parts.push(text);
                }
            }
        } else if let Some(text) = item.text.as_deref() {
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }
    parts.join(" ")
}

/// The first non-empty code-voice snippet found in any content section.
pub fn first_code_voice(sections: &[ContentSection]) -> Option<String> {
    for section in sections {
        let ContentSection::Content { content } = section else {
            continue;
        };
        for item in content {
            for inline in &item.inline_content {
                if let InlineItem::CodeVoice { text } = inline {
                    if !text.is_empty() {
                        return Some(text.clone());
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(text: &str) -> TextRun {
        TextRun {
            text: Some(text.to_string()),
        }
    }

    #[test]
    fn plain_handles_all_three_forms() {
        assert_eq!(plain(None), "");
        assert_eq!(plain(Some(&RichText::Plain("as-is".to_string()))), "as-is");
        let runs = RichText::Runs(vec![run("Captures"), TextRun::default(), run("an event.")]);
        assert_eq!(plain(Some(&runs)), "Captures an event.");
    }

    #[test]
    fn content_text_flattens_paragraph_runs() {
        let sections: Vec<ContentSection> = serde_json::from_str(
            r#"[
                {"kind": "declarations", "declarations": []},
                {"kind": "content", "content": [
                    {"type": "heading", "text": "Discussion"},
                    {"type": "paragraph", "inlineContent": [
                        {"type": "text", "text": "Captures an event"},
                        {"type": "codeVoice", "text": "capture"},
                        {"type": "text", "text": "with properties."}
                    ]}
                ]}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            content_text(&sections).as_deref(),
            Some("Captures an event with properties.")
        );
    }

    #[test]
    fn content_text_skips_sections_without_paragraph_text() {
        let sections: Vec<ContentSection> = serde_json::from_str(
            r#"[{"kind": "content", "content": [{"type": "heading", "text": "Topics"}]}]"#,
        )
        .unwrap();
        assert_eq!(content_text(&sections), None);
    }

    #[test]
    fn items_text_prefers_inline_runs_over_direct_text() {
        let items: Vec<ContentItem> = serde_json::from_str(
            r#"[
                {"type": "paragraph", "inlineContent": [{"type": "text", "text": "The event name."}]},
                {"type": "paragraph", "text": "Direct fallback."}
            ]"#,
        )
        .unwrap();
        assert_eq!(items_text(&items), "The event name. Direct fallback.");
    }

    #[test]
    fn first_code_voice_scans_all_items() {
        let sections: Vec<ContentSection> = serde_json::from_str(
            r#"[{"kind": "content", "content": [
                {"type": "paragraph", "inlineContent": [{"type": "text", "text": "Use"}]},
                {"type": "aside", "inlineContent": [{"type": "codeVoice", "text": "PostHogEvent(name: \"x\")"}]}
            ]}]"#,
        )
        .unwrap();
        assert_eq!(
            first_code_voice(&sections).as_deref(),
            Some("PostHogEvent(name: \"x\")")
        );
    }
}
