use serde::{Deserialize, Serialize};

/// Shown whenever an issue has no description text to display.
pub const NO_DESCRIPTION: &str = "No description available";

/// Atlassian Document Format wrapper. Only the pieces this client touches
/// are modeled: the document node, its blocks, and text leaves.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Document {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: u32,
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Document {
    /// The one shape this client ever sends: a document holding a single
    /// paragraph with a single text leaf.
    pub fn from_text(text: &str) -> Self {
        Self {
            kind: "doc".to_string(),
            version: 1,
            content: vec![Node {
                kind: "paragraph".to_string(),
                content: vec![Node {
                    kind: "text".to_string(),
                    content: Vec::new(),
                    text: Some(text.to_string()),
                }],
                text: None,
            }],
        }
    }

    /// Flatten a description document into display text. Walks exactly two
    /// nesting levels (document -> block -> leaf) and concatenates text
    /// leaves in source order; any other leaf kind and any deeper nesting
    /// is dropped. Lossy and display-only: the result must never be fed
    /// back into a create payload.
    pub fn plain_text(doc: Option<&Document>) -> String {
        let Some(doc) = doc else {
            return NO_DESCRIPTION.to_string();
        };

        let mut out = String::new();
        for block in &doc.content {
            for leaf in &block.content {
                if leaf.kind == "text" {
                    if let Some(text) = &leaf.text {
                        out.push_str(text);
                    }
                }
            }
        }

        let out = out.trim();
        if out.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            out.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_from(value: serde_json::Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn absent_document_yields_placeholder() {
        assert_eq!(Document::plain_text(None), NO_DESCRIPTION);
    }

    #[test]
    fn empty_document_yields_placeholder_not_empty_string() {
        let doc = doc_from(json!({"type": "doc", "version": 1, "content": []}));
        assert_eq!(Document::plain_text(Some(&doc)), NO_DESCRIPTION);
    }

    #[test]
    fn leaves_concatenate_in_source_order_without_separator() {
        let doc = doc_from(json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "paragraph",
                "content": [
                    {"type": "text", "text": "A"},
                    {"type": "text", "text": "B"}
                ]
            }]
        }));
        assert_eq!(Document::plain_text(Some(&doc)), "AB");
    }

    #[test]
    fn non_text_leaves_are_skipped() {
        let doc = doc_from(json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "paragraph",
                "content": [
                    {"type": "text", "text": "hello"},
                    {"type": "mention", "text": "@someone"},
                    {"type": "text", "text": " world"}
                ]
            }]
        }));
        assert_eq!(Document::plain_text(Some(&doc)), "hello world");
    }

    #[test]
    fn third_level_nesting_is_dropped() {
        let doc = doc_from(json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "bulletList",
                "content": [{
                    "type": "listItem",
                    "content": [
                        {"type": "text", "text": "buried"}
                    ]
                }]
            }]
        }));
        assert_eq!(Document::plain_text(Some(&doc)), NO_DESCRIPTION);
    }

    #[test]
    fn result_is_trimmed() {
        let doc = doc_from(json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "paragraph",
                "content": [{"type": "text", "text": "  padded  "}]
            }]
        }));
        assert_eq!(Document::plain_text(Some(&doc)), "padded");
    }

    #[test]
    fn from_text_builds_single_paragraph_wire_shape() {
        let value = serde_json::to_value(Document::from_text("A desc")).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "doc",
                "version": 1,
                "content": [{
                    "type": "paragraph",
                    "content": [{"type": "text", "text": "A desc"}]
                }]
            })
        );
    }
}
