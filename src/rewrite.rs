//! Case-preserving text rewriting over a parsed document.
//!
//! The engine walks the body subtree in document order and replaces every
//! case-insensitive occurrence of the target word inside text node payloads,
//! rendering each replacement in the case class of the span it replaces.
//! Attribute values are never touched, and matches inside URL-shaped tokens
//! embedded in text are skipped.

use memchr::memmem;
use serde::Serialize;

use crate::dom::{self, Document, NodeData, NodeId};

/// A (pattern, replacement) pair with the replacement pre-rendered in each
/// case class: all-upper, capitalized, all-lower.
///
/// Matching is case-insensitive over the ASCII range and applies to every
/// non-overlapping occurrence, left to right.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    upper: String,
    title: String,
    lower: String,
}

impl Rule {
    pub fn new(pattern: &str, replacement: &str) -> Self {
        let lower = replacement.to_lowercase();
        let upper = replacement.to_uppercase();
        let mut chars = replacement.chars();
        let title = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        };

        Self {
            pattern: pattern.to_ascii_lowercase(),
            upper,
            title,
            lower,
        }
    }

    /// Apply the rule to a text payload. Returns the rewritten string, or
    /// `None` when the payload is unaffected.
    pub fn apply(&self, text: &str) -> Option<String> {
        if self.pattern.is_empty() {
            return None;
        }

        let folded = text.to_ascii_lowercase();
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for start in memmem::find_iter(folded.as_bytes(), self.pattern.as_bytes()) {
            let end = start + self.pattern.len();
            if in_url_token(text, start, end) {
                continue;
            }
            out.push_str(&text[last..start]);
            out.push_str(self.render(&text[start..end]));
            last = end;
        }

        if last == 0 {
            return None;
        }
        out.push_str(&text[last..]);
        if out == text { None } else { Some(out) }
    }

    /// Pick the replacement variant matching the case class of the span.
    fn render(&self, span: &str) -> &str {
        if !span.chars().any(|c| c.is_ascii_lowercase()) {
            &self.upper
        } else if span.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            &self.title
        } else {
            &self.lower
        }
    }
}

/// Whether the match at `start..end` sits inside a whitespace-delimited token
/// that looks like a URL. Such tokens stay untouched even in visible text.
fn in_url_token(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();

    let mut token_start = start;
    while token_start > 0 && !bytes[token_start - 1].is_ascii_whitespace() {
        token_start -= 1;
    }
    let mut token_end = end;
    while token_end < bytes.len() && !bytes[token_end].is_ascii_whitespace() {
        token_end += 1;
    }

    let token = &text[token_start..token_end];
    token.contains("://") || token.starts_with("www.") || token.starts_with("mailto:")
}

/// Outcome of one rewrite invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteResult {
    /// The serialized document after rewriting.
    pub html: String,
    /// Whether any text node (including the title) was actually mutated.
    pub changed: bool,
}

/// Parse `raw_html`, rewrite every eligible text node under the body (plus
/// the title), and serialize the result.
///
/// Pure with respect to its input: no network, no filesystem, no shared
/// state. If serialization fails on pathological input, the original HTML is
/// returned unmodified with `changed = false` rather than failing the
/// request.
pub fn rewrite(raw_html: &str, rule: &Rule) -> RewriteResult {
    let mut doc = dom::parse(raw_html);
    let mut mutated = 0usize;

    let body = doc.find_by_tag("body");
    if let Some(body) = body {
        mutated += rewrite_subtree(&mut doc, body, rule);
    }

    // The title is an independent target. It normally lives in head, outside
    // the body subtree; if the parser placed it inside body it was already
    // covered above.
    if let Some(title) = doc.find_by_tag("title") {
        let in_body = body.is_some_and(|b| doc.is_descendant(title, b));
        if !in_body {
            mutated += rewrite_subtree(&mut doc, title, rule);
        }
    }

    let changed = mutated > 0;
    if changed {
        tracing::debug!(nodes = mutated, "rewrote text nodes");
    }

    match dom::serialize(&doc) {
        Ok(html) => RewriteResult { html, changed },
        Err(err) => {
            tracing::warn!(%err, "serialization failed, returning input unmodified");
            RewriteResult {
                html: raw_html.to_string(),
                changed: false,
            }
        }
    }
}

/// Pre-order walk of one subtree. Text payloads are mutated in place;
/// elements are visited for recursion only.
fn rewrite_subtree(doc: &mut Document, root: NodeId, rule: &Rule) -> usize {
    let mut mutated = 0;
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        let replaced = match doc.get(id).map(|n| &n.data) {
            Some(NodeData::Text(payload)) => rule.apply(payload),
            Some(NodeData::Element { .. }) | Some(NodeData::Document) => {
                let mut children: Vec<_> = doc.children(id).collect();
                children.reverse();
                stack.extend(children);
                None
            }
            // Comments and doctypes carry no visible text.
            Some(NodeData::Comment(_)) | Some(NodeData::Doctype(_)) | None => None,
        };

        if let Some(new_text) = replaced {
            doc.set_text(id, new_text);
            mutated += 1;
        }
    }

    mutated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> Rule {
        Rule::new("yale", "fale")
    }

    #[test]
    fn test_case_classes() {
        let r = rule();
        assert_eq!(r.apply("YALE").as_deref(), Some("FALE"));
        assert_eq!(r.apply("Yale").as_deref(), Some("Fale"));
        assert_eq!(r.apply("yale").as_deref(), Some("fale"));
    }

    #[test]
    fn test_mixed_case_falls_back_to_lowercase() {
        assert_eq!(rule().apply("yALE").as_deref(), Some("fale"));
        assert_eq!(rule().apply("YaLe").as_deref(), Some("Fale"));
    }

    #[test]
    fn test_global_replacement_in_one_payload() {
        let text = "YALE University, Yale College, and yale medical school";
        assert_eq!(
            rule().apply(text).as_deref(),
            Some("FALE University, Fale College, and fale medical school")
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        assert!(rule().apply("Harvard University").is_none());
        assert!(rule().apply("").is_none());
    }

    #[test]
    fn test_match_inside_word() {
        // Whole-pattern means the full pattern string, not word boundaries.
        assert_eq!(rule().apply("Yales").as_deref(), Some("Fales"));
    }

    #[test]
    fn test_url_tokens_skipped() {
        let r = rule();
        assert!(r.apply("see https://www.yale.edu/about for details").is_none());
        assert!(r.apply("visit www.yale.edu today").is_none());
        assert!(r.apply("write to mailto:info@yale.edu").is_none());

        assert_eq!(
            r.apply("Yale is at https://www.yale.edu/").as_deref(),
            Some("Fale is at https://www.yale.edu/")
        );
    }

    #[test]
    fn test_empty_pattern_is_inert() {
        let r = Rule::new("", "fale");
        assert!(r.apply("anything").is_none());
    }

    #[test]
    fn test_rewrite_reports_changed() {
        let result = rewrite("<p>Yale</p>", &rule());
        assert!(result.changed);
        assert!(result.html.contains("<p>Fale</p>"));

        let result = rewrite("<p>Harvard</p>", &rule());
        assert!(!result.changed);
        assert!(result.html.contains("<p>Harvard</p>"));
    }

    #[test]
    fn test_attributes_never_rewritten() {
        let result = rewrite(
            r#"<a href="https://www.yale.edu/about" title="Yale">About Yale</a>"#,
            &rule(),
        );
        assert!(result.changed);
        assert!(result.html.contains(r#"href="https://www.yale.edu/about""#));
        assert!(result.html.contains(r#"title="Yale""#));
        assert!(result.html.contains("About Fale"));
    }

    #[test]
    fn test_title_outside_body_rewritten() {
        let result = rewrite(
            "<html><head><title>Yale University Test Page</title></head><body><p>x</p></body></html>",
            &rule(),
        );
        assert!(result.changed);
        assert!(result.html.contains("<title>Fale University Test Page</title>"));
    }

    #[test]
    fn test_comments_untouched() {
        let result = rewrite("<body><!-- Yale --><p>Yale</p></body>", &rule());
        assert!(result.html.contains("<!-- Yale -->"));
        assert!(result.html.contains("<p>Fale</p>"));
    }
}
