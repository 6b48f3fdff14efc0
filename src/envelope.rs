//! JSON envelopes for the transport layer.
//!
//! The caller-facing shape is `{ "success": true, "content": <finalHtml> }`
//! on success and `{ "error": <message> }` on failure.

use serde_json::{json, Value};

use crate::rewrite::RewriteResult;

/// Wrap a rewrite result in the success envelope.
pub fn success(result: &RewriteResult) -> Value {
    json!({ "success": true, "content": result.html })
}

/// Wrap a failure message in the error envelope.
pub fn error(message: &str) -> Value {
    json!({ "error": message })
}
