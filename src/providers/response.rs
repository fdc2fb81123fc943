use serde_json::Value;

const ENTRY_KEYS: &[&str] = &["candidates", "outputs", "choices"];
const TEXT_FIELDS: &[&str] = &["content", "message", "output", "text"];

/// Provider output in its native wire shape. Kept as a tagged union so that
/// unwrapping is a match on the variant rather than field probing on an
/// untyped payload.
#[derive(Debug, Clone)]
pub enum RawResponse {
    /// Engines that already answer with bare text (llama-server `content`).
    Text(String),
    /// OpenAI-style chat payload: `{"choices":[{"message":{"content":..}}]}`.
    Chat(Value),
    /// Gemini-style payload:
    /// `{"candidates":[{"content":{"parts":[{"text":..}]}}]}`.
    Candidates(Value),
}

impl RawResponse {
    /// Unwraps the payload to plain text. Total: each attempt falls through
    /// to a more generic probe and finally to the payload's own JSON text,
    /// so a malformed provider response degrades to some string instead of
    /// aborting the resolution chain.
    pub fn extract_text(&self) -> String {
        match self {
            RawResponse::Text(text) => text.clone(),
            RawResponse::Chat(value) => {
                if let Some(text) = value.get("text").and_then(Value::as_str) {
                    return text.to_string();
                }
                if let Some(text) = value
                    .pointer("/choices/0/message/content")
                    .and_then(Value::as_str)
                {
                    return text.to_string();
                }
                probe_entries(value).unwrap_or_else(|| value.to_string())
            }
            RawResponse::Candidates(value) => {
                if let Some(text) = value.get("text").and_then(Value::as_str) {
                    return text.to_string();
                }
                if let Some(text) = candidate_parts_text(value) {
                    return text;
                }
                probe_entries(value).unwrap_or_else(|| value.to_string())
            }
        }
    }
}

fn candidate_parts_text(value: &Value) -> Option<String> {
    let parts = value.pointer("/candidates/0/content/parts")?.as_array()?;
    let texts: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();
    if texts.is_empty() {
        None
    } else {
        Some(texts.join(""))
    }
}

/// Generic probe for dictionary payloads that do not match a known shape:
/// walks candidate/output entry lists looking for a text-bearing field,
/// preferring plain string values over nested `{"text": ..}` objects.
fn probe_entries(value: &Value) -> Option<String> {
    for entry_key in ENTRY_KEYS {
        let Some(entries) = value.get(entry_key).and_then(Value::as_array) else {
            continue;
        };
        for entry in entries {
            for field in TEXT_FIELDS {
                if let Some(text) = entry.get(field).and_then(Value::as_str) {
                    return Some(text.to_string());
                }
            }
            for field in TEXT_FIELDS {
                if let Some(text) = entry
                    .get(field)
                    .and_then(|nested| nested.get("text"))
                    .and_then(Value::as_str)
                {
                    return Some(text.to_string());
                }
            }
        }
    }
    None
}
