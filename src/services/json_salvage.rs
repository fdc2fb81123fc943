use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static LINE_COMMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//.*?\n").expect("line comment pattern is a valid regex"));
static BLOCK_COMMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern is a valid regex"));
static TRAILING_COMMA_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*\}").expect("object comma pattern is a valid regex"));
static TRAILING_COMMA_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*\]").expect("array comma pattern is a valid regex"));

/// Pulls a JSON object out of arbitrary surrounding text (markdown fences,
/// chatter before and after). Takes the span from the first `{` to the last
/// `}` and parses it strictly; if that fails, strips `//` and `/* */`
/// comments and trailing commas, then parses strictly once more. Anything
/// still invalid is given up on.
///
/// The repairs run only after a strict parse has failed, so well-formed
/// payloads are never rewritten.
pub fn extract_json(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    let candidate = &text[start..=end];

    if let Ok(value) = serde_json::from_str(candidate) {
        return Some(value);
    }

    let fixed = LINE_COMMENTS.replace_all(candidate, "");
    let fixed = BLOCK_COMMENTS.replace_all(&fixed, "");
    let fixed = TRAILING_COMMA_OBJECT.replace_all(&fixed, "}");
    let fixed = TRAILING_COMMA_ARRAY.replace_all(&fixed, "]");
    serde_json::from_str(&fixed).ok()
}
