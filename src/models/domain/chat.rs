use serde::{Deserialize, Serialize};

/// Which tier produced the response text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSource {
    Local,
    Remote,
    Fallback,
}

/// Outcome of resolving one chat message. `text` is non-empty for every
/// source; the fallback tier carries one of the fixed canned strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedResponse {
    pub text: String,
    pub source: ResponseSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ResponseSource::Remote).unwrap(),
            "\"remote\""
        );
        assert_eq!(
            serde_json::to_string(&ResponseSource::Fallback).unwrap(),
            "\"fallback\""
        );
    }
}
