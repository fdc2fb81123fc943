use once_cell::sync::Lazy;
use regex::Regex;

static NEWLINE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("newline run pattern is a valid regex"));

/// Cleans up generated text before it is returned to a client: drops the
/// emphasis markers models like to emit, unifies newline variants and
/// collapses blank-line runs to a single newline, then trims.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '*' && *c != '#').collect();
    let unified = stripped.replace("\r\n", "\n").replace('\r', "\n");
    let collapsed = NEWLINE_RUNS.replace_all(&unified, "\n");
    collapsed.trim().to_string()
}

/// Local engines tend to echo the prompt back before the completion. If the
/// prompt appears in `raw`, everything up to and including its first
/// occurrence is dropped.
pub fn strip_prompt_echo<'a>(raw: &'a str, prompt: &str) -> &'a str {
    match raw.find(prompt) {
        Some(idx) => &raw[idx + prompt.len()..],
        None => raw,
    }
}
