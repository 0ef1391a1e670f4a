use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_BREAKS: Regex = Regex::new(r"[\n\r\t]").unwrap();
    // Literal backslash-u escape artifacts from double-encoded upstream
    // payloads. Matched textually, not interpreted.
    static ref UNICODE_ESCAPES: Regex = Regex::new(r"\\u[0-9A-Fa-f]{4}").unwrap();
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize raw article text. Never fails; `None` and `""` both come back
/// as the empty string.
pub fn clean(text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };
    let text = LINE_BREAKS.replace_all(text, " ");
    let text = UNICODE_ESCAPES.replace_all(&text, "");
    WHITESPACE_RUNS.replace_all(&text, " ").trim().to_string()
}
