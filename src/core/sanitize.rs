// src/core/sanitize.rs
use std::sync::OnceLock;

use regex::Regex;

/// Trim and drop every `<` and `>` so a value can't smuggle markup
/// into a later render or export.
pub fn sanitize_text<S: AsRef<str>>(s: S) -> String {
    s.as_ref()
        .trim()
        .chars()
        .filter(|&c| c != '<' && c != '>')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitize, treating an empty result as absent.
pub fn clean(s: Option<String>) -> Option<String> {
    s.map(sanitize_text).filter(|t| !t.is_empty())
}

/// Drop the first "years" (as shown on age labels) and trim.
pub fn strip_years(s: &str) -> String {
    s.replacen("years", "", 1).trim().to_string()
}

/// Leading decimal integer, like "17 and 23 days" → 17.
/// An optional '+' is accepted; anything else up front is a parse failure.
pub fn parse_leading_int(s: &str) -> Option<u32> {
    let t = s.trim_start();
    let t = t.strip_prefix('+').unwrap_or(t);
    let end = t
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(t.len());
    t[..end].parse().ok()
}

fn team_id_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| match Regex::new(r"\((\d+)\)") {
        Ok(re) => Some(re),
        Err(e) => {
            loge!("Sanitize: team id pattern failed to compile: {e}");
            None
        }
    })
    .as_ref()
}

/// First "(digits)" group in the text, digits only.
/// "Youth Academy (123456)" → "123456"
pub fn first_parenthesized_int(s: &str) -> Option<String> {
    let caps = team_id_regex()?.captures(s)?;
    caps.get(1).map(|m| s!(m.as_str()))
}
