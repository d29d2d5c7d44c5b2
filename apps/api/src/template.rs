//! Prompt template rendering — substitutes `{name}` placeholders with
//! caller-supplied values.
//!
//! Single-pass: substituted values are copied verbatim and never re-scanned,
//! so user text containing brace sequences cannot expand into other values.
//! No escaping or truncation is performed.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("no value provided for placeholder '{{{0}}}'")]
    MissingValue(String),
}

/// Renders `template`, replacing every `{name}` placeholder with the matching
/// value from `values`. Every placeholder the template references must have a
/// value; a brace sequence that is not a well-formed placeholder name is
/// treated as literal text.
pub fn render(template: &str, values: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                let name = &after[..close];
                let value = values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| TemplateError::MissingValue(name.to_string()))?;
                out.push_str(value);
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn is_placeholder_name(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
