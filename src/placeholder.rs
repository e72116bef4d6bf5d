//! # Environment Placeholders
//!
//! One-off `%env(type:NAME:default)%` substitution, used for target
//! patterns that need a value from the environment rather than from the
//! pattern replacer's fixed token set. Only the `string` type exists; an
//! unknown type is a hard error for the single placeholder being expanded,
//! handled by the caller per rule.

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"%env\(([^)]*)\)%").expect("placeholder regex is a tested literal")
    })
}

/// Expand every `%env(...)%` occurrence in `input`.
///
/// Text without placeholders passes through unchanged. The first malformed
/// placeholder aborts the expansion with [`Error::Placeholder`].
pub fn expand(input: &str) -> Result<String> {
    let re = placeholder_regex();
    let mut out = String::with_capacity(input.len());
    let mut last_end = 0;
    for captures in re.captures_iter(input) {
        let whole = captures.get(0).map(|m| (m.start(), m.end(), m.as_str()));
        let inner = captures.get(1).map(|m| m.as_str());
        if let (Some((start, end, matched)), Some(inner)) = (whole, inner) {
            out.push_str(&input[last_end..start]);
            out.push_str(&resolve(matched, inner)?);
            last_end = end;
        }
    }
    out.push_str(&input[last_end..]);
    Ok(out)
}

/// Resolve the inner `type:NAME:default` part of one placeholder.
fn resolve(placeholder: &str, inner: &str) -> Result<String> {
    let mut parts = inner.trim().splitn(3, ':');
    let kind = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();
    let default = parts.next().unwrap_or_default();

    match kind {
        "string" => Ok(resolve_string(name, default)),
        other => Err(Error::Placeholder {
            placeholder: placeholder.to_string(),
            message: format!("invalid type {:?}", other),
        }),
    }
}

/// Value of the named variable if set and non-empty, else the default.
fn resolve_string(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
