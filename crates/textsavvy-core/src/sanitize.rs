//! Normalizes raw provider output into clean, escape-decoded plain text.
//!
//! The steps run in a fixed order: strip quote characters, truncate at the
//! first hyphen, decode backslash escapes, trim. The hyphen truncation is a
//! heuristic for dropping "- Author Name" suffixes some providers append.
//! It is deliberately aggressive and fires on any `-`, including ones that
//! are part of legitimate content; that behavior is preserved exactly for
//! compatibility with existing users.

/// Clean one raw provider response.
///
/// An input that cleans to an empty string is treated by the fallback chain
/// as a provider failure, never as a valid empty result.
pub fn clean(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '"' && *c != '\'').collect();

    let truncated = match stripped.find('-') {
        Some(idx) => &stripped[..idx],
        None => stripped.as_str(),
    };

    decode_escapes(truncated).trim().to_string()
}

/// Decode the fixed set of backslash escapes into their literal control
/// characters. Any other backslash sequence is left untouched.
fn decode_escapes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                out.push('\n');
                chars.next();
            }
            Some('r') => {
                out.push('\r');
                chars.next();
            }
            Some('t') => {
                out.push('\t');
                chars.next();
            }
            Some('b') => {
                out.push('\u{0008}');
                chars.next();
            }
            Some('f') => {
                out.push('\u{000C}');
                chars.next();
            }
            Some('"') => {
                out.push('"');
                chars.next();
            }
            Some('\'') => {
                out.push('\'');
                chars.next();
            }
            Some('\\') => {
                out.push('\\');
                chars.next();
            }
            _ => out.push('\\'),
        }
    }

    out
}
