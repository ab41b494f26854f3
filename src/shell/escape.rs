//! Escaping strings back into shell words.

/// Characters that never need a backslash.
fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ',' | ':' | '/' | '@' | '\n')
}

/// Escape `raw` so that [`split`](super::split) returns it as a single word.
///
/// Every character outside a small safe set is backslash-escaped, including
/// non-ASCII ones. Newlines are wrapped in single quotes instead.
pub fn escape(raw: &str) -> String {
    if raw.is_empty() {
        return "''".to_string();
    }

    let mut out = String::with_capacity(raw.len() * 2);
    for c in raw.chars() {
        if c == '\n' {
            out.push_str("'\n'");
        } else if is_safe(c) {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}

/// Escape each value and join them into one command line.
pub fn join<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| escape(v.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
