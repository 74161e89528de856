//! Free-text sanitizers applied before values are compared or stored.

/// Remove leading and trailing whitespace.
pub fn trim(input: &str) -> String {
    input.trim().to_owned()
}

/// Replace markup-significant characters with HTML entities.
///
/// # Examples
/// ```
/// use accounts::domain::validation::sanitize::escape;
///
/// assert_eq!(escape("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;&#x2F;b&gt;");
/// ```
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Drop low control characters (U+0000 to U+001F) and DEL (U+007F).
pub fn strip_low(input: &str) -> String {
    input
        .chars()
        .filter(|ch| !matches!(*ch, '\u{0}'..='\u{1F}' | '\u{7F}'))
        .collect()
}
