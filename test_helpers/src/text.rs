//! Text helpers for behavioural step placeholders.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Normalizes a scalar placeholder by trimming and unquoting one outer layer.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Parses a JSON placeholder into an attribute value.
///
/// Only single quotes are stripped so that JSON strings keep their quotes.
///
/// # Errors
///
/// Returns an error when `value` is not valid JSON.
pub fn parse_value(value: &str) -> serde_json::Result<html_attrs::AttrValue> {
    let trimmed = value.trim();
    let json = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(trimmed);
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::{normalize_scalar, parse_value, unquote};
    use html_attrs::attrs;

    #[test]
    fn unquote_removes_single_outer_quotes() {
        assert_eq!(unquote("'value'"), "value");
        assert_eq!(unquote("\"value\""), "value");
    }

    #[test]
    fn normalize_scalar_trims_whitespace() {
        assert_eq!(normalize_scalar("  'value'  "), "value");
    }

    #[test]
    fn parse_value_reads_quoted_json() {
        let value = parse_value(r#"'{"class": "a"}'"#).expect("valid json");
        assert_eq!(value, attrs!({ class: "a" }));
        assert_eq!(parse_value(r#""a b""#).expect("json string"), attrs!("a b"));
        assert_eq!(parse_value("null").expect("json null"), attrs!(nil));
    }
}
