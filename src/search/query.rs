//! Query string encoding for the fetch service.

/// Encodes a user query for the fetch service by replacing spaces with `+`.
///
/// No other characters are escaped.
///
/// # Examples
///
/// ```
/// use eventsearch::search::encode_query;
///
/// assert_eq!(encode_query("taylor swift boston"), "taylor+swift+boston");
/// ```
#[must_use]
pub fn encode_query(query: &str) -> String {
    query.replace(' ', "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_plus() {
        assert_eq!(encode_query("red sox"), "red+sox");
        assert_eq!(encode_query("  padded  "), "++padded++");
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(encode_query("a&b=c/d?é"), "a&b=c/d?é");
        assert_eq!(encode_query("tab\there"), "tab\there");
    }
}
