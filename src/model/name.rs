//! Splitting a record name into its text and numeric parts.
//!
//! Record names arrive as `"<text> <number>"` (e.g. `"Item 276"`). Sorting on
//! the raw string would put `"Item 10"` before `"Item 9"`, so the name is
//! decomposed once and the parts are compared separately.

/// The two sort-relevant parts of a record name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NameParts {
    /// First whitespace-delimited token of the trimmed name
    pub name_part: String,
    /// Second token as a base-10 integer, or `0` when absent or not numeric
    pub number_part: i64,
}

/// Parse a raw name into [`NameParts`].
///
/// The name is trimmed and split on single spaces. The first token is the
/// text part; the second token, if it parses as an integer, is the number
/// part. A missing or unparseable second token yields `0`. Tokens past the
/// second are ignored.
///
/// # Example
///
/// ```
/// use fetchlist::model::parse_name;
///
/// let parts = parse_name("Foo 42");
/// assert_eq!(parts.name_part, "Foo");
/// assert_eq!(parts.number_part, 42);
///
/// assert_eq!(parse_name("Bar").number_part, 0);
/// assert_eq!(parse_name("Baz xyz").number_part, 0);
/// ```
#[must_use]
pub fn parse_name(name: &str) -> NameParts {
    let mut tokens = name.trim().split(' ');
    let name_part = tokens.next().unwrap_or_default().to_string();
    let number_part = tokens
        .next()
        .and_then(|token| token.parse::<i64>().ok())
        .unwrap_or(0);

    NameParts {
        name_part,
        number_part,
    }
}
