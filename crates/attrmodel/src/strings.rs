//! String helpers used to derive transformation names from attribute names.
//!
//! All helpers are pure and operate on `char`s, so multi-byte input is never
//! split in the middle of a code point.
//!
//! | Helper | Input | Output |
//! |--------|-------|--------|
//! | [`studly`] | `user_name`, `user-name`, `user name` | `UserName` |
//! | [`snake`] | `UserName`, `"-"` | `user-name` |
//! | [`ucfirst`] | `hello world` | `Hello world` |

/// A search or replacement argument for [`replace`].
///
/// `Many` lists are applied positionally: the first search term is replaced
/// with the first replacement, then the second, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'a> {
    One(&'a str),
    Many(&'a [&'a str]),
}

impl<'a> From<&'a str> for Pattern<'a> {
    fn from(value: &'a str) -> Self {
        Pattern::One(value)
    }
}

impl<'a> From<&'a [&'a str]> for Pattern<'a> {
    fn from(value: &'a [&'a str]) -> Self {
        Pattern::Many(value)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Pattern<'a> {
    fn from(value: &'a [&'a str; N]) -> Self {
        Pattern::Many(value.as_slice())
    }
}

pub fn upper(value: &str) -> String {
    value.to_uppercase()
}

pub fn lower(value: &str) -> String {
    value.to_lowercase()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn ucfirst(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Character-indexed substring.
///
/// Returns an empty string when `start` is past the end. A `length` that
/// overruns the input is clamped.
pub fn substr(value: &str, start: usize, length: Option<usize>) -> String {
    let tail = value.chars().skip(start);
    match length {
        Some(len) => tail.take(len).collect(),
        None => tail.collect(),
    }
}

/// Replace every occurrence of `search` in `subject` with `replacement`.
///
/// With a list of search terms and a single replacement, every term is
/// replaced with that replacement. With two lists, a search term without a
/// positional counterpart is replaced with the empty string. Empty search
/// terms are ignored.
pub fn replace<'a>(
    search: impl Into<Pattern<'a>>,
    replacement: impl Into<Pattern<'a>>,
    subject: &str,
    case_sensitive: bool,
) -> String {
    let single;
    let searches: &[&str] = match search.into() {
        Pattern::One(term) => {
            single = [term];
            &single
        }
        Pattern::Many(terms) => terms,
    };
    let replacement = replacement.into();

    let mut result = subject.to_string();
    for (index, needle) in searches.iter().enumerate() {
        let with = match replacement {
            Pattern::One(value) => value,
            Pattern::Many(values) => values.get(index).copied().unwrap_or(""),
        };
        result = replace_one(&result, needle, with, case_sensitive);
    }
    result
}

/// Convert `snake_case`, `kebab-case` or space separated words to `StudlyCase`.
///
/// ```
/// use attrmodel::strings::studly;
///
/// assert_eq!(studly("hello world"), "HelloWorld");
/// assert_eq!(studly("hello_world"), "HelloWorld");
/// assert_eq!(studly("first-name"), "FirstName");
/// ```
pub fn studly(value: &str) -> String {
    value
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(ucfirst)
        .collect()
}

/// Convert `StudlyCase` or `camelCase` to a delimited lower-case string.
///
/// The delimiter is inserted before every upper-case character except the
/// first one, then the whole string is lower-cased.
///
/// ```
/// use attrmodel::strings::snake;
///
/// assert_eq!(snake("HelloWorld", "_"), "hello_world");
/// assert_eq!(snake("HelloWorld", "-"), "hello-world");
/// ```
pub fn snake(value: &str, delimiter: &str) -> String {
    let mut out = String::with_capacity(value.len() + delimiter.len() * 2);
    for (index, ch) in value.chars().enumerate() {
        if index > 0 && ch.is_uppercase() {
            out.push_str(delimiter);
        }
        out.push(ch);
    }
    lower(&out)
}

/// [`snake`] with the `_` delimiter.
pub fn snake_case(value: &str) -> String {
    snake(value, "_")
}

fn replace_one(subject: &str, needle: &str, with: &str, case_sensitive: bool) -> String {
    if needle.is_empty() {
        return subject.to_string();
    }
    if case_sensitive {
        return subject.replace(needle, with);
    }

    let mut out = String::with_capacity(subject.len());
    let mut rest = subject;
    loop {
        if let Some(len) = match_len_ignore_case(rest, needle) {
            out.push_str(with);
            rest = &rest[len..];
            continue;
        }
        let mut chars = rest.chars();
        match chars.next() {
            Some(ch) => {
                out.push(ch);
                rest = chars.as_str();
            }
            None => break,
        }
    }
    out
}

/// Byte length of the prefix of `haystack` matching `needle` case-insensitively.
fn match_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    for expected in needle.chars() {
        let (_, actual) = hay.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(hay.next().map_or(haystack.len(), |(index, _)| index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_and_lower() {
        assert_eq!(upper("hello world"), "HELLO WORLD");
        assert_eq!(lower("HELLO WORLD"), "hello world");
    }

    #[test]
    fn test_ucfirst() {
        assert_eq!(ucfirst("hello world"), "Hello world");
        assert_eq!(ucfirst(""), "");
        assert_eq!(ucfirst("éclair"), "Éclair");
    }

    #[test]
    fn test_substr() {
        assert_eq!(substr("Hello world", 0, Some(5)), "Hello");
        assert_eq!(substr("Hello world", 6, None), "world");
        assert_eq!(substr("Hello", 10, None), "");
        assert_eq!(substr("Hello", 3, Some(100)), "lo");
    }

    #[test]
    fn test_replace_single() {
        assert_eq!(replace("planet", "world", "hello planet", true), "hello world");
    }

    #[test]
    fn test_replace_list_case_insensitive() {
        assert_eq!(
            replace(&["planet"], &["world"], "hello PLANET", false),
            "hello world"
        );
    }

    #[test]
    fn test_replace_case_sensitive_skips_other_case() {
        assert_eq!(replace("planet", "world", "hello PLANET", true), "hello PLANET");
    }

    #[test]
    fn test_replace_positional_lists() {
        assert_eq!(
            replace(&["a", "b", "c"], &["1", "2"], "abcabc", true),
            "1212"
        );
    }

    #[test]
    fn test_replace_list_with_single_replacement() {
        assert_eq!(replace(&["cat", "dog"], "pet", "cat and dog", true), "pet and pet");
    }

    #[test]
    fn test_replace_ignores_empty_search() {
        assert_eq!(replace("", "x", "abc", true), "abc");
        assert_eq!(replace("", "x", "abc", false), "abc");
    }

    #[test]
    fn test_studly() {
        assert_eq!(studly("hello world"), "HelloWorld");
        assert_eq!(studly("hello_world"), "HelloWorld");
        assert_eq!(studly("hello-world"), "HelloWorld");
        assert_eq!(studly("__user__name"), "UserName");
        assert_eq!(studly("userName"), "UserName");
    }

    #[test]
    fn test_studly_is_idempotent() {
        let once = studly("first_name");
        assert_eq!(studly(&once), once);
    }

    #[test]
    fn test_snake() {
        assert_eq!(snake("HelloWorld", "_"), "hello_world");
        assert_eq!(snake("HelloWorld", "-"), "hello-world");
        assert_eq!(snake_case("helloWorld"), "hello_world");
        assert_eq!(snake_case("hello"), "hello");
    }
}
