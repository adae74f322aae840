//! String predicates.
//!
//! These work on anything that can be viewed as a `str`: `str`, `String`,
//! `Cow<str>`, and so on.

use regex::Regex;

use crate::error::Result;
use crate::predicate::Predicate;

/// Which substring test a [`Text`] predicate performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextOp {
    /// String starts with the pattern.
    StartsWith,
    /// String ends with the pattern.
    EndsWith,
    /// String contains the pattern.
    Contains,
}

/// Substring test against a fixed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pattern: String,
    op: TextOp,
}

impl Text {
    /// Creates a text predicate.
    pub fn new(op: TextOp, pattern: impl Into<String>) -> Self {
        Text {
            pattern: pattern.into(),
            op,
        }
    }

    /// Returns the pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the operator.
    pub fn op(&self) -> TextOp {
        self.op
    }
}

impl<T: AsRef<str> + ?Sized> Predicate<T> for Text {
    fn test(&self, value: &T) -> bool {
        let value = value.as_ref();
        match self.op {
            TextOp::StartsWith => value.starts_with(&self.pattern),
            TextOp::EndsWith => value.ends_with(&self.pattern),
            TextOp::Contains => value.contains(&self.pattern),
        }
    }
}

/// Matches strings starting with `prefix`.
pub fn starts_with(prefix: impl Into<String>) -> Text {
    Text::new(TextOp::StartsWith, prefix)
}

/// Matches strings ending with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> Text {
    Text::new(TextOp::EndsWith, suffix)
}

/// Matches strings containing `needle`.
pub fn contains(needle: impl Into<String>) -> Text {
    Text::new(TextOp::Contains, needle)
}

/// Regular expression test. Built by [`matches_regex`].
#[derive(Debug, Clone)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    /// Wraps an already compiled regular expression.
    pub fn new(regex: Regex) -> Self {
        Matches { regex }
    }

    /// Returns the compiled regular expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl<T: AsRef<str> + ?Sized> Predicate<T> for Matches {
    fn test(&self, value: &T) -> bool {
        self.regex.is_match(value.as_ref())
    }
}

/// Matches strings in which `pattern` finds a match.
///
/// The pattern is compiled here, so an invalid pattern is reported
/// immediately rather than when the predicate is first tested.
///
/// ```
/// use criteria::{matches_regex, Predicate};
///
/// let greeting = matches_regex(r"^Good (Morning|Evening)$").unwrap();
/// assert!(greeting.test("Good Morning"));
/// assert!(!greeting.test("Good Morning Gentlemen"));
///
/// assert!(matches_regex("(unclosed").is_err());
/// ```
pub fn matches_regex(pattern: &str) -> Result<Matches> {
    Ok(Matches::new(Regex::new(pattern)?))
}
