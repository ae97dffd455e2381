//! Search patterns.

use regex::{Regex, RegexBuilder};

use crate::ReplaceError;

/// A compiled search pattern.
///
/// `global` decides whether every match in a text leaf is tried or only the
/// first one. Literal strings always compile to global, case-sensitive
/// patterns.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    global: bool,
}

impl Pattern {
    /// Wraps a regex that matches every occurrence.
    pub fn new(regex: Regex) -> Self {
        Self {
            regex,
            global: true,
        }
    }

    /// Wraps a regex that matches at most once per text leaf.
    pub fn once(regex: Regex) -> Self {
        Self {
            regex,
            global: false,
        }
    }

    /// Compiles a regex source into a global pattern.
    pub fn parse(source: &str) -> Result<Self, ReplaceError> {
        Ok(Self::new(Regex::new(source)?))
    }

    /// Compiles a regex source with explicit flags.
    pub fn with_flags(source: &str, global: bool, ignore_case: bool) -> Result<Self, ReplaceError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(ignore_case)
            .build()?;
        Ok(Self { regex, global })
    }

    /// Compiles a string that matches itself literally.
    pub fn literal(text: &str) -> Result<Self, ReplaceError> {
        Self::parse(&regex::escape(text))
    }

    /// The compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether every match is tried.
    pub const fn is_global(&self) -> bool {
        self.global
    }

    /// The regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// What to search for: literal text or a pattern.
#[derive(Debug, Clone)]
pub enum Find {
    /// Text matched literally.
    Literal(String),
    /// A compiled pattern.
    Pattern(Pattern),
}

impl Find {
    /// Compiles this into a pattern.
    pub fn into_pattern(self) -> Result<Pattern, ReplaceError> {
        match self {
            Find::Literal(text) => Pattern::literal(&text),
            Find::Pattern(pattern) => Ok(pattern),
        }
    }
}

impl From<&str> for Find {
    fn from(text: &str) -> Self {
        Find::Literal(text.to_string())
    }
}

impl From<String> for Find {
    fn from(text: String) -> Self {
        Find::Literal(text)
    }
}

impl From<Regex> for Find {
    fn from(regex: Regex) -> Self {
        Find::Pattern(Pattern::new(regex))
    }
}

impl From<Pattern> for Find {
    fn from(pattern: Pattern) -> Self {
        Find::Pattern(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_escapes_metacharacters() {
        let pattern = Pattern::literal("a.b*(c)").unwrap();

        assert!(pattern.is_global());
        assert!(pattern.regex().is_match("xa.b*(c)y"));
        assert!(!pattern.regex().is_match("aXbbc"));
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        let pattern = Pattern::literal("Code").unwrap();

        assert!(!pattern.regex().is_match("code"));
    }

    #[test]
    fn test_once_is_not_global() {
        let pattern = Pattern::once(Regex::new("a").unwrap());
        assert!(!pattern.is_global());
    }

    #[test]
    fn test_with_flags() {
        let pattern = Pattern::with_flags("code", false, true).unwrap();

        assert!(!pattern.is_global());
        assert!(pattern.regex().is_match("CODE"));
    }

    #[test]
    fn test_parse_error() {
        let result = Pattern::parse("(unclosed");
        assert!(matches!(result, Err(ReplaceError::Pattern(_))));
    }

    #[test]
    fn test_find_into_pattern() {
        let literal = Find::from("1+1").into_pattern().unwrap();
        let regex = Find::from(Regex::new(r"\d").unwrap()).into_pattern().unwrap();

        assert_eq!(literal.as_str(), r"1\+1");
        assert_eq!(regex.as_str(), r"\d");
        assert!(regex.is_global());
    }
}
