use crate::error::AnalysisError;
use std::fmt;
use std::ops::Range;

/// Number of characters in a CURP.
pub const CURP_LEN: usize = 18;

/// A string that satisfies the CURP shape precondition: exactly 18 characters, all of
/// them `A`-`Z` or `0`-`9`, with at least one letter.
///
/// Holding a `RawCode` is what allows fixed-offset slicing without bounds or
/// char-boundary checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawCode<'a>(&'a str);

impl<'a> RawCode<'a> {
    /// Checks the shape precondition. No trimming or case folding happens here.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Shape`] describing the first violated rule.
    ///
    /// # Examples
    /// ```rust
    /// use curp_analysis::RawCode;
    ///
    /// assert!(RawCode::parse("GOMJ800101HDFRRL01").is_ok());
    /// assert!(RawCode::parse("gomj800101hdfrrl01").is_err());
    /// assert!(RawCode::parse("AB12").is_err());
    /// ```
    pub fn parse(input: &'a str) -> Result<Self, AnalysisError> {
        let len = input.chars().count();
        if len != CURP_LEN {
            return Err(AnalysisError::Shape {
                message: format!("expected {CURP_LEN} characters, got {len}").into(),
                context: None,
            });
        }

        if let Some((pos, ch)) =
            input.char_indices().find(|(_, ch)| !ch.is_ascii_uppercase() && !ch.is_ascii_digit())
        {
            return Err(AnalysisError::Shape {
                message: format!("character {ch:?} at byte {pos} is not an uppercase letter or digit")
                    .into(),
                context: None,
            });
        }

        if !input.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(AnalysisError::Shape {
                message: "a CURP must contain letters".into(),
                context: None,
            });
        }

        Ok(Self(input))
    }

    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Fixed-offset substring. Panics only for ranges past [`CURP_LEN`].
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> &'a str {
        &self.0[range]
    }

    /// Character at a fixed offset.
    #[must_use]
    pub fn char_at(&self, index: usize) -> char {
        char::from(self.0.as_bytes()[index])
    }
}

impl AsRef<str> for RawCode<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for RawCode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_code() {
        let code = RawCode::parse("GOMJ800101HDFRRL01").unwrap();
        assert_eq!(code.as_str(), "GOMJ800101HDFRRL01");
        assert_eq!(code.slice(11..13), "DF");
        assert_eq!(code.char_at(10), 'H');
    }

    #[test]
    fn rejects_wrong_length() {
        for input in ["", "AB12", "GOMJ800101HDFRRL0", "GOMJ800101HDFRRL012"] {
            assert!(matches!(RawCode::parse(input), Err(AnalysisError::Shape { .. })), "{input}");
        }
    }

    #[test]
    fn rejects_lowercase_and_symbols() {
        assert!(RawCode::parse("GOMj800101HDFRRL01").is_err());
        assert!(RawCode::parse("GOMJ-00101HDFRRL01").is_err());
        assert!(RawCode::parse("GOMJ800101HDFRRL0 ").is_err());
    }

    #[test]
    fn rejects_non_ascii_letters() {
        // 18 chars, but Ñ is outside A-Z.
        let err = RawCode::parse("ÑOMJ800101HDFRRL01").unwrap_err();
        assert!(err.to_string().contains("'Ñ'"));
    }

    #[test]
    fn rejects_all_digits() {
        assert!(RawCode::parse("000000000000000000").is_err());
    }
}
