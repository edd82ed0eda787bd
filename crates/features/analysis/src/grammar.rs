//! Lexer and recognizer for the CURP format grammar.
//!
//! The lexer maps every character to a [`TokenClass`] and drops the rest, so the
//! recognizer only ever sees letters and digits. The grammar has a single production,
//! [`PRODUCTION`]: four letters, six digits, five letters and one digit.
//!
//! The first fifteen classes of the production must appear at the same positions of the
//! token stream. The closing digit is looked for among the tokens after them, so a code
//! whose sixteenth token is a letter (`GOMJ800101HDFRRL01`) is still accepted as long as
//! a digit follows. Anything else is [`GrammarVerdict::Rejected`].

/// Lexical class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// `A`-`Z`
    Letter,
    /// `0`-`9`
    Digit,
}

impl TokenClass {
    /// Returns `None` for characters outside the grammar's alphabet, including
    /// lowercase and non-ASCII letters.
    #[must_use]
    pub const fn classify(ch: char) -> Option<Self> {
        match ch {
            'A'..='Z' => Some(Self::Letter),
            '0'..='9' => Some(Self::Digit),
            _ => None,
        }
    }
}

use TokenClass::{Digit as D, Letter as L};

/// `[L;4] [D;6] [L;5] [D;1]`
pub const PRODUCTION: [TokenClass; 16] = [L, L, L, L, D, D, D, D, D, D, L, L, L, L, L, D];

/// Result of running the recognizer over an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarVerdict {
    Accepted,
    Rejected,
}

impl GrammarVerdict {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Token stream of `input`, in order, with unclassifiable characters skipped.
pub fn tokenize(input: &str) -> impl Iterator<Item = TokenClass> + '_ {
    input.chars().filter_map(TokenClass::classify)
}

/// Runs the recognizer over `input`.
///
/// # Examples
/// ```rust
/// use curp_analysis::grammar::{recognize, GrammarVerdict};
///
/// assert_eq!(recognize("GOMJ800101HDFRRL01"), GrammarVerdict::Accepted);
/// assert_eq!(recognize("1234800101HDFRRL01"), GrammarVerdict::Rejected);
/// assert_eq!(recognize("9ABCD12345X6EFGHI7"), GrammarVerdict::Rejected);
/// ```
#[must_use]
pub fn recognize(input: &str) -> GrammarVerdict {
    let Some((closing, positional)) = PRODUCTION.split_last() else {
        return GrammarVerdict::Rejected;
    };

    let mut tokens = tokenize(input);
    let in_place = positional.iter().all(|expected| tokens.next().as_ref() == Some(expected));

    if in_place && tokens.any(|token| token == *closing) {
        GrammarVerdict::Accepted
    } else {
        GrammarVerdict::Rejected
    }
}
