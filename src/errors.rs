//! Submodule defining the errors used across the crate.

use crate::sql::{TokenClass, TokenKind};

/// Syntax errors reported while parsing a statement.
///
/// The `Display` output is the diagnostic shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The current token is not the one the grammar requires.
    #[error("Expected {expected}, Actual {found}")]
    UnexpectedToken {
        /// What was expected.
        expected: TokenKind,
        /// What was found.
        found: TokenKind,
        /// Position in input.
        pos: usize,
    },
    /// The current token is not a member of the required class.
    #[error("Expected {expected}")]
    WrongTokenClass {
        /// The class that was expected.
        expected: TokenClass,
        /// Position in input.
        pos: usize,
    },
    /// A character that starts no token.
    #[error("Unexpected character '{found}' at position {pos}")]
    UnexpectedChar {
        /// The unexpected character.
        found: char,
        /// Position in input.
        pos: usize,
    },
}

impl SyntaxError {
    /// Byte offset in the input where the error was detected.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { pos, .. }
            | SyntaxError::WrongTokenClass { pos, .. }
            | SyntaxError::UnexpectedChar { pos, .. } => *pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::TypeName;
    use alloc::string::ToString;

    #[test]
    fn test_diagnostic_format() {
        let error = SyntaxError::UnexpectedToken {
            expected: TokenKind::Table,
            found: TokenKind::Identifier,
            pos: 7,
        };
        assert_eq!(error.to_string(), "Expected TABLE, Actual <identifier>");
        assert_eq!(error.position(), 7);

        let error = SyntaxError::UnexpectedToken {
            expected: TokenKind::RParen,
            found: TokenKind::Type(TypeName::Blob),
            pos: 0,
        };
        assert_eq!(error.to_string(), "Expected ), Actual BLOB");
    }

    #[test]
    fn test_wrong_class_format() {
        let error = SyntaxError::WrongTokenClass {
            expected: TokenClass::TypeName,
            pos: 3,
        };
        assert_eq!(error.to_string(), "Expected a type keyword");
    }

    #[test]
    fn test_unexpected_char_format() {
        let error = SyntaxError::UnexpectedChar { found: '*', pos: 4 };
        assert_eq!(error.to_string(), "Unexpected character '*' at position 4");
    }
}
