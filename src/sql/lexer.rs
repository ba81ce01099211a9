//! SQL tokenizer for the `CREATE TABLE` grammar.
//!
//! The tokenizer never allocates: every [`Token`] borrows its text from the
//! input line, and the cursor only ever moves forward.

use core::fmt::{self, Display};
use core::ops::Range;

/// A token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'input> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The slice of the input covered by this token.
    pub text: &'input str,
    /// The byte offset in the input where this token starts.
    pub pos: usize,
}

impl Token<'_> {
    /// Byte range of the token within the input.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.pos..self.pos + self.text.len()
    }
}

/// Column type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// NULL keyword
    Null,
    /// INTEGER keyword
    Integer,
    /// REAL keyword
    Real,
    /// TEXT keyword
    Text,
    /// BLOB keyword
    Blob,
}

impl TypeName {
    /// Every type keyword, in declaration order.
    pub const ALL: [TypeName; 5] = [
        TypeName::Null,
        TypeName::Integer,
        TypeName::Real,
        TypeName::Text,
        TypeName::Blob,
    ];

    /// The keyword spelling of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeName::Null => "NULL",
            TypeName::Integer => "INTEGER",
            TypeName::Real => "REAL",
            TypeName::Text => "TEXT",
            TypeName::Blob => "BLOB",
        }
    }

    /// Look up a type keyword. Matching is exact-case.
    #[must_use]
    pub fn from_keyword(ident: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == ident)
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The different kinds of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    /// End of input
    Eof,

    // Literals
    /// An identifier (table name or column name)
    Identifier,

    // Keywords
    /// CREATE keyword
    Create,
    /// TABLE keyword
    Table,
    /// A column type keyword
    Type(TypeName),

    // Symbols
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
    /// Semicolon
    Semicolon,
    /// Comma
    Comma,

    /// A character that does not start any token
    Illegal,
}

impl TokenKind {
    /// Returns the class this kind belongs to.
    #[must_use]
    pub const fn class(self) -> TokenClass {
        match self {
            TokenKind::Eof => TokenClass::End,
            TokenKind::Identifier => TokenClass::Literal,
            TokenKind::Create | TokenKind::Table => TokenClass::Keyword,
            TokenKind::Type(_) => TokenClass::TypeName,
            TokenKind::LParen | TokenKind::RParen | TokenKind::Semicolon | TokenKind::Comma => {
                TokenClass::Punctuation
            }
            TokenKind::Illegal => TokenClass::Illegal,
        }
    }

    /// Returns a `'static` descriptive name for this token kind.
    #[must_use]
    pub const fn static_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "<eof>",
            TokenKind::Identifier => "<identifier>",
            TokenKind::Create => "CREATE",
            TokenKind::Table => "TABLE",
            TokenKind::Type(ty) => ty.as_str(),
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Illegal => "<illegal>",
        }
    }

    /// Classify an identifier span against the keyword table.
    ///
    /// Matching is exact-case: `create` and `Create` are not keywords.
    #[must_use]
    pub fn keyword(ident: &str) -> Option<Self> {
        match ident {
            "CREATE" => Some(TokenKind::Create),
            "TABLE" => Some(TokenKind::Table),
            _ => TypeName::from_keyword(ident).map(TokenKind::Type),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.static_name())
    }
}

/// Groups of related token kinds that grammar rules accept as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Identifiers.
    Literal,
    /// Statement keywords (`CREATE`, `TABLE`). Also contains [`TokenClass::TypeName`].
    Keyword,
    /// Column type keywords.
    TypeName,
    /// `(`, `)`, `;` and `,`.
    Punctuation,
    /// End of input.
    End,
    /// Characters that start no token.
    Illegal,
}

impl TokenClass {
    /// Whether `kind` is a member of this class.
    ///
    /// Type keywords are keywords too, so [`TokenClass::Keyword`] contains them.
    #[must_use]
    pub fn contains(self, kind: TokenKind) -> bool {
        match (self, kind.class()) {
            (TokenClass::Keyword, TokenClass::Keyword | TokenClass::TypeName) => true,
            (expected, actual) => expected == actual,
        }
    }
}

impl Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenClass::Literal => "an identifier",
            TokenClass::Keyword => "a keyword",
            TokenClass::TypeName => "a type keyword",
            TokenClass::Punctuation => "punctuation",
            TokenClass::End => "end of input",
            TokenClass::Illegal => "an illegal character",
        })
    }
}

/// SQL tokenizer that produces tokens from a single input line.
///
/// The end of the slice terminates the input, and so does a NUL character.
#[derive(Debug, Clone)]
pub struct Tokenizer<'input> {
    input: &'input str,
    start: usize,
    current: usize,
}

impl<'input> Tokenizer<'input> {
    /// Create a new tokenizer for the given input.
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            start: 0,
            current: 0,
        }
    }

    /// Get the current scan position in the input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Consume and return the next token.
    ///
    /// Once the input is exhausted every call returns [`TokenKind::Eof`]
    /// at the same position.
    pub fn next(&mut self) -> Token<'input> {
        self.skip_whitespace();
        self.start = self.current;

        let Some(c) = self.peek() else {
            return self.make_token(TokenKind::Eof);
        };
        self.current += c.len_utf8();

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            _ if is_ident_start(c) => return self.read_identifier(),
            _ => TokenKind::Illegal,
        };

        self.make_token(kind)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.current..]
            .chars()
            .next()
            .filter(|&c| c != '\0')
    }

    /// Skip spaces, tabs and carriage returns. Newlines are not whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !is_whitespace(c) {
                break;
            }
            self.current += 1;
        }
    }

    fn read_identifier(&mut self) -> Token<'input> {
        let bytes = self.input.as_bytes();
        while self.current < bytes.len() && bytes[self.current].is_ascii_alphabetic() {
            self.current += 1;
        }

        let ident = &self.input[self.start..self.current];
        let kind = TokenKind::keyword(ident).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }

    fn make_token(&self, kind: TokenKind) -> Token<'input> {
        Token {
            kind,
            text: &self.input[self.start..self.current],
            pos: self.start,
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[cfg(feature = "testing")]
mod arbitrary_impl {
    use super::TypeName;
    use arbitrary::{Arbitrary, Unstructured};

    impl<'a> Arbitrary<'a> for TypeName {
        fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
            Ok(*u.choose(&TypeName::ALL)?)
        }
    }
}
