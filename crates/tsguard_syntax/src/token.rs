//! Token types for the declaration subset.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token types for TypeScript interface declaration files.
///
/// The lexer recognizes every punctuation character that can appear in a
/// declaration file, even where the parser only uses it to skip statements
/// or to reject an unsupported type shape.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `<`
    LAngle,
    /// `>`
    RAngle,

    // Punctuation
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `|`
    Pipe,
    /// `&`
    Amp,
    /// `?`
    Question,
    /// `=`
    Equals,
    /// `.`
    Dot,
    /// `*`
    Star,

    // Keywords
    /// `import`
    Import,
    /// `from`
    From,
    /// `export`
    Export,
    /// `interface`
    Interface,
    /// `extends`
    Extends,

    // Literals
    /// Identifier like `Point` or `label`
    Ident(String),
    /// String literal like `'./point.interface'` (quotes stripped)
    StringLit(String),
    /// Numeric literal text (only seen inside skipped statements)
    NumberLit(String),

    // Meta
    /// Comment text (including the `//` or `/* */` markers)
    Comment(String),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LAngle => "'<'",
            Self::RAngle => "'>'",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Pipe => "'|'",
            Self::Amp => "'&'",
            Self::Question => "'?'",
            Self::Equals => "'='",
            Self::Dot => "'.'",
            Self::Star => "'*'",
            Self::Import => "'import'",
            Self::From => "'from'",
            Self::Export => "'export'",
            Self::Interface => "'interface'",
            Self::Extends => "'extends'",
            Self::Ident(_) => "identifier",
            Self::StringLit(_) => "string",
            Self::NumberLit(_) => "number",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
