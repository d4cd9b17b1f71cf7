//! Parser for TypeScript interface declaration files.
//!
//! The parser converts a stream of tokens into a list of top-level items.
//! It models only the statements guard generation needs (named-binding
//! imports and interface declarations); any other top-level statement is
//! skipped wholesale, matching the tolerant behavior of declaration
//! tooling that ignores what it does not understand.

use crate::ast::{Field, ImportDecl, InterfaceDecl, Item, TypeExpr};
use crate::error::{Error, Result};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Type keywords that are neither supported primitives nor interface
/// references. They classify as unsupported rather than as named
/// references that could never resolve.
const RESERVED_TYPE_KEYWORDS: &[&str] = &[
    "boolean",
    "any",
    "unknown",
    "null",
    "undefined",
    "void",
    "object",
    "symbol",
    "bigint",
    "never",
];

/// Parser for declaration source code.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages and type-text slicing).
    source: &'src str,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source,
        }
    }

    /// Parses all top-level items from the source.
    ///
    /// # Errors
    /// Returns an error if an import or interface statement is malformed.
    pub fn parse_all(&mut self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        self.skip_trivia();

        while self.current.kind != TokenKind::Eof {
            match &self.current.kind {
                TokenKind::Import => {
                    if let Some(import) = self.parse_import()? {
                        items.push(Item::Import(import));
                    }
                }
                TokenKind::Interface => {
                    items.push(Item::Interface(self.parse_interface()?));
                }
                TokenKind::Export => {
                    self.advance();
                    self.skip_trivia();
                    if self.current.kind == TokenKind::Interface {
                        items.push(Item::Interface(self.parse_interface()?));
                    } else {
                        self.skip_statement();
                    }
                }
                _ => self.skip_statement(),
            }
            self.skip_trivia();
        }

        Ok(items)
    }

    /// Parses an import statement.
    ///
    /// Returns `None` for default and namespace import forms, which
    /// introduce no named bindings and are skipped.
    fn parse_import(&mut self) -> Result<Option<ImportDecl>> {
        let start_span = self.current.span;
        self.expect(&TokenKind::Import)?;
        self.skip_trivia();

        if self.current.kind != TokenKind::LBrace {
            self.skip_statement();
            return Ok(None);
        }
        self.advance(); // consume '{'

        let mut bindings = Vec::new();
        loop {
            self.skip_trivia();
            match &self.current.kind {
                TokenKind::RBrace => break,
                TokenKind::Ident(name) => {
                    bindings.push(name.clone());
                    self.advance();
                    self.skip_trivia();
                    if self.current.kind == TokenKind::Comma {
                        self.advance();
                    }
                }
                TokenKind::Eof => {
                    return Err(self.error_at(start_span, "unterminated import bindings"));
                }
                _ => {
                    return Err(self.error(&format!(
                        "expected identifier in import bindings, found {}",
                        self.current.kind.name()
                    )));
                }
            }
        }
        self.expect(&TokenKind::RBrace)?;

        self.skip_trivia();
        self.expect(&TokenKind::From)?;
        self.skip_trivia();

        let specifier = match &self.current.kind {
            TokenKind::StringLit(s) => {
                let s = s.clone();
                self.advance();
                s
            }
            TokenKind::Error(msg) => return Err(self.error(&msg.clone())),
            _ => {
                return Err(self.error(&format!(
                    "expected module specifier string, found {}",
                    self.current.kind.name()
                )));
            }
        };

        self.skip_trivia();
        let end_span = self.current.span;
        self.expect(&TokenKind::Semicolon)?;

        Ok(Some(ImportDecl {
            bindings,
            specifier,
            span: start_span.to(end_span),
        }))
    }

    /// Parses an interface declaration (the `interface` keyword is current).
    fn parse_interface(&mut self) -> Result<InterfaceDecl> {
        let start_span = self.current.span;
        self.expect(&TokenKind::Interface)?;
        self.skip_trivia();

        let name = self.expect_ident("interface name")?;
        self.skip_trivia();

        let mut extends = Vec::new();
        if self.current.kind == TokenKind::Extends {
            self.advance();
            loop {
                self.skip_trivia();
                extends.push(self.expect_ident("parent interface name")?);
                self.skip_trivia();
                if self.current.kind == TokenKind::Comma {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        self.expect(&TokenKind::LBrace)?;

        let mut fields = Vec::new();
        let end_span = loop {
            self.skip_trivia();
            match &self.current.kind {
                TokenKind::RBrace => {
                    let span = self.current.span;
                    self.advance();
                    break span;
                }
                TokenKind::Eof => {
                    return Err(self.error_at(start_span, "unterminated interface body"));
                }
                _ => fields.push(self.parse_field()?),
            }
        };

        Ok(InterfaceDecl {
            name,
            extends,
            fields,
            span: start_span.to(end_span),
        })
    }

    /// Parses one interface member.
    fn parse_field(&mut self) -> Result<Field> {
        let start_span = self.current.span;
        let name = self.member_name()?;
        self.skip_trivia();

        let optional = self.current.kind == TokenKind::Question;
        if optional {
            self.advance();
            self.skip_trivia();
        }

        self.expect(&TokenKind::Colon)?;
        self.skip_trivia();

        let (type_tokens, type_span) = self.collect_type_tokens()?;
        let ty = classify_type(&type_tokens, type_span.text(self.source), optional);

        // Member separator: ';' or ',' or nothing before the closing brace.
        self.skip_trivia();
        let end_span = match self.current.kind {
            TokenKind::Semicolon | TokenKind::Comma => {
                let span = self.current.span;
                self.advance();
                span
            }
            _ => type_span,
        };

        Ok(Field {
            name,
            ty,
            span: start_span.to(end_span),
        })
    }

    /// Collects the raw tokens of a type annotation up to the member
    /// terminator, tracking bracket depth so inline shapes stay in one
    /// annotation.
    fn collect_type_tokens(&mut self) -> Result<(Vec<TokenKind>, Span)> {
        let mut tokens = Vec::new();
        let mut span: Option<Span> = None;
        let mut depth: u32 = 0;

        loop {
            match &self.current.kind {
                TokenKind::Semicolon | TokenKind::Comma if depth == 0 => break,
                TokenKind::RBrace if depth == 0 => break,
                TokenKind::Eof => {
                    return Err(self.error("unexpected end of input in type annotation"));
                }
                TokenKind::Error(msg) => return Err(self.error(&msg.clone())),
                kind => {
                    match kind {
                        TokenKind::LBrace
                        | TokenKind::LParen
                        | TokenKind::LBracket
                        | TokenKind::LAngle => depth += 1,
                        TokenKind::RBrace
                        | TokenKind::RParen
                        | TokenKind::RBracket
                        | TokenKind::RAngle => depth = depth.saturating_sub(1),
                        _ => {}
                    }
                    tokens.push(kind.clone());
                    span = Some(match span {
                        Some(s) => s.to(self.current.span),
                        None => self.current.span,
                    });
                    self.advance();
                    self.skip_trivia();
                }
            }
        }

        if tokens.is_empty() {
            return Err(self.error("expected type annotation"));
        }
        // span is Some whenever tokens is non-empty
        Ok((tokens, span.unwrap_or_default()))
    }

    /// Reads a member name; keywords are valid member names.
    fn member_name(&mut self) -> Result<String> {
        let name = match &self.current.kind {
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Import => "import".to_string(),
            TokenKind::From => "from".to_string(),
            TokenKind::Export => "export".to_string(),
            TokenKind::Interface => "interface".to_string(),
            TokenKind::Extends => "extends".to_string(),
            TokenKind::Error(msg) => return Err(self.error(&msg.clone())),
            _ => {
                return Err(self.error(&format!(
                    "expected member name, found {}",
                    self.current.kind.name()
                )));
            }
        };
        self.advance();
        Ok(name)
    }

    /// Skips an unmodeled top-level statement.
    ///
    /// Consumes through the terminating `;` or the close of a balanced
    /// top-level `{...}` block, whichever comes first.
    fn skip_statement(&mut self) {
        let mut depth: u32 = 0;
        loop {
            match self.current.kind {
                TokenKind::Eof => break,
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    break;
                }
                TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                    self.advance();
                    if depth == 0 {
                        self.skip_trivia();
                        if self.current.kind == TokenKind::Semicolon {
                            self.advance();
                        }
                        break;
                    }
                }
                _ => self.advance(),
            }
        }
    }

    /// Skips comment tokens.
    fn skip_trivia(&mut self) {
        while self.current.kind.is_trivia() {
            self.advance();
        }
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        if std::mem::discriminant(&self.current.kind) == std::mem::discriminant(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!(
                "expected {}, found {}",
                expected.name(),
                self.current.kind.name()
            )))
        }
    }

    /// Expects an identifier and returns its text.
    fn expect_ident(&mut self, what: &str) -> Result<String> {
        match &self.current.kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            TokenKind::Error(msg) => Err(self.error(&msg.clone())),
            _ => Err(self.error(&format!(
                "expected {what}, found {}",
                self.current.kind.name()
            ))),
        }
    }

    /// Creates a parse error at the current position.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    /// Creates a parse error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::parse(message, span.line, span.column, self.context_at(span))
    }

    /// Gets the source line containing a span, for error messages.
    fn context_at(&self, span: Span) -> String {
        let start = span.start.min(self.source.len());
        let line_start = self.source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.source[start..]
            .find('\n')
            .map_or(self.source.len(), |i| start + i);

        self.source[line_start..line_end].to_string()
    }
}

/// Classifies a collected type annotation.
///
/// A single bare identifier is `number`, `string`, or a named reference;
/// reserved type keywords and every multi-token shape are unsupported.
/// An optional member marker makes the whole annotation unsupported.
fn classify_type(tokens: &[TokenKind], text: &str, optional: bool) -> TypeExpr {
    if optional {
        return TypeExpr::Unsupported(format!("{text}?"));
    }
    match tokens {
        [TokenKind::Ident(name)] => match name.as_str() {
            "number" => TypeExpr::Number,
            "string" => TypeExpr::String,
            name if RESERVED_TYPE_KEYWORDS.contains(&name) => {
                TypeExpr::Unsupported(name.to_string())
            }
            name => TypeExpr::Named(name.to_string()),
        },
        _ => TypeExpr::Unsupported(text.to_string()),
    }
}

/// Parses source code into top-level items.
///
/// # Errors
/// Returns an error if an import or interface statement is malformed.
pub fn parse(source: &str) -> Result<Vec<Item>> {
    Parser::new(source).parse_all()
}
