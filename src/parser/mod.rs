//! Recursive-descent parser for the curly-brace source grammar.
//!
//! The token stream is materialized into a vector; "lookahead" is the token
//! at the cursor and speculative multi-token lookahead is a bounds-checked
//! read past it that never moves the cursor. The parser is fail-fast: the
//! first mismatch aborts the whole parse and no partial tree escapes.

pub mod control;
pub mod error;
pub mod inline;

#[cfg(test)]
pub mod test;

pub use error::SyntaxError;

use crate::ast::{Class, Import, Program, SuperStatement};
use crate::lexer::{Span, Token, TokenKind};
use crate::locate::locate;

/// Parses a whole token sequence into a [`Program`]. Passing the source
/// buffer enables line/column positions on syntax errors.
pub fn parse(tokens: Vec<(Token, Span)>, source: Option<&str>) -> Result<Program, SyntaxError> {
    Parser::new(tokens, source).parse_program()
}

pub struct Parser<'a> {
    tokens: Vec<(Token, Span)>,
    cursor: usize,
    source: Option<&'a str>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<(Token, Span)>, source: Option<&'a str>) -> Self {
        Parser {
            tokens,
            cursor: 0,
            source,
        }
    }

    // PROGRAM --> IMPORTS CLASSES
    pub fn parse_program(&mut self) -> Result<Program, SyntaxError> {
        let imports = self.parse_imports()?;
        let classes = self.parse_classes()?;
        if self.cursor < self.tokens.len() {
            return Err(self.error_at_lookahead("end of input"));
        }
        Ok(Program { imports, classes })
    }

    // IMPORT_STATEMENT --> using IDS ;
    fn parse_imports(&mut self) -> Result<Vec<Import>, SyntaxError> {
        let mut imports = vec![];
        while self.at(TokenKind::Using) {
            self.expect(TokenKind::Using)?;
            let packages = self.parse_ids()?;
            self.expect(TokenKind::Semicolon)?;
            imports.push(Import { packages });
        }
        Ok(imports)
    }

    // CLASS_STATEMENT --> class id { SUPER_STATEMENTS }
    fn parse_classes(&mut self) -> Result<Vec<Class>, SyntaxError> {
        let mut classes = vec![];
        while self.at(TokenKind::Class) {
            self.expect(TokenKind::Class)?;
            let name = self.expect(TokenKind::Identifier)?.text().to_string();
            self.expect(TokenKind::OpenCurlyBracket)?;
            let statements = self.parse_super_statements()?;
            self.expect(TokenKind::CloseCurlyBracket)?;
            classes.push(Class { name, statements });
        }
        Ok(classes)
    }

    pub(crate) fn parse_super_statements(&mut self) -> Result<Vec<SuperStatement>, SyntaxError> {
        let mut statements = vec![];
        while self.is_super_statement() {
            statements.push(self.parse_super_statement()?);
        }
        Ok(statements)
    }

    // SUPER_STATEMENT --> COMMENT_STATEMENT | FUNCTION_STATEMENT | INLINE_STATEMENT ;
    pub(crate) fn parse_super_statement(&mut self) -> Result<SuperStatement, SyntaxError> {
        if self.is_comment() {
            self.parse_comment()
        } else if self.is_function() {
            self.parse_function()
        } else if self.is_inline_statement() {
            let statement = self.parse_inline_statement()?;
            self.expect(TokenKind::Semicolon)?;
            Ok(SuperStatement::Inline(statement))
        } else {
            Err(self.error_at_lookahead("statement"))
        }
    }

    pub(crate) fn is_super_statement(&self) -> bool {
        self.is_comment() || self.is_function() || self.is_inline_statement()
    }

    fn parse_comment(&mut self) -> Result<SuperStatement, SyntaxError> {
        match self.advance() {
            Some(Token::Comment(text)) | Some(Token::MultilineComment(text)) => {
                Ok(SuperStatement::Comment { text })
            }
            _ => Err(self.error_at_lookahead("comment")),
        }
    }

    fn is_comment(&self) -> bool {
        matches!(
            self.peek_kind(),
            Some(TokenKind::Comment | TokenKind::MultilineComment)
        )
    }

    // FUNCTION_STATEMENT --> DATA_TYPE id ( DECLARES ) { STATEMENTS }
    fn parse_function(&mut self) -> Result<SuperStatement, SyntaxError> {
        let return_type = self.expect(TokenKind::DataType)?.text().to_string();
        let name = self.expect(TokenKind::Identifier)?.text().to_string();

        self.expect(TokenKind::OpenRoundBracket)?;
        let parameters = self.parse_parameters()?;
        self.expect(TokenKind::CloseRoundBracket)?;

        self.expect(TokenKind::OpenCurlyBracket)?;
        let body = self.parse_statements()?;
        self.expect(TokenKind::CloseCurlyBracket)?;

        Ok(SuperStatement::Function {
            return_type,
            name,
            parameters,
            body,
        })
    }

    fn is_function(&self) -> bool {
        self.lookahead_for(&[
            TokenKind::DataType,
            TokenKind::Identifier,
            TokenKind::OpenRoundBracket,
        ])
    }

    pub(crate) fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.cursor).map(|(token, _)| token.kind())
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).map(|(token, _)| token.clone());
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Consumes the lookahead if it has the expected category, otherwise
    /// fails the parse.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        match self.tokens.get(self.cursor) {
            Some((token, _)) if token.kind() == kind => {
                let token = token.clone();
                self.cursor += 1;
                Ok(token)
            }
            _ => Err(self.error_at_lookahead(kind.label())),
        }
    }

    /// Speculative lookahead: checks the next tokens against a category
    /// sequence without moving the cursor.
    pub(crate) fn lookahead_for(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().enumerate().all(|(offset, kind)| {
            self.tokens
                .get(self.cursor + offset)
                .is_some_and(|(token, _)| token.kind() == *kind)
        })
    }

    pub(crate) fn error_at_lookahead(&self, expected: &str) -> SyntaxError {
        let (found, span) = match self.tokens.get(self.cursor) {
            Some((token, span)) => (token.text().to_string(), span.clone()),
            None => {
                let end = self.tokens.last().map(|(_, span)| span.end).unwrap_or(0);
                ("end of input".to_string(), end..end)
            }
        };
        let position = self.source.map(|source| locate(source, span.start));
        SyntaxError {
            expected: expected.to_string(),
            found,
            span,
            position,
        }
    }
}
