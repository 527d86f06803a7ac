use logos::Logos;
use serde::Serialize;

use std::ops::Range;

#[cfg(test)]
pub mod test;

pub type Span = Range<usize>;

/// Tokens of the curly-brace source grammar.
///
/// A single maximal-munch scan replaces the reference implementation's
/// rescan-per-pattern matcher: longer matches always win, and the explicit
/// `priority` below settles the one genuine tie (a data-type spelling such
/// as `int` is also a valid identifier). Comments are captured as one token
/// carrying the body text, delimiters included in the span but not the body.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("using")]
    Using,

    #[token("class")]
    Class,

    #[token("if")]
    If,

    #[token("else")]
    Else,

    #[token("for")]
    For,

    #[token("do")]
    Do,

    #[token("while")]
    While,

    #[token("switch")]
    Switch,

    #[token("case")]
    Case,

    #[token("default")]
    Default,

    #[token("break")]
    Break,

    #[token("return")]
    Return,

    #[token("null")]
    Null,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[regex(
        r"(void|var)|(bool|char|short|int|long|float|double|decimal|String|string)(\[\]|\?)?",
        |lex| lex.slice().to_string(),
        priority = 6
    )]
    DataType(String),

    #[regex(r"[0-9]*\.[0-9]+|[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    // The quotes stay part of the token text, as in the source grammar.
    #[regex(r#""[^"]*""#, |lex| lex.slice().to_string())]
    Str(String),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 2)]
    Identifier(String),

    #[regex(r"//[^\r\n]*", |lex| lex.slice()[2..].to_string())]
    Comment(String),

    #[token("/*", lex_multiline_comment)]
    MultilineComment(String),

    // Single and double spellings are the same operator but different text.
    #[token("&&", |lex| lex.slice().to_string())]
    #[token("&", |lex| lex.slice().to_string())]
    And(String),

    #[token("||", |lex| lex.slice().to_string())]
    #[token("|", |lex| lex.slice().to_string())]
    Or(String),

    #[token("!")]
    Not,

    #[token("=")]
    Equal,

    #[token("+=")]
    PlusEqual,

    #[token("-=")]
    MinusEqual,

    #[token("==")]
    DoubleEquals,

    #[token("!=")]
    NotEqual,

    #[token("<")]
    LessThan,

    #[token(">")]
    GreaterThan,

    #[token("<=")]
    LessThanOrEqual,

    #[token(">=")]
    GreaterThanOrEqual,

    #[token("(")]
    OpenRoundBracket,

    #[token(")")]
    CloseRoundBracket,

    #[token("{")]
    OpenCurlyBracket,

    #[token("}")]
    CloseCurlyBracket,

    #[token("[")]
    OpenSquareBracket,

    #[token("]")]
    CloseSquareBracket,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("++")]
    DoublePluses,

    #[token("--")]
    DoubleMinuses,

    #[token("%")]
    Percent,

    #[token("*")]
    Asterisk,

    #[token("\\")]
    BackSlash,

    #[token("/")]
    ForwardSlash,

    #[token(".")]
    Dot,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,
}

// Body runs up to (and not across) the first `*/`. An unterminated comment
// produces an error token, which `tokenize` discards like any other
// uncovered text.
fn lex_multiline_comment(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let rest = lex.remainder();
    let end = rest.find("*/")?;
    let body = rest[..end].to_string();
    lex.bump(end + 2);
    Some(body)
}

/// Token category, used for lookahead checks and diagnostics. Mirrors
/// [`Token`] without the captured text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Using,
    Class,
    If,
    Else,
    For,
    Do,
    While,
    Switch,
    Case,
    Default,
    Break,
    Return,
    Null,
    True,
    False,
    DataType,
    Number,
    Str,
    Identifier,
    Comment,
    MultilineComment,
    And,
    Or,
    Not,
    Equal,
    PlusEqual,
    MinusEqual,
    DoubleEquals,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    OpenRoundBracket,
    CloseRoundBracket,
    OpenCurlyBracket,
    CloseCurlyBracket,
    OpenSquareBracket,
    CloseSquareBracket,
    Plus,
    Minus,
    DoublePluses,
    DoubleMinuses,
    Percent,
    Asterisk,
    BackSlash,
    ForwardSlash,
    Dot,
    Comma,
    Colon,
    Semicolon,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Using => TokenKind::Using,
            Token::Class => TokenKind::Class,
            Token::If => TokenKind::If,
            Token::Else => TokenKind::Else,
            Token::For => TokenKind::For,
            Token::Do => TokenKind::Do,
            Token::While => TokenKind::While,
            Token::Switch => TokenKind::Switch,
            Token::Case => TokenKind::Case,
            Token::Default => TokenKind::Default,
            Token::Break => TokenKind::Break,
            Token::Return => TokenKind::Return,
            Token::Null => TokenKind::Null,
            Token::True => TokenKind::True,
            Token::False => TokenKind::False,
            Token::DataType(_) => TokenKind::DataType,
            Token::Number(_) => TokenKind::Number,
            Token::Str(_) => TokenKind::Str,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Comment(_) => TokenKind::Comment,
            Token::MultilineComment(_) => TokenKind::MultilineComment,
            Token::And(_) => TokenKind::And,
            Token::Or(_) => TokenKind::Or,
            Token::Not => TokenKind::Not,
            Token::Equal => TokenKind::Equal,
            Token::PlusEqual => TokenKind::PlusEqual,
            Token::MinusEqual => TokenKind::MinusEqual,
            Token::DoubleEquals => TokenKind::DoubleEquals,
            Token::NotEqual => TokenKind::NotEqual,
            Token::LessThan => TokenKind::LessThan,
            Token::GreaterThan => TokenKind::GreaterThan,
            Token::LessThanOrEqual => TokenKind::LessThanOrEqual,
            Token::GreaterThanOrEqual => TokenKind::GreaterThanOrEqual,
            Token::OpenRoundBracket => TokenKind::OpenRoundBracket,
            Token::CloseRoundBracket => TokenKind::CloseRoundBracket,
            Token::OpenCurlyBracket => TokenKind::OpenCurlyBracket,
            Token::CloseCurlyBracket => TokenKind::CloseCurlyBracket,
            Token::OpenSquareBracket => TokenKind::OpenSquareBracket,
            Token::CloseSquareBracket => TokenKind::CloseSquareBracket,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::DoublePluses => TokenKind::DoublePluses,
            Token::DoubleMinuses => TokenKind::DoubleMinuses,
            Token::Percent => TokenKind::Percent,
            Token::Asterisk => TokenKind::Asterisk,
            Token::BackSlash => TokenKind::BackSlash,
            Token::ForwardSlash => TokenKind::ForwardSlash,
            Token::Dot => TokenKind::Dot,
            Token::Comma => TokenKind::Comma,
            Token::Colon => TokenKind::Colon,
            Token::Semicolon => TokenKind::Semicolon,
        }
    }

    /// Literal text of the token. For comments this is the body without
    /// the delimiters.
    pub fn text(&self) -> &str {
        match self {
            Token::Using => "using",
            Token::Class => "class",
            Token::If => "if",
            Token::Else => "else",
            Token::For => "for",
            Token::Do => "do",
            Token::While => "while",
            Token::Switch => "switch",
            Token::Case => "case",
            Token::Default => "default",
            Token::Break => "break",
            Token::Return => "return",
            Token::Null => "null",
            Token::True => "true",
            Token::False => "false",
            Token::DataType(s)
            | Token::Number(s)
            | Token::Str(s)
            | Token::Identifier(s)
            | Token::Comment(s)
            | Token::MultilineComment(s)
            | Token::And(s)
            | Token::Or(s) => s,
            Token::Not => "!",
            Token::Equal => "=",
            Token::PlusEqual => "+=",
            Token::MinusEqual => "-=",
            Token::DoubleEquals => "==",
            Token::NotEqual => "!=",
            Token::LessThan => "<",
            Token::GreaterThan => ">",
            Token::LessThanOrEqual => "<=",
            Token::GreaterThanOrEqual => ">=",
            Token::OpenRoundBracket => "(",
            Token::CloseRoundBracket => ")",
            Token::OpenCurlyBracket => "{",
            Token::CloseCurlyBracket => "}",
            Token::OpenSquareBracket => "[",
            Token::CloseSquareBracket => "]",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::DoublePluses => "++",
            Token::DoubleMinuses => "--",
            Token::Percent => "%",
            Token::Asterisk => "*",
            Token::BackSlash => "\\",
            Token::ForwardSlash => "/",
            Token::Dot => ".",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::Semicolon => ";",
        }
    }
}

impl TokenKind {
    /// Human label used in syntax errors, e.g. `close_curly_bracket`.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Using => "using",
            TokenKind::Class => "class",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::Do => "do",
            TokenKind::While => "while",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::Break => "break",
            TokenKind::Return => "return",
            TokenKind::Null => "null",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::DataType => "data_type",
            TokenKind::Number => "number",
            TokenKind::Str => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Comment => "comment",
            TokenKind::MultilineComment => "multiline_comment",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Equal => "equal",
            TokenKind::PlusEqual => "plus_equal",
            TokenKind::MinusEqual => "minus_equal",
            TokenKind::DoubleEquals => "double_equals",
            TokenKind::NotEqual => "not_equal",
            TokenKind::LessThan => "less_than",
            TokenKind::GreaterThan => "greater_than",
            TokenKind::LessThanOrEqual => "less_than_or_equal",
            TokenKind::GreaterThanOrEqual => "greater_than_or_equal",
            TokenKind::OpenRoundBracket => "open_round_bracket",
            TokenKind::CloseRoundBracket => "close_round_bracket",
            TokenKind::OpenCurlyBracket => "open_curly_bracket",
            TokenKind::CloseCurlyBracket => "close_curly_bracket",
            TokenKind::OpenSquareBracket => "open_square_bracket",
            TokenKind::CloseSquareBracket => "close_square_bracket",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::DoublePluses => "double_pluses",
            TokenKind::DoubleMinuses => "double_minuses",
            TokenKind::Percent => "percent",
            TokenKind::Asterisk => "asterisk",
            TokenKind::BackSlash => "back_slash",
            TokenKind::ForwardSlash => "forward_slash",
            TokenKind::Dot => "dot",
            TokenKind::Comma => "comma",
            TokenKind::Colon => "colon",
            TokenKind::Semicolon => "semicolon",
        }
    }
}

/// Runs the scanner over the whole source. Whitespace and text no pattern
/// covers produce no token; the result is strictly ordered by start offset
/// and identical for identical input.
pub fn tokenize(source: &str) -> Vec<(Token, Span)> {
    Token::lexer(source)
        .spanned()
        .filter_map(|(token, span)| token.ok().map(|token| (token, span)))
        .collect()
}

/// One row of the inspectable token dump.
#[derive(Debug, Serialize)]
pub struct TokenRecord {
    pub category: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

pub fn token_records(tokens: &[(Token, Span)]) -> Vec<TokenRecord> {
    tokens
        .iter()
        .map(|(token, span)| TokenRecord {
            category: token.kind(),
            text: token.text().to_string(),
            start: span.start,
            end: span.end,
        })
        .collect()
}
