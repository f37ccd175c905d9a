use logos::Logos;
use syntax::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum TokenKind {
    // ===== Keywords (exact tokens; these win ties against the Ident regex) =====
    #[token("if")]
    KwIf,
    #[token("then")]
    KwThen,
    #[token("else")]
    KwElse,
    #[token("let")]
    KwLet,
    #[token("in")]
    KwIn,
    #[token("fun")]
    KwFun,
    #[token("end")]
    KwEnd,
    #[token("true")]
    KwTrue,
    #[token("false")]
    KwFalse,

    // ===== Literals =====
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok(), priority = 3)]
    Int(i64),

    // ===== Idents =====
    // A variable name is any maximal run of non-whitespace, non-parenthesis
    // characters, so `+`, `<=` and `x'` are ordinary identifiers.
    #[regex(r"[^ \t\n\r\f()]+", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    // ===== Symbols =====
    #[token("->")]
    Arrow,
    #[token("=")]
    Eq,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    Eof,

    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl From<(TokenKind, std::ops::Range<usize>)> for Token {
    fn from((kind, range): (TokenKind, std::ops::Range<usize>)) -> Self {
        Token {
            kind,
            span: Span::new(range.start as u32, range.end as u32),
        }
    }
}

pub fn lex_raw(source: &str) -> Vec<Token> {
    let mut lx = TokenKind::lexer(source);
    let mut out = Vec::new();
    while let Some(kind) = lx.next() {
        let span = lx.span();
        let kind = match kind {
            Ok(k) => k,
            Err(_) => TokenKind::Error,
        };
        out.push(Token::from((kind, span)));
    }
    out
}

pub fn lex(source: &str) -> Vec<Token> {
    lex_raw(source)
}

/// Lightweight error type the parser can use when expectations fail.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub fn new<M: Into<String>>(message: M, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

pub mod stream;
pub use stream::TokenStream;
pub use TokenKind::*;
