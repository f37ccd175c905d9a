use crate::{lex_raw, Eof, LexError, Token, TokenKind};
use syntax::Span;

/// A cursor over a vector of tokens with convenient parsing helpers.
///
/// Typical use in a parser:
/// ```ignore
/// let mut ts = TokenStream::new(source_code);
/// let t = ts.peek();            // look but don't consume
/// ts.expect(KwLet)?;            // require a specific token
/// if ts.consume_if(Eq) { ... }  // consume if present
/// let cp = ts.checkpoint();
/// // try a branch...
/// if !ok { ts.rewind(cp); }     // backtrack
/// ```
#[derive(Clone)]
pub struct TokenStream {
    toks: Vec<Token>,
    idx: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl TokenStream {
    /// Lex the input and append an EOF sentinel.
    pub fn new(source: &str) -> Self {
        let mut toks = lex_raw(source);
        toks.push(Token {
            kind: Eof,
            span: Span::new(source.len() as u32, source.len() as u32),
        });
        Self { toks, idx: 0 }
    }

    /// Save location for possible backtracking.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.idx)
    }

    /// Rewind to a checkpoint.
    pub fn rewind(&mut self, cp: Checkpoint) {
        self.idx = cp.0;
    }

    /// Peek at the current token without consuming.
    pub fn peek(&self) -> &Token {
        &self.toks[self.idx]
    }

    pub fn advance(&mut self) -> &Token {
        if self.idx < self.toks.len() - 1 {
            self.idx += 1;
        }
        &self.toks[self.idx - 1]
    }

    /// Consume the current token **iff** it matches `kind`.
    pub fn consume_if(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect a specific token kind; returns error with the current span if not present.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, LexError> {
        if self.peek().kind == kind {
            Ok(self.advance().clone())
        } else {
            Err(self.unexpected(&[kind]))
        }
    }

    /// Build a friendly unexpected-token error.
    pub fn unexpected(&self, expected: &[TokenKind]) -> LexError {
        let got = &self.peek().kind;
        let exp_list = expected
            .iter()
            .map(display_kind)
            .collect::<Vec<_>>()
            .join(", ");
        LexError::new(
            format!("expected {exp_list}, found {}", display_kind(got)),
            self.peek().span,
        )
    }
}

pub fn display_kind(k: &TokenKind) -> &'static str {
    use TokenKind::*;
    match k {
        KwIf => "keyword 'if'",
        KwThen => "keyword 'then'",
        KwElse => "keyword 'else'",
        KwLet => "keyword 'let'",
        KwIn => "keyword 'in'",
        KwFun => "keyword 'fun'",
        KwEnd => "keyword 'end'",
        KwTrue => "keyword 'true'",
        KwFalse => "keyword 'false'",
        Int(_) => "integer literal",
        Ident(_) => "identifier",
        Arrow => "'->'",
        Eq => "'='",
        LParen => "'('",
        RParen => "')'",
        Eof => "end of input",
        Error => "invalid token",
    }
}
