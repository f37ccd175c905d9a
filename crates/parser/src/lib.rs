use lexer::{TokenKind as T, TokenStream};
use syntax::{ast::*, Span};

pub type PResult<Ty> = Result<Ty, ParseError>;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    fn new<M: Into<String>>(msg: M, span: Span) -> Self {
        Self {
            message: msg.into(),
            span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

fn to_parse_err(e: lexer::LexError) -> ParseError {
    ParseError::new(e.message, e.span)
}

/// Parse a complete expression; trailing tokens are an error.
pub fn parse_expr(source: &str) -> PResult<Expr> {
    let mut p = Parser::new(source);
    let expr = p.parse_expr()?;
    p.expect_eof()?;
    Ok(expr)
}

pub struct Parser {
    ts: TokenStream,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            ts: TokenStream::new(source),
        }
    }

    pub fn parse_expr(&mut self) -> PResult<Expr> {
        match self.ts.peek().kind.clone() {
            T::KwIf => self.parse_if(),
            T::KwLet => self.parse_let(),
            T::KwFun => self.parse_fun(),
            T::Int(_) | T::KwTrue | T::KwFalse => self.parse_const(),
            T::Ident(_) => self.parse_apply(),
            _ => Err(to_parse_err(self.ts.unexpected(&[
                T::KwIf,
                T::KwLet,
                T::KwFun,
                T::Int(0),
                T::Ident(String::new()),
            ]))),
        }
    }

    pub fn expect_eof(&mut self) -> PResult<()> {
        self.ts.expect(T::Eof).map_err(to_parse_err)?;
        Ok(())
    }

    // IF := "if" expr "then" expr "else" expr "end"
    fn parse_if(&mut self) -> PResult<Expr> {
        self.ts.expect(T::KwIf).map_err(to_parse_err)?;
        let pred = self.parse_expr()?;
        self.ts.expect(T::KwThen).map_err(to_parse_err)?;
        let then_branch = self.parse_expr()?;
        self.ts.expect(T::KwElse).map_err(to_parse_err)?;
        let else_branch = self.parse_expr()?;
        self.ts.expect(T::KwEnd).map_err(to_parse_err)?;
        Ok(Expr::if_then_else(pred, then_branch, else_branch))
    }

    // LET := "let" VAR "=" expr "in" expr "end"
    fn parse_let(&mut self) -> PResult<Expr> {
        self.ts.expect(T::KwLet).map_err(to_parse_err)?;
        let name = self.expect_ident()?;
        self.ts.expect(T::Eq).map_err(to_parse_err)?;
        let value = self.parse_expr()?;
        self.ts.expect(T::KwIn).map_err(to_parse_err)?;
        let body = self.parse_expr()?;
        self.ts.expect(T::KwEnd).map_err(to_parse_err)?;
        Ok(Expr::let_in(name, value, body))
    }

    // FUN := "fun" VAR "->" expr "end"
    fn parse_fun(&mut self) -> PResult<Expr> {
        self.ts.expect(T::KwFun).map_err(to_parse_err)?;
        let param = self.expect_ident()?;
        self.ts.expect(T::Arrow).map_err(to_parse_err)?;
        let body = self.parse_expr()?;
        self.ts.expect(T::KwEnd).map_err(to_parse_err)?;
        Ok(Expr::fun(param, body))
    }

    // APPLY := VAR ("(" expr ")")*   -- zero parens is a bare variable reference
    fn parse_apply(&mut self) -> PResult<Expr> {
        let name = self.expect_ident()?;
        let mut expr = Expr::Var(name);
        while self.ts.consume_if(T::LParen) {
            let arg = self.parse_expr()?;
            self.ts.expect(T::RParen).map_err(to_parse_err)?;
            expr = Expr::apply(expr, arg);
        }
        Ok(expr)
    }

    // CONST := INTEGER | "true" | "false"
    fn parse_const(&mut self) -> PResult<Expr> {
        let tok = self.ts.advance().clone();
        match tok.kind {
            T::Int(value) => Ok(Expr::int(value)),
            T::KwTrue => Ok(Expr::bool(true)),
            T::KwFalse => Ok(Expr::bool(false)),
            _ => Err(ParseError::new("expected a constant", tok.span)),
        }
    }

    fn expect_ident(&mut self) -> PResult<Name> {
        match self.ts.peek().kind.clone() {
            T::Ident(text) => {
                self.ts.advance();
                Ok(Name { text })
            }
            _ => Err(to_parse_err(self.ts.unexpected(&[T::Ident(String::new())]))),
        }
    }
}
