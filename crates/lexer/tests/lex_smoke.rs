use lexer::*;

#[test]
fn simple_tokens() {
    let src = "let x = 42 in x end";
    let toks = lex(src);
    assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::KwLet)));
    assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Eq)));
    assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Int(42))));
    assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::KwEnd)));
}

#[test]
fn parens_split_words() {
    let toks = lex("id(true)");
    use TokenKind::*;
    let kinds: Vec<_> = toks.into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![Ident("id".into()), LParen, KwTrue, RParen]);
}

#[test]
fn operators_are_identifiers() {
    let toks = lex("+ <= x'");
    use TokenKind::*;
    let kinds: Vec<_> = toks.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![Ident("+".into()), Ident("<=".into()), Ident("x'".into())]
    );
}

#[test]
fn spans_track_source_positions() {
    let toks = lex("if x");
    assert_eq!(toks[0].span.lo, 0);
    assert_eq!(toks[0].span.hi, 2);
    assert_eq!(toks[1].span.lo, 3);
    assert_eq!(toks[1].span.hi, 4);
}
