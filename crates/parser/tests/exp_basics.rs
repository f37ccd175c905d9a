use parser::parse_expr;
use syntax::{Expr, Lit};

#[test]
fn literals() {
    assert_eq!(parse_expr("5").unwrap(), Expr::int(5));
    assert_eq!(parse_expr("42").unwrap(), Expr::int(42));
    assert_eq!(parse_expr("true").unwrap(), Expr::bool(true));
    assert_eq!(parse_expr("false").unwrap(), Expr::bool(false));
}

#[test]
fn bare_variable() {
    assert_eq!(parse_expr("x").unwrap(), Expr::var("x"));
    // operator characters are ordinary variable names
    assert_eq!(parse_expr("+").unwrap(), Expr::var("+"));
    assert_eq!(parse_expr("<=").unwrap(), Expr::var("<="));
}

#[test]
fn application_single_argument() {
    let e = parse_expr("f(1)").unwrap();
    assert_eq!(e, Expr::apply(Expr::var("f"), Expr::int(1)));
}

#[test]
fn application_is_left_nested() {
    // f(1)(2) parses as (f 1) 2
    let e = parse_expr("f(1)(2)").unwrap();
    assert_eq!(
        e,
        Expr::apply(Expr::apply(Expr::var("f"), Expr::int(1)), Expr::int(2))
    );
}

#[test]
fn application_nested_arguments() {
    let e = parse_expr("f(g(2))").unwrap();
    assert_eq!(
        e,
        Expr::apply(Expr::var("f"), Expr::apply(Expr::var("g"), Expr::int(2)))
    );
}

#[test]
fn operator_application() {
    let e = parse_expr("+(3)(4)").unwrap();
    assert_eq!(
        e,
        Expr::apply(Expr::apply(Expr::var("+"), Expr::int(3)), Expr::int(4))
    );
}

#[test]
fn lambda() {
    let e = parse_expr("fun x -> x end").unwrap();
    assert_eq!(e, Expr::fun("x", Expr::var("x")));
}

#[test]
fn conditional() {
    let e = parse_expr("if true then 1 else 2 end").unwrap();
    assert_eq!(
        e,
        Expr::if_then_else(Expr::bool(true), Expr::int(1), Expr::int(2))
    );
}

#[test]
fn let_binding() {
    let e = parse_expr("let id = fun x -> x end in id(5) end").unwrap();
    assert_eq!(
        e,
        Expr::let_in(
            "id",
            Expr::fun("x", Expr::var("x")),
            Expr::apply(Expr::var("id"), Expr::int(5))
        )
    );
}

#[test]
fn nested_lets_across_lines() {
    let src = "
        let
            id = fun x -> x end
        in
            let
                a = id(true)
            in
                id(5)
            end
        end";
    let e = parse_expr(src).unwrap();
    assert_eq!(
        e,
        Expr::let_in(
            "id",
            Expr::fun("x", Expr::var("x")),
            Expr::let_in(
                "a",
                Expr::apply(Expr::var("id"), Expr::bool(true)),
                Expr::apply(Expr::var("id"), Expr::int(5))
            )
        )
    );
}

#[test]
fn lambda_body_can_be_conditional() {
    let e = parse_expr("fun x -> if x then 1 else 0 end end").unwrap();
    match e {
        Expr::Fun { body, .. } => assert!(matches!(*body, Expr::If { .. })),
        other => panic!("expected a lambda, got {other:?}"),
    }
}

#[test]
fn literal_constants_match_lit_shape() {
    match parse_expr("7").unwrap() {
        Expr::Const(Lit::Int(7)) => {}
        other => panic!("expected Const(Int(7)), got {other:?}"),
    }
}
