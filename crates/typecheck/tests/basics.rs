//! Core inference scenarios: literals, variables, lambdas, application,
//! conditionals, and the environment's persistence guarantees.

use syntax::Expr;
use typecheck::env::Env;
use typecheck::scheme::collect_vars;
use typecheck::{infer_exp, parse_type, unify, Inference, Ty, TypeError};

#[test]
fn integer_literal() {
    let mut session = Inference::new();
    let (ty, constraints) = session.infer(&Env::empty(), &Expr::int(5)).unwrap();
    assert_eq!(ty, Ty::INT);
    assert!(constraints.is_empty());
}

#[test]
fn boolean_literal() {
    let mut session = Inference::new();
    let (ty, constraints) = session.infer(&Env::empty(), &Expr::bool(true)).unwrap();
    assert_eq!(ty, Ty::BOOL);
    assert!(constraints.is_empty());
}

#[test]
fn identity_lambda_is_not_generalized() {
    let mut session = Inference::new();
    let id = Expr::fun("x", Expr::var("x"));
    let (ty, constraints) = session.infer(&Env::empty(), &id).unwrap();

    assert!(constraints.is_empty());
    match ty {
        Ty::Arrow(left, right) => {
            assert_eq!(left, right);
            // a plain fresh variable, not a scheme: only `let` generalizes
            assert!(left.is_var());
        }
        other => panic!("expected an arrow, got {other}"),
    }
}

#[test]
fn let_polymorphism_resolves_to_bool() {
    // let id = fun x -> x end in id(true) end
    let expr = Expr::let_in(
        "id",
        Expr::fun("x", Expr::var("x")),
        Expr::apply(Expr::var("id"), Expr::bool(true)),
    );
    assert_eq!(infer_exp(&Env::empty(), &expr).unwrap(), Ty::BOOL);
}

#[test]
fn curried_arithmetic_fully_resolves() {
    let env = Env::from_pairs([("+", parse_type("int => int => int").unwrap())]);
    // +(3)(4)
    let expr = Expr::apply(Expr::apply(Expr::var("+"), Expr::int(3)), Expr::int(4));

    let ty = infer_exp(&env, &expr).unwrap();
    assert_eq!(ty, Ty::INT);
    assert!(collect_vars(&ty).unwrap().is_empty());
}

#[test]
fn mismatched_branches_are_inconsistent() {
    // if true then 1 else false end
    let expr = Expr::if_then_else(Expr::bool(true), Expr::int(1), Expr::bool(false));

    let mut session = Inference::new();
    let (_, constraints) = session.infer(&Env::empty(), &expr).unwrap();
    match unify(&constraints).unwrap_err() {
        TypeError::InconsistentConstraints(a, b) => {
            assert!(
                (a == Ty::INT && b == Ty::BOOL) || (a == Ty::BOOL && b == Ty::INT),
                "expected an int/bool conflict, got {a} vs {b}"
            );
        }
        other => panic!("expected InconsistentConstraints, got {other}"),
    }
}

#[test]
fn non_boolean_predicate_is_rejected() {
    let expr = Expr::if_then_else(Expr::int(1), Expr::int(1), Expr::int(2));
    assert!(matches!(
        infer_exp(&Env::empty(), &expr),
        Err(TypeError::InconsistentConstraints(..))
    ));
}

#[test]
fn unbound_variable_is_reported_by_name() {
    let err = infer_exp(&Env::empty(), &Expr::var("y")).unwrap_err();
    assert_eq!(err, TypeError::UnboundVariable("y".to_string()));
}

#[test]
fn lambda_parameters_stay_monomorphic() {
    // fun f -> if f(true) then f(1) else 2 end end
    // f is used at bool -> _ and int -> _; without generalization this is
    // a conflict.
    let expr = Expr::fun(
        "f",
        Expr::if_then_else(
            Expr::apply(Expr::var("f"), Expr::bool(true)),
            Expr::apply(Expr::var("f"), Expr::int(1)),
            Expr::int(2),
        ),
    );
    assert!(matches!(
        infer_exp(&Env::empty(), &expr),
        Err(TypeError::InconsistentConstraints(..))
    ));
}

#[test]
fn older_environment_views_are_unaffected_by_extension() {
    let base = Env::empty().extend("x", Ty::INT);
    let older = base.clone();
    let newer = base.extend("x", Ty::BOOL);

    // shadowing by lookup order, never by overwrite
    assert_eq!(older.lookup("x"), Some(&Ty::INT));
    assert_eq!(newer.lookup("x"), Some(&Ty::BOOL));
    assert_eq!(newer.iter().count(), 2);
}

#[test]
fn lookup_misses_return_none() {
    assert!(Env::empty().lookup("anything").is_none());
}
