use crate::errors::TypeError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    Int,
    Bool,
}

/// A type expression. `Scheme` never nests inside an `Arrow` operand or
/// another scheme's body under normal construction; schemes only appear as
/// environment bindings produced by generalization.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ty {
    Term(Base),
    Var(String),
    Arrow(Box<Ty>, Box<Ty>),
    Scheme { quant: Vec<String>, body: Box<Ty> },
}

impl Ty {
    pub const INT: Ty = Ty::Term(Base::Int);
    pub const BOOL: Ty = Ty::Term(Base::Bool);

    pub fn var(name: impl Into<String>) -> Ty {
        Ty::Var(name.into())
    }

    pub fn arrow(left: Ty, right: Ty) -> Ty {
        Ty::Arrow(Box::new(left), Box::new(right))
    }

    pub fn scheme(quant: Vec<String>, body: Ty) -> Ty {
        Ty::Scheme {
            quant,
            body: Box::new(body),
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Ty::Var(_))
    }
}

/// Structural equality of the non-scheme fragment. Variables compare by
/// literal name; soundness relies on the fresh supply never reusing a name
/// within a session. A scheme on either side is an invariant violation.
pub fn equal(lhs: &Ty, rhs: &Ty) -> Result<bool, TypeError> {
    match (lhs, rhs) {
        (Ty::Scheme { .. }, _) | (_, Ty::Scheme { .. }) => Err(TypeError::InvalidComparison),
        (Ty::Term(a), Ty::Term(b)) => Ok(a == b),
        (Ty::Var(a), Ty::Var(b)) => Ok(a == b),
        (Ty::Arrow(l1, r1), Ty::Arrow(l2, r2)) => Ok(equal(l1, l2)? && equal(r1, r2)?),
        _ => Ok(false),
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Term(Base::Int) => f.write_str("int"),
            Ty::Term(Base::Bool) => f.write_str("bool"),
            Ty::Var(name) => write!(f, "'{name}"),
            Ty::Arrow(left, right) => {
                if matches!(**left, Ty::Arrow(..)) {
                    write!(f, "({left}) => {right}")
                } else {
                    write!(f, "{left} => {right}")
                }
            }
            Ty::Scheme { quant, body } => {
                for q in quant {
                    write!(f, "'{q} ")?;
                }
                write!(f, ". {body}")
            }
        }
    }
}

/// Source of fresh type variables. One supply per inference session;
/// names within a session never repeat.
#[derive(Default, Debug)]
pub struct TyVarSupply {
    next: u32,
}

impl TyVarSupply {
    pub fn fresh(&mut self) -> Ty {
        let id = self.next;
        self.next += 1;
        Ty::Var(format!("t{id}"))
    }
}

/// Compact type literal notation for fixtures and prelude environments:
/// `int`, `bool`, `'a`, and right-associative arrows joined by " => ".
pub fn parse_type(input: &str) -> Result<Ty, TypeError> {
    let mut ty: Option<Ty> = None;
    for part in input.split(" => ").collect::<Vec<_>>().into_iter().rev() {
        let atom = parse_atom(part.trim(), input)?;
        ty = Some(match ty {
            Some(rest) => Ty::arrow(atom, rest),
            None => atom,
        });
    }
    ty.ok_or_else(|| TypeError::BadTypeLiteral(input.to_string()))
}

fn parse_atom(atom: &str, whole: &str) -> Result<Ty, TypeError> {
    match atom {
        "int" => Ok(Ty::INT),
        "bool" => Ok(Ty::BOOL),
        _ => match atom.strip_prefix('\'') {
            Some(name) if !name.is_empty() => Ok(Ty::var(name)),
            _ => Err(TypeError::BadTypeLiteral(whole.to_string())),
        },
    }
}
