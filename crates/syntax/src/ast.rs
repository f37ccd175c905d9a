use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    pub text: String,
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }
}

impl From<String> for Name {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Lit {
    Int(i64),
    Bool(bool),
}

/// Expression tree of the surface language. Nodes own their children
/// exclusively; nothing is shared and nothing is mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Const(Lit),
    Var(Name),
    Fun {
        param: Name,
        body: Box<Expr>,
    },
    Apply {
        fun: Box<Expr>,
        arg: Box<Expr>,
    },
    If {
        pred: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Let {
        name: Name,
        value: Box<Expr>,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn int(value: i64) -> Expr {
        Expr::Const(Lit::Int(value))
    }

    pub fn bool(value: bool) -> Expr {
        Expr::Const(Lit::Bool(value))
    }

    pub fn var(name: impl Into<Name>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn fun(param: impl Into<Name>, body: Expr) -> Expr {
        Expr::Fun {
            param: param.into(),
            body: Box::new(body),
        }
    }

    pub fn apply(fun: Expr, arg: Expr) -> Expr {
        Expr::Apply {
            fun: Box::new(fun),
            arg: Box::new(arg),
        }
    }

    pub fn if_then_else(pred: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
        Expr::If {
            pred: Box::new(pred),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn let_in(name: impl Into<Name>, value: Expr, body: Expr) -> Expr {
        Expr::Let {
            name: name.into(),
            value: Box::new(value),
            body: Box::new(body),
        }
    }

    fn write_at(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        match self {
            Expr::Const(Lit::Int(v)) => write!(f, "{pad}{v}"),
            Expr::Const(Lit::Bool(v)) => write!(f, "{pad}{v}"),
            Expr::Var(name) => write!(f, "{pad}{name}"),
            Expr::Fun { param, body } => {
                write!(f, "{pad}fun {param} -> ")?;
                body.write_at(f, 0)?;
                write!(f, " end")
            }
            Expr::Apply { fun, arg } => {
                fun.write_at(f, indent)?;
                write!(f, "(")?;
                arg.write_at(f, 0)?;
                write!(f, ")")
            }
            Expr::If {
                pred,
                then_branch,
                else_branch,
            } => {
                write!(f, "{pad}if ")?;
                pred.write_at(f, 0)?;
                writeln!(f, " then")?;
                then_branch.write_at(f, indent + 2)?;
                writeln!(f, "\n{pad}else")?;
                else_branch.write_at(f, indent + 2)?;
                write!(f, "\n{pad}end")
            }
            Expr::Let { name, value, body } => {
                write!(f, "{pad}let {name} = ")?;
                value.write_at(f, 0)?;
                writeln!(f, " in")?;
                body.write_at(f, indent + 2)?;
                write!(f, "\n{pad}end")
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_at(f, 0)
    }
}
