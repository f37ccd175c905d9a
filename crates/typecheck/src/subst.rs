use crate::errors::TypeError;
use crate::types::{equal, Ty};
use std::fmt;

/// Replaces every occurrence of the type variable `var` in `expr` with
/// `replacement`. Schemes are traversed into their body only; a quantified
/// name that textually matches `var` is not renamed, so substitution through
/// a scheme is not capture-safe (kept from the reference behavior).
pub fn substitute(var: &Ty, replacement: &Ty, expr: &Ty) -> Result<Ty, TypeError> {
    if !var.is_var() {
        return Err(TypeError::SubstitutionTargetNotVariable(var.clone()));
    }

    Ok(match expr {
        Ty::Term(_) => expr.clone(),
        Ty::Var(_) => {
            if equal(expr, var)? {
                replacement.clone()
            } else {
                expr.clone()
            }
        }
        Ty::Arrow(left, right) => Ty::arrow(
            substitute(var, replacement, left)?,
            substitute(var, replacement, right)?,
        ),
        Ty::Scheme { quant, body } => {
            Ty::scheme(quant.clone(), substitute(var, replacement, body)?)
        }
    })
}

/// One resolved equation of a unification solution: `var` stands for
/// `replacement`. `var` is always a `Ty::Var` by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Subst {
    pub replacement: Ty,
    pub var: Ty,
}

impl fmt::Display for Subst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.replacement, self.var)
    }
}

/// Ordered substitution sequence produced by unification. The order is
/// load-bearing: entries discovered deeper in the recursion come first,
/// and applying them requires a right-to-left fold (see [`finalize`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution(pub Vec<Subst>);

impl Solution {
    pub fn push(&mut self, replacement: Ty, var: Ty) {
        self.0.push(Subst { replacement, var });
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subst> {
        self.0.iter()
    }
}

/// Applies a solution to a type, right-to-left, yielding the fully
/// resolved form.
pub fn finalize(solution: &Solution, ty: &Ty) -> Result<Ty, TypeError> {
    let mut out = ty.clone();
    for Subst { replacement, var } in solution.0.iter().rev() {
        out = substitute(var, replacement, &out)?;
    }
    Ok(out)
}
