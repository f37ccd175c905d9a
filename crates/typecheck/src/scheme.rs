use crate::errors::TypeError;
use crate::types::Ty;
use std::collections::HashSet;

/// Type variables reachable through arrows, first occurrence first, no
/// duplicates. A scheme here means generalization was handed a type it can
/// never legally contain.
pub fn collect_vars(ty: &Ty) -> Result<Vec<String>, TypeError> {
    let mut out = Vec::new();
    go(ty, &mut out)?;
    return Ok(out);

    fn go(ty: &Ty, out: &mut Vec<String>) -> Result<(), TypeError> {
        match ty {
            Ty::Term(_) => Ok(()),
            Ty::Var(name) => {
                if !out.iter().any(|v| v == name) {
                    out.push(name.clone());
                }
                Ok(())
            }
            Ty::Arrow(left, right) => {
                go(left, out)?;
                go(right, out)
            }
            Ty::Scheme { .. } => Err(TypeError::SchemeNotGeneralizable(ty.clone())),
        }
    }
}

/// Free type variables of a type or scheme. A scheme's quantified variables
/// are bound, not free.
pub fn free_vars(ty: &Ty, acc: &mut HashSet<String>) {
    match ty {
        Ty::Term(_) => {}
        Ty::Var(name) => {
            acc.insert(name.clone());
        }
        Ty::Arrow(left, right) => {
            free_vars(left, acc);
            free_vars(right, acc);
        }
        Ty::Scheme { quant, body } => {
            let mut inner = HashSet::new();
            free_vars(body, &mut inner);
            for q in quant {
                inner.remove(q);
            }
            acc.extend(inner);
        }
    }
}
