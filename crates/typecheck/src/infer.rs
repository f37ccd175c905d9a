use crate::env::Env;
use crate::errors::TypeError;
use crate::scheme::{collect_vars, free_vars};
use crate::subst::{finalize, substitute};
use crate::types::{Ty, TyVarSupply};
use crate::unify::{unify, Constraint};

use std::collections::HashSet;
use syntax::ast::{Expr, Lit};

/// One inference session. Owns the fresh-variable supply, so independent
/// sessions can run concurrently without sharing any state.
#[derive(Default)]
pub struct Inference {
    supply: TyVarSupply,
}

impl Inference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Syntax-directed constraint generation. Returns the expression's type
    /// together with the constraints it must satisfy; the caller solves them
    /// with [`unify`] and resolves the type with [`finalize`].
    pub fn infer(&mut self, env: &Env, expr: &Expr) -> Result<(Ty, Vec<Constraint>), TypeError> {
        match expr {
            Expr::Const(Lit::Int(_)) => Ok((Ty::INT, vec![])),
            Expr::Const(Lit::Bool(_)) => Ok((Ty::BOOL, vec![])),

            Expr::Var(name) => {
                let binding = env
                    .lookup(&name.text)
                    .ok_or_else(|| TypeError::UnboundVariable(name.text.clone()))?
                    .clone();
                Ok((self.instantiate(&binding)?, vec![]))
            }

            // Lambda parameters stay monomorphic inside the body; only `let`
            // generalizes.
            Expr::Fun { param, body } => {
                let param_ty = self.supply.fresh();
                let inner = env.extend(param.text.clone(), param_ty.clone());
                let (body_ty, constraints) = self.infer(&inner, body)?;
                Ok((Ty::arrow(param_ty, body_ty), constraints))
            }

            // Function and argument are inferred against the same
            // unextended environment.
            Expr::Apply { fun, arg } => {
                let (fun_ty, fun_constraints) = self.infer(env, fun)?;
                let (arg_ty, arg_constraints) = self.infer(env, arg)?;

                let result = self.supply.fresh();

                let mut constraints = vec![Constraint::new(
                    fun_ty,
                    Ty::arrow(arg_ty, result.clone()),
                )];
                constraints.extend(arg_constraints);
                constraints.extend(fun_constraints);

                Ok((result, constraints))
            }

            Expr::If {
                pred,
                then_branch,
                else_branch,
            } => {
                let result = self.supply.fresh();

                let (pred_ty, pred_constraints) = self.infer(env, pred)?;
                let (then_ty, then_constraints) = self.infer(env, then_branch)?;
                let (else_ty, else_constraints) = self.infer(env, else_branch)?;

                let mut constraints = vec![
                    Constraint::new(pred_ty, Ty::BOOL),
                    Constraint::new(then_ty, result.clone()),
                    Constraint::new(else_ty, result.clone()),
                ];
                constraints.extend(pred_constraints);
                constraints.extend(then_constraints);
                constraints.extend(else_constraints);

                Ok((result, constraints))
            }

            // The bound value is generalized over the variables its own
            // constraints leave unconstrained, giving each use site in the
            // body an independent instantiation.
            Expr::Let { name, value, body } => {
                let (value_ty, value_constraints) = self.infer(env, value)?;

                let scheme = generalize(&value_constraints, env, &value_ty)?;
                let inner = env.extend(name.text.clone(), scheme);

                let (body_ty, body_constraints) = self.infer(&inner, body)?;

                let mut constraints = value_constraints;
                constraints.extend(body_constraints);
                Ok((body_ty, constraints))
            }
        }
    }

    /// Replaces every quantified variable of a scheme with a fresh one,
    /// consistently throughout the body. Non-scheme types pass through
    /// unchanged.
    pub fn instantiate(&mut self, ty: &Ty) -> Result<Ty, TypeError> {
        let Ty::Scheme { quant, body } = ty else {
            return Ok(ty.clone());
        };
        let mut out = (**body).clone();
        for name in quant {
            let fresh = self.supply.fresh();
            out = substitute(&Ty::Var(name.clone()), &fresh, &out)?;
        }
        Ok(out)
    }
}

/// Closes a type over the variables its constraints leave unconstrained.
///
/// The constraints are solved first so that variables already pinned down
/// (or still free in the surrounding environment) stay monomorphic. The
/// resulting scheme quantifies the remaining variables over the *unsolved*
/// type: resolution is deferred to each instantiation site.
pub fn generalize(constraints: &[Constraint], env: &Env, ty: &Ty) -> Result<Ty, TypeError> {
    let solution = unify(constraints)?;
    let solved_ty = finalize(&solution, ty)?;

    let mut env_vars = HashSet::new();
    for (_, binding) in env.iter() {
        let solved_binding = finalize(&solution, binding)?;
        free_vars(&solved_binding, &mut env_vars);
    }

    let quant: Vec<String> = collect_vars(&solved_ty)?
        .into_iter()
        .filter(|v| !env_vars.contains(v))
        .collect();

    Ok(Ty::scheme(quant, ty.clone()))
}

/// One-shot entry point: infer, solve the emitted constraints, and resolve
/// the result. Each call owns its own fresh-variable supply.
pub fn infer_exp(env: &Env, expr: &Expr) -> Result<Ty, TypeError> {
    let mut session = Inference::new();
    let (ty, constraints) = session.infer(env, expr)?;
    let solution = unify(&constraints)?;
    finalize(&solution, &ty)
}
