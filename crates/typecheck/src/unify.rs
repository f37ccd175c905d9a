use crate::errors::TypeError;
use crate::subst::{substitute, Solution};
use crate::types::{equal, Ty};
use std::fmt;

/// An equation between two (non-scheme) type expressions that unification
/// must satisfy.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub lhs: Ty,
    pub rhs: Ty,
}

impl Constraint {
    pub fn new(lhs: Ty, rhs: Ty) -> Self {
        Self { lhs, rhs }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

/// Solves a list of constraints into an ordered substitution sequence.
///
/// No occurs-check is performed: a constraint binding a variable to a type
/// containing that same variable is accepted and shows up as a
/// self-referential type at finalize time.
pub fn unify(constraints: &[Constraint]) -> Result<Solution, TypeError> {
    solve(constraints.to_vec())
}

fn solve(mut queue: Vec<Constraint>) -> Result<Solution, TypeError> {
    if queue.is_empty() {
        return Ok(Solution::default());
    }
    let Constraint { lhs, rhs } = queue.remove(0);

    // Already equal, nothing to learn.
    if equal(&lhs, &rhs)? {
        return solve(queue);
    }

    // Two arrows split into their operand equations, queued at the back.
    if let (Ty::Arrow(l1, r1), Ty::Arrow(l2, r2)) = (&lhs, &rhs) {
        queue.push(Constraint::new((**l1).clone(), (**l2).clone()));
        queue.push(Constraint::new((**r1).clone(), (**r2).clone()));
        return solve(queue);
    }

    // A variable on either side is eliminated from the rest of the queue.
    if lhs.is_var() {
        return eliminate(lhs, rhs, queue);
    }
    if rhs.is_var() {
        return eliminate(rhs, lhs, queue);
    }

    Err(TypeError::InconsistentConstraints(lhs, rhs))
}

// Rewrites the remaining queue with var := replacement, solves it, and
// records the pair after everything discovered deeper in the recursion,
// so that a right-to-left fold applies it first.
fn eliminate(var: Ty, replacement: Ty, queue: Vec<Constraint>) -> Result<Solution, TypeError> {
    let rewritten = queue
        .into_iter()
        .map(|c| {
            Ok(Constraint::new(
                substitute(&var, &replacement, &c.lhs)?,
                substitute(&var, &replacement, &c.rhs)?,
            ))
        })
        .collect::<Result<Vec<_>, TypeError>>()?;

    let mut solution = solve(rewritten)?;
    solution.push(replacement, var);
    Ok(solution)
}
