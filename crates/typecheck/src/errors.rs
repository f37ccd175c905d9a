use crate::types::Ty;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeError {
    #[error("unbound variable: {0}")]
    UnboundVariable(String),
    #[error("inconsistent constraints: {0} vs {1}")]
    InconsistentConstraints(Ty, Ty),
    #[error("type schemes cannot be compared structurally")]
    InvalidComparison,
    #[error("substitution target must be a type variable, got {0}")]
    SubstitutionTargetNotVariable(Ty),
    #[error("type scheme surfaced while collecting quantifiable variables: {0}")]
    SchemeNotGeneralizable(Ty),
    #[error("cannot read type literal: {0:?}")]
    BadTypeLiteral(String),
}
