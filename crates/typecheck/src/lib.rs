pub mod env;
pub mod errors;
pub mod infer;
pub mod scheme;
pub mod subst;
pub mod types;
pub mod unify;

pub use env::Env;
pub use errors::TypeError;
pub use infer::{generalize, infer_exp, Inference};
pub use subst::{finalize, substitute, Solution, Subst};
pub use types::{equal, parse_type, Base, Ty, TyVarSupply};
pub use unify::{unify, Constraint};
