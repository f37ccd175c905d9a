pub mod ast;
pub mod span;

pub use ast::{Expr, Lit, Name};
pub use span::Span;
