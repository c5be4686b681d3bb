//! # Verity Engine
//!
//! **Does the simplification still mean the same thing?**
//!
//! Verity takes two boolean expressions over single-letter variables, an
//! *original* and a *simplified* form, and enumerates every assignment of
//! their variables to decide whether they are equivalent and which inputs
//! satisfy each of them.
//!
//! ## Quick Start
//!
//! ```rust
//! use verity::{Engine, VerityResult};
//!
//! fn main() -> VerityResult<()> {
//!     let engine = Engine::new();
//!     let report = engine.run("((!(A&B)|!C)&(C&A&B))|(A&C)", "A&C")?;
//!
//!     assert!(report.equivalent);
//!     assert_eq!(report.rows.len(), 8);
//!     Ok(())
//! }
//! ```
//!
//! ## The Expression Language
//!
//! - Variables are single letters, case-insensitive (`a` and `A` are the same).
//! - `&` is AND, `|` is OR, `!` is NOT, `0` and `1` are constants.
//! - Parentheses group sub-expressions.
//!
//! There is no precedence between `&` and `|`: a sequence is folded strictly
//! left to right, so `A|B&C` means `(A|B)&C`. `!` applies to the single
//! operand that follows it, which may be a parenthesized group.

pub mod analysis;
pub mod ast;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod resource_limits;
pub mod response;
pub mod semantic;
pub mod simplify;
pub mod validator;

pub use analysis::extract_variables;
pub use ast::{Expression, Item, ItemKind, Span};
pub use engine::Engine;
pub use error::{ErrorDetails, ErrorKind, VerityError};
pub use evaluator::{evaluate, Evaluator};
pub use parser::{parse, parse_assignment};
pub use resource_limits::ResourceLimits;
pub use response::{Report, Row, Satisfiability};
pub use semantic::{Assignment, Variable};
pub use simplify::suggest_simplification;
pub use validator::Validator;

/// Result type for Verity operations
pub type VerityResult<T> = Result<T, VerityError>;

#[cfg(test)]
mod tests;
