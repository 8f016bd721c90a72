//! # zuulcilint-core — Foundational Types for the Zuul CI Linter
//!
//! Defines the vocabulary every other crate in the workspace shares: the
//! finding/severity model, per-file lint results, the warning-handling
//! policy, the closed set of Zuul top-level object kinds, and the error
//! taxonomy.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `zuulcilint-*` crates (this is the leaf of
//!   the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod finding;
pub mod object;

pub use error::{DocumentError, SchemaError};
pub use finding::{Finding, LintResult, Severity, WarningMode};
pub use object::{UnknownObjectKind, ZuulObjectKind, ZUUL_OBJECT_KINDS};
