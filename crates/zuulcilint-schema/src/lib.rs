//! # zuulcilint-schema — Schema Loading and Validation
//!
//! Runtime validation of Zuul YAML configuration documents against a JSON
//! Schema (Draft 2019-09).
//!
//! ## Design
//!
//! The [`ZuulSchema`] loads the schema once per run, either the bundled
//! `zuul.schema.json` or a file supplied with `--schema`, and compiles one
//! validator per top-level Zuul object kind from the schema's single-key
//! wrapper entries. Documents are parsed into `serde_yaml::Value` trees
//! (Zuul's custom tags preserved as tagged nodes), converted to JSON
//! values, and validated with all errors aggregated rather than stopping
//! at the first.
//!
//! ## Security Invariant
//!
//! YAML parsing never constructs arbitrary objects. Only plain scalars,
//! mappings, and sequences are materialized, plus the whitelisted Zuul tags
//! `!inherit`, `!override`, and `!encrypted/...`. Any other tag is rejected.

pub mod document;
pub mod validate;

pub use document::{load_document, parse_document, to_json, verify_tags};
pub use validate::ZuulSchema;
