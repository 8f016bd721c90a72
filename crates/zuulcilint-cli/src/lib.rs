//! # zuulcilint-cli — Command-Line Interface
//!
//! Provides the `zuulcilint` binary: discovers Zuul YAML files from the
//! paths given on the command line, runs each through the validation
//! pipeline, and reports findings with an exit code automation can rely on
//! (pre-commit hooks depend on it).
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the lint driver; handler logic
//!   delegates to the domain crates.
//! - The CLI surface is stable; pre-commit configurations depend on it:
//!
//! ```bash
//! zuulcilint [-h] [--version] [--check-playbook-paths] [--schema SCHEMA]
//!            [--ignore-warnings] [--warnings-as-errors] file [file ...]
//! ```

pub mod discover;
pub mod lint;
pub mod report;
