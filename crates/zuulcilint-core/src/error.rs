//! # Error Types — Linter Error Taxonomy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Propagation Policy
//!
//! - [`SchemaError`] is fatal for the whole run: nothing can be validated
//!   without a schema, so it is raised before any file processing begins.
//! - [`DocumentError`] is scoped to a single input file: the driver converts
//!   it into that file's failing lint result and continues with the
//!   remaining files.

use thiserror::Error;

/// Error while loading or compiling the Zuul JSON Schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file is missing, unreadable, or not valid JSON/YAML.
    #[error("failed to load schema {path}: {reason}")]
    SchemaLoad {
        /// Path or identifier of the schema that failed to load.
        path: String,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// A schema definition could not be compiled into a validator.
    #[error("failed to compile schema definition '{kind}': {reason}")]
    SchemaCompile {
        /// The Zuul object kind whose definition failed to compile.
        kind: String,
        /// Human-readable reason.
        reason: String,
    },

    /// I/O error reading the schema file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error while loading a single input document.
///
/// Line/column positions are 1-based; `0` means the parser did not report
/// a location.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input is not valid YAML.
    #[error("{path}: YAML parse error at line {line}, column {column}: {reason}")]
    Parse {
        /// Path to the offending file.
        path: String,
        /// 1-based line of the parse failure, 0 if unknown.
        line: usize,
        /// 1-based column of the parse failure, 0 if unknown.
        column: usize,
        /// Parser message.
        reason: String,
    },

    /// The document uses a YAML tag outside the Zuul whitelist.
    ///
    /// Only `!inherit`, `!override`, and `!encrypted/...` are materialized;
    /// anything else is rejected rather than constructed.
    #[error("{path}: unsupported YAML tag {tag}")]
    UnsupportedTag {
        /// Path to the offending file.
        path: String,
        /// The offending tag, including the leading `!`.
        tag: String,
    },

    /// The parsed YAML could not be represented as a JSON value tree.
    #[error("{path}: cannot convert YAML to a JSON document: {reason}")]
    Convert {
        /// Path to the offending file.
        path: String,
        /// Human-readable reason.
        reason: String,
    },

    /// I/O error reading the input file.
    #[error("{path}: {source}")]
    Io {
        /// Path to the offending file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_load_error_display_names_path() {
        let err = SchemaError::SchemaLoad {
            path: "/etc/zuul-schema.json".to_string(),
            reason: "invalid JSON".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/zuul-schema.json"));
        assert!(msg.contains("invalid JSON"));
    }

    #[test]
    fn parse_error_display_includes_position() {
        let err = DocumentError::Parse {
            path: "zuul.d/jobs.yaml".to_string(),
            line: 7,
            column: 3,
            reason: "mapping values are not allowed here".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("column 3"));
        assert!(msg.contains("zuul.d/jobs.yaml"));
    }

    #[test]
    fn unsupported_tag_display_names_tag() {
        let err = DocumentError::UnsupportedTag {
            path: "secrets.yaml".to_string(),
            tag: "!!python/object".to_string(),
        };
        assert!(err.to_string().contains("!!python/object"));
    }
}
