//! # Findings — Validation Results and Warning Policy
//!
//! A [`Finding`] is one problem discovered in one document: a document path,
//! a message, and a severity. Findings are collected in traversal order into
//! a per-file [`LintResult`]; whether warnings affect the verdict is decided
//! by the run-wide [`WarningMode`].

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Warning-level finding; fails the run only under
    /// [`WarningMode::AsErrors`].
    Warning,
    /// Error-level finding; always fails the run.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// How warning-level findings affect the run verdict and output.
///
/// `--warnings-as-errors` takes precedence over `--ignore-warnings` when
/// both are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningMode {
    /// Report warnings but never fail because of them.
    #[default]
    Report,
    /// Promote warnings to failing severity.
    AsErrors,
    /// Collect warnings but neither print them nor let them affect the
    /// verdict.
    Ignore,
}

impl WarningMode {
    /// Resolve the mode from the two CLI flags.
    pub fn from_flags(warnings_as_errors: bool, ignore_warnings: bool) -> Self {
        if warnings_as_errors {
            WarningMode::AsErrors
        } else if ignore_warnings {
            WarningMode::Ignore
        } else {
            WarningMode::Report
        }
    }

    /// Whether a finding of the given severity fails the run under this mode.
    pub fn fails(self, severity: Severity) -> bool {
        match severity {
            Severity::Error => true,
            Severity::Warning => self == WarningMode::AsErrors,
        }
    }

    /// Whether a finding of the given severity should be printed.
    pub fn reports(self, severity: Severity) -> bool {
        match severity {
            Severity::Error => true,
            Severity::Warning => self != WarningMode::Ignore,
        }
    }
}

/// One problem discovered in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// JSON-Pointer-style path into the document (`/0/job/run/1`); empty
    /// for problems with the document as a whole.
    pub path: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
}

impl Finding {
    /// Construct an error-severity finding.
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Finding {
            path: path.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Construct a warning-severity finding.
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Finding {
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// The outcome of linting one input file.
///
/// Findings are kept in traversal order; order is deterministic for the
/// same input but carries no meaning beyond reporting.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// The input file this result describes.
    pub file: PathBuf,
    /// All findings for this file, in traversal order.
    pub findings: Vec<Finding>,
}

impl LintResult {
    /// An empty (passing) result for the given file.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        LintResult {
            file: file.into(),
            findings: Vec::new(),
        }
    }

    /// A result holding a single loader-failure error, used when a file
    /// cannot be read or parsed at all.
    pub fn loader_failure(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        LintResult {
            file: file.into(),
            findings: vec![Finding::error("", message)],
        }
    }

    /// The input file path.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Number of error-severity findings.
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    /// Number of warning-severity findings.
    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Whether this file passes under the given warning mode.
    pub fn passed(&self, mode: WarningMode) -> bool {
        !self.findings.iter().any(|f| mode.fails(f.severity))
    }
}
