//! # Lint Driver
//!
//! Orchestrates the pipeline per input file — load, parse, schema
//! validation, semaphore check, optional playbook-path check — and then
//! runs the cross-file checks (duplicate jobs, unknown nodesets, legacy
//! extensions) over everything that parsed.
//!
//! A file that fails to load is recorded as a failing result with a single
//! loader-failure finding; it never aborts the run. The schema handle is
//! read-only and shared across all files.

use std::path::{Path, PathBuf};

use serde_json::Value;
use zuulcilint_checker::{jobs, nodesets, playbooks, semaphores};
use zuulcilint_core::{Finding, LintResult, WarningMode};
use zuulcilint_schema::{document, ZuulSchema};

use crate::discover::DiscoveredFiles;

/// Run-wide options for the lint driver.
#[derive(Debug, Clone)]
pub struct LintOptions {
    /// Run the playbook-path checker (`--check-playbook-paths`).
    pub check_playbook_paths: bool,
    /// Root directory playbook references are resolved against.
    pub project_root: PathBuf,
}

/// Everything one invocation produced: per-file results plus run-wide
/// findings that no single file owns.
#[derive(Debug)]
pub struct RunSummary {
    /// One result per lintable input file, in discovery order.
    pub results: Vec<LintResult>,
    /// Cross-file findings: duplicate jobs, unknown nodesets, legacy
    /// `.yml` extensions.
    pub run_findings: Vec<Finding>,
}

impl RunSummary {
    /// Whether the whole run passes under the given warning mode.
    pub fn passed(&self, mode: WarningMode) -> bool {
        self.results.iter().all(|r| r.passed(mode))
            && !self.run_findings.iter().any(|f| mode.fails(f.severity))
    }
}

/// Lint every discovered file and run the cross-file checks.
pub fn lint_files(
    schema: &ZuulSchema,
    discovered: &DiscoveredFiles,
    opts: &LintOptions,
) -> RunSummary {
    let mut results = Vec::new();
    let mut parsed_docs: Vec<Value> = Vec::new();
    let mut job_names_per_file: Vec<Vec<String>> = Vec::new();

    for path in &discovered.missing {
        results.push(LintResult::loader_failure(
            path,
            format!("{}: no such file or directory", path.display()),
        ));
    }

    for path in &discovered.yaml {
        let (result, doc) = lint_file(schema, path, opts);
        if let Some(doc) = doc {
            job_names_per_file.push(jobs::job_names(&doc));
            parsed_docs.push(doc);
        }
        results.push(result);
    }

    let mut run_findings = Vec::new();

    for path in &discovered.legacy_yml {
        run_findings.push(Finding::warning(
            "",
            format!(
                "{}: uses the legacy '.yml' extension; rename to '.yaml'",
                path.display()
            ),
        ));
    }

    for name in jobs::duplicated_jobs(&job_names_per_file) {
        run_findings.push(Finding::warning(
            "",
            format!("job {name:?} is defined in more than one file"),
        ));
    }

    for name in nodesets::unknown_nodesets(&parsed_docs) {
        run_findings.push(Finding::warning(
            "",
            format!("nodeset {name:?} is referenced but never defined"),
        ));
    }

    RunSummary {
        results,
        run_findings,
    }
}

/// Lint a single file.
///
/// Returns the result together with the converted document when loading
/// succeeded, so the caller can feed the cross-file checks without parsing
/// twice.
pub fn lint_file(
    schema: &ZuulSchema,
    path: &Path,
    opts: &LintOptions,
) -> (LintResult, Option<Value>) {
    tracing::debug!(file = %path.display(), "linting");

    let doc = match document::load_document(path).and_then(|yaml| document::to_json(path, &yaml)) {
        Ok(doc) => doc,
        Err(e) => return (LintResult::loader_failure(path, e.to_string()), None),
    };

    let mut result = LintResult::new(path);
    result.findings.extend(schema.validate(&doc));
    result.findings.extend(semaphores::check_document(&doc));

    if opts.check_playbook_paths {
        result
            .findings
            .extend(playbooks::check_document(&doc, &opts.project_root));
    }

    (result, Some(doc))
}
