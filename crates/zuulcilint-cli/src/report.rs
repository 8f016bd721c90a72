//! # Terminal Reporting
//!
//! Renders a [`RunSummary`] for the terminal: one section per failing or
//! warning file, a section for run-wide findings, and a bold final
//! `Passed`/`Failed` verdict. Warning visibility follows the run's
//! [`WarningMode`].

use std::fmt::Write as _;

use colored::Colorize;
use zuulcilint_core::{Severity, WarningMode};

use crate::lint::RunSummary;

/// Render the whole run as the text that goes to stdout.
pub fn render(summary: &RunSummary, mode: WarningMode) -> String {
    let mut out = String::new();

    for result in &summary.results {
        let visible: Vec<_> = result
            .findings
            .iter()
            .filter(|f| mode.reports(f.severity))
            .collect();
        if visible.is_empty() {
            continue;
        }

        let _ = writeln!(out, "{}", result.file.display().to_string().bold());
        for finding in visible {
            let label = match finding.severity {
                Severity::Error => "error".red().bold(),
                Severity::Warning => "warning".yellow().bold(),
            };
            let _ = writeln!(out, "  {label}: {finding}");
        }
    }

    let run_visible: Vec<_> = summary
        .run_findings
        .iter()
        .filter(|f| mode.reports(f.severity))
        .collect();
    if !run_visible.is_empty() {
        let _ = writeln!(out, "{}", "Warnings".yellow().bold());
        for finding in run_visible {
            let _ = writeln!(out, "  {}", finding.message);
        }
    }

    let mut errors = 0;
    let mut warnings = 0;
    for finding in summary
        .results
        .iter()
        .flat_map(|r| r.findings.iter())
        .chain(summary.run_findings.iter())
    {
        match finding.severity {
            Severity::Error => errors += 1,
            Severity::Warning if mode.reports(Severity::Warning) => warnings += 1,
            Severity::Warning => {}
        }
    }
    let _ = writeln!(
        out,
        "Checked {} file(s): {} error(s), {} warning(s)",
        summary.results.len(),
        errors,
        warnings
    );

    if summary.passed(mode) {
        let _ = writeln!(out, "{}", "Passed".green().bold());
    } else {
        let _ = writeln!(out, "{}", "Failed".red().bold());
    }
    out
}

/// Print the rendered run to stdout.
pub fn print(summary: &RunSummary, mode: WarningMode) {
    print!("{}", render(summary, mode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use zuulcilint_core::{Finding, LintResult};

    fn summary_with(findings: Vec<Finding>, run_findings: Vec<Finding>) -> RunSummary {
        let mut result = LintResult::new("zuul.d/jobs.yaml");
        result.findings = findings;
        RunSummary {
            results: vec![result],
            run_findings,
        }
    }

    #[test]
    fn passing_run_prints_verdict_and_totals() {
        colored::control::set_override(false);
        let out = render(&summary_with(vec![], vec![]), WarningMode::Report);
        assert!(out.contains("Checked 1 file(s): 0 error(s), 0 warning(s)"));
        assert!(out.trim_end().ends_with("Passed"));
    }

    #[test]
    fn errors_are_listed_under_the_file() {
        colored::control::set_override(false);
        let findings = vec![Finding::error("/0/pipeline", "\"manager\" is a required property")];
        let out = render(&summary_with(findings, vec![]), WarningMode::Report);
        assert!(out.contains("zuul.d/jobs.yaml"));
        assert!(out.contains("error: /0/pipeline: \"manager\" is a required property"));
        assert!(out.trim_end().ends_with("Failed"));
    }

    #[test]
    fn ignore_mode_hides_warnings_but_keeps_errors() {
        colored::control::set_override(false);
        let findings = vec![
            Finding::warning("/0/job/run", "playbook not found"),
            Finding::error("/1/job", "\"name\" is a required property"),
        ];
        let out = render(&summary_with(findings, vec![]), WarningMode::Ignore);
        assert!(!out.contains("playbook not found"));
        assert!(out.contains("required property"));
    }

    #[test]
    fn totals_count_run_findings_by_severity() {
        colored::control::set_override(false);
        let run = vec![
            Finding::warning("", "legacy '.yml' extension"),
            Finding::error("", "job \"a\" is defined in more than one file"),
        ];
        let out = render(&summary_with(vec![], run), WarningMode::Report);
        assert!(out.contains("1 error(s), 1 warning(s)"));
    }

    #[test]
    fn ignore_mode_excludes_warnings_from_totals() {
        colored::control::set_override(false);
        let findings = vec![Finding::warning("/0/job/run", "playbook not found")];
        let run = vec![Finding::warning("", "legacy '.yml' extension")];
        let out = render(&summary_with(findings, run), WarningMode::Ignore);
        assert!(out.contains("0 error(s), 0 warning(s)"));
    }

    #[test]
    fn run_findings_render_in_their_own_section() {
        colored::control::set_override(false);
        let run = vec![Finding::warning("", "job \"shared\" is defined in more than one file")];
        let out = render(&summary_with(vec![], run), WarningMode::Report);
        assert!(out.contains("Warnings"));
        assert!(out.contains("more than one file"));
        assert!(out.trim_end().ends_with("Passed"));
    }
}
