//! # Playbook Path Checks
//!
//! Verifies that playbook and role paths referenced by job definitions
//! exist on disk, relative to the project root. Runs only when the user
//! asks for it (`--check-playbook-paths`): it needs filesystem access the
//! schema alone cannot provide.

use std::path::Path;

use serde_json::{Map, Value};
use zuulcilint_core::{Finding, ZuulObjectKind};

use crate::{objects_of_kind, refs};

/// Job fields that reference playbook files.
pub const PLAYBOOK_FIELDS: [&str; 4] = ["pre-run", "run", "post-run", "cleanup-run"];

/// Check every job in a document; one warning per missing reference.
pub fn check_document(doc: &Value, root: &Path) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (index, job) in objects_of_kind(doc, ZuulObjectKind::Job) {
        findings.extend(check_job(index, job, root));
    }
    tracing::debug!(root = %root.display(), findings = findings.len(), "checked playbook paths");
    findings
}

/// Check one job's playbook and role references against the filesystem.
pub fn check_job(index: usize, job: &Map<String, Value>, root: &Path) -> Vec<Finding> {
    let job_name = job.get("name").and_then(Value::as_str).unwrap_or("<anonymous>");
    let mut findings = Vec::new();

    for field in PLAYBOOK_FIELDS {
        let Some(value) = job.get(field) else {
            continue;
        };
        for reference in refs::candidate_strings(value) {
            if !root.join(reference).exists() {
                findings.push(Finding::warning(
                    format!("/{index}/job/{field}"),
                    format!("job {job_name:?}: {field} playbook {reference:?} not found"),
                ));
            }
        }
    }

    if let Some(roles) = job.get("roles").and_then(Value::as_array) {
        for role in roles {
            let Some(entry) = role.as_object() else {
                continue;
            };
            // Roles sourced from another project are resolved by Zuul, not
            // by the local tree.
            if entry.contains_key("zuul") {
                continue;
            }
            if let Some(name) = entry.get("name").and_then(Value::as_str) {
                if !root.join(name).exists() {
                    findings.push(Finding::warning(
                        format!("/{index}/job/roles"),
                        format!("job {job_name:?}: role {name:?} not found"),
                    ));
                }
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_bare_string_run_is_one_warning() {
        let root = tempfile::tempdir().unwrap();
        let doc = json!([
            {"job": {"name": "t", "run": "playbooks/run.yaml"}}
        ]);
        let findings = check_document(&doc, root.path());
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("playbooks/run.yaml"));
        assert!(findings[0].message.contains("\"t\""));
        assert_eq!(findings[0].path, "/0/job/run");
    }

    #[test]
    fn only_missing_entry_of_list_is_reported() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("playbooks")).unwrap();
        std::fs::write(root.path().join("playbooks/present.yaml"), "---\n").unwrap();

        let doc = json!([
            {"job": {
                "name": "t",
                "run": ["playbooks/present.yaml", "playbooks/absent.yaml"]
            }}
        ]);
        let findings = check_document(&doc, root.path());
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("playbooks/absent.yaml"));
        assert!(!findings[0].message.contains("present.yaml"));
    }

    #[test]
    fn object_form_references_are_checked() {
        let root = tempfile::tempdir().unwrap();
        let doc = json!([
            {"job": {
                "name": "t",
                "pre-run": [{"name": "playbooks/pre.yaml", "semaphores": "sem"}]
            }}
        ]);
        let findings = check_document(&doc, root.path());
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("pre-run"));
    }

    #[test]
    fn existing_paths_produce_no_warnings() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("playbooks")).unwrap();
        for name in ["pre.yaml", "run.yaml", "post.yaml"] {
            std::fs::write(root.path().join("playbooks").join(name), "---\n").unwrap();
        }
        let doc = json!([
            {"job": {
                "name": "t",
                "pre-run": "playbooks/pre.yaml",
                "run": "playbooks/run.yaml",
                "post-run": ["playbooks/post.yaml"]
            }}
        ]);
        assert_eq!(check_document(&doc, root.path()), vec![]);
    }

    #[test]
    fn zuul_sourced_roles_are_skipped() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("roles/local-role")).unwrap();
        let doc = json!([
            {"job": {
                "name": "t",
                "roles": [
                    {"zuul": "zuul/zuul-jobs"},
                    {"name": "roles/local-role"},
                    {"name": "roles/missing-role"}
                ]
            }}
        ]);
        let findings = check_document(&doc, root.path());
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("roles/missing-role"));
    }

    #[test]
    fn jobs_without_playbooks_are_fine() {
        let root = tempfile::tempdir().unwrap();
        let doc = json!([{"job": {"name": "abstract-base", "abstract": true}}]);
        assert_eq!(check_document(&doc, root.path()), vec![]);
    }
}
