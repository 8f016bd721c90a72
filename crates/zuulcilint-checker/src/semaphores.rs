//! # Semaphore Usage Checks
//!
//! A job may acquire semaphores for its whole duration (`semaphore` /
//! `semaphores`) or per playbook (`semaphores` on a playbook entry).
//! Acquiring the same semaphore at both levels deadlocks the job at
//! runtime, so it is reported as an error.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use zuulcilint_core::{Finding, ZuulObjectKind};

use crate::playbooks::PLAYBOOK_FIELDS;
use crate::{objects_of_kind, refs};

/// Check every job in a document for doubly-acquired semaphores.
pub fn check_document(doc: &Value) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (index, job) in objects_of_kind(doc, ZuulObjectKind::Job) {
        findings.extend(check_job(index, job));
    }
    findings
}

/// Check one job; one error per semaphore held at both levels.
pub fn check_job(index: usize, job: &Map<String, Value>) -> Vec<Finding> {
    let job_name = job.get("name").and_then(Value::as_str).unwrap_or("<anonymous>");

    let mut job_level: BTreeSet<&str> = BTreeSet::new();
    for field in ["semaphore", "semaphores"] {
        if let Some(value) = job.get(field) {
            job_level.extend(refs::candidate_strings(value));
        }
    }
    if job_level.is_empty() {
        return Vec::new();
    }

    let mut findings = Vec::new();
    let mut reported: BTreeSet<&str> = BTreeSet::new();

    for field in PLAYBOOK_FIELDS {
        let Some(value) = job.get(field) else {
            continue;
        };
        for playbook in refs::object_entries(value) {
            let Some(semaphores) = playbook.get("semaphores") else {
                continue;
            };
            for name in refs::candidate_strings(semaphores) {
                if job_level.contains(name) && reported.insert(name) {
                    findings.push(Finding::error(
                        format!("/{index}/job"),
                        format!(
                            "job {job_name:?}: semaphore {name:?} is acquired both at job \
                             level and by a {field} playbook"
                        ),
                    ));
                }
            }
        }
    }

    findings
}
