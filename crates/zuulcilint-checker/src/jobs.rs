//! # Duplicate Job Detection
//!
//! A job name defined in more than one input file almost always means a
//! copy-paste gone wrong; Zuul itself would reject the second definition.
//! Redefinitions within a single file are left alone — branch-specific
//! variants of one job legitimately live side by side.

use std::collections::BTreeSet;

use serde_json::Value;
use zuulcilint_core::ZuulObjectKind;

use crate::objects_of_kind;

/// The names of all jobs defined in a document.
pub fn job_names(doc: &Value) -> Vec<String> {
    objects_of_kind(doc, ZuulObjectKind::Job)
        .filter_map(|(_, job)| job.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

/// Job names defined in more than one file, sorted.
///
/// `per_file` holds the job names of each input file, one entry per file.
pub fn duplicated_jobs(per_file: &[Vec<String>]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut duplicated = BTreeSet::new();

    for names in per_file {
        let unique: BTreeSet<&str> = names.iter().map(String::as_str).collect();
        for name in unique {
            if !seen.insert(name.to_string()) {
                duplicated.insert(name.to_string());
            }
        }
    }

    duplicated.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_names_collects_only_jobs() {
        let doc = json!([
            {"job": {"name": "a"}},
            {"nodeset": {"name": "not-a-job"}},
            {"job": {"name": "b"}},
        ]);
        assert_eq!(job_names(&doc), vec!["a", "b"]);
    }

    #[test]
    fn cross_file_duplicates_are_reported() {
        let per_file = vec![
            vec!["build".to_string(), "test".to_string()],
            vec!["test".to_string(), "deploy".to_string()],
        ];
        assert_eq!(duplicated_jobs(&per_file), vec!["test"]);
    }

    #[test]
    fn within_file_duplicates_are_ignored() {
        // Branch variants of the same job in one file are legitimate.
        let per_file = vec![vec!["build".to_string(), "build".to_string()]];
        assert_eq!(duplicated_jobs(&per_file), Vec::<String>::new());
    }

    #[test]
    fn output_is_sorted_and_unique() {
        let per_file = vec![
            vec!["z".to_string(), "a".to_string()],
            vec!["z".to_string(), "a".to_string()],
            vec!["z".to_string()],
        ];
        assert_eq!(duplicated_jobs(&per_file), vec!["a", "z"]);
    }
}
