//! # Nodeset Reference Checks
//!
//! A job may point at a named nodeset (`nodeset: fedora-pair`), and a
//! nodeset's `alternatives` may do the same. References to names no input
//! file defines are reported; inline nodeset objects define their own nodes
//! and need no lookup.

use std::collections::BTreeSet;

use serde_json::Value;
use zuulcilint_core::ZuulObjectKind;

use crate::objects_of_kind;

/// Names of all nodesets defined across the given documents.
pub fn defined_nodesets(docs: &[Value]) -> BTreeSet<String> {
    let mut defined = BTreeSet::new();
    for doc in docs {
        for (_, nodeset) in objects_of_kind(doc, ZuulObjectKind::Nodeset) {
            if let Some(name) = nodeset.get("name").and_then(Value::as_str) {
                defined.insert(name.to_string());
            }
        }
    }
    defined
}

/// Nodeset names referenced anywhere but defined nowhere, sorted.
pub fn unknown_nodesets(docs: &[Value]) -> Vec<String> {
    let defined = defined_nodesets(docs);
    tracing::debug!(defined = defined.len(), "collected nodeset definitions");
    let mut unknown = BTreeSet::new();

    for doc in docs {
        for (_, job) in objects_of_kind(doc, ZuulObjectKind::Job) {
            if let Some(reference) = job.get("nodeset").and_then(Value::as_str) {
                if !defined.contains(reference) {
                    unknown.insert(reference.to_string());
                }
            }
        }
        for (_, nodeset) in objects_of_kind(doc, ZuulObjectKind::Nodeset) {
            for reference in alternative_names(nodeset.get("alternatives")) {
                if !defined.contains(reference) {
                    unknown.insert(reference.to_string());
                }
            }
        }
    }

    unknown.into_iter().collect()
}

/// String entries of a nodeset `alternatives` list; inline bodies are
/// definitions, not references.
fn alternative_names(alternatives: Option<&Value>) -> Vec<&str> {
    alternatives
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}
