//! # zuulcilint-checker — Structural Checks
//!
//! Checks that need more context than the schema alone: playbook path
//! existence on disk, job names duplicated across files, references to
//! nodesets that are never defined, and semaphores acquired twice by the
//! same job.
//!
//! All checks operate on the JSON value tree produced by
//! `zuulcilint-schema`'s document conversion; none of them mutate it.

pub mod jobs;
pub mod nodesets;
pub mod playbooks;
pub mod refs;
pub mod semaphores;

use serde_json::{Map, Value};
use zuulcilint_core::ZuulObjectKind;

/// Iterate the bodies of every top-level object of one kind in a document,
/// together with the item's index in the sequence.
///
/// Items that are not single-key mappings are skipped; the schema validator
/// already reports those.
pub fn objects_of_kind(
    doc: &Value,
    kind: ZuulObjectKind,
) -> impl Iterator<Item = (usize, &Map<String, Value>)> {
    doc.as_array()
        .map(|items| items.as_slice())
        .unwrap_or(&[])
        .iter()
        .enumerate()
        .filter_map(move |(index, item)| {
            let map = item.as_object()?;
            let body = map.get(kind.as_str())?.as_object()?;
            Some((index, body))
        })
}
