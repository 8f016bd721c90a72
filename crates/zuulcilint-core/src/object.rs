//! # Zuul Object Kinds
//!
//! The closed set of top-level keys a Zuul configuration document may
//! contain. A Zuul document is a sequence of single-key mappings; the key
//! selects the object kind and the sub-schema it is validated against.

use std::fmt;
use std::str::FromStr;

/// A top-level Zuul configuration object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZuulObjectKind {
    /// A named stage (check, gate, ...) with triggers and reporting.
    Pipeline,
    /// A unit of work: playbooks, nodeset, variables, dependencies.
    Job,
    /// Attaches jobs to pipelines for a repository.
    Project,
    /// A named set of worker nodes/labels.
    Nodeset,
    /// A concurrency limit shared between jobs.
    Semaphore,
    /// A shared change queue.
    Queue,
    /// Per-file configuration directives.
    Pragma,
    /// Encrypted data made available to jobs.
    Secret,
}

/// All kinds, in the order they are conventionally reported.
pub const ZUUL_OBJECT_KINDS: [ZuulObjectKind; 8] = [
    ZuulObjectKind::Pipeline,
    ZuulObjectKind::Job,
    ZuulObjectKind::Project,
    ZuulObjectKind::Nodeset,
    ZuulObjectKind::Semaphore,
    ZuulObjectKind::Queue,
    ZuulObjectKind::Pragma,
    ZuulObjectKind::Secret,
];

impl ZuulObjectKind {
    /// The document key for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ZuulObjectKind::Pipeline => "pipeline",
            ZuulObjectKind::Job => "job",
            ZuulObjectKind::Project => "project",
            ZuulObjectKind::Nodeset => "nodeset",
            ZuulObjectKind::Semaphore => "semaphore",
            ZuulObjectKind::Queue => "queue",
            ZuulObjectKind::Pragma => "pragma",
            ZuulObjectKind::Secret => "secret",
        }
    }
}

impl fmt::Display for ZuulObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZuulObjectKind {
    type Err = UnknownObjectKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pipeline" => Ok(ZuulObjectKind::Pipeline),
            "job" => Ok(ZuulObjectKind::Job),
            "project" => Ok(ZuulObjectKind::Project),
            "nodeset" => Ok(ZuulObjectKind::Nodeset),
            "semaphore" => Ok(ZuulObjectKind::Semaphore),
            "queue" => Ok(ZuulObjectKind::Queue),
            "pragma" => Ok(ZuulObjectKind::Pragma),
            "secret" => Ok(ZuulObjectKind::Secret),
            other => Err(UnknownObjectKind(other.to_string())),
        }
    }
}

/// The key is not one of the known Zuul object kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownObjectKind(pub String);

impl fmt::Display for UnknownObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Zuul object kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownObjectKind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_kinds() {
        for kind in ZUUL_OBJECT_KINDS {
            let parsed: ZuulObjectKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "tenant".parse::<ZuulObjectKind>().unwrap_err();
        assert!(err.to_string().contains("tenant"));
    }

    #[test]
    fn kind_count_is_exhaustive() {
        assert_eq!(ZUUL_OBJECT_KINDS.len(), 8);
    }
}
