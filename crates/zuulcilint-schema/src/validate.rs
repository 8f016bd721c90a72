//! # Schema Validation
//!
//! Validates Zuul documents against a JSON Schema (Draft 2019-09, matching
//! the draft the upstream schema declares).
//!
//! ## Dispatch
//!
//! A Zuul document is a sequence of single-key mappings; the key selects the
//! object kind (`pipeline`, `job`, ...). The schema describes this as
//! `items.oneOf` over single-required-key wrappers. Rather than validating
//! each item against the whole `oneOf` — which buries the real violation
//! under seven "missing property" failures from the non-matching branches —
//! [`ZuulSchema`] compiles one validator per kind at load time and
//! dispatches each item by its key. Unknown keys produce exactly one error
//! naming the key; known keys get the full error list from the matching
//! sub-schema. A schema without the wrapper structure falls back to
//! whole-document validation.
//!
//! Validation never mutates the document and never stops at the first
//! error: the tool's value is surfacing every problem in one pass.

use std::collections::BTreeMap;
use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;
use zuulcilint_core::{Finding, SchemaError};

/// The default Zuul schema shipped with the linter.
const BUNDLED_SCHEMA: &str = include_str!("../schemas/zuul.schema.json");

/// An immutable, compiled Zuul schema.
///
/// Loaded once per run and shared read-only across all input files;
/// compiled validators are `Send + Sync`.
#[derive(Debug)]
pub struct ZuulSchema {
    /// Where the schema came from, for error reporting.
    source: String,
    /// One compiled validator per top-level object kind.
    kind_validators: BTreeMap<String, Validator>,
    /// Whole-document validator, used when the schema does not follow the
    /// single-key-wrapper structure.
    whole: Option<Validator>,
}

impl ZuulSchema {
    /// Load the bundled default Zuul schema.
    pub fn bundled() -> Result<Self, SchemaError> {
        let raw: Value =
            serde_json::from_str(BUNDLED_SCHEMA).map_err(|e| SchemaError::SchemaLoad {
                path: "<bundled>".to_string(),
                reason: format!("invalid JSON: {e}"),
            })?;
        Self::from_value("<bundled>", &raw)
    }

    /// Load an alternate schema from a file (`--schema`).
    ///
    /// The format is chosen by extension: `.yaml`/`.yml` parse as YAML,
    /// anything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self, SchemaError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::SchemaLoad {
            path: display.clone(),
            reason: e.to_string(),
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let raw: Value = match ext {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| SchemaError::SchemaLoad {
                    path: display.clone(),
                    reason: format!("invalid YAML: {e}"),
                })?
            }
            _ => serde_json::from_str(&content).map_err(|e| SchemaError::SchemaLoad {
                path: display.clone(),
                reason: format!("invalid JSON: {e}"),
            })?,
        };
        Self::from_value(&display, &raw)
    }

    /// Compile a schema from an in-memory JSON value.
    pub fn from_value(source: &str, raw: &Value) -> Result<Self, SchemaError> {
        if !raw.is_object() {
            return Err(SchemaError::SchemaLoad {
                path: source.to_string(),
                reason: "schema root must be an object".to_string(),
            });
        }

        let mut kind_validators = BTreeMap::new();
        let mut whole = None;

        match extract_kind_schemas(raw) {
            Some(kinds) => {
                for (kind, schema) in kinds {
                    kind_validators.insert(kind.clone(), compile(&kind, &schema)?);
                }
                tracing::debug!(
                    source,
                    kinds = kind_validators.len(),
                    "compiled per-kind validators"
                );
            }
            None => {
                tracing::debug!(
                    source,
                    "schema has no single-key wrapper structure; using whole-document validation"
                );
                whole = Some(compile("<document>", raw)?);
            }
        }

        Ok(ZuulSchema {
            source: source.to_string(),
            kind_validators,
            whole,
        })
    }

    /// Where this schema was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The top-level object kinds this schema knows, sorted.
    pub fn known_kinds(&self) -> Vec<&str> {
        self.kind_validators.keys().map(|s| s.as_str()).collect()
    }

    /// Validate a converted document against the schema.
    ///
    /// Returns all findings in traversal order; an empty list means the
    /// document conforms. The same document and schema always yield the
    /// same findings in the same order.
    pub fn validate(&self, doc: &Value) -> Vec<Finding> {
        if let Some(whole) = &self.whole {
            return whole
                .iter_errors(doc)
                .map(|e| Finding::error(e.instance_path.to_string(), e.to_string()))
                .collect();
        }

        let mut findings = Vec::new();

        let Some(items) = doc.as_array() else {
            findings.push(Finding::error(
                "",
                "expected a sequence of Zuul configuration objects",
            ));
            return findings;
        };

        for (index, item) in items.iter().enumerate() {
            let Some(map) = item.as_object() else {
                findings.push(Finding::error(
                    format!("/{index}"),
                    "expected a single-key mapping selecting a Zuul object kind",
                ));
                continue;
            };
            if map.len() != 1 {
                findings.push(Finding::error(
                    format!("/{index}"),
                    format!(
                        "expected a single-key mapping selecting a Zuul object kind, found {} keys",
                        map.len()
                    ),
                ));
                continue;
            }
            let Some((kind, body)) = map.iter().next() else {
                continue;
            };
            match self.kind_validators.get(kind) {
                None => {
                    findings.push(Finding::error(
                        format!("/{index}"),
                        format!("unknown Zuul object kind: {kind:?}"),
                    ));
                }
                Some(validator) => {
                    for e in validator.iter_errors(body) {
                        findings.push(Finding::error(
                            format!("/{index}/{kind}{}", e.instance_path),
                            e.to_string(),
                        ));
                    }
                }
            }
        }

        findings
    }
}

/// Extract one self-contained schema per top-level object kind.
///
/// Expects the Zuul schema structure: `items.oneOf` alternatives, each an
/// object wrapper requiring exactly one key, whose property schema is the
/// body for that kind. The schema's `definitions` table is carried into
/// each extracted schema so internal `$ref`s keep resolving. Returns `None`
/// when the schema is shaped differently.
fn extract_kind_schemas(raw: &Value) -> Option<BTreeMap<String, Value>> {
    let alternatives = raw.get("items")?.get("oneOf")?.as_array()?;
    let definitions = raw.get("definitions");

    let mut kinds = BTreeMap::new();
    for alternative in alternatives {
        let required = alternative.get("required")?.as_array()?;
        if required.len() != 1 {
            return None;
        }
        let kind = required[0].as_str()?;
        let body = alternative.get("properties")?.get(kind)?.as_object()?;

        let mut schema = serde_json::Map::new();
        if let Some(defs) = definitions {
            schema.insert("definitions".to_string(), defs.clone());
        }
        for (key, value) in body {
            schema.insert(key.clone(), value.clone());
        }
        kinds.insert(kind.to_string(), Value::Object(schema));
    }

    if kinds.is_empty() {
        None
    } else {
        Some(kinds)
    }
}

/// Compile one schema value into a Draft 2019-09 validator.
fn compile(kind: &str, schema: &Value) -> Result<Validator, SchemaError> {
    jsonschema::options()
        .with_draft(jsonschema::Draft::Draft201909)
        .build(schema)
        .map_err(|e| SchemaError::SchemaCompile {
            kind: kind.to_string(),
            reason: e.to_string(),
        })
}
