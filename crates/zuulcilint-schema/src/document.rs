//! # Document Loading
//!
//! Parses Zuul YAML files into `serde_yaml::Value` trees and converts them
//! to JSON values for schema validation.
//!
//! ## Custom Tags
//!
//! Zuul documents may carry `!inherit`, `!override`, and
//! `!encrypted/pkcs1-oaep` tags. These are preserved as
//! `serde_yaml::Value::Tagged` nodes so the tag and the underlying value
//! both survive parsing; conversion to JSON unwraps the tag so schema
//! validation sees the plain value. Any tag outside this whitelist is
//! rejected — the loader never constructs anything beyond plain scalars,
//! mappings, and sequences.

use std::path::Path;

use serde_yaml::Value;
use zuulcilint_core::DocumentError;

/// Tags a Zuul document may carry, beyond the YAML core schema.
const ZUUL_TAG_WHITELIST: [&str; 2] = ["inherit", "override"];

/// Prefix for encrypted-blob tags (`!encrypted/pkcs1-oaep`).
const ENCRYPTED_TAG_PREFIX: &str = "encrypted/";

/// Read and parse a Zuul YAML file into a document tree.
///
/// # Errors
///
/// Returns `DocumentError::Io` if the file cannot be read,
/// `DocumentError::Parse` (with line/column) if it is not valid YAML, and
/// `DocumentError::UnsupportedTag` if it uses a tag outside the Zuul
/// whitelist.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(path, &text)
}

/// Parse Zuul YAML text into a document tree.
///
/// The `path` is used only for error reporting.
pub fn parse_document(path: &Path, text: &str) -> Result<Value, DocumentError> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| {
        let (line, column) = e
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((0, 0));
        DocumentError::Parse {
            path: path.display().to_string(),
            line,
            column,
            reason: e.to_string(),
        }
    })?;
    verify_tags(path, &value)?;
    Ok(value)
}

/// Walk a document tree and reject any YAML tag outside the Zuul whitelist.
pub fn verify_tags(path: &Path, value: &Value) -> Result<(), DocumentError> {
    match value {
        Value::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            let name = tag.trim_start_matches('!');
            if !ZUUL_TAG_WHITELIST.contains(&name) && !name.starts_with(ENCRYPTED_TAG_PREFIX) {
                return Err(DocumentError::UnsupportedTag {
                    path: path.display().to_string(),
                    tag,
                });
            }
            verify_tags(path, &tagged.value)
        }
        Value::Sequence(seq) => seq.iter().try_for_each(|v| verify_tags(path, v)),
        Value::Mapping(map) => map.iter().try_for_each(|(k, v)| {
            verify_tags(path, k)?;
            verify_tags(path, v)
        }),
        _ => Ok(()),
    }
}

/// Convert a parsed YAML document to a JSON value for schema validation.
///
/// Tagged nodes are unwrapped to their inner value: the schema describes the
/// plain shape, while the tag stays visible on the retained YAML tree for
/// callers that care about it.
pub fn to_json(path: &Path, value: &Value) -> Result<serde_json::Value, DocumentError> {
    convert(value).map_err(|reason| DocumentError::Convert {
        path: path.display().to_string(),
        reason,
    })
}

fn convert(value: &Value) -> Result<serde_json::Value, String> {
    use serde_json::Value as Json;

    match value {
        Value::Null => Ok(Json::Null),
        Value::Bool(b) => Ok(Json::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Json::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Json::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Json::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        Value::String(s) => Ok(Json::String(s.clone())),
        Value::Sequence(seq) => {
            let items: Result<Vec<Json>, String> = seq.iter().map(convert).collect();
            Ok(Json::Array(items?))
        }
        Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key: {other:?}")),
                };
                json_map.insert(key, convert(v)?);
            }
            Ok(Json::Object(json_map))
        }
        Value::Tagged(tagged) => convert(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Value, DocumentError> {
        parse_document(Path::new("test.yaml"), text)
    }

    #[test]
    fn parses_plain_zuul_document() {
        let doc = parse("- job:\n    name: base\n    run: playbooks/base.yaml\n").unwrap();
        assert!(doc.is_sequence());
    }

    #[test]
    fn parse_error_carries_position() {
        let err = parse("- job:\n  name: [unclosed\n").unwrap_err();
        match err {
            DocumentError::Parse { line, .. } => assert!(line > 0),
            other => panic!("expected Parse error, got {other}"),
        }
    }

    #[test]
    fn accepts_zuul_tags() {
        let doc = parse(concat!(
            "- job:\n",
            "    name: tagged\n",
            "    vars: !inherit\n",
            "      foo: bar\n",
            "- secret:\n",
            "    name: creds\n",
            "    data:\n",
            "      password: !encrypted/pkcs1-oaep\n",
            "        - c2VjcmV0\n",
        ))
        .unwrap();
        // The tag must survive parsing, not be silently stripped.
        let rendered = serde_yaml::to_string(&doc).unwrap();
        assert!(rendered.contains("!inherit"));
        assert!(rendered.contains("!encrypted/pkcs1-oaep"));
    }

    #[test]
    fn tag_round_trip_preserves_value() {
        let doc = parse("- job:\n    name: t\n    vars: !override\n      a: 1\n").unwrap();
        let rendered = serde_yaml::to_string(&doc).unwrap();
        let reparsed = parse(&rendered).unwrap();
        assert_eq!(doc, reparsed);
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = parse("- job:\n    name: evil\n    vars: !construct {}\n").unwrap_err();
        match err {
            DocumentError::UnsupportedTag { tag, .. } => {
                assert!(tag.contains("construct"), "tag was {tag}");
            }
            other => panic!("expected UnsupportedTag, got {other}"),
        }
    }

    #[test]
    fn to_json_converts_scalars_sequences_mappings() {
        let doc = parse(concat!(
            "- job:\n",
            "    name: conv\n",
            "    voting: true\n",
            "    attempts: 3\n",
            "    tags:\n",
            "      - one\n",
            "      - two\n",
        ))
        .unwrap();
        let json = to_json(Path::new("test.yaml"), &doc).unwrap();
        assert_eq!(json[0]["job"]["name"], "conv");
        assert_eq!(json[0]["job"]["voting"], true);
        assert_eq!(json[0]["job"]["attempts"], 3);
        assert_eq!(json[0]["job"]["tags"][1], "two");
    }

    #[test]
    fn to_json_unwraps_tags() {
        let doc = parse("- secret:\n    name: s\n    data:\n      pw: !encrypted/pkcs1-oaep abc\n")
            .unwrap();
        let json = to_json(Path::new("test.yaml"), &doc).unwrap();
        // The validator sees the inner value, not a wrapper.
        assert_eq!(json[0]["secret"]["data"]["pw"], "abc");
    }

    #[test]
    fn load_document_missing_file_is_io_error() {
        let err = load_document(Path::new("/nonexistent/zuul.yaml")).unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
    }

    #[test]
    fn empty_document_parses_to_null() {
        let doc = parse("").unwrap();
        assert!(doc.is_null());
    }
}
