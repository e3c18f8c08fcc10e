//! # Content Files
//!
//! Splits a documentation content file into its frontmatter block and body.
//!
//! The frontmatter block is delimited by a `---` line at the very start of
//! the file and the next `---` line. Its YAML is decoded into a JSON object
//! so that values are uniformly typed for the checks and the JSON report.
//! A file without an opening delimiter has empty frontmatter and the whole
//! text as its body.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{DslintError, ParseError};

/// Line that opens and closes a frontmatter block.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Decoded frontmatter keys and values.
pub type Frontmatter = Map<String, Value>;

/// A parsed content file.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFile {
    /// Location on disk.
    pub path: PathBuf,
    /// Decoded frontmatter; empty when the file has no block.
    pub frontmatter: Frontmatter,
    /// Everything after the frontmatter block.
    pub body: String,
}

impl ContentFile {
    /// Whether the frontmatter declares `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.frontmatter.contains_key(key)
    }
}

/// Read and split the content file at `path`.
///
/// # Errors
///
/// Returns [`DslintError::Io`] if the file cannot be read (or is not UTF-8)
/// and [`DslintError::Parse`] if its frontmatter block is malformed.
pub fn parse_content_file(path: &Path) -> Result<ContentFile, DslintError> {
    let raw = std::fs::read_to_string(path).map_err(|e| DslintError::io(path, e))?;
    let (frontmatter, body) = split_frontmatter(&raw).map_err(|source| DslintError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        keys = frontmatter.len(),
        "parsed content file"
    );

    Ok(ContentFile {
        path: path.to_path_buf(),
        frontmatter,
        body: body.to_string(),
    })
}

/// Split `text` into decoded frontmatter and the body that follows it.
pub fn split_frontmatter(text: &str) -> Result<(Frontmatter, &str), ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok((Frontmatter::new(), text));
    };
    if first.trim_end() != FRONTMATTER_DELIMITER {
        return Ok((Frontmatter::new(), text));
    }

    let block_start = first.len();
    let mut offset = block_start;
    for line in lines {
        if line.trim_end() == FRONTMATTER_DELIMITER {
            let block = &text[block_start..offset];
            let body = &text[offset + line.len()..];
            return Ok((decode_block(block)?, body));
        }
        offset += line.len();
    }

    Err(ParseError::Unterminated)
}

fn decode_block(block: &str) -> Result<Frontmatter, ParseError> {
    if block.trim().is_empty() {
        return Ok(Frontmatter::new());
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|e| ParseError::InvalidYaml(e.to_string()))?;

    match yaml_to_json_value(&yaml)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Frontmatter::new()),
        Value::Array(_) => Err(ParseError::NotAMapping("a sequence")),
        Value::String(_) => Err(ParseError::NotAMapping("a string")),
        Value::Number(_) => Err(ParseError::NotAMapping("a number")),
        Value::Bool(_) => Err(ParseError::NotAMapping("a boolean")),
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Frontmatter only uses the JSON-compatible subset of YAML. Scalar map keys
/// are stringified and tags are dropped.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, ParseError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| ParseError::Unsupported(format!("non-finite number {f}")))
            } else {
                Err(ParseError::Unsupported(format!("number {n}")))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(ParseError::Unsupported(format!("map key {other:?}")))
                    }
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
