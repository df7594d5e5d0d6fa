use std::fs;
use std::path::{Path, PathBuf};

use iiif_document::OrderedDocument;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{PresentationError, PresentationResult};

const FILE_HINT: &str = " If you were trying to point to a file, does it exist?";

/// Input accepted by [`PresentationObject::parse`](crate::PresentationObject::parse).
///
/// Conversions pick the variant: strings become [`Text`](Self::Text), paths
/// become [`Path`](Self::Path), maps and JSON objects become
/// [`Mapping`](Self::Mapping), and any other JSON value becomes
/// [`Other`](Self::Other), which `parse` rejects.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseSource {
    /// A path to an existing file, or else JSON text.
    Text(String),
    /// A path that must exist.
    Path(PathBuf),
    /// An in-memory mapping, adopted without copying.
    Mapping(Map<String, Value>),
    /// Anything else.
    Other(Value),
}

impl ParseSource {
    /// Resolve the source into a document.
    pub(crate) fn load(self) -> PresentationResult<OrderedDocument> {
        match self {
            ParseSource::Text(text) => {
                let path = Path::new(&text);
                if path.exists() {
                    read_document(path)
                } else {
                    debug!(len = text.len(), "parsing JSON text");
                    parse_text(&text)
                }
            }
            ParseSource::Path(path) => {
                if path.exists() {
                    read_document(&path)
                } else {
                    Err(PresentationError::InvalidArgument {
                        received: "path",
                        hint: FILE_HINT,
                    })
                }
            }
            ParseSource::Mapping(map) => {
                debug!(keys = map.len(), "adopting mapping");
                Ok(OrderedDocument::from(map))
            }
            ParseSource::Other(value) => Err(PresentationError::InvalidArgument {
                received: json_kind(&value),
                hint: "",
            }),
        }
    }
}

fn read_document(path: &Path) -> PresentationResult<OrderedDocument> {
    debug!(path = %path.display(), "parsing JSON file");
    let text = fs::read_to_string(path).map_err(|source| PresentationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_text(&text)
}

fn parse_text(text: &str) -> PresentationResult<OrderedDocument> {
    Ok(serde_json::from_str(text)?)
}

/// Human-readable name of a JSON value's kind.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&str> for ParseSource {
    fn from(text: &str) -> Self {
        ParseSource::Text(text.to_string())
    }
}

impl From<String> for ParseSource {
    fn from(text: String) -> Self {
        ParseSource::Text(text)
    }
}

impl From<&Path> for ParseSource {
    fn from(path: &Path) -> Self {
        ParseSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ParseSource {
    fn from(path: PathBuf) -> Self {
        ParseSource::Path(path)
    }
}

impl From<Map<String, Value>> for ParseSource {
    fn from(map: Map<String, Value>) -> Self {
        ParseSource::Mapping(map)
    }
}

impl From<OrderedDocument> for ParseSource {
    fn from(document: OrderedDocument) -> Self {
        ParseSource::Mapping(document.into_map())
    }
}

impl From<Value> for ParseSource {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => ParseSource::Mapping(map),
            Value::String(text) => ParseSource::Text(text),
            other => ParseSource::Other(other),
        }
    }
}
