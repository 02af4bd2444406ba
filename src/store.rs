use serde::Deserialize;
#[cfg(test)]
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

const REQUEST_TIMEOUT_MS: u64 = 5000;

/// One document out of the store: an opaque JSON object plus its id.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("invalid document {collection}/{document_id}: {reason}")]
    InvalidDocument {
        collection: String,
        document_id: String,
        reason: String,
    },
}

/// Read-only document store. The verifier consumes nothing else; both the
/// directory backend and the REST backend sit behind this seam so the core
/// never binds to a concrete database.
pub trait DocumentStore {
    fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;
    fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub fn resolve_store(source: &str) -> Result<Box<dyn DocumentStore>, StoreError> {
    if is_remote(source) {
        Ok(Box::new(RestStore::new(source)?))
    } else {
        Ok(Box::new(DirStore::new(Path::new(source))))
    }
}

/// Local directory backend: `<root>/<collection>/<id>.json` holds one
/// document's fields as a JSON object. Used for fixtures and for audits
/// against an exported snapshot.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn read_document(&self, collection: &str, id: &str, path: &Path) -> Result<Document, StoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| StoreError::InvalidDocument {
                collection: collection.to_string(),
                document_id: id.to_string(),
                reason: e.to_string(),
            })?;
        match value {
            serde_json::Value::Object(fields) => Ok(Document {
                id: id.to_string(),
                fields,
            }),
            _ => Err(StoreError::InvalidDocument {
                collection: collection.to_string(),
                document_id: id.to_string(),
                reason: "document is not a JSON object".to_string(),
            }),
        }
    }
}

impl DocumentStore for DirStore {
    fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let path = self.root.join(collection).join(format!("{}.json", id));
        if !path.exists() {
            return Ok(None);
        }
        self.read_document(collection, id, &path).map(Some)
    }

    fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let dir = self.root.join(collection);
        if !dir.exists() {
            return Ok(vec![]);
        }
        let mut ids = Vec::new();
        let entries = std::fs::read_dir(&dir).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::Unavailable(e.to_string()))?;
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        // directory iteration order is platform-defined
        ids.sort();
        let mut out = Vec::with_capacity(ids.len());
        for id in ids {
            let path = dir.join(format!("{}.json", id));
            out.push(self.read_document(collection, &id, &path)?);
        }
        Ok(out)
    }
}

#[derive(Debug, Deserialize)]
struct WireDocument {
    id: String,
    #[serde(default)]
    fields: serde_json::Map<String, serde_json::Value>,
}

impl WireDocument {
    fn into_document(self) -> Document {
        Document {
            id: self.id,
            fields: self.fields,
        }
    }
}

/// HTTP backend for a managed document database:
/// `GET {base}/{collection}` lists `{"id", "fields"}` objects,
/// `GET {base}/{collection}/{id}` fetches one, 404 means not found.
/// No response cache: an audit must never read stale data.
pub struct RestStore {
    base: String,
    client: reqwest::blocking::Client,
}

impl RestStore {
    pub fn new(base: &str) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn fetch(&self, url: &str) -> Result<Option<String>, StoreError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp
            .error_for_status()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let body = resp
            .text()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Some(body))
    }
}

impl DocumentStore for RestStore {
    fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let url = format!("{}/{}/{}", self.base, collection, id);
        let Some(body) = self.fetch(&url)? else {
            return Ok(None);
        };
        let wire: WireDocument =
            serde_json::from_str(&body).map_err(|e| StoreError::InvalidDocument {
                collection: collection.to_string(),
                document_id: id.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Some(wire.into_document()))
    }

    fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let url = format!("{}/{}", self.base, collection);
        let Some(body) = self.fetch(&url)? else {
            return Ok(vec![]);
        };
        let wire: Vec<WireDocument> = serde_json::from_str(&body)
            .map_err(|e| StoreError::Unavailable(format!("invalid response from {}: {}", url, e)))?;
        Ok(wire.into_iter().map(WireDocument::into_document).collect())
    }
}

/// In-memory store for unit tests of the services layer.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Document>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, collection: &str, id: &str, fields: serde_json::Value) {
        let serde_json::Value::Object(fields) = fields else {
            panic!("fixture document must be a JSON object");
        };
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.to_string(),
                fields,
            });
    }
}

#[cfg(test)]
impl DocumentStore for MemoryStore {
    fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }
}
