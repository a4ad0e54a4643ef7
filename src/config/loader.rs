//! Document loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::HostConfDocument;
use crate::config::validation::{validate_document, ValidationError};

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a document from TOML text.
pub fn parse_document(content: &str) -> Result<HostConfDocument, ConfigError> {
    let doc: HostConfDocument = toml::from_str(content)?;
    validate_document(&doc).map_err(ConfigError::Validation)?;
    Ok(doc)
}

/// Load and validate a document from a TOML file.
pub fn load_document(path: &Path) -> Result<HostConfDocument, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = parse_document(&content)?;
    tracing::debug!(path = ?path, hosts = doc.hosts.len(), "Document loaded");
    Ok(doc)
}
