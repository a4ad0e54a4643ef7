//! Certificate authority resolution.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Descriptor of a CA bundle stored on disk by the certificate cache.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CaFile {
    pub filename: String,
    /// Content hash, changes whenever the bundle changes.
    pub hash: String,
}

/// Errors that can occur while resolving a CA secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No secret with this reference exists.
    #[error("secret not found: '{0}'")]
    NotFound(String),

    /// The secret exists but cannot be read as a CA bundle.
    #[error("secret '{reference}' is malformed: {reason}")]
    Malformed { reference: String, reason: String },

    /// The secret has no CA content.
    #[error("secret '{0}' does not contain a 'ca.crt' key")]
    MissingCa(String),
}

/// Resolves secret references to CA file descriptors.
pub trait CaResolver: Send + Sync {
    fn ca_secret_path(&self, reference: &str) -> Result<CaFile, ResolveError>;
}

/// Stored outcome for one secret reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaEntry {
    Ca(CaFile),
    Malformed(String),
    NoCa,
}

/// In-memory CA resolver with preloaded secrets.
#[derive(Debug, Default)]
pub struct StaticCaStore {
    entries: HashMap<String, CaEntry>,
    lookups: AtomicUsize,
}

impl StaticCaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reference: impl Into<String>, entry: CaEntry) {
        self.entries.insert(reference.into(), entry);
    }

    pub fn with_ca(mut self, reference: &str, filename: &str, hash: &str) -> Self {
        self.insert(
            reference,
            CaEntry::Ca(CaFile {
                filename: filename.to_string(),
                hash: hash.to_string(),
            }),
        );
        self
    }

    /// Number of resolutions requested so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl CaResolver for StaticCaStore {
    fn ca_secret_path(&self, reference: &str) -> Result<CaFile, ResolveError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        match self.entries.get(reference) {
            Some(CaEntry::Ca(file)) => Ok(file.clone()),
            Some(CaEntry::Malformed(reason)) => Err(ResolveError::Malformed {
                reference: reference.to_string(),
                reason: reason.clone(),
            }),
            Some(CaEntry::NoCa) => Err(ResolveError::MissingCa(reference.to_string())),
            None => Err(ResolveError::NotFound(reference.to_string())),
        }
    }
}
