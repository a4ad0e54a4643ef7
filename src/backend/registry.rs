//! Backend registry.
//!
//! # Responsibilities
//! - Find existing backends without side effects
//! - Create backends on first acquisition
//! - Expose a deterministic snapshot for rendering

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;

use crate::backend::types::{Backend, BackendHandle, BackendId, BackendMode, BackendRef};

/// Lookup and acquisition of backends.
pub trait BackendStore: Send + Sync {
    /// Find a backend. Never creates one.
    fn find_backend(&self, namespace: &str, name: &str, port: &str) -> Option<BackendHandle>;

    /// Find a backend, creating it in HTTP mode when missing.
    fn acquire_backend(&self, namespace: &str, name: &str, port: &str) -> BackendHandle;
}

/// Concurrent backend store keyed by [`BackendId`].
#[derive(Debug, Clone, Default)]
pub struct BackendRegistry {
    inner: Arc<DashMap<BackendId, BackendHandle>>,
}

/// Point-in-time view of one backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendSnapshot {
    pub id: BackendId,
    #[serde(flatten)]
    pub reference: BackendRef,
    pub mode: BackendMode,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend with the given mode, replacing the mode of an
    /// existing record.
    pub fn register(&self, reference: BackendRef, mode: BackendMode) -> BackendHandle {
        let handle = self
            .inner
            .entry(reference.id())
            .or_insert_with(|| Arc::new(Backend::new(reference)))
            .value()
            .clone();
        handle.set_mode(mode);
        handle
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// All backends sorted by id.
    pub fn snapshot(&self) -> Vec<BackendSnapshot> {
        let mut backends: Vec<BackendSnapshot> = self
            .inner
            .iter()
            .map(|r| BackendSnapshot {
                id: r.key().clone(),
                reference: r.value().reference().clone(),
                mode: r.value().mode(),
            })
            .collect();
        backends.sort_by(|a, b| a.id.cmp(&b.id));
        backends
    }
}

impl BackendStore for BackendRegistry {
    fn find_backend(&self, namespace: &str, name: &str, port: &str) -> Option<BackendHandle> {
        let id = BackendId::new(namespace, name, port);
        self.inner.get(&id).map(|r| r.value().clone())
    }

    fn acquire_backend(&self, namespace: &str, name: &str, port: &str) -> BackendHandle {
        let reference = BackendRef::new(namespace, name, port);
        self.inner
            .entry(reference.id())
            .or_insert_with(|| {
                tracing::debug!(backend = %reference.id(), "Backend created");
                Arc::new(Backend::new(reference))
            })
            .value()
            .clone()
    }
}
