//! Backend abstraction.
//!
//! # Responsibilities
//! - Name a backend by namespace, service name and port
//! - Carry the proxy mode of the backend (HTTP or raw TCP)

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Reference to a backend service port, as bound to a host path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct BackendRef {
    pub namespace: String,
    pub name: String,
    /// Port number or named port.
    pub port: String,
}

impl BackendRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            port: port.into(),
        }
    }

    pub fn id(&self) -> BackendId {
        BackendId::new(&self.namespace, &self.name, &self.port)
    }
}

/// Stable backend identity, rendered as `namespace_name_port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BackendId(String);

impl BackendId {
    pub fn new(namespace: &str, name: &str, port: &str) -> Self {
        Self(format!("{}_{}_{}", namespace, name, port))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Proxy mode of a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    Http,
    Tcp,
}

/// A registered backend.
#[derive(Debug)]
pub struct Backend {
    id: BackendId,
    reference: BackendRef,
    mode_tcp: AtomicBool,
}

/// Shared handle to a registered backend.
pub type BackendHandle = Arc<Backend>;

impl Backend {
    /// Create a backend in HTTP mode.
    pub fn new(reference: BackendRef) -> Self {
        Self {
            id: reference.id(),
            reference,
            mode_tcp: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> &BackendId {
        &self.id
    }

    pub fn reference(&self) -> &BackendRef {
        &self.reference
    }

    pub fn mode(&self) -> BackendMode {
        if self.mode_tcp.load(Ordering::Acquire) {
            BackendMode::Tcp
        } else {
            BackendMode::Http
        }
    }

    /// Switch the backend mode, returning the previous one.
    pub fn set_mode(&self, mode: BackendMode) -> BackendMode {
        let previous = self.mode_tcp.swap(mode == BackendMode::Tcp, Ordering::AcqRel);
        if previous {
            BackendMode::Tcp
        } else {
            BackendMode::Http
        }
    }
}
