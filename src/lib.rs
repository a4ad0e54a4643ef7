//! Host annotation translator library.
//!
//! Applies host-scoped annotations (client certificate verification,
//! certificate signer, SSL passthrough, client timeouts) to a host
//! configuration, reporting bad input as diagnostics instead of failing.

pub mod annotations;
pub mod backend;
pub mod config;
pub mod convert;
pub mod driver;
pub mod host;
pub mod observability;
pub mod tls;

pub use annotations::{AnnotationMap, AnnotationSource, AnnotationValue, ResourceRef};
pub use backend::{BackendRegistry, BackendStore};
pub use convert::HostUpdater;
pub use host::Host;
