//! Backend registry subsystem.
//!
//! # Data Flow
//! ```text
//! HostPath.backend (BackendRef: namespace/name/port)
//!     → registry.rs (find-only or find-or-create)
//!     → BackendHandle (shared Arc<Backend>)
//!     → mode flag (HTTP or raw TCP) read by rendering
//! ```
//!
//! # Design Decisions
//! - Backends are keyed by a composite id, one record per namespace/name/port
//! - Handles are shared; the mode flag is atomic and last write wins
//! - The registry is injected into the translator, never global

pub mod registry;
pub mod types;

pub use registry::{BackendRegistry, BackendSnapshot, BackendStore};
pub use types::{Backend, BackendHandle, BackendId, BackendMode, BackendRef};
