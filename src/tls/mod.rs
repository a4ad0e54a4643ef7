//! TLS collaborators.
//!
//! # Data Flow
//! ```text
//! auth-tls-secret reference
//!     → ca.rs (CaResolver: reference → CaFile descriptor)
//!     → host.tls.client_auth
//!
//! cert-signer = acme
//!     → acme.rs (IssuerAccount: endpoint + emails usable?)
//!     → warning when unusable
//! ```
//!
//! # Design Decisions
//! - The translator only stores CA descriptors, the resolver owns the bytes
//! - Resolution failures are typed so diagnostics can name the cause
//! - Neither collaborator retries; callers treat failures as final for the pass

pub mod acme;
pub mod ca;

pub use acme::{AcmeAccount, IssuerAccount};
pub use ca::{CaEntry, CaFile, CaResolver, ResolveError, StaticCaStore};
