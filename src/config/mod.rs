//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! translation document (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → HostConfDocument (validated, immutable)
//!     → driver.rs builds hosts, mappers and collaborators from it
//! ```
//!
//! # Design Decisions
//! - All sections have defaults to allow minimal documents
//! - Validation separates syntactic (serde) from semantic checks
//! - Annotation values are left to the translator, which reports them per host

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_document, parse_document, ConfigError};
pub use schema::{AcmeConfig, HostConfDocument, LogFormat, ObservabilityConfig};
pub use validation::ValidationError;
