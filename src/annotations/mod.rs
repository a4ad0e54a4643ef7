//! Annotation subsystem.
//!
//! # Data Flow
//! ```text
//! ingress resources (annotations + global defaults)
//!     → mapper.rs (layer explicit values over defaults)
//!     → AnnotationValue (value + provenance)
//!     → convert rules read keys.rs names through AnnotationSource
//! ```
//!
//! # Design Decisions
//! - Provenance is a variant, not an empty-string convention
//! - Lookups never fail; unknown keys read as an empty default
//! - The mapper is read-only once handed to the translator

pub mod keys;
pub mod mapper;
pub mod value;

pub use mapper::{AnnotationMap, AnnotationSource};
pub use value::{AnnotationValue, ResourceRef};
