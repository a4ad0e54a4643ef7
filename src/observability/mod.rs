//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Translator rules produce:
//!     → diagnostics.rs (warnings/errors, recorded and/or logged)
//!     → metrics.rs (diagnostic and translation counters)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, plain or JSON)
//!     → CLI summary (recorded diagnostics)
//! ```
//!
//! # Design Decisions
//! - Structured logging with the host as a field
//! - Diagnostics are data first, log lines second

pub mod diagnostics;
pub mod logging;
pub mod metrics;

pub use diagnostics::{Diagnostic, Diagnostics, Level, RecordingDiagnostics, TracingDiagnostics};
