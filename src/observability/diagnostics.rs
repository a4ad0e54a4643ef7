//! Diagnostics sinks.
//!
//! # Responsibilities
//! - Receive non-fatal warnings and errors from the translator
//! - Forward them to structured logging
//! - Keep them in order when a caller needs to inspect or report them
//!
//! # Design Decisions
//! - Sinks never fail and never block on I/O beyond the tracing subscriber
//! - Messages are final text; the rule that emits them names the provenance

use std::fmt;
use std::sync::Mutex;

use serde::Serialize;

use crate::observability::metrics;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

/// Receives non-fatal translator diagnostics.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink that emits every diagnostic as a tracing event.
#[derive(Debug, Clone, Default)]
pub struct TracingDiagnostics {
    host: String,
}

impl TracingDiagnostics {
    /// Sink whose events carry the `host` field.
    pub fn for_host(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        metrics::record_diagnostic(Level::Warn);
        tracing::warn!(host = %self.host, "{}", message);
    }

    fn error(&self, message: &str) {
        metrics::record_diagnostic(Level::Error);
        tracing::error!(host = %self.host, "{}", message);
    }
}

/// Sink that keeps diagnostics in emission order, optionally forwarding them.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
    forward: Option<TracingDiagnostics>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and also forward to tracing, tagged with `host`.
    pub fn forwarding(host: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            forward: Some(TracingDiagnostics::for_host(host)),
        }
    }

    fn push(&self, level: Level, message: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.push(Diagnostic {
            level,
            message: message.to_string(),
        });
    }

    /// Copy of everything recorded so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Drain the recorded diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(Level::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.entries().iter().any(|d| d.level == Level::Error)
    }

    fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|d| d.level == level)
            .map(|d| d.message)
            .collect()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
        match &self.forward {
            Some(sink) => sink.warn(message),
            None => metrics::record_diagnostic(Level::Warn),
        }
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
        match &self.forward {
            Some(sink) => sink.error(message),
            None => metrics::record_diagnostic(Level::Error),
        }
    }
}
