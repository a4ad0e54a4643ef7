//! Metrics collection.
//!
//! # Metrics
//! - `hostconf_diagnostics_total` (counter): diagnostics by level
//! - `hostconf_hosts_translated_total` (counter): hosts run through the translator
//! - `hostconf_backends_tcp_mode_total` (counter): backends switched to raw TCP
//!
//! # Design Decisions
//! - Recording is a no-op until the embedding process installs a recorder
//! - Labels are bounded (level only), no per-host or per-backend labels

use ::metrics::counter;

use crate::observability::diagnostics::Level;

pub fn record_diagnostic(level: Level) {
    counter!("hostconf_diagnostics_total", "level" => level.as_str()).increment(1);
}

pub fn record_host_translated() {
    counter!("hostconf_hosts_translated_total").increment(1);
}

pub fn record_tcp_mode_switch() {
    counter!("hostconf_backends_tcp_mode_total").increment(1);
}
