//! Value validation shared by the host rules.

use crate::annotations::AnnotationValue;
use crate::convert::HostUpdater;
use crate::host::ProxyTime;

impl HostUpdater<'_> {
    /// Validate a time annotation. Invalid values, the empty one included,
    /// are reported and dropped.
    pub(crate) fn validate_time(&self, cfg: &AnnotationValue) -> Option<ProxyTime> {
        match cfg.value().parse::<ProxyTime>() {
            Ok(time) => Some(time),
            Err(e) => {
                tracing::debug!(value = %cfg.value(), error = %e, "Time validation failed");
                self.logger
                    .warn(&format!("ignoring invalid time format on {}: {}", cfg.origin(), cfg.value()));
                None
            }
        }
    }
}
