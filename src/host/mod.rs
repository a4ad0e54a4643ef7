//! Host configuration model.
//!
//! # Data Flow
//! ```text
//! external build pass
//!     → Host (hostname + paths bound to backends)
//!     → convert::HostUpdater (in-place enrichment)
//!     → rendering (serialized Host)
//! ```
//!
//! # Design Decisions
//! - Client-auth settings are one optional group, never partially set
//! - Time values are validated types, not raw strings
//! - Path order is preserved as configured

pub mod time;
pub mod types;

pub use time::{ProxyTime, TimeParseError, TimeUnit};
pub use types::{ClientAuthTls, Host, HostAlias, HostPath, HostTimeout, HostTls};
