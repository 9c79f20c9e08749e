//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! coordinator actions, provider calls
//!     → logging.rs (structured events to stderr, action-id spans)
//!     → metrics.rs (action counters and durations)
//! ```
//!
//! Stdout stays reserved for command results so it can be piped.

pub mod logging;
pub mod metrics;
