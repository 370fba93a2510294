//! # linguastat-core
//!
//! Core library for linguastat - the analytics engine of a
//! translation-agency backend.
//!
//! This library provides:
//! - Reporting-period resolution into concrete date bounds
//! - Aggregation of client/project/activity snapshots into summary
//!   metrics, a daily time series, and chart breakdowns
//! - A result envelope that never leaks errors across the boundary
//! - Configuration and logging infrastructure
//!
//! Persistence is a collaborator concern: callers implement
//! [`analytics::SnapshotSource`] over whatever store they own and hand the
//! engine plain collections.
//!
//! ## Example
//!
//! ```rust,no_run
//! use linguastat_core::analytics::AnalyticsEngine;
//! use linguastat_core::Config;
//!
//! # fn source() -> Box<dyn linguastat_core::analytics::SnapshotSource> { unimplemented!() }
//! let config = Config::load().expect("failed to load config");
//! let engine = AnalyticsEngine::new(source(), config.analytics);
//! let envelope = engine.report_for_code("7d");
//! assert!(envelope.success);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use period::{PeriodBounds, PeriodCode, PeriodRequest};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod logging;
pub mod period;
pub mod types;
