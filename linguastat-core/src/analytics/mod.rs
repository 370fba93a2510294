//! Analytics aggregation for the translation-agency dashboard
//!
//! One invocation resolves a reporting period, pulls the snapshot
//! collections valid for the window, and folds them into:
//! - scalar summary metrics ([`metrics`])
//! - one detailed data point per calendar day ([`series`])
//! - categorical chart breakdowns ([`charts`])
//! - a result envelope with provenance metadata ([`envelope`])
//!
//! The [`engine`] module wires the passes together behind the
//! [`SnapshotSource`] collaborator seam; [`simulated`] isolates the
//! placeholder metrics that are not yet measured.

pub mod charts;
pub mod engine;
pub mod envelope;
pub mod metrics;
pub mod series;
pub mod simulated;

pub use charts::{build_charts, language_distribution, ChartPoint, ChartSet};
pub use engine::{AnalyticsEngine, SnapshotSource};
pub use envelope::{AnalyticsEnvelope, DataStatus, ReportSummary};
pub use metrics::{aggregate, MetricsSummary};
pub use series::{build_daily_series, DailyDataPoint};
pub use simulated::{DaySample, DaySimulator, SeededSimulator};
