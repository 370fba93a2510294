//! The result envelope returned to the dashboard.
//!
//! The envelope is the engine's only externally observable output: either
//! all four data sections plus a summary, or a bare error message. No
//! partial envelope ever crosses the boundary.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use super::charts::ChartSet;
use super::metrics::MetricsSummary;
use super::series::DailyDataPoint;
use crate::period::PeriodCode;

/// Completeness of the data backing a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataStatus {
    Complete,
    Partial,
    Estimated,
}

impl DataStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataStatus::Complete => "COMPLETE",
            DataStatus::Partial => "PARTIAL",
            DataStatus::Estimated => "ESTIMATED",
        }
    }
}

/// Provenance metadata for one report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// The period code the report answers
    pub period: PeriodCode,
    /// Resolved window start, at start of day
    pub start: NaiveDateTime,
    /// Resolved window end, at end of day
    pub end: NaiveDateTime,
    /// When the report was computed
    pub refreshed_at: DateTime<Utc>,
    /// Number of daily data points
    pub point_count: usize,
    pub status: DataStatus,
    /// Human-readable description of the resolved window
    pub message: String,
    /// Measured wall-clock generation time
    pub generation_ms: u64,
}

/// The complete analytics response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_series: Option<Vec<DailyDataPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<ChartSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ReportSummary>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyticsEnvelope {
    /// A successful report carrying all four sections.
    pub fn success(
        metrics: MetricsSummary,
        daily_series: Vec<DailyDataPoint>,
        charts: ChartSet,
        summary: ReportSummary,
    ) -> Self {
        Self {
            metrics: Some(metrics),
            daily_series: Some(daily_series),
            charts: Some(charts),
            summary: Some(summary),
            success: true,
            error: None,
        }
    }

    /// A failed report: no data sections, only the message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            metrics: None,
            daily_series: None,
            charts: None,
            summary: None,
            success: false,
            error: Some(message.into()),
        }
    }
}
