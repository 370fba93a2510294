//! Analytics aggregation engine
//!
//! The engine resolves a reporting period into date bounds, pulls the
//! snapshot collections valid for the window from a [`SnapshotSource`], and
//! folds them into the response envelope.
//!
//! ```text
//! PeriodRequest
//!      │ resolve
//!      ▼
//! PeriodBounds ──► fetch snapshots (clients, projects, activities, languages)
//!      │                     │
//!      │        ┌────────────┼─────────────┐
//!      ▼        ▼            ▼             ▼
//!   summary  metrics    daily series    charts
//!      └────────┴────────────┴─────────────┘
//!                       ▼
//!               AnalyticsEnvelope
//! ```
//!
//! One invocation is a single-threaded synchronous pass: no caching, no
//! shared state, no suspension points. Any failure past period validation
//! is converted into a failure envelope at this boundary; the engine never
//! propagates an error to its caller.

use std::time::Instant;

use chrono::{NaiveDate, Utc};

use super::charts::{self, ChartSet};
use super::envelope::{AnalyticsEnvelope, DataStatus, ReportSummary};
use super::metrics;
use super::series::{self, DailyDataPoint};
use super::simulated::{DaySimulator, SeededSimulator};
use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::period::{PeriodBounds, PeriodCode, PeriodRequest};
use crate::types::{
    ActivitySnapshot, ClientSnapshot, LanguageRef, ProjectLanguages, ProjectSnapshot,
};

/// Collaborator contract for materialized snapshot collections.
///
/// Implementations own persistence, caching and retries; the engine only
/// requires that each call returns the collection valid for the requested
/// window. Any error surfaces as a failure envelope.
pub trait SnapshotSource: Send + Sync {
    /// All known clients, regardless of period.
    fn fetch_clients(&self) -> Result<Vec<ClientSnapshot>>;

    /// Projects created inside the window.
    fn fetch_projects_in(&self, bounds: PeriodBounds) -> Result<Vec<ProjectSnapshot>>;

    /// Activity events that occurred inside the window.
    fn fetch_activities_in(&self, bounds: PeriodBounds) -> Result<Vec<ActivitySnapshot>>;

    /// The catalog of currently active languages.
    fn fetch_active_languages(&self) -> Result<Vec<LanguageRef>>;

    /// The resolved source/target language slots of one project.
    fn project_languages(&self, project: &ProjectSnapshot) -> Result<ProjectLanguages>;
}

/// The aggregation engine.
pub struct AnalyticsEngine {
    source: Box<dyn SnapshotSource>,
    simulator: Box<dyn DaySimulator>,
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    /// Create an engine over a snapshot source, with the date-seeded
    /// simulator for the placeholder day metrics.
    pub fn new(source: Box<dyn SnapshotSource>, config: AnalyticsConfig) -> Self {
        let simulator = Box::new(SeededSimulator::new(config.language_pairs.clone()));
        Self {
            source,
            simulator,
            config,
        }
    }

    /// Replace the simulated-metrics provider.
    pub fn with_simulator(mut self, simulator: Box<dyn DaySimulator>) -> Self {
        self.simulator = simulator;
        self
    }

    /// Compute the full report for a period request.
    ///
    /// Always returns an envelope: period validation failures and
    /// collaborator errors become `success = false` with the message
    /// preserved. Validation happens before any snapshot is fetched.
    pub fn report(&self, request: &PeriodRequest) -> AnalyticsEnvelope {
        let started = Instant::now();
        tracing::info!(period = %request.code, "Computing analytics report");

        let bounds = match request.resolve_now() {
            Ok(bounds) => bounds,
            Err(e) => {
                tracing::warn!(period = %request.code, error = %e, "Period validation failed");
                return AnalyticsEnvelope::failure(e.to_string());
            }
        };

        match self.compute(request, bounds, started) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!(period = %request.code, error = %e, "Report computation failed");
                AnalyticsEnvelope::failure(e.to_string())
            }
        }
    }

    /// Convenience wrapper for a bare period token.
    pub fn report_for_code(&self, code: &str) -> AnalyticsEnvelope {
        match code.parse::<PeriodCode>() {
            Ok(code) => self.report(&PeriodRequest::of(code)),
            Err(e) => {
                tracing::warn!(token = code, error = %e, "Rejected period token");
                AnalyticsEnvelope::failure(e.to_string())
            }
        }
    }

    /// Convenience wrapper for an explicit date range.
    pub fn report_for_range(&self, start: NaiveDate, end: NaiveDate) -> AnalyticsEnvelope {
        self.report(&PeriodRequest::custom(start, end))
    }

    /// Recompute a report, bypassing nothing: the engine holds no cache, so
    /// a refresh is a plain recomputation kept for caller symmetry.
    pub fn refresh(&self, request: &PeriodRequest) -> AnalyticsEnvelope {
        tracing::info!(period = %request.code, "Refreshing analytics report");
        self.report(request)
    }

    /// Health probe: true when the snapshot source answers.
    pub fn is_available(&self) -> bool {
        match self.source.fetch_active_languages() {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, "Analytics source unavailable");
                false
            }
        }
    }

    fn compute(
        &self,
        request: &PeriodRequest,
        bounds: PeriodBounds,
        started: Instant,
    ) -> Result<AnalyticsEnvelope> {
        tracing::debug!(
            start = %bounds.start,
            end = %bounds.end,
            days = bounds.day_count(),
            "Resolved period bounds"
        );

        // The full client list: creation-date filters are applied inside the
        // aggregation passes, while active-user matching must see clients
        // created before the window too.
        let clients = self.source.fetch_clients()?;
        let projects = self.source.fetch_projects_in(bounds)?;
        let activities = self.source.fetch_activities_in(bounds)?;
        let languages = self.source.fetch_active_languages()?;

        let mut project_languages = Vec::with_capacity(projects.len());
        for project in &projects {
            project_languages.push(self.source.project_languages(project)?);
        }

        tracing::debug!(
            clients = clients.len(),
            projects = projects.len(),
            activities = activities.len(),
            "Snapshots fetched"
        );

        let metrics = metrics::aggregate(bounds, &clients, &projects, &activities, &self.config);
        let daily_series: Vec<DailyDataPoint> = series::build_daily_series(
            bounds,
            &projects,
            &clients,
            &activities,
            self.simulator.as_ref(),
        )
        .collect();
        let charts: ChartSet =
            charts::build_charts(&languages, &project_languages, &self.config.catalogs);

        let summary = ReportSummary {
            period: request.code,
            start: bounds.start.and_hms_opt(0, 0, 0).unwrap(),
            end: bounds.end.and_hms_opt(23, 59, 59).unwrap(),
            refreshed_at: Utc::now(),
            point_count: daily_series.len(),
            status: DataStatus::Complete,
            message: format!(
                "Data from {} to {} ({} days)",
                bounds.start,
                bounds.end,
                bounds.day_count()
            ),
            generation_ms: started.elapsed().as_millis() as u64,
        };

        tracing::info!(
            period = %request.code,
            points = summary.point_count,
            duration_ms = summary.generation_ms,
            "Report completed"
        );

        Ok(AnalyticsEnvelope::success(
            metrics,
            daily_series,
            charts,
            summary,
        ))
    }
}
