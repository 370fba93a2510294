//! Integration tests for the analytics aggregation pipeline
//!
//! These tests load snapshot fixtures from `tests/fixtures/snapshots/` and
//! run them through the full engine, the way a data-access collaborator
//! would feed it in production.

use chrono::NaiveDate;
use linguastat_core::analytics::{AnalyticsEngine, SnapshotSource};
use linguastat_core::config::AnalyticsConfig;
use linguastat_core::{
    ActivitySnapshot, ClientSnapshot, LanguageRef, PeriodBounds, ProjectLanguages,
    ProjectSnapshot, Result,
};
use std::path::PathBuf;

/// Get the path to a fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/snapshots")
        .join(name)
}

fn load<T: serde::de::DeserializeOwned>(name: &str) -> Vec<T> {
    let content = std::fs::read_to_string(fixture_path(name)).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Snapshot source backed by the JSON fixtures.
struct FixtureSource {
    clients: Vec<ClientSnapshot>,
    projects: Vec<ProjectSnapshot>,
    activities: Vec<ActivitySnapshot>,
    languages: Vec<LanguageRef>,
}

impl FixtureSource {
    fn load() -> Self {
        Self {
            clients: load("clients.json"),
            projects: load("projects.json"),
            activities: load("activities.json"),
            languages: load("languages.json"),
        }
    }
}

impl SnapshotSource for FixtureSource {
    fn fetch_clients(&self) -> Result<Vec<ClientSnapshot>> {
        Ok(self.clients.clone())
    }

    fn fetch_projects_in(&self, bounds: PeriodBounds) -> Result<Vec<ProjectSnapshot>> {
        Ok(self
            .projects
            .iter()
            .filter(|p| p.created_within(bounds))
            .cloned()
            .collect())
    }

    fn fetch_activities_in(&self, bounds: PeriodBounds) -> Result<Vec<ActivitySnapshot>> {
        Ok(self
            .activities
            .iter()
            .filter(|a| a.occurred_within(bounds))
            .cloned()
            .collect())
    }

    fn fetch_active_languages(&self) -> Result<Vec<LanguageRef>> {
        Ok(self.languages.clone())
    }

    fn project_languages(&self, project: &ProjectSnapshot) -> Result<ProjectLanguages> {
        // Fixture convention: every project translates out of French; the
        // target depends on the project id.
        let french = self.languages[0].clone();
        let target = self.languages[(project.id % 2) as usize + 1].clone();
        Ok(ProjectLanguages {
            sources: vec![french],
            targets: vec![target],
        })
    }
}

fn engine() -> AnalyticsEngine {
    AnalyticsEngine::new(Box::new(FixtureSource::load()), AnalyticsConfig::default())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================
// Full pipeline
// ============================================

#[test]
fn test_report_over_fixture_week() {
    let envelope = engine().report_for_range(date(2024, 6, 1), date(2024, 6, 7));
    assert!(envelope.success, "error: {:?}", envelope.error);

    let metrics = envelope.metrics.unwrap();
    // Clients 1 and 2 created inside the window; the walk-in predates it
    assert_eq!(metrics.new_clients, 2);
    // Projects 11..=13; the archive job predates the window
    assert_eq!(metrics.total_projects, 3);
    assert_eq!(metrics.projects_completed, 2);
    assert_eq!(metrics.words_per_day, 1200 + 2400);
    // Accounts 101, 102 and 103 were active; the manager event does not
    // count, and 103 belongs to a client created before the window
    assert_eq!(metrics.active_users, 3);
    // Two completed against the default baseline of 100
    assert_eq!(metrics.completion_rate, 2.0);

    let series = envelope.daily_series.unwrap();
    assert_eq!(series.len(), 7);

    let summary = envelope.summary.unwrap();
    assert_eq!(summary.point_count, 7);
    assert!(summary.message.contains("2024-06-01"));
    assert!(summary.message.contains("7 days"));
}

#[test]
fn test_daily_series_is_consistent_with_metrics() {
    let envelope = engine().report_for_range(date(2024, 6, 1), date(2024, 6, 7));
    let metrics = envelope.metrics.unwrap();
    let series = envelope.daily_series.unwrap();

    let created: usize = series.iter().map(|p| p.projects_created).sum();
    let completed: usize = series.iter().map(|p| p.projects_completed).sum();
    let words: u64 = series.iter().map(|p| p.words_translated).sum();

    assert_eq!(created, metrics.total_projects);
    assert_eq!(completed, metrics.projects_completed);
    assert_eq!(words, metrics.words_per_day);
}

#[test]
fn test_daily_series_day_detail() {
    let envelope = engine().report_for_range(date(2024, 6, 1), date(2024, 6, 3));
    let series = envelope.daily_series.unwrap();

    // June 1: projects 11 (completed, 1200 words) and 12 (open)
    assert_eq!(series[0].projects_created, 2);
    assert_eq!(series[0].projects_completed, 1);
    assert_eq!(series[0].words_translated, 1200);
    assert_eq!(series[0].new_clients, 1);
    assert_eq!(series[0].active_users, 1);

    // June 2: only client activity
    assert_eq!(series[1].projects_created, 0);
    assert_eq!(series[1].new_clients, 1);
    assert_eq!(series[1].active_users, 1);

    // June 3: project 13, one client active (the manager event is ignored)
    assert_eq!(series[2].projects_created, 1);
    assert_eq!(series[2].words_translated, 2400);
    assert_eq!(series[2].active_users, 1);
}

#[test]
fn test_language_distribution_shares() {
    let envelope = engine().report_for_range(date(2024, 6, 1), date(2024, 6, 7));
    let charts = envelope.charts.unwrap();

    // 3 projects x 2 slots; French holds 3 of 6 slots
    let distribution = &charts.language_distribution;
    assert_eq!(distribution.len(), 3);
    assert_eq!(distribution[0].label, "French");
    assert_eq!(distribution[0].value, 50.0);

    let sum: f64 = distribution.iter().map(|p| p.value).sum();
    assert!(sum <= 100.0 && sum > 100.0 - distribution.len() as f64);
}

#[test]
fn test_catalog_charts_present() {
    let envelope = engine().report_for_range(date(2024, 6, 1), date(2024, 6, 1));
    let charts = envelope.charts.unwrap();
    assert!(!charts.top_projects.is_empty());
    assert!(!charts.document_types.is_empty());
    assert!(!charts.hourly_activity.is_empty());
}

// ============================================
// Failure paths
// ============================================

#[test]
fn test_inverted_range_yields_failure_envelope() {
    let envelope = engine().report_for_range(date(2024, 1, 10), date(2024, 1, 5));
    assert!(!envelope.success);
    assert!(envelope.metrics.is_none());
    assert!(envelope.daily_series.is_none());
    assert!(envelope.charts.is_none());
    assert!(envelope.summary.is_none());
    assert!(envelope.error.unwrap().contains("invalid period"));
}

#[test]
fn test_unknown_period_token_yields_failure_envelope() {
    let envelope = engine().report_for_code("fortnight");
    assert!(!envelope.success);
}

// ============================================
// Envelope serialization
// ============================================

#[test]
fn test_envelope_serializes_for_dashboard() {
    let envelope = engine().report_for_range(date(2024, 6, 1), date(2024, 6, 2));
    let json = serde_json::to_value(&envelope).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["summary"]["status"], "COMPLETE");
    assert_eq!(json["daily_series"].as_array().unwrap().len(), 2);
    assert!(json["metrics"]["revenue"].is_number());
    assert!(json.get("error").is_none());
}

#[test]
fn test_health_probe_answers() {
    assert!(engine().is_available());
}
