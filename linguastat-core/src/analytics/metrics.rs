//! Scalar summary metrics for a reporting period.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::period::PeriodBounds;
use crate::types::{ActivitySnapshot, ActorRole, ClientSnapshot, ProjectSnapshot};

/// Aggregated indicators for one reporting period.
///
/// `average_precision`, `active_languages`, `growth_rate`, `total_errors`
/// and `average_processing_hours` are copied from the configured reference
/// placeholders, not derived from snapshots. `total_translations` and
/// `revenue` are linear proportional estimates from weekly baselines, not
/// sums of recorded facts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub total_translations: u64,
    pub words_per_day: u64,
    pub average_precision: f64,
    pub active_languages: u32,
    pub growth_rate: f64,
    pub new_clients: usize,
    pub total_projects: usize,
    pub projects_completed: usize,
    pub completion_rate: f64,
    pub active_users: usize,
    pub total_errors: u32,
    pub revenue: f64,
    pub average_processing_hours: f64,
}

/// Fold the period snapshots into one summary. Pure function of its inputs.
pub fn aggregate(
    bounds: PeriodBounds,
    clients: &[ClientSnapshot],
    projects: &[ProjectSnapshot],
    activities: &[ActivitySnapshot],
    cfg: &AnalyticsConfig,
) -> MetricsSummary {
    let days = bounds.day_count();

    let new_clients = clients.iter().filter(|c| c.created_within(bounds)).count();

    let mut total_projects = 0usize;
    let mut projects_completed = 0usize;
    let mut words_per_day = 0u64;
    for project in projects.iter().filter(|p| p.created_within(bounds)) {
        total_projects += 1;
        if project.completed {
            projects_completed += 1;
            words_per_day += u64::from(project.word_count);
        }
    }

    // Completion is measured against the company-wide baseline, not the
    // period's own project count.
    let completion_rate = if cfg.completion_baseline == 0 {
        0.0
    } else {
        round1(projects_completed as f64 * 100.0 / f64::from(cfg.completion_baseline))
    };

    let active_users = distinct_client_accounts(
        clients,
        activities.iter().filter(|a| a.occurred_within(bounds)),
    );

    let revenue = round2(cfg.base_weekly_revenue * days as f64 / 7.0);
    let total_translations = cfg.weekly_translation_baseline * days as u64 / 7;

    MetricsSummary {
        total_translations,
        words_per_day,
        average_precision: cfg.reference.average_precision,
        active_languages: cfg.reference.active_languages,
        growth_rate: cfg.reference.growth_rate,
        new_clients,
        total_projects,
        projects_completed,
        completion_rate,
        active_users,
        total_errors: cfg.reference.total_errors,
        revenue,
        average_processing_hours: cfg.reference.average_processing_hours,
    }
}

/// Count the distinct client accounts behind a stream of activity events.
///
/// Only events emitted by a client-role account that maps back to a known
/// client count; distinctness is by account identity, so a client firing a
/// hundred events is still one active user.
pub(crate) fn distinct_client_accounts<'a>(
    clients: &[ClientSnapshot],
    activities: impl Iterator<Item = &'a ActivitySnapshot>,
) -> usize {
    let known_accounts: HashSet<i64> = clients.iter().filter_map(|c| c.account_id).collect();
    activities
        .filter(|a| a.actor_role == ActorRole::Client && known_accounts.contains(&a.actor_id))
        .map(|a| a.actor_id)
        .collect::<HashSet<_>>()
        .len()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
