//! Per-day time series over a reporting period.
//!
//! One data point per calendar day, real aggregates (projects, words,
//! clients, active users) mixed with the simulated placeholder fields from
//! [`DaySimulator`](super::simulated::DaySimulator).

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::metrics::distinct_client_accounts;
use super::simulated::DaySimulator;
use crate::period::PeriodBounds;
use crate::types::{ActivitySnapshot, ClientSnapshot, ProjectSnapshot};

/// One detailed entry of the daily series.
#[derive(Debug, Clone, Serialize)]
pub struct DailyDataPoint {
    /// Noon-of-day timestamp identifying the calendar day
    pub date: NaiveDateTime,
    /// Simulated translation count
    pub translations: u32,
    /// Words across projects completed that were created this day
    pub words_translated: u64,
    /// Simulated dominant language pair
    pub language_pair: String,
    /// Simulated precision percentage
    pub precision: f64,
    /// Simulated error count
    pub errors: u32,
    /// Distinct client accounts with activity this day
    pub active_users: usize,
    /// Clients created this day
    pub new_clients: usize,
    /// Projects created this day
    pub projects_created: usize,
    /// Completed subset of the projects created this day
    pub projects_completed: usize,
    /// Simulated satisfaction score
    pub satisfaction: f64,
}

/// Build the series lazily, one point per day of `bounds`, ascending.
///
/// The returned iterator is finite and can be recreated cheaply; nothing is
/// computed until a point is pulled.
pub fn build_daily_series<'a>(
    bounds: PeriodBounds,
    projects: &'a [ProjectSnapshot],
    clients: &'a [ClientSnapshot],
    activities: &'a [ActivitySnapshot],
    simulator: &'a dyn DaySimulator,
) -> impl Iterator<Item = DailyDataPoint> + 'a {
    bounds
        .days()
        .map(move |day| day_point(day, projects, clients, activities, simulator))
}

fn day_point(
    day: NaiveDate,
    projects: &[ProjectSnapshot],
    clients: &[ClientSnapshot],
    activities: &[ActivitySnapshot],
    simulator: &dyn DaySimulator,
) -> DailyDataPoint {
    let mut projects_created = 0usize;
    let mut projects_completed = 0usize;
    let mut words_translated = 0u64;
    for project in projects.iter().filter(|p| p.created_on(day)) {
        projects_created += 1;
        if project.completed {
            projects_completed += 1;
            words_translated += u64::from(project.word_count);
        }
    }

    let new_clients = clients.iter().filter(|c| c.created_on(day)).count();
    let active_users =
        distinct_client_accounts(clients, activities.iter().filter(|a| a.occurred_on(day)));

    let sample = simulator.sample(day);

    DailyDataPoint {
        date: day.and_hms_opt(12, 0, 0).unwrap(),
        translations: sample.translations,
        words_translated,
        language_pair: sample.language_pair,
        precision: sample.precision,
        errors: sample.errors,
        active_users,
        new_clients,
        projects_created,
        projects_completed,
        satisfaction: sample.satisfaction,
    }
}
