//! Reporting periods and date-bound resolution.
//!
//! A dashboard request names a window with a short token (`24h`, `7d`,
//! `30d`, `3m`) or an explicit `custom` date pair. Resolution turns the
//! token into concrete inclusive calendar-day bounds that every aggregation
//! stage shares. Bounds are derived per request and never persisted.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A reporting window selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodCode {
    /// Today only
    #[serde(rename = "24h")]
    Last24h,
    /// Last 7 calendar days, today included
    #[serde(rename = "7d")]
    Last7d,
    /// Last 30 calendar days, today included
    #[serde(rename = "30d")]
    Last30d,
    /// Last 3 calendar months, today included
    #[serde(rename = "3m")]
    Last3Months,
    /// Explicit start/end pair supplied by the caller
    #[serde(rename = "custom")]
    Custom,
}

impl PeriodCode {
    /// Returns the request token for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodCode::Last24h => "24h",
            PeriodCode::Last7d => "7d",
            PeriodCode::Last30d => "30d",
            PeriodCode::Last3Months => "3m",
            PeriodCode::Custom => "custom",
        }
    }
}

impl std::fmt::Display for PeriodCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PeriodCode {
    type Err = Error;

    /// Parse a period token.
    ///
    /// Unrecognized tokens are an [`Error::InvalidPeriod`]. An earlier
    /// revision of the engine silently fell back to the 7-day window here;
    /// callers that relied on that must now send an explicit `7d`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "24h" => Ok(PeriodCode::Last24h),
            "7d" => Ok(PeriodCode::Last7d),
            "30d" => Ok(PeriodCode::Last30d),
            "3m" => Ok(PeriodCode::Last3Months),
            "custom" => Ok(PeriodCode::Custom),
            other => Err(Error::InvalidPeriod(format!(
                "unrecognized period token: {other}"
            ))),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// A request for one reporting window.
///
/// `start`/`end` are only meaningful for [`PeriodCode::Custom`]; the
/// timezone is advisory metadata carried through to the caller (day
/// granularity inside the engine is UTC).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    pub code: PeriodCode,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl PeriodRequest {
    /// Request a predefined window.
    pub fn of(code: PeriodCode) -> Self {
        Self {
            code,
            start: None,
            end: None,
            timezone: default_timezone(),
        }
    }

    /// Request an explicit custom window.
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            code: PeriodCode::Custom,
            start: Some(start),
            end: Some(end),
            timezone: default_timezone(),
        }
    }

    /// Resolve this request against a reference date.
    ///
    /// Fails with [`Error::InvalidPeriod`] when a custom window is missing
    /// a date or has `start > end`.
    pub fn resolve(&self, today: NaiveDate) -> Result<PeriodBounds> {
        let bounds = match self.code {
            PeriodCode::Last24h => PeriodBounds {
                start: today,
                end: today,
            },
            PeriodCode::Last7d => PeriodBounds {
                start: today - Duration::days(6),
                end: today,
            },
            PeriodCode::Last30d => PeriodBounds {
                start: today - Duration::days(29),
                end: today,
            },
            PeriodCode::Last3Months => PeriodBounds {
                start: today - Months::new(3),
                end: today,
            },
            PeriodCode::Custom => {
                let (start, end) = match (self.start, self.end) {
                    (Some(start), Some(end)) => (start, end),
                    _ => {
                        return Err(Error::InvalidPeriod(
                            "custom period requires explicit start and end dates".to_string(),
                        ))
                    }
                };
                if start > end {
                    return Err(Error::InvalidPeriod(format!(
                        "start date {start} is after end date {end}"
                    )));
                }
                PeriodBounds { start, end }
            }
        };
        Ok(bounds)
    }

    /// Resolve against the current local date.
    pub fn resolve_now(&self) -> Result<PeriodBounds> {
        self.resolve(chrono::Local::now().date_naive())
    }
}

/// Concrete calendar-day bounds, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodBounds {
    /// Number of calendar days covered, counting both endpoints.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether a day falls inside the bounds.
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Iterate the covered days in ascending order.
    ///
    /// Each call returns a fresh iterator, so a consumer can walk the window
    /// as many times as it needs.
    pub fn days(&self) -> DaysIter {
        DaysIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl std::fmt::Display for PeriodBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Iterator over the calendar days of a [`PeriodBounds`].
#[derive(Debug, Clone)]
pub struct DaysIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for DaysIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.succ_opt();
        Some(current)
    }
}
