//! Snapshot types supplied by data-access collaborators.
//!
//! The engine never talks to storage. A collaborator materializes the
//! collections valid for a date interval and hands them over as plain
//! records; everything here is read-only input to the aggregation passes.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Client** | An agency customer; owns projects and activity events |
//! | **Project** | One translation job with a word count and completion flag |
//! | **Activity** | An audit-trail event emitted by some actor account |
//! | **Account** | The login identity behind a client or staff actor |
//! | **Language slot** | One source- or target-language reference on a project |

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::period::PeriodBounds;

// ============================================
// Clients
// ============================================

/// An agency customer as seen by the analytics engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSnapshot {
    /// Unique client identifier
    pub id: i64,
    /// Login account backing this client, if one exists
    pub account_id: Option<i64>,
    /// Display name
    pub name: String,
    /// Country, when the profile carries one
    #[serde(default)]
    pub country: Option<String>,
    /// When the client record was created
    pub created_at: DateTime<Utc>,
}

impl ClientSnapshot {
    /// Whether the client was created on the given calendar day.
    pub fn created_on(&self, day: NaiveDate) -> bool {
        self.created_at.date_naive() == day
    }

    /// Whether the client was created inside the bounds, both ends inclusive.
    pub fn created_within(&self, bounds: PeriodBounds) -> bool {
        bounds.contains(self.created_at.date_naive())
    }
}

// ============================================
// Projects
// ============================================

/// One translation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Unique project identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// When the project was created
    pub created_at: DateTime<Utc>,
    /// Whether the job has been delivered
    pub completed: bool,
    /// Source word count
    pub word_count: u32,
}

impl ProjectSnapshot {
    pub fn created_on(&self, day: NaiveDate) -> bool {
        self.created_at.date_naive() == day
    }

    pub fn created_within(&self, bounds: PeriodBounds) -> bool {
        bounds.contains(self.created_at.date_naive())
    }
}

// ============================================
// Activity events
// ============================================

/// Role of the account that emitted an activity event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Client,
    Translator,
    Manager,
    Admin,
}

impl ActorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRole::Client => "client",
            ActorRole::Translator => "translator",
            ActorRole::Manager => "manager",
            ActorRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(ActorRole::Client),
            "translator" => Ok(ActorRole::Translator),
            "manager" => Ok(ActorRole::Manager),
            "admin" => Ok(ActorRole::Admin),
            _ => Err(format!("unknown actor role: {}", s)),
        }
    }
}

/// One audit-trail event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    /// Unique event identifier
    pub id: i64,
    /// Role of the emitting account
    pub actor_role: ActorRole,
    /// Account that emitted the event
    pub actor_id: i64,
    /// When the event occurred
    pub created_at: DateTime<Utc>,
}

impl ActivitySnapshot {
    pub fn occurred_on(&self, day: NaiveDate) -> bool {
        self.created_at.date_naive() == day
    }

    pub fn occurred_within(&self, bounds: PeriodBounds) -> bool {
        bounds.contains(self.created_at.date_naive())
    }
}

// ============================================
// Languages
// ============================================

/// One entry of the active-language catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRef {
    pub id: i64,
    pub name: String,
}

/// The resolved language slots of one project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectLanguages {
    pub sources: Vec<LanguageRef>,
    pub targets: Vec<LanguageRef>,
}

impl ProjectLanguages {
    /// Total number of language slots on the project.
    pub fn slot_count(&self) -> usize {
        self.sources.len() + self.targets.len()
    }
}
