//! linguastat-report - Translation-agency analytics CLI
//!
//! Loads snapshot collections exported as JSON files, runs the analytics
//! engine over them, and prints the report to the terminal or as JSON.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Deserialize;

use linguastat_core::analytics::{AnalyticsEngine, AnalyticsEnvelope, SnapshotSource};
use linguastat_core::{
    ActivitySnapshot, ClientSnapshot, Config, LanguageRef, PeriodBounds, PeriodRequest,
    ProjectLanguages, ProjectSnapshot,
};

#[derive(Parser, Debug)]
#[command(name = "linguastat-report")]
#[command(about = "Translation-agency analytics reports")]
#[command(version)]
struct Args {
    /// Reporting period: 24h, 7d, 30d or 3m
    #[arg(long, default_value = "7d")]
    period: String,

    /// Custom window start (YYYY-MM-DD); requires --end
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Custom window end (YYYY-MM-DD); requires --start
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Directory with the snapshot JSON files
    /// (clients.json, projects.json, activities.json, languages.json)
    #[arg(long, default_value = "snapshots")]
    data: PathBuf,

    /// Export format (json)
    #[arg(long)]
    export: Option<String>,

    /// Probe engine availability and exit
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = linguastat_core::logging::init(&config.logging).ok();

    let source = FileSource::load(&args.data)
        .with_context(|| format!("failed to load snapshots from {}", args.data.display()))?;
    let engine = AnalyticsEngine::new(Box::new(source), config.analytics);

    if args.check {
        if engine.is_available() {
            println!("analytics engine: UP");
            return Ok(());
        }
        anyhow::bail!("analytics engine: DOWN");
    }

    let request = match (args.start, args.end) {
        (Some(start), Some(end)) => PeriodRequest::custom(start, end),
        (None, None) => {
            let code = args
                .period
                .parse()
                .with_context(|| format!("invalid period token: {}", args.period))?;
            PeriodRequest::of(code)
        }
        _ => anyhow::bail!("custom windows need both --start and --end"),
    };

    let envelope = engine.report(&request);

    match args.export.as_deref() {
        Some("json") => print_json(&envelope)?,
        Some(other) => anyhow::bail!("unknown export format: {}. Use 'json'", other),
        None => print_terminal(&envelope),
    }

    if envelope.success {
        Ok(())
    } else {
        anyhow::bail!("report failed: {}", envelope.error.unwrap_or_default())
    }
}

// ============================================
// Snapshot files
// ============================================

/// A project row as exported to JSON: the snapshot fields plus the language
/// slot ids the backend would otherwise resolve from its join tables.
#[derive(Debug, Deserialize)]
struct ProjectRecord {
    #[serde(flatten)]
    snapshot: ProjectSnapshot,
    #[serde(default)]
    source_language_ids: Vec<i64>,
    #[serde(default)]
    target_language_ids: Vec<i64>,
}

/// Snapshot source over a directory of exported JSON files.
struct FileSource {
    clients: Vec<ClientSnapshot>,
    projects: Vec<ProjectSnapshot>,
    activities: Vec<ActivitySnapshot>,
    languages: Vec<LanguageRef>,
    slots_by_project: HashMap<i64, (Vec<i64>, Vec<i64>)>,
}

impl FileSource {
    fn load(dir: &Path) -> Result<Self> {
        let records: Vec<ProjectRecord> = read_json(&dir.join("projects.json"))?;
        let mut projects = Vec::with_capacity(records.len());
        let mut slots_by_project = HashMap::with_capacity(records.len());
        for record in records {
            slots_by_project.insert(
                record.snapshot.id,
                (record.source_language_ids, record.target_language_ids),
            );
            projects.push(record.snapshot);
        }

        Ok(Self {
            clients: read_json(&dir.join("clients.json"))?,
            projects,
            activities: read_json(&dir.join("activities.json"))?,
            languages: read_json(&dir.join("languages.json"))?,
            slots_by_project,
        })
    }

    fn language(&self, id: i64) -> LanguageRef {
        self.languages
            .iter()
            .find(|lang| lang.id == id)
            .cloned()
            .unwrap_or(LanguageRef {
                id,
                name: format!("language-{id}"),
            })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

impl SnapshotSource for FileSource {
    fn fetch_clients(&self) -> linguastat_core::Result<Vec<ClientSnapshot>> {
        Ok(self.clients.clone())
    }

    fn fetch_projects_in(
        &self,
        bounds: PeriodBounds,
    ) -> linguastat_core::Result<Vec<ProjectSnapshot>> {
        Ok(self
            .projects
            .iter()
            .filter(|p| p.created_within(bounds))
            .cloned()
            .collect())
    }

    fn fetch_activities_in(
        &self,
        bounds: PeriodBounds,
    ) -> linguastat_core::Result<Vec<ActivitySnapshot>> {
        Ok(self
            .activities
            .iter()
            .filter(|a| a.occurred_within(bounds))
            .cloned()
            .collect())
    }

    fn fetch_active_languages(&self) -> linguastat_core::Result<Vec<LanguageRef>> {
        Ok(self.languages.clone())
    }

    fn project_languages(
        &self,
        project: &ProjectSnapshot,
    ) -> linguastat_core::Result<ProjectLanguages> {
        let (sources, targets) = self
            .slots_by_project
            .get(&project.id)
            .cloned()
            .unwrap_or_default();
        Ok(ProjectLanguages {
            sources: sources.into_iter().map(|id| self.language(id)).collect(),
            targets: targets.into_iter().map(|id| self.language(id)).collect(),
        })
    }
}

// ============================================
// Output
// ============================================

fn print_json(envelope: &AnalyticsEnvelope) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(envelope)?);
    Ok(())
}

fn print_terminal(envelope: &AnalyticsEnvelope) {
    if !envelope.success {
        println!();
        println!(
            "  Report failed: {}",
            envelope.error.as_deref().unwrap_or("unknown error")
        );
        println!();
        return;
    }

    let summary = envelope.summary.as_ref().expect("success carries summary");
    let metrics = envelope.metrics.as_ref().expect("success carries metrics");

    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", format!("ANALYTICS · {}", summary.period));
    println!("╰{}╯", "─".repeat(60));
    println!();
    println!("  {}", summary.message);
    println!();

    println!("SUMMARY");
    println!(
        "   New clients: {:<10} Active users: {}",
        metrics.new_clients, metrics.active_users
    );
    println!(
        "   Projects: {:<13} Completed: {} ({:.1}% of target)",
        metrics.total_projects, metrics.projects_completed, metrics.completion_rate
    );
    println!(
        "   Words translated: {:<5} Est. revenue: {:.2}",
        metrics.words_per_day, metrics.revenue
    );
    println!();

    if let Some(series) = &envelope.daily_series {
        println!("DAILY ({} points)", series.len());
        for point in series {
            println!(
                "   {}  projects {:>3}  done {:>3}  words {:>6}  clients {:>2}  active {:>2}",
                point.date.date(),
                point.projects_created,
                point.projects_completed,
                point.words_translated,
                point.new_clients,
                point.active_users
            );
        }
        println!();
    }

    if let Some(charts) = &envelope.charts {
        println!("LANGUAGES");
        for point in &charts.language_distribution {
            println!("   {:<24} {:>3}%", point.label, point.value);
        }
        println!();
    }

    println!(
        "  Generated in {}ms · status {}",
        summary.generation_ms,
        summary.status.as_str()
    );
    println!();
}
