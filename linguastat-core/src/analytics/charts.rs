//! Categorical chart breakdowns.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::{CatalogEntry, ChartCatalogs};
use crate::types::{LanguageRef, ProjectLanguages};

/// One labeled value of a chart series.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            category: None,
            color: None,
        }
    }
}

/// The four chart breakdowns of one report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartSet {
    pub language_distribution: Vec<ChartPoint>,
    pub top_projects: Vec<ChartPoint>,
    pub document_types: Vec<ChartPoint>,
    pub hourly_activity: Vec<ChartPoint>,
}

/// Assemble the chart set: the language distribution is computed from the
/// period's project language slots, the rest comes from the injected
/// catalogs until real aggregation replaces them.
pub fn build_charts(
    catalog: &[LanguageRef],
    project_languages: &[ProjectLanguages],
    catalogs: &ChartCatalogs,
) -> ChartSet {
    ChartSet {
        language_distribution: language_distribution(catalog, project_languages),
        top_projects: from_catalog(&catalogs.top_projects),
        document_types: from_catalog(&catalogs.document_types),
        hourly_activity: from_catalog(&catalogs.hourly_activity),
    }
}

/// Share of language slots per active catalog language.
///
/// Each source or target reference on a project counts as one slot. Shares
/// are `count * 100 / total_slots` in integer arithmetic; the floor happens
/// before the value becomes a float, so a set of shares can sum to slightly
/// under 100. With no slots at all every share is zero.
pub fn language_distribution(
    catalog: &[LanguageRef],
    project_languages: &[ProjectLanguages],
) -> Vec<ChartPoint> {
    let mut counts: HashMap<i64, u64> = catalog.iter().map(|lang| (lang.id, 0)).collect();
    let mut total_slots: u64 = 0;

    for languages in project_languages {
        for slot in languages.sources.iter().chain(languages.targets.iter()) {
            total_slots += 1;
            if let Some(count) = counts.get_mut(&slot.id) {
                *count += 1;
            }
        }
    }

    catalog
        .iter()
        .map(|lang| {
            let share = if total_slots == 0 {
                0
            } else {
                counts[&lang.id] * 100 / total_slots
            };
            ChartPoint::new(lang.name.clone(), share as f64)
        })
        .collect()
}

fn from_catalog(entries: &[CatalogEntry]) -> Vec<ChartPoint> {
    entries
        .iter()
        .map(|entry| ChartPoint::new(entry.label.clone(), entry.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(id: i64, name: &str) -> LanguageRef {
        LanguageRef {
            id,
            name: name.to_string(),
        }
    }

    fn catalog() -> Vec<LanguageRef> {
        vec![lang(1, "French"), lang(2, "English"), lang(3, "German")]
    }

    #[test]
    fn test_distribution_counts_slots() {
        // Two projects: FR->EN and FR->DE. Four slots total, French twice.
        let project_languages = vec![
            ProjectLanguages {
                sources: vec![lang(1, "French")],
                targets: vec![lang(2, "English")],
            },
            ProjectLanguages {
                sources: vec![lang(1, "French")],
                targets: vec![lang(3, "German")],
            },
        ];
        let points = language_distribution(&catalog(), &project_languages);
        assert_eq!(points[0].value, 50.0); // French: 2*100/4
        assert_eq!(points[1].value, 25.0);
        assert_eq!(points[2].value, 25.0);
    }

    #[test]
    fn test_distribution_floor_division() {
        // Three slots, one each: 100/3 floors to 33
        let project_languages = vec![ProjectLanguages {
            sources: vec![lang(1, "French")],
            targets: vec![lang(2, "English"), lang(3, "German")],
        }];
        let points = language_distribution(&catalog(), &project_languages);
        for point in &points {
            assert_eq!(point.value, 33.0);
        }
        let sum: f64 = points.iter().map(|p| p.value).sum();
        assert!(sum <= 100.0 && sum > 100.0 - catalog().len() as f64);
    }

    #[test]
    fn test_distribution_empty_projects() {
        let points = language_distribution(&catalog(), &[]);
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn test_slots_outside_catalog_count_toward_total() {
        // One slot references a language missing from the catalog; it still
        // dilutes every share.
        let project_languages = vec![ProjectLanguages {
            sources: vec![lang(1, "French")],
            targets: vec![lang(99, "Klingon")],
        }];
        let points = language_distribution(&catalog(), &project_languages);
        assert_eq!(points[0].value, 50.0);
        assert_eq!(points[1].value, 0.0);
    }

    #[test]
    fn test_catalog_backed_charts() {
        let charts = build_charts(&[], &[], &crate::config::ChartCatalogs::default());
        assert_eq!(charts.top_projects.len(), 4);
        assert_eq!(charts.document_types.len(), 5);
        assert_eq!(charts.hourly_activity.len(), 6);
        assert_eq!(charts.document_types[0].label, "PDF");
        assert_eq!(charts.document_types[0].value, 45.0);
    }
}
