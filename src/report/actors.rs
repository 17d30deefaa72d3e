// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

use crate::format::markdown::parse_steps;
use crate::format::markdown::table::escape_cell;
use crate::model::actor::{ActivityEntry, ActorActivityRow, ActorAggregate, ActorSummary};
use crate::model::step::{compare_step_numbers, StepRecord};

// "et" splits only as a standalone word, so "Trésorerie et Comptabilité" splits but
// "Comité" does not.
static ACTOR_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;/]|\set\s").expect("valid actor delimiter regex"));

/// Splits a raw actor cell into trimmed, non-empty actor names.
pub fn split_actors(raw: &str) -> Vec<&str> {
    ACTOR_DELIMITER
        .split(raw)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Groups activities by individual actor.
///
/// Activities are ordered by numeric step number, non-numeric numbers last; actors by
/// descending activity count, ties in first-seen order. Names are grouped verbatim.
pub fn aggregate(steps: &[StepRecord]) -> Vec<ActorAggregate> {
    let mut by_actor = IndexMap::<String, Vec<ActivityEntry>>::new();
    for step in steps {
        let Some(actor) = step.actor() else {
            continue;
        };
        for name in split_actors(actor) {
            by_actor.entry(name.to_owned()).or_default().push(ActivityEntry {
                step_number: step.number().to_owned(),
                activity: step.activity().to_owned(),
                description: step.description().unwrap_or_default().to_owned(),
            });
        }
    }

    let mut aggregates = by_actor
        .into_iter()
        .map(|(name, mut activities)| {
            activities.sort_by(|a, b| compare_step_numbers(&a.step_number, &b.step_number));
            ActorAggregate::new(name, activities)
        })
        .collect::<Vec<_>>();
    aggregates.sort_by(|a, b| b.activity_count().cmp(&a.activity_count()));

    tracing::debug!(actors = aggregates.len(), "actors aggregated");
    aggregates
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Totals over already sorted aggregates; the busiest actor is the first one.
pub fn summarize(aggregates: &[ActorAggregate]) -> ActorSummary {
    let total_actors = aggregates.len();
    let total_activities = aggregates.iter().map(ActorAggregate::activity_count).sum::<usize>();
    let avg_activities_per_actor = if total_actors == 0 {
        0.0
    } else {
        round2(total_activities as f64 / total_actors as f64)
    };

    ActorSummary {
        total_actors,
        total_activities,
        busiest_actor: aggregates.first().cloned(),
        avg_activities_per_actor,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorReport {
    pub actors: Vec<ActorAggregate>,
    pub summary: ActorSummary,
    pub message: String,
}

impl ActorReport {
    pub fn from_steps(steps: &[StepRecord]) -> Self {
        let actors = aggregate(steps);
        let summary = summarize(&actors);
        let message = format!(
            "{} acteurs trouvés avec {} activités au total",
            summary.total_actors, summary.total_activities
        );
        Self { actors, summary, message }
    }

    /// One row per `(actor, activity)` pair, in report order.
    pub fn rows(&self) -> Vec<ActorActivityRow> {
        self.actors
            .iter()
            .flat_map(|aggregate| {
                aggregate.activities().iter().map(|entry| ActorActivityRow {
                    actor: aggregate.actor_name().to_owned(),
                    step_number: entry.step_number.clone(),
                    activity: entry.activity.clone(),
                    description: entry.description.clone(),
                })
            })
            .collect()
    }
}

/// Parses `procedure_text` and builds the actor report.
pub fn build_actor_report(procedure_text: &str) -> ActorReport {
    ActorReport::from_steps(&parse_steps(procedure_text))
}

/// Renders `| Acteur | Activités |` with one `N°. activité` entry per line.
pub fn export_actor_table(aggregates: &[ActorAggregate]) -> String {
    let mut out = String::from("| Acteur | Activités |\n|:-------|:----------|\n");
    for aggregate in aggregates {
        let activities = aggregate
            .activities()
            .iter()
            .map(|entry| escape_cell(&format!("{}. {}", entry.step_number, entry.activity)))
            .collect::<Vec<_>>()
            .join("<br>");
        out.push_str(&format!("| {} | {} |\n", escape_cell(aggregate.actor_name()), activities));
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{aggregate, build_actor_report, export_actor_table, split_actors, summarize};
    use crate::model::fixtures::{credit_steps, step, CREDIT_PROCEDURE, TWO_STEP_PROCEDURE};

    #[rstest]
    #[case("Agent A, Agent B et Agent C", &["Agent A", "Agent B", "Agent C"])]
    #[case("Caisse; Back-office / Audit", &["Caisse", "Back-office", "Audit"])]
    #[case("Comité de crédit et Directeur d'agence", &["Comité de crédit", "Directeur d'agence"])]
    #[case("Comité", &["Comité"])]
    #[case("Trésorerie ,, ", &["Trésorerie"])]
    #[case("Agent Bet", &["Agent Bet"])]
    fn splits_actor_cells(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(split_actors(raw), expected);
    }

    #[test]
    fn activities_sort_numerically_with_non_numeric_last() {
        let steps = vec![
            step("2", "b").with_actor("X"),
            step("A", "z").with_actor("X"),
            step("1", "a").with_actor("X"),
            step("10", "c").with_actor("X"),
        ];
        let aggregates = aggregate(&steps);
        let numbers = aggregates[0].activities().iter().map(|e| e.step_number.as_str()).collect::<Vec<_>>();
        assert_eq!(numbers, vec!["1", "2", "10", "A"]);
    }

    #[test]
    fn oversized_step_numbers_still_sort_as_numbers() {
        let steps = vec![
            step("B", "y").with_actor("X"),
            step("100000000000000000000", "big").with_actor("X"),
            step("3", "small").with_actor("X"),
            step("A", "z").with_actor("X"),
        ];
        let aggregates = aggregate(&steps);
        let numbers = aggregates[0].activities().iter().map(|e| e.step_number.as_str()).collect::<Vec<_>>();
        assert_eq!(numbers, vec!["3", "100000000000000000000", "B", "A"]);
    }

    #[test]
    fn actors_sort_by_count_then_first_seen() {
        let steps = vec![
            step("1", "a").with_actor("B"),
            step("2", "b").with_actor("A"),
            step("3", "c").with_actor("C, A"),
            step("4", "d").with_actor("C"),
        ];
        let names = aggregate(&steps).iter().map(|a| a.actor_name().to_owned()).collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn two_step_procedure_yields_one_activity_per_agent() {
        let report = build_actor_report(TWO_STEP_PROCEDURE);
        assert_eq!(report.actors.len(), 2);
        assert!(report.actors.iter().all(|a| a.activity_count() == 1));
        assert_eq!(report.message, "2 acteurs trouvés avec 2 activités au total");
    }

    #[test]
    fn summary_rounds_the_average() {
        let aggregates = aggregate(&credit_steps());
        let summary = summarize(&aggregates);
        // Chargé de clientèle (2), Back-office, Analyste risque, Comité de crédit, Directeur d'agence.
        assert_eq!(summary.total_actors, 5);
        assert_eq!(summary.total_activities, 6);
        assert_eq!(summary.avg_activities_per_actor, 1.2);
        assert_eq!(summary.busiest_actor.as_ref().map(|a| a.actor_name()), Some("Chargé de clientèle"));

        let steps = vec![step("1", "a").with_actor("X, Y, Z"), step("2", "b").with_actor("X")];
        assert_eq!(summarize(&aggregate(&steps)).avg_activities_per_actor, 1.33);
    }

    #[test]
    fn empty_summary_has_no_busiest_actor() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_actors, 0);
        assert_eq!(summary.avg_activities_per_actor, 0.0);
        assert!(summary.busiest_actor.is_none());
    }

    #[test]
    fn descriptions_feed_activity_entries() {
        let report = build_actor_report(CREDIT_PROCEDURE);
        let rows = report.rows();
        assert_eq!(rows.len(), report.summary.total_activities);
        let first = rows.iter().find(|row| row.step_number == "1").expect("row");
        assert_eq!(first.description, "Le client dépose son dossier en agence");
    }

    #[test]
    fn actor_table_joins_entries_with_breaks() {
        let table = export_actor_table(&aggregate(&credit_steps()));
        assert!(table.starts_with("| Acteur | Activités |\n"));
        assert!(table.contains(
            "| Chargé de clientèle | 1. Réceptionner la demande de crédit<br>2. Vérifier la complétude du dossier ? |"
        ));
    }
}
