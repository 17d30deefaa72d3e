// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::text::truncate_with_ellipsis;
use crate::model::step::StepRecord;

use super::table::{is_separator_line, is_table_line, split_cells, trimmed_lines};

const NUMBER_KEYWORDS: &[&str] = &["n°", "numero", "numéro", "étape", "step", "num"];
// Matched as a whole cell only; as a substring it would hit "nom", "note", ...
const NUMBER_EXACT_KEYWORDS: &[&str] = &["no", "no."];
// Whole words that name a number column on their own, unlike "num" inside "numérisé".
const NUMBER_TOKENS: &[&str] = &["n°", "no", "num", "numero", "numéro", "étape", "etape", "step"];
const ACTOR_KEYWORDS: &[&str] = &["acteur", "actor", "responsable", "qui"];
const ACTIVITY_KEYWORDS: &[&str] = &["activités", "activité", "activite", "activity"];
const DOCUMENT_KEYWORDS: &[&str] = &["document", "doc", "support", "formulaire"];
const DESCRIPTION_KEYWORDS: &[&str] = &["description", "action", "tâche", "tache", "quoi"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnRole {
    Number,
    Actor,
    Activity,
    Document,
    Description,
}

fn contains_any(cell: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| cell.contains(keyword))
}

fn is_number_header(cell: &str) -> bool {
    NUMBER_EXACT_KEYWORDS.contains(&cell) || contains_any(cell, NUMBER_KEYWORDS)
}

fn has_number_token(cell: &str) -> bool {
    cell.split(|ch: char| !(ch.is_alphanumeric() || ch == '°'))
        .any(|token| NUMBER_TOKENS.contains(&token))
}

/// "Activités" but not "Description des activités".
fn is_dedicated_activity(cell: &str) -> bool {
    contains_any(cell, ACTIVITY_KEYWORDS) && !contains_any(cell, DESCRIPTION_KEYWORDS)
}

/// Header-wide facts that decide between competing columns.
#[derive(Debug, Clone, Copy)]
struct HeaderShape {
    /// Some column holds a number keyword as a whole word; substring matches then lose.
    has_number_token: bool,
    /// Some column is a pure activity column; mixed activity/description columns then
    /// fall back to the description slot.
    has_dedicated_activity: bool,
}

fn role_candidates(cell: &str, shape: HeaderShape) -> Vec<ColumnRole> {
    let mut roles = Vec::with_capacity(2);
    let number = if shape.has_number_token { has_number_token(cell) } else { is_number_header(cell) };
    if number {
        roles.push(ColumnRole::Number);
    }
    if contains_any(cell, ACTOR_KEYWORDS) {
        roles.push(ColumnRole::Actor);
    }
    if contains_any(cell, ACTIVITY_KEYWORDS) && (is_dedicated_activity(cell) || !shape.has_dedicated_activity) {
        roles.push(ColumnRole::Activity);
    }
    if contains_any(cell, DOCUMENT_KEYWORDS) {
        roles.push(ColumnRole::Document);
    }
    if contains_any(cell, DESCRIPTION_KEYWORDS) {
        // A dedicated activity column always wins the activity slot.
        if !shape.has_dedicated_activity {
            roles.push(ColumnRole::Activity);
        }
        roles.push(ColumnRole::Description);
    }
    roles
}

/// Assigns a semantic role to each header position by keyword, never by index.
///
/// Each role is taken at most once, by the first column whose best candidate is still free.
pub(crate) fn map_columns(header: &[String]) -> Vec<Option<ColumnRole>> {
    let lowered = header.iter().map(|cell| cell.to_lowercase()).collect::<Vec<_>>();
    let shape = HeaderShape {
        has_number_token: lowered.iter().any(|cell| has_number_token(cell)),
        has_dedicated_activity: lowered.iter().any(|cell| is_dedicated_activity(cell)),
    };

    let mut taken = Vec::<ColumnRole>::new();
    let mut roles = Vec::with_capacity(lowered.len());
    for cell in &lowered {
        let role = role_candidates(cell, shape).into_iter().find(|role| !taken.contains(role));
        if let Some(role) = role {
            taken.push(role);
        }
        roles.push(role);
    }
    roles
}

fn is_header_line(cells: &[String]) -> bool {
    cells.iter().any(|cell| is_number_header(&cell.to_lowercase()))
}

/// Parses the first procedure table found in `markdown_text`.
///
/// Never fails: text without a recognizable table yields no steps, and rows missing a
/// number or an activity are skipped.
pub fn parse_steps(markdown_text: &str) -> Vec<StepRecord> {
    let mut lines = trimmed_lines(markdown_text);

    let header = lines.by_ref().find_map(|line| {
        if !is_table_line(line) || is_separator_line(line) {
            return None;
        }
        let cells = split_cells(line);
        is_header_line(&cells).then_some(cells)
    });
    let Some(header) = header else {
        tracing::debug!("no procedure table header found");
        return Vec::new();
    };

    let roles = map_columns(&header);
    tracing::debug!(?header, ?roles, "procedure table header found");

    let mut steps = Vec::new();
    let mut data_started = false;
    for line in lines {
        if !is_table_line(line) {
            if data_started {
                break;
            }
            continue;
        }
        if is_separator_line(line) {
            continue;
        }
        data_started = true;

        let cells = split_cells(line);
        if cells.len() < header.len() {
            tracing::trace!(row = line, "row has fewer cells than the header, skipped");
            continue;
        }

        match build_step(&roles, &cells) {
            Some(step) => {
                tracing::trace!(
                    number = step.number(),
                    activity = %truncate_with_ellipsis(step.activity(), 50),
                    "step parsed"
                );
                steps.push(step);
            }
            None => tracing::debug!(row = line, "row lacks a number or an activity, skipped"),
        }
    }

    tracing::debug!(count = steps.len(), "procedure steps extracted");
    steps
}

fn build_step(roles: &[Option<ColumnRole>], cells: &[String]) -> Option<StepRecord> {
    let cell_for = |wanted: ColumnRole| {
        roles
            .iter()
            .position(|role| *role == Some(wanted))
            .and_then(|idx| cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    };

    let step = StepRecord::new(cell_for(ColumnRole::Number), cell_for(ColumnRole::Activity))?
        .with_actor(cell_for(ColumnRole::Actor))
        .with_document(cell_for(ColumnRole::Document))
        .with_description(cell_for(ColumnRole::Description));
    Some(step)
}
