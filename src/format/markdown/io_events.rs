// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::step::IoEvents;

use super::table::{fold_header, is_separator_line, is_table_line, split_non_empty_cells, trimmed_lines};

const START_KEYWORDS: &[&str] = &["entrée", "entree", "input", "début", "debut"];
const END_KEYWORDS: &[&str] = &["sortie", "output", "fin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IoEventKind {
    Start,
    End,
}

pub(crate) fn classify_event(kind: &str) -> Option<IoEventKind> {
    let kind = kind.to_lowercase();
    if START_KEYWORDS.iter().any(|keyword| kind.contains(keyword)) {
        Some(IoEventKind::Start)
    } else if END_KEYWORDS.iter().any(|keyword| kind.contains(keyword)) {
        Some(IoEventKind::End)
    } else {
        None
    }
}

/// Matches `Evènement | Processus en interface | ...` with or without accents.
fn is_io_header(cells: &[String]) -> bool {
    cells
        .first()
        .map(|cell| fold_header(cell))
        .is_some_and(|cell| cell == "evenement" || cell == "evenements")
}

/// Extracts the process start and end labels from an input/output events table.
///
/// Falls back to `Début`/`Fin` for whichever side has no matching row.
pub fn parse_io_events(markdown_text: &str) -> IoEvents {
    let mut lines = trimmed_lines(markdown_text);

    let found_header = lines.by_ref().any(|line| {
        is_table_line(line) && !is_separator_line(line) && is_io_header(&split_non_empty_cells(line))
    });
    if !found_header {
        tracing::debug!("no I/O events header found, using default labels");
        return IoEvents::default();
    }

    let mut start = None::<String>;
    let mut end = None::<String>;
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

        let cells = split_non_empty_cells(line);
        let [kind, label, ..] = cells.as_slice() else {
            continue;
        };
        match classify_event(kind) {
            Some(IoEventKind::Start) if start.is_none() => start = Some(label.clone()),
            Some(IoEventKind::End) if end.is_none() => end = Some(label.clone()),
            _ => {}
        }
    }

    let defaults = IoEvents::default();
    let events = IoEvents::new(start.unwrap_or(defaults.start), end.unwrap_or(defaults.end));
    tracing::debug!(start = %events.start, end = %events.end, "I/O events extracted");
    events
}
