// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Line and cell primitives shared by the table parsers.

use std::sync::LazyLock;

use regex::Regex;

pub(crate) const CELL_DELIMITER: char = '|';

// Dash/colon-only rows such as `|---|:---:|`, with or without outer pipes.
static SEPARATOR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|?[\s:|\-]*-[\s:|\-]*$").expect("valid separator regex"));

/// Non-empty lines, trimmed, in source order.
pub(crate) fn trimmed_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

pub(crate) fn is_table_line(line: &str) -> bool {
    line.contains(CELL_DELIMITER)
}

pub(crate) fn is_separator_line(line: &str) -> bool {
    is_table_line(line) && SEPARATOR_LINE.is_match(line)
}

/// Splits a row into trimmed cells.
///
/// Only the fragment before the first delimiter and the fragment after the last one are
/// dropped (when empty), so interior empty cells keep their column position. `\|` is a
/// literal pipe inside a cell.
pub(crate) fn split_cells(line: &str) -> Vec<String> {
    let mut cells = split_fragments(line);
    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    cells
}

/// Splits a row into cells, dropping every empty fragment.
pub(crate) fn split_non_empty_cells(line: &str) -> Vec<String> {
    split_fragments(line).into_iter().filter(|cell| !cell.is_empty()).collect()
}

fn split_fragments(line: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&CELL_DELIMITER) => {
                current.push(CELL_DELIMITER);
                chars.next();
            }
            CELL_DELIMITER => {
                fragments.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fragments.push(current.trim().to_owned());

    fragments
}

pub(crate) fn escape_cell(text: &str) -> String {
    text.replace(CELL_DELIMITER, "\\|")
}

/// Lower-cases and folds the accented `e` variants found in French headers.
pub(crate) fn fold_header(cell: &str) -> String {
    cell.trim()
        .to_lowercase()
        .chars()
        .map(|ch| match ch {
            'é' | 'è' | 'ê' | 'ë' => 'e',
            other => other,
        })
        .collect()
}
