// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::step::StepRecord;

use super::table::escape_cell;

pub const EMPTY_STEPS_MESSAGE: &str = "Aucune étape trouvée.";

/// Renders steps as a canonical `N° | Activités | Acteur | Document` table.
///
/// The output parses back to the same records with [`super::parse_steps`], except for
/// descriptions, which have no column here.
pub fn export_steps(steps: &[StepRecord]) -> String {
    if steps.is_empty() {
        return EMPTY_STEPS_MESSAGE.to_owned();
    }

    let mut out = String::from("| N° | Activités | Acteur | Document |\n|:---|:----------|:-------|:---------|\n");
    for step in steps {
        let cells = [
            step.number(),
            step.activity(),
            step.actor().unwrap_or(""),
            step.document().unwrap_or(""),
        ];
        out.push('|');
        for cell in cells {
            out.push(' ');
            out.push_str(&escape_cell(cell));
            out.push_str(" |");
        }
        out.push('\n');
    }
    out
}
