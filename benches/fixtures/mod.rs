// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::fmt::Write as _;

use logigram::model::{ActorAggregate, StepRecord};

const VERBS: [&str; 6] = ["Réceptionner", "Vérifier", "Analyser", "Valider", "Archiver", "Notifier"];
const OBJECTS: [&str; 5] = ["la demande", "le dossier", "les pièces", "le contrat", "la décision"];
const ACTORS: [&str; 5] = ["Chargé de clientèle", "Back-office", "Analyste risque", "Comité de crédit", "Directeur d'agence"];

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumDense,
    LargeLongLabels,
}

impl Case {
    fn rows(self) -> usize {
        match self {
            Case::Small => 5,
            Case::MediumDense => 40,
            Case::LargeLongLabels => 120,
        }
    }

    fn long_labels(self) -> bool {
        matches!(self, Case::LargeLongLabels)
    }
}

fn activity(idx: usize, long: bool) -> String {
    let mut text = format!("{} {}", VERBS[idx % VERBS.len()], OBJECTS[idx % OBJECTS.len()]);
    if long {
        text.push_str(" conformément aux délégations en vigueur et aux procédures internes");
    }
    if idx % 4 == 1 {
        text.push_str(" ?");
    }
    text
}

fn actors(idx: usize) -> String {
    let first = ACTORS[idx % ACTORS.len()];
    if idx % 3 == 0 {
        format!("{first}, {}", ACTORS[(idx + 2) % ACTORS.len()])
    } else {
        first.to_owned()
    }
}

/// A Markdown procedure table wrapped in prose, the way generated notes look.
pub fn procedure(case: Case) -> String {
    let long = case.long_labels();
    let mut out = String::from(
        "## Procédure\n\nTableau généré :\n\n| N° | Activités | Description | Acteurs | Documents |\n|:---|:---|:---|:---|:---|\n",
    );
    for idx in 0..case.rows() {
        let document = if idx % 5 == 2 { String::new() } else { format!("Fiche {}", idx + 1) };
        let _ = writeln!(
            out,
            "| {} | {} | Étape {} du traitement | {} | {} |",
            idx + 1,
            activity(idx, long),
            idx + 1,
            actors(idx),
            document
        );
    }
    out.push_str("\nFin du document.\n");
    out
}

pub fn io_table() -> &'static str {
    "| Evènement | Processus |\n|---|---|\n| Entrée | Dépôt de la demande |\n| Sortie | Notification au client |\n"
}

pub fn checksum_steps(steps: &[StepRecord]) -> usize {
    steps.iter().fold(0usize, |acc, step| {
        acc.wrapping_mul(31)
            .wrapping_add(step.activity().len())
            .wrapping_add(step.actor().map_or(0, str::len))
    })
}

pub fn checksum_actors(actors: &[ActorAggregate]) -> usize {
    actors.iter().fold(0usize, |acc, actor| {
        acc.wrapping_mul(31).wrapping_add(actor.activity_count())
    })
}
