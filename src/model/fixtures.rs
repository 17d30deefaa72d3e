// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::step::StepRecord;

pub(crate) const TWO_STEP_PROCEDURE: &str = "\
| N° | Activités | Acteur |
| --- | --- | --- |
| 1 | Réceptionner la demande | Agent A |
| 2 | Vérifier l'éligibilité ? | Agent B |
";

/// The six-column shape most generations use, wrapped in prose.
pub(crate) const CREDIT_PROCEDURE: &str = "\
Voici la procédure opérationnelle demandée :

| N° | Activités | Description | Acteurs | Documents | Délai |
|:---|:----------|:------------|:--------|:----------|:------|
| 1 | Réceptionner la demande de crédit | Le client dépose son dossier en agence | Chargé de clientèle | Formulaire de demande | J |
| 2 | Vérifier la complétude du dossier ? | Contrôle des pièces justificatives | Chargé de clientèle, Back-office | Check-list | J+1 |
| 3 | Analyser le risque | Étude de la capacité de remboursement | Analyste risque | Fiche d'analyse | J+3 |
| 4 | Décision d'octroi | Validation selon les délégations | Comité de crédit et Directeur d'agence | PV du comité | J+5 |
| 5 | Notifier le client | Envoi de la lettre de notification | Chargé de clientèle | Lettre de notification | J+6 |

Cette procédure entre en vigueur dès sa publication.
";

pub(crate) const CREDIT_IO_TABLE: &str = "\
| Evènement | Processus en interface | Description du processus en interface |
|-----------|------------------------|---------------------------------------|
| Entrée | Dépôt de la demande de crédit | Le client transmet sa demande |
| Sortie | Notification de la décision | Le client reçoit la réponse |
";

pub(crate) fn step(number: &str, activity: &str) -> StepRecord {
    StepRecord::new(number, activity).expect("valid step")
}

pub(crate) fn credit_steps() -> Vec<StepRecord> {
    vec![
        step("1", "Réceptionner la demande de crédit")
            .with_actor("Chargé de clientèle")
            .with_document("Formulaire de demande"),
        step("2", "Vérifier la complétude du dossier ?")
            .with_actor("Chargé de clientèle, Back-office")
            .with_document("Check-list"),
        step("3", "Analyser le risque").with_actor("Analyste risque"),
        step("4", "Décision d'octroi")
            .with_actor("Comité de crédit et Directeur d'agence")
            .with_document("PV du comité"),
    ]
}
