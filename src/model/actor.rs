// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub step_number: String,
    pub activity: String,
    pub description: String,
}

/// All activities one actor takes part in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorAggregate {
    actor_name: String,
    activities: Vec<ActivityEntry>,
}

impl ActorAggregate {
    pub fn new(actor_name: impl Into<String>, activities: Vec<ActivityEntry>) -> Self {
        Self {
            actor_name: actor_name.into(),
            activities,
        }
    }

    pub fn actor_name(&self) -> &str {
        &self.actor_name
    }

    pub fn activities(&self) -> &[ActivityEntry] {
        &self.activities
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

impl Serialize for ActorAggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ActorAggregate", 3)?;
        state.serialize_field("actor_name", &self.actor_name)?;
        state.serialize_field("activities", &self.activities)?;
        state.serialize_field("activity_count", &self.activity_count())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorSummary {
    pub total_actors: usize,
    pub total_activities: usize,
    pub busiest_actor: Option<ActorAggregate>,
    pub avg_activities_per_actor: f64,
}

/// One `(actor, activity)` pair, the shape used for tabular exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorActivityRow {
    pub actor: String,
    pub step_number: String,
    pub activity: String,
    pub description: String,
}
