// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use serde::Serialize;

pub const DEFAULT_START_LABEL: &str = "Début";
pub const DEFAULT_END_LABEL: &str = "Fin";

/// One row of a procedure table.
///
/// `number` and `activity` are always non-empty once trimmed; the optional fields are either
/// absent or non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    number: String,
    activity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    actor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl StepRecord {
    /// Returns `None` when either required field is blank.
    pub fn new(number: impl AsRef<str>, activity: impl AsRef<str>) -> Option<Self> {
        let number = non_blank(number.as_ref())?;
        let activity = non_blank(activity.as_ref())?;
        Some(Self {
            number,
            activity,
            actor: None,
            document: None,
            description: None,
        })
    }

    pub fn with_actor(mut self, actor: impl AsRef<str>) -> Self {
        self.actor = non_blank(actor.as_ref());
        self
    }

    pub fn with_document(mut self, document: impl AsRef<str>) -> Self {
        self.document = non_blank(document.as_ref());
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = non_blank(description.as_ref());
        self
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// The ordering token as an integer, when it is made of ASCII digits only and fits a
    /// `u64`. Sorting compares digit strings instead, so longer numbers still order.
    pub fn number_value(&self) -> Option<u64> {
        parse_step_number(&self.number)
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

fn parse_step_number(raw: &str) -> Option<u64> {
    digit_key(raw).and_then(|(_, digits)| if digits.is_empty() { Some(0) } else { digits.parse().ok() })
}

/// Significant digits of an all-digit number, with their count first so that the tuple
/// orders numerically at any length.
fn digit_key(raw: &str) -> Option<(usize, &str)> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let significant = raw.trim_start_matches('0');
    Some((significant.len(), significant))
}

/// Orders step numbers numerically, whatever their length; non-numeric numbers sort last
/// and keep their relative order under a stable sort.
pub(crate) fn compare_step_numbers(a: &str, b: &str) -> Ordering {
    match (digit_key(a), digit_key(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Start/end labels of a process, taken from an input/output events table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IoEvents {
    pub start: String,
    pub end: String,
}

impl IoEvents {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for IoEvents {
    fn default() -> Self {
        Self::new(DEFAULT_START_LABEL, DEFAULT_END_LABEL)
    }
}
