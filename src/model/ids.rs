// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// A typed identifier for flowchart graph elements.
///
/// Ids are emitted verbatim as Graphviz node identifiers, so they are restricted to ASCII
/// letters, digits and `_`, and must not start with a digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_graph_ident(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Builds `<prefix>_<index>` ids such as `step_3`.
    pub fn indexed(prefix: &str, index: usize) -> Result<Self, IdError> {
        Self::new(format!("{prefix}_{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    LeadingDigit,
    InvalidChar(char),
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::LeadingDigit => f.write_str("id must not start with a digit"),
            Self::InvalidChar(ch) => {
                write!(f, "id may only contain ASCII letters, digits and '_' (found {ch:?})")
            }
        }
    }
}

impl std::error::Error for IdError {}

fn validate_graph_ident(value: &str) -> Result<(), IdError> {
    let mut chars = value.chars();
    let first = chars.next().ok_or(IdError::Empty)?;
    if first.is_ascii_digit() {
        return Err(IdError::LeadingDigit);
    }
    for ch in std::iter::once(first).chain(chars) {
        if !(ch.is_ascii_alphanumeric() || ch == '_') {
            return Err(IdError::InvalidChar(ch));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeIdTag {}
pub type NodeId = Id<NodeIdTag>;
