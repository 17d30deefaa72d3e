// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Parsed procedure steps and I/O events, the derived actor aggregates, and the ephemeral
//! graph a flowchart is built from.

pub mod actor;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod step;

pub use actor::{ActivityEntry, ActorActivityRow, ActorAggregate, ActorSummary};
pub use graph::{AnchorSide, FlowEdge, FlowEdgeKind, FlowNode, FlowNodeKind, FlowchartGraph, Lane};
pub use ids::{Id, IdError, NodeId};
pub use step::{IoEvents, StepRecord, DEFAULT_END_LABEL, DEFAULT_START_LABEL};
