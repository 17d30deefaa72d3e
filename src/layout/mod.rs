// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flowchart graph construction and placement.
//!
//! [`build_flowchart_graph`] turns steps into the three-lane graph; [`layout_flowchart`]
//! assigns drawing coordinates for the builtin SVG renderer.

pub mod flowchart;
pub(crate) mod text;

pub use flowchart::{
    build_flowchart_graph, is_decision, layout_flowchart, EdgeRoute, FlowchartLayout,
    FlowchartLayoutError, LayoutMetrics, NodePlacement, Point, WrapWidths,
};
pub use text::wrap_words;
