// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flowchart rendering.
//!
//! The builtin backend draws the lane layout as SVG and rasterizes it with resvg; the
//! Graphviz backend hands the DOT export to an external `dot` program. Both return PNG bytes.

pub mod flowchart;
pub mod graphviz;
pub mod raster;
pub mod svg;
#[cfg(test)]
mod test_utils;
pub mod theme;

pub use flowchart::{
    flowchart_graph, generate_flowchart, render_flowchart, render_flowchart_dot,
    render_flowchart_svg, FlowchartConfig, FlowchartImage, FlowchartRender, FlowchartRenderError,
    RasterBackend,
};
pub use graphviz::{dot_to_png, GraphvizError};
pub use raster::{svg_to_png, RasterError, RasterOptions};
pub use svg::render_svg;
pub use theme::{parse_color, NodeStyle, Theme};
