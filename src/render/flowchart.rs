// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::format::dot::export_dot;
use crate::format::markdown::{parse_io_events, parse_steps};
use crate::layout::flowchart::{
    build_flowchart_graph, layout_flowchart, FlowchartLayoutError, LayoutMetrics, WrapWidths,
};
use crate::model::graph::FlowchartGraph;
use crate::model::step::{IoEvents, StepRecord};

use super::graphviz::dot_to_png;
use super::raster::{svg_to_png, RasterOptions};
use super::svg::render_svg;
use super::theme::Theme;

/// How the graph is turned into pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RasterBackend {
    /// Builtin lane layout, SVG, then resvg. Needs no external program.
    #[default]
    Builtin,
    /// `<program> -Tpng` over the DOT export.
    Graphviz { program: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowchartConfig {
    pub title: Option<String>,
    pub wrap: WrapWidths,
    pub theme: Theme,
    pub layout: LayoutMetrics,
    pub raster: RasterOptions,
    pub backend: RasterBackend,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowchartRenderError {
    #[error("no steps could be extracted from the procedure")]
    NoSteps,
    #[error("flowchart rendering failed: {0}")]
    Backend(String),
}

impl From<FlowchartLayoutError> for FlowchartRenderError {
    fn from(err: FlowchartLayoutError) -> Self {
        match err {
            FlowchartLayoutError::NoSteps => Self::NoSteps,
            other => Self::Backend(other.to_string()),
        }
    }
}

/// A rendered PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowchartImage {
    png: Vec<u8>,
}

impl FlowchartImage {
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png(self) -> Vec<u8> {
        self.png
    }

    /// Standard-alphabet base64 of the PNG, for embedding.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.png)
    }
}

/// Adapts a render result to the `(image, error)` pair presentation layers consume.
pub trait FlowchartRender {
    fn into_pair(self) -> (Option<String>, Option<String>);
}

impl FlowchartRender for Result<FlowchartImage, FlowchartRenderError> {
    fn into_pair(self) -> (Option<String>, Option<String>) {
        match self {
            Ok(image) => (Some(image.to_base64()), None),
            Err(err) => (None, Some(err.to_string())),
        }
    }
}

/// Builds the titled graph shared by every output.
pub fn flowchart_graph(
    steps: &[StepRecord],
    start_label: &str,
    end_label: &str,
    config: &FlowchartConfig,
) -> Result<FlowchartGraph, FlowchartRenderError> {
    let mut graph = build_flowchart_graph(steps, start_label, end_label, &config.wrap)?;
    graph.set_title(config.title.as_deref());
    Ok(graph)
}

/// SVG from the builtin layout.
pub fn render_flowchart_svg(
    steps: &[StepRecord],
    start_label: &str,
    end_label: &str,
    config: &FlowchartConfig,
) -> Result<String, FlowchartRenderError> {
    let graph = flowchart_graph(steps, start_label, end_label, config)?;
    let layout = layout_flowchart(&graph, &config.layout);
    Ok(render_svg(&graph, &layout, &config.theme))
}

pub fn render_flowchart_dot(
    steps: &[StepRecord],
    start_label: &str,
    end_label: &str,
    config: &FlowchartConfig,
) -> Result<String, FlowchartRenderError> {
    let graph = flowchart_graph(steps, start_label, end_label, config)?;
    Ok(export_dot(&graph, &config.theme))
}

/// Renders the procedure flowchart to PNG with the configured backend.
///
/// Fails with [`FlowchartRenderError::NoSteps`] on an empty slice; any backend failure is
/// reported as [`FlowchartRenderError::Backend`]. No partial image is returned.
pub fn render_flowchart(
    steps: &[StepRecord],
    start_label: &str,
    end_label: &str,
    config: &FlowchartConfig,
) -> Result<FlowchartImage, FlowchartRenderError> {
    let graph = flowchart_graph(steps, start_label, end_label, config)?;
    let png = match &config.backend {
        RasterBackend::Builtin => {
            let layout = layout_flowchart(&graph, &config.layout);
            let svg = render_svg(&graph, &layout, &config.theme);
            svg_to_png(&svg, &config.raster).map_err(|err| FlowchartRenderError::Backend(err.to_string()))?
        }
        RasterBackend::Graphviz { program } => {
            dot_to_png(&export_dot(&graph, &config.theme), program)
                .map_err(|err| FlowchartRenderError::Backend(err.to_string()))?
        }
    };

    tracing::info!(steps = steps.len(), bytes = png.len(), backend = ?config.backend, "flowchart rendered");
    Ok(FlowchartImage { png })
}

/// Full pipeline from raw Markdown: steps from `procedure_text`, start and end labels from
/// the optional I/O table (`Début`/`Fin` without one).
pub fn generate_flowchart(
    procedure_text: &str,
    io_table_text: Option<&str>,
    config: &FlowchartConfig,
) -> Result<FlowchartImage, FlowchartRenderError> {
    let steps = parse_steps(procedure_text);
    let events: IoEvents = io_table_text.map(parse_io_events).unwrap_or_default();
    if steps.is_empty() {
        tracing::warn!("no steps extracted, flowchart skipped");
    }
    render_flowchart(&steps, &events.start, &events.end, config)
}

#[cfg(test)]
mod tests;
