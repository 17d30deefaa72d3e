// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::layout::flowchart::{FlowchartLayout, NodePlacement, Point};
use crate::model::graph::{FlowNode, FlowNodeKind, FlowchartGraph};

use super::theme::Theme;

const FOLD: f32 = 14.0;

/// Renders a laid-out flowchart as an SVG 1.1 document.
pub fn render_svg(graph: &FlowchartGraph, layout: &FlowchartLayout, theme: &Theme) -> String {
    let width = layout.width();
    let height = layout.height();
    let metrics = layout.metrics();

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.2} {height:.2}\">"
    );
    let _ = write!(svg, "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>", theme.background);
    let _ = write!(
        svg,
        "<defs><marker id=\"arrow\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" markerWidth=\"7\" markerHeight=\"7\" orient=\"auto\"><path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{}\"/></marker></defs>",
        theme.flow_main
    );

    if let (Some(title), Some(origin)) = (graph.title(), layout.title_origin()) {
        let _ = write!(
            svg,
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
            origin.x(),
            origin.y(),
            escape_xml(&theme.font_family),
            metrics.title_font_size,
            theme.flow_main,
            escape_xml(title)
        );
    }

    for route in layout.routes() {
        let (stroke, stroke_width) = if route.kind().has_arrow() {
            (theme.flow_main.as_str(), 1.5)
        } else {
            (theme.flow_connect.as_str(), 1.2)
        };
        let marker = if route.kind().has_arrow() { " marker-end=\"url(#arrow)\"" } else { "" };
        let _ = write!(
            svg,
            "<path d=\"{}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{stroke_width}\"{marker}/>",
            points_to_path(route.points())
        );
    }

    for (node_id, node) in graph.nodes() {
        if !node.kind().is_visible() {
            continue;
        }
        let Some(placement) = layout.placement(node_id) else {
            continue;
        };
        svg.push_str(&shape_svg(node, placement, theme));
        svg.push_str(&text_svg(node, placement, theme, metrics.font_size, metrics.line_height));
    }

    svg.push_str("</svg>");
    svg
}

fn points_to_path(points: &[Point]) -> String {
    let mut d = String::new();
    for (idx, point) in points.iter().enumerate() {
        let cmd = if idx == 0 { "M" } else { " L" };
        let _ = write!(d, "{cmd} {:.2} {:.2}", point.x(), point.y());
    }
    d
}

fn shape_svg(node: &FlowNode, p: &NodePlacement, theme: &Theme) -> String {
    let style = theme.node_style(node.kind());
    let (fill, stroke) = (style.fill, style.stroke);
    let (x, y, w, h) = (p.left(), p.top(), p.width(), p.height());
    let (cx, cy) = (p.center().x(), p.center().y());

    match node.kind() {
        FlowNodeKind::Start | FlowNodeKind::End | FlowNodeKind::Actor => format!(
            "<ellipse cx=\"{cx:.2}\" cy=\"{cy:.2}\" rx=\"{:.2}\" ry=\"{:.2}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"1.5\"/>",
            w / 2.0,
            h / 2.0
        ),
        FlowNodeKind::Step { decision: true } => format!(
            "<polygon points=\"{cx:.2},{y:.2} {:.2},{cy:.2} {cx:.2},{:.2} {x:.2},{cy:.2}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"1.5\"/>",
            x + w,
            y + h
        ),
        FlowNodeKind::Step { decision: false } => format!(
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"8\" ry=\"8\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"1.5\"/>"
        ),
        FlowNodeKind::Document => {
            let right = x + w;
            let bottom = y + h;
            let fold_x = right - FOLD;
            let fold_y = y + FOLD;
            format!(
                "<path d=\"M {x:.2} {y:.2} L {fold_x:.2} {y:.2} L {right:.2} {fold_y:.2} L {right:.2} {bottom:.2} L {x:.2} {bottom:.2} Z\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"1.5\"/>\
                 <path d=\"M {fold_x:.2} {y:.2} L {fold_x:.2} {fold_y:.2} L {right:.2} {fold_y:.2}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"1.2\"/>"
            )
        }
        FlowNodeKind::Anchor { .. } => String::new(),
    }
}

fn text_svg(node: &FlowNode, p: &NodePlacement, theme: &Theme, font_size: f32, line_height: f32) -> String {
    let style = theme.node_style(node.kind());
    let x = p.center().x();
    let total = node.lines().len() as f32 * line_height;
    // Baseline of the first line, so the block is vertically centred.
    let start_y = p.center().y() - total / 2.0 + line_height / 2.0 + font_size * 0.35;

    let mut text = String::new();
    let _ = write!(
        text,
        "<text x=\"{x:.2}\" y=\"{start_y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{font_size}\" fill=\"{}\">",
        escape_xml(&theme.font_family),
        style.text
    );
    for (idx, line) in node.lines().iter().enumerate() {
        let dy = if idx == 0 { 0.0 } else { line_height };
        let weight = if idx == 0 && matches!(node.kind(), FlowNodeKind::Step { .. }) {
            " font-weight=\"bold\""
        } else {
            ""
        };
        let _ = write!(text, "<tspan x=\"{x:.2}\" dy=\"{dy:.2}\"{weight}>{}</tspan>", escape_xml(line));
    }
    text.push_str("</text>");
    text
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
