// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graphviz DOT export.
//!
//! The emitted graph carries the same lane grammar as the builtin layout: per-step
//! `rank=same` groups chained by invisible edges, and non-constraining arrowless edges for
//! documents and actors, so `dot` reproduces the three aligned lanes on its own.

use std::fmt::Write as _;

use crate::model::graph::{FlowEdgeKind, FlowNode, FlowNodeKind, FlowchartGraph};
use crate::render::theme::Theme;

fn escape_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}

fn node_label(node: &FlowNode) -> String {
    node.lines().iter().map(|line| escape_label(line)).collect::<Vec<_>>().join("\\n")
}

fn node_attrs(node: &FlowNode, theme: &Theme) -> String {
    let style = theme.node_style(node.kind());
    let label = node_label(node);
    match node.kind() {
        FlowNodeKind::Anchor { .. } => {
            "label=\"\", style=invis, width=0.1, height=0.1".to_owned()
        }
        FlowNodeKind::Start | FlowNodeKind::End => format!(
            "label=\"{label}\", shape=ellipse, fillcolor=\"{}\", color=\"{}\", fontcolor=\"{}\", fontsize=26, width=2.2, height=1.2",
            style.fill, style.stroke, style.text
        ),
        FlowNodeKind::Step { decision: true } => format!(
            "label=\"{label}\", shape=diamond, fillcolor=\"{}\", color=\"{}\", fontcolor=\"{}\", fontsize=22, width=3.2, height=2.2",
            style.fill, style.stroke, style.text
        ),
        FlowNodeKind::Step { decision: false } => format!(
            "label=\"{label}\", shape=box, fillcolor=\"{}\", color=\"{}\", fontcolor=\"{}\", fontsize=24, width=3.2, height=1.6",
            style.fill, style.stroke, style.text
        ),
        FlowNodeKind::Document => format!(
            "label=\"{label}\", shape=note, fillcolor=\"{}\", color=\"{}\", fontcolor=\"{}\", fontsize=20, width=2.6, height=1.4",
            style.fill, style.stroke, style.text
        ),
        FlowNodeKind::Actor => format!(
            "label=\"{label}\", shape=ellipse, fillcolor=\"{}\", color=\"{}\", fontcolor=\"{}\", fontsize=20, width=2.6, height=1.4",
            style.fill, style.stroke, style.text
        ),
    }
}

fn edge_attrs(kind: FlowEdgeKind, theme: &Theme) -> String {
    let mut attrs = match kind {
        FlowEdgeKind::Flow => format!("color=\"{}\", penwidth=1.5, arrowsize=0.8", theme.flow_main),
        FlowEdgeKind::Document | FlowEdgeKind::Actor => {
            format!("color=\"{}\", arrowhead=none, penwidth=1.2", theme.flow_connect)
        }
        FlowEdgeKind::Alignment => "style=invis".to_owned(),
    };
    if !kind.is_constraint() {
        attrs.push_str(", constraint=false");
    }
    attrs
}

/// Serializes the graph as a Graphviz `digraph`.
pub fn export_dot(graph: &FlowchartGraph, theme: &Theme) -> String {
    let mut out = String::new();
    let font = escape_label(&theme.font_family);

    // Writing into a String cannot fail.
    let _ = writeln!(out, "digraph logigramme {{");
    let _ = write!(
        out,
        "  graph [rankdir=TB, splines=ortho, nodesep=1.2, ranksep=1.0, pad=0.5, dpi=150, bgcolor=\"{}\", fontname=\"{font}\"",
        theme.background
    );
    if let Some(title) = graph.title() {
        let _ = write!(out, ", label=\"{}\", labelloc=t", escape_label(title));
    }
    let _ = writeln!(out, "];");
    let _ = writeln!(
        out,
        "  node [fontname=\"{font}\", style=\"filled,rounded\", penwidth=1.5, margin=0.2];"
    );
    let _ = writeln!(out, "  edge [fontname=\"{font}\", arrowsize=0.8, penwidth=1.5];");

    for (node_id, node) in graph.nodes() {
        let _ = writeln!(out, "  {node_id} [{}];", node_attrs(node, theme));
    }

    for group in graph.rank_groups() {
        let members = group.iter().map(|id| format!("{id};")).collect::<Vec<_>>().join(" ");
        let _ = writeln!(out, "  {{ rank=same; {members} }}");
    }

    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "  {} -> {} [{}];",
            edge.from_node_id(),
            edge.to_node_id(),
            edge_attrs(edge.kind(), theme)
        );
    }

    out.push_str("}\n");
    out
}
