// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use indexmap::IndexMap;
use serde::Serialize;

use super::ids::NodeId;

/// Build-time graph for one flowchart.
///
/// Nodes keep insertion order, which is also the order they are emitted to Graphviz.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FlowchartGraph {
    title: Option<String>,
    nodes: IndexMap<NodeId, FlowNode>,
    edges: Vec<FlowEdge>,
    rank_groups: Vec<Vec<NodeId>>,
}

impl FlowchartGraph {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title<T: Into<String>>(&mut self, title: Option<T>) {
        self.title = title.map(Into::into);
    }

    pub fn nodes(&self) -> &IndexMap<NodeId, FlowNode> {
        &self.nodes
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&FlowNode> {
        self.nodes.get(node_id)
    }

    pub fn insert_node(&mut self, node_id: NodeId, node: FlowNode) {
        self.nodes.insert(node_id, node);
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn push_edge(&mut self, edge: FlowEdge) {
        self.edges.push(edge);
    }

    /// Edges that are drawn. Alignment edges only steer layout.
    pub fn visible_edges(&self) -> impl Iterator<Item = &FlowEdge> {
        self.edges.iter().filter(|edge| edge.kind().is_visible())
    }

    /// Groups of nodes pinned to the same rank, in rank order.
    pub fn rank_groups(&self) -> &[Vec<NodeId>] {
        &self.rank_groups
    }

    pub fn push_rank_group(&mut self, group: Vec<NodeId>) {
        self.rank_groups.push(group);
    }

    pub fn rank_count(&self) -> usize {
        self.nodes.values().map(|node| node.rank + 1).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FlowNodeKind {
    Start,
    End,
    Step { decision: bool },
    Document,
    Actor,
    Anchor { side: AnchorSide },
}

impl FlowNodeKind {
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Anchor { .. })
    }

    pub fn lane(self) -> Lane {
        match self {
            Self::Document | Self::Anchor { side: AnchorSide::Left } => Lane::Document,
            Self::Actor | Self::Anchor { side: AnchorSide::Right } => Lane::Actor,
            Self::Start | Self::End | Self::Step { .. } => Lane::Step,
        }
    }
}

/// Left to right visual columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Document,
    Step,
    Actor,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Document, Lane::Step, Lane::Actor];

    pub fn index(self) -> usize {
        match self {
            Self::Document => 0,
            Self::Step => 1,
            Self::Actor => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    kind: FlowNodeKind,
    rank: usize,
    lines: Vec<String>,
}

impl FlowNode {
    pub fn new(kind: FlowNodeKind, rank: usize, lines: Vec<String>) -> Self {
        Self { kind, rank, lines }
    }

    pub fn anchor(side: AnchorSide, rank: usize) -> Self {
        Self::new(FlowNodeKind::Anchor { side }, rank, Vec::new())
    }

    pub fn kind(&self) -> FlowNodeKind {
        self.kind
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn lane(&self) -> Lane {
        self.kind.lane()
    }

    /// Label lines after wrapping.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_decision(&self) -> bool {
        matches!(self.kind, FlowNodeKind::Step { decision: true })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowEdgeKind {
    /// Step sequence, drawn with an arrow head.
    Flow,
    /// Document to step, arrowless.
    Document,
    /// Step to actor, arrowless.
    Actor,
    /// Invisible, forces lane order within a rank.
    Alignment,
}

impl FlowEdgeKind {
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Alignment)
    }

    pub fn has_arrow(self) -> bool {
        matches!(self, Self::Flow)
    }

    /// Whether the edge takes part in rank assignment.
    pub fn is_constraint(self) -> bool {
        matches!(self, Self::Flow | Self::Alignment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    from: NodeId,
    to: NodeId,
    kind: FlowEdgeKind,
}

impl FlowEdge {
    pub fn new(from: NodeId, to: NodeId, kind: FlowEdgeKind) -> Self {
        Self { from, to, kind }
    }

    pub fn from_node_id(&self) -> &NodeId {
        &self.from
    }

    pub fn to_node_id(&self) -> &NodeId {
        &self.to
    }

    pub fn kind(&self) -> FlowEdgeKind {
        self.kind
    }
}
