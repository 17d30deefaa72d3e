// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::graph::{
    AnchorSide, FlowEdge, FlowEdgeKind, FlowNode, FlowNodeKind, FlowchartGraph, Lane,
};
use crate::model::ids::{IdError, NodeId};
use crate::model::step::StepRecord;

use super::text::{max_line_len, truncate_with_ellipsis, wrap_words};

const DECISION_KEYWORDS: &[&str] = &["décision", "vérification", "?", "si ", "conditionnel", "choix"];

/// Whether an activity reads as a decision point (drawn as a diamond).
pub fn is_decision(activity: &str) -> bool {
    let activity = activity.to_lowercase();
    DECISION_KEYWORDS.iter().any(|keyword| activity.contains(keyword))
}

/// Per-lane label wrap widths, in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapWidths {
    pub activity: usize,
    pub document: usize,
    pub actor: usize,
    /// Start and end labels.
    pub terminal: usize,
}

impl Default for WrapWidths {
    fn default() -> Self {
        Self { activity: 20, document: 18, actor: 12, terminal: 25 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowchartLayoutError {
    #[error("no steps to lay out")]
    NoSteps,
    #[error("invalid node id: {0}")]
    InvalidId(#[from] IdError),
}

fn terminal_lines(label: &str, width: usize) -> Vec<String> {
    let lines = wrap_words(label, width);
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Builds the three-lane graph for a procedure.
///
/// Rank 0 holds `start`, rank `i + 1` holds step `i` with its document and actor, and the
/// last rank holds `end`. Each step rank is pinned by a same-rank group chained with
/// alignment edges from `left_anchor_{i}` to `right_anchor_{i}`.
pub fn build_flowchart_graph(
    steps: &[StepRecord],
    start_label: &str,
    end_label: &str,
    wrap: &WrapWidths,
) -> Result<FlowchartGraph, FlowchartLayoutError> {
    if steps.is_empty() {
        return Err(FlowchartLayoutError::NoSteps);
    }

    let mut graph = FlowchartGraph::default();
    let start_id = NodeId::new("start")?;
    let end_id = NodeId::new("end")?;

    graph.insert_node(
        start_id.clone(),
        FlowNode::new(FlowNodeKind::Start, 0, terminal_lines(start_label, wrap.terminal)),
    );

    let mut previous = start_id;
    for (idx, step) in steps.iter().enumerate() {
        let rank = idx + 1;
        let decision = is_decision(step.activity());
        tracing::trace!(
            number = step.number(),
            activity = %truncate_with_ellipsis(step.activity(), 30),
            decision,
            "adding step"
        );

        let step_id = NodeId::indexed("step", idx)?;
        let left_id = NodeId::indexed("left_anchor", idx)?;
        let right_id = NodeId::indexed("right_anchor", idx)?;

        let mut label = vec![step.number().to_owned()];
        label.extend(wrap_words(step.activity(), wrap.activity));

        graph.insert_node(left_id.clone(), FlowNode::anchor(AnchorSide::Left, rank));

        let mut group = vec![left_id];
        if let Some(document) = step.document() {
            let doc_id = NodeId::indexed("doc", idx)?;
            graph.insert_node(
                doc_id.clone(),
                FlowNode::new(FlowNodeKind::Document, rank, wrap_words(document, wrap.document)),
            );
            graph.push_edge(FlowEdge::new(doc_id.clone(), step_id.clone(), FlowEdgeKind::Document));
            group.push(doc_id);
        }

        graph.insert_node(step_id.clone(), FlowNode::new(FlowNodeKind::Step { decision }, rank, label));
        graph.push_edge(FlowEdge::new(previous, step_id.clone(), FlowEdgeKind::Flow));
        group.push(step_id.clone());

        if let Some(actor) = step.actor() {
            let actor_id = NodeId::indexed("actor", idx)?;
            graph.insert_node(
                actor_id.clone(),
                FlowNode::new(FlowNodeKind::Actor, rank, wrap_words(actor, wrap.actor)),
            );
            graph.push_edge(FlowEdge::new(step_id.clone(), actor_id.clone(), FlowEdgeKind::Actor));
            group.push(actor_id);
        }

        graph.insert_node(right_id.clone(), FlowNode::anchor(AnchorSide::Right, rank));
        group.push(right_id);

        for pair in group.windows(2) {
            graph.push_edge(FlowEdge::new(pair[0].clone(), pair[1].clone(), FlowEdgeKind::Alignment));
        }
        graph.push_rank_group(group);

        previous = step_id;
    }

    graph.insert_node(
        end_id.clone(),
        FlowNode::new(FlowNodeKind::End, steps.len() + 1, terminal_lines(end_label, wrap.terminal)),
    );
    graph.push_edge(FlowEdge::new(previous, end_id, FlowEdgeKind::Flow));

    tracing::debug!(
        steps = steps.len(),
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "flowchart graph built"
    );
    Ok(graph)
}

/// Pixel metrics for the builtin layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub font_size: f32,
    /// Average advance of one char at `font_size`.
    pub char_width: f32,
    pub line_height: f32,
    /// Inner padding between a label and its shape.
    pub padding: f32,
    pub lane_gap: f32,
    pub rank_gap: f32,
    /// Outer margin around the drawing.
    pub margin: f32,
    pub title_font_size: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            char_width: 9.0,
            line_height: 20.0,
            padding: 14.0,
            lane_gap: 64.0,
            rank_gap: 48.0,
            margin: 32.0,
            title_font_size: 22.0,
        }
    }
}

impl LayoutMetrics {
    fn title_band(&self) -> f32 {
        self.title_font_size * 2.0
    }

    fn node_size(&self, node: &FlowNode) -> (f32, f32) {
        if !node.kind().is_visible() {
            return (0.0, 0.0);
        }
        let text_w = max_line_len(node.lines()) as f32 * self.char_width;
        let text_h = node.lines().len().max(1) as f32 * self.line_height;
        let w = text_w + 2.0 * self.padding;
        let h = text_h + 2.0 * self.padding;

        match node.kind() {
            // Labels sit inside the diamond's inscribed rectangle.
            FlowNodeKind::Step { decision: true } => ((w * 1.6).max(180.0), (h * 1.6).max(110.0)),
            FlowNodeKind::Step { decision: false } => (w.max(180.0), h.max(70.0)),
            FlowNodeKind::Start | FlowNodeKind::End => ((w * 1.3).max(140.0), (h * 1.3).max(60.0)),
            FlowNodeKind::Actor => ((w * 1.3).max(120.0), (h * 1.3).max(56.0)),
            FlowNodeKind::Document => (w.max(120.0), h.max(56.0)),
            FlowNodeKind::Anchor { .. } => (0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

/// A node's box in drawing coordinates, y down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodePlacement {
    center: Point,
    width: f32,
    height: f32,
}

impl NodePlacement {
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.height / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRoute {
    from: NodeId,
    to: NodeId,
    kind: FlowEdgeKind,
    points: Vec<Point>,
}

impl EdgeRoute {
    pub fn from_node_id(&self) -> &NodeId {
        &self.from
    }

    pub fn to_node_id(&self) -> &NodeId {
        &self.to
    }

    pub fn kind(&self) -> FlowEdgeKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowchartLayout {
    width: f32,
    height: f32,
    /// `(left, width)` of each lane, indexed by [`Lane::index`].
    lanes: [(f32, f32); 3],
    title_origin: Option<Point>,
    placements: IndexMap<NodeId, NodePlacement>,
    routes: Vec<EdgeRoute>,
    metrics: LayoutMetrics,
}

impl FlowchartLayout {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn lane_bounds(&self, lane: Lane) -> (f32, f32) {
        self.lanes[lane.index()]
    }

    /// Baseline anchor of the centred title, when the graph has one.
    pub fn title_origin(&self) -> Option<Point> {
        self.title_origin
    }

    pub fn placements(&self) -> &IndexMap<NodeId, NodePlacement> {
        &self.placements
    }

    pub fn placement(&self, node_id: &NodeId) -> Option<&NodePlacement> {
        self.placements.get(node_id)
    }

    /// Routes for visible edges, in graph edge order.
    pub fn routes(&self) -> &[EdgeRoute] {
        &self.routes
    }

    /// Metrics the layout was computed with; renderers size text from them.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }
}

/// Deterministic three-lane placement.
///
/// Lanes are as wide as their widest node and ranks as tall as their tallest node; each
/// node is centred in its (lane, rank) cell. Anchors collapse to points on the outer lane
/// edges.
pub fn layout_flowchart(graph: &FlowchartGraph, metrics: &LayoutMetrics) -> FlowchartLayout {
    let rank_count = graph.rank_count();
    let sizes = graph
        .nodes()
        .values()
        .map(|node| metrics.node_size(node))
        .collect::<Vec<_>>();

    let mut lane_widths = [0.0f32; 3];
    let mut rank_heights = vec![0.0f32; rank_count];
    for (node, &(w, h)) in graph.nodes().values().zip(&sizes) {
        let lane = node.lane().index();
        lane_widths[lane] = lane_widths[lane].max(w);
        rank_heights[node.rank()] = rank_heights[node.rank()].max(h);
    }

    let mut lanes = [(0.0f32, 0.0f32); 3];
    let mut x = metrics.margin;
    for lane in Lane::ALL {
        let width = lane_widths[lane.index()];
        lanes[lane.index()] = (x, width);
        x += width + metrics.lane_gap;
    }
    let width = x - metrics.lane_gap + metrics.margin;

    let title_origin = graph
        .title()
        .map(|_| Point::new(width / 2.0, metrics.margin + metrics.title_font_size));
    let mut y = metrics.margin + if title_origin.is_some() { metrics.title_band() } else { 0.0 };
    let mut rank_tops = Vec::with_capacity(rank_count);
    for height in &rank_heights {
        rank_tops.push(y);
        y += height + metrics.rank_gap;
    }
    let height = if rank_count == 0 { y + metrics.margin } else { y - metrics.rank_gap + metrics.margin };

    let mut placements = IndexMap::with_capacity(graph.nodes().len());
    for ((node_id, node), &(w, h)) in graph.nodes().iter().zip(&sizes) {
        let (lane_left, lane_width) = lanes[node.lane().index()];
        let cy = rank_tops[node.rank()] + rank_heights[node.rank()] / 2.0;
        let cx = match node.kind() {
            FlowNodeKind::Anchor { side: AnchorSide::Left } => lane_left,
            FlowNodeKind::Anchor { side: AnchorSide::Right } => lane_left + lane_width,
            _ => lane_left + lane_width / 2.0,
        };
        placements.insert(node_id.clone(), NodePlacement { center: Point::new(cx, cy), width: w, height: h });
    }

    let routes = graph
        .visible_edges()
        .filter_map(|edge| {
            let from = placements.get(edge.from_node_id())?;
            let to = placements.get(edge.to_node_id())?;
            Some(EdgeRoute {
                from: edge.from_node_id().clone(),
                to: edge.to_node_id().clone(),
                kind: edge.kind(),
                points: route_points(edge.kind(), from, to),
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(width, height, routes = routes.len(), "flowchart laid out");
    FlowchartLayout { width, height, lanes, title_origin, placements, routes, metrics: *metrics }
}

fn route_points(kind: FlowEdgeKind, from: &NodePlacement, to: &NodePlacement) -> Vec<Point> {
    match kind {
        FlowEdgeKind::Flow => {
            let start = Point::new(from.center.x, from.bottom());
            let end = Point::new(to.center.x, to.top());
            if (start.x - end.x).abs() < f32::EPSILON {
                vec![start, end]
            } else {
                let mid_y = (start.y + end.y) / 2.0;
                vec![start, Point::new(start.x, mid_y), Point::new(end.x, mid_y), end]
            }
        }
        FlowEdgeKind::Document | FlowEdgeKind::Actor => {
            let (left, right) = if from.center.x <= to.center.x { (from, to) } else { (to, from) };
            let start = Point::new(left.right(), left.center.y);
            let end = Point::new(right.left(), right.center.y);
            if from.center.x <= to.center.x {
                vec![start, end]
            } else {
                vec![end, start]
            }
        }
        FlowEdgeKind::Alignment => Vec::new(),
    }
}
