use std::collections::HashSet;

use eframe::egui::{Pos2, Vec2, pos2, vec2};

use crate::feed::InterfaceRecord;

use super::super::ViewModel;
use super::sim::PositionTable;

pub(in crate::app) const CANVAS_HEIGHT: f32 = 800.0;
const MIN_CANVAS_WIDTH: f32 = 1200.0;
const WIDTH_BASE: f32 = 400.0;
const WIDTH_PER_TARGET: f32 = 250.0;

const STAR_SOURCE_OFFSET: f32 = -250.0;
const STAR_TARGET_OFFSET: f32 = 100.0;
const STAR_STACK_TOP: f32 = -200.0;
const STAR_STACK_STEP: f32 = 80.0;
const PAIR_OFFSET: f32 = 200.0;

/// A system placed on the logical canvas. Identity is the system id, unique
/// within one layout pass; the position is only a seed, the live value lives
/// in the position table.
#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) struct SystemNode {
    pub id: String,
    pub display_name: String,
    pub pos: Pos2,
}

fn system_node(id: &str, x: f32, y: f32) -> SystemNode {
    SystemNode {
        id: id.to_owned(),
        display_name: format!("System {id}"),
        pos: pos2(x, y),
    }
}

/// Distinct targets of the filtered set, in first-seen order.
pub(in crate::app) fn distinct_targets(filtered: &[InterfaceRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut targets = Vec::new();
    for record in filtered {
        if seen.insert(record.target.as_str()) {
            targets.push(record.target.clone());
        }
    }
    targets
}

/// Logical canvas for the current topology. The width grows with the target
/// count so a wide star stays reachable by scrolling; height is fixed.
pub(in crate::app) fn canvas_size(target_count: usize) -> Vec2 {
    let width = MIN_CANVAS_WIDTH.max(WIDTH_BASE + WIDTH_PER_TARGET * target_count as f32);
    vec2(width, CANVAS_HEIGHT)
}

/// Seed positions for the current filter state.
///
/// Star topology (no target picked): the source sits left of center and
/// every distinct target stacks vertically right of center, in first-seen
/// order. Pair topology: source and target face each other across the
/// center. An empty source yields no nodes; the caller shows the
/// empty-state prompt instead of a canvas.
pub(in crate::app) fn compute_nodes(
    filtered: &[InterfaceRecord],
    source: &str,
    target: &str,
) -> Vec<SystemNode> {
    if source.is_empty() {
        return Vec::new();
    }

    if !target.is_empty() {
        let size = canvas_size(1);
        let (cx, cy) = (size.x / 2.0, size.y / 2.0);
        return vec![
            system_node(source, cx - PAIR_OFFSET, cy),
            system_node(target, cx + PAIR_OFFSET, cy),
        ];
    }

    // Self-links are tolerated in the data; the source keeps its single node.
    let targets: Vec<String> = distinct_targets(filtered)
        .into_iter()
        .filter(|target_id| target_id != source)
        .collect();
    let size = canvas_size(targets.len());
    let (cx, cy) = (size.x / 2.0, size.y / 2.0);

    let mut nodes = vec![system_node(source, cx + STAR_SOURCE_OFFSET, cy)];
    nodes.extend(targets.iter().enumerate().map(|(index, target_id)| {
        system_node(
            target_id,
            cx + STAR_TARGET_OFFSET,
            cy + STAR_STACK_TOP + index as f32 * STAR_STACK_STEP,
        )
    }));
    nodes
}

impl ViewModel {
    /// Recompute the filtered set and reseed the diagram from it. Runs on
    /// every apply/clear, and on every feed refresh; nodes never survive a
    /// rebuild, so pins, drags and stale selections are dropped here.
    pub(in crate::app) fn rebuild_graph(&mut self) {
        self.graph_dirty = false;
        self.drag = super::DragState::default();
        self.hovered_record = None;
        self.painted_revision = 0;

        let Some(applied) = &self.applied else {
            self.filtered = Vec::new();
            self.layout = PositionTable::default();
            self.canvas = canvas_size(0);
            return;
        };

        self.filtered = applied.matching(&self.records);
        if self.filtered.is_empty() {
            self.layout = PositionTable::default();
            self.canvas = canvas_size(0);
            self.selected = None;
            return;
        }

        let nodes = compute_nodes(&self.filtered, &applied.source, &applied.target);
        self.canvas = if applied.target.is_empty() {
            canvas_size(nodes.len().saturating_sub(1))
        } else {
            canvas_size(1)
        };

        if let Some(selected) = &self.selected
            && !nodes.iter().any(|node| &node.id == selected)
        {
            self.selected = None;
        }

        self.layout = PositionTable::new(nodes);
    }
}
