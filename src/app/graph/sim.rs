use std::collections::HashMap;

use eframe::egui::{Pos2, pos2};

use super::build::SystemNode;

/// Owns the live node positions after the layout pass has seeded them.
///
/// There is no force integration: positions only move through the explicit
/// pin/drag/release cycle of a pointer gesture, so nodes stay exactly where
/// the layout (or the last drag) left them. `revision` advances on every
/// mutation and is what drives repaints.
#[derive(Default)]
pub(in crate::app) struct PositionTable {
    nodes: Vec<SystemNode>,
    pinned: Vec<bool>,
    index_by_id: HashMap<String, usize>,
    revision: u64,
}

impl PositionTable {
    pub fn new(nodes: Vec<SystemNode>) -> Self {
        let index_by_id = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id.clone(), index))
            .collect();
        let pinned = vec![false; nodes.len()];

        Self {
            nodes,
            pinned,
            index_by_id,
            revision: 0,
        }
    }

    pub fn nodes(&self) -> &[SystemNode] {
        &self.nodes
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Live position of a node, `None` for ids not in the current layout.
    /// Link endpoint resolution supplies its own origin fallback.
    pub fn pos_of(&self, id: &str) -> Option<Pos2> {
        self.index_by_id.get(id).map(|&index| self.nodes[index].pos)
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.index_by_id
            .get(id)
            .is_some_and(|&index| self.pinned[index])
    }

    /// Fix a node at the given position for the duration of a gesture.
    /// Unknown ids are ignored.
    pub fn pin(&mut self, id: &str, x: f32, y: f32) {
        let Some(&index) = self.index_by_id.get(id) else {
            return;
        };

        self.pinned[index] = true;
        self.nodes[index].pos = pos2(x, y);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Move a pinned node to follow the pointer. Ignored for unpinned or
    /// unknown ids.
    pub fn drag(&mut self, id: &str, x: f32, y: f32) {
        let Some(&index) = self.index_by_id.get(id) else {
            return;
        };
        if !self.pinned[index] {
            return;
        }

        self.nodes[index].pos = pos2(x, y);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Clear the pin. The node keeps its last position; there is no
    /// restoring force to snap it back.
    pub fn release(&mut self, id: &str) {
        let Some(&index) = self.index_by_id.get(id) else {
            return;
        };
        if !self.pinned[index] {
            return;
        }

        self.pinned[index] = false;
        self.revision = self.revision.wrapping_add(1);
    }
}
