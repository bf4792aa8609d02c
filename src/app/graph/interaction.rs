use eframe::egui::Pos2;

use crate::feed::InterfaceRecord;

use super::super::render_utils::{dist_to_segment, node_rect};
use super::build::SystemNode;
use super::sim::PositionTable;

/// How close the pointer must be to a link line to count as hovering it.
const LINK_HIT_RADIUS: f32 = 6.0;

/// Drag gesture state for the graph canvas. One pointer, at most one pinned
/// node; a second drag-start while one is active is ignored, and each pin is
/// released exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(in crate::app) enum DragState {
    #[default]
    Idle,
    Dragging {
        node_id: String,
    },
}

impl DragState {
    /// Pointer pressed and moved past the click threshold over `hit`. Pins
    /// the node at its current position and starts following the pointer.
    pub fn on_drag_started(&mut self, table: &mut PositionTable, hit: Option<&str>) {
        if !matches!(self, Self::Idle) {
            return;
        }

        if let Some(id) = hit
            && let Some(pos) = table.pos_of(id)
        {
            table.pin(id, pos.x, pos.y);
            *self = Self::Dragging {
                node_id: id.to_owned(),
            };
        }
    }

    pub fn on_drag_moved(&mut self, table: &mut PositionTable, pointer: Pos2) {
        if let Self::Dragging { node_id } = self {
            table.drag(node_id, pointer.x, pointer.y);
        }
    }

    /// Pointer released or cancelled. Taking the state out first guarantees
    /// a single release per pin even if the event fires twice.
    pub fn on_drag_stopped(&mut self, table: &mut PositionTable) {
        if let Self::Dragging { node_id } = std::mem::take(self) {
            table.release(&node_id);
        }
    }
}

/// Topmost node under the pointer. Nodes paint in order, so the last match
/// wins.
pub(in crate::app) fn node_at(nodes: &[SystemNode], pos: Pos2) -> Option<&SystemNode> {
    nodes.iter().rev().find(|node| node_rect(node.pos).contains(pos))
}

/// The nearest link line within hover range of the pointer. Endpoints
/// resolve like the paint pass does, missing ids falling back to the origin.
pub(in crate::app) fn link_at<'a>(
    records: &'a [InterfaceRecord],
    table: &PositionTable,
    pos: Pos2,
) -> Option<&'a InterfaceRecord> {
    records
        .iter()
        .filter_map(|record| {
            let start = table.pos_of(&record.source).unwrap_or(Pos2::ZERO);
            let end = table.pos_of(&record.target).unwrap_or(Pos2::ZERO);
            let distance = dist_to_segment(pos, start, end);
            (distance <= LINK_HIT_RADIUS).then_some((record, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(record, _)| record)
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::super::build::compute_nodes;
    use super::*;

    fn record(id: &str, source: &str, target: &str) -> InterfaceRecord {
        InterfaceRecord {
            id: id.to_owned(),
            source: source.to_owned(),
            target: target.to_owned(),
            protocol: "SFTP".to_owned(),
            schedule: "daily".to_owned(),
            owner: "ops".to_owned(),
        }
    }

    fn star_table() -> PositionTable {
        let filtered = vec![record("1", "A", "B"), record("2", "A", "C")];
        PositionTable::new(compute_nodes(&filtered, "A", ""))
    }

    #[test]
    fn drag_cycle_pins_moves_and_releases_once() {
        let mut table = star_table();
        let mut drag = DragState::default();

        drag.on_drag_started(&mut table, Some("B"));
        assert!(matches!(&drag, DragState::Dragging { node_id } if node_id == "B"));
        assert!(table.is_pinned("B"));

        drag.on_drag_moved(&mut table, pos2(50.0, 60.0));
        drag.on_drag_stopped(&mut table);

        assert_eq!(drag, DragState::Idle);
        assert!(!table.is_pinned("B"));
        assert_eq!(table.pos_of("B"), Some(pos2(50.0, 60.0)));

        // A stray second stop has nothing left to release.
        let revision = table.revision();
        drag.on_drag_stopped(&mut table);
        assert_eq!(table.revision(), revision);
    }

    #[test]
    fn a_second_drag_start_is_ignored_while_dragging() {
        let mut table = star_table();
        let mut drag = DragState::default();

        drag.on_drag_started(&mut table, Some("B"));
        drag.on_drag_started(&mut table, Some("C"));

        assert!(matches!(&drag, DragState::Dragging { node_id } if node_id == "B"));
        assert!(!table.is_pinned("C"));
    }

    #[test]
    fn drag_start_over_empty_canvas_stays_idle() {
        let mut table = star_table();
        let mut drag = DragState::default();

        drag.on_drag_started(&mut table, None);
        assert_eq!(drag, DragState::Idle);
        assert_eq!(table.revision(), 0);
    }

    #[test]
    fn drag_start_over_a_vanished_node_stays_idle() {
        let mut table = star_table();
        let mut drag = DragState::default();

        drag.on_drag_started(&mut table, Some("Z"));
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn node_at_prefers_the_topmost_node() {
        let filtered = vec![record("1", "A", "B")];
        let mut table = PositionTable::new(compute_nodes(&filtered, "A", "B"));

        // Drag B exactly onto A; B paints later, so it wins the hit test.
        let a = table.pos_of("A").expect("A is laid out");
        table.pin("B", a.x, a.y);
        table.release("B");

        let hit = node_at(table.nodes(), a).expect("a node under the pointer");
        assert_eq!(hit.id, "B");
    }

    #[test]
    fn node_at_misses_outside_every_rect() {
        let table = star_table();
        assert!(node_at(table.nodes(), pos2(-500.0, -500.0)).is_none());
    }

    #[test]
    fn link_at_picks_the_nearest_line() {
        let table = star_table();
        let records = vec![record("1", "A", "B"), record("2", "A", "C")];

        let b = table.pos_of("B").expect("B is laid out");
        let a = table.pos_of("A").expect("A is laid out");
        let midpoint = pos2((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);

        let hit = link_at(&records, &table, midpoint).expect("a link under the pointer");
        assert_eq!(hit.id, "1");
    }

    #[test]
    fn link_at_misses_far_from_every_line() {
        let table = star_table();
        let records = vec![record("1", "A", "B")];
        assert!(link_at(&records, &table, pos2(-300.0, -300.0)).is_none());
    }
}
