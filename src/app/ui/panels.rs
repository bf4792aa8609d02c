use eframe::egui::{self, Align, Context, Layout};

use crate::feed::{InterfaceRecord, protocol_tags, system_ids};

use super::super::ViewModel;
use super::super::graph::{DragState, PositionTable, canvas_size};

impl ViewModel {
    pub(in crate::app) fn new(records: Vec<InterfaceRecord>) -> Self {
        let systems = system_ids(&records);
        let protocols = protocol_tags(&records);

        Self {
            records,
            systems,
            protocols,
            pending: Default::default(),
            applied: None,
            filter_error: None,
            filtered: Vec::new(),
            layout: PositionTable::default(),
            canvas: canvas_size(0),
            drag: DragState::default(),
            selected: None,
            hovered_record: None,
            graph_dirty: true,
            painted_revision: 0,
        }
    }

    /// Swap in a freshly fetched record set. Filters and the node selection
    /// stay; the diagram reseeds against the new data on the next frame.
    pub(in crate::app) fn replace_records(&mut self, records: Vec<InterfaceRecord>) {
        self.systems = system_ids(&records);
        self.protocols = protocol_tags(&records);
        self.records = records;
        self.graph_dirty = true;
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        reload_requested: &mut bool,
        is_refreshing: bool,
    ) {
        if self.graph_dirty {
            self.rebuild_graph();
        }

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("interlink");
                    ui.separator();
                    ui.label(format!("{} interfaces", self.records.len()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let reload = ui.add_enabled(!is_refreshing, egui::Button::new("Reload"));
                        if reload.clicked() {
                            *reload_requested = true;
                        }
                        if is_refreshing {
                            ui.spinner();
                        }
                    });
                });
                self.draw_controls(ui);
                ui.add_space(4.0);
            });

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::TopBottomPanel::bottom("interface_table")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| self.draw_table(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_graph(ui));
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<String>) {
        self.selected = selected;
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::ViewModel;
    use crate::feed::InterfaceRecord;

    fn record(id: &str, source: &str, target: &str, protocol: &str) -> InterfaceRecord {
        InterfaceRecord {
            id: id.to_owned(),
            source: source.to_owned(),
            target: target.to_owned(),
            protocol: protocol.to_owned(),
            schedule: "daily".to_owned(),
            owner: "X".to_owned(),
        }
    }

    #[test]
    fn new_model_indexes_systems_and_protocols() {
        let model = ViewModel::new(vec![
            record("1", "A", "B", "SFTP"),
            record("2", "B", "C", "HULFT"),
        ]);

        assert_eq!(model.systems, ["A", "B", "C"]);
        assert_eq!(model.protocols, ["SFTP", "HULFT"]);
        assert!(model.applied.is_none());
        assert!(model.graph_dirty);
    }

    #[test]
    fn replace_records_is_wholesale_and_keeps_the_applied_filter() {
        let mut model = ViewModel::new(vec![record("1", "A", "B", "SFTP")]);
        model.pending.source = "A".to_owned();
        model.apply_filter();
        model.rebuild_graph();
        assert_eq!(model.filtered.len(), 1);

        model.replace_records(vec![
            record("10", "A", "D", "MQ"),
            record("11", "E", "F", "FTP"),
        ]);
        model.rebuild_graph();

        assert_eq!(model.systems, ["A", "D", "E", "F"]);
        assert!(model.applied.is_some());
        let ids: Vec<&str> = model
            .filtered
            .iter()
            .map(|record| record.id.as_str())
            .collect();
        assert_eq!(ids, ["10"]);
    }

    #[test]
    fn rebuild_after_refresh_drops_a_vanished_selection() {
        let mut model = ViewModel::new(vec![record("1", "A", "B", "SFTP")]);
        model.pending.source = "A".to_owned();
        model.apply_filter();
        model.rebuild_graph();
        model.set_selected(Some("B".to_owned()));

        model.replace_records(vec![record("2", "A", "C", "SFTP")]);
        model.rebuild_graph();

        assert!(model.selected.is_none());
    }

    #[test]
    fn rebuild_resets_an_in_flight_drag() {
        let mut model = ViewModel::new(vec![record("1", "A", "B", "SFTP")]);
        model.pending.source = "A".to_owned();
        model.apply_filter();
        model.rebuild_graph();

        model
            .drag
            .on_drag_started(&mut model.layout, Some("B"));
        assert!(model.layout.is_pinned("B"));

        model.pending.target = "B".to_owned();
        model.apply_filter();
        model.rebuild_graph();

        assert_eq!(model.drag, super::super::super::graph::DragState::Idle);
        assert!(!model.layout.is_pinned("B"));
    }
}
