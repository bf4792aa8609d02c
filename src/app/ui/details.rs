use eframe::egui::{RichText, Ui};

use super::super::ViewModel;
use super::super::style::link_style;

impl ViewModel {
    /// Inspection panel: the hovered link wins over the selected node so a
    /// quick hover answers "what is this line" without losing the selection.
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Details");
        ui.add_space(6.0);

        if let Some(record) = self
            .hovered_record
            .as_ref()
            .and_then(|id| self.filtered.iter().find(|record| &record.id == id))
        {
            let style = link_style(&record.protocol);

            ui.label(RichText::new(format!("Interface {}", record.id)).strong());
            ui.add_space(4.0);
            ui.label(format!("Source: {}", record.source));
            ui.label(format!("Target: {}", record.target));
            ui.colored_label(
                style.color,
                format!("Protocol: {} {}", style.icon, record.protocol),
            );
            ui.label(format!("Schedule: {}", record.schedule));
            ui.label(format!("Owner: {}", record.owner));
            return;
        }

        let Some(selected_id) = self.selected.clone() else {
            ui.label("Click a node, or hover a link, to inspect it.");
            return;
        };

        let Some(node) = self
            .layout
            .nodes()
            .iter()
            .find(|node| node.id == selected_id)
        else {
            ui.label("The selected system is no longer part of the diagram.");
            return;
        };

        ui.label(RichText::new(&node.display_name).strong());
        ui.small(node.id.as_str());
        ui.add_space(4.0);
        ui.label(format!(
            "Position: ({}, {})",
            node.pos.x.round() as i32,
            node.pos.y.round() as i32
        ));

        let outgoing = self
            .filtered
            .iter()
            .filter(|record| record.source == node.id)
            .count();
        let incoming = self
            .filtered
            .iter()
            .filter(|record| record.target == node.id)
            .count();
        ui.label(format!("Outgoing links shown: {outgoing}"));
        ui.label(format!("Incoming links shown: {incoming}"));
    }
}
