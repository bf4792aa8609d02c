use eframe::egui::{self, Color32, Ui};

use super::super::ViewModel;
use super::super::filter::FilterSelection;

fn filter_combo(ui: &mut Ui, id: &str, current: &mut String, options: &[String]) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(if current.is_empty() {
            "--".to_owned()
        } else {
            current.clone()
        })
        .show_ui(ui, |ui| {
            ui.selectable_value(current, String::new(), "--");
            for option in options {
                ui.selectable_value(current, option.clone(), option);
            }
        });
}

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Source");
            filter_combo(ui, "source_filter", &mut self.pending.source, &self.systems);

            ui.label("Target");
            filter_combo(ui, "target_filter", &mut self.pending.target, &self.systems);

            ui.label("Protocol");
            filter_combo(
                ui,
                "protocol_filter",
                &mut self.pending.protocol,
                &self.protocols,
            );

            if ui.button("Apply").clicked() {
                self.apply_filter();
            }
            if ui.button("Clear").clicked() {
                self.clear_filter();
            }

            if let Some(error) = &self.filter_error {
                ui.colored_label(Color32::from_rgb(220, 80, 80), error.to_string());
            }
        });
    }

    /// Validate the pending selection and make it the applied one. On
    /// failure the previous applied state keeps rendering untouched.
    pub(in crate::app) fn apply_filter(&mut self) {
        match self.pending.validate() {
            Ok(()) => {
                self.filter_error = None;
                self.applied = Some(self.pending.clone());
                self.graph_dirty = true;
            }
            Err(error) => {
                self.filter_error = Some(error);
            }
        }
    }

    pub(in crate::app) fn clear_filter(&mut self) {
        self.pending = FilterSelection::default();
        self.applied = None;
        self.filter_error = None;
        self.selected = None;
        self.hovered_record = None;
        self.graph_dirty = true;
    }
}
