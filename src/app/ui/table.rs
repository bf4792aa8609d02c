use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use super::super::ViewModel;
use super::super::style::link_style;

impl ViewModel {
    pub(in crate::app) fn draw_table(&mut self, ui: &mut Ui) {
        ui.heading("Matching interfaces");
        ui.add_space(4.0);

        if self.applied.is_none() {
            ui.label("Apply a filter to list its interfaces here.");
            return;
        }

        if self.filtered.is_empty() {
            ui.label("No matching interfaces for the current selection.");
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder().at_least(110.0))
            .column(Column::remainder().at_least(90.0))
            .header(22.0, |mut header| {
                for title in ["ID", "Source", "Target", "Protocol", "Schedule", "Owner"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for record in &self.filtered {
                    let style = link_style(&record.protocol);
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.colored_label(
                                style.color,
                                format!("{} {}", style.icon, record.id),
                            );
                        });
                        row.col(|ui| {
                            ui.colored_label(style.color, &record.source);
                        });
                        row.col(|ui| {
                            ui.colored_label(style.color, &record.target);
                        });
                        row.col(|ui| {
                            ui.colored_label(style.color, &record.protocol);
                        });
                        row.col(|ui| {
                            ui.colored_label(style.color, &record.schedule);
                        });
                        row.col(|ui| {
                            ui.colored_label(style.color, &record.owner);
                        });
                    });
                }
            });
    }
}
