use eframe::egui::{
    self, Align2, Color32, FontId, PointerButton, Pos2, Sense, Shape, Stroke, StrokeKind, Ui,
};

use super::super::render_utils::{NODE_CORNER_RADIUS, draw_background, node_rect};
use super::super::style::link_style;
use super::super::ViewModel;
use super::DragState;
use super::interaction::{link_at, node_at};

const NODE_FILL: Color32 = Color32::from_gray(200);
const NODE_FILL_HOVERED: Color32 = Color32::from_gray(218);
const NODE_BORDER: Color32 = Color32::from_gray(102);
const NODE_BORDER_SELECTED: Color32 = Color32::from_rgb(245, 206, 93);
const NODE_LABEL: Color32 = Color32::from_gray(25);

impl ViewModel {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        if self.graph_dirty {
            self.rebuild_graph();
        }

        if self.applied.is_none() {
            self.hovered_record = None;
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.heading("Pick a source system and press Apply to draw the diagram.");
            });
            return;
        }

        if self.filtered.is_empty() {
            self.hovered_record = None;
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.heading("No matching interfaces for the current selection.");
            });
            return;
        }

        let viewport = ui.available_size();
        egui::ScrollArea::both()
            .id_salt("graph_canvas")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let desired = self.canvas.max(viewport);
                let (rect, response) = ui.allocate_exact_size(desired, Sense::click_and_drag());
                let painter = ui.painter_at(rect);

                draw_background(&painter, rect);

                let to_screen = |pos: Pos2| rect.min + pos.to_vec2();
                let to_canvas = |pos: Pos2| (pos - rect.min).to_pos2();

                let hover_pos = response.hover_pos().map(to_canvas);
                let hovered_node_id = hover_pos
                    .and_then(|pos| node_at(self.layout.nodes(), pos))
                    .map(|node| node.id.clone());

                if response.drag_started_by(PointerButton::Primary) {
                    self.drag
                        .on_drag_started(&mut self.layout, hovered_node_id.as_deref());
                }
                if response.dragged_by(PointerButton::Primary)
                    && let Some(pointer) = response.interact_pointer_pos()
                {
                    self.drag.on_drag_moved(&mut self.layout, to_canvas(pointer));
                }

                // Treat a lost pointer (released off-canvas, window focus
                // loss) like a pointer-up so every pin gets its release.
                let pointer_down = ui.input(|input| input.pointer.primary_down());
                if response.drag_stopped_by(PointerButton::Primary)
                    || (!pointer_down && self.drag != DragState::Idle)
                {
                    self.drag.on_drag_stopped(&mut self.layout);
                }

                if response.clicked_by(PointerButton::Primary) {
                    self.set_selected(hovered_node_id.clone());
                }

                self.hovered_record = if hovered_node_id.is_none() {
                    hover_pos
                        .and_then(|pos| link_at(&self.filtered, &self.layout, pos))
                        .map(|record| record.id.clone())
                } else {
                    None
                };

                if hovered_node_id.is_some() {
                    ui.output_mut(|output| {
                        output.cursor_icon = egui::CursorIcon::PointingHand;
                    });
                }

                // Links first so nodes paint over their endpoints. Endpoints
                // resolve by id against the live position table; a dangling
                // id draws from the canvas origin rather than failing.
                for record in &self.filtered {
                    let style = link_style(&record.protocol);
                    let start = to_screen(self.layout.pos_of(&record.source).unwrap_or(Pos2::ZERO));
                    let end = to_screen(self.layout.pos_of(&record.target).unwrap_or(Pos2::ZERO));

                    let hovered = self.hovered_record.as_deref() == Some(record.id.as_str());
                    let width = if hovered {
                        style.width * 1.5
                    } else {
                        style.width
                    };
                    let stroke = Stroke::new(width, style.color);

                    match style.dash {
                        Some((dash, gap)) => {
                            painter.extend(Shape::dashed_line(&[start, end], stroke, dash, gap));
                        }
                        None => {
                            painter.line_segment([start, end], stroke);
                        }
                    }
                }

                for node in self.layout.nodes() {
                    let shape_rect = node_rect(to_screen(node.pos));
                    let selected = self.selected.as_deref() == Some(node.id.as_str());
                    let hovered = hovered_node_id.as_deref() == Some(node.id.as_str());
                    let dragged = self.layout.is_pinned(&node.id);

                    let fill = if hovered || dragged {
                        NODE_FILL_HOVERED
                    } else {
                        NODE_FILL
                    };
                    let stroke = if selected {
                        Stroke::new(2.5, NODE_BORDER_SELECTED)
                    } else {
                        Stroke::new(1.0, NODE_BORDER)
                    };

                    painter.rect_filled(shape_rect, NODE_CORNER_RADIUS, fill);
                    painter.rect_stroke(shape_rect, NODE_CORNER_RADIUS, stroke, StrokeKind::Middle);
                    painter.text(
                        shape_rect.center(),
                        Align2::CENTER_CENTER,
                        &node.display_name,
                        FontId::proportional(18.0),
                        NODE_LABEL,
                    );
                }

                // Position mutations tick the table's revision; answer each
                // tick with a repaint so dragged nodes track the pointer.
                if self.layout.revision() != self.painted_revision {
                    self.painted_revision = self.layout.revision();
                    ui.ctx().request_repaint();
                }
            });
    }
}
