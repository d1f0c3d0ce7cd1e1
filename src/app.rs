use crate::config::{self, WheelConfig};
use crate::event::WheelEvent;
use crate::theme::Theme;
use crate::view::WheelView;
use crate::wheel::TypeId;
use eframe::egui::{self, RichText, ScrollArea};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const DIAGNOSTICS_CAPACITY: usize = 200;

pub struct EnneagramApp {
    theme: Theme,
    wheel: WheelView,
    config: WheelConfig,
    config_path: PathBuf,
    diagnostics_log: VecDeque<String>,
    visuals_applied: bool,
}

impl EnneagramApp {
    pub fn new(config: WheelConfig, config_path: PathBuf, warnings: Vec<String>) -> Self {
        let mut app = Self {
            theme: Theme::default(),
            wheel: WheelView::new(config.geometry()),
            config,
            config_path,
            diagnostics_log: VecDeque::new(),
            visuals_applied: false,
        };

        for warning in warnings {
            tracing::warn!(%warning, "config warning");
            app.log_diagnostic(format!("config warning: {warning}"));
        }

        app
    }

    fn timestamp() -> String {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(duration) => duration.as_secs().to_string(),
            Err(_) => "0".to_string(),
        }
    }

    fn log_diagnostic(&mut self, message: impl Into<String>) {
        if self.diagnostics_log.len() == DIAGNOSTICS_CAPACITY {
            self.diagnostics_log.pop_front();
        }
        self.diagnostics_log
            .push_back(format!("[{}] {}", Self::timestamp(), message.into()));
    }

    fn apply_event(&mut self, event: &WheelEvent) {
        match event {
            WheelEvent::TypeSelected { type_id, .. } => {
                tracing::info!(type_id = type_id.get(), name = type_id.name(), "type selected");
            }
            WheelEvent::SelectionCleared { .. } => {
                tracing::info!("selection cleared");
            }
            WheelEvent::ViewportResized { .. } => return,
        }
        self.log_diagnostic(event.to_log_line());
    }

    fn save_config(&mut self) {
        let geometry = self.wheel.geometry();
        self.config.margin = geometry.margin;
        self.config.hit_radius = geometry.hit_radius;
        match config::save_to(&self.config_path, &self.config) {
            Ok(()) => {
                tracing::info!(path = %self.config_path.display(), "config saved");
                self.log_diagnostic(format!("config saved to {}", self.config_path.display()));
            }
            Err(err) => {
                tracing::error!(%err, "failed to save config");
                self.log_diagnostic(format!("failed to save config: {err}"));
            }
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Enneagram Wheel");
                ui.separator();
                let status = match self.wheel.selected() {
                    Some(type_id) => format!("Type {type_id}: {}", type_id.name()),
                    None => "No type selected".to_string(),
                };
                ui.label(RichText::new(status).color(self.theme.text_muted));
            });
        });
    }

    fn render_type_details(ui: &mut egui::Ui, theme: &Theme, selected: TypeId) {
        theme.card_frame().show(ui, |ui| {
            ui.label(
                RichText::new(format!("{selected} · {}", selected.name()))
                    .color(theme.type_color(selected))
                    .size(16.0),
            );
            ui.add_space(theme.spacing_4);
            ui.label(
                RichText::new(format!("{} center", selected.triad()))
                    .color(theme.text_muted)
                    .size(12.0),
            );
            ui.add_space(theme.spacing_8);

            let [left, right] = selected.wings();
            ui.label(format!("Wings: {left}w / {right}w"));
            let growth = selected.integration();
            ui.label(
                RichText::new(format!("Growth → {growth} ({})", growth.name())).color(theme.growth),
            );
            let stress = selected.disintegration();
            ui.label(
                RichText::new(format!("Stress → {stress} ({})", stress.name())).color(theme.stress),
            );
        });
    }

    fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("details_panel")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Selected Type");
                ui.separator();
                match self.wheel.selected() {
                    Some(selected) => Self::render_type_details(ui, &self.theme, selected),
                    None => {
                        ui.label(
                            RichText::new("Click a point on the wheel").color(self.theme.text_muted),
                        );
                    }
                }

                ui.separator();
                ui.strong("Layout");
                let mut geometry = self.wheel.geometry();
                let margin_changed = ui
                    .add(egui::Slider::new(&mut geometry.margin, 0.0..=120.0).text("margin"))
                    .changed();
                let hit_changed = ui
                    .add(egui::Slider::new(&mut geometry.hit_radius, 5.0..=40.0).text("hit radius"))
                    .changed();
                if margin_changed || hit_changed {
                    self.wheel.set_geometry(geometry);
                }
                if ui.button("Save layout").clicked() {
                    self.save_config();
                }

                ui.separator();
                egui::CollapsingHeader::new("Diagnostics")
                    .default_open(false)
                    .show(ui, |ui| {
                        ScrollArea::vertical()
                            .id_salt("diagnostics_log")
                            .max_height(180.0)
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                for entry in &self.diagnostics_log {
                                    ui.label(RichText::new(entry).size(12.0));
                                }
                            });
                    });
            });
    }

    fn render_center_panel(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::new().fill(self.theme.surface_0);
        let events = egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| self.wheel.show(ui, &self.theme))
            .inner;
        for event in &events {
            self.apply_event(event);
        }
    }
}

impl eframe::App for EnneagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            self.theme.apply_visuals(ctx);
            self.visuals_applied = true;
        }
        self.render_top_bar(ctx);
        self.render_side_panel(ctx);
        self.render_center_panel(ctx);
    }
}
