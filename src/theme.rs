use crate::wheel::TypeId;
use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, Stroke, TextStyle};

#[derive(Debug, Clone)]
pub struct Theme {
    pub surface_0: Color32,
    pub surface_1: Color32,
    pub surface_2: Color32,
    pub surface_3: Color32,
    pub accent_primary: Color32,
    pub accent_muted: Color32,
    pub growth: Color32,
    pub stress: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub border_subtle: Color32,
    pub wheel_outline: Color32,
    pub inner_figure: Color32,
    pub hover_ring: Color32,
    pub type_colors: [Color32; 9],
    pub spacing_4: f32,
    pub spacing_8: f32,
    pub spacing_12: f32,
    pub node_radius: f32,
    pub selected_node_radius: f32,
    pub radius_10: u8,
    pub radius_12: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface_0: Color32::from_rgb(0x0F, 0x11, 0x15),
            surface_1: Color32::from_rgb(0x16, 0x1A, 0x20),
            surface_2: Color32::from_rgb(0x1C, 0x22, 0x2B),
            surface_3: Color32::from_rgb(0x22, 0x2A, 0x35),
            accent_primary: Color32::from_rgb(0x3B, 0x82, 0xF6),
            accent_muted: Color32::from_rgb(0x2F, 0x6E, 0xD8),
            growth: Color32::from_rgb(0x22, 0xC5, 0x5E),
            stress: Color32::from_rgb(0xEF, 0x44, 0x44),
            text_primary: Color32::from_rgb(0xE6, 0xED, 0xF3),
            text_muted: Color32::from_rgb(0x8B, 0x94, 0x9E),
            border_subtle: Color32::from_rgba_premultiplied(255, 255, 255, 13),
            wheel_outline: Color32::from_rgb(0x3A, 0x44, 0x52),
            inner_figure: Color32::from_rgba_premultiplied(0x8B, 0x94, 0x9E, 60),
            hover_ring: Color32::from_rgba_premultiplied(255, 255, 255, 90),
            type_colors: [
                Color32::from_rgb(0xE5, 0x48, 0x4D),
                Color32::from_rgb(0xF7, 0x6B, 0x15),
                Color32::from_rgb(0xFF, 0xC5, 0x3D),
                Color32::from_rgb(0x8E, 0x4E, 0xC6),
                Color32::from_rgb(0x3E, 0x63, 0xDD),
                Color32::from_rgb(0x12, 0xA5, 0x94),
                Color32::from_rgb(0xF7, 0x8D, 0xA7),
                Color32::from_rgb(0x8D, 0x5B, 0x38),
                Color32::from_rgb(0x46, 0xA7, 0x58),
            ],
            spacing_4: 4.0,
            spacing_8: 8.0,
            spacing_12: 12.0,
            node_radius: 14.0,
            selected_node_radius: 18.0,
            radius_10: 10,
            radius_12: 12,
        }
    }
}

impl Theme {
    pub fn type_color(&self, type_id: TypeId) -> Color32 {
        self.type_colors[usize::from(type_id.get() - 1)]
    }

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.surface_1;
        visuals.override_text_color = Some(self.text_primary);
        visuals.widgets.noninteractive.bg_fill = self.surface_2;
        visuals.widgets.noninteractive.bg_stroke = Stroke::NONE;
        visuals.widgets.inactive.bg_fill = self.surface_2;
        visuals.widgets.inactive.bg_stroke = Stroke::NONE;
        visuals.widgets.hovered.bg_fill = self.surface_3;
        visuals.widgets.hovered.bg_stroke = Stroke::NONE;
        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::NONE;
        visuals.selection.bg_fill = self.accent_muted;
        visuals.hyperlink_color = self.accent_primary;
        visuals.window_fill = self.surface_1;
        visuals.window_corner_radius = CornerRadius::same(self.radius_10);
        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(17.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(12.0));
        ctx.set_style(style);
    }

    pub fn card_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface_2)
            .inner_margin(Margin::same(self.spacing_12 as i8))
            .corner_radius(CornerRadius::same(self.radius_12))
            .stroke(Stroke::new(1.0, self.border_subtle))
    }

    pub fn node_label_font(&self) -> FontId {
        FontId::proportional(13.0)
    }
}
