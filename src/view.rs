use crate::event::{WheelEvent, WheelEventLog};
use crate::theme::Theme;
use crate::wheel::{LayoutParams, Point2D, Segment, TypeId, WheelGeometry, WheelLayout};
use eframe::egui::{self, Align2, Pos2, Stroke};
use std::collections::VecDeque;

/// Paints the wheel and turns clicks into selection changes.
///
/// Nothing is cached between frames except the last viewport size, which is
/// only kept to report resizes.
pub struct WheelView {
    geometry: WheelGeometry,
    selected: Option<TypeId>,
    last_params: Option<LayoutParams>,
    event_log: WheelEventLog,
}

impl WheelView {
    pub fn new(geometry: WheelGeometry) -> Self {
        Self {
            geometry,
            selected: None,
            last_params: None,
            event_log: WheelEventLog::default(),
        }
    }

    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: WheelGeometry) {
        self.geometry = geometry;
    }

    pub fn selected(&self) -> Option<TypeId> {
        self.selected
    }

    pub fn event_log(&self) -> &VecDeque<WheelEvent> {
        self.event_log.entries()
    }

    fn emit(&mut self, event: WheelEvent) -> WheelEvent {
        tracing::debug!(event = %event.to_log_line(), "wheel event");
        self.event_log.push(event.clone());
        event
    }

    /// Resizes arrive every frame while dragging, so they are traced but
    /// kept out of the event log.
    pub fn observe_viewport(&mut self, params: LayoutParams) -> Option<WheelEvent> {
        if self.last_params == Some(params) {
            return None;
        }
        self.last_params = Some(params);
        let event = WheelEvent::ViewportResized { params };
        tracing::debug!(event = %event.to_log_line(), "wheel event");
        Some(event)
    }

    /// Clicking a node selects it, clicking the selected node again or empty
    /// space clears the selection.
    pub fn handle_click(&mut self, point: Point2D, params: LayoutParams) -> Option<WheelEvent> {
        let hit = self.geometry.nearest_type(point, params);
        let previous = self.selected;
        match (hit, previous) {
            (Some(type_id), Some(current)) if type_id == current => {
                self.selected = None;
                Some(self.emit(WheelEvent::SelectionCleared { previous: current }))
            }
            (Some(type_id), _) => {
                self.selected = Some(type_id);
                Some(self.emit(WheelEvent::TypeSelected { type_id, previous }))
            }
            (None, Some(current)) => {
                self.selected = None;
                Some(self.emit(WheelEvent::SelectionCleared { previous: current }))
            }
            (None, None) => None,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) -> Vec<WheelEvent> {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let rect = response.rect;
        let params = LayoutParams::new(f64::from(rect.width()), f64::from(rect.height()));
        let to_local = |pos: Pos2| {
            Point2D::new(
                f64::from(pos.x - rect.min.x),
                f64::from(pos.y - rect.min.y),
            )
        };
        let to_screen =
            |point: Point2D| Pos2::new(rect.min.x + point.x as f32, rect.min.y + point.y as f32);

        let mut events = Vec::new();
        events.extend(self.observe_viewport(params));
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.extend(self.handle_click(to_local(pos), params));
            }
        }

        let layout = self.geometry.layout(params);
        let hovered = response
            .hover_pos()
            .and_then(|pos| self.geometry.nearest_type(to_local(pos), params));
        paint_wheel(&painter, theme, &layout, self.selected, hovered, &to_screen);
        events
    }
}

fn paint_wheel(
    painter: &egui::Painter,
    theme: &Theme,
    layout: &WheelLayout,
    selected: Option<TypeId>,
    hovered: Option<TypeId>,
    to_screen: &dyn Fn(Point2D) -> Pos2,
) {
    painter.circle_stroke(
        to_screen(layout.center),
        layout.radius as f32,
        Stroke::new(2.0, theme.wheel_outline),
    );

    for segment in layout.inner_lines() {
        paint_segment(painter, segment, Stroke::new(1.0, theme.inner_figure), to_screen);
    }

    if let Some(selected) = selected {
        for wing in selected.wings() {
            painter.circle_stroke(
                to_screen(layout.point_of(wing)),
                theme.node_radius + 3.0,
                Stroke::new(1.5, theme.type_color(selected)),
            );
        }
        let connectors = layout.connectors(selected);
        paint_connector(painter, connectors.integration, Stroke::new(3.0, theme.growth), to_screen);
        paint_connector(
            painter,
            connectors.disintegration,
            Stroke::new(3.0, theme.stress),
            to_screen,
        );
    }

    for node in &layout.nodes {
        let center = to_screen(node.point);
        let is_selected = selected == Some(node.type_id);
        let radius = if is_selected {
            theme.selected_node_radius
        } else {
            theme.node_radius
        };
        let outline = if is_selected {
            Stroke::new(2.0, theme.text_primary)
        } else {
            Stroke::NONE
        };
        painter.circle(center, radius, theme.type_color(node.type_id), outline);
        if hovered == Some(node.type_id) && !is_selected {
            painter.circle_stroke(center, radius + 2.0, Stroke::new(1.5, theme.hover_ring));
        }
        painter.text(
            center,
            Align2::CENTER_CENTER,
            node.type_id.to_string(),
            theme.node_label_font(),
            theme.surface_0,
        );
    }
}

fn paint_segment(
    painter: &egui::Painter,
    segment: Segment,
    stroke: Stroke,
    to_screen: &dyn Fn(Point2D) -> Pos2,
) {
    painter.line_segment([to_screen(segment.from), to_screen(segment.to)], stroke);
}

fn paint_connector(
    painter: &egui::Painter,
    segment: Segment,
    stroke: Stroke,
    to_screen: &dyn Fn(Point2D) -> Pos2,
) {
    let from = to_screen(segment.from);
    let to = to_screen(segment.to);
    painter.arrow(from, to - from, stroke);
}
