use crate::wheel::error::WheelError;
use crate::wheel::tables::INNER_LINES;
use crate::wheel::types::TypeId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MARGIN: f64 = 30.0;
pub const DEFAULT_HIT_RADIUS: f64 = 20.0;

const START_ANGLE_DEG: f64 = -90.0;
const STEP_DEG: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Viewport dimensions the wheel is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutParams {
    pub width: f64,
    pub height: f64,
}

impl LayoutParams {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

pub fn compute_center(params: LayoutParams) -> Point2D {
    Point2D::new(params.width / 2.0, params.height / 2.0)
}

/// Radius of the node circle, clamped to zero for viewports smaller than the margin.
pub fn compute_outer_radius(params: LayoutParams, margin: f64) -> f64 {
    let radius = params.width.min(params.height) / 2.0 - margin;
    if radius.is_nan() {
        0.0
    } else {
        radius.max(0.0)
    }
}

pub fn type_order_index(raw: u8) -> Result<usize, WheelError> {
    Ok(TypeId::new(raw)?.order_index())
}

pub fn position_of(raw: u8, params: LayoutParams, margin: f64) -> Result<Point2D, WheelError> {
    Ok(node_position(TypeId::new(raw)?, params, margin))
}

pub fn integration_of(raw: u8) -> Result<TypeId, WheelError> {
    Ok(TypeId::new(raw)?.integration())
}

pub fn disintegration_of(raw: u8) -> Result<TypeId, WheelError> {
    Ok(TypeId::new(raw)?.disintegration())
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

fn node_position(type_id: TypeId, params: LayoutParams, margin: f64) -> Point2D {
    let center = compute_center(params);
    let radius = compute_outer_radius(params, margin);
    let angle = (START_ANGLE_DEG + STEP_DEG * type_id.order_index() as f64).to_radians();
    Point2D::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelNode {
    pub type_id: TypeId,
    pub point: Point2D,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point2D,
    pub to: Point2D,
}

/// Lines drawn from a selected node to its growth and stress points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connectors {
    pub integration: Segment,
    pub disintegration: Segment,
}

/// A full snapshot of the wheel for one viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    pub center: Point2D,
    pub radius: f64,
    /// Nodes in clockwise wheel order, starting with type 9 at the top.
    pub nodes: [WheelNode; 9],
}

impl WheelLayout {
    pub fn point_of(&self, type_id: TypeId) -> Point2D {
        self.nodes[type_id.order_index()].point
    }

    pub fn connectors(&self, selected: TypeId) -> Connectors {
        let from = self.point_of(selected);
        Connectors {
            integration: Segment {
                from,
                to: self.point_of(selected.integration()),
            },
            disintegration: Segment {
                from,
                to: self.point_of(selected.disintegration()),
            },
        }
    }

    pub fn inner_lines(&self) -> Vec<Segment> {
        INNER_LINES
            .iter()
            .filter_map(|&(from, to)| {
                let from = TypeId::new(from).ok()?;
                let to = TypeId::new(to).ok()?;
                Some(Segment {
                    from: self.point_of(from),
                    to: self.point_of(to),
                })
            })
            .collect()
    }
}

/// Styling constants the layout depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub margin: f64,
    pub hit_radius: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            hit_radius: DEFAULT_HIT_RADIUS,
        }
    }
}

impl WheelGeometry {
    /// Negative or NaN lengths are clamped to zero.
    pub fn new(margin: f64, hit_radius: f64) -> Self {
        Self {
            margin: non_negative(margin),
            hit_radius: non_negative(hit_radius),
        }
    }

    pub fn outer_radius(&self, params: LayoutParams) -> f64 {
        compute_outer_radius(params, self.margin)
    }

    pub fn position_of(&self, type_id: TypeId, params: LayoutParams) -> Point2D {
        node_position(type_id, params, self.margin)
    }

    pub fn layout(&self, params: LayoutParams) -> WheelLayout {
        let nodes = crate::wheel::tables::WHEEL_ORDER.map(|raw| {
            let type_id = TypeId::ALL[usize::from(raw - 1)];
            WheelNode {
                type_id,
                point: self.position_of(type_id, params),
            }
        });
        WheelLayout {
            center: compute_center(params),
            radius: self.outer_radius(params),
            nodes,
        }
    }

    /// The node under `point`, if any lies within the hit radius. Exact
    /// ties resolve to the node earliest in wheel order.
    pub fn nearest_type(&self, point: Point2D, params: LayoutParams) -> Option<TypeId> {
        let hit_radius = non_negative(self.hit_radius);
        let mut best: Option<(TypeId, f64)> = None;
        for node in self.layout(params).nodes {
            let distance = node.point.distance_to(point);
            if distance.is_nan() || distance > hit_radius {
                continue;
            }
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((node.type_id, distance)),
            }
        }
        best.map(|(type_id, _)| type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn square(side: f64) -> LayoutParams {
        LayoutParams::new(side, side)
    }

    #[test]
    fn every_node_lies_on_the_outer_circle() {
        let geometry = WheelGeometry::default();
        for params in [square(400.0), LayoutParams::new(640.0, 300.0), LayoutParams::new(120.5, 900.0)] {
            let center = compute_center(params);
            let radius = geometry.outer_radius(params);
            for type_id in TypeId::ALL {
                let distance = geometry.position_of(type_id, params).distance_to(center);
                assert!((distance - radius).abs() < EPSILON, "type {type_id} off circle");
            }
        }
    }

    #[test]
    fn nodes_are_spaced_forty_degrees_apart_clockwise() {
        let layout = WheelGeometry::default().layout(square(400.0));
        for (index, node) in layout.nodes.iter().enumerate() {
            let dx = node.point.x - layout.center.x;
            let dy = node.point.y - layout.center.y;
            let expected = (-90.0 + 40.0 * index as f64).to_radians();
            let actual = dy.atan2(dx);
            let delta = (actual - expected).rem_euclid(std::f64::consts::TAU);
            assert!(delta < EPSILON || (std::f64::consts::TAU - delta) < EPSILON);
        }
        let order: Vec<u8> = layout.nodes.iter().map(|node| node.type_id.get()).collect();
        assert_eq!(order, vec![9, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn type_order_index_follows_wheel_order() {
        assert_eq!(type_order_index(9), Ok(0));
        assert_eq!(type_order_index(1), Ok(1));
        assert_eq!(type_order_index(8), Ok(8));
        assert_eq!(type_order_index(0), Err(WheelError::InvalidType(0)));
    }

    #[test]
    fn nine_sits_straight_above_the_center() {
        let params = square(400.0);
        let center = compute_center(params);
        let nine = position_of(9, params, DEFAULT_MARGIN).expect("9 is valid");
        assert!((nine.x - center.x).abs() < EPSILON);
        assert!(nine.y < center.y);
        assert!((nine.y - 30.0).abs() < EPSILON);
    }

    #[test]
    fn relationship_lookups_have_no_fixed_points() {
        for raw in 1..=9u8 {
            assert_ne!(integration_of(raw).expect("valid").get(), raw);
            assert_ne!(disintegration_of(raw).expect("valid").get(), raw);
        }
    }

    #[test]
    fn integration_follows_the_literal_table() {
        let mut walk = vec![1u8];
        for _ in 0..6 {
            let last = *walk.last().expect("walk is non-empty");
            walk.push(integration_of(last).expect("valid").get());
        }
        assert_eq!(walk, vec![1, 7, 5, 8, 2, 4, 1]);

        let mut triangle = vec![3u8];
        for _ in 0..3 {
            let last = *triangle.last().expect("walk is non-empty");
            triangle.push(integration_of(last).expect("valid").get());
        }
        assert_eq!(triangle, vec![3, 6, 9, 3]);
    }

    #[test]
    fn lookups_reject_out_of_range_types() {
        assert_eq!(integration_of(0), Err(WheelError::InvalidType(0)));
        assert_eq!(integration_of(10), Err(WheelError::InvalidType(10)));
        assert_eq!(disintegration_of(10), Err(WheelError::InvalidType(10)));
        assert!(position_of(0, square(400.0), DEFAULT_MARGIN).is_err());
    }

    #[test]
    fn degenerate_viewport_clamps_radius_to_zero() {
        let params = square(0.0);
        assert_eq!(compute_outer_radius(params, 30.0), 0.0);
        assert_eq!(compute_center(params), Point2D::new(0.0, 0.0));
        assert_eq!(compute_outer_radius(LayoutParams::new(-10.0, 50.0), 30.0), 0.0);
        let three = position_of(3, params, 30.0).expect("3 is valid");
        assert!(three.distance_to(Point2D::default()) < EPSILON);
    }

    #[test]
    fn nearest_type_hits_node_centers() {
        let geometry = WheelGeometry::default();
        let params = square(400.0);
        for type_id in TypeId::ALL {
            let point = geometry.position_of(type_id, params);
            assert_eq!(geometry.nearest_type(point, params), Some(type_id));
        }
    }

    #[test]
    fn nearest_type_ignores_clicks_outside_hit_radius() {
        let geometry = WheelGeometry::default();
        let params = square(400.0);
        assert_eq!(geometry.nearest_type(compute_center(params), params), None);

        let three = geometry.position_of(TypeId::new(3).expect("valid"), params);
        let inside = Point2D::new(three.x + 19.0, three.y);
        let outside = Point2D::new(three.x + 21.0, three.y);
        assert_eq!(geometry.nearest_type(inside, params).map(TypeId::get), Some(3));
        assert_eq!(geometry.nearest_type(outside, params), None);
    }

    #[test]
    fn nearest_type_counts_the_hit_radius_boundary_as_a_hit() {
        let geometry = WheelGeometry::default();
        let params = square(400.0);
        let nine = geometry.position_of(TypeId::new(9).expect("valid"), params);
        let edge = Point2D::new(nine.x, nine.y - DEFAULT_HIT_RADIUS);
        assert_eq!(edge.distance_to(nine), DEFAULT_HIT_RADIUS);
        assert_eq!(geometry.nearest_type(edge, params).map(TypeId::get), Some(9));

        let past_edge = Point2D::new(nine.x, nine.y - DEFAULT_HIT_RADIUS - 0.001);
        assert_eq!(geometry.nearest_type(past_edge, params), None);
    }

    #[test]
    fn invalid_lengths_are_clamped() {
        let geometry = WheelGeometry::new(-12.0, f64::NAN);
        assert_eq!(geometry, WheelGeometry::new(0.0, 0.0));

        let params = square(400.0);
        let center = compute_center(params);
        assert_eq!(geometry.nearest_type(center, params), None);
        let six = geometry.position_of(TypeId::new(6).expect("valid"), params);
        assert_eq!(geometry.nearest_type(six, params).map(TypeId::get), Some(6));

        let unchecked = WheelGeometry {
            margin: DEFAULT_MARGIN,
            hit_radius: f64::NAN,
        };
        assert_eq!(unchecked.nearest_type(center, params), None);
    }

    #[test]
    fn nearest_type_picks_closest_when_hit_areas_overlap() {
        let geometry = WheelGeometry::new(30.0, 500.0);
        let params = square(400.0);
        let five = geometry.position_of(TypeId::new(5).expect("valid"), params);
        let near_five = Point2D::new(five.x + 1.0, five.y + 1.0);
        assert_eq!(geometry.nearest_type(near_five, params).map(TypeId::get), Some(5));
    }

    #[test]
    fn nearest_type_on_collapsed_wheel_prefers_top_node() {
        let geometry = WheelGeometry::default();
        let params = square(10.0);
        let hit = geometry.nearest_type(compute_center(params), params);
        assert_eq!(hit.map(TypeId::get), Some(9));
    }

    #[test]
    fn connectors_end_at_related_nodes() {
        let geometry = WheelGeometry::default();
        let params = LayoutParams::new(500.0, 420.0);
        let layout = geometry.layout(params);
        let four = TypeId::new(4).expect("valid");
        let connectors = layout.connectors(four);
        assert_eq!(connectors.integration.from, geometry.position_of(four, params));
        assert_eq!(
            connectors.integration.to,
            geometry.position_of(TypeId::new(1).expect("valid"), params)
        );
        assert_eq!(
            connectors.disintegration.to,
            geometry.position_of(TypeId::new(2).expect("valid"), params)
        );
    }

    #[test]
    fn layout_tracks_viewport_changes() {
        let geometry = WheelGeometry::default();
        let small = geometry.layout(square(200.0));
        let large = geometry.layout(square(800.0));
        assert!((small.radius - 70.0).abs() < EPSILON);
        assert!((large.radius - 370.0).abs() < EPSILON);
        assert_ne!(small.nodes[1].point, large.nodes[1].point);
        assert_eq!(large.inner_lines().len(), 9);
    }
}
