//! Directional classification of regions relative to the canvas center.
//!
//! This is the one shared computation between live editing feedback and
//! prompt generation: both must classify through [`classify`] so the UI
//! dump and the generated text can never disagree.

use super::types::{BoundingBox, Point};

/// One of the eight compass points, in counterclockwise sector order
/// starting from East (the order sectors appear around the circle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CompassPoint {
    East,
    Northeast,
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
}

impl CompassPoint {
    /// All compass points in sector order
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::East,
        CompassPoint::Northeast,
        CompassPoint::North,
        CompassPoint::Northwest,
        CompassPoint::West,
        CompassPoint::Southwest,
        CompassPoint::South,
        CompassPoint::Southeast,
    ];

    /// Chinese directional term. These exact strings are a compatibility
    /// contract with the downstream prompt consumer.
    pub fn label(&self) -> &'static str {
        match self {
            CompassPoint::East => "東",
            CompassPoint::Northeast => "東北",
            CompassPoint::North => "北",
            CompassPoint::Northwest => "西北",
            CompassPoint::West => "西",
            CompassPoint::Southwest => "西南",
            CompassPoint::South => "南",
            CompassPoint::Southeast => "東南",
        }
    }

    /// Position of this point in the 8-sector cycle (East = 0)
    pub fn sector_index(&self) -> usize {
        CompassPoint::ALL
            .iter()
            .position(|p| p == self)
            .expect("point is in ALL")
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification result: dead center, or one of the eight sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Center,
    Point(CompassPoint),
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Center => "中央",
            Direction::Point(p) => p.label(),
        }
    }

    pub fn is_center(&self) -> bool {
        matches!(self, Direction::Center)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a region's bounding box into one of nine sectors.
///
/// `compass_rotation` is in degrees and shifts the reference frame (the
/// user rotating the compass widget rotates every classification with it).
/// The center check runs first: a box whose center is within `threshold`
/// of the canvas center on *both* axes is 中央 regardless of angle.
pub fn classify(
    bounds: BoundingBox,
    canvas_center: Point,
    compass_rotation: f64,
    threshold: f64,
) -> Direction {
    let center = bounds.center();
    let dx = center.x - canvas_center.x;
    let dy = center.y - canvas_center.y;

    if dx.abs() < threshold && dy.abs() < threshold {
        return Direction::Center;
    }

    // Screen y grows downward; negate so north-on-screen is +90 degrees,
    // then shift by the compass rotation.
    let mut angle = (-dy).atan2(dx).to_degrees() - compass_rotation;

    // Normalize into (-180, 180]
    while angle > 180.0 {
        angle -= 360.0;
    }
    while angle <= -180.0 {
        angle += 360.0;
    }

    // 45-degree sectors, half-open on the lower bound: exactly 22.5 is
    // Northeast, not East.
    let point = if (-22.5..22.5).contains(&angle) {
        CompassPoint::East
    } else if (22.5..67.5).contains(&angle) {
        CompassPoint::Northeast
    } else if (67.5..112.5).contains(&angle) {
        CompassPoint::North
    } else if (112.5..157.5).contains(&angle) {
        CompassPoint::Northwest
    } else if angle >= 157.5 || angle < -157.5 {
        CompassPoint::West
    } else if (-157.5..-112.5).contains(&angle) {
        CompassPoint::Southwest
    } else if (-112.5..-67.5).contains(&angle) {
        CompassPoint::South
    } else if (-67.5..-22.5).contains(&angle) {
        CompassPoint::Southeast
    } else {
        // Unreachable after normalization; fall back like the reference
        // behavior rather than panic.
        return Direction::Center;
    };

    Direction::Point(point)
}
