//! Core types for the floor-plan model

/// A 2D point in canvas coordinates (y grows downward, as on screen)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this bounding box contains a point (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

/// Opaque region identifier.
///
/// Ids are assigned monotonically by the editor and never reused, so a
/// person's bedroom reference stays valid (or dangles detectably) across
/// deletions instead of silently re-targeting a shifted index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub(crate) u32);

/// What a placed region is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Room,
    Facility,
    Bedroom,
}

/// Lexical bedroom marker from the original toolbox labels.
///
/// Used only to infer a kind for catalog entries that declare none; an
/// explicitly declared kind always wins over the label text.
pub fn is_bedroom_label(label: &str) -> bool {
    label.contains("臥室") || label == "主臥室"
}

/// A placeable region (room, facility, or bedroom)
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub kind: RegionKind,
    pub label: String,
    pub icon: String,
    pub bounds: BoundingBox,
    /// Rotation in radians. Cosmetic only: containment and directional
    /// classification use the unrotated axis-aligned bounds.
    pub rotation: f64,
}

impl Region {
    pub fn is_bedroom(&self) -> bool {
        self.kind == RegionKind::Bedroom
    }
}

/// A family member living inside a bedroom.
///
/// The absolute position is always derived: bedroom center + offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub label: String,
    pub icon: String,
    pub bedroom: RegionId,
    pub offset_x: f64,
    pub offset_y: f64,
}
