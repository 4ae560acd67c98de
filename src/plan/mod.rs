//! Floor-plan model: the canvas editor, the directional classifier, and
//! the fixed-grid variant.

pub mod config;
pub mod direction;
pub mod editor;
pub mod error;
pub mod grid;
pub mod types;

pub use config::PlanConfig;
pub use direction::{classify, CompassPoint, Direction};
pub use editor::{DragGesture, FloorPlan, PersonSnapshot};
pub use error::PlanError;
pub use grid::{CellAssignment, CellKind, DirectionalGrid};
pub use types::{is_bedroom_label, BoundingBox, Person, Point, Region, RegionId, RegionKind};
