//! The fixed directional grid variant.
//!
//! Nine cells, one per compass point plus an unassignable center; the
//! direction is the key, so no geometric classification happens here.

use std::collections::HashMap;

use super::direction::CompassPoint;

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Member,
    Room,
    Office,
}

/// A single cell assignment
#[derive(Debug, Clone, PartialEq)]
pub struct CellAssignment {
    pub kind: CellKind,
    pub label: String,
    pub icon: Option<String>,
}

/// Assignment table keyed by compass point. The center is not a slot.
#[derive(Debug, Default)]
pub struct DirectionalGrid {
    cells: HashMap<CompassPoint, CellAssignment>,
}

impl DirectionalGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a cell. Members and office occupants are unique across the
    /// table: assigning one to a new direction clears their prior cell
    /// first. Rooms may repeat.
    pub fn assign(&mut self, direction: CompassPoint, assignment: CellAssignment) {
        if matches!(assignment.kind, CellKind::Member | CellKind::Office) {
            self.cells.retain(|_, cell| {
                !(matches!(cell.kind, CellKind::Member | CellKind::Office)
                    && cell.label == assignment.label)
            });
        }
        self.cells.insert(direction, assignment);
    }

    /// Remove a cell's assignment entirely
    pub fn clear_cell(&mut self, direction: CompassPoint) -> Option<CellAssignment> {
        self.cells.remove(&direction)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn get(&self, direction: CompassPoint) -> Option<&CellAssignment> {
        self.cells.get(&direction)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells in fixed compass order
    pub fn iter(&self) -> impl Iterator<Item = (CompassPoint, &CellAssignment)> {
        CompassPoint::ALL
            .iter()
            .filter_map(move |&point| self.cells.get(&point).map(|cell| (point, cell)))
    }
}
