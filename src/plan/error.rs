//! Error types for the floor-plan editor

use thiserror::Error;

/// Recoverable editing failures.
///
/// The display strings for the placement variants are the user-facing
/// notices of the original editor and are surfaced verbatim as warnings;
/// none of these abort a session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    /// Person dropped outside every bedroom
    #[error("⚠️ 家人只能放入臥室！")]
    PersonOutsideBedroom,

    /// Person placement requested while no bedroom exists
    #[error("請先放置臥室！")]
    NoBedrooms,

    /// Person drag released outside every bedroom; the placement reverted
    #[error("⚠️ 家人必須在臥室內！")]
    DragOutsideBedroom,

    /// Gesture or deletion referenced a region that no longer exists
    #[error("no region with id {id:?}")]
    RegionNotFound { id: super::types::RegionId },

    /// Gesture or deletion referenced an unknown person
    #[error("no person labeled '{label}'")]
    PersonNotFound { label: String },
}
