//! Configuration for the floor-plan editor

use super::types::Point;

/// Configuration options for the editor canvas and placement rules
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Canvas width in layout units
    pub canvas_width: f64,

    /// Canvas height in layout units
    pub canvas_height: f64,

    /// Per-axis distance from the canvas center under which a region
    /// classifies as 中央
    pub center_threshold: f64,

    /// Minimum region edge length; resize clamps to this floor
    pub min_region_size: f64,

    /// Edge length of freshly placed regions
    pub default_region_size: f64,

    /// Inset from the canvas edges for random spawn positions
    pub spawn_inset: f64,

    /// Horizontal distance between the two person stacking columns
    pub person_column_gap: f64,

    /// Vertical distance between person stacking rows
    pub person_row_gap: f64,

    /// RNG seed for random spawn positions; None seeds from entropy
    pub seed: Option<u64>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            center_threshold: 50.0,
            min_region_size: 60.0,
            default_region_size: 100.0,
            spawn_inset: 100.0,
            person_column_gap: 30.0,
            person_row_gap: 25.0,
            seed: None,
        }
    }
}

impl PlanConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas dimensions
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the center-detection threshold
    pub fn with_center_threshold(mut self, threshold: f64) -> Self {
        self.center_threshold = threshold;
        self
    }

    /// Set the minimum region edge length
    pub fn with_min_region_size(mut self, size: f64) -> Self {
        self.min_region_size = size;
        self
    }

    /// Seed the spawn RNG for deterministic placement
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Center point of the canvas
    pub fn canvas_center(&self) -> Point {
        Point::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlanConfig::default();
        assert_eq!(config.canvas_width, 800.0);
        assert_eq!(config.canvas_height, 600.0);
        assert_eq!(config.center_threshold, 50.0);
        assert_eq!(config.min_region_size, 60.0);
        assert_eq!(config.default_region_size, 100.0);
        assert_eq!(config.seed, None);
        assert_eq!(config.canvas_center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlanConfig::new()
            .with_canvas_size(1024.0, 768.0)
            .with_seed(7);
        assert_eq!(config.canvas_center(), Point::new(512.0, 384.0));
        assert_eq!(config.seed, Some(7));
    }
}
