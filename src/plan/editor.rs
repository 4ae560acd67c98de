//! The floor-plan editor state and its mutation operations.
//!
//! All editing state lives on [`FloorPlan`]: the ordered region
//! collection, the persons, the compass rotation, the spawn RNG, and the
//! in-flight [`DragGesture`]. A gesture spans one press-to-release
//! sequence and is cleared on release regardless of outcome; releasing
//! either finalizes or reverts, there is no third path.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::PlanConfig;
use super::direction::{classify, Direction};
use super::error::PlanError;
use super::types::{BoundingBox, Person, Point, Region, RegionId, RegionKind};

/// Pre-drag placement of a person, captured when the drag begins
#[derive(Debug, Clone, PartialEq)]
pub struct PersonSnapshot {
    pub bedroom: RegionId,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// The in-flight drag gesture, one variant per drag mode
#[derive(Debug, Clone, PartialEq)]
pub enum DragGesture {
    Idle,
    /// Moving a region; `grab_x`/`grab_y` is the pointer offset from the
    /// region origin at press time
    MoveRegion {
        id: RegionId,
        grab_x: f64,
        grab_y: f64,
    },
    /// Resizing from the bottom-right handle
    ResizeRegion {
        id: RegionId,
        start: Point,
        original_width: f64,
        original_height: f64,
    },
    /// Rotating around the region center
    RotateRegion { id: RegionId },
    /// Moving a person; carries the revert snapshot
    MovePerson {
        label: String,
        snapshot: PersonSnapshot,
    },
}

/// The floor-plan editor
#[derive(Debug)]
pub struct FloorPlan {
    config: PlanConfig,
    regions: Vec<Region>,
    persons: Vec<Person>,
    /// Compass rotation in degrees, 0 = north up
    compass_rotation: f64,
    gesture: DragGesture,
    rng: StdRng,
    next_id: u32,
}

impl FloorPlan {
    pub fn new(config: PlanConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            regions: Vec::new(),
            persons: Vec::new(),
            compass_rotation: 0.0,
            gesture: DragGesture::Idle,
            rng,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Regions in placement order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Persons in placement order
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn compass_rotation(&self) -> f64 {
        self.compass_rotation
    }

    pub fn set_compass_rotation(&mut self, degrees: f64) {
        self.compass_rotation = degrees;
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    fn region_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.iter_mut().find(|r| r.id == id)
    }

    pub fn person(&self, label: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.label == label)
    }

    /// Directional classification of a region under the current compass
    pub fn direction_of(&self, region: &Region) -> Direction {
        classify(
            region.bounds,
            self.config.canvas_center(),
            self.compass_rotation,
            self.config.center_threshold,
        )
    }

    /// A person's absolute position: bedroom center + offset
    pub fn person_position(&self, person: &Person) -> Option<Point> {
        let center = self.region(person.bedroom)?.bounds.center();
        Some(Point::new(
            center.x + person.offset_x,
            center.y + person.offset_y,
        ))
    }

    /// Most-recently-added bedroom whose bounds contain the point
    pub fn bedroom_at(&self, point: Point) -> Option<RegionId> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.is_bedroom() && r.bounds.contains(point))
            .map(|r| r.id)
    }

    /// Place a region centered on `at`, or at a random spawn position
    /// when no point is given. Sizes are clamped to the minimum floor.
    pub fn place_region(
        &mut self,
        kind: RegionKind,
        label: impl Into<String>,
        icon: impl Into<String>,
        at: Option<Point>,
        size: Option<(f64, f64)>,
    ) -> RegionId {
        let center = at.unwrap_or_else(|| self.random_spawn_point());
        let (width, height) =
            size.unwrap_or((self.config.default_region_size, self.config.default_region_size));
        let width = width.max(self.config.min_region_size);
        let height = height.max(self.config.min_region_size);

        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.push(Region {
            id,
            kind,
            label: label.into(),
            icon: icon.into(),
            bounds: BoundingBox::new(center.x - width / 2.0, center.y - height / 2.0, width, height),
            rotation: 0.0,
        });
        id
    }

    /// Drop a person at a point. Fails (state untouched) unless a bedroom
    /// contains the point; otherwise retracts any earlier placement of the
    /// same label and stacks the person into the bedroom.
    pub fn place_person(
        &mut self,
        label: impl Into<String>,
        icon: impl Into<String>,
        at: Point,
    ) -> Result<RegionId, PlanError> {
        let label = label.into();
        let bedroom = self
            .bedroom_at(at)
            .ok_or(PlanError::PersonOutsideBedroom)?;

        // A person is a singleton across the layout: re-placing retracts
        // the old entry before the occupancy count is taken.
        self.persons.retain(|p| p.label != label);

        let occupancy = self.persons.iter().filter(|p| p.bedroom == bedroom).count();
        let column_gap = self.config.person_column_gap;
        let offset_x = (occupancy % 2) as f64 * column_gap - column_gap / 2.0;
        let offset_y = (occupancy / 2) as f64 * self.config.person_row_gap;

        self.persons.push(Person {
            label,
            icon: icon.into(),
            bedroom,
            offset_x,
            offset_y,
        });
        Ok(bedroom)
    }

    /// Place a person without a drop point: pick the first bedroom not
    /// already housing them, falling back to the first bedroom.
    pub fn auto_place_person(
        &mut self,
        label: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<RegionId, PlanError> {
        let label = label.into();
        let mut first_bedroom = None;
        let mut target = None;
        for region in self.regions.iter().filter(|r| r.is_bedroom()) {
            if first_bedroom.is_none() {
                first_bedroom = Some(region.id);
            }
            let occupied = self
                .persons
                .iter()
                .any(|p| p.bedroom == region.id && p.label == label);
            if !occupied {
                target = Some(region.id);
                break;
            }
        }
        let target = target
            .or(first_bedroom)
            .ok_or(PlanError::NoBedrooms)?;
        let center = self
            .region(target)
            .expect("target id came from the region list")
            .bounds
            .center();
        self.place_person(label, icon, center)
    }

    /// Delete a region, cascading to every person housed in it
    pub fn delete_region(&mut self, id: RegionId) -> Result<(), PlanError> {
        if self.region(id).is_none() {
            return Err(PlanError::RegionNotFound { id });
        }
        self.persons.retain(|p| p.bedroom != id);
        self.regions.retain(|r| r.id != id);
        Ok(())
    }

    pub fn delete_person(&mut self, label: &str) -> Result<(), PlanError> {
        if self.person(label).is_none() {
            return Err(PlanError::PersonNotFound {
                label: label.to_string(),
            });
        }
        self.persons.retain(|p| p.label != label);
        Ok(())
    }

    /// Remove every region and person and reset the compass
    pub fn clear(&mut self) {
        self.regions.clear();
        self.persons.clear();
        self.compass_rotation = 0.0;
        self.gesture = DragGesture::Idle;
    }

    // ----- drag gestures -----

    /// Begin moving a region; `pointer` is the press position
    pub fn begin_region_move(&mut self, id: RegionId, pointer: Point) -> Result<(), PlanError> {
        let region = self.region(id).ok_or(PlanError::RegionNotFound { id })?;
        self.gesture = DragGesture::MoveRegion {
            id,
            grab_x: pointer.x - region.bounds.x,
            grab_y: pointer.y - region.bounds.y,
        };
        Ok(())
    }

    /// Begin resizing a region from its bottom-right handle
    pub fn begin_region_resize(&mut self, id: RegionId, pointer: Point) -> Result<(), PlanError> {
        let region = self.region(id).ok_or(PlanError::RegionNotFound { id })?;
        self.gesture = DragGesture::ResizeRegion {
            id,
            start: pointer,
            original_width: region.bounds.width,
            original_height: region.bounds.height,
        };
        Ok(())
    }

    /// Begin rotating a region around its center
    pub fn begin_region_rotate(&mut self, id: RegionId) -> Result<(), PlanError> {
        if self.region(id).is_none() {
            return Err(PlanError::RegionNotFound { id });
        }
        self.gesture = DragGesture::RotateRegion { id };
        Ok(())
    }

    /// Begin dragging a person, snapshotting their placement for revert
    pub fn begin_person_drag(&mut self, label: &str) -> Result<(), PlanError> {
        let person = self.person(label).ok_or_else(|| PlanError::PersonNotFound {
            label: label.to_string(),
        })?;
        self.gesture = DragGesture::MovePerson {
            label: label.to_string(),
            snapshot: PersonSnapshot {
                bedroom: person.bedroom,
                offset_x: person.offset_x,
                offset_y: person.offset_y,
            },
        };
        Ok(())
    }

    /// Pointer-move during a drag. A no-op when idle.
    pub fn drag_to(&mut self, pointer: Point) {
        match self.gesture.clone() {
            DragGesture::Idle => {}
            DragGesture::MoveRegion { id, grab_x, grab_y } => {
                if let Some(region) = self.region_mut(id) {
                    region.bounds.x = pointer.x - grab_x;
                    region.bounds.y = pointer.y - grab_y;
                }
            }
            DragGesture::ResizeRegion {
                id,
                start,
                original_width,
                original_height,
            } => {
                let floor = self.config.min_region_size;
                if let Some(region) = self.region_mut(id) {
                    region.bounds.width = (original_width + pointer.x - start.x).max(floor);
                    region.bounds.height = (original_height + pointer.y - start.y).max(floor);
                }
            }
            DragGesture::RotateRegion { id } => {
                if let Some(region) = self.region_mut(id) {
                    let center = region.bounds.center();
                    let angle = (pointer.y - center.y).atan2(pointer.x - center.x);
                    region.rotation = angle + std::f64::consts::FRAC_PI_2;
                }
            }
            DragGesture::MovePerson { label, .. } => {
                let center = self
                    .person(&label)
                    .and_then(|p| self.region(p.bedroom))
                    .map(|r| r.bounds.center());
                if let Some(center) = center {
                    if let Some(person) = self.persons.iter_mut().find(|p| p.label == label) {
                        person.offset_x = pointer.x - center.x;
                        person.offset_y = pointer.y - center.y;
                    }
                }
            }
        }
    }

    /// Release the pointer, finalizing or reverting the gesture.
    ///
    /// The gesture is cleared on every path. Only a person drag can fail:
    /// releasing outside every bedroom restores the snapshot and reports
    /// [`PlanError::DragOutsideBedroom`].
    pub fn release(&mut self) -> Result<(), PlanError> {
        let gesture = std::mem::replace(&mut self.gesture, DragGesture::Idle);
        let DragGesture::MovePerson { label, snapshot } = gesture else {
            return Ok(());
        };

        let Some(position) = self.person(&label).and_then(|p| self.person_position(p)) else {
            return Ok(());
        };
        let current_bedroom = self
            .person(&label)
            .map(|p| p.bedroom)
            .expect("person existed above");

        match self.bedroom_at(position) {
            None => {
                if let Some(person) = self.persons.iter_mut().find(|p| p.label == label) {
                    person.bedroom = snapshot.bedroom;
                    person.offset_x = snapshot.offset_x;
                    person.offset_y = snapshot.offset_y;
                }
                Err(PlanError::DragOutsideBedroom)
            }
            Some(new_bedroom) if new_bedroom != current_bedroom => {
                // Re-parent, preserving the on-screen position at release
                let center = self
                    .region(new_bedroom)
                    .expect("bedroom_at returned a live id")
                    .bounds
                    .center();
                if let Some(person) = self.persons.iter_mut().find(|p| p.label == label) {
                    person.bedroom = new_bedroom;
                    person.offset_x = position.x - center.x;
                    person.offset_y = position.y - center.y;
                }
                Ok(())
            }
            Some(_) => Ok(()),
        }
    }

    fn random_spawn_point(&mut self) -> Point {
        let inset = self.config.spawn_inset;
        let x = inset + self.rng.gen::<f64>() * (self.config.canvas_width - 3.0 * inset);
        let y = inset + self.rng.gen::<f64>() * (self.config.canvas_height - 3.0 * inset);
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_plan() -> FloorPlan {
        FloorPlan::new(PlanConfig::default().with_seed(42))
    }

    fn place_bedroom(plan: &mut FloorPlan, label: &str, center: Point) -> RegionId {
        plan.place_region(
            RegionKind::Bedroom,
            label,
            "🛏",
            Some(center),
            Some((120.0, 120.0)),
        )
    }

    #[test]
    fn test_place_region_centers_on_point() {
        let mut plan = seeded_plan();
        let id = plan.place_region(RegionKind::Room, "客廳", "🛋", Some(Point::new(400.0, 300.0)), None);
        let region = plan.region(id).unwrap();
        assert_eq!(region.bounds, BoundingBox::new(350.0, 250.0, 100.0, 100.0));
    }

    #[test]
    fn test_region_size_clamped_to_floor() {
        let mut plan = seeded_plan();
        let id = plan.place_region(
            RegionKind::Facility,
            "廁所",
            "🚽",
            Some(Point::new(200.0, 200.0)),
            Some((10.0, 10.0)),
        );
        let region = plan.region(id).unwrap();
        assert_eq!(region.bounds.width, 60.0);
        assert_eq!(region.bounds.height, 60.0);
    }

    #[test]
    fn test_random_spawn_stays_within_insets() {
        let mut plan = seeded_plan();
        for _ in 0..50 {
            let id = plan.place_region(RegionKind::Room, "書房", "📚", None, None);
            let center = plan.region(id).unwrap().bounds.center();
            assert!(center.x >= 100.0 && center.x <= 600.0, "x = {}", center.x);
            assert!(center.y >= 100.0 && center.y <= 400.0, "y = {}", center.y);
        }
    }

    #[test]
    fn test_seeded_spawn_is_deterministic() {
        let mut a = seeded_plan();
        let mut b = seeded_plan();
        let ra = a.place_region(RegionKind::Room, "書房", "📚", None, None);
        let rb = b.place_region(RegionKind::Room, "書房", "📚", None, None);
        assert_eq!(a.region(ra).unwrap().bounds, b.region(rb).unwrap().bounds);
    }

    #[test]
    fn test_person_rejected_without_bedroom() {
        let mut plan = seeded_plan();
        plan.place_region(RegionKind::Room, "客廳", "🛋", Some(Point::new(400.0, 300.0)), None);
        let result = plan.place_person("父親", "👨", Point::new(400.0, 300.0));
        assert_eq!(result, Err(PlanError::PersonOutsideBedroom));
        assert!(plan.persons().is_empty());
    }

    #[test]
    fn test_person_lands_in_topmost_bedroom() {
        let mut plan = seeded_plan();
        let below = place_bedroom(&mut plan, "臥室A", Point::new(400.0, 300.0));
        let above = place_bedroom(&mut plan, "臥室B", Point::new(400.0, 300.0));
        let landed = plan.place_person("父親", "👨", Point::new(400.0, 300.0)).unwrap();
        assert_eq!(landed, above);
        assert_ne!(landed, below);
    }

    #[test]
    fn test_person_stacking_offsets() {
        let mut plan = seeded_plan();
        let center = Point::new(400.0, 300.0);
        place_bedroom(&mut plan, "主臥室", center);
        plan.place_person("父親", "👨", center).unwrap();
        plan.place_person("母親", "👩", center).unwrap();
        plan.place_person("長子", "👦", center).unwrap();

        let offsets: Vec<(f64, f64)> = plan
            .persons()
            .iter()
            .map(|p| (p.offset_x, p.offset_y))
            .collect();
        assert_eq!(offsets, vec![(-15.0, 0.0), (15.0, 0.0), (-15.0, 25.0)]);
    }

    #[test]
    fn test_person_is_singleton_across_bedrooms() {
        let mut plan = seeded_plan();
        let a = place_bedroom(&mut plan, "臥室A", Point::new(150.0, 150.0));
        let b = place_bedroom(&mut plan, "臥室B", Point::new(650.0, 450.0));
        plan.place_person("父親", "👨", Point::new(150.0, 150.0)).unwrap();
        plan.place_person("父親", "👨", Point::new(650.0, 450.0)).unwrap();

        let fathers: Vec<_> = plan.persons().iter().filter(|p| p.label == "父親").collect();
        assert_eq!(fathers.len(), 1);
        assert_eq!(fathers[0].bedroom, b);
        assert_ne!(fathers[0].bedroom, a);
    }

    #[test]
    fn test_auto_place_prefers_unoccupied_bedroom() {
        let mut plan = seeded_plan();
        let a = place_bedroom(&mut plan, "臥室A", Point::new(150.0, 150.0));
        let b = place_bedroom(&mut plan, "臥室B", Point::new(650.0, 450.0));
        assert_eq!(plan.auto_place_person("父親", "👨").unwrap(), a);
        // Second auto-placement of the same label skips the bedroom that
        // already houses them
        assert_eq!(plan.auto_place_person("父親", "👨").unwrap(), b);
    }

    #[test]
    fn test_auto_place_without_bedrooms_is_rejected() {
        let mut plan = seeded_plan();
        assert_eq!(
            plan.auto_place_person("父親", "👨"),
            Err(PlanError::NoBedrooms)
        );
    }

    #[test]
    fn test_delete_bedroom_cascades_to_its_persons_only() {
        let mut plan = seeded_plan();
        let a = place_bedroom(&mut plan, "臥室A", Point::new(150.0, 150.0));
        let _b = place_bedroom(&mut plan, "臥室B", Point::new(650.0, 450.0));
        plan.place_person("父親", "👨", Point::new(150.0, 150.0)).unwrap();
        plan.place_person("母親", "👩", Point::new(650.0, 450.0)).unwrap();

        plan.delete_region(a).unwrap();
        assert_eq!(plan.regions().len(), 1);
        assert_eq!(plan.persons().len(), 1);
        assert_eq!(plan.persons()[0].label, "母親");
    }

    #[test]
    fn test_deleting_one_bedroom_does_not_retarget_others() {
        // With index-based identity, deleting region 0 used to shift
        // region 1 into its slot; opaque ids keep references stable.
        let mut plan = seeded_plan();
        let a = place_bedroom(&mut plan, "臥室A", Point::new(150.0, 150.0));
        let b = place_bedroom(&mut plan, "臥室B", Point::new(650.0, 450.0));
        plan.place_person("母親", "👩", Point::new(650.0, 450.0)).unwrap();

        plan.delete_region(a).unwrap();
        assert_eq!(plan.persons()[0].bedroom, b);
        assert!(plan.region(b).is_some());
    }

    #[test]
    fn test_move_gesture_updates_bounds() {
        let mut plan = seeded_plan();
        let id = plan.place_region(RegionKind::Room, "客廳", "🛋", Some(Point::new(400.0, 300.0)), None);
        let origin = Point::new(plan.region(id).unwrap().bounds.x, plan.region(id).unwrap().bounds.y);
        plan.begin_region_move(id, origin).unwrap();
        plan.drag_to(Point::new(100.0, 120.0));
        plan.release().unwrap();
        let bounds = plan.region(id).unwrap().bounds;
        assert_eq!((bounds.x, bounds.y), (100.0, 120.0));
        assert_eq!(plan.gesture(), &DragGesture::Idle);
    }

    #[test]
    fn test_resize_gesture_clamps_to_floor() {
        let mut plan = seeded_plan();
        let id = plan.place_region(RegionKind::Room, "客廳", "🛋", Some(Point::new(400.0, 300.0)), None);
        let corner = Point::new(
            plan.region(id).unwrap().bounds.right(),
            plan.region(id).unwrap().bounds.bottom(),
        );
        plan.begin_region_resize(id, corner).unwrap();
        plan.drag_to(Point::new(corner.x - 90.0, corner.y + 40.0));
        plan.release().unwrap();
        let bounds = plan.region(id).unwrap().bounds;
        assert_eq!(bounds.width, 60.0);
        assert_eq!(bounds.height, 140.0);
    }

    #[test]
    fn test_rotate_gesture_is_cosmetic() {
        let mut plan = seeded_plan();
        let id = plan.place_region(RegionKind::Bedroom, "主臥室", "🛏", Some(Point::new(400.0, 300.0)), None);
        let before = plan.direction_of(plan.region(id).unwrap());
        plan.begin_region_rotate(id).unwrap();
        // Pointer straight right of the center: rotation becomes pi/2
        plan.drag_to(Point::new(500.0, 300.0));
        plan.release().unwrap();
        let region = plan.region(id).unwrap();
        assert!((region.rotation - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        // Containment and classification ignore rotation
        assert_eq!(plan.direction_of(region), before);
        assert!(plan.bedroom_at(Point::new(400.0, 300.0)).is_some());
    }

    #[test]
    fn test_rehome_to_same_bedroom_is_idempotent() {
        let mut plan = seeded_plan();
        let home = place_bedroom(&mut plan, "主臥室", Point::new(400.0, 300.0));
        plan.place_person("父親", "👨", Point::new(400.0, 300.0)).unwrap();
        let before = plan.person("父親").unwrap().clone();
        let position = plan.person_position(&before).unwrap();

        plan.begin_person_drag("父親").unwrap();
        plan.drag_to(position);
        plan.release().unwrap();

        let after = plan.person("父親").unwrap();
        assert_eq!(after.bedroom, home);
        assert_eq!(after, &before);
        assert_eq!(plan.person_position(after).unwrap(), position);
    }

    #[test]
    fn test_rehome_to_other_bedroom_preserves_screen_position() {
        let mut plan = seeded_plan();
        let _a = place_bedroom(&mut plan, "臥室A", Point::new(150.0, 150.0));
        let b = place_bedroom(&mut plan, "臥室B", Point::new(650.0, 450.0));
        plan.place_person("父親", "👨", Point::new(150.0, 150.0)).unwrap();

        let target = Point::new(640.0, 430.0);
        plan.begin_person_drag("父親").unwrap();
        plan.drag_to(target);
        plan.release().unwrap();

        let person = plan.person("父親").unwrap();
        assert_eq!(person.bedroom, b);
        assert_eq!(plan.person_position(person).unwrap(), target);
    }

    #[test]
    fn test_rejected_drag_restores_snapshot_exactly() {
        let mut plan = seeded_plan();
        place_bedroom(&mut plan, "主臥室", Point::new(400.0, 300.0));
        plan.place_person("父親", "👨", Point::new(400.0, 300.0)).unwrap();
        let snapshot = plan.person("父親").unwrap().clone();

        plan.begin_person_drag("父親").unwrap();
        plan.drag_to(Point::new(30.0, 30.0));
        let result = plan.release();

        assert_eq!(result, Err(PlanError::DragOutsideBedroom));
        assert_eq!(plan.person("父親").unwrap(), &snapshot);
        // The gesture is cleared even on the rejection path
        assert_eq!(plan.gesture(), &DragGesture::Idle);
    }

    #[test]
    fn test_release_while_idle_is_noop() {
        let mut plan = seeded_plan();
        assert_eq!(plan.release(), Ok(()));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut plan = seeded_plan();
        place_bedroom(&mut plan, "主臥室", Point::new(400.0, 300.0));
        plan.place_person("父親", "👨", Point::new(400.0, 300.0)).unwrap();
        plan.set_compass_rotation(90.0);
        plan.clear();
        assert!(plan.regions().is_empty());
        assert!(plan.persons().is_empty());
        assert_eq!(plan.compass_rotation(), 0.0);
    }
}
