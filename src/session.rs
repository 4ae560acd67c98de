//! Session replay: turns a parsed script into an edited layout.
//!
//! A script drives either the canvas editor or the directional grid; the
//! first statement decides which, and the two statement families cannot
//! mix within one session. Placement rejections and reverted drags are
//! collected as warnings with the editor's user-facing notice text, never
//! aborting the replay; referencing an unbound name is a hard error.

use std::collections::HashMap;

use thiserror::Error;

use crate::parser::{
    number_modifier, string_modifier, AssignDecl, CellKindWord, DirectionWord, Document,
    GestureDecl, ModifierKey, PersonDecl, RegionDecl, RegionKindWord, Span, Spanned, Statement,
};
use crate::plan::{
    CellAssignment, CellKind, CompassPoint, DirectionalGrid, FloorPlan, PlanConfig, PlanError,
    Point, RegionId, RegionKind,
};
use crate::toolbox::{ItemKind, Toolbox};

/// Hard replay failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Unknown name '{name}'{}", suggestion_text(.suggestions))]
    UnknownName {
        span: Span,
        name: String,
        suggestions: Vec<String>,
    },

    #[error("'{name}' is a person, not a region")]
    NotARegion { span: Span, name: String },

    #[error("'{name}' is a region, not a person")]
    NotAPerson { span: Span, name: String },

    #[error("Cannot mix canvas and grid statements in one session")]
    MixedModes { span: Span },

    #[error("'{statement}' requires a '{key}' modifier")]
    MissingModifier {
        span: Span,
        statement: &'static str,
        key: &'static str,
    },
}

fn suggestion_text(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" - did you mean one of: {}?", suggestions.join(", "))
    }
}

/// A non-fatal replay notice, carrying the editor's toast text
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub span: Span,
    pub message: String,
}

/// Which editor a session ended up driving
#[derive(Debug)]
pub enum Layout {
    Canvas(FloorPlan),
    Grid(DirectionalGrid),
}

/// A fully replayed session
#[derive(Debug)]
pub struct Session {
    pub layout: Layout,
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Clone)]
enum Binding {
    Region(RegionId),
    Person(String),
}

struct Replayer<'a> {
    toolbox: &'a Toolbox,
    config: PlanConfig,
    layout: Option<Layout>,
    bindings: HashMap<String, Binding>,
    warnings: Vec<Warning>,
}

/// Replay a parsed document into a layout
pub fn replay(
    document: &Document,
    toolbox: &Toolbox,
    config: PlanConfig,
) -> Result<Session, SessionError> {
    let mut replayer = Replayer {
        toolbox,
        config,
        layout: None,
        bindings: HashMap::new(),
        warnings: Vec::new(),
    };
    for statement in &document.statements {
        replayer.apply(statement)?;
    }
    let layout = replayer
        .layout
        .unwrap_or_else(|| Layout::Canvas(FloorPlan::new(replayer.config.clone())));
    Ok(Session {
        layout,
        warnings: replayer.warnings,
    })
}

impl Replayer<'_> {
    fn apply(&mut self, statement: &Spanned<Statement>) -> Result<(), SessionError> {
        let span = statement.span.clone();
        match &statement.node {
            Statement::PlaceRegion(decl) => self.place_region(decl, span),
            Statement::PlacePerson(decl) => self.place_person(decl, span),
            Statement::Move(decl) => self.move_region(decl, span),
            Statement::Resize(decl) => self.resize_region(decl, span),
            Statement::Rotate(decl) => self.rotate_region(decl, span),
            Statement::Drag(decl) => self.drag_person(decl, span),
            Statement::Delete(name) => self.delete(name, span),
            Statement::Compass(degrees) => {
                self.canvas(span)?.set_compass_rotation(degrees.node);
                Ok(())
            }
            Statement::ClearAll => {
                match &mut self.layout {
                    Some(Layout::Canvas(plan)) => plan.clear(),
                    Some(Layout::Grid(grid)) => grid.clear(),
                    None => {}
                }
                self.bindings.clear();
                Ok(())
            }
            Statement::ClearCell(direction) => {
                self.grid(span)?.clear_cell(compass_point(direction.node));
                Ok(())
            }
            Statement::Assign(decl) => self.assign(decl, span),
        }
    }

    /// The canvas editor, created on first use; errors if the session is
    /// already a grid session.
    fn canvas(&mut self, span: Span) -> Result<&mut FloorPlan, SessionError> {
        match self.layout {
            None => {
                self.layout = Some(Layout::Canvas(FloorPlan::new(self.config.clone())));
            }
            Some(Layout::Grid(_)) => return Err(SessionError::MixedModes { span }),
            Some(Layout::Canvas(_)) => {}
        }
        match self.layout {
            Some(Layout::Canvas(ref mut plan)) => Ok(plan),
            _ => unreachable!("layout set to canvas above"),
        }
    }

    fn grid(&mut self, span: Span) -> Result<&mut DirectionalGrid, SessionError> {
        match self.layout {
            None => {
                self.layout = Some(Layout::Grid(DirectionalGrid::new()));
            }
            Some(Layout::Canvas(_)) => return Err(SessionError::MixedModes { span }),
            Some(Layout::Grid(_)) => {}
        }
        match self.layout {
            Some(Layout::Grid(ref mut grid)) => Ok(grid),
            _ => unreachable!("layout set to grid above"),
        }
    }

    fn place_region(&mut self, decl: &RegionDecl, span: Span) -> Result<(), SessionError> {
        let name = decl.name.node.as_str();
        let item = self.toolbox.get(name);

        // Explicit kind keyword wins over the catalog entry
        let kind = match decl.kind.node {
            RegionKindWord::Room => RegionKind::Room,
            RegionKindWord::Facility => RegionKind::Facility,
            RegionKindWord::Bedroom => RegionKind::Bedroom,
        };
        let label = string_modifier(&decl.modifiers, &ModifierKey::Label)
            .map(str::to_string)
            .or_else(|| item.map(|i| i.label.clone()))
            .unwrap_or_else(|| name.to_string());
        let icon = string_modifier(&decl.modifiers, &ModifierKey::Icon)
            .map(str::to_string)
            .or_else(|| item.map(|i| i.icon.clone()))
            .unwrap_or_else(|| "🏠".to_string());

        let x = number_modifier(&decl.modifiers, &ModifierKey::X);
        let y = number_modifier(&decl.modifiers, &ModifierKey::Y);
        let at = match (x, y) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        };
        let width = number_modifier(&decl.modifiers, &ModifierKey::Width);
        let height = number_modifier(&decl.modifiers, &ModifierKey::Height);
        let default = self.config.default_region_size;
        let size = match (width, height) {
            (None, None) => None,
            (w, h) => Some((w.unwrap_or(default), h.unwrap_or(default))),
        };

        let plan = self.canvas(span)?;
        let id = plan.place_region(kind, label, icon, at, size);
        self.bindings.insert(name.to_string(), Binding::Region(id));
        Ok(())
    }

    fn place_person(&mut self, decl: &PersonDecl, span: Span) -> Result<(), SessionError> {
        let name = decl.name.node.as_str();
        let item = self
            .toolbox
            .get(name)
            .filter(|i| i.kind == ItemKind::Person);
        let label = string_modifier(&decl.modifiers, &ModifierKey::Label)
            .map(str::to_string)
            .or_else(|| item.map(|i| i.label.clone()))
            .unwrap_or_else(|| name.to_string());
        let icon = string_modifier(&decl.modifiers, &ModifierKey::Icon)
            .map(str::to_string)
            .or_else(|| item.map(|i| i.icon.clone()))
            .unwrap_or_else(|| "🧑".to_string());

        let x = number_modifier(&decl.modifiers, &ModifierKey::X);
        let y = number_modifier(&decl.modifiers, &ModifierKey::Y);

        let plan = self.canvas(span.clone())?;
        let result = match (x, y) {
            (Some(x), Some(y)) => plan.place_person(label.clone(), icon, Point::new(x, y)),
            _ => plan.auto_place_person(label.clone(), icon),
        };
        match result {
            Ok(_) => {
                self.bindings.insert(name.to_string(), Binding::Person(label));
                Ok(())
            }
            Err(err) => {
                self.warn(span, &err);
                Ok(())
            }
        }
    }

    fn resolve_region(&self, name: &Spanned<crate::parser::Identifier>) -> Result<RegionId, SessionError> {
        match self.bindings.get(name.node.as_str()) {
            Some(Binding::Region(id)) => Ok(*id),
            Some(Binding::Person(_)) => Err(SessionError::NotARegion {
                span: name.span.clone(),
                name: name.node.as_str().to_string(),
            }),
            None => Err(self.unknown(name)),
        }
    }

    fn resolve_person(&self, name: &Spanned<crate::parser::Identifier>) -> Result<String, SessionError> {
        match self.bindings.get(name.node.as_str()) {
            Some(Binding::Person(label)) => Ok(label.clone()),
            Some(Binding::Region(_)) => Err(SessionError::NotAPerson {
                span: name.span.clone(),
                name: name.node.as_str().to_string(),
            }),
            None => Err(self.unknown(name)),
        }
    }

    fn unknown(&self, name: &Spanned<crate::parser::Identifier>) -> SessionError {
        let target = name.node.as_str();
        // Bound names plus catalog names; a typo is as likely to be a
        // mistyped catalog item as a mistyped binding.
        let candidates = self
            .bindings
            .keys()
            .map(String::as_str)
            .chain(self.toolbox.names());
        SessionError::UnknownName {
            span: name.span.clone(),
            name: target.to_string(),
            suggestions: find_similar(candidates, target, 2),
        }
    }

    fn require(
        modifiers: &[Spanned<crate::parser::Modifier>],
        key: ModifierKey,
        statement: &'static str,
        key_name: &'static str,
        span: &Span,
    ) -> Result<f64, SessionError> {
        number_modifier(modifiers, &key).ok_or_else(|| SessionError::MissingModifier {
            span: span.clone(),
            statement,
            key: key_name,
        })
    }

    fn move_region(&mut self, decl: &GestureDecl, span: Span) -> Result<(), SessionError> {
        let id = self.resolve_region(&decl.name)?;
        let x = Self::require(&decl.modifiers, ModifierKey::X, "move", "x", &span)?;
        let y = Self::require(&decl.modifiers, ModifierKey::Y, "move", "y", &span)?;
        let plan = self.canvas(span)?;
        let Some(region) = plan.region(id) else {
            return Ok(());
        };
        let origin = Point::new(region.bounds.x, region.bounds.y);
        // Grab at the region origin so the drop point becomes the new origin
        if plan.begin_region_move(id, origin).is_ok() {
            plan.drag_to(Point::new(x, y));
            let _ = plan.release();
        }
        Ok(())
    }

    fn resize_region(&mut self, decl: &GestureDecl, span: Span) -> Result<(), SessionError> {
        let id = self.resolve_region(&decl.name)?;
        let width = Self::require(&decl.modifiers, ModifierKey::Width, "resize", "width", &span)?;
        let height =
            Self::require(&decl.modifiers, ModifierKey::Height, "resize", "height", &span)?;
        let plan = self.canvas(span)?;
        let Some(region) = plan.region(id) else {
            return Ok(());
        };
        let corner = Point::new(region.bounds.right(), region.bounds.bottom());
        let origin = Point::new(region.bounds.x, region.bounds.y);
        // Drag the corner handle to where the requested size puts it
        if plan.begin_region_resize(id, corner).is_ok() {
            plan.drag_to(Point::new(origin.x + width, origin.y + height));
            let _ = plan.release();
        }
        Ok(())
    }

    fn rotate_region(&mut self, decl: &GestureDecl, span: Span) -> Result<(), SessionError> {
        let id = self.resolve_region(&decl.name)?;
        let degrees =
            Self::require(&decl.modifiers, ModifierKey::Angle, "rotate", "angle", &span)?;
        let plan = self.canvas(span)?;
        let Some(region) = plan.region(id) else {
            return Ok(());
        };
        // The rotate gesture reads rotation = pointer angle + pi/2, so put
        // the pointer where the requested angle lands.
        let theta = degrees.to_radians() - std::f64::consts::FRAC_PI_2;
        let center = region.bounds.center();
        let pointer = Point::new(center.x + 20.0 * theta.cos(), center.y + 20.0 * theta.sin());
        if plan.begin_region_rotate(id).is_ok() {
            plan.drag_to(pointer);
            let _ = plan.release();
        }
        Ok(())
    }

    fn drag_person(&mut self, decl: &GestureDecl, span: Span) -> Result<(), SessionError> {
        let label = self.resolve_person(&decl.name)?;
        let x = Self::require(&decl.modifiers, ModifierKey::X, "drag", "x", &span)?;
        let y = Self::require(&decl.modifiers, ModifierKey::Y, "drag", "y", &span)?;
        let plan = self.canvas(span.clone())?;
        if plan.begin_person_drag(&label).is_ok() {
            plan.drag_to(Point::new(x, y));
            if let Err(err) = plan.release() {
                self.warn(span, &err);
            }
        }
        Ok(())
    }

    fn delete(
        &mut self,
        name: &Spanned<crate::parser::Identifier>,
        span: Span,
    ) -> Result<(), SessionError> {
        let binding = self
            .bindings
            .get(name.node.as_str())
            .cloned()
            .ok_or_else(|| self.unknown(name))?;
        match binding {
            Binding::Region(id) => {
                let plan = self.canvas(span)?;
                let _ = plan.delete_region(id);
                // Cascade took persons with it; drop their bindings too
                let surviving: Vec<String> =
                    plan.persons().iter().map(|p| p.label.clone()).collect();
                self.bindings.retain(|_, b| match b {
                    Binding::Region(r) => *r != id,
                    Binding::Person(label) => surviving.contains(label),
                });
            }
            Binding::Person(label) => {
                let _ = self.canvas(span)?.delete_person(&label);
                self.bindings.remove(name.node.as_str());
            }
        }
        Ok(())
    }

    fn assign(&mut self, decl: &AssignDecl, span: Span) -> Result<(), SessionError> {
        let kind = match decl.kind.node {
            CellKindWord::Member => CellKind::Member,
            CellKindWord::Room => CellKind::Room,
            CellKindWord::Office => CellKind::Office,
        };
        let icon = string_modifier(&decl.modifiers, &ModifierKey::Icon).map(str::to_string);
        let grid = self.grid(span)?;
        grid.assign(
            compass_point(decl.direction.node),
            CellAssignment {
                kind,
                label: decl.label.node.clone(),
                icon,
            },
        );
        Ok(())
    }

    fn warn(&mut self, span: Span, error: &PlanError) {
        self.warnings.push(Warning {
            span,
            message: error.to_string(),
        });
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0usize; b_chars.len() + 1];

    for (i, ca) in a_chars.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            current[j + 1] = (prev[j + 1] + 1)
                .min(current[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b_chars.len()]
}

/// Find similar names within a maximum edit distance, closest first
fn find_similar<'a>(
    candidates: impl Iterator<Item = &'a str>,
    target: &str,
    max_distance: usize,
) -> Vec<String> {
    let mut scored: Vec<(usize, String)> = candidates
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            if dist > 0 && dist <= max_distance {
                Some((dist, name.to_string()))
            } else {
                None
            }
        })
        .collect();

    // A name can appear both bound and in the catalog
    scored.sort();
    scored.dedup();
    scored.into_iter().map(|(_, name)| name).take(3).collect()
}

fn compass_point(word: DirectionWord) -> CompassPoint {
    match word {
        DirectionWord::East => CompassPoint::East,
        DirectionWord::Northeast => CompassPoint::Northeast,
        DirectionWord::North => CompassPoint::North,
        DirectionWord::Northwest => CompassPoint::Northwest,
        DirectionWord::West => CompassPoint::West,
        DirectionWord::Southwest => CompassPoint::Southwest,
        DirectionWord::South => CompassPoint::South,
        DirectionWord::Southeast => CompassPoint::Southeast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn replay_source(source: &str) -> Result<Session, SessionError> {
        let document = parse(source).expect("script should parse");
        replay(&document, &Toolbox::default(), PlanConfig::default().with_seed(1))
    }

    fn canvas(session: &Session) -> &FloorPlan {
        match &session.layout {
            Layout::Canvas(plan) => plan,
            Layout::Grid(_) => panic!("expected a canvas session"),
        }
    }

    fn grid(session: &Session) -> &DirectionalGrid {
        match &session.layout {
            Layout::Grid(grid) => grid,
            Layout::Canvas(_) => panic!("expected a grid session"),
        }
    }

    #[test]
    fn test_region_placement_resolves_toolbox_item() {
        let session = replay_source("room kitchen [x: 200, y: 150]").unwrap();
        let plan = canvas(&session);
        assert_eq!(plan.regions().len(), 1);
        let region = &plan.regions()[0];
        assert_eq!(region.label, "廚房");
        assert_eq!(region.icon, "🍳");
        assert_eq!(region.bounds.center(), Point::new(200.0, 150.0));
    }

    #[test]
    fn test_explicit_modifiers_beat_catalog() {
        let session =
            replay_source(r#"room kitchen [label: "小廚房", icon: "🔥", x: 200, y: 150]"#).unwrap();
        let region = &canvas(&session).regions()[0];
        assert_eq!(region.label, "小廚房");
        assert_eq!(region.icon, "🔥");
    }

    #[test]
    fn test_unknown_item_uses_identifier_as_label() {
        let session = replay_source("room attic [x: 200, y: 150]").unwrap();
        assert_eq!(canvas(&session).regions()[0].label, "attic");
    }

    #[test]
    fn test_person_placement_and_rejection_warning() {
        let session = replay_source(
            "bedroom master-bedroom [x: 400, y: 100]\n\
             person father [x: 400, y: 100]\n\
             person mother [x: 50, y: 550]",
        )
        .unwrap();
        let plan = canvas(&session);
        assert_eq!(plan.persons().len(), 1);
        assert_eq!(plan.persons()[0].label, "父親");
        assert_eq!(session.warnings.len(), 1);
        assert_eq!(session.warnings[0].message, "⚠️ 家人只能放入臥室！");
    }

    #[test]
    fn test_person_without_coordinates_auto_places() {
        let session = replay_source(
            "bedroom master-bedroom [x: 400, y: 100]\n\
             person father",
        )
        .unwrap();
        let plan = canvas(&session);
        assert_eq!(plan.persons().len(), 1);
        assert!(session.warnings.is_empty());
    }

    #[test]
    fn test_person_without_bedrooms_warns() {
        let session = replay_source("room kitchen [x: 200, y: 150]\nperson father").unwrap();
        assert!(canvas(&session).persons().is_empty());
        assert_eq!(session.warnings[0].message, "請先放置臥室！");
    }

    #[test]
    fn test_move_and_resize_gestures() {
        let session = replay_source(
            "room kitchen [x: 200, y: 150]\n\
             move kitchen [x: 100, y: 80]\n\
             resize kitchen [width: 160, height: 40]",
        )
        .unwrap();
        let bounds = canvas(&session).regions()[0].bounds;
        assert_eq!((bounds.x, bounds.y), (100.0, 80.0));
        assert_eq!(bounds.width, 160.0);
        // Height clamps to the minimum floor
        assert_eq!(bounds.height, 60.0);
    }

    #[test]
    fn test_rotate_gesture_sets_angle() {
        let session = replay_source(
            "room kitchen [x: 200, y: 150]\n\
             rotate kitchen [angle: 90]",
        )
        .unwrap();
        let rotation = canvas(&session).regions()[0].rotation;
        assert!((rotation - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_drag_outside_bedroom_reverts_with_warning() {
        let session = replay_source(
            "bedroom master-bedroom [x: 400, y: 100]\n\
             person father [x: 400, y: 100]\n\
             drag father [x: 30, y: 550]",
        )
        .unwrap();
        let plan = canvas(&session);
        let person = plan.person("父親").unwrap();
        // Reverted to the stacked position inside the bedroom
        assert_eq!((person.offset_x, person.offset_y), (-15.0, 0.0));
        assert_eq!(session.warnings[0].message, "⚠️ 家人必須在臥室內！");
    }

    #[test]
    fn test_drag_between_bedrooms_rehomes() {
        let session = replay_source(
            "bedroom master-bedroom [x: 150, y: 150]\n\
             bedroom bedroom-2 [x: 650, y: 450]\n\
             person father [x: 150, y: 150]\n\
             drag father [x: 650, y: 450]",
        )
        .unwrap();
        let plan = canvas(&session);
        let person = plan.person("父親").unwrap();
        let second = plan.regions()[1].id;
        assert_eq!(person.bedroom, second);
    }

    #[test]
    fn test_delete_region_cascades_bindings() {
        let session = replay_source(
            "bedroom master-bedroom [x: 400, y: 100]\n\
             person father [x: 400, y: 100]\n\
             delete master-bedroom",
        )
        .unwrap();
        let plan = canvas(&session);
        assert!(plan.regions().is_empty());
        assert!(plan.persons().is_empty());
    }

    #[test]
    fn test_unknown_name_is_hard_error() {
        let err = replay_source("move pantry [x: 10, y: 10]").unwrap_err();
        assert!(matches!(err, SessionError::UnknownName { ref name, .. } if name == "pantry"));
    }

    #[test]
    fn test_unknown_name_suggests_bound_names() {
        let err = replay_source(
            "room kitchen [x: 200, y: 150]\n\
             move kitchn [x: 10, y: 10]",
        )
        .unwrap_err();
        match err {
            SessionError::UnknownName { suggestions, .. } => {
                assert_eq!(suggestions, vec!["kitchen".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_suggestions_filter_unrelated_names_by_edit_distance() {
        let err = replay_source(
            "room balcony [x: 100, y: 100]\n\
             room study [x: 250, y: 100]\n\
             room toilet [x: 400, y: 100]\n\
             room kitchen [x: 550, y: 100]\n\
             move kitchn [x: 10, y: 10]",
        )
        .unwrap_err();
        match err {
            SessionError::UnknownName { suggestions, .. } => {
                // Only the close match survives; the other bound names are
                // far beyond the edit-distance cutoff.
                assert_eq!(suggestions, vec!["kitchen".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_suggestions_include_catalog_names() {
        let err = replay_source("move kitchn [x: 10, y: 10]").unwrap_err();
        match err {
            SessionError::UnknownName { suggestions, .. } => {
                assert_eq!(suggestions, vec!["kitchen".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_suggestions_for_distant_names() {
        let err = replay_source("delete aquarium").unwrap_err();
        match err {
            SessionError::UnknownName { suggestions, .. } => {
                assert!(suggestions.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_gesture_on_person_name_is_kind_error() {
        let err = replay_source(
            "bedroom master-bedroom [x: 400, y: 100]\n\
             person father [x: 400, y: 100]\n\
             resize father [width: 100, height: 100]",
        )
        .unwrap_err();
        assert!(matches!(err, SessionError::NotARegion { ref name, .. } if name == "father"));
    }

    #[test]
    fn test_missing_modifier_is_hard_error() {
        let err = replay_source(
            "room kitchen [x: 200, y: 150]\n\
             move kitchen [x: 10]",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SessionError::MissingModifier { statement: "move", key: "y", .. }
        ));
    }

    #[test]
    fn test_compass_statement() {
        let session = replay_source("compass 90\nroom kitchen [x: 200, y: 150]").unwrap();
        assert_eq!(canvas(&session).compass_rotation(), 90.0);
    }

    #[test]
    fn test_grid_session() {
        let session = replay_source(
            r#"assign north member "父親" [icon: "👨"]
assign southwest room "廚房"
clear north"#,
        )
        .unwrap();
        let grid = grid(&session);
        assert!(grid.get(CompassPoint::North).is_none());
        assert_eq!(grid.get(CompassPoint::Southwest).unwrap().label, "廚房");
    }

    #[test]
    fn test_mixed_modes_is_hard_error() {
        let err = replay_source(
            r#"room kitchen [x: 200, y: 150]
assign north member "父親""#,
        )
        .unwrap_err();
        assert!(matches!(err, SessionError::MixedModes { .. }));
    }

    #[test]
    fn test_clear_resets_canvas_and_bindings() {
        let err = replay_source(
            "room kitchen [x: 200, y: 150]\n\
             clear\n\
             move kitchen [x: 10, y: 10]",
        )
        .unwrap_err();
        assert!(matches!(err, SessionError::UnknownName { .. }));
    }

    #[test]
    fn test_empty_script_is_empty_canvas() {
        let session = replay_source("").unwrap();
        assert!(canvas(&session).regions().is_empty());
    }
}
