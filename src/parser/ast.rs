//! Abstract Syntax Tree types for the floor-plan session script

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Valid identifier (alphanumeric + underscore, starts with letter/_)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Root AST node - a complete editing session
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub statements: Vec<Spanned<Statement>>,
}

/// Top-level statement in a session script
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Region placement: `room kitchen [label: "廚房", x: 420, y: 180]`
    PlaceRegion(RegionDecl),
    /// Person placement: `person dad [x: 400, y: 100]`
    PlacePerson(PersonDecl),
    /// Region move gesture: `move kitchen [x: 120, y: 80]`
    Move(GestureDecl),
    /// Region resize gesture: `resize kitchen [width: 160, height: 120]`
    Resize(GestureDecl),
    /// Region rotate gesture: `rotate kitchen [angle: 45]`
    Rotate(GestureDecl),
    /// Person drag gesture: `drag dad [x: 500, y: 260]`
    Drag(GestureDecl),
    /// Delete a region (cascading) or a person: `delete kitchen`
    Delete(Spanned<Identifier>),
    /// Set compass rotation in degrees: `compass 45` / `compass -30`
    Compass(Spanned<f64>),
    /// Reset the whole layout: `clear`
    ClearAll,
    /// Clear one grid cell: `clear north`
    ClearCell(Spanned<DirectionWord>),
    /// Grid cell assignment: `assign north member "父親" [icon: "👨"]`
    Assign(AssignDecl),
}

/// Region placement declaration
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDecl {
    pub kind: Spanned<RegionKindWord>,
    pub name: Spanned<Identifier>,
    pub modifiers: Vec<Spanned<Modifier>>,
}

/// Region kind keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKindWord {
    Room,
    Facility,
    Bedroom,
}

/// Person placement declaration
#[derive(Debug, Clone, PartialEq)]
pub struct PersonDecl {
    pub name: Spanned<Identifier>,
    pub modifiers: Vec<Spanned<Modifier>>,
}

/// A gesture applied to an existing entity (move/resize/rotate/drag)
#[derive(Debug, Clone, PartialEq)]
pub struct GestureDecl {
    pub name: Spanned<Identifier>,
    pub modifiers: Vec<Spanned<Modifier>>,
}

/// Grid cell assignment declaration
#[derive(Debug, Clone, PartialEq)]
pub struct AssignDecl {
    pub direction: Spanned<DirectionWord>,
    pub kind: Spanned<CellKindWord>,
    pub label: Spanned<String>,
    pub modifiers: Vec<Spanned<Modifier>>,
}

/// Grid cell kind keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKindWord {
    Member,
    Room,
    Office,
}

/// Compass direction keyword (the eight grid cells)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionWord {
    East,
    Northeast,
    North,
    Northwest,
    West,
    Southwest,
    South,
    Southeast,
}

/// Key-value modifier inside a `[...]` block
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub key: Spanned<ModifierKey>,
    pub value: Spanned<ModifierValue>,
}

/// Known modifier keys (extensible)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifierKey {
    Label,
    Icon,
    X,
    Y,
    Width,
    Height,
    /// Rotation angle in degrees for `rotate` gestures
    Angle,
    Custom(String),
}

impl ModifierKey {
    pub fn as_str(&self) -> &str {
        match self {
            ModifierKey::Label => "label",
            ModifierKey::Icon => "icon",
            ModifierKey::X => "x",
            ModifierKey::Y => "y",
            ModifierKey::Width => "width",
            ModifierKey::Height => "height",
            ModifierKey::Angle => "angle",
            ModifierKey::Custom(s) => s.as_str(),
        }
    }
}

/// Modifier values
#[derive(Debug, Clone, PartialEq)]
pub enum ModifierValue {
    Number(f64),
    String(String),
}

/// Look up a numeric modifier by key
pub fn number_modifier(modifiers: &[Spanned<Modifier>], key: &ModifierKey) -> Option<f64> {
    modifiers.iter().find_map(|m| {
        if m.node.key.node == *key {
            if let ModifierValue::Number(n) = m.node.value.node {
                return Some(n);
            }
        }
        None
    })
}

/// Look up a string modifier by key
pub fn string_modifier<'a>(
    modifiers: &'a [Spanned<Modifier>],
    key: &ModifierKey,
) -> Option<&'a str> {
    modifiers.iter().find_map(|m| {
        if m.node.key.node == *key {
            if let ModifierValue::String(s) = &m.node.value.node {
                return Some(s.as_str());
            }
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier(key: ModifierKey, value: ModifierValue) -> Spanned<Modifier> {
        Spanned::new(
            Modifier {
                key: Spanned::new(key, 0..0),
                value: Spanned::new(value, 0..0),
            },
            0..0,
        )
    }

    #[test]
    fn test_number_modifier_lookup() {
        let mods = vec![
            modifier(ModifierKey::X, ModifierValue::Number(420.0)),
            modifier(ModifierKey::Y, ModifierValue::Number(180.0)),
        ];
        assert_eq!(number_modifier(&mods, &ModifierKey::X), Some(420.0));
        assert_eq!(number_modifier(&mods, &ModifierKey::Width), None);
    }

    #[test]
    fn test_string_modifier_lookup() {
        let mods = vec![modifier(
            ModifierKey::Label,
            ModifierValue::String("廚房".to_string()),
        )];
        assert_eq!(string_modifier(&mods, &ModifierKey::Label), Some("廚房"));
        assert_eq!(string_modifier(&mods, &ModifierKey::Icon), None);
    }

    #[test]
    fn test_mismatched_value_type_is_ignored() {
        let mods = vec![modifier(
            ModifierKey::X,
            ModifierValue::String("not a number".to_string()),
        )];
        assert_eq!(number_modifier(&mods, &ModifierKey::X), None);
    }
}
