//! Toolbox catalog: named placeable items with a kind, label, and icon.
//!
//! Session scripts refer to items by identifier; the catalog supplies the
//! display label and icon glyph, and the kind when the statement does not
//! declare one. A built-in catalog covers the standard household items and
//! family members; a TOML file can replace it.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::plan::is_bedroom_label;

/// Errors that can occur when loading or parsing a toolbox catalog
#[derive(Error, Debug)]
pub enum ToolboxError {
    #[error("Failed to read toolbox file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse toolbox TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown item kind '{kind}' for toolbox item '{item}'")]
    UnknownKind { item: String, kind: String },
}

/// What a toolbox item places
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Room,
    Facility,
    Bedroom,
    Person,
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct ToolboxItem {
    pub kind: ItemKind,
    pub label: String,
    pub icon: String,
}

/// The item catalog, keyed by script identifier
#[derive(Debug, Clone)]
pub struct Toolbox {
    items: HashMap<String, ToolboxItem>,
}

/// TOML structure for deserializing catalogs
#[derive(Deserialize)]
struct TomlToolbox {
    items: HashMap<String, TomlItem>,
}

#[derive(Deserialize)]
struct TomlItem {
    kind: Option<String>,
    label: String,
    icon: String,
}

/// Built-in catalog mirroring the stock editor palette
const DEFAULT_CATALOG: &str = r#"
# Rooms
[items.living-room]
kind = "room"
label = "客廳"
icon = "🛋️"

[items.kitchen]
kind = "facility"
label = "廚房"
icon = "🍳"

[items.toilet]
kind = "facility"
label = "廁所"
icon = "🚽"

[items.bathroom]
kind = "facility"
label = "浴室"
icon = "🛁"

[items.study]
kind = "room"
label = "書房"
icon = "📚"

[items.dining-room]
kind = "room"
label = "餐廳"
icon = "🍽️"

[items.balcony]
kind = "room"
label = "陽台"
icon = "🌿"

[items.entrance]
kind = "room"
label = "大門"
icon = "🚪"

# Bedrooms
[items.master-bedroom]
kind = "bedroom"
label = "主臥室"
icon = "🛏️"

[items.bedroom-2]
kind = "bedroom"
label = "臥室2"
icon = "🛏️"

[items.bedroom-3]
kind = "bedroom"
label = "臥室3"
icon = "🛏️"

[items.kids-bedroom]
kind = "bedroom"
label = "兒童臥室"
icon = "🧸"

# Family members
[items.father]
kind = "person"
label = "父親"
icon = "👨"

[items.mother]
kind = "person"
label = "母親"
icon = "👩"

[items.eldest-son]
kind = "person"
label = "長子"
icon = "👦"

[items.eldest-daughter]
kind = "person"
label = "長女"
icon = "👧"

[items.middle-son]
kind = "person"
label = "次子"
icon = "🧒"

[items.middle-daughter]
kind = "person"
label = "次女"
icon = "🧒"

[items.youngest-son]
kind = "person"
label = "幼子"
icon = "👶"

[items.youngest-daughter]
kind = "person"
label = "幼女"
icon = "👶"
"#;

impl Toolbox {
    /// Load a catalog from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ToolboxError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a catalog from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ToolboxError> {
        let parsed: TomlToolbox = toml::from_str(content)?;
        let mut items = HashMap::new();
        for (name, item) in parsed.items {
            let kind = match item.kind.as_deref() {
                Some("room") => ItemKind::Room,
                Some("facility") => ItemKind::Facility,
                Some("bedroom") => ItemKind::Bedroom,
                Some("person") => ItemKind::Person,
                Some(other) => {
                    return Err(ToolboxError::UnknownKind {
                        item: name,
                        kind: other.to_string(),
                    })
                }
                // No declared kind: infer bedroom from the label marker,
                // otherwise treat as a plain room.
                None if is_bedroom_label(&item.label) => ItemKind::Bedroom,
                None => ItemKind::Room,
            };
            items.insert(
                name,
                ToolboxItem {
                    kind,
                    label: item.label,
                    icon: item.icon,
                },
            );
        }
        Ok(Toolbox { items })
    }

    pub fn get(&self, name: &str) -> Option<&ToolboxItem> {
        self.items.get(name)
    }

    /// Item names, for unknown-identifier suggestions
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Toolbox {
    fn default() -> Self {
        Self::from_str(DEFAULT_CATALOG).expect("Built-in catalog should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let toolbox = Toolbox::default();
        assert_eq!(
            toolbox.get("kitchen"),
            Some(&ToolboxItem {
                kind: ItemKind::Facility,
                label: "廚房".to_string(),
                icon: "🍳".to_string(),
            })
        );
        assert_eq!(toolbox.get("master-bedroom").unwrap().kind, ItemKind::Bedroom);
        assert_eq!(toolbox.get("father").unwrap().kind, ItemKind::Person);
        assert_eq!(toolbox.get("nonexistent"), None);
    }

    #[test]
    fn test_kind_inferred_from_bedroom_label() {
        let toml_str = r#"
[items.spare]
label = "客房臥室"
icon = "🛏️"

[items.pantry]
label = "儲藏室"
icon = "📦"
"#;
        let toolbox = Toolbox::from_str(toml_str).expect("Should parse");
        assert_eq!(toolbox.get("spare").unwrap().kind, ItemKind::Bedroom);
        assert_eq!(toolbox.get("pantry").unwrap().kind, ItemKind::Room);
    }

    #[test]
    fn test_unknown_kind_error() {
        let toml_str = r#"
[items.thing]
kind = "garage"
label = "車庫"
icon = "🚗"
"#;
        let result = Toolbox::from_str(toml_str);
        assert!(matches!(
            result,
            Err(ToolboxError::UnknownKind { item, kind }) if item == "thing" && kind == "garage"
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(Toolbox::from_str("not toml {{{{").is_err());
    }
}
