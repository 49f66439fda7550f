//! The layout module entity and the inputs used to create and edit it.
//!
//! A *module* is one rectangle on the designer grid.  Its layout-relevant
//! fields are the desktop span (`col`), the row span (`row`), an optional
//! manual mobile span (`mobile_col`) and an optional group tag.  Appearance
//! fields ride along for the renderer and code exporter but never influence
//! ordering or span derivation.
//!
//! # Clamping, not rejecting
//!
//! Numeric input arrives from free-form number fields, so it can be anything.
//! Every numeric value is clamped into its valid range at the point of entry
//! ([`Module::from_spec`] and [`Module::apply`]); nothing here returns an error.

use serde::{Deserialize, Serialize};

use super::config::{clamp_u32, GridConfig};
use super::ids::ModuleId;

/// Largest row span a module may have.
pub const MAX_ROW_SPAN: u32 = 99;
/// Largest outline width, in pixels.
pub const MAX_BORDER_WIDTH: u32 = 20;

pub const DEFAULT_COLOR: &str = "#8c6c3c";
pub const DEFAULT_BORDER_COLOR: &str = "#000000";

/// What a module displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// A solid (or transparent) colored block.
    #[default]
    Box,
    /// A block of placeholder paragraph text.
    Text,
    /// A placeholder image.
    Image,
}

impl ModuleKind {
    /// Lowercase name used in generated class names (`type-box`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleKind::Box => "box",
            ModuleKind::Text => "text",
            ModuleKind::Image => "image",
        }
    }
}

/// Visual attributes with no effect on layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub color: String,
    pub transparent: bool,
    pub border_color: String,
    pub border_width: u32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            transparent: false,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            border_width: 0,
        }
    }
}

/// Raw, unvalidated input for creating a module.
///
/// Numeric fields are signed so that whatever a number field produced can be
/// passed through and clamped by [`Module::from_spec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleSpec {
    pub col: i64,
    pub row: i64,
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    pub color: String,
    pub transparent: bool,
    pub border_color: String,
    pub border_width: i64,
}

impl Default for ModuleSpec {
    fn default() -> Self {
        Self {
            col: 2,
            row: 2,
            kind: ModuleKind::Box,
            color: DEFAULT_COLOR.to_string(),
            transparent: false,
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            border_width: 0,
        }
    }
}

impl ModuleSpec {
    /// Convenience constructor for a box with the given spans.
    pub fn sized(col: i64, row: i64) -> Self {
        Self {
            col,
            row,
            ..Self::default()
        }
    }
}

/// A single-field edit to an existing module.
///
/// One variant per editable field mirrors how the edit panel works: each
/// control changes exactly one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ModuleEdit {
    Col(i64),
    Row(i64),
    /// `None` clears the manual override and returns to automatic derivation.
    MobileCol(Option<i64>),
    Kind(ModuleKind),
    /// Trimmed; an empty string means "no group".
    GroupId(Option<String>),
    Color(String),
    Transparent(bool),
    BorderColor(String),
    BorderWidth(i64),
}

/// One placeable layout unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub(crate) id: ModuleId,
    pub(crate) col: u32,
    pub(crate) row: u32,
    pub(crate) mobile_col: Option<u32>,
    #[serde(rename = "type")]
    pub(crate) kind: ModuleKind,
    pub(crate) group_id: Option<String>,
    pub(crate) appearance: Appearance,
}

impl Module {
    /// Builds a module from raw input, clamping every numeric field.
    pub fn from_spec(id: ModuleId, spec: ModuleSpec, config: &GridConfig) -> Self {
        Self {
            id,
            col: clamp_u32(spec.col, 1, config.desktop_columns()),
            row: clamp_u32(spec.row, 1, MAX_ROW_SPAN),
            mobile_col: None,
            kind: spec.kind,
            group_id: None,
            appearance: Appearance {
                color: spec.color,
                transparent: spec.transparent,
                border_color: spec.border_color,
                border_width: clamp_u32(spec.border_width, 0, MAX_BORDER_WIDTH),
            },
        }
    }

    /// Applies one field edit using the same clamping rules as creation.
    ///
    /// Editing `col` leaves `mobile_col` untouched: the two spans stay
    /// independent until the override is cleared.
    pub fn apply(&mut self, edit: ModuleEdit, config: &GridConfig) {
        match edit {
            ModuleEdit::Col(col) => self.col = clamp_u32(col, 1, config.desktop_columns()),
            ModuleEdit::Row(row) => self.row = clamp_u32(row, 1, MAX_ROW_SPAN),
            ModuleEdit::MobileCol(value) => {
                self.mobile_col = value.map(|v| clamp_u32(v, 1, config.target_columns()));
            }
            ModuleEdit::Kind(kind) => self.kind = kind,
            ModuleEdit::GroupId(group) => self.group_id = normalize_group(group),
            ModuleEdit::Color(color) => self.appearance.color = color,
            ModuleEdit::Transparent(flag) => self.appearance.transparent = flag,
            ModuleEdit::BorderColor(color) => self.appearance.border_color = color,
            ModuleEdit::BorderWidth(width) => {
                self.appearance.border_width = clamp_u32(width, 0, MAX_BORDER_WIDTH);
            }
        }
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    /// Stored desktop span.  May exceed the current desktop column count if
    /// the grid shrank after it was set; use [`crate::domain::span::desktop_span`]
    /// for the effective value.
    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    /// Manual mobile span, if one has been set.
    pub fn mobile_col(&self) -> Option<u32> {
        self.mobile_col
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Returns `true` if `self` and `other` carry the same non-empty group tag.
    pub fn shares_group_with(&self, other: &Module) -> bool {
        matches!((&self.group_id, &other.group_id), (Some(a), Some(b)) if a == b)
    }
}

/// Trims a group tag and maps the empty string to "no group".
fn normalize_group(group: Option<String>) -> Option<String> {
    group
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GridConfig {
        GridConfig::new(6, 2)
    }

    fn module(col: i64, row: i64) -> Module {
        Module::from_spec(ModuleId::new(1), ModuleSpec::sized(col, row), &cfg())
    }

    // ── from_spec ─────────────────────────────────────────────────────────────

    #[test]
    fn test_from_spec_keeps_in_range_values() {
        let m = module(3, 2);
        assert_eq!(m.col(), 3);
        assert_eq!(m.row(), 2);
        assert_eq!(m.mobile_col(), None);
        assert_eq!(m.group_id(), None);
        assert_eq!(m.kind(), ModuleKind::Box);
    }

    #[test]
    fn test_from_spec_clamps_col_to_desktop_columns() {
        assert_eq!(module(9, 1).col(), 6);
        assert_eq!(module(0, 1).col(), 1);
        assert_eq!(module(-4, 1).col(), 1);
    }

    #[test]
    fn test_from_spec_clamps_row_to_upper_bound() {
        assert_eq!(module(1, 500).row(), MAX_ROW_SPAN);
        assert_eq!(module(1, 0).row(), 1);
    }

    #[test]
    fn test_from_spec_clamps_border_width() {
        let spec = ModuleSpec {
            border_width: 35,
            ..ModuleSpec::default()
        };
        let m = Module::from_spec(ModuleId::new(1), spec, &cfg());
        assert_eq!(m.appearance().border_width, MAX_BORDER_WIDTH);
    }

    // ── apply ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_apply_col_does_not_touch_mobile_col() {
        // Arrange
        let mut m = module(3, 2);
        m.apply(ModuleEdit::MobileCol(Some(2)), &cfg());

        // Act
        m.apply(ModuleEdit::Col(1), &cfg());

        // Assert
        assert_eq!(m.col(), 1);
        assert_eq!(m.mobile_col(), Some(2));
    }

    #[test]
    fn test_apply_mobile_col_clamps_to_target_columns() {
        let mut m = module(3, 2);

        m.apply(ModuleEdit::MobileCol(Some(5)), &cfg());
        assert_eq!(m.mobile_col(), Some(2));

        m.apply(ModuleEdit::MobileCol(Some(0)), &cfg());
        assert_eq!(m.mobile_col(), Some(1));
    }

    #[test]
    fn test_apply_mobile_col_none_clears_override() {
        let mut m = module(3, 2);
        m.apply(ModuleEdit::MobileCol(Some(2)), &cfg());

        m.apply(ModuleEdit::MobileCol(None), &cfg());

        assert_eq!(m.mobile_col(), None);
    }

    #[test]
    fn test_apply_group_id_trims_and_canonicalizes_empty() {
        let mut m = module(1, 1);

        m.apply(ModuleEdit::GroupId(Some("  hero  ".to_string())), &cfg());
        assert_eq!(m.group_id(), Some("hero"));

        m.apply(ModuleEdit::GroupId(Some("   ".to_string())), &cfg());
        assert_eq!(m.group_id(), None, "blank group must mean no group");
    }

    #[test]
    fn test_apply_kind_and_transparent_are_accepted_verbatim() {
        let mut m = module(1, 1);
        m.apply(ModuleEdit::Kind(ModuleKind::Image), &cfg());
        m.apply(ModuleEdit::Transparent(true), &cfg());
        assert_eq!(m.kind(), ModuleKind::Image);
        assert!(m.appearance().transparent);
    }

    #[test]
    fn test_shares_group_with_requires_equal_tags() {
        let mut a = module(1, 1);
        let mut b = module(1, 1);
        assert!(!a.shares_group_with(&b), "ungrouped modules are not a group");

        a.apply(ModuleEdit::GroupId(Some("g1".into())), &cfg());
        b.apply(ModuleEdit::GroupId(Some("g1".into())), &cfg());
        assert!(a.shares_group_with(&b));

        b.apply(ModuleEdit::GroupId(Some("g2".into())), &cfg());
        assert!(!a.shares_group_with(&b));
    }

    #[test]
    fn test_module_edit_deserializes_from_tagged_json() {
        let edit: ModuleEdit =
            serde_json::from_str(r#"{"field":"mobile_col","value":null}"#).expect("deserialize");
        assert_eq!(edit, ModuleEdit::MobileCol(None));

        let edit: ModuleEdit =
            serde_json::from_str(r#"{"field":"col","value":4}"#).expect("deserialize");
        assert_eq!(edit, ModuleEdit::Col(4));
    }
}
