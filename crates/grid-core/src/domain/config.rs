//! Process-wide grid configuration: column counts, gaps and responsive mode.
//!
//! Changing a column count never rewrites the spans stored on modules.  A
//! module with `col = 5` keeps that value when the desktop grid shrinks to 4
//! columns; the span is clamped where it is *read* (see [`crate::domain::span`]).
//! Growing the grid back to 6 columns therefore restores the original look.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest column count either viewport may use.
pub const MIN_COLUMNS: u32 = 1;
/// Largest column count either viewport may use.
pub const MAX_COLUMNS: u32 = 12;
/// Largest gap, in pixels, between grid cells.
pub const MAX_GAP: u32 = 50;

const DEFAULT_DESKTOP_COLUMNS: u32 = 6;
const DEFAULT_TARGET_COLUMNS: u32 = 2;
const DEFAULT_GAP: u32 = 10;

/// Strategy used to derive the mobile layout from the desktop layout.
///
/// Only [`ResponsiveMode::Reflow`] is implemented.  The other variants are
/// recognised so that a UI can list them, but selecting one is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponsiveMode {
    /// Modules wrap onto a narrower grid with proportionally derived spans.
    #[default]
    Reflow,
    Center,
    Left,
    Right,
    Custom,
}

impl ResponsiveMode {
    /// Returns `true` for modes the engine can actually produce output for.
    pub fn is_supported(self) -> bool {
        matches!(self, ResponsiveMode::Reflow)
    }

    /// Human-readable label used in generated stylesheet comments and hints.
    pub fn label(self) -> &'static str {
        match self {
            ResponsiveMode::Reflow => "reflow",
            ResponsiveMode::Center => "keep centered",
            ResponsiveMode::Left => "keep left",
            ResponsiveMode::Right => "keep right",
            ResponsiveMode::Custom => "custom",
        }
    }
}

impl fmt::Display for ResponsiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grid dimensions for both viewports.
///
/// All setters clamp their input; none of them fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    desktop_columns: u32,
    target_columns: u32,
    desktop_gap: u32,
    mobile_gap: u32,
    responsive_mode: ResponsiveMode,
}

impl GridConfig {
    /// Creates a configuration with the given column counts and default gaps.
    pub fn new(desktop_columns: i64, target_columns: i64) -> Self {
        let mut cfg = Self::default();
        cfg.set_desktop_columns(desktop_columns);
        cfg.set_target_columns(target_columns);
        cfg
    }

    pub fn desktop_columns(&self) -> u32 {
        self.desktop_columns
    }

    /// Mobile column count.
    pub fn target_columns(&self) -> u32 {
        self.target_columns
    }

    pub fn desktop_gap(&self) -> u32 {
        self.desktop_gap
    }

    pub fn mobile_gap(&self) -> u32 {
        self.mobile_gap
    }

    pub fn responsive_mode(&self) -> ResponsiveMode {
        self.responsive_mode
    }

    pub fn set_desktop_columns(&mut self, columns: i64) {
        self.desktop_columns = clamp_u32(columns, MIN_COLUMNS, MAX_COLUMNS);
    }

    pub fn set_target_columns(&mut self, columns: i64) {
        self.target_columns = clamp_u32(columns, MIN_COLUMNS, MAX_COLUMNS);
    }

    pub fn set_desktop_gap(&mut self, gap: i64) {
        self.desktop_gap = clamp_u32(gap, 0, MAX_GAP);
    }

    pub fn set_mobile_gap(&mut self, gap: i64) {
        self.mobile_gap = clamp_u32(gap, 0, MAX_GAP);
    }

    /// Stores `mode` if it is supported.  Returns `false` (and leaves the
    /// configuration untouched) otherwise.
    pub(crate) fn try_set_responsive_mode(&mut self, mode: ResponsiveMode) -> bool {
        if !mode.is_supported() {
            return false;
        }
        self.responsive_mode = mode;
        true
    }

    /// Hint shown next to the mode selector, e.g. `"6 columns → 2 columns (reflow)"`.
    pub fn mode_hint(&self) -> String {
        format!(
            "{} columns → {} columns ({})",
            self.desktop_columns, self.target_columns, self.responsive_mode
        )
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            desktop_columns: DEFAULT_DESKTOP_COLUMNS,
            target_columns: DEFAULT_TARGET_COLUMNS,
            desktop_gap: DEFAULT_GAP,
            mobile_gap: DEFAULT_GAP,
            responsive_mode: ResponsiveMode::Reflow,
        }
    }
}

/// Clamps a signed user-supplied value into `[min, max]`.
pub(crate) fn clamp_u32(value: i64, min: u32, max: u32) -> u32 {
    // The clamp result lies within [min, max], so the cast is lossless.
    value.clamp(i64::from(min), i64::from(max)) as u32
}
