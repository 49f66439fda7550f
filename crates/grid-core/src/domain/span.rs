//! Responsive span derivation.
//!
//! A module spans `col` of the `desktop_columns` on desktop.  On mobile it
//! should keep roughly the same *share* of the row:
//!
//! ```text
//! mobile = clamp(round(col / desktop_columns × target_columns), 1, target_columns)
//! ```
//!
//! A manual override (`mobile_col`) always wins over the derived value, but is
//! still clamped to the current mobile column count because the column count
//! may have shrunk since the override was entered.

use super::config::GridConfig;
use super::module::Module;

/// Derives a mobile span from a desktop span alone, ignoring any override.
///
/// Rounds half away from zero, so `3/6 × 3 = 1.5` becomes `2`.
pub fn auto_mobile_span(col: u32, desktop_columns: u32, target_columns: u32) -> u32 {
    let target = target_columns.max(1);
    if desktop_columns == 0 {
        return 1;
    }
    let ratio = f64::from(col) / f64::from(desktop_columns);
    let raw = (ratio * f64::from(target)).round();
    // `raw` is finite and non-negative; saturating cast then clamp.
    (raw as u32).clamp(1, target)
}

/// Effective mobile span of `module`.
pub fn mobile_span(module: &Module, desktop_columns: u32, target_columns: u32) -> u32 {
    match module.mobile_col() {
        Some(manual) => manual.clamp(1, target_columns.max(1)),
        None => auto_mobile_span(module.col(), desktop_columns, target_columns),
    }
}

/// Effective desktop span of `module`: the stored `col` clamped to the
/// current desktop column count.
pub fn desktop_span(module: &Module, desktop_columns: u32) -> u32 {
    module.col().clamp(1, desktop_columns.max(1))
}

/// `true` when automatic derivation is shrinking a module that is wider than
/// the whole mobile grid and no manual override was given.
pub fn has_span_warning(module: &Module, target_columns: u32) -> bool {
    module.mobile_col().is_none() && module.col() > target_columns
}

/// Edit-panel hint describing the automatic span, e.g. `"auto: 1 col (3/6 × 2)"`.
pub fn span_hint(module: &Module, config: &GridConfig) -> String {
    let auto = auto_mobile_span(
        module.col(),
        config.desktop_columns(),
        config.target_columns(),
    );
    format!(
        "auto: {} col ({}/{} × {})",
        auto,
        module.col(),
        config.desktop_columns(),
        config.target_columns()
    )
}
