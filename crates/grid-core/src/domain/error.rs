use thiserror::Error;

use super::config::ResponsiveMode;
use super::ids::ModuleId;

/// Errors that can occur when editing the layout.
///
/// None of these is fatal.  Callers treat every variant as "state unchanged".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The referenced module does not exist (deleted, or undone away).
    #[error("module not found: {0}")]
    ModuleNotFound(ModuleId),

    /// The responsive mode is recognised but has no implementation.
    #[error("responsive mode `{0}` is not supported; only reflow is implemented")]
    UnsupportedMode(ResponsiveMode),

    /// A position does not exist in the active order list.
    #[error("position {position} is out of range for an order list of length {len}")]
    PositionOutOfRange { position: usize, len: usize },
}
