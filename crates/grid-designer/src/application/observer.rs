//! Observer seam between the controller and its read-only consumers.
//!
//! Renderers and code exporters do not poll the layout.  They register with
//! the [`LayoutController`](super::controller::LayoutController) and are told
//! after every applied command.  They only ever receive a shared borrow, so
//! the controller stays the single writer.

use grid_core::{LayoutState, Viewport};

/// Receives a notification after each applied command.
///
/// Ignored commands (no-op drops, unknown ids, refused modes) do not notify.
pub trait LayoutObserver {
    /// Called once the command named `command` has been applied and, if its
    /// policy asks for one, checkpointed.
    fn layout_changed(&mut self, command: &str, state: &LayoutState, view: Viewport);
}
