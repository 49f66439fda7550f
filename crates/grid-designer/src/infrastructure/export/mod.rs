//! Generated-code observer.
//!
//! [`CodeExporter`] regenerates the markup and stylesheet after every applied
//! command, so the "generated code" output always matches the layout.  It is
//! a cheap clonable handle: register one clone with the controller as an
//! observer and keep another to read the latest output.

use std::cell::RefCell;
use std::rc::Rc;

use grid_core::{render_markup, render_stylesheet, LayoutState, Viewport};
use tracing::debug;

use crate::application::observer::LayoutObserver;

/// The most recently generated markup and stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedCode {
    pub markup: String,
    pub stylesheet: String,
    /// Number of regenerations so far.
    pub revision: u64,
}

/// Observer that keeps [`ExportedCode`] in sync with the layout.
#[derive(Debug, Clone, Default)]
pub struct CodeExporter {
    latest: Rc<RefCell<ExportedCode>>,
}

impl CodeExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerates from `state` immediately, without waiting for a command.
    pub fn refresh(&self, state: &LayoutState) {
        let mut latest = self.latest.borrow_mut();
        latest.markup = render_markup(state);
        latest.stylesheet = render_stylesheet(state);
        latest.revision += 1;
        debug!(revision = latest.revision, "code regenerated");
    }

    /// Copy of the latest output.
    pub fn latest(&self) -> ExportedCode {
        self.latest.borrow().clone()
    }
}

impl LayoutObserver for CodeExporter {
    fn layout_changed(&mut self, _command: &str, state: &LayoutState, _view: Viewport) {
        self.refresh(state);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
