//! # grid-core
//!
//! Layout data engine for Grid Designer: the module registry, the desktop and
//! mobile order lists, responsive span derivation, group-aware drag reordering
//! and the bounded undo/redo history, plus markup/stylesheet export.
//!
//! This crate has no dependencies on UI frameworks, files or clocks.
//!
//! # Architecture overview (for beginners)
//!
//! Grid Designer lets a user place rectangular *modules* on a desktop grid and
//! derives a mobile layout from it.  This crate is the part with real rules:
//!
//! - **`domain`** – Modules, order lists, the span rule, the reorder
//!   algorithm, history, and [`LayoutState`] which owns them all.
//!
//! - **`export`** – Stateless projections of a [`LayoutState`] into an HTML
//!   document and a CSS stylesheet.
//!
//! Everything that edits state goes through [`LayoutState`] methods; every
//! renderer only borrows it.

pub mod domain;
pub mod export;

// Re-export the most-used types at the crate root so callers can write
// `grid_core::LayoutState` instead of `grid_core::domain::state::LayoutState`.
pub use domain::config::{GridConfig, ResponsiveMode};
pub use domain::history::{History, DEFAULT_HISTORY_CAPACITY};
pub use domain::ids::ModuleId;
pub use domain::module::{Appearance, Module, ModuleEdit, ModuleKind, ModuleSpec};
pub use domain::order::Viewport;
pub use domain::reorder::{NoopReason, ReorderOutcome};
pub use domain::span::mobile_span;
pub use domain::state::{LayoutSnapshot, LayoutState, LayoutStats, ModuleView};
pub use domain::LayoutError;
pub use export::{render_markup, render_stylesheet};
