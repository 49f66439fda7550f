//! Domain entities for Grid Designer.
//!
//! This module contains the layout data engine: pure logic with no I/O.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is the **domain**.  Domain code:
//!
//! - Holds the rules that make the designer what it is: how spans reflow onto
//!   a narrower grid, how a group drags as one block, how undo walks back.
//! - Has **no** imports from UI frameworks, file systems or clocks.
//! - Can be unit-tested on any platform without setup.
//!
//! Outer layers (the controller and CLI in `grid-designer`) depend on the
//! domain; the domain never depends on them.
//!
//! # Sub-modules, leaves first
//!
//! - **`ids`** / **`config`** – module identity and grid dimensions.
//! - **`module`** / **`registry`** – the module entity and its store.
//! - **`span`** – desktop → mobile span derivation.
//! - **`order`** / **`reorder`** – per-viewport order lists and the
//!   group-aware drop algorithm.
//! - **`history`** – bounded undo/redo over snapshots.
//! - **`state`** – [`state::LayoutState`], tying all of the above together.

pub mod config;
mod error;
pub mod history;
pub mod ids;
pub mod module;
pub mod order;
pub mod registry;
pub mod reorder;
pub mod span;
pub mod state;

pub use error::LayoutError;
