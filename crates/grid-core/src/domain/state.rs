//! The layout state value object and its snapshots.
//!
//! [`LayoutState`] bundles everything the designer edits: the grid
//! configuration, the module registry, both order lists and the selection.
//! It is an ordinary owned value.  Whoever owns it (normally the controller in
//! `grid-designer`) is the single writer; renderers and exporters borrow it
//! read-only after each command.
//!
//! Every mutating method keeps the order-list invariant:
//!
//! > the desktop list, the mobile list and the registry contain exactly the
//! > same set of ids, each once.
//!
//! Snapshots ([`LayoutSnapshot`]) copy modules, both lists and the selection.
//! They do not copy the grid configuration, the mobile-order lock or the id
//! allocator.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{GridConfig, ResponsiveMode};
use super::ids::{IdAllocator, ModuleId};
use super::module::{Module, ModuleEdit, ModuleSpec};
use super::order::{OrderLists, Viewport};
use super::registry::ModuleRegistry;
use super::reorder::{plan_reorder, ReorderOutcome};
use super::span::{desktop_span, has_span_warning, mobile_span};
use super::LayoutError;

/// Immutable copy of the editable state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub modules: Vec<Module>,
    pub desktop_order: Vec<ModuleId>,
    pub mobile_order: Vec<ModuleId>,
    pub selected: Option<ModuleId>,
}

/// Read-only projection of one module for a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleView<'a> {
    pub module: &'a Module,
    /// 0-based position in the viewport's order list, skipping dangling ids.
    pub position: usize,
    /// Column span in this viewport.
    pub span: u32,
    /// Set only in the mobile viewport, when derivation is shrinking the module.
    pub warning: bool,
    pub selected: bool,
}

/// Counters shown in the designer's status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutStats {
    pub modules: usize,
    pub desktop_columns: u32,
    pub desktop_gap: u32,
}

/// The complete editable layout.
#[derive(Debug, Default)]
pub struct LayoutState {
    config: GridConfig,
    registry: ModuleRegistry,
    orders: OrderLists,
    selected: Option<ModuleId>,
    ids: IdAllocator,
}

impl LayoutState {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Mutable access for column/gap edits.  Stored spans are never rewritten
    /// by a configuration change.
    pub fn config_mut(&mut self) -> &mut GridConfig {
        &mut self.config
    }

    /// Selects the responsive strategy.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnsupportedMode`] for any mode other than reflow.
    pub fn set_responsive_mode(&mut self, mode: ResponsiveMode) -> Result<(), LayoutError> {
        if self.config.try_set_responsive_mode(mode) {
            Ok(())
        } else {
            Err(LayoutError::UnsupportedMode(mode))
        }
    }

    // ── Module registry ───────────────────────────────────────────────────────

    /// Creates a module from `spec` and appends it to both order lists.
    pub fn create_module(&mut self, spec: ModuleSpec) -> ModuleId {
        let id = self.ids.next();
        let module = Module::from_spec(id, spec, &self.config);
        debug!(module = %id, col = module.col, row = module.row, "module created");
        self.registry.insert(module);
        self.orders.append(id);
        id
    }

    /// Applies one field edit to module `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ModuleNotFound`] if `id` is not live.
    pub fn update_module(&mut self, id: ModuleId, edit: ModuleEdit) -> Result<(), LayoutError> {
        self.registry.update(id, edit, &self.config)
    }

    /// Deletes module `id` from the registry and both order lists.
    ///
    /// Group mates are left alone.  The selection clears if it pointed at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ModuleNotFound`] if `id` is not live.
    pub fn delete_module(&mut self, id: ModuleId) -> Result<Module, LayoutError> {
        let removed = self.registry.remove(id)?;
        self.orders.remove(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(module = %id, "module deleted");
        Ok(removed)
    }

    /// Removes every module.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.orders.clear();
        self.selected = None;
        debug!("layout cleared");
    }

    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    // ── Ordering ──────────────────────────────────────────────────────────────

    pub fn orders(&self) -> &OrderLists {
        &self.orders
    }

    /// Drops `dragged` onto position `target_index` of `viewport`'s list.
    ///
    /// On [`ReorderOutcome::Moved`] the new order has been committed (and
    /// mirrored to mobile if the desktop list is locked to it).
    pub fn reorder(
        &mut self,
        viewport: Viewport,
        dragged: ModuleId,
        target_index: usize,
    ) -> ReorderOutcome {
        let outcome = plan_reorder(
            self.orders.get(viewport),
            &self.registry,
            dragged,
            target_index,
        );
        if let ReorderOutcome::Moved(order) = &outcome {
            self.orders.replace(viewport, order.clone());
            debug!(%viewport, module = %dragged, target_index, "order updated");
        }
        outcome
    }

    /// Turns the mobile-order lock on (copying desktop → mobile) or off.
    pub fn set_mobile_order_locked(&mut self, locked: bool) {
        self.orders.set_mobile_locked(locked);
        debug!(locked, "mobile order lock changed");
    }

    /// Live modules of `viewport` in order.  Ids with no backing module are
    /// silently skipped.
    pub fn ordered_modules(&self, viewport: Viewport) -> Vec<&Module> {
        self.orders
            .get(viewport)
            .iter()
            .filter_map(|&id| self.registry.get(id))
            .collect()
    }

    /// Renderer projection of `viewport`.
    pub fn module_views(&self, viewport: Viewport) -> Vec<ModuleView<'_>> {
        let desktop_columns = self.config.desktop_columns();
        let target_columns = self.config.target_columns();

        self.ordered_modules(viewport)
            .into_iter()
            .enumerate()
            .map(|(position, module)| {
                let (span, warning) = match viewport {
                    Viewport::Desktop => (desktop_span(module, desktop_columns), false),
                    Viewport::Mobile => (
                        mobile_span(module, desktop_columns, target_columns),
                        has_span_warning(module, target_columns),
                    ),
                };
                ModuleView {
                    module,
                    position,
                    span,
                    warning,
                    selected: self.selected == Some(module.id()),
                }
            })
            .collect()
    }

    /// Returns the id at `position` of `viewport`'s list.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::PositionOutOfRange`] past the end of the list.
    pub fn id_at(&self, viewport: Viewport, position: usize) -> Result<ModuleId, LayoutError> {
        let order = self.orders.get(viewport);
        order
            .get(position)
            .copied()
            .ok_or(LayoutError::PositionOutOfRange {
                position,
                len: order.len(),
            })
    }

    // ── Selection ─────────────────────────────────────────────────────────────

    /// Selects module `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ModuleNotFound`] if `id` is not live.
    pub fn select(&mut self, id: ModuleId) -> Result<(), LayoutError> {
        if !self.registry.contains(id) {
            return Err(LayoutError::ModuleNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// The selected module, if it still exists.
    pub fn selected(&self) -> Option<&Module> {
        self.selected.and_then(|id| self.registry.get(id))
    }

    pub fn selected_id(&self) -> Option<ModuleId> {
        self.selected().map(Module::id)
    }

    // ── Snapshots ─────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            modules: self.registry.all().to_vec(),
            desktop_order: self.orders.desktop().to_vec(),
            mobile_order: self.orders.mobile().to_vec(),
            selected: self.selected_id(),
        }
    }

    /// Replaces modules, order lists and selection with `snapshot`'s.
    ///
    /// The selection is re-resolved by id and clears if the snapshot has no
    /// such module.  Configuration, lock flag and id allocator are untouched.
    pub fn restore(&mut self, snapshot: &LayoutSnapshot) {
        self.registry = ModuleRegistry::from_modules(snapshot.modules.clone());
        self.orders.restore(
            snapshot.desktop_order.clone(),
            snapshot.mobile_order.clone(),
        );
        self.selected = snapshot
            .selected
            .filter(|&id| self.registry.contains(id));
        debug!(modules = self.registry.len(), "snapshot restored");
    }

    // ── Diagnostics ───────────────────────────────────────────────────────────

    pub fn stats(&self) -> LayoutStats {
        LayoutStats {
            modules: self.registry.len(),
            desktop_columns: self.config.desktop_columns(),
            desktop_gap: self.config.desktop_gap(),
        }
    }

    /// Checks that both order lists hold exactly the live module ids, once each.
    pub fn orders_consistent(&self) -> bool {
        let mut live: Vec<ModuleId> = self.registry.all().iter().map(Module::id).collect();
        live.sort_unstable();

        [Viewport::Desktop, Viewport::Mobile].iter().all(|&viewport| {
            let mut ids = self.orders.get(viewport).to_vec();
            ids.sort_unstable();
            ids == live
        })
    }
}
