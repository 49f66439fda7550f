//! In-memory store of module records.
//!
//! The registry is plain CRUD over a `Vec<Module>` kept in creation order.
//! It knows nothing about viewports or ordering; [`crate::domain::state::LayoutState`]
//! keeps the registry and the order lists in step.
//!
//! # Vec rather than HashMap
//!
//! Designs hold tens of modules, not thousands.  A `Vec` keeps creation order
//! (useful for snapshots and stable JSON output) and a linear scan by id is
//! cheaper than hashing at this size.

use super::config::GridConfig;
use super::ids::ModuleId;
use super::module::{Module, ModuleEdit};
use super::LayoutError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRegistry {
    modules: Vec<Module>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from a snapshot's module list.
    pub(crate) fn from_modules(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// Adds an already-validated module.
    pub(crate) fn insert(&mut self, module: Module) {
        self.modules.push(module);
    }

    /// Applies `edit` to the module with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ModuleNotFound`] if no such module exists.
    pub fn update(
        &mut self,
        id: ModuleId,
        edit: ModuleEdit,
        config: &GridConfig,
    ) -> Result<(), LayoutError> {
        let module = self
            .modules
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(LayoutError::ModuleNotFound(id))?;
        module.apply(edit, config);
        Ok(())
    }

    /// Removes and returns the module with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ModuleNotFound`] if no such module exists.
    pub fn remove(&mut self, id: ModuleId) -> Result<Module, LayoutError> {
        let index = self
            .modules
            .iter()
            .position(|m| m.id == id)
            .ok_or(LayoutError::ModuleNotFound(id))?;
        Ok(self.modules.remove(index))
    }

    pub fn get(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.get(id).is_some()
    }

    /// All modules in creation order.
    pub fn all(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.modules.clear();
    }
}
