//! Per-viewport ordering of modules.
//!
//! Desktop and mobile each have their own sequence of module ids.  The
//! sequence decides paint order on the designer canvas and the `order:` hint
//! emitted in the mobile stylesheet.
//!
//! The two lists are independent until the mobile list is *locked*.  While
//! locked, every desktop reorder is copied onto the mobile list.  The copy is
//! one-way: reordering the mobile list directly while locked is allowed and is
//! simply overwritten by the next desktop reorder.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::ModuleId;

/// The two viewports the designer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Viewport::Desktop => f.write_str("desktop"),
            Viewport::Mobile => f.write_str("mobile"),
        }
    }
}

/// Desktop and mobile order lists plus the mobile-order lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLists {
    desktop: Vec<ModuleId>,
    mobile: Vec<ModuleId>,
    mobile_locked: bool,
}

impl OrderLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores both lists verbatim, keeping the current lock flag.
    pub(crate) fn restore(&mut self, desktop: Vec<ModuleId>, mobile: Vec<ModuleId>) {
        self.desktop = desktop;
        self.mobile = mobile;
    }

    /// Appends `id` to the tail of both lists.
    pub(crate) fn append(&mut self, id: ModuleId) {
        self.desktop.push(id);
        self.mobile.push(id);
    }

    /// Removes every occurrence of `id` from both lists.
    pub(crate) fn remove(&mut self, id: ModuleId) {
        self.desktop.retain(|&x| x != id);
        self.mobile.retain(|&x| x != id);
    }

    pub(crate) fn clear(&mut self) {
        self.desktop.clear();
        self.mobile.clear();
    }

    pub fn get(&self, viewport: Viewport) -> &[ModuleId] {
        match viewport {
            Viewport::Desktop => &self.desktop,
            Viewport::Mobile => &self.mobile,
        }
    }

    pub fn desktop(&self) -> &[ModuleId] {
        &self.desktop
    }

    pub fn mobile(&self) -> &[ModuleId] {
        &self.mobile
    }

    /// Commits a new sequence for `viewport`.
    ///
    /// A new desktop sequence is mirrored onto the mobile list while locked.
    pub(crate) fn replace(&mut self, viewport: Viewport, order: Vec<ModuleId>) {
        match viewport {
            Viewport::Desktop => {
                if self.mobile_locked {
                    self.mobile = order.clone();
                }
                self.desktop = order;
            }
            Viewport::Mobile => self.mobile = order,
        }
    }

    pub fn is_mobile_locked(&self) -> bool {
        self.mobile_locked
    }

    /// Turns the mobile-order lock on or off.
    ///
    /// Locking immediately overwrites the mobile list with the desktop list.
    /// Unlocking leaves both lists as they are.
    pub(crate) fn set_mobile_locked(&mut self, locked: bool) {
        self.mobile_locked = locked;
        if locked {
            self.mobile = self.desktop.clone();
        }
    }

    /// 1-based position of `id` in the desktop list, used for generated
    /// class names (`module-1`, `module-2`, ...).
    pub fn desktop_position(&self, id: ModuleId) -> Option<usize> {
        self.desktop.iter().position(|&x| x == id).map(|i| i + 1)
    }
}
