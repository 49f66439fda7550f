//! Module identity and the allocator that hands identities out.
//!
//! # Why a counter and not a timestamp? (for beginners)
//!
//! Every module needs an identity that survives reordering, undo and redo.
//! Deriving it from the wall clock is fragile: two modules created within the
//! same millisecond would collide.  A counter that only ever moves forward is
//! simpler and gives the two guarantees the engine relies on:
//!
//! - **Uniqueness** – no two modules ever share an id.
//! - **Creation order** – a module created later always has a larger id.
//!
//! The allocator deliberately lives *outside* history snapshots.  Undoing the
//! creation of module 7 must not cause the next new module to become 7 again,
//! otherwise a redo branch and the live state could disagree about what
//! "module 7" is.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Process-unique identity of a layout module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(u64);

impl ModuleId {
    /// Wraps a raw identifier value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monotonically increasing source of [`ModuleId`]s.
///
/// The first id issued is `1`.  Ids are never reused, even when the module
/// that carried one has been deleted or undone away.
///
/// # Examples
///
/// ```rust
/// use grid_core::domain::ids::IdAllocator;
///
/// let ids = IdAllocator::new();
/// assert_eq!(ids.next().get(), 1);
/// assert_eq!(ids.next().get(), 2);
/// ```
#[derive(Debug)]
pub struct IdAllocator {
    /// The value the next call to [`next`](Self::next) will return.
    next: AtomicU64,
}

impl IdAllocator {
    /// Creates an allocator whose first id is `1`.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Issues a fresh id, strictly greater than every id issued before.
    ///
    /// `Ordering::Relaxed` is enough: the value only has to be unique, it does
    /// not publish any other memory.
    pub fn next(&self) -> ModuleId {
        ModuleId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the id the next call to [`next`](Self::next) would issue,
    /// without consuming it.
    pub fn peek(&self) -> ModuleId {
        ModuleId(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
