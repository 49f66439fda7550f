//! Serialisable designer commands and their checkpoint policy.
//!
//! Every user action the designer understands is one [`Command`] variant.
//! Commands are plain data: they can be built in code, parsed from a JSON
//! script line, or logged.  The [`LayoutController`] is the only thing that
//! executes them.
//!
//! # Wire format (for beginners)
//!
//! Commands use serde's *internally tagged* representation: the variant name
//! sits in a `"type"` field next to the variant's own fields.
//!
//! ```json
//! {"type": "create_module", "col": 3, "row": 2}
//! {"type": "update_module", "id": 1, "edit": {"field": "group_id", "value": "hero"}}
//! {"type": "update_grid", "edit": {"setting": "desktop_columns", "value": 8}, "phase": "preview"}
//! {"type": "undo"}
//! ```
//!
//! # When does a command create an undo step?
//!
//! See [`CheckpointPolicy`].  Structural edits always checkpoint.  Field and
//! grid edits checkpoint only in the [`EditPhase::Commit`] phase, so dragging
//! a slider through ten values produces one undo step, not ten.
//!
//! [`LayoutController`]: super::controller::LayoutController

use grid_core::{GridConfig, ModuleEdit, ModuleId, ModuleKind, ModuleSpec, ResponsiveMode, Viewport};
use serde::{Deserialize, Serialize};

// ── Edit phases and checkpoint policy ─────────────────────────────────────────

/// Whether a field edit is an intermediate preview or the committed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditPhase {
    /// Apply immediately but do not record an undo step.
    Preview,
    /// Apply and record an undo step.
    #[default]
    Commit,
}

/// When a successfully applied command records a history checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointPolicy {
    /// Every applied instance checkpoints.
    Always,
    /// Only the [`EditPhase::Commit`] phase checkpoints.
    OnCommit,
    /// Never checkpoints (navigation, selection, history moves).
    Never,
}

// ── Command payloads ──────────────────────────────────────────────────────────

/// Field overrides for a new module.  Missing fields fall back to the
/// configured module defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewModule {
    pub col: Option<i64>,
    pub row: Option<i64>,
    pub kind: Option<ModuleKind>,
    pub color: Option<String>,
    pub transparent: Option<bool>,
    pub border_color: Option<String>,
    pub border_width: Option<i64>,
}

impl NewModule {
    /// Fills every unset field from `defaults`.
    pub fn over(self, defaults: &ModuleSpec) -> ModuleSpec {
        ModuleSpec {
            col: self.col.unwrap_or(defaults.col),
            row: self.row.unwrap_or(defaults.row),
            kind: self.kind.unwrap_or(defaults.kind),
            color: self.color.unwrap_or_else(|| defaults.color.clone()),
            transparent: self.transparent.unwrap_or(defaults.transparent),
            border_color: self
                .border_color
                .unwrap_or_else(|| defaults.border_color.clone()),
            border_width: self.border_width.unwrap_or(defaults.border_width),
        }
    }
}

/// One grid-configuration edit.  Values are clamped by [`GridConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "setting", content = "value", rename_all = "snake_case")]
pub enum GridEdit {
    DesktopColumns(i64),
    TargetColumns(i64),
    DesktopGap(i64),
    MobileGap(i64),
}

impl GridEdit {
    pub fn apply(self, config: &mut GridConfig) {
        match self {
            GridEdit::DesktopColumns(v) => config.set_desktop_columns(v),
            GridEdit::TargetColumns(v) => config.set_target_columns(v),
            GridEdit::DesktopGap(v) => config.set_desktop_gap(v),
            GridEdit::MobileGap(v) => config.set_mobile_gap(v),
        }
    }
}

// ── Command ───────────────────────────────────────────────────────────────────

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Adds a module to the end of both order lists.
    CreateModule(NewModule),
    UpdateModule {
        id: ModuleId,
        edit: ModuleEdit,
        #[serde(default)]
        phase: EditPhase,
    },
    DeleteModule {
        id: ModuleId,
    },
    /// Deletes whichever module is selected.
    DeleteSelected,
    /// Removes every module.
    ClearAll,
    /// Drops `id` onto position `target` of `viewport`'s order list.
    Reorder {
        viewport: Viewport,
        id: ModuleId,
        target: usize,
    },
    /// Picks up the module at `position` of the active view.
    BeginDrag {
        position: usize,
    },
    /// Drops the picked-up module onto `position` of the active view.
    DropOn {
        position: usize,
    },
    CancelDrag,
    SetMobileOrderLock {
        locked: bool,
    },
    Select {
        id: ModuleId,
    },
    Deselect,
    SwitchView {
        viewport: Viewport,
    },
    UpdateGrid {
        edit: GridEdit,
        #[serde(default)]
        phase: EditPhase,
    },
    SetResponsiveMode {
        mode: ResponsiveMode,
    },
    Undo,
    Redo,
}

impl Command {
    /// Stable snake_case name, identical to the `"type"` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateModule(_) => "create_module",
            Command::UpdateModule { .. } => "update_module",
            Command::DeleteModule { .. } => "delete_module",
            Command::DeleteSelected => "delete_selected",
            Command::ClearAll => "clear_all",
            Command::Reorder { .. } => "reorder",
            Command::BeginDrag { .. } => "begin_drag",
            Command::DropOn { .. } => "drop_on",
            Command::CancelDrag => "cancel_drag",
            Command::SetMobileOrderLock { .. } => "set_mobile_order_lock",
            Command::Select { .. } => "select",
            Command::Deselect => "deselect",
            Command::SwitchView { .. } => "switch_view",
            Command::UpdateGrid { .. } => "update_grid",
            Command::SetResponsiveMode { .. } => "set_responsive_mode",
            Command::Undo => "undo",
            Command::Redo => "redo",
        }
    }

    pub fn checkpoint_policy(&self) -> CheckpointPolicy {
        match self {
            Command::CreateModule(_)
            | Command::DeleteModule { .. }
            | Command::DeleteSelected
            | Command::ClearAll
            | Command::Reorder { .. }
            | Command::DropOn { .. }
            | Command::SetMobileOrderLock { .. } => CheckpointPolicy::Always,

            Command::UpdateModule { .. } | Command::UpdateGrid { .. } => {
                CheckpointPolicy::OnCommit
            }

            Command::BeginDrag { .. }
            | Command::CancelDrag
            | Command::Select { .. }
            | Command::Deselect
            | Command::SwitchView { .. }
            | Command::SetResponsiveMode { .. }
            | Command::Undo
            | Command::Redo => CheckpointPolicy::Never,
        }
    }

    /// Edit phase carried by the command; [`EditPhase::Commit`] for commands
    /// without one.
    pub fn phase(&self) -> EditPhase {
        match self {
            Command::UpdateModule { phase, .. } | Command::UpdateGrid { phase, .. } => *phase,
            _ => EditPhase::Commit,
        }
    }

    /// `true` when applying this command should record a checkpoint.
    pub fn checkpoints(&self) -> bool {
        match self.checkpoint_policy() {
            CheckpointPolicy::Always => true,
            CheckpointPolicy::OnCommit => self.phase() == EditPhase::Commit,
            CheckpointPolicy::Never => false,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
