//! LayoutController: the single writer of the layout.
//!
//! The controller owns the [`LayoutState`], its [`History`] of snapshots, the
//! active viewport and the in-progress drag (if any).  Every user action is a
//! [`Command`] that flows through [`LayoutController::dispatch`]:
//!
//! ```text
//! dispatch(command)
//!  ├─ apply          mutate state (or refuse → Ignored, state untouched)
//!  ├─ checkpoint     if the command's policy asks for one
//!  └─ notify         every registered LayoutObserver
//! ```
//!
//! Undo and redo go through the same path but restore a stored snapshot
//! instead of mutating field by field.
//!
//! # Drag sessions (for beginners)
//!
//! A drag is two user gestures: pick a module up, then drop it somewhere.
//! [`begin_drag`](LayoutController::begin_drag) remembers *which module* is
//! being dragged (by id, not position, so nothing shifts under it).
//! [`drop_on`](LayoutController::drop_on) runs the group-aware reorder and
//! ends the session whether or not anything moved.
//! [`cancel_drag`](LayoutController::cancel_drag) ends it with no change.

use grid_core::domain::span::span_hint;
use grid_core::{
    GridConfig, History, LayoutError, LayoutSnapshot, LayoutState, LayoutStats, Module,
    ModuleEdit, ModuleId, ModuleSpec, ModuleView, NoopReason, ReorderOutcome, ResponsiveMode,
    Viewport, DEFAULT_HISTORY_CAPACITY,
};
use tracing::{debug, warn};

use super::commands::{Command, EditPhase, GridEdit, NewModule};
use super::observer::LayoutObserver;

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Why a command left the layout untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The engine refused the edit (unknown id, unsupported mode, bad position).
    Refused(LayoutError),
    /// A drop that would not change the order.
    NoChange(NoopReason),
    NothingSelected,
    NoDragInProgress,
    NothingToUndo,
    NothingToRedo,
}

/// Result of dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// A module was created with this id.
    Created(ModuleId),
    Ignored(IgnoreReason),
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, CommandOutcome::Ignored(_))
    }
}

impl From<Result<(), LayoutError>> for CommandOutcome {
    fn from(result: Result<(), LayoutError>) -> Self {
        match result {
            Ok(()) => CommandOutcome::Applied,
            Err(e) => CommandOutcome::Ignored(IgnoreReason::Refused(e)),
        }
    }
}

impl From<ReorderOutcome> for CommandOutcome {
    fn from(outcome: ReorderOutcome) -> Self {
        match outcome {
            ReorderOutcome::Moved(_) => CommandOutcome::Applied,
            ReorderOutcome::Unchanged(reason) => {
                CommandOutcome::Ignored(IgnoreReason::NoChange(reason))
            }
        }
    }
}

// ── Settings ──────────────────────────────────────────────────────────────────

/// Everything needed to start a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    pub grid: GridConfig,
    pub responsive_mode: ResponsiveMode,
    /// Field values for modules created without overrides.
    pub module_defaults: ModuleSpec,
    pub history_capacity: usize,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            responsive_mode: ResponsiveMode::Reflow,
            module_defaults: ModuleSpec::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

/// Owns the layout and executes commands against it.
pub struct LayoutController {
    state: LayoutState,
    history: History<LayoutSnapshot>,
    view: Viewport,
    /// Module picked up by `begin_drag`, cleared by drop/cancel/undo/redo.
    drag: Option<ModuleId>,
    module_defaults: ModuleSpec,
    observers: Vec<Box<dyn LayoutObserver>>,
}

impl LayoutController {
    /// Creates a controller with an empty layout.
    ///
    /// The empty layout is recorded as the first history entry, so undo can
    /// always return to it (until it is evicted).
    pub fn new(settings: ControllerSettings) -> Self {
        let mut state = LayoutState::new(settings.grid);
        if let Err(e) = state.set_responsive_mode(settings.responsive_mode) {
            warn!("{e}; falling back to {}", ResponsiveMode::Reflow);
        }

        let mut history = History::with_capacity(settings.history_capacity);
        history.checkpoint(state.snapshot());

        Self {
            state,
            history,
            view: Viewport::Desktop,
            drag: None,
            module_defaults: settings.module_defaults,
            observers: Vec::new(),
        }
    }

    /// Registers an observer notified after every applied command.
    pub fn add_observer(&mut self, observer: Box<dyn LayoutObserver>) {
        self.observers.push(observer);
    }

    // ── Dispatch ──────────────────────────────────────────────────────────────

    /// Applies `command`, checkpoints per its policy, and notifies observers.
    ///
    /// A [`CommandOutcome::Ignored`] result means the layout, history and
    /// observers were all left untouched.
    pub fn dispatch(&mut self, command: Command) -> CommandOutcome {
        let name = command.name();
        let checkpoint = command.checkpoints();

        let outcome = self.apply(command);

        match &outcome {
            CommandOutcome::Ignored(IgnoreReason::Refused(e)) => {
                warn!(command = name, "command refused: {e}");
            }
            CommandOutcome::Ignored(reason) => {
                debug!(command = name, ?reason, "command ignored");
            }
            CommandOutcome::Applied | CommandOutcome::Created(_) => {
                if checkpoint {
                    self.history.checkpoint(self.state.snapshot());
                    debug!(
                        command = name,
                        entries = self.history.len(),
                        "checkpoint recorded"
                    );
                }
                for observer in &mut self.observers {
                    observer.layout_changed(name, &self.state, self.view);
                }
            }
        }

        outcome
    }

    fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::CreateModule(overrides) => {
                let spec = overrides.over(&self.module_defaults);
                CommandOutcome::Created(self.state.create_module(spec))
            }
            Command::UpdateModule { id, edit, .. } => self.state.update_module(id, edit).into(),
            Command::DeleteModule { id } => self.delete(id),
            Command::DeleteSelected => match self.state.selected_id() {
                Some(id) => self.delete(id),
                None => CommandOutcome::Ignored(IgnoreReason::NothingSelected),
            },
            Command::ClearAll => {
                self.state.clear();
                self.drag = None;
                CommandOutcome::Applied
            }
            Command::Reorder {
                viewport,
                id,
                target,
            } => self.state.reorder(viewport, id, target).into(),
            Command::BeginDrag { position } => match self.state.id_at(self.view, position) {
                Ok(id) => {
                    self.drag = Some(id);
                    CommandOutcome::Applied
                }
                Err(e) => CommandOutcome::Ignored(IgnoreReason::Refused(e)),
            },
            Command::DropOn { position } => match self.drag.take() {
                Some(id) => self.state.reorder(self.view, id, position).into(),
                None => CommandOutcome::Ignored(IgnoreReason::NoDragInProgress),
            },
            Command::CancelDrag => match self.drag.take() {
                Some(_) => CommandOutcome::Applied,
                None => CommandOutcome::Ignored(IgnoreReason::NoDragInProgress),
            },
            Command::SetMobileOrderLock { locked } => {
                self.state.set_mobile_order_locked(locked);
                CommandOutcome::Applied
            }
            Command::Select { id } => self.state.select(id).into(),
            Command::Deselect => {
                self.state.deselect();
                CommandOutcome::Applied
            }
            Command::SwitchView { viewport } => {
                self.view = viewport;
                self.drag = None;
                self.state.deselect();
                CommandOutcome::Applied
            }
            Command::UpdateGrid { edit, .. } => {
                edit.apply(self.state.config_mut());
                CommandOutcome::Applied
            }
            Command::SetResponsiveMode { mode } => self.state.set_responsive_mode(mode).into(),
            Command::Undo => match self.history.undo() {
                Some(snapshot) => {
                    self.state.restore(snapshot);
                    self.drag = None;
                    CommandOutcome::Applied
                }
                None => CommandOutcome::Ignored(IgnoreReason::NothingToUndo),
            },
            Command::Redo => match self.history.redo() {
                Some(snapshot) => {
                    self.state.restore(snapshot);
                    self.drag = None;
                    CommandOutcome::Applied
                }
                None => CommandOutcome::Ignored(IgnoreReason::NothingToRedo),
            },
        }
    }

    fn delete(&mut self, id: ModuleId) -> CommandOutcome {
        match self.state.delete_module(id) {
            Ok(_) => {
                if self.drag == Some(id) {
                    self.drag = None;
                }
                CommandOutcome::Applied
            }
            Err(e) => CommandOutcome::Ignored(IgnoreReason::Refused(e)),
        }
    }

    // ── Command methods ───────────────────────────────────────────────────────

    pub fn create_module(&mut self, overrides: NewModule) -> CommandOutcome {
        self.dispatch(Command::CreateModule(overrides))
    }

    /// Adds a module with the configured defaults.
    pub fn add_module(&mut self) -> CommandOutcome {
        self.create_module(NewModule::default())
    }

    pub fn update_module(
        &mut self,
        id: ModuleId,
        edit: ModuleEdit,
        phase: EditPhase,
    ) -> CommandOutcome {
        self.dispatch(Command::UpdateModule { id, edit, phase })
    }

    pub fn delete_module(&mut self, id: ModuleId) -> CommandOutcome {
        self.dispatch(Command::DeleteModule { id })
    }

    pub fn delete_selected(&mut self) -> CommandOutcome {
        self.dispatch(Command::DeleteSelected)
    }

    pub fn clear_all(&mut self) -> CommandOutcome {
        self.dispatch(Command::ClearAll)
    }

    pub fn reorder(&mut self, viewport: Viewport, id: ModuleId, target: usize) -> CommandOutcome {
        self.dispatch(Command::Reorder {
            viewport,
            id,
            target,
        })
    }

    pub fn begin_drag(&mut self, position: usize) -> CommandOutcome {
        self.dispatch(Command::BeginDrag { position })
    }

    pub fn drop_on(&mut self, position: usize) -> CommandOutcome {
        self.dispatch(Command::DropOn { position })
    }

    pub fn cancel_drag(&mut self) -> CommandOutcome {
        self.dispatch(Command::CancelDrag)
    }

    pub fn set_mobile_order_locked(&mut self, locked: bool) -> CommandOutcome {
        self.dispatch(Command::SetMobileOrderLock { locked })
    }

    pub fn select(&mut self, id: ModuleId) -> CommandOutcome {
        self.dispatch(Command::Select { id })
    }

    pub fn deselect(&mut self) -> CommandOutcome {
        self.dispatch(Command::Deselect)
    }

    pub fn switch_view(&mut self, viewport: Viewport) -> CommandOutcome {
        self.dispatch(Command::SwitchView { viewport })
    }

    pub fn update_grid(&mut self, edit: GridEdit, phase: EditPhase) -> CommandOutcome {
        self.dispatch(Command::UpdateGrid { edit, phase })
    }

    pub fn set_responsive_mode(&mut self, mode: ResponsiveMode) -> CommandOutcome {
        self.dispatch(Command::SetResponsiveMode { mode })
    }

    pub fn undo(&mut self) -> CommandOutcome {
        self.dispatch(Command::Undo)
    }

    pub fn redo(&mut self) -> CommandOutcome {
        self.dispatch(Command::Redo)
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// The active viewport.
    pub fn view(&self) -> Viewport {
        self.view
    }

    /// Module currently being dragged, if any.
    pub fn dragging(&self) -> Option<ModuleId> {
        self.drag
    }

    pub fn selected(&self) -> Option<&Module> {
        self.state.selected()
    }

    /// Render projection of the active viewport.
    pub fn module_views(&self) -> Vec<ModuleView<'_>> {
        self.state.module_views(self.view)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// e.g. `"6 columns → 2 columns (reflow)"`.
    pub fn mode_hint(&self) -> String {
        self.state.config().mode_hint()
    }

    /// Automatic-span hint for module `id`, e.g. `"auto: 1 col (3/6 × 2)"`.
    pub fn span_hint(&self, id: ModuleId) -> Option<String> {
        self.state
            .module(id)
            .map(|module| span_hint(module, self.state.config()))
    }

    pub fn stats(&self) -> LayoutStats {
        self.state.stats()
    }
}

impl Default for LayoutController {
    fn default() -> Self {
        Self::new(ControllerSettings::default())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
