//! Integration tests for the grid-core layout engine.
//!
//! These tests drive [`LayoutState`] and [`History`] together through the
//! public API, the same way the designer controller does: mutate, then
//! checkpoint a snapshot; undo/redo by restoring snapshots.

use grid_core::{
    mobile_span, GridConfig, History, LayoutSnapshot, LayoutState, ModuleEdit, ModuleId,
    ModuleSpec, ReorderOutcome, Viewport,
};

/// A state plus a history seeded with the initial (empty) snapshot.
struct Session {
    state: LayoutState,
    history: History<LayoutSnapshot>,
}

impl Session {
    fn new(desktop_columns: i64, target_columns: i64) -> Self {
        let state = LayoutState::new(GridConfig::new(desktop_columns, target_columns));
        let mut history = History::default();
        history.checkpoint(state.snapshot());
        Self { state, history }
    }

    fn checkpoint(&mut self) {
        self.history.checkpoint(self.state.snapshot());
    }

    fn create(&mut self, col: i64, row: i64) -> ModuleId {
        let id = self.state.create_module(ModuleSpec::sized(col, row));
        self.checkpoint();
        id
    }

    fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo().cloned() {
            self.state.restore(&snapshot);
        }
    }

    fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo().cloned() {
            self.state.restore(&snapshot);
        }
    }

    fn desktop(&self) -> Vec<ModuleId> {
        self.state.orders().desktop().to_vec()
    }
}

#[test]
fn test_span_scenario_auto_and_manual() {
    // A (col=3,row=2), B (col=3,row=2), desktop 6, target 2
    let mut s = Session::new(6, 2);
    let a = s.create(3, 2);
    let b = s.create(3, 2);

    s.state
        .update_module(b, ModuleEdit::MobileCol(Some(2)))
        .expect("module exists");

    let module_a = s.state.module(a).expect("A exists");
    let module_b = s.state.module(b).expect("B exists");
    assert_eq!(mobile_span(module_a, 6, 2), 1);
    assert_eq!(mobile_span(module_b, 6, 2), 2);
}

#[test]
fn test_group_drag_scenario() {
    // [A, B, C, D]; A and C in g1; drag A onto D's slot → [B, A, C, D]
    let mut s = Session::new(6, 2);
    let ids: Vec<ModuleId> = (0..4).map(|_| s.create(1, 1)).collect();
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    for id in [a, c] {
        s.state
            .update_module(id, ModuleEdit::GroupId(Some("g1".to_string())))
            .expect("module exists");
    }

    let outcome = s.state.reorder(Viewport::Desktop, a, 3);

    assert!(matches!(outcome, ReorderOutcome::Moved(_)));
    assert_eq!(s.desktop(), vec![b, a, c, d]);
    assert!(s.state.orders_consistent());
}

#[test]
fn test_undo_k_times_restores_initial_state_and_redo_replays() {
    let mut s = Session::new(6, 2);
    let initial = s.state.snapshot();

    for _ in 0..5 {
        s.create(2, 1);
    }
    let last = s.state.snapshot();

    for _ in 0..5 {
        s.undo();
    }
    assert_eq!(s.state.snapshot(), initial);

    for _ in 0..5 {
        s.redo();
    }
    assert_eq!(s.state.snapshot(), last);
}

#[test]
fn test_redo_after_single_undo_restores_pre_undo_state() {
    let mut s = Session::new(6, 2);
    let a = s.create(2, 1);
    let b = s.create(2, 1);
    s.state.reorder(Viewport::Desktop, b, 0);
    s.checkpoint();
    let before_undo = s.state.snapshot();

    s.undo();
    assert_eq!(s.desktop(), vec![a, b]);

    s.redo();
    assert_eq!(s.state.snapshot(), before_undo);
}

#[test]
fn test_new_edit_after_undo_kills_redo_branch() {
    let mut s = Session::new(6, 2);
    s.create(1, 1);
    let second = s.create(1, 1);

    s.undo();
    let third = s.create(4, 1);
    s.redo();

    assert!(s.state.module(second).is_none(), "undone module stays gone");
    assert!(s.state.module(third).is_some());
    assert!(!s.history.can_redo());
}

#[test]
fn test_history_capacity_holds_after_many_edits() {
    let mut s = Session::new(6, 2);
    for _ in 0..150 {
        s.create(1, 1);
    }

    assert_eq!(s.history.len(), 100);

    let mut undos = 0;
    while s.history.can_undo() {
        s.undo();
        undos += 1;
    }
    assert_eq!(undos, 99);
    // The oldest reachable state holds 51 modules (snapshots 0..=50 evicted).
    assert_eq!(s.state.registry().len(), 51);
}

#[test]
fn test_order_sets_stay_equal_through_mixed_edits() {
    let mut s = Session::new(6, 2);
    let ids: Vec<ModuleId> = (0..6).map(|_| s.create(2, 1)).collect();

    s.state.reorder(Viewport::Mobile, ids[5], 0);
    s.state.delete_module(ids[2]).expect("module exists");
    s.state.reorder(Viewport::Desktop, ids[0], 3);
    s.state.set_mobile_order_locked(true);
    s.state.create_module(ModuleSpec::default());
    s.undo();

    assert!(s.state.orders_consistent());
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut s = Session::new(6, 2);
    let a = s.create(3, 2);
    s.state
        .update_module(a, ModuleEdit::GroupId(Some("hero".to_string())))
        .expect("module exists");

    let json = serde_json::to_value(s.state.snapshot()).expect("serialize");

    assert_eq!(json["modules"][0]["col"], 3);
    assert_eq!(json["modules"][0]["type"], "box");
    assert_eq!(json["modules"][0]["group_id"], "hero");
    assert_eq!(json["desktop_order"][0], a.get());
}
