//! Group-aware drag-and-drop reordering.
//!
//! # How a drop is resolved (for beginners)
//!
//! The user drags module `D` and releases it over the module currently at
//! position `t` of the active order list `O`.
//!
//! 1. **Move-set.** If `D` has no group, only `D` moves.  If `D` has a group,
//!    every module in `O` with the same group moves, in the order they already
//!    have in `O`.  A group is a "keep these adjacent" hint, so dragging any
//!    member drags the whole block.
//! 2. **No-op check.** The target id is `O[t]`.  Dropping onto yourself or a
//!    group mate changes nothing, and is reported as such so that no history
//!    entry is recorded.
//! 3. **Remove** the move-set from `O`.
//! 4. **Insert** the move-set, in its preserved order, directly before the
//!    target id's new position.
//!
//! ```text
//! O = [A, B, C, D]   A and C share group g1, drag A onto D (t = 3)
//! move-set = [A, C]           remaining = [B, D]
//! D is now at index 1         result    = [B, A, C, D]
//! ```
//!
//! This module is pure: it computes the new sequence and leaves committing it
//! (and mirroring to the mobile list) to [`crate::domain::state::LayoutState`].

use super::ids::ModuleId;
use super::registry::ModuleRegistry;

/// Why a drop left the order list untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoopReason {
    /// The dragged id has no module, or is not in the active list.
    UnknownModule,
    /// The drop position is past the end of the list.
    TargetOutOfRange,
    /// The drop target is the dragged module or one of its group mates.
    TargetInMoveSet,
}

/// Result of planning a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The new sequence to commit.
    Moved(Vec<ModuleId>),
    /// Nothing to do.
    Unchanged(NoopReason),
}

/// Computes the ids that move together when `dragged` is dragged within
/// `order`, preserving their relative order.
///
/// Returns `None` if `dragged` is not a live module present in `order`.
pub fn move_set(
    order: &[ModuleId],
    registry: &ModuleRegistry,
    dragged: ModuleId,
) -> Option<Vec<ModuleId>> {
    let module = registry.get(dragged)?;
    if !order.contains(&dragged) {
        return None;
    }

    let ids = match module.group_id() {
        None => vec![dragged],
        Some(group) => order
            .iter()
            .copied()
            .filter(|&id| {
                registry
                    .get(id)
                    .and_then(|m| m.group_id())
                    .is_some_and(|g| g == group)
            })
            .collect(),
    };
    Some(ids)
}

/// Plans dropping `dragged` onto position `target_index` of `order`.
pub fn plan_reorder(
    order: &[ModuleId],
    registry: &ModuleRegistry,
    dragged: ModuleId,
    target_index: usize,
) -> ReorderOutcome {
    let Some(moving) = move_set(order, registry, dragged) else {
        return ReorderOutcome::Unchanged(NoopReason::UnknownModule);
    };
    let Some(&target_id) = order.get(target_index) else {
        return ReorderOutcome::Unchanged(NoopReason::TargetOutOfRange);
    };
    if moving.contains(&target_id) {
        return ReorderOutcome::Unchanged(NoopReason::TargetInMoveSet);
    }

    let mut reordered: Vec<ModuleId> = order
        .iter()
        .copied()
        .filter(|id| !moving.contains(id))
        .collect();

    // target_id is not in the move-set, so it survived the filter.
    let insert_at = reordered
        .iter()
        .position(|&id| id == target_id)
        .unwrap_or(reordered.len());
    reordered.splice(insert_at..insert_at, moving);

    ReorderOutcome::Moved(reordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::GridConfig;
    use crate::domain::module::{Module, ModuleEdit, ModuleSpec};

    /// Builds a registry of modules `1..=n`, with the given `(id, group)` tags.
    fn registry(n: u64, groups: &[(u64, &str)]) -> ModuleRegistry {
        let cfg = GridConfig::default();
        let mut reg = ModuleRegistry::new();
        for id in 1..=n {
            let mut m = Module::from_spec(ModuleId::new(id), ModuleSpec::default(), &cfg);
            if let Some((_, g)) = groups.iter().find(|(gid, _)| *gid == id) {
                m.apply(ModuleEdit::GroupId(Some((*g).to_string())), &cfg);
            }
            reg.insert(m);
        }
        reg
    }

    fn ids(raw: &[u64]) -> Vec<ModuleId> {
        raw.iter().copied().map(ModuleId::new).collect()
    }

    fn moved(outcome: ReorderOutcome) -> Vec<u64> {
        match outcome {
            ReorderOutcome::Moved(order) => order.into_iter().map(ModuleId::get).collect(),
            ReorderOutcome::Unchanged(reason) => panic!("expected a move, got {reason:?}"),
        }
    }

    // ── single modules ────────────────────────────────────────────────────────

    #[test]
    fn test_single_module_moves_before_target() {
        let reg = registry(4, &[]);
        let order = ids(&[1, 2, 3, 4]);

        let result = plan_reorder(&order, &reg, ModuleId::new(4), 1);

        assert_eq!(moved(result), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_dragging_forward_inserts_before_target() {
        let reg = registry(4, &[]);
        let order = ids(&[1, 2, 3, 4]);

        // Drag 1 onto 3: remaining [2, 3, 4], 3 at index 1 → [2, 1, 3, 4]
        let result = plan_reorder(&order, &reg, ModuleId::new(1), 2);

        assert_eq!(moved(result), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let reg = registry(3, &[]);
        let order = ids(&[1, 2, 3]);

        let result = plan_reorder(&order, &reg, ModuleId::new(2), 1);

        assert_eq!(result, ReorderOutcome::Unchanged(NoopReason::TargetInMoveSet));
    }

    #[test]
    fn test_singleton_group_behaves_like_ungrouped_module() {
        let grouped = registry(4, &[(4, "solo")]);
        let plain = registry(4, &[]);
        let order = ids(&[1, 2, 3, 4]);

        assert_eq!(
            plan_reorder(&order, &grouped, ModuleId::new(4), 0),
            plan_reorder(&order, &plain, ModuleId::new(4), 0)
        );
    }

    // ── groups ────────────────────────────────────────────────────────────────

    #[test]
    fn test_group_moves_as_block_in_preserved_order() {
        // A=1, B=2, C=3, D=4; A and C in g1; drag A onto D.
        let reg = registry(4, &[(1, "g1"), (3, "g1")]);
        let order = ids(&[1, 2, 3, 4]);

        let result = plan_reorder(&order, &reg, ModuleId::new(1), 3);

        assert_eq!(moved(result), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_dragging_any_group_member_moves_whole_group() {
        let reg = registry(5, &[(2, "g"), (4, "g")]);
        let order = ids(&[1, 2, 3, 4, 5]);

        // Drag 4 (second member) onto 1.
        let result = plan_reorder(&order, &reg, ModuleId::new(4), 0);

        assert_eq!(moved(result), vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_group_order_follows_active_list_not_creation() {
        let reg = registry(4, &[(1, "g"), (3, "g")]);
        // In this viewport 3 precedes 1.
        let order = ids(&[3, 2, 1, 4]);

        let result = plan_reorder(&order, &reg, ModuleId::new(1), 1);

        assert_eq!(moved(result), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_drop_on_group_mate_is_noop() {
        let reg = registry(4, &[(1, "g1"), (3, "g1")]);
        let order = ids(&[1, 2, 3, 4]);

        let result = plan_reorder(&order, &reg, ModuleId::new(1), 2);

        assert_eq!(result, ReorderOutcome::Unchanged(NoopReason::TargetInMoveSet));
    }

    #[test]
    fn test_group_members_stay_contiguous_for_every_target() {
        let reg = registry(6, &[(2, "g"), (5, "g"), (6, "g")]);
        let order = ids(&[1, 2, 3, 4, 5, 6]);

        for target in 0..order.len() {
            if let ReorderOutcome::Moved(result) =
                plan_reorder(&order, &reg, ModuleId::new(5), target)
            {
                let start = result
                    .iter()
                    .position(|&id| id == ModuleId::new(2))
                    .expect("member present");
                assert_eq!(
                    &result[start..start + 3],
                    ids(&[2, 5, 6]).as_slice(),
                    "group must stay contiguous and ordered (target {target})"
                );
                assert_eq!(result.len(), order.len());
            }
        }
    }

    // ── invalid input ─────────────────────────────────────────────────────────

    #[test]
    fn test_target_out_of_range_is_noop() {
        let reg = registry(2, &[]);
        let order = ids(&[1, 2]);

        let result = plan_reorder(&order, &reg, ModuleId::new(1), 5);

        assert_eq!(result, ReorderOutcome::Unchanged(NoopReason::TargetOutOfRange));
    }

    #[test]
    fn test_unknown_dragged_module_is_noop() {
        let reg = registry(2, &[]);
        let order = ids(&[1, 2]);

        let result = plan_reorder(&order, &reg, ModuleId::new(9), 0);

        assert_eq!(result, ReorderOutcome::Unchanged(NoopReason::UnknownModule));
    }

    #[test]
    fn test_move_set_skips_dangling_ids() {
        let reg = registry(3, &[(1, "g"), (3, "g")]);
        // 7 has no backing module.
        let order = ids(&[1, 7, 2, 3]);

        let set = move_set(&order, &reg, ModuleId::new(1)).expect("dragged is live");

        assert_eq!(set, ids(&[1, 3]));
    }
}
