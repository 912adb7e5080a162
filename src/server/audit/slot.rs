use std::collections::{BTreeMap, BTreeSet};

use entity::order_account;

/// Two or more assignments holding the same (account, slot) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotConflict {
    pub account_id: i32,
    pub slot_number: i32,
    /// Conflicting assignments sorted by `(order_id, id)`
    pub assignments: Vec<order_account::Model>,
}

/// Finds every (account_id, slot_number) key occupied by more than one assignment.
///
/// Groups the input in a single pass and keeps only groups larger than one.
/// The result is ordered by key, so the same set of assignments always yields
/// the same output regardless of input order. No attempt is made to pick a
/// canonical assignment out of a conflicting group.
///
/// The caller decides which rows to check; the uniqueness rule only applies to
/// active assignments, so the audit endpoints pass active rows only.
pub fn find_slot_conflicts<I>(assignments: I) -> Vec<SlotConflict>
where
    I: IntoIterator<Item = order_account::Model>,
{
    let mut groups: BTreeMap<(i32, i32), Vec<order_account::Model>> = BTreeMap::new();

    for assignment in assignments {
        groups
            .entry((assignment.account_id, assignment.slot_number))
            .or_default()
            .push(assignment);
    }

    groups
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .map(|((account_id, slot_number), mut group)| {
            group.sort_by_key(|a| (a.order_id, a.id));

            SlotConflict {
                account_id,
                slot_number,
                assignments: group,
            }
        })
        .collect()
}

/// Returns the lowest slot in `1..=max_slots` not present in `occupied`.
pub fn next_free_slot<I>(occupied: I, max_slots: i32) -> Option<i32>
where
    I: IntoIterator<Item = i32>,
{
    let occupied: BTreeSet<i32> = occupied.into_iter().collect();

    (1..=max_slots).find(|slot| !occupied.contains(slot))
}

/// Whether `slot_number` lies within an account's capacity.
pub fn slot_in_range(slot_number: i32, max_slots: i32) -> bool {
    (1..=max_slots).contains(&slot_number)
}
