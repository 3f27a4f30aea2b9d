// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Foreign-key grouping for external instance batches.

use crate::identity::keys_equal;
use crate::instance::InstanceHandle;
use crate::value::Value;

/// Groups batch members under the target rows they point back to.
///
/// `member_keys[n]` is the foreign key of `members[n]`; `target_keys` are the
/// target collection's primary keys in row order. Every target row collects
/// its matches in member order, all groups are padded with `None` to the
/// largest match count `M`, and the result holds `M` slices where slice `n`
/// has one entry per target row: that row's `n`-th match.
///
/// Returns no slices when there are no target rows or nothing matched.
pub fn group_by_keys(
    member_keys: &[Vec<Value>],
    members: &[InstanceHandle],
    target_keys: &[Vec<Value>],
) -> Vec<Vec<Option<InstanceHandle>>> {
    let groups: Vec<Vec<InstanceHandle>> = target_keys
        .iter()
        .map(|target| {
            members
                .iter()
                .zip(member_keys)
                .filter(|(_, key)| keys_equal(key, target))
                .map(|(h, _)| *h)
                .collect()
        })
        .collect();

    let widest = groups.iter().map(Vec::len).max().unwrap_or(0);
    (0..widest)
        .map(|n| groups.iter().map(|g| g.get(n).copied()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;
    use crate::instance::InstanceArena;

    fn handles(n: usize) -> Vec<InstanceHandle> {
        let mut arena = InstanceArena::new();
        (0..n)
            .map(|i| arena.allocate("t:Lum", Identity::new(format!("l{i}")), false))
            .collect()
    }

    fn key(v: i64) -> Vec<Value> {
        vec![Value::Int(v)]
    }

    #[test]
    fn pads_to_widest_group() {
        let m = handles(4);
        // target 1 has three members, target 2 has one, target 3 none.
        let member_keys = vec![key(1), key(2), key(1), key(1)];
        let targets = vec![key(1), key(2), key(3)];
        let slices = group_by_keys(&member_keys, &m, &targets);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0], vec![Some(m[0]), Some(m[1]), None]);
        assert_eq!(slices[1], vec![Some(m[2]), None, None]);
        assert_eq!(slices[2], vec![Some(m[3]), None, None]);
    }

    #[test]
    fn no_targets_or_no_matches_yield_no_slices() {
        let m = handles(2);
        assert!(group_by_keys(&[key(1), key(1)], &m, &[]).is_empty());
        assert!(group_by_keys(&[key(1), key(1)], &m, &[key(5)]).is_empty());
    }
}
