// SPDX-License-Identifier: Apache-2.0
// © vomap contributors

#![allow(missing_docs)]
//! Property tests for collapse, foreign-key padding, unroll and identity digests.
use std::sync::Arc;

use proptest::prelude::*;

use vomap_core::{
    group_by_keys, Column, Field, FieldKind, FieldValue, Identity, IdentityCache, InstanceArena,
    KeyComponent, KeyMatrix, Multiplicity, Value,
};

fn int_value() -> impl Strategy<Value = Value> {
    any::<i64>().prop_map(Value::Int)
}

proptest! {
    // ── 1. multiplicity collapse ──

    #[test]
    fn single_fields_unwrap_and_multi_fields_stay_lists(
        values in prop::collection::vec(int_value(), 0..5)
    ) {
        let items: Vec<FieldValue> = values.iter().cloned().map(FieldValue::Value).collect();

        let single = Multiplicity::OPTIONAL.collapse(items.clone());
        match items.len() {
            0 => prop_assert_eq!(single, FieldValue::Null),
            1 => prop_assert_eq!(single, items[0].clone()),
            _ => prop_assert_eq!(single, FieldValue::List(items.clone())),
        }

        let many = Multiplicity::MANY.collapse(items.clone());
        prop_assert_eq!(many, FieldValue::List(items));
    }

    // ── 2. foreign-key padding ──

    #[test]
    fn grouping_yields_max_match_slices_of_target_length(
        member_targets in prop::collection::vec(0_i64..6, 0..24),
        target_count in 1_usize..6,
    ) {
        let mut arena = InstanceArena::new();
        let members: Vec<_> = (0..member_targets.len())
            .map(|i| arena.allocate("t:M", Identity::new(format!("m{i}")), false))
            .collect();
        let member_keys: Vec<Vec<Value>> =
            member_targets.iter().map(|t| vec![Value::Int(*t)]).collect();
        let target_keys: Vec<Vec<Value>> =
            (0..target_count).map(|t| vec![Value::Int(t as i64)]).collect();

        let histogram: Vec<usize> = (0..target_count)
            .map(|t| member_targets.iter().filter(|m| **m == t as i64).count())
            .collect();
        let widest = histogram.iter().copied().max().unwrap_or(0);

        let slices = group_by_keys(&member_keys, &members, &target_keys);
        prop_assert_eq!(slices.len(), widest);
        for (n, slice) in slices.iter().enumerate() {
            prop_assert_eq!(slice.len(), target_count);
            for (t, entry) in slice.iter().enumerate() {
                prop_assert_eq!(entry.is_some(), n < histogram[t]);
            }
        }
    }

    // ── 3. unroll round-trip ──

    #[test]
    fn unroll_returns_one_row_per_cell(cells in prop::collection::vec(-1.0e6_f64..1.0e6, 0..16)) {
        let mut arena = InstanceArena::new();
        let h = arena.allocate("t:Pos", Identity::new("p"), false);
        let column = Arc::new(Column::new(
            "c",
            "c",
            cells.iter().copied().map(Value::Real).collect(),
        ));
        arena.set_field(h, "lon", Field {
            kind: FieldKind::Attribute,
            multiplicity: Multiplicity::ONE,
            value: FieldValue::Column(column),
        });

        prop_assert_eq!(arena.cardinality(h), cells.len());
        let rows = arena.unroll(h);
        prop_assert_eq!(rows.len(), cells.len());
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(
                arena.field(*row, "lon"),
                Some(&FieldValue::Value(Value::Real(cells[i])))
            );
        }
        prop_assert_eq!(arena.unroll(h), rows);
    }

    // ── 4. identity digests ──

    #[test]
    fn equal_identities_share_digest_and_cache_slot(
        id in "[A-Za-z0-9_-]{1,12}",
        keys in prop::collection::vec(any::<i64>(), 0..4),
    ) {
        let components: Vec<KeyComponent> =
            keys.iter().map(|k| KeyComponent::Scalar(Value::Int(*k))).collect();
        let build = || if components.is_empty() {
            Identity::new(id.clone())
        } else {
            Identity::with_keys(id.clone(), KeyMatrix::from_components(&components))
        };
        let a = build();
        let b = build();
        prop_assert_eq!(a.digest(), b.digest());

        let mut arena = InstanceArena::new();
        let h = arena.allocate("t:X", a.clone(), false);
        let mut cache = IdentityCache::new();
        cache.put(a, h);
        prop_assert_eq!(cache.get(&b), Some(h));
    }
}
