#![cfg(test)]

// Property tests for ChainTable kept inside the crate so they can reach
// the structural layer directly.

use crate::chain_table::ChainTable;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Find(usize),
    Mutate(usize, i32),
    GetOrInsert(usize, i32),
    Contains(String),
    Iterate,
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Find),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::GetOrInsert(i, v)),
            1 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            1 => Just(OpI::Iterate),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - insert overwrites in place and reports the replaced value like the model;
//   the load-factor bound holds immediately after every insert.
// - find/contains/remove parity with the model, including absent keys.
// - find_or_insert_with only defaults on a miss and exposes the live slot.
// - iteration yields exactly the model's key set, each key once.
// - len/is_empty parity with the model after every operation, and len
//   always equals the number of entries reachable by iteration.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ChainTable<String, i32> = ChainTable::new(2, 1.0);
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = pool[i].clone();
                    let replaced = sut.insert(k.clone(), v);
                    prop_assert_eq!(replaced, model.insert(k, v));
                    prop_assert!(
                        sut.load_factor() <= sut.max_load_factor(),
                        "load factor {} above {} right after insert",
                        sut.load_factor(),
                        sut.max_load_factor()
                    );
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.remove(k.as_str()), model.remove(k));
                }
                OpI::Find(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.find(k.as_str()), model.get(k));
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    match (sut.find_mut(k.as_str()), model.get_mut(k)) {
                        (Some(sv), Some(mv)) => {
                            *sv = sv.wrapping_add(d);
                            *mv = mv.wrapping_add(d);
                        }
                        (None, None) => {}
                        (sv, mv) => {
                            prop_assert!(false, "find_mut {:?} vs model {:?}", sv, mv);
                        }
                    }
                }
                OpI::GetOrInsert(i, v) => {
                    let k = pool[i].clone();
                    let expected_miss = !model.contains_key(&k);
                    let slot = sut.find_or_insert_with(k.clone(), || v);
                    let model_slot = model.entry(k).or_insert(v);
                    prop_assert_eq!(&*slot, &*model_slot);
                    if expected_miss {
                        prop_assert_eq!(*slot, v);
                    }
                }
                OpI::Contains(k) => {
                    prop_assert_eq!(sut.contains(k.as_str()), model.contains_key(&k));
                }
                OpI::Iterate => {
                    let seen: BTreeSet<&String> = sut.iter().map(|(k, _)| k).collect();
                    let expected: BTreeSet<&String> = model.keys().collect();
                    prop_assert_eq!(seen, expected);
                    prop_assert_eq!(sut.iter().count(), model.len());
                }
                OpI::Clear => {
                    let buckets = sut.bucket_count();
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.bucket_count(), buckets);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }
    }
}

// Property: growth bookkeeping. Bucket counts only double, never shrink,
// and the full key/value set survives every rehash.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_preserves_entries(n in 1usize..200, buckets in 1usize..16) {
        let mut sut: ChainTable<u32, u32> = ChainTable::new(buckets, 1.0);
        let initial = sut.bucket_count();
        let mut last = initial;

        for i in 0..n as u32 {
            sut.insert(i, i.wrapping_mul(31));
            let now = sut.bucket_count();
            prop_assert!(now >= last, "bucket count shrank");
            prop_assert!(now % initial == 0, "growth must double from the initial size");
            last = now;
        }

        prop_assert_eq!(sut.len(), n);
        for i in 0..n as u32 {
            prop_assert_eq!(sut.find(&i), Some(&i.wrapping_mul(31)));
        }
    }
}
