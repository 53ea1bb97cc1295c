use crate::{node::tests::validate, Map, Set};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

type Hasher = fn(&u16) -> u32;

// Spreads keys but collides every pair equal modulo 512.
fn scattered(key: &u16) -> u32 {
    (*key as u32 % 512).wrapping_mul(0x9e37_79b9)
}

// Keys differ only in the highest bits so that tries go deep.
fn deep(key: &u16) -> u32 {
    (*key as u32) << 22
}

fn hashers() -> impl Strategy<Value = Hasher> {
    prop_oneof![
        Just(scattered as Hasher),
        Just(deep as Hasher),
        Just((|key: &u16| *key as u32) as Hasher),
    ]
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u16, u32),
    Remove(u16),
    Get(u16),
}

fn key_strategy() -> impl Strategy<Value = u16> + Clone {
    0u16..2048
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), any::<u32>()).prop_map(|(key, value)| Op::Insert(key, value)),
        30 => key.clone().prop_map(Op::Remove),
        20 => key.prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=1000)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(hasher in hashers(), ops in ops_strategy()) {
        let mut map = Map::with_hasher(hasher);
        let mut model = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    map = map.insert(key, value);
                    model.insert(key, value);
                }
                Op::Remove(key) => {
                    map = map.remove(&key);
                    model.remove(&key);
                }
                Op::Get(key) => {
                    prop_assert_eq!(map.get(&key), model.get(&key));
                    prop_assert_eq!(map.contains_key(&key), model.contains_key(&key));
                }
            }

            prop_assert_eq!(map.len(), model.len());
        }

        prop_assert_eq!(validate(map.root(), 0, 0), model.len());
        prop_assert_eq!(
            map.iter().map(|(key, value)| (*key, *value)).collect::<HashMap<_, _>>(),
            model
        );
    }

    #[test]
    fn prop_old_versions_unchanged(hasher in hashers(), ops in ops_strategy()) {
        let mut versions = vec![(Map::with_hasher(hasher), HashMap::new())];

        for op in ops {
            let (map, model) = versions[versions.len() - 1].clone();

            versions.push(match op {
                Op::Insert(key, value) => {
                    let mut model = model;
                    model.insert(key, value);
                    (map.insert(key, value), model)
                }
                Op::Remove(key) => {
                    let mut model = model;
                    model.remove(&key);
                    (map.remove(&key), model)
                }
                Op::Get(_) => (map, model),
            });
        }

        for (map, model) in &versions {
            prop_assert_eq!(map.len(), model.len());

            for (key, value) in model {
                prop_assert_eq!(map.get(key), Some(value));
            }
        }
    }

    #[test]
    fn prop_no_op_keeps_trie(
        hasher in hashers(),
        keys in prop::collection::vec(key_strategy(), 1..=300),
        missing in key_strategy(),
    ) {
        let map = keys
            .iter()
            .fold(Map::with_hasher(hasher), |map, &key| map.insert(key, key as u32));

        for key in &keys {
            prop_assert!(map.insert(*key, *key as u32).ptr_eq(&map));
        }

        if !keys.contains(&missing) {
            prop_assert!(map.remove(&missing).ptr_eq(&map));
        }
    }

    #[test]
    fn prop_remove_all(hasher in hashers(), keys in prop::collection::vec(key_strategy(), 0..=500)) {
        let mut map = keys
            .iter()
            .fold(Map::with_hasher(hasher), |map, &key| map.insert(key, ()));
        let mut keys = keys;

        keys.reverse();

        for key in &keys {
            map = map.remove(key);
            validate(map.root(), 0, 0);
        }

        prop_assert!(map.is_empty());
        prop_assert_eq!(map.dump(), "Map({})");
    }

    #[test]
    fn prop_set_operations(
        left in prop::collection::hash_set(key_strategy(), 0..=200),
        right in prop::collection::hash_set(key_strategy(), 0..=200),
    ) {
        let left_set = left.iter().copied().fold(Set::with_hasher(scattered as Hasher), |set, key| set.insert(key));
        let right_set = right.iter().copied().fold(Set::with_hasher(scattered as Hasher), |set, key| set.insert(key));

        let collect = |set: Set<u16, Hasher>| set.iter().copied().collect::<HashSet<_>>();

        prop_assert_eq!(
            collect(left_set.union(&right_set)),
            left.union(&right).copied().collect::<HashSet<_>>()
        );
        prop_assert_eq!(
            collect(left_set.intersection(&right_set)),
            left.intersection(&right).copied().collect::<HashSet<_>>()
        );
        prop_assert_eq!(
            collect(left_set.difference(&right_set)),
            left.difference(&right).copied().collect::<HashSet<_>>()
        );
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }

        for i in 0..items.len() {
            if used[i] {
                continue;
            }

            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    // Collisions, shared prefixes and distinct chunks all at once.
    let keys = [0u16, 512, 1024, 1, 33, 2047];
    let expected = keys
        .iter()
        .fold(Map::with_hasher(scattered as Hasher), |map, &key| map.insert(key, key));

    for_each_permutation(&keys, |permutation| {
        let map = permutation
            .into_iter()
            .fold(Map::with_hasher(scattered as Hasher), |map, key| map.insert(key, key));

        validate(map.root(), 0, 0);
        assert_eq!(map, expected);
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    let keys = [0u16, 512, 1024, 1, 33, 2047];
    let full = keys
        .iter()
        .fold(Map::with_hasher(deep as Hasher), |map, &key| map.insert(key, key));

    for_each_permutation(&keys, |permutation| {
        let mut map = full.clone();
        let mut remaining = keys.len();

        for key in permutation {
            map = map.remove(&key);
            remaining -= 1;

            assert_eq!(validate(map.root(), 0, 0), remaining);
            assert_eq!(map.get(&key), None);
        }

        assert!(map.is_empty());
    });
}
