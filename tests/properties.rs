use std::collections::BTreeMap;

use proptest::{
    collection::vec,
    prelude::*,
};
use strata::{
    skiplist::DEFAULT_MAX_HEIGHT,
    SkipList,
};

proptest! {
    /// Random operation sequences behave exactly like a BTreeMap that keeps
    /// the first value for duplicate inserts, and the structural promises
    /// (size, level bounds, sorted base-level traversal) hold after every
    /// step.
    #[test]
    fn test_random_map_operations(
        ops in vec((0..3u8, 0..64u16), 1..200),
        seed in any::<u64>(),
    ) {
        let mut list = SkipList::with_seed(seed);
        let mut model: BTreeMap<u16, String> = BTreeMap::new();

        for (op, key) in ops {
            match op {
                | 0 => {
                    let value = format!("v{key}");
                    list.insert(key, value.clone());
                    model.entry(key).or_insert(value);
                },
                | 1 => {
                    prop_assert_eq!(list.remove(&key), model.remove(&key));
                },
                | _ => {
                    prop_assert_eq!(list.search(&key), model.get(&key));
                },
            }

            prop_assert_eq!(list.size(), model.len());
            prop_assert!(list.level() >= 1);
            prop_assert!(list.level() <= DEFAULT_MAX_HEIGHT);

            let entries: Vec<(&u16, &String)> = list.iter().collect();
            let expected: Vec<(&u16, &String)> = model.iter().collect();
            prop_assert_eq!(entries, expected);
        }
    }

    /// Every inserted key stays findable with its original value until it is
    /// removed, and keys never inserted stay absent.
    #[test]
    fn test_membership(keys in vec(0..1_000u32, 1..100), probe in 0..1_000u32) {
        let mut list = SkipList::with_seed(0x5eed);
        for &key in &keys {
            list.insert(key, key as u64 * 3);
        }

        for &key in &keys {
            prop_assert_eq!(list.search(&key), Some(&(key as u64 * 3)));
        }
        if !keys.contains(&probe) {
            prop_assert_eq!(list.search(&probe), None);
        }
    }
}
