//! Keyed child-collection reconciliation.
//!
//! Every container node in the explorer owns a map from a stable remote key
//! (stack id, function name, region code) to a child node. A refresh never
//! rebuilds that map wholesale: [`update_in_place`] diffs it against the
//! freshly fetched key set so that surviving children keep their identity
//! and only newly appeared keys get freshly constructed nodes. The host UI
//! tracks selection and expansion by node identity, so identity preservation
//! is the contract here, not an optimization.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Reconcile `existing` against `fresh_keys` in place.
///
/// - Keys present in both: `update` is invoked with the surviving entry so
///   it can refresh its cached attributes. The entry itself is not replaced.
/// - Keys only in `fresh_keys`: `create` builds a new entry.
/// - Keys only in `existing`: the entry is removed.
///
/// Duplicate fresh keys collapse to one. Iteration order is unspecified;
/// callers sort for display after reconciling. Calling with an empty fresh
/// set clears the map, and calling on an empty map is a pure insert.
pub fn update_in_place<K, V, I>(
    existing: &mut HashMap<K, V>,
    fresh_keys: I,
    mut update: impl FnMut(&K, &V),
    mut create: impl FnMut(&K) -> V,
) where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let fresh: HashSet<K> = fresh_keys.into_iter().collect();

    existing.retain(|key, _| fresh.contains(key));

    for key in fresh {
        match existing.get(&key) {
            Some(entry) => update(&key, entry),
            None => {
                let entry = create(&key);
                existing.insert(key, entry);
            }
        }
    }
}

/// Keys present in both `left` and `right`, deduplicated.
pub fn intersection<K, L, R>(left: L, right: R) -> HashSet<K>
where
    K: Eq + Hash,
    L: IntoIterator<Item = K>,
    R: IntoIterator<Item = K>,
{
    let right: HashSet<K> = right.into_iter().collect();
    left.into_iter().filter(|key| right.contains(key)).collect()
}
