use crate::utilities::hash_key;
use std::hash::Hash;

/// Hash function of keys in maps and sets.
///
/// A hasher must be deterministic: it returns the same hash for the same key
/// for as long as any two versions of a container can be compared, and it
/// returns the same hash for keys that are equal.
///
/// Any function of `&Q -> u32` is a hasher.
///
/// ```
/// use persistent_hamt::Map;
///
/// fn modulo(key: &u32) -> u32 {
///     key % 256
/// }
///
/// let map = Map::with_hasher(modulo).insert(1, "one").insert(257, "two");
///
/// assert_eq!(map.get(&257), Some(&"two"));
/// ```
pub trait KeyHasher<Q: ?Sized> {
    fn hash_key(&self, key: &Q) -> u32;
}

/// Default hasher based on the standard library's `DefaultHasher`.
///
/// Borrowed forms of keys hash identically, so lookups of `&str` keys in
/// `String` maps work.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultKeyHasher;

impl<Q: Hash + ?Sized> KeyHasher<Q> for DefaultKeyHasher {
    fn hash_key(&self, key: &Q) -> u32 {
        hash_key(key)
    }
}

impl<Q: ?Sized, F: Fn(&Q) -> u32> KeyHasher<Q> for F {
    fn hash_key(&self, key: &Q) -> u32 {
        self(key)
    }
}
