use crate::{
    hasher::{DefaultKeyHasher, KeyHasher},
    iterator::{ClonedNodeIterator, NodeIterator},
    leaf::Leaf,
    node::{Node, Structure},
};
use std::{
    borrow::Borrow,
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

/// Map data structure of HAMT.
///
/// Note that every method does not modify the original map but creates a new
/// one if necessary. Cloning a map is O(1) and the clone shares its whole
/// trie with the original.
pub struct Map<K, V, H = DefaultKeyHasher> {
    root: Arc<Node<K, V>>,
    hasher: H,
}

impl<K, V> Map<K, V> {
    /// Creates a new map.
    pub fn new() -> Self {
        Self::with_hasher(DefaultKeyHasher)
    }
}

impl<K, V, H> Map<K, V, H> {
    /// Creates a new map with a hash function of keys.
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            root: Arc::new(Node::Empty),
            hasher,
        }
    }

    /// Returns a size of a map.
    pub fn len(&self) -> usize {
        self.root.size()
    }

    /// Returns true if a map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a hash function of a map.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns key-value pairs in a map.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(NodeIterator::new(&self.root))
    }

    /// Returns keys in a map.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns values in a map.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns true if two maps share the same trie.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    pub(crate) fn root(&self) -> &Arc<Node<K, V>> {
        &self.root
    }
}

impl<K: Debug, V: Debug, H> Map<K, V, H> {
    /// Dumps the internal structure of a map for debugging.
    ///
    /// The format is not stable.
    pub fn dump(&self) -> String {
        format!("Map({})", Structure(&self.root))
    }
}

impl<K: Eq, V, H> Map<K, V, H> {
    /// Finds a value corresponding to a key.
    pub fn get<Q: Eq + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        H: KeyHasher<Q>,
    {
        self.root.get(0, self.hasher.hash_key(key), key)
    }

    /// Finds a value corresponding to a key or returns a default value.
    pub fn get_or<Q: Eq + ?Sized>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        H: KeyHasher<Q>,
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Checks if a key is contained in a map.
    pub fn contains_key<Q: Eq + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        H: KeyHasher<Q>,
    {
        self.get(key).is_some()
    }
}

impl<K: Clone + Eq, V: Clone + PartialEq, H: KeyHasher<K> + Clone> Map<K, V, H> {
    /// Inserts a key-value pair into a map.
    ///
    /// If the same value is stored for the key already, the map itself is
    /// returned.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        let hash = self.hasher.hash_key(&key);

        if self.root.get(0, hash, &key) == Some(&value) {
            return self.clone();
        }

        self.with_root(self.root.insert(0, Leaf::new(hash, key, value)))
    }

    /// Extends a map with an iterator of key-value pairs.
    #[must_use]
    pub fn extend(&self, iterator: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut map = self.clone();

        for (key, value) in iterator {
            map = map.insert(key, value);
        }

        map
    }
}

impl<K: Clone + Eq, V: Clone, H: Clone> Map<K, V, H> {
    /// Removes a key from a map if any.
    #[must_use]
    pub fn remove<Q: Eq + ?Sized>(&self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        H: KeyHasher<Q>,
    {
        match self.root.remove(0, self.hasher.hash_key(key), key) {
            Some(root) => self.with_root(root),
            None => self.clone(),
        }
    }

    fn with_root(&self, root: Arc<Node<K, V>>) -> Self {
        Self {
            root,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, H: Clone> Clone for Map<K, V, H> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, H: Default> Default for Map<K, V, H> {
    fn default() -> Self {
        Self::with_hasher(H::default())
    }
}

impl<K: Debug, V: Debug, H> Debug for Map<K, V, H> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq, V: PartialEq, H: KeyHasher<K>> PartialEq for Map<K, V, H> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Eq, V: Eq, H: KeyHasher<K>> Eq for Map<K, V, H> {}

impl<K: Clone + Eq, V: Clone + PartialEq, H: KeyHasher<K> + Clone + Default> FromIterator<(K, V)>
    for Map<K, V, H>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        Self::default().extend(iterator)
    }
}

/// Iterator over borrowed key-value pairs of a map.
#[derive(Debug)]
pub struct Iter<'a, K, V>(NodeIterator<'a, K, V>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V, H> IntoIterator for &'a Map<K, V, H> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cloned key-value pairs of a map.
#[derive(Debug)]
pub struct IntoIter<K, V>(ClonedNodeIterator<K, V>);

impl<K: Clone, V: Clone> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K: Clone, V: Clone> ExactSizeIterator for IntoIter<K, V> {}

impl<K: Clone, V: Clone, H> IntoIterator for Map<K, V, H> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(ClonedNodeIterator::new(self.root))
    }
}
