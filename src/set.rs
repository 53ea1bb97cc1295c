use crate::{
    hasher::{DefaultKeyHasher, KeyHasher},
    map::{self, Map},
    node::Structure,
};
use std::{
    borrow::Borrow,
    fmt::{self, Debug, Formatter},
};

/// Set data structure of HAMT.
///
/// Note that every method does not modify the original set but creates a new
/// one if necessary.
pub struct Set<T, H = DefaultKeyHasher>(Map<T, (), H>);

impl<T> Set<T> {
    /// Creates a new set.
    pub fn new() -> Self {
        Self::with_hasher(DefaultKeyHasher)
    }
}

impl<T, H> Set<T, H> {
    /// Creates a new set with a hash function of values.
    pub fn with_hasher(hasher: H) -> Self {
        Self(Map::with_hasher(hasher))
    }

    /// Returns a size of a set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if a set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns values in a set.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.0.iter())
    }

    /// Returns true if two sets share the same trie.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl<T: Debug, H> Set<T, H> {
    /// Dumps the internal structure of a set for debugging.
    ///
    /// The format is not stable.
    pub fn dump(&self) -> String {
        format!("Set({})", Structure(self.0.root()))
    }
}

impl<T: Eq, H> Set<T, H> {
    /// Checks if a value is contained in a set.
    pub fn contains<Q: Eq + ?Sized>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        H: KeyHasher<Q>,
    {
        self.0.contains_key(value)
    }
}

impl<T: Clone + Eq, H: KeyHasher<T> + Clone> Set<T, H> {
    /// Inserts a value into a set.
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        Self(self.0.insert(value, ()))
    }

    /// Removes a value from a set if any.
    #[must_use]
    pub fn remove<Q: Eq + ?Sized>(&self, value: &Q) -> Self
    where
        T: Borrow<Q>,
        H: KeyHasher<Q>,
    {
        Self(self.0.remove(value))
    }

    /// Extends a set with an iterator of values.
    #[must_use]
    pub fn extend(&self, iterator: impl IntoIterator<Item = T>) -> Self {
        Self(self.0.extend(iterator.into_iter().map(|value| (value, ()))))
    }

    /// Calculates union of two sets.
    pub fn union(&self, other: &Self) -> Self {
        if self.len() < other.len() {
            other.extend(self.iter().cloned())
        } else {
            self.extend(other.iter().cloned())
        }
    }

    /// Calculates intersection of two sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut set = Self::with_hasher(self.0.hasher().clone());

        for element in self {
            if other.contains(element) {
                set = set.insert(element.clone());
            }
        }

        set
    }

    /// Calculates difference of two sets.
    pub fn difference(&self, other: &Self) -> Self {
        let mut set = self.clone();

        for element in other {
            set = set.remove(element);
        }

        set
    }
}

impl<T, H: Clone> Clone for Set<T, H> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T, H: Default> Default for Set<T, H> {
    fn default() -> Self {
        Self(Map::default())
    }
}

impl<T: Debug, H> Debug for Set<T, H> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Eq, H: KeyHasher<T>> PartialEq for Set<T, H> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, H: KeyHasher<T>> Eq for Set<T, H> {}

impl<T: Clone + Eq, H: KeyHasher<T> + Clone + Default> FromIterator<T> for Set<T, H> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::default().extend(iterator)
    }
}

/// Iterator over borrowed values of a set.
#[derive(Debug)]
pub struct Iter<'a, T>(map::Iter<'a, T, ()>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(value, _)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T, H> IntoIterator for &'a Set<T, H> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cloned values of a set.
#[derive(Debug)]
pub struct IntoIter<T>(map::IntoIter<T, ()>);

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(value, _)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone, H> IntoIterator for Set<T, H> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.0.into_iter())
    }
}
