use crate::{leaf::Leaf, node::Node, utilities::with_removed};
use std::{borrow::Borrow, sync::Arc};

/// Leaves whose hashes are equal in all 32 bits.
#[derive(Clone, Debug)]
pub struct Collision<K, V> {
    hash: u32,
    leaves: Box<[Leaf<K, V>]>,
}

impl<K, V> Collision<K, V> {
    pub fn new(first: Leaf<K, V>, second: Leaf<K, V>) -> Self {
        debug_assert_eq!(first.hash(), second.hash());

        Self {
            hash: first.hash(),
            leaves: vec![first, second].into_boxed_slice(),
        }
    }

    pub fn hash(&self) -> u32 {
        self.hash
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn leaves(&self) -> &[Leaf<K, V>] {
        &self.leaves
    }

    fn find_index<Q: Eq + ?Sized>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
    {
        self.leaves
            .iter()
            .position(|leaf| leaf.key().borrow() == key)
    }

    pub fn get<Q: Eq + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        self.find_index(key).map(|index| self.leaves[index].value())
    }
}

impl<K: Clone + Eq, V: Clone> Collision<K, V> {
    /// Replaces a leaf of the same key if any and appends a new leaf.
    pub fn insert(&self, leaf: Leaf<K, V>) -> Self {
        debug_assert_eq!(self.hash, leaf.hash());

        let mut leaves = self
            .leaves
            .iter()
            .filter(|other| other.key() != leaf.key())
            .cloned()
            .collect::<Vec<_>>();

        leaves.push(leaf);

        Self {
            hash: self.hash,
            leaves: leaves.into_boxed_slice(),
        }
    }

    pub fn remove<Q: Eq + ?Sized>(&self, key: &Q) -> Option<Arc<Node<K, V>>>
    where
        K: Borrow<Q>,
    {
        debug_assert!(self.leaves.len() >= 2);

        let index = self.find_index(key)?;

        Some(Arc::new(if self.leaves.len() == 2 {
            Node::Leaf(self.leaves[1 - index].clone())
        } else {
            Node::Collision(Self {
                hash: self.hash,
                leaves: with_removed(&self.leaves, index),
            })
        }))
    }
}
