use crate::{
    array::ArrayNode,
    bitmap::Bitmap,
    leaf::Leaf,
    node::Node,
    utilities::{bit, index_at, with_inserted, with_removed, with_replaced, BITS_PER_LEVEL, ENTRY_COUNT},
};
use std::{borrow::Borrow, sync::Arc};

/// The maximum number of children before promotion to an array node.
pub const MAX_BITMAPPED_CHILDREN: u8 = 16;

/// Sparse node whose children are stored in a compacted array.
#[derive(Clone, Debug)]
pub struct Bitmapped<K, V> {
    bitmap: Bitmap,
    size: usize,
    children: Box<[Arc<Node<K, V>>]>,
}

impl<K, V> Bitmapped<K, V> {
    pub fn new(bitmap: Bitmap, children: Box<[Arc<Node<K, V>>]>, size: usize) -> Self {
        debug_assert_eq!(bitmap.size() as usize, children.len());

        Self {
            bitmap,
            size,
            children,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self) -> &[Arc<Node<K, V>>] {
        &self.children
    }

    /// Returns children paired with their indices.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &Arc<Node<K, V>>)> {
        self.bitmap.indices().zip(self.children.iter())
    }

    pub fn get<Q: Eq + ?Sized>(&self, shift: u32, hash: u32, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        let bit = bit(hash, shift);

        if self.bitmap.get(bit) {
            self.children[self.bitmap.slot(bit)].get(shift + BITS_PER_LEVEL, hash, key)
        } else {
            None
        }
    }
}

impl<K: Clone + Eq, V: Clone> Bitmapped<K, V> {
    pub fn insert(&self, shift: u32, leaf: Leaf<K, V>) -> Arc<Node<K, V>> {
        let bit = bit(leaf.hash(), shift);
        let slot = self.bitmap.slot(bit);

        Arc::new(if self.bitmap.get(bit) {
            let child = &self.children[slot];
            let updated = child.insert(shift + BITS_PER_LEVEL, leaf);

            Node::Bitmapped(Self {
                bitmap: self.bitmap,
                size: self.size + updated.size() - child.size(),
                children: with_replaced(&self.children, slot, updated),
            })
        } else if self.bitmap.size() < MAX_BITMAPPED_CHILDREN {
            Node::Bitmapped(Self {
                bitmap: self.bitmap.set(bit),
                size: self.size + 1,
                children: with_inserted(&self.children, slot, Arc::new(Node::Leaf(leaf))),
            })
        } else {
            let index = index_at(leaf.hash(), shift) as usize;
            let mut children = vec![None; ENTRY_COUNT];

            for (other, child) in self.entries() {
                children[other as usize] = Some(child.clone());
            }

            children[index] = Some(Arc::new(Node::Leaf(leaf)));

            Node::Array(ArrayNode::new(children.into_boxed_slice(), self.size + 1))
        })
    }

    pub fn remove<Q: Eq + ?Sized>(&self, shift: u32, hash: u32, key: &Q) -> Option<Arc<Node<K, V>>>
    where
        K: Borrow<Q>,
    {
        let bit = bit(hash, shift);

        if !self.bitmap.get(bit) {
            return None;
        }

        let slot = self.bitmap.slot(bit);
        let child = &self.children[slot];
        let updated = child.remove(shift + BITS_PER_LEVEL, hash, key)?;

        let (bitmap, children) = if updated.size() == 0 {
            (
                self.bitmap.unset(bit),
                with_removed(&self.children, slot),
            )
        } else {
            (self.bitmap, with_replaced(&self.children, slot, updated))
        };

        debug_assert!(bitmap.size() > 0);

        if let [child] = &*children {
            if child.is_leaf() {
                return Some(child.clone());
            }
        }

        Some(Arc::new(Node::Bitmapped(Self::new(
            bitmap,
            children,
            self.size - 1,
        ))))
    }
}
