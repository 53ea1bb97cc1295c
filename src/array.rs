use crate::{
    bitmap::Bitmap,
    bitmapped::Bitmapped,
    leaf::Leaf,
    node::Node,
    utilities::{index_at, with_replaced, BITS_PER_LEVEL, ENTRY_COUNT},
};
use std::{borrow::Borrow, sync::Arc};

/// The number of children at or below which an array node is demoted to a
/// bitmapped node.
pub const MIN_ARRAY_CHILDREN: usize = 8;

/// Dense node whose children are addressed directly by indices.
#[derive(Clone, Debug)]
pub struct ArrayNode<K, V> {
    size: usize,
    len: usize,
    children: Box<[Option<Arc<Node<K, V>>>]>,
}

impl<K, V> ArrayNode<K, V> {
    pub fn new(children: Box<[Option<Arc<Node<K, V>>>]>, size: usize) -> Self {
        debug_assert_eq!(children.len(), ENTRY_COUNT);

        Self {
            size,
            len: children.iter().filter(|child| child.is_some()).count(),
            children,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a number of live children.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn children(&self) -> &[Option<Arc<Node<K, V>>>] {
        &self.children
    }

    /// Returns live children paired with their indices.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &Arc<Node<K, V>>)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| Some((index as u8, child.as_ref()?)))
    }

    pub fn get<Q: Eq + ?Sized>(&self, shift: u32, hash: u32, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        self.children[index_at(hash, shift) as usize]
            .as_ref()?
            .get(shift + BITS_PER_LEVEL, hash, key)
    }
}

impl<K: Clone + Eq, V: Clone> ArrayNode<K, V> {
    pub fn insert(&self, shift: u32, leaf: Leaf<K, V>) -> Arc<Node<K, V>> {
        let index = index_at(leaf.hash(), shift) as usize;

        let (child, size, len) = match &self.children[index] {
            Some(child) => {
                let updated = child.insert(shift + BITS_PER_LEVEL, leaf);
                let size = self.size + updated.size() - child.size();

                (updated, size, self.len)
            }
            None => (Arc::new(Node::Leaf(leaf)), self.size + 1, self.len + 1),
        };

        Arc::new(Node::Array(Self {
            size,
            len,
            children: with_replaced(&self.children, index, Some(child)),
        }))
    }

    pub fn remove<Q: Eq + ?Sized>(&self, shift: u32, hash: u32, key: &Q) -> Option<Arc<Node<K, V>>>
    where
        K: Borrow<Q>,
    {
        let index = index_at(hash, shift) as usize;
        let updated = self.children[index]
            .as_ref()?
            .remove(shift + BITS_PER_LEVEL, hash, key)?;

        Some(Arc::new(if updated.size() > 0 {
            Node::Array(Self {
                size: self.size - 1,
                len: self.len,
                children: with_replaced(&self.children, index, Some(updated)),
            })
        } else if self.len - 1 > MIN_ARRAY_CHILDREN {
            Node::Array(Self {
                size: self.size - 1,
                len: self.len - 1,
                children: with_replaced(&self.children, index, None),
            })
        } else {
            self.demote(index)
        }))
    }

    // Packs the remaining children except the one at an index into a
    // bitmapped node.
    fn demote(&self, index: usize) -> Node<K, V> {
        let mut bitmap = Bitmap::new();
        let mut children = Vec::with_capacity(self.len - 1);

        for (other, child) in self.entries() {
            if other as usize != index {
                bitmap = bitmap.set(1 << other);
                children.push(child.clone());
            }
        }

        Node::Bitmapped(Bitmapped::new(
            bitmap,
            children.into_boxed_slice(),
            self.size - 1,
        ))
    }
}
