use crate::{
    array::ArrayNode,
    bitmap::Bitmap,
    bitmapped::Bitmapped,
    collision::Collision,
    leaf::Leaf,
    utilities::{bit, index_at, BITS_PER_LEVEL, MAX_SHIFT},
};
use std::{
    borrow::Borrow,
    fmt::{self, Debug, Display, Formatter},
    sync::Arc,
};

/// Node of a trie.
///
/// Nodes are never modified after construction. Every operation which
/// changes a sub-tree returns a new node sharing unchanged children with the
/// old one.
#[derive(Clone, Debug)]
pub enum Node<K, V> {
    Empty,
    Leaf(Leaf<K, V>),
    Collision(Collision<K, V>),
    Bitmapped(Bitmapped<K, V>),
    Array(ArrayNode<K, V>),
}

impl<K, V> Default for Node<K, V> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<K, V> Node<K, V> {
    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Leaf(_) => 1,
            Self::Collision(collision) => collision.len(),
            Self::Bitmapped(bitmapped) => bitmapped.size(),
            Self::Array(array) => array.size(),
        }
    }

    /// Returns true if a node has no children nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Empty | Self::Leaf(_) | Self::Collision(_))
    }

    pub fn get<Q: Eq + ?Sized>(&self, shift: u32, hash: u32, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        match self {
            Self::Empty => None,
            Self::Leaf(leaf) => (leaf.key().borrow() == key).then(|| leaf.value()),
            Self::Collision(collision) => collision.get(key),
            Self::Bitmapped(bitmapped) => bitmapped.get(shift, hash, key),
            Self::Array(array) => array.get(shift, hash, key),
        }
    }
}

impl<K: Clone + Eq, V: Clone> Node<K, V> {
    pub fn insert(self: &Arc<Self>, shift: u32, leaf: Leaf<K, V>) -> Arc<Self> {
        match &**self {
            Self::Empty => Arc::new(Self::Leaf(leaf)),
            Self::Leaf(this) => {
                if this.key() == leaf.key() {
                    Arc::new(Self::Leaf(leaf))
                } else if this.hash() == leaf.hash() {
                    Arc::new(Self::Collision(Collision::new(this.clone(), leaf)))
                } else {
                    let hash = leaf.hash();

                    Self::separate(
                        shift,
                        self.clone(),
                        this.hash(),
                        Arc::new(Self::Leaf(leaf)),
                        hash,
                    )
                }
            }
            Self::Collision(collision) => {
                if collision.hash() == leaf.hash() {
                    Arc::new(Self::Collision(collision.insert(leaf)))
                } else {
                    let hash = leaf.hash();

                    Self::separate(
                        shift,
                        self.clone(),
                        collision.hash(),
                        Arc::new(Self::Leaf(leaf)),
                        hash,
                    )
                }
            }
            Self::Bitmapped(bitmapped) => bitmapped.insert(shift, leaf),
            Self::Array(array) => array.insert(shift, leaf),
        }
    }

    /// Removes a key from a sub-tree. It returns `None` if the key is not
    /// found.
    pub fn remove<Q: Eq + ?Sized>(&self, shift: u32, hash: u32, key: &Q) -> Option<Arc<Self>>
    where
        K: Borrow<Q>,
    {
        match self {
            Self::Empty => None,
            Self::Leaf(leaf) => (leaf.key().borrow() == key).then(|| Arc::new(Self::Empty)),
            Self::Collision(collision) => collision.remove(key),
            Self::Bitmapped(bitmapped) => bitmapped.remove(shift, hash, key),
            Self::Array(array) => array.remove(shift, hash, key),
        }
    }

    // Builds bitmapped nodes until two sub-trees of different hashes land in
    // different slots.
    fn separate(
        shift: u32,
        first: Arc<Self>,
        first_hash: u32,
        second: Arc<Self>,
        second_hash: u32,
    ) -> Arc<Self> {
        debug_assert_ne!(first_hash, second_hash);
        debug_assert!(shift <= MAX_SHIFT);

        let size = first.size() + second.size();
        let first_index = index_at(first_hash, shift);
        let second_index = index_at(second_hash, shift);

        Arc::new(Self::Bitmapped(if first_index == second_index {
            Bitmapped::new(
                Bitmap::new().set(bit(first_hash, shift)),
                vec![Self::separate(
                    shift + BITS_PER_LEVEL,
                    first,
                    first_hash,
                    second,
                    second_hash,
                )]
                .into_boxed_slice(),
                size,
            )
        } else {
            Bitmapped::new(
                Bitmap::new()
                    .set(bit(first_hash, shift))
                    .set(bit(second_hash, shift)),
                if first_index < second_index {
                    vec![first, second]
                } else {
                    vec![second, first]
                }
                .into_boxed_slice(),
                size,
            )
        }))
    }
}

/// Human-readable dump of a trie's structure.
pub struct Structure<'a, K, V>(pub &'a Node<K, V>);

impl<K: Debug, V: Debug> Display for Structure<'_, K, V> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self.0 {
            Node::Empty => write!(formatter, "{{}}"),
            Node::Leaf(leaf) => write!(formatter, "{:?} -> {:?}", leaf.key(), leaf.value()),
            Node::Collision(collision) => {
                write!(formatter, "<")?;

                for (index, leaf) in collision.leaves().iter().enumerate() {
                    if index > 0 {
                        write!(formatter, " | ")?;
                    }

                    write!(formatter, "{:?} -> {:?}", leaf.key(), leaf.value())?;
                }

                write!(formatter, ">")
            }
            Node::Bitmapped(bitmapped) => {
                write!(formatter, "{{")?;

                for (count, (index, child)) in bitmapped.entries().enumerate() {
                    if count > 0 {
                        write!(formatter, ", ")?;
                    }

                    write!(formatter, "{}: {}", index, Structure(child))?;
                }

                write!(formatter, "}}")
            }
            Node::Array(array) => {
                write!(formatter, "[")?;

                for (count, (index, child)) in array.entries().enumerate() {
                    if count > 0 {
                        write!(formatter, ", ")?;
                    }

                    write!(formatter, "{}: {}", index, Structure(child))?;
                }

                write!(formatter, "]")
            }
        }
    }
}
