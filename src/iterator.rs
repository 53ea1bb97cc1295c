use crate::node::Node;
use std::{iter::FusedIterator, sync::Arc};

/// Iterator over borrowed entries of a trie in depth-first order.
#[derive(Debug)]
pub struct NodeIterator<'a, K: 'a, V: 'a> {
    stack: Vec<(&'a Node<K, V>, usize)>,
    remaining: usize,
}

impl<'a, K, V> NodeIterator<'a, K, V> {
    pub fn new(root: &'a Node<K, V>) -> Self {
        Self {
            stack: vec![(root, 0)],
            remaining: root.size(),
        }
    }
}

impl<'a, K, V> Iterator for NodeIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, index)) = self.stack.pop() {
            match node {
                Node::Empty => {}
                Node::Leaf(leaf) => {
                    self.remaining -= 1;
                    return Some(leaf.entry());
                }
                Node::Collision(collision) => {
                    if let Some(leaf) = collision.leaves().get(index) {
                        self.stack.push((node, index + 1));
                        self.remaining -= 1;
                        return Some(leaf.entry());
                    }
                }
                Node::Bitmapped(bitmapped) => {
                    if let Some(child) = bitmapped.children().get(index) {
                        self.stack.push((node, index + 1));
                        self.stack.push((child, 0));
                    }
                }
                Node::Array(array) => {
                    if let Some(child) = array.children().get(index) {
                        self.stack.push((node, index + 1));

                        if let Some(child) = child {
                            self.stack.push((child, 0));
                        }
                    }
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for NodeIterator<'_, K, V> {}

impl<K, V> FusedIterator for NodeIterator<'_, K, V> {}

/// Iterator over cloned entries of a trie which keeps its nodes alive.
#[derive(Debug)]
pub struct ClonedNodeIterator<K, V> {
    stack: Vec<(Arc<Node<K, V>>, usize)>,
    remaining: usize,
}

impl<K, V> ClonedNodeIterator<K, V> {
    pub fn new(root: Arc<Node<K, V>>) -> Self {
        Self {
            remaining: root.size(),
            stack: vec![(root, 0)],
        }
    }
}

impl<K: Clone, V: Clone> Iterator for ClonedNodeIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, index)) = self.stack.pop() {
            match &*node {
                Node::Empty => {}
                Node::Leaf(leaf) => {
                    self.remaining -= 1;
                    return Some((leaf.key().clone(), leaf.value().clone()));
                }
                Node::Collision(collision) => {
                    if let Some(leaf) = collision.leaves().get(index) {
                        let entry = (leaf.key().clone(), leaf.value().clone());

                        self.stack.push((node.clone(), index + 1));
                        self.remaining -= 1;
                        return Some(entry);
                    }
                }
                Node::Bitmapped(bitmapped) => {
                    if let Some(child) = bitmapped.children().get(index) {
                        let child = child.clone();

                        self.stack.push((node.clone(), index + 1));
                        self.stack.push((child, 0));
                    }
                }
                Node::Array(array) => {
                    if let Some(child) = array.children().get(index) {
                        let child = child.clone();

                        self.stack.push((node.clone(), index + 1));

                        if let Some(child) = child {
                            self.stack.push((child, 0));
                        }
                    }
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Clone, V: Clone> ExactSizeIterator for ClonedNodeIterator<K, V> {}

impl<K: Clone, V: Clone> FusedIterator for ClonedNodeIterator<K, V> {}
