//! Persistent HAMT map and set whose sub-trees can be shared over threads.
//!
//! Hash-Array Mapped Trie (HAMT) is a data structure popular as a map (a.k.a.
//! associative array or dictionary) or set. Its immutable variant is adopted
//! widely by functional programming languages like Scala and Clojure to
//! implement immutable and memory-efficient associative arrays and sets.
//!
//! Sparse levels of a trie are stored in bitmapped nodes and dense ones in
//! array nodes of 32 slots. Every update returns a new version sharing all
//! untouched sub-trees with the old one.

mod array;
mod bitmap;
mod bitmapped;
mod collision;
mod hasher;
mod iterator;
mod leaf;
mod map;
mod node;
#[cfg(test)]
mod proptests;
mod set;
mod utilities;

pub use hasher::{DefaultKeyHasher, KeyHasher};
pub use map::{IntoIter as MapIntoIter, Iter as MapIter, Map};
pub use set::{IntoIter as SetIntoIter, Iter as SetIter, Set};
