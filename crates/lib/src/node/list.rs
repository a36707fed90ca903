//! Ordered sequence of nodes, addressed by non-negative integer index.

use std::fmt;

use super::Node;

/// The sequence container of the node tree.
///
/// Writes through paths may address an index at or beyond the current length;
/// the gap is padded with [`Node::Null`] so that the write always lands at the
/// requested index.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct List {
    items: Vec<Node>,
}

impl List {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets an item by index.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    /// Gets a mutable reference to an item by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.items.get_mut(index)
    }

    /// Appends an item, returning its index.
    pub fn push(&mut self, value: impl Into<Node>) -> usize {
        self.items.push(value.into());
        self.items.len() - 1
    }

    /// Assigns `value` at `index`, returning the previous item if one existed.
    ///
    /// Indices beyond the current length extend the list, padding the gap
    /// with nulls.
    pub fn set(&mut self, index: usize, value: impl Into<Node>) -> Option<Node> {
        if index < self.items.len() {
            Some(std::mem::replace(&mut self.items[index], value.into()))
        } else {
            while self.items.len() < index {
                self.items.push(Node::Null);
            }
            self.items.push(value.into());
            None
        }
    }

    /// Gets a mutable reference to the item at `index`, padding with nulls
    /// up to and including `index` when the list is shorter.
    pub(crate) fn get_mut_padded(&mut self, index: usize) -> &mut Node {
        while self.items.len() <= index {
            self.items.push(Node::Null);
        }
        &mut self.items[index]
    }

    /// Removes and returns the item at `index`; later items shift down.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Returns an iterator over the items in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the items in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.items.iter_mut()
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Node>> for List {
    fn from(items: Vec<Node>) -> Self {
        Self { items }
    }
}

impl FromIterator<Node> for List {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
