//! In-order traversals over the stored keys and values.

use std::iter::FusedIterator;

use crate::node::Node;

#[derive(Debug)]
enum Frame<'a, V> {
    /// Expand the subtree rooted at this node, whose byte sits at the given path position.
    Descend(&'a Node<V>, usize),
    /// Extend the path with the node's byte and yield its value if it has one.
    Visit(&'a Node<V>, usize),
}

/// Walks a subtree in lexicographic key order using an explicit stack, so that long keys or long
/// sibling chains can't overflow the call stack.
#[derive(Debug)]
struct Walk<'a, V> {
    /// The value stored at the walk's starting path, yielded before everything else.
    head: Option<&'a V>,
    stack: Vec<Frame<'a, V>>,
    path: Vec<u8>,
}

impl<'a, V> Walk<'a, V> {
    fn new(path: Vec<u8>, head: Option<&'a V>, start: Option<&'a Node<V>>) -> Self {
        let mut stack = Vec::new();
        if let Some(node) = start {
            stack.push(Frame::Descend(node, path.len()));
        }
        Self { head, stack, path }
    }

    /// Advances to the next node holding a value. The path then spells out that node's key.
    fn next_value(&mut self) -> Option<&'a V> {
        if let Some(value) = self.head.take() {
            return Some(value);
        }
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Descend(node, depth) => {
                    // Pushed in reverse so that they pop as left, node, mid, right.
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push(Frame::Descend(right, depth));
                    }
                    if let Some(mid) = node.mid.as_deref() {
                        self.stack.push(Frame::Descend(mid, depth + 1));
                    }
                    self.stack.push(Frame::Visit(node, depth));
                    if let Some(left) = node.left.as_deref() {
                        self.stack.push(Frame::Descend(left, depth));
                    }
                }
                Frame::Visit(node, depth) => {
                    self.path.truncate(depth);
                    self.path.push(node.byte);
                    if let Some(value) = node.value.as_ref() {
                        return Some(value);
                    }
                }
            }
        }
        None
    }
}

/// An iterator over the entries of a [`Tree`](crate::Tree), or the part of it under a prefix,
/// in lexicographic order of the key bytes.
///
/// Keys are rebuilt from the traversed path, so each item owns a copy of its key.
#[derive(Debug)]
pub struct Iter<'a, V> {
    walk: Walk<'a, V>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(path: Vec<u8>, head: Option<&'a V>, start: Option<&'a Node<V>>) -> Self {
        Self {
            walk: Walk::new(path, head, start),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Vec::new(), None, None)
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.walk.next_value()?;
        Some((self.walk.path.clone(), value))
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

/// An iterator over the values of a [`Tree`](crate::Tree), or the part of it under a prefix,
/// in lexicographic order of their keys.
#[derive(Debug)]
pub struct Values<'a, V> {
    walk: Walk<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(path: Vec<u8>, head: Option<&'a V>, start: Option<&'a Node<V>>) -> Self {
        Self {
            walk: Walk::new(path, head, start),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Vec::new(), None, None)
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next_value()
    }
}

impl<V> FusedIterator for Values<'_, V> {}
