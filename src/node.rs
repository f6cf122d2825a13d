use std::cmp::Ordering;

use crate::search_key::SearchKey;

/// An owned, possibly empty child link.
pub type Link<V> = Option<Box<Node<V>>>;

/// A node in the TST. Each node discriminates on a single byte: `left` and `right` hold siblings
/// at the same position whose byte is smaller or greater, while `mid` advances to the next
/// position of every key sharing the path that ends here.
#[derive(Debug)]
pub struct Node<V> {
    pub(crate) byte: u8,
    pub(crate) value: Option<V>,
    pub(crate) left: Link<V>,
    pub(crate) mid: Link<V>,
    pub(crate) right: Link<V>,
}

impl<V> Node<V> {
    /// Create a new node without a value.
    const fn new(byte: u8) -> Self {
        Self {
            byte,
            value: None,
            left: None,
            mid: None,
            right: None,
        }
    }

    /// Walks the key path that starts in the given slot, creating the missing nodes along the
    /// way, and returns the value slot of the node terminating the key.
    ///
    /// Also returns the number of created nodes.
    ///
    /// # Arguments
    ///
    /// - `slot`: The link where the search starts, usually the root of the tree.
    /// - `key`: The key to insert, which must not be empty.
    pub fn entry<'a>(slot: &'a mut Link<V>, key: SearchKey<'_>) -> (&'a mut Option<V>, usize) {
        debug_assert!(!key.is_empty(), "[bug] inserting an empty key");
        let mut slot = slot;
        let mut depth = 0;
        let mut created = 0;
        loop {
            let byte = key[depth];
            let node = slot.get_or_insert_with(|| {
                created += 1;
                Box::new(Self::new(byte))
            });
            match byte.cmp(&node.byte) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal if !key.is_last(depth) => {
                    depth += 1;
                    slot = &mut node.mid;
                }
                Ordering::Equal => return (&mut node.value, created),
            }
        }
    }

    /// Finds the node whose path spells out the given key, whether or not it holds a value.
    pub fn search(&self, key: SearchKey<'_>) -> Option<&Self> {
        if key.is_empty() {
            return None;
        }
        let mut node = self;
        let mut depth = 0;
        loop {
            let next = match key[depth].cmp(&node.byte) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal if !key.is_last(depth) => {
                    depth += 1;
                    &node.mid
                }
                Ordering::Equal => return Some(node),
            };
            node = next.as_deref()?;
        }
    }

    /// Mutable version of [`Node::search`].
    pub fn search_mut(&mut self, key: SearchKey<'_>) -> Option<&mut Self> {
        if key.is_empty() {
            return None;
        }
        let mut node = self;
        let mut depth = 0;
        loop {
            let next = match key[depth].cmp(&node.byte) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal if !key.is_last(depth) => {
                    depth += 1;
                    &mut node.mid
                }
                Ordering::Equal => return Some(node),
            };
            node = next.as_deref_mut()?;
        }
    }

    /// Finds the value of the longest stored key that is a prefix of the given key.
    pub fn longest_prefix(&self, key: SearchKey<'_>) -> Option<&V> {
        let mut found = None;
        let mut link = Some(self);
        let mut depth = 0;
        while let (Some(node), Some(&byte)) = (link, key.get(depth)) {
            link = match byte.cmp(&node.byte) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => {
                    if node.value.is_some() {
                        found = node.value.as_ref();
                    }
                    depth += 1;
                    node.mid.as_deref()
                }
            };
        }
        found
    }
}

impl<V> Drop for Node<V> {
    /// Frees the subtree with a heap stack. Children are detached before they drop, so the
    /// nested drops never recurse more than one level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Self>> = [self.left.take(), self.mid.take(), self.right.take()]
            .into_iter()
            .flatten()
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(
                [node.left.take(), node.mid.take(), node.right.take()]
                    .into_iter()
                    .flatten(),
            );
        }
    }
}
