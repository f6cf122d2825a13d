//! # Ternary Search Tree.

use std::fmt;

use crate::{
    error::{Error, Result},
    item::Item,
    iter::{Iter, Values},
    node::{Link, Node},
    repr::BytesRepr,
    search_key::SearchKey,
};

/// A ternary search tree. This structure contains the root node of the tree and serves as the
/// entrypoint for all tree operations.
///
/// Keys are byte strings that share their common prefixes. Values are either paired with an
/// explicit key through [`Tree::insert`], or report their own key through [`Item`] and are stored
/// with [`Tree::add`].
///
/// Writes need `&mut self`, so a tree shared between threads has to sit behind a lock owned by
/// the caller.
///
/// ```
/// use tstree::Tree;
///
/// let mut tree = Tree::new();
/// for word in ["cat", "car", "tom", "c"] {
///     tree.add(word).unwrap();
/// }
/// assert_eq!(tree.get("car"), Some(&"car"));
/// assert_eq!(tree.get("ca"), None);
/// assert_eq!(tree.match_prefix("c"), [&"c", &"car", &"cat"]);
/// ```
pub struct Tree<V> {
    root: Link<V>,
    len: usize,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Tree<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(root) = self.root.as_deref() {
            debug_print_tree(f, root)
        } else {
            writeln!(f, "empty")
        }
    }
}

impl<V> Tree<V> {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of distinct keys stored in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the tree stores no key.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert the given key-value pair into the tree, replacing the value already stored for the
    /// key.
    ///
    /// Returns the replaced value, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKey`] if the key has no byte, leaving the tree unchanged.
    pub fn insert<K>(&mut self, key: &K, value: V) -> Result<Option<V>>
    where
        K: BytesRepr + ?Sized,
    {
        let slot = value_slot(&mut self.root, key.repr())?;
        let replaced = slot.replace(value);
        if replaced.is_none() {
            self.len += 1;
        }
        Ok(replaced)
    }

    /// Insert an item that carries its own key, replacing the item already stored under the same
    /// key.
    ///
    /// Returns the replaced item, if any. Only types implementing [`Item`] can be added:
    ///
    /// ```compile_fail
    /// let mut tree = tstree::Tree::new();
    /// tree.add(4).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKey`] if the item reports a key with no byte, leaving the tree
    /// unchanged.
    pub fn add(&mut self, item: V) -> Result<Option<V>>
    where
        V: Item,
    {
        let slot = value_slot(&mut self.root, item.key().repr())?;
        let replaced = slot.replace(item);
        if replaced.is_none() {
            self.len += 1;
        }
        Ok(replaced)
    }

    /// Search for the value associated with the given key.
    ///
    /// Returns `None` for keys that were never inserted, including the strict prefixes of stored
    /// keys and the empty key.
    pub fn get<K>(&self, key: &K) -> Option<&V>
    where
        K: BytesRepr + ?Sized,
    {
        self.root
            .as_deref()
            .and_then(|root| root.search(key.repr()))
            .and_then(|node| node.value.as_ref())
    }

    /// Search for the value associated with the given key and return a mutable reference to it.
    pub fn get_mut<K>(&mut self, key: &K) -> Option<&mut V>
    where
        K: BytesRepr + ?Sized,
    {
        self.root
            .as_deref_mut()
            .and_then(|root| root.search_mut(key.repr()))
            .and_then(|node| node.value.as_mut())
    }

    /// Returns whether a value is stored for the given key.
    pub fn contains_key<K>(&self, key: &K) -> bool
    where
        K: BytesRepr + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Collect every value whose key equals the prefix or starts with it, in lexicographic order
    /// of the keys.
    ///
    /// An empty prefix matches nothing.
    ///
    /// ```
    /// use tstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("card", 1).unwrap();
    /// tree.insert("car", 2).unwrap();
    /// tree.insert("cat", 3).unwrap();
    /// assert_eq!(tree.match_prefix("car"), [&2, &1]);
    /// assert!(tree.match_prefix("").is_empty());
    /// ```
    pub fn match_prefix<K>(&self, prefix: &K) -> Vec<&V>
    where
        K: BytesRepr + ?Sized,
    {
        self.prefix_values(prefix).collect()
    }

    /// Lazily iterate over the values whose key equals the prefix or starts with it, in
    /// lexicographic order of the keys.
    pub fn prefix_values<K>(&self, prefix: &K) -> Values<'_, V>
    where
        K: BytesRepr + ?Sized,
    {
        let prefix = prefix.repr();
        match self.prefix_node(prefix) {
            Some(node) => Values::new(prefix.to_vec(), node.value.as_ref(), node.mid.as_deref()),
            None => Values::empty(),
        }
    }

    /// Lazily iterate over the key-value pairs whose key equals the prefix or starts with it, in
    /// lexicographic order of the keys.
    ///
    /// ```
    /// use tstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("tea", 1).unwrap();
    /// tree.insert("ten", 2).unwrap();
    /// tree.insert("to", 3).unwrap();
    /// let keys: Vec<_> = tree.prefix_iter("te").map(|(key, _)| key).collect();
    /// assert_eq!(keys, [b"tea", b"ten"]);
    /// ```
    pub fn prefix_iter<K>(&self, prefix: &K) -> Iter<'_, V>
    where
        K: BytesRepr + ?Sized,
    {
        let prefix = prefix.repr();
        match self.prefix_node(prefix) {
            Some(node) => Iter::new(prefix.to_vec(), node.value.as_ref(), node.mid.as_deref()),
            None => Iter::empty(),
        }
    }

    /// Iterate over all key-value pairs in lexicographic order of the keys.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(Vec::new(), None, self.root.as_deref())
    }

    /// Iterate over all values in lexicographic order of their keys.
    #[must_use]
    pub fn values(&self) -> Values<'_, V> {
        Values::new(Vec::new(), None, self.root.as_deref())
    }

    /// Find the value of the longest stored key that is a prefix of the given query, the query
    /// itself included.
    ///
    /// ```
    /// use tstree::Tree;
    ///
    /// let mut routes = Tree::new();
    /// routes.insert("/api", "api").unwrap();
    /// routes.insert("/api/users", "users").unwrap();
    /// assert_eq!(routes.longest_prefix_of("/api/users/7"), Some(&"users"));
    /// assert_eq!(routes.longest_prefix_of("/api/orders"), Some(&"api"));
    /// assert_eq!(routes.longest_prefix_of("/static"), None);
    /// ```
    pub fn longest_prefix_of<K>(&self, query: &K) -> Option<&V>
    where
        K: BytesRepr + ?Sized,
    {
        self.root
            .as_deref()
            .and_then(|root| root.longest_prefix(query.repr()))
    }

    /// Finds the node spelling out the prefix. Empty prefixes have no node.
    fn prefix_node(&self, prefix: SearchKey<'_>) -> Option<&Node<V>> {
        self.root.as_deref().and_then(|root| root.search(prefix))
    }
}

impl<'a, V> IntoIterator for &'a Tree<V> {
    type Item = (Vec<u8>, &'a V);

    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Extend<V> for Tree<V>
where
    V: Item,
{
    /// Adds every item, skipping those whose key is empty.
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for item in iter {
            if let Err(err) = self.add(item) {
                log::warn!("skipping item: {err}");
            }
        }
    }
}

impl<V> FromIterator<V> for Tree<V>
where
    V: Item,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Finds or creates the value slot for a non-empty key.
fn value_slot<'a, V>(root: &'a mut Link<V>, key: SearchKey<'_>) -> Result<&'a mut Option<V>> {
    if key.is_empty() {
        log::debug!("rejected insertion of a zero-length key");
        return Err(Error::EmptyKey);
    }
    let (slot, created) = Node::entry(root, key);
    log::trace!("created {created} node(s) for a {}-byte key", key.len());
    Ok(slot)
}

fn debug_print_indentation(
    formatter: &mut fmt::Formatter<'_>,
    indentation: &mut String,
    level: usize,
) -> fmt::Result {
    while indentation.len() < 2 * level {
        indentation.push_str("  ");
    }
    formatter.write_str(&indentation[..2 * level])
}

/// Prints the subtree under `root` one node per line, children indented under their parent and
/// labelled `<`, `=` or `>`. Uses a heap stack, so any depth is printable.
fn debug_print_tree<V>(f: &mut fmt::Formatter<'_>, root: &Node<V>) -> fmt::Result
where
    V: fmt::Debug,
{
    let mut indentation = String::new();
    let mut stack = vec![(root, '*', 0)];
    while let Some((node, branch, level)) = stack.pop() {
        debug_print_indentation(f, &mut indentation, level)?;
        write!(f, "{branch} '{}'", node.byte.escape_ascii())?;
        if let Some(value) = &node.value {
            write!(f, " -> {value:?}")?;
        }
        writeln!(f)?;
        // Reversed, so `<` pops first.
        for (branch, child) in [('>', &node.right), ('=', &node.mid), ('<', &node.left)] {
            if let Some(child) = child.as_deref() {
                stack.push((child, branch, level + 1));
            }
        }
    }
    Ok(())
}
