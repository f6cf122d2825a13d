use std::{rc::Rc, sync::Arc};

use crate::repr::BytesRepr;

/// A value that can report its own key, so it can be stored with [`Tree::add`] without pairing
/// it with a separate key.
///
/// Strings and byte vectors are items keyed by themselves, which lets a tree hold a plain set of
/// words.
///
/// ```
/// use tstree::{Item, Tree};
///
/// struct Symbol {
///     name: String,
///     address: u64,
/// }
///
/// impl Item for Symbol {
///     type Key = str;
///
///     fn key(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let mut symbols = Tree::new();
/// symbols.add(Symbol { name: "main".into(), address: 0x1000 }).unwrap();
/// assert_eq!(symbols.get("main").map(|s| s.address), Some(0x1000));
/// ```
///
/// [`Tree::add`]: crate::Tree::add
pub trait Item {
    /// The type of the key this item reports.
    type Key: BytesRepr + ?Sized;

    /// Returns the key under which this item is stored.
    fn key(&self) -> &Self::Key;
}

macro_rules! impl_item_for_self_keyed {
    ($T:ty, $K:ty) => {
        impl Item for $T {
            type Key = $K;

            fn key(&self) -> &Self::Key {
                self
            }
        }
    };
}

impl_item_for_self_keyed!(String, str);
impl_item_for_self_keyed!(&str, str);
impl_item_for_self_keyed!(Box<str>, str);
impl_item_for_self_keyed!(Rc<str>, str);
impl_item_for_self_keyed!(Arc<str>, str);
impl_item_for_self_keyed!(Vec<u8>, [u8]);
impl_item_for_self_keyed!(&[u8], [u8]);
