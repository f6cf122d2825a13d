use std::{rc::Rc, sync::Arc};

use crate::search_key::SearchKey;

/// Any type implementing this trait can be used as a key and is compared byte by byte.
///
/// Only byte-indexable strings qualify. Keys are never interpreted as Unicode, so `"é"` is two
/// bytes and sorts after every ASCII key.
pub trait BytesRepr {
    /// Views the bytes representation of this value through a [`SearchKey`].
    fn repr(&self) -> SearchKey<'_>;
}

impl BytesRepr for [u8] {
    fn repr(&self) -> SearchKey<'_> {
        self.into()
    }
}

impl BytesRepr for Vec<u8> {
    fn repr(&self) -> SearchKey<'_> {
        self.as_slice().into()
    }
}

impl<const N: usize> BytesRepr for [u8; N] {
    fn repr(&self) -> SearchKey<'_> {
        self.as_slice().into()
    }
}

impl BytesRepr for str {
    fn repr(&self) -> SearchKey<'_> {
        self.into()
    }
}

impl BytesRepr for String {
    fn repr(&self) -> SearchKey<'_> {
        self.as_str().into()
    }
}

impl<T> BytesRepr for &T
where
    T: BytesRepr + ?Sized,
{
    fn repr(&self) -> SearchKey<'_> {
        T::repr(*self)
    }
}

impl<T> BytesRepr for Box<T>
where
    T: BytesRepr + ?Sized,
{
    fn repr(&self) -> SearchKey<'_> {
        T::repr(self)
    }
}

impl<T> BytesRepr for Rc<T>
where
    T: BytesRepr + ?Sized,
{
    fn repr(&self) -> SearchKey<'_> {
        T::repr(self)
    }
}

impl<T> BytesRepr for Arc<T>
where
    T: BytesRepr + ?Sized,
{
    fn repr(&self) -> SearchKey<'_> {
        T::repr(self)
    }
}
