use std::ops::Deref;

/// A slice of bytes used during tree searches and traversals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchKey<'a> {
    elems: &'a [u8],
}

impl<'a> From<&'a [u8]> for SearchKey<'a> {
    fn from(elems: &'a [u8]) -> Self {
        Self::new(elems)
    }
}

impl<'a> From<&'a str> for SearchKey<'a> {
    fn from(elems: &'a str) -> Self {
        Self::new(elems.as_bytes())
    }
}

impl Deref for SearchKey<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.elems
    }
}

impl<'a> SearchKey<'a> {
    /// Returns a new [`SearchKey`] over the given slice of bytes.
    #[must_use]
    pub const fn new(elems: &'a [u8]) -> Self {
        Self { elems }
    }

    /// Returns whether the given index points at the final byte of the key.
    #[must_use]
    pub const fn is_last(self, index: usize) -> bool {
        index + 1 == self.elems.len()
    }
}
