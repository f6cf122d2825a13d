//! A library containing an implementation of Ternary Search Tree.

#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::all,
    missing_debug_implementations
)]
#![deny(clippy::all, missing_docs, rust_2018_idioms, rust_2021_compatibility)]

mod error;
mod item;
mod iter;
mod node;
mod repr;
mod search_key;
mod tree;

pub use error::{Error, Result};
pub use item::Item;
pub use iter::{Iter, Values};
pub use repr::BytesRepr;
pub use search_key::SearchKey;
pub use tree::Tree;
