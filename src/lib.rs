//! Ordered map and set data structures implemented with binary search trees,
//! in unbalanced ([`bst`]) and height-balanced AVL ([`avl_tree`]) variants.

mod entry;
mod error;
mod tree;

pub mod avl_tree;
pub mod bst;
pub mod iter;

pub use crate::error::{Error, Result};
