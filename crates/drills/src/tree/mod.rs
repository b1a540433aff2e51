//! Owned binary tree built from a level-order array, plus the three
//! depth-first traversals.

mod node;
mod traversal;

pub use node::{build_tree, TreeNode, ABSENT};
pub use traversal::{inorder, postorder, preorder, render, traverse, Order};
