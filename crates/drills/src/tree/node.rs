/// Default sentinel marking "no node" in a level-order array.
pub const ABSENT: i32 = -1;

/// Binary tree node; each child is exclusively owned by its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let l = self.left.as_ref().map_or(0, |n| n.height());
        let r = self.right.as_ref().map_or(0, |n| n.height());
        1 + l.max(r)
    }
}

/// Build a tree from a level-order array where slot `i` has children at
/// `2i + 1` and `2i + 2`.
///
/// A slot equal to `sentinel`, or past the end, is an absent node; anything
/// stored beneath an absent slot is ignored.
pub fn build_tree(values: &[i32], sentinel: i32) -> Option<Box<TreeNode>> {
    build_at(values, sentinel, 0)
}

fn build_at(values: &[i32], sentinel: i32, i: usize) -> Option<Box<TreeNode>> {
    let &val = values.get(i)?;
    if val == sentinel {
        return None;
    }
    Some(Box::new(TreeNode {
        val,
        left: build_at(values, sentinel, 2 * i + 1),
        right: build_at(values, sentinel, 2 * i + 2),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_tree_shape() {
        let root = build_tree(&[1, 2, 3, 4, 5, 6, 7], ABSENT).unwrap();
        assert_eq!(root.val, 1);
        assert_eq!(root.height(), 3);
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.val, 2);
        assert_eq!(left.right.as_deref(), Some(&TreeNode::leaf(5)));
    }

    #[test]
    fn sentinel_slots_are_absent() {
        let root = build_tree(&[1, ABSENT, 2, 9, 9, 3], ABSENT).unwrap();
        assert!(root.left.is_none());
        let right = root.right.as_ref().unwrap();
        assert_eq!(right.left.as_deref(), Some(&TreeNode::leaf(3)));
        assert!(build_tree(&[ABSENT, 1, 2], ABSENT).is_none());
        assert!(build_tree(&[], ABSENT).is_none());
    }

    #[test]
    fn custom_sentinel() {
        let root = build_tree(&[5, 0, -1], 0).unwrap();
        assert!(root.left.is_none());
        assert_eq!(root.right.as_ref().map(|n| n.val), Some(-1));
    }
}
