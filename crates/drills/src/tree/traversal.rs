use super::node::TreeNode;

/// Depth-first visiting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    In,
    Pre,
    Post,
}

/// Values in the given order. Recursion depth equals tree height.
pub fn traverse(root: Option<&TreeNode>, order: Order) -> Vec<i32> {
    let mut out = Vec::new();
    walk(root, order, &mut out);
    out
}

fn walk(node: Option<&TreeNode>, order: Order, out: &mut Vec<i32>) {
    let Some(n) = node else {
        return;
    };
    if order == Order::Pre {
        out.push(n.val);
    }
    walk(n.left.as_deref(), order, out);
    if order == Order::In {
        out.push(n.val);
    }
    walk(n.right.as_deref(), order, out);
    if order == Order::Post {
        out.push(n.val);
    }
}

/// Left subtree, node, right subtree.
pub fn inorder(root: Option<&TreeNode>) -> Vec<i32> {
    traverse(root, Order::In)
}

/// Node, then left and right subtrees.
pub fn preorder(root: Option<&TreeNode>) -> Vec<i32> {
    traverse(root, Order::Pre)
}

/// Left and right subtrees, then node.
pub fn postorder(root: Option<&TreeNode>) -> Vec<i32> {
    traverse(root, Order::Post)
}

/// Space-separated rendering, e.g. `"4 2 5 1 6 3 7"`.
pub fn render(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{build_tree, ABSENT};

    #[test]
    fn complete_tree_orders() {
        let root = build_tree(&[1, 2, 3, 4, 5, 6, 7], ABSENT);
        let r = root.as_deref();
        assert_eq!(inorder(r), vec![4, 2, 5, 1, 6, 3, 7]);
        assert_eq!(preorder(r), vec![1, 2, 4, 5, 3, 6, 7]);
        assert_eq!(postorder(r), vec![4, 5, 2, 6, 7, 3, 1]);
    }

    #[test]
    fn padded_leaves_match_unpadded() {
        let mut padded = vec![1, 2, 3, 4, 5, 6, 7];
        padded.extend([ABSENT; 8]);
        let a = build_tree(&padded, ABSENT);
        let b = build_tree(&[1, 2, 3, 4, 5, 6, 7], ABSENT);
        assert_eq!(a, b);
        assert_eq!(render(&inorder(a.as_deref())), "4 2 5 1 6 3 7");
    }

    #[test]
    fn sparse_and_empty() {
        let root = build_tree(&[1, ABSENT, 2, ABSENT, ABSENT, 3], ABSENT);
        assert_eq!(inorder(root.as_deref()), vec![1, 3, 2]);
        assert_eq!(preorder(root.as_deref()), vec![1, 2, 3]);
        assert_eq!(postorder(root.as_deref()), vec![3, 2, 1]);
        assert!(inorder(None).is_empty());
        assert_eq!(render(&[]), "");
    }
}
