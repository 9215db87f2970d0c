use crate::tree::{Node, Rebalance, Tree};

/// Post-mutation fix-up for the AVL variant.
///
/// Running at every node on the unwind path of a mutation, the hook refreshes
/// the node's height tag and rotates whenever the balance factor leaves
/// {-1, 0, +1}. An insertion triggers at most one rotation on the whole path;
/// a removal can shrink heights along the entire path, so every ancestor up to
/// the root may rotate.
pub struct AvlRebalance;

impl Rebalance for AvlRebalance {
    fn rebalance<T, U>(tree: &mut Tree<T, U>) {
        balance(tree);
    }
}

// A single left rotation: the right child takes the node's position, the
// node becomes its left child, and the child's former left subtree (the keys
// between the two) re-attaches as the node's right subtree. Heights are
// recomputed child before ancestor.
fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance_factor() > 1 {
        if let Some(child) = node.left.take() {
            // left-right: reduce to left-left before rotating the node
            if child.balance_factor() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance_factor() < -1 {
        if let Some(child) = node.right.take() {
            // right-left: reduce to right-right before rotating the node
            if child.balance_factor() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}
