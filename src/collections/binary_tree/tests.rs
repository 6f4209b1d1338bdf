#![cfg(test)]

use std::cell::RefCell;
use std::cmp::Ordering;

use super::*;
use crate::util::panic::assert_panics;

fn zeros(value: &u32) -> usize {
    value.to_string().chars().filter(|c| *c == '0').count()
}

fn by_zeros(lhs: &u32, rhs: &u32) -> Ordering {
    zeros(lhs).cmp(&zeros(rhs))
}

fn collect<'a, T: Clone + 'a>(iter: impl Iterator<Item = &'a T>) -> Vec<T> {
    iter.cloned().collect()
}

#[test]
fn test_traversal_orders() {
    let tree: BinarySearchTree<_> = [4, 2, 3, 1, 8, 7, 10].into_iter().collect();

    assert_eq!(
        collect(tree.in_order()),
        [1, 2, 3, 4, 7, 8, 10],
        "In-order traversal should yield sorted elements."
    );
    assert_eq!(
        collect(tree.pre_order()),
        [4, 2, 1, 3, 8, 7, 10],
        "Pre-order traversal should yield each node before its subtrees."
    );
    assert_eq!(
        collect(tree.post_order()),
        [1, 3, 2, 7, 10, 8, 4],
        "Post-order traversal should yield each node after its subtrees."
    );
    assert_eq!(
        collect(tree.iter()),
        collect(tree.in_order()),
        "Default iteration should be in-order."
    );
}

#[test]
fn test_empty_and_single() {
    let tree: BinarySearchTree<i32> = BinarySearchTree::new();
    assert!(tree.is_empty());
    assert!(!tree.contains(&5), "An empty tree contains nothing.");
    assert_eq!(tree.in_order().next(), None);
    assert_eq!(tree.pre_order().next(), None);
    assert_eq!(tree.post_order().next(), None);

    let tree: BinarySearchTree<_> = [2].into_iter().collect();
    assert!(tree.contains(&2));
    assert!(!tree.contains(&0));
    for order in [tree.in_order(), tree.pre_order(), tree.post_order()] {
        assert_eq!(collect(order), [2]);
    }
}

#[test]
fn test_duplicates() {
    let mut tree = BinarySearchTree::new();
    let inserted: Vec<_> = [4, 4, 2, 2, 7].into_iter().map(|i| tree.insert(i)).collect();

    assert_eq!(inserted, [true, false, true, false, true]);
    assert_eq!(tree.len(), 3, "Duplicates shouldn't be counted.");
    assert_eq!(collect(tree.in_order()), [2, 4, 7]);
}

#[test]
fn test_custom_comparison() {
    let mut tree = BinarySearchTree::with_comparison(by_zeros);
    tree.extend([70000, 707070, 404, 400, 2, 200]);

    assert_eq!(tree.len(), 5, "200 has as many zeros as 400 and should be rejected.");
    assert_eq!(collect(tree.in_order()), [2, 404, 400, 707070, 70000]);
    assert_eq!(collect(tree.pre_order()), [70000, 707070, 404, 2, 400]);
    assert_eq!(collect(tree.post_order()), [2, 400, 404, 707070, 70000]);

    assert!(tree.contains(&400));
    assert!(
        tree.contains(&300),
        "Containment is decided by the comparison, not by equality."
    );
    assert!(!tree.contains(&1_000_000));
}

#[test]
fn test_comparison_argument_order() {
    let seen = RefCell::new(Vec::new());
    let mut tree = BinarySearchTree::with_comparison(|node: &i32, item: &i32| {
        seen.borrow_mut().push((*node, *item));
        node.cmp(item)
    });
    tree.insert(5);
    tree.insert(3);
    assert_eq!(
        *seen.borrow(),
        [(5, 3)],
        "The value already in the tree should be the first argument."
    );

    // A comparison that reverses the natural order mirrors the tree.
    let mut tree = BinarySearchTree::with_comparison(|a: &i32, b: &i32| b.cmp(a));
    tree.extend([4, 2, 3, 1, 8, 7, 10]);
    assert_eq!(collect(tree.in_order()), [10, 8, 7, 4, 3, 2, 1]);
}

#[test]
fn test_degenerate_shape() {
    let tree: BinarySearchTree<_> = (0..1000).collect();
    assert_eq!(tree.len(), 1000);
    assert_eq!(
        collect(tree.pre_order()),
        (0..1000).collect::<Vec<_>>(),
        "Sorted input degrades the tree into a right leaning list."
    );
    assert_eq!(collect(tree.post_order()), (0..1000).rev().collect::<Vec<_>>());
    assert!(tree.contains(&999));
}

#[test]
fn test_traversals_restart() {
    let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    let mut first = tree.in_order();
    assert_eq!(first.next(), Some(&1));

    assert_eq!(
        collect(tree.in_order()),
        [1, 2, 3],
        "Each call should produce a fresh traversal."
    );
    assert_eq!(collect(first), [2, 3]);
}

#[test]
fn test_exact_size() {
    let tree: BinarySearchTree<_> = [4, 2, 3, 1, 8].into_iter().collect();
    let mut iter = tree.post_order();
    assert_eq!(iter.len(), 5);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.count(), 3);
}

#[test]
fn test_cursor_detects_insert() {
    let mut tree: BinarySearchTree<_> = [4, 2, 3, 1, 8, 7, 10].into_iter().collect();

    for order in [Order::InOrder, Order::PreOrder, Order::PostOrder] {
        let mut cursor = tree.traversal(order);
        assert!(matches!(cursor.next(&tree), Ok(Some(_))));

        tree.insert(5 + order as i32 * 100);
        assert!(
            cursor.next(&tree).is_err(),
            "Inserting mid-traversal should invalidate a {order:?} cursor."
        );
    }
}

#[test]
fn test_cursor_detects_duplicate_insert() {
    let mut tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    let mut cursor = tree.traversal(Order::InOrder);
    assert_eq!(cursor.next(&tree), Ok(Some(&1)));

    assert!(!tree.insert(2));
    assert_eq!(
        cursor.next(&tree),
        Err(ConcurrentModification { expected: 3, found: 4 }),
        "Even an insert that changes nothing counts as a modification."
    );
}

#[test]
fn test_cursor_captures_lazily() {
    let mut tree: BinarySearchTree<_> = [2, 1].into_iter().collect();
    let mut cursor = tree.traversal(Order::PreOrder);

    // Nothing has been produced yet, so this modification predates the traversal.
    tree.insert(3);

    let mut produced = Vec::new();
    while let Some(value) = cursor.next(&tree).expect("tree is unchanged") {
        produced.push(*value);
    }
    assert_eq!(produced, [2, 1, 3]);
    assert_eq!(cursor.next(&tree), Ok(None), "An exhausted cursor stays exhausted.");

    tree.insert(4);
    assert!(
        cursor.next(&tree).is_err(),
        "Modification is still reported after exhaustion."
    );
}

#[test]
fn test_cursor_abandon() {
    let mut tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    {
        let mut cursor = tree.traversal(Order::InOrder);
        assert_eq!(cursor.next(&tree), Ok(Some(&1)));
    }
    assert!(tree.insert(4), "Dropping a partial traversal has no effect on the tree.");
    assert_eq!(tree.traversal(Order::InOrder).next(&tree), Ok(Some(&1)));
}

#[test]
fn test_fmt() {
    let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    assert_eq!(format!("{tree}"), "{1, 2, 3}");
    assert_eq!(
        format!("{tree:?}"),
        concat!(
            "BinarySearchTree { nodes: \n",
            "┌    ┌    -\n",
            "┌    (1)\n",
            "┌    └    -\n",
            "(2)\n",
            "└    ┌    -\n",
            "└    (3)\n",
            "└    └    -\n",
            ", len: 3 }",
        )
    );

    let tree: BinarySearchTree<_> = [2, 1].into_iter().collect();
    assert_eq!(
        format!("{:?}", tree.branch()),
        "\n┌    ┌    -\n┌    (1)\n┌    └    -\n(2)\n└    -\n",
        "A missing child is printed as an empty branch."
    );

    let empty: BinarySearchTree<u8> = BinarySearchTree::default();
    assert_eq!(format!("{empty}"), "{}");
    assert_eq!(format!("{empty:?}"), "BinarySearchTree { nodes: \n-\n, len: 0 }");
}

#[test]
fn test_fmt_degenerate_shape() {
    const LEN: usize = 3_000;
    let tree: BinarySearchTree<_> = (0..LEN).collect();
    let shape = format!("{:?}", tree.branch());

    // Every node has an empty left branch, and the last one an empty right branch as well.
    assert_eq!(shape.lines().count(), 1 + 2 * LEN + 1);
    assert_eq!(shape.lines().nth(2), Some("(0)"));
    assert_eq!(
        shape.lines().nth(2 * LEN),
        Some(format!("{}({})", "└    ".repeat(LEN - 1), LEN - 1).as_str()),
        "The deepest node should be prefixed once for every step down from the root."
    );
}

#[test]
fn test_clone_is_deep() {
    let mut tree: BinarySearchTree<_> =
        [String::from("b"), String::from("a")].into_iter().collect();
    let copy = tree.clone();
    tree.insert(String::from("c"));

    assert_eq!(copy.len(), 2);
    assert_eq!(tree.len(), 3);
    assert_eq!(collect(copy.in_order()), ["a", "b"]);
}

#[test]
fn test_traversal_panics_on_foreign_cursor() {
    let tree: BinarySearchTree<_> = [1].into_iter().collect();
    let mut other: BinarySearchTree<_> = [1].into_iter().collect();
    let mut cursor = tree.traversal(Order::InOrder);
    assert_eq!(cursor.next(&tree), Ok(Some(&1)));
    other.insert(2);

    assert_panics!({
        let mut iter = other.in_order();
        iter.cursor = cursor.clone();
        iter.next();
    });
}
