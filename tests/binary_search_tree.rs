use std::cmp::Ordering;

use custom_collections::collections::binary_tree::{BinarySearchTree, Order};

/// A type ordered by one field only, standing in for a reference type with a natural ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Book {
    pages: u32,
}

impl Book {
    fn new(pages: u32) -> Book {
        Book { pages }
    }
}

/// A plain value type with no natural ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

fn by_x(lhs: &Point, rhs: &Point) -> Ordering {
    lhs.x.cmp(&rhs.x)
}

fn by_length(lhs: &&str, rhs: &&str) -> Ordering {
    lhs.len().cmp(&rhs.len())
}

fn books(pages: &[u32]) -> Vec<Book> {
    pages.iter().copied().map(Book::new).collect()
}

#[test]
fn books_use_natural_ordering() {
    let tree: BinarySearchTree<_> = books(&[4, 4, 2, 2, 7]).into_iter().collect();
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.in_order().cloned().collect::<Vec<_>>(), books(&[2, 4, 7]));

    let tree: BinarySearchTree<_> = books(&[4, 2, 3, 1, 8, 7, 10]).into_iter().collect();
    assert!(tree.contains(&Book::new(3)));
    assert!(!tree.contains(&Book::new(5)));
    assert_eq!(tree.pre_order().cloned().collect::<Vec<_>>(), books(&[4, 2, 1, 3, 8, 7, 10]));
    assert_eq!(tree.post_order().cloned().collect::<Vec<_>>(), books(&[1, 3, 2, 7, 10, 8, 4]));
}

#[test]
fn points_need_a_comparison() {
    let mut tree = BinarySearchTree::with_comparison(by_x);
    tree.extend([
        Point { x: 4, y: 4 },
        Point { x: 4, y: 5 },
        Point { x: 2, y: 4 },
        Point { x: 2, y: 4 },
        Point { x: 7, y: 4 },
    ]);

    assert_eq!(tree.len(), 3);
    assert_eq!(
        tree.in_order().copied().collect::<Vec<_>>(),
        [Point { x: 2, y: 4 }, Point { x: 4, y: 4 }, Point { x: 7, y: 4 }],
        "The first of two points with equal x should be kept."
    );
    assert!(tree.contains(&Point { x: 7, y: -1 }));
}

#[test]
fn strings_by_natural_ordering() {
    let tree: BinarySearchTree<_> =
        ["eee", "fff", "ddd", "ccc", "aaa", "bbb"].into_iter().collect();

    assert_eq!(tree.len(), 6);
    assert_eq!(
        tree.in_order().copied().collect::<Vec<_>>(),
        ["aaa", "bbb", "ccc", "ddd", "eee", "fff"]
    );
    assert_eq!(
        tree.pre_order().copied().collect::<Vec<_>>(),
        ["eee", "ddd", "ccc", "aaa", "bbb", "fff"]
    );
    assert_eq!(
        tree.post_order().copied().collect::<Vec<_>>(),
        ["bbb", "aaa", "ccc", "ddd", "fff", "eee"]
    );
    assert!(tree.contains(&"fff"));
    assert!(!tree.contains(&"ggg"));
}

#[test]
fn strings_by_length() {
    let mut tree = BinarySearchTree::with_comparison(by_length);
    tree.extend(["aaaa", "aa", "aaa", "a", "aaaaaa", "aaaaa"]);

    assert_eq!(tree.len(), 6);
    assert_eq!(
        tree.in_order().copied().collect::<Vec<_>>(),
        ["a", "aa", "aaa", "aaaa", "aaaaa", "aaaaaa"]
    );
    assert_eq!(
        tree.pre_order().copied().collect::<Vec<_>>(),
        ["aaaa", "aa", "a", "aaa", "aaaaaa", "aaaaa"]
    );
    assert_eq!(
        tree.post_order().copied().collect::<Vec<_>>(),
        ["a", "aaa", "aa", "aaaaa", "aaaaaa", "aaaa"]
    );
    assert!(tree.contains(&"bbbbb"));
    assert!(!tree.contains(&"ggggggg"));
}

#[test]
fn cursor_reports_insert_between_steps() {
    let mut tree = BinarySearchTree::new();
    tree.extend([4, 2, 3, 1, 8, 7, 10]);

    let mut cursor = tree.traversal(Order::InOrder);
    let mut seen = Vec::new();
    while let Ok(Some(value)) = cursor.next(&tree) {
        seen.push(*value);
        if seen.len() == 3 {
            break;
        }
    }
    assert_eq!(seen, [1, 2, 3]);

    tree.insert(5);
    let error = cursor.next(&tree).expect_err("the tree changed under the cursor");
    assert_eq!(error.found, error.expected + 1);
    assert!(error.to_string().contains("modified during iteration"));
}
