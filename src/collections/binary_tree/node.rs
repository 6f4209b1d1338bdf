use std::fmt::{self, Debug, Formatter};

/// The position of a [`Node`] within the arena of its tree.
pub(crate) type NodeIndex = usize;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub left: Option<NodeIndex>,
    pub right: Option<NodeIndex>,
}

impl<T> Node<T> {
    pub const fn leaf(value: T) -> Node<T> {
        Node {
            value,
            left: None,
            right: None,
        }
    }
}

/// How far a depth-first walk has progressed through a node on its stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Entered,
    LeftDone,
    RightDone,
}

/// A branch on the path being printed, with the marker for the side of its parent it hangs from.
type Entry = (Option<NodeIndex>, &'static str, Phase);

const LEFT: &str = "┌    ";
const RIGHT: &str = "└    ";

/// A borrowed view of a tree, used to print its shape. Each node is printed on its own line as
/// `(value)`, an empty branch as `-`, with left subtrees above and right subtrees below their
/// parent. Every line is prefixed with a marker for each step down from the root.
pub(crate) struct Branch<'a, T> {
    pub nodes: &'a [Node<T>],
    pub index: Option<NodeIndex>,
}

impl<T: Debug> Debug for Branch<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The path from the root is kept on the heap, so a degenerate tree can't exhaust the call
        // stack.
        let mut stack: Vec<Entry> = vec![(self.index, "", Phase::Entered)];

        f.write_str("\n")?;
        while let Some(&(index, _, phase)) = stack.last() {
            let top = stack.len() - 1;

            let Some(node) = index.and_then(|i| self.nodes.get(i)) else {
                write_prefix(f, &stack)?;
                f.write_str("-\n")?;
                stack.pop();
                continue;
            };

            match phase {
                Phase::Entered => {
                    stack[top].2 = Phase::LeftDone;
                    stack.push((node.left, LEFT, Phase::Entered));
                },
                Phase::LeftDone => {
                    write_prefix(f, &stack)?;
                    writeln!(f, "({:?})", node.value)?;
                    stack[top].2 = Phase::RightDone;
                    stack.push((node.right, RIGHT, Phase::Entered));
                },
                Phase::RightDone => {
                    stack.pop();
                },
            }
        }

        Ok(())
    }
}

fn write_prefix(f: &mut Formatter<'_>, stack: &[Entry]) -> fmt::Result {
    stack.iter().try_for_each(|(_, marker, _)| f.write_str(marker))
}
