//! Open-node containers deciding the exploration order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::node::Node;

/// Pending nodes of the search tree.
pub(super) trait Frontier {
    fn push(&mut self, node: Node);
    fn pop(&mut self) -> Option<Node>;
    fn len(&self) -> usize;
}

/// Last in, first out.
#[derive(Debug, Default)]
pub(super) struct DepthFirst {
    stack: Vec<Node>,
}

impl Frontier for DepthFirst {
    fn push(&mut self, node: Node) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<Node> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Highest bound first; equal bounds pop in insertion order.
#[derive(Debug, Default)]
pub(super) struct BestFirst {
    heap: BinaryHeap<Queued>,
    pushed: u64,
}

impl Frontier for BestFirst {
    fn push(&mut self, node: Node) {
        let seq = self.pushed;
        self.pushed += 1;
        self.heap.push(Queued { node, seq });
    }

    fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|queued| queued.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Debug)]
struct Queued {
    node: Node,
    seq: u64,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .bound
            .cmp(&other.node.bound)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}
