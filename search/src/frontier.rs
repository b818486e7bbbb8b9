//! Frontier strategies: FIFO, LIFO, and evaluation-ordered.
//!
//! The search engine only sees the [`Frontier`] trait; swapping the frontier
//! swaps the strategy.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;

use crate::evaluation::EvaluationFunction;
use crate::node::Node;

/// Not-yet-expanded nodes awaiting exploration.
pub trait Frontier<S, A> {
    /// Add a node.
    fn insert(&mut self, node: Rc<Node<S, A>>);

    /// Remove the next node according to the frontier's policy.
    fn remove(&mut self) -> Option<Rc<Node<S, A>>>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Whether graph search may queue a cheaper path to a state that is
    /// already waiting here. FIFO and LIFO keep the path found first.
    fn admits_cheaper_duplicates(&self) -> bool {
        false
    }
}

/// First-in, first-out: breadth-first order.
#[derive(Debug)]
pub struct FifoFrontier<S, A> {
    queue: VecDeque<Rc<Node<S, A>>>,
}

impl<S, A> FifoFrontier<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<S, A> Default for FifoFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Frontier<S, A> for FifoFrontier<S, A> {
    fn insert(&mut self, node: Rc<Node<S, A>>) {
        self.queue.push_back(node);
    }

    fn remove(&mut self) -> Option<Rc<Node<S, A>>> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in, first-out: depth-first order.
#[derive(Debug)]
pub struct LifoFrontier<S, A> {
    stack: Vec<Rc<Node<S, A>>>,
}

impl<S, A> LifoFrontier<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<S, A> Default for LifoFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Frontier<S, A> for LifoFrontier<S, A> {
    fn insert(&mut self, node: Rc<Node<S, A>>) {
        self.stack.push(node);
    }

    fn remove(&mut self) -> Option<Rc<Node<S, A>>> {
        self.stack.pop()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// The priority ordering key: `(f, insertion_order)`.
///
/// Lower `f` first; ties broken by older insertion. `f` is compared with
/// `f64::total_cmp`, so the order is total even for NaN scores.
#[derive(Debug, Clone, Copy)]
pub struct PriorityKey {
    pub f: f64,
    pub insertion_order: u64,
}

impl PartialEq for PriorityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityKey {}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.insertion_order.cmp(&other.insertion_order))
    }
}

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<PriorityKey>` to get
/// min-heap behavior (lowest `f` first).
#[derive(Debug)]
struct PriorityEntry<S, A> {
    key: Reverse<PriorityKey>,
    node: Rc<Node<S, A>>,
}

impl<S, A> PartialEq for PriorityEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, A> Eq for PriorityEntry<S, A> {}

impl<S, A> PartialOrd for PriorityEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for PriorityEntry<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Evaluation-ordered frontier for best-first strategies.
///
/// Each node is scored once, on insertion.
pub struct PriorityFrontier<S, A, E> {
    heap: BinaryHeap<PriorityEntry<S, A>>,
    evaluation: E,
    next_insertion: u64,
}

impl<S, A, E: EvaluationFunction<S, A>> PriorityFrontier<S, A, E> {
    #[must_use]
    pub fn new(evaluation: E) -> Self {
        Self {
            heap: BinaryHeap::new(),
            evaluation,
            next_insertion: 0,
        }
    }

    /// The key of the node `remove` would return next.
    #[must_use]
    pub fn peek_key(&self) -> Option<PriorityKey> {
        self.heap.peek().map(|e| e.key.0)
    }
}

impl<S, A, E: EvaluationFunction<S, A>> Frontier<S, A> for PriorityFrontier<S, A, E> {
    fn insert(&mut self, node: Rc<Node<S, A>>) {
        let key = PriorityKey {
            f: self.evaluation.f(&node),
            insertion_order: self.next_insertion,
        };
        self.next_insertion += 1;
        self.heap.push(PriorityEntry {
            key: Reverse(key),
            node,
        });
    }

    fn remove(&mut self) -> Option<Rc<Node<S, A>>> {
        self.heap.pop().map(|e| e.node)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn admits_cheaper_duplicates(&self) -> bool {
        true
    }
}
