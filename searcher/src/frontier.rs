//! Containers which hold discovered, but not yet expanded, search nodes.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::default::Default;

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
pub trait Frontier {
    type Item;

    fn pop(&mut self) -> Option<Self::Item>;

    fn push(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in, first-out frontier.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier for Stack<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.items.pop()
    }

    fn push(&mut self, item: Self::Item) {
        self.items.push(item);
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First-in, first-out frontier.
#[derive(Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier for Queue<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.items.pop_front()
    }

    fn push(&mut self, item: Self::Item) {
        self.items.push_back(item);
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Entry in the priority queue.
///
/// Ordered so that the max-heap in [BinaryHeap] yields the lowest
/// priority first, and among equal priorities the earliest inserted.
#[derive(Debug)]
struct Prioritized<T, P> {
    priority: P,
    counter: u64,
    item: T,
}

impl<T, P> PartialEq for Prioritized<T, P>
where
    P: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.counter == other.counter
    }
}

impl<T, P> Eq for Prioritized<T, P> where P: Ord {}

impl<T, P> Ord for Prioritized<T, P>
where
    P: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.counter.cmp(&other.counter))
            .reverse()
    }
}

impl<T, P> PartialOrd for Prioritized<T, P>
where
    P: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with stable ordering among equal priorities.
#[derive(Debug)]
pub struct PriorityQueue<T, P>
where
    P: Ord,
{
    heap: BinaryHeap<Prioritized<T, P>>,
    counter: u64,
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> PriorityQueue<T, P>
where
    P: Ord,
{
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }

    /// Insert an item, even if an equal item is already queued.
    pub fn push(&mut self, item: T, priority: P) {
        let counter = self.counter;
        self.counter += 1;
        self.heap.push(Prioritized {
            priority,
            counter,
            item,
        });
    }

    /// Remove the item with the lowest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    /// Remove the item with the lowest priority, along with that priority.
    pub fn pop_with_priority(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|e| (e.item, e.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P> PriorityQueue<T, P>
where
    T: PartialEq,
    P: Ord,
{
    /// Insert an item, or lower the priority of an equal queued item.
    ///
    /// When an equal item is already queued with a strictly higher
    /// priority, it is replaced by `item` at `priority` and keeps its
    /// original place among ties. When it is queued with an equal or lower
    /// priority, nothing changes. Otherwise the item is pushed.
    pub fn update(&mut self, item: T, priority: P) {
        let improves = self
            .heap
            .iter()
            .find(|e| e.item == item)
            .map(|e| e.priority > priority);

        match improves {
            None => self.push(item, priority),
            Some(false) => {}
            Some(true) => {
                let mut entries = std::mem::take(&mut self.heap).into_vec();
                if let Some(entry) = entries.iter_mut().find(|e| e.item == item) {
                    entry.priority = priority;
                    entry.item = item;
                }
                self.heap = BinaryHeap::from(entries);
            }
        }
    }
}
