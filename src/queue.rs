//! Ascending priority queue backed by a binary min-heap
//!
//! Elements are `(weight, payload)` pairs stored in a dense zero-indexed
//! vector; the children of slot `i` live at `2i + 1` and `2i + 2`. The payload
//! is opaque to the queue.
//!
//! The queue is not stable: two elements of equal weight may come out in
//! either insertion order. When sifting down between two children of equal
//! weight the left one is always chosen, so the extraction order is fully
//! determined by the sequence of operations.

use crate::error::{HuffmanError, Result};

#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    elements: Vec<(u64, T)>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn insert(&mut self, weight: u64, payload: T) {
        self.elements.push((weight, payload));
        self.sift_up(self.elements.len() - 1);
    }

    pub fn peek_min_weight(&self) -> Result<u64> {
        self.elements.first().map(|(w, _)| *w).ok_or(HuffmanError::EmptyQueue)
    }

    pub fn peek_min_payload(&self) -> Result<&T> {
        self.elements.first().map(|(_, p)| p).ok_or(HuffmanError::EmptyQueue)
    }

    /// Remove the root and return it as a `(weight, payload)` pair.
    pub fn remove_min(&mut self) -> Result<(u64, T)> {
        if self.elements.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }
        // The last element takes the root's place before sifting down.
        let min = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    pub fn remove_min_payload(&mut self) -> Result<T> {
        self.remove_min().map(|(_, payload)| payload)
    }

    /// Every parent weighs no more than either of its children.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.elements.len()).all(|i| self.elements[(i - 1) / 2].0 <= self.elements[i].0)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.elements[parent].0 <= self.elements[i].0 {
                break;
            }
            self.elements.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            // Strict comparison keeps the left child on ties.
            let child = if right < n && self.elements[right].0 < self.elements[left].0 {
                right
            } else {
                left
            };
            if self.elements[child].0 >= self.elements[i].0 {
                break;
            }
            self.elements.swap(i, child);
            i = child;
        }
    }
}
