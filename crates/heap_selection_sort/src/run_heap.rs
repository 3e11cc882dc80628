use std::cmp::Ordering;

/// Inclusive index range `[start, end]` into the working buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Run {
    pub start: usize,
    pub end: usize,
}

/// Binary min-heap over runs, keyed by each run's head element.
///
/// The heap never owns or borrows the elements. Every operation that compares
/// takes the working buffer and the comparator explicitly, which lets the
/// builder keep mutable access to the buffer while it pushes runs.
///
/// Ties between equal head elements go to the smaller head index. Runs are
/// disjoint and laid out in input order, so this keeps the sort stable.
#[derive(Debug)]
pub(crate) struct RunHeap {
    runs: Vec<Run>,
    capacity: usize,
}

impl RunHeap {
    /// Heap able to hold every run of a buffer of `len` elements.
    ///
    /// Each scanned run spans at least two elements, except a single trailing
    /// leftover, so `len / 2 + 1` slots always suffice.
    pub fn for_len(len: usize) -> Self {
        let capacity = len / 2 + 1;
        Self {
            runs: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    #[cfg(test)]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Appends a run as the next leaf. Heap order is not restored.
    pub fn push_run(&mut self, start: usize, end: usize) {
        assert!(
            self.runs.len() < self.capacity,
            "run heap overflow: capacity {}",
            self.capacity
        );
        debug_assert!(start <= end);
        self.runs.push(Run { start, end });
    }

    /// Extends the most recently pushed run by `length` elements.
    pub fn append_run(&mut self, length: usize) {
        let last = self
            .runs
            .last_mut()
            .expect("append_run called on a run heap with no runs");
        last.end += length;
    }

    pub fn heapify<T, F>(&mut self, buf: &[T], compare: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        for node in (0..self.runs.len() / 2).rev() {
            self.sift_down(buf, node, compare);
        }
    }

    /// Returns the buffer index of the smallest remaining element and consumes it.
    ///
    /// The caller moves the element out of `buf` after this returns, so a
    /// panicking comparator never observes a half-moved element.
    pub fn pop_head<T, F>(&mut self, buf: &[T], compare: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let root = &mut self.runs[0];
        let head = root.start;

        if root.start == root.end {
            self.runs.swap_remove(0);
            if self.runs.is_empty() {
                return head;
            }
        } else {
            root.start += 1;
        }

        self.sift_down(buf, 0, compare);
        head
    }

    fn sift_down<T, F>(&mut self, buf: &[T], mut node: usize, compare: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.runs.len();
        let sifted = self.runs[node];

        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut best = node;
            let mut best_head = sifted.start;
            if precedes(buf, self.runs[left].start, best_head, compare) {
                best = left;
                best_head = self.runs[left].start;
            }
            if right < len && precedes(buf, self.runs[right].start, best_head, compare) {
                best = right;
            }

            if best == node {
                break;
            }
            self.runs[node] = self.runs[best];
            node = best;
        }

        self.runs[node] = sifted;
    }
}

#[inline]
fn precedes<T, F>(buf: &[T], a: usize, b: usize, compare: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    match compare(&buf[a], &buf[b]) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a < b,
    }
}
