use std::cmp::Ordering;

use crate::RunStitching;
use crate::run_heap::RunHeap;

/// Single forward scan that splits the working buffer into ascending runs.
///
/// Descending runs are strictly descending and get reversed in place before
/// they are handed to the heap. Equal neighbours always continue an ascending
/// run, so reversal never swaps equal elements.
pub(crate) struct RunBuilder<'a, T, F> {
    buf: &'a mut [T],
    compare: &'a mut F,
    heap: RunHeap,
    stitching: RunStitching,
    /// First index of the run being scanned.
    head: usize,
    /// Left element of the pair under comparison; the right one is `left + 1`.
    left: usize,
    last: usize,
    previous_run_was_descending: bool,
}

impl<'a, T, F> RunBuilder<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub fn new(buf: &'a mut [T], compare: &'a mut F, stitching: RunStitching) -> Self {
        debug_assert!(buf.len() >= 2);
        let heap = RunHeap::for_len(buf.len());
        let last = buf.len() - 1;
        Self {
            buf,
            compare,
            heap,
            stitching,
            head: 0,
            left: 0,
            last,
            previous_run_was_descending: false,
        }
    }

    /// Scans the whole buffer. The returned heap is not yet heap-ordered.
    pub fn build(mut self) -> RunHeap {
        while self.left < self.last {
            self.head = self.left;
            let ascending = !self.is_descent(self.left);
            self.left += 1;

            if ascending {
                self.scan_ascending_run();
            } else {
                self.scan_descending_run();
            }

            self.left += 1;
        }

        self.handle_last_element();
        self.heap
    }

    #[inline]
    fn is_descent(&mut self, at: usize) -> bool {
        (self.compare)(&self.buf[at], &self.buf[at + 1]) == Ordering::Greater
    }

    fn scan_ascending_run(&mut self) {
        while self.left < self.last && !self.is_descent(self.left) {
            self.left += 1;
        }

        self.add_run();
        self.previous_run_was_descending = false;
    }

    fn scan_descending_run(&mut self) {
        while self.left < self.last && self.is_descent(self.left) {
            self.left += 1;
        }

        self.buf[self.head..=self.left].reverse();
        self.add_run();
        self.previous_run_was_descending = true;
    }

    /// Pushes the run `[head, left]`, or folds it into the previous run when
    /// that run was a reversed descent and the two already join in order.
    fn add_run(&mut self) {
        if self.stitching == RunStitching::Enabled
            && self.previous_run_was_descending
            && !self.is_descent(self.head - 1)
        {
            self.heap.append_run(self.left + 1 - self.head);
        } else {
            self.heap.push_run(self.head, self.left);
        }
    }

    fn handle_last_element(&mut self) {
        if self.left != self.last {
            return;
        }

        // The previous run ends at `last - 1`.
        if !self.is_descent(self.last - 1) {
            self.heap.append_run(1);
        } else {
            self.heap.push_run(self.last, self.last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_heap::Run;

    fn build_runs(buf: &mut [i32], stitching: RunStitching) -> Vec<(usize, usize)> {
        let mut compare = i32::cmp;
        let heap = RunBuilder::new(buf, &mut compare, stitching).build();
        heap.runs()
            .iter()
            .map(|&Run { start, end }| (start, end))
            .collect()
    }

    #[test]
    fn single_ascending_run() {
        let mut buf = [1, 2, 2, 3, 5, 8];
        assert_eq!(build_runs(&mut buf, RunStitching::Disabled), vec![(0, 5)]);
        assert_eq!(buf, [1, 2, 2, 3, 5, 8]);
    }

    #[test]
    fn strictly_descending_input_becomes_one_ascending_run() {
        for len in 2..=9 {
            let mut buf: Vec<i32> = (0..len).rev().collect();
            assert_eq!(
                build_runs(&mut buf, RunStitching::Disabled),
                vec![(0, len as usize - 1)],
                "len={len}"
            );
            assert_eq!(buf, (0..len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn descending_then_ascending_without_join() {
        let mut buf = [5, 3, 1, 2, 4];
        for stitching in [RunStitching::Enabled, RunStitching::Disabled] {
            let mut scratch = buf;
            assert_eq!(build_runs(&mut scratch, stitching), vec![(0, 2), (3, 4)]);
            assert_eq!(scratch, [1, 3, 5, 2, 4]);
        }
        assert_eq!(build_runs(&mut buf, RunStitching::Enabled).len(), 2);
    }

    #[test]
    fn stitches_ascending_run_onto_reversed_descent() {
        let mut buf = [3, 2, 1, 4, 5];
        assert_eq!(build_runs(&mut buf, RunStitching::Enabled), vec![(0, 4)]);
        assert_eq!(buf, [1, 2, 3, 4, 5]);

        let mut buf = [3, 2, 1, 4, 5];
        assert_eq!(
            build_runs(&mut buf, RunStitching::Disabled),
            vec![(0, 2), (3, 4)]
        );
    }

    #[test]
    fn stitches_consecutive_descents() {
        // 2 1 | 4 3 | 6 5 reverses into 1 2 | 3 4 | 5 6.
        let mut buf = [2, 1, 4, 3, 6, 5];
        assert_eq!(build_runs(&mut buf, RunStitching::Enabled), vec![(0, 5)]);
        assert_eq!(buf, [1, 2, 3, 4, 5, 6]);

        let mut buf = [2, 1, 4, 3, 6, 5];
        assert_eq!(
            build_runs(&mut buf, RunStitching::Disabled),
            vec![(0, 1), (2, 3), (4, 5)]
        );
    }

    #[test]
    fn no_stitch_after_ascending_run() {
        let mut buf = [1, 2, 9, 4, 5];
        assert_eq!(
            build_runs(&mut buf, RunStitching::Enabled),
            vec![(0, 2), (3, 4)]
        );
    }

    #[test]
    fn leftover_element_joins_or_stands_alone() {
        let mut buf = [2, 1, 3];
        assert_eq!(build_runs(&mut buf, RunStitching::Disabled), vec![(0, 2)]);
        assert_eq!(buf, [1, 2, 3]);

        let mut buf = [1, 2, 0];
        assert_eq!(
            build_runs(&mut buf, RunStitching::Disabled),
            vec![(0, 1), (2, 2)]
        );
    }

    #[test]
    fn equal_neighbours_are_not_a_descent() {
        let mut buf = [2, 2, 1, 1];
        assert_eq!(
            build_runs(&mut buf, RunStitching::Enabled),
            vec![(0, 1), (2, 3)]
        );
        assert_eq!(buf, [2, 2, 1, 1]);

        let mut buf = [1, 2, 2, 1];
        assert_eq!(
            build_runs(&mut buf, RunStitching::Enabled),
            vec![(0, 2), (3, 3)]
        );
    }

    #[test]
    fn runs_cover_buffer_in_sorted_pieces() {
        let mut buf = [4, 8, 1, 9, 9, 3, 2, 2, 7, 0, 5, 6, 1];
        let runs = build_runs(&mut buf, RunStitching::Enabled);

        let mut next = 0;
        for &(start, end) in &runs {
            assert_eq!(start, next);
            assert!(buf[start..=end].windows(2).all(|w| w[0] <= w[1]));
            next = end + 1;
        }
        assert_eq!(next, buf.len());
    }
}
