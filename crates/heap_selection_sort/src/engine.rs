use std::cmp::Ordering;
use std::{mem, ptr, slice};

use crate::SortConfig;
use crate::run_builder::RunBuilder;

/// Stably sorts `v` through a scratch copy: detect runs, then heap-merge them
/// back into `v`.
pub(crate) fn sort<T, F>(v: &mut [T], config: SortConfig, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("heap_selection_sort", len).entered();

    // `scratch` keeps length zero, so dropping it only frees the allocation.
    let mut scratch: Vec<T> = Vec::with_capacity(len);
    let buf_ptr = scratch.as_mut_ptr();
    let dest = v.as_mut_ptr();

    // SAFETY: `scratch` has capacity for `len` elements and is a fresh allocation,
    // so the two regions cannot overlap. From here on every element of `v` lives
    // bitwise in `scratch`; `v` holds stale duplicates that get overwritten.
    unsafe {
        ptr::copy_nonoverlapping(dest, buf_ptr, len);
    }
    let guard = CopyOnDrop {
        src: buf_ptr,
        dest,
        len,
    };

    // SAFETY: the first `len` slots of `scratch` were initialized just above.
    let buf = unsafe { slice::from_raw_parts_mut(buf_ptr, len) };

    let mut heap = RunBuilder::new(&mut *buf, compare, config.run_stitching).build();
    debug_assert!(heap.len() <= len / 2 + 1);

    #[cfg(feature = "tracing")]
    tracing::trace!(runs = heap.len(), "runs detected");

    let buf: &[T] = buf;
    heap.heapify(buf, compare);

    for i in 0..len {
        let src = heap.pop_head(buf, compare);
        // SAFETY: `pop_head` yields every index of `buf` exactly once, so each
        // element is moved into exactly one slot of `v`. `i < len` keeps the
        // write in bounds. The stale value at `dest + i` is a duplicate of an
        // element owned by `buf` and must not be dropped.
        unsafe {
            ptr::copy_nonoverlapping(buf.as_ptr().add(src), dest.add(i), 1);
        }
    }
    debug_assert!(heap.is_empty());

    // Every slot of `v` now owns exactly one element.
    mem::forget(guard);
}

/// Restores `dest` from `src` when dropped.
///
/// Armed while the comparator may still run. `src` always holds a complete
/// permutation of the input, so copying it back on unwind leaves the caller
/// with every element exactly once.
struct CopyOnDrop<T> {
    src: *const T,
    dest: *mut T,
    len: usize,
}

impl<T> Drop for CopyOnDrop<T> {
    fn drop(&mut self) {
        // SAFETY: `src` and `dest` are distinct allocations of at least `len`
        // elements, and `src` is fully initialized for as long as the guard lives.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, self.len);
        }
    }
}
