//! Reference-counted payload buffers
//!
//! [`Buffer`] is the handle callers hold while a payload is in circulation.
//! It pairs the payload view (pointer + capacity) with an explicit
//! back-reference to the control block that owns it, so releasing is O(1)
//! with no pointer arithmetic on the caller's side. Cloning adds a
//! reference without copying payload bytes; dropping releases one, and the
//! last drop returns the block to its pool (or frees it outright under the
//! simple strategy).

use core::fmt;
use core::ptr::NonNull;
use core::sync::atomic::{Ordering, fence};
use std::alloc::Layout;
use std::sync::Arc;

use super::block::BlockHeader;
use super::free_list::FreeList;
use super::simple::SimpleHeader;
use crate::raw;

/// Where a buffer's control block lives and how it is released.
enum Owner {
    /// Block owned by a size-class free list; released back to its stack.
    Pooled {
        list: Arc<FreeList>,
        block: NonNull<BlockHeader>,
    },
    /// Standalone allocation with an embedded atomic count; freed at zero.
    Simple {
        header: NonNull<SimpleHeader>,
        layout: Layout,
    },
}

/// A shared, reference-counted view of one allocated payload.
///
/// The payload bytes are NOT zeroed on allocation. Writing through the raw
/// pointer while other clones read or write the same bytes is the caller's
/// contract, exactly like sharing any raw buffer between owners.
pub struct Buffer {
    payload: NonNull<u8>,
    capacity: usize,
    owner: Owner,
}

// SAFETY: control-block mutations go through the owning list's lock or a
// dedicated atomic; payload aliasing across threads is the caller's
// documented contract.
unsafe impl Send for Buffer {}
unsafe impl Sync for Buffer {}

impl Buffer {
    pub(crate) fn pooled(
        list: Arc<FreeList>,
        block: NonNull<BlockHeader>,
        payload: NonNull<u8>,
    ) -> Self {
        let capacity = list.size();
        Self { payload, capacity, owner: Owner::Pooled { list, block } }
    }

    pub(crate) fn simple(
        header: NonNull<SimpleHeader>,
        layout: Layout,
        payload: NonNull<u8>,
        capacity: usize,
    ) -> Self {
        Self { payload, capacity, owner: Owner::Simple { header, layout } }
    }

    /// Usable payload bytes. For pooled buffers this is the size class the
    /// request was rounded up to, not the requested size.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the buffer has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Payload address for reads.
    pub fn as_ptr(&self) -> *const u8 {
        self.payload.as_ptr()
    }

    /// Payload address for writes.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.payload.as_ptr()
    }

    /// Copies `src` to the start of the payload.
    ///
    /// # Panics
    /// Panics if `src` is longer than the capacity.
    pub fn copy_from_slice(&mut self, src: &[u8]) {
        assert!(
            src.len() <= self.capacity,
            "source of {} bytes exceeds buffer capacity {}",
            src.len(),
            self.capacity
        );
        // SAFETY: payload is valid for capacity bytes and src cannot
        // overlap a freshly allocated payload.
        unsafe {
            core::ptr::copy_nonoverlapping(src.as_ptr(), self.payload.as_ptr(), src.len());
        }
    }

    /// Views the whole payload as initialized bytes.
    ///
    /// # Safety
    /// The first `capacity()` bytes must have been written since
    /// allocation; payload memory starts uninitialized.
    pub unsafe fn as_slice(&self) -> &[u8] {
        // SAFETY: payload is valid for capacity bytes; initialization is
        // the caller's contract.
        unsafe { core::slice::from_raw_parts(self.payload.as_ptr(), self.capacity) }
    }

    /// Mutable view of the whole payload.
    ///
    /// # Safety
    /// Same initialization contract as [`Buffer::as_slice`], and no other
    /// clone may access the payload concurrently.
    pub unsafe fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as above; exclusivity is the caller's contract.
        unsafe { core::slice::from_raw_parts_mut(self.payload.as_ptr(), self.capacity) }
    }
}

impl Clone for Buffer {
    /// Adds a second owner to the same payload without copying data.
    fn clone(&self) -> Self {
        let owner = match &self.owner {
            Owner::Pooled { list, block } => {
                list.retain(*block);
                Owner::Pooled { list: Arc::clone(list), block: *block }
            }
            Owner::Simple { header, layout } => {
                // SAFETY: header is live while any handle exists.
                unsafe { header.as_ref() }.refs.fetch_add(1, Ordering::Relaxed);
                Owner::Simple { header: *header, layout: *layout }
            }
        };
        Self { payload: self.payload, capacity: self.capacity, owner }
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        match &self.owner {
            Owner::Pooled { list, block } => list.release(*block),
            Owner::Simple { header, layout } => {
                // SAFETY: header is live while any handle exists.
                if unsafe { header.as_ref() }.refs.fetch_sub(1, Ordering::Release) == 1 {
                    fence(Ordering::Acquire);
                    // SAFETY: last reference; the allocation started at the
                    // header and was made with this layout.
                    unsafe { raw::dealloc(header.cast::<u8>(), *layout) };
                }
            }
        }
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.capacity)
            .field("pooled", &matches!(self.owner, Owner::Pooled { .. }))
            .finish()
    }
}
