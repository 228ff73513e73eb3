//! Size-homogeneous free lists
//!
//! A free list owns every block of one payload capacity that it has ever
//! created. Unused blocks sit on an intrusive LIFO stack (most recently
//! released first, which favors cache locality); blocks in circulation are
//! reachable only through their [`Buffer`] handles. Blocks are recycled,
//! never individually freed: raw memory is returned to the system only when
//! the list itself is dropped.

use core::ptr::NonNull;
use std::sync::Arc;

use parking_lot::Mutex;

use super::block::{self, BlockHeader};
use super::buffer::Buffer;

/// A LIFO stack of interchangeable blocks of one fixed payload capacity.
pub(crate) struct FreeList {
    /// Payload capacity of every block this list owns.
    size: usize,
    /// Alignment the blocks were allocated with.
    alignment: usize,
    /// Head of the intrusive free stack. Guards the stack links and every
    /// owned block's reference count.
    head: Mutex<*mut BlockHeader>,
}

// SAFETY: the raw head pointer and all reachable headers are only touched
// under the mutex; blocks never migrate between lists.
unsafe impl Send for FreeList {}
unsafe impl Sync for FreeList {}

impl FreeList {
    /// Creates a list for one size class, seeded with a single block.
    pub(crate) fn new(size: usize, alignment: usize) -> Self {
        let seed = block::new_block(size, alignment);
        Self { size, alignment, head: Mutex::new(seed.as_ptr()) }
    }

    /// Payload capacity of this list's blocks.
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Pops a block, constructing one if the stack is empty, and hands out
    /// the first reference to it.
    pub(crate) fn pop(list: &Arc<Self>) -> Buffer {
        let block = {
            let mut head = list.head.lock();
            let block = match NonNull::new(*head) {
                Some(block) => {
                    // SAFETY: stacked headers are live blocks owned by this
                    // list; the lock is held.
                    *head = unsafe { block.as_ref().next };
                    block
                }
                None => block::new_block(list.size, list.alignment),
            };
            // Acquisition: 0 -> 1, the block enters circulation.
            // SAFETY: ref_count is mutated only under this lock.
            unsafe { (*block.as_ptr()).ref_count += 1 };
            block
        };
        // SAFETY: block belongs to this list and was allocated with its
        // alignment.
        let payload = unsafe { block::payload(block, list.alignment) };
        Buffer::pooled(Arc::clone(list), block, payload)
    }

    /// Adds a reference to a circulating block.
    pub(crate) fn retain(&self, block: NonNull<BlockHeader>) {
        let _guard = self.head.lock();
        // SAFETY: ref_count is mutated only under this lock.
        unsafe { (*block.as_ptr()).ref_count += 1 };
    }

    /// Drops a reference; at zero the block leaves circulation and is pushed
    /// onto the free stack (LIFO).
    pub(crate) fn release(&self, block: NonNull<BlockHeader>) {
        let mut head = self.head.lock();
        // SAFETY: ref_count and next are mutated only under this lock.
        unsafe {
            let header = block.as_ptr();
            debug_assert!((*header).ref_count >= 1);
            (*header).ref_count -= 1;
            if (*header).ref_count == 0 {
                (*header).next = *head;
                *head = header;
            }
        }
    }

    /// Number of blocks currently stacked (not in circulation).
    #[cfg(test)]
    pub(crate) fn stacked(&self) -> usize {
        let head = self.head.lock();
        let mut count = 0;
        let mut cursor = *head;
        while let Some(block) = NonNull::new(cursor) {
            count += 1;
            cursor = unsafe { block.as_ref().next };
        }
        count
    }
}

impl Drop for FreeList {
    fn drop(&mut self) {
        // Circulating blocks keep the list alive through their handles'
        // Arc, so by the time this runs every owned block is stacked.
        let mut cursor = *self.head.get_mut();
        while let Some(block) = NonNull::new(cursor) {
            // SAFETY: each stacked header came from new_block with this
            // list's size and alignment; nothing references it anymore.
            unsafe {
                cursor = block.as_ref().next;
                block::destroy(block, self.size, self.alignment);
            }
        }
    }
}
