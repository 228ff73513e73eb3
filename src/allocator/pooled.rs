//! Size-classed pooled allocator
//!
//! Rounds each request up to a 32-byte size class and serves it from the
//! free list registered for that class, creating the list lazily on first
//! demand. The registry lock is held only for the lookup/creation, never
//! across the list's own pop, so requests for different size classes never
//! contend with each other.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::SIZE_CLASS;
use super::buffer::Buffer;
use super::free_list::FreeList;
use super::traits::BufferAllocator;
use crate::config::AllocatorConfig;
use crate::utils::align_up;

/// Rounds a requested size up to its size class: the smallest multiple of
/// [`SIZE_CLASS`] that is >= `size`. Exact multiples are left unchanged.
///
/// # Examples
/// ```
/// use bufpool::allocator::size_class;
///
/// assert_eq!(size_class(1), 32);
/// assert_eq!(size_class(32), 32);
/// assert_eq!(size_class(33), 64);
/// ```
#[inline]
pub const fn size_class(size: usize) -> usize {
    align_up(size, SIZE_CLASS)
}

/// Allocator that reuses fixed-size blocks through per-class free lists.
///
/// One free list exists per distinct rounded size ever requested; lists
/// grow lazily and shrink only at teardown.
pub struct PooledAllocator {
    alignment: usize,
    pools: Mutex<HashMap<usize, Arc<FreeList>>>,
}

impl PooledAllocator {
    /// Creates a pooled allocator from a validated configuration.
    pub fn new(config: &AllocatorConfig) -> Self {
        Self::with_alignment(config.alignment)
    }

    /// Creates a pooled allocator with an explicit alignment.
    pub fn with_alignment(alignment: usize) -> Self {
        debug_assert!(alignment.is_power_of_two());
        Self { alignment, pools: Mutex::new(HashMap::new()) }
    }

    /// Alignment applied to every block allocation.
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Number of distinct size-class pools created so far.
    pub fn pool_count(&self) -> usize {
        self.pools.lock().len()
    }
}

impl BufferAllocator for PooledAllocator {
    fn allocate(&self, size: usize) -> Buffer {
        let class = size_class(size);
        let list = {
            let mut pools = self.pools.lock();
            Arc::clone(
                pools
                    .entry(class)
                    .or_insert_with(|| Arc::new(FreeList::new(class, self.alignment))),
            )
        };
        FreeList::pop(&list)
    }
}

impl Drop for PooledAllocator {
    fn drop(&mut self) {
        debug!(size_classes = self.pools.get_mut().len(), "dropping pooled allocator");
    }
}
