//! Non-pooled fallback allocator
//!
//! Every call allocates and frees raw aligned memory directly; the only
//! state is a per-allocation atomic reference count embedded in the header.
//! Heavier per-call cost than the pooled strategy, but zero resident
//! memory and no size-class bookkeeping — the low-complexity baseline.

use core::ptr::NonNull;
use core::sync::atomic::AtomicUsize;

use super::buffer::Buffer;
use super::traits::BufferAllocator;
use crate::config::AllocatorConfig;
use crate::raw;
use crate::utils::align_up;

/// Header embedded at the front of every simple allocation.
///
/// Unlike pooled blocks, the count starts at one: the allocation and the
/// first reference are the same event here.
pub(crate) struct SimpleHeader {
    pub(crate) refs: AtomicUsize,
}

/// Allocator that performs one raw aligned allocation per call.
#[derive(Debug, Clone, Copy)]
pub struct SimpleAllocator {
    alignment: usize,
}

impl SimpleAllocator {
    /// Creates a simple allocator from a validated configuration.
    pub fn new(config: &AllocatorConfig) -> Self {
        Self::with_alignment(config.alignment)
    }

    /// Creates a simple allocator with an explicit alignment.
    pub fn with_alignment(alignment: usize) -> Self {
        debug_assert!(alignment.is_power_of_two());
        Self { alignment }
    }

    /// Alignment applied to every allocation.
    pub fn alignment(&self) -> usize {
        self.alignment
    }
}

impl BufferAllocator for SimpleAllocator {
    fn allocate(&self, size: usize) -> Buffer {
        let offset = align_up(core::mem::size_of::<SimpleHeader>(), self.alignment);
        let layout = raw::layout(offset + size, self.alignment);
        let base = raw::alloc(layout);
        let header = base.cast::<SimpleHeader>();
        // SAFETY: base is fresh, aligned, and large enough for the header.
        unsafe {
            header.as_ptr().write(SimpleHeader { refs: AtomicUsize::new(1) });
        }
        // SAFETY: offset stays inside the allocation.
        let payload = unsafe { NonNull::new_unchecked(base.as_ptr().add(offset)) };
        Buffer::simple(header, layout, payload, size)
    }
}
