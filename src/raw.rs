//! Portable aligned allocation primitive.
//!
//! Every byte this crate hands out flows through this module. `std::alloc`
//! with an explicit [`Layout`] guarantees the requested alignment on every
//! supported platform, so this is the single boundary where raw memory is
//! obtained and returned; nothing else in the crate touches the system
//! allocator.
//!
//! Failure here is not recoverable by design: exhaustion aborts the process
//! with a diagnostic instead of unwinding into allocator state.

use std::alloc::{self, Layout, handle_alloc_error};
use std::ptr::NonNull;

/// Builds the layout for one raw allocation of `size` bytes at `alignment`.
///
/// `alignment` has been validated by [`crate::config::AllocatorConfig`];
/// a `size` large enough to overflow the layout is treated the same as
/// exhaustion.
pub(crate) fn layout(size: usize, alignment: usize) -> Layout {
    match Layout::from_size_align(size, alignment) {
        Ok(layout) => layout,
        Err(_) => panic!("allocation of {size} bytes at alignment {alignment} is unrepresentable"),
    }
}

/// Allocates `layout.size()` bytes aligned to `layout.align()`.
///
/// The returned memory is uninitialized. `layout.size()` must be nonzero,
/// which holds for every caller: each allocation carries a header in front
/// of the payload.
pub(crate) fn alloc(layout: Layout) -> NonNull<u8> {
    debug_assert!(layout.size() > 0);
    // SAFETY: layout has nonzero size.
    let ptr = unsafe { alloc::alloc(layout) };
    match NonNull::new(ptr) {
        Some(ptr) => ptr,
        None => handle_alloc_error(layout),
    }
}

/// Returns memory obtained from [`alloc`].
///
/// # Safety
/// `ptr` must have been returned by [`alloc`] with the same `layout`, and
/// must not be used afterwards.
pub(crate) unsafe fn dealloc(ptr: NonNull<u8>, layout: Layout) {
    // SAFETY: caller upholds the alloc/dealloc pairing contract.
    unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
}
