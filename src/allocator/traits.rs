//! The allocation seam shared by both strategies

use super::buffer::Buffer;

/// Source of reference-counted payload buffers.
///
/// Implementations hand out [`Buffer`] handles with at least `size` usable
/// bytes, aligned to the allocator's configured alignment. Releasing and
/// sharing happen on the handle itself (drop and clone), so this trait has
/// a single method.
///
/// Allocation never fails recoverably: resource exhaustion aborts the
/// process (see [`crate::error`]).
pub trait BufferAllocator: Send + Sync {
    /// Allocates a buffer of at least `size` bytes.
    ///
    /// Payload bytes are uninitialized; write before reading.
    fn allocate(&self, size: usize) -> Buffer;
}
