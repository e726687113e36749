//! Buffer deallocation strategies for custom memory management.

use std::ptr::NonNull;

/// Trait defining deallocation logic for buffers produced by an [`Allocator`].
///
/// [`Allocator`]: super::Allocator
pub trait Deallocator: Send + Sync {
    /// Deallocates a buffer at the specified pointer with the given capacity.
    ///
    /// # Parameters
    ///
    /// * `ptr` - Non-null pointer to the buffer to deallocate
    /// * `capacity` - Original capacity of the buffer in bytes
    ///
    /// The pointer must come from the matching allocator and must not be used
    /// after this call.
    fn deallocate(&self, ptr: NonNull<u8>, capacity: usize);
}

/// Blanket implementation allowing closures to act as deallocators.
impl<T> Deallocator for T
where
    T: Fn(NonNull<u8>, usize) + Send + Sync,
{
    fn deallocate(&self, ptr: NonNull<u8>, capacity: usize) {
        self(ptr, capacity);
    }
}

/// No-operation deallocator used by empty buffers.
pub(crate) fn noop_deallocator(_ptr: NonNull<u8>, _capacity: usize) {}
