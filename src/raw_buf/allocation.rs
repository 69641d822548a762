use std::{alloc::{self, Layout}, mem::MaybeUninit, ptr::{self, NonNull}};

use crate::errors::AllocErr;

#[inline]
pub(crate) fn infallible<T>(result: Result<T, AllocErr>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocErr::Overflow) => panic!("capacity overflow"),
        Err(AllocErr::Alloc { layout }) => alloc::handle_alloc_error(layout),
    }
}

/// Layout of a block of `cap` slots, or `Overflow` if it can't be addressed.
#[inline]
pub(crate) fn block_layout<T>(cap: usize) -> Result<Layout, AllocErr> {
    Layout::array::<T>(cap).map_err(AllocErr::layout)
}

/// Allocates an uninitialized block of `cap` slots.
pub(super) fn allocate<T>(cap: usize) -> Result<Box<[MaybeUninit<T>]>, AllocErr> {
    let layout = block_layout::<T>(cap)?;

    // Zero-sized blocks never touch the allocator.
    if layout.size() == 0 { return Ok(Box::new_uninit_slice(cap)) }

    let ptr = NonNull::new(unsafe { alloc::alloc(layout) })
        .ok_or(AllocErr::alloc(layout))?
        .cast::<MaybeUninit<T>>();

    // `MaybeUninit<T>` shares the layout of `T`, so the block matches what
    // `Box` will hand back to the global allocator on drop.
    Ok(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), cap)) })
}

/// Length of the block that replaces a full one holding `len` elements.
///
/// `factor * len`, bumped to 1 when that product is 0.
#[inline]
pub(crate) fn grown_capacity(len: usize, factor: usize) -> Result<usize, AllocErr> {
    match factor.checked_mul(len) {
        Some(0) => Ok(1),
        Some(cap) => Ok(cap),
        None => Err(AllocErr::Overflow),
    }
}
