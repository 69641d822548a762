use std::alloc::{Layout, LayoutError};

use thiserror::Error;

/// Errors returned by the fallible operations of [`FixedArray`](crate::FixedArray)
/// and [`DynamicArray`](crate::DynamicArray).
///
/// A call that returns an error leaves the array untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// A constructor argument was out of its valid domain, e.g. a negative
    /// capacity.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An index fell outside the range accepted by the operation.
    #[error("index out of bounds: {index}, current size: {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An insertion was attempted on a full fixed-capacity array.
    #[error("array is full, cannot add more elements (capacity: {capacity})")]
    CapacityExceeded { capacity: usize },
}

#[derive(Debug, Clone)]
pub(crate) enum AllocErr {
    Overflow,
    Alloc { layout: Layout }
}

impl AllocErr {
    // `Layout::array` only fails when the block would exceed `isize::MAX` bytes
    #[inline]
    pub(crate) const fn layout(_err: LayoutError) -> Self { Self::Overflow }

    #[inline]
    pub(crate) const fn alloc(layout: Layout) -> Self { Self::Alloc { layout } }
}
