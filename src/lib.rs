//! Linear arrays with checked, non-panicking operations.
//!
//! - [`FixedArray`]: capacity chosen at construction, insertions into a full
//!   array fail with [`ArrayError::CapacityExceeded`].
//! - [`DynamicArray`]: reallocates by a growth factor whenever it fills up.
//!
//! Both support insertion and removal at any index, indexed access, and a
//! read-only slice view of their elements.
//!
//! ```
//! use linarr::{DynamicArray, FixedArray};
//!
//! let mut fixed = FixedArray::<i32>::new(2).unwrap();
//! fixed.append(1).unwrap();
//! fixed.prepend(0).unwrap();
//! assert!(fixed.append(2).is_err());
//!
//! let mut dynamic = DynamicArray::<i32>::new(0).unwrap();
//! dynamic.append(1);
//! dynamic.prepend(0);
//! dynamic.append(2);
//! assert_eq!(dynamic, [0, 1, 2]);
//! ```

mod dynamic_array;
mod fixed_array;
mod raw_buf;

pub(crate) mod errors;

pub use dynamic_array::DynamicArray;
pub use errors::ArrayError;
pub use fixed_array::FixedArray;
