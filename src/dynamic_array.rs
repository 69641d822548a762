use std::{fmt, ops::Deref};

use log::trace;

use crate::{errors::ArrayError, raw_buf::{RawBuf, block_layout, grown_capacity, infallible}};

const DEFAULT_GROWTH_FACTOR: usize = 2;

/// A contiguous array that grows to fit whatever is inserted.
///
/// When an insertion finds the buffer full, a new buffer of
/// `growth_factor * len` slots (at least 1) is allocated and the elements are
/// moved over. The buffer never shrinks.
///
/// ```
/// use linarr::DynamicArray;
///
/// let mut arr = DynamicArray::<i32>::new(1).unwrap();
/// arr.append(1);
/// arr.append(2);
/// arr.append(3);
///
/// assert_eq!(arr, [1, 2, 3]);
/// assert_eq!(arr.capacity(), 4);
/// ```
pub struct DynamicArray<T> {
    buf: RawBuf<T>,
    growth_factor: usize,
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("growth_factor", &self.growth_factor)
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Size: {}, Elements: ", self.len())?;
        self.buf.fmt_elements(f)?;
        write!(f, "]")
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self { buf: self.buf.clone(), growth_factor: self.growth_factor }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self { Self::from(Vec::new()) }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for DynamicArray<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for DynamicArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target { self.as_slice() }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    /// Takes the elements of `vec`; the buffer is sized to exactly `vec.len()`.
    fn from(vec: Vec<T>) -> Self {
        Self { buf: RawBuf::from(vec), growth_factor: DEFAULT_GROWTH_FACTOR }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(arr: [T; N]) -> Self { Self::from(Vec::from(arr)) }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(mut arr: DynamicArray<T>) -> Self { arr.buf.take_vec() }
}

impl<T> DynamicArray<T> {

    /// Constructs a new, empty `DynamicArray<T>` with a starting buffer of
    /// `initial_length` slots and a growth factor of 2.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `initial_length` is negative.
    pub fn new<N: TryInto<usize>>(initial_length: N) -> Result<Self, ArrayError> {
        Self::with_growth_factor(initial_length, DEFAULT_GROWTH_FACTOR)
    }

    /// Like [`new`](Self::new), with a custom growth factor.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `initial_length` is negative,
    /// if `growth_factor < 2`, or if the first reallocation
    /// (`growth_factor * max(initial_length, 1)` slots) could not be addressed.
    ///
    /// # Panics
    ///
    /// A factor that passes this check can still overflow on a later
    /// reallocation; that reallocation panics with `capacity overflow`.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// let mut arr = DynamicArray::<u8>::with_growth_factor(2, 3).unwrap();
    /// (0..3).for_each(|v| arr.append(v));
    /// assert_eq!(arr.capacity(), 6);
    ///
    /// assert!(DynamicArray::<u8>::with_growth_factor(2, 1).is_err());
    /// assert!(DynamicArray::<u8>::with_growth_factor(1, usize::MAX).is_err());
    /// ```
    pub fn with_growth_factor<N: TryInto<usize>>(
        initial_length: N,
        growth_factor: usize
    ) -> Result<Self, ArrayError> {
        let initial_length = initial_length.try_into()
            .map_err(|_| ArrayError::InvalidArgument("initial length must be a non-negative integer"))?;
        if growth_factor < 2 {
            return Err(ArrayError::InvalidArgument("growth factor must be at least 2"))
        }
        grown_capacity(initial_length.max(1), growth_factor)
            .and_then(block_layout::<T>)
            .map_err(|_| ArrayError::InvalidArgument("growth factor overflows the buffer length"))?;

        Ok(Self { buf: RawBuf::with_capacity(initial_length), growth_factor })
    }

    /// Returns the number of elements in the array.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// let mut arr = DynamicArray::<i32>::new(0).unwrap();
    /// assert_eq!(arr.len(), 0);
    /// arr.append(5);
    /// assert_eq!(arr.len(), 1);
    /// ```
    #[inline(always)]
    pub const fn len(&self) -> usize { self.buf.len() }

    /// Returns `true` if the array holds no elements.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// let arr = DynamicArray::<i32>::new(4).unwrap();
    /// assert!(arr.is_empty());
    /// ```
    #[inline(always)]
    pub const fn is_empty(&self) -> bool { self.buf.len() == 0 }

    /// Returns the current buffer length. It only ever grows.
    #[inline(always)]
    pub fn capacity(&self) -> usize { self.buf.capacity() }

    /// Returns the multiplier applied to the length when the buffer fills up.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// assert_eq!(DynamicArray::<i32>::new(0).unwrap().growth_factor(), 2);
    /// assert_eq!(DynamicArray::<i32>::with_growth_factor(0, 3).unwrap().growth_factor(), 3);
    /// ```
    #[inline(always)]
    pub const fn growth_factor(&self) -> usize { self.growth_factor }

    /// Reallocates if the buffer has no free slot.
    ///
    /// # Panics
    ///
    /// Panics if the new length overflows. Allocation failure aborts.
    fn ensure_capacity(&mut self) {
        if !self.buf.is_full() { return }

        let new_cap = infallible(grown_capacity(self.len(), self.growth_factor));
        trace!("growing dynamic array buffer from {} to {} slots", self.capacity(), new_cap);
        infallible(self.buf.grow(new_cap));
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        match index < self.len() {
            true => Ok(()),
            false => Err(ArrayError::IndexOutOfRange { index, len: self.len() }),
        }
    }

    /// Appends an element to the back of the array, growing the buffer if
    /// needed.
    ///
    /// # Time Complexity
    ///
    /// Amortized *O*(1).
    #[inline]
    pub fn append(&mut self, element: T) {
        self.ensure_capacity();
        unsafe { self.buf.push_unchecked(element) }
    }

    /// Inserts an element at position `index`, shifting all elements after it
    /// to the right. `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index > len`. Nothing is
    /// allocated or moved in that case.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([1, 3]);
    /// arr.add_at(1, 2).unwrap();
    /// assert_eq!(arr, [1, 2, 3]);
    /// assert!(arr.add_at(5, 0).is_err());
    /// ```
    pub fn add_at(&mut self, index: usize, element: T) -> Result<(), ArrayError> {
        if index > self.len() {
            return Err(ArrayError::IndexOutOfRange { index, len: self.len() })
        }
        self.ensure_capacity();
        unsafe { self.buf.insert_unchecked(index, element) }
        Ok(())
    }

    /// Inserts an element at the front. Cannot fail.
    #[inline]
    pub fn prepend(&mut self, element: T) {
        self.ensure_capacity();
        unsafe { self.buf.insert_unchecked(0, element) }
    }

    /// Removes and returns the element at `index`, shifting all elements after
    /// it to the left. The buffer keeps its length.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        Ok(unsafe { self.buf.remove_unchecked(index) })
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if the array is empty.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([1, 2]);
    /// assert_eq!(arr.pop_front(), Ok(1));
    /// assert_eq!(arr, [2]);
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, ArrayError> { self.remove(0) }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if the array is empty.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([1, 2]);
    /// assert_eq!(arr.pop_back(), Ok(2));
    /// assert_eq!(arr.pop_back(), Ok(1));
    /// assert!(arr.pop_back().is_err());
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        // wraps to usize::MAX on an empty array, which `remove` rejects
        self.remove(self.len().wrapping_sub(1))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use linarr::{ArrayError, DynamicArray};
    ///
    /// let arr = DynamicArray::from([10, 20]);
    /// assert_eq!(arr.get(0), Ok(&10));
    /// assert_eq!(arr.get(2), Err(ArrayError::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Replaces the element at `index`. The length is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([1, 2]);
    /// arr.set(1, 7).unwrap();
    /// assert_eq!(arr, [1, 7]);
    /// assert!(arr.set(2, 0).is_err());
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, element: T) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.as_mut_slice()[index] = element;
        Ok(())
    }

    /// Returns a reference to the first element. Fails on an empty array.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// assert_eq!(DynamicArray::from([4, 5]).get_first(), Ok(&4));
    /// assert!(DynamicArray::<i32>::default().get_first().is_err());
    /// ```
    #[inline]
    pub fn get_first(&self) -> Result<&T, ArrayError> { self.get(0) }

    /// Returns a reference to the last element. Fails on an empty array.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// assert_eq!(DynamicArray::from([4, 5]).get_last(), Ok(&5));
    /// assert!(DynamicArray::<i32>::default().get_last().is_err());
    /// ```
    #[inline]
    pub fn get_last(&self) -> Result<&T, ArrayError> {
        self.get(self.len().wrapping_sub(1))
    }

    /// Drops every element. The buffer is kept.
    pub fn clear(&mut self) { self.buf.clear() }

    /// Sorts the elements in place.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([3, 1, 2]);
    /// arr.sort();
    /// assert_eq!(arr, [1, 2, 3]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort();
    }

    /// Extracts a slice of the valid elements, `[0, len)`.
    ///
    /// Equivalent to `&arr[..]`.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// let mut arr = DynamicArray::<i32>::new(8).unwrap();
    /// arr.append(1);
    /// assert_eq!(arr.as_slice(), [1]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] { self.buf.as_slice() }

    /// Extracts a mutable slice of the valid elements. Elements can be
    /// changed in place but not added or removed.
    ///
    /// # Examples
    /// ```
    /// use linarr::DynamicArray;
    ///
    /// let mut arr = DynamicArray::from([1, 2]);
    /// arr.as_mut_slice()[0] = 9;
    /// assert_eq!(arr, [9, 2]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.buf.as_mut_slice() }
}
