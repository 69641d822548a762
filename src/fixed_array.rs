use std::{fmt, ops::Deref};

use crate::{errors::ArrayError, raw_buf::RawBuf};

/// A contiguous array whose capacity is chosen at construction and never
/// changes.
///
/// Elements can be added and removed anywhere up to the capacity. Every
/// operation that could go out of bounds returns a [`Result`] instead of
/// panicking, and a failed call leaves the array exactly as it was.
///
/// # Examples
///
/// ```
/// use linarr::{ArrayError, FixedArray};
///
/// let mut arr = FixedArray::<i32>::new(3)?;
/// arr.append(1)?;
/// arr.append(2)?;
/// arr.append(3)?;
///
/// assert_eq!(arr.append(4), Err(ArrayError::CapacityExceeded { capacity: 3 }));
///
/// assert_eq!(arr.remove(0)?, 1);
/// assert_eq!(arr, [2, 3]);
/// assert_eq!(arr.len(), 2);
/// # Ok::<(), ArrayError>(())
/// ```
///
/// # Capacity
///
/// The whole buffer is allocated up front by [`new`](Self::new). Nothing
/// reallocates afterwards; insertions into a full array fail with
/// [`ArrayError::CapacityExceeded`].
///
/// # Slicing
///
/// `FixedArray` dereferences to a slice of its valid elements.
/// ```
/// use linarr::FixedArray;
///
/// fn sum(slice: &[i32]) -> i32 { slice.iter().sum() }
///
/// let arr = FixedArray::from([1, 2, 3]);
/// assert_eq!(sum(&arr), 6);
/// ```
pub struct FixedArray<T> {
    buf: RawBuf<T>,
}

impl<T: fmt::Debug> fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish()
    }
}

/// Shows size, capacity and the elements, e.g. `[Size: 2, Capacity: 4, Elements: 1, 2]`.
impl<T: fmt::Display> fmt::Display for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Size: {}, Capacity: {}, Elements: ", self.len(), self.capacity())?;
        self.buf.fmt_elements(f)?;
        write!(f, "]")
    }
}

impl<T: Clone> Clone for FixedArray<T> {
    fn clone(&self) -> Self { Self { buf: self.buf.clone() } }
}

impl<T: PartialEq> PartialEq for FixedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for FixedArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<[T]> for FixedArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for FixedArray<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for FixedArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Deref for FixedArray<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target { self.as_slice() }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T> {

    /// Creates a full array holding the elements of `arr`; its capacity is `N`.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// let arr = FixedArray::from([1, 2]);
    /// assert_eq!(arr.capacity(), 2);
    /// assert!(arr.is_full());
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self { buf: RawBuf::from(Vec::from(arr)) }
    }
}

impl<T> From<FixedArray<T>> for Vec<T> {
    fn from(mut arr: FixedArray<T>) -> Self { arr.buf.take_vec() }
}

impl<T> FixedArray<T> {

    /// Constructs a new, empty `FixedArray<T>` able to hold `capacity` elements.
    ///
    /// The full buffer is allocated immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `capacity` is negative (or
    /// otherwise does not fit in a `usize`).
    ///
    /// # Examples
    /// ```
    /// use linarr::{ArrayError, FixedArray};
    ///
    /// let arr = FixedArray::<i32>::new(3).unwrap();
    /// assert_eq!(arr.capacity(), 3);
    ///
    /// assert!(matches!(FixedArray::<i32>::new(-1), Err(ArrayError::InvalidArgument(_))));
    /// ```
    pub fn new<N: TryInto<usize>>(capacity: N) -> Result<Self, ArrayError> {
        let capacity = capacity.try_into()
            .map_err(|_| ArrayError::InvalidArgument("capacity must be a non-negative integer"))?;

        Ok(Self { buf: RawBuf::with_capacity(capacity) })
    }

    /// Returns the number of elements in the array.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::<i32>::new(3).unwrap();
    /// assert_eq!(arr.len(), 0);
    ///
    /// arr.append(5).unwrap();
    /// assert_eq!(arr.len(), 1);
    /// ```
    #[inline(always)]
    pub const fn len(&self) -> usize { self.buf.len() }

    /// Returns `true` if the array holds no elements.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// assert!(FixedArray::<i32>::new(3).unwrap().is_empty());
    /// assert!(!FixedArray::from([1]).is_empty());
    /// ```
    #[inline(always)]
    pub const fn is_empty(&self) -> bool { self.buf.len() == 0 }

    /// Returns the fixed number of elements the array can hold.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// let arr = FixedArray::<i32>::new(3).unwrap();
    /// assert_eq!(arr.capacity(), 3);
    /// ```
    #[inline(always)]
    pub fn capacity(&self) -> usize { self.buf.capacity() }

    /// Returns `true` if no more elements fit.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::<i32>::new(1).unwrap();
    /// assert!(!arr.is_full());
    /// arr.append(1).unwrap();
    /// assert!(arr.is_full());
    /// ```
    #[inline(always)]
    pub fn is_full(&self) -> bool { self.buf.is_full() }

    /// Returns the remaining capacity of the array.
    ///
    /// Simply, `capacity - len`.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::<i32>::new(3).unwrap();
    /// arr.append(1).unwrap();
    /// assert_eq!(arr.remaining_capacity(), 2);
    /// ```
    #[inline(always)]
    pub fn remaining_capacity(&self) -> usize { self.capacity() - self.len() }

    #[inline]
    fn check_capacity(&self) -> Result<(), ArrayError> {
        match self.buf.is_full() {
            true => Err(ArrayError::CapacityExceeded { capacity: self.capacity() }),
            false => Ok(()),
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        match index < self.len() {
            true => Ok(()),
            false => Err(ArrayError::IndexOutOfRange { index, len: self.len() }),
        }
    }

    /// Appends an element to the back of the array.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityExceeded`] if the array is full; the
    /// element is dropped and the array is unchanged.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::<i32>::new(1).unwrap();
    /// assert!(arr.append(1).is_ok());
    /// assert!(arr.append(2).is_err());
    /// assert_eq!(arr, [1]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    #[inline]
    pub fn append(&mut self, element: T) -> Result<(), ArrayError> {
        self.check_capacity()?;
        unsafe { self.buf.push_unchecked(element) }
        Ok(())
    }

    /// Inserts an element at position `index`, shifting all elements after it
    /// to the right. `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index > len`, then
    /// [`ArrayError::CapacityExceeded`] if the array is full. Both are checked
    /// before anything moves.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::<i32>::new(3).unwrap();
    /// arr.append(1).unwrap();
    /// arr.append(3).unwrap();
    /// arr.add_at(1, 2).unwrap();
    ///
    /// assert_eq!(arr, [1, 2, 3]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`len - index`) time.
    pub fn add_at(&mut self, index: usize, element: T) -> Result<(), ArrayError> {
        if index > self.len() {
            return Err(ArrayError::IndexOutOfRange { index, len: self.len() })
        }
        self.check_capacity()?;
        unsafe { self.buf.insert_unchecked(index, element) }
        Ok(())
    }

    /// Inserts an element at the front of the array. Same as `add_at(0, element)`.
    #[inline]
    pub fn prepend(&mut self, element: T) -> Result<(), ArrayError> {
        self.add_at(0, element)
    }

    /// Removes and returns the element at `index`, shifting all elements after
    /// it to the left.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2, 3]);
    /// assert_eq!(arr.remove(1), Ok(2));
    /// assert_eq!(arr, [1, 3]);
    /// assert!(arr.remove(2).is_err());
    /// ```
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
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2]);
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
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2]);
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
    /// use linarr::{ArrayError, FixedArray};
    ///
    /// let arr = FixedArray::from([10, 20]);
    /// assert_eq!(arr.get(1), Ok(&20));
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
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2]);
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
    /// use linarr::FixedArray;
    ///
    /// assert_eq!(FixedArray::from([4, 5]).get_first(), Ok(&4));
    /// assert!(FixedArray::<i32>::new(1).unwrap().get_first().is_err());
    /// ```
    #[inline]
    pub fn get_first(&self) -> Result<&T, ArrayError> { self.get(0) }

    /// Returns a reference to the last element. Fails on an empty array.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// assert_eq!(FixedArray::from([4, 5]).get_last(), Ok(&5));
    /// assert!(FixedArray::<i32>::new(1).unwrap().get_last().is_err());
    /// ```
    #[inline]
    pub fn get_last(&self) -> Result<&T, ArrayError> {
        self.get(self.len().wrapping_sub(1))
    }

    /// Drops every element. The capacity is unchanged.
    pub fn clear(&mut self) { self.buf.clear() }

    /// Sorts the elements in place.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([3, 1, 2]);
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
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::<i32>::new(4).unwrap();
    /// arr.append(1).unwrap();
    /// assert_eq!(arr.as_slice(), [1]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] { self.buf.as_slice() }

    /// Extracts a mutable slice of the valid elements. Elements can be
    /// changed in place but not added or removed.
    ///
    /// # Examples
    /// ```
    /// use linarr::FixedArray;
    ///
    /// let mut arr = FixedArray::from([1, 2]);
    /// arr.as_mut_slice()[0] = 9;
    /// assert_eq!(arr, [9, 2]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.buf.as_mut_slice() }
}


#[cfg(test)]
mod tests {
    use super::*;

    type A = FixedArray<u32>;

    fn filled(values: &[u32], capacity: usize) -> A {
        let mut arr = A::new(capacity).unwrap();
        values.iter().for_each(|v| arr.append(*v).unwrap());
        arr
    }

    #[test]
    fn new() {
        let arr = A::new(4).unwrap();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 4);
        assert!(arr.is_empty());

        assert!(matches!(A::new(-1), Err(ArrayError::InvalidArgument(_))));
        assert!(matches!(A::new(i64::MIN), Err(ArrayError::InvalidArgument(_))));
        assert!(A::new(0usize).is_ok());
    }

    #[test]
    fn append() {
        let mut arr = A::new(3).unwrap();
        arr.append(1).unwrap();
        arr.append(2).unwrap();
        arr.append(3).unwrap();

        assert_eq!(arr.len(), 3);
        assert_eq!(arr.append(4), Err(ArrayError::CapacityExceeded { capacity: 3 }));
        assert_eq!(arr.len(), 3);
        assert_eq!(arr, [1, 2, 3]);
    }

    #[test]
    fn append_zero_capacity() {
        let mut arr = A::new(0).unwrap();
        assert_eq!(arr.append(1), Err(ArrayError::CapacityExceeded { capacity: 0 }));
        assert_eq!(arr.len(), 0);
    }

    #[test]
    fn full_then_remove() {
        let mut arr = filled(&[1, 2, 3], 3);
        assert!(arr.append(4).is_err());
        assert_eq!(arr.remove(0), Ok(1));
        assert_eq!(arr.as_slice(), [2, 3]);
        assert_eq!(arr.len(), 2);
    }

    #[test]
    fn add_at() {
        let mut arr = filled(&[3, 5, 6], 5);
        arr.add_at(1, 4).unwrap();
        arr.add_at(4, 7).unwrap();

        assert_eq!(arr, [3, 4, 5, 6, 7]);
        assert_eq!(arr.add_at(0, 0), Err(ArrayError::CapacityExceeded { capacity: 5 }));
        assert_eq!(arr, [3, 4, 5, 6, 7]);
    }

    #[test]
    fn add_at_out_of_bounds() {
        let mut arr = filled(&[3, 4], 4);
        assert_eq!(arr.add_at(3, 0), Err(ArrayError::IndexOutOfRange { index: 3, len: 2 }));
        assert_eq!(arr, [3, 4]);

        // the index is validated before the capacity
        let mut arr = filled(&[3, 4], 2);
        assert_eq!(arr.add_at(5, 0), Err(ArrayError::IndexOutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn add_at_end_is_append() {
        let mut arr = filled(&[1, 2], 4);
        arr.add_at(arr.len(), 3).unwrap();
        assert_eq!(arr.get_last(), Ok(&3));
    }

    #[test]
    fn prepend() {
        let mut arr = filled(&[2, 3], 3);
        arr.prepend(1).unwrap();

        assert_eq!(arr.get(0), Ok(&1));
        assert_eq!(arr, [1, 2, 3]);
        assert!(arr.prepend(0).is_err());
    }

    #[test]
    fn remove() {
        let mut arr = filled(&[3, 4, 5], 4);
        assert_eq!(arr.remove(1), Ok(4));
        assert_eq!(arr, [3, 5]);
        assert_eq!(arr.remove(2), Err(ArrayError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(arr.len(), 2);
    }

    #[test]
    fn pop_front_back() {
        let mut arr = filled(&[1, 2, 3], 3);
        assert_eq!(arr.pop_front(), Ok(1));
        assert_eq!(arr.pop_back(), Ok(3));
        assert_eq!(arr, [2]);
        assert_eq!(arr.pop_back(), Ok(2));

        assert!(matches!(arr.pop_front(), Err(ArrayError::IndexOutOfRange { .. })));
        assert!(matches!(arr.pop_back(), Err(ArrayError::IndexOutOfRange { .. })));
    }

    #[test]
    fn get_set() {
        let mut arr = filled(&[1, 2, 3], 3);
        arr.set(1, 7).unwrap();

        assert_eq!(arr.get(1), Ok(&7));
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.set(3, 0), Err(ArrayError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn first_last() {
        let arr = filled(&[1, 2, 3], 4);
        assert_eq!(arr.get_first(), Ok(&1));
        assert_eq!(arr.get_last(), Ok(&3));

        let arr = A::new(2).unwrap();
        assert!(arr.get_first().is_err());
        assert!(arr.get_last().is_err());
    }

    #[test]
    fn remaining_capacity() {
        let mut arr = filled(&[1, 2], 4);
        assert_eq!(arr.remaining_capacity(), 2);
        arr.append(3).unwrap();
        assert_eq!(arr.remaining_capacity(), 1);
    }

    #[test]
    fn clear() {
        let mut arr = filled(&[1, 2], 4);
        arr.clear();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn sort() {
        let mut arr = filled(&[3, 1, 2], 3);
        arr.sort();
        assert_eq!(arr, [1, 2, 3]);
    }

    #[test]
    fn to_string() {
        let arr = filled(&[1, 2], 4);
        assert_eq!(arr.to_string(), "[Size: 2, Capacity: 4, Elements: 1, 2]");

        let arr = A::new(1).unwrap();
        assert_eq!(arr.to_string(), "[Size: 0, Capacity: 1, Elements: ]");
    }

    #[test]
    fn as_slice_is_stable() {
        let arr = filled(&[4, 5], 2);
        assert_eq!(arr.as_slice(), arr.as_slice());
        assert_eq!(arr.as_slice().len(), arr.len());
    }

    #[test]
    fn dropping_types() {
        let mut arr = FixedArray::<String>::new(4).unwrap();
        arr.append("aa".to_string()).unwrap();
        arr.append("bb".to_string()).unwrap();

        let popped = arr.pop_back();
        arr.append("ff".to_string()).unwrap();
        let removed = arr.remove(0);
        arr.prepend("dd".to_string()).unwrap();

        assert_eq!(popped, Ok("bb".to_string()));
        assert_eq!(removed, Ok("aa".to_string()));
        assert_eq!(arr, ["dd".to_string(), "ff".to_string()]);
    }

    #[test]
    fn clone() {
        let arr = FixedArray::from(["aa".to_string(), "bb".to_string()]);
        let cloned = arr.clone();
        assert_eq!(arr, cloned);
        assert_eq!(cloned.capacity(), 2);
    }

    #[test]
    fn into_vec() {
        let arr = filled(&[1, 2], 4);
        assert_eq!(Vec::from(arr), vec![1, 2]);
    }

    #[test]
    fn partial_eq() {
        let arr = FixedArray::from([1, 2]);
        let vec = vec![1, 2];
        assert_eq!(arr, [1, 2]);
        assert_eq!(arr, *[1, 2].as_slice());
        assert_eq!(arr, vec.as_slice());
        assert_eq!(arr, vec);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn len_tracks_appends(
                values in proptest::collection::vec(any::<u32>(), 0..64),
                capacity in 0usize..64,
            ) {
                let mut arr = A::new(capacity).unwrap();
                let mut accepted = 0;
                for v in &values {
                    match arr.append(*v) {
                        Ok(()) => accepted += 1,
                        Err(err) => prop_assert_eq!(err, ArrayError::CapacityExceeded { capacity }),
                    }
                }
                prop_assert_eq!(accepted, values.len().min(capacity));
                prop_assert_eq!(arr.len(), accepted);
                prop_assert_eq!(arr.as_slice(), &values[..accepted]);
            }

            #[test]
            fn set_get_round_trip(
                values in proptest::collection::vec(any::<u32>(), 1..32),
                index in any::<prop::sample::Index>(),
                x in any::<u32>(),
            ) {
                let mut arr = filled(&values, values.len());
                let i = index.index(values.len());
                arr.set(i, x).unwrap();
                prop_assert_eq!(arr.get(i), Ok(&x));
                prop_assert_eq!(arr.len(), values.len());
            }

            #[test]
            fn remove_shifts_successor_down(
                values in proptest::collection::vec(any::<u32>(), 1..32),
                index in any::<prop::sample::Index>(),
            ) {
                let mut arr = filled(&values, values.len());
                let i = index.index(values.len());
                prop_assert_eq!(arr.remove(i), Ok(values[i]));
                prop_assert_eq!(arr.len(), values.len() - 1);
                match values.get(i + 1) {
                    Some(next) => prop_assert_eq!(arr.get(i), Ok(next)),
                    None => prop_assert!(arr.get(i).is_err()),
                }
            }

            #[test]
            fn add_at_matches_vec_insert(
                values in proptest::collection::vec(any::<u32>(), 0..32),
                index in any::<prop::sample::Index>(),
                x in any::<u32>(),
            ) {
                let mut arr = filled(&values, values.len() + 1);
                let i = index.index(values.len() + 1);
                arr.add_at(i, x).unwrap();

                let mut expected = values.clone();
                expected.insert(i, x);
                prop_assert_eq!(arr.as_slice(), expected.as_slice());
            }
        }
    }
}
