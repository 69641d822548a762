mod allocation;

use std::{fmt, mem::MaybeUninit, ptr, slice};

use crate::errors::AllocErr;
pub(crate) use allocation::{block_layout, grown_capacity, infallible};

/// Owned block of slots where `[0, len)` is initialized.
///
/// Holds the shifting logic shared by both arrays. Callers validate indices
/// and room before reaching for the `_unchecked` methods.
pub(crate) struct RawBuf<T> {
    data: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        unsafe {
            self.data
                .get_unchecked_mut(0..self.len)
                .iter_mut()
                .for_each(|v| v.assume_init_drop());
        }
    }
}

impl<T: Clone> Clone for RawBuf<T> {
    fn clone(&self) -> Self {
        let mut buf = Self::with_capacity(self.capacity());

        // len trails the writes so a panicking clone drops only what was written
        self.as_slice().iter().for_each(|v| unsafe { buf.push_unchecked(v.clone()) });
        buf
    }
}

impl<T> From<Vec<T>> for RawBuf<T> {
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        let mut buf = Self::with_capacity(len);

        buf.data
            .iter_mut()
            .zip(vec)
            .for_each(|(b, v)| { b.write(v); });
        buf.len = len;
        buf
    }
}

impl<T> RawBuf<T> {

    #[inline]
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self { data: infallible(allocation::allocate(cap)), len: 0 }
    }

    #[inline(always)]
    pub(crate) const fn len(&self) -> usize { self.len }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize { self.data.len() }

    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool { self.len == self.data.len() }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // We are tracking initialized values via len, ensuring the slice is not UB
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr().cast(), self.len) }
    }

    /// # Safety
    ///
    /// `len < capacity`.
    #[inline(always)]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        unsafe { self.data.get_unchecked_mut(self.len).write(value); }
        self.len += 1;
    }

    /// Moves `[index, len)` up one slot, high end first, then writes `value`
    /// into the gap.
    ///
    /// # Safety
    ///
    /// `index <= len` and `len < capacity`.
    pub(crate) unsafe fn insert_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        debug_assert!(self.len < self.capacity());
        unsafe {
            let ptr = self.data.as_mut_ptr().add(index);
            ptr::copy(ptr, ptr.add(1), self.len - index);
            ptr::write(ptr, MaybeUninit::new(value));
        }
        self.len += 1;
    }

    /// Takes the element at `index` and moves `(index, len)` down one slot
    /// into the gap.
    ///
    /// # Safety
    ///
    /// `index < len`.
    pub(crate) unsafe fn remove_unchecked(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        self.len -= 1;
        unsafe {
            let removed = self.data.get_unchecked(index).assume_init_read();
            let ptr = self.data.as_mut_ptr().add(index);
            ptr::copy(ptr.add(1), ptr, self.len - index);
            removed
        }
    }

    pub(crate) fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        unsafe {
            self.data
                .get_unchecked_mut(0..len)
                .iter_mut()
                .for_each(|v| v.assume_init_drop());
        }
    }

    /// Moves the elements into a fresh block of `new_cap` slots. The old
    /// block is released without dropping anything it held.
    pub(crate) fn grow(&mut self, new_cap: usize) -> Result<(), AllocErr> {
        assert!(new_cap >= self.len);

        let mut data = allocation::allocate::<T>(new_cap)?;
        unsafe { ptr::copy_nonoverlapping(
            self.data.as_ptr(),
            data.as_mut_ptr(),
            self.len
        )}
        self.data = data;
        Ok(())
    }

    /// Moves the elements out into a `Vec`, leaving this buffer empty.
    pub(crate) fn take_vec(&mut self) -> Vec<T> {
        let len = self.len;
        self.len = 0;
        unsafe {
            self.data
                .get_unchecked(..len)
                .iter()
                .map(|v| v.assume_init_read())
                .collect()
        }
    }

    pub(crate) fn fmt_elements(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        for (i, v) in self.as_slice().iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};
    use super::*;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) { self.0.set(self.0.get() + 1); }
    }

    #[test]
    fn insert() {
        let mut buf = RawBuf::<u32>::with_capacity(4);
        unsafe {
            buf.insert_unchecked(0, 3);
            buf.insert_unchecked(1, 6);
            buf.insert_unchecked(1, 5);
            buf.insert_unchecked(0, 2);
        }

        assert_eq!(buf.as_slice(), [2, 3, 5, 6]);
        assert!(buf.is_full());
    }

    #[test]
    fn remove() {
        let mut buf = RawBuf::from(vec![1, 2, 3, 4]);

        assert_eq!(unsafe { buf.remove_unchecked(1) }, 2);
        assert_eq!(buf.as_slice(), [1, 3, 4]);
        assert_eq!(unsafe { buf.remove_unchecked(2) }, 4);
        assert_eq!(buf.as_slice(), [1, 3]);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn grow() {
        let mut buf = RawBuf::from(vec!["aa".to_string(), "bb".to_string()]);
        buf.grow(5).unwrap();

        assert_eq!(buf.capacity(), 5);
        assert_eq!(buf.as_slice(), ["aa".to_string(), "bb".to_string()]);
    }

    #[test]
    #[should_panic]
    fn grow_below_len() {
        let mut buf = RawBuf::from(vec![1, 2, 3]);
        let _ = buf.grow(2);
    }

    #[test]
    fn drops_only_initialized() {
        let count = Rc::new(Cell::new(0));
        let mut buf = RawBuf::with_capacity(8);
        for _ in 0..3 {
            unsafe { buf.push_unchecked(DropCounter(count.clone())); }
        }
        buf.grow(16).unwrap();
        assert_eq!(count.get(), 0);

        drop(unsafe { buf.remove_unchecked(0) });
        assert_eq!(count.get(), 1);

        drop(buf);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn clear() {
        let count = Rc::new(Cell::new(0));
        let mut buf = RawBuf::from(vec![DropCounter(count.clone()), DropCounter(count.clone())]);
        buf.clear();

        assert_eq!(count.get(), 2);
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn take_vec() {
        let mut buf = RawBuf::from(vec!["aa".to_string(), "bb".to_string()]);
        let vec = buf.take_vec();

        assert_eq!(vec, ["aa".to_string(), "bb".to_string()]);
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn clone() {
        let mut buf = RawBuf::with_capacity(4);
        unsafe { buf.push_unchecked("aa".to_string()); }
        let cloned = buf.clone();

        assert_eq!(cloned.as_slice(), buf.as_slice());
        assert_eq!(cloned.capacity(), 4);
    }

    #[test]
    fn zst() {
        let mut buf = RawBuf::<()>::with_capacity(2);
        unsafe {
            buf.push_unchecked(());
            buf.insert_unchecked(0, ());
        }
        buf.grow(4).unwrap();
        assert_eq!(buf.as_slice(), [(), ()]);
        assert_eq!(unsafe { buf.remove_unchecked(1) }, ());
        assert_eq!(buf.len(), 1);
    }
}
