#![forbid(unsafe_code)]

//! Read-only character access for the wrap position scan.
//!
//! The selector only needs random access to scalar values inside a bounded
//! window, so the seam is deliberately small: a length and an indexed
//! lookup. `[char]` buffers index in O(1); rope storage resolves `char_at`
//! in O(log n).

use ropey::{Rope, RopeSlice};

/// A read-only, indexable sequence of scalar values.
pub trait CharText {
    /// Total length in Unicode scalar values.
    fn len_chars(&self) -> usize;

    /// The scalar value at `offset`.
    ///
    /// # Panics
    /// Panics if `offset >= self.len_chars()`.
    fn char_at(&self, offset: usize) -> char;
}

impl CharText for [char] {
    #[inline]
    fn len_chars(&self) -> usize {
        self.len()
    }

    #[inline]
    fn char_at(&self, offset: usize) -> char {
        self[offset]
    }
}

impl CharText for Vec<char> {
    #[inline]
    fn len_chars(&self) -> usize {
        self.len()
    }

    #[inline]
    fn char_at(&self, offset: usize) -> char {
        self[offset]
    }
}

impl CharText for Rope {
    #[inline]
    fn len_chars(&self) -> usize {
        self.len_chars()
    }

    #[inline]
    fn char_at(&self, offset: usize) -> char {
        self.char(offset)
    }
}

impl CharText for RopeSlice<'_> {
    #[inline]
    fn len_chars(&self) -> usize {
        self.len_chars()
    }

    #[inline]
    fn char_at(&self, offset: usize) -> char {
        self.char(offset)
    }
}
