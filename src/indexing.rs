use crate::bytesearch::{ByteSearcher, Utf8Literal};
use std::fmt::Debug;

// A type which may be an Element.
// Elements are compared against pattern literals by their numeric value.
pub trait ElementType: Debug + Copy + Clone + Eq + Ord + Into<u32> {}

impl ElementType for char {}

impl ElementType for u8 {}

impl ElementType for u16 {}

// A helper type that holds a string and allows indexing into it.
// Positions are offsets in code units of the underlying storage.
pub trait InputIndexer: Debug + Copy + Clone {
    /// The char type, typically u8 or char.
    type Element: ElementType;

    /// \return the length of the input, in code units.
    fn len(&self) -> usize;

    /// \return whether the input is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// \return whether \p pos is a valid position between elements.
    fn is_boundary(&self, pos: usize) -> bool;

    /// \return the element starting at \p pos, or None if it would extend
    /// past \p end. Advance the position past it.
    fn next_right(&self, pos: &mut usize, end: usize) -> Option<Self::Element>;

    /// \return the position following the element at \p pos, or None if we
    /// are at \p end.
    #[inline(always)]
    fn next_right_pos(&self, mut pos: usize, end: usize) -> Option<usize> {
        self.next_right(&mut pos, end).map(|_| pos)
    }

    /// \return the position of the first element equal to \p c in
    /// `pos..end`, or None.
    fn find_element(&self, mut pos: usize, end: usize, c: u32) -> Option<usize> {
        loop {
            let start = pos;
            let e = self.next_right(&mut pos, end)?;
            if Into::<u32>::into(e) == c {
                return Some(start);
            }
        }
    }
}

/// UTF-8 text, matched one char at a time. Positions are byte offsets.
#[derive(Debug, Copy, Clone)]
pub struct Utf8Input<'a> {
    text: &'a str,
}

impl<'a> Utf8Input<'a> {
    #[inline(always)]
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl InputIndexer for Utf8Input<'_> {
    type Element = char;

    #[inline(always)]
    fn len(&self) -> usize {
        self.text.len()
    }

    #[inline(always)]
    fn is_boundary(&self, pos: usize) -> bool {
        self.text.is_char_boundary(pos)
    }

    #[inline(always)]
    fn next_right(&self, pos: &mut usize, end: usize) -> Option<char> {
        let c = self.text.get(*pos..end)?.chars().next()?;
        *pos += c.len_utf8();
        Some(c)
    }

    fn find_element(&self, pos: usize, end: usize, c: u32) -> Option<usize> {
        let c = char::from_u32(c)?;
        let haystack = self.text.as_bytes().get(pos..end)?;
        // A complete UTF-8 sequence can only be found at a char boundary.
        Utf8Literal::new(c)
            .find_in(haystack)
            .map(|offset| pos + offset)
    }
}

/// Bytes, matched one byte at a time.
#[derive(Debug, Copy, Clone)]
pub struct AsciiInput<'a> {
    bytes: &'a [u8],
}

impl<'a> AsciiInput<'a> {
    #[inline(always)]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl InputIndexer for AsciiInput<'_> {
    type Element = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    fn is_boundary(&self, pos: usize) -> bool {
        pos <= self.bytes.len()
    }

    #[inline(always)]
    fn next_right(&self, pos: &mut usize, end: usize) -> Option<u8> {
        if *pos >= end {
            return None;
        }
        let b = *self.bytes.get(*pos)?;
        *pos += 1;
        Some(b)
    }

    fn find_element(&self, pos: usize, end: usize, c: u32) -> Option<usize> {
        let b = u8::try_from(c).ok()?;
        let haystack = self.bytes.get(pos..end)?;
        b.find_in(haystack).map(|offset| pos + offset)
    }
}

/// UCS-2 code units, matched one unit at a time with no surrogate decoding.
#[cfg(feature = "utf16")]
#[derive(Debug, Copy, Clone)]
pub struct Ucs2Input<'a> {
    units: &'a [u16],
}

#[cfg(feature = "utf16")]
impl<'a> Ucs2Input<'a> {
    #[inline(always)]
    pub fn new(units: &'a [u16]) -> Self {
        Self { units }
    }
}

#[cfg(feature = "utf16")]
impl InputIndexer for Ucs2Input<'_> {
    type Element = u16;

    #[inline(always)]
    fn len(&self) -> usize {
        self.units.len()
    }

    #[inline(always)]
    fn is_boundary(&self, pos: usize) -> bool {
        pos <= self.units.len()
    }

    #[inline(always)]
    fn next_right(&self, pos: &mut usize, end: usize) -> Option<u16> {
        if *pos >= end {
            return None;
        }
        let u = *self.units.get(*pos)?;
        *pos += 1;
        Some(u)
    }
}
