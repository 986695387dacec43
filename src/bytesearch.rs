extern crate memchr;

/// Facilities for searching bytes.
pub trait ByteSearcher {
    /// Search for ourselves in a slice of bytes.
    /// The length of the slice is unspecified and may be 0.
    /// \return the next index of ourselves in the slice, or None.
    fn find_in(&self, rhs: &[u8]) -> Option<usize>;
}

impl ByteSearcher for u8 {
    #[inline(always)]
    fn find_in(&self, rhs: &[u8]) -> Option<usize> {
        memchr::memchr(*self, rhs)
    }
}

/// The UTF-8 encoding of a single char, searchable as a byte sequence.
#[derive(Debug, Copy, Clone)]
pub struct Utf8Literal {
    buf: [u8; 4],
    len: usize,
}

impl Utf8Literal {
    pub fn new(c: char) -> Self {
        let mut buf = [0; 4];
        let len = c.encode_utf8(&mut buf).len();
        Utf8Literal { buf, len }
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl ByteSearcher for Utf8Literal {
    #[inline(always)]
    fn find_in(&self, rhs: &[u8]) -> Option<usize> {
        match self.as_bytes() {
            [b] => memchr::memchr(*b, rhs),
            bytes => memchr::memmem::find(rhs, bytes),
        }
    }
}
