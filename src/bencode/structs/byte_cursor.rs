/// A read position within an immutable byte buffer.
///
/// The end bound is the length of the borrowed slice, so a cursor can never
/// outlive the buffer it reads from. Cursors are `Copy`: the read functions in
/// [`bencode`](crate::bencode::bencode) work on a copy and only commit the new
/// position on success, leaving the caller's cursor untouched on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCursor<'a> {
    pub(crate) buffer: &'a [u8],
    pub(crate) position: usize,
}
