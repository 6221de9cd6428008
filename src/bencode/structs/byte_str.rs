/// A bencoded byte string, borrowed from the source buffer.
///
/// Holds the payload slice (without the `<len>:` prefix) together with the
/// offset of its first payload byte in the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteStr<'a> {
    pub(crate) bytes: &'a [u8],
    pub(crate) offset: usize,
}
