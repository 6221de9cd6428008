use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::byte_cursor::ByteCursor;
use crate::bencode::structs::byte_str::ByteStr;

/// Maximum list/dictionary nesting accepted by [`skip_value`] and [`decode_value`].
pub const MAX_NESTING_DEPTH: usize = 512;

/// Reads a non-negative decimal length terminated by `:`.
///
/// Leading zeros are accepted (`007:` reads as 7). On success the cursor is
/// positioned just after the colon; on failure it is left untouched.
pub fn read_length(cursor: &mut ByteCursor<'_>) -> Result<usize, BencodeError> {
    let mut c = *cursor;
    let start = c.position();
    let mut length: usize = 0;
    let mut digits = 0usize;
    loop {
        let byte = c.peek()?;
        match byte {
            b'0'..=b'9' => {
                length = length
                    .checked_mul(10)
                    .and_then(|length| length.checked_add(usize::from(byte - b'0')))
                    .ok_or(BencodeError::MalformedLength { offset: start })?;
                digits += 1;
                c.advance_by(1)?;
            }
            b':' if digits > 0 => {
                c.advance_by(1)?;
                break;
            }
            _ => return Err(BencodeError::MalformedLength { offset: c.position() }),
        }
    }
    *cursor = c;
    Ok(length)
}

/// Reads `<len>:<bytes>` and returns a borrowed view of the payload.
///
/// Fails with `TruncatedInput` if fewer than `len` bytes remain.
pub fn read_byte_string<'a>(cursor: &mut ByteCursor<'a>) -> Result<ByteStr<'a>, BencodeError> {
    let mut c = *cursor;
    let length = read_length(&mut c)?;
    let offset = c.position();
    let bytes = c.take(length)?;
    *cursor = c;
    Ok(ByteStr::new(bytes, offset))
}

/// Reads `i<digits>e` with an optional single leading `-`.
///
/// A bare `-`, a missing digit, an unexpected byte or a value outside the
/// `i64` range is `MalformedInteger`; hitting the end bound before the
/// terminating `e` is `TruncatedInput`.
pub fn read_integer(cursor: &mut ByteCursor<'_>) -> Result<i64, BencodeError> {
    let mut c = *cursor;
    let start = c.position();
    if c.peek()? != b'i' {
        return Err(BencodeError::MalformedInteger { offset: start });
    }
    c.advance_by(1)?;

    let negative = c.peek()? == b'-';
    if negative {
        c.advance_by(1)?;
    }

    let mut value: i64 = 0;
    let mut digits = 0usize;
    loop {
        let byte = c.peek()?;
        match byte {
            b'0'..=b'9' => {
                let digit = i64::from(byte - b'0');
                value = value
                    .checked_mul(10)
                    .and_then(|value| if negative { value.checked_sub(digit) } else { value.checked_add(digit) })
                    .ok_or(BencodeError::MalformedInteger { offset: start })?;
                digits += 1;
                c.advance_by(1)?;
            }
            b'e' if digits > 0 => {
                c.advance_by(1)?;
                break;
            }
            _ => return Err(BencodeError::MalformedInteger { offset: c.position() }),
        }
    }
    *cursor = c;
    Ok(value)
}

/// Advances the cursor past one complete value without materializing it.
pub fn skip_value(cursor: &mut ByteCursor<'_>) -> Result<(), BencodeError> {
    let mut c = *cursor;
    skip_nested(&mut c, 0)?;
    *cursor = c;
    Ok(())
}

fn skip_nested(c: &mut ByteCursor<'_>, depth: usize) -> Result<(), BencodeError> {
    let start = c.position();
    match c.peek()? {
        b'i' => {
            read_integer(c)?;
        }
        b'0'..=b'9' => {
            read_byte_string(c)?;
        }
        tag @ (b'l' | b'd') => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(BencodeError::MalformedStructure { offset: start, reason: "nesting too deep" });
            }
            c.advance_by(1)?;
            loop {
                if c.peek()? == b'e' {
                    c.advance_by(1)?;
                    break;
                }
                if tag == b'd' {
                    read_key(c)?;
                }
                skip_nested(c, depth + 1)?;
            }
        }
        _ => return Err(BencodeError::MalformedStructure { offset: start, reason: "unexpected value tag" }),
    }
    Ok(())
}

/// Scans dictionary entries for `key`.
///
/// The cursor must be positioned on the first key, i.e. just past the `d`.
/// Returns a cursor on the matching value, or `None` once the closing `e` is
/// reached. The scan is linear in declared order and compares keys byte for
/// byte; the input cursor is not moved.
pub fn find_key<'a>(cursor: &ByteCursor<'a>, key: &[u8]) -> Result<Option<ByteCursor<'a>>, BencodeError> {
    let mut c = *cursor;
    while let Some(current) = read_dict_key(&mut c)? {
        if current.as_bytes() == key {
            return Ok(Some(c));
        }
        skip_value(&mut c)?;
    }
    Ok(None)
}

/// Reads the next dictionary key, or consumes the closing `e` and returns `None`.
pub fn read_dict_key<'a>(cursor: &mut ByteCursor<'a>) -> Result<Option<ByteStr<'a>>, BencodeError> {
    if cursor.peek()? == b'e' {
        cursor.advance_by(1)?;
        return Ok(None);
    }
    read_key(cursor).map(Some)
}

/// Returns `true` if another list item follows, or consumes the closing `e`
/// and returns `false`.
pub fn next_list_item(cursor: &mut ByteCursor<'_>) -> Result<bool, BencodeError> {
    if cursor.peek()? == b'e' {
        cursor.advance_by(1)?;
        return Ok(false);
    }
    Ok(true)
}

fn read_key<'a>(c: &mut ByteCursor<'a>) -> Result<ByteStr<'a>, BencodeError> {
    if !c.peek()?.is_ascii_digit() {
        return Err(BencodeError::MalformedStructure {
            offset: c.position(),
            reason: "dictionary key is not a byte string",
        });
    }
    read_byte_string(c)
}

/// Decodes one complete value, borrowing every byte string from the buffer.
///
/// Stops at exactly the position [`skip_value`] would reach for the same input.
pub fn decode_value<'a>(cursor: &mut ByteCursor<'a>) -> Result<BencodeValue<'a>, BencodeError> {
    let mut c = *cursor;
    let value = decode_nested(&mut c, 0)?;
    *cursor = c;
    Ok(value)
}

fn decode_nested<'a>(c: &mut ByteCursor<'a>, depth: usize) -> Result<BencodeValue<'a>, BencodeError> {
    let start = c.position();
    match c.peek()? {
        b'i' => Ok(BencodeValue::Integer(read_integer(c)?)),
        b'0'..=b'9' => Ok(BencodeValue::ByteString(read_byte_string(c)?)),
        b'l' | b'd' if depth >= MAX_NESTING_DEPTH => {
            Err(BencodeError::MalformedStructure { offset: start, reason: "nesting too deep" })
        }
        b'l' => {
            c.advance_by(1)?;
            let mut items = Vec::new();
            while next_list_item(c)? {
                items.push(decode_nested(c, depth + 1)?);
            }
            Ok(BencodeValue::List(items))
        }
        b'd' => {
            c.advance_by(1)?;
            let mut entries = Vec::new();
            while let Some(key) = read_dict_key(c)? {
                let value = decode_nested(c, depth + 1)?;
                entries.push((key, value));
            }
            Ok(BencodeValue::Dictionary(entries))
        }
        _ => Err(BencodeError::MalformedStructure { offset: start, reason: "unexpected value tag" }),
    }
}
