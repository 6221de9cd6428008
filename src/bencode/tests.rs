#[cfg(test)]
mod bencode_tests {
    mod byte_cursor_tests {
        use crate::bencode::enums::bencode_error::BencodeError;
        use crate::bencode::structs::byte_cursor::ByteCursor;

        #[test]
        fn test_take_within_bounds() {
            let mut cursor = ByteCursor::new(b"abcd");
            assert_eq!(cursor.take(3), Ok(b"abc".as_slice()));
            assert_eq!(cursor.take(0), Ok(b"".as_slice()));
            assert_eq!(cursor.position(), 3);
        }

        #[test]
        fn test_take_past_end_is_truncated() {
            let mut cursor = ByteCursor::new(b"ab");
            assert_eq!(cursor.take(3), Err(BencodeError::TruncatedInput { offset: 0 }));
            assert_eq!(cursor.position(), 0);
        }

        #[test]
        fn test_cursor_beyond_buffer_reports_truncation() {
            let mut cursor = ByteCursor::at(b"ab", 5);
            assert_eq!(cursor.remaining(), 0);
            assert_eq!(cursor.take(0), Err(BencodeError::TruncatedInput { offset: 5 }));
            assert_eq!(cursor.take(1), Err(BencodeError::TruncatedInput { offset: 5 }));
            assert_eq!(cursor.peek(), Err(BencodeError::TruncatedInput { offset: 5 }));
            assert_eq!(cursor.position(), 5);
        }
    }

    mod read_length_tests {
        use crate::bencode::bencode::read_length;
        use crate::bencode::enums::bencode_error::BencodeError;
        use crate::bencode::structs::byte_cursor::ByteCursor;

        #[test]
        fn test_read_length_simple() {
            let mut cursor = ByteCursor::new(b"12:");
            assert_eq!(read_length(&mut cursor), Ok(12));
            assert_eq!(cursor.position(), 3);
        }

        #[test]
        fn test_read_length_accepts_leading_zeros() {
            let mut cursor = ByteCursor::new(b"007:abcdefg");
            assert_eq!(read_length(&mut cursor), Ok(7));
            assert_eq!(cursor.position(), 4);
        }

        #[test]
        fn test_read_length_without_digits() {
            let mut cursor = ByteCursor::new(b":abc");
            assert_eq!(read_length(&mut cursor), Err(BencodeError::MalformedLength { offset: 0 }));
            assert_eq!(cursor.position(), 0, "Cursor must not move on failure");
        }

        #[test]
        fn test_read_length_truncated_mid_token() {
            let mut cursor = ByteCursor::new(b"123");
            assert_eq!(read_length(&mut cursor), Err(BencodeError::TruncatedInput { offset: 3 }));
        }

        #[test]
        fn test_read_length_unexpected_byte() {
            let mut cursor = ByteCursor::new(b"12x:");
            assert_eq!(read_length(&mut cursor), Err(BencodeError::MalformedLength { offset: 2 }));
        }

        #[test]
        fn test_read_length_overflow() {
            let mut cursor = ByteCursor::new(b"99999999999999999999999999:");
            assert!(matches!(read_length(&mut cursor), Err(BencodeError::MalformedLength { .. })));
        }
    }

    mod read_byte_string_tests {
        use crate::bencode::bencode::read_byte_string;
        use crate::bencode::enums::bencode_error::BencodeError;
        use crate::bencode::structs::byte_cursor::ByteCursor;

        #[test]
        fn test_read_byte_string_borrows_payload() {
            let data = b"4:spamtail";
            let mut cursor = ByteCursor::new(data);
            let value = read_byte_string(&mut cursor).unwrap();
            assert_eq!(value.as_bytes(), b"spam");
            assert_eq!(value.offset(), 2);
            assert_eq!(value.len(), 4);
            assert_eq!(cursor.position(), 6);
        }

        #[test]
        fn test_read_byte_string_empty() {
            let mut cursor = ByteCursor::new(b"0:");
            let value = read_byte_string(&mut cursor).unwrap();
            assert!(value.is_empty());
            assert!(cursor.is_at_end());
        }

        #[test]
        fn test_read_byte_string_declared_length_exceeds_bound() {
            let mut cursor = ByteCursor::new(b"10:short");
            assert_eq!(read_byte_string(&mut cursor), Err(BencodeError::TruncatedInput { offset: 3 }));
            assert_eq!(cursor.position(), 0);
        }
    }

    mod read_integer_tests {
        use crate::bencode::bencode::read_integer;
        use crate::bencode::enums::bencode_error::BencodeError;
        use crate::bencode::structs::byte_cursor::ByteCursor;

        fn integer(data: &[u8]) -> Result<i64, BencodeError> {
            read_integer(&mut ByteCursor::new(data))
        }

        #[test]
        fn test_read_integer_values() {
            assert_eq!(integer(b"i42e"), Ok(42));
            assert_eq!(integer(b"i-17e"), Ok(-17));
            assert_eq!(integer(b"i0e"), Ok(0));
            assert_eq!(integer(b"i9223372036854775807e"), Ok(i64::MAX));
            assert_eq!(integer(b"i-9223372036854775808e"), Ok(i64::MIN));
        }

        #[test]
        fn test_read_integer_accepts_leading_zeros() {
            assert_eq!(integer(b"i007e"), Ok(7));
            assert_eq!(integer(b"i-0e"), Ok(0));
        }

        #[test]
        fn test_read_integer_bare_minus() {
            assert_eq!(integer(b"i-e"), Err(BencodeError::MalformedInteger { offset: 2 }));
        }

        #[test]
        fn test_read_integer_no_digits() {
            assert_eq!(integer(b"ie"), Err(BencodeError::MalformedInteger { offset: 1 }));
        }

        #[test]
        fn test_read_integer_missing_terminator() {
            assert_eq!(integer(b"i42"), Err(BencodeError::TruncatedInput { offset: 3 }));
            assert_eq!(integer(b"i42x"), Err(BencodeError::MalformedInteger { offset: 3 }));
        }

        #[test]
        fn test_read_integer_wrong_tag() {
            assert_eq!(integer(b"4:spam"), Err(BencodeError::MalformedInteger { offset: 0 }));
        }

        #[test]
        fn test_read_integer_overflow() {
            assert_eq!(integer(b"i9223372036854775808e"), Err(BencodeError::MalformedInteger { offset: 0 }));
        }

        #[test]
        fn test_read_integer_advances_past_terminator() {
            let mut cursor = ByteCursor::new(b"i5ei6e");
            assert_eq!(read_integer(&mut cursor), Ok(5));
            assert_eq!(cursor.position(), 3);
            assert_eq!(read_integer(&mut cursor), Ok(6));
            assert!(cursor.is_at_end());
        }
    }

    mod skip_value_tests {
        use crate::bencode::bencode::{skip_value, MAX_NESTING_DEPTH};
        use crate::bencode::enums::bencode_error::BencodeError;
        use crate::bencode::structs::byte_cursor::ByteCursor;

        fn skipped_to(data: &[u8]) -> Result<usize, BencodeError> {
            let mut cursor = ByteCursor::new(data);
            skip_value(&mut cursor)?;
            Ok(cursor.position())
        }

        #[test]
        fn test_skip_scalars() {
            assert_eq!(skipped_to(b"i42eXX"), Ok(4));
            assert_eq!(skipped_to(b"3:fooXX"), Ok(5));
        }

        #[test]
        fn test_skip_nested_containers() {
            let data = b"d4:listli1ei2el3:fooee5:innerd1:a1:beeXX";
            assert_eq!(skipped_to(data), Ok(data.len() - 2));
        }

        #[test]
        fn test_skip_empty_containers() {
            assert_eq!(skipped_to(b"le"), Ok(2));
            assert_eq!(skipped_to(b"de"), Ok(2));
        }

        #[test]
        fn test_skip_unknown_tag() {
            assert_eq!(
                skipped_to(b"x"),
                Err(BencodeError::MalformedStructure { offset: 0, reason: "unexpected value tag" })
            );
        }

        #[test]
        fn test_skip_dictionary_with_integer_key() {
            assert_eq!(
                skipped_to(b"di1ei2ee"),
                Err(BencodeError::MalformedStructure { offset: 1, reason: "dictionary key is not a byte string" })
            );
        }

        #[test]
        fn test_skip_unterminated_list() {
            assert_eq!(skipped_to(b"li1ei2e"), Err(BencodeError::TruncatedInput { offset: 7 }));
        }

        #[test]
        fn test_skip_rejects_excessive_nesting() {
            let mut data = vec![b'l'; MAX_NESTING_DEPTH + 1];
            data.extend(std::iter::repeat_n(b'e', MAX_NESTING_DEPTH + 1));
            assert!(matches!(skipped_to(&data), Err(BencodeError::MalformedStructure { reason: "nesting too deep", .. })));
        }

        #[test]
        fn test_skip_accepts_nesting_at_limit() {
            let mut data = vec![b'l'; MAX_NESTING_DEPTH];
            data.extend(std::iter::repeat_n(b'e', MAX_NESTING_DEPTH));
            assert_eq!(skipped_to(&data), Ok(data.len()));
        }

        #[test]
        fn test_skip_failure_leaves_cursor() {
            let mut cursor = ByteCursor::new(b"l4:spam");
            assert!(skip_value(&mut cursor).is_err());
            assert_eq!(cursor.position(), 0);
        }
    }

    mod find_key_tests {
        use crate::bencode::bencode::{find_key, read_byte_string, read_integer};
        use crate::bencode::enums::bencode_error::BencodeError;
        use crate::bencode::structs::byte_cursor::ByteCursor;

        #[test]
        fn test_find_key_match() {
            let data = b"d3:agei42e4:name3:fooe";
            let cursor = ByteCursor::at(data, 1);
            let mut value = find_key(&cursor, b"name").unwrap().unwrap();
            assert_eq!(read_byte_string(&mut value).unwrap().as_bytes(), b"foo");
            assert_eq!(cursor.position(), 1, "Input cursor is not moved");
        }

        #[test]
        fn test_find_key_unsorted_dictionary() {
            let data = b"d1:zi1e1:ai2ee";
            let cursor = ByteCursor::at(data, 1);
            let mut value = find_key(&cursor, b"a").unwrap().unwrap();
            assert_eq!(read_integer(&mut value), Ok(2));
        }

        #[test]
        fn test_find_key_not_found() {
            let data = b"d3:agei42ee";
            let cursor = ByteCursor::at(data, 1);
            assert_eq!(find_key(&cursor, b"name"), Ok(None));
        }

        #[test]
        fn test_find_key_exact_byte_match() {
            let data = b"d5:namesi1e4:namei2ee";
            let cursor = ByteCursor::at(data, 1);
            let mut value = find_key(&cursor, b"name").unwrap().unwrap();
            assert_eq!(read_integer(&mut value), Ok(2));
        }

        #[test]
        fn test_find_key_truncated_dictionary() {
            let data = b"d3:agei42e";
            let cursor = ByteCursor::at(data, 1);
            assert_eq!(find_key(&cursor, b"name"), Err(BencodeError::TruncatedInput { offset: 10 }));
        }
    }

    mod decode_value_tests {
        use crate::bencode::bencode::{decode_value, skip_value};
        use crate::bencode::enums::bencode_value::BencodeValue;
        use crate::bencode::structs::byte_cursor::ByteCursor;

        #[test]
        fn test_decode_dictionary() {
            let data = b"d4:name3:foo4:sizei10e5:filesl1:a1:bee";
            let mut cursor = ByteCursor::new(data);
            let value = decode_value(&mut cursor).unwrap();
            assert!(cursor.is_at_end());
            assert_eq!(value.get(b"size").and_then(BencodeValue::as_integer), Some(10));
            assert_eq!(value.get(b"name").and_then(|v| v.as_byte_str()).unwrap().as_bytes(), b"foo");
            assert_eq!(value.get(b"files").and_then(|v| v.as_list()).map(|l| l.len()), Some(2));
            assert!(value.get(b"missing").is_none());
        }

        #[test]
        fn test_decode_keeps_declared_order() {
            let data = b"d1:bi1e1:ai2ee";
            let value = decode_value(&mut ByteCursor::new(data)).unwrap();
            let keys: Vec<&[u8]> = value.as_dictionary().unwrap().iter().map(|(k, _)| k.as_bytes()).collect();
            assert_eq!(keys, vec![b"b".as_slice(), b"a".as_slice()]);
        }

        #[test]
        fn test_decode_stops_where_skip_stops() {
            let data = b"ld1:xli1ei-2eee4:spamei99e";
            let mut decoded = ByteCursor::new(data);
            let mut skipped = ByteCursor::new(data);
            decode_value(&mut decoded).unwrap();
            skip_value(&mut skipped).unwrap();
            assert_eq!(decoded.position(), skipped.position());
        }
    }
}
