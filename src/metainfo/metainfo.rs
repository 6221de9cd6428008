use std::ops::Range;
use std::path::Path;
use log::{debug, warn};
use crate::bencode::bencode::{next_list_item, read_byte_string, read_dict_key, read_integer, skip_value};
use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::structs::byte_cursor::ByteCursor;
use crate::metainfo::enums::capacity_kind::CapacityKind;
use crate::metainfo::enums::decode_error::DecodeError;
use crate::metainfo::enums::decode_warning::DecodeWarning;
use crate::metainfo::structs::announce_tier::AnnounceTier;
use crate::metainfo::structs::decode_limits::DecodeLimits;
use crate::metainfo::structs::info_hash::InfoHash;
use crate::metainfo::structs::torrent::Torrent;
use crate::metainfo::structs::torrent_file::TorrentFile;

#[derive(Default)]
struct RootFields {
    announce: Option<String>,
    announce_list: Vec<AnnounceTier>,
    info_span: Option<Range<usize>>,
    comment: Option<String>,
    created_by: Option<String>,
    creation_date: Option<i64>,
    encoding: Option<String>,
}

#[derive(Default)]
struct InfoFields {
    name: Option<String>,
    piece_length: Option<u32>,
    pieces: Option<Vec<u8>>,
    length: Option<u64>,
    files: Option<Vec<TorrentFile>>,
    private: bool,
}

/// Decodes a `.torrent` buffer using the default [`DecodeLimits`].
pub fn decode_torrent(bytes: &[u8]) -> Result<Torrent, DecodeError> {
    decode_torrent_with_limits(bytes, &DecodeLimits::default())
}

/// Decodes a `.torrent` buffer.
///
/// The buffer is only borrowed; the returned torrent owns copies of
/// everything it keeps, including the piece table.
pub fn decode_torrent_with_limits(bytes: &[u8], limits: &DecodeLimits) -> Result<Torrent, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    let mut warnings = Vec::new();

    let root = decode_root(bytes, limits, &mut warnings)?;
    let info_span = root.info_span.ok_or(DecodeError::MissingInfoDictionary)?;
    if info_span.is_empty() {
        return Err(DecodeError::EmptyInfoDictionary);
    }
    let info_hash = InfoHash::from_info_bytes(&bytes[info_span.clone()]);

    // Bound the second pass to the info span so it cannot wander past it.
    let mut cursor = ByteCursor::at(&bytes[..info_span.end], info_span.start + 1);
    let info = decode_info(&mut cursor, limits, &mut warnings)?;

    let name = info.name.ok_or(DecodeError::MissingRequiredField("name"))?;
    let piece_length = info.piece_length.ok_or(DecodeError::MissingRequiredField("piece length"))?;
    let pieces = info.pieces.ok_or(DecodeError::MissingRequiredField("pieces"))?;
    let piece_count = pieces.len() / 20;

    let (files, total_size, single_file) = match (info.length, info.files) {
        (Some(length), None) => {
            let file = TorrentFile { length, path: vec![name.clone()] };
            debug!("[METAINFO] Single-file torrent '{}' of {} bytes", name, length);
            (vec![file], length, true)
        }
        (None, Some(files)) => {
            let total_size = files
                .iter()
                .try_fold(0u64, |total, file| total.checked_add(file.length))
                .ok_or(DecodeError::SizeOverflow)?;
            debug!("[METAINFO] Multi-file torrent '{}' with {} files, {} bytes", name, files.len(), total_size);
            (files, total_size, false)
        }
        _ => return Err(DecodeError::InconsistentFileLayout),
    };

    if !size_matches_pieces(total_size, piece_count, piece_length) {
        push_warning(&mut warnings, DecodeWarning::SizeMismatch { total_size, piece_count, piece_length });
    }

    debug!("[METAINFO] Decoded '{}' ({}), {} pieces of {} bytes", name, info_hash, piece_count, piece_length);

    Ok(Torrent {
        name,
        info_hash,
        piece_length,
        pieces,
        piece_count,
        total_size,
        files,
        single_file,
        announce: root.announce,
        announce_list: root.announce_list,
        comment: root.comment,
        created_by: root.created_by,
        creation_date: root.creation_date,
        encoding: root.encoding,
        private: info.private,
        warnings,
    })
}

/// Reads a `.torrent` file from disk and decodes it.
pub fn load_torrent_file<P: AsRef<Path>>(path: P, limits: &DecodeLimits) -> Result<Torrent, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    debug!("[METAINFO] Read {} bytes from {}", bytes.len(), path.display());
    decode_torrent_with_limits(&bytes, limits)
}

fn decode_root(bytes: &[u8], limits: &DecodeLimits, warnings: &mut Vec<DecodeWarning>) -> Result<RootFields, DecodeError> {
    let mut cursor = ByteCursor::new(bytes);
    cursor.expect_byte(b'd', "root is not a dictionary")?;

    let mut root = RootFields::default();
    while let Some(key) = read_dict_key(&mut cursor)? {
        match key.as_bytes() {
            b"announce" => {
                let url = read_byte_string(&mut cursor)?;
                root.announce = accept_url(url.as_bytes(), limits, warnings);
            }
            b"announce-list" => {
                root.announce_list = decode_announce_list(&mut cursor, limits, warnings)?;
            }
            b"info" => {
                let start = cursor.position();
                if cursor.peek()? != b'd' {
                    return Err(BencodeError::MalformedStructure { offset: start, reason: "'info' is not a dictionary" }.into());
                }
                skip_value(&mut cursor)?;
                if root.info_span.is_some() {
                    push_warning(warnings, DecodeWarning::DuplicateInfoDictionary { offset: start });
                } else {
                    root.info_span = Some(start..cursor.position());
                }
            }
            b"comment" => root.comment = Some(read_string(&mut cursor)?),
            b"created by" => root.created_by = Some(read_string(&mut cursor)?),
            b"creation date" => root.creation_date = Some(read_integer(&mut cursor)?),
            b"encoding" => root.encoding = Some(read_string(&mut cursor)?),
            other => {
                debug!("[METAINFO] Skipping root key '{}'", String::from_utf8_lossy(other));
                skip_value(&mut cursor)?;
            }
        }
    }

    if !cursor.is_at_end() {
        push_warning(warnings, DecodeWarning::TrailingData { offset: cursor.position(), remaining: cursor.remaining() });
    }
    Ok(root)
}

fn decode_announce_list(
    cursor: &mut ByteCursor<'_>,
    limits: &DecodeLimits,
    warnings: &mut Vec<DecodeWarning>,
) -> Result<Vec<AnnounceTier>, DecodeError> {
    cursor.expect_byte(b'l', "'announce-list' is not a list")?;

    let mut tiers = Vec::new();
    let mut dropped_tiers = 0usize;
    let mut dropped_urls = 0usize;
    while next_list_item(cursor)? {
        if tiers.len() >= limits.max_announce_tiers {
            skip_value(cursor)?;
            dropped_tiers += 1;
            continue;
        }
        cursor.expect_byte(b'l', "announce tier is not a list")?;
        let mut tier = AnnounceTier::default();
        while next_list_item(cursor)? {
            let url = read_byte_string(cursor)?;
            let Some(url) = accept_url(url.as_bytes(), limits, warnings) else {
                continue;
            };
            if tier.urls.len() >= limits.max_trackers_per_tier {
                dropped_urls += 1;
                continue;
            }
            tier.urls.push(url);
        }
        if !tier.is_empty() {
            tiers.push(tier);
        }
    }

    if dropped_tiers > 0 {
        push_warning(warnings, DecodeWarning::CapacityExceeded {
            kind: CapacityKind::AnnounceTiers,
            limit: limits.max_announce_tiers,
            dropped: dropped_tiers,
        });
    }
    if dropped_urls > 0 {
        push_warning(warnings, DecodeWarning::CapacityExceeded {
            kind: CapacityKind::TrackersPerTier,
            limit: limits.max_trackers_per_tier,
            dropped: dropped_urls,
        });
    }
    Ok(tiers)
}

fn decode_info(
    cursor: &mut ByteCursor<'_>,
    limits: &DecodeLimits,
    warnings: &mut Vec<DecodeWarning>,
) -> Result<InfoFields, DecodeError> {
    let mut info = InfoFields::default();
    while let Some(key) = read_dict_key(cursor)? {
        match key.as_bytes() {
            b"name" => {
                let name = read_byte_string(cursor)?;
                if name.len() > limits.max_name_length {
                    return Err(DecodeError::FieldTooLarge { field: "name", length: name.len(), limit: limits.max_name_length });
                }
                info.name = Some(name.to_string_lossy().into_owned());
            }
            b"piece length" => {
                let value = read_integer(cursor)?;
                match u32::try_from(value) {
                    Ok(piece_length) if piece_length > 0 => info.piece_length = Some(piece_length),
                    _ => return Err(DecodeError::InvalidValue { field: "piece length", value }),
                }
            }
            b"pieces" => {
                let pieces = read_byte_string(cursor)?;
                if pieces.len() % 20 != 0 {
                    return Err(DecodeError::InvalidPiecesLength(pieces.len()));
                }
                if pieces.len() / 20 > limits.max_piece_count {
                    return Err(DecodeError::FieldTooLarge { field: "pieces", length: pieces.len() / 20, limit: limits.max_piece_count });
                }
                info.pieces = Some(pieces.as_bytes().to_vec());
            }
            b"length" => {
                info.length = Some(read_length_field(cursor, "length")?);
            }
            b"files" => {
                info.files = Some(decode_files(cursor, limits, warnings)?);
            }
            b"private" => {
                info.private = read_integer(cursor)? == 1;
            }
            other => {
                debug!("[METAINFO] Skipping info key '{}'", String::from_utf8_lossy(other));
                skip_value(cursor)?;
            }
        }
    }
    Ok(info)
}

fn decode_files(
    cursor: &mut ByteCursor<'_>,
    limits: &DecodeLimits,
    warnings: &mut Vec<DecodeWarning>,
) -> Result<Vec<TorrentFile>, DecodeError> {
    cursor.expect_byte(b'l', "'files' is not a list")?;

    let mut files = Vec::new();
    let mut dropped_files = 0usize;
    let mut dropped_components = 0usize;
    while next_list_item(cursor)? {
        if files.len() >= limits.max_files {
            skip_value(cursor)?;
            dropped_files += 1;
            continue;
        }
        cursor.expect_byte(b'd', "file entry is not a dictionary")?;

        let mut length = None;
        let mut path = None;
        while let Some(key) = read_dict_key(cursor)? {
            match key.as_bytes() {
                b"length" => length = Some(read_length_field(cursor, "files.length")?),
                b"path" => {
                    cursor.expect_byte(b'l', "file path is not a list")?;
                    let mut components = Vec::new();
                    while next_list_item(cursor)? {
                        if components.len() >= limits.max_path_components {
                            skip_value(cursor)?;
                            dropped_components += 1;
                            continue;
                        }
                        components.push(read_string(cursor)?);
                    }
                    path = Some(components);
                }
                _ => skip_value(cursor)?,
            }
        }

        let length = length.ok_or(DecodeError::MissingRequiredField("files.length"))?;
        let path = path.filter(|path| !path.is_empty()).ok_or(DecodeError::MissingRequiredField("files.path"))?;
        files.push(TorrentFile { length, path });
    }

    if dropped_files > 0 {
        push_warning(warnings, DecodeWarning::CapacityExceeded {
            kind: CapacityKind::Files,
            limit: limits.max_files,
            dropped: dropped_files,
        });
    }
    if dropped_components > 0 {
        push_warning(warnings, DecodeWarning::CapacityExceeded {
            kind: CapacityKind::PathComponents,
            limit: limits.max_path_components,
            dropped: dropped_components,
        });
    }
    Ok(files)
}

fn read_string(cursor: &mut ByteCursor<'_>) -> Result<String, BencodeError> {
    Ok(read_byte_string(cursor)?.to_string_lossy().into_owned())
}

fn read_length_field(cursor: &mut ByteCursor<'_>, field: &'static str) -> Result<u64, DecodeError> {
    let value = read_integer(cursor)?;
    u64::try_from(value).map_err(|_| DecodeError::InvalidValue { field, value })
}

fn accept_url(url: &[u8], limits: &DecodeLimits, warnings: &mut Vec<DecodeWarning>) -> Option<String> {
    if url.len() > limits.max_url_length {
        push_warning(warnings, DecodeWarning::UrlTooLong { length: url.len(), limit: limits.max_url_length });
        return None;
    }
    Some(String::from_utf8_lossy(url).into_owned())
}

fn size_matches_pieces(total_size: u64, piece_count: usize, piece_length: u32) -> bool {
    if piece_count == 0 {
        return total_size == 0;
    }
    let piece_length = u128::from(piece_length);
    let piece_count = piece_count as u128;
    let total_size = u128::from(total_size);
    total_size > (piece_count - 1) * piece_length && total_size <= piece_count * piece_length
}

fn push_warning(warnings: &mut Vec<DecodeWarning>, warning: DecodeWarning) {
    warn!("[METAINFO] {}", warning);
    warnings.push(warning);
}
