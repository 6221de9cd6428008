use thiserror::Error;
use crate::bencode::enums::bencode_error::BencodeError;

/// Reasons a `.torrent` buffer could not be decoded.
///
/// Any of these aborts the decode; no partially filled torrent is returned.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("torrent data is empty")]
    EmptyInput,

    #[error(transparent)]
    Bencode(#[from] BencodeError),

    #[error("missing 'info' dictionary")]
    MissingInfoDictionary,

    #[error("'info' dictionary span is empty")]
    EmptyInfoDictionary,

    #[error("missing required field '{0}'")]
    MissingRequiredField(&'static str),

    #[error("info dictionary must contain exactly one of 'length' or 'files'")]
    InconsistentFileLayout,

    #[error("invalid value for '{field}': {value}")]
    InvalidValue { field: &'static str, value: i64 },

    #[error("'pieces' length {0} is not a multiple of 20")]
    InvalidPiecesLength(usize),

    #[error("'{field}' is {length} long, limit is {limit}")]
    FieldTooLarge { field: &'static str, length: usize, limit: usize },

    #[error("total size of all files overflows")]
    SizeOverflow,

    #[error("unable to read torrent file: {0}")]
    Io(#[from] std::io::Error),
}
