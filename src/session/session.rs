use std::borrow::Cow;
use std::time::Duration;
use percent_encoding::percent_decode_str;
use crate::common::common::truncate_at_char_boundary;
use crate::session::structs::add_torrent_options::AddTorrentOptions;

/// Size assumed for torrents added without one (256 MiB).
pub const DEFAULT_TORRENT_SIZE: u64 = 256 * 1024 * 1024;

/// Lower bound for the tick interval.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(250);

/// A tick advances a downloading entry by `size / TICK_STEPS` bytes.
pub const TICK_STEPS: u64 = 100;

/// Highest progress an unfinished entry reports; `1.0` means complete.
pub const PROGRESS_BELOW_COMPLETE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Download rate reported while an entry is downloading (4 MiB/s).
pub const DOWNLOAD_RATE: u64 = 4 * 1024 * 1024;

/// Upload rate reported while an entry is seeding (512 KiB/s).
pub const UPLOAD_RATE: u64 = 512 * 1024;

pub const MAX_NAME_LENGTH: usize = 127;

pub const MAX_MAGNET_LENGTH: usize = 255;

/// How long shutdown waits for the tick worker before detaching it.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(3);

pub const FALLBACK_NAME: &str = "torrent";

/// Picks the display name of a new entry.
///
/// First non-empty of: the explicit name, the file name of `file_path`, the
/// `dn` parameter of the magnet URI, the magnet URI itself, `"torrent"`. The
/// result is clamped to [`MAX_NAME_LENGTH`] bytes.
pub fn derive_display_name(options: &AddTorrentOptions) -> String {
    let name = non_empty(options.display_name.as_deref())
        .map(Cow::Borrowed)
        .or_else(|| {
            options
                .file_path
                .as_deref()
                .and_then(|path| path.file_name())
                .map(|file_name| file_name.to_string_lossy())
                .filter(|file_name| !file_name.is_empty())
        })
        .or_else(|| magnet_display_name(&options.magnet_uri).map(Cow::Owned))
        .or_else(|| non_empty(Some(options.magnet_uri.as_str())).map(Cow::Borrowed))
        .unwrap_or(Cow::Borrowed(FALLBACK_NAME));
    truncate_at_char_boundary(&name, MAX_NAME_LENGTH).to_string()
}

/// Percent-decoded `dn` parameter of a magnet URI, `+` read as a space.
pub fn magnet_display_name(magnet_uri: &str) -> Option<String> {
    let (_, query) = magnet_uri.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "dn")
        .map(|(_, value)| percent_decode_str(&value.replace('+', " ")).decode_utf8_lossy().into_owned())
        .filter(|name| !name.is_empty())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
