#![allow(dead_code)]
use std::sync::Arc;
use rawbit::bencode::enums::bencode_value::BencodeValue;
use rawbit::config::structs::configuration::Configuration;

pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config = Configuration::init();
    config.log_console_interval = None;
    config.session.default_size = 1000;
    config.session.tick_interval = 250;
    Arc::new(config)
}

/// Owned bencode tree used to build test documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bencode {
    Int(i64),
    Bytes(Vec<u8>),
    List(Vec<Bencode>),
    Dict(Vec<(Vec<u8>, Bencode)>),
}

impl Bencode {
    pub fn str(value: &str) -> Bencode {
        Bencode::Bytes(value.as_bytes().to_vec())
    }

    pub fn dict(entries: Vec<(&str, Bencode)>) -> Bencode {
        Bencode::Dict(entries.into_iter().map(|(key, value)| (key.as_bytes().to_vec(), value)).collect())
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            Bencode::Int(value) => out.extend_from_slice(format!("i{}e", value).as_bytes()),
            Bencode::Bytes(bytes) => {
                out.extend_from_slice(format!("{}:", bytes.len()).as_bytes());
                out.extend_from_slice(bytes);
            }
            Bencode::List(items) => {
                out.push(b'l');
                for item in items {
                    item.encode_into(out);
                }
                out.push(b'e');
            }
            Bencode::Dict(entries) => {
                out.push(b'd');
                for (key, value) in entries {
                    Bencode::Bytes(key.clone()).encode_into(out);
                    value.encode_into(out);
                }
                out.push(b'e');
            }
        }
    }

    /// Owned copy of a decoded borrowed value.
    pub fn from_value(value: &BencodeValue<'_>) -> Bencode {
        match value {
            BencodeValue::Integer(value) => Bencode::Int(*value),
            BencodeValue::ByteString(bytes) => Bencode::Bytes(bytes.as_bytes().to_vec()),
            BencodeValue::List(items) => Bencode::List(items.iter().map(Bencode::from_value).collect()),
            BencodeValue::Dictionary(entries) => Bencode::Dict(
                entries.iter().map(|(key, value)| (key.as_bytes().to_vec(), Bencode::from_value(value))).collect(),
            ),
        }
    }
}

#[derive(Debug, Clone)]
enum Layout {
    Single(u64),
    Multi(Vec<(Vec<String>, u64)>),
}

/// Builds well formed `.torrent` documents with a matching piece table.
#[derive(Debug, Clone)]
pub struct TorrentBuilder {
    name: String,
    piece_length: u32,
    layout: Layout,
    announce: Option<String>,
    announce_list: Vec<Vec<String>>,
    comment: Option<String>,
    private: bool,
}

impl TorrentBuilder {
    pub fn single(name: &str, length: u64) -> TorrentBuilder {
        TorrentBuilder::new(name, Layout::Single(length))
    }

    pub fn multi(name: &str, files: &[(&[&str], u64)]) -> TorrentBuilder {
        let files = files
            .iter()
            .map(|(path, length)| (path.iter().map(|component| component.to_string()).collect(), *length))
            .collect();
        TorrentBuilder::new(name, Layout::Multi(files))
    }

    fn new(name: &str, layout: Layout) -> TorrentBuilder {
        TorrentBuilder {
            name: name.to_string(),
            piece_length: 16384,
            layout,
            announce: None,
            announce_list: Vec::new(),
            comment: None,
            private: false,
        }
    }

    pub fn piece_length(mut self, piece_length: u32) -> TorrentBuilder {
        self.piece_length = piece_length;
        self
    }

    pub fn announce(mut self, url: &str) -> TorrentBuilder {
        self.announce = Some(url.to_string());
        self
    }

    pub fn announce_tier(mut self, urls: &[&str]) -> TorrentBuilder {
        self.announce_list.push(urls.iter().map(|url| url.to_string()).collect());
        self
    }

    pub fn comment(mut self, comment: &str) -> TorrentBuilder {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn private(mut self) -> TorrentBuilder {
        self.private = true;
        self
    }

    pub fn total_size(&self) -> u64 {
        match &self.layout {
            Layout::Single(length) => *length,
            Layout::Multi(files) => files.iter().map(|(_, length)| length).sum(),
        }
    }

    pub fn piece_count(&self) -> usize {
        self.total_size().div_ceil(u64::from(self.piece_length)) as usize
    }

    pub fn pieces(&self) -> Vec<u8> {
        (0..self.piece_count() * 20).map(|index| (index % 251) as u8).collect()
    }

    pub fn info(&self) -> Bencode {
        let mut entries = Vec::new();
        match &self.layout {
            Layout::Single(length) => entries.push(("length", Bencode::Int(*length as i64))),
            Layout::Multi(files) => {
                let files = files
                    .iter()
                    .map(|(path, length)| {
                        Bencode::dict(vec![
                            ("length", Bencode::Int(*length as i64)),
                            ("path", Bencode::List(path.iter().map(|component| Bencode::str(component)).collect())),
                        ])
                    })
                    .collect();
                entries.push(("files", Bencode::List(files)));
            }
        }
        entries.push(("name", Bencode::str(&self.name)));
        entries.push(("piece length", Bencode::Int(i64::from(self.piece_length))));
        entries.push(("pieces", Bencode::Bytes(self.pieces())));
        if self.private {
            entries.push(("private", Bencode::Int(1)));
        }
        Bencode::dict(entries)
    }

    pub fn info_bytes(&self) -> Vec<u8> {
        self.info().encode()
    }

    pub fn build(&self) -> Bencode {
        let mut entries = Vec::new();
        if let Some(announce) = &self.announce {
            entries.push(("announce", Bencode::str(announce)));
        }
        if !self.announce_list.is_empty() {
            let tiers = self
                .announce_list
                .iter()
                .map(|tier| Bencode::List(tier.iter().map(|url| Bencode::str(url)).collect()))
                .collect();
            entries.push(("announce-list", Bencode::List(tiers)));
        }
        if let Some(comment) = &self.comment {
            entries.push(("comment", Bencode::str(comment)));
        }
        entries.push(("info", self.info()));
        Bencode::dict(entries)
    }

    pub fn encode(&self) -> Vec<u8> {
        self.build().encode()
    }
}
