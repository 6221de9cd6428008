use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file to load.
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,
    /// Create the configuration file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Decode the given .torrent files, print a summary and exit.
    #[arg(long)]
    pub once: bool,
    /// Magnet URI to add to the session, may be repeated.
    #[arg(long = "magnet", value_name = "URI")]
    pub magnets: Vec<String>,
    /// .torrent files to decode and add to the session.
    pub torrents: Vec<PathBuf>,
}
