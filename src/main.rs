use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use rawbit::common::common::setup_logging;
use rawbit::config::structs::configuration::Configuration;
use rawbit::metainfo::metainfo::load_torrent_file;
use rawbit::metainfo::structs::torrent::Torrent;
use rawbit::session::structs::add_torrent_options::AddTorrentOptions;
use rawbit::session::structs::torrent_session::TorrentSession;
use rawbit::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(102);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut torrents = Vec::new();
    for path in &args.torrents {
        match load_torrent_file(path, &config.metainfo) {
            Ok(torrent) => {
                log_torrent_summary(&torrent);
                torrents.push((path.clone(), torrent));
            }
            Err(error) => error!("[METAINFO] Unable to load {}: {}", path.display(), error)
        }
    }

    if args.once {
        return Ok(());
    }

    let mut session = TorrentSession::start(&config.session).map_err(std::io::Error::other)?;
    let registry = session.registry().clone();

    for (path, torrent) in &torrents {
        let options = AddTorrentOptions::from_torrent(torrent).with_file_path(path);
        if let Err(error) = registry.add_torrent(options) {
            error!("[SESSION] Unable to add {}: {}", path.display(), error);
        }
    }
    for magnet in &args.magnets {
        if let Err(error) = registry.add_torrent(AddTorrentOptions::from_magnet(magnet)) {
            error!("[SESSION] Unable to add {}: {}", magnet, error);
        }
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = Shutdown::new().map_err(|error| std::io::Error::other(format!("{error:?}")))?;

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            match config.log_console_interval {
                Some(console_interval) if console_interval > 0 => {
                    let stats_handler = tokio_shutdown.clone();
                    let registry_spawn_stats = registry.clone();
                    info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
                    tokio::spawn(async move {
                        let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                        loop {
                            tokio::select! {
                                _ = interval.tick() => {
                                    let stats = registry_spawn_stats.stats();
                                    info!(
                                        "[STATS] Torrents: {} - Active: {} - Download: {} B/s - Upload: {} B/s",
                                        stats.torrent_count,
                                        stats.active_count,
                                        stats.download_rate,
                                        stats.upload_rate
                                    );
                                }
                                _ = stats_handler.handle() => {
                                    info!("[BOOT] Shutting down thread for console updates...");
                                    return;
                                }
                            }
                        }
                    });
                }
                _ => info!("[BOOT] Console updates disabled")
            }

            tokio_shutdown.handle().await;
            info!("[BOOT] Shutdown requested...");
            Ok::<(), std::io::Error>(())
        })?;

    session.shutdown();
    match registry.snapshot().to_json() {
        Ok(json) => info!("[SESSION] Final snapshot: {json}"),
        Err(error) => warn!("[SESSION] Unable to serialize final snapshot: {error}")
    }
    info!("Server shutting down completed");
    Ok(())
}

fn log_torrent_summary(torrent: &Torrent)
{
    info!(
        "[METAINFO] {} [{}] - Files: {} - Size: {} - Pieces: {} x {} - Trackers: {}{}",
        torrent.name,
        torrent.info_hash,
        torrent.file_count(),
        torrent.total_size,
        torrent.piece_count,
        torrent.piece_length,
        torrent.trackers().len(),
        if torrent.private { " - Private" } else { "" }
    );
    if !torrent.warnings.is_empty() {
        warn!("[METAINFO] {} decoded with {} warnings", torrent.name, torrent.warnings.len());
    }
    info!("[METAINFO] {}", torrent.magnet_link());
}
