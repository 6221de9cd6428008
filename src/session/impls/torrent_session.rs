use std::sync::Arc;
use std::thread;
use std::time::Duration;
use crossbeam::channel::{bounded, RecvTimeoutError};
use log::{debug, error, info, warn};
use crate::config::structs::session_config::SessionConfig;
use crate::session::enums::session_error::SessionError;
use crate::session::session::SHUTDOWN_TIMEOUT;
use crate::session::structs::session_registry::SessionRegistry;
use crate::session::structs::torrent_session::TorrentSession;

impl TorrentSession {
    /// Creates a registry and spawns the `session-tick` worker.
    pub fn start(config: &SessionConfig) -> Result<TorrentSession, SessionError> {
        let registry = Arc::new(SessionRegistry::new(config.default_size));
        let tick_interval = config.tick_interval_duration();
        let (stop_sender, stop_receiver) = bounded::<()>(1);
        let (exit_sender, exit_receiver) = bounded::<()>(1);

        let worker_registry = registry.clone();
        let worker = thread::Builder::new()
            .name(String::from("session-tick"))
            .spawn(move || {
                debug!("[SESSION] Tick worker running every {:?}", tick_interval);
                loop {
                    match stop_receiver.recv_timeout(tick_interval) {
                        Err(RecvTimeoutError::Timeout) => worker_registry.tick(),
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("[SESSION] Tick worker stopped");
                let _ = exit_sender.send(());
            })?;

        info!("[SESSION] Session started with {} ms tick interval", tick_interval.as_millis());
        Ok(TorrentSession {
            registry,
            tick_interval,
            stop_sender: Some(stop_sender),
            exit_receiver,
            worker: Some(worker),
        })
    }

    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Stops the worker and closes the registry.
    ///
    /// Waits at most [`SHUTDOWN_TIMEOUT`] for the worker to exit; a worker
    /// that does not answer in time is detached. Calling this again is a
    /// no-op.
    pub fn shutdown(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        info!("[SESSION] Shutting down session...");
        if let Some(stop_sender) = self.stop_sender.take() {
            let _ = stop_sender.send(());
        }
        match self.exit_receiver.recv_timeout(SHUTDOWN_TIMEOUT) {
            Err(RecvTimeoutError::Timeout) => {
                warn!("[SESSION] Tick worker did not stop within {:?}, detaching it", SHUTDOWN_TIMEOUT);
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                if worker.join().is_err() {
                    error!("[SESSION] Tick worker panicked");
                }
            }
        }
        self.registry.close();
        info!("[SESSION] Session shut down");
    }
}

impl Drop for TorrentSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
