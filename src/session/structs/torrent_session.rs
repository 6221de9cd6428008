use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use crossbeam::channel::{Receiver, Sender};
use crate::session::structs::session_registry::SessionRegistry;

/// A [`SessionRegistry`] driven by a `session-tick` worker thread.
///
/// Dropping the session shuts it down.
#[derive(Debug)]
pub struct TorrentSession {
    pub(crate) registry: Arc<SessionRegistry>,
    pub(crate) tick_interval: Duration,
    pub(crate) stop_sender: Option<Sender<()>>,
    pub(crate) exit_receiver: Receiver<()>,
    pub(crate) worker: Option<JoinHandle<()>>,
}
