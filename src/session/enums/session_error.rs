use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("torrent {0} not found")]
    NotFound(u64),

    #[error("session is not running")]
    Unavailable,

    #[error("unable to start session worker: {0}")]
    Spawn(#[from] std::io::Error),
}
