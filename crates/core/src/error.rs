use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BstartError>;

#[derive(Debug, Error)]
pub enum BstartError {
    /// A browser name was requested that is not present in the registry.
    #[error("browser not registered: {name}")]
    UnknownBrowser { name: String },

    #[error("failed to start browser: {path}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("start page creation failed")]
    StartPage(#[source] std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
