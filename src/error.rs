use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    /// The window or graphics context could not be created. Nothing was drawn.
    #[error("failed to initialize the display")]
    DisplayInit(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("invalid viewer configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to read configuration file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("please enter a single character (number or letter), got {0} characters")]
    NotSingleCharacter(usize),
}
