//! Error types for the publisher crate.

use data_loader::{DataLoadError, TitleId};
use thiserror::Error;

/// Errors that can occur while publishing the curated catalog.
///
/// Every variant aborts the publish run. Messages already delivered stay
/// delivered; nothing records which ones they were.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Invalid publisher configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load curated movies: {0}")]
    Load(#[from] DataLoadError),

    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The queue rejected a send, or the send never completed
    #[error("Failed to send message for {title_id}: {reason}")]
    Send { title_id: TitleId, reason: String },
}

pub type Result<T> = std::result::Result<T, PublishError>;

/// A queue backend failed to accept a message
#[derive(Error, Debug)]
#[error("{0}")]
pub struct QueueError(pub String);
