//! Publisher crate for the curated movie catalog.
//!
//! A [`Publisher`] loads `movies.csv` (or takes rows already in memory) and
//! sends one [`MovieMessage`] per row through a [`MessageQueue`].

pub mod error;
pub mod message;
pub mod publisher;
pub mod queue;

pub use error::{PublishError, QueueError, Result};
pub use message::MovieMessage;
pub use publisher::{Progress, PublishSummary, Publisher, PublisherConfig};
pub use queue::{MessageQueue, SqsQueue};
