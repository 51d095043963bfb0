//! # Publisher
//!
//! Emits one queue message per curated movie.
//!
//! Sends go through a bounded fan-out: at most `concurrency` sends are in
//! flight at once and they may complete in any order. The set of messages
//! sent does not depend on the fan-out width. The first failed send aborts
//! the run; sends still in flight are dropped and nothing is retried.

use crate::error::{PublishError, Result};
use crate::message::MovieMessage;
use crate::queue::MessageQueue;
use data_loader::{CuratedMovie, read_movies};
use futures::stream::{self, StreamExt};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Delivery delay applied to every message
pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

/// Longest delivery delay SQS accepts
pub const MAX_DELAY: Duration = Duration::from_secs(900);

/// Report progress after this many successful sends
pub const DEFAULT_PROGRESS_EVERY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublisherConfig {
    pub delay: Duration,
    /// Maximum number of sends in flight
    pub concurrency: usize,
    pub progress_every: usize,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            concurrency: 1,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

impl PublisherConfig {
    pub fn validate(&self) -> Result<()> {
        if self.delay > MAX_DELAY {
            return Err(PublishError::InvalidConfig(format!(
                "delay {:?} exceeds the {:?} maximum",
                self.delay, MAX_DELAY
            )));
        }
        if self.concurrency == 0 {
            return Err(PublishError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.progress_every == 0 {
            return Err(PublishError::InvalidConfig(
                "progress cadence must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Progress snapshot handed to the caller every `progress_every` sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub sent: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct PublishSummary {
    pub sent: usize,
    pub total: usize,
    pub elapsed: Duration,
}

/// Sends curated movies to a queue.
///
/// Owns the queue client for the lifetime of the run.
pub struct Publisher<Q> {
    queue: Q,
    config: PublisherConfig,
}

impl<Q: MessageQueue> Publisher<Q> {
    /// Create a publisher, rejecting an invalid configuration up front.
    pub fn new(queue: Q, config: PublisherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { queue, config })
    }

    /// Send the message for a single movie, returning the queue's message id.
    pub async fn publish_movie(&self, movie: &CuratedMovie) -> Result<String> {
        let body = MovieMessage::from(movie).to_body()?;
        let message_id = self
            .queue
            .send_message(body, self.config.delay)
            .await
            .map_err(|e| PublishError::Send {
                title_id: movie.title_id.clone(),
                reason: e.to_string(),
            })?;

        debug!("Sent {} as message {}", movie.title_id, message_id);
        Ok(message_id)
    }

    /// Send one message per movie.
    ///
    /// `on_progress` is called after every `progress_every`-th successful
    /// send. Returns on the first failure without reporting how many messages
    /// were delivered before it.
    pub async fn publish<F>(&self, movies: &[CuratedMovie], mut on_progress: F) -> Result<PublishSummary>
    where
        F: FnMut(Progress),
    {
        let start = Instant::now();
        let total = movies.len();
        info!(
            "Sending {} messages (concurrency: {}, delay: {:?})",
            total, self.config.concurrency, self.config.delay
        );

        let mut sends = stream::iter(movies)
            .map(|movie| self.publish_movie(movie))
            .buffer_unordered(self.config.concurrency);

        let mut sent = 0usize;
        while let Some(result) = sends.next().await {
            result?;
            sent += 1;
            if sent % self.config.progress_every == 0 {
                on_progress(Progress { sent, total });
            }
        }

        let summary = PublishSummary {
            sent,
            total,
            elapsed: start.elapsed(),
        };
        info!("Sent {} messages in {:?}", summary.sent, summary.elapsed);
        Ok(summary)
    }

    /// Load `<dir>/movies.csv` and send one message per row.
    ///
    /// A missing or malformed artifact fails before anything is sent.
    pub async fn publish_dir<F>(&self, dir: &Path, on_progress: F) -> Result<PublishSummary>
    where
        F: FnMut(Progress),
    {
        let movies = read_movies(dir)?;
        info!("Loaded {} movies from {}", movies.len(), dir.display());
        self.publish(&movies, on_progress).await
    }
}
