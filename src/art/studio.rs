//! Background painting worker and the in-memory image cache.
//!
//! Requests go to a single worker thread over a channel; finished images
//! come back on a second channel and are folded into the cache whenever the
//! game loop calls [`ArtStudio::poll`]. Gameplay never waits on the worker,
//! and dropping the studio closes the channel, which ends the worker.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use super::types::{ArtError, ArtSubject, ImageGenerator, ImagePayload};

/// Messages handled by the worker thread.
#[derive(Debug, Clone)]
pub enum StudioCommand {
    Paint { subject: ArtSubject, epoch: u64 },
    SetCredential(String),
}

/// A finished request.
#[derive(Debug, Clone)]
pub struct ArtResult {
    pub key: String,
    /// Credential epoch the request was sent under.
    pub epoch: u64,
    pub result: Result<ImagePayload, ArtError>,
}

/// Where a cache key stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtStatus {
    Ready,
    Painting,
    Missing,
}

#[derive(Debug, Default)]
pub struct ImageCache {
    images: HashMap<String, ImagePayload>,
}

impl ImageCache {
    pub fn get(&self, key: &str) -> Option<&ImagePayload> {
        self.images.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.images.contains_key(key)
    }

    pub fn insert(&mut self, key: String, image: ImagePayload) {
        self.images.insert(key, image);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

fn run_worker(
    mut generator: impl ImageGenerator,
    commands: Receiver<StudioCommand>,
    results: Sender<ArtResult>,
) {
    while let Ok(command) = commands.recv() {
        match command {
            StudioCommand::Paint { subject, epoch } => {
                tracing::debug!(key = %subject.key, epoch, "painting");
                let result = generator.generate(&subject.subject);
                if results
                    .send(ArtResult {
                        key: subject.key,
                        epoch,
                        result,
                    })
                    .is_err()
                {
                    break;
                }
            }
            StudioCommand::SetCredential(key) => generator.set_credential(key),
        }
    }
    tracing::debug!("art worker stopped");
}

pub struct ArtStudio {
    commands: Sender<StudioCommand>,
    results: Receiver<ArtResult>,
    cache: ImageCache,
    pending: HashSet<String>,
    needs_credential: bool,
    credential_epoch: u64,
    last_error: Option<ArtError>,
}

impl std::fmt::Debug for ArtStudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtStudio")
            .field("cached", &self.cache.len())
            .field("pending", &self.pending.len())
            .field("needs_credential", &self.needs_credential)
            .field("credential_epoch", &self.credential_epoch)
            .finish()
    }
}

impl ArtStudio {
    /// Starts the worker thread around `generator`.
    pub fn spawn(generator: impl ImageGenerator) -> std::io::Result<Self> {
        let (command_tx, command_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();

        thread::Builder::new()
            .name("art-studio".to_string())
            .spawn(move || run_worker(generator, command_rx, result_tx))?;

        Ok(Self {
            commands: command_tx,
            results: result_rx,
            cache: ImageCache::default(),
            pending: HashSet::new(),
            needs_credential: false,
            credential_epoch: 0,
            last_error: None,
        })
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    pub fn status(&self, key: &str) -> ArtStatus {
        if self.cache.contains(key) {
            ArtStatus::Ready
        } else if self.pending.contains(key) {
            ArtStatus::Painting
        } else {
            ArtStatus::Missing
        }
    }

    /// True after a request failed on the credential; cleared by a new key.
    pub fn needs_credential(&self) -> bool {
        self.needs_credential
    }

    /// Bumped by every accepted [`ArtStudio::set_credential`].
    pub fn credential_epoch(&self) -> u64 {
        self.credential_epoch
    }

    pub fn last_error(&self) -> Option<&ArtError> {
        self.last_error.as_ref()
    }

    /// Queues `subject` unless it is already cached or being painted.
    /// Failed keys can be requested again.
    pub fn request(&mut self, subject: ArtSubject) -> bool {
        if self.cache.contains(&subject.key) || self.pending.contains(&subject.key) {
            return false;
        }
        let key = subject.key.clone();
        let command = StudioCommand::Paint {
            subject,
            epoch: self.credential_epoch,
        };
        if self.commands.send(command).is_err() {
            tracing::warn!(%key, "art worker is gone; request dropped");
            return false;
        }
        self.pending.insert(key);
        true
    }

    /// Hands a new API key to the worker for subsequent requests.
    pub fn set_credential(&mut self, api_key: String) {
        if self
            .commands
            .send(StudioCommand::SetCredential(api_key))
            .is_ok()
        {
            self.needs_credential = false;
            self.credential_epoch += 1;
            self.last_error = None;
        }
    }

    fn absorb(&mut self, finished: ArtResult) {
        self.pending.remove(&finished.key);
        match finished.result {
            Ok(image) => {
                tracing::info!(key = %finished.key, bytes = image.data.len(), "art cached");
                self.cache.insert(finished.key, image);
            }
            Err(err) if finished.epoch != self.credential_epoch => {
                // Sent under an older key; the new one has not been tried yet
                tracing::debug!(key = %finished.key, error = %err, "stale art failure ignored");
            }
            Err(err) => {
                tracing::warn!(key = %finished.key, error = %err, "art generation failed");
                if err.needs_credential() {
                    self.needs_credential = true;
                }
                self.last_error = Some(err);
            }
        }
    }

    /// Folds every finished request into the cache without blocking.
    /// Returns how many were absorbed.
    pub fn poll(&mut self) -> usize {
        let mut absorbed = 0;
        loop {
            match self.results.try_recv() {
                Ok(finished) => {
                    self.absorb(finished);
                    absorbed += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        absorbed
    }

    /// Like [`ArtStudio::poll`] but waits up to `timeout` for the first result.
    pub fn poll_timeout(&mut self, timeout: Duration) -> usize {
        match self.results.recv_timeout(timeout) {
            Ok(finished) => {
                self.absorb(finished);
                1 + self.poll()
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => 0,
        }
    }
}
