use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::review::{Reply, Review};

/// JSON-file-backed review collection.
///
/// The backing file holds the entire collection as one pretty-printed UTF-8
/// array; the file format is the compatibility contract with the pipeline
/// test clients. The collection is held in memory with an id -> position
/// index, and every successful mutation rewrites the file in full. Callers
/// share the store behind a single `tokio::sync::Mutex`, which serializes
/// the whole load-mutate-flush cycle (there is no file locking below that).
///
/// No atomic-rename protection: a crash mid-write can corrupt the file.
/// Acceptable for a test fixture.
pub struct ReviewStore {
    path: PathBuf,
    reviews: Vec<Review>,
    // id -> first position; first match wins when ids collide
    index: HashMap<String, usize>,
    loaded_from_disk: bool,
}

impl ReviewStore {
    /// Open the store at `path`. An existing file is parsed as the review
    /// collection; a missing file starts the store empty (and eligible for
    /// seeding). An existing but unparsable file is a hard error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let (reviews, loaded_from_disk) = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let reviews: Vec<Review> = serde_json::from_str(&raw)?;
            info!("[STORE] Loaded {} reviews from {}", reviews.len(), path.display());
            (reviews, true)
        } else {
            info!("[STORE] No data file at {}, starting empty", path.display());
            (Vec::new(), false)
        };
        let index = build_index(&reviews);
        Ok(Self {
            path,
            reviews,
            index,
            loaded_from_disk,
        })
    }

    /// Install seed data if the backing file did not exist when the store
    /// was opened. Called once at startup, before any request is served.
    pub fn seed_if_new(&mut self, seed: Vec<Review>) -> Result<(), StoreError> {
        if self.loaded_from_disk {
            return Ok(());
        }
        info!("[STORE] Seeding {} initial reviews", seed.len());
        self.reviews = seed;
        self.index = build_index(&self.reviews);
        self.flush()
    }

    /// Full collection in insertion order.
    pub fn list(&self) -> Vec<Review> {
        self.reviews.clone()
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Append a review at the end of the collection and flush.
    pub fn append(&mut self, review: Review) -> Result<(), StoreError> {
        debug!("[STORE] Appending review {}", review.id);
        self.index
            .entry(review.id.clone())
            .or_insert(self.reviews.len());
        self.reviews.push(review);
        self.flush()
    }

    /// Attach `reply` to the review with the given id, overwriting any
    /// existing reply (last write wins), flush, and return the updated
    /// review. If the id matches several reviews, the first in stored order
    /// is updated. Unknown id: `StoreError::NotFound`, and no write occurs.
    pub fn attach_reply(&mut self, id: &str, reply: Reply) -> Result<Review, StoreError> {
        let pos = *self.index.get(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })?;
        self.reviews[pos].reply = Some(reply);
        self.flush()?;
        debug!("[STORE] Reply attached to review {}", id);
        Ok(self.reviews[pos].clone())
    }

    /// Serialize the entire collection and overwrite the backing file.
    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.reviews)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn build_index(reviews: &[Review]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(reviews.len());
    for (pos, review) in reviews.iter().enumerate() {
        index.entry(review.id.clone()).or_insert(pos);
    }
    index
}
