//! # Content
//!
//! Feature slice holding everything the landing page displays: the stats counters,
//! release downloads, FAQs, features, testimonials and system requirements.
//!
//! * [`ContentStore`] is the capability set: seven reads and one mutation
//!   (`increment_downloads`).
//! * [`MemoryStore`] implements it with immutable collections and one atomic counter.
//! * [`init`] builds the slice from configuration; [`with_store`] injects any other
//!   implementation.
//! * With the `server` feature, [`router`] exposes the store over HTTP.

#[cfg(feature = "server")]
mod api;
mod error;
pub mod model;
mod seed;
mod store;

#[cfg(feature = "server")]
pub use crate::api::router;
pub use crate::error::{ContentError, ContentErrorExt};
pub use crate::seed::ContentSeed;
pub use crate::store::{ContentStore, MemoryStore};

use gnomix_domain::config::ContentConfig;
use gnomix_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;
use tracing::info;

/// Content feature state.
#[gnomix_derive::gnomix_slice]
pub struct Content {
    pub store: Arc<dyn ContentStore>,
}

/// Initialize the content feature from configuration.
///
/// Uses the seed file named by `config.seed`, or the built-in launch content.
///
/// # Errors
/// Returns an error if the seed file cannot be read, parsed or validated.
pub fn init(config: &ContentConfig) -> Result<InitializedSlice, ContentError> {
    let seed = match &config.seed {
        Some(path) => {
            info!(path = %path.display(), "Loading content seed");
            ContentSeed::from_path(path)?
        },
        None => ContentSeed::builtin(),
    };

    let store = MemoryStore::from_seed(seed)?;
    let stats = store.stats()?;
    info!(downloads = stats.downloads, "Content slice initialized");

    Ok(with_store(Arc::new(store)))
}

/// Wraps an existing store into a registrable slice.
#[must_use]
pub fn with_store(store: Arc<dyn ContentStore>) -> InitializedSlice {
    InitializedSlice::new(Content::new(ContentInner { store }))
}
