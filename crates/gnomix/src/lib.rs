//! Facade crate for the Gnomix website backend.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `gnomix` with the `server` feature.
//! - Call [`init`] to build every feature slice; register the result in the API state.

pub use gnomix_content as content;
pub use gnomix_domain as domain;
pub use gnomix_kernel as kernel;

use gnomix_content::ContentStore;
use gnomix_domain::config::ApiConfig;
use gnomix_domain::registry::InitializedSlice;
use std::sync::Arc;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use gnomix_content::router as content_router;
        pub use gnomix_kernel::server::router::system_router;
    }
}

/// Initialize all feature slices from configuration.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    init_with(config, None)
}

/// Initialize all feature slices, serving content from `content_store` when given.
///
/// An injected store replaces the configured seed, which is then not read at all.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init_with(
    config: &ApiConfig,
    content_store: Option<Arc<dyn ContentStore>>,
) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Content (stats counter and landing page collections)
    slices.push(match content_store {
        Some(store) => {
            tracing::info!("Using injected content store");
            content::with_store(store)
        },
        None => content::init(&config.content)?,
    });

    tracing::debug!(count = slices.len(), "Feature slices initialized");
    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnomix_content::{ContentSeed, MemoryStore};

    #[test]
    fn init_registers_content_slice() {
        let slices = init(&ApiConfig::default()).expect("init should succeed");
        assert_eq!(slices.len(), 1);
        assert!(slices[0].downcast_ref::<content::Content>().is_some());
    }

    #[test]
    fn configured_seed_is_read_without_injected_store() {
        let mut config = ApiConfig::default();
        config.content.seed = Some("/nonexistent/seed.json".into());

        assert!(init(&config).is_err());
    }

    #[test]
    fn injected_store_skips_the_configured_seed() {
        let mut config = ApiConfig::default();
        config.content.seed = Some("/nonexistent/seed.json".into());
        let store = MemoryStore::from_seed(ContentSeed::default()).unwrap();

        let slices = init_with(&config, Some(Arc::new(store))).expect("seed must not be read");
        let content = slices[0].downcast_ref::<content::Content>().unwrap();
        assert_eq!(content.store.stats().unwrap().downloads, 0);
    }
}
