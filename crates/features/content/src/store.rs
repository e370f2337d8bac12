use crate::error::ContentError;
use crate::model::{Download, Faq, Feature, Stats, SystemRequirement, Testimonial};
use crate::seed::ContentSeed;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

/// Read access to the site content plus the one mutation it supports.
///
/// Every method returns a `Result` so that a store backed by something other than
/// memory can report faults; [`MemoryStore`] never fails in normal operation.
pub trait ContentStore: Debug + Send + Sync {
    /// Current counters.
    fn stats(&self) -> Result<Stats, ContentError>;

    /// Adds one to the download counter and returns the counters including this increment.
    /// Concurrent calls never lose an increment.
    fn increment_downloads(&self) -> Result<Stats, ContentError>;

    /// All releases, newest first.
    fn downloads(&self) -> Result<Vec<Download>, ContentError>;

    /// The first release, or `None` when there are none.
    fn latest_download(&self) -> Result<Option<Download>, ContentError>;

    fn faqs(&self) -> Result<Vec<Faq>, ContentError>;

    fn features(&self) -> Result<Vec<Feature>, ContentError>;

    fn testimonials(&self) -> Result<Vec<Testimonial>, ContentError>;

    fn system_requirements(&self) -> Result<Vec<SystemRequirement>, ContentError>;
}

/// In-memory store: immutable collections and one atomic download counter.
///
/// State lives for the life of the process and resets on restart.
#[derive(Debug)]
pub struct MemoryStore {
    downloads_count: AtomicU64,
    community_members: u64,
    github_stars: u64,
    contributors: u64,
    downloads: Vec<Download>,
    faqs: Vec<Faq>,
    features: Vec<Feature>,
    testimonials: Vec<Testimonial>,
    system_requirements: Vec<SystemRequirement>,
}

impl MemoryStore {
    /// Builds a store from a seed after checking its invariants.
    ///
    /// # Errors
    /// [`ContentError::Validation`] if ids repeat within a collection.
    pub fn from_seed(seed: ContentSeed) -> Result<Self, ContentError> {
        seed.validate()?;
        Ok(Self::from_valid_seed(seed))
    }

    fn from_valid_seed(seed: ContentSeed) -> Self {
        let ContentSeed { stats, downloads, faqs, features, testimonials, system_requirements } =
            seed;

        Self {
            downloads_count: AtomicU64::new(stats.downloads),
            community_members: stats.community_members,
            github_stars: stats.github_stars,
            contributors: stats.contributors,
            downloads,
            faqs,
            features,
            testimonials,
            system_requirements,
        }
    }

    const fn snapshot(&self, downloads: u64) -> Stats {
        Stats {
            downloads,
            community_members: self.community_members,
            github_stars: self.github_stars,
            contributors: self.contributors,
        }
    }
}

impl Default for MemoryStore {
    /// A store holding [`ContentSeed::builtin`].
    fn default() -> Self {
        Self::from_valid_seed(ContentSeed::builtin())
    }
}

impl ContentStore for MemoryStore {
    fn stats(&self) -> Result<Stats, ContentError> {
        Ok(self.snapshot(self.downloads_count.load(Ordering::Acquire)))
    }

    fn increment_downloads(&self) -> Result<Stats, ContentError> {
        let previous = self
            .downloads_count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_add(1))
            .map_err(|n| ContentError::Internal {
                message: format!("download counter cannot grow past {n}").into(),
                context: None,
            })?;

        Ok(self.snapshot(previous + 1))
    }

    fn downloads(&self) -> Result<Vec<Download>, ContentError> {
        Ok(self.downloads.clone())
    }

    fn latest_download(&self) -> Result<Option<Download>, ContentError> {
        Ok(self.downloads.first().cloned())
    }

    fn faqs(&self) -> Result<Vec<Faq>, ContentError> {
        Ok(self.faqs.clone())
    }

    fn features(&self) -> Result<Vec<Feature>, ContentError> {
        Ok(self.features.clone())
    }

    fn testimonials(&self) -> Result<Vec<Testimonial>, ContentError> {
        Ok(self.testimonials.clone())
    }

    fn system_requirements(&self) -> Result<Vec<SystemRequirement>, ContentError> {
        Ok(self.system_requirements.clone())
    }
}
