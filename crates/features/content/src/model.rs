//! Records served by the content API. Field names are camelCase on the wire.

use gnomix_derive::api_model;

/// Aggregate counters shown as animated figures on the landing page.
#[api_model]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Stats {
    pub downloads: u64,
    pub community_members: u64,
    pub github_stars: u64,
    pub contributors: u64,
}

/// A published release of the script.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Download {
    pub id: String,
    pub version: String,
    pub filename: String,
    /// Display size, e.g. `~2 MB`.
    pub size: String,
    pub release_date: String,
    pub download_url: String,
    pub sourceforge_url: String,
    pub github_url: String,
    /// Algorithm-prefixed digest, e.g. `sha256:...`.
    pub checksum: String,
    pub is_beta: bool,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon name understood by the front-end icon set.
    pub icon: String,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct SystemRequirement {
    pub id: String,
    pub category: String,
    pub requirement: String,
    pub recommended: String,
}

/// Gives the generic uniqueness check access to record ids.
pub(crate) trait Identified {
    fn id(&self) -> &str;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

identified!(Download, Faq, Feature, Testimonial, SystemRequirement);
