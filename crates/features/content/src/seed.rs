//! Seed data the store is built from: the built-in launch content or a JSON document.

use crate::error::{ContentError, ContentErrorExt};
use crate::model::{Download, Faq, Feature, Identified, Stats, SystemRequirement, Testimonial};
use fxhash::FxHashSet;
use gnomix_derive::api_model;
use std::fs;
use std::path::Path;

/// Everything the content store holds at startup.
///
/// As a JSON document every key is optional; a missing collection is empty and
/// missing stats are zero.
#[api_model]
#[derive(Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ContentSeed {
    pub stats: Stats,
    pub downloads: Vec<Download>,
    pub faqs: Vec<Faq>,
    pub features: Vec<Feature>,
    pub testimonials: Vec<Testimonial>,
    pub system_requirements: Vec<SystemRequirement>,
}

impl ContentSeed {
    /// Reads and validates a seed document.
    ///
    /// # Errors
    /// [`ContentError::Io`] if the file cannot be read, [`ContentError::Seed`] if it is not
    /// a seed document, [`ContentError::Validation`] if ids repeat within a collection.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).context(path.display().to_string())?;
        let seed: Self = serde_json::from_str(&raw).context(path.display().to_string())?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks that ids are unique within every collection.
    ///
    /// # Errors
    /// [`ContentError::Validation`] naming the collection and the first repeated id.
    pub fn validate(&self) -> Result<(), ContentError> {
        ensure_unique("downloads", &self.downloads)?;
        ensure_unique("faqs", &self.faqs)?;
        ensure_unique("features", &self.features)?;
        ensure_unique("testimonials", &self.testimonials)?;
        ensure_unique("systemRequirements", &self.system_requirements)
    }

    /// The content the site launched with.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            stats: Stats { downloads: 8547, community_members: 50, github_stars: 463, contributors: 2 },
            downloads: vec![Download {
                id: "1".to_owned(),
                version: "v1.0.0".to_owned(),
                filename: "gnomix.sh".to_owned(),
                size: "~2 MB".to_owned(),
                release_date: "November 5, 2025".to_owned(),
                download_url: "https://github.com/gnomixperson/gnomix_script/releases".to_owned(),
                sourceforge_url: "https://github.com/gnomixperson/gnomix_script/".to_owned(),
                github_url: "https://github.com/gnomixperson/gnomix_script/".to_owned(),
                checksum: "sha256:8f3d2c1b4a5e9f6c7d8e9a0b1c2d3e4f5a6b7c8d9e0a1b2c3d4e5f6a7b8c9d"
                    .to_owned(),
                is_beta: true,
            }],
            faqs: vec![
                faq(
                    "1",
                    "What is Gnomix?",
                    "Gnomix is an Ubuntu-based Linux distribution that provides a pure, stock GNOME desktop experience. It removes Canonical's modifications, custom themes, and the Snap ecosystem to give you vanilla GNOME exactly as upstream intended.",
                    "General",
                ),
                faq(
                    "2",
                    "Why choose Gnomix over Ubuntu?",
                    "If you prefer the stock GNOME experience without Ubuntu's Yaru theme, Snap packages, and other Canonical modifications, Gnomix is for you. It offers a cleaner, more upstream-aligned GNOME while maintaining Ubuntu's stability and package ecosystem.",
                    "General",
                ),
                faq(
                    "3",
                    "Is Gnomix stable for daily use?",
                    "Gnomix is currently in beta and is actively developed. While many users run it as their daily driver, we recommend backing up important data and being prepared for potential issues. Stability improves with each release.",
                    "Usage",
                ),
                faq(
                    "4",
                    "How do I install Gnomix?",
                    "Download the ISO, create a bootable USB drive using Balena Etcher or Ventoy, boot from the USB, and follow the graphical installer. The process is similar to installing Ubuntu.",
                    "Installation",
                ),
                faq(
                    "5",
                    "Can I still use Ubuntu packages and PPAs?",
                    "Yes! Gnomix is fully compatible with Ubuntu's APT repositories and PPAs. You can install any software that works on Ubuntu. Additionally, Flatpak is available for sandboxed application installation.",
                    "Usage",
                ),
                faq(
                    "6",
                    "How often are updates released?",
                    "We release updates regularly, typically following major GNOME releases and important security patches. Beta releases may be more frequent as we work toward a stable release.",
                    "Updates",
                ),
            ],
            features: vec![
                feature(
                    "1",
                    "Stock GNOME",
                    "Pure GNOME desktop environment, exactly as upstream intended. No modifications, no compromises.",
                    "Sparkles",
                ),
                feature(
                    "2",
                    "Snap-Free",
                    "Built on Ubuntu's solid foundation, minus the Snap ecosystem. No snap store, no telemetry.",
                    "Shield",
                ),
                feature(
                    "3",
                    "No Ubuntu Themes",
                    "Clean, vanilla GNOME aesthetics. Experience GNOME the way it was designed to look and feel.",
                    "Palette",
                ),
                feature(
                    "4",
                    "Active Development",
                    "Currently in beta and actively maintained. Regular updates bringing the latest GNOME improvements.",
                    "RefreshCw",
                ),
            ],
            testimonials: vec![
                testimonial(
                    "1",
                    "Alex Chen",
                    "Software Developer",
                    "Finally, a distro that gives me stock GNOME without having to build it myself. Gnomix is exactly what I've been looking for.",
                ),
                testimonial(
                    "2",
                    "Sarah Miller",
                    "UX Designer",
                    "As a designer, I appreciate the attention to detail in keeping GNOME pure. No unnecessary theme modifications.",
                ),
                testimonial(
                    "3",
                    "Marcus Johnson",
                    "System Administrator",
                    "Switched from Ubuntu after years of removing Snaps manually. Gnomix saves me hours of configuration time.",
                ),
            ],
            system_requirements: vec![
                requirement("1", "Processor", "2 GHz dual-core", "2 GHz quad-core or better"),
                requirement("2", "Memory", "4 GB RAM", "8 GB RAM or more"),
                requirement("3", "Storage", "25 GB", "50 GB or more"),
                requirement("4", "Display", "1024×768", "1920×1080 or higher"),
            ],
        }
    }
}

fn ensure_unique<T: Identified>(collection: &'static str, items: &[T]) -> Result<(), ContentError> {
    let mut seen = FxHashSet::default();
    match items.iter().map(Identified::id).find(|id| !seen.insert(*id)) {
        Some(id) => Err(ContentError::Validation {
            message: format!("duplicate id '{id}'").into(),
            context: Some(collection.into()),
        }),
        None => Ok(()),
    }
}

fn faq(id: &str, question: &str, answer: &str, category: &str) -> Faq {
    Faq {
        id: id.to_owned(),
        question: question.to_owned(),
        answer: answer.to_owned(),
        category: category.to_owned(),
    }
}

fn feature(id: &str, title: &str, description: &str, icon: &str) -> Feature {
    Feature {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        icon: icon.to_owned(),
    }
}

fn testimonial(id: &str, name: &str, role: &str, content: &str) -> Testimonial {
    Testimonial {
        id: id.to_owned(),
        name: name.to_owned(),
        role: role.to_owned(),
        content: content.to_owned(),
        avatar: None,
    }
}

fn requirement(id: &str, category: &str, requirement: &str, recommended: &str) -> SystemRequirement {
    SystemRequirement {
        id: id.to_owned(),
        category: category.to_owned(),
        requirement: requirement.to_owned(),
        recommended: recommended.to_owned(),
    }
}
