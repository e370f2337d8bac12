//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading plus the HTTP primitives
//! (shared state, error envelope, system routes) every feature slice builds on.
//!
//! ## Config loading
//! ```rust,no_run
//! use gnomix_kernel::config::load_config;
//! use gnomix_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(None::<&str>).unwrap_or_default();
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use gnomix_domain as domain;
