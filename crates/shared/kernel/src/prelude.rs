pub use crate::config::{ConfigError, load_config};
pub use gnomix_domain::config::ApiConfig;
pub use gnomix_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiState, ApiStateError, ErrorBody};
