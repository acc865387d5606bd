//! PocketBase release resolution.
//!
//! - [`resolver`] - queries the release index for the latest version tag
//! - [`asset`] - builds the platform-specific release asset name and URL

pub mod asset;
pub mod resolver;

pub use asset::{build_asset, ReleaseAsset, SUPPORTED_VERSION};
pub use resolver::ReleaseClient;
