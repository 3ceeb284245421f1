//! Persistent frame/audio cache.
//!
//! - `layout`: where things live under the cache root
//! - `key`: render parameters, cache key and validity marker
//! - `manager`: reuse-or-regenerate decisions

mod key;
mod layout;
mod manager;

pub use key::{CacheKey, CacheMarker, RenderParameters};
pub use layout::{CacheLayout, DEFAULT_DIR_NAME};
pub use manager::CacheManager;
