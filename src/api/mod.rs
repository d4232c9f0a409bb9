pub mod error;
pub mod models;
pub mod navidrome;

pub use error::{ApiError, Result};
pub use models::*;
pub use navidrome::{list_cache_prefix, NavidromeClient};
