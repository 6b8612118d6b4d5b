//! Device catalog and dimension matching
//!
//! - [`Catalog`]: the validated, read-only list of known devices
//! - [`matching`]: exact width/height lookup against a catalog

pub mod catalog;
pub mod matching;

pub use catalog::Catalog;
pub use matching::{find_matches, match_devices};
