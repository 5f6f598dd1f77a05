//! Content Layer
//!
//! The static guide document and the search engine over it.

mod store;
mod search;

pub use store::{ContentStore, GuideInfo, CONTENT_FILE_NAME};
pub use search::{filter_sections, guide_view, GuideView};
