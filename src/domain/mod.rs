pub mod article;
pub mod entry;

pub use article::{canonicalize_url, Article, Identity};
pub use entry::{FeedEntries, RawEntry, UNKNOWN_SOURCE};
