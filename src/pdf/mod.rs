//! PDF reading and writing

pub mod impose;
pub mod pages;

// Re-export commonly used items
pub use impose::{ensure_distinct_paths, impose_document, make_booklet, BookletOptions, BookletSummary};
pub use pages::count_pages;
