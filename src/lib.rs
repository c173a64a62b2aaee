//! PDF Booklet Library
//!
//! Rearranges the pages of a PDF so that, printed double-sided and folded,
//! the sheets read as a booklet. This library provides:
//! - The booklet page permutation over opaque page tokens
//! - Page geometry helpers for manufacturing blank pages
//! - Rewriting a PDF's page tree in booklet order
//!
//! # Example
//!
//! ```no_run
//! use pdf_booklet::booklet::Padding;
//! use pdf_booklet::pdf::{make_booklet, BookletOptions};
//! use std::path::PathBuf;
//!
//! let options = BookletOptions {
//!     input_path: PathBuf::from("zine.pdf"),
//!     output_path: PathBuf::from("zine-booklet.pdf"),
//!     padding: Padding::Full,
//! };
//!
//! make_booklet(&options).expect("Failed to make booklet");
//! ```

pub mod booklet;
pub mod error;
pub mod layout;
pub mod pdf;

// Re-export commonly used items
pub use booklet::{booklet, Leaf, Padding};
pub use error::{Error, Result};
