//! Booklet page ordering
//!
//! Pages are treated as opaque tokens: the functions here only pad and
//! reorder them, so the same code drives the PDF layer and any other page
//! store a caller wants to impose.
//!
//! Output of [`booklet`] for `[A, B, C, D]`:
//!
//! ```
//! use pdf_booklet::booklet::booklet;
//!
//! let pages = ["A", "B", "C", "D"];
//! let order = booklet(Some(&pages[..]), &"-").unwrap();
//! assert_eq!(order, ["-", "A", "B", "-", "-", "C", "D", "-"]);
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// Pages on one folded sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

/// How many blank pages to append before permuting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Always append `4 - n % 4` blanks. A document whose page count is
    /// already a multiple of 4 still gets a full extra sheet of blanks.
    #[default]
    Full,
    /// Append only enough blanks to reach the next multiple of 4.
    /// An empty document still yields one sheet.
    Minimal,
}

impl Padding {
    /// Number of blanks appended to a sequence of `len` pages
    pub fn blanks_for(self, len: usize) -> usize {
        let remainder = len % PAGES_PER_SHEET;
        match self {
            Padding::Full => PAGES_PER_SHEET - remainder,
            Padding::Minimal if len == 0 => PAGES_PER_SHEET,
            Padding::Minimal => (PAGES_PER_SHEET - remainder) % PAGES_PER_SHEET,
        }
    }
}

/// One slot of a planned booklet: a source page number (1-based) or a blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leaf {
    /// Source page, numbered from 1 in document order
    Page(u32),
    /// Padding slot filled with an empty page
    Blank,
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Page(number) => write!(f, "{}", number),
            Leaf::Blank => f.write_str("blank"),
        }
    }
}

/// Append blanks so the sequence fills whole sheets, using [`Padding::Full`]
pub fn pad<T: Clone>(pages: &[T], blank: &T) -> Vec<T> {
    pad_with(pages, blank, Padding::Full)
}

/// Append blanks according to `padding`
pub fn pad_with<T: Clone>(pages: &[T], blank: &T, padding: Padding) -> Vec<T> {
    let blanks = padding.blanks_for(pages.len());
    let mut padded = Vec::with_capacity(pages.len() + blanks);
    padded.extend_from_slice(pages);
    padded.extend(std::iter::repeat(blank).take(blanks).cloned());
    padded
}

/// Reorder a padded sequence into booklet order
///
/// Pairs are drawn from both ends moving inward. Even pairs are emitted
/// outer-first (`last, first`), odd pairs inner-first (`first, last`), which
/// is the order the pages must be printed in for the folded sheets to read
/// front to back.
///
/// Applying this twice does not restore the input.
pub fn permute<T: Clone>(pages: &[T]) -> Result<Vec<T>> {
    let n = pages.len();
    if n % 2 != 0 {
        return Err(Error::InvalidLength(n));
    }

    let mut order = Vec::with_capacity(n);
    for i in 0..n / 2 {
        let first = &pages[i];
        let second = &pages[n - 1 - i];
        if i % 2 == 0 {
            order.push(second.clone());
            order.push(first.clone());
        } else {
            order.push(first.clone());
            order.push(second.clone());
        }
    }

    Ok(order)
}

/// Pad and permute `pages` for booklet printing
///
/// `None` means no sequence was supplied and is rejected; an empty slice is
/// valid and produces one sheet of blanks.
pub fn booklet<T: Clone>(pages: Option<&[T]>, blank: &T) -> Result<Vec<T>> {
    booklet_with(pages, blank, Padding::Full)
}

/// [`booklet`] with an explicit padding rule
pub fn booklet_with<T: Clone>(pages: Option<&[T]>, blank: &T, padding: Padding) -> Result<Vec<T>> {
    let pages = pages.ok_or(Error::InvalidInput)?;
    permute(&pad_with(pages, blank, padding))
}

/// Booklet order for a document of `page_count` pages
pub fn plan(page_count: u32, padding: Padding) -> Result<Vec<Leaf>> {
    let pages: Vec<Leaf> = (1..=page_count).map(Leaf::Page).collect();
    booklet_with(Some(pages.as_slice()), &Leaf::Blank, padding)
}
