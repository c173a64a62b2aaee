//! Rewrite a PDF's page tree in booklet order using lopdf

use std::fs;
use std::path::{Path, PathBuf};
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, info, warn};

use crate::booklet::{plan, Leaf, Padding};
use crate::error::{Error, Result};
use crate::layout::PageDimensions;
use super::pages::{catalog_id, create_blank_page, media_box, push_down_inherited};

/// Options for producing a booklet
#[derive(Debug, Clone)]
pub struct BookletOptions {
    /// Source PDF
    pub input_path: PathBuf,
    /// Where to write the re-ordered PDF; must not be the input
    pub output_path: PathBuf,
    /// Padding rule for filling the last sheet
    pub padding: Padding,
}

/// What [`make_booklet`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookletSummary {
    /// Pages in the source document
    pub source_pages: usize,
    /// Blank pages inserted
    pub blank_pages: usize,
    /// Output order, one entry per output page
    pub order: Vec<Leaf>,
}

impl BookletSummary {
    /// Pages in the output document
    pub fn total_pages(&self) -> usize {
        self.order.len()
    }
}

/// Reject writing the output over the input
///
/// Paths match when they are identical, or when both exist and resolve to
/// the same file.
pub fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<()> {
    let same = input == output
        || matches!(
            (fs::canonicalize(input), fs::canonicalize(output)),
            (Ok(a), Ok(b)) if a == b
        );

    if same {
        return Err(Error::SameFile(output.to_path_buf()));
    }

    Ok(())
}

/// Rearrange the pages of a PDF for booklet printing
///
/// # Example
///
/// ```no_run
/// use pdf_booklet::booklet::Padding;
/// use pdf_booklet::pdf::{make_booklet, BookletOptions};
/// use std::path::PathBuf;
///
/// let options = BookletOptions {
///     input_path: PathBuf::from("manual.pdf"),
///     output_path: PathBuf::from("manual-booklet.pdf"),
///     padding: Padding::Full,
/// };
///
/// let summary = make_booklet(&options).expect("Failed to impose");
/// println!("{} pages", summary.total_pages());
/// ```
pub fn make_booklet(options: &BookletOptions) -> Result<BookletSummary> {
    ensure_distinct_paths(&options.input_path, &options.output_path)?;

    if !options.input_path.exists() {
        return Err(Error::FileNotFound(options.input_path.clone()));
    }

    debug!(input = %options.input_path.display(), "loading source document");
    let mut doc = Document::load(&options.input_path)?;

    let summary = impose_document(&mut doc, options.padding)?;

    doc.compress();
    doc.save(&options.output_path)?;

    info!(
        output = %options.output_path.display(),
        source_pages = summary.source_pages,
        blank_pages = summary.blank_pages,
        total_pages = summary.total_pages(),
        "wrote booklet"
    );

    Ok(summary)
}

/// Replace the page tree of `doc` with a flat one in booklet order
///
/// Blank slots get a fresh empty page each, sized like the last source page.
/// A document without pages gets US Letter blanks.
pub fn impose_document(doc: &mut Document, padding: Padding) -> Result<BookletSummary> {
    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
    let page_count = u32::try_from(page_ids.len())
        .map_err(|_| Error::MalformedPdf(format!("too many pages: {}", page_ids.len())))?;

    let order = plan(page_count, padding)?;

    let blank_box = if order.contains(&Leaf::Blank) {
        blank_media_box(doc, page_ids.last().copied())
    } else {
        Vec::new()
    };

    for &page_id in &page_ids {
        push_down_inherited(doc, page_id)?;
    }

    let pages_id = doc.new_object_id();
    let mut kids = Vec::with_capacity(order.len());
    let mut blank_pages = 0;

    for leaf in &order {
        let page_id = match *leaf {
            Leaf::Page(number) => page_ids[number as usize - 1],
            Leaf::Blank => {
                blank_pages += 1;
                create_blank_page(doc, &blank_box, pages_id)
            }
        };
        kids.push(Object::Reference(page_id));
    }

    for &page_id in &page_ids {
        doc.get_dictionary_mut(page_id)?
            .set("Parent", Object::Reference(pages_id));
    }

    let count = kids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let root_id = catalog_id(doc)?;
    doc.get_dictionary_mut(root_id)?
        .set("Pages", Object::Reference(pages_id));

    // The old page tree nodes are unreachable now
    let pruned = doc.prune_objects();
    debug!(pruned = pruned.len(), "dropped unreferenced objects");

    debug!(
        order = %order.iter().map(Leaf::to_string).collect::<Vec<_>>().join(" "),
        "booklet order"
    );

    Ok(BookletSummary {
        source_pages: page_ids.len(),
        blank_pages,
        order,
    })
}

/// `MediaBox` for blank pages: the last source page's, or US Letter when
/// there is none or it can't be read
fn blank_media_box(doc: &Document, last_page: Option<ObjectId>) -> Vec<Object> {
    let found = match last_page {
        Some(page_id) => media_box(doc, page_id).unwrap_or_else(|e| {
            warn!(error = %e, "unreadable MediaBox on last page, using US Letter");
            None
        }),
        None => None,
    };

    if let Some(media_box) = found {
        match PageDimensions::from_media_box(&media_box) {
            Ok(size) => {
                debug!(
                    width_mm = size.width.mm(),
                    height_mm = size.height.mm(),
                    "blank page size"
                );
                return media_box;
            }
            Err(e) => warn!(error = %e, "unusable MediaBox on last page, using US Letter"),
        }
    }

    PageDimensions::default().to_media_box()
}
