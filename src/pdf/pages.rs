//! Page tree access: counting, inherited attributes and blank pages

use std::path::Path;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use crate::error::{Error, Result};

/// Page attributes a page may inherit from its ancestors in the page tree
pub(crate) const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic Parent links
const MAX_TREE_DEPTH: usize = 64;

/// Count the number of pages in a PDF file
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    Ok(doc.get_pages().len())
}

/// Id of the catalog (document root)
pub(crate) fn catalog_id(doc: &Document) -> Result<ObjectId> {
    let root = doc.trailer.get(b"Root")
        .map_err(|_| Error::MalformedPdf("No Root in trailer".to_string()))?;

    root.as_reference()
        .map_err(|_| Error::MalformedPdf("Root is not a reference".to_string()))
}

/// Look up `key` on a page, walking up the Parent chain if the page itself
/// doesn't carry it
pub(crate) fn inherited_attribute(
    doc: &Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<Object>> {
    let mut node_id = page_id;

    for _ in 0..MAX_TREE_DEPTH {
        let node = doc.get_dictionary(node_id)?;

        if let Ok(value) = node.get(key) {
            return Ok(Some(value.clone()));
        }

        match node.get(b"Parent") {
            Ok(parent) => node_id = parent.as_reference()?,
            Err(_) => return Ok(None),
        }
    }

    Err(Error::MalformedPdf(format!(
        "page tree deeper than {} levels above page {:?}",
        MAX_TREE_DEPTH, page_id
    )))
}

/// Copy inherited attributes onto the page itself so it keeps them when it
/// is moved under a new parent
pub(crate) fn push_down_inherited(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    for key in INHERITABLE_KEYS {
        if doc.get_dictionary(page_id)?.has(key) {
            continue;
        }

        if let Some(value) = inherited_attribute(doc, page_id, key)? {
            doc.get_dictionary_mut(page_id)?.set(key.to_vec(), value);
        }
    }

    Ok(())
}

/// Follow an indirect reference to the object it points at
fn resolve(doc: &Document, object: Object) -> Result<Object> {
    match object {
        Object::Reference(id) => Ok(doc.get_object(id)?.clone()),
        direct => Ok(direct),
    }
}

/// Resolve the `MediaBox` of a page to an array of direct numbers
pub(crate) fn media_box(doc: &Document, page_id: ObjectId) -> Result<Option<Vec<Object>>> {
    let value = match inherited_attribute(doc, page_id, b"MediaBox")? {
        Some(value) => resolve(doc, value)?,
        None => return Ok(None),
    };

    match value {
        Object::Array(arr) => arr
            .into_iter()
            .map(|entry| resolve(doc, entry))
            .collect::<Result<Vec<_>>>()
            .map(Some),
        _ => Err(Error::MalformedPdf("MediaBox is not an array".to_string())),
    }
}

/// Add an empty page with the given `MediaBox` under `parent_id`
pub(crate) fn create_blank_page(
    doc: &mut Document,
    media_box: &[Object],
    parent_id: ObjectId,
) -> ObjectId {
    let content_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_id));
    page_dict.set("MediaBox", Object::Array(media_box.to_vec()));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(Dictionary::new()));

    doc.add_object(page_dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two pages under an intermediate Pages node that carries the MediaBox
    fn nested_doc() -> (Document, Vec<ObjectId>) {
        let mut doc = Document::with_version("1.5");
        let root_pages_id = doc.new_object_id();
        let inner_pages_id = doc.new_object_id();

        let mut page_ids = Vec::new();
        for _ in 0..2 {
            let page_id = doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(inner_pages_id)),
            ]));
            page_ids.push(page_id);
        }

        let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
        doc.objects.insert(inner_pages_id, Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Parent", Object::Reference(root_pages_id)),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(2)),
            ("Rotate", Object::Integer(90)),
        ])));
        doc.objects.insert(root_pages_id, Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(vec![Object::Reference(inner_pages_id)])),
            ("Count", Object::Integer(2)),
            ("MediaBox", Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ])),
        ])));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(root_pages_id)),
        ]));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        (doc, page_ids)
    }

    #[test]
    fn test_count_pages_nonexistent_file() {
        let result = count_pages(Path::new("nonexistent.pdf"));
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    #[test]
    fn test_inherited_attribute_walks_parents() {
        let (doc, page_ids) = nested_doc();

        let rotate = inherited_attribute(&doc, page_ids[0], b"Rotate").unwrap().unwrap();
        assert_eq!(rotate.as_i64().unwrap(), 90);

        let media_box = media_box(&doc, page_ids[1]).unwrap().unwrap();
        assert_eq!(media_box.len(), 4);

        let crop_box = inherited_attribute(&doc, page_ids[0], b"CropBox").unwrap();
        assert!(crop_box.is_none());
    }

    #[test]
    fn test_media_box_resolves_indirect_entries() {
        let (mut doc, page_ids) = nested_doc();
        let width_id = doc.add_object(Object::Integer(612));
        let height_id = doc.add_object(Object::Integer(792));
        doc.get_dictionary_mut(page_ids[0]).unwrap().set("MediaBox", Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Reference(width_id),
            Object::Reference(height_id),
        ]));

        let media_box = media_box(&doc, page_ids[0]).unwrap().unwrap();
        assert_eq!(media_box[2].as_i64().unwrap(), 612);
        assert_eq!(media_box[3].as_i64().unwrap(), 792);
    }

    #[test]
    fn test_push_down_inherited() {
        let (mut doc, page_ids) = nested_doc();
        push_down_inherited(&mut doc, page_ids[0]).unwrap();

        let page = doc.get_dictionary(page_ids[0]).unwrap();
        assert!(page.has(b"MediaBox"));
        assert!(page.has(b"Rotate"));
        assert!(!page.has(b"CropBox"));

        let untouched = doc.get_dictionary(page_ids[1]).unwrap();
        assert!(!untouched.has(b"MediaBox"));
    }

    #[test]
    fn test_create_blank_page() {
        let (mut doc, _) = nested_doc();
        let parent_id = doc.new_object_id();
        let media_box = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(100),
            Object::Integer(200),
        ];

        let blank_id = create_blank_page(&mut doc, &media_box, parent_id);
        let blank = doc.get_dictionary(blank_id).unwrap();
        assert_eq!(blank.get(b"Parent").unwrap().as_reference().unwrap(), parent_id);
        assert_eq!(blank.get(b"MediaBox").unwrap().as_array().unwrap().len(), 4);
        assert_eq!(blank.get(b"MediaBox").unwrap().as_array().unwrap()[3].as_i64().unwrap(), 200);
    }

    #[test]
    fn test_catalog_id() {
        let (doc, _) = nested_doc();
        let catalog = doc.get_dictionary(catalog_id(&doc).unwrap()).unwrap();
        assert_eq!(catalog.get(b"Type").unwrap().as_name().unwrap(), b"Catalog");
    }
}
