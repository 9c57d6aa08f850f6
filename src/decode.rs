//
// decode.rs
// Dicom-Tree-rs
//
// Opens a DICOM file and flattens its data set into ordered tagged elements, resolving names via the standard dictionary.
//
// Thales Matheus Mendonça Santos - October 2026

use std::path::{Path, PathBuf};

use dicom::core::dictionary::DataDictionary;
use dicom::core::value::Value;
use dicom::core::Tag;
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::{open_file, InMemDicomObject, ReadError};
use thiserror::Error;
use tracing::{debug, info};

use crate::element::{ElementValue, TaggedElement};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open DICOM file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
}

/// Read a file and return the elements of its main data set in file order.
///
/// The file meta group is not part of the result.
pub fn decode_file(path: &Path) -> Result<Vec<TaggedElement>, DecodeError> {
    let obj = open_file(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(transfer_syntax = obj.meta().transfer_syntax(), "file opened");

    let elements = elements_from_object(&obj);
    info!(path = %path.display(), elements = elements.len(), "decoded data set");
    Ok(elements)
}

/// Convert an in-memory object (or a sequence item) into tagged elements.
pub fn elements_from_object(obj: &InMemDicomObject<StandardDataDictionary>) -> Vec<TaggedElement> {
    obj.iter()
        .map(|elem| {
            let tag = elem.header().tag;
            let vr = elem.header().vr;
            let name = tag_name(tag);

            let value = match elem.value() {
                Value::Primitive(p) => ElementValue::Scalar(p.to_str().into_owned()),
                Value::Sequence(seq) => ElementValue::Sequence(
                    seq.items().iter().map(elements_from_object).collect(),
                ),
                Value::PixelSequence(p) => ElementValue::Scalar(format!(
                    "[encapsulated: {} fragment(s)]",
                    p.fragments().len()
                )),
            };

            TaggedElement {
                tag,
                name,
                vr,
                value,
            }
        })
        .collect()
}

/// Dictionary alias for `tag`, or the formatted tag when the dictionary does not know it.
pub fn tag_name(tag: Tag) -> String {
    StandardDataDictionary
        .by_tag(tag)
        .map(|e| e.alias.to_string())
        .unwrap_or_else(|| format_tag(tag))
}

pub fn format_tag(tag: Tag) -> String {
    format!("({:04X},{:04X})", tag.group(), tag.element())
}
