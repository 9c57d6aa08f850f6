//
// element.rs
// Dicom-Tree-rs
//
// Decoded data elements as handed from the DICOM decoder to the tree builder.
//
// Thales Matheus Mendonça Santos - October 2026

use dicom::core::{Tag, VR};

/// Dictionary alias of the bulk pixel payload (7FE0,0010), never shown in the tree.
pub const PIXEL_DATA_NAME: &str = "PixelData";

/// One decoded field of a DICOM data set.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedElement {
    pub tag: Tag,
    pub name: String,
    pub vr: VR,
    pub value: ElementValue,
}

/// Shape of an element's value, decided once by the decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    /// Ordered sequence items, each one its own element group.
    Sequence(Vec<Vec<TaggedElement>>),
    /// Default textual rendering of a primitive value.
    Scalar(String),
}

impl TaggedElement {
    pub fn scalar(tag: Tag, name: impl Into<String>, vr: VR, text: impl Into<String>) -> Self {
        Self {
            tag,
            name: name.into(),
            vr,
            value: ElementValue::Scalar(text.into()),
        }
    }

    pub fn sequence(tag: Tag, name: impl Into<String>, items: Vec<Vec<TaggedElement>>) -> Self {
        Self {
            tag,
            name: name.into(),
            vr: VR::SQ,
            value: ElementValue::Sequence(items),
        }
    }

    pub fn is_pixel_payload(&self) -> bool {
        self.name == PIXEL_DATA_NAME
    }
}
