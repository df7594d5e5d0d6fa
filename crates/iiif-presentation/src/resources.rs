//! Constructible IIIF Presentation resource kinds.
//!
//! Each kind owns one [`OrderedDocument`] and differs from the others only in
//! its default `@type` and whether `new()` injects the JSON-LD context.

use iiif_document::{DocumentStore, OrderedDocument};
use serde_json::{Map, Value};

use crate::object::{sealed::Sealed, PresentationObject};

macro_rules! presentation_resources {
    (
        $(
            $(#[$meta:meta])*
            $name:ident => $type:literal, top_level: $top:literal;
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, PartialEq)]
            pub struct $name {
                data: OrderedDocument,
            }

            impl $name {
                #[doc = concat!("A new `", $type, "` resource.")]
                pub fn new() -> Self {
                    <Self as PresentationObject>::with_data(Map::new(), $top)
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl Sealed for $name {}

            impl DocumentStore for $name {
                fn as_map(&self) -> &Map<String, Value> {
                    self.data.as_map()
                }

                fn as_map_mut(&mut self) -> &mut Map<String, Value> {
                    self.data.as_map_mut()
                }
            }

            impl PresentationObject for $name {
                const TYPE: &'static str = $type;
                const TOP_LEVEL: bool = $top;

                fn from_document(data: OrderedDocument) -> Self {
                    Self { data }
                }

                fn document(&self) -> &OrderedDocument {
                    &self.data
                }

                fn document_mut(&mut self) -> &mut OrderedDocument {
                    &mut self.data
                }

                fn into_document(self) -> OrderedDocument {
                    self.data
                }
            }
        )*
    };
}

presentation_resources! {
    /// Top-level description of a single object and its views.
    Manifest => "sc:Manifest", top_level: true;
    /// Ordered grouping of manifests and other collections.
    Collection => "sc:Collection", top_level: true;
    /// Order of the views of the object.
    Sequence => "sc:Sequence", top_level: false;
    /// A virtual container representing a page or view.
    Canvas => "sc:Canvas", top_level: false;
    /// Structural section of the object, such as a chapter.
    Range => "sc:Range", top_level: false;
    /// Grouping of annotation lists.
    Layer => "sc:Layer", top_level: false;
    AnnotationList => "sc:AnnotationList", top_level: false;
    /// Association of content with a canvas.
    Annotation => "oa:Annotation", top_level: false;
    /// Image content painted onto a canvas.
    ImageResource => "dctypes:Image", top_level: false;
}
