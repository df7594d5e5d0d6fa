//! IIIF Presentation API 2.x resources.
//!
//! Every resource is a JSON-LD object held in an insertion-ordered
//! [`OrderedDocument`]. This crate layers the shared presentation behaviour
//! on top of that store:
//!
//! - [`PresentationObject`] -- construction, [`parse`](PresentationObject::parse),
//!   the `metadata` list, and the tidy-then-serialize pipeline
//! - [`Vocabulary`] -- accessors generated from [`JSON_LD_PROPS`] and
//!   [`ALLOWED_ANYWHERE_PROPS`]
//! - [`ParseSource`] -- a file path, JSON text, or in-memory mapping
//!
//! The trait is sealed: only the resource kinds defined here
//! ([`Manifest`], [`Sequence`], [`Canvas`], ...) can be constructed.
//!
//! ```
//! use iiif_presentation::{Manifest, PresentationObject, Vocabulary};
//!
//! let mut manifest = Manifest::new()
//!     .with_id("http://example.org/iiif/book1/manifest")
//!     .with_label("Book 1");
//! manifest.metadata();
//! let json = manifest.to_json().unwrap();
//! assert!(!json.contains("metadata"));
//! ```

pub mod error;
pub mod object;
pub mod parse;
pub mod resources;
pub mod vocabulary;

pub use error::{PresentationError, PresentationResult};
pub use object::PresentationObject;
pub use parse::ParseSource;
pub use resources::{
    Annotation, AnnotationList, Canvas, Collection, ImageResource, Layer, Manifest, Range,
    Sequence,
};
pub use vocabulary::{
    property, PropertySpec, Vocabulary, ALLOWED_ANYWHERE_PROPS, CONTEXT, JSON_LD_PROPS,
};

pub use iiif_document::{DocumentError, DocumentStore, Map, OrderedDocument, Value};
