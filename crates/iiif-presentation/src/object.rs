use iiif_document::{DocumentStore, OrderedDocument};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{PresentationError, PresentationResult};
use crate::parse::{json_kind, ParseSource};
use crate::vocabulary::CONTEXT;

const METADATA: &str = "metadata";
const VIEWING_HINT: &str = "viewingHint";

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Behaviour shared by every IIIF Presentation resource.
///
/// Each resource exclusively owns one [`OrderedDocument`] and exposes it
/// through [`DocumentStore`] for raw key access. The trait is sealed; the
/// constructible kinds live in [`crate::resources`].
///
/// Serialization always runs [`tidy_empties`](Self::tidy_empties) first, so
/// output never carries an empty `metadata` list and never carries an
/// invalid one.
pub trait PresentationObject: DocumentStore + sealed::Sealed + Sized {
    /// `@type` assigned by [`with_data`](Self::with_data) when the input has none.
    const TYPE: &'static str;

    /// Whether `new()` injects `@context` (manifests and collections).
    const TOP_LEVEL: bool;

    #[doc(hidden)]
    fn from_document(document: OrderedDocument) -> Self;

    /// The owned document.
    fn document(&self) -> &OrderedDocument;

    fn document_mut(&mut self) -> &mut OrderedDocument;

    /// Consume the resource, yielding its document as-is (no tidy pass).
    fn into_document(self) -> OrderedDocument;

    /// Build a resource from initial entries.
    ///
    /// Entries are copied in the order `initial` yields them. A missing
    /// `@type` is filled with [`Self::TYPE`]. An existing `@context` is kept
    /// verbatim; otherwise it is set to [`CONTEXT`] only when
    /// `include_context` is true.
    fn with_data<I>(initial: I, include_context: bool) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut document: OrderedDocument = initial.into_iter().collect();
        if !document.has_key("@type") {
            document.set("@type", Self::TYPE);
        }
        if include_context && !document.has_key("@context") {
            document.set("@context", CONTEXT);
        }
        debug!(kind = Self::TYPE, keys = document.len(), "constructed resource");
        Self::from_document(document)
    }

    /// Build a resource from a file path, JSON text, or mapping.
    ///
    /// The parsed document replaces the resource's content wholesale: no
    /// `@context` is injected and no default `@type` is added.
    fn parse(source: impl Into<ParseSource>) -> PresentationResult<Self> {
        let document = source.into().load()?;
        Ok(Self::from_document(document))
    }

    /// Replace the owned document wholesale.
    fn set_data(&mut self, data: impl Into<OrderedDocument>) {
        *self.document_mut() = data.into();
    }

    /// The `metadata` list, created empty on first read.
    fn metadata(&mut self) -> &mut Value {
        let slot = self.get_or_insert_with(METADATA, || Value::Array(Vec::new()));
        if slot.is_null() {
            *slot = Value::Array(Vec::new());
        }
        slot
    }

    fn set_metadata(&mut self, metadata: impl Into<Value>) -> Option<Value> {
        self.set(METADATA, metadata)
    }

    fn viewing_hint(&self) -> Option<&Value> {
        self.get(VIEWING_HINT)
    }

    /// Set `viewingHint`.
    fn set_viewing_hint(&mut self, hint: impl Into<Value>) -> Option<Value> {
        self.set(VIEWING_HINT, hint)
    }

    /// Normalize the document before serialization.
    ///
    /// Removes an empty `metadata` list. A non-empty list whose entries are
    /// not all objects is an error and the document is left untouched.
    fn tidy_empties(&mut self) -> PresentationResult<()> {
        let entries = match self.get(METADATA) {
            None => return Ok(()),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                let found = json_kind(other);
                warn!(found, "metadata is not a list");
                return Err(PresentationError::MetadataNotAList(found));
            }
        };

        if entries.is_empty() {
            self.delete(METADATA);
            debug!("removed empty metadata list");
            return Ok(());
        }

        if let Some((index, entry)) = entries.iter().enumerate().find(|(_, e)| !e.is_object()) {
            let found = json_kind(entry);
            warn!(index, found, "metadata entry is not a mapping");
            return Err(PresentationError::InvalidMetadataEntry { index, found });
        }
        Ok(())
    }

    /// Tidy, then return the live document.
    ///
    /// This is not a snapshot: mutating the returned document mutates the
    /// resource.
    fn to_hash(&mut self) -> PresentationResult<&mut OrderedDocument> {
        self.tidy_empties()?;
        Ok(self.document_mut())
    }

    /// Alias of [`to_hash`](Self::to_hash).
    fn to_plain_object(&mut self) -> PresentationResult<&mut OrderedDocument> {
        self.to_hash()
    }

    /// Tidy, then serialize as compact JSON.
    fn to_json(&mut self) -> PresentationResult<String> {
        self.tidy_empties()?;
        Ok(serde_json::to_string(self.document())?)
    }

    /// Tidy, then serialize as indented JSON.
    fn to_pretty_json(&mut self) -> PresentationResult<String> {
        let document = self.to_hash()?;
        Ok(serde_json::to_string_pretty(&*document)?)
    }
}
