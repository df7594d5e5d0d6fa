//! Property vocabularies and the accessors generated from them.
//!
//! Each row of the `vocabulary!` table names a public property, the
//! document key it is stored under, and the four accessor names generated
//! for it. Adding a row is all it takes to expose a new property.

use iiif_document::DocumentStore;
use serde_json::Value;

use crate::error::{PresentationError, PresentationResult};
use crate::object::PresentationObject;

/// The IIIF Presentation 2.x JSON-LD context IRI.
pub const CONTEXT: &str = "http://iiif.io/api/presentation/2/context.json";

/// A vocabulary entry: public property name and the document key backing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropertySpec {
    pub name: &'static str,
    pub key: &'static str,
}

/// Resolve a public property name against both vocabularies.
pub fn property(name: &str) -> Option<&'static PropertySpec> {
    JSON_LD_PROPS
        .iter()
        .chain(ALLOWED_ANYWHERE_PROPS)
        .find(|spec| spec.name == name)
}

macro_rules! vocabulary {
    (
        $(
            $(#[$table_meta:meta])*
            $table:ident {
                $(
                    $name:literal => $key:literal;
                    $getter:ident, $alias:ident, $setter:ident, $builder:ident
                );* $(;)?
            }
        )*
    ) => {
        $(
            $(#[$table_meta])*
            pub const $table: &[PropertySpec] = &[
                $( PropertySpec { name: $name, key: $key } ),*
            ];
        )*

        /// Accessors for every vocabulary property.
        ///
        /// Implemented for all presentation resources. Getters return `None`
        /// for an unset property; setters return the previous value.
        pub trait Vocabulary: PresentationObject {
            $($(
                #[doc = concat!("Value of `", $key, "`.")]
                fn $getter(&self) -> Option<&Value> {
                    self.get($key)
                }

                #[doc = concat!("Alias getter for `", $name, "`.")]
                fn $alias(&self) -> Option<&Value> {
                    self.get($key)
                }

                #[doc = concat!("Set `", $key, "`.")]
                fn $setter(&mut self, value: impl Into<Value>) -> Option<Value> {
                    self.set($key, value)
                }

                #[doc = concat!("Set `", $key, "` and return `self` for chaining.")]
                fn $builder(mut self, value: impl Into<Value>) -> Self {
                    self.set($key, value);
                    self
                }
            )*)*

            /// Read a property by its public name.
            fn get_property(&self, name: &str) -> PresentationResult<Option<&Value>> {
                let spec = property(name)
                    .ok_or_else(|| PresentationError::UnknownProperty(name.to_string()))?;
                Ok(self.get(spec.key))
            }

            /// Write a property by its public name.
            fn set_property(
                &mut self,
                name: &str,
                value: impl Into<Value>,
            ) -> PresentationResult<Option<Value>> {
                let spec = property(name)
                    .ok_or_else(|| PresentationError::UnknownProperty(name.to_string()))?;
                Ok(self.set(spec.key, value))
            }
        }

        impl<T: PresentationObject> Vocabulary for T {}
    };
}

vocabulary! {
    /// JSON-LD envelope properties, stored under `@`-prefixed keys.
    JSON_LD_PROPS {
        "type" => "@type"; r#type, get_type, set_type, with_type;
        "id" => "@id"; id, get_id, set_id, with_id;
        "context" => "@context"; context, get_context, set_context, with_context;
    }

    /// Descriptive properties allowed on any resource.
    ALLOWED_ANYWHERE_PROPS {
        "label" => "label"; label, get_label, set_label, with_label;
        "description" => "description"; description, get_description, set_description, with_description;
        "thumbnail" => "thumbnail"; thumbnail, get_thumbnail, set_thumbnail, with_thumbnail;
        "attribution" => "attribution"; attribution, get_attribution, set_attribution, with_attribution;
        "license" => "license"; license, get_license, set_license, with_license;
        "logo" => "logo"; logo, get_logo, set_logo, with_logo;
        "see_also" => "seeAlso"; see_also, get_see_also, set_see_also, with_see_also;
        "service" => "service"; service, get_service, set_service, with_service;
        "related" => "related"; related, get_related, set_related, with_related;
        "within" => "within"; within, get_within, set_within, with_within;
    }
}
