//! Property datatypes and the mapping onto internal value kinds.
//!
//! A Wikibase property declares one of a closed set of external datatypes
//! (`wikibase-item`, `external-id`, ...). Each of those maps onto one of the
//! six internal value kinds a datavalue can actually take, and claim
//! construction checks that a supplied value's kind matches the property's
//! declared datatype.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use wbtk_types::Pid;

use crate::error::{ModelError, ModelResult};

/// The external datatype a property declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datatype {
    CommonsMedia,
    EntitySchema,
    ExternalId,
    GeoShape,
    GlobeCoordinate,
    Math,
    MonolingualText,
    MusicalNotation,
    Quantity,
    String,
    TabularData,
    Time,
    Url,
    WikibaseItem,
    WikibaseProperty,
    WikibaseLexeme,
    WikibaseForm,
    WikibaseSense,
}

impl Datatype {
    /// Parse the wire name of a datatype (`"wikibase-item"`, ...).
    pub fn from_wire(s: &str) -> Option<Datatype> {
        match s {
            "commonsMedia" => Some(Datatype::CommonsMedia),
            "entity-schema" => Some(Datatype::EntitySchema),
            "external-id" => Some(Datatype::ExternalId),
            "geo-shape" => Some(Datatype::GeoShape),
            "globe-coordinate" => Some(Datatype::GlobeCoordinate),
            "math" => Some(Datatype::Math),
            "monolingualtext" => Some(Datatype::MonolingualText),
            "musical-notation" => Some(Datatype::MusicalNotation),
            "quantity" => Some(Datatype::Quantity),
            "string" => Some(Datatype::String),
            "tabular-data" => Some(Datatype::TabularData),
            "time" => Some(Datatype::Time),
            "url" => Some(Datatype::Url),
            "wikibase-item" => Some(Datatype::WikibaseItem),
            "wikibase-property" => Some(Datatype::WikibaseProperty),
            "wikibase-lexeme" => Some(Datatype::WikibaseLexeme),
            "wikibase-form" => Some(Datatype::WikibaseForm),
            "wikibase-sense" => Some(Datatype::WikibaseSense),
            _ => None,
        }
    }

    /// The wire name of this datatype.
    pub fn as_wire(self) -> &'static str {
        match self {
            Datatype::CommonsMedia => "commonsMedia",
            Datatype::EntitySchema => "entity-schema",
            Datatype::ExternalId => "external-id",
            Datatype::GeoShape => "geo-shape",
            Datatype::GlobeCoordinate => "globe-coordinate",
            Datatype::Math => "math",
            Datatype::MonolingualText => "monolingualtext",
            Datatype::MusicalNotation => "musical-notation",
            Datatype::Quantity => "quantity",
            Datatype::String => "string",
            Datatype::TabularData => "tabular-data",
            Datatype::Time => "time",
            Datatype::Url => "url",
            Datatype::WikibaseItem => "wikibase-item",
            Datatype::WikibaseProperty => "wikibase-property",
            Datatype::WikibaseLexeme => "wikibase-lexeme",
            Datatype::WikibaseForm => "wikibase-form",
            Datatype::WikibaseSense => "wikibase-sense",
        }
    }

    /// The internal value kind a datavalue of this datatype takes.
    pub fn value_kind(self) -> ValueKind {
        match self {
            Datatype::CommonsMedia
            | Datatype::EntitySchema
            | Datatype::ExternalId
            | Datatype::GeoShape
            | Datatype::Math
            | Datatype::MusicalNotation
            | Datatype::String
            | Datatype::TabularData
            | Datatype::Url => ValueKind::String,
            Datatype::GlobeCoordinate => ValueKind::Coordinate,
            Datatype::MonolingualText => ValueKind::MonolingualText,
            Datatype::Quantity => ValueKind::Quantity,
            Datatype::Time => ValueKind::Time,
            Datatype::WikibaseItem
            | Datatype::WikibaseProperty
            | Datatype::WikibaseLexeme
            | Datatype::WikibaseForm
            | Datatype::WikibaseSense => ValueKind::EntityRef,
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// The internal kind of a (non-sentinel) claim value — the `type` tag
/// written inside a wire datavalue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    MonolingualText,
    Quantity,
    Coordinate,
    Time,
    EntityRef,
}

impl ValueKind {
    /// The `type` tag used inside a wire datavalue.
    pub fn as_wire(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::MonolingualText => "monolingualtext",
            ValueKind::Quantity => "quantity",
            ValueKind::Coordinate => "globecoordinate",
            ValueKind::Time => "time",
            ValueKind::EntityRef => "wikibase-entityid",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Source of property datatype declarations.
///
/// Datatypes live on the property entities themselves, so resolving one is
/// the caller's concern: the client crate resolves over the network (through
/// the cache), tests and embedders use [`InMemoryDatatypes`].
pub trait DatatypeSource {
    /// The datatype declared by `property`.
    ///
    /// Fails with [`ModelError::UnknownDatatype`] if the property is not
    /// known to this source.
    fn datatype(&self, property: &Pid) -> ModelResult<Datatype>;
}

/// In-memory datatype table for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryDatatypes {
    map: HashMap<Pid, Datatype>,
}

impl InMemoryDatatypes {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(property, datatype)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Pid, Datatype)>) -> Self {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// Declare a property's datatype (overwriting any previous entry).
    pub fn insert(&mut self, property: Pid, datatype: Datatype) {
        self.map.insert(property, datatype);
    }
}

impl DatatypeSource for InMemoryDatatypes {
    fn datatype(&self, property: &Pid) -> ModelResult<Datatype> {
        self.map
            .get(property)
            .copied()
            .ok_or_else(|| ModelError::UnknownDatatype(property.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_name_roundtrip_for_every_datatype() {
        let all = [
            Datatype::CommonsMedia,
            Datatype::EntitySchema,
            Datatype::ExternalId,
            Datatype::GeoShape,
            Datatype::GlobeCoordinate,
            Datatype::Math,
            Datatype::MonolingualText,
            Datatype::MusicalNotation,
            Datatype::Quantity,
            Datatype::String,
            Datatype::TabularData,
            Datatype::Time,
            Datatype::Url,
            Datatype::WikibaseItem,
            Datatype::WikibaseProperty,
            Datatype::WikibaseLexeme,
            Datatype::WikibaseForm,
            Datatype::WikibaseSense,
        ];
        for datatype in all {
            assert_eq!(Datatype::from_wire(datatype.as_wire()), Some(datatype));
        }
    }

    #[test]
    fn unknown_wire_name_is_rejected() {
        assert_eq!(Datatype::from_wire("wikibase-sitelink"), None);
        assert_eq!(Datatype::from_wire(""), None);
    }

    #[test]
    fn string_like_datatypes_collapse_onto_string_kind() {
        assert_eq!(Datatype::ExternalId.value_kind(), ValueKind::String);
        assert_eq!(Datatype::Url.value_kind(), ValueKind::String);
        assert_eq!(Datatype::CommonsMedia.value_kind(), ValueKind::String);
        assert_eq!(Datatype::Math.value_kind(), ValueKind::String);
    }

    #[test]
    fn entity_datatypes_collapse_onto_entity_kind() {
        assert_eq!(Datatype::WikibaseItem.value_kind(), ValueKind::EntityRef);
        assert_eq!(Datatype::WikibaseForm.value_kind(), ValueKind::EntityRef);
        assert_eq!(Datatype::WikibaseSense.value_kind(), ValueKind::EntityRef);
    }

    #[test]
    fn in_memory_source_resolves_and_errors() {
        let p31 = Pid::new("P31").unwrap();
        let p1476 = Pid::new("P1476").unwrap();
        let source = InMemoryDatatypes::from_pairs([(p31.clone(), Datatype::WikibaseItem)]);
        assert_eq!(source.datatype(&p31).unwrap(), Datatype::WikibaseItem);
        assert!(matches!(
            source.datatype(&p1476),
            Err(ModelError::UnknownDatatype(p)) if p == p1476
        ));
    }
}
