//! String-pattern identifiers for Wikibase entities.
//!
//! Every identifier is a validated newtype over its canonical string form:
//! [`Qid`] (`Q42`), [`Pid`] (`P31`), [`Lid`] (`L301993`), the local suffixes
//! [`Fid`] (`F1`) and [`Sid`] (`S1`), and the composite [`FormId`]
//! (`L301993-F1`) and [`SenseId`] (`L301993-S1`). [`EntityId`] classifies an
//! arbitrary id string into the entity kind it names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IdError, IdResult};

/// Returns `true` if `s` is `prefix` followed by one or more ASCII digits
/// that fit in a `u64`.
fn is_prefixed_numeric(s: &str, prefix: u8) -> bool {
    match s.as_bytes() {
        [first, digits @ ..] if *first == prefix && !digits.is_empty() => {
            digits.iter().all(u8::is_ascii_digit) && s[1..].parse::<u64>().is_ok()
        }
        _ => false,
    }
}

/// Splits a composite `L…-F…` / `L…-S…` id into its halves when both are
/// well formed.
fn split_composite(s: &str, local_prefix: u8) -> Option<(&str, &str)> {
    let (lexeme, local) = s.split_once('-')?;
    (is_prefixed_numeric(lexeme, b'L') && is_prefixed_numeric(local, local_prefix))
        .then_some((lexeme, local))
}

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal, $kind:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap an identifier string.
            pub fn new(value: impl Into<String>) -> IdResult<Self> {
                let value = value.into();
                if is_prefixed_numeric(&value, $prefix) {
                    Ok(Self(value))
                } else {
                    Err(IdError::InvalidIdentifier { kind: $kind, value })
                }
            }

            /// The canonical string form.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The numeric part of the identifier.
            pub fn numeric(&self) -> u64 {
                self.0[1..].parse().expect("digits validated at construction")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> IdResult<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> IdResult<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

numeric_id!(
    /// An item identifier (`Q\d+`).
    Qid, b'Q', "item"
);
numeric_id!(
    /// A property identifier (`P\d+`).
    Pid, b'P', "property"
);
numeric_id!(
    /// A lexeme identifier (`L\d+`).
    Lid, b'L', "lexeme"
);
numeric_id!(
    /// A local form suffix (`F\d+`), meaningful only relative to a lexeme.
    Fid, b'F', "form suffix"
);
numeric_id!(
    /// A local sense suffix (`S\d+`), meaningful only relative to a lexeme.
    Sid, b'S', "sense suffix"
);

macro_rules! composite_id {
    ($(#[$doc:meta])* $name:ident, $local:ident, $local_prefix:literal, $kind:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap an identifier string.
            pub fn new(value: impl Into<String>) -> IdResult<Self> {
                let value = value.into();
                if split_composite(&value, $local_prefix).is_some() {
                    Ok(Self(value))
                } else {
                    Err(IdError::InvalidIdentifier { kind: $kind, value })
                }
            }

            /// Compose from a lexeme id and a local suffix.
            pub fn from_parts(lexeme: &Lid, local: &$local) -> Self {
                Self(format!("{lexeme}-{local}"))
            }

            /// The canonical string form.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The owning lexeme's id.
            pub fn lexeme(&self) -> Lid {
                Lid(self.halves().0.to_string())
            }

            /// The local suffix relative to the owning lexeme.
            pub fn local(&self) -> $local {
                $local(self.halves().1.to_string())
            }

            fn halves(&self) -> (&str, &str) {
                split_composite(&self.0, $local_prefix)
                    .expect("halves validated at construction")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> IdResult<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> IdResult<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

composite_id!(
    /// A composite form identifier: lexeme id plus local form suffix
    /// (`L301993-F1`).
    FormId, Fid, b'F', "form"
);
composite_id!(
    /// A composite sense identifier: lexeme id plus local sense suffix
    /// (`L301993-S1`).
    SenseId, Sid, b'S', "sense"
);

/// The kind of entity an identifier names. Doubles as the `entity-type` tag
/// carried by entity-reference values in wire JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Item,
    Property,
    Lexeme,
    Form,
    Sense,
}

impl EntityKind {
    /// The `entity-type` tag used in wire JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Item => "item",
            EntityKind::Property => "property",
            EntityKind::Lexeme => "lexeme",
            EntityKind::Form => "form",
            EntityKind::Sense => "sense",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any entity identifier, classified by kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EntityId {
    Item(Qid),
    Property(Pid),
    Lexeme(Lid),
    Form(FormId),
    Sense(SenseId),
}

impl EntityId {
    /// Classify an arbitrary id string. Composite ids are tried first so
    /// `L1-F1` never half-parses as a bare lexeme id.
    pub fn parse(value: &str) -> IdResult<Self> {
        if let Ok(id) = FormId::new(value) {
            return Ok(EntityId::Form(id));
        }
        if let Ok(id) = SenseId::new(value) {
            return Ok(EntityId::Sense(id));
        }
        if let Ok(id) = Qid::new(value) {
            return Ok(EntityId::Item(id));
        }
        if let Ok(id) = Pid::new(value) {
            return Ok(EntityId::Property(id));
        }
        if let Ok(id) = Lid::new(value) {
            return Ok(EntityId::Lexeme(id));
        }
        Err(IdError::InvalidIdentifier {
            kind: "entity",
            value: value.to_string(),
        })
    }

    /// The kind of entity this id names.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityId::Item(_) => EntityKind::Item,
            EntityId::Property(_) => EntityKind::Property,
            EntityId::Lexeme(_) => EntityKind::Lexeme,
            EntityId::Form(_) => EntityKind::Form,
            EntityId::Sense(_) => EntityKind::Sense,
        }
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        match self {
            EntityId::Item(id) => id.as_str(),
            EntityId::Property(id) => id.as_str(),
            EntityId::Lexeme(id) => id.as_str(),
            EntityId::Form(id) => id.as_str(),
            EntityId::Sense(id) => id.as_str(),
        }
    }

    /// The numeric part, for the kinds whose wire form carries a
    /// `numeric-id` (items, properties, lexemes).
    pub fn numeric(&self) -> Option<u64> {
        match self {
            EntityId::Item(id) => Some(id.numeric()),
            EntityId::Property(id) => Some(id.numeric()),
            EntityId::Lexeme(id) => Some(id.numeric()),
            EntityId::Form(_) | EntityId::Sense(_) => None,
        }
    }

    /// The lexeme an id belongs to: the id itself for lexemes, the prefix
    /// for forms and senses, `None` for items and properties.
    pub fn lexeme(&self) -> Option<Lid> {
        match self {
            EntityId::Lexeme(id) => Some(id.clone()),
            EntityId::Form(id) => Some(id.lexeme()),
            EntityId::Sense(id) => Some(id.lexeme()),
            EntityId::Item(_) | EntityId::Property(_) => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityId {
    type Err = IdError;

    fn from_str(s: &str) -> IdResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = IdError;

    fn try_from(value: String) -> IdResult<Self> {
        Self::parse(&value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> String {
        id.as_str().to_string()
    }
}

impl From<Qid> for EntityId {
    fn from(id: Qid) -> Self {
        EntityId::Item(id)
    }
}

impl From<Pid> for EntityId {
    fn from(id: Pid) -> Self {
        EntityId::Property(id)
    }
}

impl From<Lid> for EntityId {
    fn from(id: Lid) -> Self {
        EntityId::Lexeme(id)
    }
}

impl From<FormId> for EntityId {
    fn from(id: FormId) -> Self {
        EntityId::Form(id)
    }
}

impl From<SenseId> for EntityId {
    fn from(id: SenseId) -> Self {
        EntityId::Sense(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Simple numeric ids
    // -----------------------------------------------------------------------

    #[test]
    fn valid_simple_ids() {
        assert!(Qid::new("Q1").is_ok());
        assert!(Qid::new("Q48726740").is_ok());
        assert!(Pid::new("P31").is_ok());
        assert!(Lid::new("L301993").is_ok());
        assert!(Fid::new("F1").is_ok());
        assert!(Sid::new("S12").is_ok());
    }

    #[test]
    fn rejects_wrong_prefix() {
        assert!(Qid::new("P1").is_err());
        assert!(Pid::new("Q1").is_err());
        assert!(Lid::new("Q1").is_err());
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(Qid::new("").is_err());
        assert!(Qid::new("Q").is_err());
        assert!(Qid::new("Q1a").is_err());
        assert!(Qid::new("q1").is_err());
        assert!(Qid::new("Q+1").is_err());
        assert!(Qid::new("Q 1").is_err());
        assert!(Qid::new("Q1-F1").is_err());
    }

    #[test]
    fn numeric_part() {
        assert_eq!(Qid::new("Q42").unwrap().numeric(), 42);
        assert_eq!(Lid::new("L301993").unwrap().numeric(), 301_993);
    }

    #[test]
    fn display_is_canonical_form() {
        let id = Pid::new("P5578").unwrap();
        assert_eq!(id.to_string(), "P5578");
        assert_eq!(id.as_str(), "P5578");
    }

    #[test]
    fn invalid_id_error_names_the_kind() {
        let err = Qid::new("x").unwrap_err();
        assert_eq!(
            err,
            IdError::InvalidIdentifier {
                kind: "item",
                value: "x".to_string()
            }
        );
    }

    // -----------------------------------------------------------------------
    // Composite ids
    // -----------------------------------------------------------------------

    #[test]
    fn valid_composite_ids() {
        assert!(FormId::new("L1-F1").is_ok());
        assert!(SenseId::new("L301993-S4").is_ok());
    }

    #[test]
    fn rejects_malformed_composites() {
        assert!(FormId::new("L1").is_err());
        assert!(FormId::new("L1-S1").is_err());
        assert!(FormId::new("L1-F").is_err());
        assert!(FormId::new("Q1-F1").is_err());
        assert!(FormId::new("L1-F1-F2").is_err());
        assert!(SenseId::new("L1-F1").is_err());
    }

    #[test]
    fn composite_decomposes_into_valid_parts() {
        let id = FormId::new("L301993-F2").unwrap();
        assert_eq!(id.lexeme(), Lid::new("L301993").unwrap());
        assert_eq!(id.local(), Fid::new("F2").unwrap());
    }

    #[test]
    fn composite_composes_from_parts() {
        let lid = Lid::new("L10").unwrap();
        let sid = Sid::new("S3").unwrap();
        let id = SenseId::from_parts(&lid, &sid);
        assert_eq!(id.as_str(), "L10-S3");
        assert_eq!(id.lexeme(), lid);
    }

    // -----------------------------------------------------------------------
    // EntityId classification
    // -----------------------------------------------------------------------

    #[test]
    fn classifies_each_kind() {
        assert_eq!(EntityId::parse("Q1").unwrap().kind(), EntityKind::Item);
        assert_eq!(EntityId::parse("P31").unwrap().kind(), EntityKind::Property);
        assert_eq!(EntityId::parse("L1").unwrap().kind(), EntityKind::Lexeme);
        assert_eq!(EntityId::parse("L1-F1").unwrap().kind(), EntityKind::Form);
        assert_eq!(EntityId::parse("L1-S1").unwrap().kind(), EntityKind::Sense);
    }

    #[test]
    fn rejects_unclassifiable_strings() {
        assert!(EntityId::parse("").is_err());
        assert!(EntityId::parse("X1").is_err());
        assert!(EntityId::parse("F1").is_err());
        assert!(EntityId::parse("Q1-F1").is_err());
    }

    #[test]
    fn lexeme_of_owning_ids() {
        let lid = Lid::new("L7").unwrap();
        assert_eq!(EntityId::parse("L7").unwrap().lexeme(), Some(lid.clone()));
        assert_eq!(EntityId::parse("L7-F1").unwrap().lexeme(), Some(lid.clone()));
        assert_eq!(EntityId::parse("L7-S1").unwrap().lexeme(), Some(lid));
        assert_eq!(EntityId::parse("Q7").unwrap().lexeme(), None);
    }

    #[test]
    fn numeric_only_for_simple_kinds() {
        assert_eq!(EntityId::parse("Q42").unwrap().numeric(), Some(42));
        assert_eq!(EntityId::parse("L1-F1").unwrap().numeric(), None);
    }

    // -----------------------------------------------------------------------
    // Serde
    // -----------------------------------------------------------------------

    #[test]
    fn serde_roundtrip_as_plain_string() {
        let id = FormId::new("L301993-F1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"L301993-F1\"");
        let parsed: FormId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn serde_rejects_invalid_string() {
        let result: Result<Qid, _> = serde_json::from_str("\"L1\"");
        assert!(result.is_err());
    }

    #[test]
    fn entity_id_serde_roundtrip() {
        let id = EntityId::parse("L1-S1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"L1-S1\"");
        let parsed: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
