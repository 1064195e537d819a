//! Statements: a claim with rank, qualifiers, and references.

use serde_json::{Map, Value};
use wbtk_types::{LanguageRegistry, Pid};

use crate::claim::Claim;
use crate::error::{ModelError, ModelResult};
use crate::reference::{ClaimSet, Reference};
use crate::value::ClaimValue;
use crate::wire::as_object;

/// Priority among statements for the same property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Rank {
    Preferred,
    #[default]
    Normal,
    Deprecated,
}

impl Rank {
    /// The wire name of this rank.
    pub fn as_wire(self) -> &'static str {
        match self {
            Rank::Preferred => "preferred",
            Rank::Normal => "normal",
            Rank::Deprecated => "deprecated",
        }
    }

    /// Parse a wire rank; anything unrecognized decodes as [`Rank::Normal`].
    pub fn from_wire(s: &str) -> Rank {
        match s {
            "preferred" => Rank::Preferred,
            "deprecated" => Rank::Deprecated,
            _ => Rank::Normal,
        }
    }
}

/// One edit applied to a statement: a qualifier claim or a reference.
#[derive(Clone, Debug)]
pub enum StatementEdit {
    Qualifier(Claim),
    Reference(Reference),
}

impl From<Claim> for StatementEdit {
    fn from(claim: Claim) -> Self {
        StatementEdit::Qualifier(claim)
    }
}

impl From<Reference> for StatementEdit {
    fn from(reference: Reference) -> Self {
        StatementEdit::Reference(reference)
    }
}

/// A claim as it appears on an entity: with a rank, qualifier claims, and
/// an ordered list of references, plus wire-only metadata (statement id and
/// the qualifier ordering read from the server) that matters only when
/// editing an existing statement in place.
///
/// Two statements are equal iff property, value, rank, qualifiers, and
/// references all match; a statement additionally equals a bare [`Claim`]
/// sharing its property and value, which makes containment checks by claim
/// convenient.
#[derive(Clone, Debug)]
pub struct Statement {
    claim: Claim,
    rank: Rank,
    qualifiers: ClaimSet,
    references: Vec<Reference>,
    id: Option<String>,
    qualifiers_order: Vec<Pid>,
}

impl Statement {
    /// Create a normal-rank statement with no qualifiers or references.
    pub fn new(claim: Claim) -> Self {
        Self {
            claim,
            rank: Rank::Normal,
            qualifiers: ClaimSet::new(),
            references: Vec::new(),
            id: None,
            qualifiers_order: Vec::new(),
        }
    }

    /// The statement's main claim.
    pub fn claim(&self) -> &Claim {
        &self.claim
    }

    /// The property.
    pub fn property(&self) -> &Pid {
        self.claim.property()
    }

    /// The main value.
    pub fn value(&self) -> &ClaimValue {
        self.claim.value()
    }

    /// The rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The qualifier claims.
    pub fn qualifiers(&self) -> &ClaimSet {
        &self.qualifiers
    }

    /// The references, in order.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// The server-assigned statement id, when built from the wire.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The qualifier ordering read from the wire. Round-trip bookkeeping
    /// only: encoded output always orders qualifiers by the live set.
    pub fn wire_qualifiers_order(&self) -> &[Pid] {
        &self.qualifiers_order
    }

    /// The statement with another rank. Returns `self` unchanged when the
    /// rank is already equal.
    pub fn with_rank(self, rank: Rank) -> Self {
        if rank == self.rank {
            self
        } else {
            Self { rank, ..self }
        }
    }

    /// A new statement with a qualifier claim added.
    pub fn add_qualifier(&self, qualifier: Claim) -> Self {
        Self {
            qualifiers: self.qualifiers.add(qualifier),
            ..self.clone()
        }
    }

    /// A new statement with the first value-matching qualifier removed.
    pub fn remove_qualifier(&self, qualifier: &Claim) -> Self {
        Self {
            qualifiers: self.qualifiers.remove(qualifier),
            ..self.clone()
        }
    }

    /// A new statement with a reference appended.
    pub fn add_reference(&self, reference: Reference) -> Self {
        let mut references = self.references.clone();
        references.push(reference);
        Self {
            references,
            ..self.clone()
        }
    }

    /// A new statement with the first structurally-equal reference removed.
    pub fn remove_reference(&self, reference: &Reference) -> Self {
        let mut references = self.references.clone();
        if let Some(index) = references.iter().position(|r| r == reference) {
            references.remove(index);
        }
        Self {
            references,
            ..self.clone()
        }
    }

    /// Apply an edit, routing to the qualifier set or the reference list.
    pub fn add(&self, edit: impl Into<StatementEdit>) -> Self {
        match edit.into() {
            StatementEdit::Qualifier(claim) => self.add_qualifier(claim),
            StatementEdit::Reference(reference) => self.add_reference(reference),
        }
    }

    /// Undo an edit, routing to the qualifier set or the reference list.
    pub fn sub(&self, edit: impl Into<StatementEdit>) -> Self {
        match edit.into() {
            StatementEdit::Qualifier(claim) => self.remove_qualifier(&claim),
            StatementEdit::Reference(reference) => self.remove_reference(&reference),
        }
    }

    /// Returns `true` if this statement shares property and value with the
    /// claim, ignoring rank, qualifiers, and references.
    pub fn matches_claim(&self, claim: &Claim) -> bool {
        &self.claim == claim
    }

    /// Decode a wire statement object.
    pub fn from_json(value: &Value, registry: &LanguageRegistry) -> ModelResult<Self> {
        let map = as_object(value, "statement")?;
        let mainsnak = map.get("mainsnak").ok_or_else(|| {
            ModelError::MalformedDocument("statement has no mainsnak".to_string())
        })?;
        let claim = Claim::from_json(mainsnak, registry)?;
        let rank = map
            .get("rank")
            .and_then(Value::as_str)
            .map(Rank::from_wire)
            .unwrap_or_default();

        let qualifiers_order: Vec<String> = map
            .get("qualifiers-order")
            .and_then(Value::as_array)
            .map(|keys| {
                keys.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let qualifiers = match map.get("qualifiers") {
            Some(qualifiers) => ClaimSet::from_json(
                as_object(qualifiers, "qualifiers")?,
                Some(&qualifiers_order),
                registry,
            )?,
            None => ClaimSet::new(),
        };

        let mut references = Vec::new();
        if let Some(list) = map.get("references").and_then(Value::as_array) {
            for reference in list {
                references.push(Reference::from_json(reference, registry)?);
            }
        }

        Ok(Self {
            claim,
            rank,
            qualifiers,
            references,
            id: map.get("id").and_then(Value::as_str).map(str::to_string),
            qualifiers_order: qualifiers_order
                .into_iter()
                .map(Pid::new)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Encode to the wire statement object. Empty qualifier structures are
    /// omitted entirely; the reference list is always present.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), "statement".into());
        map.insert("mainsnak".to_string(), self.claim.to_json());
        if let Some(id) = &self.id {
            map.insert("id".to_string(), id.clone().into());
        }
        map.insert("rank".to_string(), self.rank.as_wire().into());
        if !self.qualifiers.is_empty() {
            map.insert("qualifiers".to_string(), self.qualifiers.to_json());
            map.insert(
                "qualifiers-order".to_string(),
                Value::Array(
                    self.qualifiers
                        .properties()
                        .map(|p| p.as_str().into())
                        .collect(),
                ),
            );
        }
        map.insert(
            "references".to_string(),
            Value::Array(self.references.iter().map(Reference::to_json).collect()),
        );
        Value::Object(map)
    }
}

impl From<Claim> for Statement {
    fn from(claim: Claim) -> Self {
        Statement::new(claim)
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.claim == other.claim
            && self.rank == other.rank
            && self.qualifiers == other.qualifiers
            && self.references == other.references
    }
}

impl PartialEq<Claim> for Statement {
    fn eq(&self, other: &Claim) -> bool {
        self.matches_claim(other)
    }
}
