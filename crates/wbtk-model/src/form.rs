//! Lexeme forms: representations, grammatical features, and statements.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use wbtk_types::{FormId, LanguageRegistry, Pid, Qid};

use crate::error::ModelResult;
use crate::holder::StatementHolder;
use crate::statement::Statement;
use crate::text::{MonolingualText, MonolingualTextHolder, TextSelector};
use crate::value::ClaimValue;
use crate::wire::as_object;

/// One edit applied to a form, routed by kind: a language-tagged text edits
/// the representations, an item id the grammatical features, a statement
/// the statement holder.
#[derive(Clone, Debug)]
pub enum FormEdit {
    Representation(MonolingualText),
    Feature(Qid),
    Statement(Statement),
}

impl From<MonolingualText> for FormEdit {
    fn from(text: MonolingualText) -> Self {
        FormEdit::Representation(text)
    }
}

impl From<Qid> for FormEdit {
    fn from(feature: Qid) -> Self {
        FormEdit::Feature(feature)
    }
}

impl From<Statement> for FormEdit {
    fn from(statement: Statement) -> Self {
        FormEdit::Statement(statement)
    }
}

/// One removal applied to a form. Symmetric with [`FormEdit`], except that
/// representations can also be removed by bare language and statements by
/// property.
#[derive(Clone, Debug)]
pub enum FormRemoval {
    Representation(TextSelector),
    Feature(Qid),
    Property(Pid),
    Statement(Statement),
}

impl From<TextSelector> for FormRemoval {
    fn from(selector: TextSelector) -> Self {
        FormRemoval::Representation(selector)
    }
}

impl From<wbtk_types::Language> for FormRemoval {
    fn from(language: wbtk_types::Language) -> Self {
        FormRemoval::Representation(TextSelector::Language(language))
    }
}

impl From<MonolingualText> for FormRemoval {
    fn from(text: MonolingualText) -> Self {
        FormRemoval::Representation(TextSelector::Text(text))
    }
}

impl From<Qid> for FormRemoval {
    fn from(feature: Qid) -> Self {
        FormRemoval::Feature(feature)
    }
}

impl From<Pid> for FormRemoval {
    fn from(property: Pid) -> Self {
        FormRemoval::Property(property)
    }
}

impl From<Statement> for FormRemoval {
    fn from(statement: Statement) -> Self {
        FormRemoval::Statement(statement)
    }
}

/// A form of a lexeme: per-language representations, a set of grammatical
/// feature items, and statements, plus the wire-only form id present when
/// the form already exists on the server.
///
/// Equality compares content only; the id is excluded.
#[derive(Clone, Debug, Default)]
pub struct LexemeForm {
    representations: MonolingualTextHolder,
    features: BTreeSet<Qid>,
    statements: StatementHolder,
    id: Option<FormId>,
}

impl LexemeForm {
    /// Create a fresh (unpublished) form.
    pub fn new(
        representations: MonolingualTextHolder,
        features: impl IntoIterator<Item = Qid>,
        statements: StatementHolder,
    ) -> Self {
        Self {
            representations,
            features: features.into_iter().collect(),
            statements,
            id: None,
        }
    }

    /// The per-language representations.
    pub fn representations(&self) -> &MonolingualTextHolder {
        &self.representations
    }

    /// The grammatical feature items.
    pub fn features(&self) -> &BTreeSet<Qid> {
        &self.features
    }

    /// The statements.
    pub fn statements(&self) -> &StatementHolder {
        &self.statements
    }

    /// The server-assigned form id, when built from the wire.
    pub fn id(&self) -> Option<&FormId> {
        self.id.as_ref()
    }

    /// Apply an edit. The form id is preserved verbatim.
    pub fn add(&self, edit: impl Into<FormEdit>) -> Self {
        let mut form = self.clone();
        match edit.into() {
            FormEdit::Representation(text) => {
                form.representations = form.representations.add(text);
            }
            FormEdit::Feature(feature) => {
                form.features.insert(feature);
            }
            FormEdit::Statement(statement) => {
                form.statements = form.statements.add(statement);
            }
        }
        form
    }

    /// Apply a removal. The form id is preserved verbatim.
    pub fn sub(&self, removal: impl Into<FormRemoval>) -> Self {
        let mut form = self.clone();
        match removal.into() {
            FormRemoval::Representation(selector) => {
                form.representations = form.representations.remove(selector);
            }
            FormRemoval::Feature(feature) => {
                form.features.remove(&feature);
            }
            FormRemoval::Property(property) => {
                form.statements = form.statements.remove_property(&property);
            }
            FormRemoval::Statement(statement) => {
                form.statements = form.statements.remove(&statement);
            }
        }
        form
    }

    /// The `haswbstatement` query over this form's statements.
    pub fn has_statement(&self, property: &Pid, value: Option<&ClaimValue>) -> bool {
        self.statements.has_statement(property, value)
    }

    /// Decode a wire form object.
    pub fn from_json(value: &Value, registry: &LanguageRegistry) -> ModelResult<Self> {
        let map = as_object(value, "form")?;
        let representations = match map.get("representations") {
            Some(representations) => MonolingualTextHolder::from_json(
                as_object(representations, "representations")?,
                registry,
            )?,
            None => MonolingualTextHolder::new(),
        };
        let mut features = BTreeSet::new();
        if let Some(list) = map.get("grammaticalFeatures").and_then(Value::as_array) {
            for feature in list {
                if let Some(feature) = feature.as_str() {
                    features.insert(Qid::new(feature)?);
                }
            }
        }
        let statements = match map.get("claims") {
            Some(claims) => {
                StatementHolder::from_json(as_object(claims, "form claims")?, registry)?
            }
            None => StatementHolder::new(),
        };
        let id = map
            .get("id")
            .and_then(Value::as_str)
            .map(FormId::new)
            .transpose()?;
        Ok(Self {
            representations,
            features,
            statements,
            id,
        })
    }

    /// Encode to the wire form object. An unpublished form signals
    /// creation with `"add": ""` in place of an id; empty statements are
    /// omitted.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "representations".to_string(),
            self.representations.to_json(),
        );
        map.insert(
            "grammaticalFeatures".to_string(),
            Value::Array(self.features.iter().map(|q| q.as_str().into()).collect()),
        );
        match &self.id {
            Some(id) => {
                map.insert("id".to_string(), id.as_str().into());
            }
            None => {
                map.insert("add".to_string(), "".into());
            }
        }
        if !self.statements.is_empty() {
            map.insert("claims".to_string(), self.statements.to_json());
        }
        Value::Object(map)
    }
}

impl PartialEq for LexemeForm {
    fn eq(&self, other: &Self) -> bool {
        self.representations == other.representations
            && self.features == other.features
            && self.statements == other.statements
    }
}
