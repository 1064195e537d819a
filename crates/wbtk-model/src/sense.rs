//! Lexeme senses: glosses and statements.

use serde_json::{Map, Value};
use wbtk_types::{LanguageRegistry, Pid, SenseId};

use crate::error::ModelResult;
use crate::holder::StatementHolder;
use crate::statement::Statement;
use crate::text::{MonolingualText, MonolingualTextHolder, TextSelector};
use crate::value::ClaimValue;
use crate::wire::as_object;

/// One edit applied to a sense: a language-tagged text edits the glosses, a
/// statement the statement holder.
#[derive(Clone, Debug)]
pub enum SenseEdit {
    Gloss(MonolingualText),
    Statement(Statement),
}

impl From<MonolingualText> for SenseEdit {
    fn from(text: MonolingualText) -> Self {
        SenseEdit::Gloss(text)
    }
}

impl From<Statement> for SenseEdit {
    fn from(statement: Statement) -> Self {
        SenseEdit::Statement(statement)
    }
}

/// One removal applied to a sense. Symmetric with [`SenseEdit`], except
/// that glosses can also be removed by bare language and statements by
/// property.
#[derive(Clone, Debug)]
pub enum SenseRemoval {
    Gloss(TextSelector),
    Property(Pid),
    Statement(Statement),
}

impl From<TextSelector> for SenseRemoval {
    fn from(selector: TextSelector) -> Self {
        SenseRemoval::Gloss(selector)
    }
}

impl From<wbtk_types::Language> for SenseRemoval {
    fn from(language: wbtk_types::Language) -> Self {
        SenseRemoval::Gloss(TextSelector::Language(language))
    }
}

impl From<MonolingualText> for SenseRemoval {
    fn from(text: MonolingualText) -> Self {
        SenseRemoval::Gloss(TextSelector::Text(text))
    }
}

impl From<Pid> for SenseRemoval {
    fn from(property: Pid) -> Self {
        SenseRemoval::Property(property)
    }
}

impl From<Statement> for SenseRemoval {
    fn from(statement: Statement) -> Self {
        SenseRemoval::Statement(statement)
    }
}

/// A sense of a lexeme: per-language glosses and statements, plus the
/// wire-only sense id present when the sense already exists on the server.
///
/// Equality compares content only; the id is excluded.
#[derive(Clone, Debug, Default)]
pub struct LexemeSense {
    glosses: MonolingualTextHolder,
    statements: StatementHolder,
    id: Option<SenseId>,
}

impl LexemeSense {
    /// Create a fresh (unpublished) sense.
    pub fn new(glosses: MonolingualTextHolder, statements: StatementHolder) -> Self {
        Self {
            glosses,
            statements,
            id: None,
        }
    }

    /// The per-language glosses.
    pub fn glosses(&self) -> &MonolingualTextHolder {
        &self.glosses
    }

    /// The statements.
    pub fn statements(&self) -> &StatementHolder {
        &self.statements
    }

    /// The server-assigned sense id, when built from the wire.
    pub fn id(&self) -> Option<&SenseId> {
        self.id.as_ref()
    }

    /// Apply an edit. The sense id is preserved verbatim.
    pub fn add(&self, edit: impl Into<SenseEdit>) -> Self {
        let mut sense = self.clone();
        match edit.into() {
            SenseEdit::Gloss(text) => {
                sense.glosses = sense.glosses.add(text);
            }
            SenseEdit::Statement(statement) => {
                sense.statements = sense.statements.add(statement);
            }
        }
        sense
    }

    /// Apply a removal. The sense id is preserved verbatim.
    pub fn sub(&self, removal: impl Into<SenseRemoval>) -> Self {
        let mut sense = self.clone();
        match removal.into() {
            SenseRemoval::Gloss(selector) => {
                sense.glosses = sense.glosses.remove(selector);
            }
            SenseRemoval::Property(property) => {
                sense.statements = sense.statements.remove_property(&property);
            }
            SenseRemoval::Statement(statement) => {
                sense.statements = sense.statements.remove(&statement);
            }
        }
        sense
    }

    /// The `haswbstatement` query over this sense's statements.
    pub fn has_statement(&self, property: &Pid, value: Option<&ClaimValue>) -> bool {
        self.statements.has_statement(property, value)
    }

    /// Decode a wire sense object.
    pub fn from_json(value: &Value, registry: &LanguageRegistry) -> ModelResult<Self> {
        let map = as_object(value, "sense")?;
        let glosses = match map.get("glosses") {
            Some(glosses) => {
                MonolingualTextHolder::from_json(as_object(glosses, "glosses")?, registry)?
            }
            None => MonolingualTextHolder::new(),
        };
        let statements = match map.get("claims") {
            Some(claims) => {
                StatementHolder::from_json(as_object(claims, "sense claims")?, registry)?
            }
            None => StatementHolder::new(),
        };
        let id = map
            .get("id")
            .and_then(Value::as_str)
            .map(SenseId::new)
            .transpose()?;
        Ok(Self {
            glosses,
            statements,
            id,
        })
    }

    /// Encode to the wire sense object. An unpublished sense signals
    /// creation with `"add": ""` in place of an id; empty statements are
    /// omitted.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("glosses".to_string(), self.glosses.to_json());
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

impl PartialEq for LexemeSense {
    fn eq(&self, other: &Self) -> bool {
        self.glosses == other.glosses && self.statements == other.statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::Claim;
    use crate::datatype::Datatype;
    use serde_json::json;
    use wbtk_types::{registry, EntityId, Qid};

    fn gloss(text: &str, code: &str) -> MonolingualText {
        MonolingualText::new(text, registry().first(code).unwrap().clone())
    }

    fn item_statement(property: &str, item: &str) -> Statement {
        let claim = Claim::new(
            Pid::new(property).unwrap(),
            Datatype::WikibaseItem,
            EntityId::Item(Qid::new(item).unwrap()),
        )
        .unwrap();
        Statement::new(claim)
    }

    fn animal_sense() -> LexemeSense {
        LexemeSense::new(
            MonolingualTextHolder::from_texts([gloss("domesticated animal", "en")]),
            StatementHolder::new(),
        )
    }

    // -----------------------------------------------------------------------
    // Edit routing
    // -----------------------------------------------------------------------

    #[test]
    fn adding_a_gloss_routes_to_the_text_holder() {
        let sense = animal_sense().add(gloss("Haustier", "de"));
        assert_eq!(sense.glosses().len(), 2);
        assert!(sense.statements().is_empty());
    }

    #[test]
    fn adding_a_statement_routes_to_the_statement_holder() {
        let sense = animal_sense().add(item_statement("P5137", "Q144"));
        assert_eq!(sense.statements().len(), 1);
        assert_eq!(sense.glosses().len(), 1);
    }

    #[test]
    fn removal_routes_by_kind() {
        let sense = animal_sense().add(item_statement("P5137", "Q144"));

        let en = registry().first("en").unwrap().clone();
        let without_gloss = sense.sub(en);
        assert!(without_gloss.glosses().is_empty());

        let without_property = sense.sub(Pid::new("P5137").unwrap());
        assert!(without_property.statements().is_empty());

        let without_statement = sense.sub(item_statement("P5137", "Q144"));
        assert!(without_statement.statements().is_empty());
    }

    #[test]
    fn gloss_overwrite_in_same_language() {
        let sense = animal_sense().add(gloss("pet animal", "en"));
        assert_eq!(sense.glosses().len(), 1);
        let en = registry().first("en").unwrap().clone();
        assert_eq!(sense.glosses().get(en).unwrap().text(), "pet animal");
    }

    // -----------------------------------------------------------------------
    // Equality & wire codec
    // -----------------------------------------------------------------------

    #[test]
    fn equality_excludes_the_wire_id() {
        let published = json!({
            "id": "L1-S1",
            "glosses": {"en": {"language": "en", "value": "domesticated animal"}},
            "claims": {},
        });
        let built = LexemeSense::from_json(&published, registry()).unwrap();
        assert_eq!(built, animal_sense());
        assert_eq!(built.id().unwrap().as_str(), "L1-S1");
    }

    #[test]
    fn unpublished_sense_signals_creation() {
        let json = animal_sense().to_json();
        assert_eq!(json["add"], "");
        assert!(json.get("id").is_none());
        assert!(json.get("claims").is_none());
    }

    #[test]
    fn sense_roundtrip() {
        let sense = animal_sense().add(item_statement("P5137", "Q144"));
        let back = LexemeSense::from_json(&sense.to_json(), registry()).unwrap();
        assert_eq!(back, sense);
    }

    #[test]
    fn edits_preserve_the_wire_id() {
        let published = json!({
            "id": "L1-S1",
            "glosses": {"en": {"language": "en", "value": "domesticated animal"}},
        });
        let built = LexemeSense::from_json(&published, registry()).unwrap();
        let edited = built.add(item_statement("P5137", "Q144"));
        assert_eq!(edited.id().unwrap().as_str(), "L1-S1");
    }
}
