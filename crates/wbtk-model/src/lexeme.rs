//! Lexemes: the aggregate root for lemmata, statements, senses, and forms.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use wbtk_types::{Fid, FormId, Language, LanguageRegistry, Lid, Pid, Qid, SenseId, Sid};

use crate::error::{ModelError, ModelResult};
use crate::form::LexemeForm;
use crate::holder::StatementHolder;
use crate::sense::LexemeSense;
use crate::statement::Statement;
use crate::text::{MonolingualText, MonolingualTextHolder, TextSelector};
use crate::value::ClaimValue;
use crate::wire::{as_object, str_field, u64_field};

/// Server-assigned metadata carried by a lexeme that already exists
/// remotely. All fields are populated together or the bundle is absent;
/// partial publication state is not representable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexemeMeta {
    pub page_id: u64,
    pub namespace: i64,
    pub title: String,
    pub last_revid: u64,
    pub modified: DateTime<Utc>,
    pub entity_type: String,
    pub id: Lid,
}

impl LexemeMeta {
    /// Decode the published-settings portion of a lexeme document: absent
    /// when the document has no `pageid`, complete otherwise.
    fn from_json(map: &Map<String, Value>) -> ModelResult<Option<Self>> {
        if !map.contains_key("pageid") {
            return Ok(None);
        }
        let modified = str_field(map, "modified", "lexeme")?;
        let modified = DateTime::parse_from_rfc3339(modified)
            .map_err(|e| {
                ModelError::MalformedDocument(format!("bad modified timestamp {modified:?}: {e}"))
            })?
            .with_timezone(&Utc);
        Ok(Some(Self {
            page_id: u64_field(map, "pageid", "lexeme")?,
            namespace: map.get("ns").and_then(Value::as_i64).ok_or_else(|| {
                ModelError::MalformedDocument("lexeme is missing integer field \"ns\"".into())
            })?,
            title: str_field(map, "title", "lexeme")?.to_string(),
            last_revid: u64_field(map, "lastrevid", "lexeme")?,
            modified,
            entity_type: str_field(map, "type", "lexeme")?.to_string(),
            id: Lid::new(str_field(map, "id", "lexeme")?)?,
        }))
    }
}

/// One edit applied to a lexeme, routed by kind.
#[derive(Clone, Debug)]
pub enum LexemeEdit {
    Statement(Statement),
    Sense(LexemeSense),
    Form(LexemeForm),
    Lemma(MonolingualText),
}

impl From<Statement> for LexemeEdit {
    fn from(statement: Statement) -> Self {
        LexemeEdit::Statement(statement)
    }
}

impl From<LexemeSense> for LexemeEdit {
    fn from(sense: LexemeSense) -> Self {
        LexemeEdit::Sense(sense)
    }
}

impl From<LexemeForm> for LexemeEdit {
    fn from(form: LexemeForm) -> Self {
        LexemeEdit::Form(form)
    }
}

impl From<MonolingualText> for LexemeEdit {
    fn from(text: MonolingualText) -> Self {
        LexemeEdit::Lemma(text)
    }
}

/// One removal applied to a lexeme. Symmetric with [`LexemeEdit`], except
/// lemmata can also be removed by bare language.
#[derive(Clone, Debug)]
pub enum LexemeRemoval {
    Statement(Statement),
    Sense(LexemeSense),
    Form(LexemeForm),
    Lemma(TextSelector),
}

impl From<Statement> for LexemeRemoval {
    fn from(statement: Statement) -> Self {
        LexemeRemoval::Statement(statement)
    }
}

impl From<LexemeSense> for LexemeRemoval {
    fn from(sense: LexemeSense) -> Self {
        LexemeRemoval::Sense(sense)
    }
}

impl From<LexemeForm> for LexemeRemoval {
    fn from(form: LexemeForm) -> Self {
        LexemeRemoval::Form(form)
    }
}

impl From<MonolingualText> for LexemeRemoval {
    fn from(text: MonolingualText) -> Self {
        LexemeRemoval::Lemma(TextSelector::Text(text))
    }
}

impl From<Language> for LexemeRemoval {
    fn from(language: Language) -> Self {
        LexemeRemoval::Lemma(TextSelector::Language(language))
    }
}

impl From<TextSelector> for LexemeRemoval {
    fn from(selector: TextSelector) -> Self {
        LexemeRemoval::Lemma(selector)
    }
}

/// A lexeme: per-language lemmata, the lexeme's language and lexical
/// category, statements, and ordered sense and form lists, plus the
/// all-or-nothing published-settings bundle for lexemes that already exist
/// on the server.
///
/// Every edit operator returns a new lexeme carrying the same published
/// settings as its source — edits target the same remote entity until the
/// caller pushes and rebuilds.
#[derive(Clone, Debug)]
pub struct Lexeme {
    lemmata: MonolingualTextHolder,
    language: Language,
    category: Qid,
    statements: StatementHolder,
    senses: Vec<LexemeSense>,
    forms: Vec<LexemeForm>,
    meta: Option<LexemeMeta>,
}

impl Lexeme {
    /// Create a fresh (unpublished) lexeme with no statements, senses, or
    /// forms.
    pub fn new(lemmata: MonolingualTextHolder, language: Language, category: Qid) -> Self {
        Self {
            lemmata,
            language,
            category,
            statements: StatementHolder::new(),
            senses: Vec::new(),
            forms: Vec::new(),
            meta: None,
        }
    }

    /// The lexeme with the given statements.
    pub fn with_statements(mut self, statements: StatementHolder) -> Self {
        self.statements = statements;
        self
    }

    /// The lexeme with the given senses.
    pub fn with_senses(mut self, senses: Vec<LexemeSense>) -> Self {
        self.senses = senses;
        self
    }

    /// The lexeme with the given forms.
    pub fn with_forms(mut self, forms: Vec<LexemeForm>) -> Self {
        self.forms = forms;
        self
    }

    /// The per-language lemmata.
    pub fn lemmata(&self) -> &MonolingualTextHolder {
        &self.lemmata
    }

    /// The language of the lexeme (a single language, not per-lemma).
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The lexical category item.
    pub fn category(&self) -> &Qid {
        &self.category
    }

    /// The statements.
    pub fn statements(&self) -> &StatementHolder {
        &self.statements
    }

    /// The senses, in order.
    pub fn senses(&self) -> &[LexemeSense] {
        &self.senses
    }

    /// The forms, in order.
    pub fn forms(&self) -> &[LexemeForm] {
        &self.forms
    }

    /// The published-settings bundle, present only for lexemes that exist
    /// on the server.
    pub fn meta(&self) -> Option<&LexemeMeta> {
        self.meta.as_ref()
    }

    /// Apply an edit. Published settings are preserved verbatim.
    pub fn add(&self, edit: impl Into<LexemeEdit>) -> Self {
        let mut lexeme = self.clone();
        match edit.into() {
            LexemeEdit::Statement(statement) => {
                lexeme.statements = lexeme.statements.add(statement);
            }
            LexemeEdit::Sense(sense) => lexeme.senses.push(sense),
            LexemeEdit::Form(form) => lexeme.forms.push(form),
            LexemeEdit::Lemma(text) => {
                lexeme.lemmata = lexeme.lemmata.add(text);
            }
        }
        lexeme
    }

    /// Apply a removal. Published settings are preserved verbatim; removing
    /// something absent is a no-op.
    pub fn sub(&self, removal: impl Into<LexemeRemoval>) -> Self {
        let mut lexeme = self.clone();
        match removal.into() {
            LexemeRemoval::Statement(statement) => {
                lexeme.statements = lexeme.statements.remove(&statement);
            }
            LexemeRemoval::Sense(sense) => {
                if let Some(index) = lexeme.senses.iter().position(|s| s == &sense) {
                    lexeme.senses.remove(index);
                }
            }
            LexemeRemoval::Form(form) => {
                if let Some(index) = lexeme.forms.iter().position(|f| f == &form) {
                    lexeme.forms.remove(index);
                }
            }
            LexemeRemoval::Lemma(selector) => {
                lexeme.lemmata = lexeme.lemmata.remove(selector);
            }
        }
        lexeme
    }

    /// The `haswbstatement` query over this lexeme's statements.
    pub fn has_statement(&self, property: &Pid, value: Option<&ClaimValue>) -> bool {
        self.statements.has_statement(property, value)
    }

    /// Look up a form by its composite id (linear scan over the wire-only
    /// ids). Fails with [`ModelError::NotFound`] when no published form
    /// matches.
    pub fn form(&self, id: &FormId) -> ModelResult<&LexemeForm> {
        self.forms
            .iter()
            .find(|form| form.id() == Some(id))
            .ok_or_else(|| ModelError::NotFound(format!("form {id}")))
    }

    /// Look up a sense by its composite id.
    pub fn sense(&self, id: &SenseId) -> ModelResult<&LexemeSense> {
        self.senses
            .iter()
            .find(|sense| sense.id() == Some(id))
            .ok_or_else(|| ModelError::NotFound(format!("sense {id}")))
    }

    /// Resolve a bare local suffix (`F1`) against this lexeme's own id and
    /// look the form up. Only published lexemes can resolve suffixes.
    pub fn form_by_suffix(&self, suffix: &Fid) -> ModelResult<&LexemeForm> {
        match &self.meta {
            Some(meta) => self.form(&FormId::from_parts(&meta.id, suffix)),
            None => Err(ModelError::NotFound(format!(
                "form {suffix} on an unpublished lexeme"
            ))),
        }
    }

    /// Resolve a bare local suffix (`S1`) against this lexeme's own id and
    /// look the sense up.
    pub fn sense_by_suffix(&self, suffix: &Sid) -> ModelResult<&LexemeSense> {
        match &self.meta {
            Some(meta) => self.sense(&SenseId::from_parts(&meta.id, suffix)),
            None => Err(ModelError::NotFound(format!(
                "sense {suffix} on an unpublished lexeme"
            ))),
        }
    }

    /// Forms carrying every feature in `inflections` and none in
    /// `exclusions`.
    pub fn forms_with_features(
        &self,
        inflections: &[Qid],
        exclusions: &[Qid],
    ) -> Vec<&LexemeForm> {
        self.forms
            .iter()
            .filter(|form| inflections.iter().all(|q| form.features().contains(q)))
            .filter(|form| !exclusions.iter().any(|q| form.features().contains(q)))
            .collect()
    }

    /// Decode a wire lexeme document.
    pub fn from_json(value: &Value, registry: &LanguageRegistry) -> ModelResult<Self> {
        let map = as_object(value, "lexeme")?;
        let lemmata = match map.get("lemmas") {
            Some(lemmas) => {
                MonolingualTextHolder::from_json(as_object(lemmas, "lemmas")?, registry)?
            }
            None => MonolingualTextHolder::new(),
        };
        let category = Qid::new(str_field(map, "lexicalCategory", "lexeme")?)?;
        let language_item = Qid::new(str_field(map, "language", "lexeme")?)?;
        let language = registry.first(language_item.as_str())?.clone();
        let statements = match map.get("claims") {
            Some(claims) => {
                StatementHolder::from_json(as_object(claims, "lexeme claims")?, registry)?
            }
            None => StatementHolder::new(),
        };
        let mut senses = Vec::new();
        if let Some(list) = map.get("senses").and_then(Value::as_array) {
            for sense in list {
                senses.push(LexemeSense::from_json(sense, registry)?);
            }
        }
        let mut forms = Vec::new();
        if let Some(list) = map.get("forms").and_then(Value::as_array) {
            for form in list {
                forms.push(LexemeForm::from_json(form, registry)?);
            }
        }
        let meta = LexemeMeta::from_json(map)?;
        Ok(Self {
            lemmata,
            language,
            category,
            statements,
            senses,
            forms,
            meta,
        })
    }

    /// Encode to the wire lexeme document. A published lexeme carries its
    /// id and base revision so the server can detect edit conflicts.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), "lexeme".into());
        map.insert(
            "lexicalCategory".to_string(),
            self.category.as_str().into(),
        );
        map.insert(
            "language".to_string(),
            self.language.item().as_str().into(),
        );
        map.insert("lemmas".to_string(), self.lemmata.to_json());
        map.insert("claims".to_string(), self.statements.to_json());
        map.insert(
            "forms".to_string(),
            Value::Array(self.forms.iter().map(LexemeForm::to_json).collect()),
        );
        map.insert(
            "senses".to_string(),
            Value::Array(self.senses.iter().map(LexemeSense::to_json).collect()),
        );
        if let Some(meta) = &self.meta {
            map.insert("id".to_string(), meta.id.as_str().into());
            map.insert("lastrevid".to_string(), meta.last_revid.into());
        }
        Value::Object(map)
    }
}

impl PartialEq for Lexeme {
    /// Equality over content; the published-settings bundle is excluded.
    fn eq(&self, other: &Self) -> bool {
        self.lemmata == other.lemmata
            && self.language == other.language
            && self.category == other.category
            && self.statements == other.statements
            && self.senses == other.senses
            && self.forms == other.forms
    }
}
