//! Language-tagged text and the per-language text holder used for lemmata,
//! labels, descriptions, representations, and glosses.

use std::fmt;

use serde_json::{Map, Value};
use wbtk_types::{Language, LanguageRegistry};

use crate::error::{ModelError, ModelResult};
use crate::wire::{as_object, str_field};

/// A string with a language attached.
///
/// Usable directly as a monolingual-text claim value, and as the entry type
/// of [`MonolingualTextHolder`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MonolingualText {
    text: String,
    language: Language,
}

impl MonolingualText {
    /// Create a language-tagged string.
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }

    /// The text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The language the text is in.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The same text retagged with another language.
    pub fn with_language(self, language: Language) -> Self {
        Self {
            text: self.text,
            language,
        }
    }

    /// Decode the wire form of a monolingualtext datavalue
    /// (`{"text": …, "language": …}`).
    pub(crate) fn from_json(
        value: &Value,
        registry: &LanguageRegistry,
    ) -> ModelResult<Self> {
        let map = as_object(value, "monolingualtext value")?;
        let text = str_field(map, "text", "monolingualtext value")?;
        let code = str_field(map, "language", "monolingualtext value")?;
        let language = registry.first(code)?.clone();
        Ok(Self::new(text, language))
    }

    /// The wire form of a monolingualtext datavalue.
    pub(crate) fn to_json(&self) -> Value {
        serde_json::json!({
            "text": self.text,
            "language": self.language.code(),
        })
    }
}

impl fmt::Display for MonolingualText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.text, self.language.code())
    }
}

/// Selects text in a holder either by language alone or by exact
/// text-and-language match.
#[derive(Clone, Debug)]
pub enum TextSelector {
    /// Any text in the given language.
    Language(Language),
    /// Exactly the given text.
    Text(MonolingualText),
}

impl TextSelector {
    fn matches(&self, text: &MonolingualText) -> bool {
        match self {
            TextSelector::Language(language) => text.language() == language,
            TextSelector::Text(wanted) => text == wanted,
        }
    }

    fn describe(&self) -> String {
        match self {
            TextSelector::Language(language) => format!("text in {}", language.code()),
            TextSelector::Text(text) => format!("text {text}"),
        }
    }
}

impl From<Language> for TextSelector {
    fn from(language: Language) -> Self {
        TextSelector::Language(language)
    }
}

impl From<MonolingualText> for TextSelector {
    fn from(text: MonolingualText) -> Self {
        TextSelector::Text(text)
    }
}

/// A set of language-tagged strings holding at most one live text per
/// language, plus the texts removed since the holder was built.
///
/// `add` overwrites any existing text in the same language (most recent
/// write wins). `remove` drops the text from the live set and remembers it
/// on the returned holder, so a later wire encode can emit an explicit
/// removal marker for that language; re-adding a language supersedes its
/// marker in the encoded output.
#[derive(Clone, Debug, Default)]
pub struct MonolingualTextHolder {
    texts: Vec<MonolingualText>,
    removed: Vec<MonolingualText>,
}

impl MonolingualTextHolder {
    /// Create an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a holder from texts; a later text in the same language as an
    /// earlier one overwrites it.
    pub fn from_texts(texts: impl IntoIterator<Item = MonolingualText>) -> Self {
        texts
            .into_iter()
            .fold(Self::new(), |holder, text| holder.add(text))
    }

    /// Look up a text by language or by exact content.
    ///
    /// Fails with [`ModelError::NotFound`] when nothing matches.
    pub fn get(&self, selector: impl Into<TextSelector>) -> ModelResult<&MonolingualText> {
        let selector = selector.into();
        self.texts
            .iter()
            .find(|text| selector.matches(text))
            .ok_or_else(|| ModelError::NotFound(selector.describe()))
    }

    /// Returns `true` if a text matches the selector.
    pub fn contains(&self, selector: impl Into<TextSelector>) -> bool {
        let selector = selector.into();
        self.texts.iter().any(|text| selector.matches(text))
    }

    /// A new holder with `text` added, replacing any live text in the same
    /// language.
    pub fn add(&self, text: MonolingualText) -> Self {
        let mut texts: Vec<MonolingualText> = self
            .texts
            .iter()
            .filter(|existing| existing.language() != text.language())
            .cloned()
            .collect();
        texts.push(text);
        Self {
            texts,
            removed: self.removed.clone(),
        }
    }

    /// A new holder with the matching text removed from the live set and
    /// recorded in the removed list. No-op (and no marker) if nothing
    /// matches.
    pub fn remove(&self, selector: impl Into<TextSelector>) -> Self {
        let selector = selector.into();
        let mut texts = Vec::with_capacity(self.texts.len());
        let mut removed = self.removed.clone();
        for text in &self.texts {
            if selector.matches(text) {
                removed.push(text.clone());
            } else {
                texts.push(text.clone());
            }
        }
        Self { texts, removed }
    }

    /// The live texts, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MonolingualText> {
        self.texts.iter()
    }

    /// Texts removed since the holder was built or last encoded.
    pub fn removed(&self) -> &[MonolingualText] {
        &self.removed
    }

    /// Number of live texts.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Returns `true` if the holder carries no live text.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Decode a per-language map of `{"language": …, "value": …}` entries
    /// (the shape of `lemmas`, `labels`, `representations`, `glosses`).
    pub(crate) fn from_json(
        map: &Map<String, Value>,
        registry: &LanguageRegistry,
    ) -> ModelResult<Self> {
        let mut texts = Vec::with_capacity(map.len());
        for (key, entry) in map {
            let entry = as_object(entry, "language-tagged text")?;
            let value = str_field(entry, "value", "language-tagged text")?;
            let code = str_field(entry, "language", "language-tagged text").unwrap_or(key);
            let language = registry.first(code)?.clone();
            texts.push(MonolingualText::new(value, language));
        }
        Ok(Self::from_texts(texts))
    }

    /// Encode to the per-language map form. Removed texts are emitted with a
    /// `remove` marker; a live text in the same language takes precedence.
    pub(crate) fn to_json(&self) -> Value {
        let mut map = Map::new();
        for text in &self.removed {
            map.insert(
                text.language().code().to_string(),
                serde_json::json!({
                    "language": text.language().code(),
                    "value": text.text(),
                    "remove": "",
                }),
            );
        }
        for text in &self.texts {
            map.insert(
                text.language().code().to_string(),
                serde_json::json!({
                    "language": text.language().code(),
                    "value": text.text(),
                }),
            );
        }
        Value::Object(map)
    }
}

impl PartialEq for MonolingualTextHolder {
    /// Equality over the live texts only (as an unordered per-language set);
    /// the removed list is wire bookkeeping.
    fn eq(&self, other: &Self) -> bool {
        self.texts.len() == other.texts.len()
            && self.texts.iter().all(|text| other.texts.contains(text))
    }
}
