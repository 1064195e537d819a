//! Items: labels, descriptions, aliases, statements, and sitelinks.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wbtk_types::{Language, LanguageRegistry, Pid, Qid};

use crate::error::{ModelError, ModelResult};
use crate::holder::StatementHolder;
use crate::statement::Statement;
use crate::text::{MonolingualText, MonolingualTextHolder, TextSelector};
use crate::value::ClaimValue;
use crate::wire::{as_object, str_field, u64_field};

/// A link from an item to a page on a client wiki. Modeled superficially:
/// the fields round-trip but carry no link-editing semantics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sitelink {
    pub site: String,
    pub title: String,
    #[serde(default)]
    pub badges: Vec<Qid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Server-assigned metadata carried by an item that already exists
/// remotely. All fields are populated together or the bundle is absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemMeta {
    pub page_id: u64,
    pub namespace: i64,
    pub title: String,
    pub last_revid: u64,
    pub modified: DateTime<Utc>,
    pub entity_type: String,
    pub id: Qid,
}

impl ItemMeta {
    fn from_json(map: &Map<String, Value>) -> ModelResult<Option<Self>> {
        if !map.contains_key("pageid") {
            return Ok(None);
        }
        let modified = str_field(map, "modified", "item")?;
        let modified = DateTime::parse_from_rfc3339(modified)
            .map_err(|e| {
                ModelError::MalformedDocument(format!("bad modified timestamp {modified:?}: {e}"))
            })?
            .with_timezone(&Utc);
        Ok(Some(Self {
            page_id: u64_field(map, "pageid", "item")?,
            namespace: map.get("ns").and_then(Value::as_i64).ok_or_else(|| {
                ModelError::MalformedDocument("item is missing integer field \"ns\"".into())
            })?,
            title: str_field(map, "title", "item")?.to_string(),
            last_revid: u64_field(map, "lastrevid", "item")?,
            modified,
            entity_type: str_field(map, "type", "item")?.to_string(),
            id: Qid::new(str_field(map, "id", "item")?)?,
        }))
    }
}

/// An item: labels, descriptions, and aliases per language, statements, and
/// sitelinks, plus the all-or-nothing published-settings bundle.
///
/// Statements are edited through `add`/`sub`; labels and descriptions have
/// their own named operations because a bare language-tagged text would be
/// ambiguous between the two holders.
#[derive(Clone, Debug, Default)]
pub struct Item {
    labels: MonolingualTextHolder,
    descriptions: MonolingualTextHolder,
    aliases: BTreeMap<String, BTreeSet<String>>,
    statements: StatementHolder,
    sitelinks: BTreeMap<String, Sitelink>,
    meta: Option<ItemMeta>,
}

impl Item {
    /// Create a fresh (unpublished) empty item.
    pub fn new() -> Self {
        Self::default()
    }

    /// The item with the given labels.
    pub fn with_labels(mut self, labels: MonolingualTextHolder) -> Self {
        self.labels = labels;
        self
    }

    /// The item with the given descriptions.
    pub fn with_descriptions(mut self, descriptions: MonolingualTextHolder) -> Self {
        self.descriptions = descriptions;
        self
    }

    /// The item with the given statements.
    pub fn with_statements(mut self, statements: StatementHolder) -> Self {
        self.statements = statements;
        self
    }

    /// The per-language labels.
    pub fn labels(&self) -> &MonolingualTextHolder {
        &self.labels
    }

    /// The per-language descriptions.
    pub fn descriptions(&self) -> &MonolingualTextHolder {
        &self.descriptions
    }

    /// Alias strings per language code.
    pub fn aliases(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.aliases
    }

    /// The statements.
    pub fn statements(&self) -> &StatementHolder {
        &self.statements
    }

    /// Sitelinks keyed by site id.
    pub fn sitelinks(&self) -> &BTreeMap<String, Sitelink> {
        &self.sitelinks
    }

    /// The published-settings bundle, present only for items that exist on
    /// the server.
    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref()
    }

    /// A new item with the statement added. Published settings are
    /// preserved verbatim.
    pub fn add(&self, statement: Statement) -> Self {
        Self {
            statements: self.statements.add(statement),
            ..self.clone()
        }
    }

    /// A new item with the first exactly-equal statement removed.
    pub fn sub(&self, statement: &Statement) -> Self {
        Self {
            statements: self.statements.remove(statement),
            ..self.clone()
        }
    }

    /// The label in the given language.
    pub fn label(&self, language: Language) -> ModelResult<&MonolingualText> {
        self.labels.get(language)
    }

    /// The description in the given language.
    pub fn description(&self, language: Language) -> ModelResult<&MonolingualText> {
        self.descriptions.get(language)
    }

    /// A new item with the label added, overwriting any label in that
    /// language.
    pub fn add_label(&self, label: MonolingualText) -> Self {
        Self {
            labels: self.labels.add(label),
            ..self.clone()
        }
    }

    /// A new item with the matching label removed.
    pub fn remove_label(&self, selector: impl Into<TextSelector>) -> Self {
        Self {
            labels: self.labels.remove(selector),
            ..self.clone()
        }
    }

    /// A new item with the description added, overwriting any description
    /// in that language.
    pub fn add_description(&self, description: MonolingualText) -> Self {
        Self {
            descriptions: self.descriptions.add(description),
            ..self.clone()
        }
    }

    /// A new item with the matching description removed.
    pub fn remove_description(&self, selector: impl Into<TextSelector>) -> Self {
        Self {
            descriptions: self.descriptions.remove(selector),
            ..self.clone()
        }
    }

    /// The `haswbstatement` query over this item's statements.
    pub fn has_statement(&self, property: &Pid, value: Option<&ClaimValue>) -> bool {
        self.statements.has_statement(property, value)
    }

    /// Decode a wire item document.
    pub fn from_json(value: &Value, registry: &LanguageRegistry) -> ModelResult<Self> {
        let map = as_object(value, "item")?;
        let labels = match map.get("labels") {
            Some(labels) => {
                MonolingualTextHolder::from_json(as_object(labels, "labels")?, registry)?
            }
            None => MonolingualTextHolder::new(),
        };
        let descriptions = match map.get("descriptions") {
            Some(descriptions) => MonolingualTextHolder::from_json(
                as_object(descriptions, "descriptions")?,
                registry,
            )?,
            None => MonolingualTextHolder::new(),
        };

        let mut aliases: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        if let Some(alias_map) = map.get("aliases").and_then(Value::as_object) {
            for (code, list) in alias_map {
                let entries = aliases.entry(code.clone()).or_default();
                for alias in list.as_array().into_iter().flatten() {
                    if let Some(value) = alias.get("value").and_then(Value::as_str) {
                        entries.insert(value.to_string());
                    }
                }
            }
        }

        let statements = match map.get("claims") {
            Some(claims) => {
                StatementHolder::from_json(as_object(claims, "item claims")?, registry)?
            }
            None => StatementHolder::new(),
        };

        let mut sitelinks = BTreeMap::new();
        if let Some(links) = map.get("sitelinks").and_then(Value::as_object) {
            for (site, link) in links {
                let link: Sitelink = serde_json::from_value(link.clone()).map_err(|e| {
                    ModelError::MalformedDocument(format!("bad sitelink for {site:?}: {e}"))
                })?;
                sitelinks.insert(site.clone(), link);
            }
        }

        Ok(Self {
            labels,
            descriptions,
            aliases,
            statements,
            sitelinks,
            meta: ItemMeta::from_json(map)?,
        })
    }

    /// Encode to the wire item document, symmetric with [`Item::from_json`].
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), "item".into());
        map.insert("labels".to_string(), self.labels.to_json());
        map.insert("descriptions".to_string(), self.descriptions.to_json());

        let mut alias_map = Map::new();
        for (code, entries) in &self.aliases {
            alias_map.insert(
                code.clone(),
                Value::Array(
                    entries
                        .iter()
                        .map(|value| {
                            serde_json::json!({"language": code, "value": value})
                        })
                        .collect(),
                ),
            );
        }
        map.insert("aliases".to_string(), Value::Object(alias_map));

        map.insert("claims".to_string(), self.statements.to_json());

        let mut link_map = Map::new();
        for (site, link) in &self.sitelinks {
            let mut obj = Map::new();
            obj.insert("site".to_string(), link.site.clone().into());
            obj.insert("title".to_string(), link.title.clone().into());
            obj.insert(
                "badges".to_string(),
                Value::Array(link.badges.iter().map(|q| q.as_str().into()).collect()),
            );
            if let Some(url) = &link.url {
                obj.insert("url".to_string(), url.clone().into());
            }
            link_map.insert(site.clone(), Value::Object(obj));
        }
        map.insert("sitelinks".to_string(), Value::Object(link_map));

        if let Some(meta) = &self.meta {
            map.insert("id".to_string(), meta.id.as_str().into());
            map.insert("lastrevid".to_string(), meta.last_revid.into());
        }
        Value::Object(map)
    }
}

impl PartialEq for Item {
    /// Equality over content; the published-settings bundle is excluded.
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels
            && self.descriptions == other.descriptions
            && self.aliases == other.aliases
            && self.statements == other.statements
            && self.sitelinks == other.sitelinks
    }
}
