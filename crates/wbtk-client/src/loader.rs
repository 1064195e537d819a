//! Cache-through entity loading.

use serde_json::Value;
use tracing::{debug, warn};
use wbtk_cache::EntityCache;
use wbtk_model::{Datatype, DatatypeSource, Item, Lexeme, ModelError, ModelResult};
use wbtk_types::{EntityId, LanguageRegistry, Lid, Pid, Qid};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::fetch_entities;

/// Loads entities by id, serving from the cache when fresh and fetching
/// (then re-caching) otherwise.
///
/// Also resolves property datatypes the same way, which makes the loader a
/// [`DatatypeSource`] for claim construction.
pub struct EntityLoader<'r, C: EntityCache> {
    config: ClientConfig,
    cache: C,
    registry: &'r LanguageRegistry,
}

impl<'r, C: EntityCache> EntityLoader<'r, C> {
    /// Create a loader over a cache and a language registry.
    pub fn new(config: ClientConfig, cache: C, registry: &'r LanguageRegistry) -> Self {
        Self {
            config,
            cache,
            registry,
        }
    }

    /// The underlying cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// The raw document for any entity: cache hit if fresh, otherwise a
    /// fetch followed by a store.
    pub fn entity_json(&self, id: &EntityId) -> ClientResult<Value> {
        if let Some(document) = self.cache.load_if_fresh(id)? {
            return Ok(document);
        }
        debug!(id = %id, "cache miss, fetching");
        let mut entities = fetch_entities(&self.config, std::slice::from_ref(id))?;
        let document = entities.remove(id.as_str()).ok_or_else(|| {
            ClientError::UnexpectedResponse(format!("no entity {id} in fetch response"))
        })?;
        self.cache.store(id, &document)?;
        Ok(document)
    }

    /// Load and build the lexeme with the given id.
    pub fn lexeme(&self, id: &Lid) -> ClientResult<Lexeme> {
        let document = self.entity_json(&EntityId::Lexeme(id.clone()))?;
        Ok(Lexeme::from_json(&document, self.registry)?)
    }

    /// Load and build the item with the given id.
    pub fn item(&self, id: &Qid) -> ClientResult<Item> {
        let document = self.entity_json(&EntityId::Item(id.clone()))?;
        Ok(Item::from_json(&document, self.registry)?)
    }

    /// Resolve a property's declared datatype from its entity document.
    pub fn property_datatype(&self, property: &Pid) -> ClientResult<Datatype> {
        let document = self.entity_json(&EntityId::Property(property.clone()))?;
        let name = document
            .get("datatype")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ClientError::UnexpectedResponse(format!("{property} document has no datatype"))
            })?;
        Datatype::from_wire(name).ok_or_else(|| {
            ClientError::UnexpectedResponse(format!("unknown datatype {name:?} on {property}"))
        })
    }
}

impl<C: EntityCache> DatatypeSource for EntityLoader<'_, C> {
    fn datatype(&self, property: &Pid) -> ModelResult<Datatype> {
        self.property_datatype(property).map_err(|e| {
            warn!(property = %property, error = %e, "datatype resolution failed");
            ModelError::UnknownDatatype(property.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wbtk_cache::MemoryCache;
    use wbtk_types::registry;

    fn loader_with(
        entries: &[(&str, Value)],
    ) -> EntityLoader<'static, MemoryCache> {
        let cache = MemoryCache::new();
        for (id, document) in entries {
            cache
                .store(&EntityId::parse(id).unwrap(), document)
                .unwrap();
        }
        EntityLoader::new(ClientConfig::default(), cache, registry())
    }

    #[test]
    fn cached_documents_are_served_without_fetching() {
        let loader = loader_with(&[("L1", json!({"id": "L1"}))]);
        let document = loader
            .entity_json(&EntityId::parse("L1").unwrap())
            .unwrap();
        assert_eq!(document, json!({"id": "L1"}));
    }

    #[test]
    fn lexeme_builds_from_the_cached_document() {
        let loader = loader_with(&[(
            "L1",
            json!({
                "lemmas": {"en": {"language": "en", "value": "dog"}},
                "lexicalCategory": "Q1084",
                "language": "Q1860",
                "claims": {},
                "forms": [],
                "senses": [],
            }),
        )]);
        let lexeme = loader.lexeme(&Lid::new("L1").unwrap()).unwrap();
        let en = registry().first("en").unwrap().clone();
        assert_eq!(lexeme.lemmata().get(en).unwrap().text(), "dog");
    }

    #[test]
    fn item_builds_from_the_cached_document() {
        let loader = loader_with(&[(
            "Q42",
            json!({
                "labels": {"en": {"language": "en", "value": "Douglas Adams"}},
                "descriptions": {},
                "aliases": {},
                "claims": {},
                "sitelinks": {},
            }),
        )]);
        let item = loader.item(&Qid::new("Q42").unwrap()).unwrap();
        let en = registry().first("en").unwrap().clone();
        assert_eq!(item.label(en).unwrap().text(), "Douglas Adams");
    }

    #[test]
    fn property_datatype_reads_the_property_document() {
        let loader = loader_with(&[("P1476", json!({"datatype": "monolingualtext"}))]);
        assert_eq!(
            loader
                .property_datatype(&Pid::new("P1476").unwrap())
                .unwrap(),
            Datatype::MonolingualText
        );
    }

    #[test]
    fn unknown_datatype_name_is_rejected() {
        let loader = loader_with(&[("P1", json!({"datatype": "flux"}))]);
        assert!(matches!(
            loader.property_datatype(&Pid::new("P1").unwrap()),
            Err(ClientError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn datatype_source_maps_failures_to_unknown_datatype() {
        let loader = loader_with(&[("P2", json!({}))]);
        let property = Pid::new("P2").unwrap();
        assert!(matches!(
            DatatypeSource::datatype(&loader, &property),
            Err(ModelError::UnknownDatatype(p)) if p == property
        ));
    }
}
