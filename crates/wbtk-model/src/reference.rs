//! Ordered multi-valued claim storage keyed by property, and the reference
//! type built on it.
//!
//! The same shape serves two roles: reference content (`snaks`) and
//! statement qualifiers.

use serde_json::{Map, Value};
use wbtk_types::{LanguageRegistry, Pid};

use crate::claim::Claim;
use crate::error::ModelResult;
use crate::wire::as_object;

/// An insertion-ordered multi-map from property to claims.
///
/// A property may hold any number of claims, including structural
/// duplicates — `add` never deduplicates. Property order is preserved for
/// stable wire output but does not participate in equality; claim order
/// within one property does.
#[derive(Clone, Debug, Default)]
pub struct ClaimSet {
    entries: Vec<(Pid, Vec<Claim>)>,
}

impl ClaimSet {
    /// Create an empty claim set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from claims, grouping by property in encounter order.
    pub fn from_claims(claims: impl IntoIterator<Item = Claim>) -> Self {
        claims
            .into_iter()
            .fold(Self::new(), |set, claim| set.add(claim))
    }

    /// A new set with `claim` appended to its property's list. Always
    /// succeeds; duplicates are permitted.
    pub fn add(&self, claim: Claim) -> Self {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|(p, _)| p == claim.property()) {
            Some((_, claims)) => claims.push(claim),
            None => entries.push((claim.property().clone(), vec![claim])),
        }
        Self { entries }
    }

    /// A new set with the first claim whose value equals `claim`'s removed
    /// from that property's list; the property key is dropped when its list
    /// empties. No-op if nothing matches.
    pub fn remove(&self, claim: &Claim) -> Self {
        let mut entries = self.entries.clone();
        if let Some((_, claims)) = entries.iter_mut().find(|(p, _)| p == claim.property()) {
            if let Some(index) = claims.iter().position(|c| c.value() == claim.value()) {
                claims.remove(index);
            }
        }
        entries.retain(|(_, claims)| !claims.is_empty());
        Self { entries }
    }

    /// A new set without any claims for `property`.
    pub fn remove_property(&self, property: &Pid) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(p, _)| p != property)
            .cloned()
            .collect();
        Self { entries }
    }

    /// The claims for a property, in insertion order; empty if absent.
    pub fn claims_for(&self, property: &Pid) -> &[Claim] {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, claims)| claims.as_slice())
            .unwrap_or(&[])
    }

    /// Returns `true` if any claim equals `claim`.
    pub fn contains(&self, claim: &Claim) -> bool {
        self.claims_for(claim.property()).contains(claim)
    }

    /// Returns `true` if any claim uses `property`.
    pub fn contains_property(&self, property: &Pid) -> bool {
        self.entries.iter().any(|(p, _)| p == property)
    }

    /// Properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &Pid> {
        self.entries.iter().map(|(p, _)| p)
    }

    /// All claims, grouped by property in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.entries.iter().flat_map(|(_, claims)| claims.iter())
    }

    /// Total number of claims across all properties.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, claims)| claims.len()).sum()
    }

    /// Returns `true` if the set holds no claims.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode a per-property map of snak lists (`snaks`, `qualifiers`).
    /// When `order` is given, properties are visited in that order first so
    /// the rebuilt set preserves the source ordering.
    pub(crate) fn from_json(
        map: &Map<String, Value>,
        order: Option<&[String]>,
        registry: &LanguageRegistry,
    ) -> ModelResult<Self> {
        let mut set = Self::new();
        let mut visit = |key: &String| -> ModelResult<()> {
            if let Some(snaks) = map.get(key).and_then(Value::as_array) {
                for snak in snaks {
                    set = set.add(Claim::from_json(snak, registry)?);
                }
            }
            Ok(())
        };
        match order {
            Some(order) => {
                for key in order {
                    visit(key)?;
                }
                for key in map.keys() {
                    if !order.contains(key) {
                        visit(key)?;
                    }
                }
            }
            None => {
                for key in map.keys() {
                    visit(key)?;
                }
            }
        }
        Ok(set)
    }

    /// Encode to the per-property map of snak lists.
    pub(crate) fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (property, claims) in &self.entries {
            map.insert(
                property.as_str().to_string(),
                Value::Array(claims.iter().map(Claim::to_json).collect()),
            );
        }
        Value::Object(map)
    }
}

impl PartialEq for ClaimSet {
    /// Property order is irrelevant; claim order within a property counts.
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(property, claims)| other.claims_for(property) == claims.as_slice())
    }
}

/// A reference: a claim set citing where a statement's value came from,
/// plus wire-only metadata (`snaks-order`, `hash`) that matters only when
/// round-tripping an existing reference unchanged.
///
/// Equality compares claim content only. Editing a reference invalidates
/// its server-side hash, so edit operators return a reference without
/// metadata.
#[derive(Clone, Debug, Default)]
pub struct Reference {
    claims: ClaimSet,
    snaks_order: Option<Vec<Pid>>,
    hash: Option<String>,
}

impl Reference {
    /// Create a reference over a claim set.
    pub fn new(claims: ClaimSet) -> Self {
        Self {
            claims,
            snaks_order: None,
            hash: None,
        }
    }

    /// Create a reference from individual claims.
    pub fn from_claims(claims: impl IntoIterator<Item = Claim>) -> Self {
        Self::new(ClaimSet::from_claims(claims))
    }

    /// The claim content.
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    /// The claims for a property, in insertion order; empty if absent.
    pub fn claims_for(&self, property: &Pid) -> &[Claim] {
        self.claims.claims_for(property)
    }

    /// Returns `true` if the reference holds an equal claim.
    pub fn contains(&self, claim: &Claim) -> bool {
        self.claims.contains(claim)
    }

    /// Returns `true` if any claim uses `property`.
    pub fn contains_property(&self, property: &Pid) -> bool {
        self.claims.contains_property(property)
    }

    /// The server-side hash, when this reference was built from the wire.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// The snak ordering read from the wire. Round-trip bookkeeping only:
    /// encoded output always orders snaks by the live claim set.
    pub fn wire_snaks_order(&self) -> Option<&[Pid]> {
        self.snaks_order.as_deref()
    }

    /// A new reference with `claim` added.
    pub fn add(&self, claim: Claim) -> Self {
        Self::new(self.claims.add(claim))
    }

    /// A new reference with the first value-matching claim removed.
    pub fn remove(&self, claim: &Claim) -> Self {
        Self::new(self.claims.remove(claim))
    }

    /// A new reference without any claims for `property`.
    pub fn remove_property(&self, property: &Pid) -> Self {
        Self::new(self.claims.remove_property(property))
    }

    /// Decode a wire reference object.
    pub fn from_json(value: &Value, registry: &LanguageRegistry) -> ModelResult<Self> {
        let map = as_object(value, "reference")?;
        let snaks = map
            .get("snaks")
            .map(|snaks| as_object(snaks, "reference snaks"))
            .transpose()?;
        let order: Option<Vec<String>> = map.get("snaks-order").and_then(Value::as_array).map(
            |keys| {
                keys.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            },
        );
        let claims = match snaks {
            Some(snaks) => ClaimSet::from_json(snaks, order.as_deref(), registry)?,
            None => ClaimSet::new(),
        };
        let snaks_order = order
            .map(|keys| keys.into_iter().map(Pid::new).collect::<Result<_, _>>())
            .transpose()?;
        Ok(Self {
            claims,
            snaks_order,
            hash: map
                .get("hash")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    /// Encode to the wire reference object. `snaks-order` always reflects
    /// the live property order; the hash is emitted when present.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "snaks-order".to_string(),
            Value::Array(
                self.claims
                    .properties()
                    .map(|p| p.as_str().into())
                    .collect(),
            ),
        );
        map.insert("snaks".to_string(), self.claims.to_json());
        if let Some(hash) = &self.hash {
            map.insert("hash".to_string(), hash.clone().into());
        }
        Value::Object(map)
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.claims == other.claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::Datatype;
    use crate::text::MonolingualText;
    use serde_json::json;
    use wbtk_types::registry;

    fn pid(s: &str) -> Pid {
        Pid::new(s).unwrap()
    }

    fn title(text: &str) -> Claim {
        let mt = MonolingualText::new(text, registry().first("bn").unwrap().clone());
        Claim::new(pid("P1476"), Datatype::MonolingualText, mt).unwrap()
    }

    fn url(value: &str) -> Claim {
        Claim::new(pid("P854"), Datatype::Url, value).unwrap()
    }

    // -----------------------------------------------------------------------
    // ClaimSet: add / remove
    // -----------------------------------------------------------------------

    #[test]
    fn add_groups_by_property_in_order() {
        let set = ClaimSet::from_claims([title("পাখি"), title("পাকা"), url("http://example.org")]);
        assert_eq!(set.claims_for(&pid("P1476")).len(), 2);
        assert_eq!(set.claims_for(&pid("P854")).len(), 1);
        let props: Vec<&Pid> = set.properties().collect();
        assert_eq!(props, vec![&pid("P1476"), &pid("P854")]);
    }

    #[test]
    fn absent_property_yields_empty_slice() {
        let set = ClaimSet::new();
        assert!(set.claims_for(&pid("P31")).is_empty());
    }

    #[test]
    fn add_permits_structural_duplicates() {
        let set = ClaimSet::new().add(title("পাখি")).add(title("পাখি"));
        assert_eq!(set.claims_for(&pid("P1476")).len(), 2);
    }

    #[test]
    fn remove_deletes_only_the_first_match() {
        let set = ClaimSet::new().add(title("পাখি")).add(title("পাখি"));
        let removed = set.remove(&title("পাখি"));
        assert_eq!(removed.claims_for(&pid("P1476")).len(), 1);
    }

    #[test]
    fn remove_prunes_an_emptied_property() {
        let set = ClaimSet::from_claims([title("পাখি")]);
        let removed = set.remove(&title("পাখি"));
        assert!(!removed.contains_property(&pid("P1476")));
        assert!(removed.is_empty());
    }

    #[test]
    fn remove_of_an_absent_claim_is_a_noop() {
        let set = ClaimSet::from_claims([title("পাখি")]);
        let removed = set.remove(&url("http://example.org"));
        assert_eq!(removed, set);
    }

    #[test]
    fn add_then_remove_restores_the_original() {
        let set = ClaimSet::from_claims([title("পাখি")]);
        let claim = url("http://example.org");
        assert_eq!(set.add(claim.clone()).remove(&claim), set);
    }

    // -----------------------------------------------------------------------
    // ClaimSet: equality
    // -----------------------------------------------------------------------

    #[test]
    fn equality_ignores_property_order() {
        let a = ClaimSet::from_claims([title("পাখি"), url("http://example.org")]);
        let b = ClaimSet::from_claims([url("http://example.org"), title("পাখি")]);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_respects_order_within_a_property() {
        let a = ClaimSet::from_claims([title("পাখি"), title("পাকা")]);
        let b = ClaimSet::from_claims([title("পাকা"), title("পাখি")]);
        assert_ne!(a, b);
    }

    // -----------------------------------------------------------------------
    // Reference
    // -----------------------------------------------------------------------

    #[test]
    fn reference_add_and_remove_by_value() {
        let reference = Reference::from_claims([url("http://example.org")]);
        let emptied = reference.remove(&url("http://example.org"));
        assert!(!emptied.contains_property(&pid("P854")));
    }

    #[test]
    fn reference_remove_property_drops_all_claims() {
        let reference = Reference::from_claims([title("পাখি"), title("পাকা")]);
        let removed = reference.remove_property(&pid("P1476"));
        assert!(removed.claims().is_empty());
    }

    #[test]
    fn reference_equality_ignores_metadata() {
        let a = Reference::from_claims([url("http://example.org")]);
        let wire = json!({
            "snaks": {"P854": [url("http://example.org").to_json()]},
            "snaks-order": ["P854"],
            "hash": "f30b29bcb4f30a77b9bd9fbfe1b4e4fbd6d21a53",
        });
        let b = Reference::from_json(&wire, registry()).unwrap();
        assert_eq!(a, b);
        assert_eq!(b.hash(), Some("f30b29bcb4f30a77b9bd9fbfe1b4e4fbd6d21a53"));
    }

    #[test]
    fn editing_a_reference_discards_its_hash() {
        let wire = json!({
            "snaks": {"P854": [url("http://example.org").to_json()]},
            "snaks-order": ["P854"],
            "hash": "f30b29bcb4f30a77b9bd9fbfe1b4e4fbd6d21a53",
        });
        let reference = Reference::from_json(&wire, registry()).unwrap();
        let edited = reference.add(title("পাখি"));
        assert_eq!(edited.hash(), None);
    }

    #[test]
    fn snaks_order_governs_rebuild_order() {
        let wire = json!({
            "snaks": {
                "P1476": [title("পাখি").to_json()],
                "P854": [url("http://example.org").to_json()],
            },
            "snaks-order": ["P854", "P1476"],
        });
        let reference = Reference::from_json(&wire, registry()).unwrap();
        let props: Vec<&Pid> = reference.claims().properties().collect();
        assert_eq!(props, vec![&pid("P854"), &pid("P1476")]);
    }

    #[test]
    fn reference_json_roundtrip() {
        let reference = Reference::from_claims([url("http://example.org"), title("পাখি")]);
        let wire = reference.to_json();
        assert_eq!(wire["snaks-order"], json!(["P854", "P1476"]));
        let back = Reference::from_json(&wire, registry()).unwrap();
        assert_eq!(back, reference);
    }
}
