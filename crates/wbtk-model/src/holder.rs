//! The statement collection shared by items, lexemes, forms, and senses.

use serde_json::{Map, Value};
use wbtk_types::{LanguageRegistry, Pid};

use crate::claim::Claim;
use crate::error::ModelResult;
use crate::statement::Statement;
use crate::value::ClaimValue;

/// An insertion-ordered multi-map from property to statements.
///
/// Every statement stored under key `p` has `p` as its property — the
/// grouping constructors and `add` guarantee this.
#[derive(Clone, Debug, Default)]
pub struct StatementHolder {
    entries: Vec<(Pid, Vec<Statement>)>,
}

impl StatementHolder {
    /// Create an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a holder from statements, grouping by property in encounter
    /// order.
    pub fn from_statements(statements: impl IntoIterator<Item = Statement>) -> Self {
        statements
            .into_iter()
            .fold(Self::new(), |holder, statement| holder.add(statement))
    }

    /// The statements for a property, in insertion order; empty (never an
    /// error) if the property is absent.
    pub fn statements_for(&self, property: &Pid) -> &[Statement] {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, statements)| statements.as_slice())
            .unwrap_or(&[])
    }

    /// The `haswbstatement` query: is there a statement on `property`,
    /// optionally one matching `value`? Sentinel values match by sentinel
    /// kind rather than literal equality, so a `NoValue` probe finds any
    /// no-value statement on the property.
    pub fn has_statement(&self, property: &Pid, value: Option<&ClaimValue>) -> bool {
        let statements = self.statements_for(property);
        match value {
            None => !statements.is_empty(),
            Some(ClaimValue::NoValue) => statements.iter().any(|s| s.value().is_novalue()),
            Some(ClaimValue::SomeValue) => statements.iter().any(|s| s.value().is_somevalue()),
            Some(value) => statements.iter().any(|s| s.value() == value),
        }
    }

    /// A new holder with the statement appended under its own property.
    pub fn add(&self, statement: Statement) -> Self {
        let mut entries = self.entries.clone();
        match entries
            .iter_mut()
            .find(|(p, _)| p == statement.property())
        {
            Some((_, statements)) => statements.push(statement),
            None => entries.push((statement.property().clone(), vec![statement])),
        }
        Self { entries }
    }

    /// A new holder with the first exactly-equal statement removed; the
    /// property key is dropped when its list empties. No-op if nothing
    /// matches.
    pub fn remove(&self, statement: &Statement) -> Self {
        let mut entries = self.entries.clone();
        if let Some((_, statements)) = entries
            .iter_mut()
            .find(|(p, _)| p == statement.property())
        {
            if let Some(index) = statements.iter().position(|s| s == statement) {
                statements.remove(index);
            }
        }
        entries.retain(|(_, statements)| !statements.is_empty());
        Self { entries }
    }

    /// A new holder without any statements for `property`.
    pub fn remove_property(&self, property: &Pid) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(p, _)| p != property)
            .cloned()
            .collect();
        Self { entries }
    }

    /// Returns `true` if any statement shares property and value with the
    /// claim (rank, qualifiers, and references are ignored).
    pub fn contains_claim(&self, claim: &Claim) -> bool {
        self.statements_for(claim.property())
            .iter()
            .any(|statement| statement.matches_claim(claim))
    }

    /// Returns `true` if an exactly-equal statement is present.
    pub fn contains(&self, statement: &Statement) -> bool {
        self.statements_for(statement.property())
            .contains(statement)
    }

    /// Returns `true` if any statement uses `property`.
    pub fn contains_property(&self, property: &Pid) -> bool {
        self.entries.iter().any(|(p, _)| p == property)
    }

    /// Properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &Pid> {
        self.entries.iter().map(|(p, _)| p)
    }

    /// All statements, grouped by property in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.entries
            .iter()
            .flat_map(|(_, statements)| statements.iter())
    }

    /// Total number of statements across all properties.
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, statements)| statements.len())
            .sum()
    }

    /// Returns `true` if the holder has no statements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode a wire `claims` map (property → statement list).
    pub(crate) fn from_json(
        map: &Map<String, Value>,
        registry: &LanguageRegistry,
    ) -> ModelResult<Self> {
        let mut holder = Self::new();
        for statements in map.values() {
            if let Some(list) = statements.as_array() {
                for statement in list {
                    holder = holder.add(Statement::from_json(statement, registry)?);
                }
            }
        }
        Ok(holder)
    }

    /// Encode to the wire `claims` map.
    pub(crate) fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (property, statements) in &self.entries {
            map.insert(
                property.as_str().to_string(),
                Value::Array(statements.iter().map(Statement::to_json).collect()),
            );
        }
        Value::Object(map)
    }
}

impl PartialEq for StatementHolder {
    /// Property order is irrelevant; statement order within a property
    /// counts.
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(property, statements)| {
                other.statements_for(property) == statements.as_slice()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::Datatype;
    use crate::statement::Rank;
    use serde_json::json;
    use wbtk_types::registry;

    fn pid(s: &str) -> Pid {
        Pid::new(s).unwrap()
    }

    fn string_claim(property: &str, value: &str) -> Claim {
        Claim::new(pid(property), Datatype::String, value).unwrap()
    }

    fn string_statement(property: &str, value: &str) -> Statement {
        Statement::new(string_claim(property, value))
    }

    fn sentinel_statement(property: &str, value: ClaimValue) -> Statement {
        Statement::new(Claim::new(pid(property), Datatype::String, value).unwrap())
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    #[test]
    fn absent_property_yields_empty_never_fails() {
        let holder = StatementHolder::new();
        assert!(holder.statements_for(&pid("P31")).is_empty());
    }

    #[test]
    fn add_appends_and_grows_the_property_list() {
        let holder = StatementHolder::new().add(string_statement("P1545", "1"));
        let before = holder.statements_for(&pid("P1545")).len();
        let grown = holder.add(string_statement("P1545", "2"));
        assert_eq!(grown.statements_for(&pid("P1545")).len(), before + 1);
    }

    // -----------------------------------------------------------------------
    // has_statement
    // -----------------------------------------------------------------------

    #[test]
    fn has_statement_without_value_checks_mere_presence() {
        let holder = StatementHolder::from_statements([string_statement("P1545", "1")]);
        assert!(holder.has_statement(&pid("P1545"), None));
        assert!(!holder.has_statement(&pid("P1546"), None));
    }

    #[test]
    fn has_statement_with_value_requires_exact_match() {
        let holder = StatementHolder::from_statements([string_statement("P1545", "1")]);
        assert!(holder.has_statement(&pid("P1545"), Some(&ClaimValue::String("1".into()))));
        assert!(!holder.has_statement(&pid("P1545"), Some(&ClaimValue::String("2".into()))));
    }

    #[test]
    fn novalue_probe_matches_by_sentinel_kind() {
        let holder = StatementHolder::from_statements([
            sentinel_statement("P1545", ClaimValue::NoValue),
            sentinel_statement("P1546", ClaimValue::SomeValue),
        ]);
        assert!(holder.has_statement(&pid("P1545"), Some(&ClaimValue::NoValue)));
        assert!(!holder.has_statement(&pid("P1545"), Some(&ClaimValue::SomeValue)));
        assert!(holder.has_statement(&pid("P1546"), Some(&ClaimValue::SomeValue)));
        // A sentinel on another property does not leak into this one.
        assert!(!holder.has_statement(&pid("P1546"), Some(&ClaimValue::NoValue)));
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    #[test]
    fn remove_takes_the_first_exact_match_only() {
        let preferred = string_statement("P1545", "1").with_rank(Rank::Preferred);
        let holder = StatementHolder::from_statements([
            string_statement("P1545", "1"),
            preferred.clone(),
        ]);
        let removed = holder.remove(&preferred);
        let remaining = removed.statements_for(&pid("P1545"));
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].rank(), Rank::Normal);
    }

    #[test]
    fn remove_prunes_an_emptied_property() {
        let statement = string_statement("P1545", "1");
        let holder = StatementHolder::from_statements([statement.clone()]);
        let removed = holder.remove(&statement);
        assert!(!removed.contains_property(&pid("P1545")));
    }

    #[test]
    fn remove_property_drops_the_whole_list() {
        let holder = StatementHolder::from_statements([
            string_statement("P1545", "1"),
            string_statement("P1545", "2"),
            string_statement("P1546", "3"),
        ]);
        let removed = holder.remove_property(&pid("P1545"));
        assert!(!removed.contains_property(&pid("P1545")));
        assert!(removed.contains_property(&pid("P1546")));
    }

    // -----------------------------------------------------------------------
    // Containment
    // -----------------------------------------------------------------------

    #[test]
    fn claim_containment_ignores_rank_and_decorations() {
        let statement = string_statement("P1545", "1").with_rank(Rank::Preferred);
        let holder = StatementHolder::from_statements([statement.clone()]);
        assert!(holder.contains_claim(&string_claim("P1545", "1")));
        assert!(!holder.contains_claim(&string_claim("P1545", "2")));
    }

    #[test]
    fn statement_containment_requires_exact_equality() {
        let statement = string_statement("P1545", "1").with_rank(Rank::Preferred);
        let holder = StatementHolder::from_statements([statement.clone()]);
        assert!(holder.contains(&statement));
        assert!(!holder.contains(&string_statement("P1545", "1")));
    }

    // -----------------------------------------------------------------------
    // Equality & wire codec
    // -----------------------------------------------------------------------

    #[test]
    fn equality_ignores_property_order() {
        let a = StatementHolder::from_statements([
            string_statement("P1545", "1"),
            string_statement("P1546", "2"),
        ]);
        let b = StatementHolder::from_statements([
            string_statement("P1546", "2"),
            string_statement("P1545", "1"),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn wire_roundtrip() {
        let holder = StatementHolder::from_statements([
            string_statement("P1545", "1"),
            string_statement("P1545", "2").with_rank(Rank::Preferred),
            string_statement("P1546", "3"),
        ]);
        let json = holder.to_json();
        assert_eq!(json["P1545"].as_array().unwrap().len(), 2);
        let back =
            StatementHolder::from_json(json.as_object().unwrap(), registry()).unwrap();
        assert_eq!(back, holder);
    }

    #[test]
    fn empty_holder_encodes_to_an_empty_map() {
        assert_eq!(StatementHolder::new().to_json(), json!({}));
    }
}
