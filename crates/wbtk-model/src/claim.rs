//! Claims: property + value pairs, the atomic predicate unit.

use std::fmt;

use serde_json::{Map, Value};
use wbtk_types::{LanguageRegistry, Pid};

use crate::datatype::Datatype;
use crate::error::{ModelError, ModelResult};
use crate::value::ClaimValue;
use crate::wire::{as_object, str_field};

/// A property paired with a value. Claims appear as statement main values,
/// as qualifiers, and as reference content.
///
/// Construction checks the value's kind against the property's declared
/// datatype (sentinels are exempt). Equality and ordering ignore the
/// datatype — two claims are equal iff property and value match.
#[derive(Clone, Debug)]
pub struct Claim {
    property: Pid,
    datatype: Datatype,
    value: ClaimValue,
}

impl Claim {
    /// Create a claim, verifying that the value's kind matches the
    /// property's declared datatype.
    pub fn new(
        property: Pid,
        datatype: Datatype,
        value: impl Into<ClaimValue>,
    ) -> ModelResult<Self> {
        let value = value.into();
        if let Some(actual) = value.kind() {
            let expected = datatype.value_kind();
            if actual != expected {
                return Err(ModelError::TypeMismatch {
                    property,
                    datatype,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self {
            property,
            datatype,
            value,
        })
    }

    /// The property.
    pub fn property(&self) -> &Pid {
        &self.property
    }

    /// The property's declared datatype.
    pub fn datatype(&self) -> Datatype {
        self.datatype
    }

    /// The value.
    pub fn value(&self) -> &ClaimValue {
        &self.value
    }

    /// Decode a wire snak object.
    pub fn from_json(snak: &Value, registry: &LanguageRegistry) -> ModelResult<Self> {
        let map = as_object(snak, "snak")?;
        let property = Pid::new(str_field(map, "property", "snak")?)?;
        let datatype_name = str_field(map, "datatype", "snak")?;
        let datatype = Datatype::from_wire(datatype_name).ok_or_else(|| {
            ModelError::MalformedDocument(format!("unknown datatype {datatype_name:?}"))
        })?;
        let value = match str_field(map, "snaktype", "snak")? {
            "novalue" => ClaimValue::NoValue,
            "somevalue" => ClaimValue::SomeValue,
            "value" => {
                let datavalue = map.get("datavalue").ok_or_else(|| {
                    ModelError::MalformedDocument("value snak has no datavalue".to_string())
                })?;
                let inner = as_object(datavalue, "datavalue")?
                    .get("value")
                    .ok_or_else(|| {
                        ModelError::MalformedDocument("datavalue has no value".to_string())
                    })?;
                ClaimValue::from_json(inner, registry)?
            }
            other => {
                return Err(ModelError::MalformedDocument(format!(
                    "unknown snaktype {other:?}"
                )))
            }
        };
        Self::new(property, datatype, value)
    }

    /// Encode to the wire snak form. Sentinels become `snaktype` markers
    /// with no datavalue.
    pub fn to_json(&self) -> Value {
        let snaktype = match &self.value {
            ClaimValue::NoValue => "novalue",
            ClaimValue::SomeValue => "somevalue",
            _ => "value",
        };
        let mut map = Map::new();
        map.insert("snaktype".to_string(), snaktype.into());
        map.insert("property".to_string(), self.property.as_str().into());
        map.insert("datatype".to_string(), self.datatype.as_wire().into());
        if let Some(value) = self.value.to_json() {
            map.insert(
                "datavalue".to_string(),
                serde_json::json!({
                    "value": value,
                    "type": self.datatype.value_kind().as_wire(),
                }),
            );
        }
        Value::Object(map)
    }
}

impl PartialEq for Claim {
    fn eq(&self, other: &Self) -> bool {
        self.property == other.property && self.value == other.value
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.property, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MonolingualText;
    use crate::value::QuantityValue;
    use serde_json::json;
    use wbtk_types::{registry, EntityId};

    fn pid(s: &str) -> Pid {
        Pid::new(s).unwrap()
    }

    fn mt(text: &str, code: &str) -> MonolingualText {
        MonolingualText::new(text, registry().first(code).unwrap().clone())
    }

    // -----------------------------------------------------------------------
    // Datatype checking at construction
    // -----------------------------------------------------------------------

    #[test]
    fn matching_value_kind_is_accepted() {
        let claim = Claim::new(pid("P1476"), Datatype::MonolingualText, mt("Tokyo", "en"));
        assert!(claim.is_ok());
    }

    #[test]
    fn mismatched_value_kind_is_a_type_error() {
        let result = Claim::new(pid("P1476"), Datatype::MonolingualText, "Tokyo");
        assert!(matches!(result, Err(ModelError::TypeMismatch { .. })));
    }

    #[test]
    fn string_like_datatypes_accept_plain_strings() {
        assert!(Claim::new(pid("P854"), Datatype::Url, "http://example.org").is_ok());
        assert!(Claim::new(pid("P214"), Datatype::ExternalId, "113230702").is_ok());
    }

    #[test]
    fn sentinels_are_exempt_from_datatype_checking() {
        assert!(Claim::new(pid("P1476"), Datatype::MonolingualText, ClaimValue::NoValue).is_ok());
        assert!(Claim::new(pid("P31"), Datatype::WikibaseItem, ClaimValue::SomeValue).is_ok());
    }

    // -----------------------------------------------------------------------
    // Equality
    // -----------------------------------------------------------------------

    #[test]
    fn equality_is_by_property_and_value() {
        let a = Claim::new(pid("P1545"), Datatype::String, "1").unwrap();
        let b = Claim::new(pid("P1545"), Datatype::String, "1").unwrap();
        let c = Claim::new(pid("P1545"), Datatype::String, "2").unwrap();
        let d = Claim::new(pid("P1546"), Datatype::String, "1").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    // -----------------------------------------------------------------------
    // Wire codec
    // -----------------------------------------------------------------------

    #[test]
    fn value_snak_encodes_datavalue_with_internal_type() {
        let claim = Claim::new(
            pid("P2067"),
            Datatype::Quantity,
            QuantityValue::exact(70.0),
        )
        .unwrap();
        let json = claim.to_json();
        assert_eq!(json["snaktype"], "value");
        assert_eq!(json["property"], "P2067");
        assert_eq!(json["datatype"], "quantity");
        assert_eq!(json["datavalue"]["type"], "quantity");
        assert_eq!(json["datavalue"]["value"]["amount"], 70.0);
    }

    #[test]
    fn sentinel_snak_has_no_datavalue() {
        let claim = Claim::new(pid("P570"), Datatype::Time, ClaimValue::NoValue).unwrap();
        let json = claim.to_json();
        assert_eq!(json["snaktype"], "novalue");
        assert!(json.get("datavalue").is_none());
    }

    #[test]
    fn snak_roundtrip_preserves_value_and_datatype() {
        let claim = Claim::new(
            pid("P31"),
            Datatype::WikibaseItem,
            EntityId::parse("Q5").unwrap(),
        )
        .unwrap();
        let back = Claim::from_json(&claim.to_json(), registry()).unwrap();
        assert_eq!(back, claim);
        assert_eq!(back.datatype(), Datatype::WikibaseItem);
    }

    #[test]
    fn sentinel_roundtrip_preserves_sentinel_kind() {
        for sentinel in [ClaimValue::NoValue, ClaimValue::SomeValue] {
            let claim = Claim::new(pid("P570"), Datatype::Time, sentinel.clone()).unwrap();
            let back = Claim::from_json(&claim.to_json(), registry()).unwrap();
            assert_eq!(back.value(), &sentinel);
        }
    }

    #[test]
    fn decode_rejects_unknown_snaktype_and_datatype() {
        let bad_snaktype = json!({
            "snaktype": "maybe", "property": "P1", "datatype": "string"
        });
        assert!(Claim::from_json(&bad_snaktype, registry()).is_err());

        let bad_datatype = json!({
            "snaktype": "novalue", "property": "P1", "datatype": "flux"
        });
        assert!(Claim::from_json(&bad_datatype, registry()).is_err());
    }

    #[test]
    fn decode_applies_the_datatype_check() {
        // A monolingualtext property carrying a bare string datavalue.
        let json = json!({
            "snaktype": "value",
            "property": "P1476",
            "datatype": "monolingualtext",
            "datavalue": {"value": "Tokyo", "type": "string"}
        });
        assert!(matches!(
            Claim::from_json(&json, registry()),
            Err(ModelError::TypeMismatch { .. })
        ));
    }
}
