//! Claim values: the closed union of datavalue variants plus the
//! novalue/somevalue sentinels, with the structural wire codec.
//!
//! Wire datavalues carry no usable discriminant for most variants, so
//! decoding recovers the variant from which well-known key set the JSON
//! object carries.

use std::fmt;

use serde_json::{Map, Value};
use wbtk_types::{EntityId, LanguageRegistry, Qid};

use crate::datatype::ValueKind;
use crate::error::{ModelError, ModelResult};
use crate::text::MonolingualText;
use crate::wire::{as_object, f64_field, i64_field_or, opt_f64_field, str_field, u64_field_or};

/// URI prefix under which entity ids appear in unit and calendar fields.
pub(crate) const ENTITY_URI_PREFIX: &str = "http://www.wikidata.org/entity/";

fn strip_entity_prefix(value: String) -> String {
    match value.strip_prefix(ENTITY_URI_PREFIX) {
        Some(stripped) => stripped.to_string(),
        None => value,
    }
}

// ---------------------------------------------------------------------------
// Quantity
// ---------------------------------------------------------------------------

/// A quantity: an amount with an uncertainty range and a unit.
///
/// When the range is degenerate (lower ≥ upper at construction) both bounds
/// collapse to the amount, meaning "no uncertainty range"; such quantities
/// encode without bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantityValue {
    amount: f64,
    lower: f64,
    upper: f64,
    unit: String,
}

impl QuantityValue {
    /// The item standing for the dimensionless unit 1.
    pub const UNITLESS: &'static str = "Q199";

    /// Create a quantity. A unit given in entity-URI form is stored
    /// stripped to its bare id.
    pub fn new(amount: f64, lower: f64, upper: f64, unit: impl Into<String>) -> Self {
        let (lower, upper) = if lower >= upper {
            (amount, amount)
        } else {
            (lower, upper)
        };
        let unit = unit.into();
        let unit = if Qid::new(unit.as_str()).is_ok() {
            unit
        } else {
            strip_entity_prefix(unit)
        };
        Self {
            amount,
            lower,
            upper,
            unit,
        }
    }

    /// A unitless quantity with no uncertainty range.
    pub fn exact(amount: f64) -> Self {
        Self::new(amount, 1.0, -1.0, Self::UNITLESS)
    }

    /// The amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The lower bound (equal to the amount when there is no range).
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// The upper bound (equal to the amount when there is no range).
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// The unit, as a bare id or opaque token.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns `true` if the quantity carries a real uncertainty range.
    pub fn has_bounds(&self) -> bool {
        self.lower != self.amount || self.upper != self.amount
    }

    pub(crate) fn from_json(value: &Value) -> ModelResult<Self> {
        let map = as_object(value, "quantity value")?;
        let amount = f64_field(map, "amount", "quantity value")?;
        let unit = str_field(map, "unit", "quantity value")?;
        let lower = opt_f64_field(map, "lowerBound", "quantity value")?;
        let upper = opt_f64_field(map, "upperBound", "quantity value")?;
        Ok(Self::new(
            amount,
            lower.unwrap_or(1.0),
            upper.unwrap_or(-1.0),
            unit,
        ))
    }

    /// Encode to wire form; the unit is always written in entity-URI form.
    pub(crate) fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("amount".to_string(), self.amount.into());
        map.insert(
            "unit".to_string(),
            format!("{ENTITY_URI_PREFIX}{}", self.unit).into(),
        );
        if self.has_bounds() {
            map.insert("lowerBound".to_string(), self.lower.into());
            map.insert("upperBound".to_string(), self.upper.into());
        }
        Value::Object(map)
    }
}

impl fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_bounds() {
            write!(f, "{}[{},{}]", self.amount, self.lower, self.upper)?;
        } else {
            write!(f, "{}", self.amount)?;
        }
        if self.unit != Self::UNITLESS {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Globe coordinate
// ---------------------------------------------------------------------------

/// A coordinate on a globe.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateValue {
    latitude: f64,
    longitude: f64,
    precision: f64,
    altitude: Option<f64>,
    globe: String,
}

impl CoordinateValue {
    /// The globe assumed when none is given: Earth, in entity-URI form.
    pub const EARTH: &'static str = "http://www.wikidata.org/entity/Q2";

    /// Create a coordinate on Earth with no altitude.
    pub fn new(latitude: f64, longitude: f64, precision: f64) -> Self {
        Self {
            latitude,
            longitude,
            precision,
            altitude: None,
            globe: Self::EARTH.to_string(),
        }
    }

    /// The same coordinate with an altitude.
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = Some(altitude);
        self
    }

    /// The same coordinate on another globe.
    pub fn with_globe(mut self, globe: impl Into<String>) -> Self {
        self.globe = globe.into();
        self
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Precision in degrees.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Altitude, if any.
    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// The globe the coordinate is on.
    pub fn globe(&self) -> &str {
        &self.globe
    }

    pub(crate) fn from_json(value: &Value) -> ModelResult<Self> {
        let map = as_object(value, "coordinate value")?;
        let latitude = f64_field(map, "latitude", "coordinate value")?;
        let longitude = f64_field(map, "longitude", "coordinate value")?;
        let precision = f64_field(map, "precision", "coordinate value")?;
        let altitude = opt_f64_field(map, "altitude", "coordinate value")?;
        let globe = str_field(map, "globe", "coordinate value")?;
        let mut coordinate = Self::new(latitude, longitude, precision).with_globe(globe);
        coordinate.altitude = altitude;
        Ok(coordinate)
    }

    pub(crate) fn to_json(&self) -> Value {
        serde_json::json!({
            "latitude": self.latitude,
            "longitude": self.longitude,
            "altitude": self.altitude,
            "precision": self.precision,
            "globe": self.globe,
        })
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Precision of a time value, from billions of years down to seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TimePrecision {
    BillionYears = 0,
    HundredMillionYears = 1,
    TenMillionYears = 2,
    MillionYears = 3,
    HundredThousandYears = 4,
    TenThousandYears = 5,
    Millennium = 6,
    Century = 7,
    Decade = 8,
    Year = 9,
    Month = 10,
    Day = 11,
    Hour = 12,
    Minute = 13,
    Second = 14,
}

impl TimePrecision {
    /// Creates a precision from its wire representation.
    pub fn from_wire(v: u64) -> Option<TimePrecision> {
        match v {
            0 => Some(TimePrecision::BillionYears),
            1 => Some(TimePrecision::HundredMillionYears),
            2 => Some(TimePrecision::TenMillionYears),
            3 => Some(TimePrecision::MillionYears),
            4 => Some(TimePrecision::HundredThousandYears),
            5 => Some(TimePrecision::TenThousandYears),
            6 => Some(TimePrecision::Millennium),
            7 => Some(TimePrecision::Century),
            8 => Some(TimePrecision::Decade),
            9 => Some(TimePrecision::Year),
            10 => Some(TimePrecision::Month),
            11 => Some(TimePrecision::Day),
            12 => Some(TimePrecision::Hour),
            13 => Some(TimePrecision::Minute),
            14 => Some(TimePrecision::Second),
            _ => None,
        }
    }

    /// The wire representation.
    pub fn as_wire(self) -> u64 {
        self as u64
    }
}

impl Default for TimePrecision {
    fn default() -> Self {
        TimePrecision::Day
    }
}

/// A point in time, kept in the wire's own ISO-like string form (the range
/// of representable dates exceeds what calendar types support).
#[derive(Clone, Debug, PartialEq)]
pub struct TimeValue {
    time: String,
    timezone: i64,
    before: u64,
    after: u64,
    precision: TimePrecision,
    calendarmodel: String,
}

impl TimeValue {
    /// The proleptic Gregorian calendar, in entity-URI form.
    pub const GREGORIAN: &'static str = "http://www.wikidata.org/entity/Q1985727";

    /// Create a day-precision Gregorian time from a wire time string
    /// (`+2023-05-01T00:00:00Z`).
    pub fn new(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            timezone: 0,
            before: 0,
            after: 0,
            precision: TimePrecision::Day,
            calendarmodel: Self::GREGORIAN.to_string(),
        }
    }

    /// The same time with another precision.
    pub fn with_precision(mut self, precision: TimePrecision) -> Self {
        self.precision = precision;
        self
    }

    /// The same time with before/after uncertainty counts.
    pub fn with_uncertainty(mut self, before: u64, after: u64) -> Self {
        self.before = before;
        self.after = after;
        self
    }

    /// The same time under another calendar model.
    pub fn with_calendar(mut self, calendarmodel: impl Into<String>) -> Self {
        self.calendarmodel = calendarmodel.into();
        self
    }

    /// The wire time string.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Timezone offset in minutes.
    pub fn timezone(&self) -> i64 {
        self.timezone
    }

    /// Units of uncertainty before the time.
    pub fn before(&self) -> u64 {
        self.before
    }

    /// Units of uncertainty after the time.
    pub fn after(&self) -> u64 {
        self.after
    }

    /// The precision.
    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    /// The calendar model, in entity-URI form.
    pub fn calendarmodel(&self) -> &str {
        &self.calendarmodel
    }

    pub(crate) fn from_json(value: &Value) -> ModelResult<Self> {
        let map = as_object(value, "time value")?;
        let time = str_field(map, "time", "time value")?;
        let precision_raw = u64_field_or(map, "precision", TimePrecision::Day.as_wire());
        let precision = TimePrecision::from_wire(precision_raw).ok_or_else(|| {
            ModelError::MalformedDocument(format!("unknown time precision {precision_raw}"))
        })?;
        Ok(Self {
            time: time.to_string(),
            timezone: i64_field_or(map, "timezone", 0),
            before: u64_field_or(map, "before", 0),
            after: u64_field_or(map, "after", 0),
            precision,
            calendarmodel: map
                .get("calendarmodel")
                .and_then(Value::as_str)
                .unwrap_or(Self::GREGORIAN)
                .to_string(),
        })
    }

    pub(crate) fn to_json(&self) -> Value {
        serde_json::json!({
            "time": self.time,
            "timezone": self.timezone,
            "before": self.before,
            "after": self.after,
            "precision": self.precision.as_wire(),
            "calendarmodel": self.calendarmodel,
        })
    }
}

// ---------------------------------------------------------------------------
// The value union
// ---------------------------------------------------------------------------

/// The value of a claim: one of the typed datavalue variants, or one of the
/// two sentinel snak states.
#[derive(Clone, Debug, PartialEq)]
pub enum ClaimValue {
    /// The "no value" sentinel: the property is known to have no value.
    NoValue,
    /// The "some value" sentinel: the property has an unknown value.
    SomeValue,
    /// A plain string (also external ids, URLs, media names, ...).
    String(String),
    /// A language-tagged string.
    MonolingualText(MonolingualText),
    /// A quantity with uncertainty range and unit.
    Quantity(QuantityValue),
    /// A globe coordinate.
    Coordinate(CoordinateValue),
    /// A point in time.
    Time(TimeValue),
    /// A reference to another entity.
    Entity(EntityId),
}

impl ClaimValue {
    /// The internal kind of this value; `None` for the sentinels.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            ClaimValue::NoValue | ClaimValue::SomeValue => None,
            ClaimValue::String(_) => Some(ValueKind::String),
            ClaimValue::MonolingualText(_) => Some(ValueKind::MonolingualText),
            ClaimValue::Quantity(_) => Some(ValueKind::Quantity),
            ClaimValue::Coordinate(_) => Some(ValueKind::Coordinate),
            ClaimValue::Time(_) => Some(ValueKind::Time),
            ClaimValue::Entity(_) => Some(ValueKind::EntityRef),
        }
    }

    /// Returns `true` for the "no value" sentinel.
    pub fn is_novalue(&self) -> bool {
        matches!(self, ClaimValue::NoValue)
    }

    /// Returns `true` for the "some value" sentinel.
    pub fn is_somevalue(&self) -> bool {
        matches!(self, ClaimValue::SomeValue)
    }

    /// Returns `true` for either sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.kind().is_none()
    }

    /// The string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClaimValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The monolingual text, if this is one.
    pub fn as_monolingual_text(&self) -> Option<&MonolingualText> {
        match self {
            ClaimValue::MonolingualText(text) => Some(text),
            _ => None,
        }
    }

    /// The referenced entity id, if this is an entity reference.
    pub fn as_entity(&self) -> Option<&EntityId> {
        match self {
            ClaimValue::Entity(id) => Some(id),
            _ => None,
        }
    }

    /// The quantity, if this is one.
    pub fn as_quantity(&self) -> Option<&QuantityValue> {
        match self {
            ClaimValue::Quantity(quantity) => Some(quantity),
            _ => None,
        }
    }

    /// The coordinate, if this is one.
    pub fn as_coordinate(&self) -> Option<&CoordinateValue> {
        match self {
            ClaimValue::Coordinate(coordinate) => Some(coordinate),
            _ => None,
        }
    }

    /// The time, if this is one.
    pub fn as_time(&self) -> Option<&TimeValue> {
        match self {
            ClaimValue::Time(time) => Some(time),
            _ => None,
        }
    }

    /// Decode a wire datavalue's inner `value`. The variant is recovered
    /// structurally from the key set: entity reference, monolingual text,
    /// coordinate, quantity, then time; a bare JSON string passes through
    /// unchanged. Sentinels never reach this path (they have no datavalue).
    pub(crate) fn from_json(value: &Value, registry: &LanguageRegistry) -> ModelResult<Self> {
        if let Some(s) = value.as_str() {
            return Ok(ClaimValue::String(s.to_string()));
        }
        let map = as_object(value, "claim value")?;
        if map.contains_key("entity-type") && map.contains_key("id") {
            let id = EntityId::parse(str_field(map, "id", "entity reference")?)?;
            Ok(ClaimValue::Entity(id))
        } else if map.contains_key("text") && map.contains_key("language") {
            Ok(ClaimValue::MonolingualText(MonolingualText::from_json(
                value, registry,
            )?))
        } else if ["latitude", "longitude", "altitude", "precision", "globe"]
            .iter()
            .all(|key| map.contains_key(*key))
        {
            Ok(ClaimValue::Coordinate(CoordinateValue::from_json(value)?))
        } else if map.contains_key("amount") && map.contains_key("unit") {
            Ok(ClaimValue::Quantity(QuantityValue::from_json(value)?))
        } else if map.contains_key("time") && map.contains_key("precision") {
            Ok(ClaimValue::Time(TimeValue::from_json(value)?))
        } else {
            Err(ModelError::UnsupportedValueKind(value.to_string()))
        }
    }

    /// Encode to the wire datavalue's inner `value`; `None` for sentinels,
    /// which encode as snaktype markers with no datavalue at all.
    pub(crate) fn to_json(&self) -> Option<Value> {
        match self {
            ClaimValue::NoValue | ClaimValue::SomeValue => None,
            ClaimValue::String(s) => Some(Value::String(s.clone())),
            ClaimValue::MonolingualText(text) => Some(text.to_json()),
            ClaimValue::Quantity(quantity) => Some(quantity.to_json()),
            ClaimValue::Coordinate(coordinate) => Some(coordinate.to_json()),
            ClaimValue::Time(time) => Some(time.to_json()),
            ClaimValue::Entity(id) => {
                let mut map = Map::new();
                map.insert("entity-type".to_string(), id.kind().as_str().into());
                map.insert("id".to_string(), id.as_str().into());
                if let Some(numeric) = id.numeric() {
                    map.insert("numeric-id".to_string(), numeric.into());
                }
                Some(Value::Object(map))
            }
        }
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::String(value)
    }
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::String(value.to_string())
    }
}

impl From<MonolingualText> for ClaimValue {
    fn from(value: MonolingualText) -> Self {
        ClaimValue::MonolingualText(value)
    }
}

impl From<QuantityValue> for ClaimValue {
    fn from(value: QuantityValue) -> Self {
        ClaimValue::Quantity(value)
    }
}

impl From<CoordinateValue> for ClaimValue {
    fn from(value: CoordinateValue) -> Self {
        ClaimValue::Coordinate(value)
    }
}

impl From<TimeValue> for ClaimValue {
    fn from(value: TimeValue) -> Self {
        ClaimValue::Time(value)
    }
}

impl From<EntityId> for ClaimValue {
    fn from(value: EntityId) -> Self {
        ClaimValue::Entity(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wbtk_types::registry;

    // -----------------------------------------------------------------------
    // Quantity
    // -----------------------------------------------------------------------

    #[test]
    fn degenerate_bounds_collapse_to_amount() {
        let q = QuantityValue::new(5.0, 3.0, 1.0, "Q11573");
        assert_eq!(q.lower(), 5.0);
        assert_eq!(q.upper(), 5.0);
        assert!(!q.has_bounds());

        let ranged = QuantityValue::new(5.0, 4.0, 6.0, "Q11573");
        assert_eq!(ranged.lower(), 4.0);
        assert_eq!(ranged.upper(), 6.0);
        assert!(ranged.has_bounds());
    }

    #[test]
    fn unit_uri_prefix_is_stripped_at_construction() {
        let q = QuantityValue::new(1.0, 1.0, -1.0, "http://www.wikidata.org/entity/Q11573");
        assert_eq!(q.unit(), "Q11573");
        // A non-entity unit token is kept as-is.
        let plain = QuantityValue::new(1.0, 1.0, -1.0, "1");
        assert_eq!(plain.unit(), "1");
    }

    #[test]
    fn quantity_encodes_prefixed_unit_and_omits_collapsed_bounds() {
        let q = QuantityValue::exact(2.5);
        let json = q.to_json();
        assert_eq!(json["amount"], 2.5);
        assert_eq!(json["unit"], "http://www.wikidata.org/entity/Q199");
        assert!(json.get("lowerBound").is_none());
        assert!(json.get("upperBound").is_none());
    }

    #[test]
    fn quantity_json_roundtrip_with_bounds() {
        let q = QuantityValue::new(5.0, 4.5, 5.5, "Q11573");
        let back = QuantityValue::from_json(&q.to_json()).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn quantity_decodes_string_amounts() {
        let json = json!({"amount": "+42", "unit": "1"});
        let q = QuantityValue::from_json(&json).unwrap();
        assert_eq!(q.amount(), 42.0);
        assert!(!q.has_bounds());
    }

    // -----------------------------------------------------------------------
    // Coordinate
    // -----------------------------------------------------------------------

    #[test]
    fn coordinate_defaults_to_earth_without_altitude() {
        let c = CoordinateValue::new(52.516, 13.3777, 0.0001);
        assert_eq!(c.globe(), CoordinateValue::EARTH);
        assert_eq!(c.altitude(), None);
    }

    #[test]
    fn coordinate_json_roundtrip() {
        let c = CoordinateValue::new(52.516, 13.3777, 0.0001).with_altitude(34.0);
        let json = c.to_json();
        assert_eq!(json["latitude"], 52.516);
        assert_eq!(json["altitude"], 34.0);
        let back = CoordinateValue::from_json(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn coordinate_decode_requires_the_full_key_set() {
        let json = json!({"latitude": 1.0, "longitude": 2.0});
        assert!(matches!(
            ClaimValue::from_json(&json, registry()),
            Err(ModelError::UnsupportedValueKind(_))
        ));
    }

    // -----------------------------------------------------------------------
    // Time
    // -----------------------------------------------------------------------

    #[test]
    fn time_defaults() {
        let t = TimeValue::new("+2023-05-01T00:00:00Z");
        assert_eq!(t.precision(), TimePrecision::Day);
        assert_eq!(t.calendarmodel(), TimeValue::GREGORIAN);
        assert_eq!(t.before(), 0);
        assert_eq!(t.timezone(), 0);
    }

    #[test]
    fn time_json_roundtrip() {
        let t = TimeValue::new("+1992-00-00T00:00:00Z")
            .with_precision(TimePrecision::Year)
            .with_uncertainty(1, 1);
        let json = t.to_json();
        assert_eq!(json["precision"], 9);
        let back = TimeValue::from_json(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn unknown_time_precision_is_rejected() {
        let json = json!({"time": "+2023-05-01T00:00:00Z", "precision": 15});
        assert!(TimeValue::from_json(&json).is_err());
    }

    #[test]
    fn precision_wire_roundtrip() {
        for raw in 0..=14 {
            let precision = TimePrecision::from_wire(raw).unwrap();
            assert_eq!(precision.as_wire(), raw);
        }
        assert_eq!(TimePrecision::from_wire(15), None);
    }

    // -----------------------------------------------------------------------
    // Structural decode dispatch
    // -----------------------------------------------------------------------

    #[test]
    fn bare_string_passes_through() {
        let value = ClaimValue::from_json(&json!("hello"), registry()).unwrap();
        assert_eq!(value, ClaimValue::String("hello".to_string()));
    }

    #[test]
    fn entity_reference_decodes_by_key_set() {
        let json = json!({"entity-type": "item", "id": "Q42", "numeric-id": 42});
        let value = ClaimValue::from_json(&json, registry()).unwrap();
        assert_eq!(
            value.as_entity().unwrap(),
            &EntityId::parse("Q42").unwrap()
        );
    }

    #[test]
    fn monolingual_text_decodes_by_key_set() {
        let json = json!({"text": "Tokyo", "language": "en"});
        let value = ClaimValue::from_json(&json, registry()).unwrap();
        assert_eq!(value.as_monolingual_text().unwrap().text(), "Tokyo");
    }

    #[test]
    fn unknown_shape_is_an_unsupported_value_kind() {
        let json = json!({"frobnitz": 1});
        assert!(matches!(
            ClaimValue::from_json(&json, registry()),
            Err(ModelError::UnsupportedValueKind(_))
        ));
    }

    #[test]
    fn sentinels_have_no_kind_and_no_wire_value() {
        assert_eq!(ClaimValue::NoValue.kind(), None);
        assert_eq!(ClaimValue::SomeValue.kind(), None);
        assert!(ClaimValue::NoValue.to_json().is_none());
        assert!(ClaimValue::SomeValue.to_json().is_none());
    }

    #[test]
    fn entity_encode_includes_numeric_id_for_simple_kinds_only() {
        let item = ClaimValue::Entity(EntityId::parse("Q42").unwrap());
        assert_eq!(item.to_json().unwrap()["numeric-id"], 42);

        let form = ClaimValue::Entity(EntityId::parse("L1-F1").unwrap());
        let encoded = form.to_json().unwrap();
        assert_eq!(encoded["entity-type"], "form");
        assert!(encoded.get("numeric-id").is_none());
    }

    #[test]
    fn typed_value_roundtrips_through_wire_form() {
        let original = ClaimValue::Quantity(QuantityValue::new(3.0, 2.0, 4.0, "Q11573"));
        let wire = original.to_json().unwrap();
        let back = ClaimValue::from_json(&wire, registry()).unwrap();
        assert_eq!(back, original);
    }
}
