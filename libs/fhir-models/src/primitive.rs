//! FHIR R4 primitive types
//!
//! Primitive values stay close to their JSON text. Dates, times, codes and
//! URIs are kept as strings, decimals keep the exact digits they were read
//! with, and every primitive may carry an [`Element`] from its `_name`
//! sibling property.

use crate::element::Element;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// The primitive datatypes of FHIR R4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Integer,
    UnsignedInt,
    PositiveInt,
    Decimal,
    String,
    Code,
    Id,
    Markdown,
    Uri,
    Url,
    Canonical,
    Oid,
    Uuid,
    Date,
    DateTime,
    Instant,
    Time,
    Base64Binary,
    Xhtml,
}

/// How a primitive is written in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonForm {
    Boolean,
    Integer,
    Decimal,
    String,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 20] = [
        PrimitiveType::Boolean,
        PrimitiveType::Integer,
        PrimitiveType::UnsignedInt,
        PrimitiveType::PositiveInt,
        PrimitiveType::Decimal,
        PrimitiveType::String,
        PrimitiveType::Code,
        PrimitiveType::Id,
        PrimitiveType::Markdown,
        PrimitiveType::Uri,
        PrimitiveType::Url,
        PrimitiveType::Canonical,
        PrimitiveType::Oid,
        PrimitiveType::Uuid,
        PrimitiveType::Date,
        PrimitiveType::DateTime,
        PrimitiveType::Instant,
        PrimitiveType::Time,
        PrimitiveType::Base64Binary,
        PrimitiveType::Xhtml,
    ];

    /// The FHIR type code, e.g. `dateTime`.
    pub const fn code(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::UnsignedInt => "unsignedInt",
            PrimitiveType::PositiveInt => "positiveInt",
            PrimitiveType::Decimal => "decimal",
            PrimitiveType::String => "string",
            PrimitiveType::Code => "code",
            PrimitiveType::Id => "id",
            PrimitiveType::Markdown => "markdown",
            PrimitiveType::Uri => "uri",
            PrimitiveType::Url => "url",
            PrimitiveType::Canonical => "canonical",
            PrimitiveType::Oid => "oid",
            PrimitiveType::Uuid => "uuid",
            PrimitiveType::Date => "date",
            PrimitiveType::DateTime => "dateTime",
            PrimitiveType::Instant => "instant",
            PrimitiveType::Time => "time",
            PrimitiveType::Base64Binary => "base64Binary",
            PrimitiveType::Xhtml => "xhtml",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    pub const fn json_form(self) -> JsonForm {
        match self {
            PrimitiveType::Boolean => JsonForm::Boolean,
            PrimitiveType::Integer | PrimitiveType::UnsignedInt | PrimitiveType::PositiveInt => {
                JsonForm::Integer
            }
            PrimitiveType::Decimal => JsonForm::Decimal,
            _ => JsonForm::String,
        }
    }

    /// Inclusive bounds for the integer types.
    pub const fn integer_range(self) -> Option<(i64, i64)> {
        match self {
            PrimitiveType::Integer => Some((i32::MIN as i64, i32::MAX as i64)),
            PrimitiveType::UnsignedInt => Some((0, i32::MAX as i64)),
            PrimitiveType::PositiveInt => Some((1, i32::MAX as i64)),
            _ => None,
        }
    }

    /// Checks a string-form value against the R4 lexical rules.
    ///
    /// `string`, `markdown` and `xhtml` accept any text.
    pub fn is_lexically_valid(self, text: &str) -> bool {
        let pattern: &Regex = match self {
            PrimitiveType::Id => &ID,
            PrimitiveType::Code => &CODE,
            PrimitiveType::Oid => &OID,
            PrimitiveType::Uuid => &UUID,
            PrimitiveType::Date => &DATE,
            PrimitiveType::DateTime => &DATE_TIME,
            PrimitiveType::Instant => &INSTANT,
            PrimitiveType::Time => &TIME,
            PrimitiveType::Base64Binary => &BASE64,
            PrimitiveType::Uri | PrimitiveType::Url | PrimitiveType::Canonical => &URI,
            PrimitiveType::Decimal => &DECIMAL,
            _ => return true,
        };
        pattern.is_match(text)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

static ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-\.]{1,64}$").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s]+( [^\s]+)*$").unwrap());
static OID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^urn:oid:[0-2](\.(0|[1-9][0-9]*))+$").unwrap());
static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^urn:uuid:[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1]))?)?$",
    )
    .unwrap()
});
static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1])(T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00)))?)?)?$",
    )
    .unwrap()
});
static INSTANT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1])T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00))$",
    )
    .unwrap()
});
static TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?$").unwrap());
static BASE64: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*([0-9a-zA-Z\+/=]){4}\s*)+$").unwrap());
static URI: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S*$").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?$").unwrap()
});

/// A FHIR decimal, stored as the exact text it was read or built from.
///
/// `1.50` stays `1.50`; converting to `f64` is explicit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal(String);

impl Decimal {
    pub fn parse(text: &str) -> Result<Self> {
        if DECIMAL.is_match(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(Error::InvalidDecimal(text.to_string()))
        }
    }

    /// Shortest text that round-trips through `f64`. `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let text = format!("{value}");
        Self::parse(&text).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_f64(&self) -> f64 {
        // The lexical check guarantees a float literal.
        self.0.parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Exact numeric value, if it fits `rust_decimal`'s 96-bit mantissa.
    pub fn to_decimal(&self) -> Option<rust_decimal::Decimal> {
        if self.0.contains(['e', 'E']) {
            rust_decimal::Decimal::from_scientific(&self.0).ok()
        } else {
            rust_decimal::Decimal::from_str(&self.0).ok()
        }
    }

    /// The value after a trip through IEEE-754 double precision.
    pub fn lossy(&self) -> Self {
        Self::from_f64(self.to_f64()).unwrap_or_else(|| self.clone())
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value.to_string())
    }
}

/// The value half of a primitive.
///
/// An integer equals a decimal written with the same digits, so `70` built
/// in code matches the `70` read back from a decimal field.
#[derive(Debug, Clone)]
pub enum PrimitiveValue {
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    String(String),
}

impl PrimitiveValue {
    pub fn json_form(&self) -> JsonForm {
        match self {
            PrimitiveValue::Boolean(_) => JsonForm::Boolean,
            PrimitiveValue::Integer(_) => JsonForm::Integer,
            PrimitiveValue::Decimal(_) => JsonForm::Decimal,
            PrimitiveValue::String(_) => JsonForm::String,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            PrimitiveValue::Boolean(_) => "boolean",
            PrimitiveValue::Integer(_) => "integer",
            PrimitiveValue::Decimal(_) => "decimal",
            PrimitiveValue::String(_) => "string",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrimitiveValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for PrimitiveValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PrimitiveValue::Boolean(a), PrimitiveValue::Boolean(b)) => a == b,
            (PrimitiveValue::Integer(a), PrimitiveValue::Integer(b)) => a == b,
            (PrimitiveValue::Decimal(a), PrimitiveValue::Decimal(b)) => a == b,
            (PrimitiveValue::String(a), PrimitiveValue::String(b)) => a == b,
            (PrimitiveValue::Integer(i), PrimitiveValue::Decimal(d))
            | (PrimitiveValue::Decimal(d), PrimitiveValue::Integer(i)) => {
                d.as_str() == i.to_string()
            }
            _ => false,
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Boolean(b) => write!(f, "{b}"),
            PrimitiveValue::Integer(i) => write!(f, "{i}"),
            PrimitiveValue::Decimal(d) => write!(f, "{d}"),
            PrimitiveValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for PrimitiveValue {
    fn from(value: bool) -> Self {
        PrimitiveValue::Boolean(value)
    }
}

impl From<i32> for PrimitiveValue {
    fn from(value: i32) -> Self {
        PrimitiveValue::Integer(value.into())
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        PrimitiveValue::Integer(value)
    }
}

impl From<Decimal> for PrimitiveValue {
    fn from(value: Decimal) -> Self {
        PrimitiveValue::Decimal(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::String(value.to_string())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::String(value)
    }
}

/// A primitive property: the JSON value and its `_name` sibling.
///
/// Either half may be absent, but a decoded primitive always has at least one.
/// An empty element compares equal to no element.
#[derive(Debug, Clone, Default)]
pub struct Primitive {
    pub value: Option<PrimitiveValue>,
    pub element: Option<Element>,
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.present_element() == other.present_element()
    }
}

impl Primitive {
    fn present_element(&self) -> Option<&Element> {
        self.element.as_ref().filter(|element| !element.is_empty())
    }

    pub fn new(value: impl Into<PrimitiveValue>) -> Self {
        Self {
            value: Some(value.into()),
            element: None,
        }
    }

    /// A primitive with no value, only id/extensions.
    pub fn from_element(element: Element) -> Self {
        Self {
            value: None,
            element: Some(element),
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.element.as_ref().map_or(true, Element::is_empty)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(PrimitiveValue::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Some(PrimitiveValue::Boolean(b)) => Some(b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.value {
            Some(PrimitiveValue::Integer(i)) => Some(i),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&Decimal> {
        match &self.value {
            Some(PrimitiveValue::Decimal(d)) => Some(d),
            _ => None,
        }
    }
}

macro_rules! primitive_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Primitive {
                fn from(value: $ty) -> Self {
                    Primitive::new(value)
                }
            }
        )*
    };
}

primitive_from!(bool, i32, i64, Decimal, &str, String, PrimitiveValue);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_round_trip() {
        for ty in PrimitiveType::ALL {
            assert_eq!(PrimitiveType::from_code(ty.code()), Some(ty));
        }
        assert_eq!(PrimitiveType::from_code("Quantity"), None);
    }

    #[test]
    fn decimal_keeps_text() {
        let d = Decimal::parse("1.50").unwrap();
        assert_eq!(d.as_str(), "1.50");
        assert_eq!(d.to_decimal().unwrap().to_string(), "1.50");
        assert!((d.to_f64() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn integers_equal_decimals_with_the_same_digits() {
        let seventy = Decimal::parse("70").unwrap();
        assert_eq!(PrimitiveValue::Integer(70), PrimitiveValue::Decimal(seventy.clone()));
        assert_eq!(PrimitiveValue::Decimal(seventy), PrimitiveValue::Integer(70));
        assert_ne!(
            PrimitiveValue::Integer(70),
            PrimitiveValue::Decimal(Decimal::parse("70.0").unwrap())
        );
        assert_ne!(PrimitiveValue::Integer(1), PrimitiveValue::Boolean(true));
    }

    #[test]
    fn empty_element_equals_none() {
        let bare = Primitive::new("x");
        let mut with_empty = Primitive::new("x");
        with_empty.element = Some(Element::new());
        assert_eq!(bare, with_empty);
        with_empty.element = Some(Element::new().with_id("a"));
        assert_ne!(bare, with_empty);
    }

    #[test]
    fn decimal_rejects_non_numbers() {
        assert!(Decimal::parse("01").is_err());
        assert!(Decimal::parse("1.").is_err());
        assert!(Decimal::parse("abc").is_err());
        assert!(Decimal::parse("1e10").is_ok());
    }

    #[test]
    fn lossy_decimal_goes_through_f64() {
        let d = Decimal::parse("0.1000000000000000000001").unwrap();
        assert_eq!(d.lossy().as_str(), "0.1");
        assert_eq!(Decimal::parse("1.50").unwrap().lossy().as_str(), "1.5");
    }

    #[test]
    fn lexical_checks() {
        assert!(PrimitiveType::Date.is_lexically_valid("1970-01-01"));
        assert!(PrimitiveType::Date.is_lexically_valid("1970"));
        assert!(!PrimitiveType::Date.is_lexically_valid("1970-13-01"));
        assert!(PrimitiveType::DateTime.is_lexically_valid("2015-02-07T13:28:17-05:00"));
        assert!(!PrimitiveType::DateTime.is_lexically_valid("2015-02-07T13:28"));
        assert!(PrimitiveType::Instant.is_lexically_valid("2015-02-07T13:28:17.239+02:00"));
        assert!(!PrimitiveType::Instant.is_lexically_valid("2015-02-07"));
        assert!(PrimitiveType::Id.is_lexically_valid("example-1.a"));
        assert!(!PrimitiveType::Id.is_lexically_valid("has space"));
        assert!(PrimitiveType::Code.is_lexically_valid("male"));
        assert!(!PrimitiveType::Code.is_lexically_valid(" male"));
        assert!(PrimitiveType::Oid.is_lexically_valid("urn:oid:1.2.3.4"));
        assert!(!PrimitiveType::Uri.is_lexically_valid("http://a b"));
        assert!(PrimitiveType::Base64Binary.is_lexically_valid("aGVsbG8="));
        assert!(PrimitiveType::String.is_lexically_valid("  anything \n"));
    }

    #[test]
    fn integer_ranges() {
        assert_eq!(PrimitiveType::PositiveInt.integer_range(), Some((1, i32::MAX as i64)));
        assert_eq!(PrimitiveType::UnsignedInt.integer_range().unwrap().0, 0);
        assert_eq!(PrimitiveType::String.integer_range(), None);
    }

    #[test]
    fn primitive_accessors() {
        let p = Primitive::new("female");
        assert_eq!(p.as_str(), Some("female"));
        assert_eq!(p.as_bool(), None);
        assert!(!p.is_empty());
        assert!(Primitive::default().is_empty());
        assert_eq!(Primitive::from(true).as_bool(), Some(true));
        assert_eq!(Primitive::from(7).as_integer(), Some(7));
    }
}
