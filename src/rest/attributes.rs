//! Attribute sets and their query-string encoding.
//!
//! Storenvy takes every attribute, on reads and writes alike, as a query
//! parameter. An [`AttributeSet`] keeps attributes in insertion order and
//! renders each one as `&<key>=<value>`:
//!
//! - strings are used verbatim
//! - numbers and booleans use their plain textual form
//! - arrays and objects are serialized as compact JSON first
//!
//! Keys and values are then percent-encoded with the same rule as
//! JavaScript's `encodeURIComponent`, which is what the Storenvy API expects.
//!
//! ```rust
//! use storenvy_api::rest::AttributeSet;
//! use serde_json::json;
//!
//! let mut attrs = AttributeSet::new();
//! attrs.insert("name", "awesome product");
//! attrs.insert("tags", json!(["a", "b"]));
//!
//! assert_eq!(
//!     attrs.to_query_string(),
//!     "&name=awesome%20product&tags=%5B%22a%22%2C%22b%22%5D"
//! );
//! ```

use serde_json::Value;

use crate::clients::rest::RestError;

/// Largest amount, in cents, the API accepts (the 32-bit signed bound).
pub const MAX_CENTS: i64 = 2_147_483_647;

/// Characters `urlencoding` escapes but `encodeURIComponent` leaves alone.
const COMPONENT_SAFE: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes a query component the way `encodeURIComponent` does.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is encoded as UTF-8
/// percent escapes.
///
/// ```rust
/// use storenvy_api::rest::encode_component;
///
/// assert_eq!(encode_component("a b&c"), "a%20b%26c");
/// assert_eq!(encode_component("it's (ok)!"), "it's%20(ok)!");
/// assert_eq!(encode_component("owner[login]"), "owner%5Blogin%5D");
/// ```
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut encoded = urlencoding::encode(raw).into_owned();
    // A literal `%` is itself encoded as `%25`, so these escapes can only
    // come from the five characters below.
    for (escape, literal) in COMPONENT_SAFE {
        if encoded.contains(escape) {
            encoded = encoded.replace(escape, literal);
        }
    }
    encoded
}

/// Renders an attribute value as the text that goes on the wire.
#[must_use]
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// An ordered set of named attribute values.
///
/// Inserting a key that already exists replaces its value in place, keeping
/// the key's original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    entries: Vec<(String, Value)>,
}

impl AttributeSet {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an attribute set from a JSON object, keeping its key order.
    ///
    /// Returns `None` if `value` is not an object.
    #[must_use]
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(map.into_iter().collect()),
            _ => None,
        }
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value of an attribute, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the attributes as `&key=value` pairs, in insertion order.
    ///
    /// An empty set renders as the empty string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| {
                format!(
                    "&{}={}",
                    encode_component(key),
                    encode_component(&value_to_text(value))
                )
            })
            .collect()
    }

    /// Fails if `field` holds an amount above [`MAX_CENTS`].
    ///
    /// A missing field, or one that is not numeric, passes.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ValueOutOfRange`] if the amount is too large.
    pub fn validate_cents(&self, field: &'static str) -> Result<(), RestError> {
        self.get(field)
            .map_or(Ok(()), |value| validate_cents(field, value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// Fails if `value` is an amount above [`MAX_CENTS`].
///
/// Numbers and numeric strings are checked; anything else passes, leaving it
/// to the server to reject.
///
/// # Errors
///
/// Returns [`RestError::ValueOutOfRange`] if the amount is too large.
///
/// ```rust
/// use storenvy_api::rest::validate_cents;
/// use serde_json::json;
///
/// assert!(validate_cents("cents", &json!(2_147_483_647)).is_ok());
/// assert!(validate_cents("cents", &json!(2_147_483_648_i64)).is_err());
/// assert!(validate_cents("cents", &json!("2147483648")).is_err());
/// ```
pub fn validate_cents(field: &'static str, value: &Value) -> Result<(), RestError> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        #[allow(clippy::cast_precision_loss)]
        Some(amount) if amount > MAX_CENTS as f64 => Err(RestError::ValueOutOfRange {
            field,
            value: value_to_text(value),
            max: MAX_CENTS,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("abcXYZ019-_.~"), "abcXYZ019-_.~");
        assert_eq!(encode_component("!*'()"), "!*'()");
        assert_eq!(encode_component(" "), "%20");
        assert_eq!(encode_component("a+b=c&d"), "a%2Bb%3Dc%26d");
        assert_eq!(encode_component("/?#"), "%2F%3F%23");
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_encode_component_keeps_literal_percent_escapes_encoded() {
        assert_eq!(encode_component("%21"), "%2521");
        assert_eq!(encode_component("100%"), "100%25");
    }

    #[test]
    fn test_query_string_preserves_insertion_order() {
        let attrs = AttributeSet::new().with("b", 5).with("a", "x");
        assert_eq!(attrs.to_query_string(), "&b=5&a=x");
    }

    #[test]
    fn test_insert_replaces_existing_key_in_place() {
        let mut attrs = AttributeSet::new().with("name", "old").with("price", 10);
        attrs.insert("name", "new");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.to_query_string(), "&name=new&price=10");
    }

    #[test]
    fn test_reserved_characters_in_keys_and_values_are_encoded() {
        let attrs = AttributeSet::new().with("owner[email]", "a@b.com");
        assert_eq!(attrs.to_query_string(), "&owner%5Bemail%5D=a%40b.com");
    }

    #[test]
    fn test_scalar_values_use_plain_text() {
        let attrs = AttributeSet::new()
            .with("in_stock", true)
            .with("quantity", 3)
            .with("ratio", 1.5)
            .with("nothing", Value::Null);
        assert_eq!(
            attrs.to_query_string(),
            "&in_stock=true&quantity=3&ratio=1.5&nothing=null"
        );
    }

    #[test]
    fn test_structured_value_survives_decode_and_parse() {
        let rates = json!([{"shipping_class_id": 923_919, "first_item_in_cents": 699}]);
        let attrs = AttributeSet::new().with("rates", rates.clone());

        let query = attrs.to_query_string();
        let encoded = query.strip_prefix("&rates=").unwrap();
        let decoded = urlencoding::decode(encoded).unwrap();
        let parsed: Value = serde_json::from_str(&decoded).unwrap();

        assert_eq!(parsed, rates);
        assert_eq!(
            decoded,
            r#"[{"shipping_class_id":923919,"first_item_in_cents":699}]"#
        );
    }

    #[test]
    fn test_string_value_holding_json_is_sent_verbatim() {
        let raw = r#"[{"a": 1}]"#;
        let attrs = AttributeSet::new().with("rates", raw);
        let query = attrs.to_query_string();
        assert_eq!(query, format!("&rates={}", encode_component(raw)));
    }

    #[test]
    fn test_empty_set_renders_nothing() {
        assert_eq!(AttributeSet::new().to_query_string(), "");
        assert!(AttributeSet::new().is_empty());
    }

    #[test]
    fn test_from_json_keeps_object_order() {
        let attrs = AttributeSet::from_json(json!({"zeta": 1, "alpha": 2})).unwrap();
        assert_eq!(attrs.to_query_string(), "&zeta=1&alpha=2");
        assert!(AttributeSet::from_json(json!([1, 2])).is_none());
    }

    #[test]
    fn test_from_iterator() {
        let attrs: AttributeSet = vec![("status", "open"), ("updated_at_min", "123456")]
            .into_iter()
            .collect();
        assert_eq!(attrs.to_query_string(), "&status=open&updated_at_min=123456");
    }

    #[test]
    fn test_validate_cents_bound() {
        assert!(validate_cents("cents", &json!(MAX_CENTS)).is_ok());
        assert!(validate_cents("cents", &json!("1000000")).is_ok());
        assert!(validate_cents("cents", &json!("not a number")).is_ok());

        let error = validate_cents("cents", &json!(MAX_CENTS + 1)).unwrap_err();
        assert!(matches!(
            error,
            RestError::ValueOutOfRange { field: "cents", ref value, max: MAX_CENTS }
                if value == "2147483648"
        ));
    }

    #[test]
    fn test_attribute_set_validate_cents_skips_missing_field() {
        let attrs = AttributeSet::new().with("name", "x");
        assert!(attrs.validate_cents("cents").is_ok());

        let attrs = attrs.with("cents", 3_000_000_000_i64);
        assert!(attrs.validate_cents("cents").is_err());
    }
}
