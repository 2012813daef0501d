//! Typed contract-call arguments.
//!
//! Values serialize to the wallet as `{"type": ..., "value": ...}` objects.
//! Unsigned integers are carried as decimal strings so that the full `u128`
//! range survives JSON.

use serde::{Deserialize, Serialize};

/// A typed argument for a contract function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ClarityValue {
    Uint(#[serde(with = "u128_string")] u128),
    Principal(String),
    StringAscii(String),
    List(Vec<ClarityValue>),
}

impl ClarityValue {
    pub fn uint(value: impl Into<u128>) -> Self {
        ClarityValue::Uint(value.into())
    }

    pub fn principal(address: impl Into<String>) -> Self {
        ClarityValue::Principal(address.into())
    }

    pub fn string_ascii(value: impl Into<String>) -> Self {
        ClarityValue::StringAscii(value.into())
    }

    pub fn list(values: impl IntoIterator<Item = ClarityValue>) -> Self {
        ClarityValue::List(values.into_iter().collect())
    }

    /// Short type name, used in log fields.
    pub fn type_name(&self) -> &'static str {
        match self {
            ClarityValue::Uint(_) => "uint",
            ClarityValue::Principal(_) => "principal",
            ClarityValue::StringAscii(_) => "string-ascii",
            ClarityValue::List(_) => "list",
        }
    }
}

mod u128_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uint_serializes_as_decimal_string() {
        let value = ClarityValue::uint(2_500_000u64);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"type": "uint", "value": "2500000"})
        );
    }

    #[test]
    fn test_nested_list_shape() {
        let value = ClarityValue::list(vec![
            ClarityValue::principal("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG"),
            ClarityValue::string_ascii("bc1q"),
        ]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({
                "type": "list",
                "value": [
                    {"type": "principal", "value": "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG"},
                    {"type": "string-ascii", "value": "bc1q"}
                ]
            })
        );
    }

    #[test]
    fn test_large_uint_parses_back() {
        let decoded: ClarityValue =
            serde_json::from_value(json!({"type": "uint", "value": u128::MAX.to_string()})).unwrap();
        assert_eq!(decoded, ClarityValue::Uint(u128::MAX));
        assert_eq!(decoded.type_name(), "uint");
    }
}
