//! Custom serde helpers for upstream wire formats.

/// Deserializes an integer amount sent either as a JSON string
/// (`"2000000000000000000"`) or as a JSON integer (`1000000`).
///
/// JSON integers keep their exact digits at any magnitude (serde_json's
/// `arbitrary_precision`), so wei amounts above `u64::MAX` survive. The value
/// is kept as its decimal string; parsing into a big integer happens in the
/// `convert` layer so a malformed value can name its field.
pub mod amount {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::{Number, Value};

    const EXPECTED: &str = "an integer amount as a string or integer";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => integer_digits(&n).ok_or_else(|| {
                de::Error::invalid_value(Unexpected::Other("non-integer number"), &EXPECTED)
            }),
            Value::Bool(b) => Err(de::Error::invalid_type(Unexpected::Bool(b), &EXPECTED)),
            Value::Null => Err(de::Error::invalid_type(Unexpected::Unit, &EXPECTED)),
            Value::Array(_) => Err(de::Error::invalid_type(Unexpected::Seq, &EXPECTED)),
            Value::Object(_) => Err(de::Error::invalid_type(Unexpected::Map, &EXPECTED)),
        }
    }

    /// The number's literal digits, if it is an integer.
    fn integer_digits(n: &Number) -> Option<String> {
        let literal = n.to_string();
        let digits = literal.strip_prefix('-').unwrap_or(&literal);
        let integer = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
        integer.then_some(literal)
    }

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }
}

/// Optional variant of [`amount`]: a missing field or `null` is `None`.
///
/// Use together with `#[serde(default)]`.
pub mod opt_amount {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    struct Wrapped(#[serde(with = "super::amount")] String);

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(s)| s))
    }

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(v),
            None => serializer.serialize_none(),
        }
    }
}

/// Serializes a `BigInt` as its decimal string, matching the wire format.
pub mod big_int {
    use num_bigint::BigInt;
    use serde::Serializer;

    pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }
}

/// Optional variant of [`big_int`].
pub mod opt_big_int {
    use num_bigint::BigInt;
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<BigInt>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }
}
