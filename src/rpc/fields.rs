//! Checked extraction of typed values from the untyped JSON the node returns.
//!
//! Functions in this module decode a single value and report failures with a
//! path relative to that value. [`Fields`] looks up keys of an object and
//! prefixes the key to the path of any failure, so errors from nested values
//! point at the offending field, e.g. `transactions[2].amount`.

use crate::endpoints::{FieldError, FieldPath, FieldResult, WireType};
use num_bigint::BigInt;
use num_traits::FromPrimitive;
use serde_json::{Map, Number, Value};

/// Decode a JSON string.
pub fn string(value: &Value) -> FieldResult<&str> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        other => Err(FieldError::mismatch(
            FieldPath::root(),
            WireType::String,
            other,
        )),
    }
}

/// Decode a JSON boolean.
pub fn boolean(value: &Value) -> FieldResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(FieldError::mismatch(
            FieldPath::root(),
            WireType::Bool,
            other,
        )),
    }
}

/// Decode a JSON number into an exact integer.
///
/// The node writes every number as a float. A float is accepted only if it
/// is finite and has no fractional part, and is then converted bit-exactly,
/// so integral values above 2^53 keep every bit the float carries. Numbers
/// that are already integers in the JSON text are taken as they are, of any
/// width.
pub fn big_int(value: &Value) -> FieldResult<BigInt> {
    match value {
        Value::Number(number) => number_to_big_int(number)
            .ok_or_else(|| FieldError::numeric(FieldPath::root(), number)),
        other => Err(FieldError::mismatch(
            FieldPath::root(),
            WireType::Number,
            other,
        )),
    }
}

fn number_to_big_int(number: &Number) -> Option<BigInt> {
    if let Some(v) = number.as_u64() {
        return Some(v.into());
    }
    if let Some(v) = number.as_i64() {
        return Some(v.into());
    }
    // Integer literals outside the 64-bit range. Their text is available
    // since numbers are kept with arbitrary precision.
    if let Ok(v) = number.to_string().parse::<BigInt>() {
        return Some(v);
    }
    let f = number.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 {
        BigInt::from_f64(f)
    } else {
        None
    }
}

/// Decode a JSON number into a fixed width integer. Besides everything
/// [`big_int`] rejects, values outside the range of `T` (including negative
/// values for unsigned types) are rejected.
pub fn integer<T: TryFrom<BigInt>>(value: &Value) -> FieldResult<T> {
    let n = big_int(value)?;
    T::try_from(n).map_err(|_| FieldError::numeric(FieldPath::root(), value))
}

/// Decode a JSON object.
pub fn object(value: &Value) -> FieldResult<Fields<'_>> {
    match value {
        Value::Object(map) => Ok(Fields { map }),
        other => Err(FieldError::mismatch(
            FieldPath::root(),
            WireType::Object,
            other,
        )),
    }
}

/// Decode each element of a JSON array with `f`. A `null` is how the node
/// writes an empty list, so it decodes to an empty vector. Decoding stops at
/// the first element that fails.
pub fn sequence<'a, A>(
    value: &'a Value,
    mut f: impl FnMut(&'a Value) -> FieldResult<A>,
) -> FieldResult<Vec<A>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| f(item).map_err(|e| e.within_index(idx)))
            .collect(),
        other => Err(FieldError::mismatch(
            FieldPath::root(),
            WireType::Array,
            other,
        )),
    }
}

/// Keyed access to the fields of a JSON object.
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// The raw value under `key`.
    pub fn value(&self, key: &str) -> FieldResult<&'a Value> {
        self.map.get(key).ok_or_else(|| FieldError::missing(key))
    }

    /// Decode the value under `key` with `f`, attributing any failure to
    /// `key`.
    pub fn decode<A>(&self, key: &str, f: impl FnOnce(&'a Value) -> FieldResult<A>) -> FieldResult<A> {
        f(self.value(key)?).map_err(|e| e.within_key(key))
    }

    pub fn string(&self, key: &str) -> FieldResult<&'a str> { self.decode(key, string) }

    pub fn boolean(&self, key: &str) -> FieldResult<bool> { self.decode(key, boolean) }

    pub fn big_int(&self, key: &str) -> FieldResult<BigInt> { self.decode(key, big_int) }

    pub fn integer<T: TryFrom<BigInt>>(&self, key: &str) -> FieldResult<T> {
        self.decode(key, integer::<T>)
    }

    /// Decode the nested object under `key` with `f`.
    pub fn nested<A>(
        &self,
        key: &str,
        f: impl FnOnce(Fields<'a>) -> FieldResult<A>,
    ) -> FieldResult<A> {
        self.decode(key, |value| f(object(value)?))
    }

    /// Decode the array under `key`. An absent key yields an empty vector.
    pub fn sequence<A>(
        &self,
        key: &str,
        f: impl FnMut(&'a Value) -> FieldResult<A>,
    ) -> FieldResult<Vec<A>> {
        match self.map.get(key) {
            None => Ok(Vec::new()),
            Some(value) => sequence(value, f).map_err(|e| e.within_key(key)),
        }
    }

    /// Decode the array under `key`, failing if the key is absent. Used where
    /// the request obliges the node to include the list.
    pub fn required_sequence<A>(
        &self,
        key: &str,
        f: impl FnMut(&'a Value) -> FieldResult<A>,
    ) -> FieldResult<Vec<A>> {
        self.decode(key, |value| sequence(value, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::{DecodeErrorKind, PathSegment};
    use serde_json::json;

    #[test]
    fn test_big_int_from_floats() {
        assert_eq!(big_int(&json!(10000.0)).unwrap(), BigInt::from(10_000));
        assert_eq!(big_int(&json!(1.9975499e12)).unwrap(), BigInt::from(1_997_549_900_000u64));
        assert_eq!(big_int(&json!(-3.0)).unwrap(), BigInt::from(-3));

        // 2^60 + 2^8 is not representable in 53 bits of integer precision but
        // is an exact double.
        let f = ((1u64 << 60) + (1u64 << 8)) as f64;
        assert_eq!(big_int(&json!(f)).unwrap(), BigInt::from((1u64 << 60) + (1u64 << 8)));

        let huge = 2f64.powi(100);
        assert_eq!(big_int(&json!(huge)).unwrap(), BigInt::from(1) << 100);
    }

    #[test]
    fn test_big_int_rejects_fractions() {
        let err = big_int(&json!(1.5)).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::NumericFormat {
            value: "1.5".into(),
        });
        assert!(err.path.is_root());
    }

    #[test]
    fn test_big_int_rejects_other_shapes() {
        let err = big_int(&json!("100")).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::FieldTypeMismatch {
            expected: WireType::Number,
            found:    WireType::String,
        });
        assert_eq!(big_int(&Value::Null).unwrap_err().kind, DecodeErrorKind::FieldTypeMismatch {
            expected: WireType::Number,
            found:    WireType::Null,
        });
    }

    #[test]
    fn test_big_int_from_wide_literals() {
        let value: Value = serde_json::from_str("18446744073709551617").unwrap();
        let expected = (BigInt::from(1) << 64) + 1;
        assert_eq!(big_int(&value).unwrap(), expected);

        let value: Value = serde_json::from_str("-18446744073709551617").unwrap();
        assert_eq!(big_int(&value).unwrap(), -expected);

        // Literals written as floats still go through the exact float path.
        let value: Value = serde_json::from_str("1.9975499e+12").unwrap();
        assert_eq!(big_int(&value).unwrap(), BigInt::from(1_997_549_900_000u64));
        let value: Value = serde_json::from_str("10000.5").unwrap();
        assert!(matches!(
            big_int(&value).unwrap_err().kind,
            DecodeErrorKind::NumericFormat { .. }
        ));
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(integer::<u64>(&json!(5.0)).unwrap(), 5);
        assert_eq!(integer::<u32>(&json!(2)).unwrap(), 2);
        assert!(matches!(
            integer::<u64>(&json!(-1.0)).unwrap_err().kind,
            DecodeErrorKind::NumericFormat { .. }
        ));
        assert!(matches!(
            integer::<u32>(&json!(4294967296.0)).unwrap_err().kind,
            DecodeErrorKind::NumericFormat { .. }
        ));
    }

    #[test]
    fn test_fields_paths() {
        let value = json!({
            "name": "peer",
            "flag": true,
            "network": { "localAddress": 5 },
            "items": [1.0, 2.0, "three"]
        });
        let fields = object(&value).unwrap();
        assert_eq!(fields.string("name").unwrap(), "peer");
        assert!(fields.boolean("flag").unwrap());

        let err = fields.string("missing").unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::FieldMissing);
        assert_eq!(err.path.to_string(), "missing");

        let err = fields.boolean("name").unwrap_err();
        assert_eq!(err.path.to_string(), "name");

        let err = fields
            .nested("network", |network| network.string("localAddress"))
            .unwrap_err();
        assert_eq!(err.path.to_string(), "network.localAddress");

        let err = fields.sequence("items", integer::<u64>).unwrap_err();
        assert_eq!(err.path.to_string(), "items[2]");
        let indices: Vec<usize> = err
            .path
            .segments()
            .iter()
            .filter_map(|segment| match segment {
                PathSegment::Index(idx) => Some(*idx),
                PathSegment::Key(_) => None,
            })
            .collect();
        assert_eq!(indices, vec![2]);
        assert_eq!(err.path.segments()[0], PathSegment::Key("items".into()));
    }

    #[test]
    fn test_sequences() {
        let value = json!({ "empty": [], "none": null });
        let fields = object(&value).unwrap();
        assert!(fields.sequence("empty", string).unwrap().is_empty());
        assert!(fields.sequence("none", string).unwrap().is_empty());
        assert!(fields.sequence("absent", string).unwrap().is_empty());
        assert!(fields.required_sequence("none", string).unwrap().is_empty());
        assert_eq!(
            fields.required_sequence("absent", string).unwrap_err().kind,
            DecodeErrorKind::FieldMissing
        );
        assert!(sequence(&json!({}), string).is_err());
    }
}
