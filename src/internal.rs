pub(crate) mod big_int_string {
    use num_bigint::BigInt;
    use serde::Deserialize;

    /// Serialize (via Serde) a [`BigInt`] as its decimal string, so that
    /// consumers never read it back through a float.
    pub fn serialize<S: serde::Serializer>(value: &BigInt, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&value.to_str_radix(10))
    }

    /// Deserialize (via Serde) a [`BigInt`] from its decimal string.
    pub fn deserialize<'de, D: serde::Deserializer<'de>>(des: D) -> Result<BigInt, D::Error> {
        let s = String::deserialize(des)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Wrapper {
        #[serde(with = "super::big_int_string")]
        value: BigInt,
    }

    #[test]
    fn test_big_int_string() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_string(&Wrapper { value: big.clone() }).unwrap();
        assert_eq!(json, r#"{"value":"123456789012345678901234567890"}"#);
        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value, big);

        assert!(serde_json::from_str::<Wrapper>(r#"{"value":"12.5"}"#).is_err());
    }
}
