//! Serde adapters for wire representations that differ from the Rust type.
//!
//! Blob content travels as base64 text and timestamps as epoch seconds
//! (a JSON number with millisecond precision).

/// Serde helper for base64 encoding/decoding byte vectors.
pub mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }

    /// Same encoding for optional blobs. Pair with
    /// `skip_serializing_if = "Option::is_none"` and `default`.
    pub mod option {
        use base64::{engine::general_purpose::STANDARD, Engine};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match bytes {
                Some(b) => serializer.serialize_str(&STANDARD.encode(b)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = Option::<String>::deserialize(deserializer)?;
            s.map(|s| STANDARD.decode(&s).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

/// Serde helper for timestamps carried as fractional epoch seconds.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) fn to_seconds(value: &DateTime<Utc>) -> f64 {
        value.timestamp_millis() as f64 / 1000.0
    }

    pub(crate) fn from_seconds<E: serde::de::Error>(seconds: f64) -> Result<DateTime<Utc>, E> {
        if !seconds.is_finite() {
            return Err(E::custom("timestamp is not a finite number"));
        }
        let millis = (seconds * 1000.0).round() as i64;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {seconds}")))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(to_seconds(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        from_seconds(f64::deserialize(deserializer)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        #[serde(with = "super::base64_bytes")]
        content: Vec<u8>,
        #[serde(
            default,
            with = "super::base64_bytes::option",
            skip_serializing_if = "Option::is_none"
        )]
        extra: Option<Vec<u8>>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "super::epoch_seconds")]
        at: DateTime<Utc>,
    }

    #[test]
    fn test_base64_content() {
        let blob = Blob {
            content: b"hello".to_vec(),
            extra: None,
        };
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, r#"{"content":"aGVsbG8="}"#);

        let back: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(back, blob);
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let result: Result<Blob, _> = serde_json::from_str(r#"{"content":"@@@"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_epoch_seconds_accepts_fractional_and_integer() {
        let frac: Stamped = serde_json::from_str(r#"{"at":1484167798.125}"#).unwrap();
        let expected = Utc.timestamp_millis_opt(1_484_167_798_125).unwrap();
        assert_eq!(frac.at, expected);
        assert_eq!(serde_json::to_string(&frac).unwrap(), r#"{"at":1484167798.125}"#);

        let whole: Stamped = serde_json::from_str(r#"{"at":1484167798}"#).unwrap();
        assert_eq!(whole.at.timestamp(), 1_484_167_798);
    }

    #[test]
    fn test_epoch_seconds_rejects_non_numbers() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
        assert!(serde_json::from_str::<Stamped>(r#"{"at":1e300}"#).is_err());
    }
}
