//! Serde codecs for the legacy wire conventions.
//!
//! The backend and its historical frontend interchange `""` for unset foreign
//! keys and dates, and plain numbers (or numeric strings) otherwise. These
//! `with`-modules keep the Rust models as `Option<_>` while staying
//! byte-compatible with those payloads.

/// `Option<i64>` as the backend spells ids: a number, a numeric string, `""`,
/// or null on input; `""` for `None` on output.
pub mod opt_id {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Int(i64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_i64(*id),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<IdRepr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(IdRepr::Int(id)) => Ok(Some(id)),
            Some(IdRepr::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    Ok(None)
                } else {
                    text.parse()
                        .map(Some)
                        .map_err(|_| de::Error::custom(format!("invalid id: {:?}", text)))
                }
            }
        }
    }
}

/// `Option<NaiveDate>` as `YYYY-MM-DD`, with `""` and null meaning unset.
pub mod opt_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(text) if text.trim().is_empty() => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text.trim(), FORMAT)
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid date: {:?}", text))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, with = "super::opt_id")]
        id: Option<i64>,
        #[serde(default, with = "super::opt_date")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn test_id_accepts_number_string_and_empty() {
        let p: Probe = serde_json::from_str(r#"{"id": 7, "date": ""}"#).unwrap();
        assert_eq!(p.id, Some(7));

        let p: Probe = serde_json::from_str(r#"{"id": "42", "date": null}"#).unwrap();
        assert_eq!(p.id, Some(42));

        let p: Probe = serde_json::from_str(r#"{"id": "", "date": ""}"#).unwrap();
        assert_eq!(p.id, None);

        let p: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.id, None);
    }

    #[test]
    fn test_none_serializes_as_empty_string() {
        let json = serde_json::to_string(&Probe { id: None, date: None }).unwrap();
        assert_eq!(json, r#"{"id":"","date":""}"#);
    }

    #[test]
    fn test_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
        let json = serde_json::to_string(&Probe {
            id: Some(1),
            date: Some(date),
        })
        .unwrap();
        assert_eq!(json, r#"{"id":1,"date":"1990-05-17"}"#);

        let p: Probe = serde_json::from_str(&json).unwrap();
        assert_eq!(p.date, Some(date));
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        let result = serde_json::from_str::<Probe>(r#"{"id": "seven", "date": ""}"#);
        assert!(result.is_err());
    }
}
