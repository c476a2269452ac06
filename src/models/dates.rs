//! Serde helpers for Börsdata date fields.
//!
//! The API returns calendar dates either as `YYYY-MM-DD` or as a midnight
//! timestamp `YYYY-MM-DDT00:00:00`. Both decode to [`NaiveDate`] and are
//! written back as `YYYY-MM-DD`, the same form the query parameters use.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date, ignoring any time component.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let day = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(day.trim(), DATE_FORMAT).ok()
}

/// Parse a timestamp with or without fractional seconds or an offset.
pub(crate) fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Required date field.
pub(crate) mod date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_date(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{s}'")))
    }
}

/// Optional date field; `null` and empty strings decode as `None`.
pub(crate) mod opt_date {
    use super::*;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.collect_str(&d.format(DATE_FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.trim().is_empty() => parse_date(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{s}'"))),
            _ => Ok(None),
        }
    }
}

/// Optional timestamp field.
pub(crate) mod opt_datetime {
    use super::*;

    pub fn serialize<S: Serializer>(
        dt: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.collect_str(&dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.trim().is_empty() => parse_datetime(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{s}'"))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2009, 4, 22).unwrap();
        assert_eq!(parse_date("2009-04-22"), Some(expected));
        assert_eq!(parse_date("2009-04-22T00:00:00"), Some(expected));
        assert_eq!(parse_date("22/04/2009"), None);
    }

    #[test]
    fn test_parse_datetime_forms() {
        let plain = parse_datetime("2021-02-07T22:21:34").unwrap();
        assert_eq!(plain.format("%H:%M:%S").to_string(), "22:21:34");

        let fractional = parse_datetime("2021-02-07T22:21:34.47").unwrap();
        assert_eq!(fractional.date(), plain.date());

        let zoned = parse_datetime("2021-02-07T22:21:34Z").unwrap();
        assert_eq!(zoned, plain);

        let day_only = parse_datetime("2021-02-07").unwrap();
        assert_eq!(day_only.format("%H:%M").to_string(), "00:00");
    }

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Holder {
        #[serde(with = "date")]
        d: NaiveDate,
        #[serde(with = "opt_date", default)]
        o: Option<NaiveDate>,
    }

    #[test]
    fn test_output_matches_input_convention() {
        let holder: Holder =
            serde_json::from_str(r#"{"d": "2020-03-31T00:00:00", "o": ""}"#).unwrap();
        assert!(holder.o.is_none());

        let json = serde_json::to_value(&holder).unwrap();
        assert_eq!(json["d"], "2020-03-31");
        assert!(json["o"].is_null());
    }
}
