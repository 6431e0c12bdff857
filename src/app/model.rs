use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::Page;

/// One row of `books.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "publish_date")]
    pub publish_date: NaiveDate,
    pub isbn: String,
}

/// Accepts `2020-01-01`, `2020-01-01T10:30:00` and RFC 3339 timestamps;
/// only the calendar date is kept.
fn publish_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(stamp.date_naive());
    }
    raw.parse::<NaiveDateTime>()
        .map(|stamp| stamp.date())
        .map_err(|err| serde::de::Error::custom(format!("invalid publishDate '{raw}': {err}")))
}

/// Application state. Replaced wholesale on every message.
///
/// `books == None` covers both "never requested" and "request in flight";
/// the two are not told apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    pub page: Page,
    pub counter: i32,
    pub input_string: String,
    pub label: String,
    pub books: Option<Vec<Book>>,
    pub error: Option<String>,
}
