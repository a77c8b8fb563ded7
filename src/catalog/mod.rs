//! Typed views over the collections the backend serves.
//!
//! `FetchService` hands bodies back as opaque JSON; these records are for
//! callers that know they are talking to the media catalog backend.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Show {
    pub id: Option<i64>,
    pub name: String,
    pub season: Option<i64>,
    pub episode: Option<i64>,
    pub status: String,
    pub date_started: Option<NaiveDate>,
    pub date_finished: Option<NaiveDate>,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: Option<i64>,
    pub name: String,
    pub status: String,
    pub date_watched: Option<NaiveDate>,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Webcomic {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

fn decode<T: DeserializeOwned>(body: &Value) -> serde_json::Result<Vec<T>> {
    Vec::<T>::deserialize(body)
}

pub fn decode_shows(body: &Value) -> serde_json::Result<Vec<Show>> {
    decode(body)
}

pub fn decode_movies(body: &Value) -> serde_json::Result<Vec<Movie>> {
    decode(body)
}

pub fn decode_webcomics(body: &Value) -> serde_json::Result<Vec<Webcomic>> {
    decode(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_shows_with_dates() {
        let body = json!([{
            "id": 1,
            "name": "Severance",
            "season": 2,
            "episode": 4,
            "status": "watching",
            "date_started": "2025-01-17",
            "date_finished": null,
            "last_updated": "2025-02-07T21:15:03.120000"
        }]);

        let shows = decode_shows(&body).unwrap();
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].name, "Severance");
        assert_eq!(shows[0].season, Some(2));
        assert_eq!(
            shows[0].date_started,
            NaiveDate::from_ymd_opt(2025, 1, 17)
        );
        assert_eq!(shows[0].date_finished, None);
        assert!(shows[0].last_updated.is_some());
    }

    #[test]
    fn last_updated_is_optional() {
        let body = json!([
            {"id": 3, "name": "Paranatural"},
            {"id": null, "name": "Gunnerkrigg Court", "last_updated": null}
        ]);
        let comics = decode_webcomics(&body).unwrap();
        assert_eq!(comics[0].last_updated, None);
        assert_eq!(comics[1].id, None);
    }

    #[test]
    fn rejects_non_array_body() {
        let body = json!({"items": ["A", "B"]});
        assert!(decode_movies(&body).is_err());
    }
}
