//! # Domain records exchanged with the blog backend
//!
//! These types are the deserialised shapes of the backend's JSON payloads. They
//! are `Serialize + Deserialize` so the same structs travel over the wire, into
//! the app state, and (for [`User`]) into local storage.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The authenticated user: profile fields plus the bearer `token`. |
//! | [`UserEntry`] | One row of the users list, also used as the author of articles and comments. |
//! | [`Article`] | A blog article with its tags, timestamps, author and comments. |
//! | [`Comment`] | A comment attached to an article. |
//! | [`Timestamp`] | A UTC instant that accepts epoch milliseconds or RFC 3339 strings. |
//!
//! Optional fields use `#[serde(default)]` so a `null` or missing value never
//! fails decoding; required fields (`email`, `slug`, ...) do, which is how the
//! client reports an unexpected response shape.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The authenticated user as returned by login and profile endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar URL or `data:` URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Bearer token for authenticated requests.
    #[serde(default)]
    pub token: Option<String>,
}

impl User {
    /// Get display name, falling back to email if username is not set.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            &self.email
        } else {
            &self.username
        }
    }

    /// Avatar to render, skipping empty strings.
    pub fn avatar(&self) -> Option<&str> {
        self.image.as_deref().filter(|i| !i.is_empty())
    }
}

/// A user as listed by `GET /api/users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl UserEntry {
    pub fn avatar(&self) -> Option<&str> {
        self.image.as_deref().filter(|i| !i.is_empty())
    }
}

/// A blog article.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub id: Option<i64>,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
    #[serde(default)]
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub updated: Option<Timestamp>,
    #[serde(default)]
    pub author: Option<UserEntry>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment on an article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: Option<UserEntry>,
}

/// A UTC instant.
///
/// The backend has been seen to send both `1684053730840` and
/// `"2023-05-14T08:42:10.840Z"`; both decode to the same value. Serialises
/// as RFC 3339.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Short display form, e.g. `May 14, 2023`.
    pub fn format_date(&self) -> String {
        self.0.format("%b %d, %Y").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_date())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Millis(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Millis(ms) => Timestamp::from_millis(ms)
                .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}"))),
            Raw::Text(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| Timestamp(dt.with_timezone(&Utc)))
                .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {s:?}: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_from_backend_payload() {
        let json = r#"{
            "id": 5,
            "slug": "1212-wjub9k",
            "title": "1212",
            "description": "desc",
            "body": "Hello",
            "tagList": ["Living", "Working"],
            "created": 1684053730840,
            "updated": "2023-05-14T08:42:31Z",
            "author": {"id": 13, "username": "shyntest", "email": "shyntest@gmail.com", "bio": null, "image": ""},
            "comments": [
                {"id": 1, "created": 1684053730840, "body": "First comment",
                 "author": {"id": 13, "username": "shyntest", "email": "shyntest@gmail.com"}}
            ]
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.slug, "1212-wjub9k");
        assert_eq!(article.tag_list, vec!["Living", "Working"]);
        assert_eq!(article.comments.len(), 1);
        assert_eq!(article.comments[0].body, "First comment");
        assert_eq!(article.created.unwrap().format_date(), "May 14, 2023");
        assert_eq!(article.updated.unwrap().format_date(), "May 14, 2023");

        let author = article.author.unwrap();
        assert_eq!(author.username, "shyntest");
        assert!(author.avatar().is_none());
    }

    #[test]
    fn test_article_without_optional_fields() {
        let article: Article = serde_json::from_str(r#"{"slug": "a"}"#).unwrap();
        assert!(article.tag_list.is_empty());
        assert!(article.comments.is_empty());
        assert!(article.updated.is_none());
    }

    #[test]
    fn test_article_missing_slug_is_rejected() {
        assert!(serde_json::from_str::<Article>(r#"{"title": "no slug"}"#).is_err());
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        assert!(serde_json::from_str::<Timestamp>(r#""yesterday""#).is_err());
    }

    #[test]
    fn test_user_display_name_falls_back_to_email() {
        let user = User {
            email: "a@b.c".to_string(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "a@b.c");

        let user = User {
            username: "alice".to_string(),
            ..user
        };
        assert_eq!(user.display_name(), "alice");
    }
}
