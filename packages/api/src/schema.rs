//! # Request bodies and response envelopes
//!
//! One struct per JSON shape the backend accepts or returns. Envelopes are
//! crate-private: endpoint methods unwrap them and hand back the domain
//! records from [`store::models`].
//!
//! | Endpoint | Request | Response |
//! |----------|---------|----------|
//! | `POST api/login` | [`Credentials`] | `{ "user": User }` |
//! | `POST api/users` | [`SignUp`] | ignored |
//! | `GET api/user` | (none) | `{ "user": User }` |
//! | `PUT api/user` | [`ProfileUpdate`] | ignored |
//! | `GET api/users` | (none) | `[UserEntry]` (or `{ "users": [...] }`) |
//! | `GET api/articles` | (none) | `{ "articles": [Article] }` |
//! | `GET api/articles/{slug}` | (none) | `{ "article": Article }` |
//! | `POST`/`PUT api/articles[/{slug}]` | [`ArticleDraft`] | ignored |
//! | `POST api/articles/{slug}/comments` | [`NewComment`] | ignored |
//!
//! Rejected requests carry an [`ErrorBody`].

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use store::models::{Article, User, UserEntry};

/// Placeholder avatar shown when the user has none.
pub const AVATAR_DEFAULT_URL: &str = "https://api.realworld.io/images/smiley-cyrus.jpeg";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignUp {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `PUT api/user`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub bio: String,
    /// `data:` URL of a new avatar, the current avatar URL, or empty.
    pub image: String,
}

impl ProfileUpdate {
    /// Build the update, sending an empty image while the placeholder is shown.
    pub fn new(username: String, email: String, bio: String, avatar: &str) -> Self {
        let image = if avatar == AVATAR_DEFAULT_URL {
            String::new()
        } else {
            avatar.to_string()
        };
        Self {
            username,
            email,
            bio,
            image,
        }
    }
}

/// Body of article create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl From<&Article> for ArticleDraft {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            body: article.body.clone(),
            tag_list: article.tag_list.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewComment {
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticlesEnvelope {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticleEnvelope {
    pub article: Article,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UsersPayload {
    List(Vec<UserEntry>),
    Wrapped { users: Vec<UserEntry> },
}

impl UsersPayload {
    pub fn into_users(payload: Option<Self>) -> Vec<UserEntry> {
        match payload {
            Some(UsersPayload::List(users)) | Some(UsersPayload::Wrapped { users }) => users,
            None => Vec::new(),
        }
    }
}

/// Error payload: `{ "message": ".." }` or `{ "errors": { "field": [".."] } }`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorBody {
    /// Flatten into one line, preferring `message`.
    pub fn into_message(self) -> Option<String> {
        if let Some(message) = self.message.filter(|m| !m.trim().is_empty()) {
            return Some(message);
        }
        let parts: Vec<String> = self
            .errors?
            .into_iter()
            .flat_map(|(field, problems)| {
                problems
                    .into_iter()
                    .map(move |p| format!("{field} {p}"))
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

/// Encode an uploaded image as a `data:` URL.
pub fn avatar_data_url(file_name: &str, bytes: &[u8]) -> String {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "image/jpeg",
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_draft_uses_camel_case() {
        let draft = ArticleDraft {
            title: "T".to_string(),
            description: "D".to_string(),
            body: "B".to_string(),
            tag_list: vec!["Living".to_string()],
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["tagList"][0], "Living");
        assert!(json.get("tag_list").is_none());
    }

    #[test]
    fn test_profile_update_drops_placeholder_avatar() {
        let update = ProfileUpdate::new(
            "alice".to_string(),
            "a@x.io".to_string(),
            String::new(),
            AVATAR_DEFAULT_URL,
        );
        assert_eq!(update.image, "");

        let update = ProfileUpdate::new(
            "alice".to_string(),
            "a@x.io".to_string(),
            String::new(),
            "data:image/png;base64,AAAA",
        );
        assert_eq!(update.image, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_users_payload_shapes() {
        let list: Option<UsersPayload> =
            serde_json::from_str(r#"[{"id": 1, "username": "a", "email": "a@x.io"}]"#).unwrap();
        assert_eq!(UsersPayload::into_users(list).len(), 1);

        let wrapped: Option<UsersPayload> =
            serde_json::from_str(r#"{"users": [{"id": 1, "email": "a@x.io"}]}"#).unwrap();
        assert_eq!(UsersPayload::into_users(wrapped).len(), 1);

        let null: Option<UsersPayload> = serde_json::from_str("null").unwrap();
        assert!(UsersPayload::into_users(null).is_empty());
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"message": "Email taken"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Email taken"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"errors": {"email": ["is invalid", "is taken"]}}"#).unwrap();
        assert_eq!(
            body.into_message().as_deref(),
            Some("email is invalid; email is taken")
        );

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.into_message().is_none());
    }

    #[test]
    fn test_avatar_data_url() {
        assert_eq!(avatar_data_url("me.PNG", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(avatar_data_url("noext", b"hi"), "data:image/jpeg;base64,aGk=");
    }
}
