//! Domain types shared between frontend, backend, and the annotation API.
//!
//! The serde shapes here mirror the wire format of the API server, so the
//! backend deserializes responses directly into these types and the frontend
//! renders them without further conversion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A username/password pair, alive only for the duration of one login
/// submission.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// The password must never end up in logs, so the debug representation
// redacts it.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The identity record of the currently authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub username: String,
}

/// A named reference entity selectable when composing an article.
/// Read-only on the client.
#[derive(Debug, Clone, Deserialize)]
pub struct Speaker {
    pub id: String,
    pub name: String,
}

/// The server-side representation of an uploaded audio file. Created by the
/// upload endpoint and referenced by id from an article; the client never
/// mutates it.
#[derive(Debug, Clone, Deserialize)]
pub struct AudioAsset {
    pub id: u64,
    pub filename: String,
}

/// A saved transcript record combining title, body text, speaker reference,
/// and an audio asset.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub speaker_id: String,
    pub audio: AudioAsset,
    /// Username of the creator.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved_by: Option<String>,
}

impl Article {
    /// Whether a reviewer has approved this article. Unapproved articles are
    /// shown as "In Review" on the listing page.
    pub fn is_approved(&self) -> bool {
        self.approved_at.is_some()
    }
}

/// One page of the article listing as returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticlePage {
    pub data: Vec<Article>,
    pub total_pages: u64,
}

/// The editor's submission payload for both create and update.
///
/// An empty string means the field has not been filled in yet; the draft is
/// only submitted once [`ArticleDraft::is_complete`] holds, so the optional
/// audio id always serializes as a plain integer on the wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub speaker_id: String,
    pub audio_id: Option<u64>,
}

impl ArticleDraft {
    /// The save control is enabled exactly when this returns `true`.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.content.is_empty()
            && !self.speaker_id.is_empty()
            && self.audio_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: a draft is complete only when every required field is set.
    #[test]
    fn test_draft_completeness() {
        let complete = ArticleDraft {
            title: "Interview 1".to_string(),
            content: "Hello world".to_string(),
            speaker_id: "3".to_string(),
            audio_id: Some(7),
        };
        assert!(complete.is_complete());

        let cases = [
            ArticleDraft {
                title: String::new(),
                ..complete.clone()
            },
            ArticleDraft {
                content: String::new(),
                ..complete.clone()
            },
            ArticleDraft {
                speaker_id: String::new(),
                ..complete.clone()
            },
            ArticleDraft {
                audio_id: None,
                ..complete.clone()
            },
        ];
        for draft in cases {
            assert!(!draft.is_complete(), "{draft:?} should be incomplete");
        }

        assert!(!ArticleDraft::default().is_complete());
    }

    /// Test: the draft serializes to the exact shape the create and update
    /// endpoints expect.
    #[test]
    fn test_draft_wire_shape() {
        let draft = ArticleDraft {
            title: "Interview 1".to_string(),
            content: "Hello world".to_string(),
            speaker_id: "3".to_string(),
            audio_id: Some(7),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Interview 1",
                "content": "Hello world",
                "speaker_id": "3",
                "audio_id": 7,
            })
        );
    }

    /// Test: an article parses from the server's wire format, with the
    /// approval fields optional.
    #[test]
    fn test_article_from_wire() {
        let raw = r#"{
            "id": 12,
            "title": "Interview 1",
            "content": "Hello world",
            "speaker_id": "3",
            "audio": { "id": 7, "filename": "sample-7.wav" },
            "user_id": "sokha",
            "created_at": "2024-05-01T10:30:00Z"
        }"#;

        let article: Article = serde_json::from_str(raw).unwrap();
        assert_eq!(article.id, 12);
        assert_eq!(article.audio.id, 7);
        assert_eq!(article.audio.filename, "sample-7.wav");
        assert!(!article.is_approved());

        let raw_approved = r#"{
            "id": 12,
            "title": "Interview 1",
            "content": "Hello world",
            "speaker_id": "3",
            "audio": { "id": 7, "filename": "sample-7.wav" },
            "user_id": "sokha",
            "created_at": "2024-05-01T10:30:00Z",
            "approved_at": "2024-05-02T08:00:00Z",
            "approved_by": "reviewer"
        }"#;
        let article: Article = serde_json::from_str(raw_approved).unwrap();
        assert!(article.is_approved());
    }

    /// Test: the listing response parses into a page with its total count.
    #[test]
    fn test_listing_from_wire() {
        let raw = r#"{
            "data": [],
            "total_pages": 3
        }"#;
        let page: ArticlePage = serde_json::from_str(raw).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    /// Test: the password never appears in debug output.
    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            username: "sokha".to_string(),
            password: "pw123".to_string(),
        };
        let printed = format!("{credentials:?}");
        assert!(printed.contains("sokha"));
        assert!(!printed.contains("pw123"));
    }
}
