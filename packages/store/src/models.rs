//! # Domain models for users and notes
//!
//! Defines the records the notes backend hands back to the client. Both types are
//! `Serialize + Deserialize` and mirror the backend's JSON field names, so they can
//! be parsed straight out of a response envelope at the API boundary.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserProfile`] | Immutable snapshot of the signed-in user (`id`, `name`, `email`, optional `phone`). Replaced wholesale on every profile refresh. |
//! | [`Note`] | A note owned by the current user. Carries the server-assigned `id`, a `title`, an optional `description`, and the creation/update timestamps. |
//!
//! The backend uses MongoDB-style `_id` keys; plain `id` is accepted as well.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile of the authenticated user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserProfile {
    /// Up to two uppercase initials taken from the words of the name.
    ///
    /// Falls back to `"U"` when the name is blank.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }

    /// Name to show in headers, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A note record as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "discriptipn", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Build a note with just an id and title, no timestamps.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Timestamp shown as the note's date: creation time, else last update.
    pub fn created_or_updated(&self) -> Option<DateTime<Utc>> {
        self.created_at.or(self.updated_at)
    }

    /// Timestamp shown as "last updated": update time, else creation time.
    pub fn updated_or_created(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let mut user = UserProfile {
            name: "ada lovelace byron".to_string(),
            ..Default::default()
        };
        assert_eq!(user.initials(), "AL");

        user.name = "Grace".to_string();
        assert_eq!(user.initials(), "G");

        user.name = "   ".to_string();
        assert_eq!(user.initials(), "U");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserProfile {
            email: "a@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "a@example.com");
    }

    #[test]
    fn test_profile_accepts_partial_payload() {
        let user: UserProfile = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(user.name, "A");
        assert!(user.id.is_empty());
        assert!(user.phone.is_none());
    }

    #[test]
    fn test_note_parses_backend_shape() {
        let json = r#"{
            "_id": "n1",
            "title": "Groceries",
            "description": "milk",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-02T11:30:00Z",
            "user": "u1"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, "n1");
        assert_eq!(note.description.as_deref(), Some("milk"));
        assert!(note.created_at.unwrap() < note.updated_at.unwrap());
        assert_eq!(note.created_or_updated(), note.created_at);
        assert_eq!(note.updated_or_created(), note.updated_at);
    }

    #[test]
    fn test_note_accepts_plain_id_and_legacy_description() {
        let note: Note =
            serde_json::from_str(r#"{"id":"n2","title":"T","discriptipn":"old"}"#).unwrap();
        assert_eq!(note.id, "n2");
        assert_eq!(note.description.as_deref(), Some("old"));
        assert!(note.created_or_updated().is_none());
    }
}
