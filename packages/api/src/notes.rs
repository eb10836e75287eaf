//! # Notes Collection Manager
//!
//! [`NotesManager`] runs the CRUD calls of the `/note/notes` endpoint family and
//! keeps a [`NotesCollection`] in step with what the backend confirmed. The
//! in-memory list only changes after a successful response; a failed call leaves
//! it exactly as it was.
//!
//! | Operation | Request | On success |
//! |-----------|---------|------------|
//! | [`list`](NotesManager::list) | `GET /note/notes` | replace the list wholesale |
//! | [`create`](NotesManager::create) | `POST /note/notes` | prepend the returned note |
//! | [`update`](NotesManager::update) | `PUT /note/notes/{id}` | replace the entry in place |
//! | [`delete`](NotesManager::delete) | `DELETE /note/notes/{id}` | remove the entry |
//!
//! A 401 from any of them goes to [`AuthController::expire_session`]. The list is
//! scoped to the session generation it was loaded under and reads as empty once
//! the token changes. Records in a list response that do not parse as a [`Note`]
//! are skipped with a warning instead of failing the whole load.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use store::{Note, NotesCollection, TokenStore};

use crate::auth::AuthController;
use crate::error::{ApiError, ClientError};
use crate::transport::{Method, Transport};

pub const NOTES_PATH: &str = "/note/notes";

const LIST_FAILED: &str = "Failed to load notes";
const SAVE_FAILED: &str = "Unable to save note";
const DELETE_FAILED: &str = "Failed to delete note";
const TITLE_REQUIRED: &str = "Title is required";

/// Editable fields of a note, as typed into the editor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteFields {
    pub title: String,
    pub description: String,
}

/// Body of a create or update request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NotePayload {
    pub title: String,
    pub description: String,
}

impl NoteFields {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Prefill from an existing note for editing.
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            description: note.description.clone().unwrap_or_default(),
        }
    }

    /// Trim both fields; the title must not end up empty.
    pub fn validate(&self) -> Result<NotePayload, ClientError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ClientError::validation(TITLE_REQUIRED));
        }
        Ok(NotePayload {
            title: title.to_string(),
            description: self.description.trim().to_string(),
        })
    }

    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Result of a delete request.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    /// The backend confirmed; carries the entry removed from the list, if it was listed.
    Deleted(Option<Note>),
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
}

#[derive(Debug, Default)]
struct ScopedNotes {
    generation: u64,
    notes: NotesCollection,
}

/// Session-scoped CRUD over the user's notes.
pub struct NotesManager<T, S> {
    auth: AuthController<T, S>,
    state: Arc<Mutex<ScopedNotes>>,
}

impl<T, S> Clone for NotesManager<T, S> {
    fn clone(&self) -> Self {
        Self {
            auth: self.auth.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T, S> NotesManager<T, S> {
    pub fn new(auth: AuthController<T, S>) -> Self {
        let generation = auth.session().generation();
        Self {
            auth,
            state: Arc::new(Mutex::new(ScopedNotes {
                generation,
                notes: NotesCollection::new(),
            })),
        }
    }

    /// Current list, newest mutations first as observed by this client.
    pub fn notes(&self) -> Vec<Note> {
        self.scoped().notes.to_vec()
    }

    pub fn get(&self, id: &str) -> Option<Note> {
        self.scoped().notes.get(id).cloned()
    }

    /// Lock the list, dropping it first if the session has changed since it was loaded.
    fn scoped(&self) -> MutexGuard<'_, ScopedNotes> {
        let current = self.auth.session().generation();
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.generation != current {
            tracing::debug!("session changed, dropping cached notes");
            state.notes.clear();
            state.generation = current;
        }
        state
    }

    /// Apply a confirmed change, unless it belongs to a previous session.
    fn apply<R>(&self, generation: u64, change: impl FnOnce(&mut NotesCollection) -> R) -> Option<R> {
        let mut state = self.scoped();
        if state.generation != generation {
            tracing::debug!("ignoring response for a previous session");
            return None;
        }
        Some(change(&mut state.notes))
    }
}

impl<T: Transport, S: TokenStore> NotesManager<T, S> {
    fn failure(&self, err: ApiError, generation: u64, default: &str) -> ClientError {
        if err.is_unauthorized() {
            self.auth.expire_session(generation)
        } else {
            ClientError::from_api(err, default)
        }
    }

    /// Fetch every note of the current user and replace the list.
    pub async fn list(&self) -> Result<Vec<Note>, ClientError> {
        let generation = self.auth.session().generation();
        let records: Option<Vec<serde_json::Value>> = self
            .auth
            .client()
            .request(Method::Get, NOTES_PATH, None)
            .await
            .and_then(|response| response.data())
            .map_err(|e| self.failure(e, generation, LIST_FAILED))?;

        let notes: Vec<Note> = records
            .unwrap_or_default()
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<Note>(record) {
                Ok(note) => Some(note),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed note record");
                    None
                }
            })
            .collect();
        tracing::debug!(count = notes.len(), "notes loaded");
        self.apply(generation, |collection| collection.replace_all(notes));
        Ok(self.notes())
    }

    /// Create a note and put it at the head of the list.
    pub async fn create(&self, fields: &NoteFields) -> Result<Note, ClientError> {
        let payload = fields.validate()?;
        let generation = self.auth.session().generation();
        let body = serde_json::to_value(&payload)
            .map_err(|_| ClientError::Request(SAVE_FAILED.to_string()))?;

        let note: Note = self
            .auth
            .client()
            .request(Method::Post, NOTES_PATH, Some(body))
            .await
            .and_then(|response| response.data())
            .map_err(|e| self.failure(e, generation, SAVE_FAILED))?;

        self.apply(generation, |collection| collection.prepend(note.clone()));
        Ok(note)
    }

    /// Update a note and replace its entry where it stands.
    pub async fn update(&self, id: &str, fields: &NoteFields) -> Result<Note, ClientError> {
        let payload = fields.validate()?;
        let generation = self.auth.session().generation();
        let body = serde_json::to_value(&payload)
            .map_err(|_| ClientError::Request(SAVE_FAILED.to_string()))?;

        let note: Note = self
            .auth
            .client()
            .request(Method::Put, &note_path(id), Some(body))
            .await
            .and_then(|response| response.data())
            .map_err(|e| self.failure(e, generation, SAVE_FAILED))?;

        let replaced = self.apply(generation, |collection| collection.replace(note.clone()));
        if replaced == Some(false) {
            tracing::warn!(id = %note.id, "updated note was not in the list");
        }
        Ok(note)
    }

    /// Delete a note once `confirm` agrees.
    ///
    /// A declined confirmation sends nothing and changes nothing.
    pub async fn delete(
        &self,
        id: &str,
        confirm: impl FnOnce() -> bool,
    ) -> Result<DeleteOutcome, ClientError> {
        if !confirm() {
            return Ok(DeleteOutcome::Cancelled);
        }
        let generation = self.auth.session().generation();

        self.auth
            .client()
            .request(Method::Delete, &note_path(id), None)
            .await
            .map_err(|e| self.failure(e, generation, DELETE_FAILED))?;

        let removed = self
            .apply(generation, |collection| collection.remove(id))
            .flatten();
        Ok(DeleteOutcome::Deleted(removed))
    }
}

/// Per-note endpoint. The id is percent-encoded as a single path segment.
fn note_path(id: &str) -> String {
    format!("{NOTES_PATH}/{}", urlencoding::encode(id))
}
