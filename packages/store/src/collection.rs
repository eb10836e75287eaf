//! In-memory ordered list of the signed-in user's notes.
//!
//! Order is insertion/update order as the client observed it, never sorted. No
//! two entries ever share an id.

use crate::models::Note;

/// Ordered, id-unique sequence of notes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotesCollection {
    notes: Vec<Note>,
}

impl NotesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, notes: Vec<Note>) {
        self.notes.clear();
        for note in notes {
            if self.position(&note.id).is_none() {
                self.notes.push(note);
            }
        }
    }

    /// Insert `note` at the head, evicting any older entry with the same id.
    pub fn prepend(&mut self, note: Note) {
        if let Some(index) = self.position(&note.id) {
            self.notes.remove(index);
        }
        self.notes.insert(0, note);
    }

    /// Swap in `note` at the position of the entry with the same id.
    ///
    /// Returns `false` and leaves the sequence alone when no entry matches.
    pub fn replace(&mut self, note: Note) -> bool {
        match self.position(&note.id) {
            Some(index) => {
                self.notes[index] = note;
                true
            }
            None => false,
        }
    }

    /// Remove and return the entry with `id`.
    pub fn remove(&mut self, id: &str) -> Option<Note> {
        let index = self.position(id)?;
        Some(self.notes.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn to_vec(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn ids(collection: &NotesCollection) -> Vec<&str> {
        collection.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_replace_all_drops_duplicate_ids() {
        let mut notes = NotesCollection::new();
        notes.replace_all(vec![
            Note::new("a", "first a"),
            Note::new("b", "b"),
            Note::new("a", "second a"),
        ]);
        assert_eq!(ids(&notes), vec!["a", "b"]);
        assert_eq!(notes.get("a").unwrap().title, "first a");
    }

    #[test]
    fn test_prepend_puts_new_note_first() {
        let mut notes = NotesCollection::new();
        notes.replace_all(vec![Note::new("a", "A"), Note::new("b", "B")]);

        notes.prepend(Note::new("c", "C"));
        assert_eq!(ids(&notes), vec!["c", "a", "b"]);

        // Re-prepending an existing id moves it instead of duplicating
        notes.prepend(Note::new("b", "B2"));
        assert_eq!(ids(&notes), vec!["b", "c", "a"]);
        assert_eq!(notes.get("b").unwrap().title, "B2");
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut notes = NotesCollection::new();
        notes.replace_all(vec![
            Note::new("a", "A"),
            Note::new("b", "B"),
            Note::new("c", "C"),
        ]);

        assert!(notes.replace(Note::new("b", "B edited")));
        assert_eq!(ids(&notes), vec!["a", "b", "c"]);
        assert_eq!(notes.as_slice()[1].title, "B edited");

        assert!(!notes.replace(Note::new("zzz", "missing")));
        assert_eq!(notes.len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut notes = NotesCollection::new();
        notes.replace_all(vec![Note::new("n1", "one"), Note::new("n2", "two")]);

        let removed = notes.remove("n1").unwrap();
        assert_eq!(removed.title, "one");
        assert_eq!(ids(&notes), vec!["n2"]);

        assert!(notes.remove("n1").is_none());
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_mutation_sequence_matches_server_state() {
        let mut notes = NotesCollection::new();
        let mut server: HashMap<String, String> = HashMap::new();

        let ops: Vec<(&str, &str, &str)> = vec![
            ("create", "1", "one"),
            ("create", "2", "two"),
            ("update", "1", "one v2"),
            ("create", "3", "three"),
            ("delete", "2", ""),
            ("update", "3", "three v2"),
            ("create", "4", "four"),
            ("delete", "1", ""),
            ("update", "4", "four v2"),
        ];

        for (op, id, title) in ops {
            match op {
                "create" => {
                    server.insert(id.to_string(), title.to_string());
                    notes.prepend(Note::new(id, title));
                }
                "update" => {
                    server.insert(id.to_string(), title.to_string());
                    assert!(notes.replace(Note::new(id, title)));
                }
                "delete" => {
                    server.remove(id);
                    assert!(notes.remove(id).is_some());
                }
                _ => unreachable!(),
            }
        }

        assert_eq!(notes.len(), server.len());
        for note in notes.iter() {
            assert_eq!(server.get(&note.id), Some(&note.title));
        }
        assert_eq!(ids(&notes), vec!["4", "3"]);
    }
}
