use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use store::Note;

use crate::icons::{FaPen, FaTrashCan};
use crate::markdown::render_markdown;
use crate::Icon;

/// Card showing one note on the dashboard grid.
#[component]
pub fn NoteCard(note: Note, on_edit: EventHandler<Note>, on_delete: EventHandler<Note>) -> Element {
    let description_html = note
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(render_markdown);
    let created = note.created_or_updated().map(format_date);
    let updated = note.updated_or_created().map(format_date);
    let edit_note = note.clone();
    let delete_note = note.clone();

    rsx! {
        article {
            class: "note-card",
            header {
                class: "note-card-header",
                h3 { class: "note-card-title", "{note.title}" }
                if let Some(created) = created {
                    span { class: "note-card-date", "{created}" }
                }
            }

            if let Some(html) = description_html {
                div { class: "note-card-body", dangerous_inner_html: "{html}" }
            } else {
                p { class: "note-card-body note-card-body--empty", "No description" }
            }

            footer {
                class: "note-card-footer",
                if let Some(updated) = updated {
                    span { class: "note-card-updated", "Last updated: {updated}" }
                }
                div {
                    class: "note-card-actions",
                    button {
                        class: "icon-button",
                        title: "Edit note",
                        onclick: move |_| on_edit.call(edit_note.clone()),
                        Icon { icon: FaPen, width: 14, height: 14 }
                    }
                    button {
                        class: "icon-button icon-button--danger",
                        title: "Delete note",
                        onclick: move |_| on_delete.call(delete_note.clone()),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

/// Format a timestamp the way note cards show it, e.g. `Mar 1, 2024`.
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(format_date(at), "Mar 1, 2024");
    }
}
