use api::NoteFields;
use dioxus::prelude::*;
use store::Note;

use crate::views::ModalOverlay;

/// Create/edit form for a note, shown in a modal.
///
/// `editing` prefills the fields; `None` means a new note. The submit button
/// stays disabled while `saving` or while the title is blank.
#[component]
pub fn NoteModal(
    editing: Option<Note>,
    saving: bool,
    on_save: EventHandler<NoteFields>,
    on_close: EventHandler<()>,
) -> Element {
    let is_edit = editing.is_some();
    let mut fields = use_signal(move || {
        editing
            .as_ref()
            .map(NoteFields::from_note)
            .unwrap_or_default()
    });

    let submittable = fields.read().is_submittable() && !saving;
    let title = fields.read().title.clone();
    let description = fields.read().description.clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if fields.read().is_submittable() && !saving {
            on_save.call(fields());
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "note-form",
                onsubmit: handle_submit,

                h2 {
                    class: "form-title",
                    if is_edit { "Edit Note" } else { "New Note" }
                }

                label {
                    class: "form-field",
                    "Title"
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Give your note a title",
                        value: "{title}",
                        oninput: move |evt: FormEvent| fields.write().title = evt.value(),
                    }
                }

                label {
                    class: "form-field",
                    "Description"
                    textarea {
                        class: "form-input form-input--multiline",
                        placeholder: "Write something (Markdown supported)",
                        value: "{description}",
                        oninput: move |evt: FormEvent| fields.write().description = evt.value(),
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "btn btn--outline",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn--primary",
                        r#type: "submit",
                        disabled: !submittable,
                        if saving {
                            "Saving..."
                        } else if is_edit {
                            "Update Note"
                        } else {
                            "Create Note"
                        }
                    }
                }
            }
        }
    }
}
