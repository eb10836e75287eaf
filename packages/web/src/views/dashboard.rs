//! Dashboard view: the signed-in user's notes.

use api::{DeleteOutcome, NoteFields};
use dioxus::prelude::*;
use store::Note;
use ui::icons::FaPlus;
use ui::views::ConfirmDialog;
use ui::{
    notify, report_failure, use_auth, use_notices, use_services, AuthState, Icon, Navbar,
    NoteCard, NoteModal, NoticeLevel, ProfileMenu,
};

#[component]
pub fn Dashboard() -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut notices = use_notices();
    let mut notes = use_signal(Vec::<Note>::new);
    let mut loading = use_signal(|| true);
    let mut modal_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Note>::None);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Note>::None);

    // Load profile and notes once on mount
    let loader = services.clone();
    let _ = use_resource(move || {
        let services = loader.clone();
        async move {
            if !auth.peek().initializing {
                if let Err(e) = services.auth.refresh_profile().await {
                    report_failure(&services, &mut auth, &mut notices, &e);
                }
            }
            if services.auth.session().is_authenticated() {
                match services.notes.list().await {
                    Ok(list) => notes.set(list),
                    Err(e) => report_failure(&services, &mut auth, &mut notices, &e),
                }
            }
            loading.set(false);
            AuthState::sync(&services, &mut auth);
        }
    });

    let saver = services.clone();
    let handle_save = move |fields: NoteFields| {
        let services = saver.clone();
        let target = editing.peek().clone().map(|n| n.id);
        spawn(async move {
            saving.set(true);
            let result = match &target {
                Some(id) => services.notes.update(id, &fields).await,
                None => services.notes.create(&fields).await,
            };
            saving.set(false);

            match result {
                Ok(_) => {
                    notes.set(services.notes.notes());
                    let message = if target.is_some() {
                        "Note updated successfully"
                    } else {
                        "Note created successfully"
                    };
                    notify(&mut notices, NoticeLevel::Success, message);
                    modal_open.set(false);
                    editing.set(None);
                }
                Err(e) => {
                    report_failure(&services, &mut auth, &mut notices, &e);
                    // Nothing left to save into once the session is gone
                    if !auth.peek().is_authenticated() {
                        modal_open.set(false);
                        editing.set(None);
                    }
                }
            }
        });
    };

    let deleter = services.clone();
    let handle_confirm_delete = move |_| {
        let Some(note) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let services = deleter.clone();
        spawn(async move {
            match services.notes.delete(&note.id, || true).await {
                Ok(DeleteOutcome::Deleted(_)) => {
                    notes.set(services.notes.notes());
                    notify(&mut notices, NoticeLevel::Success, "Note deleted successfully");
                }
                Ok(DeleteOutcome::Cancelled) => {}
                Err(e) => report_failure(&services, &mut auth, &mut notices, &e),
            }
        });
    };

    let state = auth();
    let user = state.user().cloned();
    let title = user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "My Notes".to_string());
    let list = notes();
    let count = list.len();

    rsx! {
        div {
            class: "dashboard",

            Navbar {
                title: title,
                subtitle: "Your Digital Notebook".to_string(),

                button {
                    class: "btn btn--primary",
                    onclick: move |_| {
                        editing.set(None);
                        modal_open.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add Note" }
                }
                ProfileMenu { user: user, note_count: count }
            }

            main {
                class: "dashboard-content",

                if loading() {
                    div { class: "dashboard-loading", "Loading your notes..." }
                } else if list.is_empty() {
                    div {
                        class: "empty-state",
                        h2 { "No notes yet" }
                        p { "Create your first note to get started." }
                        button {
                            class: "btn btn--primary",
                            onclick: move |_| {
                                editing.set(None);
                                modal_open.set(true);
                            },
                            "Create Note"
                        }
                    }
                } else {
                    div {
                        class: "note-grid",
                        for note in list {
                            NoteCard {
                                key: "{note.id}",
                                note: note.clone(),
                                on_edit: move |n: Note| {
                                    editing.set(Some(n));
                                    modal_open.set(true);
                                },
                                on_delete: move |n: Note| pending_delete.set(Some(n)),
                            }
                        }
                    }
                }
            }

            if modal_open() {
                NoteModal {
                    editing: editing(),
                    saving: saving(),
                    on_save: handle_save,
                    on_close: move |_| {
                        modal_open.set(false);
                        editing.set(None);
                    },
                }
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this note?".to_string(),
                    on_confirm: handle_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
