use dioxus::prelude::*;
use store::UserProfile;

use crate::auth::LogoutButton;

/// Initials button that opens a popup with the profile details and logout.
#[component]
pub fn ProfileMenu(user: Option<UserProfile>, note_count: usize) -> Element {
    let mut open = use_signal(|| false);
    let user = user.unwrap_or_default();
    let initials = user.initials();
    let display_name = user.display_name().to_string();
    let phone = user.phone.clone().filter(|p| !p.is_empty());

    rsx! {
        div {
            class: "profile-menu",
            button {
                class: "profile-icon",
                title: "Profile",
                onclick: move |_| open.set(!open()),
                "{initials}"
            }

            if open() {
                div {
                    class: "profile-popup-backdrop",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: "profile-popup",
                    div {
                        class: "profile-popup-header",
                        div { class: "profile-popup-avatar", "{initials}" }
                        div {
                            h3 { "{display_name}" }
                            p { "{user.email}" }
                        }
                    }
                    dl {
                        class: "profile-popup-details",
                        dt { "Full Name" }
                        dd { "{user.name}" }
                        dt { "Email Address" }
                        dd { "{user.email}" }
                        if let Some(phone) = phone {
                            dt { "Phone" }
                            dd { "{phone}" }
                        }
                        dt { "Notes" }
                        dd { "{note_count}" }
                    }
                    LogoutButton { class: "btn btn--danger btn--block" }
                }
            }
        }
    }
}
