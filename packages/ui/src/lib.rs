//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod services;
pub use services::{load_config, make_services, make_services_with, Auth, Notes, PlatformTokenStore, Services};

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{report_failure, use_auth, use_services, AuthProvider, AuthState, LogoutButton};

pub mod guard;
pub use guard::{check_access, Access};

pub mod notice;
pub use notice::{notify, notify_error, use_notices, NoticeLevel, NoticeProvider, Notices};

mod notice_tray;
pub use notice_tray::NoticeTray;

pub mod markdown;

mod note_card;
pub use note_card::{format_date, NoteCard};

mod note_modal;
pub use note_modal::NoteModal;

mod profile_menu;
pub use profile_menu::ProfileMenu;
