//! Layout wrapping every view that needs a session.

use dioxus::prelude::*;
use ui::{check_access, use_auth, Access};

use crate::Route;

/// Renders the nested route only while a token is held; otherwise replaces
/// the history entry with the login view, recording where the visitor was going.
#[component]
pub fn Protected() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    match check_access(auth().is_authenticated(), &route.to_string()) {
        Access::Granted => rsx! {
            Outlet::<Route> {}
        },
        Access::Redirect { from, .. } => {
            tracing::debug!(%from, "unauthenticated, redirecting to login");
            nav.replace(Route::Login { from });
            rsx! {}
        }
    }
}
