use dioxus::prelude::*;

use crate::Route;

/// Catch-all: any unknown path goes to the dashboard, which sends signed-out
/// visitors on to the login view.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = %segments.join("/"), "unknown route");
    nav.replace(Route::Dashboard {});
    rsx! {}
}
