use dioxus::prelude::*;

use ui::{AuthProvider, NoticeProvider, NoticeTray};
use views::{Dashboard, Login, NotFound, Protected, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login?:from")]
    Login { from: String },
    #[route("/signup")]
    Signup {},
    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NoticeProvider {
            AuthProvider {
                Router::<Route> {}
            }
            NoticeTray {}
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
