use dioxus::prelude::*;

use crate::icons::FaBook;
use crate::Icon;

/// Dashboard header: brand on the left, `children` (actions) on the right.
#[component]
pub fn Navbar(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-brand",
                div {
                    class: "navbar-logo",
                    Icon { icon: FaBook, width: 22, height: 22 }
                }
                div {
                    h1 { class: "navbar-title", "{title}" }
                    p { class: "navbar-subtitle", "{subtitle}" }
                }
            }
            div {
                class: "navbar-actions",
                {children}
            }
        }
    }
}
