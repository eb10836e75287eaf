//! Login page view with email/password form.

use api::Credentials;
use dioxus::prelude::*;
use ui::{notify, report_failure, use_auth, use_notices, use_services, AuthState, NoticeLevel};

use crate::Route;

/// Login page component.
///
/// `from` is the protected path that sent the visitor here. It is recorded
/// but not yet used to resume navigation after login.
#[component]
pub fn Login(from: String) -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut notices = use_notices();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    use_hook(move || {
        if !from.is_empty() {
            tracing::debug!(%from, "login requested by protected route");
        }
    });

    // If already logged in, redirect to the dashboard
    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let services = services.clone();
        spawn(async move {
            loading.set(true);
            let credentials = Credentials::new(email(), password());
            let result = services.auth.login(&credentials).await;
            loading.set(false);

            match result {
                Ok(_) => {
                    AuthState::sync(&services, &mut auth);
                    notify(&mut notices, NoticeLevel::Success, "Welcome back!");
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => report_failure(&services, &mut auth, &mut notices, &e),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Welcome back" }
            p { class: "auth-subtitle", "Sign in to your notebook" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                input {
                    class: "form-input",
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn--primary btn--block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}
