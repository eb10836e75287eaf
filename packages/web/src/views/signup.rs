//! Registration page view with the signup form.

use api::Registration;
use dioxus::prelude::*;
use ui::{notify, report_failure, use_auth, use_notices, use_services, AuthState, NoticeLevel};

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let mut notices = use_notices();
    let nav = use_navigator();
    let mut form = use_signal(Registration::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the dashboard
    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let services = services.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let registration = form();
            let result = services.auth.signup(&registration).await;
            loading.set(false);

            match result {
                Ok(_) => {
                    AuthState::sync(&services, &mut auth);
                    notify(&mut notices, NoticeLevel::Success, "Account created!");
                    nav.replace(Route::Dashboard {});
                }
                // Validation problems stay next to the form
                Err(e) if e.is_validation() => error.set(Some(e.to_string())),
                Err(e) => report_failure(&services, &mut auth, &mut notices, &e),
            }
        });
    };

    let current = form();
    let mismatch = current.passwords_differ();

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Start your digital notebook" }

            form {
                class: "auth-form",
                onsubmit: handle_signup,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Full name",
                    required: true,
                    value: "{current.name}",
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }

                input {
                    class: "form-input",
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: "{current.email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                input {
                    class: "form-input",
                    r#type: "tel",
                    placeholder: "Phone (optional)",
                    value: "{current.phone}",
                    oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{current.password}",
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    required: true,
                    value: "{current.confirm_password}",
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }

                if mismatch {
                    p { class: "form-hint form-hint--error", "Passwords do not match" }
                }

                button {
                    class: "btn btn--primary btn--block",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login { from: String::new() }, "Sign in" }
            }
        }
    }
}
