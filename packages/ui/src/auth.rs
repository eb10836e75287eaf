//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] builds the [`Services`] once, publishes them and a mirrored
//! [`AuthState`] signal through context, and refreshes the profile on startup.
//! Views call [`AuthState::sync`] after every auth-affecting operation so the
//! signal never drifts from the session store.

use api::{AuthPhase, ClientError};
use dioxus::prelude::*;
use store::{Session, UserProfile};

use crate::notice::{notify, notify_error, use_notices, NoticeLevel, Notices};
use crate::services::{make_services, Services};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Session,
    pub phase: AuthPhase,
    /// True until the startup profile refresh has finished.
    pub initializing: bool,
}

impl AuthState {
    /// Read the current state out of the services.
    pub fn snapshot(services: &Services, initializing: bool) -> Self {
        Self {
            session: services.auth.session().snapshot(),
            phase: services.auth.phase(),
            initializing,
        }
    }

    /// Refresh `signal` from the session store, keeping `initializing`.
    pub fn sync(services: &Services, signal: &mut Signal<AuthState>) {
        let initializing = signal.peek().initializing;
        let next = Self::snapshot(services, initializing);
        if *signal.peek() != next {
            signal.set(next);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user.as_ref()
    }
}

/// Report a failed operation and resync the auth mirror.
///
/// A 401 seen after the mirror already shows the user signed out was reported
/// by whichever call cleared the session first, so it is not repeated. A 401
/// for a replaced session says nothing about the current one and is not shown.
pub fn report_failure(
    services: &Services,
    auth: &mut Signal<AuthState>,
    notices: &mut Signal<Notices>,
    error: &ClientError,
) {
    let was_signed_in = auth.peek().is_authenticated();
    AuthState::sync(services, auth);
    if error.is_superseded() {
        tracing::debug!("dropping failure from a previous session");
        return;
    }
    if error.is_session_expired() && !was_signed_in {
        return;
    }
    notify_error(notices, error);
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared backend services.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provider component that manages authentication state.
/// Must sit inside a `NoticeProvider`.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let services = use_hook(make_services);
    let mut auth_state = use_signal({
        let services = services.clone();
        move || AuthState::snapshot(&services, true)
    });
    let mut notices = use_notices();

    // Fetch the profile for a persisted token on mount
    let _ = use_resource({
        let services = services.clone();
        move || {
            let services = services.clone();
            async move {
                if let Err(e) = services.auth.refresh_profile().await {
                    report_failure(&services, &mut auth_state, &mut notices, &e);
                }
                auth_state.set(AuthState::snapshot(&services, false));
            }
        }
    });

    use_context_provider(|| services.clone());
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let services = use_services();
    let mut auth_state = use_auth();
    let mut notices = use_notices();

    let onclick = move |_| {
        services.auth.logout();
        AuthState::sync(&services, &mut auth_state);
        notify(&mut notices, NoticeLevel::Success, "Logged out");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
