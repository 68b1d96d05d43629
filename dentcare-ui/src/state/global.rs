//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use std::fmt::Display;

use dentcare::client::ApiClient;
use dentcare::model::{LoginResponse, User};
use dentcare::session::{SessionCheck, SessionStore};
use dentcare::shell::{AuthScreen, Tab, ToastKind, ToastSlot};

use crate::api::{self, GlooTransport, LocalStorage};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Signed-in user; `None` shows the landing/login flow
    pub user: RwSignal<Option<User>>,
    /// Sidebar selection
    pub active_tab: RwSignal<Tab>,
    /// Signed-out screen
    pub auth_screen: RwSignal<AuthScreen>,
    /// Patient intake modal visibility
    pub patient_form_open: RwSignal<bool>,
    /// Error toast
    pub error: RwSignal<ToastSlot>,
    /// Success toast
    pub success: RwSignal<ToastSlot>,
    session: StoredValue<SessionStore<LocalStorage>>,
}

/// Provide global state to the component tree, restoring any stored session
pub fn provide_global_state() {
    let mut store = SessionStore::new(LocalStorage);
    let restored = store.restore().map(|session| session.user.clone());

    let state = GlobalState {
        user: create_rw_signal(restored),
        active_tab: create_rw_signal(Tab::default()),
        auth_screen: create_rw_signal(AuthScreen::default()),
        patient_form_open: create_rw_signal(false),
        error: create_rw_signal(ToastSlot::default()),
        success: create_rw_signal(ToastSlot::default()),
        session: store_value(store),
    };

    provide_context(state);
}

impl GlobalState {
    /// API client carrying the current session token
    pub fn client(&self) -> ApiClient<GlooTransport> {
        let token = self.session.with_value(|s| s.token().map(String::from));
        ApiClient::new(GlooTransport, &api::get_api_base()).with_token(token)
    }

    /// Record a successful login and enter the shell
    pub fn sign_in(&self, response: LoginResponse) {
        let user = response.user.clone();
        self.session.update_value(|s| {
            if let Err(e) = s.login(response.user, response.token) {
                web_sys::console::error_1(&format!("Session save error: {}", e).into());
            }
        });
        self.active_tab.set(Tab::Dashboard);
        self.user.set(Some(user));
    }

    /// Invalidate the token server-side, then clear the stored session
    pub fn sign_out(&self) {
        let client = self.client();
        spawn_local(async move {
            if let Err(e) = client.logout().await {
                web_sys::console::warn_1(&format!("Logout request failed: {}", e).into());
            }
        });

        self.session.update_value(|s| {
            if let Err(e) = s.logout() {
                web_sys::console::error_1(&format!("Session clear error: {}", e).into());
            }
        });
        self.patient_form_open.set(false);
        self.auth_screen.set(AuthScreen::Landing);
        self.user.set(None);
    }

    /// Re-check a restored token; a rejected token ends the session,
    /// an unreachable server leaves it in place
    pub fn verify_session(&self) {
        if self.user.get_untracked().is_none() {
            return;
        }
        let token = match self.session.with_value(|s| s.token().map(String::from)) {
            Some(token) => token,
            None => return,
        };

        let state = *self;
        let client = self.client();
        spawn_local(async move {
            let mut store = SessionStore::new(LocalStorage);
            store.restore();
            let check = store.verify(&client).await;

            // Signed out or in as someone else meanwhile
            if !state.session.with_value(|s| s.token() == Some(token.as_str())) {
                return;
            }

            match check {
                SessionCheck::Valid(user) => {
                    state.session.update_value(|s| {
                        s.restore();
                    });
                    state.user.set(Some(user));
                }
                SessionCheck::Rejected => {
                    state.session.update_value(|s| {
                        s.restore();
                    });
                    state.auth_screen.set(AuthScreen::Login);
                    state.user.set(None);
                    state.show_error("Oturumunuz sona erdi, lütfen tekrar giriş yapın");
                }
                SessionCheck::Unverified(e) => {
                    web_sys::console::warn_1(&format!("Session check skipped: {}", e).into());
                }
                SessionCheck::Superseded | SessionCheck::NoSession => {}
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.show_toast(self.success, ToastKind::Success, message);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.show_toast(self.error, ToastKind::Error, message);
    }

    fn show_toast(&self, slot: RwSignal<ToastSlot>, kind: ToastKind, message: &str) {
        let mut ticket = 0;
        slot.update(|s| ticket = s.show(message));

        gloo_timers::callback::Timeout::new(kind.lifetime_ms(), move || {
            slot.update(|s| {
                s.expire(ticket);
            });
        })
        .forget();
    }

    /// Log a failed fetch to the console and surface it as a toast
    pub fn report_error(&self, context: &str, err: &impl Display) {
        web_sys::console::error_1(&format!("{}: {}", context, err).into());
        self.show_error(&err.to_string());
    }

    /// Switch the visible tab
    pub fn navigate(&self, tab: Tab) {
        self.active_tab.set(tab);
    }

    /// Placeholder notice shown in a native alert box
    pub fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
