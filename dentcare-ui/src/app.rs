//! App Root Component
//!
//! Switches between the signed-out screens and the clinic shell.

use leptos::*;

use dentcare::shell::{AuthScreen, Tab};

use crate::components::{PatientForm, Sidebar, Toast};
use crate::pages::{Calendar, Dashboard, Dentists, Landing, Login, Patients, Register, Reports};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Re-check a restored session against the server once
    create_effect(move |_| state.verify_session());

    view! {
        {move || {
            if state.user.with(Option::is_none) {
                match state.auth_screen.get() {
                    AuthScreen::Landing => view! { <Landing /> }.into_view(),
                    AuthScreen::Login => view! { <Login /> }.into_view(),
                    AuthScreen::Register => view! { <Register /> }.into_view(),
                }
            } else {
                view! { <Shell /> }.into_view()
            }
        }}

        <Toast />
    }
}

/// Sidebar, active tab and the intake modal
#[component]
fn Shell() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let close_intake = move |_: ()| state.patient_form_open.set(false);

    view! {
        <div class="min-h-screen bg-gray-50 flex">
            <Show when=move || state.patient_form_open.get()>
                <PatientForm on_close=close_intake on_success=close_intake />
            </Show>

            <Sidebar />

            <main class="flex-1 p-6 ml-20">
                {move || match state.active_tab.get() {
                    Tab::Dashboard => view! { <Dashboard /> }.into_view(),
                    Tab::Calendar => view! { <Calendar /> }.into_view(),
                    Tab::Patients => view! { <Patients /> }.into_view(),
                    Tab::Dentists => view! { <Dentists /> }.into_view(),
                    Tab::Reports => view! { <Reports /> }.into_view(),
                }}
            </main>
        </div>
    }
}
