//! Toast Notifications
//!
//! Bottom-right stack with one success and one error slot.

use leptos::*;

use dentcare::shell::ToastKind;

use crate::state::global::GlobalState;

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let success = move || state.success.with(|slot| slot.message().map(String::from));
    let error = move || state.error.with(|slot| slot.message().map(String::from));

    view! {
        <div class="toast-stack fixed bottom-6 right-6 z-50 space-y-2">
            {move || success().map(|message| view! { <ToastCard kind=ToastKind::Success message=message /> })}
            {move || error().map(|message| view! { <ToastCard kind=ToastKind::Error message=message /> })}
        </div>
    }
}

#[component]
fn ToastCard(kind: ToastKind, message: String) -> impl IntoView {
    view! {
        <div class=format!("{} animate-fade-in", kind.class()) role="status">
            <span class="toast-icon">{kind.icon()}</span>
            <span class="toast-message">{message}</span>
        </div>
    }
}
