use leptos::*;

use dentcare::display::status_badge;
use dentcare::model::AppointmentStatus;

/// Colored status pill
#[component]
pub fn StatusBadge(status: AppointmentStatus) -> impl IntoView {
    let badge = status_badge(&status);

    view! {
        <span class=format!("badge {}", badge.class)>{badge.label}</span>
    }
}
