//! Sidebar Component
//!
//! Collapsible navigation rail with the signed-in user and logout.

use leptos::*;

use dentcare::shell::{Tab, LOGOUT_LABEL};

use crate::state::global::GlobalState;

/// Navigation sidebar; expands on hover
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (expanded, set_expanded) = create_signal(false);

    view! {
        <aside
            class=move || if expanded.get() { "sidebar expanded" } else { "sidebar collapsed" }
            on:mouseenter=move |_| set_expanded.set(true)
            on:mouseleave=move |_| set_expanded.set(false)
        >
            <div class="sidebar-logo">
                <div class="logo-icon">"🦷"</div>
                <Show when=move || expanded.get()>
                    <span class="logo-text">"DentCare"</span>
                </Show>
            </div>

            <nav class="sidebar-nav">
                {Tab::ALL.into_iter().map(|tab| view! {
                    <NavItem tab=tab expanded=expanded />
                }).collect_view()}
            </nav>

            {move || {
                let user = state.user.get().filter(|_| expanded.get())?;
                Some(view! {
                    <div class="sidebar-user">
                        <div class="user-avatar">{user.initial().to_string()}</div>
                        <div class="user-info">
                            <span class="user-name">{user.display_name().to_string()}</span>
                            <span class="user-role">{user.role_display.clone()}</span>
                        </div>
                    </div>
                })
            }}

            <button
                on:click=move |_| state.sign_out()
                class="nav-item logout-btn"
                title=move || if expanded.get() { "" } else { LOGOUT_LABEL }
            >
                <span class="nav-icon">"🚪"</span>
                <Show when=move || expanded.get()>
                    <span class="nav-label">{LOGOUT_LABEL}</span>
                </Show>
            </button>
        </aside>
    }
}

#[component]
fn NavItem(tab: Tab, expanded: ReadSignal<bool>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            on:click=move |_| state.navigate(tab)
            class=move || {
                if state.active_tab.get() == tab { "nav-item active" } else { "nav-item" }
            }
            title=move || if expanded.get() { "" } else { tab.label() }
        >
            <span class="nav-icon">{tab.icon()}</span>
            <Show when=move || expanded.get()>
                <span class="nav-label">{tab.label()}</span>
            </Show>
        </button>
    }
}
