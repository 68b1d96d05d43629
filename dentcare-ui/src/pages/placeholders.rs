//! Patients and Dentists tabs
//!
//! Listing screens are not built yet; patients can still be registered.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn Patients() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let open_intake = move |_| state.patient_form_open.set(true);

    view! {
        <div class="space-y-6 animate-fade-in">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-xl font-bold text-gray-900">"Hastalar"</h2>
                    <p class="text-gray-500 text-sm">"Hasta kayıtlarını yönetin"</p>
                </div>
                <button on:click=open_intake class="btn-primary flex items-center gap-2">
                    <span>"+"</span>
                    <span>"Yeni Hasta"</span>
                </button>
            </div>
            <div class="card p-8 text-center">
                <p class="text-4xl mb-4">"👥"</p>
                <h3 class="text-lg font-semibold text-gray-900 mb-2">"Hasta Listesi"</h3>
                <p class="text-gray-500 mb-4">"Hasta listesi modülü yakında"</p>
                <button on:click=open_intake class="btn-primary">"İlk Hastayı Ekle"</button>
            </div>
        </div>
    }
}

#[component]
pub fn Dentists() -> impl IntoView {
    view! {
        <div class="card p-8 text-center animate-fade-in">
            <p class="text-4xl mb-4">"👨‍⚕️"</p>
            <h2 class="text-lg font-semibold text-gray-900 mb-2">"Diş Hekimleri"</h2>
            <p class="text-gray-500">"Hekim yönetimi modülü yakında"</p>
        </div>
    }
}
