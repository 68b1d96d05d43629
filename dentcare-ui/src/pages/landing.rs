//! Landing Page
//!
//! Signed-out entry screen with the public clinic count.

use leptos::*;

use dentcare::shell::{landing_clinic_count, AuthScreen, LANDING_CLINIC_FALLBACK};

use crate::state::global::GlobalState;

#[component]
pub fn Landing() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (clinic_count, set_clinic_count) = create_signal(LANDING_CLINIC_FALLBACK);

    create_effect(move |_| {
        spawn_local(async move {
            let listing = state.client().public_clinics().await;
            if let Err(e) = &listing {
                web_sys::console::error_1(&format!("Clinic count fetch error: {}", e).into());
            }
            set_clinic_count.set(landing_clinic_count(&listing));
        });
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-white flex flex-col">
            <header class="p-6">
                <div class="flex items-center gap-3 max-w-6xl mx-auto">
                    <div class="w-12 h-12 bg-blue-600 rounded-xl flex items-center justify-center">
                        <span class="text-2xl">"🦷"</span>
                    </div>
                    <span class="text-xl font-bold text-gray-900">"DentCare"</span>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-6">
                <div class="max-w-4xl w-full text-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">"DentCare'e Hoşgeldiniz"</h1>
                    <p class="text-xl text-gray-600 mb-2">"Kliniklerin elektronik asistanı"</p>
                    <p class="text-lg text-blue-600 font-medium mb-12">
                        {move || format!("{} klinik ile yola devam ediyoruz 🚀", clinic_count.get())}
                    </p>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 max-w-2xl mx-auto">
                        <div
                            class="card p-8 cursor-pointer hover:shadow-lg transition-all group"
                            on:click=move |_| state.auth_screen.set(AuthScreen::Login)
                        >
                            <div class="w-16 h-16 bg-blue-100 rounded-2xl flex items-center justify-center mx-auto mb-4">
                                <span class="text-3xl">"🔐"</span>
                            </div>
                            <h2 class="text-xl font-semibold text-gray-900 mb-2">"Giriş Yap"</h2>
                            <p class="text-gray-500 text-sm mb-4">"Zaten kayıtlı mısınız?"</p>
                            <button class="btn-primary w-full">"Hesabıma Giriş Yap"</button>
                        </div>

                        <div
                            class="card p-8 cursor-pointer hover:shadow-lg transition-all group border-2 border-dashed border-blue-200"
                            on:click=move |_| state.auth_screen.set(AuthScreen::Register)
                        >
                            <div class="w-16 h-16 bg-green-100 rounded-2xl flex items-center justify-center mx-auto mb-4">
                                <span class="text-3xl">"✨"</span>
                            </div>
                            <h2 class="text-xl font-semibold text-gray-900 mb-2">"Kayıt Ol"</h2>
                            <p class="text-gray-500 text-sm mb-4">"Yeni klinik kaydı oluşturun"</p>
                            <button class="btn-outline w-full">"Aylık Abonelik Başlat"</button>
                            <p class="text-xs text-gray-400 mt-3">"14 gün ücretsiz deneme"</p>
                        </div>
                    </div>

                    <div class="mt-16 grid grid-cols-1 md:grid-cols-3 gap-6 text-left">
                        <Feature icon="📅" title="Randevu Yönetimi" text="Kolay randevu takibi ve SMS hatırlatma" />
                        <Feature icon="👥" title="Hasta Kayıtları" text="Detaylı hasta bilgileri ve geçmişi" />
                        <Feature icon="📊" title="Raporlama" text="PDF ve Excel formatında raporlar" />
                    </div>
                </div>
            </main>

            <footer class="p-6 text-center text-sm text-gray-500">
                "© 2026 DentCare. Tüm hakları saklıdır."
            </footer>
        </div>
    }
}

#[component]
fn Feature(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <div class="w-10 h-10 bg-blue-100 rounded-lg flex items-center justify-center flex-shrink-0">
                <span>{icon}</span>
            </div>
            <div>
                <h3 class="font-semibold text-gray-900">{title}</h3>
                <p class="text-sm text-gray-500">{text}</p>
            </div>
        </div>
    }
}
