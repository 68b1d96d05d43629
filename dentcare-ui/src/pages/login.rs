//! Login and Register Pages

use leptos::*;

use dentcare::shell::{AuthScreen, DEMO_PASSWORD, DEMO_USERNAME, REGISTER_NOTICE};

use crate::state::global::GlobalState;

/// Credential form; a rejected login keeps the form and shows the server message
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        set_loading.set(true);

        spawn_local(async move {
            let result = state
                .client()
                .login(&username.get_untracked(), &password.get_untracked())
                .await;

            match result {
                Ok(response) => state.sign_in(response),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-white flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <AuthHeader title="DentCare" subtitle="Klinik Yönetim Sistemi" />

                <form on:submit=on_submit class="card p-6 space-y-4">
                    <h2 class="text-lg font-semibold text-center text-gray-900">"Giriş Yap"</h2>

                    {move || error.get().map(|message| view! {
                        <div class="p-3 bg-red-50 border border-red-200 rounded-lg text-red-600 text-sm">
                            {message}
                        </div>
                    })}

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Kullanıcı Adı"</label>
                        <input
                            type="text"
                            class="input"
                            placeholder="kullanici@email.com"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Şifre"</label>
                        <input
                            type="password"
                            class="input"
                            placeholder="••••••••"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="btn-primary w-full" disabled=move || loading.get()>
                        {move || if loading.get() { "Giriş yapılıyor..." } else { "Giriş Yap" }}
                    </button>

                    <div class="text-center pt-2">
                        <p class="text-sm text-gray-500 mb-1">"Demo Bilgileri:"</p>
                        <p class="text-xs text-gray-400">
                            {format!("Kullanıcı: {} | Şifre: {}", DEMO_USERNAME, DEMO_PASSWORD)}
                        </p>
                    </div>

                    <BackToLanding />
                </form>

                <p class="text-center text-sm text-gray-500 mt-4">"© 2026 DentCare. Tüm hakları saklıdır."</p>
            </div>
        </div>
    }
}

/// Clinic sign-up form; registration is not available yet
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.alert(REGISTER_NOTICE);
        state.auth_screen.set(AuthScreen::Login);
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-white flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <AuthHeader title="Klinik Kayıt" subtitle="14 gün ücretsiz deneme" />

                <form on:submit=on_submit class="card p-6 space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Klinik Adı"</label>
                        <input type="text" class="input" placeholder="Örn: Gülümseten Diş Kliniği" required />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"E-posta"</label>
                        <input type="email" class="input" placeholder="admin@klinik.com" required />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Şifre"</label>
                        <input type="password" class="input" placeholder="••••••••" required />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">"Telefon"</label>
                        <input type="tel" class="input" placeholder="0212 123 4567" />
                    </div>

                    <button type="submit" class="btn-primary w-full">"Kayıt Ol ve Başla"</button>

                    <p class="text-center text-sm text-gray-500">
                        "Zaten hesabınız var mı? "
                        <button
                            type="button"
                            on:click=move |_| state.auth_screen.set(AuthScreen::Login)
                            class="text-blue-600 hover:underline font-medium"
                        >
                            "Giriş Yap"
                        </button>
                    </p>

                    <BackToLanding />
                </form>
            </div>
        </div>
    }
}

#[component]
fn AuthHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-8">
            <div class="w-16 h-16 bg-blue-600 rounded-2xl flex items-center justify-center mx-auto mb-4">
                <span class="text-3xl">"🦷"</span>
            </div>
            <h1 class="text-2xl font-bold text-gray-900">{title}</h1>
            <p class="text-gray-500">{subtitle}</p>
        </div>
    }
}

#[component]
fn BackToLanding() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            type="button"
            on:click=move |_| state.auth_screen.set(AuthScreen::Landing)
            class="w-full text-center text-sm text-gray-400 hover:text-gray-600"
        >
            "← Ana Sayfaya Dön"
        </button>
    }
}
