//! Reports Page
//!
//! Dentist PDF and patient Excel exports. Both are notices until the
//! backend can produce the files.

use leptos::*;

use dentcare::model::Dentist;
use dentcare::reports::{dentist_pdf_notice, roster_rows, PATIENTS_EXCEL_NOTICE};

use crate::components::Loading;
use crate::state::global::GlobalState;

#[component]
pub fn Reports() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let dentists = create_rw_signal(Vec::<Dentist>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match state.client().dentists(None).await {
                Ok(loaded) => dentists.set(loaded),
                Err(e) => state.report_error("Dentists fetch error", &e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
            <div class="animate-fade-in space-y-6">
                <div>
                    <h1 class="text-xl font-bold text-gray-900">"Raporlar"</h1>
                    <p class="text-gray-500 text-sm">"Hekim ve hasta raporlarını indirin"</p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="card p-5">
                        <div class="flex items-center gap-3 mb-4">
                            <div class="w-10 h-10 bg-blue-100 rounded-lg flex items-center justify-center">
                                <span class="text-xl">"👨‍⚕️"</span>
                            </div>
                            <div>
                                <h2 class="font-semibold text-gray-900">"Hekim Raporları"</h2>
                                <p class="text-sm text-gray-500">"PDF formatında detaylı rapor"</p>
                            </div>
                        </div>

                        <div class="text-sm font-medium text-gray-700 mb-2">"Hekimlerimiz:"</div>

                        {move || dentists.with(|list| {
                            if list.is_empty() {
                                view! {
                                    <div class="text-center py-8 text-gray-500">"Henüz hekim eklenmemiş"</div>
                                }.into_view()
                            } else {
                                view! {
                                    <div class="space-y-2">
                                        {list.iter().cloned().zip(roster_rows(list)).map(|(dentist, row)| {
                                            let notice = dentist_pdf_notice(&dentist);
                                            view! {
                                                <button
                                                    on:click=move |_| state.alert(&notice)
                                                    class="w-full flex items-center justify-between p-3 rounded-lg border border-gray-200 hover:bg-blue-50 transition-all text-left"
                                                >
                                                    <span class="font-medium text-gray-900">{row}</span>
                                                    <span class="text-blue-600 text-sm font-medium">"PDF ↓"</span>
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                }.into_view()
                            }
                        })}

                        <div class="mt-4 p-3 bg-blue-50 rounded-lg text-sm text-blue-700">
                            <strong>"PDF içeriği:"</strong>
                            " Aylık hasta grafiği, kazanç, randevu yoğunluğu"
                        </div>
                    </div>

                    <div class="card p-5">
                        <div class="flex items-center gap-3 mb-4">
                            <div class="w-10 h-10 bg-green-100 rounded-lg flex items-center justify-center">
                                <span class="text-xl">"👥"</span>
                            </div>
                            <div>
                                <h2 class="font-semibold text-gray-900">"Hasta Raporları"</h2>
                                <p class="text-sm text-gray-500">"Excel formatında kayıt listesi"</p>
                            </div>
                        </div>

                        <div class="py-8 text-center">
                            <div class="w-16 h-16 bg-green-100 rounded-2xl flex items-center justify-center mx-auto mb-4">
                                <span class="text-3xl">"📋"</span>
                            </div>
                            <p class="text-gray-600 mb-4">"Tüm hastaların kayıt listesini Excel dosyası olarak indirin"</p>
                            <button on:click=move |_| state.alert(PATIENTS_EXCEL_NOTICE) class="btn-primary">
                                "📊 Hasta Listesi İndir (Excel)"
                            </button>
                        </div>

                        <div class="mt-4 p-3 bg-green-50 rounded-lg text-sm text-green-700">
                            <strong>"Excel içeriği:"</strong>
                            " Ad, telefon, e-posta, kayıt tarihi, randevu sayısı"
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
