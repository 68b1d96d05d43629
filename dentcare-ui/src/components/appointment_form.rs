//! Appointment Form Component
//!
//! Modal for booking a new appointment.

use chrono::NaiveDate;
use leptos::*;

use dentcare::form::ModalForm;
use dentcare::schedule::{submit_appointment, time_slot_roster, AppointmentDraft, BookingOptions, VisitLength};

use crate::state::global::GlobalState;

/// Booking modal; `on_success` runs only after the server accepted the appointment
#[component]
pub fn AppointmentForm(
    date: NaiveDate,
    #[prop(default = None)]
    start_time: Option<String>,
    #[prop(into)]
    on_close: Callback<()>,
    #[prop(into)]
    on_success: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let mut initial = AppointmentDraft::for_date(date);
    if let Some(time) = start_time {
        initial.start_time = time;
    }
    let draft = create_rw_signal(initial);
    let form = create_rw_signal(ModalForm::opened());
    let options = create_rw_signal(BookingOptions::default());
    let (options_loading, set_options_loading) = create_signal(true);

    // Dentists and patients, once per mount
    create_effect(move |_| {
        spawn_local(async move {
            match state.client().booking_options().await {
                Ok(loaded) => options.set(loaded),
                Err(e) => state.report_error("Booking options fetch error", &e),
            }
            set_options_loading.set(false);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut started = false;
        form.update(|f| started = f.begin());
        if !started {
            return;
        }

        let current = draft.get_untracked();
        spawn_local(async move {
            let result = submit_appointment(&state.client(), &current).await;

            let mut created = false;
            form.update(|f| f.finish(result, |_| created = true));
            if created {
                state.show_success("Randevu oluşturuldu");
                on_success.call(());
            }
        });
    };

    view! {
        <div class="modal-overlay animate-fade-in">
            <div class="modal-content p-6">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-bold text-gray-900">"Yeni Randevu"</h2>
                    <button
                        type="button"
                        on:click=move |_| on_close.call(())
                        class="w-9 h-9 rounded-full bg-gray-100 hover:bg-gray-200 flex items-center justify-center text-gray-500"
                    >
                        "✕"
                    </button>
                </div>

                {move || form.with(|f| f.error.clone()).map(|message| view! {
                    <div class="mb-4 p-3 rounded-lg bg-red-50 border border-red-200 text-red-600 text-sm">
                        {message}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1.5">"Diş Hekimi *"</label>
                        <select
                            required
                            class="input"
                            disabled=move || options_loading.get()
                            prop:value=move || draft.with(|d| d.dentist.map(|id| id.to_string()).unwrap_or_default())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.dentist = value.parse().ok());
                            }
                        >
                            <option value="">"Hekim seçin..."</option>
                            {move || options.with(|o| {
                                o.dentists.iter().map(|dentist| view! {
                                    <option value=dentist.id.to_string()>{dentist.select_label()}</option>
                                }).collect_view()
                            })}
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1.5">"Hasta *"</label>
                        <select
                            required
                            class="input"
                            disabled=move || options_loading.get()
                            prop:value=move || draft.with(|d| d.patient.map(|id| id.to_string()).unwrap_or_default())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.patient = value.parse().ok());
                            }
                        >
                            <option value="">"Hasta seçin..."</option>
                            {move || options.with(|o| {
                                o.patients.iter().map(|patient| view! {
                                    <option value=patient.id.to_string()>{patient.name.clone()}</option>
                                }).collect_view()
                            })}
                        </select>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1.5">"Tarih *"</label>
                            <input
                                type="date"
                                required
                                class="input"
                                prop:value=move || draft.with(|d| d.date.format("%Y-%m-%d").to_string())
                                on:input=move |ev| {
                                    if let Ok(date) = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
                                        draft.update(|d| d.date = date);
                                    }
                                }
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1.5">"Saat *"</label>
                            <select
                                required
                                class="input"
                                prop:value=move || draft.with(|d| d.start_time.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.start_time = value);
                                }
                            >
                                {time_slot_roster().into_iter().map(|time| view! {
                                    <option value=time.clone()>{time.clone()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1.5">"Süre (dk)"</label>
                            <select
                                class="input"
                                prop:value=move || draft.with(|d| d.length.minutes().to_string())
                                on:change=move |ev| {
                                    if let Ok(length) = event_target_value(&ev).parse::<VisitLength>() {
                                        draft.update(|d| d.length = length);
                                    }
                                }
                            >
                                {VisitLength::ALL.into_iter().map(|length| view! {
                                    <option value=length.minutes().to_string()>{length.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1.5">"Tedavi Türü"</label>
                            <input
                                type="text"
                                class="input"
                                placeholder="Örn: Diş Temizliği"
                                prop:value=move || draft.with(|d| d.treatment_type.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.treatment_type = value);
                                }
                            />
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1.5">"Notlar"</label>
                        <textarea
                            rows=2
                            class="input resize-none"
                            placeholder="Ek bilgi..."
                            prop:value=move || draft.with(|d| d.notes.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.notes = value);
                            }
                        />
                    </div>

                    <div class="flex gap-3 pt-2">
                        <button type="button" on:click=move |_| on_close.call(()) class="flex-1 btn-secondary">
                            "İptal"
                        </button>
                        <button
                            type="submit"
                            disabled=move || form.with(|f| f.submitting)
                            class="flex-1 btn-primary disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {move || if form.with(|f| f.submitting) { "Kaydediliyor..." } else { "Randevu Oluştur" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
