//! Patient Form Component
//!
//! Two-step intake modal: personal details, then health details.

use leptos::*;

use dentcare::form::ModalForm;
use dentcare::intake::{submit_patient, IntakeStep, IntakeWizard, PatientDraft};
use dentcare::model::BloodType;

use crate::state::global::GlobalState;

/// Intake modal; the patient is created once, from the second step
#[component]
pub fn PatientForm(
    #[prop(into)]
    on_close: Callback<()>,
    #[prop(into)]
    on_success: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let wizard = create_rw_signal(IntakeWizard::new());
    let form = create_rw_signal(ModalForm::opened());

    let step = move || wizard.with(|w| w.step);

    let next_step = move || {
        let mut outcome = Ok(());
        wizard.update(|w| outcome = w.advance());
        form.update(|f| f.error = outcome.err().map(|e| e.to_string()));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if step() == IntakeStep::Personal {
            next_step();
            return;
        }

        let mut started = false;
        form.update(|f| started = f.begin());
        if !started {
            return;
        }

        let current = wizard.get_untracked();
        spawn_local(async move {
            let result = submit_patient(&state.client(), &current).await;

            let mut saved = None;
            form.update(|f| f.finish(result, |patient| saved = Some(patient)));
            if let Some(patient) = saved {
                state.show_success(&format!("{} kaydedildi", patient.name));
                on_success.call(());
            }
        });
    };

    view! {
        <div class="modal-overlay animate-fade-in">
            <div class="modal-content p-6">
                <div class="flex items-center justify-between mb-4">
                    <div>
                        <h2 class="text-xl font-bold text-gray-900">"Yeni Hasta Kaydı"</h2>
                        <p class="text-sm text-gray-500">
                            {move || format!("Adım {}/2 - {}", step().number(), step().title())}
                        </p>
                    </div>
                    <button
                        type="button"
                        on:click=move |_| on_close.call(())
                        class="w-9 h-9 rounded-full bg-gray-100 hover:bg-gray-200 flex items-center justify-center text-gray-500"
                    >
                        "✕"
                    </button>
                </div>

                <div class="flex gap-2 mb-6">
                    <div class="flex-1 h-1.5 rounded-full bg-blue-600" />
                    <div class=move || {
                        if step() == IntakeStep::Health {
                            "flex-1 h-1.5 rounded-full bg-blue-600"
                        } else {
                            "flex-1 h-1.5 rounded-full bg-gray-200"
                        }
                    } />
                </div>

                {move || form.with(|f| f.error.clone()).map(|message| view! {
                    <div class="mb-4 p-3 rounded-lg bg-red-50 border border-red-200 text-red-600 text-sm">
                        {message}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    {move || match step() {
                        IntakeStep::Personal => view! {
                            <PersonalStep wizard=wizard on_next=move |_| next_step() />
                        }.into_view(),
                        IntakeStep::Health => view! {
                            <HealthStep wizard=wizard form=form />
                        }.into_view(),
                    }}
                </form>
            </div>
        </div>
    }
}

#[component]
fn PersonalStep(
    wizard: RwSignal<IntakeWizard>,
    #[prop(into)]
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <DraftInput
                wizard=wizard
                label="Ad Soyad *"
                placeholder="Ahmet Yılmaz"
                required=true
                get=|d| d.name.clone()
                set=|d, v| d.name = v
            />
            <div class="grid grid-cols-2 gap-4">
                <DraftInput
                    wizard=wizard
                    label="Telefon *"
                    kind="tel"
                    placeholder="0532 123 4567"
                    required=true
                    get=|d| d.phone.clone()
                    set=|d, v| d.phone = v
                />
                <DraftInput
                    wizard=wizard
                    label="E-posta"
                    kind="email"
                    placeholder="ornek@email.com"
                    get=|d| d.email.clone()
                    set=|d, v| d.email = v
                />
            </div>
            <DraftInput
                wizard=wizard
                label="Doğum Tarihi"
                kind="date"
                get=|d| d.date_of_birth.clone()
                set=|d, v| d.date_of_birth = v
            />

            <label class="flex items-center gap-3 text-sm text-gray-700">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.draft.sms_consent)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        wizard.update(|w| w.draft.sms_consent = checked);
                    }
                />
                "Randevu hatırlatmaları için SMS gönderimine izin veriyorum"
            </label>

            <button type="button" on:click=move |_| on_next.call(()) class="w-full btn-primary">
                "Devam Et →"
            </button>
        </div>
    }
}

#[component]
fn HealthStep(wizard: RwSignal<IntakeWizard>, form: RwSignal<ModalForm>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1.5">"Kan Grubu"</label>
                <select
                    class="input"
                    prop:value=move || wizard.with(|w| w.draft.blood_type.code().to_string())
                    on:change=move |ev| {
                        let blood_type = BloodType::from_code(&event_target_value(&ev));
                        wizard.update(|w| w.draft.blood_type = blood_type);
                    }
                >
                    {BloodType::ALL.into_iter().map(|bt| view! {
                        <option value=bt.code()>{bt.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <DraftTextArea
                wizard=wizard
                label="Alerjiler"
                placeholder="İlaç, lateks, diğer alerjiler..."
                get=|d| d.allergies.clone()
                set=|d, v| d.allergies = v
            />
            <DraftTextArea
                wizard=wizard
                label="Kronik Hastalıklar"
                placeholder="Diyabet, hipertansiyon, kalp hastalığı..."
                get=|d| d.chronic_diseases.clone()
                set=|d, v| d.chronic_diseases = v
            />
            <DraftTextArea
                wizard=wizard
                label="Kullanılan İlaçlar"
                placeholder="Düzenli kullanılan ilaçlar..."
                get=|d| d.current_medications.clone()
                set=|d, v| d.current_medications = v
            />

            <div class="grid grid-cols-2 gap-4">
                <DraftInput
                    wizard=wizard
                    label="Acil Durum Kişisi"
                    placeholder="İsim"
                    get=|d| d.emergency_contact_name.clone()
                    set=|d, v| d.emergency_contact_name = v
                />
                <DraftInput
                    wizard=wizard
                    label="Acil Durum Tel"
                    kind="tel"
                    placeholder="Telefon"
                    get=|d| d.emergency_contact_phone.clone()
                    set=|d, v| d.emergency_contact_phone = v
                />
            </div>

            <DraftTextArea
                wizard=wizard
                label="Ek Notlar"
                placeholder="Diğer önemli bilgiler..."
                get=|d| d.notes.clone()
                set=|d, v| d.notes = v
            />

            <div class="flex gap-3 pt-4">
                <button
                    type="button"
                    on:click=move |_| wizard.update(|w| w.back())
                    class="flex-1 btn-secondary"
                >
                    "← Geri"
                </button>
                <button
                    type="submit"
                    disabled=move || form.with(|f| f.submitting)
                    class="flex-1 btn-primary disabled:opacity-50"
                >
                    {move || if form.with(|f| f.submitting) { "Kaydediliyor..." } else { "Hastayı Kaydet" }}
                </button>
            </div>
        </div>
    }
}

/// Single-line input bound to one draft field
#[component]
fn DraftInput(
    wizard: RwSignal<IntakeWizard>,
    label: &'static str,
    #[prop(default = "text")]
    kind: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(optional)]
    required: bool,
    get: fn(&PatientDraft) -> String,
    set: fn(&mut PatientDraft, String),
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1.5">{label}</label>
            <input
                type=kind
                class="input"
                placeholder=placeholder
                required=required
                prop:value=move || wizard.with(|w| get(&w.draft))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| set(&mut w.draft, value));
                }
            />
        </div>
    }
}

#[component]
fn DraftTextArea(
    wizard: RwSignal<IntakeWizard>,
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    get: fn(&PatientDraft) -> String,
    set: fn(&mut PatientDraft, String),
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1.5">{label}</label>
            <textarea
                rows=2
                class="input resize-none"
                placeholder=placeholder
                prop:value=move || wizard.with(|w| get(&w.draft))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| set(&mut w.draft, value));
                }
            />
        </div>
    }
}
