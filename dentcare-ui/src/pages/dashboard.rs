//! Dashboard Page
//!
//! Daily counters, today's timeline and quick actions.

use chrono::Local;
use leptos::*;

use dentcare::display::format_clock;
use dentcare::model::{Appointment, DashboardStats};
use dentcare::reports::PATIENTS_EXCEL_NOTICE;
use dentcare::shell::Tab;

use crate::components::{Loading, StatusBadge};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let stats = create_rw_signal(DashboardStats::default());
    let today = create_rw_signal(Vec::<Appointment>::new());
    let (loading, set_loading) = create_signal(true);

    // Fetch initial data on mount
    create_effect(move |_| {
        spawn_local(async move {
            let overview = state.client().dashboard_overview(Local::now().date_naive()).await;

            match overview.stats {
                Ok(loaded) => stats.set(loaded),
                Err(e) => state.report_error("Dashboard stats fetch error", &e),
            }
            match overview.today {
                Ok(appointments) => today.set(appointments),
                Err(e) => state.report_error("Today's appointments fetch error", &e),
            }

            set_loading.set(false);
        });
    });

    let print = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
            <div class="animate-fade-in">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                    <StatCard icon="👨‍⚕️" label="Hekim Sayısı" value=Signal::derive(move || stats.with(|s| s.dentist_count)) />
                    <StatCard icon="👥" label="Kayıtlı Hasta" value=Signal::derive(move || stats.with(|s| s.patient_count)) />
                    <StatCard icon="📅" label="Bugünkü Randevular" value=Signal::derive(move || stats.with(|s| s.today_appointments)) />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2 card p-6">
                        <h2 class="text-lg font-semibold text-gray-900 mb-4">"Bugünkü Randevu Durumu"</h2>
                        {move || today.with(|appointments| {
                            if appointments.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <div class="empty-state-icon">"📭"</div>
                                        <p>"Bugün için randevu bulunmuyor"</p>
                                    </div>
                                }.into_view()
                            } else {
                                appointments.iter().cloned().map(|apt| view! { <TimelineItem apt=apt /> }).collect_view()
                            }
                        })}
                    </div>

                    <div class="card p-6 space-y-3">
                        <h3 class="font-semibold text-gray-900">"Hızlı İşlemler"</h3>
                        <button class="quick-action-btn" on:click=print>
                            <span>"🖨️"</span>
                            <span>"Günlük Rapor Yazdır"</span>
                        </button>
                        <button class="quick-action-btn" on:click=move |_| state.navigate(Tab::Reports)>
                            <span>"📊"</span>
                            <span>"Hekim Raporu (PDF)"</span>
                        </button>
                        <button class="quick-action-btn" on:click=move |_| state.alert(PATIENTS_EXCEL_NOTICE)>
                            <span>"📋"</span>
                            <span>"Hasta Listesi (Excel)"</span>
                        </button>
                        <button class="quick-action-btn" on:click=move |_| state.navigate(Tab::Calendar)>
                            <span>"➕"</span>
                            <span>"Yeni Randevu"</span>
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn StatCard(icon: &'static str, label: &'static str, value: Signal<u64>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="flex items-center gap-3">
                <div class="w-12 h-12 bg-blue-100 rounded-xl flex items-center justify-center">
                    <span class="text-2xl">{icon}</span>
                </div>
                <div>
                    <p class="text-sm text-gray-500">{label}</p>
                    <p class="text-2xl font-bold text-gray-900">{move || value.get()}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TimelineItem(apt: Appointment) -> impl IntoView {
    let treatment = (!apt.treatment_type.is_empty()).then(|| apt.treatment_type.clone());

    view! {
        <div class="timeline-item">
            <div class="timeline-time">{format_clock(&apt.start_time)}</div>
            <div class="timeline-content">
                <div class="timeline-patient">{apt.patient_name.clone()}</div>
                <div class="timeline-dentist">{format!("Dr. {}", apt.dentist_name)}</div>
                {treatment.map(|t| view! { <div class="timeline-treatment">{t}</div> })}
            </div>
            <StatusBadge status=apt.status.clone() />
        </div>
    }
}
