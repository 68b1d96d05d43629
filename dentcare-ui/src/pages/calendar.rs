//! Calendar Page
//!
//! One day of slots and appointments, with date navigation and booking.

use leptos::*;

use dentcare::display::{format_clock, format_long_date};
use dentcare::model::Appointment;
use dentcare::schedule::{DayCursor, DaySchedule, SlotState, SlotTile};

use crate::components::{AppointmentForm, StatusBadge};
use crate::state::global::GlobalState;

/// Day view component
#[component]
pub fn Calendar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let cursor = create_rw_signal(DayCursor::today());
    let schedule = create_rw_signal(DaySchedule::default());
    let (loading, set_loading) = create_signal(true);

    // None: form closed; Some(prefill): form open, optionally at a slot
    let booking = create_rw_signal(None::<Option<String>>);

    // Re-fetch whenever the date changes or a booking lands
    create_effect(move |_| {
        let ticket = cursor.with(|c| c.ticket());
        set_loading.set(true);

        spawn_local(async move {
            let result = state.client().day_schedule(ticket.date, None).await;

            if !cursor.with_untracked(|c| c.accepts(&ticket)) {
                return;
            }
            match result {
                Ok(loaded) => schedule.set(loaded),
                Err(e) => state.report_error("Data fetch error", &e),
            }
            set_loading.set(false);
        });
    });

    let open_form = move |start: Option<String>| booking.set(Some(start));
    let close_form = move |_: ()| booking.set(None);
    let on_booked = move |_: ()| {
        booking.set(None);
        cursor.update(|c| c.refresh());
    };

    view! {
        <div class="space-y-6 animate-fade-in">
            {move || booking.get().map(|start| view! {
                <AppointmentForm
                    date=cursor.get_untracked().date()
                    start_time=start
                    on_close=close_form
                    on_success=on_booked
                />
            })}

            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-xl font-bold text-gray-900">"Günlük Takvim"</h2>
                    <p class="text-gray-500 text-sm mt-0.5">
                        {move || format_long_date(cursor.with(|c| c.date()))}
                    </p>
                </div>

                <div class="flex items-center gap-2">
                    <button on:click=move |_| cursor.update(|c| { c.previous(); }) class="btn-secondary p-2.5">
                        "←"
                    </button>
                    <input
                        type="date"
                        class="input w-auto"
                        prop:value=move || cursor.with(|c| c.input_value())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            cursor.update(|c| { c.set_from_input(&value); });
                        }
                    />
                    <button on:click=move |_| cursor.update(|c| { c.next(); }) class="btn-secondary p-2.5">
                        "→"
                    </button>
                    <button on:click=move |_| cursor.update(|c| c.go_today()) class="btn-secondary">
                        "Bugün"
                    </button>
                    <button on:click=move |_| open_form(None) class="btn-primary flex items-center gap-2">
                        <span>"+"</span>
                        <span>"Randevu Ekle"</span>
                    </button>
                </div>
            </div>

            {move || {
                let (total, available, booked) = schedule.with(|s| s.counters());
                view! {
                    <div class="grid grid-cols-3 gap-4">
                        <CounterCard icon="📅" label="Toplam Slot" value=total tone="text-gray-900" />
                        <CounterCard icon="✓" label="Müsait" value=available tone="text-green-600" />
                        <CounterCard icon="🦷" label="Dolu" value=booked tone="text-amber-600" />
                    </div>
                }
            }}

            <div class="card p-6">
                <h3 class="text-base font-semibold text-gray-900 mb-4">
                    "Zaman Slotları"
                    <span class="text-sm font-normal text-gray-500 ml-2">
                        {move || schedule.with(|s| {
                            let hours = &s.availability.working_hours;
                            format!("({} - {})", hours.start, hours.end)
                        })}
                    </span>
                </h3>

                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center justify-center py-12">
                                <div class="spinner" />
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-4 gap-3">
                                {schedule.with(|s| s.slot_tiles()).into_iter().map(|tile| view! {
                                    <SlotTileView tile=tile on_pick=open_form />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }}
            </div>

            <div class="card p-6">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-base font-semibold text-gray-900">
                        "Randevu Listesi"
                        <span class="text-sm font-normal text-gray-500 ml-2">
                            {move || format!("({} randevu)", schedule.with(|s| s.appointments.len()))}
                        </span>
                    </h3>
                    <button on:click=move |_| open_form(None) class="btn-outline text-sm">
                        "+ Yeni Randevu"
                    </button>
                </div>

                {move || schedule.with(|s| {
                    if s.appointments.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p class="empty-state-icon">"📭"</p>
                                <p class="text-gray-500">"Bu tarihte randevu bulunmuyor"</p>
                                <button on:click=move |_| open_form(None) class="mt-4 btn-primary">
                                    "İlk Randevuyu Ekle"
                                </button>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="space-y-2">
                                {s.appointments.iter().cloned().map(|apt| view! {
                                    <AppointmentRow apt=apt />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                })}
            </div>
        </div>
    }
}

#[component]
fn CounterCard(icon: &'static str, label: &'static str, value: u32, tone: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="flex items-center gap-4">
                <div class="w-11 h-11 bg-blue-50 rounded-xl flex items-center justify-center text-xl">
                    {icon}
                </div>
                <div>
                    <p class=format!("text-2xl font-bold {}", tone)>{value}</p>
                    <p class="text-sm text-gray-500">{label}</p>
                </div>
            </div>
        </div>
    }
}

/// Available tiles open the booking form at their start time
#[component]
fn SlotTileView<F>(tile: SlotTile, on_pick: F) -> impl IntoView
where
    F: Fn(Option<String>) + Copy + 'static,
{
    let class = tile.css_class();
    let SlotTile { start_time, end_time, state } = tile;

    match state {
        SlotState::Available => {
            let start = start_time.clone();
            view! {
                <div class=class on:click=move |_| on_pick(Some(start.clone()))>
                    <div class="flex items-center justify-between">
                        <span class="font-semibold text-green-700">{start_time}</span>
                        <span class="text-xs text-gray-500">{format!("- {}", end_time)}</span>
                    </div>
                    <p class="text-xs text-green-600 mt-1">"✓ Müsait"</p>
                </div>
            }
        }
        SlotState::Booked { occupant } => view! {
            <div class=class>
                <div class="flex items-center justify-between">
                    <span class="font-semibold text-red-700">{start_time}</span>
                    <span class="text-xs text-gray-500">{format!("- {}", end_time)}</span>
                </div>
                <p class="text-xs text-gray-600 mt-1 truncate">{occupant}</p>
            </div>
        },
    }
}

#[component]
fn AppointmentRow(apt: Appointment) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 rounded-xl bg-gray-50 hover:bg-gray-100 transition-colors">
            <div class="flex items-center gap-4">
                <div class="w-10 h-10 bg-blue-100 text-blue-600 rounded-full flex items-center justify-center text-lg">
                    "🦷"
                </div>
                <div>
                    <p class="font-medium text-gray-900">{apt.patient_name.clone()}</p>
                    <p class="text-sm text-gray-500">{format!("Dr. {}", apt.dentist_name)}</p>
                </div>
            </div>
            <div class="text-right">
                <p class="font-mono text-blue-600 font-medium">{format_clock(&apt.start_time)}</p>
                <StatusBadge status=apt.status.clone() />
            </div>
        </div>
    }
}
