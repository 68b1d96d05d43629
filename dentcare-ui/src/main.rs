//! DentCare Console
//!
//! Clinic staff console built with Leptos (WASM).
//!
//! # Features
//!
//! - Daily dashboard with today's appointment timeline
//! - Day calendar with slot availability and booking
//! - Two-step patient intake
//! - Dentist and patient report notices
//!
//! # Architecture
//!
//! Client-side rendered Leptos application compiled to WebAssembly. Models,
//! the API client and the form logic live in the `dentcare` crate; this crate
//! supplies the browser transport, localStorage session backend and views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
