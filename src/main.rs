//! EDmin Dashboard
//!
//! Administrative dashboard for the EDmin school management SaaS, built
//! with Leptos (WASM).
//!
//! # Features
//!
//! - Tenant, student, class, announcement and invoice management
//! - Backend health indicator
//! - Batch refresh of all collections after every create
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the EDmin REST API via HTTP.

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
