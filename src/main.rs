//! BePay Wallet Dashboard
//!
//! Client-side crypto wallet UI built with Leptos (WASM).
//!
//! # Features
//!
//! - Portfolio overview with per-asset balances
//! - Transaction history
//! - Market trends with simulated price charts
//! - Address book with add/edit/delete
//! - Notification inbox
//! - Address sharing via the Web Share API with clipboard fallback
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is in-memory sample data; there is no backend.

use leptos::*;

mod app;
mod components;
mod format;
mod pages;
mod platform;
mod sample;
mod state;
mod types;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
