//! Toast Notification Component
//!
//! Renders whatever message currently sits in the global feedback
//! channel; the channel itself decides when it clears.

use leptos::*;

use crate::state::global::{GlobalState, ToastMessage, ToastSeverity};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50">
            {move || {
                state.toast.get().map(|toast| view! {
                    <ToastCard toast=toast />
                })
            }}
        </div>
    }
}

#[component]
fn ToastCard(toast: ToastMessage) -> impl IntoView {
    let (icon, bg_class, detail_class) = match toast.severity {
        ToastSeverity::Default => ("✓", "bg-green-600", "text-green-100"),
        ToastSeverity::Destructive => ("✕", "bg-red-600", "text-red-100"),
    };

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <div>
                <p class="text-sm font-semibold">{toast.title}</p>
                {toast.description.map(|detail| view! {
                    <p class=format!("text-sm {detail_class}")>{detail}</p>
                })}
            </div>
        </div>
    }
}
