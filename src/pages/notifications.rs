//! Notifications Page
//!
//! Alert inbox with per-message and bulk read/delete actions.

use chrono::Utc;
use leptos::*;

use crate::components::PageHeader;
use crate::format;
use crate::sample;
use crate::state::global::{GlobalState, ToastMessage};
use crate::state::store::EntityStore;
use crate::types::{unread_count, NotificationKind};

#[component]
pub fn Notifications() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let store = EntityStore::seeded(sample::notifications());

    let unread = create_memo(move |_| store.with(unread_count));
    let is_empty = move || store.with(|items| items.is_empty());

    let mark_read = move |id: String| {
        store.patch(&id, |n| n.read = true);
        state.notify(ToastMessage::new("Notification Marked as Read"));
    };

    let mark_all_read = move || {
        store.patch_all(|n| n.read = true);
        state.notify(ToastMessage::new("All Notifications Marked as Read"));
    };

    let delete_one = move |id: String| {
        store.remove(&id);
        state.notify(ToastMessage::new("Notification Deleted").destructive());
    };

    let delete_all = move || {
        store.clear();
        state.notify(ToastMessage::new("All Notifications Deleted").destructive());
    };

    view! {
        <div>
            <PageHeader
                title="Notifications"
                description="Your recent alerts and updates."
                icon="🔔"
            >
                <div class="flex gap-2">
                    {move || {
                        (!is_empty() && unread.get() > 0).then(|| view! {
                            <button
                                on:click=move |_| mark_all_read()
                                class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm
                                       font-medium text-white transition-colors"
                            >
                                "Mark All Read"
                            </button>
                        })
                    }}
                    {move || {
                        (!is_empty()).then(|| view! {
                            <button
                                on:click=move |_| delete_all()
                                class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg text-sm
                                       font-medium text-white transition-colors"
                            >
                                "Delete All"
                            </button>
                        })
                    }}
                </div>
            </PageHeader>

            {move || {
                let items = store.get();
                if items.is_empty() {
                    view! {
                        <div class="bg-gray-800 rounded-xl border border-gray-700 text-center py-12 px-6">
                            <span class="text-5xl block mb-4">"🔔"</span>
                            <h2 class="text-xl font-semibold text-white">"No New Notifications"</h2>
                            <p class="text-gray-400 mt-1">"You're all caught up!"</p>
                        </div>
                    }.into_view()
                } else {
                    let now_ms = Utc::now().timestamp_millis();
                    view! {
                        <div class="space-y-4">
                            {items
                                .into_iter()
                                .map(|alert| {
                                    let (icon, icon_color) = kind_icon(alert.kind);
                                    let card_class = if alert.read {
                                        "bg-gray-800 border-gray-700"
                                    } else {
                                        "bg-primary-500/5 border-primary-500/30"
                                    };
                                    let id_for_read = alert.id.clone();
                                    let id_for_delete = alert.id.clone();
                                    view! {
                                        <div class=format!("rounded-xl border p-4 flex items-start gap-4 {card_class}")>
                                            <span class=format!("text-xl pt-0.5 {icon_color}")>{icon}</span>
                                            <div class="flex-grow">
                                                <div class="flex justify-between items-center mb-1">
                                                    <h3 class="font-semibold text-white">{alert.title.clone()}</h3>
                                                    <p class="text-xs text-gray-400">
                                                        {format::time_ago(alert.timestamp, now_ms)}
                                                    </p>
                                                </div>
                                                <p class="text-sm text-gray-400">{alert.message.clone()}</p>
                                                <div class="mt-3 flex gap-2">
                                                    {(!alert.read).then(|| view! {
                                                        <button
                                                            on:click=move |_| mark_read(id_for_read.clone())
                                                            class="px-3 py-1.5 text-sm bg-gray-700 hover:bg-gray-600
                                                                   rounded-lg text-white transition-colors"
                                                        >
                                                            "Mark as Read"
                                                        </button>
                                                    })}
                                                    <button
                                                        on:click=move |_| delete_one(id_for_delete.clone())
                                                        class="px-3 py-1.5 text-sm text-red-400 hover:bg-red-600/10
                                                               rounded-lg transition-colors"
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

fn kind_icon(kind: NotificationKind) -> (&'static str, &'static str) {
    match kind {
        NotificationKind::Info => ("ℹ", "text-blue-400"),
        NotificationKind::Warning => ("⚠", "text-yellow-400"),
        NotificationKind::Error => ("✕", "text-red-400"),
        NotificationKind::Success => ("✓", "text-green-400"),
    }
}
