//! Share Address Page
//!
//! Produces a receive address for a chosen asset and hands it to the
//! native share sheet, falling back to the clipboard.

use chrono::Utc;
use leptos::*;

use crate::components::PageHeader;
use crate::platform::{self, PlatformBridge, SharePayload, ShareRoute, COPY_INDICATOR_MS};
use crate::sample;
use crate::state::global::{GlobalState, ToastMessage};

#[component]
pub fn ShareAddress() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let bridge = PlatformBridge::detect();
    let balances = sample::balances();
    let book = sample::address_book();

    let (selected, set_selected) = create_signal(balances.first().cloned());
    let (copied, set_copied) = create_signal(false);

    // The address is derived from the selection: a saved entry for the
    // asset wins, otherwise a placeholder is generated
    let address = create_memo(move |_| {
        selected
            .get()
            .map(|c| sample::receive_address(&book, &c.symbol, Utc::now().timestamp_millis()))
    });

    let flash_copied = move || {
        set_copied.set(true);
        gloo_timers::callback::Timeout::new(COPY_INDICATOR_MS, move || {
            set_copied.set(false);
        })
        .forget();
    };

    let copy_current = move || {
        let Some(addr) = address.get() else { return };
        if !bridge.clipboard.is_available() {
            state.notify(
                ToastMessage::new("Copy Failed")
                    .description("Clipboard is not available in this browser.")
                    .destructive(),
            );
            return;
        }
        spawn_local(async move {
            match platform::copy_text(&addr).await {
                Ok(()) => {
                    flash_copied();
                    state.notify(
                        ToastMessage::new("Copied!").description("Address copied to clipboard."),
                    );
                }
                Err(err) => {
                    web_sys::console::warn_1(&err.to_string().into());
                    state.notify(
                        ToastMessage::new("Copy Failed")
                            .description("Could not copy the address.")
                            .destructive(),
                    );
                }
            }
        });
    };

    let share_current = move || {
        let Some(asset) = selected.get() else { return };
        let Some(addr) = address.get() else { return };
        match bridge.share_route() {
            ShareRoute::Native => {
                let payload = SharePayload::for_address(&asset.name, &asset.symbol, &addr);
                spawn_local(async move {
                    match platform::share(&payload).await {
                        Ok(()) => state.notify(
                            ToastMessage::new("Shared!")
                                .description("Address shared successfully."),
                        ),
                        Err(err) => {
                            web_sys::console::warn_1(&err.to_string().into());
                            state.notify(
                                ToastMessage::new("Share Failed")
                                    .description("Could not share the address.")
                                    .destructive(),
                            );
                        }
                    }
                });
            }
            ShareRoute::CopyFallback => {
                spawn_local(async move {
                    match platform::copy_text(&addr).await {
                        Ok(()) => {
                            flash_copied();
                            state.notify(
                                ToastMessage::new("Copied!")
                                    .description("Sharing not supported, address copied instead."),
                            );
                        }
                        Err(err) => {
                            web_sys::console::warn_1(&err.to_string().into());
                            state.notify(
                                ToastMessage::new("Copy Failed")
                                    .description("Could not copy the address.")
                                    .destructive(),
                            );
                        }
                    }
                });
            }
            ShareRoute::Unsupported => state.notify(
                ToastMessage::new("Share Failed")
                    .description("Sharing is not available in this browser.")
                    .destructive(),
            ),
        }
    };

    let balances_for_select = balances.clone();
    let on_select = move |ev: web_sys::Event| {
        let symbol = event_target_value(&ev);
        set_selected.set(balances_for_select.iter().find(|b| b.symbol == symbol).cloned());
    };

    view! {
        <div>
            <PageHeader
                title="Share Address"
                description="Easily share your cryptocurrency address."
                icon="🔗"
            />

            <div class="max-w-md mx-auto bg-gray-800 rounded-xl border border-gray-700 p-6">
                <h2 class="text-xl font-semibold text-white">"Receive Crypto"</h2>
                <p class="text-sm text-gray-400 mt-1 mb-6">
                    "Select an asset to generate your address and QR code."
                </p>

                <div class="space-y-6">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Select Asset"</label>
                        <select
                            on:change=on_select
                            prop:value=move || {
                                selected.get().map(|c| c.symbol).unwrap_or_default()
                            }
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            {balances
                                .into_iter()
                                .map(|asset| view! {
                                    <option value=asset.symbol.clone()>
                                        {format!("{} ({})", asset.name, asset.symbol)}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    {move || match (selected.get(), address.get()) {
                        (Some(asset), Some(addr)) => view! {
                            <div class="space-y-4 pt-4 border-t border-gray-700">
                                <div class="text-center">
                                    <p class="text-sm text-gray-400 mb-2">
                                        {format!(
                                            "Scan QR code for {} ({}) address:",
                                            asset.name, asset.symbol
                                        )}
                                    </p>
                                    <div class="w-48 h-48 mx-auto bg-gray-900/60 border-2 border-dashed
                                                border-gray-600 rounded-lg flex flex-col items-center
                                                justify-center gap-2">
                                        <span class="text-5xl">"🔳"</span>
                                        <span class="text-xs text-gray-500">
                                            {format!("{} QR", asset.symbol)}
                                        </span>
                                    </div>
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">
                                        {format!("Your {} Address", asset.name)}
                                    </label>
                                    <div class="flex items-center gap-2">
                                        <input
                                            type="text"
                                            readonly=true
                                            prop:value=addr.clone()
                                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3 text-xs
                                                   text-white font-mono border border-gray-600
                                                   focus:outline-none"
                                        />
                                        <button
                                            on:click=move |_| copy_current()
                                            class="px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                                                   text-white transition-colors"
                                        >
                                            {move || {
                                                if copied.get() {
                                                    view! { <span class="text-green-400">"✓"</span> }
                                                } else {
                                                    view! { <span>"📋"</span> }
                                                }
                                            }}
                                        </button>
                                    </div>
                                </div>

                                <button
                                    on:click=move |_| share_current()
                                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700
                                           rounded-lg font-medium text-white transition-colors"
                                >
                                    "Share Address"
                                </button>
                            </div>
                        }.into_view(),
                        _ => view! {
                            <p class="text-center text-gray-400 py-8">
                                "Please select an asset to view address."
                            </p>
                        }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}
