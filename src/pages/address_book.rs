//! Address Book Page
//!
//! Saved recipients with add, edit, delete, and copy-to-clipboard.

use leptos::*;

use crate::components::{PageHeader, SymbolBadge};
use crate::platform::{self, PlatformBridge, COPY_INDICATOR_MS};
use crate::sample;
use crate::state::global::{GlobalState, ToastMessage};
use crate::state::store::{EntityStore, IdSource, UuidSource};
use crate::types::{AddressDraft, AddressEntry, CryptoBalance};

#[component]
pub fn AddressBook() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let store = EntityStore::seeded(sample::address_book());
    let ids = UuidSource;
    let bridge = PlatformBridge::detect();

    let (show_add, set_show_add) = create_signal(false);
    let (editing, set_editing) = create_signal(None::<AddressEntry>);
    let (copied, set_copied) = create_signal(None::<String>);

    let save_new = move |draft: AddressDraft| match draft.validate() {
        Ok(fields) => {
            let name = fields.name.clone();
            store.add(fields.into_entry(&ids));
            set_show_add.set(false);
            state.notify(
                ToastMessage::new("Address Added")
                    .description(format!("{name} has been added to your address book.")),
            );
        }
        Err(err) => state.notify(
            ToastMessage::new("Missing Information")
                .description(err.to_string())
                .destructive(),
        ),
    };

    let save_edit = move |id: String, draft: AddressDraft| match draft.validate() {
        Ok(fields) => {
            let name = fields.name.clone();
            store.patch(&id, |entry| fields.apply_to(entry));
            set_editing.set(None);
            state.notify(
                ToastMessage::new("Address Updated")
                    .description(format!("{name} has been updated.")),
            );
        }
        Err(err) => state.notify(
            ToastMessage::new("Missing Information")
                .description(err.to_string())
                .destructive(),
        ),
    };

    let delete_entry = move |id: String| {
        store.remove(&id);
        state.notify(
            ToastMessage::new("Address Deleted")
                .description("The address has been removed.")
                .destructive(),
        );
    };

    let copy_address = move |address: String| {
        if !bridge.clipboard.is_available() {
            state.notify(
                ToastMessage::new("Copy Failed")
                    .description("Clipboard is not available in this browser.")
                    .destructive(),
            );
            return;
        }
        spawn_local(async move {
            match platform::copy_text(&address).await {
                Ok(()) => {
                    set_copied.set(Some(address));
                    gloo_timers::callback::Timeout::new(COPY_INDICATOR_MS, move || {
                        set_copied.set(None);
                    })
                    .forget();
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

    view! {
        <div>
            <PageHeader
                title="Address Book"
                description="Manage your frequently used cryptocurrency addresses."
                icon="📇"
            >
                <button
                    on:click=move |_| set_show_add.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium
                           text-white transition-colors"
                >
                    "+ Add New Address"
                </button>
            </PageHeader>

            // Add address dialog
            {move || {
                if show_add.get() {
                    view! {
                        <AddressDialog
                            title="Add New Address"
                            description="Enter the details for the new address."
                            submit_label="Save Address"
                            assets=sample::balances()
                            on_close=move || set_show_add.set(false)
                            on_save=save_new
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Edit address dialog
            {move || {
                editing.get().map(|entry| {
                    let entry_id = entry.id.clone();
                    view! {
                        <AddressDialog
                            title="Edit Address"
                            description="Update the details for this address."
                            submit_label="Update Address"
                            assets=sample::balances()
                            initial=entry
                            on_close=move || set_editing.set(None)
                            on_save=move |draft| save_edit(entry_id.clone(), draft)
                        />
                    }
                })
            }}

            // Saved entries
            {move || {
                let entries = store.get();
                if entries.is_empty() {
                    view! {
                        <div class="bg-gray-800 rounded-xl border border-gray-700 text-center py-12 px-6">
                            <span class="text-5xl block mb-4">"📇"</span>
                            <h2 class="text-xl font-semibold text-white">"Your Address Book is Empty"</h2>
                            <p class="text-gray-400 mt-1 mb-6">"Add addresses to easily send crypto."</p>
                            <button
                                on:click=move |_| set_show_add.set(true)
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                       font-medium text-white transition-colors"
                            >
                                "+ Add First Address"
                            </button>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                            {entries
                                .into_iter()
                                .map(|entry| {
                                    let address_for_copy = entry.address.clone();
                                    let address_for_label = entry.address.clone();
                                    let entry_for_edit = entry.clone();
                                    let id_for_delete = entry.id.clone();
                                    view! {
                                        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600 transition-colors">
                                            <div class="flex justify-between items-start mb-4">
                                                <div>
                                                    <h3 class="text-lg font-semibold text-white">{entry.name.clone()}</h3>
                                                    <p class="text-sm text-gray-400">{format!("{} Address", entry.crypto_symbol)}</p>
                                                </div>
                                                <SymbolBadge symbol=entry.crypto_symbol.clone() size="w-8 h-8 text-[10px]" />
                                            </div>

                                            <p class="text-sm text-gray-300 break-all font-mono bg-gray-900/60 p-2 rounded-md">
                                                {entry.address.clone()}
                                            </p>
                                            {entry.memo.clone().map(|memo| view! {
                                                <p class="text-xs text-gray-400 mt-2 pt-2 border-t border-gray-700">
                                                    {format!("Memo: {memo}")}
                                                </p>
                                            })}

                                            <div class="mt-4 flex gap-2">
                                                <button
                                                    on:click=move |_| copy_address(address_for_copy.clone())
                                                    class="px-3 py-1.5 text-sm bg-gray-700 hover:bg-gray-600 rounded-lg
                                                           text-white transition-colors"
                                                >
                                                    {move || {
                                                        if copied.get().as_deref() == Some(address_for_label.as_str()) {
                                                            "✓ Copied"
                                                        } else {
                                                            "Copy"
                                                        }
                                                    }}
                                                </button>
                                                <button
                                                    on:click=move |_| set_editing.set(Some(entry_for_edit.clone()))
                                                    class="px-3 py-1.5 text-sm bg-gray-700 hover:bg-gray-600 rounded-lg
                                                           text-white transition-colors"
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    on:click=move |_| delete_entry(id_for_delete.clone())
                                                    class="px-3 py-1.5 text-sm bg-red-600/10 text-red-400 hover:bg-red-600/20
                                                           rounded-lg transition-colors"
                                                >
                                                    "Delete"
                                                </button>
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

/// Shared add/edit dialog; submits raw text and leaves validation to the
/// caller so the dialog stays open on a rejected draft
#[component]
fn AddressDialog(
    title: &'static str,
    description: &'static str,
    submit_label: &'static str,
    assets: Vec<CryptoBalance>,
    #[prop(optional)] initial: Option<AddressEntry>,
    on_close: impl Fn() + 'static + Clone,
    on_save: impl Fn(AddressDraft) + 'static,
) -> impl IntoView {
    let initial_symbol = initial
        .as_ref()
        .map(|e| e.crypto_symbol.clone())
        .or_else(|| assets.first().map(|a| a.symbol.clone()))
        .unwrap_or_default();

    let (name, set_name) = create_signal(initial.as_ref().map(|e| e.name.clone()).unwrap_or_default());
    let (address, set_address) =
        create_signal(initial.as_ref().map(|e| e.address.clone()).unwrap_or_default());
    let (symbol, set_symbol) = create_signal(initial_symbol);
    let (memo, set_memo) =
        create_signal(initial.as_ref().and_then(|e| e.memo.clone()).unwrap_or_default());

    // Clone on_close for each place it's used
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save(AddressDraft {
            name: name.get(),
            address: address.get(),
            crypto_symbol: symbol.get(),
            memo: memo.get(),
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-2">
                    <h2 class="text-xl font-semibold text-white">{title}</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>
                <p class="text-sm text-gray-400 mb-6">{description}</p>

                <form on:submit=on_submit class="space-y-4">
                    // Name
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                        <input
                            type="text"
                            placeholder="e.g., Alice"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Address
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Address"</label>
                        <input
                            type="text"
                            placeholder="Paste the on-chain address"
                            prop:value=move || address.get()
                            on:input=move |ev| set_address.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white font-mono
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Asset
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Asset"</label>
                        <select
                            on:change=move |ev| set_symbol.set(event_target_value(&ev))
                            prop:value=move || symbol.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            {assets
                                .into_iter()
                                .map(|asset| view! {
                                    <option value=asset.symbol.clone()>
                                        {format!("{} ({})", asset.name, asset.symbol)}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    // Memo
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Memo (Optional)"</label>
                        <input
                            type="text"
                            placeholder="e.g., Savings wallet"
                            prop:value=move || memo.get()
                            on:input=move |ev| set_memo.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Buttons
                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                                   font-medium text-white transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                                   font-medium text-white transition-colors"
                        >
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
