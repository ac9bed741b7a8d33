//! Dashboard Page
//!
//! Portfolio total, per-asset balance cards, and quick actions.

use leptos::*;
use leptos_router::*;

use crate::components::{BalanceCard, PageHeader};
use crate::format;
use crate::sample;
use crate::types::total_usd;

#[component]
pub fn Dashboard() -> impl IntoView {
    let balances = sample::balances();
    let total = total_usd(&balances);
    let asset_count = balances.len();

    view! {
        <div>
            <PageHeader
                title="Dashboard"
                description="Overview of your crypto assets."
                icon="📊"
            />

            // Portfolio total
            <div class="bg-gradient-to-r from-primary-600/20 to-gray-800 rounded-xl p-6 border border-gray-700 mb-8">
                <h2 class="text-xl font-semibold text-white flex items-center gap-2">
                    <span>"👛"</span>
                    "Total Portfolio Value"
                </h2>
                <p class="text-4xl font-bold text-primary-400 mt-3">{format::usd(total)}</p>
                <p class="text-sm text-gray-400 mt-1">{format!("Across {asset_count} assets")}</p>
            </div>

            <h2 class="text-xl font-semibold text-white mb-4">"Your Balances"</h2>
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                {balances
                    .into_iter()
                    .map(|balance| view! { <BalanceCard balance=balance /> })
                    .collect_view()}
            </div>

            // Quick actions
            <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 mt-8">
                <h2 class="text-xl font-semibold text-white">"Quick Actions"</h2>
                <p class="text-gray-400 text-sm mt-1 mb-4">"Perform common actions quickly."</p>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <QuickAction href="/address-book" label="Send" />
                    <QuickAction href="/share-address" label="Receive" />
                    <QuickAction href="/market" label="Swap" />
                    <QuickAction href="/market" label="Buy/Sell" />
                </div>
            </div>
        </div>
    }
}

/// Button-styled link into the page where the action lives
#[component]
fn QuickAction(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="block text-center px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg
                   font-medium text-white transition-colors"
        >
            {label}
        </A>
    }
}
