//! Market Page
//!
//! Tracked-asset list with a selectable detail panel and price chart.

use leptos::*;

use crate::components::{PageHeader, PriceChart, SymbolBadge};
use crate::format;
use crate::sample;
use crate::state::global::{GlobalState, ToastMessage};
use crate::types::CryptoMarketInfo;

#[component]
pub fn Market() -> impl IntoView {
    let assets = sample::market_overview();
    let (selected, set_selected) = create_signal(assets.first().cloned());

    let rows = assets
        .into_iter()
        .map(|asset| {
            let row_id = asset.id.clone();
            let asset_for_click = asset.clone();
            let is_selected =
                move || selected.with(|s| s.as_ref().map(|a| a.id == row_id).unwrap_or(false));
            let change_class = if asset.is_up() {
                "text-green-400 text-sm font-medium"
            } else {
                "text-red-400 text-sm font-medium"
            };
            let arrow = if asset.is_up() { "↑" } else { "↓" };

            view! {
                <button
                    on:click=move |_| set_selected.set(Some(asset_for_click.clone()))
                    class=move || format!(
                        "flex items-center justify-between w-full px-4 py-3 text-left transition-colors {}",
                        if is_selected() { "bg-gray-700" } else { "hover:bg-gray-700/50" }
                    )
                >
                    <div class="flex items-center gap-3">
                        <SymbolBadge symbol=asset.symbol.clone() size="w-8 h-8 text-[10px]" />
                        <div>
                            <p class="font-semibold text-white">
                                {format!("{} ({})", asset.name, asset.symbol)}
                            </p>
                            <p class="text-xs text-gray-400">
                                {format!("${}", format::amount(asset.price))}
                            </p>
                        </div>
                    </div>
                    <span class=change_class>
                        {format!("{} {}%", arrow, asset.change_24h.abs())}
                    </span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div>
            <PageHeader
                title="Market Trends"
                description="Stay updated with the latest cryptocurrency market movements."
                icon="📈"
            />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                // Asset list
                <div class="bg-gray-800 rounded-xl border border-gray-700 lg:col-span-1 overflow-hidden self-start">
                    <div class="p-6 pb-4">
                        <h2 class="text-xl font-semibold text-white">"Cryptocurrencies"</h2>
                        <p class="text-sm text-gray-400 mt-1">"Select a crypto to view details."</p>
                    </div>
                    <div class="max-h-[600px] overflow-y-auto border-t border-gray-700">
                        {rows}
                    </div>
                </div>

                // Detail panel for the selected asset
                {move || selected.get().map(|asset| view! { <MarketDetail asset=asset /> })}
            </div>
        </div>
    }
}

#[component]
fn MarketDetail(asset: CryptoMarketInfo) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (change_class, arrow) = if asset.is_up() {
        ("text-green-400", "↑")
    } else {
        ("text-red-400", "↓")
    };
    let on_trade = move |_| {
        state.notify(
            ToastMessage::new("Trade").description("Trading is not available in this demo."),
        );
    };

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 lg:col-span-2 p-6">
            <div class="flex items-start justify-between mb-6">
                <div>
                    <h2 class="text-2xl font-semibold text-white flex items-center gap-3">
                        <SymbolBadge symbol=asset.symbol.clone() />
                        {format!("{} ({})", asset.name, asset.symbol)}
                    </h2>
                    <p class="text-sm text-gray-400 mt-1">"Price trend over the last 30 days."</p>
                </div>
                <button
                    on:click=on_trade
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium
                           text-white transition-colors"
                >
                    "Trade"
                </button>
            </div>

            <div class="mb-6">
                <p class="text-4xl font-bold text-primary-400">
                    {format!("${}", format::amount(asset.price))}
                </p>
                <p class=format!("font-medium flex items-center gap-1 mt-1 {change_class}")>
                    {format!("{arrow} {:.2}% (24h)", asset.change_24h)}
                </p>
            </div>

            <PriceChart points=asset.history.clone() />

            <div class="grid grid-cols-2 gap-4 text-sm mt-6 pt-6 border-t border-gray-700">
                <div>
                    <p class="text-gray-400">"Market Cap"</p>
                    <p class="font-semibold text-white">{format::usd_whole(asset.market_cap)}</p>
                </div>
                <div>
                    <p class="text-gray-400">"24h Volume"</p>
                    <p class="font-semibold text-white">{format::usd_whole(asset.volume_24h)}</p>
                </div>
            </div>
        </div>
    }
}
