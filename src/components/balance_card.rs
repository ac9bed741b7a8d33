//! Balance Card Component
//!
//! One held asset with its amount and fiat valuation.

use leptos::*;

use crate::components::badge::SymbolBadge;
use crate::format;
use crate::types::CryptoBalance;

#[component]
pub fn BalanceCard(balance: CryptoBalance) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-primary-500 transition-colors">
            <div class="flex items-center justify-between mb-4">
                <div>
                    <h3 class="text-lg font-semibold text-white">{balance.name.clone()}</h3>
                    <p class="text-sm text-gray-400">{balance.symbol.clone()}</p>
                </div>
                <SymbolBadge symbol=balance.symbol.clone() />
            </div>
            <p class="text-2xl font-bold text-white">
                {format!("{} {}", format::amount(balance.balance), balance.symbol)}
            </p>
            <p class="text-sm text-gray-400 mt-1">
                {format!("~ {} USD", format::usd(balance.usd_value))}
            </p>
        </div>
    }
}
