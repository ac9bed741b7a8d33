//! Transactions Page
//!
//! Table of past wallet activity.

use leptos::*;

use crate::components::PageHeader;
use crate::format;
use crate::sample;
use crate::state::global::{GlobalState, ToastMessage};
use crate::types::{Transaction, TransactionKind, TransactionStatus};

#[component]
pub fn Transactions() -> impl IntoView {
    let transactions = sample::transactions();

    view! {
        <div>
            <PageHeader
                title="Transaction History"
                description="View your past transactions."
                icon="📋"
            />

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="border-b border-gray-700 text-left text-gray-400">
                                <th class="px-4 py-3 font-medium">"Type"</th>
                                <th class="px-4 py-3 font-medium">"Asset"</th>
                                <th class="px-4 py-3 font-medium">"Amount"</th>
                                <th class="px-4 py-3 font-medium">"Value (USD)"</th>
                                <th class="px-4 py-3 font-medium">"Date"</th>
                                <th class="px-4 py-3 font-medium">"Status"</th>
                                <th class="px-4 py-3 font-medium text-right">"Details"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {transactions
                                .into_iter()
                                .map(|tx| view! { <TransactionRow tx=tx /> })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
                <p class="text-center text-gray-500 text-sm py-3 border-t border-gray-700">
                    "A list of your recent transactions."
                </p>
            </div>
        </div>
    }
}

#[component]
fn TransactionRow(tx: Transaction) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (status_icon, status_class) = status_badge(tx.status);
    let detail = tx
        .description
        .clone()
        .or_else(|| tx.address.clone())
        .unwrap_or_else(|| "No additional details for this transaction.".to_string());
    let detail_title = format!("{} {}", capitalize(&tx.kind.to_string()), tx.crypto_symbol);

    let on_view = move |_| {
        state.notify(ToastMessage::new(detail_title.clone()).description(detail.clone()));
    };

    view! {
        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30 transition-colors">
            <td class="px-4 py-3">
                <div class="flex items-center gap-2">
                    <span class=kind_color(tx.kind)>{kind_icon(tx.kind)}</span>
                    <span class="capitalize font-medium text-white hidden md:inline">
                        {tx.kind.to_string()}
                    </span>
                </div>
            </td>
            <td class="px-4 py-3 font-medium text-white">{tx.crypto_symbol.clone()}</td>
            <td class=format!("px-4 py-3 {}", amount_color(tx.kind))>
                {format!("{}{}", tx.amount_prefix(), format::amount(tx.amount))}
            </td>
            <td class="px-4 py-3 text-gray-400">{format::usd(tx.usd_value)}</td>
            <td class="px-4 py-3 text-gray-400">{format::date_time(tx.date)}</td>
            <td class="px-4 py-3">
                <span class=format!(
                    "inline-flex items-center gap-1.5 px-2 py-0.5 rounded-full text-xs capitalize {}",
                    status_class
                )>
                    <span>{status_icon}</span>
                    {tx.status.to_string()}
                </span>
            </td>
            <td class="px-4 py-3 text-right">
                <button
                    on:click=on_view
                    class="px-3 py-1 text-gray-300 hover:text-white hover:bg-gray-600 rounded-lg transition-colors"
                >
                    "View"
                </button>
            </td>
        </tr>
    }
}

fn kind_icon(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Receive => "↙",
        TransactionKind::Send => "↗",
        TransactionKind::Swap => "⇄",
        TransactionKind::Stake => "🔒",
    }
}

fn kind_color(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Receive => "text-green-400",
        TransactionKind::Send => "text-red-400",
        TransactionKind::Swap => "text-blue-400",
        TransactionKind::Stake => "text-purple-400",
    }
}

fn amount_color(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Receive => "text-green-400",
        TransactionKind::Send => "text-red-400",
        TransactionKind::Swap | TransactionKind::Stake => "text-gray-300",
    }
}

fn status_badge(status: TransactionStatus) -> (&'static str, &'static str) {
    match status {
        TransactionStatus::Completed => ("✓", "bg-green-900/60 text-green-300 border border-green-700"),
        TransactionStatus::Pending => ("⏳", "bg-yellow-900/60 text-yellow-300 border border-yellow-700 animate-pulse"),
        TransactionStatus::Failed => ("✕", "bg-red-900/60 text-red-300 border border-red-700"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
