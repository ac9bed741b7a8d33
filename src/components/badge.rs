//! Asset Badge Component

use leptos::*;

/// Circular badge showing an asset's ticker symbol
#[component]
pub fn SymbolBadge(
    #[prop(into)] symbol: String,
    /// Tailwind sizing classes, so lists can render smaller badges
    #[prop(default = "w-10 h-10 text-xs")]
    size: &'static str,
) -> impl IntoView {
    let accent = asset_accent(&symbol);

    view! {
        <span class=format!(
            "{size} {accent} rounded-full inline-flex items-center justify-center \
             font-bold text-white shrink-0"
        )>
            {symbol}
        </span>
    }
}

/// Background accent for the well-known assets
fn asset_accent(symbol: &str) -> &'static str {
    match symbol {
        "BTC" => "bg-orange-500",
        "ETH" => "bg-indigo-500",
        "SOL" => "bg-teal-500",
        "BEP" => "bg-primary-600",
        _ => "bg-gray-600",
    }
}
