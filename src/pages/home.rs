//! Home Page
//!
//! Landing hero with links into the wallet.

use leptos::*;
use leptos_router::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center text-center py-24">
            <div class="w-28 h-28 bg-primary-600 rounded-3xl shadow-2xl flex items-center justify-center mb-10">
                <span class="text-6xl">"💸"</span>
            </div>

            <h1 class="text-5xl md:text-7xl font-bold text-white mb-6">
                "Welcome to " <span class="text-primary-400">"BePay"</span>
            </h1>
            <p class="text-gray-400 text-lg md:text-xl max-w-xl mb-12">
                "Your secure, simple, and stylish crypto wallet. \
                 Manage digital assets with ease and confidence."
            </p>

            <div class="flex flex-col sm:flex-row gap-4">
                <A
                    href="/dashboard"
                    class="px-8 py-4 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold
                           text-white shadow-lg transition-colors"
                >
                    "Go to Dashboard →"
                </A>
                <A
                    href="/market"
                    class="px-8 py-4 bg-gray-800 hover:bg-gray-700 border border-gray-700 rounded-lg
                           font-semibold text-white shadow-lg transition-colors"
                >
                    "View Market Trends"
                </A>
            </div>
        </div>
    }
}
