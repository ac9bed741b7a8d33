//! App Root Component
//!
//! Main application component with routing and global providers.

use chrono::{Datelike, Utc};
use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{
    AddressBook, Dashboard, Home, Market, Notifications, ShareAddress, Transactions,
};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/transactions" view=Transactions />
                        <Route path="/market" view=Market />
                        <Route path="/address-book" view=AddressBook />
                        <Route path="/notifications" view=Notifications />
                        <Route path="/share-address" view=ShareAddress />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto text-center text-sm text-gray-400">
                {format!("BePay © {year} - Secure Crypto Management.")}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
