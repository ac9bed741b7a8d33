//! UI Components
//!
//! Reusable Leptos components for the wallet pages.

pub mod nav;
pub mod page_header;
pub mod toast;
pub mod chart;
pub mod badge;
pub mod balance_card;

pub use nav::Nav;
pub use page_header::PageHeader;
pub use toast::Toast;
pub use chart::PriceChart;
pub use badge::SymbolBadge;
pub use balance_card::BalanceCard;
