//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod dashboard;
pub mod transactions;
pub mod market;
pub mod address_book;
pub mod notifications;
pub mod share_address;

pub use home::Home;
pub use dashboard::Dashboard;
pub use transactions::Transactions;
pub use market::Market;
pub use address_book::AddressBook;
pub use notifications::Notifications;
pub use share_address::ShareAddress;
