//! State Management
//!
//! Global application state plus the entity stores pages build on.

pub mod global;
pub mod store;

pub use global::{provide_global_state, GlobalState, ToastMessage, ToastSeverity};
pub use store::{EntityStore, IdSource, Keyed, UuidSource};
