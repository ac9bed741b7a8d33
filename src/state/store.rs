//! Entity stores for page-owned collections
//!
//! Each page owns one ordered collection of records (addresses,
//! notifications). All mutations are pure list transformations that take
//! the previous list and return the next one; `EntityStore` is the thin
//! reactive wrapper that applies them to an `RwSignal` so views re-render.
//!
//! Mutations targeting an id that is not present leave the list unchanged.

use std::cell::Cell;

use leptos::*;
use uuid::Uuid;

/// A record addressable by a stable string id
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Append a record at the end, preserving insertion order
pub fn append<T: Keyed>(mut items: Vec<T>, record: T) -> Vec<T> {
    items.push(record);
    items
}

/// Apply `apply` to the record with the given id, if present
pub fn patch<T: Keyed>(mut items: Vec<T>, id: &str, apply: impl FnOnce(&mut T)) -> Vec<T> {
    if let Some(record) = items.iter_mut().find(|r| r.key() == id) {
        apply(record);
    }
    items
}

/// Apply `apply` to every record
pub fn patch_all<T: Keyed>(mut items: Vec<T>, mut apply: impl FnMut(&mut T)) -> Vec<T> {
    for record in items.iter_mut() {
        apply(record);
    }
    items
}

/// Drop the record with the given id, if present
pub fn remove<T: Keyed>(mut items: Vec<T>, id: &str) -> Vec<T> {
    items.retain(|r| r.key() != id);
    items
}

/// Reactive container around one page's collection
///
/// Copyable like the signal it wraps, so pages can move it into as many
/// event handlers as they need.
pub struct EntityStore<T: 'static> {
    items: RwSignal<Vec<T>>,
}

impl<T> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityStore<T> {}

impl<T: Keyed + Clone> EntityStore<T> {
    /// Create a store holding the given initial records
    pub fn seeded(initial: Vec<T>) -> Self {
        Self {
            items: create_rw_signal(initial),
        }
    }

    /// Clone out the current records (reactive)
    pub fn get(&self) -> Vec<T> {
        self.items.get()
    }

    /// Read the current records without cloning (reactive)
    pub fn with<U>(&self, f: impl FnOnce(&[T]) -> U) -> U {
        self.items.with(|items| f(items))
    }

    /// Append a record at the end
    pub fn add(&self, record: T) {
        self.items.update(|items| {
            let prev = std::mem::take(items);
            *items = append(prev, record);
        });
    }

    /// Update the record with the given id; unknown ids are ignored
    pub fn patch(&self, id: &str, apply: impl FnOnce(&mut T)) {
        self.items.update(|items| {
            let prev = std::mem::take(items);
            *items = patch(prev, id, apply);
        });
    }

    /// Update every record
    pub fn patch_all(&self, apply: impl FnMut(&mut T)) {
        self.items.update(|items| {
            let prev = std::mem::take(items);
            *items = patch_all(prev, apply);
        });
    }

    /// Drop the record with the given id; unknown ids are ignored
    pub fn remove(&self, id: &str) {
        self.items.update(|items| {
            let prev = std::mem::take(items);
            *items = remove(prev, id);
        });
    }

    /// Drop every record
    pub fn clear(&self) {
        self.items.update(|items| items.clear());
    }
}

/// Strategy for minting ids for user-created records
pub trait IdSource {
    fn mint(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn mint(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter ids, for deterministic tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequenceSource {
    next: Cell<u64>,
}

#[cfg(test)]
impl IdSource for SequenceSource {
    fn mint(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("seq-{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        unread_count, AddressDraft, AddressEntry, NotificationKind, NotificationMessage,
    };

    fn sample_book() -> Vec<AddressEntry> {
        vec![
            AddressEntry::new("1", "Alice", "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "BTC"),
            AddressEntry::new("2", "Bob", "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe", "ETH"),
            AddressEntry::new("3", "Exchange", "So11111111111111111111111111111111111111112", "SOL")
                .memo("Primary Exchange Account"),
        ]
    }

    fn sample_alerts() -> Vec<NotificationMessage> {
        vec![
            NotificationMessage::new("n1", NotificationKind::Info, "t1", "m1", 0),
            NotificationMessage::new("n2", NotificationKind::Success, "t2", "m2", 0).read(),
            NotificationMessage::new("n3", NotificationKind::Warning, "t3", "m3", 0),
        ]
    }

    fn carol(ids: &impl IdSource) -> AddressEntry {
        AddressDraft {
            name: "Carol".to_string(),
            address: "0xCCC".to_string(),
            crypto_symbol: "ETH".to_string(),
            memo: String::new(),
        }
        .validate()
        .unwrap()
        .into_entry(ids)
    }

    #[test]
    fn test_append_adds_at_end_with_fresh_id() {
        let ids = SequenceSource::default();
        let book = append(sample_book(), carol(&ids));

        assert_eq!(book.len(), 4);
        assert_eq!(book[3].name, "Carol");
        assert_eq!(book[3].address, "0xCCC");
        assert_eq!(book[3].crypto_symbol, "ETH");
        // existing ids are untouched, the new one is distinct
        assert_eq!(book[0].id, "1");
        assert!(book.iter().filter(|e| e.id == book[3].id).count() == 1);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let ids = SequenceSource::default();
        let book = append(sample_book(), carol(&ids));
        let id = book[3].id.clone();

        let same = patch(book.clone(), &id, |_| {});

        assert_eq!(book, same);
    }

    #[test]
    fn test_patch_updates_only_matching_record() {
        let book = patch(sample_book(), "2", |e| e.name = "Bobby".to_string());

        assert_eq!(book[1].name, "Bobby");
        assert_eq!(book[1].id, "2");
        assert_eq!(book[0].name, "Alice");
        assert_eq!(book[2].name, "Exchange");
    }

    #[test]
    fn test_patch_unknown_id_is_noop() {
        let before = sample_book();
        let after = patch(before.clone(), "missing", |e| e.name = "X".to_string());

        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_drops_only_matching_record() {
        let book = remove(sample_book(), "1");

        assert_eq!(book.len(), 2);
        assert!(book.iter().all(|e| e.id != "1"));
        assert_eq!(book[0].id, "2");
        assert_eq!(book[1].id, "3");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let before = sample_book();
        let after = remove(before.clone(), "missing");

        assert_eq!(before, after);
    }

    #[test]
    fn test_mark_read_and_mark_all_read() {
        let alerts = sample_alerts();
        assert_eq!(unread_count(&alerts), 2);

        let alerts = patch(alerts, "n1", |n| n.read = true);
        assert_eq!(unread_count(&alerts), 1);

        // a second pass over an already-read record changes nothing
        let alerts = patch(alerts, "n1", |n| n.read = true);
        assert_eq!(unread_count(&alerts), 1);

        let alerts = patch_all(alerts, |n| n.read = true);
        assert_eq!(unread_count(&alerts), 0);
        assert_eq!(alerts.len(), 3);

        // marking everything read twice equals marking it once
        let alerts = patch_all(alerts, |n| n.read = true);
        assert_eq!(unread_count(&alerts), 0);
        assert_eq!(alerts.len(), 3);
    }

    #[test]
    fn test_store_applies_ops_through_signal() {
        let runtime = create_runtime();

        let store = EntityStore::seeded(sample_book());
        assert_eq!(store.with(|book| book.len()), 3);

        store.add(AddressEntry::new("4", "Carol", "carol-addr", "BTC"));
        assert_eq!(store.with(|book| book.len()), 4);
        assert_eq!(store.get()[3].name, "Carol");

        store.patch("4", |e| e.memo = Some("new".to_string()));
        assert_eq!(store.get()[3].memo, Some("new".to_string()));

        store.patch_all(|e| e.crypto_symbol = "BTC".to_string());
        assert!(store.with(|book| book.iter().all(|e| e.crypto_symbol == "BTC")));

        store.remove("1");
        assert_eq!(store.with(|book| book.len()), 3);
        assert!(store.with(|book| book.iter().all(|e| e.id != "1")));

        store.clear();
        assert!(store.with(|book| book.is_empty()));

        runtime.dispose();
    }

    #[test]
    fn test_sequence_source_is_monotonic() {
        let ids = SequenceSource::default();
        let minted: Vec<String> = (0..5).map(|_| ids.mint()).collect();

        assert_eq!(minted, vec!["seq-0", "seq-1", "seq-2", "seq-3", "seq-4"]);
    }

    #[test]
    fn test_uuid_source_mints_distinct_ids() {
        let ids = UuidSource;
        let a = ids.mint();
        let b = ids.mint();

        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
