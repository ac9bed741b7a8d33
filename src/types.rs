//! Core domain types for the BePay wallet dashboard
//!
//! This module defines the records rendered by every page:
//! - `CryptoBalance`: a held asset and its fiat valuation
//! - `Transaction`: one ledger activity row
//! - `NotificationMessage`: an alert shown on the notifications page
//! - `CryptoMarketInfo` / `MarketPoint`: market overview and price history
//! - `AddressEntry` / `AddressDraft`: saved recipients and the form input
//!   that creates or edits them

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::store::{IdSource, Keyed};

/// A held asset and its current fiat valuation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CryptoBalance {
    /// Unique identifier
    pub id: String,
    /// Full asset name (e.g., "Bitcoin")
    pub name: String,
    /// Ticker symbol (e.g., "BTC")
    pub symbol: String,
    /// Amount held, in asset units
    pub balance: f64,
    /// Valuation of the holding in USD
    pub usd_value: f64,
}

impl Keyed for CryptoBalance {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Sum the USD valuations of a set of holdings
pub fn total_usd(balances: &[CryptoBalance]) -> f64 {
    balances.iter().map(|b| b.usd_value).sum()
}

/// Direction or nature of a ledger activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Funds arrived in the wallet
    Receive,
    /// Funds left the wallet
    Send,
    /// One asset exchanged for another
    Swap,
    /// Funds locked up for rewards
    Stake,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Receive => write!(f, "receive"),
            TransactionKind::Send => write!(f, "send"),
            TransactionKind::Swap => write!(f, "swap"),
            TransactionKind::Stake => write!(f, "stake"),
        }
    }
}

/// Settlement state of a transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One row of wallet activity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Unique identifier
    pub id: String,
    /// What happened (send, receive, swap, stake)
    pub kind: TransactionKind,
    /// Ticker symbol of the asset involved
    pub crypto_symbol: String,
    /// Amount moved, in asset units
    pub amount: f64,
    /// Fiat value of the movement at execution time
    pub usd_value: f64,
    /// Unix timestamp in milliseconds
    pub date: i64,
    /// Settlement state
    pub status: TransactionStatus,
    /// Counterparty address, where one applies
    #[serde(default)]
    pub address: Option<String>,
    /// Free-form note
    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    /// Create a transaction with the required fields
    pub fn new(
        id: impl Into<String>,
        kind: TransactionKind,
        crypto_symbol: impl Into<String>,
        amount: f64,
        usd_value: f64,
        date: i64,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            crypto_symbol: crypto_symbol.into(),
            amount,
            usd_value,
            date,
            status,
            address: None,
            description: None,
        }
    }

    /// Builder: set counterparty address
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builder: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sign prefix for the displayed amount: incoming "+", outgoing "-",
    /// neutral moves (swap, stake) nothing
    pub fn amount_prefix(&self) -> &'static str {
        match self.kind {
            TransactionKind::Receive => "+",
            TransactionKind::Send => "-",
            TransactionKind::Swap | TransactionKind::Stake => "",
        }
    }
}

impl Keyed for Transaction {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
    Success,
}

/// An alert shown on the notifications page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationMessage {
    /// Unique identifier
    pub id: String,
    /// Short headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Whether the user has seen it
    pub read: bool,
    /// Severity
    pub kind: NotificationKind,
}

impl NotificationMessage {
    /// Create an unread notification
    pub fn new(
        id: impl Into<String>,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            timestamp,
            read: false,
            kind,
        }
    }

    /// Builder: mark as already read
    pub fn read(mut self) -> Self {
        self.read = true;
        self
    }
}

impl Keyed for NotificationMessage {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Count the notifications the user has not seen yet
pub fn unread_count(items: &[NotificationMessage]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// One sample along an asset's simulated price history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketPoint {
    /// Display label for the day (e.g., "Aug 3")
    pub date: String,
    /// Closing price in USD, rounded to cents
    pub price: f64,
}

/// Market overview for one tracked asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CryptoMarketInfo {
    /// Unique identifier
    pub id: String,
    /// Full asset name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Current price in USD
    pub price: f64,
    /// Percentage move over the last 24 hours
    pub change_24h: f64,
    /// Total market capitalization in USD
    pub market_cap: f64,
    /// Trading volume over the last 24 hours in USD
    pub volume_24h: f64,
    /// Daily price history, oldest first
    pub history: Vec<MarketPoint>,
}

impl CryptoMarketInfo {
    /// Whether the 24h move is flat or positive
    pub fn is_up(&self) -> bool {
        self.change_24h >= 0.0
    }
}

impl Keyed for CryptoMarketInfo {
    fn key(&self) -> &str {
        &self.id
    }
}

/// A saved recipient in the address book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressEntry {
    /// Unique identifier
    pub id: String,
    /// Label chosen by the user
    pub name: String,
    /// The on-chain address
    pub address: String,
    /// Ticker symbol of the asset this address belongs to
    pub crypto_symbol: String,
    /// Optional note
    #[serde(default)]
    pub memo: Option<String>,
}

impl AddressEntry {
    /// Create an entry without a memo
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        crypto_symbol: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            crypto_symbol: crypto_symbol.into(),
            memo: None,
        }
    }

    /// Builder: set memo
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

impl Keyed for AddressEntry {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Raw text captured from the add/edit address form
///
/// Nothing is trimmed or checked yet; `validate` turns a draft into
/// typed fields or reports what is missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressDraft {
    pub name: String,
    pub address: String,
    pub crypto_symbol: String,
    pub memo: String,
}

/// Validation failure for an address form submission
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Validated address fields, ready to become a new entry or to be
/// applied onto an existing one
#[derive(Debug, Clone, PartialEq)]
pub struct AddressFields {
    pub name: String,
    pub address: String,
    pub crypto_symbol: String,
    pub memo: Option<String>,
}

impl AddressDraft {
    /// Trim and check the captured text
    ///
    /// Name, address, and asset are required; a blank memo becomes `None`.
    pub fn validate(&self) -> Result<AddressFields, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingField("name"));
        }
        let address = self.address.trim();
        if address.is_empty() {
            return Err(DraftError::MissingField("address"));
        }
        let crypto_symbol = self.crypto_symbol.trim();
        if crypto_symbol.is_empty() {
            return Err(DraftError::MissingField("asset"));
        }
        let memo = self.memo.trim();
        Ok(AddressFields {
            name: name.to_string(),
            address: address.to_string(),
            crypto_symbol: crypto_symbol.to_string(),
            memo: (!memo.is_empty()).then(|| memo.to_string()),
        })
    }
}

impl AddressFields {
    /// Mint a fresh id and build a new entry
    pub fn into_entry(self, ids: &impl IdSource) -> AddressEntry {
        AddressEntry {
            id: ids.mint(),
            name: self.name,
            address: self.address,
            crypto_symbol: self.crypto_symbol,
            memo: self.memo,
        }
    }

    /// Overwrite an existing entry's fields, keeping its id
    pub fn apply_to(self, entry: &mut AddressEntry) {
        entry.name = self.name;
        entry.address = self.address;
        entry.crypto_symbol = self.crypto_symbol;
        entry.memo = self.memo;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::store::SequenceSource;

    fn draft(name: &str, address: &str, symbol: &str, memo: &str) -> AddressDraft {
        AddressDraft {
            name: name.to_string(),
            address: address.to_string(),
            crypto_symbol: symbol.to_string(),
            memo: memo.to_string(),
        }
    }

    #[test]
    fn test_total_usd() {
        let balances = vec![
            CryptoBalance {
                id: "btc".to_string(),
                name: "Bitcoin".to_string(),
                symbol: "BTC".to_string(),
                balance: 0.5,
                usd_value: 30_000.0,
            },
            CryptoBalance {
                id: "eth".to_string(),
                name: "Ethereum".to_string(),
                symbol: "ETH".to_string(),
                balance: 10.0,
                usd_value: 18_000.0,
            },
        ];

        assert_eq!(total_usd(&balances), 48_000.0);
        assert_eq!(total_usd(&[]), 0.0);
    }

    #[test]
    fn test_amount_prefix() {
        let base = |kind| Transaction::new("t1", kind, "BTC", 1.0, 100.0, 0, TransactionStatus::Completed);

        assert_eq!(base(TransactionKind::Receive).amount_prefix(), "+");
        assert_eq!(base(TransactionKind::Send).amount_prefix(), "-");
        assert_eq!(base(TransactionKind::Swap).amount_prefix(), "");
        assert_eq!(base(TransactionKind::Stake).amount_prefix(), "");
    }

    #[test]
    fn test_transaction_serialization() {
        let tx = Transaction::new(
            "tx-1",
            TransactionKind::Receive,
            "BTC",
            0.1,
            6_000.0,
            1_700_000_000_000,
            TransactionStatus::Completed,
        )
        .description("From external wallet");

        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"kind\":\"receive\""));
        assert!(json.contains("\"status\":\"completed\""));

        let restored: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, restored);
    }

    #[test]
    fn test_unread_count() {
        let items = vec![
            NotificationMessage::new("n1", NotificationKind::Info, "a", "b", 0),
            NotificationMessage::new("n2", NotificationKind::Success, "c", "d", 0).read(),
            NotificationMessage::new("n3", NotificationKind::Warning, "e", "f", 0),
        ];

        assert_eq!(unread_count(&items), 2);
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn test_draft_validation_requires_fields() {
        assert_eq!(
            draft("", "addr", "BTC", "").validate(),
            Err(DraftError::MissingField("name"))
        );
        assert_eq!(
            draft("Carol", "   ", "BTC", "").validate(),
            Err(DraftError::MissingField("address"))
        );
        assert_eq!(
            draft("Carol", "addr", "", "").validate(),
            Err(DraftError::MissingField("asset"))
        );
        assert_eq!(
            DraftError::MissingField("name").to_string(),
            "name is required"
        );
    }

    #[test]
    fn test_draft_validation_trims_and_normalizes_memo() {
        let fields = draft("  Carol  ", " addr123 ", "BTC", "   ").validate().unwrap();
        assert_eq!(fields.name, "Carol");
        assert_eq!(fields.address, "addr123");
        assert_eq!(fields.memo, None);

        let fields = draft("Carol", "addr123", "BTC", " savings ").validate().unwrap();
        assert_eq!(fields.memo, Some("savings".to_string()));
    }

    #[test]
    fn test_fields_into_entry_mints_id() {
        let ids = SequenceSource::default();
        let entry = draft("Carol", "addr123", "BTC", "")
            .validate()
            .unwrap()
            .into_entry(&ids);

        assert_eq!(entry.id, "seq-0");
        assert_eq!(entry.name, "Carol");
        assert_eq!(entry.memo, None);
    }

    #[test]
    fn test_fields_apply_to_keeps_id() {
        let mut entry = AddressEntry::new("1", "Alice", "old-addr", "BTC").memo("old memo");
        draft("Alice B", "new-addr", "ETH", "")
            .validate()
            .unwrap()
            .apply_to(&mut entry);

        assert_eq!(entry.id, "1");
        assert_eq!(entry.name, "Alice B");
        assert_eq!(entry.address, "new-addr");
        assert_eq!(entry.crypto_symbol, "ETH");
        // blank memo on the form clears the stored one
        assert_eq!(entry.memo, None);
    }
}
