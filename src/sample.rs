//! Embedded sample dataset
//!
//! The wallet is fully self-contained: every page seeds its state from
//! these generators on load, and nothing persists across a reload.
//! Timestamps are taken relative to now so the data always looks recent,
//! and market history is a small random walk regenerated per visit.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::types::{
    AddressEntry, CryptoBalance, CryptoMarketInfo, MarketPoint, NotificationKind,
    NotificationMessage, Transaction, TransactionKind, TransactionStatus,
};

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Days of simulated price history per asset
pub const HISTORY_DAYS: usize = 30;

/// The wallet's holdings
pub fn balances() -> Vec<CryptoBalance> {
    vec![
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
        CryptoBalance {
            id: "sol".to_string(),
            name: "Solana".to_string(),
            symbol: "SOL".to_string(),
            balance: 150.0,
            usd_value: 6_000.0,
        },
        CryptoBalance {
            id: "bep".to_string(),
            name: "BePay Token".to_string(),
            symbol: "BEP".to_string(),
            balance: 10_000.0,
            usd_value: 1_000.0,
        },
    ]
}

/// Recent wallet activity, newest first
pub fn transactions() -> Vec<Transaction> {
    let now = Utc::now().timestamp_millis();
    vec![
        Transaction::new(
            "1",
            TransactionKind::Receive,
            "BTC",
            0.1,
            6_000.0,
            now - DAY_MS,
            TransactionStatus::Completed,
        )
        .description("From external wallet"),
        Transaction::new(
            "2",
            TransactionKind::Send,
            "ETH",
            2.0,
            3_600.0,
            now - 2 * DAY_MS,
            TransactionStatus::Completed,
        )
        .address("0x123...abc")
        .description("Payment for service"),
        Transaction::new(
            "3",
            TransactionKind::Swap,
            "SOL",
            50.0,
            2_000.0,
            now - 3 * DAY_MS,
            TransactionStatus::Pending,
        )
        .description("Swapped for BEP"),
        Transaction::new(
            "4",
            TransactionKind::Stake,
            "BEP",
            5_000.0,
            500.0,
            now - 5 * DAY_MS,
            TransactionStatus::Completed,
        )
        .description("Staked for 12 months"),
        Transaction::new(
            "5",
            TransactionKind::Receive,
            "ETH",
            0.5,
            900.0,
            now - 7 * DAY_MS,
            TransactionStatus::Failed,
        )
        .description("Airdrop claim"),
    ]
}

/// Saved recipients the address book starts with
pub fn address_book() -> Vec<AddressEntry> {
    vec![
        AddressEntry::new("1", "Alice (BTC)", "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "BTC"),
        AddressEntry::new("2", "Bob (ETH)", "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe", "ETH"),
        AddressEntry::new(
            "3",
            "Exchange (SOL)",
            "So11111111111111111111111111111111111111112",
            "SOL",
        )
        .memo("Primary Exchange Account"),
    ]
}

/// Alerts the notifications page starts with (two unread)
pub fn notifications() -> Vec<NotificationMessage> {
    let now = Utc::now().timestamp_millis();
    vec![
        NotificationMessage::new(
            "1",
            NotificationKind::Warning,
            "Security Alert",
            "Unusual login attempt detected from a new device.",
            now - HOUR_MS,
        ),
        NotificationMessage::new(
            "2",
            NotificationKind::Success,
            "Transaction Success",
            "Your transfer of 0.1 BTC is complete.",
            now - 3 * HOUR_MS,
        )
        .read(),
        NotificationMessage::new(
            "3",
            NotificationKind::Info,
            "Price Alert: BEP",
            "BEP has increased by 10% in the last 24 hours.",
            now - 5 * HOUR_MS,
        ),
        NotificationMessage::new(
            "4",
            NotificationKind::Success,
            "Staking Reward",
            "You have received 5 BEP as staking reward.",
            now - DAY_MS,
        )
        .read(),
    ]
}

/// Tracked assets with fresh 30-day histories
pub fn market_overview() -> Vec<CryptoMarketInfo> {
    let mut rng = rand::thread_rng();
    vec![
        market_info(&mut rng, "btc", "Bitcoin", "BTC", 60_000.0, 2.5, 1_200_000_000_000.0, 58_000.0),
        market_info(&mut rng, "eth", "Ethereum", "ETH", 1_800.0, -1.2, 216_000_000_000.0, 1_850.0),
        market_info(&mut rng, "sol", "Solana", "SOL", 40.0, 5.1, 16_000_000_000.0, 38.0),
        market_info(&mut rng, "bep", "BePay Token", "BEP", 0.1, 10.0, 1_000_000.0, 0.09),
    ]
}

fn market_info(
    rng: &mut impl Rng,
    id: &str,
    name: &str,
    symbol: &str,
    price: f64,
    change_24h: f64,
    market_cap: f64,
    walk_start: f64,
) -> CryptoMarketInfo {
    CryptoMarketInfo {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        change_24h,
        market_cap,
        // fixed at generation so it does not jitter between renders
        volume_24h: (market_cap / rng.gen_range(30.0..50.0)).round(),
        history: price_walk_with(rng, HISTORY_DAYS, walk_start),
    }
}

/// Simulate a daily closing-price walk ending today, oldest point first
///
/// Each day drifts by (u - 0.48) / 20 where u is uniform in [0, 1), a
/// slight upward bias. Prices are rounded to cents.
pub fn price_walk_with(rng: &mut impl Rng, days: usize, initial: f64) -> Vec<MarketPoint> {
    let today = Utc::now();
    let mut price = initial;
    let mut points = Vec::with_capacity(days);
    for day in (0..days as i64).rev() {
        points.push(MarketPoint {
            date: (today - Duration::days(day)).format("%b %-d").to_string(),
            price: round_cents(price),
        });
        price *= 1.0 + (rng.gen::<f64>() - 0.48) / 20.0;
    }
    points
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The wallet's own receive address for an asset
///
/// Prefers a saved entry for that symbol; otherwise derives a demo
/// placeholder address suffixed from the current time.
pub fn receive_address(book: &[AddressEntry], symbol: &str, now_ms: i64) -> String {
    book.iter()
        .find(|e| e.crypto_symbol == symbol)
        .map(|e| e.address.clone())
        .unwrap_or_else(|| {
            let suffix = now_ms.unsigned_abs() % 1_000_000;
            format!("mock_{}_address_{suffix:06}", symbol.to_lowercase())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{total_usd, unread_count};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_portfolio_total() {
        assert_eq!(total_usd(&balances()), 55_000.0);
    }

    #[test]
    fn test_transactions_newest_first() {
        let txs = transactions();
        assert_eq!(txs.len(), 5);
        assert!(txs.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(txs[0].kind, TransactionKind::Receive);
        assert_eq!(txs[4].status, TransactionStatus::Failed);
    }

    #[test]
    fn test_address_book_seed() {
        let book = address_book();
        assert_eq!(book.len(), 3);
        assert_eq!(book[2].memo.as_deref(), Some("Primary Exchange Account"));

        let mut ids: Vec<&str> = book.iter().map(|e| e.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_notifications_start_with_two_unread() {
        let alerts = notifications();
        assert_eq!(alerts.len(), 4);
        assert_eq!(unread_count(&alerts), 2);
    }

    #[test]
    fn test_price_walk_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let walk = price_walk_with(&mut rng, HISTORY_DAYS, 58_000.0);

        assert_eq!(walk.len(), HISTORY_DAYS);
        assert_eq!(walk[0].price, 58_000.0);
        assert!(walk.iter().all(|p| p.price > 0.0));
        // every price is rounded to cents
        assert!(walk
            .iter()
            .all(|p| (p.price * 100.0 - (p.price * 100.0).round()).abs() < 1e-6));
    }

    #[test]
    fn test_price_walk_is_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        assert_eq!(
            price_walk_with(&mut a, 10, 100.0),
            price_walk_with(&mut b, 10, 100.0)
        );
    }

    #[test]
    fn test_market_overview_shape() {
        let assets = market_overview();
        assert_eq!(assets.len(), 4);

        let symbols: Vec<&str> = assets.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTC", "ETH", "SOL", "BEP"]);

        for asset in &assets {
            assert_eq!(asset.history.len(), HISTORY_DAYS);
            // volume divisor is drawn from [30, 50)
            assert!(asset.volume_24h <= asset.market_cap / 30.0 + 1.0);
            assert!(asset.volume_24h >= asset.market_cap / 50.0 - 1.0);
        }
    }

    #[test]
    fn test_receive_address_prefers_saved_entry() {
        let book = address_book();
        assert_eq!(
            receive_address(&book, "ETH", 0),
            "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe"
        );
    }

    #[test]
    fn test_receive_address_fallback_is_deterministic() {
        let book = address_book();
        let addr = receive_address(&book, "DOGE", 1_234_567_890);

        assert_eq!(addr, "mock_doge_address_567890");
        assert_eq!(addr, receive_address(&book, "DOGE", 1_234_567_890));
        // short timestamps still produce a six-digit suffix
        assert_eq!(receive_address(&book, "DOGE", 42), "mock_doge_address_000042");
    }
}
