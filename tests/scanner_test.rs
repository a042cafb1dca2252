//! Integration tests for the scan pipeline
//!
//! Drives the scanner with in-memory quote and notifier doubles; no network.

use async_trait::async_trait;
use nav_gap::notify::{Notifier, NotifyError};
use nav_gap::quote::{QuoteError, QuoteSource};
use nav_gap::scan::{GapLog, GapRecord, Instrument, Scanner, ALERT_THRESHOLD_PCT, SUMMARY_LIMIT};
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Quote source answering from fixed maps; missing keys fail the fetch
#[derive(Default)]
struct StaticQuotes {
    navs: HashMap<String, Decimal>,
    prices: HashMap<String, Decimal>,
}

impl StaticQuotes {
    fn with(mut self, instrument: &Instrument, nav: Decimal, price: Decimal) -> Self {
        self.navs.insert(instrument.scheme_code.clone(), nav);
        self.prices.insert(instrument.symbol.clone(), price);
        self
    }
}

#[async_trait]
impl QuoteSource for StaticQuotes {
    async fn nav(&self, scheme_code: &str) -> Result<Decimal, QuoteError> {
        self.navs
            .get(scheme_code)
            .copied()
            .ok_or(QuoteError::MissingQuote)
    }

    async fn market_price(&self, symbol: &str) -> Result<Decimal, QuoteError> {
        self.prices
            .get(symbol)
            .copied()
            .ok_or(QuoteError::MissingQuote)
    }
}

/// Notifier capturing every message it is asked to deliver
#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Notifier whose channel always rejects the message
struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _text: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Api {
            status: 502,
            body: "bad gateway".to_string(),
        })
    }
}

fn nifty_bees() -> Instrument {
    Instrument {
        name: "Nifty BeES".to_string(),
        symbol: "NIFTYBEES.NS".to_string(),
        scheme_code: "120716".to_string(),
        nav_ratio: dec!(1.60),
    }
}

fn gold_bees() -> Instrument {
    Instrument {
        name: "Gold BeES".to_string(),
        symbol: "GOLDBEES.NS".to_string(),
        scheme_code: "120503".to_string(),
        nav_ratio: dec!(1.1658),
    }
}

fn scanner(
    instruments: Vec<Instrument>,
    quotes: Arc<dyn QuoteSource>,
    notifier: Arc<dyn Notifier>,
) -> Scanner {
    Scanner::new(instruments, ALERT_THRESHOLD_PCT, quotes, notifier)
}

#[tokio::test]
async fn test_premium_scan_sends_alert_and_records() {
    // NAV 100 at ratio 1.6 -> adjusted 160; price 165 -> +3.125% premium
    let instrument = nifty_bees();
    let quotes = Arc::new(StaticQuotes::default().with(&instrument, dec!(100), dec!(165)));
    let notifier = Arc::new(RecordingNotifier::default());
    let scanner = scanner(vec![instrument], quotes, notifier.clone());

    let mut log = GapLog::new();
    let outcome = scanner.run_scan(&mut log).await.unwrap();

    assert_eq!(outcome.evaluations.len(), 1);
    assert_eq!(outcome.alerts_sent, 1);
    assert_eq!(outcome.skipped, 0);
    assert_eq!(outcome.evaluations[0].gap_pct, dec!(3.125));

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("PREMIUM ALERT"));
    assert!(messages[0].contains("Nifty BeES"));

    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn test_neutral_scan_records_without_alert() {
    // Adjusted NAV 160 vs price 159.5 -> -0.3125%, inside the threshold
    let instrument = nifty_bees();
    let quotes = Arc::new(StaticQuotes::default().with(&instrument, dec!(100), dec!(159.5)));
    let notifier = Arc::new(RecordingNotifier::default());
    let scanner = scanner(vec![instrument], quotes, notifier.clone());

    let mut log = GapLog::new();
    let outcome = scanner.run_scan(&mut log).await.unwrap();

    assert_eq!(outcome.alerts_sent, 0);
    assert!(notifier.messages().is_empty());
    // Neutral gaps still feed the daily journal
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn test_fetch_failure_skips_and_continues() {
    // First instrument has no price quote; the scan moves on to the second
    let broken = nifty_bees();
    let healthy = gold_bees();
    let mut quotes = StaticQuotes::default().with(&healthy, dec!(70), dec!(84));
    quotes.navs.insert(broken.scheme_code.clone(), dec!(100));

    let notifier = Arc::new(RecordingNotifier::default());
    let scanner = scanner(
        vec![broken, healthy],
        Arc::new(quotes),
        notifier.clone(),
    );

    let mut log = GapLog::new();
    let outcome = scanner.run_scan(&mut log).await.unwrap();

    assert_eq!(outcome.skipped, 1);
    assert_eq!(outcome.evaluations.len(), 1);
    assert_eq!(outcome.evaluations[0].name, "Gold BeES");
    // No record for the skipped instrument
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn test_dispatch_failure_aborts_scan() {
    let instrument = nifty_bees();
    let quotes = Arc::new(StaticQuotes::default().with(&instrument, dec!(100), dec!(165)));
    let scanner = scanner(vec![instrument], quotes, Arc::new(FailingNotifier));

    let mut log = GapLog::new();
    let result = scanner.run_scan(&mut log).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_scan_is_idempotent_for_identical_quotes() {
    let instrument = nifty_bees();
    let quotes = Arc::new(StaticQuotes::default().with(&instrument, dec!(100), dec!(165)));
    let notifier = Arc::new(RecordingNotifier::default());
    let scanner = scanner(vec![instrument], quotes, notifier.clone());

    let mut log = GapLog::new();
    scanner.run_scan(&mut log).await.unwrap();
    scanner.run_scan(&mut log).await.unwrap();

    let messages = notifier.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], messages[1]);
    // Only the journal accumulates across scans
    assert_eq!(log.len(), 2);
}

#[tokio::test]
async fn test_daily_summary_selects_ranks_and_clears() {
    let notifier = Arc::new(RecordingNotifier::default());
    let scanner = scanner(
        vec![],
        Arc::new(StaticQuotes::default()),
        notifier.clone(),
    );

    let mut log = GapLog::new();
    for (name, gap_pct) in [
        ("A", dec!(3.1)),
        ("B", dec!(0.2)),
        ("C", dec!(-1.8)),
        ("D", dec!(5.0)),
        ("E", dec!(0.1)),
    ] {
        log.push(GapRecord {
            name: name.to_string(),
            gap_pct,
            market_price: dec!(100),
            adjusted_nav: dec!(100),
            timestamp: Utc::now(),
        });
    }

    let sent = scanner.send_daily_summary(&mut log).await.unwrap();
    assert!(sent);
    assert!(log.is_empty());

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    let text = &messages[0];
    assert_eq!(text.matches('•').count(), SUMMARY_LIMIT);

    // Largest absolute gaps first
    let pos_d = text.find("• D:").unwrap();
    let pos_a = text.find("• A:").unwrap();
    let pos_c = text.find("• C:").unwrap();
    let pos_b = text.find("• B:").unwrap();
    assert!(pos_d < pos_a && pos_a < pos_c && pos_c < pos_b);
    assert!(!text.contains("• E:"));
}

#[tokio::test]
async fn test_daily_summary_noop_when_empty() {
    let notifier = Arc::new(RecordingNotifier::default());
    let scanner = scanner(
        vec![],
        Arc::new(StaticQuotes::default()),
        notifier.clone(),
    );

    let mut log = GapLog::new();
    let sent = scanner.send_daily_summary(&mut log).await.unwrap();
    assert!(!sent);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn test_morning_briefing_sends_static_message() {
    let notifier = Arc::new(RecordingNotifier::default());
    let scanner = scanner(
        vec![],
        Arc::new(StaticQuotes::default()),
        notifier.clone(),
    );

    scanner.send_morning_briefing().await.unwrap();
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Good morning"));
}
