//! Mocked dashboard data.
//!
//! The storefront dashboard is driven by generated numbers rather than real aggregates. The shapes are stable; the
//! values are random and carry no meaning beyond making the charts move.
use chrono::{Duration, Utc};
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const SALES_SERIES_DAYS: usize = 30;
pub const DEMO_LOG_ROWS: usize = 25;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: Value,
    pub trend: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesCandle {
    pub date: String,
    pub gross: f64,
    pub net: f64,
    pub units: u32,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoLogRow {
    pub timestamp: String,
    pub category: String,
    pub actor: String,
    pub description: String,
    pub related_id: String,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn trend<R: Rng>(rng: &mut R) -> f64 {
    round2(rng.gen_range(-5.0..5.0))
}

/// The six summary cards at the top of the dashboard.
pub fn metric_cards() -> Vec<MetricCard> {
    let mut rng = thread_rng();
    let auto_payment = if rng.gen_bool(0.5) { "On" } else { "Off" };
    vec![
        MetricCard { label: "Total Sales".into(), value: json!(rng.gen_range(1200..=4800)), trend: trend(&mut rng) },
        MetricCard {
            label: "MRR / Revenue".into(),
            value: json!(round2(rng.gen_range(0.0..15_000.0))),
            trend: trend(&mut rng),
        },
        MetricCard {
            label: "Available Balance".into(),
            value: json!(round2(rng.gen_range(0.0..5000.0))),
            trend: trend(&mut rng),
        },
        MetricCard { label: "Open Tickets".into(), value: json!(rng.gen_range(2..=37)), trend: trend(&mut rng) },
        MetricCard { label: "Auto Payment".into(), value: json!(auto_payment), trend: 0.0 },
        MetricCard {
            label: "Conversion".into(),
            value: json!(format!("{}%", round2(rng.gen_range(1.0..6.0)))),
            trend: trend(&mut rng),
        },
    ]
}

/// A 30-day candle series ending today, oldest first.
pub fn sales_series() -> Vec<SalesCandle> {
    let mut rng = thread_rng();
    let today = Utc::now();
    (0..SALES_SERIES_DAYS)
        .map(|i| {
            let day = today - Duration::days((SALES_SERIES_DAYS - 1 - i) as i64);
            let open = round2(rng.gen_range(50.0..100.0));
            let close = round2(open + rng.gen_range(-5.0..5.0));
            let high = round2(open.max(close) + rng.gen_range(0.0..5.0));
            let low = round2(open.min(close) - rng.gen_range(0.0..5.0));
            SalesCandle {
                date: day.format("%Y-%m-%d").to_string(),
                gross: round2(rng.gen_range(500.0..2500.0)),
                net: round2(rng.gen_range(300.0..1800.0)),
                units: rng.gen_range(5..=80),
                open,
                close,
                high,
                low,
            }
        })
        .collect()
}

/// Synthetic activity rows for the log panel, newest first, one every seven minutes.
pub fn demo_logs() -> Vec<DemoLogRow> {
    let now = Utc::now();
    let categories = ["order", "payment", "auth", "withdrawal", "system"];
    let actors = ["system", "admin@site.com", "reseller@site.com", "user@site.com"];
    (0..DEMO_LOG_ROWS)
        .map(|i| {
            let ts = now - Duration::minutes(i as i64 * 7);
            DemoLogRow {
                timestamp: ts.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
                category: categories[i % categories.len()].to_string(),
                actor: actors[i % actors.len()].to_string(),
                description: format!("Event {i} processed"),
                related_id: format!("RID{i:04}"),
            }
        })
        .collect()
}
