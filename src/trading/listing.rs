use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{TradeDirection, TradeOutcome};
use crate::trading::metrics::compute;
use crate::trading::trade_record::TradeRecord;

/// A trade as shown in the journal listing, decorated with its metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeListingEntry {
    pub id: u64,
    pub signal_id: Option<u64>,
    pub date: NaiveDate,
    pub asset: String,
    pub direction: TradeDirection,
    pub entry_price: f64,
    pub sl: Option<f64>,
    pub tp: Option<f64>,
    pub outcome: TradeOutcome,
    pub pips: f64,
    pub profit: f64,
    pub rsr: f64,
}

impl From<&TradeRecord> for TradeListingEntry {
    fn from(trade: &TradeRecord) -> Self {
        let m = compute(trade);
        Self {
            id: trade.id,
            signal_id: trade.signal_id,
            date: trade.date,
            asset: trade.asset.clone(),
            direction: trade.direction,
            entry_price: trade.entry_price,
            sl: trade.sl,
            tp: trade.tp,
            outcome: trade.outcome,
            pips: m.pips,
            profit: m.profit,
            rsr: m.risk_reward_ratio,
        }
    }
}

/// Newest trades first; trades on the same day keep their input order.
pub fn decorate(trades: &[TradeRecord]) -> Vec<TradeListingEntry> {
    let mut entries: Vec<TradeListingEntry> = trades.iter().map(TradeListingEntry::from).collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}
