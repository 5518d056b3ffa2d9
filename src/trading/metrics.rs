use serde::{Deserialize, Serialize};

use crate::models::value::round2;
use crate::trading::trade_record::TradeRecord;

const JPY_PIP_SIZE: f64 = 0.01;
const STANDARD_PIP_SIZE: f64 = 0.0001;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeMetrics {
    pub pips: f64,
    pub profit: f64,
    pub risk_reward_ratio: f64,
}

impl TradeMetrics {
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.pips, self.profit, self.risk_reward_ratio)
    }
}

/// JPY pairs quote to two decimals, everything else to four.
pub fn pip_size(asset: &str) -> f64 {
    if asset.to_lowercase().contains("jpy") {
        JPY_PIP_SIZE
    } else {
        STANDARD_PIP_SIZE
    }
}

/// Pips, profit and reward-to-risk for a resolved trade, each rounded to
/// two decimals. Pending trades report all zeros.
pub fn compute(trade: &TradeRecord) -> TradeMetrics {
    if !trade.outcome.is_resolved() {
        return TradeMetrics::default();
    }

    let pips = trade.direction.sign() * (trade.exit_price - trade.entry_price)
        / pip_size(&trade.asset);
    let profit = pips * trade.lot_size;

    TradeMetrics {
        pips: round2(pips),
        profit: round2(profit),
        risk_reward_ratio: round2(risk_reward(trade)),
    }
}

fn risk_reward(trade: &TradeRecord) -> f64 {
    match (trade.sl, trade.tp) {
        (Some(sl), Some(tp)) if sl != 0.0 && tp != 0.0 => {
            let risk = (trade.entry_price - sl).abs();
            let reward = (tp - trade.entry_price).abs();
            if risk > 0.0 {
                reward / risk
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}
