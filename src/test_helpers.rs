use chrono::NaiveDate;

use crate::models::{TradeDirection, TradeOutcome};
use crate::risk::answers::PlanInputs;
use crate::risk::profile::ExperienceLevel;
use crate::risk::trades_per_day::parse_trades_per_day;
use crate::trading::trade_record::TradeRecord;

pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Validated plan inputs without going through the JSON layer.
pub fn plan_inputs(
    experience: &str,
    equity: f64,
    trades_per_day: &str,
    crypto: &[&str],
    forex: &[&str],
) -> PlanInputs {
    PlanInputs {
        account_equity: equity,
        trades_per_day: trades_per_day.to_string(),
        num_trades: parse_trades_per_day(trades_per_day).unwrap(),
        trading_session: "any".to_string(),
        crypto_assets: crypto.iter().map(|s| s.to_string()).collect(),
        forex_assets: forex.iter().map(|s| s.to_string()).collect(),
        has_account: "no".to_string(),
        experience: experience.to_string(),
        level: ExperienceLevel::from_answer(experience).unwrap_or(ExperienceLevel::Beginner),
    }
}

/// A journal trade dated 2024-01-15 with no stop-loss or take-profit.
pub fn journal_trade(
    asset: &str,
    direction: TradeDirection,
    entry: f64,
    exit: f64,
    lot_size: f64,
    outcome: TradeOutcome,
) -> TradeRecord {
    TradeRecord {
        id: 1,
        signal_id: None,
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        asset: asset.to_string(),
        direction,
        entry_price: entry,
        exit_price: exit,
        sl: None,
        tp: None,
        lot_size,
        outcome,
        trade_duration: None,
        notes: None,
        strategy_tag: None,
        prop_firm: None,
        screenshot_url: None,
    }
}
