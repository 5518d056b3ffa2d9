use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TradeError;
use crate::models::value::as_f64;
use crate::models::{TradeDirection, TradeOutcome};

/// One journal entry as the persistence layer hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: u64,
    #[serde(default)]
    pub signal_id: Option<u64>,
    pub date: NaiveDate,
    pub asset: String,
    pub direction: TradeDirection,
    pub entry_price: f64,
    pub exit_price: f64,
    #[serde(default)]
    pub sl: Option<f64>,
    #[serde(default)]
    pub tp: Option<f64>,
    pub lot_size: f64,
    pub outcome: TradeOutcome,
    #[serde(default)]
    pub trade_duration: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub strategy_tag: Option<String>,
    #[serde(default)]
    pub prop_firm: Option<String>,
    #[serde(default)]
    pub screenshot_url: Option<String>,
}

/// A signal the user chose to follow, as posted from the signals feed.
/// Fields stay loose until [`TradeSignal::into_record`] checks them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSignal {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub pair: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub entry: Option<Value>,
    #[serde(default)]
    pub stop_loss: Option<Value>,
    #[serde(default)]
    pub take_profit: Option<Value>,
}

impl TradeSignal {
    /// Open a pending journal trade from this signal. Exit price and lot
    /// size start at zero until the user resolves the trade.
    pub fn into_record(self, record_id: u64, date: NaiveDate) -> Result<TradeRecord, TradeError> {
        let asset = self.pair.ok_or(TradeError::MissingField("pair"))?;
        let kind = self.kind.ok_or(TradeError::MissingField("type"))?;
        let direction = kind
            .parse::<TradeDirection>()
            .map_err(|reason| TradeError::InvalidField { field: "type", reason })?;

        let entry_price = required_price(self.entry.as_ref(), "entry")?;
        let sl = required_price(self.stop_loss.as_ref(), "stopLoss")?;
        let tp = first_take_profit(self.take_profit.as_ref())?;

        let signal_id = match self.id.as_ref() {
            None | Some(Value::Null) => None,
            Some(v) => Some(signal_id(v)?),
        };

        Ok(TradeRecord {
            id: record_id,
            signal_id,
            date,
            asset,
            direction,
            entry_price,
            exit_price: 0.0,
            sl: Some(sl),
            tp: Some(tp),
            lot_size: 0.0,
            outcome: TradeOutcome::Pending,
            trade_duration: None,
            notes: None,
            strategy_tag: None,
            prop_firm: None,
            screenshot_url: None,
        })
    }
}

fn required_price(raw: Option<&Value>, field: &'static str) -> Result<f64, TradeError> {
    let v = raw
        .filter(|v| !v.is_null())
        .ok_or(TradeError::MissingField(field))?;
    as_f64(v).ok_or_else(|| TradeError::InvalidField {
        field,
        reason: format!("expected a price, got {v}"),
    })
}

/// Signals carry a ladder of take-profit levels; the journal keeps the
/// first. A bare number is accepted as a one-level ladder.
fn first_take_profit(raw: Option<&Value>) -> Result<f64, TradeError> {
    match raw {
        None | Some(Value::Null) => Err(TradeError::MissingField("takeProfit")),
        Some(Value::Array(levels)) => {
            let first = levels.first().ok_or(TradeError::NoTakeProfit)?;
            required_price(Some(first), "takeProfit")
        }
        Some(v) => required_price(Some(v), "takeProfit"),
    }
}

fn signal_id(v: &Value) -> Result<u64, TradeError> {
    let parsed = match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| TradeError::InvalidField {
        field: "id",
        reason: format!("expected a non-negative integer, got {v}"),
    })
}
