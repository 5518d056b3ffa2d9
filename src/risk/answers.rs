use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::PlanError;
use crate::models::value::{as_f64, as_text};
use crate::risk::profile::ExperienceLevel;
use crate::risk::trades_per_day::parse_trades_per_day;

pub const DEFAULT_ACCOUNT_EQUITY: f64 = 10_000.0;
pub const DEFAULT_TRADES_PER_DAY: &str = "1-2";
pub const DEFAULT_TRADING_SESSION: &str = "any";
pub const DEFAULT_HAS_ACCOUNT: &str = "no";
pub const DEFAULT_EXPERIENCE: &str = "beginner";

/// Questionnaire answers as submitted by the front end. Every field is
/// optional and loosely typed; [`QuestionnaireAnswers::validate`] applies
/// the defaulting policy in one place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswers {
    #[serde(default)]
    pub trades_per_day: Option<Value>,
    #[serde(default)]
    pub trading_session: Option<Value>,
    #[serde(default)]
    pub crypto_assets: Option<Value>,
    #[serde(default)]
    pub forex_assets: Option<Value>,
    #[serde(default)]
    pub has_account: Option<Value>,
    #[serde(default)]
    pub account_equity: Option<Value>,
    #[serde(default)]
    pub trading_experience: Option<Value>,
    /// Key used by the saved user profile; `tradingExperience` wins when
    /// both are present.
    #[serde(default)]
    pub experience: Option<Value>,
}

/// Fully defaulted, typed inputs for plan generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanInputs {
    pub account_equity: f64,
    pub trades_per_day: String,
    pub num_trades: usize,
    pub trading_session: String,
    pub crypto_assets: Vec<String>,
    pub forex_assets: Vec<String>,
    pub has_account: String,
    /// Experience string as supplied, echoed back in the plan.
    pub experience: String,
    pub level: ExperienceLevel,
}

impl QuestionnaireAnswers {
    pub fn from_value(value: Value) -> Result<Self, PlanError> {
        if !value.is_object() {
            return Err(PlanError::InvalidField {
                field: "answers",
                reason: format!("expected an object, got {value}"),
            });
        }
        serde_json::from_value(value).map_err(|e| PlanError::InvalidField {
            field: "answers",
            reason: e.to_string(),
        })
    }

    pub fn validate(self) -> Result<PlanInputs, PlanError> {
        let trades_per_day = match self.trades_per_day {
            None | Some(Value::Null) => DEFAULT_TRADES_PER_DAY.to_string(),
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => {
                return Err(PlanError::InvalidField {
                    field: "tradesPerDay",
                    reason: format!("expected a string, got {other}"),
                })
            }
        };
        let num_trades = parse_trades_per_day(&trades_per_day)?;

        let account_equity = coerce_equity(self.account_equity.as_ref());

        let (experience, level) = resolve_experience(
            self.trading_experience
                .filter(|v| !v.is_null())
                .or(self.experience),
        );

        let has_account = self
            .has_account
            .as_ref()
            .and_then(as_text)
            .unwrap_or_else(|| DEFAULT_HAS_ACCOUNT.to_string());

        Ok(PlanInputs {
            account_equity,
            trades_per_day,
            num_trades,
            trading_session: self
                .trading_session
                .as_ref()
                .and_then(symbol_text)
                .unwrap_or_else(|| DEFAULT_TRADING_SESSION.to_string()),
            crypto_assets: asset_list(self.crypto_assets, "cryptoAssets"),
            forex_assets: asset_list(self.forex_assets, "forexAssets"),
            has_account,
            experience,
            level,
        })
    }
}

/// Strings as-is, numbers rendered; anything else has no text form here.
fn symbol_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A bare string counts as a one-symbol list. Entries without a text form
/// are dropped.
fn asset_list(raw: Option<Value>, field: &str) -> Vec<String> {
    let items = match raw {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(Value::String(s)) => return vec![s],
        Some(other) => {
            warn!("Ignoring {} value {}, expected a list of symbols", field, other);
            return Vec::new();
        }
    };
    items
        .iter()
        .filter_map(|item| {
            let text = symbol_text(item);
            if text.is_none() {
                warn!("Ignoring {} entry {}", field, item);
            }
            text
        })
        .collect()
}

/// Returns the experience text to echo and the profile level. Unknown or
/// non-string values use the beginner profile.
fn resolve_experience(raw: Option<Value>) -> (String, ExperienceLevel) {
    let experience = match raw {
        None | Some(Value::Null) => DEFAULT_EXPERIENCE.to_string(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    };
    let level = ExperienceLevel::from_answer(&experience).unwrap_or_else(|| {
        warn!(
            "Unrecognized experience level {:?}, using beginner profile",
            experience
        );
        ExperienceLevel::Beginner
    });
    (experience, level)
}

/// Equity must be a positive finite number; anything else falls back to
/// the default account size. Negative balances and booleans are rejected
/// deliberately rather than producing a plan from them.
fn coerce_equity(raw: Option<&Value>) -> f64 {
    match raw.and_then(as_f64) {
        Some(e) if e.is_finite() && e > 0.0 => e,
        _ => {
            if let Some(v) = raw.filter(|v| !v.is_null()) {
                warn!("Invalid account equity {}, using {}", v, DEFAULT_ACCOUNT_EQUITY);
            }
            DEFAULT_ACCOUNT_EQUITY
        }
    }
}
