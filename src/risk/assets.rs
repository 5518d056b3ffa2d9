use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Crypto,
    Forex,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetClass::Crypto => write!(f, "crypto"),
            AssetClass::Forex => write!(f, "forex"),
        }
    }
}

const UNKNOWN_CRYPTO_MULTIPLIER: f64 = 1.4;
const UNKNOWN_FOREX_MULTIPLIER: f64 = 1.2;

static CRYPTO_MULTIPLIERS: &[(&str, f64)] = &[
    ("BTC", 1.0),
    ("ETH", 1.1),
    ("SOL", 1.3),
    ("XRP", 1.2),
    ("ADA", 1.2),
    ("DOGE", 1.5),
    ("AVAX", 1.3),
    ("SHIB", 1.8),
];

static FOREX_MULTIPLIERS: &[(&str, f64)] = &[
    ("EURUSD", 1.0),
    ("GBPUSD", 1.1),
    ("USDJPY", 1.0),
    ("XAU/USD", 1.2),
    ("USOIL", 1.3),
    ("US30", 1.1),
];

impl AssetClass {
    /// Volatility multiplier applied to the per-trade risk. Symbols are
    /// matched exactly; unlisted symbols take the class default.
    pub fn multiplier(self, symbol: &str) -> f64 {
        let (table, fallback) = match self {
            AssetClass::Crypto => (CRYPTO_MULTIPLIERS, UNKNOWN_CRYPTO_MULTIPLIER),
            AssetClass::Forex => (FOREX_MULTIPLIERS, UNKNOWN_FOREX_MULTIPLIER),
        };
        table
            .iter()
            .find(|(s, _)| *s == symbol)
            .map_or(fallback, |&(_, m)| m)
    }
}

/// One entry of the combined rotation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanAsset {
    pub symbol: String,
    pub class: AssetClass,
}

impl PlanAsset {
    pub fn multiplier(&self) -> f64 {
        self.class.multiplier(&self.symbol)
    }
}

/// Crypto symbols first, then forex, each in the order supplied.
pub fn rotation(crypto: &[String], forex: &[String]) -> Vec<PlanAsset> {
    crypto
        .iter()
        .map(|s| PlanAsset {
            symbol: s.clone(),
            class: AssetClass::Crypto,
        })
        .chain(forex.iter().map(|s| PlanAsset {
            symbol: s.clone(),
            class: AssetClass::Forex,
        }))
        .collect()
}
