use thiserror::Error;

/// Failures while turning questionnaire answers into a plan.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("invalid trades-per-day descriptor {0:?}")]
    InvalidTradesPerDay(String),

    #[error("trades-per-day descriptor {0:?} resolves to zero trades")]
    ZeroTrades(String),

    #[error("trades-per-day descriptor {descriptor:?} exceeds {max} trades")]
    TooManyTrades { descriptor: String, max: usize },

    #[error("field {field} has an unsupported value: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

/// Failures while building a journal trade from an incoming signal.
#[derive(Debug, Error, PartialEq)]
pub enum TradeError {
    #[error("missing required trade field {0}")]
    MissingField(&'static str),

    #[error("field {field} has an unsupported value: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("signal carries no take-profit level")]
    NoTakeProfit,
}
