use serde_json::Value;

use trading_journal::risk::{generate_plan, GeneratedPlan, QuestionnaireAnswers};
use trading_journal::trading::TradeRecord;

/// Run the full answers pipeline on a JSON literal.
pub fn plan_from(answers: Value) -> GeneratedPlan {
    generate_plan(QuestionnaireAnswers::from_value(answers).unwrap()).unwrap()
}

/// Decode a journal trade from a JSON literal.
pub fn trade_from(v: Value) -> TradeRecord {
    serde_json::from_value(v).unwrap()
}

pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
