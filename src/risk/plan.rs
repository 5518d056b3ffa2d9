use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PlanError;
use crate::models::value::{fmt_float, round2};
use crate::risk::answers::{PlanInputs, QuestionnaireAnswers};
use crate::risk::assets::rotation;
use crate::risk::profile::RiskProfile;

const TOTAL_DRAWDOWN_FRACTION: f64 = 0.10;
const PROFIT_TARGET_FRACTION: f64 = 0.08;
const PLACEHOLDER_ASSET: &str = "Any selected asset";
const CONSISTENCY_RULE: &str = "Maintain steady performance for Phase 2";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub account_equity: f64,
    pub trades_per_day: String,
    pub trading_session: String,
    pub crypto_assets: Vec<String>,
    pub forex_assets: Vec<String>,
    pub has_account: String,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskParameters {
    pub max_daily_risk: f64,
    pub max_daily_risk_pct: String,
    /// Per-trade risk after the even-split cap, before asset multipliers.
    pub base_trade_risk: f64,
    pub base_trade_risk_pct: String,
    pub min_risk_reward: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeAllocation {
    pub trade: String,
    pub asset: String,
    pub loss_limit: f64,
    pub profit_target: f64,
    pub risk_reward_ratio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropFirmCompliance {
    pub daily_loss_limit: String,
    pub total_drawdown_limit: String,
    pub profit_target: String,
    pub consistency_rule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub user_profile: UserProfile,
    pub risk_parameters: RiskParameters,
    pub trades: Vec<TradeAllocation>,
    pub prop_firm_compliance: PropFirmCompliance,
}

/// Unrounded daily and per-trade budgets for one plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskBudget {
    pub num_trades: usize,
    pub max_daily_risk: f64,
    pub base_trade_risk: f64,
    /// `min(base_trade_risk, max_daily_risk / num_trades)`.
    pub adjusted_trade_risk: f64,
}

impl RiskBudget {
    /// `num_trades` must be non-zero; [`PlanInputs`] guarantees it.
    pub fn compute(equity: f64, profile: &RiskProfile, num_trades: usize) -> Self {
        let max_daily_risk = equity * profile.daily_risk;
        let base_trade_risk = equity * profile.trade_risk;
        let even_share = max_daily_risk / num_trades as f64;
        Self {
            num_trades,
            max_daily_risk,
            base_trade_risk,
            adjusted_trade_risk: base_trade_risk.min(even_share),
        }
    }
}

/// Validate loose answers and build the plan.
pub fn generate_plan(answers: QuestionnaireAnswers) -> Result<GeneratedPlan, PlanError> {
    let inputs = answers.validate()?;
    Ok(generate(&inputs))
}

pub fn generate(inputs: &PlanInputs) -> GeneratedPlan {
    let profile = inputs.level.profile();
    let equity = inputs.account_equity;
    let budget = RiskBudget::compute(equity, profile, inputs.num_trades);

    debug!(
        "Budget for {} trades: daily={:.2} base={:.2} adjusted={:.2}",
        budget.num_trades, budget.max_daily_risk, budget.base_trade_risk, budget.adjusted_trade_risk
    );

    let rr_label = format!("1:{}", fmt_float(profile.min_rr));
    let assets = rotation(&inputs.crypto_assets, &inputs.forex_assets);

    let trades: Vec<TradeAllocation> = (1..=budget.num_trades)
        .map(|i| {
            let (asset, multiplier) = if assets.is_empty() {
                (PLACEHOLDER_ASSET.to_string(), 1.0)
            } else {
                let a = &assets[(i - 1) % assets.len()];
                (a.symbol.clone(), a.multiplier())
            };
            let trade_risk = budget.adjusted_trade_risk * multiplier;
            TradeAllocation {
                trade: format!("trade-{i}"),
                asset,
                loss_limit: round2(trade_risk),
                profit_target: round2(trade_risk * profile.min_rr),
                risk_reward_ratio: rr_label.clone(),
            }
        })
        .collect();

    let daily_pct = format!("{}%", fmt_float(profile.daily_risk * 100.0));

    let plan = GeneratedPlan {
        user_profile: UserProfile {
            account_equity: equity,
            trades_per_day: inputs.trades_per_day.clone(),
            trading_session: inputs.trading_session.clone(),
            crypto_assets: inputs.crypto_assets.clone(),
            forex_assets: inputs.forex_assets.clone(),
            has_account: inputs.has_account.clone(),
            experience: inputs.experience.clone(),
        },
        risk_parameters: RiskParameters {
            max_daily_risk: round2(budget.max_daily_risk),
            max_daily_risk_pct: daily_pct.clone(),
            base_trade_risk: round2(budget.adjusted_trade_risk),
            base_trade_risk_pct: format!("{:.2}%", budget.adjusted_trade_risk / equity * 100.0),
            min_risk_reward: rr_label,
        },
        trades,
        prop_firm_compliance: PropFirmCompliance {
            daily_loss_limit: format!(
                "${} ({})",
                fmt_float(round2(budget.max_daily_risk)),
                daily_pct
            ),
            total_drawdown_limit: format!(
                "${} (10%)",
                fmt_float(round2(equity * TOTAL_DRAWDOWN_FRACTION))
            ),
            profit_target: format!(
                "${} (8%)",
                fmt_float(round2(equity * PROFIT_TARGET_FRACTION))
            ),
            consistency_rule: CONSISTENCY_RULE.to_string(),
        },
    };

    info!(
        "Generated {} plan: {} trades on ${:.2} equity, daily cap ${:.2}",
        inputs.level,
        plan.trades.len(),
        equity,
        plan.risk_parameters.max_daily_risk
    );

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::profile::ExperienceLevel;
    use crate::test_helpers::{approx_eq, plan_inputs};

    #[test]
    fn beginner_two_trades_no_assets() {
        let plan = generate(&plan_inputs("beginner", 10_000.0, "1-2", &[], &[]));

        assert_eq!(plan.risk_parameters.max_daily_risk, 400.0);
        assert_eq!(plan.risk_parameters.max_daily_risk_pct, "4.0%");
        assert_eq!(plan.risk_parameters.base_trade_risk, 200.0);
        assert_eq!(plan.risk_parameters.base_trade_risk_pct, "2.00%");
        assert_eq!(plan.risk_parameters.min_risk_reward, "1:2.0");

        assert_eq!(plan.trades.len(), 2);
        for (i, t) in plan.trades.iter().enumerate() {
            assert_eq!(t.trade, format!("trade-{}", i + 1));
            assert_eq!(t.asset, "Any selected asset");
            assert_eq!(t.loss_limit, 200.0);
            assert_eq!(t.profit_target, 400.0);
            assert_eq!(t.risk_reward_ratio, "1:2.0");
        }
    }

    #[test]
    fn compliance_block_formatting() {
        let plan = generate(&plan_inputs("beginner", 10_000.0, "1-2", &[], &[]));
        let c = &plan.prop_firm_compliance;
        assert_eq!(c.daily_loss_limit, "$400.0 (4.0%)");
        assert_eq!(c.total_drawdown_limit, "$1000.0 (10%)");
        assert_eq!(c.profit_target, "$800.0 (8%)");
        assert_eq!(c.consistency_rule, "Maintain steady performance for Phase 2");
    }

    #[test]
    fn even_split_caps_base_risk() {
        // intermediate: daily 500, base 250, 5 trades -> 100 each
        let plan = generate(&plan_inputs("intermediate", 10_000.0, "3-5", &[], &[]));
        assert_eq!(plan.risk_parameters.base_trade_risk, 100.0);
        assert_eq!(plan.risk_parameters.base_trade_risk_pct, "1.00%");
        assert_eq!(plan.risk_parameters.max_daily_risk_pct, "5.0%");
        assert_eq!(plan.trades[0].profit_target, 250.0);
        assert_eq!(plan.trades[0].risk_reward_ratio, "1:2.5");
    }

    #[test]
    fn single_trade_keeps_base_risk() {
        let plan = generate(&plan_inputs("advanced", 20_000.0, "1", &[], &[]));
        // daily 1200, base 600, 1200/1 > 600
        assert_eq!(plan.risk_parameters.base_trade_risk, 600.0);
        assert_eq!(plan.trades[0].profit_target, 1800.0);
    }

    #[test]
    fn assets_rotate_round_robin() {
        let plan = generate(&plan_inputs(
            "beginner",
            10_000.0,
            "5",
            &["BTC", "DOGE"],
            &["GBPUSD"],
        ));
        let assets: Vec<&str> = plan.trades.iter().map(|t| t.asset.as_str()).collect();
        assert_eq!(assets, ["BTC", "DOGE", "GBPUSD", "BTC", "DOGE"]);

        // adjusted = min(200, 400/5) = 80
        assert_eq!(plan.trades[0].loss_limit, 80.0);
        assert_eq!(plan.trades[1].loss_limit, 120.0);
        assert_eq!(plan.trades[2].loss_limit, 88.0);
        assert_eq!(plan.trades[1].profit_target, 240.0);
    }

    #[test]
    fn budget_cap_respected_before_multiplier() {
        for level in ExperienceLevel::ALL {
            for n in 1..=12 {
                let b = RiskBudget::compute(37_500.0, level.profile(), n);
                assert!(b.adjusted_trade_risk <= b.base_trade_risk);
                assert!(b.adjusted_trade_risk * n as f64 <= b.max_daily_risk + 1e-9);
            }
        }
    }

    #[test]
    fn budget_values() {
        let b = RiskBudget::compute(50_000.0, ExperienceLevel::Advanced.profile(), 7);
        assert!(approx_eq(b.max_daily_risk, 3000.0, 1e-9));
        assert!(approx_eq(b.base_trade_risk, 1500.0, 1e-9));
        assert!(approx_eq(b.adjusted_trade_risk, 3000.0 / 7.0, 1e-9));
    }

    #[test]
    fn profile_echo() {
        let mut inputs = plan_inputs("guru", 12_345.0, "3", &["ETH"], &[]);
        inputs.trading_session = "london".to_string();
        inputs.has_account = "yes".to_string();
        let plan = generate(&inputs);
        let up = &plan.user_profile;
        assert_eq!(up.account_equity, 12_345.0);
        assert_eq!(up.trades_per_day, "3");
        assert_eq!(up.trading_session, "london");
        assert_eq!(up.crypto_assets, ["ETH"]);
        assert_eq!(up.has_account, "yes");
        assert_eq!(up.experience, "guru");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let plan = generate(&plan_inputs("beginner", 10_000.0, "1-2", &[], &[]));
        let v = serde_json::to_value(&plan).unwrap();
        assert_eq!(v["riskParameters"]["maxDailyRisk"], 400.0);
        assert_eq!(v["trades"][0]["lossLimit"], 200.0);
        assert_eq!(v["trades"][0]["riskRewardRatio"], "1:2.0");
        assert_eq!(v["propFirmCompliance"]["consistencyRule"], CONSISTENCY_RULE);
        assert_eq!(v["userProfile"]["accountEquity"], 10_000.0);
    }
}
