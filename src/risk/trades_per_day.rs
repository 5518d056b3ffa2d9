use crate::error::PlanError;

/// Extra trades assumed on top of an open-ended "N+" answer.
const OPEN_ENDED_EXTRA: i64 = 2;

/// Upper bound on trades in one daily plan.
pub const MAX_TRADES_PER_DAY: usize = 1000;

/// Resolve a trades-per-day answer into a concrete trade count.
///
/// - `"N+"` resolves to `N + 2`
/// - `"A-B"` resolves to the upper bound `B`
/// - anything else must be a bare integer
///
/// A count of zero is rejected since the daily budget is divided by it.
/// Counts above [`MAX_TRADES_PER_DAY`] are rejected as well.
pub fn parse_trades_per_day(raw: &str) -> Result<usize, PlanError> {
    let invalid = || PlanError::InvalidTradesPerDay(raw.to_string());

    let count: i64 = if raw.contains('+') {
        parse_int(&raw.replace('+', ""))
            .and_then(|n| n.checked_add(OPEN_ENDED_EXTRA))
            .ok_or_else(invalid)?
    } else if raw.contains('-') {
        let upper = raw.split('-').nth(1).ok_or_else(invalid)?;
        parse_int(upper).ok_or_else(invalid)?
    } else {
        parse_int(raw).ok_or_else(invalid)?
    };

    match count {
        0 => Err(PlanError::ZeroTrades(raw.to_string())),
        n if n < 0 => Err(invalid()),
        n => {
            let n = usize::try_from(n).map_err(|_| invalid())?;
            if n > MAX_TRADES_PER_DAY {
                return Err(PlanError::TooManyTrades {
                    descriptor: raw.to_string(),
                    max: MAX_TRADES_PER_DAY,
                });
            }
            Ok(n)
        }
    }
}

fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_takes_upper_bound() {
        assert_eq!(parse_trades_per_day("1-2"), Ok(2));
        assert_eq!(parse_trades_per_day("3-5"), Ok(5));
        assert_eq!(parse_trades_per_day(" 3 - 5 "), Ok(5));
    }

    #[test]
    fn open_ended_adds_two() {
        assert_eq!(parse_trades_per_day("5+"), Ok(7));
        assert_eq!(parse_trades_per_day("10+"), Ok(12));
    }

    #[test]
    fn bare_integer() {
        assert_eq!(parse_trades_per_day("3"), Ok(3));
        assert_eq!(parse_trades_per_day(" 4 "), Ok(4));
    }

    #[test]
    fn malformed_descriptors_fail() {
        for raw in ["", "many", "1-", "a-b", "x+", "2.5", "9223372036854775807+"] {
            assert_eq!(
                parse_trades_per_day(raw),
                Err(PlanError::InvalidTradesPerDay(raw.to_string())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(
            parse_trades_per_day("0"),
            Err(PlanError::ZeroTrades("0".to_string()))
        );
        assert_eq!(
            parse_trades_per_day("0-0"),
            Err(PlanError::ZeroTrades("0-0".to_string()))
        );
    }

    #[test]
    fn trade_count_ceiling() {
        assert_eq!(parse_trades_per_day("1000"), Ok(1000));
        assert_eq!(parse_trades_per_day("998+"), Ok(1000));
        for raw in ["1001", "999+", "1-100000000000"] {
            assert_eq!(
                parse_trades_per_day(raw),
                Err(PlanError::TooManyTrades {
                    descriptor: raw.to_string(),
                    max: MAX_TRADES_PER_DAY
                }),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn negative_open_ended_is_invalid() {
        assert!(matches!(
            parse_trades_per_day("-5+"),
            Err(PlanError::InvalidTradesPerDay(_))
        ));
    }
}
