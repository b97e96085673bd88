//! Year-over-year rent escalation rules.

use lease_core::types::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ScheduleError;

/// How rent increases from one lease year to the next.
///
/// Serialised as `{"mode": "flat", "value": <cents>}` or
/// `{"mode": "percent", "value": <percent>}`.
///
/// # Examples
///
/// ```
/// use lease_models::escalation::EscalationRule;
/// use lease_core::types::Money;
///
/// let percent: EscalationRule = "5%".parse().unwrap();
/// assert_eq!(percent, EscalationRule::Percent(5.0));
/// assert_eq!(
///     percent.apply(Money::from_cents(200_000)).unwrap(),
///     Money::from_cents(210_000)
/// );
///
/// let flat: EscalationRule = "150".parse().unwrap();
/// assert_eq!(flat, EscalationRule::Flat(Money::from_cents(15_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum EscalationRule {
    /// A fixed amount added to the monthly rent each year.
    Flat(Money),
    /// A percentage of the current monthly rent added each year.
    Percent(f64),
}

impl Default for EscalationRule {
    fn default() -> Self {
        Self::none()
    }
}

impl EscalationRule {
    /// A rule that leaves rent unchanged.
    pub const fn none() -> Self {
        EscalationRule::Flat(Money::ZERO)
    }

    /// Returns whether applying this rule never changes rent.
    pub fn is_none(&self) -> bool {
        match self {
            EscalationRule::Flat(amount) => *amount == Money::ZERO,
            EscalationRule::Percent(pct) => *pct == 0.0,
        }
    }

    /// Checks that the rule's value is finite and non-negative.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        match self {
            EscalationRule::Flat(amount) if amount.is_negative() => Err(
                ScheduleError::invalid_input(format!("flat increase {} is negative", amount)),
            ),
            EscalationRule::Percent(pct) if !pct.is_finite() => Err(ScheduleError::invalid_input(
                format!("percent increase {} is not finite", pct),
            )),
            EscalationRule::Percent(pct) if *pct < 0.0 => Err(ScheduleError::invalid_input(
                format!("percent increase {}% is negative", pct),
            )),
            _ => Ok(()),
        }
    }

    /// Returns the rent for the following year.
    ///
    /// Percent increases are rounded to the cent.
    pub fn apply(&self, rent: Money) -> Result<Money, ScheduleError> {
        let next = match self {
            EscalationRule::Flat(amount) => rent.checked_add(*amount)?,
            EscalationRule::Percent(pct) => rent.scale_percent(*pct)?,
        };
        Ok(next)
    }
}

impl fmt::Display for EscalationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscalationRule::Flat(amount) => write!(f, "+{} flat", amount),
            EscalationRule::Percent(pct) => write!(f, "+{}%", pct),
        }
    }
}

impl FromStr for EscalationRule {
    type Err = ScheduleError;

    /// Parses a rule from text.
    ///
    /// - "5%", "2.5 %": percent
    /// - "150", "$150.00": flat amount
    /// - "none": no escalation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("none") {
            return Ok(EscalationRule::none());
        }

        let rule = match trimmed.strip_suffix('%') {
            Some(pct) => {
                let value: f64 = pct.trim().parse().map_err(|_| {
                    ScheduleError::invalid_input(format!("'{}' is not a percentage", s))
                })?;
                EscalationRule::Percent(value)
            }
            None => {
                let amount: Money = trimmed.parse().map_err(|_| {
                    ScheduleError::invalid_input(format!("'{}' is not an escalation rule", s))
                })?;
                EscalationRule::Flat(amount)
            }
        };

        rule.validate()?;
        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_flat() {
        let rule = EscalationRule::Flat(Money::from_cents(5_000));
        assert_eq!(
            rule.apply(Money::from_cents(100_000)).unwrap(),
            Money::from_cents(105_000)
        );
    }

    #[test]
    fn test_apply_percent_rounds_to_cents() {
        let rule = EscalationRule::Percent(3.0);
        // 1234.56 * 1.03 = 1271.5968
        assert_eq!(
            rule.apply(Money::from_cents(123_456)).unwrap(),
            Money::from_cents(127_160)
        );
    }

    #[test]
    fn test_none() {
        let rule = EscalationRule::default();
        assert!(rule.is_none());
        assert!(EscalationRule::Percent(0.0).is_none());
        assert!(!EscalationRule::Percent(1.0).is_none());
        assert_eq!(
            rule.apply(Money::from_cents(999)).unwrap(),
            Money::from_cents(999)
        );
    }

    #[test]
    fn test_validate() {
        assert!(EscalationRule::Percent(5.0).validate().is_ok());
        assert!(EscalationRule::Flat(Money::ZERO).validate().is_ok());
        assert!(EscalationRule::Percent(-1.0).validate().is_err());
        assert!(EscalationRule::Percent(f64::NAN).validate().is_err());
        assert!(EscalationRule::Flat(Money::from_cents(-1)).validate().is_err());
    }

    #[test]
    fn test_apply_overflow() {
        let rule = EscalationRule::Flat(Money::from_cents(1));
        let result = rule.apply(Money::from_cents(i64::MAX));
        assert!(matches!(result, Err(ScheduleError::RentOverflow(_))));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "5%".parse::<EscalationRule>().unwrap(),
            EscalationRule::Percent(5.0)
        );
        assert_eq!(
            " 2.5 % ".parse::<EscalationRule>().unwrap(),
            EscalationRule::Percent(2.5)
        );
        assert_eq!(
            "$150.00".parse::<EscalationRule>().unwrap(),
            EscalationRule::Flat(Money::from_cents(15_000))
        );
        assert_eq!(
            "NONE".parse::<EscalationRule>().unwrap(),
            EscalationRule::none()
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("abc%".parse::<EscalationRule>().is_err());
        assert!("lots".parse::<EscalationRule>().is_err());
        assert!("-3%".parse::<EscalationRule>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(EscalationRule::Percent(5.0).to_string(), "+5%");
        assert_eq!(
            EscalationRule::Flat(Money::from_cents(15_000)).to_string(),
            "+150.00 flat"
        );
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&EscalationRule::Percent(5.0)).unwrap();
        assert_eq!(json, r#"{"mode":"percent","value":5.0}"#);

        let rule: EscalationRule =
            serde_json::from_str(r#"{"mode":"flat","value":15000}"#).unwrap();
        assert_eq!(rule, EscalationRule::Flat(Money::from_cents(15_000)));
    }
}
