//! Monetary amounts held as integer cents.
//!
//! Every amount in leasebook is a whole number of cents. Conversions from
//! major units (dollars as `f64`) happen once at the boundary and round half
//! away from zero; percentage scaling rounds back to cents after each step.
//!
//! # Examples
//!
//! ```
//! use lease_core::types::money::Money;
//!
//! let rent = Money::from_major(2000.0).unwrap();
//! assert_eq!(rent.cents(), 200_000);
//!
//! let raised = rent.scale_percent(5.0).unwrap();
//! assert_eq!(raised.to_string(), "2100.00");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::MoneyError;

/// Largest magnitude (in cents) accepted from floating point input.
///
/// Beyond 2^53 an `f64` can no longer represent every integer cent.
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

/// A monetary amount in integer cents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from a number of cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates an amount from major units, rounding to the nearest cent.
    ///
    /// # Errors
    ///
    /// `MoneyError::NonFinite` for NaN or infinities, `MoneyError::OutOfRange`
    /// when the amount cannot be held exactly in cents.
    ///
    /// # Examples
    ///
    /// ```
    /// use lease_core::types::money::Money;
    ///
    /// assert_eq!(Money::from_major(12.346).unwrap().cents(), 1235);
    /// assert!(Money::from_major(f64::NAN).is_err());
    /// ```
    pub fn from_major(amount: f64) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::NonFinite(amount));
        }
        let cents = (amount * 100.0).round();
        if cents.abs() > MAX_EXACT_CENTS {
            return Err(MoneyError::OutOfRange(amount));
        }
        Ok(Money(cents as i64))
    }

    /// Returns the amount in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount in major units.
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns whether the amount is below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, failing on overflow.
    pub fn checked_add(self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Subtracts `other` from `self`, failing on overflow.
    pub fn checked_sub(self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Scales the amount by `(1 + percent / 100)` and rounds to the nearest cent.
    ///
    /// # Examples
    ///
    /// ```
    /// use lease_core::types::money::Money;
    ///
    /// let rent = Money::from_cents(210_000);
    /// assert_eq!(rent.scale_percent(5.0).unwrap(), Money::from_cents(220_500));
    /// assert_eq!(rent.scale_percent(0.0).unwrap(), rent);
    /// ```
    pub fn scale_percent(self, percent: f64) -> Result<Money, MoneyError> {
        if !percent.is_finite() {
            return Err(MoneyError::NonFinite(percent));
        }
        let scaled = (self.0 as f64 * (100.0 + percent) / 100.0).round();
        if !scaled.is_finite() || scaled.abs() > MAX_EXACT_CENTS {
            return Err(MoneyError::OutOfRange(scaled / 100.0));
        }
        Ok(Money(scaled as i64))
    }

    /// Sums amounts, failing on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use lease_core::types::money::Money;
    ///
    /// let total = Money::checked_sum([Money::from_cents(150), Money::from_cents(250)]).unwrap();
    /// assert_eq!(total, Money::from_cents(400));
    /// ```
    pub fn checked_sum<I>(amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.checked_add(amount))
    }
}

impl fmt::Display for Money {
    /// Formats as major units with exactly two decimals (e.g. `-12.05`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Parses an amount in major units.
    ///
    /// Accepts an optional leading `$` and thousands separators:
    /// "2100", "2,100.00", "$2,100.5".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .trim()
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect();
        let amount: f64 = cleaned
            .parse()
            .map_err(|_| MoneyError::ParseError(format!("'{}' is not an amount", s)))?;
        Money::from_major(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_major_rounds_to_cents() {
        assert_eq!(Money::from_major(2000.0).unwrap().cents(), 200_000);
        assert_eq!(Money::from_major(0.1).unwrap().cents(), 10);
        assert_eq!(Money::from_major(12.346).unwrap().cents(), 1235);
        assert_eq!(Money::from_major(-12.346).unwrap().cents(), -1235);
    }

    #[test]
    fn test_from_major_rejects_non_finite() {
        assert!(matches!(
            Money::from_major(f64::NAN),
            Err(MoneyError::NonFinite(_))
        ));
        assert!(matches!(
            Money::from_major(f64::INFINITY),
            Err(MoneyError::NonFinite(_))
        ));
        assert!(matches!(
            Money::from_major(1e300),
            Err(MoneyError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_to_major() {
        assert_relative_eq!(Money::from_cents(210_050).to_major(), 2100.5, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_percent() {
        let rent = Money::from_cents(200_000);
        assert_eq!(rent.scale_percent(5.0).unwrap().cents(), 210_000);
        assert_eq!(rent.scale_percent(2.5).unwrap().cents(), 205_000);
        // 1234.56 * 1.03 = 1271.5968 -> 1271.60
        assert_eq!(
            Money::from_cents(123_456).scale_percent(3.0).unwrap().cents(),
            127_160
        );
        assert!(rent.scale_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(100);
        let b = Money::from_cents(250);
        assert_eq!(a.checked_add(b).unwrap(), Money::from_cents(350));
        assert_eq!(a.checked_sub(b).unwrap(), Money::from_cents(-150));
        assert_eq!(
            Money::from_cents(i64::MAX).checked_add(a),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_checked_sum_empty_is_zero() {
        assert_eq!(Money::checked_sum(Vec::new()).unwrap(), Money::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(220_500).to_string(), "2205.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-1205).to_string(), "-12.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2100".parse::<Money>().unwrap().cents(), 210_000);
        assert_eq!("2,100.00".parse::<Money>().unwrap().cents(), 210_000);
        assert_eq!("$2,100.5".parse::<Money>().unwrap().cents(), 210_050);
        assert!(matches!(
            "twelve".parse::<Money>(),
            Err(MoneyError::ParseError(_))
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_cents(1) > Money::ZERO);
        assert!(Money::from_cents(-1).is_negative());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_is_cents() {
        let json = serde_json::to_string(&Money::from_cents(210_000)).unwrap();
        assert_eq!(json, "210000");
        let parsed: Money = serde_json::from_str("199").unwrap();
        assert_eq!(parsed, Money::from_cents(199));
    }
}
