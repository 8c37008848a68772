use core::ops::{Add, Sub};
use core::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Error;

/// Amount in cents. Two fractional digits, like the `9(6)V99` field it models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(pub i64);

impl Money {
    pub const SCALE: i64 = 100; // 2 decimal places
    pub const TARGET_DECIMALS: u32 = 2;

    pub const ZERO: Money = Money(0);
    /// 999999.99, the largest balance or single amount the ledger accepts.
    pub const MAX: Money = Money(99_999_999);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_units(units: i64) -> Self {
        Self(units * Self::SCALE)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Rounds to cents (half to even). The limit is checked before rounding,
    /// so anything above 999999.99 is [`Error::AmountExceedsLimit`].
    pub fn from_decimal(value: Decimal) -> Result<Self, Error> {
        if value > Self::MAX.to_decimal() {
            return Err(Error::AmountExceedsLimit);
        }
        let rounded =
            value.round_dp_with_strategy(Self::TARGET_DECIMALS, RoundingStrategy::MidpointNearestEven);
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Self)
            .ok_or(Error::InvalidAmount)
    }

    pub fn from_decimal_str(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, Self::TARGET_DECIMALS)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAmount);
        }
        let value = Decimal::from_str(s).map_err(|_| Error::InvalidAmount)?;
        Money::from_decimal(value)
    }
}

impl TryFrom<f64> for Money {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(Error::InvalidAmount);
        }
        match Decimal::from_f64(value) {
            Some(value) => Money::from_decimal(value),
            // finite but beyond what a decimal can hold
            None if value > 0.0 => Err(Error::AmountExceedsLimit),
            None => Err(Error::InvalidAmount),
        }
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let minor = self.0;
        let neg = minor < 0;
        let abs = minor.abs();
        let int_part = abs / Self::SCALE;
        let frac_part = abs % Self::SCALE;
        if neg {
            write!(f, "-{}.{:02}", int_part, frac_part)
        } else {
            write!(f, "{}.{:02}", int_part, frac_part)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Money;
    use crate::domain::Error;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money(100_000).to_string(), "1000.00");
        assert_eq!(Money(100_667).to_string(), "1006.67");
        assert_eq!(Money(5).to_string(), "0.05");
        assert_eq!(Money(-5).to_string(), "-0.05");
        assert_eq!(Money::MAX.to_string(), "999999.99");
    }

    #[test]
    fn parses_decimal_text() {
        assert_eq!(Money::from_decimal_str("12.34"), Some(Money(1234)));
        assert_eq!(Money::from_decimal_str(" 100 "), Some(Money(10_000)));
        assert_eq!(Money::from_decimal_str("0.5"), Some(Money(50)));
        assert_eq!(Money::from_decimal_str("-1"), Some(Money(-100)));
    }

    #[test]
    fn bankers_round_half_even() {
        assert_eq!(Money::from_decimal_str("1.225"), Some(Money(122)));
        assert_eq!(Money::from_decimal_str("1.235"), Some(Money(124)));
        assert_eq!(Money::from_decimal_str("1.2351"), Some(Money(124)));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(Money::from_decimal_str(""), None);
        assert_eq!(Money::from_decimal_str("abc"), None);
        assert_eq!(Money::from_decimal_str("12abc"), None);
        assert!(matches!("NaN".parse::<Money>(), Err(Error::InvalidAmount)));
    }

    #[test]
    fn converts_from_float() {
        assert_eq!(Money::try_from(12.34).unwrap(), Money(1234));
        assert!(matches!(
            Money::try_from(999_999.99 + 1.0),
            Err(Error::AmountExceedsLimit)
        ));
        assert!(matches!(Money::try_from(f64::NAN), Err(Error::InvalidAmount)));
        assert!(matches!(Money::try_from(f64::INFINITY), Err(Error::InvalidAmount)));
    }

    #[test]
    fn oversized_amounts_exceed_limit() {
        assert!(matches!(
            "100000000000000000000".parse::<Money>(),
            Err(Error::AmountExceedsLimit)
        ));
        assert!(matches!(
            "1000000".parse::<Money>(),
            Err(Error::AmountExceedsLimit)
        ));
        assert!(matches!(Money::try_from(1e20), Err(Error::AmountExceedsLimit)));
        assert!(matches!(Money::try_from(1e30), Err(Error::AmountExceedsLimit)));
        assert_eq!("999999.99".parse::<Money>().unwrap(), Money::MAX);
    }

    #[test]
    fn limit_is_checked_before_rounding() {
        assert!(matches!(
            "999999.994".parse::<Money>(),
            Err(Error::AmountExceedsLimit)
        ));
        assert_eq!("999999.985".parse::<Money>().unwrap(), Money(99_999_998));
    }

    #[test]
    fn arithmetic_stays_in_cents() {
        let total = Money::from_units(1000) + Money(1234) - Money(567);
        assert_eq!(total, Money(100_667));
        assert_eq!(Money::from_cents(1234), Money(1234));
        assert_eq!(Money(1234).to_decimal().to_string(), "12.34");
    }
}
