//! Value objects for money and currency.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Money amount backed by an exact decimal to avoid floating point drift.
///
/// Arithmetic never rounds on its own. Rounding happens only where a
/// caller asks for it, always with [`Money::round_half_even`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a money amount from a decimal value in whole currency units.
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a money amount from a count of cents (e.g., 1050 = 10.50).
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money(self.0 * Decimal::from(quantity))
    }

    /// Scales by an arbitrary decimal factor without rounding.
    pub fn scale(&self, factor: Decimal) -> Money {
        Money(self.0 * factor)
    }

    /// Adds two amounts, returning `None` if the sum is not representable.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    pub fn checked_multiply(&self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(Decimal::from(quantity)).map(Money)
    }

    /// Scales by a decimal factor, returning `None` on overflow.
    pub fn checked_scale(&self, factor: Decimal) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Rounds to `dp` decimal places, resolving exact midpoints to the even
    /// neighbour (banker's rounding).
    pub fn round_half_even(&self, dp: u32) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Formats the amount for display in the given currency, with thousands
    /// separators and two decimals (e.g. `$1,234.50`).
    pub fn format(&self, currency: &Currency) -> String {
        let mut rounded = self.round_half_even(2).0;
        rounded.rescale(2);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = rounded.abs().to_string();
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        format!(
            "{sign}{}{}.{fraction}",
            currency.symbol(),
            group_thousands(whole)
        )
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rounded = self.round_half_even(2).0;
        rounded.rescale(2);
        write!(f, "{rounded}")
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Display currency.
///
/// Codes outside the known set are kept verbatim and double as their own
/// symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Other(String),
}

impl Currency {
    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Other(code) => code,
        }
    }

    /// Returns the display symbol.
    pub fn symbol(&self) -> &str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Other(code) => code,
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "USD" => Currency::Usd,
            "EUR" => Currency::Eur,
            "GBP" => Currency::Gbp,
            "JPY" => Currency::Jpy,
            other => Currency::Other(other.to_string()),
        })
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Applies a percentage discount to a price.
///
/// The result is not rounded.
pub fn apply_discount(price: Money, discount_percent: Decimal) -> Result<Money, DomainError> {
    if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
        return Err(DomainError::InvalidPercentage {
            name: "discount",
            value: discount_percent,
        });
    }

    Ok(price.scale(Decimal::ONE - discount_percent / Decimal::ONE_HUNDRED))
}
