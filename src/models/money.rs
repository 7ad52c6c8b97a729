//! Money type for representing currency amounts
//!
//! Internally stores amounts in sen (i64, hundredths of a ringgit) to avoid
//! floating-point precision issues. Provides exact arithmetic and the
//! two-decimal rendering used by the ledger file format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as whole sen (hundredths of the currency unit)
///
/// `Display` renders the canonical two-decimal form (`"50.00"`), which is
/// also the encoding used for the amount field of a ledger line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from sen
    pub const fn from_sen(sen: i64) -> Self {
        Self(sen)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in sen
    pub const fn sen(&self) -> i64 {
        self.0
    }

    /// Get the whole-ringgit portion (truncated toward zero)
    pub const fn ringgit(&self) -> i64 {
        self.0 / 100
    }

    /// Get the sen portion (0-99)
    pub const fn sen_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a decimal string
    ///
    /// Accepts `"12"`, `"12.5"`, `"12.50"` and negative forms. More than two
    /// fractional digits is an error rather than a silent truncation.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, digits) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        if digits.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let sen = match digits.split_once('.') {
            Some((whole, frac)) => {
                let units: i64 = whole
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

                if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(MoneyParseError::InvalidFormat(s.to_string()));
                }

                let mut frac_sen: i64 = frac
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
                if frac.len() == 1 {
                    frac_sen *= 10;
                }

                units * 100 + frac_sen
            }
            // Integer form - whole ringgit
            None => {
                digits
                    .parse::<i64>()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                    * 100
            }
        };

        Ok(Self(if negative { -sen } else { sen }))
    }

    /// Divide evenly across a number of days (truncating toward zero)
    ///
    /// Callers must guard against `days == 0`; the summary engine refuses to
    /// produce a report when no days remain in the month.
    pub const fn per_day(&self, days: u32) -> Self {
        Self(self.0 / days as i64)
    }

    /// Format with the RM currency prefix, e.g. `"RM50.00"` / `"-RM50.00"`
    pub fn display_rm(&self) -> String {
        if self.is_negative() {
            format!("-RM{}.{:02}", self.ringgit().abs(), self.sen_part())
        } else {
            format!("RM{}.{:02}", self.ringgit(), self.sen_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.ringgit().abs(), self.sen_part())
        } else {
            write!(f, "{}.{:02}", self.ringgit(), self.sen_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
