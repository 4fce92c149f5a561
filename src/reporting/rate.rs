//! Rates and two-decimal percentages over category counts.
//!
//! Rounding is half away from zero on the value scaled by 100, so a tie that
//! is exactly representable (`12.125`) rounds up to `12.13`. Ties are judged on
//! the scaled binary value, not on the decimal text of the input.

use serde::Serialize;

#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Fraction of `total` made up by `count`.
///
/// `total` must be non-zero.
#[must_use]
pub fn rate(count: usize, total: usize) -> f64 {
    debug_assert!(total > 0, "rate denominator must be positive");
    count_to_f64(count) / count_to_f64(total)
}

/// Round to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `total` made up by `count`, rounded to two decimals
#[must_use]
pub fn percentage(count: usize, total: usize) -> Percent {
    Percent(round2(100.0 * rate(count, total)))
}

/// A percentage already rounded to two decimals.
///
/// Displays like the legacy report text: shortest exact form, with at least
/// one fractional digit (`60.0`, `12.5`, `33.33`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Percent {
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Sum of two already-rounded percentages, re-rounded.
    ///
    /// Aggregate categories are reported this way rather than recomputed from
    /// their summed counts, so the result can differ from
    /// `percentage(a_count + b_count, total)` in the last digit.
    #[must_use]
    pub fn sum_rounded(self, other: Percent) -> Percent {
        Percent(round2(self.0 + other.0))
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A count paired with its percentage of some total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tally {
    pub count: usize,
    pub pct: Percent,
}

impl Tally {
    #[must_use]
    pub fn of(count: usize, total: usize) -> Self {
        Self {
            count,
            pct: percentage(count, total),
        }
    }
}
