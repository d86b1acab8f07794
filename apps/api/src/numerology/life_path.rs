//! Life path number: the DDMMYYYY digit-sum reduction.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// A single-digit life path number in `1..=9`.
///
/// Only produced by [`compute_life_path_number`], so the range holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LifePathNumber(u8);

impl LifePathNumber {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for LifePathNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sums the digits of `DDMMYYYY` and keeps reducing until a single digit remains.
///
/// Any valid calendar date has a non-zero day, so the result is never 0.
pub fn compute_life_path_number(date: NaiveDate) -> LifePathNumber {
    let digits = date.format("%d%m%Y").to_string();
    let mut total: u32 = digits.chars().filter_map(|c| c.to_digit(10)).sum();

    while total > 9 {
        total = digit_sum(total);
    }

    LifePathNumber(total as u8)
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}
