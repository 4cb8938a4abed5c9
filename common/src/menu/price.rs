use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

const CENTS_PER_UNIT: u64 = 100;

/// A non-negative amount of money, stored in minor units.
///
/// Integer storage keeps totals exact, so summing the same prices in any
/// order gives the same result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Builds a price from a whole amount, e.g. `Price::from_units(120)` is `120.00`.
    pub const fn from_units(units: u64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / CENTS_PER_UNIT, self.0 % CENTS_PER_UNIT)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.0 += rhs.0;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Price::from_units(120).to_string(), "120.00");
        assert_eq!(Price::from_cents(4005).to_string(), "40.05");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn sums_exactly() {
        let prices = [Price::from_cents(10), Price::from_cents(20), Price::from_cents(70)];
        let forward: Price = prices.iter().sum();
        let backward: Price = prices.iter().rev().sum();
        assert_eq!(forward, Price::from_units(1));
        assert_eq!(forward, backward);

        let empty: [Price; 0] = [];
        assert_eq!(empty.iter().sum::<Price>(), Price::ZERO);
    }
}
