//! Aggregate statistics over a comparison selection.

use crate::catalog::Item;
use rust_decimal::{Decimal, RoundingStrategy};

/// Minimum number of items for a summary to be meaningful.
pub const MIN_SUMMARY_ITEMS: usize = 2;

/// Statistics derived from the selected items.
///
/// Always computed from the current selection; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSummary<'a> {
    /// Highest-priced item. Ties go to the earliest selected.
    pub most_expensive: &'a Item,
    /// Lowest-priced item. Ties go to the earliest selected.
    pub cheapest: &'a Item,
    /// Mean price rounded to whole currency units.
    pub average_price: Decimal,
    /// Difference between the highest and lowest price.
    pub price_spread: Decimal,
}

impl<'a> ComparisonSummary<'a> {
    /// Compute the summary, or `None` when fewer than two items are given
    /// or the prices cannot be totalled without overflowing `Decimal`.
    pub fn compute(items: &'a [Item]) -> Option<Self> {
        if items.len() < MIN_SUMMARY_ITEMS {
            return None;
        }

        let (first, rest) = items.split_first()?;
        let (mut most_expensive, mut cheapest) = (first, first);
        let mut total = first.price;

        for item in rest {
            if item.price > most_expensive.price {
                most_expensive = item;
            }
            if item.price < cheapest.price {
                cheapest = item;
            }
            total = total.checked_add(item.price)?;
        }

        let average_price = total
            .checked_div(Decimal::from(items.len()))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let price_spread = most_expensive.price.checked_sub(cheapest.price)?;

        Some(Self {
            most_expensive,
            cheapest,
            average_price,
            price_spread,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rarity;
    use rust_decimal_macros::dec;

    fn item(id: u32, name: &str, price: Decimal) -> Item {
        Item::new(id, name, "", Rarity::Rare, price, "Weapon")
    }

    #[test]
    fn test_three_items_first_max_wins() {
        let items = vec![
            item(1, "A", dec!(100)),
            item(2, "B", dec!(300)),
            item(3, "C", dec!(300)),
        ];
        let summary = ComparisonSummary::compute(&items).unwrap();

        assert_eq!(summary.most_expensive.name, "B");
        assert_eq!(summary.cheapest.name, "A");
        // 700 / 3 = 233.33
        assert_eq!(summary.average_price, dec!(233));
        assert_eq!(summary.price_spread, dec!(200));
    }

    #[test]
    fn test_two_items() {
        let items = vec![item(1, "X", dec!(50)), item(2, "Y", dec!(150))];
        let summary = ComparisonSummary::compute(&items).unwrap();

        assert_eq!(summary.most_expensive.name, "Y");
        assert_eq!(summary.average_price, dec!(100));
        assert_eq!(summary.price_spread, dec!(100));
    }

    #[test]
    fn test_fewer_than_two_items_has_no_summary() {
        assert!(ComparisonSummary::compute(&[]).is_none());
        assert!(ComparisonSummary::compute(&[item(1, "A", dec!(1))]).is_none());
    }

    #[test]
    fn test_cheapest_tie_goes_to_first() {
        let items = vec![
            item(1, "A", dec!(20)),
            item(2, "B", dec!(20)),
            item(3, "C", dec!(40)),
        ];
        let summary = ComparisonSummary::compute(&items).unwrap();
        assert_eq!(summary.cheapest.name, "A");
        assert_eq!(summary.most_expensive.name, "C");
    }

    #[test]
    fn test_equal_prices() {
        let items = vec![item(1, "A", dec!(75)), item(2, "B", dec!(75))];
        let summary = ComparisonSummary::compute(&items).unwrap();
        assert_eq!(summary.most_expensive.name, "A");
        assert_eq!(summary.price_spread, Decimal::ZERO);
    }

    #[test]
    fn test_average_midpoint_rounds_up() {
        let items = vec![item(1, "A", dec!(1)), item(2, "B", dec!(2))];
        let summary = ComparisonSummary::compute(&items).unwrap();
        assert_eq!(summary.average_price, dec!(2));
    }

    #[test]
    fn test_price_overflow_yields_no_summary() {
        let items = vec![
            item(1, "A", dec!(0.5)),
            item(2, "B", dec!(0.5)),
            item(3, "C", Decimal::MAX),
        ];
        assert!(ComparisonSummary::compute(&items).is_none());

        let items = vec![item(1, "A", Decimal::MIN), item(2, "B", Decimal::MAX)];
        assert!(ComparisonSummary::compute(&items).is_none());
    }

    #[test]
    fn test_largest_price_alone_still_summarised() {
        let items = vec![item(1, "A", Decimal::ZERO), item(2, "B", Decimal::MAX)];
        let summary = ComparisonSummary::compute(&items).unwrap();
        assert_eq!(summary.most_expensive.name, "B");
        assert_eq!(summary.price_spread, Decimal::MAX);
    }

    #[test]
    fn test_average_is_order_independent() {
        let a = vec![
            item(1, "A", dec!(0.10)),
            item(2, "B", dec!(0.20)),
            item(3, "C", dec!(4500)),
        ];
        let mut b = a.clone();
        b.reverse();

        assert_eq!(
            ComparisonSummary::compute(&a).unwrap().average_price,
            ComparisonSummary::compute(&b).unwrap().average_price
        );
    }
}
