//! Order pricing.
//!
//! A [`PriceIndex`] is built fresh from the catalog for every report and dropped with it, so
//! totals always reflect the catalog as read at the start of that report.
//!
//! Line items whose name has no catalog entry are priced at zero rather than rejected, and
//! quantities are taken as stored: a negative quantity lowers the total.

use crate::models::{EnrichedOrder, FoodItem, FoodOrder, LineItem};
use std::collections::HashMap;

/// Mapping from item name to unit price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceIndex {
    prices: HashMap<String, f64>,
}

impl PriceIndex {
    pub fn price_of(&self, name: &str) -> Option<f64> {
        self.prices.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Builds the name-to-price mapping from the catalog in a single pass.
///
/// Duplicate names are not rejected: the last one seen in iteration order wins, even when its
/// price was unusable and read as 0.
pub fn build_price_index<'a, I>(catalog: I) -> PriceIndex
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    let mut prices = HashMap::new();
    for item in catalog {
        prices.insert(item.name.clone(), item.price);
    }
    PriceIndex { prices }
}

/// Sums `unit price × quantity` over the line items.
pub fn order_total(items: &[LineItem], index: &PriceIndex) -> f64 {
    items.iter().fold(0.0, |sum, item| {
        let unit_price = item
            .name
            .as_deref()
            .and_then(|name| index.price_of(name))
            .unwrap_or(0.0);
        sum + unit_price * item.quantity
    })
}

/// Copies the order and attaches its computed total. The order itself is left untouched.
pub fn enrich_order(order: &FoodOrder, index: &PriceIndex) -> EnrichedOrder {
    let total = order_total(order.items(), index);
    EnrichedOrder::new(order.document().clone(), total)
}
