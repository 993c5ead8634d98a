//! Static item catalog
//!
//! Maps purchasable item identifiers to their price in diamonds. Built once
//! at startup, read-only afterwards; nothing is persisted.

use std::collections::HashMap;

/// Price table for purchasable items.
#[derive(Debug, Clone)]
pub struct Catalog {
    prices: HashMap<&'static str, i64>,
}

impl Catalog {
    /// The standard deployment catalog.
    pub fn standard() -> Self {
        let prices = HashMap::from([
            ("pajamas", 50),
            ("lingerie", 75),
            ("cat_ears", 30),
            ("vip_pass", 40),
            ("wine_bottle", 12),
            ("control_charm", 20),
            ("flower_bouquet", 15),
        ]);
        Catalog { prices }
    }

    /// Price of an item in diamonds, or `None` for an unknown identifier.
    ///
    /// The Account Service currently treats `None` as price 0, matching the
    /// deployed behavior; callers that want to reject unknown items can do
    /// so here.
    pub fn price_of(&self, item: &str) -> Option<i64> {
        self.prices.get(item).copied()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
