use core::str::FromStr;
use serde::{Deserialize, Serialize};

use brewsim_core::{Cents, DomainError, DomainResult, MenuItemId};

/// Menu sections the shop sells from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Coffee,
    Tea,
    Pastry,
    Other,
}

impl MenuCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Coffee => "coffee",
            MenuCategory::Tea => "tea",
            MenuCategory::Pastry => "pastry",
            MenuCategory::Other => "other",
        }
    }
}

impl FromStr for MenuCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coffee" => Ok(MenuCategory::Coffee),
            "tea" => Ok(MenuCategory::Tea),
            "pastry" => Ok(MenuCategory::Pastry),
            "other" => Ok(MenuCategory::Other),
            unknown => Err(DomainError::validation(format!("unknown category: {unknown}"))),
        }
    }
}

/// A sellable menu item. Static after seeding; only active items are sold.
///
/// `price_cents` is what the customer pays, `cost_cents` is the per-unit
/// ingredient cost used when restocking inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub category: MenuCategory,
    pub price_cents: Cents,
    pub cost_cents: Cents,
    pub is_active: bool,
}

impl MenuItem {
    /// Validate and build a menu item that has not been persisted yet.
    pub fn new(
        name: impl Into<String>,
        category: MenuCategory,
        price_cents: Cents,
        cost_cents: Cents,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if price_cents < 0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if cost_cents < 0 {
            return Err(DomainError::validation("cost cannot be negative"));
        }
        Ok(Self {
            id: MenuItemId::unassigned(),
            name,
            category,
            price_cents,
            cost_cents,
            is_active: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_are_active() {
        let item = MenuItem::new("Latte", MenuCategory::Coffee, 400, 70).unwrap();
        assert!(item.is_active);
        assert_eq!(item.price_cents, 400);
    }

    #[test]
    fn rejects_negative_price() {
        let err = MenuItem::new("Latte", MenuCategory::Coffee, -1, 70).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn category_round_trips_through_str() {
        for cat in [
            MenuCategory::Coffee,
            MenuCategory::Tea,
            MenuCategory::Pastry,
            MenuCategory::Other,
        ] {
            assert_eq!(cat.as_str().parse::<MenuCategory>().unwrap(), cat);
        }
    }
}
