//! One-time database seeding with plausible shop data.
//!
//! Runs only when the customer table is empty, so it is safe to call on
//! every startup. Randomness comes from the caller's injected `Rng`.

use chrono::{Duration, Utc};
use rand::Rng;
use tracing::info;

use brewsim_accounting::DailyBalance;
use brewsim_core::{StockItemId, from_dollars};
use brewsim_inventory::StockItem;
use brewsim_menu::{MenuCategory, MenuItem};
use brewsim_parties::{Customer, Employee, EmployeeRole};

use crate::error::StoreError;
use crate::store::ShopStore;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Ben", "Clara", "Dev", "Elena", "Felix", "Grace", "Hugo", "Iris", "Jonas",
    "Kira", "Liam", "Mara", "Noah", "Olive", "Pavel", "Quinn", "Rosa", "Sam", "Tessa",
];

const LAST_NAMES: &[&str] = &[
    "Alvarez", "Brooks", "Chen", "Dietrich", "Ellis", "Fontaine", "Gupta", "Haines",
    "Ivanov", "Jensen", "Keller", "Lund", "Moreau", "Novak", "Okafor", "Petrov",
];

const MENU: &[(&str, MenuCategory, f64, f64)] = &[
    ("Espresso", MenuCategory::Coffee, 3.0, 0.5),
    ("Latte", MenuCategory::Coffee, 4.0, 0.7),
    ("Cappuccino", MenuCategory::Coffee, 4.0, 0.7),
    ("Americano", MenuCategory::Coffee, 3.5, 0.6),
    ("Mocha", MenuCategory::Coffee, 4.5, 0.8),
    ("Tea", MenuCategory::Tea, 2.5, 0.3),
    ("Hot Chocolate", MenuCategory::Other, 3.5, 0.6),
    ("Croissant", MenuCategory::Pastry, 3.0, 1.0),
    ("Muffin", MenuCategory::Pastry, 2.5, 0.8),
    ("Bagel", MenuCategory::Pastry, 2.0, 0.7),
];

const STOCK: &[(&str, f64, f64, &str)] = &[
    ("Espresso Beans", 20.0, 5.0, "kg"),
    ("Milk", 30.0, 10.0, "L"),
    ("Tea Leaves", 10.0, 2.0, "kg"),
    ("Chocolate Syrup", 5.0, 2.0, "L"),
    ("Croissants", 15.0, 5.0, "pcs"),
    ("Muffins", 15.0, 5.0, "pcs"),
    ("Bagels", 15.0, 5.0, "pcs"),
];

/// Populate an empty database with customers, staff, menu, stock, and an
/// opening balance. Returns `true` when seeding actually ran.
pub async fn seed_if_empty(
    store: &ShopStore,
    rng: &mut (impl Rng + ?Sized),
) -> Result<bool, StoreError> {
    if !store.list_customers().await?.is_empty() {
        return Ok(false);
    }

    let now = Utc::now();
    let today = now.date_naive();

    for i in 0..30 {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let customer = Customer::new(
            format!("{first} {last}"),
            format!("{}.{}{}@example.com", first.to_lowercase(), last.to_lowercase(), i),
            format!("555-01{i:02}"),
            rng.gen_range(0..=200),
            now - Duration::days(rng.gen_range(0..365)),
        )?;
        store.insert_customer(&customer).await?;
    }

    let roster = [
        (EmployeeRole::Barista, 3),
        (EmployeeRole::Cashier, 3),
        (EmployeeRole::Manager, 1),
    ];
    for (role, count) in roster {
        for _ in 0..count {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let wage = match role {
                EmployeeRole::Manager => 3000,
                _ => rng.gen_range(1500..=2500),
            };
            let employee = Employee::new(
                format!("{first} {last}"),
                role,
                wage,
                today - Duration::days(rng.gen_range(0..730)),
            )?;
            store.insert_employee(&employee).await?;
        }
    }

    for (name, category, price, cost) in MENU {
        let item = MenuItem::new(*name, *category, from_dollars(*price), from_dollars(*cost))?;
        store.insert_menu_item(&item).await?;
    }

    for (name, quantity, reorder_level, unit) in STOCK {
        let stock = StockItem {
            id: StockItemId::unassigned(),
            item_name: (*name).to_string(),
            quantity_on_hand: *quantity,
            reorder_level: *reorder_level,
            unit: (*unit).to_string(),
        };
        store.insert_stock_item(&stock).await?;
    }

    let opening = DailyBalance {
        id: 0,
        date: today,
        balance_cents: rng.gen_range(100_000..=500_000),
        note: Some("initial seed balance".to_string()),
    };
    store.insert_balance(&opening).await?;

    info!("seeded empty database");
    Ok(true)
}
