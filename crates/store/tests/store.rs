//! Store behaviour against an in-memory SQLite database.

use chrono::{NaiveDate, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use brewsim_accounting::DEFAULT_OPENING_CENTS;
use brewsim_core::{MenuItemId, StockItemId};
use brewsim_inventory::StockItem;
use brewsim_menu::{MenuCategory, MenuItem};
use brewsim_sales::{OrderDraft, PaymentMethod};
use brewsim_store::{SaleRecord, ShopStore, seed_if_empty};

async fn fresh_store() -> ShopStore {
    let store = ShopStore::in_memory().await.unwrap();
    store.init_schema().await.unwrap();
    store
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
}

fn sale_of(menu_item_id: MenuItemId, quantity: i64, unit_price_cents: i64, d: u32) -> SaleRecord {
    let mut draft = OrderDraft::new(
        None,
        None,
        Utc.with_ymd_and_hms(2026, 8, d, 14, 30, 0).unwrap(),
        PaymentMethod::Card,
    );
    draft.add_line(menu_item_id, quantity, unit_price_cents).unwrap();
    SaleRecord {
        draft,
        stock_deductions: Vec::new(),
        business_date: date(d),
    }
}

#[tokio::test]
async fn schema_init_is_idempotent() {
    let store = fresh_store().await;
    store.init_schema().await.unwrap();
    assert!(store.list_customers().await.unwrap().is_empty());
}

#[tokio::test]
async fn seeding_runs_once_and_populates_all_tables() {
    let store = fresh_store().await;
    let mut rng = StdRng::seed_from_u64(7);

    assert!(seed_if_empty(&store, &mut rng).await.unwrap());
    assert!(!seed_if_empty(&store, &mut rng).await.unwrap());

    let overview = store.overview().await.unwrap();
    assert_eq!(overview.customers, 30);
    assert_eq!(overview.employees, 7);
    assert_eq!(overview.menu_items, 10);
    assert_eq!(overview.orders, 0);
    let balance = overview.latest_balance_cents.unwrap();
    assert!((100_000..=500_000).contains(&balance));
    assert_eq!(store.list_stock().await.unwrap().len(), 7);
}

#[tokio::test]
async fn first_sale_on_empty_ledger_rolls_forward_from_baseline() {
    let store = fresh_store().await;
    let item = MenuItem::new("Mocha", MenuCategory::Coffee, 450, 80).unwrap();
    let item_id = store.insert_menu_item(&item).await.unwrap();

    // First order of $4.50 creates today's row at 1000.00 + 4.50.
    store.record_sale(&sale_of(item_id, 1, 450, 12)).await.unwrap();

    let row = store.balance_for(date(12)).await.unwrap().unwrap();
    assert_eq!(row.balance_cents, DEFAULT_OPENING_CENTS + 450);
}

#[tokio::test]
async fn same_day_sales_share_one_balance_row() {
    let store = fresh_store().await;
    let item = MenuItem::new("Latte", MenuCategory::Coffee, 400, 70).unwrap();
    let item_id = store.insert_menu_item(&item).await.unwrap();

    store.record_sale(&sale_of(item_id, 1, 400, 12)).await.unwrap();
    store.record_sale(&sale_of(item_id, 2, 400, 12)).await.unwrap();

    let balances = store.list_balances().await.unwrap();
    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].balance_cents, DEFAULT_OPENING_CENTS + 400 + 800);
}

#[tokio::test]
async fn next_day_row_carries_prior_closing_balance() {
    let store = fresh_store().await;
    let item = MenuItem::new("Tea", MenuCategory::Tea, 250, 30).unwrap();
    let item_id = store.insert_menu_item(&item).await.unwrap();

    store.record_sale(&sale_of(item_id, 1, 250, 12)).await.unwrap();
    store.record_sale(&sale_of(item_id, 1, 250, 13)).await.unwrap();

    let day_two = store.balance_for(date(13)).await.unwrap().unwrap();
    assert_eq!(day_two.balance_cents, DEFAULT_OPENING_CENTS + 250 + 250);
    assert_eq!(store.list_balances().await.unwrap().len(), 2);
}

#[tokio::test]
async fn stock_deduction_floors_at_zero() {
    let store = fresh_store().await;
    let item = MenuItem::new("Bagel", MenuCategory::Pastry, 200, 70).unwrap();
    let item_id = store.insert_menu_item(&item).await.unwrap();
    let stock_id = store
        .insert_stock_item(&StockItem {
            id: StockItemId::unassigned(),
            item_name: "Bagels".to_string(),
            quantity_on_hand: 2.0,
            reorder_level: 5.0,
            unit: "pcs".to_string(),
        })
        .await
        .unwrap();

    let mut sale = sale_of(item_id, 3, 200, 12);
    sale.add_deduction(stock_id, 3.0);
    store.record_sale(&sale).await.unwrap();

    let stock = store.list_stock().await.unwrap();
    assert_eq!(stock[0].quantity_on_hand, 0.0);
}

#[tokio::test]
async fn restocks_top_up_and_debit_in_one_pass() {
    let store = fresh_store().await;
    let milk = MenuItem::new("Milk", MenuCategory::Other, 150, 70).unwrap();
    store.insert_menu_item(&milk).await.unwrap();
    let stock_id = store
        .insert_stock_item(&StockItem {
            id: StockItemId::unassigned(),
            item_name: "Milk".to_string(),
            quantity_on_hand: 8.0,
            reorder_level: 10.0,
            unit: "L".to_string(),
        })
        .await
        .unwrap();

    let stock = store.list_stock().await.unwrap();
    let plan = stock[0].plan_restock(20.0, 70).unwrap();
    assert_eq!(plan.stock_id, stock_id);
    store.apply_restocks(&[plan], date(12)).await.unwrap();

    let stock = store.list_stock().await.unwrap();
    assert_eq!(stock[0].quantity_on_hand, 20.0);
    let row = store.balance_for(date(12)).await.unwrap().unwrap();
    assert_eq!(row.balance_cents, DEFAULT_OPENING_CENTS - 840);
}

#[tokio::test]
async fn receipt_resolves_lines_and_names() {
    let store = fresh_store().await;
    let item = MenuItem::new("Espresso", MenuCategory::Coffee, 300, 50).unwrap();
    let item_id = store.insert_menu_item(&item).await.unwrap();

    let order_id = store.record_sale(&sale_of(item_id, 2, 300, 12)).await.unwrap();

    let receipt = store.receipt(order_id).await.unwrap().unwrap();
    assert_eq!(receipt.total_cents, 600);
    assert_eq!(receipt.customer_name, None); // walk-in
    assert_eq!(receipt.lines.len(), 1);
    assert_eq!(receipt.lines[0].item_name, "Espresso");
    assert_eq!(receipt.lines[0].subtotal_cents, 600);

    let missing = store.receipt(brewsim_core::OrderId::new(999)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn hourly_buckets_group_by_local_hour() {
    let store = fresh_store().await;
    let item = MenuItem::new("Latte", MenuCategory::Coffee, 400, 70).unwrap();
    let item_id = store.insert_menu_item(&item).await.unwrap();

    // Two sales at 14:30 UTC, one at 15:10 UTC; zero offset keeps hours as-is.
    store.record_sale(&sale_of(item_id, 1, 400, 12)).await.unwrap();
    store.record_sale(&sale_of(item_id, 1, 400, 12)).await.unwrap();
    let mut late = sale_of(item_id, 1, 400, 12);
    late.draft.order_time = Utc.with_ymd_and_hms(2026, 8, 12, 15, 10, 0).unwrap();
    store.record_sale(&late).await.unwrap();

    let offset = chrono::FixedOffset::east_opt(0).unwrap();
    let buckets = store.hourly_sales(date(12), offset).await.unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!((buckets[0].hour, buckets[0].orders, buckets[0].total_cents), (14, 2, 800));
    assert_eq!((buckets[1].hour, buckets[1].orders, buckets[1].total_cents), (15, 1, 400));
}

#[tokio::test]
async fn order_summaries_resolve_names_newest_first() {
    let store = fresh_store().await;
    let mut rng = StdRng::seed_from_u64(1);
    seed_if_empty(&store, &mut rng).await.unwrap();

    let menu = store.active_menu_items().await.unwrap();
    let customers = store.list_customers().await.unwrap();
    let employees = store.list_employees().await.unwrap();

    let mut draft = OrderDraft::new(
        Some(customers[0].id),
        Some(employees[0].id),
        Utc.with_ymd_and_hms(2026, 8, 12, 9, 0, 0).unwrap(),
        PaymentMethod::Mobile,
    );
    draft.add_line(menu[0].id, 1, menu[0].price_cents).unwrap();
    store
        .record_sale(&SaleRecord {
            draft,
            stock_deductions: Vec::new(),
            business_date: date(12),
        })
        .await
        .unwrap();

    let summaries = store.order_summaries(Some(5)).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].customer_name.as_deref(), Some(customers[0].name.as_str()));
    assert_eq!(summaries[0].employee_name.as_deref(), Some(employees[0].name.as_str()));
    assert_eq!(summaries[0].payment_method, PaymentMethod::Mobile);
}
