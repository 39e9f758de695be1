//! Plain-text rendering for the report views.

use chrono::NaiveDate;

use brewsim_accounting::DailyBalance;
use brewsim_core::{Cents, dollars};
use brewsim_inventory::StockItem;
use brewsim_menu::MenuItem;
use brewsim_parties::{Customer, Employee};
use brewsim_store::{HourlyBucket, OrderSummary, Overview, Receipt};

/// `$`-prefixed dollar rendering for the tables.
fn usd(cents: Cents) -> String {
    format!("${}", dollars(cents))
}

pub fn overview(overview: &Overview, reorders: &[String]) {
    println!("customers:  {}", overview.customers);
    println!("employees:  {}", overview.employees);
    println!("menu items: {}", overview.menu_items);
    println!("orders:     {}", overview.orders);
    match overview.latest_balance_cents {
        Some(cents) => println!("balance:    {}", usd(cents)),
        None => println!("balance:    (no activity yet)"),
    }
    if !reorders.is_empty() {
        println!();
        println!("recent reorders:");
        for entry in reorders {
            println!("  {entry}");
        }
    }
}

pub fn customers(customers: &[Customer]) {
    if customers.is_empty() {
        println!("no customers");
        return;
    }
    println!("{:<5} {:<24} {:<30} {:<14} {:>6}", "id", "name", "email", "phone", "pts");
    for c in customers {
        println!(
            "{:<5} {:<24} {:<30} {:<14} {:>6}",
            c.id, c.name, c.email, c.phone, c.loyalty_points
        );
    }
}

pub fn employees(employees: &[Employee]) {
    if employees.is_empty() {
        println!("no employees");
        return;
    }
    println!("{:<5} {:<24} {:<10} {:>10} {:<12}", "id", "name", "role", "wage/hr", "hired");
    for e in employees {
        println!(
            "{:<5} {:<24} {:<10} {:>10} {:<12}",
            e.id,
            e.name,
            e.role.as_str(),
            usd(e.hourly_wage_cents),
            e.hire_date
        );
    }
}

pub fn menu(items: &[MenuItem]) {
    if items.is_empty() {
        println!("no menu items");
        return;
    }
    println!("{:<5} {:<24} {:<8} {:>8} {:>8} {:<7}", "id", "name", "category", "price", "cost", "active");
    for item in items {
        println!(
            "{:<5} {:<24} {:<8} {:>8} {:>8} {:<7}",
            item.id,
            item.name,
            item.category.as_str(),
            usd(item.price_cents),
            usd(item.cost_cents),
            if item.is_active { "yes" } else { "no" }
        );
    }
}

pub fn inventory(stock: &[StockItem]) {
    if stock.is_empty() {
        println!("no stock items");
        return;
    }
    println!("{:<5} {:<24} {:>10} {:>10} {:<8} {:<6}", "id", "item", "on hand", "reorder", "unit", "low");
    for row in stock {
        println!(
            "{:<5} {:<24} {:>10.1} {:>10.1} {:<8} {:<6}",
            row.id,
            row.item_name,
            row.quantity_on_hand,
            row.reorder_level,
            row.unit,
            if row.needs_reorder() { "LOW" } else { "" }
        );
    }
}

pub fn balances(balances: &[DailyBalance]) {
    if balances.is_empty() {
        println!("no balance records");
        return;
    }
    println!("{:<12} {:>12}  note", "date", "balance");
    for b in balances {
        println!(
            "{:<12} {:>12}  {}",
            b.date,
            usd(b.balance_cents),
            b.note.as_deref().unwrap_or("")
        );
    }
}

pub fn orders(orders: &[OrderSummary]) {
    if orders.is_empty() {
        println!("no orders");
        return;
    }
    println!(
        "{:<6} {:<20} {:<20} {:<20} {:>9} {:<8}",
        "id", "time", "customer", "employee", "total", "paid"
    );
    for o in orders {
        println!(
            "{:<6} {:<20} {:<20} {:<20} {:>9} {:<8}",
            o.id,
            o.order_time.format("%Y-%m-%d %H:%M:%S"),
            o.customer_name.as_deref().unwrap_or("walk-in"),
            o.employee_name.as_deref().unwrap_or("-"),
            usd(o.total_cents),
            o.payment_method.as_str()
        );
    }
}

pub fn receipt(receipt: &Receipt) {
    println!("order #{}", receipt.order_id);
    println!("time:     {}", receipt.order_time.format("%Y-%m-%d %H:%M:%S"));
    println!(
        "customer: {}",
        receipt.customer_name.as_deref().unwrap_or("walk-in")
    );
    println!(
        "served by: {}",
        receipt.employee_name.as_deref().unwrap_or("-")
    );
    println!("paid by:  {}", receipt.payment_method.as_str());
    println!();
    for line in &receipt.lines {
        println!(
            "  {:<24} x{:<3} @ {:>8} = {:>9}",
            line.item_name,
            line.quantity,
            usd(line.unit_price_cents),
            usd(line.subtotal_cents)
        );
    }
    println!();
    println!("total: {}", usd(receipt.total_cents));
}

pub fn hourly(date: NaiveDate, buckets: &[HourlyBucket]) {
    if buckets.is_empty() {
        println!("no sales on {date}");
        return;
    }
    println!("sales for {date}");
    println!("{:<6} {:>7} {:>10}", "hour", "orders", "total");
    for b in buckets {
        println!("{:02}:00  {:>7} {:>10}", b.hour, b.orders, usd(b.total_cents));
    }
}
