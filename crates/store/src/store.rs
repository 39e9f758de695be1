//! The `ShopStore` handle: connection management, typed reads, and the two
//! transactional write operations.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::path::Path;
use tracing::debug;

use brewsim_accounting::DailyBalance;
use brewsim_core::{Cents, CustomerId, EmployeeId, MenuItemId, OrderId, StockItemId};
use brewsim_inventory::{RestockPlan, StockItem};
use brewsim_menu::{MenuCategory, MenuItem};
use brewsim_parties::{Customer, Employee, EmployeeRole};
use brewsim_sales::{Order, OrderLine, PaymentMethod};

use crate::error::StoreError;
use crate::sale::SaleRecord;
use crate::schema::SCHEMA;

/// Handle to the shop's SQLite database.
///
/// Cheap to clone (wraps a pool). The pool is capped at one connection:
/// the system is single-writer by design and this keeps `:memory:`
/// databases stable in tests.
#[derive(Debug, Clone)]
pub struct ShopStore {
    pub(crate) pool: SqlitePool,
}

impl ShopStore {
    /// Open (creating if missing) the database file at `path`.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = Self::pool_options().connect_with(options).await?;
        Ok(Self { pool })
    }

    /// In-memory database, used by tests.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);
        let pool = Self::pool_options().connect_with(options).await?;
        Ok(Self { pool })
    }

    fn pool_options() -> SqlitePoolOptions {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    }

    /// Create all tables if they do not exist yet.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        debug!("schema initialized");
        Ok(())
    }

    // ---- reads -----------------------------------------------------------

    pub async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, name, email, phone, loyalty_points, created_at \
             FROM customers ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_customer).collect()
    }

    pub async fn recent_customers(&self, limit: i64) -> Result<Vec<Customer>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, name, email, phone, loyalty_points, created_at \
             FROM customers ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_customer).collect()
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, name, role, hourly_wage_cents, hire_date \
             FROM employees ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_employee).collect()
    }

    pub async fn list_menu_items(&self) -> Result<Vec<MenuItem>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, name, category, price_cents, cost_cents, is_active \
             FROM menu_items ORDER BY category, name",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_menu_item).collect()
    }

    /// Active menu items in rowid order (the order the simulator samples in).
    pub async fn active_menu_items(&self) -> Result<Vec<MenuItem>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, name, category, price_cents, cost_cents, is_active \
             FROM menu_items WHERE is_active = 1 ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_menu_item).collect()
    }

    /// Stock rows in rowid order; fuzzy matching takes the first hit, so the
    /// ordering here is what makes matches deterministic.
    pub async fn list_stock(&self) -> Result<Vec<StockItem>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, item_name, quantity_on_hand, reorder_level, unit \
             FROM inventory ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_stock).collect()
    }

    pub async fn latest_balance(&self) -> Result<Option<DailyBalance>, StoreError> {
        let row = sqlx::query(
            "SELECT id, date, balance_cents, note \
             FROM account_balance ORDER BY date DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_balance).transpose()
    }

    pub async fn list_balances(&self) -> Result<Vec<DailyBalance>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, date, balance_cents, note \
             FROM account_balance ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(map_balance).collect()
    }

    pub async fn balance_for(&self, date: NaiveDate) -> Result<Option<DailyBalance>, StoreError> {
        let row = sqlx::query(
            "SELECT id, date, balance_cents, note FROM account_balance WHERE date = ?",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_balance).transpose()
    }

    pub async fn order(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query(
            "SELECT id, customer_id, employee_id, order_time, total_cents, payment_method \
             FROM orders WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_order).transpose()
    }

    pub async fn order_lines(&self, id: OrderId) -> Result<Vec<OrderLine>, StoreError> {
        let rows = sqlx::query(
            "SELECT menu_item_id, quantity, unit_price_cents \
             FROM order_items WHERE order_id = ? ORDER BY id",
        )
        .bind(id.value())
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|row| {
                Ok(OrderLine {
                    menu_item_id: MenuItemId::new(row.try_get("menu_item_id")?),
                    quantity: row.try_get("quantity")?,
                    unit_price_cents: row.try_get("unit_price_cents")?,
                })
            })
            .collect()
    }

    /// Unit cost of the menu item whose name equals `name` case-insensitively
    /// (lowest rowid wins), used to price restocks.
    pub async fn menu_cost_for(&self, name: &str) -> Result<Option<Cents>, StoreError> {
        let row = sqlx::query(
            "SELECT cost_cents FROM menu_items WHERE LOWER(name) = LOWER(?) ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(match row {
            Some(row) => Some(row.try_get("cost_cents")?),
            None => None,
        })
    }

    // ---- writes ----------------------------------------------------------

    /// Commit one composed sale atomically: the order row, its lines, the
    /// stock deductions (floored at zero), and the credit to the balance row
    /// for the sale's business date (created via roll-forward if absent).
    ///
    /// Any error aborts the transaction; dropping it rolls everything back.
    pub async fn record_sale(&self, sale: &SaleRecord) -> Result<OrderId, StoreError> {
        let total = sale.draft.total_cents();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO orders (customer_id, employee_id, order_time, total_cents, payment_method) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(sale.draft.customer_id.map(i64::from))
        .bind(sale.draft.employee_id.map(i64::from))
        .bind(sale.draft.order_time)
        .bind(total)
        .bind(sale.draft.payment_method.as_str())
        .execute(&mut *tx)
        .await?;
        let order_id = OrderId::new(result.last_insert_rowid());

        for line in sale.draft.lines() {
            sqlx::query(
                "INSERT INTO order_items (order_id, menu_item_id, quantity, unit_price_cents) \
                 VALUES (?, ?, ?, ?)",
            )
            .bind(order_id.value())
            .bind(line.menu_item_id.value())
            .bind(line.quantity)
            .bind(line.unit_price_cents)
            .execute(&mut *tx)
            .await?;
        }

        for deduction in &sale.stock_deductions {
            sqlx::query(
                "UPDATE inventory SET quantity_on_hand = MAX(0.0, quantity_on_hand - ?) \
                 WHERE id = ?",
            )
            .bind(deduction.quantity)
            .bind(deduction.stock_id.value())
            .execute(&mut *tx)
            .await?;
        }

        ensure_balance_row(&mut tx, sale.business_date).await?;
        sqlx::query("UPDATE account_balance SET balance_cents = balance_cents + ? WHERE date = ?")
            .bind(total)
            .bind(sale.business_date)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(order_id = order_id.value(), total_cents = total, "sale committed");
        Ok(order_id)
    }

    /// Apply one reorder scan as a single transaction, independent of the
    /// sale that triggered it: top each planned row up by its shortfall and
    /// debit the cost from the business date's balance row.
    pub async fn apply_restocks(
        &self,
        plans: &[RestockPlan],
        business_date: NaiveDate,
    ) -> Result<(), StoreError> {
        if plans.is_empty() {
            return Ok(());
        }
        let mut tx = self.pool.begin().await?;
        ensure_balance_row(&mut tx, business_date).await?;

        for plan in plans {
            sqlx::query("UPDATE inventory SET quantity_on_hand = quantity_on_hand + ? WHERE id = ?")
                .bind(plan.amount)
                .bind(plan.stock_id.value())
                .execute(&mut *tx)
                .await?;
            sqlx::query(
                "UPDATE account_balance SET balance_cents = balance_cents - ? WHERE date = ?",
            )
            .bind(plan.total_cost_cents)
            .bind(business_date)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        debug!(restocks = plans.len(), "reorder scan committed");
        Ok(())
    }

    // ---- seed-time inserts ----------------------------------------------

    pub async fn insert_customer(&self, customer: &Customer) -> Result<CustomerId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO customers (name, email, phone, loyalty_points, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.loyalty_points)
        .bind(customer.created_at)
        .execute(&self.pool)
        .await?;
        Ok(CustomerId::new(result.last_insert_rowid()))
    }

    pub async fn insert_employee(&self, employee: &Employee) -> Result<EmployeeId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO employees (name, role, hourly_wage_cents, hire_date) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&employee.name)
        .bind(employee.role.as_str())
        .bind(employee.hourly_wage_cents)
        .bind(employee.hire_date)
        .execute(&self.pool)
        .await?;
        Ok(EmployeeId::new(result.last_insert_rowid()))
    }

    pub async fn insert_menu_item(&self, item: &MenuItem) -> Result<MenuItemId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO menu_items (name, category, price_cents, cost_cents, is_active) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&item.name)
        .bind(item.category.as_str())
        .bind(item.price_cents)
        .bind(item.cost_cents)
        .bind(item.is_active)
        .execute(&self.pool)
        .await?;
        Ok(MenuItemId::new(result.last_insert_rowid()))
    }

    pub async fn insert_stock_item(&self, stock: &StockItem) -> Result<StockItemId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO inventory (item_name, quantity_on_hand, reorder_level, unit) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&stock.item_name)
        .bind(stock.quantity_on_hand)
        .bind(stock.reorder_level)
        .bind(&stock.unit)
        .execute(&self.pool)
        .await?;
        Ok(StockItemId::new(result.last_insert_rowid()))
    }

    pub async fn insert_balance(&self, balance: &DailyBalance) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO account_balance (date, balance_cents, note) VALUES (?, ?, ?)")
            .bind(balance.date)
            .bind(balance.balance_cents)
            .bind(&balance.note)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Make sure a balance row exists for `date`, seeding it from the most
/// recent prior row (or the opening baseline) when absent.
async fn ensure_balance_row(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    date: NaiveDate,
) -> Result<(), StoreError> {
    let conn: &mut SqliteConnection = &mut *tx;
    let existing = sqlx::query("SELECT id FROM account_balance WHERE date = ?")
        .bind(date)
        .fetch_optional(&mut *conn)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let prior = sqlx::query(
        "SELECT id, date, balance_cents, note \
         FROM account_balance WHERE date < ? ORDER BY date DESC LIMIT 1",
    )
    .bind(date)
    .fetch_optional(&mut *conn)
    .await?;
    let prior = prior.as_ref().map(map_balance).transpose()?;

    let row = DailyBalance::roll_forward(prior.as_ref(), date);
    sqlx::query("INSERT INTO account_balance (date, balance_cents, note) VALUES (?, ?, ?)")
        .bind(row.date)
        .bind(row.balance_cents)
        .bind(&row.note)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

// ---- row mapping ---------------------------------------------------------

fn map_customer(row: &SqliteRow) -> Result<Customer, StoreError> {
    Ok(Customer {
        id: CustomerId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        loyalty_points: row.try_get("loyalty_points")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

fn map_employee(row: &SqliteRow) -> Result<Employee, StoreError> {
    let role: String = row.try_get("role")?;
    Ok(Employee {
        id: EmployeeId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        role: role.parse::<EmployeeRole>()?,
        hourly_wage_cents: row.try_get("hourly_wage_cents")?,
        hire_date: row.try_get("hire_date")?,
    })
}

fn map_menu_item(row: &SqliteRow) -> Result<MenuItem, StoreError> {
    let category: String = row.try_get("category")?;
    Ok(MenuItem {
        id: MenuItemId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        category: category.parse::<MenuCategory>()?,
        price_cents: row.try_get("price_cents")?,
        cost_cents: row.try_get("cost_cents")?,
        is_active: row.try_get("is_active")?,
    })
}

fn map_stock(row: &SqliteRow) -> Result<StockItem, StoreError> {
    Ok(StockItem {
        id: StockItemId::new(row.try_get("id")?),
        item_name: row.try_get("item_name")?,
        quantity_on_hand: row.try_get("quantity_on_hand")?,
        reorder_level: row.try_get("reorder_level")?,
        unit: row.try_get("unit")?,
    })
}

pub(crate) fn map_balance(row: &SqliteRow) -> Result<DailyBalance, StoreError> {
    Ok(DailyBalance {
        id: row.try_get("id")?,
        date: row.try_get("date")?,
        balance_cents: row.try_get("balance_cents")?,
        note: row.try_get("note")?,
    })
}

fn map_order(row: &SqliteRow) -> Result<Order, StoreError> {
    let method: String = row.try_get("payment_method")?;
    Ok(Order {
        id: OrderId::new(row.try_get("id")?),
        customer_id: row.try_get::<Option<i64>, _>("customer_id")?.map(CustomerId::new),
        employee_id: row.try_get::<Option<i64>, _>("employee_id")?.map(EmployeeId::new),
        order_time: row.try_get::<DateTime<Utc>, _>("order_time")?,
        total_cents: row.try_get("total_cents")?,
        payment_method: method.parse::<PaymentMethod>()?,
    })
}
