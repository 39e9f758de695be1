//! Read-only report queries over current state.
//!
//! These back the presentation surface: overview metrics, order listings
//! with resolved names, per-order receipts, and hourly sales buckets.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use serde::Serialize;
use sqlx::Row;

use brewsim_core::{Cents, OrderId};
use brewsim_sales::PaymentMethod;

use crate::error::StoreError;
use crate::store::ShopStore;

/// Headline metrics for the overview view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub customers: i64,
    pub employees: i64,
    pub menu_items: i64,
    pub orders: i64,
    pub latest_balance_cents: Option<Cents>,
}

/// One row of the orders table, names resolved. A `None` customer is a
/// walk-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub order_time: DateTime<Utc>,
    pub customer_name: Option<String>,
    pub employee_name: Option<String>,
    pub total_cents: Cents,
    pub payment_method: PaymentMethod,
}

/// One line of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub item_name: String,
    pub quantity: i64,
    pub unit_price_cents: Cents,
    pub subtotal_cents: Cents,
}

/// Full receipt for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub order_id: OrderId,
    pub order_time: DateTime<Utc>,
    pub customer_name: Option<String>,
    pub employee_name: Option<String>,
    pub payment_method: PaymentMethod,
    pub total_cents: Cents,
    pub lines: Vec<ReceiptLine>,
}

/// Sales aggregated over one local-time hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyBucket {
    pub hour: u32,
    pub orders: i64,
    pub total_cents: Cents,
}

impl ShopStore {
    pub async fn overview(&self) -> Result<Overview, StoreError> {
        let row = sqlx::query(
            "SELECT \
               (SELECT COUNT(*) FROM customers)  AS customers, \
               (SELECT COUNT(*) FROM employees)  AS employees, \
               (SELECT COUNT(*) FROM menu_items) AS menu_items, \
               (SELECT COUNT(*) FROM orders)     AS orders",
        )
        .fetch_one(&self.pool)
        .await?;
        let latest = self.latest_balance().await?;
        Ok(Overview {
            customers: row.try_get("customers")?,
            employees: row.try_get("employees")?,
            menu_items: row.try_get("menu_items")?,
            orders: row.try_get("orders")?,
            latest_balance_cents: latest.map(|b| b.balance_cents),
        })
    }

    /// Most recent orders first; `limit` of `None` returns them all.
    pub async fn order_summaries(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<OrderSummary>, StoreError> {
        let sql = "SELECT o.id, o.order_time, o.total_cents, o.payment_method, \
                          c.name AS customer_name, e.name AS employee_name \
                   FROM orders o \
                   LEFT JOIN customers c ON c.id = o.customer_id \
                   LEFT JOIN employees e ON e.id = o.employee_id \
                   ORDER BY o.order_time DESC, o.id DESC LIMIT ?";
        let rows = sqlx::query(sql)
            .bind(limit.unwrap_or(-1))
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| {
                let method: String = row.try_get("payment_method")?;
                Ok(OrderSummary {
                    id: OrderId::new(row.try_get("id")?),
                    order_time: row.try_get("order_time")?,
                    customer_name: row.try_get("customer_name")?,
                    employee_name: row.try_get("employee_name")?,
                    total_cents: row.try_get("total_cents")?,
                    payment_method: method.parse::<PaymentMethod>()?,
                })
            })
            .collect()
    }

    /// The "receipt" view for one order, or `None` if the id is unknown.
    pub async fn receipt(&self, id: OrderId) -> Result<Option<Receipt>, StoreError> {
        let Some(order) = self.order(id).await? else {
            return Ok(None);
        };

        let name_of = |table: &str| format!("SELECT name FROM {table} WHERE id = ?");
        let customer_name = match order.customer_id {
            Some(cid) => sqlx::query(&name_of("customers"))
                .bind(cid.value())
                .fetch_optional(&self.pool)
                .await?
                .map(|r| r.try_get::<String, _>("name"))
                .transpose()?,
            None => None,
        };
        let employee_name = match order.employee_id {
            Some(eid) => sqlx::query(&name_of("employees"))
                .bind(eid.value())
                .fetch_optional(&self.pool)
                .await?
                .map(|r| r.try_get::<String, _>("name"))
                .transpose()?,
            None => None,
        };

        let rows = sqlx::query(
            "SELECT mi.name AS item_name, oi.quantity, oi.unit_price_cents \
             FROM order_items oi \
             JOIN menu_items mi ON mi.id = oi.menu_item_id \
             WHERE oi.order_id = ? ORDER BY oi.id",
        )
        .bind(id.value())
        .fetch_all(&self.pool)
        .await?;
        let lines = rows
            .iter()
            .map(|row| {
                let quantity: i64 = row.try_get("quantity")?;
                let unit_price_cents: Cents = row.try_get("unit_price_cents")?;
                Ok(ReceiptLine {
                    item_name: row.try_get("item_name")?,
                    quantity,
                    unit_price_cents,
                    subtotal_cents: quantity * unit_price_cents,
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Some(Receipt {
            order_id: order.id,
            order_time: order.order_time,
            customer_name,
            employee_name,
            payment_method: order.payment_method,
            total_cents: order.total_cents,
            lines,
        }))
    }

    /// Orders bucketed by local-time hour for one local calendar date.
    /// Only hours with at least one order appear, in ascending hour order.
    pub async fn hourly_sales(
        &self,
        date: NaiveDate,
        offset: FixedOffset,
    ) -> Result<Vec<HourlyBucket>, StoreError> {
        let Some(day_start) = date.and_hms_opt(0, 0, 0) else {
            return Ok(Vec::new());
        };
        let Some(start_local) = offset.from_local_datetime(&day_start).single() else {
            return Ok(Vec::new());
        };
        let start = start_local.with_timezone(&Utc);
        let end = start + chrono::Duration::days(1);

        let rows = sqlx::query(
            "SELECT order_time, total_cents FROM orders \
             WHERE order_time >= ? AND order_time < ? ORDER BY order_time",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        let mut buckets: Vec<HourlyBucket> = Vec::new();
        for row in &rows {
            let time: DateTime<Utc> = row.try_get("order_time")?;
            let total: Cents = row.try_get("total_cents")?;
            let hour = time.with_timezone(&offset).hour();
            match buckets.iter_mut().find(|b| b.hour == hour) {
                Some(bucket) => {
                    bucket.orders += 1;
                    bucket.total_cents += total;
                }
                None => buckets.push(HourlyBucket {
                    hour,
                    orders: 1,
                    total_cents: total,
                }),
            }
        }
        buckets.sort_by_key(|b| b.hour);
        Ok(buckets)
    }
}
