use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use brewsim_core::{Cents, CustomerId, DomainError, DomainResult, EmployeeId, MenuItemId, OrderId};

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Mobile,
}

impl PaymentMethod {
    /// All accepted methods, for uniform random selection.
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Mobile => "mobile",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "mobile" => Ok(PaymentMethod::Mobile),
            other => Err(DomainError::validation(format!("unknown payment method: {other}"))),
        }
    }
}

/// One order line: menu item, quantity, unit price at time of sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub quantity: i64,
    pub unit_price_cents: Cents,
}

impl OrderLine {
    pub fn subtotal_cents(&self) -> Cents {
        self.quantity * self.unit_price_cents
    }
}

/// An order being composed, before it is persisted.
///
/// The total is derived from the lines rather than stored, so
/// `total == Σ quantity × unit_price` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_id: Option<CustomerId>,
    pub employee_id: Option<EmployeeId>,
    pub order_time: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    lines: Vec<OrderLine>,
}

impl OrderDraft {
    pub fn new(
        customer_id: Option<CustomerId>,
        employee_id: Option<EmployeeId>,
        order_time: DateTime<Utc>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            customer_id,
            employee_id,
            order_time,
            payment_method,
            lines: Vec::new(),
        }
    }

    pub fn add_line(
        &mut self,
        menu_item_id: MenuItemId,
        quantity: i64,
        unit_price_cents: Cents,
    ) -> DomainResult<()> {
        if quantity < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if unit_price_cents < 0 {
            return Err(DomainError::validation("unit price cannot be negative"));
        }
        self.lines.push(OrderLine {
            menu_item_id,
            quantity,
            unit_price_cents,
        });
        Ok(())
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_cents(&self) -> Cents {
        self.lines.iter().map(OrderLine::subtotal_cents).sum()
    }
}

/// A persisted order. Immutable once the total is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: Option<CustomerId>,
    pub employee_id: Option<EmployeeId>,
    pub order_time: DateTime<Utc>,
    pub total_cents: Cents,
    pub payment_method: PaymentMethod,
}
