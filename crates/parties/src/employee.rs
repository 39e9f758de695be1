use chrono::NaiveDate;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use brewsim_core::{Cents, DomainError, DomainResult, EmployeeId};

/// Shop staff roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeRole {
    Barista,
    Cashier,
    Manager,
}

impl EmployeeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeRole::Barista => "barista",
            EmployeeRole::Cashier => "cashier",
            EmployeeRole::Manager => "manager",
        }
    }
}

impl FromStr for EmployeeRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "barista" => Ok(EmployeeRole::Barista),
            "cashier" => Ok(EmployeeRole::Cashier),
            "manager" => Ok(EmployeeRole::Manager),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}

/// An employee on the roster. Static after seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: EmployeeRole,
    pub hourly_wage_cents: Cents,
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Validate and build an employee that has not been persisted yet.
    pub fn new(
        name: impl Into<String>,
        role: EmployeeRole,
        hourly_wage_cents: Cents,
        hire_date: NaiveDate,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if hourly_wage_cents <= 0 {
            return Err(DomainError::validation("hourly wage must be positive"));
        }
        Ok(Self {
            id: EmployeeId::unassigned(),
            name,
            role,
            hourly_wage_cents,
            hire_date,
        })
    }
}
