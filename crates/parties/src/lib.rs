//! Parties domain module: the people side of the shop.
//!
//! Customers and employees are created during seeding and static afterwards;
//! orders only reference them by id.

pub mod customer;
pub mod employee;

pub use customer::Customer;
pub use employee::{Employee, EmployeeRole};
