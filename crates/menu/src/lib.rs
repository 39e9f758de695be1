//! Menu catalog domain module.

pub mod item;

pub use item::{MenuCategory, MenuItem};
