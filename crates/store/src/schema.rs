//! SQLite schema. Idempotent: every statement is `IF NOT EXISTS`.

pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT NOT NULL,
    email           TEXT UNIQUE,
    phone           TEXT UNIQUE,
    loyalty_points  INTEGER NOT NULL DEFAULT 0,
    created_at      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS employees (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    name              TEXT NOT NULL,
    role              TEXT NOT NULL,
    hourly_wage_cents INTEGER NOT NULL,
    hire_date         TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS menu_items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    category    TEXT NOT NULL,
    price_cents INTEGER NOT NULL,
    cost_cents  INTEGER NOT NULL,
    is_active   INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS inventory (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    item_name        TEXT NOT NULL,
    quantity_on_hand REAL NOT NULL CHECK (quantity_on_hand >= 0),
    reorder_level    REAL NOT NULL,
    unit             TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS account_balance (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    date          TEXT NOT NULL UNIQUE,
    balance_cents INTEGER NOT NULL,
    note          TEXT
);

CREATE TABLE IF NOT EXISTS orders (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    customer_id    INTEGER REFERENCES customers(id),
    employee_id    INTEGER REFERENCES employees(id),
    order_time     TEXT NOT NULL,
    total_cents    INTEGER NOT NULL,
    payment_method TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS order_items (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    order_id         INTEGER NOT NULL REFERENCES orders(id),
    menu_item_id     INTEGER NOT NULL REFERENCES menu_items(id),
    quantity         INTEGER NOT NULL,
    unit_price_cents INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_orders_time ON orders(order_time);
CREATE INDEX IF NOT EXISTS idx_order_items_order ON order_items(order_id);
"#;
