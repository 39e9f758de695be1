//! Money helpers.
//!
//! All monetary amounts are integer cents (smallest currency unit), which
//! keeps balance arithmetic exact. Floats appear only at display/input
//! boundaries.

/// Amount in cents.
pub type Cents = i64;

/// Render cents as a dollar string, e.g. `840` -> `"8.40"`.
pub fn dollars(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Convert a dollar amount to cents, rounding to the nearest cent.
pub fn from_dollars(amount: f64) -> Cents {
    (amount * 100.0).round() as Cents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dollars() {
        assert_eq!(dollars(0), "0.00");
        assert_eq!(dollars(5), "0.05");
        assert_eq!(dollars(840), "8.40");
        assert_eq!(dollars(100_450), "1004.50");
        assert_eq!(dollars(-70), "-0.70");
    }

    #[test]
    fn converts_from_dollars() {
        assert_eq!(from_dollars(4.50), 450);
        assert_eq!(from_dollars(0.70), 70);
        assert_eq!(from_dollars(1000.0), 100_000);
    }
}
