//! Number formatting helpers for the catalog views.

/// Format a money value with exactly two decimal places
///
/// # Examples
///
/// ```
/// let formatted = frontend::shared::number_format::format_money(109.95);
/// assert_eq!(formatted, "109.95");
/// ```
pub fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(109.95), "109.95");
        assert_eq!(format_money(12.5), "12.50");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(55.999), "56.00");
    }
}
