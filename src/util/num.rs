/// Formats a number the way `print` shows it.
///
/// Mathematically integral values are printed without a decimal point, every
/// other value uses the shortest representation that reads back to the same
/// `f64`. Negative zero prints as `0`. Infinities print as `inf` and `-inf`,
/// and NaN prints as `nan`.
///
/// ## Example
/// ```
/// use novolang::util::num::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1000000000000000000000");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    // `Display` for f64 never uses exponent notation and drops a zero fraction.
    format!("{value}")
}
