/// Fixed English month abbreviations used by every report view.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_name(month_index: usize) -> &'static str {
    MONTH_NAMES[month_index]
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_cover_the_calendar() {
        assert_eq!(month_name(0), "Jan");
        assert_eq!(month_name(11), "Dec");
        assert_eq!(MONTH_NAMES.len(), 12);
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(1250.505), 1250.51);
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(round2(0.004), 0.0);
    }
}
