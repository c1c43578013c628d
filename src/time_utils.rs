use js_sys::Date;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// `"<Month> <YYYY>"` for a zero-based month index, as `Date.getMonth()` returns it.
pub fn month_label(month_index: u32, year: u32) -> String {
    let name = MONTH_NAMES.get(month_index as usize).copied().unwrap_or("");
    format!("{} {}", name, year)
}

/// Month label for the local system clock.
pub fn current_month_label() -> String {
    let date = Date::new_0();
    month_label(date.get_month(), date.get_full_year())
}

#[cfg(test)]
mod tests {
    use super::month_label;

    #[test]
    fn label_uses_zero_based_month() {
        assert_eq!(month_label(0, 2024), "January 2024");
        assert_eq!(month_label(11, 1999), "December 1999");
    }

    #[test]
    fn out_of_range_month_keeps_year() {
        assert_eq!(month_label(12, 2024), " 2024");
    }
}
